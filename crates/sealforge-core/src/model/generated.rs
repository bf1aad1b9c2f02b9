//! Generator output: specialized hierarchies and keep rules.

use serde::{Deserialize, Serialize};

use super::{
    AnnotationUsage, DeclarationKind, Modifier, QualifiedName, SpecializationBinding,
    VariantDeclaration,
};

/// How a generated variant relates to its generated parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Supertype {
    /// The parent is a class; the variant extends it.
    Extends(QualifiedName),
    /// The parent is an interface; the variant implements it.
    Implements(QualifiedName),
}

impl Supertype {
    pub fn parent(&self) -> &QualifiedName {
        match self {
            Supertype::Extends(parent) | Supertype::Implements(parent) => parent,
        }
    }
}

/// A variant re-rooted under a generated hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratedVariant {
    /// Variant with the placeholder substituted.
    pub declaration: VariantDeclaration,
    pub supertype: Supertype,
}

/// One specialized hierarchy, produced for a (declaration, binding) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratedHierarchy {
    /// Generated qualified name.
    pub name: QualifiedName,
    /// The declaration this was specialized from.
    pub source: QualifiedName,
    pub kind: DeclarationKind,
    pub modifiers: Vec<Modifier>,
    /// Source annotations minus the trigger annotation.
    pub annotations: Vec<AnnotationUsage>,
    pub binding: SpecializationBinding,
    pub variants: Vec<GeneratedVariant>,
}

impl GeneratedHierarchy {
    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    /// Binary name of a variant nested in this hierarchy.
    pub fn variant_binary_name(&self, variant: &VariantDeclaration) -> String {
        self.name.nested_binary_name(&variant.name)
    }
}

/// A keep rule for reflection and shrinking tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetentionDirective {
    /// Binary name of the generated variant.
    pub target: String,
    pub kind: DeclarationKind,
    /// Erased constructor parameter types after substitution.
    pub parameter_types: Vec<String>,
}
