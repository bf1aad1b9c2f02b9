//! Source-side declarations: the generic hierarchy and its variants.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{QualifiedName, TypeName, TypeRef};

/// Kind of a type declaration as reported by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    /// Zero-instance singleton.
    Object,
    EnumClass,
    EnumEntry,
    AnnotationClass,
}

impl DeclarationKind {
    /// Returns the human readable keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Interface => "interface",
            DeclarationKind::Object => "object",
            DeclarationKind::EnumClass => "enum class",
            DeclarationKind::EnumEntry => "enum entry",
            DeclarationKind::AnnotationClass => "annotation class",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A declaration modifier token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Internal,
    Protected,
    Private,
    Sealed,
    Abstract,
    Open,
    Data,
    Value,
    /// Any modifier the model has no dedicated variant for, kept verbatim.
    Other(String),
}

impl Modifier {
    /// Returns the modifier as written in source.
    pub fn keyword(&self) -> &str {
        match self {
            Modifier::Public => "public",
            Modifier::Internal => "internal",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Sealed => "sealed",
            Modifier::Abstract => "abstract",
            Modifier::Open => "open",
            Modifier::Data => "data",
            Modifier::Value => "value",
            Modifier::Other(token) => token,
        }
    }
}

/// One argument of an annotation usage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnnotationArgument {
    /// Argument name; `None` for positional arguments.
    #[serde(default)]
    pub name: Option<String>,
    /// Resolved argument value in source form.
    pub value: String,
}

/// An annotation applied to a declaration or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnnotationUsage {
    /// Annotation type.
    pub annotation: QualifiedName,
    /// Arguments in source order.
    #[serde(default)]
    pub arguments: Vec<AnnotationArgument>,
}

impl AnnotationUsage {
    pub fn new(annotation: impl Into<String>) -> Self {
        AnnotationUsage {
            annotation: QualifiedName::new(annotation),
            arguments: Vec::new(),
        }
    }

    /// Adds a named argument.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(AnnotationArgument {
            name: Some(name.into()),
            value: value.into(),
        });
        self
    }

    /// Adds a positional argument.
    pub fn with_positional(mut self, value: impl Into<String>) -> Self {
        self.arguments.push(AnnotationArgument {
            name: None,
            value: value.into(),
        });
        self
    }

    /// Returns true if this usage is of the annotation `name` (simple or qualified).
    pub fn is(&self, name: &str) -> bool {
        self.annotation.matches(name)
    }
}

/// One primary-constructor slot of a class variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructorParameter {
    /// Declared name; positional parameters have none.
    #[serde(default)]
    pub name: Option<String>,
    /// Declared type.
    pub ty: TypeRef,
    /// Whether the backing property is mutable.
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub annotations: Vec<AnnotationUsage>,
}

impl ConstructorParameter {
    /// Creates a named, immutable parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        ConstructorParameter {
            name: Some(name.into()),
            ty,
            mutable: false,
            annotations: Vec::new(),
        }
    }

    /// Creates an unnamed parameter.
    pub fn positional(ty: TypeRef) -> Self {
        ConstructorParameter {
            name: None,
            ty,
            mutable: false,
            annotations: Vec::new(),
        }
    }

    /// Marks the parameter as mutable.
    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Returns the declared name, or `param<index>` for unnamed parameters.
    pub fn display_name(&self, index: usize) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("param{index}")),
        }
    }
}

/// One member of a closed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VariantDeclaration {
    /// Simple name; never changed by specialization.
    pub name: String,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationUsage>,
    /// Primary constructor parameters; empty for interfaces and objects.
    #[serde(default)]
    pub parameters: Vec<ConstructorParameter>,
}

impl VariantDeclaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        VariantDeclaration {
            name: name.into(),
            kind,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Creates a class variant.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    /// Creates an interface variant.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Interface)
    }

    /// Creates a singleton object variant.
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Object)
    }

    pub fn with_parameter(mut self, parameter: ConstructorParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// Identity of the source that defines a declaration.
///
/// Only used by emitters to record build dependencies; the core never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationHandle(Option<PathBuf>);

impl DeclarationHandle {
    /// A declaration defined in `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        DeclarationHandle(Some(path.into()))
    }

    /// A declaration with no backing source file.
    pub fn detached() -> Self {
        DeclarationHandle(None)
    }

    pub fn source_file(&self) -> Option<&Path> {
        self.0.as_deref()
    }
}

/// A specialization request as resolved by the front end, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawBinding {
    /// Display name; empty when the user did not give one.
    #[serde(default)]
    pub name: String,
    /// Concrete payload type.
    pub ty: TypeName,
}

impl RawBinding {
    pub fn new(name: impl Into<String>, ty: TypeName) -> Self {
        RawBinding {
            name: name.into(),
            ty,
        }
    }

    /// A binding without a display name.
    pub fn unnamed(ty: TypeName) -> Self {
        Self::new("", ty)
    }
}

/// A closed (sealed) sum type under transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HierarchyDeclaration {
    pub name: QualifiedName,
    pub kind: DeclarationKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub annotations: Vec<AnnotationUsage>,
    /// Direct variants in declaration order.
    #[serde(default)]
    pub variants: Vec<VariantDeclaration>,
    /// Bindings resolved from the trigger annotation; `None` if it had none.
    #[serde(default)]
    pub configuration: Option<Vec<RawBinding>>,
    #[serde(default)]
    pub origin: DeclarationHandle,
}

impl HierarchyDeclaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        HierarchyDeclaration {
            name: QualifiedName::new(name),
            kind,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            variants: Vec::new(),
            configuration: None,
            origin: DeclarationHandle::detached(),
        }
    }

    /// Creates a `sealed interface` declaration.
    pub fn sealed_interface(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Interface).with_modifier(Modifier::Sealed)
    }

    /// Creates a `sealed class` declaration.
    pub fn sealed_class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class).with_modifier(Modifier::Sealed)
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationUsage) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_variant(mut self, variant: VariantDeclaration) -> Self {
        self.variants.push(variant);
        self
    }

    /// Appends a binding to the configuration, creating it if absent.
    pub fn with_binding(mut self, binding: RawBinding) -> Self {
        self.configuration.get_or_insert_with(Vec::new).push(binding);
        self
    }

    pub fn with_origin(mut self, origin: DeclarationHandle) -> Self {
        self.origin = origin;
        self
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    pub fn has_modifier(&self, modifier: &Modifier) -> bool {
        self.modifiers.contains(modifier)
    }
}

/// One requested instantiation of a generic hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SpecializationBinding {
    /// Display name used for the generated type instead of the type's simple name.
    pub name: Option<String>,
    /// Concrete type that replaces the placeholder.
    pub ty: TypeName,
}

impl SpecializationBinding {
    pub fn new(name: Option<String>, ty: TypeName) -> Self {
        SpecializationBinding { name, ty }
    }

    /// Returns the non-empty display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl From<RawBinding> for SpecializationBinding {
    fn from(raw: RawBinding) -> Self {
        let name = if raw.name.is_empty() {
            None
        } else {
            Some(raw.name)
        };
        SpecializationBinding { name, ty: raw.ty }
    }
}

impl fmt::Display for SpecializationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_name() {
            Some(name) => write!(f, "{name} = {}", self.ty),
            None => write!(f, "{}", self.ty),
        }
    }
}
