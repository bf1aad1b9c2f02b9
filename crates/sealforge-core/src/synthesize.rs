//! Assembly of specialized variants into a generated hierarchy.

use crate::model::{
    DeclarationKind, GeneratedHierarchy, GeneratedVariant, HierarchyDeclaration, QualifiedName,
    SpecializationBinding, Supertype, VariantDeclaration,
};

/// Builds the generated hierarchy named `name` from specialized `variants`.
///
/// Kind, modifiers and annotations are copied from the source declaration,
/// except usages of `trigger_annotation`. Every variant is attached to the
/// generated type the same way it was attached to the source type: extending
/// a class parent, implementing an interface parent.
pub fn synthesize(
    declaration: &HierarchyDeclaration,
    binding: &SpecializationBinding,
    name: QualifiedName,
    variants: Vec<VariantDeclaration>,
    trigger_annotation: &str,
) -> GeneratedHierarchy {
    let annotations = declaration
        .annotations
        .iter()
        .filter(|annotation| !annotation.is(trigger_annotation))
        .cloned()
        .collect();

    let variants = variants
        .into_iter()
        .map(|variant| GeneratedVariant {
            supertype: supertype_for(declaration.kind, &name),
            declaration: variant,
        })
        .collect();

    GeneratedHierarchy {
        source: declaration.name.clone(),
        kind: declaration.kind,
        modifiers: declaration.modifiers.clone(),
        annotations,
        binding: binding.clone(),
        variants,
        name,
    }
}

fn supertype_for(parent_kind: DeclarationKind, parent: &QualifiedName) -> Supertype {
    match parent_kind {
        DeclarationKind::Interface => Supertype::Implements(parent.clone()),
        // Validation admits only classes and interfaces as parents.
        _ => Supertype::Extends(parent.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotationUsage, Modifier, TypeName};

    fn binding() -> SpecializationBinding {
        SpecializationBinding::new(None, TypeName::new("kotlin.String"))
    }

    fn variants() -> Vec<VariantDeclaration> {
        vec![
            VariantDeclaration::class("Success"),
            VariantDeclaration::object("Loading"),
            VariantDeclaration::object("Error"),
        ]
    }

    #[test]
    fn test_interface_parent_is_implemented() {
        let decl = HierarchyDeclaration::sealed_interface("com.example.UIState")
            .with_modifier(Modifier::Public);
        let name = QualifiedName::new("com.example.StringUIState");
        let generated = synthesize(&decl, &binding(), name.clone(), variants(), "ExtensiveSealed");

        assert_eq!(generated.name, name);
        assert_eq!(generated.source.as_str(), "com.example.UIState");
        assert_eq!(generated.kind, DeclarationKind::Interface);
        assert_eq!(generated.modifiers, vec![Modifier::Sealed, Modifier::Public]);
        let names: Vec<_> = generated
            .variants
            .iter()
            .map(|v| v.declaration.name.as_str())
            .collect();
        assert_eq!(names, vec!["Success", "Loading", "Error"]);
        assert!(generated
            .variants
            .iter()
            .all(|v| v.supertype == Supertype::Implements(name.clone())));
    }

    #[test]
    fn test_class_parent_is_extended() {
        let decl = HierarchyDeclaration::sealed_class("com.example.UIState");
        let name = QualifiedName::new("com.example.IntUIState");
        let generated = synthesize(&decl, &binding(), name.clone(), variants(), "ExtensiveSealed");

        assert!(generated
            .variants
            .iter()
            .all(|v| v.supertype == Supertype::Extends(name.clone())));
    }

    #[test]
    fn test_trigger_annotation_is_dropped() {
        let decl = HierarchyDeclaration::sealed_interface("com.example.UIState")
            .with_annotation(AnnotationUsage::new("com.example.Immutable"))
            .with_annotation(
                AnnotationUsage::new("sealforge.annotations.ExtensiveSealed")
                    .with_argument("models", "[]"),
            )
            .with_annotation(AnnotationUsage::new("kotlinx.serialization.Serializable"));
        let generated = synthesize(
            &decl,
            &binding(),
            QualifiedName::new("com.example.StringUIState"),
            Vec::new(),
            "ExtensiveSealed",
        );

        let kept: Vec<_> = generated
            .annotations
            .iter()
            .map(|a| a.annotation.simple_name())
            .collect();
        assert_eq!(kept, vec!["Immutable", "Serializable"]);
    }
}
