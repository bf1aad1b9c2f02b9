//! Tests for placeholder substitution.

use super::*;
use crate::model::{AnnotationUsage, TypeName};

fn string_binding() -> SpecializationBinding {
    SpecializationBinding::new(None, TypeName::new("kotlin.String"))
}

fn ui_state() -> HierarchyDeclaration {
    HierarchyDeclaration::sealed_interface("com.example.UIState")
        .with_variant(
            VariantDeclaration::class("Success")
                .with_parameter(ConstructorParameter::new("payload", TypeRef::Placeholder))
                .with_parameter(
                    ConstructorParameter::new("message", TypeRef::concrete("kotlin.String"))
                        .mutable()
                        .with_annotation(AnnotationUsage::new("kotlinx.serialization.SerialName")),
                ),
        )
        .with_variant(VariantDeclaration::object("Loading"))
        .with_variant(VariantDeclaration::interface("Failure"))
}

#[test]
fn test_placeholder_is_replaced_and_rest_copied() {
    let decl = ui_state();
    let variants =
        specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject).unwrap();

    assert_eq!(variants.len(), 3);
    let success = &variants[0];
    assert_eq!(success.name, "Success");
    assert_eq!(
        success.parameters[0].ty,
        TypeRef::Concrete(TypeName::new("kotlin.String"))
    );
    assert_eq!(success.parameters[0].name.as_deref(), Some("payload"));
    assert_eq!(success.parameters[1], decl.variants[0].parameters[1]);
}

#[test]
fn test_objects_and_interfaces_are_unchanged() {
    let decl = ui_state();
    let variants =
        specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject).unwrap();

    assert_eq!(variants[1], decl.variants[1]);
    assert_eq!(variants[2], decl.variants[2]);
}

#[test]
fn test_positional_parameters_keep_their_slot() {
    let decl = HierarchyDeclaration::sealed_class("a.Result").with_variant(
        VariantDeclaration::class("Pair")
            .with_parameter(ConstructorParameter::positional(TypeRef::concrete("kotlin.Int")))
            .with_parameter(ConstructorParameter::positional(TypeRef::Placeholder)),
    );
    let variants =
        specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject).unwrap();

    let params = &variants[0].parameters;
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].ty, TypeRef::concrete("kotlin.Int"));
    assert_eq!(params[1].ty, TypeRef::concrete("kotlin.String"));
    assert!(params[1].name.is_none());
    assert_eq!(params[1].display_name(1), "param1");
}

#[test]
fn test_class_without_parameters() {
    let decl = HierarchyDeclaration::sealed_class("a.State")
        .with_variant(VariantDeclaration::class("Empty"));
    let variants =
        specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject).unwrap();

    assert_eq!(variants[0].kind, DeclarationKind::Class);
    assert!(variants[0].parameters.is_empty());
}

#[test]
fn test_nested_placeholder_is_rejected() {
    let list = TypeRef::Concrete(
        TypeName::new("kotlin.collections.List").with_argument(TypeRef::Placeholder),
    );
    let decl = HierarchyDeclaration::sealed_interface("a.UIState").with_variant(
        VariantDeclaration::class("Page").with_parameter(ConstructorParameter::new("items", list)),
    );

    let err = specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject)
        .unwrap_err();
    match err {
        GenerationError::NestedPlaceholderUsage {
            variant, parameter, ..
        } => {
            assert_eq!(variant, "Page");
            assert_eq!(parameter, "items");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nested_placeholder_is_preserved() {
    let list = TypeRef::Concrete(
        TypeName::new("kotlin.collections.List").with_argument(TypeRef::Placeholder),
    );
    let decl = HierarchyDeclaration::sealed_interface("a.UIState").with_variant(
        VariantDeclaration::class("Page")
            .with_parameter(ConstructorParameter::new("items", list.clone())),
    );

    let variants =
        specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Preserve).unwrap();
    assert_eq!(variants[0].parameters[0].ty, list);
}

#[test]
fn test_unsupported_variant_kind() {
    let decl = HierarchyDeclaration::sealed_interface("a.UIState")
        .with_variant(VariantDeclaration::new("Mode", DeclarationKind::EnumClass));

    let err = specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject)
        .unwrap_err();
    assert!(matches!(err, GenerationError::UnsupportedVariantShape { .. }));
    assert!(err.to_string().contains("enum class"));
}

#[test]
fn test_object_with_parameters_is_unsupported() {
    let decl = HierarchyDeclaration::sealed_interface("a.UIState").with_variant(
        VariantDeclaration::object("Loading")
            .with_parameter(ConstructorParameter::new("x", TypeRef::Placeholder)),
    );

    assert!(matches!(
        specialize_variants(&decl, &string_binding(), NestedPlaceholderPolicy::Reject),
        Err(GenerationError::UnsupportedVariantShape { .. })
    ));
}
