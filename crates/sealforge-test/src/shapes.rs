//! Declarations covering the less common variant shapes and failures.

use sealforge_core::model::{
    AnnotationUsage, ConstructorParameter, DeclarationHandle, DeclarationKind,
    HierarchyDeclaration, Modifier, RawBinding, TypeName, TypeRef, VariantDeclaration,
};

use crate::ui_state::kotlin_type;

/// A sealed class with positional, mutable, annotated and nullable parameters.
///
/// Bound once, under the display name `card`.
pub fn payment_result() -> HierarchyDeclaration {
    HierarchyDeclaration::sealed_class("com.example.pay.PaymentResult")
        .with_modifier(Modifier::Internal)
        .with_annotation(
            AnnotationUsage::new("sealforge.annotations.ExtensiveSealed")
                .with_argument("models", "[ExtensiveModel(Card::class, \"card\")]"),
        )
        .with_annotation(AnnotationUsage::new("kotlinx.serialization.Serializable"))
        .with_variant(
            VariantDeclaration::class("Accepted")
                .with_modifier(Modifier::Data)
                .with_parameter(ConstructorParameter::new("value", TypeRef::Placeholder))
                .with_parameter(
                    ConstructorParameter::new("attempts", TypeRef::concrete("kotlin.Int"))
                        .mutable(),
                ),
        )
        .with_variant(
            VariantDeclaration::class("Declined")
                .with_parameter(
                    ConstructorParameter::positional(TypeRef::Placeholder).with_annotation(
                        AnnotationUsage::new("kotlinx.serialization.SerialName")
                            .with_positional("\"declined\""),
                    ),
                )
                .with_parameter(ConstructorParameter::new(
                    "reason",
                    TypeRef::Concrete(kotlin_type("String").nullable()),
                )),
        )
        .with_variant(VariantDeclaration::object("Pending"))
        .with_binding(RawBinding::new("card", TypeName::new("com.example.pay.Card")))
        .with_origin(DeclarationHandle::file(
            "src/main/kotlin/com/example/pay/PaymentResult.kt",
        ))
}

/// A plain, non-sealed class carrying a binding.
pub fn open_class() -> HierarchyDeclaration {
    HierarchyDeclaration::new("com.example.Plain", DeclarationKind::Class)
        .with_modifier(Modifier::Open)
        .with_variant(VariantDeclaration::object("Only"))
        .with_binding(RawBinding::unnamed(kotlin_type("String")))
}

/// A sealed class whose only variant nests the placeholder in a list.
pub fn page_with_list() -> HierarchyDeclaration {
    HierarchyDeclaration::sealed_class("com.example.Page")
        .with_variant(
            VariantDeclaration::class("Items").with_parameter(ConstructorParameter::new(
                "items",
                TypeRef::Concrete(
                    TypeName::new("kotlin.collections.List").with_argument(TypeRef::Placeholder),
                ),
            )),
        )
        .with_binding(RawBinding::unnamed(kotlin_type("String")))
}
