//! The `UIState` fixture.
//!
//! A sealed interface with one data class carrying the placeholder and two
//! objects, bound to `kotlin.String` and `kotlin.Int`.
//!
//! # Example
//!
//! ```
//! use sealforge_test::ui_state::ui_state;
//!
//! let declaration = ui_state();
//! assert_eq!(declaration.variants.len(), 3);
//! assert_eq!(declaration.configuration.as_ref().map(Vec::len), Some(2));
//! ```

use sealforge_core::model::{
    AnnotationUsage, ConstructorParameter, DeclarationHandle, HierarchyDeclaration, Modifier,
    RawBinding, TypeName, TypeRef, VariantDeclaration,
};

/// Qualified name of the fixture declaration.
pub const UI_STATE: &str = "com.example.UIState";

/// Source file the fixture claims to come from.
pub const UI_STATE_SOURCE: &str = "src/main/kotlin/com/example/UIState.kt";

/// Returns `kotlin.<name>` as a type.
pub fn kotlin_type(name: &str) -> TypeName {
    TypeName::new(format!("kotlin.{name}"))
}

/// `UIState` bound to `String` and `Int`.
pub fn ui_state() -> HierarchyDeclaration {
    ui_state_with(vec![
        RawBinding::unnamed(kotlin_type("String")),
        RawBinding::unnamed(kotlin_type("Int")),
    ])
}

/// `UIState` with the given bindings.
pub fn ui_state_with(bindings: Vec<RawBinding>) -> HierarchyDeclaration {
    let mut declaration = HierarchyDeclaration::sealed_interface(UI_STATE)
        .with_modifier(Modifier::Public)
        .with_annotation(
            AnnotationUsage::new("sealforge.annotations.ExtensiveSealed")
                .with_argument("models", "[String, Int]"),
        )
        .with_variant(
            VariantDeclaration::class("Success")
                .with_modifier(Modifier::Data)
                .with_parameter(ConstructorParameter::new("data", TypeRef::Placeholder)),
        )
        .with_variant(VariantDeclaration::object("Loading"))
        .with_variant(VariantDeclaration::object("Error"))
        .with_origin(DeclarationHandle::file(UI_STATE_SOURCE));
    declaration.configuration = Some(bindings);
    declaration
}
