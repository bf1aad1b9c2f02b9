//! Declaration model shared by every stage of the pipeline.
//!
//! - [`HierarchyDeclaration`]: the generic sealed hierarchy and its bindings
//! - [`VariantDeclaration`]: one member of the hierarchy
//! - [`TypeRef`]: a parameter type, either the placeholder or a concrete type
//! - [`GeneratedHierarchy`] and [`RetentionDirective`]: generator output

mod declaration;
mod generated;
mod types;

pub use declaration::{
    AnnotationArgument, AnnotationUsage, ConstructorParameter, DeclarationHandle,
    DeclarationKind, HierarchyDeclaration, Modifier, RawBinding, SpecializationBinding,
    VariantDeclaration,
};
pub use generated::{GeneratedHierarchy, GeneratedVariant, RetentionDirective, Supertype};
pub use types::{QualifiedName, TypeName, TypeRef, PLACEHOLDER_TYPE};
