//! Placeholder substitution over the variants of one hierarchy.

use sealforge_config::NestedPlaceholderPolicy;
use tracing::debug;

use crate::error::GenerationError;
use crate::model::{
    ConstructorParameter, DeclarationKind, HierarchyDeclaration, SpecializationBinding, TypeRef,
    VariantDeclaration,
};

/// Produces the specialized variants of `declaration` for `binding`.
///
/// Variants come back in source order. Object and interface variants are
/// copied as-is; class variants get every whole-parameter placeholder replaced
/// by the binding's type. Parameter order, count, names, mutability and
/// annotations never change.
///
/// # Errors
///
/// - [`GenerationError::UnsupportedVariantShape`] for variants that are not a
///   class, interface or object, or for an object/interface that declares
///   constructor parameters.
/// - [`GenerationError::NestedPlaceholderUsage`] when a parameter nests the
///   placeholder in a type argument and `nested` is
///   [`NestedPlaceholderPolicy::Reject`].
pub fn specialize_variants(
    declaration: &HierarchyDeclaration,
    binding: &SpecializationBinding,
    nested: NestedPlaceholderPolicy,
) -> Result<Vec<VariantDeclaration>, GenerationError> {
    declaration
        .variants
        .iter()
        .map(|variant| specialize_variant(declaration, variant, binding, nested))
        .collect()
}

fn specialize_variant(
    declaration: &HierarchyDeclaration,
    variant: &VariantDeclaration,
    binding: &SpecializationBinding,
    nested: NestedPlaceholderPolicy,
) -> Result<VariantDeclaration, GenerationError> {
    match variant.kind {
        DeclarationKind::Class => {
            let parameters = variant
                .parameters
                .iter()
                .enumerate()
                .map(|(index, parameter)| {
                    substitute_parameter(declaration, variant, index, parameter, binding, nested)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(VariantDeclaration {
                parameters,
                ..variant.clone()
            })
        }
        DeclarationKind::Object | DeclarationKind::Interface => {
            if variant.parameters.is_empty() {
                Ok(variant.clone())
            } else {
                Err(unsupported(
                    declaration,
                    variant,
                    format!(
                        "{} declares {} constructor parameter(s)",
                        variant.kind,
                        variant.parameters.len()
                    ),
                ))
            }
        }
        DeclarationKind::EnumClass
        | DeclarationKind::EnumEntry
        | DeclarationKind::AnnotationClass => Err(unsupported(
            declaration,
            variant,
            format!("{} is not a class, interface or object", variant.kind),
        )),
    }
}

fn substitute_parameter(
    declaration: &HierarchyDeclaration,
    variant: &VariantDeclaration,
    index: usize,
    parameter: &ConstructorParameter,
    binding: &SpecializationBinding,
    nested: NestedPlaceholderPolicy,
) -> Result<ConstructorParameter, GenerationError> {
    match &parameter.ty {
        TypeRef::Placeholder => Ok(ConstructorParameter {
            ty: TypeRef::Concrete(binding.ty.clone()),
            ..parameter.clone()
        }),
        ty if ty.has_nested_placeholder() => match nested {
            NestedPlaceholderPolicy::Reject => Err(GenerationError::NestedPlaceholderUsage {
                declaration: declaration.name.clone(),
                variant: variant.name.clone(),
                parameter: parameter.display_name(index).into_owned(),
                ty: ty.to_string(),
            }),
            NestedPlaceholderPolicy::Preserve => {
                debug!(
                    event = "nested_placeholder_preserved",
                    declaration = %declaration.name,
                    variant = %variant.name,
                    parameter = %parameter.display_name(index),
                );
                Ok(parameter.clone())
            }
        },
        TypeRef::Concrete(_) => Ok(parameter.clone()),
    }
}

fn unsupported(
    declaration: &HierarchyDeclaration,
    variant: &VariantDeclaration,
    reason: String,
) -> GenerationError {
    GenerationError::UnsupportedVariantShape {
        declaration: declaration.name.clone(),
        variant: variant.name.clone(),
        reason,
    }
}

#[cfg(test)]
mod tests;
