//! Keep rules for generated variants.

use crate::model::{DeclarationKind, GeneratedHierarchy, RetentionDirective};

/// Returns one keep rule per generated variant, in variant order.
///
/// Class variants list their erased constructor parameter types after
/// substitution; interfaces and objects get an empty list so that their names
/// are still retained.
pub fn retention_directives(hierarchy: &GeneratedHierarchy) -> Vec<RetentionDirective> {
    hierarchy
        .variants
        .iter()
        .map(|variant| {
            let declaration = &variant.declaration;
            let parameter_types = match declaration.kind {
                DeclarationKind::Class => declaration
                    .parameters
                    .iter()
                    .map(|parameter| parameter.ty.erased_name().to_string())
                    .collect(),
                _ => Vec::new(),
            };
            RetentionDirective {
                target: hierarchy.variant_binary_name(declaration),
                kind: declaration.kind,
                parameter_types,
            }
        })
        .collect()
}
