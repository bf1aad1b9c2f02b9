//! Binding extraction.

use std::collections::HashSet;

use crate::model::{HierarchyDeclaration, RawBinding, SpecializationBinding};

/// Returns the declaration's bindings, deduplicated in first-occurrence order.
///
/// Two records are duplicates when both their display name and their concrete
/// type are structurally equal. An absent or empty configuration yields an
/// empty list.
pub fn extract_bindings(declaration: &HierarchyDeclaration) -> Vec<SpecializationBinding> {
    let Some(raw) = declaration.configuration.as_deref() else {
        return Vec::new();
    };

    let mut seen: HashSet<&RawBinding> = HashSet::with_capacity(raw.len());
    raw.iter()
        .filter(|binding| seen.insert(*binding))
        .cloned()
        .map(SpecializationBinding::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeName, TypeRef};

    fn declaration() -> HierarchyDeclaration {
        HierarchyDeclaration::sealed_interface("com.example.UIState")
    }

    #[test]
    fn test_missing_configuration_is_empty() {
        assert!(extract_bindings(&declaration()).is_empty());
    }

    #[test]
    fn test_empty_configuration_is_empty() {
        let mut decl = declaration();
        decl.configuration = Some(Vec::new());
        assert!(extract_bindings(&decl).is_empty());
    }

    #[test]
    fn test_duplicates_are_removed_in_first_occurrence_order() {
        let decl = declaration()
            .with_binding(RawBinding::unnamed(TypeName::new("kotlin.String")))
            .with_binding(RawBinding::unnamed(TypeName::new("kotlin.Int")))
            .with_binding(RawBinding::unnamed(TypeName::new("kotlin.String")))
            .with_binding(RawBinding::new("poster", TypeName::new("com.example.Poster")))
            .with_binding(RawBinding::unnamed(TypeName::new("kotlin.Int")));

        let bindings = extract_bindings(&decl);
        let types: Vec<_> = bindings.iter().map(|b| b.ty.erased_name()).collect();
        assert_eq!(
            types,
            vec!["kotlin.String", "kotlin.Int", "com.example.Poster"]
        );
        assert_eq!(bindings[2].display_name(), Some("poster"));
        assert_eq!(bindings[0].display_name(), None);
    }

    #[test]
    fn test_same_type_with_different_names_is_kept() {
        let decl = declaration()
            .with_binding(RawBinding::unnamed(TypeName::new("kotlin.String")))
            .with_binding(RawBinding::new("text", TypeName::new("kotlin.String")));

        assert_eq!(extract_bindings(&decl).len(), 2);
    }

    #[test]
    fn test_type_arguments_take_part_in_equality() {
        let list_of = |arg: &str| {
            TypeName::new("kotlin.collections.List").with_argument(TypeRef::concrete(arg))
        };
        let decl = declaration()
            .with_binding(RawBinding::unnamed(list_of("kotlin.String")))
            .with_binding(RawBinding::unnamed(list_of("kotlin.Int")))
            .with_binding(RawBinding::unnamed(list_of("kotlin.String")));

        assert_eq!(extract_bindings(&decl).len(), 2);
    }
}
