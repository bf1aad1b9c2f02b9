//! Generated type names.

use std::collections::BTreeMap;

use crate::model::{HierarchyDeclaration, QualifiedName, SpecializationBinding};

/// Title-cases the first character if it is lowercase and leaves the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = titlecase(first);
            out.push_str(chars.as_str());
            out
        }
        Some(_) => s.to_string(),
        None => String::new(),
    }
}

/// Titlecase mapping of one character.
///
/// Digraphs have dedicated titlecase forms; for other characters whose
/// uppercase form expands (`ß` to `SS`), only the first uppercase character
/// stays capital.
fn titlecase(c: char) -> String {
    match c {
        'ǆ' => "ǅ".to_string(),
        'ǉ' => "ǈ".to_string(),
        'ǌ' => "ǋ".to_string(),
        'ǳ' => "ǲ".to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut out = String::new();
            if let Some(head) = upper.next() {
                out.push(head);
            }
            out.extend(upper.flat_map(char::to_lowercase));
            out
        }
    }
}

/// Returns the prefix a binding contributes to generated names.
///
/// The display name wins when present, otherwise the concrete type's simple name.
pub fn model_name(binding: &SpecializationBinding) -> String {
    let base = binding
        .display_name()
        .unwrap_or_else(|| binding.ty.simple_name());
    capitalize_first(base)
}

/// Returns the name of the hierarchy generated for `binding`.
///
/// The generated type lives next to the source declaration. Variant names are
/// not part of this; they stay as declared.
pub fn generated_name(
    declaration: &HierarchyDeclaration,
    binding: &SpecializationBinding,
) -> QualifiedName {
    let simple = format!("{}{}", model_name(binding), declaration.simple_name());
    declaration.name.sibling(&simple)
}

/// Groups bindings whose generated names coincide.
///
/// Returns one entry per colliding name, each listing the offending bindings
/// in binding order. Names are ordered for stable reporting.
pub fn find_name_collisions<'a>(
    declaration: &HierarchyDeclaration,
    bindings: &'a [SpecializationBinding],
) -> Vec<(QualifiedName, Vec<&'a SpecializationBinding>)> {
    let mut by_name: BTreeMap<QualifiedName, Vec<&SpecializationBinding>> = BTreeMap::new();
    for binding in bindings {
        by_name
            .entry(generated_name(declaration, binding))
            .or_default()
            .push(binding);
    }
    by_name
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeName;

    fn ui_state() -> HierarchyDeclaration {
        HierarchyDeclaration::sealed_interface("com.example.UIState")
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("pokemon"), "Pokemon");
        assert_eq!(capitalize_first("Poster"), "Poster");
        assert_eq!(capitalize_first("iPhone"), "IPhone");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_uses_titlecase() {
        assert_eq!(capitalize_first("ßtate"), "Sstate");
        assert_eq!(capitalize_first("ǆungla"), "ǅungla");
        assert_eq!(capitalize_first("ﬁle"), "File");
        assert_eq!(capitalize_first("Ǆungla"), "Ǆungla");
        assert_eq!(capitalize_first("1st"), "1st");
    }

    #[test]
    fn test_name_from_type_simple_name() {
        let binding = SpecializationBinding::new(None, TypeName::new("kotlin.String"));
        assert_eq!(
            generated_name(&ui_state(), &binding).as_str(),
            "com.example.StringUIState"
        );
    }

    #[test]
    fn test_name_from_display_name() {
        let binding = SpecializationBinding::new(
            Some("pokemon".to_string()),
            TypeName::new("com.example.Pokemon"),
        );
        assert_eq!(
            generated_name(&ui_state(), &binding).simple_name(),
            "PokemonUIState"
        );
    }

    #[test]
    fn test_empty_display_name_falls_back_to_type() {
        let binding =
            SpecializationBinding::new(Some(String::new()), TypeName::new("kotlin.Int"));
        assert_eq!(model_name(&binding), "Int");
    }

    #[test]
    fn test_collisions_are_grouped() {
        let bindings = vec![
            SpecializationBinding::new(None, TypeName::new("kotlin.String")),
            SpecializationBinding::new(Some("string".to_string()), TypeName::new("kotlin.Int")),
            SpecializationBinding::new(None, TypeName::new("kotlin.Long")),
        ];
        let collisions = find_name_collisions(&ui_state(), &bindings);

        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].0.simple_name(), "StringUIState");
        assert_eq!(collisions[0].1.len(), 2);
        assert_eq!(collisions[0].1[0].ty.erased_name(), "kotlin.String");
    }

    #[test]
    fn test_distinct_names_do_not_collide() {
        let bindings = vec![
            SpecializationBinding::new(None, TypeName::new("kotlin.String")),
            SpecializationBinding::new(None, TypeName::new("kotlin.Int")),
        ];
        assert!(find_name_collisions(&ui_state(), &bindings).is_empty());
    }
}
