//! Names and type references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualified name of the placeholder marker type.
///
/// Used when an unsubstituted placeholder has to be printed or erased.
pub const PLACEHOLDER_TYPE: &str = "sealforge.Extensive";

/// A fully qualified declaration name such as `com.example.UIState`.
///
/// Both `.` and `::` are accepted as segment separators so front ends for
/// either convention can share the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Creates a qualified name from its textual form.
    pub fn new(name: impl Into<String>) -> Self {
        QualifiedName(name.into())
    }

    /// Returns the full name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last segment.
    pub fn simple_name(&self) -> &str {
        match split_last_segment(&self.0) {
            Some((_, _, simple)) => simple,
            None => &self.0,
        }
    }

    /// Returns everything before the simple name, or `None` for a top-level name.
    pub fn package(&self) -> Option<&str> {
        split_last_segment(&self.0).map(|(package, _, _)| package)
    }

    /// Returns a name with the same package and a different simple name.
    pub fn sibling(&self, simple_name: &str) -> QualifiedName {
        match split_last_segment(&self.0) {
            Some((package, separator, _)) => {
                QualifiedName(format!("{package}{separator}{simple_name}"))
            }
            None => QualifiedName(simple_name.to_string()),
        }
    }

    /// Returns the binary name of a member type nested in this one (`Outer$Inner`).
    pub fn nested_binary_name(&self, member: &str) -> String {
        format!("{}${}", self.0, member)
    }

    /// Returns true if `name` is this name or its simple name.
    pub fn matches(&self, name: &str) -> bool {
        self.0 == name || self.simple_name() == name
    }
}

fn split_last_segment(name: &str) -> Option<(&str, &'static str, &str)> {
    let dot = name.rfind('.').map(|i| (i, "."));
    let path = name.rfind("::").map(|i| (i, "::"));
    let (index, separator) = match (dot, path) {
        (Some(d), Some(p)) => {
            if d.0 > p.0 {
                d
            } else {
                p
            }
        }
        (Some(d), None) => d,
        (None, Some(p)) => p,
        (None, None) => return None,
    };
    Some((&name[..index], separator, &name[index + separator.len()..]))
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        QualifiedName::new(name)
    }
}

/// A resolved concrete type: a path, its type arguments, and nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TypeName {
    /// Fully qualified path of the type constructor.
    pub path: QualifiedName,
    /// Type arguments, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeRef>,
    /// Whether the type admits null.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl TypeName {
    /// Creates a non-generic, non-nullable type.
    pub fn new(path: impl Into<String>) -> Self {
        TypeName {
            path: QualifiedName::new(path),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Adds a type argument.
    pub fn with_argument(mut self, argument: TypeRef) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Marks the type as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Returns the simple name of the type constructor.
    pub fn simple_name(&self) -> &str {
        self.path.simple_name()
    }

    /// Returns the erased name, without arguments or nullability.
    pub fn erased_name(&self) -> &str {
        self.path.as_str()
    }

    /// Returns true if any type argument, at any depth, is the placeholder.
    pub fn contains_placeholder(&self) -> bool {
        self.arguments.iter().any(|argument| match argument {
            TypeRef::Placeholder => true,
            TypeRef::Concrete(inner) => inner.contains_placeholder(),
        })
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, argument) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{argument}")?;
            }
            f.write_str(">")?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

/// The declared type of a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// The generic payload marker replaced during specialization.
    Placeholder,
    /// Any other resolved type.
    Concrete(TypeName),
}

impl TypeRef {
    /// Shorthand for a concrete, non-generic type.
    pub fn concrete(path: impl Into<String>) -> Self {
        TypeRef::Concrete(TypeName::new(path))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, TypeRef::Placeholder)
    }

    /// Returns true if the placeholder occurs inside a type argument.
    ///
    /// A bare `Placeholder` is not nested.
    pub fn has_nested_placeholder(&self) -> bool {
        match self {
            TypeRef::Placeholder => false,
            TypeRef::Concrete(name) => name.contains_placeholder(),
        }
    }

    /// Returns the erased fully qualified name used by reflection tooling.
    pub fn erased_name(&self) -> &str {
        match self {
            TypeRef::Placeholder => PLACEHOLDER_TYPE,
            TypeRef::Concrete(name) => name.erased_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Placeholder => f.write_str(PLACEHOLDER_TYPE),
            TypeRef::Concrete(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_segments() {
        let name = QualifiedName::new("com.example.ui.UIState");
        assert_eq!(name.simple_name(), "UIState");
        assert_eq!(name.package(), Some("com.example.ui"));
        assert_eq!(name.sibling("StringUIState").as_str(), "com.example.ui.StringUIState");
        assert_eq!(
            name.nested_binary_name("Success"),
            "com.example.ui.UIState$Success"
        );
    }

    #[test]
    fn test_rust_path_segments() {
        let name = QualifiedName::new("std::string::String");
        assert_eq!(name.simple_name(), "String");
        assert_eq!(name.package(), Some("std::string"));
        assert_eq!(name.sibling("Other").as_str(), "std::string::Other");
    }

    #[test]
    fn test_top_level_name() {
        let name = QualifiedName::new("UiState");
        assert_eq!(name.simple_name(), "UiState");
        assert_eq!(name.package(), None);
        assert_eq!(name.sibling("I32UiState").as_str(), "I32UiState");
        assert!(name.matches("UiState"));
    }

    #[test]
    fn test_nested_placeholder_detection() {
        let list = TypeRef::Concrete(
            TypeName::new("kotlin.collections.List").with_argument(TypeRef::Placeholder),
        );
        assert!(list.has_nested_placeholder());
        assert!(!TypeRef::Placeholder.has_nested_placeholder());

        let deep = TypeRef::Concrete(
            TypeName::new("kotlin.collections.Map")
                .with_argument(TypeRef::concrete("kotlin.String"))
                .with_argument(list.clone()),
        );
        assert!(deep.has_nested_placeholder());
        assert!(!TypeRef::concrete("kotlin.Int").has_nested_placeholder());
    }

    #[test]
    fn test_display_and_erasure() {
        let ty = TypeName::new("kotlin.collections.List")
            .with_argument(TypeRef::concrete("kotlin.String"))
            .nullable();
        assert_eq!(ty.to_string(), "kotlin.collections.List<kotlin.String>?");
        assert_eq!(ty.erased_name(), "kotlin.collections.List");
        assert_eq!(TypeRef::Placeholder.erased_name(), PLACEHOLDER_TYPE);
    }
}
