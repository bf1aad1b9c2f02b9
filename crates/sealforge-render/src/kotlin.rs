//! Kotlin source rendering of generated hierarchies.
//!
//! # Example
//!
//! ```
//! use sealforge_core::{CollectingEmitter, Generator};
//! use sealforge_core::model::{
//!     ConstructorParameter, HierarchyDeclaration, RawBinding, TypeName, TypeRef,
//!     VariantDeclaration,
//! };
//! use sealforge_render::KotlinRenderer;
//!
//! let declaration = HierarchyDeclaration::sealed_interface("com.example.UIState")
//!     .with_variant(
//!         VariantDeclaration::class("Success")
//!             .with_parameter(ConstructorParameter::new("data", TypeRef::Placeholder)),
//!     )
//!     .with_binding(RawBinding::unnamed(TypeName::new("kotlin.String")));
//!
//! let mut emitter = CollectingEmitter::new();
//! Generator::default().run(&[declaration], &mut emitter);
//!
//! let source = KotlinRenderer::default().render(&emitter.hierarchies[0]);
//! assert!(source.contains("sealed interface StringUIState {"));
//! assert!(source.contains("val `data`: kotlin.String,"));
//! ```

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use sealforge_config::OutputConfig;
use sealforge_core::model::{
    AnnotationUsage, ConstructorParameter, DeclarationKind, GeneratedHierarchy, GeneratedVariant,
    Modifier, QualifiedName, Supertype, TypeRef,
};

/// Comment placed at the top of every generated file.
pub const GENERATED_HEADER: &str =
    "// This file was generated by sealforge.\n// Do not modify this file.\n";

/// Renders a [`GeneratedHierarchy`] as a Kotlin source file.
#[derive(Debug, Clone)]
pub struct KotlinRenderer {
    indent: String,
    file_header: bool,
}

impl Default for KotlinRenderer {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}

impl KotlinRenderer {
    pub fn from_config(config: &OutputConfig) -> Self {
        KotlinRenderer {
            indent: " ".repeat(config.indent_width),
            file_header: config.file_header,
        }
    }

    /// Path of the generated file relative to the output root.
    ///
    /// `com.example.StringUIState` lands in `com/example/StringUIState.kt`.
    pub fn file_path(hierarchy: &GeneratedHierarchy) -> PathBuf {
        let mut path = package_dir(&hierarchy.name);
        path.push(format!("{}.kt", hierarchy.simple_name()));
        path
    }

    /// Renders the complete file.
    pub fn render(&self, hierarchy: &GeneratedHierarchy) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_file(&mut out, hierarchy);
        out
    }

    fn write_file(&self, out: &mut String, hierarchy: &GeneratedHierarchy) -> fmt::Result {
        if self.file_header {
            writeln!(out, "{GENERATED_HEADER}")?;
        }
        if let Some(package) = kotlin_package(&hierarchy.name) {
            writeln!(out, "package {package}")?;
            writeln!(out)?;
        }

        writeln!(out, "/**")?;
        writeln!(
            out,
            " * A specialized sealed {} of [{}] for `{}`.",
            hierarchy.kind,
            hierarchy.source.simple_name(),
            hierarchy.binding.ty
        )?;
        writeln!(out, " */")?;
        for annotation in &hierarchy.annotations {
            writeln!(out, "{}", Annotation(annotation))?;
        }
        writeln!(
            out,
            "{}{} {} {{",
            Modifiers(&hierarchy.modifiers),
            hierarchy.kind,
            hierarchy.simple_name()
        )?;

        for (i, variant) in hierarchy.variants.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.write_variant(out, variant)?;
        }

        writeln!(out, "}}")
    }

    fn write_variant(&self, out: &mut String, variant: &GeneratedVariant) -> fmt::Result {
        let declaration = &variant.declaration;
        let indent = &self.indent;
        for annotation in &declaration.annotations {
            writeln!(out, "{indent}{}", Annotation(annotation))?;
        }
        write!(
            out,
            "{indent}{}{} {}",
            Modifiers(&declaration.modifiers),
            declaration.kind,
            declaration.name
        )?;

        if declaration.kind == DeclarationKind::Class && !declaration.parameters.is_empty() {
            writeln!(out, "(")?;
            for (index, parameter) in declaration.parameters.iter().enumerate() {
                self.write_parameter(out, index, parameter)?;
            }
            write!(out, "{indent})")?;
        }

        writeln!(out, " : {}", SupertypeCall(&variant.supertype))
    }

    fn write_parameter(
        &self,
        out: &mut String,
        index: usize,
        parameter: &ConstructorParameter,
    ) -> fmt::Result {
        let indent = &self.indent;
        for annotation in &parameter.annotations {
            writeln!(out, "{indent}{indent}{}", Annotation(annotation))?;
        }
        writeln!(
            out,
            "{indent}{indent}{} `{}`: {},",
            if parameter.mutable { "var" } else { "val" },
            parameter.display_name(index),
            KotlinType(&parameter.ty)
        )
    }
}

fn kotlin_package(name: &QualifiedName) -> Option<String> {
    name.package().map(|package| package.replace("::", "."))
}

fn package_dir(name: &QualifiedName) -> PathBuf {
    kotlin_package(name)
        .map(|package| package.split('.').collect())
        .unwrap_or_default()
}

/// Modifier list in the order Kotlin style guides expect, with a trailing space.
struct Modifiers<'a>(&'a [Modifier]);

fn modifier_rank(modifier: &Modifier) -> u8 {
    match modifier {
        Modifier::Public | Modifier::Internal | Modifier::Protected | Modifier::Private => 0,
        Modifier::Sealed | Modifier::Abstract | Modifier::Open => 1,
        Modifier::Data | Modifier::Value => 2,
        Modifier::Other(_) => 3,
    }
}

impl fmt::Display for Modifiers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<&Modifier> = self.0.iter().collect();
        sorted.sort_by_key(|m| modifier_rank(m));
        for modifier in sorted {
            write!(f, "{} ", modifier.keyword())?;
        }
        Ok(())
    }
}

struct Annotation<'a>(&'a AnnotationUsage);

impl fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0.annotation)?;
        if self.0.arguments.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, argument) in self.0.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match &argument.name {
                Some(name) => write!(f, "{name} = {}", argument.value)?,
                None => f.write_str(&argument.value)?,
            }
        }
        f.write_str(")")
    }
}

struct KotlinType<'a>(&'a TypeRef);

impl fmt::Display for KotlinType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TypeRef::Placeholder => write!(f, "{}", self.0),
            TypeRef::Concrete(name) => {
                f.write_str(&name.path.as_str().replace("::", "."))?;
                if !name.arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, argument) in name.arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", KotlinType(argument))?;
                    }
                    f.write_str(">")?;
                }
                if name.nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
        }
    }
}

/// `Parent()` for a class parent, `Parent` for an interface parent.
struct SupertypeCall<'a>(&'a Supertype);

impl fmt::Display for SupertypeCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Supertype::Extends(parent) => write!(f, "{}()", parent.simple_name()),
            Supertype::Implements(parent) => f.write_str(parent.simple_name()),
        }
    }
}
