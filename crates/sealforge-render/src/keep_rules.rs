//! ProGuard/R8 keep rules for generated variants.

use std::fmt::{self, Write as _};

use sealforge_core::model::{DeclarationKind, QualifiedName, RetentionDirective};

/// Name of the keep-rule file for one source declaration.
///
/// # Example
///
/// ```
/// use sealforge_core::model::QualifiedName;
/// use sealforge_render::keep_rules::file_name;
///
/// let name = file_name(&QualifiedName::new("com.example.UIState"));
/// assert_eq!(name, "sealforge-com.example.UIState.pro");
/// ```
pub fn file_name(source: &QualifiedName) -> String {
    format!("sealforge-{}.pro", source.as_str().replace("::", "."))
}

/// Renders the keep rules of every binding of `source`.
pub fn render(source: &QualifiedName, directives: &[RetentionDirective]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_rules(&mut out, source, directives);
    out
}

fn write_rules(
    out: &mut String,
    source: &QualifiedName,
    directives: &[RetentionDirective],
) -> fmt::Result {
    writeln!(out, "# Generated by sealforge from {source}. Do not modify.")?;
    for directive in directives {
        writeln!(out)?;
        write_directive(out, directive)?;
    }
    Ok(())
}

fn write_directive(out: &mut String, directive: &RetentionDirective) -> fmt::Result {
    let target = &directive.target;
    match directive.kind {
        DeclarationKind::Interface => writeln!(out, "-keepnames interface {target}"),
        DeclarationKind::Object => {
            writeln!(out, "-keepnames class {target}")?;
            writeln!(out, "-if class {target}")?;
            writeln!(out, "-keepclassmembers class {target} {{")?;
            writeln!(out, "    public static final {target} INSTANCE;")?;
            writeln!(out, "}}")
        }
        _ => {
            writeln!(out, "-keepnames class {target}")?;
            writeln!(out, "-if class {target}")?;
            writeln!(out, "-keepclassmembers class {target} {{")?;
            writeln!(
                out,
                "    public <init>({});",
                directive.parameter_types.join(", ")
            )?;
            writeln!(out, "}}")
        }
    }
}
