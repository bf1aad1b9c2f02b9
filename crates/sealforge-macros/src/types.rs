// Conversion between syn types and the declaration model

use quote::ToTokens;
use sealforge_core::model::{TypeName, TypeRef};
use syn::{GenericArgument, Path, PathArguments, Type, TypePath};

/// Name of the marker type that stands for the payload.
pub const PLACEHOLDER_IDENT: &str = "Extensive";

/// Converts a field type, recognizing the placeholder.
pub fn type_ref(ty: &Type) -> TypeRef {
    match ty {
        Type::Path(TypePath { qself: None, path }) if is_placeholder(path) => TypeRef::Placeholder,
        Type::Paren(inner) => type_ref(&inner.elem),
        Type::Group(inner) => type_ref(&inner.elem),
        _ => TypeRef::Concrete(type_name(ty)),
    }
}

/// Converts a type that must be concrete.
///
/// Paths whose only generic arguments are types on the last segment map onto
/// [`TypeName`] structurally. Everything else is kept as opaque token text.
pub fn type_name(ty: &Type) -> TypeName {
    match ty {
        Type::Path(TypePath { qself: None, path }) => match structured(path) {
            Some(name) => name,
            None => opaque(ty),
        },
        Type::Paren(inner) => type_name(&inner.elem),
        Type::Group(inner) => type_name(&inner.elem),
        _ => opaque(ty),
    }
}

fn structured(path: &Path) -> Option<TypeName> {
    let segments: Vec<_> = path.segments.iter().collect();
    let (last, init) = segments.split_last()?;
    if init.iter().any(|segment| !segment.arguments.is_empty()) {
        return None;
    }

    let mut text = String::new();
    if path.leading_colon.is_some() {
        text.push_str("::");
    }
    for segment in init {
        text.push_str(&segment.ident.to_string());
        text.push_str("::");
    }
    text.push_str(&last.ident.to_string());

    let mut name = TypeName::new(text);
    match &last.arguments {
        PathArguments::None => {}
        PathArguments::AngleBracketed(args) => {
            for arg in &args.args {
                match arg {
                    GenericArgument::Type(inner) => name = name.with_argument(type_ref(inner)),
                    _ => return None,
                }
            }
        }
        PathArguments::Parenthesized(_) => return None,
    }
    Some(name)
}

fn opaque(ty: &Type) -> TypeName {
    let name = TypeName::new(ty.to_token_stream().to_string());
    // Keeps a placeholder hidden in a reference, tuple or array visible to
    // the nested-placeholder check.
    if mentions_placeholder(ty.to_token_stream()) {
        name.with_argument(TypeRef::Placeholder)
    } else {
        name
    }
}

fn mentions_placeholder(tokens: proc_macro2::TokenStream) -> bool {
    tokens.into_iter().any(|token| match token {
        proc_macro2::TokenTree::Ident(ident) => ident == PLACEHOLDER_IDENT,
        proc_macro2::TokenTree::Group(group) => mentions_placeholder(group.stream()),
        _ => false,
    })
}

fn is_placeholder(path: &Path) -> bool {
    path.segments
        .last()
        .is_some_and(|last| last.ident == PLACEHOLDER_IDENT && last.arguments.is_empty())
}

/// Renders a concrete model type back to Rust source.
pub fn to_rust_type(ty: &TypeRef) -> syn::Result<Type> {
    syn::parse_str(&rust_text(ty))
}

fn rust_text(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Placeholder => format!("::sealforge::{PLACEHOLDER_IDENT}"),
        TypeRef::Concrete(name) if name.arguments.is_empty() => name.path.to_string(),
        TypeRef::Concrete(name) => {
            let args: Vec<String> = name.arguments.iter().map(rust_text).collect();
            format!("{}<{}>", name.path, args.join(", "))
        }
    }
}
