//! Attribute macro that specializes a generic enum once per model type.

use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{parse_macro_input, Item};

mod args;
mod expand;
mod types;

/// Generates one concrete enum per `model(...)` from an enum whose variants
/// carry the `Extensive` placeholder.
///
/// ```ignore
/// use sealforge::{extensive_sealed, Extensive};
///
/// #[extensive_sealed(model(ty = String), model(ty = Poster, name = "poster"))]
/// #[derive(Debug, Clone, PartialEq)]
/// pub enum UiState {
///     Success(Extensive),
///     Loading,
///     Error { message: String },
/// }
///
/// // Expands to `UiState`, `StringUiState` and `PosterUiState`, where
/// // `StringUiState::Success` holds a `String`.
/// ```
///
/// The generated enums keep the visibility, attributes and variant layout
/// of the source enum. Every field typed `Extensive` takes the model type.
/// Generic enums, variants with discriminants and placeholders nested inside
/// other types are rejected at compile time.
#[proc_macro_attribute]
pub fn extensive_sealed(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as args::ModelArgs);
    let item = parse_macro_input!(item as Item);
    expand::expand(args, &item)
        .unwrap_or_else(|e| {
            // Keep the annotated item so the error does not cascade.
            let mut tokens = e.to_compile_error();
            item.to_tokens(&mut tokens);
            tokens
        })
        .into()
}
