// #[extensive_sealed(...)] argument parsing

use sealforge_core::model::RawBinding;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{parenthesized, Error, Ident, LitStr, Token, Type};

use crate::types::type_name;

/// Every `model(...)` entry, in source order.
pub struct ModelArgs {
    pub models: Vec<ModelArg>,
}

/// `model(ty = Type)` or `model(ty = Type, name = "display")`.
pub struct ModelArg {
    pub ty: Type,
    pub name: Option<LitStr>,
}

impl ModelArg {
    pub fn to_binding(&self) -> RawBinding {
        let name = self.name.as_ref().map(LitStr::value).unwrap_or_default();
        RawBinding::new(name, type_name(&self.ty))
    }
}

impl Parse for ModelArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let models = Punctuated::<ModelArg, Token![,]>::parse_terminated(input)?;
        Ok(ModelArgs {
            models: models.into_iter().collect(),
        })
    }
}

impl Parse for ModelArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let keyword: Ident = input.parse()?;
        if keyword != "model" {
            return Err(Error::new(
                keyword.span(),
                "expected `model(ty = Type)` or `model(ty = Type, name = \"...\")`",
            ));
        }

        let content;
        parenthesized!(content in input);

        let mut ty = None;
        let mut name = None;
        while !content.is_empty() {
            let key: Ident = content.parse()?;
            content.parse::<Token![=]>()?;
            if key == "ty" {
                ty = Some(content.parse::<Type>()?);
            } else if key == "name" {
                name = Some(content.parse::<LitStr>()?);
            } else {
                return Err(Error::new(
                    key.span(),
                    format!("unknown model key `{key}`; expected `ty` or `name`"),
                ));
            }
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        let ty = ty.ok_or_else(|| Error::new(keyword.span(), "model is missing `ty = Type`"))?;
        Ok(ModelArg { ty, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_models() {
        let args: ModelArgs =
            syn::parse_str(r#"model(ty = String), model(ty = Vec<u8>, name = "bytes"),"#).unwrap();
        assert_eq!(args.models.len(), 2);

        let first = args.models[0].to_binding();
        assert_eq!(first.name, "");
        assert_eq!(first.ty.path.as_str(), "String");

        let second = args.models[1].to_binding();
        assert_eq!(second.name, "bytes");
        assert_eq!(second.ty.to_string(), "Vec<u8>");
    }

    #[test]
    fn test_empty_args() {
        let args: ModelArgs = syn::parse_str("").unwrap();
        assert!(args.models.is_empty());
    }

    #[test]
    fn test_rejects_unknown_keys_and_missing_type() {
        assert!(syn::parse_str::<ModelArgs>("model(kind = String)").is_err());
        assert!(syn::parse_str::<ModelArgs>(r#"model(name = "x")"#).is_err());
        assert!(syn::parse_str::<ModelArgs>("models(ty = String)").is_err());
    }
}
