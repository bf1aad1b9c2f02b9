// #[extensive_sealed] expansion: syn item -> declaration model -> generated enums

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use sealforge_config::{GeneratorConfig, WorkerCount};
use sealforge_core::model::{
    AnnotationUsage, ConstructorParameter, DeclarationKind, GeneratedHierarchy,
    HierarchyDeclaration, Modifier, VariantDeclaration,
};
use sealforge_core::{CollectingEmitter, Generator};
use syn::parse::Parser;
use syn::{Attribute, Error, Fields, Ident, Item, ItemEnum, Meta, Path, Variant, Visibility};

use crate::args::ModelArgs;
use crate::types::{to_rust_type, type_ref};

/// Annotation name the generated enums must not inherit.
pub const TRIGGER: &str = "extensive_sealed";

pub fn expand(args: ModelArgs, item: &Item) -> Result<TokenStream, Error> {
    let declaration = declaration_for(&args, item)?;

    let generator = Generator::new(
        GeneratorConfig::default()
            .with_trigger_annotation(TRIGGER)
            .with_worker_count(WorkerCount::None),
    );
    let mut emitter = CollectingEmitter::new();
    generator.run(std::slice::from_ref(&declaration), &mut emitter);

    let span = item_ident(item).map_or_else(Span::call_site, Ident::span);
    let errors = emitter
        .errors()
        .map(|diagnostic| Error::new(span, &diagnostic.message))
        .reduce(|mut combined, next| {
            combined.combine(next);
            combined
        });
    if let Some(errors) = errors {
        return Err(errors);
    }

    let Item::Enum(source) = item else {
        return Err(Error::new(span, "#[extensive_sealed] can only be attached to an enum"));
    };
    let generated = emitter
        .hierarchies
        .iter()
        .map(|hierarchy| render_hierarchy(source, hierarchy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #item
        #(#generated)*
    })
}

fn item_ident(item: &Item) -> Option<&Ident> {
    match item {
        Item::Enum(item) => Some(&item.ident),
        Item::Struct(item) => Some(&item.ident),
        Item::Union(item) => Some(&item.ident),
        Item::Trait(item) => Some(&item.ident),
        _ => None,
    }
}

fn declaration_for(args: &ModelArgs, item: &Item) -> Result<HierarchyDeclaration, Error> {
    // Only enums are closed; structs, unions and traits are handed to the
    // generator as open declarations so it reports them.
    let mut declaration = match item {
        Item::Enum(item) => enum_declaration(item)?,
        Item::Struct(item) => open_declaration(&item.ident, &item.vis, DeclarationKind::Class),
        Item::Union(item) => open_declaration(&item.ident, &item.vis, DeclarationKind::Class),
        Item::Trait(item) => open_declaration(&item.ident, &item.vis, DeclarationKind::Interface),
        other => {
            return Err(Error::new_spanned(
                other,
                "#[extensive_sealed] can only be attached to an enum",
            ))
        }
    };
    for model in &args.models {
        declaration = declaration.with_binding(model.to_binding());
    }
    Ok(declaration)
}

fn open_declaration(ident: &Ident, vis: &Visibility, kind: DeclarationKind) -> HierarchyDeclaration {
    with_visibility(HierarchyDeclaration::new(ident.to_string(), kind), vis)
}

fn enum_declaration(item: &ItemEnum) -> Result<HierarchyDeclaration, Error> {
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        return Err(Error::new_spanned(
            &item.generics,
            "#[extensive_sealed] does not support generic enums; use `Extensive` as the payload type",
        ));
    }

    let mut declaration = with_visibility(
        HierarchyDeclaration::sealed_class(item.ident.to_string()),
        &item.vis,
    );
    for attr in &item.attrs {
        declaration = declaration.with_annotation(annotation(attr));
    }
    for variant in &item.variants {
        declaration = declaration.with_variant(variant_declaration(variant));
    }
    Ok(declaration)
}

fn with_visibility(declaration: HierarchyDeclaration, vis: &Visibility) -> HierarchyDeclaration {
    match vis {
        Visibility::Public(_) => declaration.with_modifier(Modifier::Public),
        Visibility::Restricted(restricted) if restricted.path.is_ident("crate") => {
            declaration.with_modifier(Modifier::Internal)
        }
        Visibility::Restricted(_) => {
            declaration.with_modifier(Modifier::Other(vis.to_token_stream().to_string()))
        }
        Visibility::Inherited => declaration,
    }
}

fn variant_declaration(variant: &Variant) -> VariantDeclaration {
    // Discriminants only make sense for C-like enums, which have no payload to specialize.
    let kind = match (&variant.fields, &variant.discriminant) {
        (_, Some(_)) => DeclarationKind::EnumEntry,
        (Fields::Unit, None) => DeclarationKind::Object,
        _ => DeclarationKind::Class,
    };

    let mut declaration = VariantDeclaration::new(variant.ident.to_string(), kind);
    for attr in &variant.attrs {
        declaration = declaration.with_annotation(annotation(attr));
    }
    for field in &variant.fields {
        let ty = type_ref(&field.ty);
        let mut parameter = match &field.ident {
            Some(ident) => ConstructorParameter::new(ident.to_string(), ty),
            None => ConstructorParameter::positional(ty),
        };
        for attr in &field.attrs {
            parameter = parameter.with_annotation(annotation(attr));
        }
        declaration = declaration.with_parameter(parameter);
    }
    declaration
}

fn path_text(path: &Path) -> String {
    let segments: Vec<String> = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    let joined = segments.join("::");
    if path.leading_colon.is_some() {
        format!("::{joined}")
    } else {
        joined
    }
}

/// `#[path]`, `#[path(tokens)]` and `#[path = value]` become a usage with no
/// argument, one positional argument, or one `value` argument.
fn annotation(attr: &Attribute) -> AnnotationUsage {
    let usage = AnnotationUsage::new(path_text(attr.path()));
    match &attr.meta {
        Meta::Path(_) => usage,
        Meta::List(list) => usage.with_positional(list.tokens.to_string()),
        Meta::NameValue(name_value) => {
            usage.with_argument("value", name_value.value.to_token_stream().to_string())
        }
    }
}

fn attributes(usages: &[AnnotationUsage]) -> Result<Vec<Attribute>, Error> {
    let mut attrs = Vec::with_capacity(usages.len());
    for usage in usages {
        let text = match usage.arguments.first() {
            None => format!("#[{}]", usage.annotation),
            Some(argument) if argument.name.is_some() => {
                format!("#[{} = {}]", usage.annotation, argument.value)
            }
            Some(argument) => format!("#[{}({})]", usage.annotation, argument.value),
        };
        attrs.extend(Attribute::parse_outer.parse_str(&text)?);
    }
    Ok(attrs)
}

fn render_hierarchy(source: &ItemEnum, generated: &GeneratedHierarchy) -> Result<TokenStream, Error> {
    let name = generated.simple_name();
    let ident: Ident = syn::parse_str(name).map_err(|_| {
        Error::new_spanned(
            &source.ident,
            format!(
                "generated name `{name}` is not a valid identifier; give the model a `name = \"...\"`"
            ),
        )
    })?;

    let vis = &source.vis;
    let doc = format!(
        " Specialization of [`{}`] for `{}`.",
        source.ident, generated.binding.ty
    );
    let attrs = attributes(&generated.annotations)?;
    let variants = source
        .variants
        .iter()
        .zip(&generated.variants)
        .map(|(variant, specialized)| render_variant(variant, &specialized.declaration))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #[doc = #doc]
        #(#attrs)*
        #vis enum #ident {
            #(#variants,)*
        }
    })
}

fn render_variant(source: &Variant, generated: &VariantDeclaration) -> Result<TokenStream, Error> {
    let ident = &source.ident;
    let attrs = attributes(&generated.annotations)?;

    let mut fields = Vec::with_capacity(generated.parameters.len());
    for (field, parameter) in source.fields.iter().zip(&generated.parameters) {
        fields.push(render_field(field, parameter)?);
    }

    let body = match &source.fields {
        Fields::Unit => TokenStream::new(),
        Fields::Unnamed(_) => quote! { ( #(#fields),* ) },
        Fields::Named(_) => quote! { { #(#fields),* } },
    };
    Ok(quote! { #(#attrs)* #ident #body })
}

fn render_field(field: &syn::Field, parameter: &ConstructorParameter) -> Result<TokenStream, Error> {
    let attrs = attributes(&parameter.annotations)?;
    let ty = if parameter.ty == type_ref(&field.ty) {
        field.ty.to_token_stream()
    } else {
        to_rust_type(&parameter.ty)
            .map_err(|e| Error::new_spanned(&field.ty, e))?
            .to_token_stream()
    };
    let name = field.ident.as_ref().map(|ident| quote! { #ident: });
    Ok(quote! { #(#attrs)* #name #ty })
}
