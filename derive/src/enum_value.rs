use super::*;
use quote::quote;

/// Generates an `EnumValue` implementation.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let en = match &input.data {
        syn::Data::Enum(en) => en,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`EnumValue` can only be derived for enums",
            ))
        }
    };
    let variant_reprs = en
        .variants
        .iter()
        .map(VariantRepr::get)
        .collect::<syn::Result<Vec<_>>>()?;
    let ser = crate_path();
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let variant_ident = en.variants.iter().map(|v| &v.ident);
    let variant_name = variant_reprs.iter().map::<&str, _>(|v| v.name.as_ref());
    let body = if en.variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(Self::#variant_ident => #variant_name,)*
            }
        }
    };
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #ser::EnumValue for #ident #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #body
            }
        }
    })
}
