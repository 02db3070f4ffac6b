mod enum_value;

use proc_macro2::TokenStream;
use syn::DeriveInput;

#[proc_macro_derive(EnumValue)]
pub fn derive_enum_value(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    enum_value::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Describes how an enum variant is represented when written.
struct VariantRepr {
    /// The symbolic name of this variant.
    name: String,
}

impl VariantRepr {
    /// Gets the representation for the given variant.
    pub fn get(variant: &syn::Variant) -> syn::Result<Self> {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "`EnumValue` can only be derived for variants without fields",
            ));
        }
        Ok(VariantRepr {
            name: variant.ident.to_string(),
        })
    }
}

/// Gets the path used to refer to the `serwrite` crate from generated code.
fn crate_path() -> TokenStream {
    quote::quote! { ::serwrite }
}
