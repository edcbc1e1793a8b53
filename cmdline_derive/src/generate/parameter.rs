use crate::model::DeriveParameter;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;

impl DeriveParameter {
    pub(crate) fn generate(self, parent: &syn::Ident) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            switches,
            consumes_next,
        } = self;
        let field_name_str = field_name.unraw().to_string();
        let descriptors = switches.into_iter().map(|switch| {
            let switch = switch.tokens;
            quote! {
                clp = clp.add(Descriptor::new(#field_name_str, #switch, #consumes_next, |record: &mut #parent| &mut record.#field_name));
            }
        });

        quote! {
            #( #descriptors )*
        }
    }
}
