use super::Expand;
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// The struct is emitted outside of the `const _` block so user code can
    /// name it.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let vis = &self.entity.vis;
        let field_struct_ident = &self.entity.field_struct_ident;

        quote! {
            #[derive(Debug, Clone, Copy)]
            #vis struct #field_struct_ident {
                _priv: (),
            }
        }
    }

    pub(super) fn expand_field_struct_impls(&self) -> TokenStream {
        let skiff = &self.skiff;
        let vis = &self.entity.vis;
        let entity_ident = &self.entity.ident;
        let field_struct_ident = &self.entity.field_struct_ident;

        // One path per field, transient fields included
        let methods = self.entity.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let name = &field.name;
            let ty = &field.ty;

            quote! {
                #vis fn #field_ident(&self) -> #skiff::Path<#entity_ident, #ty> {
                    #skiff::Path::new(#name)
                }
            }
        });

        quote! {
            impl #field_struct_ident {
                #( #methods )*
            }

            impl #entity_ident {
                #vis fn fields() -> #field_struct_ident {
                    #field_struct_ident { _priv: () }
                }
            }
        }
    }
}
