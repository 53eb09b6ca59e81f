use super::Expand;
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_entity_impls(&self) -> TokenStream {
        let skiff = &self.skiff;
        let entity_ident = &self.entity.ident;

        let table = self.entity.table.as_ref().map(|table| {
            quote!(.table(#table))
        });

        let members = self.entity.fields.iter().map(|field| {
            let name = &field.name;
            let field_ident = &field.ident;

            let Some(column) = field.column_name() else {
                return quote!(.transient(#name));
            };

            let method = if field.attrs.key.is_some() {
                quote!(key)
            } else {
                quote!(column)
            };

            quote! {
                .#method(#name, #column, |entity: &#entity_ident| {
                    #skiff::Value::from(&entity.#field_ident)
                })
            }
        });

        quote! {
            impl #skiff::Entity for #entity_ident {
                fn describe() -> #skiff::Descriptor<Self> {
                    #skiff::Descriptor::<Self>::new()
                        #table
                        #( #members )*
                }
            }
        }
    }
}
