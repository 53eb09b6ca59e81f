mod entity;
mod fields;

use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for skiff types
    skiff: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let field_struct = self.expand_field_struct();
        let entity_impls = self.expand_entity_impls();
        let field_struct_impls = self.expand_field_struct_impls();

        let body = wrap_in_const(quote! {
            #entity_impls
            #field_struct_impls
        });

        quote! {
            #field_struct
            #body
        }
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        skiff: quote!(_skiff::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use skiff as _skiff;
            #code
        };
    }
}
