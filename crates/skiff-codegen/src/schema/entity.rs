use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Entity visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Entity fields
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Identifier of the generated struct holding field paths
    pub(crate) field_struct_ident: syn::Ident,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut attr = EntityAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        let mut keys = fields.iter().filter_map(|field| field.attrs.key.as_ref());

        if keys.next().is_some() {
            for extra in keys {
                errs.push(syn::Error::new_spanned(
                    extra,
                    "an entity has at most one #[key] field",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Entity {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            table: attr.table,
            field_struct_ident: struct_ident("Fields", ast),
        })
    }
}

fn struct_ident(suffix: &str, ast: &syn::ItemStruct) -> syn::Ident {
    syn::Ident::new(&format!("{}{}", ast.ident, suffix), ast.ident.span())
}
