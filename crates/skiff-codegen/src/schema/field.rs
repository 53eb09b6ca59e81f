use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Member name used at runtime, the identifier without a raw prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    pub(crate) attrs: FieldAttrs,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttrs {
    /// The `#[key]` attribute, when present
    pub(crate) key: Option<syn::Attribute>,

    /// Column name override
    pub(crate) column: Option<Column>,

    /// True when the field has no column
    pub(crate) transient: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttrs::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                    continue;
                }

                match Column::from_ast(attr) {
                    Ok(column) => attrs.column = Some(column),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("transient") {
                if attrs.transient {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[transient] attribute",
                    ));
                }

                attrs.transient = true;
            }
        }

        if attrs.transient {
            if let Some(key) = &attrs.key {
                errs.push(syn::Error::new_spanned(
                    key,
                    "a #[transient] field cannot be the #[key]",
                ));
            }

            if let Some(column) = &attrs.column {
                errs.push(syn::Error::new(
                    column.name.span(),
                    "a #[transient] field has no column",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = ident.to_string();
        let name = name.strip_prefix("r#").map(str::to_string).unwrap_or(name);

        Ok(Field {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// The column the field maps to, or `None` for transient fields.
    pub(crate) fn column_name(&self) -> Option<String> {
        if self.attrs.transient {
            return None;
        }

        Some(match &self.attrs.column {
            Some(column) => column.name.value(),
            None => self.name.clone(),
        })
    }
}
