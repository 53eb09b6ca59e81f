use skiff_core::schema::{Descriptor, Entity, MappingCatalog};
use skiff_core::stmt::Value;

macro_rules! entity {
    ($name:ident => $describe:expr) => {
        struct $name {
            a: i64,
        }

        impl Entity for $name {
            fn describe() -> Descriptor<Self> {
                $describe
            }
        }
    };
}

entity!(NoTableAttr => Descriptor::<NoTableAttr>::new().key("a", "A", |e| Value::from(e.a)));

entity!(EmptyTable => Descriptor::<EmptyTable>::new().table("").key("a", "A", |e| Value::from(e.a)));

entity!(NoKey => Descriptor::<NoKey>::new().table("NoKey").column("a", "A", |e| Value::from(e.a)));

entity!(TwoKeys => Descriptor::<TwoKeys>::new()
    .table("TwoKeys")
    .key("a", "A", |e| Value::from(e.a))
    .key("b", "B", |e| Value::from(e.a)));

entity!(DuplicateColumn => Descriptor::<DuplicateColumn>::new()
    .table("Dup")
    .key("a", "A", |e| Value::from(e.a))
    .column("b", "A", |e| Value::from(e.a)));

entity!(DuplicateMember => Descriptor::<DuplicateMember>::new()
    .table("Dup")
    .key("a", "A", |e| Value::from(e.a))
    .transient("a"));

entity!(EmptyColumn => Descriptor::<EmptyColumn>::new()
    .table("Empty")
    .key("a", "", |e| Value::from(e.a)));

#[test]
fn missing_table_is_no_table() {
    let catalog = MappingCatalog::new();

    let err = catalog.resolve::<NoTableAttr>().unwrap_err();
    assert!(err.is_no_table());
    assert_eq!(
        "no table mapping for entity type `NoTableAttr`",
        err.to_string()
    );

    assert!(catalog.resolve::<EmptyTable>().unwrap_err().is_no_table());
    assert!(catalog.is_empty());
}

#[test]
fn missing_key_still_resolves() {
    let catalog = MappingCatalog::new();
    let mapping = catalog.resolve::<NoKey>().unwrap();

    assert!(mapping.primary_key().is_none());
}

#[test]
fn configuration_errors() {
    let catalog = MappingCatalog::new();

    let err = catalog.resolve::<TwoKeys>().unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        "invalid schema: entity type `TwoKeys` declares more than one primary key",
        err.to_string()
    );

    assert!(catalog
        .resolve::<DuplicateColumn>()
        .unwrap_err()
        .is_invalid_schema());
    assert!(catalog
        .resolve::<DuplicateMember>()
        .unwrap_err()
        .is_invalid_schema());
    assert!(catalog
        .resolve::<EmptyColumn>()
        .unwrap_err()
        .is_invalid_schema());

    assert!(catalog.is_empty());
}
