use skiff::{stmt::Value, Db, Delete, Entity, MappingCatalog};
use skiff_driver_sqlite::Sqlite;

use std::sync::Arc;

#[derive(Debug, Entity)]
#[table = "Customer"]
struct Customer {
    #[key]
    #[column("Id")]
    id: i64,

    #[column("Name")]
    name: String,

    #[column("Nick")]
    nick: Option<String>,
}

#[derive(Debug, Entity)]
#[table = "Broken"]
struct Broken {
    #[key]
    #[column("Id")]
    id: i64,

    #[column("Id")]
    other: i64,
}

async fn setup() -> Db {
    let mut db = Db::builder().build(Sqlite::in_memory()).await.unwrap();

    db.exec_sql(
        r#"CREATE TABLE "Customer" ("Id" INTEGER PRIMARY KEY, "Name" TEXT NOT NULL, "Nick" TEXT)"#,
        &[],
    )
    .await
    .unwrap();

    for (id, name, nick) in [
        (1, "Acme", Some("ace")),
        (2, "Globex", None),
        (3, "Initech", None),
        (4, "Acme", Some("acme-east")),
    ] {
        db.exec_sql(
            r#"INSERT INTO "Customer" ("Id", "Name", "Nick") VALUES (?1, ?2, ?3)"#,
            &[Value::from(id as i64), Value::from(name), Value::from(nick)],
        )
        .await
        .unwrap();
    }

    db
}

async fn count(db: &mut Db) -> u64 {
    // Touching every row reports how many there are.
    db.exec_sql(r#"UPDATE "Customer" SET "Id" = "Id""#, &[])
        .await
        .unwrap()
}

#[tokio::test]
async fn delete_instance_then_again() {
    let mut db = setup().await;

    let globex = Customer {
        id: 2,
        name: "Globex".to_string(),
        nick: None,
    };

    assert_eq!(1, db.delete(&globex).await.unwrap());
    assert_eq!(0, db.delete(&globex).await.unwrap());
    assert_eq!(3, count(&mut db).await);
}

#[tokio::test]
async fn delete_by_predicate() {
    let mut db = setup().await;

    let deleted = db
        .delete_by::<Customer>(Customer::fields().name().eq("Acme"))
        .await
        .unwrap();

    assert_eq!(2, deleted);
    assert_eq!(2, count(&mut db).await);
}

#[tokio::test]
async fn delete_by_null_check() {
    let mut db = setup().await;

    let nick = Customer::fields().nick();

    assert_eq!(2, db.delete_by::<Customer>(nick.eq(None::<String>)).await.unwrap());
    assert_eq!(0, db.delete_by::<Customer>(nick.is_null()).await.unwrap());
    assert_eq!(2, db.delete_by::<Customer>(nick.is_not_null()).await.unwrap());
}

#[tokio::test]
async fn delete_all() {
    let mut db = setup().await;

    assert_eq!(4, db.exec(Delete::<Customer>::all()).await.unwrap());
    assert_eq!(0, count(&mut db).await);
}

#[tokio::test]
async fn database_errors_are_driver_errors() {
    let mut db = Db::builder().build(Sqlite::in_memory()).await.unwrap();

    // No table was created
    let err = db
        .delete_by::<Customer>(Customer::fields().id().eq(1))
        .await
        .unwrap_err();

    assert!(err.is_driver(), "{err}");
}

#[tokio::test]
async fn sessions_share_the_catalog() {
    let catalog = Arc::new(MappingCatalog::new());

    let db = Db::builder()
        .catalog(catalog.clone())
        .register::<Customer>()
        .build(Sqlite::in_memory())
        .await
        .unwrap();

    assert_eq!(1, catalog.len());

    let other = db.open_session().await.unwrap();
    assert!(Arc::ptr_eq(db.catalog(), other.catalog()));
    assert!(other.catalog().contains::<Customer>());
}

#[tokio::test]
async fn registration_reports_invalid_mappings() {
    let err = Db::builder()
        .register::<Customer>()
        .register::<Broken>()
        .build(Sqlite::in_memory())
        .await
        .unwrap_err();

    assert!(err.is_invalid_schema(), "{err}");
}

#[tokio::test]
async fn invalid_mapping_fails_on_use() {
    let mut db = Db::builder().build(Sqlite::in_memory()).await.unwrap();

    let broken = Broken { id: 1, other: 2 };

    assert!(db.delete(&broken).await.unwrap_err().is_invalid_schema());

    // The failure is not cached as a mapping.
    assert!(!db.catalog().contains::<Broken>());
}

#[tokio::test]
async fn connect_rejects_unknown_schemes() {
    let err = Db::connect("oracle://localhost/db").await.unwrap_err();
    assert!(err.is_invalid_connection_url(), "{err}");

    let err = Db::connect("postgresql://localhost/db").await.unwrap_err();
    assert!(err.is_invalid_connection_url(), "{err}");

    let err = Db::connect("not a url").await.unwrap_err();
    assert!(err.is_invalid_connection_url(), "{err}");
}

#[tokio::test]
async fn raw_session_access() {
    let mut db = setup().await;

    let deleted = db
        .session_mut()
        .exec_non_query(r#"DELETE FROM "Customer" WHERE "Id" = ?1"#, &[Value::I64(3)])
        .await
        .unwrap();

    assert_eq!(1, deleted);
    assert_eq!(3, count(&mut db).await);
}

#[cfg(feature = "sqlite")]
#[test]
fn connect_url_is_kept() {
    let connect = skiff::db::Connect::new("sqlite::memory:").unwrap();

    assert_eq!("sqlite", connect.url().scheme());
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn connect_by_url() {
    let mut db = Db::connect("sqlite::memory:").await.unwrap();

    assert_eq!(skiff::Dialect::Sqlite, db.dialect());

    db.exec_sql(r#"CREATE TABLE "Customer" ("Id" INTEGER PRIMARY KEY)"#, &[])
        .await
        .unwrap();

    let deleted = db
        .delete(&Customer {
            id: 1,
            name: String::new(),
            nick: None,
        })
        .await
        .unwrap();

    assert_eq!(0, deleted);
}
