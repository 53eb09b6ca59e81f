mod support;

use pretty_assertions::assert_eq;
use skiff::{
    stmt::{Expr, Value},
    Delete, Entity,
};
use support::Recording;

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

    #[column("Age")]
    age: i32,

    #[transient]
    #[allow(dead_code)]
    display: String,
}

#[derive(Debug, Entity)]
#[table = "Order"]
struct Order {
    #[key]
    #[column("Id")]
    id: i64,
}

#[derive(Debug, Entity)]
struct Draft {
    #[key]
    id: i64,
}

#[tokio::test]
async fn delete_by_equality() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let deleted = db
        .delete_by::<Customer>(Customer::fields().name().eq("Acme"))
        .await
        .unwrap();

    assert_eq!(1, deleted);

    let exec = driver.pop();
    assert_eq!("DELETE FROM [Customer] WHERE [Name] = @p0", exec.sql);
    assert_eq!(vec![Value::from("Acme")], exec.params);
}

#[tokio::test]
async fn parameters_follow_textual_order() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let fields = Customer::fields();
    let filter = fields
        .age()
        .ge(18)
        .and(fields.name().ne("Acme").or(fields.id().lt(100)));

    db.delete_by::<Customer>(filter).await.unwrap();

    let exec = driver.pop();
    assert_eq!(
        "DELETE FROM [Customer] WHERE [Age] >= @p0 AND ([Name] <> @p1 OR [Id] < @p2)",
        exec.sql
    );
    assert_eq!(
        vec![Value::I32(18), Value::from("Acme"), Value::I64(100)],
        exec.params
    );
}

#[tokio::test]
async fn filter_calls_are_combined() {
    let driver = Recording::new(skiff::Dialect::Sqlite);
    let mut db = driver.db().await;

    let fields = Customer::fields();
    let delete = Delete::<Customer>::new()
        .filter(fields.age().gt(65))
        .filter(fields.name().eq("Acme"));

    db.exec(delete).await.unwrap();

    assert_eq!(
        r#"DELETE FROM "Customer" WHERE "Age" > ?1 AND "Name" = ?2"#,
        driver.pop().sql
    );
}

#[tokio::test]
async fn negation() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    db.delete_by::<Customer>(!Customer::fields().name().eq("Acme"))
        .await
        .unwrap();

    assert_eq!(
        "DELETE FROM [Customer] WHERE NOT ([Name] = @p0)",
        driver.pop().sql
    );
}

#[tokio::test]
async fn comparison_with_null_becomes_null_check() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let nick = Customer::fields().nick();

    db.delete_by::<Customer>(nick.eq(None::<String>)).await.unwrap();
    let exec = driver.pop();
    assert_eq!("DELETE FROM [Customer] WHERE [Nick] IS NULL", exec.sql);
    assert!(exec.params.is_empty());

    db.delete_by::<Customer>(nick.ne(None::<String>)).await.unwrap();
    assert_eq!(
        "DELETE FROM [Customer] WHERE [Nick] IS NOT NULL",
        driver.pop().sql
    );

    db.delete_by::<Customer>(nick.is_null()).await.unwrap();
    assert_eq!("DELETE FROM [Customer] WHERE [Nick] IS NULL", driver.pop().sql);
}

#[tokio::test]
async fn comparison_with_some_binds_the_value() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    db.delete_by::<Customer>(Customer::fields().nick().eq("ace"))
        .await
        .unwrap();

    let exec = driver.pop();
    assert_eq!("DELETE FROM [Customer] WHERE [Nick] = @p0", exec.sql);
    assert_eq!(vec![Value::from("ace")], exec.params);
}

#[tokio::test]
async fn ordering_against_null_is_rejected() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let err = db
        .delete_by::<Customer>(Customer::fields().nick().lt(None::<String>))
        .await
        .unwrap_err();

    assert!(err.is_invalid_predicate(), "{err}");
    assert!(driver.is_empty());
}

#[tokio::test]
async fn transient_member_is_unmapped() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let err = db
        .delete_by::<Customer>(Customer::fields().display().eq("Acme"))
        .await
        .unwrap_err();

    assert!(err.is_unmapped_member(), "{err}");
    assert!(err.to_string().contains("display"), "{err}");
    assert!(driver.is_empty());
}

#[tokio::test]
async fn member_of_another_entity_is_rejected() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let foreign = Order::fields().id().eq(1).into_untyped();
    let err = db
        .delete_by::<Customer>(Expr::from_untyped(foreign))
        .await
        .unwrap_err();

    assert!(err.is_invalid_predicate(), "{err}");
    assert!(driver.is_empty());
}

#[tokio::test]
async fn literal_condition_is_rejected() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let err = db
        .delete_by::<Customer>(Expr::from_untyped(Value::from("Acme")))
        .await
        .unwrap_err();

    assert!(err.is_invalid_predicate(), "{err}");
    assert!(driver.is_empty());
}

#[tokio::test]
async fn missing_condition_is_null_input() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let err = db.exec(Delete::<Customer>::new()).await.unwrap_err();

    assert!(err.is_null_input(), "{err}");
    assert!(driver.is_empty());
}

#[tokio::test]
async fn missing_condition_is_checked_before_the_mapping() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let err = db.exec(Delete::<Draft>::new()).await.unwrap_err();

    assert!(err.is_null_input(), "{err}");
}

#[tokio::test]
async fn delete_all_rows() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    driver.respond(Ok(42));

    assert_eq!(42, db.exec(Delete::<Customer>::all()).await.unwrap());

    let exec = driver.pop();
    assert_eq!("DELETE FROM [Customer]", exec.sql);
    assert!(exec.params.is_empty());
}

#[tokio::test]
async fn missing_table_is_rejected() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    let err = db
        .delete_by::<Draft>(Draft::fields().id().eq(1))
        .await
        .unwrap_err();

    assert!(err.is_no_table(), "{err}");
    assert!(driver.is_empty());
}

#[tokio::test]
async fn and_all_of_nothing_is_rejected() {
    let driver = Recording::sql_server();
    let mut db = driver.db().await;

    // An empty conjunction is the literal `true`, which is not a condition.
    let err = db
        .delete_by::<Customer>(Expr::and_all(Vec::<Expr<bool>>::new()))
        .await
        .unwrap_err();

    assert!(err.is_invalid_predicate(), "{err}");
}
