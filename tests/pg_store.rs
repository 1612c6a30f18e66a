//! Runs against a live Postgres, enable with `--features pg-tests` and set `BOOKS_TEST_DATABASE_URL`.
#![cfg(feature = "pg-tests")]

use book_shelf::{
    store::{
        postgres::{PostgresBookStore, PostgresConfig},
        BookStore,
    },
    types::book::BookFields,
};

async fn store() -> PostgresBookStore {
    let url = std::env::var("BOOKS_TEST_DATABASE_URL")
        .expect("BOOKS_TEST_DATABASE_URL must be set for pg-tests");

    let store = PostgresBookStore::connect(&PostgresConfig {
        url,
        max_connections: 2,
        acquire_timeout_ms: 5000,
    })
    .await
    .expect("connect");

    sqlx::query("TRUNCATE books RESTART IDENTITY")
        .execute(store.pool())
        .await
        .expect("truncate");

    store
}

fn dune() -> BookFields {
    BookFields {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        published_year: Some(1965),
        isbn: None,
    }
}

// A single test, the table is shared between all of them.
#[tokio::test]
async fn postgres_store_lifecycle() {
    let store = store().await;

    // Schema initialization is idempotent.
    store.init_schema().await.expect("init schema twice");

    let book = store.insert(dune()).await.expect("insert");
    assert_eq!(book.id, 1);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.isbn, None);

    assert_eq!(store.get(book.id).await.unwrap(), Some(book.clone()));
    assert_eq!(store.get(99).await.unwrap(), None);
    assert_eq!(store.all().await.unwrap(), vec![book.clone()]);

    let mut fields = dune();
    fields.isbn = Some("9780441013593".to_string());
    let updated = store.update(book.id, fields).await.unwrap().expect("updated");
    assert_eq!(updated.isbn.as_deref(), Some("9780441013593"));

    assert_eq!(store.update(99, dune()).await.unwrap(), None);
    assert_eq!(store.all().await.unwrap().len(), 1);

    // Values are bound, never interpolated.
    let mut hostile = dune();
    hostile.title = "'); DROP TABLE books; --".to_string();
    let hostile = store.insert(hostile).await.expect("insert hostile");
    assert_eq!(hostile.title, "'); DROP TABLE books; --");

    assert_eq!(store.delete(book.id).await.unwrap(), Some(updated));
    assert_eq!(store.delete(book.id).await.unwrap(), None);
    assert_eq!(store.all().await.unwrap(), vec![hostile]);
}
