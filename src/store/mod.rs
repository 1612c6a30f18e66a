use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::types::book::{Book, BookFields, BookId};

use self::{
    memory::MemoryBookStore,
    postgres::{PostgresBookStore, PostgresConfig},
};

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("No book ids left to assign")]
    IdsExhausted,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for books.
///
/// Implementations do not validate fields, that happens before a call reaches the store.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Stores a new book and returns it with its assigned id.
    async fn insert(&self, fields: BookFields) -> StoreResult<Book>;

    /// Returns all books ordered by id.
    async fn all(&self) -> StoreResult<Vec<Book>>;

    async fn get(&self, id: BookId) -> StoreResult<Option<Book>>;

    /// Replaces the fields of an existing book. Returns `None` if there is no book with `id`.
    async fn update(&self, id: BookId, fields: BookFields) -> StoreResult<Option<Book>>;

    /// Removes a book and returns it. Returns `None` if there is no book with `id`.
    async fn delete(&self, id: BookId) -> StoreResult<Option<Book>>;

    fn backend_name(&self) -> &'static str;
}

/// Selects the book store backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StorageConfig {
    #[default]
    Memory,
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Opens the configured store.
    pub async fn open(&self) -> StoreResult<Arc<dyn BookStore>> {
        let store: Arc<dyn BookStore> = match self {
            StorageConfig::Memory => Arc::new(MemoryBookStore::new()),
            StorageConfig::Postgres(config) => Arc::new(PostgresBookStore::connect(config).await?),
        };

        tracing::info!(backend = store.backend_name(), "Book store opened");

        Ok(store)
    }
}
