//! Book store kept entirely in process memory.
//!
//! Nothing survives a restart. Ids are assigned from a counter starting at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookStore, StoreError, StoreResult};
use crate::types::book::{Book, BookFields, BookId};

#[derive(Debug)]
struct Shelf {
    /// `None` once `BookId::MAX` has been handed out.
    next_id: Option<BookId>,
    books: BTreeMap<BookId, Book>,
}

#[derive(Debug)]
pub struct MemoryBookStore {
    shelf: RwLock<Shelf>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf {
                next_id: Some(1),
                books: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, fields: BookFields) -> StoreResult<Book> {
        let mut shelf = self.shelf.write().await;

        let id = shelf.next_id.ok_or(StoreError::IdsExhausted)?;
        shelf.next_id = id.checked_add(1);

        let book = Book::new(id, fields);
        shelf.books.insert(id, book.clone());

        Ok(book)
    }

    async fn all(&self) -> StoreResult<Vec<Book>> {
        let shelf = self.shelf.read().await;

        Ok(shelf.books.values().cloned().collect())
    }

    async fn get(&self, id: BookId) -> StoreResult<Option<Book>> {
        let shelf = self.shelf.read().await;

        Ok(shelf.books.get(&id).cloned())
    }

    async fn update(&self, id: BookId, fields: BookFields) -> StoreResult<Option<Book>> {
        let mut shelf = self.shelf.write().await;

        let updated = shelf.books.get_mut(&id).map(|book| {
            *book = Book::new(id, fields);
            book.clone()
        });

        Ok(updated)
    }

    async fn delete(&self, id: BookId) -> StoreResult<Option<Book>> {
        let mut shelf = self.shelf.write().await;

        Ok(shelf.books.remove(&id))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> BookFields {
        BookFields {
            title: title.to_string(),
            author: "Herbert".to_string(),
            published_year: Some(1965),
            isbn: None,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order_and_not_reused() {
        let store = MemoryBookStore::new();

        let first = store.insert(fields("Dune")).await.unwrap();
        let second = store.insert(fields("Dune Messiah")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        store.delete(second.id).await.unwrap();

        let third = store.insert(fields("Children of Dune")).await.unwrap();
        assert_eq!(third.id, 3);

        let titles: Vec<_> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();

        assert_eq!(titles, vec!["Dune", "Children of Dune"]);
    }

    #[tokio::test]
    async fn insert_fails_once_ids_run_out() {
        let store = MemoryBookStore {
            shelf: RwLock::new(Shelf {
                next_id: Some(BookId::MAX),
                books: BTreeMap::new(),
            }),
        };

        let last = store.insert(fields("Dune")).await.unwrap();
        assert_eq!(last.id, BookId::MAX);

        let err = store.insert(fields("Dune Messiah")).await.unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));

        assert_eq!(store.all().await.unwrap(), vec![last]);
    }

    #[tokio::test]
    async fn update_of_missing_book_does_not_create_it() {
        let store = MemoryBookStore::new();

        let updated = store.update(7, fields("Dune")).await.unwrap();

        assert!(updated.is_none());
        assert!(store.get(7).await.unwrap().is_none());
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_returns_the_removed_book_once() {
        let store = MemoryBookStore::new();
        let book = store.insert(fields("Dune")).await.unwrap();

        assert_eq!(store.delete(book.id).await.unwrap(), Some(book.clone()));
        assert_eq!(store.delete(book.id).await.unwrap(), None);
    }
}
