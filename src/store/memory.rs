use crate::{
    data::book::{Book, BookForm},
    store::BookStore,
};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Process-lifetime book storage. The mutex guards the whole
/// read-modify-append so concurrent creates cannot race on id assignment.
#[derive(Debug)]
pub struct MemoryBookStore {
    inner: Mutex<Shelf>,
}

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: i32,
}

impl MemoryBookStore {
    #[must_use]
    pub fn new(seed: Vec<Book>) -> Self {
        let next_id = seed.iter().map(|book| book.id).max().unwrap_or(0) + 1;

        Self {
            inner: Mutex::new(Shelf {
                books: seed,
                next_id,
            }),
        }
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new(vec![])
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> Vec<Book> {
        self.inner.lock().await.books.clone()
    }

    async fn get(&self, id: i32) -> Option<Book> {
        self.inner
            .lock()
            .await
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
    }

    async fn append(&self, new: BookForm) -> Book {
        let mut shelf = self.inner.lock().await;

        let book = Book {
            id: shelf.next_id,
            title: new.title,
            author: new.author,
            year: new.year,
        };
        shelf.next_id += 1;
        shelf.books.push(book.clone());

        book
    }
}

#[cfg(test)]
pub use student_stand_in::MemoryStudentStore;


#[cfg(test)]
mod tests {
    use super::*;

    fn gatsby() -> Book {
        Book {
            id: 1,
            title: "The Great Gatsby".into(),
            author: "F. Scott".into(),
            year: 1925,
        }
    }

    #[tokio::test]
    async fn append_continues_from_the_highest_seed_id() {
        let store = MemoryBookStore::new(vec![gatsby()]);

        let created = store
            .append(BookForm {
                title: "A".into(),
                author: "B".into(),
                year: 2000,
            })
            .await;

        assert_eq!(created.id, 2);
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn first_insert_into_an_empty_store_gets_id_one() {
        let store = MemoryBookStore::default();

        let created = store
            .append(BookForm {
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                year: 1965,
            })
            .await;

        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn get_finds_a_single_record() {
        let store = MemoryBookStore::new(vec![gatsby()]);

        assert_eq!(store.get(1).await, Some(gatsby()));
        assert_eq!(store.get(99).await, None);
    }
}
