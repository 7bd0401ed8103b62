use crate::{
    data::{
        book::{Book, BookForm},
        student::{NewStudent, Student},
    },
    error::ApiResult,
};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

/// Persistence boundary for student records. Handlers only ever see this
/// trait, so the relational store and any in-memory stand-in are
/// interchangeable.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn list(&self, limit: i64) -> ApiResult<Vec<Student>>;
    async fn get(&self, id: i32) -> ApiResult<Option<Student>>;
    async fn insert(&self, new: NewStudent) -> ApiResult<Student>;
    async fn update(&self, student: &Student) -> ApiResult<()>;
    async fn remove(&self, id: i32) -> ApiResult<bool>;
}

/// Persistence boundary for book records.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> Vec<Book>;
    async fn get(&self, id: i32) -> Option<Book>;
    async fn append(&self, new: BookForm) -> Book;
}
