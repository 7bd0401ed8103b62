pub mod book;
pub mod student;
