//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod flashcard_repo;

pub use flashcard_repo::FlashcardRepo;
