pub mod ai;
pub mod articles;
pub mod dictionary;
pub mod flashcards;
pub mod info;
pub mod pronunciation;
pub mod translate;
