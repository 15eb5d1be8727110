//! Domain logic for the SmartNews English reader.
//!
//! Everything here is pure: no network, no database. The adapters crate
//! feeds upstream text into these types and the API crate serializes them.

pub mod article;
pub mod dictionary;
pub mod error;
pub mod flashcard;
pub mod language;
pub mod prompts;
pub mod pronunciation;
pub mod quiz;
pub mod structured;
pub mod text;
pub mod translation;
pub mod types;
