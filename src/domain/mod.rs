//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward. "Today"
//! is always an explicit parameter so every function stays deterministic.

pub mod entities;
pub mod errors;
pub mod fertility;
pub mod gestation;
pub mod responder;

pub use entities::{
    Article, ArticleCategory, CalculationKind, ChatTurn, FertileWindow, PregnancyResult, Sender,
    Theme, TrackerSnapshot, Trimester,
};
pub use errors::DomainError;
