//! Repository implementations for the three tables
//!
//! Repositories own the SQL. Queries are checked at runtime and mapped onto
//! `sqlx::FromRow` row structs; adapters turn rows into domain records.

pub mod author;
pub mod opposition;
pub mod phrase;

pub use author::{AuthorRepository, AuthorRow};
pub use opposition::{OppositionDetailRow, OppositionRepository, OppositionRow};
pub use phrase::{PhraseRepository, PhraseRow};
