//! Oppositions Domain
//!
//! An opposition pairs two distinct authors under a slug built from their
//! names. This crate owns the opposition records and read projections, the
//! `OppositionPort` store trait and the `OppositionsService`.
//!
//! # Operations
//!
//! | Operation | Success | Failures |
//! |---|---|---|
//! | `create` | 201 | 400 missing id, 404 authors, 500 |
//! | `find_by_id` | 200 | 404, 500 |
//! | `find_many` | 200 (possibly empty) | 500 |
//! | `update_one` | 200 | 404 opposition / first / second author, 500 |
//! | `delete_one` | 204 | 404, 500 |
//! | `find_phrases_by_opposition` | 200 | 404, 500 |

pub mod opposition;
pub mod ports;
pub mod service;

pub use opposition::{
    Opposition, NewOpposition, OppositionChanges, OppositionQuery,
    OppositionDetail, AuthorSummary, OppositionPhrases, AuthorWithPhrases,
};
pub use ports::OppositionPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockOppositionPort;
pub use service::{OppositionsService, CreateOppositionRequest, UpdateOppositionRequest};
