//! Request bodies and query strings accepted by the API

pub mod authors;
pub mod oppositions;
