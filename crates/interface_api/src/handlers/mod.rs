//! Request handlers

pub mod authors;
pub mod health;
pub mod oppositions;
