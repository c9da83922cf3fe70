//! Author DTOs

use serde::Deserialize;

/// Body of `POST /authors`
///
/// A missing `name` reaches the service as an empty string and is rejected
/// there with a validation envelope.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAuthorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
