//! Opposition DTOs

use serde::Deserialize;

use domain_oppositions::{CreateOppositionRequest, UpdateOppositionRequest};

/// Body of `POST /oppositions`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOppositionBody {
    #[serde(default)]
    pub first_author_id: Option<String>,
    #[serde(default)]
    pub second_author_id: Option<String>,
}

impl From<CreateOppositionBody> for CreateOppositionRequest {
    fn from(body: CreateOppositionBody) -> Self {
        CreateOppositionRequest {
            first_author_id: body.first_author_id,
            second_author_id: body.second_author_id,
        }
    }
}

/// Body of `PUT /oppositions/:id`; omitted ids leave that side unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOppositionBody {
    #[serde(default)]
    pub first_author_id: Option<String>,
    #[serde(default)]
    pub second_author_id: Option<String>,
}

impl From<UpdateOppositionBody> for UpdateOppositionRequest {
    fn from(body: UpdateOppositionBody) -> Self {
        UpdateOppositionRequest {
            first_author_id: body.first_author_id,
            second_author_id: body.second_author_id,
        }
    }
}

/// Query string of `GET /oppositions`
#[derive(Debug, Default, Deserialize)]
pub struct FindOppositionsParams {
    pub query: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_reads_camel_case() {
        let body: CreateOppositionBody =
            serde_json::from_str(r#"{"firstAuthorId":"a","secondAuthorId":"b"}"#).unwrap();
        let request = CreateOppositionRequest::from(body);

        assert_eq!(request, CreateOppositionRequest::new("a", "b"));
    }

    #[test]
    fn test_update_body_allows_missing_sides() {
        let body: UpdateOppositionBody = serde_json::from_str(r#"{"secondAuthorId":"b"}"#).unwrap();
        let request = UpdateOppositionRequest::from(body);

        assert_eq!(request, UpdateOppositionRequest::second("b"));
    }
}
