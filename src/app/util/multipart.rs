use axum::extract::Multipart;
use serde_json::{Map, Value};

use crate::app::models::api_error::ApiError;

/// Collects the text fields of a multipart form. File parts are skipped.
pub async fn get_text_fields(mut multipart: Multipart) -> Result<Map<String, Value>, ApiError> {
    let mut fields = Map::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }

        let value = field.text().await?;
        fields.insert(name, Value::String(value));
    }

    Ok(fields)
}
