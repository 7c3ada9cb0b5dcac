use crate::error::AppError;
use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;

/// Form field the picture is uploaded under.
pub const CATPIC_FIELD: &str = "catpic";

pub const INVALID_FILE: &str = "Invalid file";

// Pulls the `catpic` part out of a multipart body and buffers it.
// The body limit layer caps the stream, so an oversized upload fails here while streaming
// instead of after the whole thing has been read. `parse_error` is the message used for
// a body that is oversized or not multipart at all.
pub async fn read_catpic_field(
    multipart: Result<Multipart, MultipartRejection>,
    parse_error: &'static str,
) -> Result<Vec<u8>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "rejected non-multipart upload");
        AppError::Validation(parse_error)
    })?;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(AppError::Validation(INVALID_FILE)),
            Err(e) => return Err(classify(e, parse_error)),
        };

        // skip anything that isn't our file part, a plain value named catpic included
        if field.name() != Some(CATPIC_FIELD) || field.file_name().is_none() {
            continue;
        }

        let data = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                classify(e, parse_error)
            } else {
                tracing::debug!(error = %e, "unreadable catpic field");
                AppError::Validation(INVALID_FILE)
            }
        })?;

        if data.is_empty() {
            return Err(AppError::Validation(INVALID_FILE));
        }

        return Ok(data.to_vec());
    }
}

fn classify(e: MultipartError, parse_error: &'static str) -> AppError {
    tracing::debug!(error = %e, status = %e.status(), "multipart body rejected");
    AppError::Validation(parse_error)
}
