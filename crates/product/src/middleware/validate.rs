use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// JSON body extractor whose rejections use the service's error body
/// (400) instead of axum's plain-text 415/422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(invalid_json)?;

        Ok(Self(value))
    }
}

fn invalid_json(rejection: JsonRejection) -> HttpError {
    HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
}

/// JSON body extractor that also runs `validator` rules, rejecting with the
/// service's error body on malformed JSON or failed validation.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(invalid_json)?;

        value.validate().map_err(|errors| {
            HttpError::BadRequest(format!(
                "Validation failed: {}",
                format_validation_errors(&errors)
            ))
        })?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.sort();
        error_messages.join("; ")
    }
}
