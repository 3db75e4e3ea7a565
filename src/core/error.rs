use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        // field_errors() iterates a HashMap
        messages.sort();

        AppError::Validation(messages.join("; "))
    }
}

impl AppError {
    /// Messages suitable for showing to an editor, one per problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::Validation(msg) => msg.split("; ").map(|s| s.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
