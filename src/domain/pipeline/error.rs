use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Invalid(msg) => AppError::BadRequest(msg),
            PipelineError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let err: AppError = PipelineError::Invalid("empty text".to_string()).into();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_response().message, "Invalid input: empty text");
    }
}
