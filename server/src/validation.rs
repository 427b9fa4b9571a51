use crate::error::ApiError;

/// Minimum accepted generation duration in seconds
pub const MIN_DURATION_SECS: i64 = 5;
/// Maximum accepted generation duration in seconds
pub const MAX_DURATION_SECS: i64 = 30;

/// Validate a generation request
pub fn validate_generate_request(prompt: Option<&str>, duration: i64) -> Result<(), ApiError> {
    match prompt {
        None => return Err(ApiError::InvalidInput("Prompt is required".to_string())),
        Some(p) if p.is_empty() => {
            return Err(ApiError::InvalidInput("Prompt is required".to_string()));
        }
        Some(_) => {}
    }

    if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&duration) {
        return Err(ApiError::InvalidInput(
            "Duration must be between 5 and 30 seconds".to_string(),
        ));
    }

    Ok(())
}
