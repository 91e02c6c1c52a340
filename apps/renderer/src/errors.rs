use thiserror::Error;

/// Fatal render errors. Any of these aborts the whole document; there is no
/// partial output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing backend could not measure or place a string.
    #[error("Measurement failure: {0}")]
    Measurement(String),

    /// The accumulated pages could not be turned into the final byte buffer.
    #[error("Output serialization failure: {0}")]
    OutputSerialization(String),
}

/// Errors raised while turning caller input into a `CvRecord`.
/// These never reach the renderer.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid education data: {0}")]
    Education(#[source] serde_json::Error),

    #[error("Invalid experience data: {0}")]
    Experience(#[source] serde_json::Error),

    #[error("Invalid skills data: {0}")]
    Skills(#[source] serde_json::Error),

    #[error("Invalid languages data: {0}")]
    Languages(#[source] serde_json::Error),

    #[error("Invalid CV record: {0}")]
    Record(#[source] serde_json::Error),
}

impl RenderError {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::Measurement(_) => "MEASUREMENT_FAILURE",
            RenderError::OutputSerialization(_) => "OUTPUT_SERIALIZATION_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_codes() {
        assert_eq!(
            RenderError::Measurement("x".into()).code(),
            "MEASUREMENT_FAILURE"
        );
        assert_eq!(
            RenderError::OutputSerialization("x".into()).code(),
            "OUTPUT_SERIALIZATION_FAILURE"
        );
    }

    #[test]
    fn test_input_error_names_the_list() {
        let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let msg = InputError::Education(err).to_string();
        assert!(msg.starts_with("Invalid education data"), "got {msg}");
    }
}
