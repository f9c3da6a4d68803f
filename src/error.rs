//! Domain-specific error types for bike-quiz

use thiserror::Error;

/// Main error type for the quiz library
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Please answer at least one question to see your result.")]
    NoAnswers,

    #[error("Invalid answer: {message}")]
    InvalidAnswer { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl QuizError {
    /// True for the recoverable "nothing answered yet" condition
    pub fn is_no_answers(&self) -> bool {
        matches!(self, QuizError::NoAnswers)
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_answers_message_is_the_user_facing_warning() {
        let err = QuizError::NoAnswers;
        assert!(err.is_no_answers());
        assert_eq!(
            err.to_string(),
            "Please answer at least one question to see your result."
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: QuizError = io.into();
        assert!(matches!(err, QuizError::Io { .. }));
        assert!(err.to_string().contains("gone"));
        assert!(!err.is_no_answers());
    }
}
