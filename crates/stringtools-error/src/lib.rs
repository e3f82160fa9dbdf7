//! Error handling for stringtools.
//!
//! Text transforms are total functions and never fail. Errors only come from
//! the edges: caller-supplied patterns, codecs that are not installed,
//! malformed escapes, and configuration files.

use std::fmt;

/// Error category for stringtools errors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A caller-supplied argument (pattern, option) cannot be used.
    InvalidArgument,
    /// The requested codec is not installed in the toolkit.
    CodecUnavailable,
    /// A codec was installed but rejected its input.
    Codec,
    Config,
    Io,
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::InvalidArgument => write!(f, "invalid_argument"),
            ErrorCategory::CodecUnavailable => write!(f, "codec_unavailable"),
            ErrorCategory::Codec => write!(f, "codec"),
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Unknown => write!(f, "unknown"),
        }
    }
}

/// Error with a category and key/value context
#[derive(Debug)]
pub struct TextError {
    message: String,
    category: ErrorCategory,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    context: Vec<(String, String)>,
}

impl TextError {
    pub fn new(message: impl Into<String>, category: ErrorCategory) -> Self {
        Self {
            message: message.into(),
            category,
            source: None,
            context: Vec::new(),
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        category: ErrorCategory,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            message: message.into(),
            category,
            source: Some(source),
            context: Vec::new(),
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Attaches the underlying error.
    pub fn caused_by(mut self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> &ErrorCategory {
        &self.category
    }

    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.category == ErrorCategory::InvalidArgument
    }

    pub fn is_codec_unavailable(&self) -> bool {
        self.category == ErrorCategory::CodecUnavailable
    }

    pub fn is_config_error(&self) -> bool {
        self.category == ErrorCategory::Config
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)?;

        if !self.context.is_empty() {
            write!(f, " (")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            write!(f, ")")?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

/// Result type alias for stringtools errors
pub type Result<T> = std::result::Result<T, TextError>;

/// An argument the caller passed cannot be used.
pub fn invalid_argument(message: impl Into<String>) -> TextError {
    TextError::new(message, ErrorCategory::InvalidArgument)
}

/// A codec operation was requested but no codec is installed.
pub fn codec_unavailable(codec: &str) -> TextError {
    TextError::new(format!("no {codec} codec installed"), ErrorCategory::CodecUnavailable)
        .with_context("codec", codec)
}

pub fn codec_error(message: impl Into<String>) -> TextError {
    TextError::new(message, ErrorCategory::Codec)
}

pub fn config_error(message: impl Into<String>) -> TextError {
    TextError::new(message, ErrorCategory::Config)
}

pub fn io_error(message: impl Into<String>, source: std::io::Error) -> TextError {
    TextError::with_source(message, ErrorCategory::Io, Box::new(source))
}

impl From<anyhow::Error> for TextError {
    fn from(err: anyhow::Error) -> Self {
        TextError::with_source(err.to_string(), ErrorCategory::Unknown, err.into())
    }
}
