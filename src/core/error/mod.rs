use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,
    ValidationFailed,
    ValidationInvalidBase64,

    NegotiateNoSerializer,
    NegotiateNoStreamSerializer,

    IdGeneratorFailed,
    IdTimeOverflow,
    IdEncodeFailed,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationFailed => "validation.failed",
            ErrorCode::ValidationInvalidBase64 => "validation.invalid_base64",

            ErrorCode::NegotiateNoSerializer => "negotiate.no_serializer",
            ErrorCode::NegotiateNoStreamSerializer => "negotiate.no_stream_serializer",

            ErrorCode::IdGeneratorFailed => "id.generator_failed",
            ErrorCode::IdTimeOverflow => "id.time_overflow",
            ErrorCode::IdEncodeFailed => "id.encode_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailedDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub value: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiateDetails {
    pub content_type: String,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    /// Lifts a non-empty message list into an error for callers that reject
    /// with `?` instead of inspecting the list.
    pub fn validation_failed(
        field: Option<String>,
        value: impl Into<String>,
        messages: Vec<String>,
    ) -> Self {
        let details = to_details(ValidationFailedDetails {
            field,
            value: value.into(),
            messages,
        });

        Self::new(ErrorCode::ValidationFailed, "Validation failed", details)
    }

    pub fn validation_invalid_base64(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ValidationInvalidBase64,
            "Invalid base64 input",
            serde_json::json!({ "error": error.into() }),
        )
        .with_hint("Input must use the standard alphabet with '=' padding")
    }

    pub fn negotiate_no_serializer(content_type: impl Into<String>, stream: bool) -> Self {
        let content_type = content_type.into();
        let (code, message) = if stream {
            (
                ErrorCode::NegotiateNoStreamSerializer,
                format!("no stream serializers registered for {}", content_type),
            )
        } else {
            (
                ErrorCode::NegotiateNoSerializer,
                format!("no serializers registered for {}", content_type),
            )
        };
        let details = to_details(NegotiateDetails {
            content_type,
            stream,
        });

        Self::new(code, message, details)
    }

    pub fn id_generator_failed(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::IdGeneratorFailed,
            "Id generator failed",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn id_time_overflow() -> Self {
        Self::new(
            ErrorCode::IdTimeOverflow,
            "Id generator time space exhausted",
            Value::Null,
        )
        .with_hint("Configure a later start time for the generator")
    }

    pub fn id_encode_failed(problem: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::IdEncodeFailed,
            "Failed to encode id",
            serde_json::json!({ "problem": problem.into() }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
