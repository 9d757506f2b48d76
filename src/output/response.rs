//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use apicheck::error::Hint;
use apicheck::{AppConfig, Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self, compact: bool) -> Result<String> {
        let rendered = if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };
        rendered.map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
                retryable: err.retryable,
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>, config: &AppConfig) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json(config.compact)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                exit_code_for_error(ErrorCode::InternalJsonError),
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub(crate) fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationFailed => 1,

        ErrorCode::ValidationInvalidArgument | ErrorCode::ValidationInvalidBase64 => 2,

        ErrorCode::IdGeneratorFailed
        | ErrorCode::IdTimeOverflow
        | ErrorCode::IdEncodeFailed => 3,

        ErrorCode::NegotiateNoSerializer | ErrorCode::NegotiateNoStreamSerializer => 4,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 10,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>, config: &AppConfig) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data), config),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err), config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_hints() {
        let err = Error::validation_invalid_base64("Invalid padding");
        let json = CliResponse::<()>::from_error(&err).to_json(false).unwrap();
        assert!(json.contains("\"code\": \"validation.invalid_base64\""));
        assert!(json.contains("\"success\": false"));
        assert!(json.contains("standard alphabet"));
    }

    #[test]
    fn compact_envelope_is_single_line() {
        let json = CliResponse::success(serde_json::json!({ "valid": true }))
            .to_json(true)
            .unwrap();
        assert_eq!(json, r#"{"success":true,"data":{"valid":true}}"#);
    }

    #[test]
    fn errors_map_to_exit_codes() {
        let (_value, code) = map_cmd_result_to_json::<serde_json::Value>(Err(
            Error::validation_invalid_argument("value", "not an integer", None),
        ));
        assert_eq!(code, 2);

        let (_value, code) =
            map_cmd_result_to_json::<serde_json::Value>(Err(Error::id_time_overflow()));
        assert_eq!(code, 3);
    }

    #[test]
    fn success_keeps_command_exit_code() {
        let (value, code) = map_cmd_result_to_json(Ok((vec!["msg"], 1)));
        assert_eq!(code, 1);
        assert_eq!(value.unwrap(), serde_json::json!(["msg"]));
    }
}
