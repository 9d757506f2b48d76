use super::ErrorCode;

pub fn all_codes() -> &'static [ErrorCode] {
    &[
        ErrorCode::ValidationInvalidArgument,
        ErrorCode::ValidationFailed,
        ErrorCode::ValidationInvalidBase64,
        ErrorCode::NegotiateNoSerializer,
        ErrorCode::NegotiateNoStreamSerializer,
        ErrorCode::IdGeneratorFailed,
        ErrorCode::IdTimeOverflow,
        ErrorCode::IdEncodeFailed,
        ErrorCode::InternalIoError,
        ErrorCode::InternalJsonError,
        ErrorCode::InternalUnexpected,
    ]
}

pub fn parse_code(code: &str) -> Option<ErrorCode> {
    all_codes()
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == code)
}
