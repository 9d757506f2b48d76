use apicheck::encoding::decode_base64;
use apicheck::error::codes::{all_codes, parse_code};
use apicheck::idutil::{IdGenerator, IdSettings};
use apicheck::negotiate::{negotiate, ClientNegotiator, Decoder, Encoder, SimpleClientNegotiator};
use apicheck::{Error, ErrorCode};

#[test]
fn codes_use_dotted_namespaces() {
    for code in all_codes() {
        let text = code.as_str();
        assert!(text.contains('.'), "{} lacks a namespace", text);
        assert_eq!(parse_code(text), Some(*code));
    }
}

#[test]
fn base64_failure_is_a_validation_error() {
    let err = decode_base64("not base64!").unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationInvalidBase64);
    assert!(err.details["error"].is_string());
}

#[test]
fn id_generator_errors_instead_of_panicking() {
    let result = IdGenerator::new(IdSettings {
        start_time: Some(chrono::Utc::now() + chrono::Duration::hours(1)),
        machine_id: None,
    });
    assert!(matches!(
        result,
        Err(Error {
            code: ErrorCode::ValidationInvalidArgument,
            ..
        })
    ));
}

#[test]
fn negotiated_json_round_trip() {
    let serializer = negotiate("application/json; charset=utf-8").unwrap();
    let bytes = serializer.encode(&vec!["a", "b"]).unwrap();
    let back: Vec<String> = serializer.decode(&bytes).unwrap();
    assert_eq!(back, vec!["a", "b"]);

    let negotiator = SimpleClientNegotiator;
    let value: serde_json::Value = negotiator.decoder().unwrap().decode(b"{\"x\":1}").unwrap();
    assert_eq!(value["x"], 1);
}

#[test]
fn unknown_content_type_names_itself() {
    let err = negotiate("text/plain").unwrap_err();
    assert_eq!(err.details["contentType"], "text/plain");
    assert_eq!(err.details["stream"], false);
}
