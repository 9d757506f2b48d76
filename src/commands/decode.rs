use clap::Args;
use serde::Serialize;

use apicheck::encoding::decode_base64;
use apicheck::AppConfig;

use super::CmdResult;

#[derive(Args)]
pub struct DecodeArgs {
    /// Standard base64 input (with padding)
    pub input: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeOutput {
    pub length: usize,
    pub utf8: bool,
    /// Decoded bytes as text; invalid UTF-8 sequences are replaced.
    pub text: String,
}

pub fn run(args: DecodeArgs, _config: &AppConfig) -> CmdResult<DecodeOutput> {
    let bytes = decode_base64(args.input.trim())?;
    let utf8 = std::str::from_utf8(&bytes).is_ok();

    Ok((
        DecodeOutput {
            length: bytes.len(),
            utf8,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_text() {
        let (output, code) = run(
            DecodeArgs {
                input: "aGVsbG8=\n".to_string(),
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(code, 0);
        assert_eq!(output.text, "hello");
        assert_eq!(output.length, 5);
        assert!(output.utf8);
    }

    #[test]
    fn flags_binary_payloads() {
        let (output, _) = run(
            DecodeArgs {
                input: "/w==".to_string(),
            },
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(output.length, 1);
        assert!(!output.utf8);
    }
}
