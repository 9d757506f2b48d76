use std::io::Write;

use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;
mod tty;

use apicheck::version::{self, VersionFlag};
use apicheck::AppConfig;
use commands::{check, decode, id, secret};

const APP_NAME: &str = "apicheck";

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Validate names, addresses and numeric values before admitting them")]
struct Cli {
    /// Print version information and quit (--version=raw prints full build info)
    #[arg(
        short = 'V',
        long = "version",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL|raw"
    )]
    version: Option<VersionFlag>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a value against a naming, address or numeric grammar
    Check(check::CheckArgs),
    /// Generate a time-ordered short id
    Id(id::IdArgs),
    /// Generate a random secret id or key
    Secret(secret::SecretArgs),
    /// Decode standard base64 input
    #[command(name = "decode-base64")]
    DecodeBase64(decode::DecodeArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::new(cli.version, cli.compact);

    match version::print_if_requested(config.version, APP_NAME, &mut std::io::stdout()) {
        Ok(true) => return std::process::ExitCode::SUCCESS,
        Ok(false) => {}
        Err(err) => {
            report_print_failure(
                output::print_json_result(Err(err), &config),
                &mut std::io::stderr(),
            );
            return std::process::ExitCode::from(exit_code_to_u8(10));
        }
    }

    let Some(command) = cli.command else {
        tty::status("No command given");
        let _ = Cli::command().print_help();
        println!();
        return std::process::ExitCode::from(exit_code_to_u8(2));
    };

    let (json_result, exit_code) = commands::run_json(command, &config);
    if !report_print_failure(
        output::print_json_result(json_result, &config),
        &mut std::io::stderr(),
    ) {
        return std::process::ExitCode::from(exit_code_to_u8(10));
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

/// Returns false when the envelope could not be written; the failure goes to `err_out`.
fn report_print_failure(printed: apicheck::Result<()>, err_out: &mut impl Write) -> bool {
    match printed {
        Ok(()) => true,
        Err(err) => {
            let _ = writeln!(err_out, "{}", err);
            false
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_version_flag_is_on() {
        let cli = Cli::try_parse_from(["apicheck", "--version"]).unwrap();
        assert_eq!(cli.version, Some(VersionFlag::On));
    }

    #[test]
    fn raw_version_flag() {
        let cli = Cli::try_parse_from(["apicheck", "--version=raw"]).unwrap();
        assert_eq!(cli.version, Some(VersionFlag::Raw));
        let cli = Cli::try_parse_from(["apicheck", "-V"]).unwrap();
        assert_eq!(cli.version, Some(VersionFlag::On));
    }

    #[test]
    fn invalid_version_value_is_rejected() {
        assert!(Cli::try_parse_from(["apicheck", "--version=maybe"]).is_err());
    }

    #[test]
    fn print_failure_is_written_to_error_stream() {
        let mut err_out = Vec::new();
        let err = apicheck::Error::internal_io("stdout closed", Some("write stdout".to_string()));
        let message = err.message.clone();

        assert!(!report_print_failure(Err(err), &mut err_out));
        assert_eq!(String::from_utf8(err_out).unwrap(), format!("{}\n", message));
    }

    #[test]
    fn successful_print_writes_nothing_to_error_stream() {
        let mut err_out = Vec::new();
        assert!(report_print_failure(Ok(()), &mut err_out));
        assert!(err_out.is_empty());
    }

    #[test]
    fn check_accepts_negative_values() {
        let cli =
            Cli::try_parse_from(["apicheck", "check", "port", "-1", "--compact"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.value, "-1"),
            _ => panic!("expected check command"),
        }
        assert!(cli.compact);
    }
}
