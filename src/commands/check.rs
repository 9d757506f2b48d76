use clap::{Args, ValueEnum};
use serde::Serialize;

use apicheck::log_status;
use apicheck::validation::{self, FieldPath, MessageList};
use apicheck::{AppConfig, Error};

use super::CmdResult;

#[derive(Args)]
pub struct CheckArgs {
    /// Grammar to check the value against
    #[arg(value_enum)]
    pub kind: CheckKind,

    /// Value to check
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Field path to attribute messages to (e.g. spec.ports[0].port)
    #[arg(long)]
    pub field: Option<String>,

    /// Inclusive lower bound (range, percent)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<i64>,

    /// Inclusive upper bound (range, percent)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Label,
    Subdomain,
    QualifiedName,
    Ipv4,
    Ipv6,
    Ip,
    Port,
    Range,
    Percent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    pub kind: CheckKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub valid: bool,
    pub messages: MessageList,
}

pub fn run(args: CheckArgs, _config: &AppConfig) -> CmdResult<CheckOutput> {
    let path = args
        .field
        .as_deref()
        .map(FieldPath::new)
        .unwrap_or_default();

    log_status!("check", "Checking {:?} as {:?}", args.value, args.kind);
    let messages = check(&args, &path)?;

    let exit_code = if messages.is_empty() { 0 } else { 1 };
    Ok((
        CheckOutput {
            kind: args.kind,
            valid: messages.is_empty(),
            field: args.field,
            value: args.value,
            messages,
        },
        exit_code,
    ))
}

fn check(args: &CheckArgs, path: &FieldPath) -> apicheck::Result<MessageList> {
    let value = args.value.as_str();

    let messages = match args.kind {
        // Family checks take the path themselves.
        CheckKind::Ipv4 => return Ok(validation::is_valid_ipv4_address(path, value)),
        CheckKind::Ipv6 => return Ok(validation::is_valid_ipv6_address(path, value)),

        CheckKind::Label => validation::is_dns1123_label(value),
        CheckKind::Subdomain => validation::is_dns1123_subdomain(value),
        CheckKind::QualifiedName => validation::is_qualified_name(value),
        CheckKind::Ip => validation::is_valid_ip(value),
        CheckKind::Port => validation::is_valid_port_num(parse_integer(value)?),
        CheckKind::Range => {
            let (min, max) = require_bounds(args)?;
            validation::is_in_range(parse_integer(value)?, min, max)
        }
        CheckKind::Percent => match (args.min, args.max) {
            (None, None) => validation::is_valid_percent(value),
            _ => {
                let (min, max) = require_bounds(args)?;
                validation::is_percent_in_range(value, min, max)
            }
        },
    };

    Ok(path.attach(messages))
}

fn parse_integer(value: &str) -> apicheck::Result<i64> {
    value.parse().map_err(|_| {
        Error::validation_invalid_argument(
            "value",
            "Value must be an integer",
            Some(value.to_string()),
        )
    })
}

fn require_bounds(args: &CheckArgs) -> apicheck::Result<(i64, i64)> {
    match (args.min, args.max) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(Error::validation_invalid_argument(
            "min/max",
            "Both --min and --max are required for bounded checks",
            None,
        )),
    }
}
