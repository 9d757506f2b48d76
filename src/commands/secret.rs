use clap::{Args, ValueEnum};
use serde::Serialize;

use apicheck::idutil::{new_secret_id, new_secret_key};
use apicheck::AppConfig;

use super::CmdResult;

#[derive(Args)]
pub struct SecretArgs {
    /// Secret shape: a 36 character id or a 32 character key
    #[arg(long, value_enum, default_value_t = SecretKind::Key)]
    pub kind: SecretKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretKind {
    Id,
    Key,
}

#[derive(Debug, Serialize)]
pub struct SecretOutput {
    pub kind: SecretKind,
    pub secret: String,
}

pub fn run(args: SecretArgs, _config: &AppConfig) -> CmdResult<SecretOutput> {
    let secret = match args.kind {
        SecretKind::Id => new_secret_id(),
        SecretKind::Key => new_secret_key(),
    };

    Ok((
        SecretOutput {
            kind: args.kind,
            secret,
        },
        0,
    ))
}
