use clap::{Args, ValueEnum};
use serde::Serialize;

use apicheck::idutil::{IdGenerator, IdSettings};
use apicheck::log_status;
use apicheck::AppConfig;

use super::CmdResult;

#[derive(Args)]
pub struct IdArgs {
    /// Prefix prepended to the generated id (e.g. "user-")
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Alphabet used to encode the id
    #[arg(long, value_enum, default_value_t = Alphabet::Base62)]
    pub alphabet: Alphabet,

    /// Machine id embedded in the id (derived from the private IPv4 address when omitted)
    #[arg(long)]
    pub machine_id: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum Alphabet {
    #[value(name = "62")]
    #[serde(rename = "62")]
    Base62,
    #[value(name = "36")]
    #[serde(rename = "36")]
    Base36,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdOutput {
    pub id: String,
    pub alphabet: Alphabet,
    pub machine_id: u16,
}

pub fn run(args: IdArgs, _config: &AppConfig) -> CmdResult<IdOutput> {
    let generator = IdGenerator::new(IdSettings {
        machine_id: args.machine_id,
        ..IdSettings::default()
    })?;
    log_status!("id", "Generating id on machine {}", generator.machine_id());

    let id = match args.alphabet {
        Alphabet::Base62 => generator.get_uuid(&args.prefix)?,
        Alphabet::Base36 => generator.get_uuid36(&args.prefix)?,
    };

    Ok((
        IdOutput {
            id,
            alphabet: args.alphabet,
            machine_id: generator.machine_id(),
        },
        0,
    ))
}
