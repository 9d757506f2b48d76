//! Build metadata and the `--version` flag value.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

const RAW: &str = "raw";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub git_version: String,
    pub git_commit: String,
    pub git_tree_state: String,
    pub build_date: String,
    pub rust_version: String,
    pub compiler: String,
    pub platform: String,
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.git_version)
    }
}

/// Metadata baked in at compile time. Unset build variables read as "unknown".
pub fn get() -> Info {
    Info {
        git_version: format!("v{}", env!("CARGO_PKG_VERSION")),
        git_commit: option_env!("APICHECK_GIT_COMMIT")
            .unwrap_or("unknown")
            .to_string(),
        git_tree_state: option_env!("APICHECK_GIT_TREE_STATE")
            .unwrap_or("unknown")
            .to_string(),
        build_date: option_env!("APICHECK_BUILD_DATE")
            .unwrap_or("unknown")
            .to_string(),
        rust_version: option_env!("APICHECK_RUSTC_VERSION")
            .unwrap_or("unknown")
            .to_string(),
        compiler: "rustc".to_string(),
        platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
    }
}

/// Value of `-V/--version`. A bare flag means `On`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFlag {
    #[default]
    Off,
    On,
    Raw,
}

impl FromStr for VersionFlag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            RAW => Ok(VersionFlag::Raw),
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(VersionFlag::On),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(VersionFlag::Off),
            other => Err(Error::validation_invalid_argument(
                "version",
                "expected a boolean or 'raw'",
                Some(other.to_string()),
            )),
        }
    }
}

impl fmt::Display for VersionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionFlag::Raw => write!(f, "{}", RAW),
            VersionFlag::On => write!(f, "true"),
            VersionFlag::Off => write!(f, "false"),
        }
    }
}

/// Write version output for `flag` to `out`. Returns whether anything was
/// written; the caller decides whether to exit.
pub fn print_if_requested(flag: VersionFlag, app_name: &str, out: &mut impl Write) -> Result<bool> {
    let info = get();
    let written = match flag {
        VersionFlag::Off => return Ok(false),
        VersionFlag::On => writeln!(out, "{} {}", app_name, info.git_version),
        VersionFlag::Raw => {
            let payload = serde_json::to_string_pretty(&info).map_err(|e| {
                Error::internal_json(e.to_string(), Some("serialize version".to_string()))
            })?;
            writeln!(out, "{}", payload)
        }
    };

    written.map_err(|e| Error::internal_io(e.to_string(), Some("write version".to_string())))?;
    Ok(true)
}
