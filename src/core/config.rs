use crate::version::VersionFlag;

/// Process settings resolved once from the command line and passed to
/// command handlers explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub version: VersionFlag,
    /// Single-line JSON output instead of pretty-printed.
    pub compact: bool,
}

impl AppConfig {
    pub fn new(version: Option<VersionFlag>, compact: bool) -> Self {
        Self {
            version: version.unwrap_or_default(),
            compact,
        }
    }
}
