use crate::error::Result;
use crate::models::{Architecture, Repository};
use log::debug;

/// Search settings, built once from the command line and passed by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub arch: Option<Architecture>,
    pub repo: Option<Repository>,
    pub debug: bool,
}

impl SearchConfig {
    /// Validate raw `arch`/`repo` values against their allow-lists.
    ///
    /// Empty strings mean "no filter", matching the flag defaults.
    pub fn new(arch: Option<&str>, repo: Option<&str>, debug: bool) -> Result<Self> {
        let arch = match arch {
            Some(value) if !value.is_empty() => Some(value.parse::<Architecture>()?),
            _ => None,
        };
        let repo = match repo {
            Some(value) if !value.is_empty() => Some(value.parse::<Repository>()?),
            _ => None,
        };

        let config = Self { arch, repo, debug };
        debug!("Using search config: {config:?}");
        Ok(config)
    }
}
