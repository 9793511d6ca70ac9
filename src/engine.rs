//! Engine version pins.

use crate::constants::{defaults, DIST_TAGS, MAX_SUPPORTED_MAJOR};
use crate::error::{Error, Result};
use regex::Regex;
use std::fmt::Display;
use std::str::FromStr;

const RELEASE_PATTERN: &str = r"^(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z.-]+))?$";

/// Version of the engine a project is scaffolded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineVersion {
    /// A distribution tag such as `latest` or `next`; always the current major.
    Tag(String),
    Release { major: u64, minor: u64, patch: u64, pre: Option<String> },
}

impl EngineVersion {
    /// Default configuration file name for this engine version.
    ///
    /// 1.x only reads `.eleventy.js`; 2.0 and later read `eleventy.config.js`.
    pub fn default_config_file(&self) -> &'static str {
        match self {
            EngineVersion::Release { major: 0 | 1, .. } => defaults::LEGACY_CONFIG_FILE,
            _ => defaults::CONFIG_FILE,
        }
    }
}

impl Default for EngineVersion {
    fn default() -> Self {
        EngineVersion::Tag(crate::constants::DEFAULT_ENGINE_VERSION.to_string())
    }
}

impl FromStr for EngineVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if DIST_TAGS.contains(&s) {
            return Ok(EngineVersion::Tag(s.to_string()));
        }

        let release = Regex::new(RELEASE_PATTERN)?;
        let captures = release.captures(s).ok_or_else(|| Error::InvalidVersion {
            version: s.to_string(),
            reason: format!(
                "expected a version number (e.g. 3.0.0) or one of: {}",
                DIST_TAGS.join(", ")
            ),
        })?;

        let number = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|e| Error::InvalidVersion {
                version: s.to_string(),
                reason: e.to_string(),
            })
        };
        let major = number(1)?;
        if major > MAX_SUPPORTED_MAJOR {
            return Err(Error::InvalidVersion {
                version: s.to_string(),
                reason: format!(
                    "versions newer than {MAX_SUPPORTED_MAJOR}.x are not supported yet"
                ),
            });
        }

        Ok(EngineVersion::Release {
            major,
            minor: number(2)?,
            patch: number(3)?,
            pre: captures.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl Display for EngineVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineVersion::Tag(tag) => write!(f, "{tag}"),
            EngineVersion::Release { major, minor, patch, pre: None } => {
                write!(f, "{major}.{minor}.{patch}")
            }
            EngineVersion::Release { major, minor, patch, pre: Some(pre) } => {
                write!(f, "{major}.{minor}.{patch}-{pre}")
            }
        }
    }
}
