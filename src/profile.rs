use serde::Deserialize;
use thiserror::Error;

/// Product name prefix the server reports when it is DB2 for i.
pub const DB2I_PRODUCT_NAME_PREFIX: &str = "DB2 UDB for AS/400";

/// Connection-level facts about the target database.
///
/// The host application owns drivers and probing; it hands the results over
/// here (usually from a YAML settings block) and this crate only consumes
/// them when constructing the dialect.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Db2iProfile {
    #[serde(default = "default_short_name")]
    pub short_name: String,

    /// Product name reported by the server, when known.
    #[serde(default)]
    pub product_name: Option<String>,

    /// Major version reported by the host's probe; absent when the probe
    /// failed or never ran.
    #[serde(default)]
    pub major_version: Option<u32>,

    /// Whether the server catalog lists a native BOOLEAN type.
    #[serde(default)]
    pub supports_boolean_type: bool,
}

fn default_short_name() -> String {
    "db2i".to_string()
}

impl Default for Db2iProfile {
    fn default() -> Self {
        Db2iProfile {
            short_name: default_short_name(),
            product_name: None,
            major_version: None,
            supports_boolean_type: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("could not parse dialect profile: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl Db2iProfile {
    /// Parses a profile from YAML text. Reading the text from wherever it
    /// lives is the caller's concern.
    pub fn from_yaml(contents: &str) -> Result<Self, ProfileError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Whether a reported product name identifies DB2 for i.
    pub fn matches_product_name(name: &str) -> bool {
        name.starts_with(DB2I_PRODUCT_NAME_PREFIX)
    }
}
