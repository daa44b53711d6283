use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Privilege rank symbols whose holders may use moderation commands.
pub const PRIVILEGED_RANKS: &[char] = &['~', '#', '*', '&', '@', '%'];

/// Prefix that introduces a chat command, e.g. `.gitban`.
pub const COMMAND_PREFIX: char = '.';

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read configuration file `{path}`")]
    Read {
        path: String,
        #[source]
        error: std::io::Error,
    },
    #[error("cannot parse configuration file `{path}`")]
    Parse {
        path: String,
        #[source]
        error: toml::de::Error,
    },
}

/// Static relay configuration loaded from a TOML file.
///
/// Holds the tables that drive attribution and routing: which branch is
/// announced, which repositories are mirrored to the staff channel, and the
/// display-name lookups for repositories and actors.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct RelayConfig {
    /// Only pushes to this branch are announced.
    pub default_branch: String,
    /// Repositories whose push announcements are mirrored to the staff channel.
    pub staff_repositories: HashSet<String>,
    /// Maps repository identifiers to short display tags.
    /// Unknown repositories fall back to their lowercased identifier.
    pub repository_names: HashMap<String, String>,
    /// Maps normalized actor identities to chat usernames.
    pub usernames: HashMap<String, String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            default_branch: "master".to_string(),
            staff_repositories: HashSet::new(),
            repository_names: HashMap::new(),
            usernames: HashMap::new(),
        }
    }
}

impl RelayConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.display().to_string(),
            error,
        })?;
        toml::from_str(&content).map_err(|error| ConfigError::Parse {
            path: path.display().to_string(),
            error,
        })
    }
}
