//! Domain primitive types used across the envchart workspace.

use std::fmt;

use serde::Serialize;

/// Deployment environment a manifest set is generated for.
///
/// The set is closed: every run targets exactly one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development cluster.
    #[default]
    Development,
    /// Pre-production environment.
    Staging,
    /// Production environment.
    Production,
}

impl Environment {
    /// All environments, in promotion order.
    pub const ALL: [Self; 3] = [Self::Development, Self::Staging, Self::Production];

    /// Parses a command-line key into an environment.
    ///
    /// Accepts the canonical names plus the `prod` alias. Returns `None`
    /// for anything else; callers decide how to fall back.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "development" => Some(Self::Development),
            "staging" => Some(Self::Staging),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
