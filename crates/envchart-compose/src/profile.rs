//! Environment presets and key resolution.
//!
//! Three profiles are hardcoded. Adding a fourth means adding an
//! [`Environment`] variant and a match arm here; there is no file-based
//! registry.

use std::collections::BTreeMap;

use envchart_common::types::Environment;
use serde::Serialize;

/// Resolved configuration for one deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentProfile {
    /// Environment this profile describes.
    pub name: Environment,
    /// Namespace every generated resource is placed in.
    pub namespace: String,
    /// Number of pod replicas.
    pub replicas: u16,
    /// Container image repository.
    pub image: String,
    /// Container image tag.
    pub tag: String,
    /// Host routed by the ingress.
    pub host: String,
    /// Operational parameters exposed to the container through a config map.
    pub settings: BTreeMap<String, String>,
}

impl EnvironmentProfile {
    /// Returns the full image reference, `<image>:<tag>`.
    #[must_use]
    pub fn image_ref(&self) -> String {
        format!("{}:{}", self.image, self.tag)
    }
}

/// Resolves a command-line key to its profile.
///
/// Never fails: keys other than `development`, `staging`, `production`, and
/// `prod` silently resolve to the development profile.
#[must_use]
pub fn resolve(key: &str) -> EnvironmentProfile {
    profile(Environment::from_key(key).unwrap_or_default())
}

/// Returns the preset profile for an already-parsed environment.
#[must_use]
pub fn profile(env: Environment) -> EnvironmentProfile {
    match env {
        Environment::Production => EnvironmentProfile {
            name: env,
            namespace: "production".into(),
            replicas: 5,
            image: "nginx".into(),
            tag: "1.21.6".into(),
            host: "myapp-prod.example.com".into(),
            settings: settings(
                env,
                "warn",
                "postgres://prod-db:5432/myapp",
                "redis://prod-redis:6379",
                "100",
            ),
        },
        Environment::Staging => EnvironmentProfile {
            name: env,
            namespace: "staging".into(),
            replicas: 2,
            image: "nginx".into(),
            tag: "1.21.6".into(),
            host: "myapp-staging.example.com".into(),
            settings: settings(
                env,
                "info",
                "postgres://staging-db:5432/myapp",
                "redis://staging-redis:6379",
                "50",
            ),
        },
        Environment::Development => EnvironmentProfile {
            name: env,
            namespace: "default".into(),
            replicas: 1,
            image: "nginx".into(),
            tag: "1.19.10".into(),
            host: "myapp-dev.localhost".into(),
            settings: settings(
                env,
                "debug",
                "postgres://localhost:5432/myapp_dev",
                "redis://localhost:6379",
                "10",
            ),
        },
    }
}

fn settings(
    env: Environment,
    log_level: &str,
    database_url: &str,
    redis_url: &str,
    max_connections: &str,
) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("environment".to_string(), env.to_string()),
        ("log_level".to_string(), log_level.to_string()),
        ("database_url".to_string(), database_url.to_string()),
        ("redis_url".to_string(), redis_url.to_string()),
        ("max_connections".to_string(), max_connections.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_keys_resolve_to_closed_set() {
        for key in ["production", "prod", "staging", "development", "nope"] {
            let p = resolve(key);
            assert!(Environment::ALL.contains(&p.name), "{key} -> {:?}", p.name);
        }
    }

    #[test]
    fn prod_alias_matches_production() {
        assert_eq!(resolve("prod"), resolve("production"));
        assert_eq!(resolve("prod").name, Environment::Production);
    }

    #[test]
    fn unknown_key_falls_back_to_development() {
        // Typos silently produce a development profile. Kept as-is; the CLI warns.
        assert_eq!(resolve("prodution"), profile(Environment::Development));
        assert_eq!(resolve(""), profile(Environment::Development));
        assert_eq!(resolve("STAGING"), profile(Environment::Development));
    }

    #[test]
    fn replica_counts_per_environment() {
        assert_eq!(resolve("production").replicas, 5);
        assert_eq!(resolve("staging").replicas, 2);
        assert_eq!(resolve("development").replicas, 1);
    }

    #[test]
    fn staging_profile_values() {
        let p = resolve("staging");
        assert_eq!(p.namespace, "staging");
        assert_eq!(p.image_ref(), "nginx:1.21.6");
        assert_eq!(p.host, "myapp-staging.example.com");
    }

    #[test]
    fn development_uses_default_namespace_and_older_tag() {
        let p = resolve("development");
        assert_eq!(p.namespace, "default");
        assert_eq!(p.image_ref(), "nginx:1.19.10");
        assert_eq!(p.host, "myapp-dev.localhost");
    }

    #[test]
    fn every_profile_has_non_empty_fields() {
        for env in Environment::ALL {
            let p = profile(env);
            assert_eq!(p.name, env);
            assert!(!p.namespace.is_empty());
            assert!(!p.image.is_empty());
            assert!(!p.tag.is_empty());
            assert!(!p.host.is_empty());
            assert!(p.replicas > 0);
        }
    }

    #[test]
    fn settings_carry_environment_name_and_log_level() {
        let p = resolve("production");
        assert_eq!(p.settings.get("environment").map(String::as_str), Some("production"));
        assert_eq!(p.settings.get("log_level").map(String::as_str), Some("warn"));
        assert_eq!(p.settings.get("max_connections").map(String::as_str), Some("100"));
        assert_eq!(p.settings.len(), 5);
    }
}
