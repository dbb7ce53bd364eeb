//! # envchart-compose
//!
//! Turns an environment name into Kubernetes manifests.
//!
//! Handles:
//! - **Profile**: The closed table of environment presets and key resolution.
//! - **Composer**: Building the Deployment, Service, Ingress, and settings
//!   ConfigMap for one profile.
//! - **Manifest**: The typed resource wrapper handed to sinks.
//! - **Sink**: The `ManifestSink` seam, an in-memory collector, and the YAML
//!   synthesizer that writes `<out_dir>/<chart>.k8s.yaml`.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod composer;
pub mod manifest;
pub mod profile;
pub mod sink;
