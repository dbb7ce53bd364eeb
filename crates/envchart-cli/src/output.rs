//! Human-readable progress lines printed around synthesis.

use std::path::Path;

use envchart_compose::profile::EnvironmentProfile;

/// Lines describing the profile about to be generated.
#[must_use]
pub fn profile_summary(profile: &EnvironmentProfile) -> Vec<String> {
    vec![
        format!("Generating manifests for {} environment...", profile.name),
        format!("Namespace: {}", profile.namespace),
        format!("Replicas: {}", profile.replicas),
        format!("Image: {}", profile.image_ref()),
        format!("Host: {}", profile.host),
    ]
}

/// Final line reporting where manifests were written.
#[must_use]
pub fn success_line(out_dir: &Path) -> String {
    format!("Manifests generated successfully in {}/", out_dir.display())
}
