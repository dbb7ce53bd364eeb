//! Command-line definition and the single generate pass.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use envchart_common::config::GeneratorConfig;
use envchart_common::constants::{DEFAULT_APP_NAME, DEFAULT_ENV, DEFAULT_OUTPUT_ROOT};
use envchart_common::types::Environment;
use envchart_compose::composer::compose;
use envchart_compose::profile;
use envchart_compose::sink::YamlSynthesizer;

use crate::output;

/// envchart — Kubernetes manifests for development, staging, and production.
#[derive(Parser, Debug)]
#[command(name = "envchart", version, about, long_about = None)]
pub struct Cli {
    /// Environment to deploy (development, staging, production).
    #[arg(long, default_value = DEFAULT_ENV)]
    pub env: String,

    /// Application name; labels and resource names derive from it.
    #[arg(long, default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// Root directory; manifests go to `<out-dir>/<env>/`.
    #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
    pub out_dir: PathBuf,

    /// Print the rendered manifests instead of writing them.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Builds the generator configuration from the parsed flags.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            app_name: self.app_name.clone(),
            output_root: self.out_dir.clone(),
        }
    }
}

/// Runs one generate pass, writing human output to stdout.
///
/// # Errors
///
/// Returns an error if the app name is invalid or synthesis fails.
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if let Some(path) = run(cli, &mut stdout)? {
        tracing::debug!(path = %path.display(), "manifest file written");
    }
    Ok(())
}

/// Resolves, composes, and synthesizes, writing progress lines to `out`.
///
/// Returns the path of the written manifest file, or `None` on a dry run.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<Option<PathBuf>> {
    let config = cli.generator_config();
    config.validate()?;

    if Environment::from_key(&cli.env).is_none() {
        tracing::warn!(
            env = %cli.env,
            fallback = %Environment::default(),
            "unrecognized environment, using fallback profile"
        );
    }

    let profile = profile::resolve(&cli.env);
    let set = compose(&profile, &config.app_name);
    let out_dir = config.output_dir(profile.name);
    let mut synth = YamlSynthesizer::new(&out_dir, set.chart_id());
    set.emit(&mut synth)?;

    if cli.dry_run {
        tracing::info!(env = %profile.name, "dry run, nothing written");
        write!(out, "{}", synth.render()?)?;
        return Ok(None);
    }

    for line in output::profile_summary(&profile) {
        writeln!(out, "{line}")?;
    }
    let path = synth.synth()?;
    writeln!(out, "{}", output::success_line(&out_dir))?;
    Ok(Some(path))
}
