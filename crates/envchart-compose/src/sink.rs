//! Destinations for composed manifests.
//!
//! The composer only ever writes to a [`ManifestSink`]; it never reads back.
//! [`MemorySink`] keeps manifests in memory, [`YamlSynthesizer`] renders them
//! into one multi-document YAML file per chart.

use std::path::{Path, PathBuf};

use envchart_common::constants::MANIFEST_EXTENSION;
use envchart_common::error::{EnvchartError, Result};

use crate::manifest::Manifest;

/// Accepts resource descriptions one at a time.
pub trait ManifestSink {
    /// Takes ownership of one manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot take the manifest.
    fn accept(&mut self, manifest: Manifest) -> Result<()>;
}

/// Collects manifests in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    manifests: Vec<Manifest>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            manifests: Vec::new(),
        }
    }

    /// Returns the collected manifests.
    #[must_use]
    pub fn manifests(&self) -> &[Manifest] {
        &self.manifests
    }

    /// Consumes the sink, returning the collected manifests.
    #[must_use]
    pub fn into_manifests(self) -> Vec<Manifest> {
        self.manifests
    }
}

impl ManifestSink for MemorySink {
    fn accept(&mut self, manifest: Manifest) -> Result<()> {
        self.manifests.push(manifest);
        Ok(())
    }
}

/// Buffers manifests for one chart and writes them as a single YAML stream.
#[derive(Debug)]
pub struct YamlSynthesizer {
    out_dir: PathBuf,
    chart_id: String,
    manifests: Vec<Manifest>,
}

impl YamlSynthesizer {
    /// Creates a synthesizer writing `<out_dir>/<chart_id>.k8s.yaml`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>, chart_id: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            chart_id: chart_id.into(),
            manifests: Vec::new(),
        }
    }

    /// Returns the path [`synth`](Self::synth) writes to.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}{MANIFEST_EXTENSION}", self.chart_id))
    }

    /// Number of manifests accepted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    /// Returns `true` if no manifest has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }

    /// Renders all accepted manifests as YAML documents separated by `---`.
    ///
    /// # Errors
    ///
    /// Returns an error if any manifest fails to serialize.
    pub fn render(&self) -> Result<String> {
        let docs = self
            .manifests
            .iter()
            .map(Manifest::to_yaml)
            .collect::<Result<Vec<_>>>()?;
        Ok(docs.join("---\n"))
    }

    /// Writes the rendered stream to disk, creating the output directory.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the directory or file cannot
    /// be written.
    pub fn synth(&self) -> Result<PathBuf> {
        let rendered = self.render()?;
        create_dir(&self.out_dir)?;
        let path = self.output_path();
        std::fs::write(&path, rendered).map_err(|e| EnvchartError::Io {
            path: path.clone(),
            source: e,
        })?;
        tracing::info!(
            path = %path.display(),
            manifests = self.manifests.len(),
            "synthesized manifests"
        );
        Ok(path)
    }
}

impl ManifestSink for YamlSynthesizer {
    fn accept(&mut self, manifest: Manifest) -> Result<()> {
        self.manifests.push(manifest);
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| EnvchartError::Io {
        path: dir.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::ConfigMap;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    fn config_map(name: &str) -> Manifest {
        Manifest::from(ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn memory_sink_keeps_arrival_order() {
        let mut sink = MemorySink::new();
        sink.accept(config_map("a")).expect("accept");
        sink.accept(config_map("b")).expect("accept");
        let names: Vec<_> = sink.manifests().iter().map(Manifest::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(sink.into_manifests().len(), 2);
    }

    #[test]
    fn output_path_uses_chart_id_and_extension() {
        let synth = YamlSynthesizer::new("dist/staging", "app-staging");
        assert_eq!(
            synth.output_path(),
            Path::new("dist/staging").join("app-staging.k8s.yaml")
        );
        assert!(synth.is_empty());
    }

    #[test]
    fn render_separates_documents() {
        let mut synth = YamlSynthesizer::new("unused", "chart");
        synth.accept(config_map("first")).expect("accept");
        synth.accept(config_map("second")).expect("accept");
        let rendered = synth.render().expect("render");
        assert_eq!(rendered.matches("---\n").count(), 1);
        assert!(rendered.find("first") < rendered.find("second"));
        assert_eq!(synth.len(), 2);
    }

    #[test]
    fn synth_creates_directory_and_writes_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out_dir = tmp.path().join("dist").join("development");
        let mut synth = YamlSynthesizer::new(&out_dir, "app-development");
        synth.accept(config_map("my-app-config")).expect("accept");

        let path = synth.synth().expect("synth");
        assert_eq!(path, out_dir.join("app-development.k8s.yaml"));
        let written = std::fs::read_to_string(&path).expect("read");
        assert!(written.contains("kind: ConfigMap"), "got: {written}");
        assert!(written.contains("name: my-app-config"), "got: {written}");
    }

    #[test]
    fn synth_reports_unwritable_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let blocker = tmp.path().join("dist");
        std::fs::write(&blocker, "not a directory").expect("write");
        let synth = YamlSynthesizer::new(blocker.join("staging"), "app-staging");

        let err = synth.synth().unwrap_err();
        assert!(matches!(err, EnvchartError::Io { .. }), "got: {err}");
    }
}
