//! Typed Kubernetes resources handed to a [`ManifestSink`](crate::sink::ManifestSink).

use envchart_common::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Service};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::Resource;
use serde::Serialize;

/// One resource of a manifest set.
///
/// Serializes as the wrapped resource, including its own `apiVersion` and
/// `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(
    clippy::large_enum_variant,
    reason = "at most four manifests exist per run and each is moved once into a sink"
)]
pub enum Manifest {
    /// Settings exposed to the workload.
    ConfigMap(ConfigMap),
    /// The workload.
    Deployment(Deployment),
    /// In-cluster network service in front of the workload.
    Service(Service),
    /// External route to the service.
    Ingress(Ingress),
}

impl Manifest {
    /// Returns the Kubernetes kind, e.g. `Deployment`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ConfigMap(_) => ConfigMap::KIND,
            Self::Deployment(_) => Deployment::KIND,
            Self::Service(_) => Service::KIND,
            Self::Ingress(_) => Ingress::KIND,
        }
    }

    /// Returns the object metadata.
    #[must_use]
    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Self::ConfigMap(r) => &r.metadata,
            Self::Deployment(r) => &r.metadata,
            Self::Service(r) => &r.metadata,
            Self::Ingress(r) => &r.metadata,
        }
    }

    /// Returns the object name, or an empty string if unnamed.
    #[must_use]
    pub fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or_default()
    }

    /// Renders this resource as a single YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<ConfigMap> for Manifest {
    fn from(r: ConfigMap) -> Self {
        Self::ConfigMap(r)
    }
}

impl From<Deployment> for Manifest {
    fn from(r: Deployment) -> Self {
        Self::Deployment(r)
    }
}

impl From<Service> for Manifest {
    fn from(r: Service) -> Self {
        Self::Service(r)
    }
}

impl From<Ingress> for Manifest {
    fn from(r: Ingress) -> Self {
        Self::Ingress(r)
    }
}
