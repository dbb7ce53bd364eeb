//! Builds the manifest set for one environment profile.
//!
//! The deployment's pod labels, its selector, and the service selector all
//! come from one label map, and the ingress backend points at the service by
//! the name generated here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use envchart_common::config::environment_dir;
use envchart_common::constants::{
    APP_LABEL_KEY, CONFIG_SUFFIX, CONTAINER_NAME, DEPLOYMENT_SUFFIX, HTTP_PORT, HTTP_PORT_NAME,
    HTTP_PROTOCOL, INGRESS_CLASS, INGRESS_CLASS_ANNOTATION, INGRESS_PATH, INGRESS_PATH_TYPE,
    INGRESS_SUFFIX, SERVICE_SUFFIX, SERVICE_TYPE,
};
use envchart_common::error::Result;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    ConfigMap, ConfigMapEnvSource, Container, ContainerPort, EnvFromSource, PodSpec,
    PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use crate::manifest::Manifest;
use crate::profile::EnvironmentProfile;
use crate::sink::ManifestSink;

/// The resources generated for one profile.
///
/// The deployment, service, and ingress form the core set. The settings
/// config map is generated on top of them so the container receives the
/// profile's settings as environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSet {
    /// Profile the set was composed from.
    pub profile: EnvironmentProfile,
    /// Settings config map loaded by the container.
    pub config_map: ConfigMap,
    /// The workload.
    pub deployment: Deployment,
    /// ClusterIP service selecting the workload's pods.
    pub service: Service,
    /// Route from the profile's host to the service.
    pub ingress: Ingress,
}

impl ManifestSet {
    /// Hands every resource to `sink`, config map first and ingress last.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink.
    pub fn emit<S: ManifestSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for manifest in self.manifests() {
            tracing::debug!(kind = manifest.kind(), name = manifest.name(), "emitting manifest");
            sink.accept(manifest)?;
        }
        Ok(())
    }

    /// Returns the resources wrapped as [`Manifest`]s, in emission order.
    #[must_use]
    pub fn manifests(&self) -> Vec<Manifest> {
        vec![
            Manifest::from(self.config_map.clone()),
            Manifest::from(self.deployment.clone()),
            Manifest::from(self.service.clone()),
            Manifest::from(self.ingress.clone()),
        ]
    }

    /// Returns `<root>/<environment>`, where synthesis writes this set.
    #[must_use]
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        environment_dir(root, self.profile.name)
    }

    /// Returns the chart identifier, `app-<environment>`.
    #[must_use]
    pub fn chart_id(&self) -> String {
        format!("app-{}", self.profile.name)
    }
}

/// Returns the label set shared by the pod template and the service selector.
#[must_use]
pub fn app_labels(app_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(APP_LABEL_KEY.to_string(), app_name.to_string())])
}

/// Returns the service name derived from `app_name`.
#[must_use]
pub fn service_name(app_name: &str) -> String {
    format!("{app_name}{SERVICE_SUFFIX}")
}

/// Returns the ingress name derived from `app_name`.
#[must_use]
pub fn ingress_name(app_name: &str) -> String {
    format!("{app_name}{INGRESS_SUFFIX}")
}

/// Composes the manifest set for `profile`.
///
/// Pure: the same inputs always produce an equal set.
#[must_use]
pub fn compose(profile: &EnvironmentProfile, app_name: &str) -> ManifestSet {
    tracing::debug!(env = %profile.name, app = app_name, "composing manifests");

    let labels = app_labels(app_name);
    let config_name = format!("{app_name}{CONFIG_SUFFIX}");
    let service_name = service_name(app_name);

    ManifestSet {
        profile: profile.clone(),
        config_map: config_map(profile, &config_name),
        deployment: deployment(profile, app_name, &labels, &config_name),
        service: service(profile, &service_name, &labels),
        ingress: ingress(profile, app_name, &service_name),
    }
}

fn metadata(profile: &EnvironmentProfile, name: String) -> ObjectMeta {
    ObjectMeta {
        name: Some(name),
        namespace: Some(profile.namespace.clone()),
        ..Default::default()
    }
}

fn config_map(profile: &EnvironmentProfile, name: &str) -> ConfigMap {
    ConfigMap {
        metadata: metadata(profile, name.to_string()),
        data: Some(profile.settings.clone()),
        ..Default::default()
    }
}

fn deployment(
    profile: &EnvironmentProfile,
    app_name: &str,
    labels: &BTreeMap<String, String>,
    config_name: &str,
) -> Deployment {
    Deployment {
        metadata: metadata(profile, format!("{app_name}{DEPLOYMENT_SUFFIX}")),
        spec: Some(DeploymentSpec {
            replicas: Some(i32::from(profile.replicas)),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels.clone()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: CONTAINER_NAME.to_string(),
                        image: Some(profile.image_ref()),
                        ports: Some(vec![ContainerPort {
                            container_port: HTTP_PORT,
                            name: Some(HTTP_PORT_NAME.to_string()),
                            protocol: Some(HTTP_PROTOCOL.to_string()),
                            ..Default::default()
                        }]),
                        env_from: Some(vec![EnvFromSource {
                            config_map_ref: Some(ConfigMapEnvSource {
                                name: config_name.to_string(),
                                ..Default::default()
                            }),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn service(
    profile: &EnvironmentProfile,
    name: &str,
    labels: &BTreeMap<String, String>,
) -> Service {
    Service {
        metadata: metadata(profile, name.to_string()),
        spec: Some(ServiceSpec {
            type_: Some(SERVICE_TYPE.to_string()),
            selector: Some(labels.clone()),
            ports: Some(vec![ServicePort {
                name: Some(HTTP_PORT_NAME.to_string()),
                port: HTTP_PORT,
                target_port: Some(IntOrString::String(HTTP_PORT_NAME.to_string())),
                protocol: Some(HTTP_PROTOCOL.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn ingress(profile: &EnvironmentProfile, app_name: &str, service_name: &str) -> Ingress {
    let mut meta = metadata(profile, ingress_name(app_name));
    meta.annotations = Some(BTreeMap::from([(
        INGRESS_CLASS_ANNOTATION.to_string(),
        INGRESS_CLASS.to_string(),
    )]));

    Ingress {
        metadata: meta,
        spec: Some(IngressSpec {
            rules: Some(vec![IngressRule {
                host: Some(profile.host.clone()),
                http: Some(HTTPIngressRuleValue {
                    paths: vec![HTTPIngressPath {
                        path: Some(INGRESS_PATH.to_string()),
                        path_type: INGRESS_PATH_TYPE.to_string(),
                        backend: IngressBackend {
                            service: Some(IngressServiceBackend {
                                name: service_name.to_string(),
                                port: Some(ServiceBackendPort {
                                    number: Some(HTTP_PORT),
                                    name: None,
                                }),
                            }),
                            resource: None,
                        },
                    }],
                }),
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
