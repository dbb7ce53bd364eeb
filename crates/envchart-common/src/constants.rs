//! Naming conventions and fixed values shared by the composer and the CLI.

/// Application name used when none is given on the command line.
pub const DEFAULT_APP_NAME: &str = "my-app";

/// Root directory that receives one subdirectory per environment.
pub const DEFAULT_OUTPUT_ROOT: &str = "dist";

/// Environment selected when `--env` is omitted.
pub const DEFAULT_ENV: &str = "development";

/// Label key shared by the pod template and the service selector.
pub const APP_LABEL_KEY: &str = "app";

/// Name of the single application container.
pub const CONTAINER_NAME: &str = "app-container";

/// Port exposed by the container, the service, and the ingress backend.
pub const HTTP_PORT: i32 = 80;

/// Name of the exposed container port, also used as the service target port.
pub const HTTP_PORT_NAME: &str = "http";

/// Transport protocol for the exposed port.
pub const HTTP_PROTOCOL: &str = "TCP";

/// Service type; the service is only reachable inside the cluster.
pub const SERVICE_TYPE: &str = "ClusterIP";

/// Ingress class annotation key.
pub const INGRESS_CLASS_ANNOTATION: &str = "kubernetes.io/ingress.class";

/// Ingress controller that serves the generated route.
pub const INGRESS_CLASS: &str = "nginx";

/// Path routed by the ingress rule.
pub const INGRESS_PATH: &str = "/";

/// Path match type for the ingress rule.
pub const INGRESS_PATH_TYPE: &str = "Prefix";

/// Suffix appended to the app name for the deployment.
pub const DEPLOYMENT_SUFFIX: &str = "-deployment";

/// Suffix appended to the app name for the service.
pub const SERVICE_SUFFIX: &str = "-service";

/// Suffix appended to the app name for the ingress.
pub const INGRESS_SUFFIX: &str = "-ingress";

/// Suffix appended to the app name for the settings config map.
pub const CONFIG_SUFFIX: &str = "-config";

/// File extension of synthesized manifest files.
pub const MANIFEST_EXTENSION: &str = ".k8s.yaml";

/// Maximum length of a Kubernetes object name that must be a DNS-1123 label.
pub const MAX_LABEL_LENGTH: usize = 63;

