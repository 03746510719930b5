//! Names of the Kubernetes objects that belong to a function.
//!
//! Every kind but the cron job shares the same name; the API server keeps
//! kinds apart. Callers must keep function names unique per namespace and
//! trigger names unique per function. Empty names are not rejected: they
//! produce `nuclio-` and `nuclio--<trigger>`.

use super::DependentKind;

pub const NAME_PREFIX: &str = "nuclio";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionIdentity {
    name: String,
}

impl FunctionIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object_name(&self, kind: DependentKind) -> String {
        object_name(kind, &self.name)
    }

    pub fn cron_job_name(&self, trigger_name: &str) -> String {
        cron_job_name(&self.name, trigger_name)
    }
}

pub fn object_name(kind: DependentKind, function_name: &str) -> String {
    match kind {
        DependentKind::Deployment
        | DependentKind::Pod
        | DependentKind::ConfigMap
        | DependentKind::HorizontalPodAutoscaler
        | DependentKind::Ingress
        | DependentKind::Service => format!("{}-{}", NAME_PREFIX, function_name),
    }
}

pub fn deployment_name(function_name: &str) -> String {
    object_name(DependentKind::Deployment, function_name)
}

pub fn pod_name(function_name: &str) -> String {
    object_name(DependentKind::Pod, function_name)
}

pub fn config_map_name(function_name: &str) -> String {
    object_name(DependentKind::ConfigMap, function_name)
}

pub fn hpa_name(function_name: &str) -> String {
    object_name(DependentKind::HorizontalPodAutoscaler, function_name)
}

pub fn ingress_name(function_name: &str) -> String {
    object_name(DependentKind::Ingress, function_name)
}

pub fn service_name(function_name: &str) -> String {
    object_name(DependentKind::Service, function_name)
}

/// One cron job per cron trigger of the function.
pub fn cron_job_name(function_name: &str, trigger_name: &str) -> String {
    format!("{}-{}-{}", NAME_PREFIX, function_name, trigger_name)
}
