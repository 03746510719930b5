use strum::{Display, EnumIter};

pub mod function;

/// Kubernetes objects created on behalf of a function, named after it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DependentKind {
    Deployment,
    Pod,
    ConfigMap,
    HorizontalPodAutoscaler,
    Ingress,
    Service,
}
