//! Startup configuration of the dashboard.
//!
//! Every option is resolved once, from the command line, the environment or
//! its compiled-in default (in that order), into an immutable
//! [`BootstrapConfig`].

use std::{path::PathBuf, time::Duration};

use secrecy::SecretString;
use strum::{Display, EnumString, EnumVariantNames};

mod error;
pub mod options;
mod resolver;
mod source;

pub use error::ConfigError;
pub use resolver::{
    ConfigResolver, NamespaceSource, NoNamespace, Resolved, ServiceAccountNamespace,
    SERVICE_ACCOUNT_NAMESPACE_PATH,
};
pub use source::{parse_bool, DefaultSource, EnvSource, FlagSource, OptionSource, Origin};

/// Used when no credential refresh interval is configured.
pub const DEFAULT_CREDS_REFRESH_INTERVAL: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum PlatformKind {
    Kube,
    Local,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum AuthorizationMode {
    ServiceAccount,
    AuthorizationHeaderOidc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum AuthKind {
    Nop,
    Iguazio,
}

/// How function templates are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateAcquisition {
    Git,
    Archive,
}

#[derive(Debug)]
pub struct BootstrapConfig {
    pub network: NetworkConfig,
    pub templates: TemplateSourceConfig,
    pub platform: PlatformConfig,
    pub auth: AuthConfig,
    pub docker_monitor: DockerMonitorConfig,
    pub build: BuildConfig,
    /// If true, assumes no internet connectivity.
    pub offline: bool,
    provenance: Vec<ProvenanceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Defaults to ":8070".
    pub listen_address: String,
    /// In the order given; duplicates are kept.
    pub external_ip_addresses: Vec<String>,
    pub registry_url: String,
    pub run_registry_url: String,
    /// Replaces base/on-build registry URLs when non-empty.
    pub dependant_image_registry_url: String,
}

#[derive(Debug)]
pub struct TemplateSourceConfig {
    pub git_repository: String,
    pub git_ref: String,
    pub git_username: String,
    pub git_password: SecretString,
    pub github_access_token: SecretString,
    /// Base64 encoded, decoded by the template fetcher.
    pub git_ca_cert_contents: SecretString,
    pub archive_address: String,
}

impl TemplateSourceConfig {
    pub fn acquisition(&self) -> TemplateAcquisition {
        if self.git_repository.is_empty() {
            TemplateAcquisition::Archive
        } else {
            TemplateAcquisition::Git
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub kind: PlatformKind,
    /// Empty unless given explicitly, through the environment
    /// or by the service account the dashboard runs as.
    pub namespace: String,
    pub authorization_mode: AuthorizationMode,
    pub configuration_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub kind: AuthKind,
    /// Only meaningful when `kind` is not `Nop`.
    pub iguazio: IguazioAuthConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IguazioAuthConfig {
    pub verification_url: String,
    pub verification_method: String,
    pub verification_data_enrichment_url: String,
    pub timeout: Option<Duration>,
    pub cache_size: Option<usize>,
    pub cache_expiration_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerMonitorConfig {
    pub enabled: bool,
    pub interval: Duration,
    /// Consecutive failed probes before the daemon is declared unhealthy.
    pub max_consecutive_errors: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub docker_key_dir: String,
    pub no_pull_base_images: bool,
    /// `None` disables credential refreshing.
    pub creds_refresh_interval: Option<Duration>,
    pub image_name_prefix_template: String,
}

/// Records which source supplied an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceEntry {
    pub flag: &'static str,
    pub origin: Origin,
    /// Redacted for secret options.
    pub value: String,
}

impl BootstrapConfig {
    pub fn origin(&self, flag: &str) -> Option<Origin> {
        self.provenance
            .iter()
            .find(|entry| entry.flag == flag)
            .map(|entry| entry.origin)
    }

    pub fn provenance(&self) -> &[ProvenanceEntry] {
        &self.provenance
    }

    pub fn log_provenance(&self) {
        for entry in &self.provenance {
            tracing::debug!(
                flag = entry.flag,
                origin = %entry.origin,
                value = %entry.value,
                "Resolved option"
            );
        }
    }
}
