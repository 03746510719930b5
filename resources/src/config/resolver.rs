use std::{
    fs,
    io::ErrorKind,
    num::ParseIntError,
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use secrecy::SecretString;
use strum::VariantNames;

use super::{
    options::{self, OptionSpec},
    source::{parse_bool, DefaultSource, EnvSource, FlagSource, OptionSource, Origin},
    AuthConfig, BootstrapConfig, BuildConfig, ConfigError, DockerMonitorConfig,
    IguazioAuthConfig, NetworkConfig, PlatformConfig, PlatformKind, ProvenanceEntry,
    TemplateSourceConfig, DEFAULT_CREDS_REFRESH_INTERVAL,
};

pub const SERVICE_ACCOUNT_NAMESPACE_PATH: &str =
    "/var/run/secrets/kubernetes.io/serviceaccount/namespace";

const REDACTED: &str = "<redacted>";

/// Last resort for the namespace, consulted after flags and environment.
pub trait NamespaceSource {
    fn namespace(&self) -> std::io::Result<Option<String>>;
}

/// Reads the namespace of the service account mounted into the pod.
#[derive(Debug, Clone)]
pub struct ServiceAccountNamespace {
    path: PathBuf,
}

impl ServiceAccountNamespace {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ServiceAccountNamespace {
    fn default() -> Self {
        Self::new(SERVICE_ACCOUNT_NAMESPACE_PATH)
    }
}

impl NamespaceSource for ServiceAccountNamespace {
    fn namespace(&self) -> std::io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let namespace = contents.trim();
                Ok((!namespace.is_empty()).then(|| namespace.to_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Never yields a namespace, for running outside a cluster.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNamespace;

impl NamespaceSource for NoNamespace {
    fn namespace(&self) -> std::io::Result<Option<String>> {
        Ok(None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub origin: Origin,
}

pub struct ConfigResolver {
    sources: Vec<Box<dyn OptionSource>>,
    namespace_source: Box<dyn NamespaceSource>,
}

impl ConfigResolver {
    pub fn new(flags: FlagSource, env: EnvSource) -> Self {
        Self {
            sources: vec![Box::new(flags), Box::new(env), Box::new(DefaultSource)],
            namespace_source: Box::new(ServiceAccountNamespace::default()),
        }
    }

    pub fn with_namespace_source(mut self, source: impl NamespaceSource + 'static) -> Self {
        self.namespace_source = Box::new(source);
        self
    }

    /// The first source that has a value for the option wins.
    pub fn resolve_raw(&self, spec: &OptionSpec) -> Resolved {
        self.sources
            .iter()
            .find_map(|source| {
                source.lookup(spec).map(|value| Resolved {
                    value,
                    origin: source.origin(),
                })
            })
            .unwrap_or_else(|| Resolved {
                value: spec.default.to_owned(),
                origin: Origin::Default,
            })
    }

    /// Flag, then environment, then the in-cluster service account.
    /// Empty values fall through at every stage.
    pub fn resolve_namespace(&self, platform: PlatformKind) -> Result<Resolved, ConfigError> {
        let explicit = self.sources.iter().find_map(|source| {
            source
                .lookup(&options::NAMESPACE)
                .filter(|value| !value.is_empty())
                .map(|value| Resolved {
                    value,
                    origin: source.origin(),
                })
        });
        if let Some(resolved) = explicit {
            return Ok(resolved);
        }

        match self.namespace_source.namespace() {
            Ok(Some(value)) => {
                return Ok(Resolved {
                    value,
                    origin: Origin::InCluster,
                })
            }
            Ok(None) => {}
            // the local platform never needs a namespace
            Err(e) if platform == PlatformKind::Local => {
                tracing::warn!("Ignoring in-cluster namespace lookup failure: {}", e);
            }
            Err(e) => return Err(ConfigError::NamespaceLookup(e)),
        }

        if platform == PlatformKind::Kube {
            return Err(ConfigError::NamespaceUnresolved {
                platform: platform.to_string(),
            });
        }
        Ok(Resolved {
            value: options::NAMESPACE.default.to_owned(),
            origin: Origin::Default,
        })
    }

    pub fn resolve(&self) -> Result<BootstrapConfig, ConfigError> {
        let mut b = Builder {
            resolver: self,
            provenance: Vec::with_capacity(options::OPTIONS.len()),
        };

        let platform_kind: PlatformKind = b.variant(&options::PLATFORM)?;
        let namespace = self.resolve_namespace(platform_kind)?;
        b.record(&options::NAMESPACE, &namespace);

        let network = NetworkConfig {
            listen_address: b.text(&options::LISTEN_ADDR),
            external_ip_addresses: split_addresses(&b.text(&options::EXTERNAL_IP_ADDRESSES)),
            registry_url: b.text(&options::REGISTRY),
            run_registry_url: b.text(&options::RUN_REGISTRY),
            dependant_image_registry_url: b.text(&options::DEPENDANT_IMAGE_REGISTRY),
        };

        let templates = TemplateSourceConfig {
            git_repository: b.text(&options::TEMPLATES_GIT_REPOSITORY),
            git_ref: b.text(&options::TEMPLATES_GIT_REF),
            git_username: b.text(&options::TEMPLATES_GIT_USERNAME),
            git_password: b.secret(&options::TEMPLATES_GIT_PASSWORD),
            github_access_token: b.secret(&options::TEMPLATES_GITHUB_ACCESS_TOKEN),
            git_ca_cert_contents: b.secret(&options::TEMPLATES_GIT_CA_CERT_CONTENTS),
            archive_address: b.text(&options::TEMPLATES_ARCHIVE_ADDRESS),
        };

        let platform = PlatformConfig {
            kind: platform_kind,
            namespace: namespace.value,
            authorization_mode: b.variant(&options::PLATFORM_AUTHORIZATION_MODE)?,
            configuration_path: PathBuf::from(b.text(&options::PLATFORM_CONFIG)),
        };

        let auth = AuthConfig {
            kind: b.variant(&options::AUTH_CONFIG_KIND)?,
            iguazio: IguazioAuthConfig {
                verification_url: b.text(&options::AUTH_CONFIG_IGUAZIO_VERIFICATION_URL),
                verification_method: b.text(&options::AUTH_CONFIG_IGUAZIO_VERIFICATION_METHOD),
                verification_data_enrichment_url: b
                    .text(&options::AUTH_CONFIG_IGUAZIO_VERIFICATION_DATA_ENRICHMENT_URL),
                timeout: b.optional_duration(&options::AUTH_CONFIG_IGUAZIO_TIMEOUT)?,
                cache_size: b.optional_integer(&options::AUTH_CONFIG_IGUAZIO_CACHE_SIZE)?,
                cache_expiration_timeout: b
                    .duration(&options::AUTH_CONFIG_IGUAZIO_CACHE_EXPIRATION_TIMEOUT)?,
            },
        };

        let docker_monitor = DockerMonitorConfig {
            enabled: b.boolean(&options::MONITOR_DOCKER_DEAMON)?,
            interval: b.duration(&options::MONITOR_DOCKER_DEAMON_INTERVAL)?,
            max_consecutive_errors: b
                .integer(&options::MONITOR_DOCKER_DEAMON_MAX_CONSECUTIVE_ERRORS)?,
        };

        let build = BuildConfig {
            docker_key_dir: b.text(&options::DOCKER_KEY_DIR),
            no_pull_base_images: b.boolean(&options::NO_PULL)?,
            creds_refresh_interval: b.refresh_interval(&options::CREDS_REFRESH_INTERVAL)?,
            image_name_prefix_template: b.text(&options::IMAGE_NAME_PREFIX_TEMPLATE),
        };

        let offline = b.boolean(&options::OFFLINE)?;

        Ok(BootstrapConfig {
            network,
            templates,
            platform,
            auth,
            docker_monitor,
            build,
            offline,
            provenance: b.provenance,
        })
    }
}

/// Splits a comma delimited list, keeping order and dropping blank entries.
fn split_addresses(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Resolves options one by one while recording their provenance.
struct Builder<'a> {
    resolver: &'a ConfigResolver,
    provenance: Vec<ProvenanceEntry>,
}

impl Builder<'_> {
    fn record(&mut self, spec: &OptionSpec, resolved: &Resolved) {
        let value = if spec.secret && !resolved.value.is_empty() {
            REDACTED.to_owned()
        } else {
            resolved.value.to_owned()
        };
        self.provenance.push(ProvenanceEntry {
            flag: spec.flag,
            origin: resolved.origin,
            value,
        });
    }

    fn text(&mut self, spec: &OptionSpec) -> String {
        let resolved = self.resolver.resolve_raw(spec);
        self.record(spec, &resolved);
        resolved.value
    }

    fn secret(&mut self, spec: &OptionSpec) -> SecretString {
        SecretString::new(self.text(spec))
    }

    fn boolean(&mut self, spec: &OptionSpec) -> Result<bool, ConfigError> {
        let value = self.text(spec);
        parse_bool(&value).ok_or(ConfigError::InvalidBool {
            flag: spec.flag,
            value,
        })
    }

    fn variant<T: FromStr + VariantNames>(&mut self, spec: &OptionSpec) -> Result<T, ConfigError> {
        let value = self.text(spec);
        value.parse().map_err(|_| ConfigError::UnknownVariant {
            flag: spec.flag,
            value,
            expected: T::VARIANTS.join(", "),
        })
    }

    fn duration(&mut self, spec: &OptionSpec) -> Result<Duration, ConfigError> {
        let value = self.text(spec);
        parse_duration(spec, value)
    }

    fn optional_duration(&mut self, spec: &OptionSpec) -> Result<Option<Duration>, ConfigError> {
        let value = self.text(spec);
        if value.is_empty() {
            return Ok(None);
        }
        parse_duration(spec, value).map(Some)
    }

    /// Empty means the default interval, "none" disables refreshing.
    fn refresh_interval(&mut self, spec: &OptionSpec) -> Result<Option<Duration>, ConfigError> {
        let value = self.text(spec);
        match value.as_str() {
            "" => Ok(Some(DEFAULT_CREDS_REFRESH_INTERVAL)),
            "none" => Ok(None),
            _ => parse_duration(spec, value).map(Some),
        }
    }

    fn integer<T>(&mut self, spec: &OptionSpec) -> Result<T, ConfigError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let value = self.text(spec);
        parse_integer(spec, value)
    }

    fn optional_integer<T>(&mut self, spec: &OptionSpec) -> Result<Option<T>, ConfigError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let value = self.text(spec);
        if value.is_empty() {
            return Ok(None);
        }
        parse_integer(spec, value).map(Some)
    }
}

fn parse_duration(spec: &OptionSpec, value: String) -> Result<Duration, ConfigError> {
    match humantime::parse_duration(value.trim()) {
        Ok(duration) => Ok(duration),
        Err(source) => Err(ConfigError::InvalidDuration {
            flag: spec.flag,
            value,
            source,
        }),
    }
}

fn parse_integer<T>(spec: &OptionSpec, value: String) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    match value.trim().parse() {
        Ok(n) => Ok(n),
        Err(source) => Err(ConfigError::InvalidInteger {
            flag: spec.flag,
            value,
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::{io, time::Duration};

    use secrecy::ExposeSecret;

    use super::*;
    use crate::config::{
        options::{OptionKind, OPTIONS},
        AuthKind, AuthorizationMode, TemplateAcquisition,
    };

    struct FixedNamespace(&'static str);

    impl NamespaceSource for FixedNamespace {
        fn namespace(&self) -> io::Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    struct BrokenNamespace;

    impl NamespaceSource for BrokenNamespace {
        fn namespace(&self) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn resolver(flags: &[(&str, &str)], env: &[(&str, &str)]) -> ConfigResolver {
        ConfigResolver::new(
            flags.iter().copied().collect(),
            env.iter().copied().collect(),
        )
        .with_namespace_source(NoNamespace)
    }

    fn sample_value(spec: &OptionSpec, text: &str) -> String {
        match spec.kind {
            OptionKind::Text => format!("{}-{}", text, spec.flag),
            // the opposite of the default, so it cannot be mistaken for it
            OptionKind::Bool | OptionKind::ExactTrue => (spec.default != "true").to_string(),
        }
    }

    #[test]
    fn flag_wins_over_environment_and_default() {
        for spec in OPTIONS {
            let flag_value = sample_value(spec, "flag");
            let mut flags = FlagSource::new();
            flags.insert(spec.flag, flag_value.as_str());
            let mut env = EnvSource::new();
            if let Some(name) = spec.env {
                env.insert(name, "from-env");
            }
            let resolver = ConfigResolver::new(flags, env);

            let resolved = resolver.resolve_raw(spec);
            assert_eq!(resolved.value, flag_value, "option {}", spec.flag);
            assert_eq!(resolved.origin, Origin::Flag, "option {}", spec.flag);
        }
    }

    #[test]
    fn environment_wins_over_default() {
        for spec in OPTIONS.iter().filter(|spec| spec.env.is_some()) {
            let env_value = sample_value(spec, "env");
            let resolver = resolver(&[], &[(spec.env.unwrap(), env_value.as_str())]);

            let resolved = resolver.resolve_raw(spec);
            assert_eq!(resolved.value, env_value, "option {}", spec.flag);
            assert_eq!(resolved.origin, Origin::Environment, "option {}", spec.flag);
        }
    }

    #[test]
    fn default_when_nothing_is_set() {
        let resolver = resolver(&[], &[]);
        for spec in OPTIONS {
            let resolved = resolver.resolve_raw(spec);
            assert_eq!(resolved.value, spec.default, "option {}", spec.flag);
            assert_eq!(resolved.origin, Origin::Default, "option {}", spec.flag);
        }
    }

    #[test]
    fn documented_defaults() {
        let config = resolver(&[], &[]).resolve().unwrap();

        assert_eq!(config.network.listen_address, ":8070");
        assert!(config.network.external_ip_addresses.is_empty());
        assert_eq!(config.platform.kind, PlatformKind::Auto);
        assert_eq!(config.platform.namespace, "");
        assert_eq!(
            config.platform.authorization_mode,
            AuthorizationMode::ServiceAccount
        );
        assert_eq!(
            config.platform.configuration_path,
            PathBuf::from("/etc/nuclio/config/platform/platform.yaml")
        );
        assert_eq!(config.auth.kind, AuthKind::Nop);
        assert_eq!(config.auth.iguazio.verification_method, "POST");
        assert_eq!(config.auth.iguazio.timeout, None);
        assert_eq!(config.auth.iguazio.cache_size, None);
        assert_eq!(
            config.auth.iguazio.cache_expiration_timeout,
            Duration::from_secs(30)
        );
        assert!(config.docker_monitor.enabled);
        assert_eq!(config.docker_monitor.interval, Duration::from_secs(5));
        assert_eq!(config.docker_monitor.max_consecutive_errors, 5);
        assert!(!config.build.no_pull_base_images);
        assert_eq!(
            config.build.creds_refresh_interval,
            Some(DEFAULT_CREDS_REFRESH_INTERVAL)
        );
        assert_eq!(config.templates.archive_address, "file://tmp/templates.zip");
        assert_eq!(config.templates.acquisition(), TemplateAcquisition::Archive);
        assert!(!config.offline);
        assert_eq!(config.provenance().len(), OPTIONS.len());
    }

    #[test]
    fn authorization_mode_defaults_to_service_account() {
        let config = resolver(&[], &[("NUCLIO_DASHBOARD_PLATFORM_AUTHORIZATION_MODE", "")])
            .resolve()
            .unwrap();
        assert_eq!(
            config.platform.authorization_mode,
            AuthorizationMode::ServiceAccount
        );
        assert_eq!(
            config.origin("platform-authorization-mode"),
            Some(Origin::Default)
        );

        let config = resolver(
            &[],
            &[(
                "NUCLIO_DASHBOARD_PLATFORM_AUTHORIZATION_MODE",
                "authorization-header-oidc",
            )],
        )
        .resolve()
        .unwrap();
        assert_eq!(
            config.platform.authorization_mode,
            AuthorizationMode::AuthorizationHeaderOidc
        );
    }

    #[test]
    fn unparseable_bool_env_falls_back_to_default() {
        let config = resolver(
            &[],
            &[
                ("NUCLIO_MONITOR_DOCKER_DAEMON", "sometimes"),
                ("NUCLIO_DASHBOARD_NO_PULL_BASE_IMAGES", "1"),
            ],
        )
        .resolve()
        .unwrap();
        assert!(config.docker_monitor.enabled);
        assert_eq!(config.origin("monitor-docker-deamon"), Some(Origin::Default));
        assert!(config.build.no_pull_base_images);
        assert_eq!(config.origin("no-pull"), Some(Origin::Environment));
    }

    #[test]
    fn offline_env_must_be_exactly_true() {
        let offline = |value: &str| {
            resolver(&[], &[("NUCLIO_DASHBOARD_OFFLINE", value)])
                .resolve()
                .unwrap()
                .offline
        };
        assert!(offline("true"));
        assert!(!offline("TRUE"));
        assert!(!offline("1"));
        assert!(!offline("T"));

        let config = resolver(&[("offline", "1")], &[("NUCLIO_DASHBOARD_OFFLINE", "false")])
            .resolve()
            .unwrap();
        assert!(config.offline);
        assert_eq!(config.origin("offline"), Some(Origin::Flag));
    }

    #[test]
    fn malformed_flag_bool_is_rejected() {
        let err = resolver(&[("no-pull", "maybe")], &[]).resolve().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBool { flag: "no-pull", .. }
        ));
    }

    #[test]
    fn docker_monitor_values_are_parsed() {
        let config = resolver(
            &[("monitor-docker-deamon-interval", "2m")],
            &[("NUCLIO_MONITOR_DOCKER_DAEMON_MAX_CONSECUTIVE_ERRORS", "12")],
        )
        .resolve()
        .unwrap();
        assert_eq!(config.docker_monitor.interval, Duration::from_secs(120));
        assert_eq!(config.docker_monitor.max_consecutive_errors, 12);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = resolver(&[("monitor-docker-deamon-interval", "soon")], &[])
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDuration {
                flag: "monitor-docker-deamon-interval",
                ..
            }
        ));

        let err = resolver(
            &[],
            &[("NUCLIO_MONITOR_DOCKER_DAEMON_MAX_CONSECUTIVE_ERRORS", "five")],
        )
        .resolve()
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidInteger {
                flag: "monitor-docker-deamon-max-consecutive-errors",
                ..
            }
        ));
    }

    #[test]
    fn unknown_platform_lists_choices() {
        let err = resolver(&[("platform", "nomad")], &[]).resolve().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"nomad\" for --platform, expected one of: kube, local, auto"
        );
    }

    #[test]
    fn namespace_precedence() {
        let env = [("NUCLIO_DASHBOARD_NAMESPACE", "from-env")];

        let ns = resolver(&[("namespace", "from-flag")], &env)
            .resolve_namespace(PlatformKind::Kube)
            .unwrap();
        assert_eq!(ns.value, "from-flag");
        assert_eq!(ns.origin, Origin::Flag);

        let ns = resolver(&[("namespace", "")], &env)
            .resolve_namespace(PlatformKind::Kube)
            .unwrap();
        assert_eq!(ns.value, "from-env");
        assert_eq!(ns.origin, Origin::Environment);

        let ns = resolver(&[], &[])
            .with_namespace_source(FixedNamespace("nuclio"))
            .resolve_namespace(PlatformKind::Kube)
            .unwrap();
        assert_eq!(ns.value, "nuclio");
        assert_eq!(ns.origin, Origin::InCluster);

        let ns = resolver(&[], &[])
            .resolve_namespace(PlatformKind::Local)
            .unwrap();
        assert_eq!(ns.value, "");
        assert_eq!(ns.origin, Origin::Default);
    }

    #[test]
    fn kube_platform_requires_a_namespace() {
        let err = resolver(&[("platform", "kube")], &[]).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::NamespaceUnresolved { .. }));

        let err = resolver(&[], &[])
            .with_namespace_source(BrokenNamespace)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NamespaceLookup(_)));

        let err = resolver(&[("platform", "kube")], &[])
            .with_namespace_source(BrokenNamespace)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NamespaceLookup(_)));
    }

    #[test]
    fn local_platform_ignores_namespace_lookup_failure() {
        let config = resolver(&[("platform", "local")], &[])
            .with_namespace_source(BrokenNamespace)
            .resolve()
            .unwrap();
        assert_eq!(config.platform.namespace, "");
        assert_eq!(config.origin("namespace"), Some(Origin::Default));
    }

    #[test]
    fn service_account_namespace_file() {
        let missing = ServiceAccountNamespace::new("/nonexistent/serviceaccount/namespace");
        assert_eq!(missing.namespace().unwrap(), None);

        let path = std::env::temp_dir().join(format!("nuclio-namespace-{}", std::process::id()));
        fs::write(&path, "nuclio-system\n").unwrap();
        let namespace = ServiceAccountNamespace::new(path.clone()).namespace();
        fs::remove_file(&path).unwrap();
        assert_eq!(namespace.unwrap().as_deref(), Some("nuclio-system"));
    }

    #[test]
    fn external_ip_addresses_keep_order() {
        let config = resolver(
            &[],
            &[(
                "NUCLIO_DASHBOARD_EXTERNAL_IP_ADDRESSES",
                "10.0.0.2, 10.0.0.1,,10.0.0.2",
            )],
        )
        .resolve()
        .unwrap();
        assert_eq!(
            config.network.external_ip_addresses,
            vec!["10.0.0.2", "10.0.0.1", "10.0.0.2"]
        );
    }

    #[test]
    fn creds_refresh_interval() {
        let config = resolver(&[("creds-refresh-interval", "none")], &[])
            .resolve()
            .unwrap();
        assert_eq!(config.build.creds_refresh_interval, None);

        let config = resolver(&[("creds-refresh-interval", "1h")], &[])
            .resolve()
            .unwrap();
        assert_eq!(
            config.build.creds_refresh_interval,
            Some(Duration::from_secs(3600))
        );
    }

    #[test]
    fn iguazio_options_resolve_even_with_nop_auth() {
        let config = resolver(
            &[],
            &[
                ("NUCLIO_AUTH_IGUAZIO_TIMEOUT", "10s"),
                ("NUCLIO_AUTH_IGUAZIO_CACHE_SIZE", "100"),
                ("NUCLIO_AUTH_IGUAZIO_VERIFICATION_URL", "http://iguazio/verify"),
            ],
        )
        .resolve()
        .unwrap();
        assert_eq!(config.auth.kind, AuthKind::Nop);
        assert_eq!(config.auth.iguazio.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.auth.iguazio.cache_size, Some(100));
        assert_eq!(config.auth.iguazio.verification_url, "http://iguazio/verify");
    }

    #[test]
    fn secrets_are_redacted() {
        let config = resolver(
            &[("templates-git-repository", "https://github.com/nuclio/templates")],
            &[("NUCLIO_TEMPLATES_GIT_PASSWORD", "hunter2")],
        )
        .resolve()
        .unwrap();
        assert_eq!(config.templates.git_password.expose_secret(), "hunter2");
        assert_eq!(config.templates.acquisition(), TemplateAcquisition::Git);

        let entry = config
            .provenance()
            .iter()
            .find(|entry| entry.flag == "templates-git-password")
            .unwrap();
        assert_eq!(entry.value, REDACTED);
        assert_eq!(entry.origin, Origin::Environment);
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
