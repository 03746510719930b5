//! Every startup option the dashboard accepts, with the environment
//! variable that may supply it and its compiled-in default.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Text,
    /// Environment values are only honoured when they parse as a boolean.
    Bool,
    /// Only the exact environment value "true" means true, anything else
    /// non-empty means false.
    ExactTrue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Long command-line flag, without the leading dashes.
    pub flag: &'static str,
    pub env: Option<&'static str>,
    pub default: &'static str,
    pub kind: OptionKind,
    /// Secret values are redacted from diagnostics.
    pub secret: bool,
    pub help: &'static str,
}

const fn text(
    flag: &'static str,
    env: Option<&'static str>,
    default: &'static str,
    help: &'static str,
) -> OptionSpec {
    OptionSpec {
        flag,
        env,
        default,
        kind: OptionKind::Text,
        secret: false,
        help,
    }
}

const fn secret(flag: &'static str, env: &'static str, help: &'static str) -> OptionSpec {
    OptionSpec {
        flag,
        env: Some(env),
        default: "",
        kind: OptionKind::Text,
        secret: true,
        help,
    }
}

const fn boolean(
    flag: &'static str,
    env: &'static str,
    default: &'static str,
    help: &'static str,
) -> OptionSpec {
    OptionSpec {
        flag,
        env: Some(env),
        default,
        kind: OptionKind::Bool,
        secret: false,
        help,
    }
}

pub const LISTEN_ADDR: OptionSpec = text(
    "listen-addr",
    None,
    ":8070",
    "IP/port on which the dashboard listens",
);
pub const DOCKER_KEY_DIR: OptionSpec = text(
    "docker-key-dir",
    None,
    "",
    "Directory to look for docker keys for secure registries",
);
pub const PLATFORM: OptionSpec = text("platform", None, "auto", "One of kube/local/auto");
pub const REGISTRY: OptionSpec = text(
    "registry",
    Some("NUCLIO_DASHBOARD_REGISTRY_URL"),
    "",
    "Default registry URL",
);
pub const RUN_REGISTRY: OptionSpec = text(
    "run-registry",
    Some("NUCLIO_DASHBOARD_RUN_REGISTRY_URL"),
    "",
    "Default run registry URL",
);
pub const NO_PULL: OptionSpec = boolean(
    "no-pull",
    "NUCLIO_DASHBOARD_NO_PULL_BASE_IMAGES",
    "false",
    "Whether to skip pulling base images",
);
pub const CREDS_REFRESH_INTERVAL: OptionSpec = text(
    "creds-refresh-interval",
    Some("NUCLIO_DASHBOARD_CREDS_REFRESH_INTERVAL"),
    "",
    "Default credential refresh interval, or 'none' (12h by default)",
);
pub const EXTERNAL_IP_ADDRESSES: OptionSpec = text(
    "external-ip-addresses",
    Some("NUCLIO_DASHBOARD_EXTERNAL_IP_ADDRESSES"),
    "",
    "Comma delimited list of external IP addresses",
);
pub const NAMESPACE: OptionSpec = text(
    "namespace",
    Some("NUCLIO_DASHBOARD_NAMESPACE"),
    "",
    "Namespace in which all actions apply to, if not passed in request",
);
pub const OFFLINE: OptionSpec = OptionSpec {
    flag: "offline",
    env: Some("NUCLIO_DASHBOARD_OFFLINE"),
    default: "false",
    kind: OptionKind::ExactTrue,
    secret: false,
    help: "If true, assumes no internet connectivity",
};
pub const PLATFORM_CONFIG: OptionSpec = text(
    "platform-config",
    None,
    "/etc/nuclio/config/platform/platform.yaml",
    "Path of platform configuration file",
);
pub const IMAGE_NAME_PREFIX_TEMPLATE: OptionSpec = text(
    "image-name-prefix-template",
    Some("NUCLIO_DASHBOARD_IMAGE_NAME_PREFIX_TEMPLATE"),
    "",
    "Template for the image names prefix",
);
pub const PLATFORM_AUTHORIZATION_MODE: OptionSpec = text(
    "platform-authorization-mode",
    Some("NUCLIO_DASHBOARD_PLATFORM_AUTHORIZATION_MODE"),
    "service-account",
    "One of service-account (default) / authorization-header-oidc",
);
pub const DEPENDANT_IMAGE_REGISTRY: OptionSpec = text(
    "dependant-image-registry",
    Some("NUCLIO_DASHBOARD_DEPENDANT_IMAGE_REGISTRY_URL"),
    "",
    "If passed, replaces base/on-build registry URLs with this value",
);
pub const MONITOR_DOCKER_DEAMON: OptionSpec = boolean(
    "monitor-docker-deamon",
    "NUCLIO_MONITOR_DOCKER_DAEMON",
    "true",
    "Monitor connectivity to docker deamon (in conjunction to 'docker' as container builder kind)",
);
pub const MONITOR_DOCKER_DEAMON_INTERVAL: OptionSpec = text(
    "monitor-docker-deamon-interval",
    Some("NUCLIO_MONITOR_DOCKER_DAEMON_INTERVAL"),
    "5s",
    "Docker deamon connectivity monitor interval",
);
pub const MONITOR_DOCKER_DEAMON_MAX_CONSECUTIVE_ERRORS: OptionSpec = text(
    "monitor-docker-deamon-max-consecutive-errors",
    Some("NUCLIO_MONITOR_DOCKER_DAEMON_MAX_CONSECUTIVE_ERRORS"),
    "5",
    "Docker deamon connectivity monitor max consecutive errors before declaring docker connection is unhealthy",
);
pub const TEMPLATES_GIT_REPOSITORY: OptionSpec = text(
    "templates-git-repository",
    Some("NUCLIO_TEMPLATES_GIT_REPOSITORY"),
    "",
    "Git templates repo's name",
);
pub const TEMPLATES_GIT_REF: OptionSpec = text(
    "templates-git-ref",
    Some("NUCLIO_TEMPLATES_GIT_REF"),
    "",
    "Git templates repo's branch name",
);
pub const TEMPLATES_GIT_USERNAME: OptionSpec = text(
    "templates-git-username",
    Some("NUCLIO_TEMPLATES_GIT_USERNAME"),
    "",
    "Git repo's username",
);
pub const TEMPLATES_GIT_PASSWORD: OptionSpec = secret(
    "templates-git-password",
    "NUCLIO_TEMPLATES_GIT_PASSWORD",
    "Git repo's user password",
);
pub const TEMPLATES_GITHUB_ACCESS_TOKEN: OptionSpec = secret(
    "templates-github-access-token",
    "NUCLIO_TEMPLATES_GITHUB_ACCESS_TOKEN",
    "Github templates repo's access token",
);
pub const TEMPLATES_ARCHIVE_ADDRESS: OptionSpec = text(
    "templates-archive-address",
    Some("NUCLIO_TEMPLATES_ARCHIVE_ADDRESS"),
    "file://tmp/templates.zip",
    "Function templates zip file address",
);
pub const TEMPLATES_GIT_CA_CERT_CONTENTS: OptionSpec = secret(
    "templates-git-ca-cert-contents",
    "NUCLIO_TEMPLATES_GIT_CA_CERT_CONTENTS",
    "Base64 encoded ca certificate contents used in git requests to templates repo",
);
pub const AUTH_CONFIG_KIND: OptionSpec = text(
    "auth-config-kind",
    Some("NUCLIO_AUTH_KIND"),
    "nop",
    "Authentication kind, either nop or iguazio",
);
pub const AUTH_CONFIG_IGUAZIO_VERIFICATION_URL: OptionSpec = text(
    "auth-config-iguazio-verification-url",
    Some("NUCLIO_AUTH_IGUAZIO_VERIFICATION_URL"),
    "",
    "Iguazio authentication verification url",
);
pub const AUTH_CONFIG_IGUAZIO_VERIFICATION_METHOD: OptionSpec = text(
    "auth-config-iguazio-verification-method",
    Some("NUCLIO_AUTH_IGUAZIO_VERIFICATION_METHOD"),
    "POST",
    "Iguazio authentication verification method",
);
pub const AUTH_CONFIG_IGUAZIO_VERIFICATION_DATA_ENRICHMENT_URL: OptionSpec = text(
    "auth-config-iguazio-verification-data-enrichment-url",
    Some("NUCLIO_AUTH_IGUAZIO_VERIFICATION_DATA_ENRICHMENT_URL"),
    "",
    "Iguazio authentication verification and data enrichment url",
);
pub const AUTH_CONFIG_IGUAZIO_TIMEOUT: OptionSpec = text(
    "auth-config-iguazio-timeout",
    Some("NUCLIO_AUTH_IGUAZIO_TIMEOUT"),
    "",
    "Iguazio authentication request timeout (duration string)",
);
pub const AUTH_CONFIG_IGUAZIO_CACHE_SIZE: OptionSpec = text(
    "auth-config-iguazio-cache-size",
    Some("NUCLIO_AUTH_IGUAZIO_CACHE_SIZE"),
    "",
    "Iguazio authentication cache size",
);
pub const AUTH_CONFIG_IGUAZIO_CACHE_EXPIRATION_TIMEOUT: OptionSpec = text(
    "auth-config-iguazio-cache-expiration-timeout",
    Some("NUCLIO_AUTH_IGUAZIO_CACHE_EXPIRATION_TIMEOUT"),
    "30s",
    "Iguazio authentication cache expiration timeout (duration string)",
);

pub const OPTIONS: &[OptionSpec] = &[
    LISTEN_ADDR,
    DOCKER_KEY_DIR,
    PLATFORM,
    REGISTRY,
    RUN_REGISTRY,
    NO_PULL,
    CREDS_REFRESH_INTERVAL,
    EXTERNAL_IP_ADDRESSES,
    NAMESPACE,
    OFFLINE,
    PLATFORM_CONFIG,
    IMAGE_NAME_PREFIX_TEMPLATE,
    PLATFORM_AUTHORIZATION_MODE,
    DEPENDANT_IMAGE_REGISTRY,
    MONITOR_DOCKER_DEAMON,
    MONITOR_DOCKER_DEAMON_INTERVAL,
    MONITOR_DOCKER_DEAMON_MAX_CONSECUTIVE_ERRORS,
    TEMPLATES_GIT_REPOSITORY,
    TEMPLATES_GIT_REF,
    TEMPLATES_GIT_USERNAME,
    TEMPLATES_GIT_PASSWORD,
    TEMPLATES_GITHUB_ACCESS_TOKEN,
    TEMPLATES_ARCHIVE_ADDRESS,
    TEMPLATES_GIT_CA_CERT_CONTENTS,
    AUTH_CONFIG_KIND,
    AUTH_CONFIG_IGUAZIO_VERIFICATION_URL,
    AUTH_CONFIG_IGUAZIO_VERIFICATION_METHOD,
    AUTH_CONFIG_IGUAZIO_VERIFICATION_DATA_ENRICHMENT_URL,
    AUTH_CONFIG_IGUAZIO_TIMEOUT,
    AUTH_CONFIG_IGUAZIO_CACHE_SIZE,
    AUTH_CONFIG_IGUAZIO_CACHE_EXPIRATION_TIMEOUT,
];
