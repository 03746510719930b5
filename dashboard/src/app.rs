use std::future::Future;

use anyhow::Result;
use resources::config::BootstrapConfig;

/// Owns the resolved configuration for the lifetime of the process.
pub struct Dashboard {
    config: BootstrapConfig,
}

impl Dashboard {
    pub fn from_config(config: BootstrapConfig) -> Self {
        config.log_provenance();
        tracing::info!(
            platform = %config.platform.kind,
            namespace = %config.platform.namespace,
            authorization_mode = %config.platform.authorization_mode,
            auth = %config.auth.kind,
            templates = %config.templates.acquisition(),
            offline = config.offline,
            "Resolved dashboard configuration"
        );
        if config.docker_monitor.enabled {
            tracing::info!(
                "Monitoring docker daemon every {:?}, unhealthy after {} consecutive errors",
                config.docker_monitor.interval,
                config.docker_monitor.max_consecutive_errors
            );
        }
        Self { config }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub async fn serve(self) -> Result<()> {
        self.serve_until(shutdown()).await
    }

    pub async fn serve_until(self, signal: impl Future<Output = ()>) -> Result<()> {
        tracing::info!(
            "Dashboard started at {}",
            self.config().network.listen_address
        );
        signal.await;
        tracing::info!("Shutting Down");
        Ok(())
    }
}

async fn shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use resources::config::{ConfigResolver, EnvSource, FlagSource, NoNamespace};

    use super::*;

    fn config() -> BootstrapConfig {
        let flags: FlagSource = [("listen-addr", "127.0.0.1:8070")].into_iter().collect();
        ConfigResolver::new(flags, EnvSource::new())
            .with_namespace_source(NoNamespace)
            .resolve()
            .unwrap()
    }

    #[test]
    fn keeps_resolved_config() {
        let dashboard = Dashboard::from_config(config());
        assert_eq!(dashboard.config().network.listen_address, "127.0.0.1:8070");
    }

    #[tokio::test]
    async fn returns_after_shutdown_signal() {
        let dashboard = Dashboard::from_config(config());
        dashboard.serve_until(async {}).await.unwrap();
    }
}
