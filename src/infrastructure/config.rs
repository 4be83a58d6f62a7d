use crate::application::progress::Pacing;
use crate::error::HubError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

const CONFIG_FILE: &str = "config/hub";
const ENV_PREFIX: &str = "HUB";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HubConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub progress: ProgressSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProgressSettings {
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    #[serde(default = "default_finalize_delay_ms")]
    pub finalize_delay_ms: u64,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_step_delay_ms() -> u64 {
    30
}

fn default_finalize_delay_ms() -> u64 {
    300
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            finalize_delay_ms: default_finalize_delay_ms(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, HubError> {
        self.bind.parse().map_err(|source| HubError::BindAddress {
            addr: self.bind.clone(),
            source,
        })
    }
}

impl ProgressSettings {
    pub fn pacing(&self) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.step_delay_ms),
            Duration::from_millis(self.finalize_delay_ms),
        )
    }
}

/// `HUB__SECTION__KEY` variables, e.g. `HUB__SERVER__BIND`
fn hub_environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Optional `config/hub.{toml,yaml,json}` overlaid by the process environment
pub fn load_hub_config() -> Result<HubConfig, HubError> {
    load_hub_config_with(hub_environment())
}

fn load_hub_config_with(environment: config::Environment) -> Result<HubConfig, HubError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}
