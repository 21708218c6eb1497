use crate::args::Args;
use crate::domain::LabelSchema;
use config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Deserialize)]
pub struct AppConfig {
    listen_address: String,
    #[serde(default)]
    hubitat_address: String,
    #[serde(default)]
    hubitat_access_token: String,
    label_schema: LabelSchema,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl AppConfig {
    /// Loads the configuration from, in increasing order of precedence, the defaults, the `config` and `config_local`
    /// files, the environment and the command line.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        Self::load_from(args, None)
    }

    fn load_from(args: &Args, env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("listen_address", "0.0.0.0:9092")?
            .set_default("label_schema", "with_name")?
            .set_default("request_timeout", "10s")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(Environment::default().source(env))
            .set_override_option("listen_address", args.listen_address.clone())?
            .set_override_option("hubitat_address", args.hubitat_address.clone())?
            .set_override_option("hubitat_access_token", args.hubitat_access_token.clone())?
            .set_override_option("label_schema", args.label_schema.clone())?
            .set_override_option("request_timeout", args.request_timeout.clone())?
            .build()?
            .try_deserialize::<AppConfig>()?;

        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.hubitat_address.is_empty() {
            return Err(ConfigError::Missing {
                setting: "Hubitat address",
                flag: "hubitat-address",
                env: "HUBITAT_ADDRESS",
            });
        }
        if self.hubitat_access_token.is_empty() {
            return Err(ConfigError::Missing {
                setting: "Hubitat access token",
                flag: "hubitat-access-token",
                env: "HUBITAT_ACCESS_TOKEN",
            });
        }
        Ok(self)
    }

    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }

    pub fn hubitat_address(&self) -> &str {
        &self.hubitat_address
    }

    pub fn hubitat_access_token(&self) -> &str {
        &self.hubitat_access_token
    }

    pub fn label_schema(&self) -> LabelSchema {
        self.label_schema
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("listen_address", &self.listen_address)
            .field("hubitat_address", &self.hubitat_address)
            .field("hubitat_access_token", &"<redacted>")
            .field("label_schema", &self.label_schema)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load the configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{setting} must be specified via the --{flag} flag or the {env} environment variable")]
    Missing {
        setting: &'static str,
        flag: &'static str,
        env: &'static str,
    },
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                listen_address: "127.0.0.1:0".to_string(),
                hubitat_address: "http://hubitat.local".to_string(),
                hubitat_access_token: "token".to_string(),
                label_schema: LabelSchema::WithName,
                request_timeout: Duration::from_secs(10),
            },
        }
    }

    pub fn hubitat_address(mut self, hubitat_address: String) -> Self {
        self.config.hubitat_address = hubitat_address;
        self
    }

    pub fn label_schema(mut self, label_schema: LabelSchema) -> Self {
        self.config.label_schema = label_schema;
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.config.request_timeout = request_timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn load_reads_the_hub_settings_from_the_environment() -> Result<(), ConfigError> {
        let config = AppConfig::load_from(
            &Args::default(),
            env(&[("HUBITAT_ADDRESS", "http://192.168.1.20"), ("HUBITAT_ACCESS_TOKEN", "secret")]),
        )?;

        assert_eq!(config.hubitat_address(), "http://192.168.1.20");
        assert_eq!(config.hubitat_access_token(), "secret");
        assert_eq!(config.listen_address(), "0.0.0.0:9092");
        assert_eq!(config.label_schema(), LabelSchema::WithName);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn load_prefers_flags_over_the_environment() -> Result<(), ConfigError> {
        let args = Args {
            listen_address: Some("127.0.0.1:9999".to_string()),
            hubitat_address: Some("http://hubitat.flag".to_string()),
            label_schema: Some("without_name".to_string()),
            request_timeout: Some("2s 500ms".to_string()),
            ..Args::default()
        };

        let config = AppConfig::load_from(
            &args,
            env(&[
                ("LISTEN_ADDRESS", "127.0.0.1:8080"),
                ("HUBITAT_ADDRESS", "http://hubitat.env"),
                ("HUBITAT_ACCESS_TOKEN", "secret"),
                ("LABEL_SCHEMA", "with_name"),
            ]),
        )?;

        assert_eq!(config.listen_address(), "127.0.0.1:9999");
        assert_eq!(config.hubitat_address(), "http://hubitat.flag");
        assert_eq!(config.hubitat_access_token(), "secret");
        assert_eq!(config.label_schema(), LabelSchema::WithoutName);
        assert_eq!(config.request_timeout(), Duration::from_millis(2500));
        Ok(())
    }

    #[test]
    fn load_fails_without_a_hub_address() {
        let result = AppConfig::load_from(&Args::default(), env(&[("HUBITAT_ACCESS_TOKEN", "secret")]));

        assert!(matches!(result, Err(ConfigError::Missing { flag: "hubitat-address", .. })));
    }

    #[test]
    fn load_fails_with_an_empty_access_token() {
        let result = AppConfig::load_from(
            &Args::default(),
            env(&[("HUBITAT_ADDRESS", "http://192.168.1.20"), ("HUBITAT_ACCESS_TOKEN", "")]),
        );

        let Err(error) = result else {
            panic!("expected a missing access token");
        };
        assert_eq!(
            error.to_string(),
            "Hubitat access token must be specified via the --hubitat-access-token flag or the HUBITAT_ACCESS_TOKEN environment variable"
        );
    }

    #[test]
    fn debug_output_hides_the_access_token() {
        let config = AppConfigBuilder::new().build();

        assert!(!format!("{:?}", config).contains("\"token\""));
    }
}
