use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Optional config file looked up from the working directory.
pub const CONFIG_FILE: &str = "config.toml";

const ENV_KEYS: [&str; 4] = ["LOGGER_NAME", "LOG_LEVEL_DEBUG", "DATABASE_URL", "LISTEN_ADDR"];

/// Runtime settings, resolved once at startup and handed to whoever needs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logger_name: String,
    pub debug_mode: bool,
    pub database_url: String,
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_name: "split_expense".to_string(),
            debug_mode: false,
            database_url: "sqlite://expenses.db".to_string(),
            listen_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `config.toml`, then environment variables.
    ///
    /// `LOG_LEVEL_DEBUG` maps onto `debug_mode`; the other variables map
    /// onto the field of the same name.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::raw().only(&ENV_KEYS).map(|key| {
                if key.as_str().eq_ignore_ascii_case("LOG_LEVEL_DEBUG") {
                    "debug_mode".into()
                } else {
                    key.into()
                }
            }))
    }

    pub fn loglevel(&self) -> &'static str {
        if self.debug_mode { "debug" } else { "info" }
    }
}
