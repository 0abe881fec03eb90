use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Language of the reading-time label: "ru" or "en".
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Reading-speed model: "adaptive" or "fixed".
    #[serde(default = "default_reading_speed")]
    pub reading_speed: String,
    /// Words per minute used by the fixed model.
    #[serde(default = "default_fixed_wpm")]
    pub fixed_wpm: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_locale() -> String {
    "ru".to_string()
}

fn default_reading_speed() -> String {
    "adaptive".to_string()
}

fn default_fixed_wpm() -> f64 {
    200.0
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}
