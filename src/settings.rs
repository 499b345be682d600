use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const QUERY_PLACEHOLDER: &str = "{query}";
/// Separates entries of `APP__USER_AGENTS`; agent strings themselves contain commas.
pub const LIST_SEPARATOR: &str = "|";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub query: String,
    /// Search endpoint with a `{query}` placeholder.
    pub search_url: String,
    pub user_agents: Vec<String>,
    pub timeout_secs: u64,
    pub output_path: Option<String>,
    pub html_dump_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            query: "laptop".into(),
            search_url: "https://www.daraz.pk/catalog/?q={query}".into(),
            user_agents: vec![
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".into(),
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15".into(),
                "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0".into(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0".into(),
            ],
            timeout_secs: 30,
            output_path: None,
            html_dump_path: None,
        }
    }
}

impl Settings {
    /// `Settings.toml` (optional), then `APP__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_config(
            Config::builder()
                .add_source(File::with_name("Settings").required(false))
                .add_source(environment())
                .build()?,
        )
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        if !settings.search_url.contains(QUERY_PLACEHOLDER) {
            return Err(ConfigError::Message(format!(
                "search_url must contain {QUERY_PLACEHOLDER}: {}",
                settings.search_url
            )));
        }
        Ok(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
        .list_separator(LIST_SEPARATOR)
        .with_list_parse_key("user_agents")
}
