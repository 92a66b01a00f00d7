use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub server: ServerConfig,
}

/// Пути мастер-листа и выходного `data.json`
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub csv_source: String,
    pub excel_source: String,
    pub output: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Собранный фронтенд (trunk dist)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
csv_source = "HM_Rug_Master.csv"
excel_source = "HM_Rug_Master_Complete.xlsx"
output = "public/data.json"

[server]
port = 3000
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl CatalogConfig {
    /// Relative paths resolve against the working directory
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output)
    }

    pub fn csv_source_path(&self) -> PathBuf {
        PathBuf::from(&self.csv_source)
    }

    pub fn excel_source_path(&self) -> PathBuf {
        PathBuf::from(&self.excel_source)
    }
}
