use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Каталог, относительно которого разрешаются пути из конфига
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Заполнять пустую БД демонстрационными данными
    #[serde(default)]
    pub seed_test_data: bool,
    /// Каталог со сборкой фронтенда
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            seed_test_data: false,
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/boxes.db"

[server]
port = 3000
seed_test_data = true
"#;

/// Переменная окружения с явным путём к config.toml
pub const CONFIG_ENV: &str = "BOXES_CONFIG";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. `$BOXES_CONFIG`
/// 2. Next to the executable (for production)
/// 3. Current working directory (cargo run from the workspace root)
/// 4. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let base_dir = config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            return parse_config(&contents, base_dir);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG, std::env::current_dir()?)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join("config.toml"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config.toml"));
    }
    paths
}

pub fn parse_config(contents: &str, base_dir: PathBuf) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.base_dir = base_dir;
    Ok(config)
}

impl Config {
    /// Путь к файлу БД; относительный путь считается от каталога конфига
    pub fn database_path(&self) -> PathBuf {
        self.resolve(&self.database.path)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.resolve(&self.server.static_dir)
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, PathBuf::from("/srv/boxes")).unwrap();
        assert_eq!(config.database.path, "target/db/boxes.db");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.seed_test_data);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/srv/boxes/target/db/boxes.db")
        );
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = parse_config("[database]\npath = \"/var/lib/boxes.db\"\n", PathBuf::from("/etc")).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(!config.server.seed_test_data);
        assert_eq!(config.database_path(), PathBuf::from("/var/lib/boxes.db"));
        assert_eq!(config.static_dir(), PathBuf::from("/etc/dist"));
    }

    #[test]
    fn test_missing_database_section_fails() {
        assert!(parse_config("[server]\nport = 8080\n", PathBuf::new()).is_err());
    }
}
