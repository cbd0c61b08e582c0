use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub tables: TableNames,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON fixture to load tables from
    pub fixture_path: Option<String>,
    /// Fall back to the built-in demo tables when no fixture is configured
    pub load_seed_data: bool,
}

/// Names of the tables the resolver reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableNames {
    pub instruments: String,
    pub checklist_items: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            load_seed_data: true,
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            instruments: "InstrumentosEvaluacion".to_string(),
            checklist_items: "Definicion_ListasCotejo".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "INSTR_", e.g. INSTR_SERVER__PORT
        config = config.add_source(
            config::Environment::with_prefix("INSTR")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:3001");
        assert!(config.store.fixture_path.is_none());
        assert!(config.store.load_seed_data);
        assert_eq!(config.tables.instruments, "InstrumentosEvaluacion");
        assert_eq!(config.tables.checklist_items, "Definicion_ListasCotejo");
    }

    #[test]
    fn test_defaults_survive_config_layering() {
        let built = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap();
        let config: AppConfig = built.try_deserialize().unwrap();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.tables, TableNames::default());
    }
}
