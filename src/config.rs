use std::net::SocketAddr;

use envconfig::Envconfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlSslMode};

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "DB_HOST", default = "localhost")]
    pub db_host: String,

    #[envconfig(from = "DB_NAME", default = "medicine_inventory")]
    pub db_name: String,

    #[envconfig(from = "DB_USER", default = "root")]
    pub db_user: String,

    #[envconfig(from = "DB_PASSWORD", default = "password")]
    pub db_password: String,

    #[envconfig(from = "DB_PORT", default = "3306")]
    pub db_port: u16,

    // Some managed MariaDB deployments require TLS to be off entirely.
    #[envconfig(from = "DB_SSL", default = "true")]
    pub db_ssl: bool,

    #[envconfig(from = "BIND_ADDR", default = "0.0.0.0:8000")]
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Connection options for the medicines store. Connections are opened
    /// per request, so these options are the only store state the service
    /// holds between requests.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(ssl_mode(self.db_ssl))
    }
}

fn ssl_mode(enabled: bool) -> MySqlSslMode {
    if enabled {
        MySqlSslMode::Preferred
    } else {
        MySqlSslMode::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn init(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::init_from_hashmap(&map).expect("config should initialize")
    }

    #[test]
    fn defaults_match_local_development() {
        let config = init(&[]);
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_name, "medicine_inventory");
        assert_eq!(config.db_user, "root");
        assert_eq!(config.db_port, 3306);
        assert!(config.db_ssl);
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = init(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "3307"),
            ("DB_SSL", "false"),
            ("BIND_ADDR", "127.0.0.1:9000"),
        ]);
        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_port, 3307);
        assert!(!config.db_ssl);
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let map = HashMap::from([("DB_PORT".to_string(), "not-a-port".to_string())]);
        assert!(Config::init_from_hashmap(&map).is_err());
    }

    #[test]
    fn ssl_flag_selects_mode() {
        assert!(matches!(ssl_mode(true), MySqlSslMode::Preferred));
        assert!(matches!(ssl_mode(false), MySqlSslMode::Disabled));
    }
}
