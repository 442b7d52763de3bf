use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = env_map
            .get("HOST")
            .map(|s| s.as_str())
            .unwrap_or("0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?;

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = match env_map.get("DATABASE_PATH").map(|s| s.trim()) {
            None => "forms.db".to_string(),
            Some("") => {
                return Err(ConfigError::InvalidValue(
                    "DATABASE_PATH".to_string(),
                    "must not be empty".to_string(),
                ))
            }
            Some(path) => path.to_string(),
        };

        let cors_allowed_origins = parse_origins(&env_map)?;

        Ok(Config {
            host,
            port,
            database_path,
            cors_allowed_origins,
        })
    }
}

fn parse_origins(env_map: &HashMap<String, String>) -> Result<Vec<String>, ConfigError> {
    let Some(raw) = env_map.get("CORS_ALLOWED_ORIGINS") else {
        return Ok(vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);
    };

    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(bad) = origins
        .iter()
        .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
    {
        return Err(ConfigError::InvalidValue(
            "CORS_ALLOWED_ORIGINS".to_string(),
            format!("origin must start with http:// or https://, got {}", bad),
        ));
    }

    Ok(origins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.database_path, "forms.db");
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:5173"]);
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_host() {
        let mut env_map = HashMap::new();
        env_map.insert("HOST".to_string(), "localhost:80".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "HOST"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_empty_database_path() {
        let mut env_map = HashMap::new();
        env_map.insert("DATABASE_PATH".to_string(), "  ".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "DATABASE_PATH"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_origins_are_split_and_trimmed() {
        let mut env_map = HashMap::new();
        env_map.insert(
            "CORS_ALLOWED_ORIGINS".to_string(),
            " http://localhost:5173/, https://forms.example.com ,".to_string(),
        );
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "https://forms.example.com"]
        );
    }

    #[test]
    fn test_origin_without_scheme_is_rejected() {
        let mut env_map = HashMap::new();
        env_map.insert("CORS_ALLOWED_ORIGINS".to_string(), "example.com".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "CORS_ALLOWED_ORIGINS"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
