use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testnet,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,

    // Acquiring bank (simulator)
    pub bank_simulator_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment = Self::parse_environment(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        )?;

        let config = Self {
            environment,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .context("Invalid PORT")?,

            bank_simulator_url: std::env::var("BANK_SIMULATOR_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_environment(env: &str) -> Result<Environment> {
        match env.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testnet" | "test" => Ok(Environment::Testnet),
            "production" | "prod" => Ok(Environment::Production),
            _ => bail!("Unknown environment: {}", env),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.bank_simulator_url.starts_with("http") {
            bail!("BANK_SIMULATOR_URL must be HTTP(S) URL");
        }

        tracing::info!(
            "Configuration validated for {:?} environment",
            self.environment
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> Config {
        Config {
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 5000,
            bank_simulator_url: url.to_string(),
        }
    }

    #[test]
    fn parses_environment_aliases() {
        assert_eq!(Config::parse_environment("dev").unwrap(), Environment::Development);
        assert_eq!(Config::parse_environment("TEST").unwrap(), Environment::Testnet);
        assert_eq!(Config::parse_environment("prod").unwrap(), Environment::Production);
        assert!(Config::parse_environment("staging").is_err());
    }

    #[test]
    fn rejects_non_http_bank_url() {
        assert!(config_with_url("localhost:8080").validate().is_err());
        assert!(config_with_url("http://localhost:8080").validate().is_ok());
    }
}
