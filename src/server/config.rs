use crate::server::{
    error::{config::ConfigError, AppError},
    middleware::cors::OriginPolicy,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_BASE_DOMAIN: &str = "deiliinvitation.com";
const DEFAULT_CORS_EXTRA_ORIGINS: &str = "http://localhost:3000,https://localhost:3000";

pub struct Config {
    pub database_url: String,
    pub database_name: String,

    pub port: u16,
    pub cors: OriginPolicy,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first so values from a `.env` file are visible.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as absent.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let port = match var("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let base_domain =
            var("CORS_BASE_DOMAIN").unwrap_or_else(|| DEFAULT_CORS_BASE_DOMAIN.to_string());
        let extra_origins = var("CORS_EXTRA_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_EXTRA_ORIGINS.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_name: required("DATABASE_NAME")?,
            port,
            cors: OriginPolicy::new(&base_domain, extra_origins.split(',')),
        })
    }
}
