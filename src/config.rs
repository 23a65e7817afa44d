use std::env;

use chrono::FixedOffset;
use thiserror::Error;

use crate::advisor::{AdvisorConfig, DEFAULT_MODEL, GEMINI_API_URL};

const DEFAULT_ADMIN_PASSWORD: &str = "beltar123";
const NEPAL_OFFSET_MINUTES: i32 = 345;
const DEFAULT_UPLOAD_LIMIT: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("CLOCK_UTC_OFFSET_MINUTES out of range: {0}")]
    InvalidOffset(i32),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub admin_user: String,
    pub admin_password: String,
    pub advisor: AdvisorConfig,
    pub clock_offset: FixedOffset,
    pub upload_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_var("PORT", 8080)?;
        let admin_user = env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        if admin_password == DEFAULT_ADMIN_PASSWORD {
            log::warn!("ADMIN_PASSWORD not set. Using the built-in default. Set ADMIN_PASSWORD in production.");
        }

        let advisor = AdvisorConfig {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| GEMINI_API_URL.to_string()),
        };
        if !advisor.enabled() {
            log::warn!("GEMINI_API_KEY not set. Health advice will always return the fallback message.");
        }

        let offset_minutes = parse_var("CLOCK_UTC_OFFSET_MINUTES", NEPAL_OFFSET_MINUTES)?;
        let clock_offset = FixedOffset::east_opt(offset_minutes * 60)
            .ok_or(ConfigError::InvalidOffset(offset_minutes))?;

        let upload_limit = parse_var("UPLOAD_LIMIT_BYTES", DEFAULT_UPLOAD_LIMIT)?;

        Ok(Self {
            port,
            admin_user,
            admin_password,
            advisor,
            clock_offset,
            upload_limit,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { name, value }),
        _ => Ok(default),
    }
}
