use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Site presentation
    pub site_title: String,
    pub site_tagline: String,

    // The acting user's display identity; every submitted comment and reply
    // is attributed to this name
    pub viewer_name: String,

    // Runtime
    pub environment: String,
    pub log_level: String,

    // Feature flags
    pub enable_comments: bool,

    // Whether to load the built-in sample posts and comments at startup
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config {
            site_title: env::var("SITE_TITLE").unwrap_or_else(|_| "DevBlog".to_string()),
            site_tagline: env::var("SITE_TAGLINE").unwrap_or_else(|_| {
                "Discover the latest insights, tutorials, and thoughts on web development, \
                 technology, and software engineering."
                    .to_string()
            }),

            viewer_name: env::var("VIEWER_NAME").unwrap_or_else(|_| "You".to_string()),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            enable_comments: env::var("ENABLE_COMMENTS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()?,

            seed_sample_data: env::var("SEED_SAMPLE_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()?,
        };

        if crate::utils::validation::is_blank(&config.viewer_name) {
            return Err(AppError::validation("VIEWER_NAME must not be blank").into());
        }

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: "DevBlog".to_string(),
            site_tagline: String::new(),
            viewer_name: "You".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            enable_comments: true,
            seed_sample_data: true,
        }
    }
}
