//! Validator configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.
//!
//! ## Optional Variables
//!
//! - `ALLOWED_DOMAINS` - Comma-separated accepted product domains (default: `www.asos.com`)
//! - `EMAIL_CHECK` - Email rule: `html` (browser rule) or `rfc` (default: `html`)
//! - `EMAIL_REQUIRED` - Whether the `html` rule rejects an empty email (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export ALLOWED_DOMAINS="www.asos.com,www.zara.com"
//! export EMAIL_CHECK="rfc"
//! ```

use crate::domain::email::EmailChecker;
use crate::domain::entities::AllowList;
use crate::infrastructure::email::{HtmlEmailChecker, RfcEmailChecker};
use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Which [`EmailChecker`] the validator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailCheckMode {
    /// Browser `type="email"` rule.
    Html,
    /// `validator` crate rule.
    Rfc,
}

impl FromStr for EmailCheckMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "rfc" => Ok(Self::Rfc),
            other => anyhow::bail!("EMAIL_CHECK must be 'html' or 'rfc', got '{}'", other),
        }
    }
}

/// Validator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub allowed_domains: AllowList,
    pub email_check: EmailCheckMode,
    /// Only consulted by the `html` email rule.
    pub email_required: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allowed_domains: AllowList::default(),
            email_check: EmailCheckMode::Html,
            email_required: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the environment (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// Returns an error if `EMAIL_CHECK` names an unknown rule.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let allowed_domains = env::var("ALLOWED_DOMAINS")
            .map(|raw| AllowList::from_csv(&raw))
            .unwrap_or_default();

        let email_check = match env::var("EMAIL_CHECK") {
            Ok(raw) => raw.parse()?,
            Err(_) => EmailCheckMode::Html,
        };

        let email_required = env::var("EMAIL_REQUIRED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            allowed_domains,
            email_check,
            email_required,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the allow-list is empty (no URL could ever be accepted)
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.allowed_domains.is_empty() {
            anyhow::bail!("ALLOWED_DOMAINS must contain at least one domain");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Builds the configured email checker.
    pub fn email_checker(&self) -> Box<dyn EmailChecker> {
        match self.email_check {
            EmailCheckMode::Html => Box::new(HtmlEmailChecker::new(self.email_required)),
            EmailCheckMode::Rfc => Box::new(RfcEmailChecker),
        }
    }
}
