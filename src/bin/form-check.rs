//! Command-line front-end for the sign-up form validator.
//!
//! Builds the page, installs the validator, types each value into its
//! field, submits, and reports what the user would see.
//!
//! # Usage
//!
//! ```bash
//! # Validate a full submission against the standard sign-up page
//! cargo run --bin form-check -- validate \
//!     --first-name Jane --last-name Doe \
//!     --email jane@example.com --url https://www.asos.com/prd/123
//!
//! # Use custom page markup and an extra allowed domain
//! cargo run --bin form-check -- validate --layout page.json --allow-domain www.zara.com ...
//!
//! # Show which domain a URL resolves to
//! cargo run --bin form-check -- domain "https://www.asos.com:443/women?x=1"
//! ```
//!
//! # Exit Codes
//!
//! - `0` - form submitted / domain allowed
//! - `1` - submission prevented / domain not allowed
//! - `2` - the page is missing an element the validator needs

use form_guard::config::Config;
use form_guard::domain::entities::{AllowList, FieldKind};
use form_guard::domain::form::FormView;
use form_guard::infrastructure::page::{HtmlPage, PageLayout, SubmitOutcome};
use form_guard::{FormValidator, logging, utils::extract_domain};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Sign-up form validation tool.
#[derive(Parser)]
#[command(name = "form-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the form, submit it and report the error indicators
    Validate {
        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        url: String,

        /// Page markup as JSON (defaults to the standard sign-up page)
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Accepted product domain; repeat to add more. Overrides ALLOWED_DOMAINS
        #[arg(long = "allow-domain")]
        allow_domains: Vec<String>,
    },

    /// Print the domain extracted from a URL and whether it is allowed
    Domain {
        url: String,

        /// Accepted product domain; repeat to add more. Overrides ALLOWED_DOMAINS
        #[arg(long = "allow-domain")]
        allow_domains: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate()?;
    logging::init(&config);

    match cli.command {
        Commands::Validate {
            first_name,
            last_name,
            email,
            url,
            layout,
            allow_domains,
        } => {
            let page = load_page(layout)?;
            let allow_list = resolve_allow_list(&config, allow_domains);
            validate(
                page,
                FormValidator::new(allow_list, config.email_checker()),
                [first_name, last_name, email, url],
            )
        }
        Commands::Domain { url, allow_domains } => {
            let allow_list = resolve_allow_list(&config, allow_domains);
            Ok(show_domain(&url, &allow_list))
        }
    }
}

fn load_page(layout: Option<PathBuf>) -> Result<HtmlPage> {
    let Some(path) = layout else {
        return Ok(HtmlPage::signup_form());
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    let layout = PageLayout::from_json(&raw)
        .with_context(|| format!("Failed to parse layout file {}", path.display()))?;

    Ok(HtmlPage::from_layout(layout))
}

fn resolve_allow_list(config: &Config, overrides: Vec<String>) -> AllowList {
    if overrides.is_empty() {
        config.allowed_domains.clone()
    } else {
        AllowList::new(overrides)
    }
}

/// Runs one submit attempt and prints the indicator states.
fn validate<E>(
    mut page: HtmlPage,
    validator: FormValidator<E>,
    values: [String; 4],
) -> Result<ExitCode>
where
    E: form_guard::domain::email::EmailChecker + 'static,
{
    println!("{}", "📝 Sign-up form check".bright_blue().bold());
    println!(
        "  Allowed domains: {}",
        validator.allow_list().domains().join(", ").cyan()
    );
    println!();

    let bindings = match validator.install(&mut page) {
        Ok(bindings) => bindings,
        Err(e) => {
            println!("{} {}", "❌ Page cannot be validated:".red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };

    for (kind, value) in FieldKind::ALL.into_iter().zip(values) {
        page.input(bindings.control(kind), value)?;
    }

    let outcome = page.submit();

    for kind in FieldKind::ALL {
        let shown = page
            .display(bindings.indicators.get(kind))
            .is_some_and(|display| display.is_shown());
        let status = if shown {
            "invalid".red().bold()
        } else {
            "ok".green()
        };
        println!(
            "  {:<12} {:<8} #{}",
            kind.label(),
            status,
            kind.indicator_id().dimmed()
        );
    }
    println!();

    match outcome {
        SubmitOutcome::Submitted(data) => {
            println!("{}", "✅ Form submitted".green().bold());
            for (name, value) in data {
                println!("  {}={}", name.bright_cyan(), value);
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Prevented => {
            println!("{}", "❌ Submission prevented".red().bold());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show_domain(url: &str, allow_list: &AllowList) -> ExitCode {
    let domain = extract_domain(url);
    let allowed = allow_list.accepts_url(url);

    println!("  URL:    {}", url);
    println!("  Domain: {}", format!("{domain:?}").bright_yellow());

    if allowed {
        println!("{}", "✅ Domain allowed".green().bold());
        ExitCode::SUCCESS
    } else {
        println!("{}", "❌ Domain not allowed".red().bold());
        ExitCode::FAILURE
    }
}
