//! Logging initialization
//!
//! Every decoder binary logs to stderr; stdout carries the decoded output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Event rendering selected through `LOG_FORMAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Plain text without ANSI colors
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT`; anything other than `json` means text
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Install the global subscriber for a decoder binary
///
/// `RUST_LOG` directives apply on top of a default `<crate_name>=info`.
///
/// # Errors
///
/// Fails if the crate name is not a valid filter target or a global
/// subscriber is already installed.
///
/// ```rust,ignore
/// decode_common::init_tracing("github_decode")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(format!("{crate_name}=info").parse()?);
    let subscriber = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => subscriber
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .try_init()?,
    }

    Ok(())
}
