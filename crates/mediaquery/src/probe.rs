//! Environment capability probe.
//!
//! Decides once whether a viewport exists in the current execution context.
//! Supports manual override via caller input or the MEDIAQUERY_ENV env var.

use std::fmt;
use std::str::FromStr;

use crate::error::MediaQueryError;

/// Environment variable consulted when no explicit override is given.
pub const ENV_VAR: &str = "MEDIAQUERY_ENV";

/// Requested environment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentMode {
    /// A viewport is present (terminal, window, browser).
    Interactive,
    /// No viewport (piped output, server-side rendering, CI).
    Headless,
    /// Detect from the process's stdout.
    Auto,
}

impl EnvironmentMode {
    /// `Some(capable)` for a concrete mode, `None` for auto.
    pub fn capable(self) -> Option<bool> {
        match self {
            Self::Interactive => Some(true),
            Self::Headless => Some(false),
            Self::Auto => None,
        }
    }
}

impl FromStr for EnvironmentMode {
    type Err = MediaQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interactive" | "tty" | "browser" | "1" | "true" => Ok(Self::Interactive),
            "headless" | "server" | "ssr" | "0" | "false" => Ok(Self::Headless),
            "auto" | "" => Ok(Self::Auto),
            _ => Err(MediaQueryError::UnknownEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

/// Which layer decided the probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSource {
    Override,
    Environment,
    Detected,
}

impl fmt::Display for ProbeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Environment => write!(f, "{}", ENV_VAR),
            Self::Detected => write!(f, "detected"),
        }
    }
}

/// One-shot answer to "is there a viewport here?".
///
/// The flag is captured at construction and never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentProbe {
    capable: bool,
    source: ProbeSource,
}

impl EnvironmentProbe {
    /// Probe the environment with an optional override.
    ///
    /// Priority order:
    /// 1. Caller override (if it names a concrete mode)
    /// 2. MEDIAQUERY_ENV environment variable
    /// 3. Whether stdout is a terminal
    pub fn detect(cli_override: Option<EnvironmentMode>) -> Self {
        let env_value = std::env::var(ENV_VAR).ok();
        Self::resolve(cli_override, env_value.as_deref(), || {
            atty::is(atty::Stream::Stdout)
        })
    }

    fn resolve(
        cli_override: Option<EnvironmentMode>,
        env_value: Option<&str>,
        detect_tty: impl FnOnce() -> bool,
    ) -> Self {
        // 1. Caller override takes priority
        if let Some(capable) = cli_override.and_then(EnvironmentMode::capable) {
            return Self::with_source(capable, ProbeSource::Override);
        }

        // 2. Environment variable override
        if let Some(capable) = env_value.and_then(parse_mode) {
            return Self::with_source(capable, ProbeSource::Environment);
        }

        // 3. Auto-detect
        Self::with_source(detect_tty(), ProbeSource::Detected)
    }

    /// A probe that reports a viewport.
    pub fn interactive() -> Self {
        Self::with_source(true, ProbeSource::Override)
    }

    /// A probe that reports no viewport.
    pub fn headless() -> Self {
        Self::with_source(false, ProbeSource::Override)
    }

    fn with_source(capable: bool, source: ProbeSource) -> Self {
        tracing::debug!(capable, %source, "environment probed");
        Self { capable, source }
    }

    pub fn is_capable(&self) -> bool {
        self.capable
    }

    pub fn source(&self) -> ProbeSource {
        self.source
    }
}

/// Lenient parse for the env var: unrecognized values fall through like `auto`.
fn parse_mode(s: &str) -> Option<bool> {
    match s.parse::<EnvironmentMode>() {
        Ok(mode) => mode.capable(),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring {}", ENV_VAR);
            None
        }
    }
}
