//! Classifier configuration.

use std::time::Duration;

use crate::debounce::DEFAULT_WINDOW;
use crate::device::DeviceHint;
use crate::error::{MediaQueryError, Result};

/// Seed category, e.g. `MEDIAQUERY_DEFAULT_DEVICE=desktop`.
pub const DEFAULT_DEVICE_VAR: &str = "MEDIAQUERY_DEFAULT_DEVICE";

/// Debounce window in milliseconds, e.g. `MEDIAQUERY_DEBOUNCE_MS=100`.
pub const DEBOUNCE_MS_VAR: &str = "MEDIAQUERY_DEBOUNCE_MS";

/// Configuration for a [`ViewportClassifier`](crate::ViewportClassifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Category reported before the first measurement. Read once at mount.
    pub default_device: Option<DeviceHint>,

    /// Quiescence window for resize notifications.
    pub debounce: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_device: None,
            debounce: DEFAULT_WINDOW,
        }
    }
}

impl ClassifierConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(
            std::env::var(DEFAULT_DEVICE_VAR).ok().as_deref(),
            std::env::var(DEBOUNCE_MS_VAR).ok().as_deref(),
        )
    }

    /// Layer raw string overrides on top of this config. `None` or blank
    /// values leave the field untouched.
    pub fn with_overrides(
        mut self,
        default_device: Option<&str>,
        debounce_ms: Option<&str>,
    ) -> Result<Self> {
        if let Some(value) = non_blank(default_device) {
            self.default_device = Some(value.parse()?);
        }

        if let Some(value) = non_blank(debounce_ms) {
            let ms: u64 = value
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| MediaQueryError::InvalidConfig {
                    key: DEBOUNCE_MS_VAR,
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
            self.debounce = Duration::from_millis(ms);
        }

        Ok(self)
    }

    pub fn with_default_device(mut self, hint: DeviceHint) -> Self {
        self.default_device = Some(hint);
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
