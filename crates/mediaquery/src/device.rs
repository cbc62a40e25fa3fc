//! Device categories and width breakpoints.
//!
//! Three live categories:
//! - Mobile: width up to 768px
//! - Tablet: 769px through 960px
//! - Desktop: anything wider
//!
//! `smarttv` is accepted as a seed hint only and folds into Desktop.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MediaQueryError;

/// Widest viewport still classified as mobile, in device-independent pixels.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Widest viewport still classified as tablet, in device-independent pixels.
pub const TABLET_MAX_WIDTH: u32 = 960;

/// Live device classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceCategory {
    /// Classify a viewport width. Height never matters.
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }

    pub fn is_tablet(&self) -> bool {
        matches!(self, Self::Tablet)
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, Self::Desktop)
    }

    /// Mobile or tablet: layouts that should use the compact view.
    pub fn is_mobile_view(&self) -> bool {
        matches!(self, Self::Mobile | Self::Tablet)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a viewport width into a [`DeviceCategory`].
pub fn classify(width: u32) -> DeviceCategory {
    DeviceCategory::from_width(width)
}

/// Caller-supplied default category, read once at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceHint {
    Mobile,
    Tablet,
    Desktop,
    /// Legacy hint; never produced by classification.
    SmartTv,
}

impl DeviceHint {
    /// Fold the hint into a live category. `SmartTv` becomes `Desktop`.
    pub fn normalize(self) -> DeviceCategory {
        match self {
            Self::Mobile => DeviceCategory::Mobile,
            Self::Tablet => DeviceCategory::Tablet,
            Self::Desktop | Self::SmartTv => DeviceCategory::Desktop,
        }
    }
}

impl From<DeviceCategory> for DeviceHint {
    fn from(category: DeviceCategory) -> Self {
        match category {
            DeviceCategory::Mobile => Self::Mobile,
            DeviceCategory::Tablet => Self::Tablet,
            DeviceCategory::Desktop => Self::Desktop,
        }
    }
}

impl FromStr for DeviceHint {
    type Err = MediaQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mobile" | "phone" => Ok(Self::Mobile),
            "tablet" => Ok(Self::Tablet),
            "desktop" => Ok(Self::Desktop),
            "smarttv" | "smart-tv" | "tv" => Ok(Self::SmartTv),
            _ => Err(MediaQueryError::UnknownDevice {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DeviceHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::Tablet => write!(f, "tablet"),
            Self::Desktop => write!(f, "desktop"),
            Self::SmartTv => write!(f, "smarttv"),
        }
    }
}
