//! Read-only classifier state handed to consumers.

use serde::Serialize;

use crate::device::DeviceCategory;

/// Last observed viewport size in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Snapshot of classifier state.
///
/// The boolean flags are derived from `device` when the snapshot is built,
/// so `is_mobile_view` always equals `is_mobile || is_tablet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSnapshot {
    device: Option<DeviceCategory>,
    width: Option<u32>,
    height: Option<u32>,
    is_mobile: bool,
    is_tablet: bool,
    is_desktop: bool,
    is_mobile_view: bool,
}

impl ViewportSnapshot {
    pub fn new(device: Option<DeviceCategory>, dimensions: Option<Dimensions>) -> Self {
        Self {
            device,
            width: dimensions.map(|d| d.width),
            height: dimensions.map(|d| d.height),
            is_mobile: device.is_some_and(|d| d.is_mobile()),
            is_tablet: device.is_some_and(|d| d.is_tablet()),
            is_desktop: device.is_some_and(|d| d.is_desktop()),
            is_mobile_view: device.is_some_and(|d| d.is_mobile_view()),
        }
    }

    /// Nothing seeded and nothing measured yet.
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    pub fn device(&self) -> Option<DeviceCategory> {
        self.device
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Dimensions { width, height }),
            _ => None,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.is_tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.is_desktop
    }

    pub fn is_mobile_view(&self) -> bool {
        self.is_mobile_view
    }
}

impl Default for ViewportSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_no_flags() {
        let snapshot = ViewportSnapshot::empty();
        assert_eq!(snapshot.device(), None);
        assert_eq!(snapshot.dimensions(), None);
        assert!(!snapshot.is_mobile());
        assert!(!snapshot.is_tablet());
        assert!(!snapshot.is_desktop());
        assert!(!snapshot.is_mobile_view());
    }

    #[test]
    fn test_flags_follow_device() {
        let tablet = ViewportSnapshot::new(Some(DeviceCategory::Tablet), None);
        assert!(tablet.is_tablet());
        assert!(tablet.is_mobile_view());
        assert!(!tablet.is_desktop());

        let desktop = ViewportSnapshot::new(
            Some(DeviceCategory::Desktop),
            Some(Dimensions::new(1280, 800)),
        );
        assert!(desktop.is_desktop());
        assert!(!desktop.is_mobile_view());
        assert_eq!(desktop.width(), Some(1280));
        assert_eq!(desktop.height(), Some(800));
    }

    #[test]
    fn test_serializes_to_record_shape() {
        let snapshot = ViewportSnapshot::new(
            Some(DeviceCategory::Mobile),
            Some(Dimensions::new(500, 900)),
        );
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "device": "mobile",
                "width": 500,
                "height": 900,
                "isMobile": true,
                "isTablet": false,
                "isDesktop": false,
                "isMobileView": true,
            })
        );
    }

    #[test]
    fn test_unset_fields_serialize_as_null() {
        let value = serde_json::to_value(ViewportSnapshot::empty()).unwrap();
        assert_eq!(value["device"], serde_json::Value::Null);
        assert_eq!(value["width"], serde_json::Value::Null);
    }
}
