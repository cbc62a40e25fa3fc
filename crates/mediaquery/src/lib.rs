//! Viewport device classification.
//!
//! Two pieces:
//! - [`EnvironmentProbe`] answers once whether a viewport exists at all
//! - [`ViewportClassifier`] buckets the viewport width into mobile, tablet or
//!   desktop, tracking resizes through a 100ms trailing debounce
//!
//! [`ViewportWatcher`] runs a classifier on a tokio task and publishes
//! snapshots on a `watch` channel.
//!
//! # Example
//!
//! ```
//! use mediaquery::{
//!     ClassifierConfig, DeviceCategory, Dimensions, EnvironmentProbe, FixedViewport,
//!     ViewportClassifier,
//! };
//!
//! let classifier = ViewportClassifier::mount(
//!     FixedViewport(Dimensions::new(500, 900)),
//!     &EnvironmentProbe::interactive(),
//!     &ClassifierConfig::default(),
//! );
//!
//! let snapshot = classifier.snapshot();
//! assert_eq!(snapshot.device(), Some(DeviceCategory::Mobile));
//! assert!(snapshot.is_mobile_view());
//! ```

pub mod classifier;
pub mod config;
pub mod debounce;
pub mod device;
pub mod error;
pub mod host;
pub mod probe;
pub mod snapshot;
pub mod watcher;

pub use classifier::{Lifecycle, ViewportClassifier};
pub use config::ClassifierConfig;
pub use debounce::{Debouncer, DEFAULT_WINDOW};
pub use device::{classify, DeviceCategory, DeviceHint, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
pub use error::{MediaQueryError, Result};
pub use host::{FixedViewport, ViewportHost};
pub use probe::{EnvironmentMode, EnvironmentProbe, ProbeSource};
pub use snapshot::{Dimensions, ViewportSnapshot};
pub use watcher::{ResizeNotice, ViewportWatcher, WatcherHandle};
