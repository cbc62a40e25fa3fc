//! Viewport classifier state machine.
//!
//! Lifecycle:
//!
//! ```text
//! mount ─┬─ probe false ─▸ Inert      (seed value forever, notices ignored)
//!        └─ probe true  ─▸ check now ─▸ Listening ─▸ teardown ─▸ TornDown
//! ```
//!
//! While listening, every resize notice re-arms a trailing debounce deadline.
//! When the deadline passes, `poll` re-measures the host and applies the new
//! category and dimensions only where they differ from the last applied values.
//!
//! The classifier does not own a clock. Callers pass `Instant`s in, which is
//! what lets [`ViewportWatcher`](crate::ViewportWatcher) drive it from tokio and
//! lets tests drive it by hand.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ClassifierConfig;
use crate::debounce::Debouncer;
use crate::device::{classify, DeviceCategory, DeviceHint};
use crate::host::ViewportHost;
use crate::probe::EnvironmentProbe;
use crate::snapshot::{Dimensions, ViewportSnapshot};

/// Where the classifier is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Mounted without a viewport. State stays at the seed.
    Inert,
    /// Subscribed to resize notices.
    Listening,
    /// Subscription removed. Nothing changes any more.
    TornDown,
}

/// Values most recently committed to the snapshot.
///
/// Change detection compares against this cache, never against a snapshot a
/// consumer may still be holding.
#[derive(Debug, Clone, Copy, Default)]
struct Applied {
    device: Option<DeviceCategory>,
    dimensions: Option<Dimensions>,
}

pub struct ViewportClassifier<H> {
    host: H,
    lifecycle: Lifecycle,
    debouncer: Debouncer,
    applied: Applied,
    snapshot: Arc<ViewportSnapshot>,
}

impl<H: ViewportHost> ViewportClassifier<H> {
    /// Mount a classifier.
    ///
    /// The seed is normalized (`smarttv` becomes `desktop`). If the probe reports
    /// a viewport, the host is measured immediately so the first snapshot
    /// reflects reality without waiting out a debounce window.
    pub fn mount(host: H, probe: &EnvironmentProbe, config: &ClassifierConfig) -> Self {
        let applied = Applied {
            device: config.default_device.map(DeviceHint::normalize),
            dimensions: None,
        };

        let mut classifier = Self {
            host,
            lifecycle: Lifecycle::Inert,
            debouncer: Debouncer::new(config.debounce),
            applied,
            snapshot: Arc::new(ViewportSnapshot::new(applied.device, None)),
        };

        if !probe.is_capable() {
            tracing::debug!(seed = ?applied.device, "no viewport; classifier stays at seed");
            return classifier;
        }

        classifier.check_device();
        classifier.lifecycle = Lifecycle::Listening;
        classifier
    }

    /// Record a resize notification. Ignored unless listening.
    pub fn notify_resize(&mut self, now: Instant) {
        if self.lifecycle == Lifecycle::Listening {
            self.debouncer.trigger(now);
        } else {
            tracing::trace!(lifecycle = ?self.lifecycle, "resize ignored");
        }
    }

    /// Run the debounced handler if its deadline has passed.
    ///
    /// Returns true when a change was applied and a new snapshot is available.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.lifecycle != Lifecycle::Listening {
            return false;
        }
        if !self.debouncer.poll(now) {
            return false;
        }
        self.check_device()
    }

    /// When the pending debounced handler is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.lifecycle {
            Lifecycle::Listening => self.debouncer.deadline(),
            _ => None,
        }
    }

    /// Remove the subscription and cancel any pending deadline. Idempotent.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
        if self.lifecycle != Lifecycle::TornDown {
            tracing::debug!("classifier torn down");
        }
        self.lifecycle = Lifecycle::TornDown;
    }

    /// Current state. The same `Arc` is returned until a change is applied.
    pub fn snapshot(&self) -> Arc<ViewportSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_listening(&self) -> bool {
        self.lifecycle == Lifecycle::Listening
    }

    /// Measure the host and apply whatever differs from the last applied values.
    fn check_device(&mut self) -> bool {
        let dimensions = self.host.viewport_size();
        let device = classify(dimensions.width);
        let mut changed = false;

        if self.applied.device != Some(device) {
            self.applied.device = Some(device);
            changed = true;
        }

        if self.applied.dimensions != Some(dimensions) {
            self.applied.dimensions = Some(dimensions);
            changed = true;
        }

        if changed {
            tracing::debug!(
                %device,
                width = dimensions.width,
                height = dimensions.height,
                "viewport classified"
            );
            self.snapshot = Arc::new(ViewportSnapshot::new(
                self.applied.device,
                self.applied.dimensions,
            ));
        } else {
            tracing::trace!(width = dimensions.width, "viewport unchanged");
        }

        changed
    }
}

impl<H> std::fmt::Debug for ViewportClassifier<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("lifecycle", &self.lifecycle)
            .field("debouncer", &self.debouncer)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}
