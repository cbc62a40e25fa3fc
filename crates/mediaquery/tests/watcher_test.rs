use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use mediaquery::{
    ClassifierConfig, DeviceCategory, Dimensions, EnvironmentProbe, ResizeNotice,
    ViewportClassifier, ViewportHost, ViewportWatcher,
};

/// Thread-safe host: width is adjustable, height fixed.
#[derive(Clone, Default)]
struct SharedHost {
    width: Arc<AtomicU32>,
    reads: Arc<AtomicUsize>,
}

impl SharedHost {
    fn with_width(width: u32) -> Self {
        let host = Self::default();
        host.width.store(width, Ordering::SeqCst);
        host
    }

    fn set_width(&self, width: u32) {
        self.width.store(width, Ordering::SeqCst);
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ViewportHost for SharedHost {
    fn viewport_size(&self) -> Dimensions {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Dimensions::new(self.width.load(Ordering::SeqCst), 800)
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn mount(host: &SharedHost, probe: EnvironmentProbe) -> ViewportClassifier<SharedHost> {
    ViewportClassifier::mount(host.clone(), &probe, &ClassifierConfig::default())
}

#[tokio::test(start_paused = true)]
async fn burst_publishes_one_change() {
    let host = SharedHost::with_width(500);
    let (tx, rx) = mpsc::channel(16);
    let mut watcher = ViewportWatcher::spawn(mount(&host, EnvironmentProbe::interactive()), rx);

    assert_eq!(watcher.snapshot().device(), Some(DeviceCategory::Mobile));
    assert_eq!(watcher.snapshot().width(), Some(500));

    for width in [400, 1000, 1100] {
        host.set_width(width);
        tx.send(ResizeNotice).await.unwrap();
        tokio::time::sleep(ms(25)).await;
    }

    let snapshot = watcher.changed().await.unwrap();
    assert_eq!(snapshot.device(), Some(DeviceCategory::Desktop));
    assert_eq!(snapshot.width(), Some(1100));

    // Nothing else queued behind it
    tokio::time::sleep(ms(500)).await;
    assert!(!watcher.has_changed());
    assert_eq!(host.reads(), 2);

    watcher.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn repeated_size_publishes_nothing() {
    let host = SharedHost::with_width(1000);
    let (tx, rx) = mpsc::channel(16);
    let watcher = ViewportWatcher::spawn(mount(&host, EnvironmentProbe::interactive()), rx);
    let before = watcher.snapshot();

    tx.send(ResizeNotice).await.unwrap();
    tokio::time::sleep(ms(200)).await;
    tx.send(ResizeNotice).await.unwrap();
    tokio::time::sleep(ms(200)).await;

    assert!(!watcher.has_changed());
    assert!(Arc::ptr_eq(&before, &watcher.snapshot()));
    assert_eq!(host.reads(), 3);

    watcher.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_update() {
    let host = SharedHost::with_width(500);
    let (tx, rx) = mpsc::channel(16);
    let watcher = ViewportWatcher::spawn(mount(&host, EnvironmentProbe::interactive()), rx);
    let mut subscriber = watcher.subscribe();

    host.set_width(1200);
    tx.send(ResizeNotice).await.unwrap();
    tokio::time::sleep(ms(10)).await;
    watcher.shutdown().await;

    // Deadline would have passed here; the torn-down classifier never measures again
    tokio::time::sleep(ms(500)).await;
    assert_eq!(host.reads(), 1);
    assert!(subscriber.changed().await.is_err());
    assert_eq!(subscriber.borrow().device(), Some(DeviceCategory::Mobile));

    // Sending after shutdown is not an error for the watcher; the channel is just closed
    assert!(tx.send(ResizeNotice).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn headless_watcher_ignores_notices() {
    let host = SharedHost::with_width(500);
    let (tx, rx) = mpsc::channel(16);
    let watcher = ViewportWatcher::spawn(mount(&host, EnvironmentProbe::headless()), rx);

    for width in [300, 900, 1500] {
        host.set_width(width);
        tx.send(ResizeNotice).await.unwrap();
        tokio::time::sleep(ms(150)).await;
    }

    assert!(!watcher.has_changed());
    assert_eq!(watcher.snapshot().device(), None);
    assert_eq!(host.reads(), 0);

    watcher.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn closed_source_stops_watcher() {
    let host = SharedHost::with_width(800);
    let (tx, rx) = mpsc::channel(16);
    let mut watcher = ViewportWatcher::spawn(mount(&host, EnvironmentProbe::interactive()), rx);

    drop(tx);
    assert!(watcher.changed().await.is_none());
    assert_eq!(watcher.snapshot().device(), Some(DeviceCategory::Tablet));
}
