//! Host-side viewport access.

use crate::snapshot::Dimensions;

/// Something that can report the current viewport size.
///
/// Hosts are only queried after the environment probe has confirmed a
/// viewport exists. A host that cannot measure should return its best
/// known value rather than failing.
pub trait ViewportHost {
    fn viewport_size(&self) -> Dimensions;
}

impl<F> ViewportHost for F
where
    F: Fn() -> Dimensions,
{
    fn viewport_size(&self) -> Dimensions {
        self()
    }
}

/// A host with a fixed size, for headless rendering and one-off classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub Dimensions);

impl ViewportHost for FixedViewport {
    fn viewport_size(&self) -> Dimensions {
        self.0
    }
}
