//! Measured sizes of the marquee container and of the probe item.
//!
//! The host owns the actual measurement (window size, a laid out sample
//! item, ...) and forwards every change through [`SizeObserver::report`].

use macroquad::logging::debug;

use crate::math::Dimensions;

/// Item size used until the probe has been measured.
pub const DEFAULT_ITEM_SIZE: Dimensions = Dimensions {
    width: 120.0,
    height: 180.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedRegion {
    /// The outer marquee container.
    Container,
    /// A hidden element holding one sample item.
    Probe,
}

#[derive(Debug, Clone, Default)]
pub struct SizeObserver {
    container: Option<Dimensions>,
    probe: Option<Dimensions>,
    disconnected: bool,
}

impl SizeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new content-box size. Returns `true` if the stored value changed.
    ///
    /// Zero or non-finite sizes count as "unmeasured" and clear the region so
    /// that the fallback applies again.
    pub fn report(&mut self, region: ObservedRegion, size: Dimensions) -> bool {
        if self.disconnected {
            debug!("Size report for {:?} after disconnect ignored", region);
            return false;
        }
        let next = size.is_measured().then_some(size);
        let slot = match region {
            ObservedRegion::Container => &mut self.container,
            ObservedRegion::Probe => &mut self.probe,
        };
        if *slot == next {
            return false;
        }
        *slot = next;
        true
    }

    pub fn container(&self) -> Option<Dimensions> {
        self.container
    }

    pub fn probe(&self) -> Option<Dimensions> {
        self.probe
    }

    /// Measured container size, or `fallback` before the first valid measurement.
    pub fn container_or(&self, fallback: Dimensions) -> Dimensions {
        self.container.unwrap_or(fallback)
    }

    /// Measured item size, or [`DEFAULT_ITEM_SIZE`].
    pub fn item_size(&self) -> Dimensions {
        self.probe.unwrap_or(DEFAULT_ITEM_SIZE)
    }

    /// Stops accepting reports. Stored sizes are kept.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
    }

    pub fn is_connected(&self) -> bool {
        !self.disconnected
    }
}
