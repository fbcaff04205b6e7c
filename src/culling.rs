//! Selection of the virtual slots that intersect the viewport.

use core::ops::Range;

use crate::geometry::{Geometry, CYCLES};
use crate::id::SlotId;

/// All virtual slots that exist for `total` items: `[-total, total * CYCLES - total)`.
pub fn slot_range(total: usize) -> Range<i64> {
    let total = total as i64;
    -total..total * CYCLES - total
}

/// Extra margin around the viewport in which slots are still kept alive.
pub fn default_buffer(geometry: &Geometry, item_width: f32) -> f32 {
    item_width * 5.0 + geometry.step
}

/// Horizontal window, in unprojected rail units, that slots must intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub container_width: f32,
    pub buffer: f32,
}

impl Viewport {
    pub fn new(container_width: f32, buffer: f32) -> Self {
        Self {
            container_width,
            buffer,
        }
    }

    /// Tests `[base - step, base + item_width + step]` against
    /// `[-buffer, container_width + buffer]`.
    pub fn contains(&self, base: f32, step: f32, item_width: f32) -> bool {
        let start = base - step;
        let end = base + item_width + step;
        end >= -self.buffer && start <= self.container_width + self.buffer
    }
}

/// Unprojected rail position of a slot's leading edge.
#[inline]
pub fn slot_base(slot: SlotId, step: f32, progress: f32) -> f32 {
    slot.virt_index() as f32 * step - progress
}

/// Visible slots, ascending by virtual index.
pub fn visible_slots(
    total: usize,
    progress: f32,
    geometry: &Geometry,
    item_width: f32,
    viewport: &Viewport,
) -> Vec<SlotId> {
    slot_range(total)
        .map(SlotId)
        .filter(|&slot| {
            viewport.contains(slot_base(slot, geometry.step, progress), geometry.step, item_width)
        })
        .collect()
}
