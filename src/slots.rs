//! Per-slot placement on the rail: center, hover push, transform and stacking order.

use crate::geometry::Geometry;
use crate::id::SlotId;
use crate::math::{Dimensions, Transform2D};

/// Stacking order of a slot whose center sits at rail position zero.
pub const Z_BASE: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    pub slot: SlotId,
    pub data_index: usize,
    /// Rail position of the slot's center, relative to the viewport's left edge.
    pub center: f32,
    /// Target lateral push along the rail caused by a hovered neighbour.
    pub push: f32,
    /// Item placement in rail-local space, push not included.
    pub transform: Transform2D,
    pub z_index: i64,
}

/// The inputs shared by every slot of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotContext {
    pub total: usize,
    pub progress: f32,
    pub angle: f32,
    pub item: Dimensions,
    pub geometry: Geometry,
    pub hovered: Option<SlotId>,
}

impl SlotContext {
    pub fn center(&self, slot: SlotId) -> f32 {
        slot.virt_index() as f32 * self.geometry.step - self.progress + self.item.width / 2.0
    }

    /// Lateral push for `slot`. The hovered slot itself is never pushed; a neighbour
    /// exactly on the hovered center goes the positive way.
    pub fn push(&self, slot: SlotId, center: f32) -> f32 {
        match self.hovered {
            Some(hovered) if hovered != slot => {
                let hovered_center = self.center(hovered);
                let sign = if center - hovered_center >= 0.0 { 1.0 } else { -1.0 };
                sign * self.geometry.hover_delta_rail
            }
            _ => 0.0,
        }
    }

    /// translate(cx + center, cy) → rotate(-angle) → translate(-w/2, -h/2).
    pub fn transform(&self, center: f32) -> Transform2D {
        Transform2D::translation(self.geometry.cx + center, self.geometry.cy)
            .rotate(-self.angle)
            .translate(-self.item.width / 2.0, -self.item.height / 2.0)
    }

    pub fn layout(&self, slot: SlotId) -> Option<SlotLayout> {
        let data_index = slot.data_index(self.total)?;
        let center = self.center(slot);
        Some(SlotLayout {
            slot,
            data_index,
            center,
            push: self.push(slot, center),
            transform: self.transform(center),
            z_index: z_index(center),
        })
    }

    pub fn build(&self, visible: &[SlotId]) -> Vec<SlotLayout> {
        visible.iter().filter_map(|&slot| self.layout(slot)).collect()
    }
}

/// Slots further along the rail stack behind earlier ones.
#[inline]
pub fn z_index(center: f32) -> i64 {
    Z_BASE - (center as f64 * 100.0).round() as i64
}
