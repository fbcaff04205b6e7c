//! Rail geometry derived from angle, gap and measured sizes.

use macroquad::logging::debug;

use crate::math::Dimensions;

/// Floor for `|cos(angle)|`, keeps the rail finite near ±90°.
pub const MIN_COS_VALUE: f32 = 0.0001;
/// Number of item cycles laid out along the rail.
pub const CYCLES: i64 = 3;

/// Everything the rail geometry depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInputs {
    pub angle: f32,
    pub gap: f32,
    pub hover_gap: f32,
    pub item: Dimensions,
    pub container: Dimensions,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Rail distance consumed by one item including its gap.
    pub step: f32,
    /// Extra rail distance a neighbour of the hovered slot is pushed by.
    pub hover_delta_rail: f32,
    /// Rail distance of one full pass through all items.
    pub loop_span: f32,
    /// Physical rail length.
    pub rail_w: f32,
    pub cx: f32,
    pub cy: f32,
}

impl Geometry {
    pub fn compute(inputs: &GeometryInputs) -> Self {
        let theta = inputs.angle.to_radians();
        let cos_t = theta.cos().abs().max(MIN_COS_VALUE);

        let step = (inputs.item.width + inputs.gap) / cos_t;
        let hover_delta_rail = (inputs.hover_gap - inputs.gap) / cos_t;
        let loop_span = (step * inputs.total.max(1) as f32).max(1.0);
        let rail_w = loop_span * 3.0 + inputs.container.width + step * 2.0;

        Self {
            step,
            hover_delta_rail,
            loop_span,
            rail_w,
            cx: rail_w / 2.0,
            cy: (inputs.item.height / 2.0).max(0.5),
        }
    }
}

/// Memoizes [`Geometry::compute`] on its inputs.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    inputs: Option<GeometryInputs>,
    geometry: Geometry,
    recomputations: u64,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the geometry for `inputs`, recomputing only if they differ from the last call.
    pub fn get(&mut self, inputs: &GeometryInputs) -> Geometry {
        if self.inputs.as_ref() != Some(inputs) {
            self.geometry = Geometry::compute(inputs);
            self.inputs = Some(*inputs);
            self.recomputations += 1;
            debug!(
                "Rail geometry recomputed (#{}): step {}, loop span {}",
                self.recomputations, self.geometry.step, self.geometry.loop_span
            );
        }
        self.geometry
    }

    /// The most recently computed geometry, if any.
    #[cfg(test)]
    pub fn current(&self) -> Option<Geometry> {
        self.inputs.map(|_| self.geometry)
    }

    #[cfg(test)]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
