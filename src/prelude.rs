//! The marquee prelude — a single import for everything you need.
//!
//! ```rust
//! use ply_marquee::prelude::*;
//! ```

// Core types
pub use crate::Marquee;
pub use crate::MarqueeConfig;
pub use crate::SlotId;
pub use crate::driver::{DriverState, FrameOutcome};
pub use crate::observer::ObservedRegion;
pub use crate::render_commands::RenderCommand;
pub use crate::tween::Easing;

// Geometry types, renamed where macroquad has its own
pub use crate::math::{BoundingBox, Dimensions, Transform2D};
pub use crate::math::Vector2 as MarqueeVector2;

// Drawing
pub use crate::renderer::{draw_tile, hit_test, render, Tile};

// Full macroquad prelude
pub use macroquad::prelude::*;
