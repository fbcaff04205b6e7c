use macroquad::logging::warn;

use crate::errors::{Error, ErrorType};
use crate::math::Dimensions;
use crate::tween::Easing;

pub const DEFAULT_ANGLE: f32 = 0.0;
pub const DEFAULT_GAP: f32 = 20.0;
pub const DEFAULT_HOVER_GAP: f32 = 40.0;
pub const DEFAULT_SPEED: f32 = 120.0;
pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 400.0;
pub const MAX_ANGLE: f32 = 45.0;

/// Tunable parameters of a marquee, as delivered by the host.
///
/// Item content is not part of the config, see [`crate::marquee::Marquee::set_items`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MarqueeConfig {
    /// Scroll sign: `true` scrolls one way, `false` reverses.
    pub direction: bool,
    /// Rail rotation in degrees, clamped to `[-45, 45]`.
    pub angle: f32,
    /// Resting spacing between items in pixels. May be negative.
    pub gap: f32,
    /// Spacing applied to the neighbours of a hovered item.
    pub hover_gap: f32,
    /// Pixels per second.
    pub speed: f32,
    /// Fallback container width until the container has been measured.
    pub width: f32,
    /// Fallback container height until the container has been measured.
    pub height: f32,
    /// Curve of the neighbour push when hover starts or ends.
    pub hover_easing: Easing,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            direction: true,
            angle: DEFAULT_ANGLE,
            gap: DEFAULT_GAP,
            hover_gap: DEFAULT_HOVER_GAP,
            speed: DEFAULT_SPEED,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            hover_easing: Easing::EaseOut,
        }
    }
}

impl MarqueeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn direction(mut self, direction: bool) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub fn angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    #[inline]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    #[inline]
    pub fn hover_gap(mut self, hover_gap: f32) -> Self {
        self.hover_gap = hover_gap;
        self
    }

    #[inline]
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[inline]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn hover_easing(mut self, easing: Easing) -> Self {
        self.hover_easing = easing;
        self
    }

    /// `+1.0` or `-1.0` depending on `direction`.
    pub fn direction_sign(&self) -> f32 {
        if self.direction {
            1.0
        } else {
            -1.0
        }
    }

    pub fn fallback_container(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Returns a copy with every value forced into its valid range, plus one
    /// diagnostic for each value that had to be changed.
    pub fn sanitized(&self) -> (Self, Vec<Error>) {
        let defaults = Self::default();
        let mut errors = Vec::new();
        let mut out = *self;

        for (value, default) in [
            (&mut out.angle, defaults.angle),
            (&mut out.gap, defaults.gap),
            (&mut out.hover_gap, defaults.hover_gap),
            (&mut out.speed, defaults.speed),
            (&mut out.width, defaults.width),
            (&mut out.height, defaults.height),
        ] {
            if !value.is_finite() {
                *value = default;
                errors.push(Error::new(
                    ErrorType::NonFiniteValue,
                    "non-finite config value replaced with its default",
                ));
            }
        }

        if out.angle.abs() > MAX_ANGLE {
            out.angle = out.angle.clamp(-MAX_ANGLE, MAX_ANGLE);
            errors.push(Error::new(
                ErrorType::AngleOutOfRange,
                "angle clamped to [-45, 45] degrees",
            ));
        }

        if out.hover_gap < 0.0 {
            out.hover_gap = 0.0;
            errors.push(Error::new(
                ErrorType::NegativeHoverGap,
                "hover gap raised to 0",
            ));
        }

        if out.speed < 0.0 {
            out.speed = -out.speed;
            errors.push(Error::new(
                ErrorType::NegativeSpeed,
                "negative speed replaced by its magnitude; use `direction` to reverse",
            ));
        }

        if out.width <= 0.0 {
            out.width = defaults.width;
            errors.push(Error::new(
                ErrorType::InvalidFallbackSize,
                "fallback width reset to 800",
            ));
        }
        if out.height <= 0.0 {
            out.height = defaults.height;
            errors.push(Error::new(
                ErrorType::InvalidFallbackSize,
                "fallback height reset to 400",
            ));
        }

        (out, errors)
    }

    /// Like [`Self::sanitized`], logging each diagnostic instead of returning it.
    pub(crate) fn sanitized_logged(&self) -> Self {
        let (config, errors) = self.sanitized();
        for error in &errors {
            warn!("Marquee config: {}", error);
        }
        config
    }
}
