//! Eased interpolation of the hover push, one interpolator per slot.

use rustc_hash::FxHashMap;

use crate::id::SlotId;

/// Duration of the hover push transition.
pub const HOVER_TRANSITION_MS: f64 = 180.0;

/// Curve of the hover push transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    Linear,
    /// Cubic ease-out, fast start and soft landing.
    #[default]
    EaseOut,
    /// Hermite smoothstep.
    Smoothstep,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushTween {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl PushTween {
    pub fn new(from: f32, to: f32, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.from == self.to || now_ms - self.start_ms >= self.duration_ms
    }

    pub fn sample(&self, now_ms: f64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms) as f32;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Starts a new transition towards `to` from wherever this one currently is.
    pub fn retarget(&mut self, now_ms: f64, to: f32) {
        if to == self.to {
            return;
        }
        let current = self.sample(now_ms);
        *self = Self::new(current, to, now_ms, self.duration_ms, self.easing);
    }
}

/// Push interpolators for the currently alive slots.
#[derive(Debug, Clone, Default)]
pub struct PushAnimator {
    tweens: FxHashMap<SlotId, PushTween>,
    easing: Easing,
}

impl PushAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            tweens: FxHashMap::default(),
            easing,
        }
    }

    /// Switches the curve for transitions started from now on.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Feeds this frame's push target for `slot` and returns the offset to draw.
    ///
    /// A slot seen for the first time starts at rest on its target.
    pub fn update(&mut self, slot: SlotId, target: f32, now_ms: f64) -> f32 {
        let easing = self.easing;
        let tween = self.tweens.entry(slot).or_insert_with(|| {
            PushTween::new(target, target, now_ms, HOVER_TRANSITION_MS, easing)
        });
        tween.retarget(now_ms, target);
        tween.sample(now_ms)
    }

    /// Drops interpolators for slots that are no longer alive.
    pub fn retain(&mut self, alive: &[SlotId]) {
        self.tweens.retain(|slot, _| alive.contains(slot));
    }

    #[cfg(test)]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.tweens.values().any(|t| !t.is_done(now_ms))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
