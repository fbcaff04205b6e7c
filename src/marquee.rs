//! The marquee component: owns the item list, the measured sizes, the scroll
//! progress and the hover state, and turns them into render commands.
//!
//! A host drives it with three kinds of calls, each on the same thread:
//!
//! - [`Marquee::frame`] once per display refresh,
//! - [`Marquee::report_size`] whenever the container or the probe item resizes,
//! - [`Marquee::pointer_enter`] / [`Marquee::pointer_leave`] (or
//!   [`Marquee::pointer_moved`]) for hover.
//!
//! Derived geometry and slot transforms are recomputed from current state on
//! every [`Marquee::render_commands`] call.

use macroquad::logging::debug;

use crate::config::MarqueeConfig;
use crate::culling::{self, Viewport};
use crate::driver::{AnimationDriver, DriverState, FrameOutcome};
use crate::geometry::{Geometry, GeometryCache, GeometryInputs};
use crate::id::SlotId;
use crate::math::{Dimensions, Vector2};
use crate::observer::{ObservedRegion, SizeObserver};
use crate::render_commands::RenderCommand;
use crate::renderer::{self, HoverEvent, HoverTracker, RailPlacement};
use crate::slots::{SlotContext, SlotLayout};
use crate::tween::PushAnimator;

#[derive(Debug)]
pub struct Marquee<T> {
    items: Vec<T>,
    config: MarqueeConfig,
    observer: SizeObserver,
    geometry: GeometryCache,
    driver: AnimationDriver,
    hovered: Option<SlotId>,
    hover_tracker: HoverTracker,
    pushes: PushAnimator,
    now_ms: f64,
    mounted: bool,
}

impl<T> Marquee<T> {
    pub fn new(items: Vec<T>, config: MarqueeConfig) -> Self {
        let config = config.sanitized_logged();
        debug!("Marquee mounted with {} items", items.len());
        let mut marquee = Self {
            items,
            config,
            observer: SizeObserver::new(),
            geometry: GeometryCache::new(),
            driver: AnimationDriver::new(),
            hovered: None,
            hover_tracker: HoverTracker::new(),
            pushes: PushAnimator::with_easing(config.hover_easing),
            now_ms: 0.0,
            mounted: true,
        };
        marquee.refresh_geometry();
        marquee
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Replaces the item list. Ignored after [`Self::unmount`].
    pub fn set_items(&mut self, items: Vec<T>) {
        if !self.mounted {
            debug!("Item update after unmount ignored");
            return;
        }
        self.items = items;
        if let Some(hovered) = self.hovered {
            if !culling::slot_range(self.total()).contains(&hovered.virt_index()) {
                self.clear_hover();
            }
        }
        self.refresh_geometry();
    }

    /// Applies new settings. Ignored after [`Self::unmount`].
    pub fn set_config(&mut self, config: MarqueeConfig) {
        if !self.mounted {
            debug!("Config update after unmount ignored");
            return;
        }
        self.config = config.sanitized_logged();
        self.pushes.set_easing(self.config.hover_easing);
        self.refresh_geometry();
    }

    /// Forwards a size measurement. Ignored after [`Self::unmount`].
    pub fn report_size(&mut self, region: ObservedRegion, size: Dimensions) {
        if self.observer.report(region, size) {
            self.refresh_geometry();
        }
    }

    pub fn item_size(&self) -> Dimensions {
        self.observer.item_size()
    }

    pub fn container_size(&self) -> Dimensions {
        self.observer.container_or(self.config.fallback_container())
    }

    fn geometry_inputs(&self) -> GeometryInputs {
        GeometryInputs {
            angle: self.config.angle,
            gap: self.config.gap,
            hover_gap: self.config.hover_gap,
            item: self.item_size(),
            container: self.container_size(),
            total: self.total(),
        }
    }

    /// Recomputes geometry if an input changed and keeps progress inside the loop span.
    fn refresh_geometry(&mut self) -> Geometry {
        let inputs = self.geometry_inputs();
        let geometry = self.geometry.get(&inputs);
        self.driver.rewrap(geometry.loop_span);
        geometry
    }

    pub fn geometry(&mut self) -> Geometry {
        self.refresh_geometry()
    }

    pub fn progress(&self) -> f32 {
        self.driver.progress()
    }

    pub fn state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn hovered(&self) -> Option<SlotId> {
        self.hovered
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Per-frame callback. `now_ms` is the frame timestamp and `dt_ms` the time
    /// since the previous frame, both in milliseconds.
    pub fn frame(&mut self, now_ms: f64, dt_ms: f64, page_visible: bool) -> FrameOutcome {
        if !self.mounted {
            return FrameOutcome::Stopped;
        }
        self.now_ms = now_ms;
        let geometry = self.refresh_geometry();
        self.driver.tick(
            now_ms,
            dt_ms,
            page_visible,
            self.total(),
            self.config.speed,
            self.config.direction_sign(),
            geometry.loop_span,
        )
    }

    pub fn pointer_enter(&mut self, slot: SlotId) {
        if !self.mounted {
            debug!("Pointer enter on {} after unmount ignored", slot);
            return;
        }
        if !culling::slot_range(self.total()).contains(&slot.virt_index()) {
            debug!("Pointer enter on unknown {} ignored", slot);
            return;
        }
        self.hovered = Some(slot);
        self.driver.pause();
    }

    /// Clears the hover, but only if `slot` is the one currently hovered.
    pub fn pointer_leave(&mut self, slot: SlotId) {
        if self.hovered == Some(slot) {
            self.clear_hover();
        }
    }

    fn clear_hover(&mut self) {
        self.hovered = None;
        self.hover_tracker.reset();
        self.driver.resume();
    }

    /// Hit tests `point` (container space, `None` when the pointer left the
    /// container) against `commands` and applies the resulting hover events.
    pub fn pointer_moved(&mut self, point: Option<Vector2>, commands: &[RenderCommand]) {
        let hit = point.and_then(|point| renderer::hit_test(commands, point));
        for event in self.hover_tracker.update(hit) {
            match event {
                HoverEvent::Enter(slot) => self.pointer_enter(slot),
                HoverEvent::Leave(slot) => self.pointer_leave(slot),
            }
        }
    }

    /// Slots intersecting the viewport plus the default buffer.
    pub fn visible_slots(&mut self) -> Vec<SlotId> {
        let geometry = self.refresh_geometry();
        let item = self.item_size();
        self.visible_slots_with_buffer(culling::default_buffer(&geometry, item.width))
    }

    pub fn visible_slots_with_buffer(&mut self, buffer: f32) -> Vec<SlotId> {
        let geometry = self.refresh_geometry();
        let viewport = Viewport::new(self.container_size().width, buffer);
        culling::visible_slots(
            self.total(),
            self.progress(),
            &geometry,
            self.item_size().width,
            &viewport,
        )
    }

    fn slot_context(&mut self) -> SlotContext {
        let geometry = self.refresh_geometry();
        SlotContext {
            total: self.total(),
            progress: self.progress(),
            angle: self.config.angle,
            item: self.item_size(),
            geometry,
            hovered: self.hovered,
        }
    }

    /// Rail-local layout of every visible slot, hover push as a target value.
    pub fn layout(&mut self) -> Vec<SlotLayout> {
        let visible = self.visible_slots();
        self.slot_context().build(&visible)
    }

    /// One render pass: visible slots placed in container space with their
    /// eased hover push, back to front.
    pub fn render_commands(&mut self) -> Vec<RenderCommand> {
        if !self.mounted {
            return Vec::new();
        }
        let layouts = self.layout();
        let placement = RailPlacement {
            container: self.container_size(),
            angle: self.config.angle,
            geometry: self.refresh_geometry(),
        };
        let item = self.item_size();
        let now_ms = self.now_ms;

        let mut commands: Vec<RenderCommand> = layouts
            .iter()
            .map(|layout| {
                let push = self.pushes.update(layout.slot, layout.push, now_ms);
                placement.command(layout, push, item)
            })
            .collect();

        let alive: Vec<SlotId> = layouts.iter().map(|layout| layout.slot).collect();
        self.pushes.retain(&alive);

        renderer::sort_for_painting(&mut commands);
        commands
    }

    /// Tears the component down: no further progress, size or hover changes.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.driver.stop();
        self.observer.disconnect();
        self.hovered = None;
        self.hover_tracker.reset();
        self.pushes.clear();
        debug!("Marquee unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::{Easing, HOVER_TRANSITION_MS};

    fn marquee(total: usize) -> Marquee<usize> {
        Marquee::new((0..total).collect(), MarqueeConfig::default())
    }

    fn run_frames(marquee: &mut Marquee<usize>, from_ms: f64, frames: usize) -> f64 {
        let mut now = from_ms;
        for _ in 0..frames {
            now += 16.0;
            marquee.frame(now, 16.0, true);
        }
        now
    }

    #[test]
    fn test_empty_marquee_is_inert() {
        let mut m = marquee(0);
        assert_eq!(m.frame(16.0, 16.0, true), FrameOutcome::Idle);
        assert_eq!(m.progress(), 0.0);
        assert!(m.render_commands().is_empty());
    }

    #[test]
    fn test_frames_advance_progress() {
        let mut m = marquee(5);
        run_frames(&mut m, 0.0, 10);
        let expected = 120.0 * 0.016 * 10.0;
        assert!((m.progress() - expected).abs() < 1e-2);
        assert!(m.progress() < m.geometry().loop_span);
    }

    #[test]
    fn test_hover_pauses_and_leave_resumes() {
        let mut m = marquee(5);
        let now = run_frames(&mut m, 0.0, 5);
        m.pointer_enter(SlotId(1));
        assert_eq!(m.state(), DriverState::Paused);
        let paused_at = m.progress();
        let now = run_frames(&mut m, now, 5);
        assert_eq!(m.progress(), paused_at);

        // Leaving a different slot does not clear the hover.
        m.pointer_leave(SlotId(2));
        assert_eq!(m.hovered(), Some(SlotId(1)));

        m.pointer_leave(SlotId(1));
        assert_eq!(m.state(), DriverState::Running);
        run_frames(&mut m, now, 2);
        assert!(m.progress() > paused_at);
    }

    #[test]
    fn test_pointer_enter_outside_slot_range_ignored() {
        let mut m = marquee(3);
        m.pointer_enter(SlotId(6));
        m.pointer_enter(SlotId(-4));
        assert_eq!(m.hovered(), None);
        assert_eq!(m.state(), DriverState::Running);
    }

    #[test]
    fn test_hover_push_eases_in() {
        let mut m = marquee(8);
        m.report_size(ObservedRegion::Container, Dimensions::new(800.0, 400.0));
        let now = run_frames(&mut m, 0.0, 1);
        m.render_commands();

        m.pointer_enter(SlotId(2));
        let now = now + 16.0;
        m.frame(now, 16.0, true);
        m.render_commands();

        m.frame(now + HOVER_TRANSITION_MS / 2.0, 16.0, true);
        let commands = m.render_commands();
        let neighbour = commands.iter().find(|c| c.id == SlotId(3)).unwrap();
        assert!(neighbour.push > 0.0 && neighbour.push < 20.0);
        let hovered = commands.iter().find(|c| c.id == SlotId(2)).unwrap();
        assert_eq!(hovered.push, 0.0);

        m.frame(now + HOVER_TRANSITION_MS, 16.0, true);
        let commands = m.render_commands();
        let neighbour = commands.iter().find(|c| c.id == SlotId(3)).unwrap();
        let before = commands.iter().find(|c| c.id == SlotId(1)).unwrap();
        assert_eq!(neighbour.push, 20.0);
        assert_eq!(before.push, -20.0);
    }

    #[test]
    fn test_commands_are_unique_and_painter_ordered() {
        let mut m = marquee(7);
        run_frames(&mut m, 0.0, 3);
        let commands = m.render_commands();
        assert!(!commands.is_empty());
        for pair in commands.windows(2) {
            assert!(pair[0].z_index <= pair[1].z_index);
            assert_ne!(pair[0].id, pair[1].id);
        }
        assert!(commands.iter().all(|c| c.data_index < 7));
    }

    #[test]
    fn test_resize_rewraps_progress() {
        let mut m = marquee(5);
        run_frames(&mut m, 0.0, 200);
        m.report_size(ObservedRegion::Probe, Dimensions::new(10.0, 10.0));
        // loop span is now 5 * 30
        assert!(m.progress() < 150.0);
    }

    #[test]
    fn test_shrinking_items_clears_stale_hover() {
        let mut m = marquee(10);
        m.pointer_enter(SlotId(15));
        assert_eq!(m.state(), DriverState::Paused);
        m.set_items(vec![0, 1, 2]);
        assert_eq!(m.hovered(), None);
        assert_eq!(m.state(), DriverState::Running);
    }

    #[test]
    fn test_pointer_moved_drives_hover() {
        let mut m = marquee(6);
        run_frames(&mut m, 0.0, 1);
        let commands = m.render_commands();
        let target = commands.last().unwrap();
        let bb = target.bounding_box();
        let inside = Vector2::new(bb.x + bb.width / 2.0, bb.y + bb.height / 2.0);

        m.pointer_moved(Some(inside), &commands);
        assert_eq!(m.hovered(), Some(target.id));
        m.pointer_moved(None, &commands);
        assert_eq!(m.hovered(), None);
    }

    #[test]
    fn test_unmount_stops_all_mutation() {
        let mut m = marquee(5);
        let now = run_frames(&mut m, 0.0, 3);
        m.unmount();
        let progress = m.progress();
        assert_eq!(m.frame(now + 16.0, 16.0, true), FrameOutcome::Stopped);
        m.pointer_enter(SlotId(1));
        m.report_size(ObservedRegion::Container, Dimensions::new(300.0, 100.0));
        assert_eq!(m.progress(), progress);
        assert_eq!(m.hovered(), None);
        assert_eq!(m.container_size(), Dimensions::new(800.0, 400.0));
        assert!(!m.is_mounted());
        assert!(m.render_commands().is_empty());
    }

    #[test]
    fn test_updates_after_unmount_leave_progress_alone() {
        let mut m = marquee(5);
        run_frames(&mut m, 0.0, 200);
        m.unmount();
        let progress = m.progress();

        m.set_items(vec![0]);
        assert_eq!(m.progress(), progress);
        assert_eq!(m.total(), 5);

        m.set_config(MarqueeConfig::new().gap(-100.0));
        assert_eq!(m.progress(), progress);
        assert_eq!(m.config().gap, 20.0);

        m.geometry();
        m.visible_slots();
        assert_eq!(m.progress(), progress);
    }

    #[test]
    fn test_dropped_hover_can_be_entered_again() {
        let mut m = marquee(6);
        run_frames(&mut m, 0.0, 1);
        let commands = m.render_commands();
        let bb = commands.last().unwrap().bounding_box();
        let inside = Vector2::new(bb.x + bb.width / 2.0, bb.y + bb.height / 2.0);
        let hit = renderer::hit_test(&commands, inside).unwrap();

        m.pointer_moved(Some(inside), &commands);
        assert_eq!(m.hovered(), Some(hit));

        // Empty the list so the hovered slot drops out of range, then restore it.
        m.set_items(vec![]);
        assert_eq!(m.hovered(), None);
        m.set_items((0..6).collect());

        m.pointer_moved(Some(inside), &commands);
        assert_eq!(m.hovered(), Some(hit));
        assert_eq!(m.state(), DriverState::Paused);
    }

    #[test]
    fn test_config_chooses_hover_easing() {
        let config = MarqueeConfig::new().hover_easing(Easing::Linear);
        let mut m = Marquee::new((0..8).collect::<Vec<usize>>(), config);
        let now = run_frames(&mut m, 0.0, 1);
        m.render_commands();
        m.pointer_enter(SlotId(2));
        m.frame(now + 16.0, 16.0, true);
        m.render_commands();

        m.frame(now + 16.0 + HOVER_TRANSITION_MS / 2.0, 16.0, true);
        let commands = m.render_commands();
        let neighbour = commands.iter().find(|c| c.id == SlotId(3)).unwrap();
        assert!((neighbour.push - 10.0).abs() < 1e-3);
    }
}
