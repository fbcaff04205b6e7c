use macroquad::prelude::*;

use crate::geometry::Geometry;
use crate::id::SlotId;
use crate::math::{BoundingBox, Dimensions, Transform2D, Vector2 as PlyVector2};
use crate::render_commands::RenderCommand;
use crate::slots::SlotLayout;

/// Where the rail sits inside the container.
///
/// The rail is rotated by `angle` about the container center, and rail-local
/// `(cx + container.width / 2, cy)` lands on that center, so at angle zero a
/// slot with rail center `x` is drawn at container x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailPlacement {
    pub container: Dimensions,
    pub angle: f32,
    pub geometry: Geometry,
}

impl RailPlacement {
    pub fn rail_to_container(&self) -> Transform2D {
        Transform2D::translation(self.container.width / 2.0, self.container.height / 2.0)
            .rotate(self.angle)
            .translate(
                -(self.geometry.cx + self.container.width / 2.0),
                -self.geometry.cy,
            )
    }

    /// Places `layout` in container space with an extra `push` along the rail.
    pub fn command(&self, layout: &SlotLayout, push: f32, size: Dimensions) -> RenderCommand {
        let transform = self
            .rail_to_container()
            .translate(push, 0.0)
            .then(&layout.transform);
        RenderCommand {
            id: layout.slot,
            data_index: layout.data_index,
            size,
            transform,
            push,
            z_index: layout.z_index,
        }
    }
}

/// Sorts commands into painter order, back to front.
pub fn sort_for_painting(commands: &mut [RenderCommand]) {
    commands.sort_by_key(|command| (command.z_index, command.id));
}

/// The top-most slot under `point` (container space). Expects painter order.
pub fn hit_test(commands: &[RenderCommand], point: PlyVector2) -> Option<SlotId> {
    commands
        .iter()
        .rev()
        .find(|command| command.contains(point))
        .map(|command| command.id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(SlotId),
    Leave(SlotId),
}

/// Turns successive hit test results into enter and leave events.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    current: Option<SlotId>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<SlotId> {
        self.current
    }

    /// Leave is always reported before enter.
    pub fn update(&mut self, hit: Option<SlotId>) -> Vec<HoverEvent> {
        if hit == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.current {
            events.push(HoverEvent::Leave(previous));
        }
        if let Some(next) = hit {
            events.push(HoverEvent::Enter(next));
        }
        self.current = hit;
        events
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Plain item content: a colored card with an optional label.
#[derive(Debug, Clone)]
pub struct Tile {
    pub color: Color,
    pub label: String,
    pub text_color: Color,
    pub font_size: u16,
}

impl Tile {
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
            text_color: WHITE,
            font_size: 24,
        }
    }
}

/// Default drawing for [`Tile`] items.
pub fn draw_tile(tile: &Tile, command: &RenderCommand, container_origin: Vec2) {
    let position = command.position();
    let x = container_origin.x + position.x;
    let y = container_origin.y + position.y;
    draw_rectangle_ex(
        x,
        y,
        command.size.width,
        command.size.height,
        DrawRectangleParams {
            offset: Vec2::ZERO,
            rotation: command.rotation().to_radians(),
            color: tile.color,
        },
    );
    if !tile.label.is_empty() {
        let dims = measure_text(&tile.label, None, tile.font_size, 1.0);
        draw_text(
            &tile.label,
            x + (command.size.width - dims.width) / 2.0,
            y + (command.size.height + dims.offset_y) / 2.0,
            tile.font_size as f32,
            tile.text_color,
        );
    }
}

/// Draws `commands` inside `container` (screen space), clipped to it.
///
/// Commands whose `data_index` is out of range for `items` are skipped.
pub fn render<T>(
    commands: &[RenderCommand],
    items: &[T],
    container: BoundingBox,
    draw_item: impl Fn(&T, &RenderCommand, Vec2),
) {
    let clip = Some((
        container.x as i32,
        container.y as i32,
        container.width as i32,
        container.height as i32,
    ));
    unsafe {
        get_internal_gl().quad_gl.scissor(clip);
    }

    let origin = Vec2::new(container.x, container.y);
    for command in commands {
        match items.get(command.data_index) {
            Some(item) => draw_item(item, command, origin),
            None => warn!(
                "Render command {} points at item {} but only {} items exist",
                command.id,
                command.data_index,
                items.len()
            ),
        }
    }

    unsafe {
        get_internal_gl().quad_gl.scissor(None);
    }
}
