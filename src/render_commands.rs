use crate::id::SlotId;
use crate::math::{BoundingBox, Dimensions, Transform2D, Vector2};

/// One positioned item, ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCommand {
    /// Element identity. Stable for as long as the slot stays visible.
    pub id: SlotId,
    /// Index of the item to draw.
    pub data_index: usize,
    /// Item size in its own local space.
    pub size: Dimensions,
    /// Item-local to container space, hover push included.
    pub transform: Transform2D,
    /// Current, eased hover push along the rail.
    pub push: f32,
    /// Higher values draw on top.
    pub z_index: i64,
}

impl RenderCommand {
    /// Top-left corner of the item in container space.
    pub fn position(&self) -> Vector2 {
        self.transform.origin()
    }

    /// Screen rotation of the item content in degrees. Zero while the rail
    /// counter-rotation holds.
    pub fn rotation(&self) -> f32 {
        self.transform.rotation()
    }

    /// Axis-aligned bounds of the transformed item in container space.
    pub fn bounding_box(&self) -> BoundingBox {
        let corners = [
            Vector2::new(0.0, 0.0),
            Vector2::new(self.size.width, 0.0),
            Vector2::new(0.0, self.size.height),
            Vector2::new(self.size.width, self.size.height),
        ]
        .map(|corner| self.transform.apply(corner));

        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for corner in corners {
            min_x = min_x.min(corner.x);
            min_y = min_y.min(corner.y);
            max_x = max_x.max(corner.x);
            max_y = max_y.max(corner.y);
        }
        BoundingBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// True if `point` (container space) lies on the item itself, not just its bounds.
    pub fn contains(&self, point: Vector2) -> bool {
        if !self.bounding_box().contains(point) {
            return false;
        }
        match self.transform.inverse() {
            Some(inverse) => {
                let local = inverse.apply(point);
                local.x >= 0.0
                    && local.x <= self.size.width
                    && local.y >= 0.0
                    && local.y <= self.size.height
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(transform: Transform2D) -> RenderCommand {
        RenderCommand {
            id: SlotId(0),
            data_index: 0,
            size: Dimensions::new(100.0, 50.0),
            transform,
            push: 0.0,
            z_index: 0,
        }
    }

    #[test]
    fn test_upright_bounds() {
        let cmd = command(Transform2D::translation(10.0, 20.0));
        assert_eq!(cmd.bounding_box(), BoundingBox::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(cmd.position(), Vector2::new(10.0, 20.0));
        assert!(cmd.contains(Vector2::new(60.0, 40.0)));
        assert!(!cmd.contains(Vector2::new(5.0, 40.0)));
    }

    #[test]
    fn test_rotated_contains_uses_item_shape() {
        let cmd = command(Transform2D::translation(100.0, 100.0).rotate(45.0));
        // Inside the AABB, outside the rotated rectangle.
        let bb = cmd.bounding_box();
        assert!(bb.contains(Vector2::new(bb.x + 1.0, bb.y + 1.0)));
        assert!(!cmd.contains(Vector2::new(bb.x + 1.0, bb.y + 1.0)));
        assert!(cmd.contains(Vector2::new(100.0, 110.0)));
    }
}
