//! Draw contract between the core and a presentation layer.
//!
//! The core hands over cell-space positions, logical colors, and sizes; the
//! host owns pixels, scaling, buffering, and the camera.

use crate::components::{Color, Offset, Position, Shape, Sprite, StateTags};
use glam::Vec2;
use hecs::World;

/// Surface the host exposes to the draw pass. Coordinates are in cell
/// units; one cell spans 1.0.
pub trait Canvas {
    fn fill_rect(&mut self, center: Vec2, size: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Draw every sprite-carrying entity onto the canvas, honoring sub-cell
/// offsets and state-dependent colors.
pub fn draw_world(world: &World, canvas: &mut impl Canvas) {
    for (_id, (pos, sprite, offset, tags)) in world
        .query::<(&Position, &Sprite, Option<&Offset>, Option<&StateTags>)>()
        .iter()
    {
        let base = Vec2::new(pos.x as f32, pos.y as f32)
            + offset.map(|o| o.0).unwrap_or(Vec2::ZERO);
        let center = base + Vec2::splat(0.5);
        let color = sprite.color_for(tags);
        match sprite.shape {
            Shape::Rectangle => canvas.fill_rect(center, sprite.size, color),
            Shape::Circle => canvas.fill_circle(center, sprite.size / 2.0, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::StateTag;

    #[derive(Default)]
    struct RecordingCanvas {
        rects: Vec<(Vec2, f32, Color)>,
        circles: Vec<(Vec2, f32, Color)>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, center: Vec2, size: f32, color: Color) {
            self.rects.push((center, size, color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }
    }

    #[test]
    fn test_draw_world_reports_cell_space_positions() {
        let mut world = World::new();
        world.spawn((
            Position::new(2, 3),
            Sprite::new(Shape::Circle, 0.4, [255, 255, 0]),
        ));
        world.spawn((
            Position::new(5, 5),
            Offset(Vec2::new(-0.25, 0.0)),
            Sprite::new(Shape::Rectangle, 0.8, [0, 255, 0]),
        ));

        let mut canvas = RecordingCanvas::default();
        draw_world(&world, &mut canvas);

        assert_eq!(canvas.circles, vec![(Vec2::new(2.5, 3.5), 0.2, [255, 255, 0])]);
        assert_eq!(canvas.rects, vec![(Vec2::new(5.25, 5.5), 0.8, [0, 255, 0])]);
    }

    #[test]
    fn test_draw_world_uses_state_colors() {
        let mut world = World::new();
        let mut tags = StateTags::default();
        tags.set(StateTag::Chasing, true);
        world.spawn((
            Position::new(0, 0),
            tags,
            Sprite::new(Shape::Rectangle, 0.8, [255, 128, 0])
                .with_state_color(StateTag::Chasing, [255, 0, 0]),
        ));

        let mut canvas = RecordingCanvas::default();
        draw_world(&world, &mut canvas);
        assert_eq!(canvas.rects[0].2, [255, 0, 0]);
    }
}
