//! Static arena: bounds, walls and the target zone

use glam::Vec2;

use super::collision::clamp;
use super::rect::Rect;

/// Immutable play area, built once per run
#[derive(Debug, Clone)]
pub struct Arena {
    width: f32,
    height: f32,
    walls: Vec<Rect>,
    target: Rect,
}

impl Arena {
    pub fn new(width: f32, height: f32, walls: Vec<Rect>, target: Rect) -> Self {
        Self {
            width,
            height,
            walls,
            target,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The whole play area as a box at the origin
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn target(&self) -> &Rect {
        &self.target
    }

    /// True if `rect` lies fully inside the arena
    pub fn contains(&self, rect: &Rect) -> bool {
        self.bounds().contains(rect)
    }

    /// Clamp a top-left position so a box of `size` stays fully inside
    pub fn clamp_position(&self, pos: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            clamp(pos.x, 0.0, self.width - size.x),
            clamp(pos.y, 0.0, self.height - size.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position_keeps_box_inside() {
        let arena = Arena::new(100.0, 50.0, Vec::new(), Rect::new(0.0, 0.0, 1.0, 1.0));
        let size = Vec2::splat(10.0);

        assert_eq!(arena.clamp_position(Vec2::new(-5.0, 60.0), size), Vec2::new(0.0, 40.0));
        assert_eq!(arena.clamp_position(Vec2::new(95.0, 20.0), size), Vec2::new(90.0, 20.0));
        assert!(arena.contains(&Rect::from_pos_size(arena.clamp_position(Vec2::new(1e6, 1e6), size), size)));
    }
}
