//! Player sprite state: a bounded position that wraps at the edges.

use glam::Vec2;

/// Shared by the key mapper and the move operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis-aligned movement bounds, inclusive on both ends.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub step: f32,
    pub bounds: Bounds,
}

impl Player {
    pub fn new(pos: Vec2, step: f32, bounds: Bounds) -> Self {
        Self { pos, step, bounds }
    }

    /// Moves one step in `dir`. Overshooting a bound teleports to the
    /// opposite edge; the grid wraps, it does not clamp.
    pub fn advance(&mut self, dir: Direction) {
        let Bounds { min, max } = self.bounds;
        match dir {
            Direction::Down => {
                self.pos.y += self.step;
                if self.pos.y > max.y {
                    self.pos.y = min.y;
                }
            }
            Direction::Up => {
                self.pos.y -= self.step;
                if self.pos.y < min.y {
                    self.pos.y = max.y;
                }
            }
            Direction::Left => {
                self.pos.x -= self.step;
                if self.pos.x < min.x {
                    self.pos.x = max.x;
                }
            }
            Direction::Right => {
                self.pos.x += self.step;
                if self.pos.x > max.x {
                    self.pos.x = min.x;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        let bounds = Bounds {
            min: Vec2::new(88.0, 88.0),
            max: Vec2::new(424.0, 424.0),
        };
        Player::new(bounds.min, 48.0, bounds)
    }

    #[test]
    fn moves_one_axis_per_step() {
        let mut p = player();
        p.advance(Direction::Right);
        assert_eq!(p.pos, Vec2::new(136.0, 88.0));
        p.advance(Direction::Down);
        assert_eq!(p.pos, Vec2::new(136.0, 136.0));
    }

    #[test]
    fn wraps_to_opposite_edge_instead_of_clamping() {
        let mut p = player();
        p.pos = Vec2::new(424.0, 88.0);
        p.advance(Direction::Right);
        assert_eq!(p.pos.x, 88.0);

        p.advance(Direction::Up);
        assert_eq!(p.pos.y, 424.0);
    }

    #[test]
    fn full_cycle_returns_near_start() {
        let mut p = player();
        let span = p.bounds.max.y - p.bounds.min.y;
        let steps = (span / p.step).ceil() as u32 + 1;
        for _ in 0..steps {
            p.advance(Direction::Down);
        }
        assert!(p.pos.y <= p.bounds.min.y + p.step);
    }

    #[test]
    fn never_leaves_bounds_under_any_sequence() {
        let mut p = player();
        let moves = [
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::Up,
            Direction::Up,
            Direction::Up,
            Direction::Left,
            Direction::Down,
        ];
        for dir in moves.iter().cycle().take(1000).copied() {
            p.advance(dir);
            assert!(p.pos.x >= p.bounds.min.x && p.pos.x <= p.bounds.max.x);
            assert!(p.pos.y >= p.bounds.min.y && p.pos.y <= p.bounds.max.y);
        }
    }
}
