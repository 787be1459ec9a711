//! Collision detection and response against static map obstacles
//!
//! A moving box that overlaps an obstacle is pushed out along the axis with
//! the smaller penetration, ending flush against the obstacle edge.

use glam::Vec2;

use super::rect::Rect;

/// Axis and side a box was pushed out along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    /// Moved so its right edge meets the obstacle's left edge
    Left,
    /// Moved so its left edge meets the obstacle's right edge
    Right,
    /// Moved so its top edge meets the obstacle's bottom edge
    Down,
    /// Moved so its bottom edge meets the obstacle's top edge
    Up,
}

impl Push {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Push::Left | Push::Right)
    }
}

/// Penetration of `moving` into `obstacle` on each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Overlap {
    pub fn between(moving: &Rect, obstacle: &Rect) -> Self {
        Self {
            left: moving.right() - obstacle.left(),
            right: obstacle.right() - moving.left(),
            top: moving.top() - obstacle.bottom(),
            bottom: obstacle.top() - moving.bottom(),
        }
    }

    /// Pick the push direction. Exact ties between axes go vertical.
    pub fn push(&self) -> Push {
        let min_x = self.left.min(self.right);
        let min_y = self.top.min(self.bottom);

        if min_x < min_y {
            if self.left < self.right {
                Push::Left
            } else {
                Push::Right
            }
        } else if self.top < self.bottom {
            Push::Down
        } else {
            Push::Up
        }
    }
}

/// Resolve a single obstacle. Returns the corrected box and the push applied,
/// or `None` when the boxes do not overlap.
pub fn resolve_one(moving: &Rect, obstacle: &Rect) -> Option<(Rect, Push)> {
    if !moving.overlaps(obstacle) {
        return None;
    }

    let push = Overlap::between(moving, obstacle).push();
    let min = match push {
        Push::Left => Vec2::new(obstacle.left() - moving.width, moving.y),
        Push::Right => Vec2::new(obstacle.right(), moving.y),
        Push::Down => Vec2::new(moving.x, obstacle.bottom() - moving.height),
        Push::Up => Vec2::new(moving.x, obstacle.top()),
    };

    Some((moving.with_min(min), push))
}

/// Resolve a moving box against every obstacle in iteration order.
///
/// Each correction is applied before the next obstacle is tested, so with
/// adjacent obstacles the result depends on their order. Returns the
/// corrected bottom-left corner of the box.
pub fn resolve(moving: Rect, obstacles: &[Rect]) -> Vec2 {
    let mut current = moving;
    for obstacle in obstacles {
        if let Some((corrected, _)) = resolve_one(&current, obstacle) {
            current = corrected;
        }
    }
    current.min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> Rect {
        Rect::new(100.0, 0.0, 50.0, 200.0)
    }

    #[test]
    fn test_no_overlap_returns_input() {
        let b = Rect::new(0.0, 0.0, 24.0, 16.0);
        assert_eq!(resolve(b, &[wall()]), b.min());
        assert_eq!(resolve(b, &[]), b.min());
    }

    #[test]
    fn test_push_left_flush() {
        // Box pokes 3 units into the wall's left side
        let b = Rect::new(79.0, 50.0, 24.0, 16.0);
        let (out, push) = resolve_one(&b, &wall()).unwrap();
        assert_eq!(push, Push::Left);
        assert_eq!(out.right(), 100.0);
        assert_eq!(out.y, 50.0);
    }

    #[test]
    fn test_push_right_flush() {
        let b = Rect::new(148.0, 50.0, 24.0, 16.0);
        let (out, push) = resolve_one(&b, &wall()).unwrap();
        assert_eq!(push, Push::Right);
        assert_eq!(out.left(), 150.0);
        assert_eq!(out.y, 50.0);
    }

    #[test]
    fn test_push_vertical() {
        let floor = Rect::new(0.0, 0.0, 300.0, 20.0);
        // Dropped 2 units into the floor from above
        let b = Rect::new(40.0, 18.0, 24.0, 16.0);
        let (out, push) = resolve_one(&b, &floor).unwrap();
        assert_eq!(push, Push::Up);
        assert_eq!(out.bottom(), 20.0);
        assert_eq!(out.x, 40.0);

        let ceiling = Rect::new(0.0, 100.0, 300.0, 20.0);
        let b = Rect::new(40.0, 86.0, 24.0, 16.0);
        let (out, push) = resolve_one(&b, &ceiling).unwrap();
        assert_eq!(push, Push::Down);
        assert_eq!(out.top(), 100.0);
        assert_eq!(out.x, 40.0);
    }

    #[test]
    fn test_axis_tie_goes_vertical() {
        // Corner overlap of 4 on both axes
        let obstacle = Rect::new(20.0, 20.0, 40.0, 40.0);
        let b = Rect::new(0.0, 0.0, 24.0, 24.0);
        let overlap = Overlap::between(&b, &obstacle);
        assert_eq!(overlap.left.min(overlap.right), 4.0);
        assert_eq!(overlap.top.min(overlap.bottom), 4.0);
        let (out, push) = resolve_one(&b, &obstacle).unwrap();
        assert!(!push.is_horizontal());
        assert_eq!(out.top(), 20.0);
        assert_eq!(out.x, 0.0);
    }

    #[test]
    fn test_sequential_resolution_clears_corner() {
        // Two stacked blocks forming a corner; the box overlaps both
        let a = Rect::new(0.0, 0.0, 100.0, 10.0);
        let b = Rect::new(90.0, 10.0, 10.0, 100.0);
        let moving = Rect::new(85.0, 8.0, 10.0, 10.0);

        let ab = resolve(moving, &[a, b]);
        let ba = resolve(moving, &[b, a]);
        assert_eq!(ab, Vec2::new(80.0, 10.0));
        assert_eq!(ba, Vec2::new(80.0, 10.0));

        // Each result sits clear of both obstacles
        for min in [ab, ba] {
            let out = moving.with_min(min);
            assert!(!out.overlaps(&a));
            assert!(!out.overlaps(&b));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rect_strategy() -> impl Strategy<Value = Rect> {
            (-200i32..200, -200i32..200, 1i32..120, 1i32..120)
                .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
        }

        proptest! {
            #[test]
            fn pushed_axis_is_clear_and_other_axis_kept(
                moving in rect_strategy(),
                obstacle in rect_strategy(),
            ) {
                match resolve_one(&moving, &obstacle) {
                    None => prop_assert!(!moving.overlaps(&obstacle)),
                    Some((out, push)) => {
                        if push.is_horizontal() {
                            prop_assert!(out.right() <= obstacle.left() || out.left() >= obstacle.right());
                            prop_assert_eq!(out.y, moving.y);
                        } else {
                            prop_assert!(out.top() <= obstacle.bottom() || out.bottom() >= obstacle.top());
                            prop_assert_eq!(out.x, moving.x);
                        }
                        prop_assert!(!out.overlaps(&obstacle));
                    }
                }
            }
        }
    }
}
