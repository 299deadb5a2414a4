//! Spatial neighbour resolution between widgets
//!
//! The neighbour of a widget in a direction is chosen from the widgets
//! roughly ahead of it, using two measurements between centers: the
//! Manhattan distance and the angle away from the requested direction.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use dp_core::Direction;

use crate::geometry::Bounded;

/// Extra angle beyond a right angle still treated as "ahead"
const ANGLE_TOLERANCE: f64 = 0.1;

/// Unit vector of a spatial direction
fn direction_vector(direction: Direction) -> Option<(f64, f64)> {
    match direction {
        Direction::Up => Some((0.0, -1.0)),
        Direction::Down => Some((0.0, 1.0)),
        Direction::Left => Some((-1.0, 0.0)),
        Direction::Right => Some((1.0, 0.0)),
        Direction::Enter | Direction::Exit => None,
    }
}

/// Absolute difference between two angles, the short way round
pub fn abs_angle_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

fn center<W: Bounded>(widget: &W) -> (f64, f64) {
    let bounds = widget.bounds();
    (
        f64::from(bounds.x) + f64::from(bounds.w) / 2.0,
        f64::from(bounds.y) + f64::from(bounds.h) / 2.0,
    )
}

/// Index of the widget that is directionally "next" to `widget`.
///
/// Candidates sharing the widget's center or lying more than a right angle
/// (plus a small tolerance) away from `direction` are skipped. The rest are
/// scored `manhattan * ((3 * angle / π)^3 + 1)`, so widgets straight ahead
/// win over nearer ones off to the side. Ties go to the earliest candidate.
/// Returns `None` for `Enter`/`Exit` or when nothing is eligible.
///
/// Measurements are taken in `f64` so large coordinates do not disturb
/// eligibility at the edge of the cone or the ordering of close scores.
pub fn neighbor_index<W: Bounded>(widget: &W, candidates: &[W], direction: Direction) -> Option<usize> {
    let (dx, dy) = direction_vector(direction)?;
    let direction_angle = dy.atan2(dx);
    let (ox, oy) = center(widget);

    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let (cx, cy) = center(candidate);
        if (cx, cy) == (ox, oy) {
            continue;
        }

        let (vx, vy) = (cx - ox, cy - oy);
        let angle = abs_angle_diff(vy.atan2(vx), direction_angle);
        if angle > FRAC_PI_2 + ANGLE_TOLERANCE {
            continue;
        }

        let manhattan = vx.abs() + vy.abs();
        let score = manhattan * ((3.0 * angle / PI).powi(3) + 1.0);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WidgetRect;

    /// 2x2 rectangle centered on (x, y)
    fn at(x: f32, y: f32) -> WidgetRect {
        WidgetRect::new(x - 1.0, y - 1.0, 2.0, 2.0)
    }

    #[test]
    fn test_only_widgets_ahead_are_eligible() {
        let source = at(0.0, 0.0);
        let candidates = [at(10.0, 0.0), at(0.0, 10.0), at(-10.0, 0.0)];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Right), Some(0));
        assert_eq!(neighbor_index(&source, &candidates, Direction::Left), Some(2));
        assert_eq!(neighbor_index(&source, &candidates, Direction::Down), Some(1));
    }

    #[test]
    fn test_widgets_behind_are_never_chosen() {
        let source = at(0.0, 0.0);
        let candidates = [at(-10.0, 0.0), at(-3.0, 8.0)];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Right), None);
    }

    #[test]
    fn test_inline_beats_diagonal_at_equal_distance() {
        let source = at(0.0, 0.0);
        let candidates = [at(5.0, 5.0), at(10.0, 0.0)];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Right), Some(1));
    }

    #[test]
    fn test_ties_go_to_first_candidate() {
        let source = at(0.0, 0.0);
        let candidates = [at(0.0, -4.0), at(0.0, -4.0)];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Up), Some(0));
    }

    #[test]
    fn test_same_center_is_skipped() {
        let source = at(3.0, 3.0);
        let candidates = [WidgetRect::new(0.0, 0.0, 6.0, 6.0), at(3.0, 9.0)];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Down), Some(1));
        assert_eq!(neighbor_index(&source, &candidates[..1], Direction::Down), None);
    }

    #[test]
    fn test_enter_and_exit_have_no_neighbour() {
        let source = at(0.0, 0.0);
        let candidates = [at(10.0, 0.0)];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Enter), None);
        assert_eq!(neighbor_index(&source, &candidates, Direction::Exit), None);
    }

    #[test]
    fn test_home_grid() {
        let clock = WidgetRect::new(0.0, 0.0, 6.0, 3.0);
        let weather = WidgetRect::new(6.0, 0.0, 6.0, 3.0);
        let todo = WidgetRect::new(6.0, 3.0, 6.0, 9.0);
        let page = [clock, weather, todo];

        assert_eq!(neighbor_index(&clock, &page, Direction::Right), Some(1));
        assert_eq!(neighbor_index(&clock, &page, Direction::Down), Some(2));
        assert_eq!(neighbor_index(&todo, &page, Direction::Up), Some(1));
        assert_eq!(neighbor_index(&todo, &page, Direction::Left), Some(0));
        assert_eq!(neighbor_index(&weather, &page, Direction::Left), Some(0));
        assert_eq!(neighbor_index(&clock, &page, Direction::Left), None);

        // Perpendicular widgets are still admitted when nothing is ahead
        assert_eq!(neighbor_index(&weather, &page, Direction::Right), Some(2));
    }

    #[test]
    fn test_large_coordinates_keep_the_nearer_candidate() {
        // 1e7 units out the second center (x + 101.5) is half a unit nearer,
        // which rounds to a tie with the first in single precision.
        let source = WidgetRect::new(1.0e7 - 1.0, 0.0, 2.0, 1.0);
        let candidates = [
            WidgetRect::new(1.0e7 + 101.0, 0.0, 2.0, 1.0),
            WidgetRect::new(1.0e7 + 101.0, 0.0, 1.0, 1.0),
        ];

        assert_eq!(neighbor_index(&source, &candidates, Direction::Right), Some(1));
    }

    #[test]
    fn test_abs_angle_diff_wraps() {
        assert!((abs_angle_diff(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-5);
        assert!((abs_angle_diff(-FRAC_PI_2, PI) - FRAC_PI_2).abs() < 1e-5);
        assert_eq!(abs_angle_diff(1.0, 1.0), 0.0);
    }
}
