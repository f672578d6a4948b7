/*
 * Dot Module
 *
 * This module defines the Dot struct, a point mass that drifts across the
 * canvas and bounces off its edges.
 *
 * Positions live in canvas pixel space: the origin is the top-left corner
 * and y grows downwards. Velocities are in pixels per second before the
 * speed coefficient is applied.
 */

use nannou::prelude::*;
use rand::Rng;

// Magnitude of the pull towards the pointer dot, before the speed coefficient
pub const GRAVITY_STRENGTH: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Dot {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    // A dot that only moves when the user drags it
    pub fn pointer(position: Vec2) -> Self {
        Self::new(position, Vec2::ZERO)
    }

    /// Creates a dot somewhere inside a canvas of the given size.
    ///
    /// Each velocity component gets a random direction and an integer
    /// magnitude between a hundredth and a tenth of the canvas extent on
    /// that axis.
    pub fn random<R: Rng + ?Sized>(size: Vec2, dot_radius: f32, rng: &mut R) -> Self {
        let position = vec2(
            random_coordinate(size.x, dot_radius, rng),
            random_coordinate(size.y, dot_radius, rng),
        );
        let velocity = vec2(random_speed(size.x, rng), random_speed(size.y, rng));

        Self::new(position, velocity)
    }

    pub fn distance_to(&self, other: &Dot) -> f32 {
        self.position.distance(other.position)
    }

    /// Computes where this dot is after `elapsed_millis` have passed.
    ///
    /// `gravity` is an optional attraction point. Its pull is added to the
    /// displacement of this step only and never stored in the velocity.
    /// Crossing an edge of `[dot_radius, bounds - dot_radius]` mirrors the
    /// overshoot back inside and flips that velocity component.
    pub fn next(
        &self,
        bounds: Vec2,
        elapsed_millis: f32,
        dot_radius: f32,
        speed_coefficient: f32,
        gravity: Option<Vec2>,
    ) -> Dot {
        if !elapsed_millis.is_finite() || elapsed_millis <= 0.0 {
            return *self;
        }

        let seconds = elapsed_millis / 1000.0;
        let mut displacement = self.velocity * speed_coefficient * seconds;

        if let Some(target) = gravity {
            // Zero when the dot sits right on the target
            let pull = (target - self.position).normalize_or_zero();
            displacement += pull * GRAVITY_STRENGTH * speed_coefficient * seconds;
        }

        let moved = self.position + displacement;
        let (x, velocity_x) = reflect_axis(moved.x, self.velocity.x, dot_radius, bounds.x - dot_radius);
        let (y, velocity_y) = reflect_axis(moved.y, self.velocity.y, dot_radius, bounds.y - dot_radius);

        Dot::new(vec2(x, y), vec2(velocity_x, velocity_y))
    }
}

// Fold a coordinate back into [low, high], bouncing as many times as the overshoot requires.
// Returns the new coordinate and the velocity component after the bounces.
fn reflect_axis(position: f32, velocity: f32, low: f32, high: f32) -> (f32, f32) {
    // The canvas is narrower than one dot on this axis
    if high <= low {
        return ((low + high) / 2.0, velocity);
    }

    if (low..=high).contains(&position) {
        return (position, velocity);
    }

    if !position.is_finite() {
        return ((low + high) / 2.0, velocity);
    }

    let span = high - low;
    let offset = position - low;
    let bounces = (offset / span).floor();
    let folded = offset.rem_euclid(2.0 * span);

    let position = if folded <= span {
        low + folded
    } else {
        high - (folded - span)
    };

    let velocity = if bounces.rem_euclid(2.0) == 1.0 {
        -velocity
    } else {
        velocity
    };

    (position.clamp(low, high), velocity)
}

fn random_coordinate<R: Rng + ?Sized>(extent: f32, dot_radius: f32, rng: &mut R) -> f32 {
    let low = dot_radius;
    let high = extent - dot_radius;

    if high > low {
        rng.gen_range(low..=high)
    } else {
        extent / 2.0
    }
}

fn random_speed<R: Rng + ?Sized>(extent: f32, rng: &mut R) -> f32 {
    let slowest = (extent / 100.0) as i32;
    let fastest = (extent / 10.0) as i32;
    let magnitude = rng.gen_range(slowest..=fastest.max(slowest)) as f32;

    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds() -> Vec2 {
        vec2(100.0, 100.0)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_elapsed_time_is_a_no_op() {
        let dot = Dot::new(vec2(40.0, 60.0), vec2(12.0, -7.0));
        assert_eq!(dot.next(bounds(), 0.0, 5.0, 1.0, None), dot);
    }

    #[test]
    fn moves_by_velocity_scaled_with_speed_and_time() {
        let dot = Dot::new(vec2(50.0, 50.0), vec2(10.0, -20.0));
        let next = dot.next(bounds(), 500.0, 5.0, 2.0, None);

        assert_close(next.position.x, 60.0);
        assert_close(next.position.y, 30.0);
        assert_eq!(next.velocity, dot.velocity);
    }

    #[test]
    fn right_edge_mirrors_the_overshoot() {
        // Starts one pixel inside, moves five: overshoots by four
        let dot = Dot::new(vec2(94.0, 50.0), vec2(10.0, 0.0));
        let next = dot.next(bounds(), 500.0, 5.0, 1.0, None);

        assert_close(next.position.x, 91.0);
        assert_eq!(next.velocity.x, -10.0);
        assert_eq!(next.velocity.y, 0.0);
    }

    #[test]
    fn top_edge_mirrors_the_overshoot() {
        let dot = Dot::new(vec2(50.0, 7.0), vec2(0.0, -10.0));
        let next = dot.next(bounds(), 1000.0, 5.0, 1.0, None);

        assert_close(next.position.y, 13.0);
        assert_eq!(next.velocity.y, 10.0);
    }

    #[test]
    fn overshoot_longer_than_the_canvas_keeps_folding() {
        // Valid range is [5, 95]: travelling 200 from 50 hits 95, 5 and ends at 70
        let dot = Dot::new(vec2(50.0, 50.0), vec2(200.0, 0.0));
        let next = dot.next(bounds(), 1000.0, 5.0, 1.0, None);

        assert_close(next.position.x, 70.0);
        assert_eq!(next.velocity.x, 200.0);

        // One more bounce off the right edge leaves it flipped
        let dot = Dot::new(vec2(50.0, 50.0), vec2(300.0, 0.0));
        let next = dot.next(bounds(), 1000.0, 5.0, 1.0, None);

        assert_close(next.position.x, 20.0);
        assert_eq!(next.velocity.x, -300.0);
    }

    #[test]
    fn narrow_canvas_centres_the_dot() {
        let dot = Dot::new(vec2(3.0, 50.0), vec2(4.0, 0.0));
        let next = dot.next(vec2(6.0, 100.0), 100.0, 5.0, 1.0, None);

        assert_eq!(next.position.x, 3.0);
        assert_eq!(next.velocity.x, 4.0);
    }

    #[test]
    fn gravity_pulls_towards_target_without_changing_velocity() {
        let dot = Dot::new(vec2(50.0, 50.0), Vec2::ZERO);
        let next = dot.next(bounds(), 100.0, 1.0, 1.0, Some(vec2(80.0, 50.0)));

        assert_close(next.position.x, 60.0);
        assert_close(next.position.y, 50.0);
        assert_eq!(next.velocity, Vec2::ZERO);
    }

    #[test]
    fn gravity_on_the_target_itself_stays_finite() {
        let dot = Dot::new(vec2(50.0, 50.0), vec2(1.0, 1.0));
        let next = dot.next(bounds(), 100.0, 1.0, 1.0, Some(vec2(50.0, 50.0)));

        assert!(next.position.is_finite());
    }

    #[test]
    fn positions_stay_inside_the_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let radius = 4.0;
        let bounds = vec2(320.0, 180.0);

        for _ in 0..200 {
            let mut dot = Dot::random(bounds, radius, &mut rng);
            for step in 0..50 {
                let elapsed = rng.gen_range(0.0..5000.0);
                let gravity = (step % 3 == 0).then(|| vec2(10.0, 170.0));
                dot = dot.next(bounds, elapsed, radius, 0.5, gravity);

                assert!((radius..=bounds.x - radius).contains(&dot.position.x));
                assert!((radius..=bounds.y - radius).contains(&dot.position.y));
            }
        }
    }

    #[test]
    fn random_dots_respect_canvas_and_speed_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let size = vec2(1000.0, 500.0);

        for _ in 0..500 {
            let dot = Dot::random(size, 4.0, &mut rng);

            assert!((4.0..=996.0).contains(&dot.position.x));
            assert!((4.0..=496.0).contains(&dot.position.y));
            assert!((10.0..=100.0).contains(&dot.velocity.x.abs()));
            assert!((5.0..=50.0).contains(&dot.velocity.y.abs()));
            assert_eq!(dot.velocity.x.fract(), 0.0);
        }
    }

    #[test]
    fn random_dot_on_an_empty_canvas_is_still() {
        let mut rng = StdRng::seed_from_u64(1);
        let dot = Dot::random(Vec2::ZERO, 4.0, &mut rng);

        assert_eq!(dot.position, Vec2::ZERO);
        assert_eq!(dot.velocity.abs(), Vec2::ZERO);
    }
}
