/*
 * Field Module
 *
 * This module defines the Field: every dot on one canvas together with the
 * parameters that drive them and the user's pointer.
 *
 * The field is stepped once per frame by whoever owns it. It holds no
 * random source of its own; operations that create dots take one, so a
 * seeded generator reproduces a layout exactly.
 */

use nannou::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

use crate::canvas;
use crate::dot::Dot;
use crate::pointer::PointerState;
use crate::proximity::{self, Edge};

// Canvas area, in square pixels, that holds one dot at a population factor of 1
pub const AREA_PER_DOT: f32 = 10_000.0;

#[derive(Clone, Debug)]
pub struct Field {
    pub dots: Vec<Dot>,
    pub size: Vec2,
    pub dot_radius: f32,
    pub speed: f32,
    pub pointer: PointerState,
}

// Everything the renderer needs for one frame
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub dots: Vec<Dot>,
    pub edges: Vec<Edge>,
    pub dot_radius: f32,
}

/// Number of dots a canvas of `size` holds at `population_factor`.
///
/// An empty canvas or a factor that is not a positive number holds none.
pub fn target_population(size: Vec2, population_factor: f32) -> usize {
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
        return 0;
    }
    if !population_factor.is_finite() || population_factor <= 0.0 {
        return 0;
    }

    (size.x * size.y / AREA_PER_DOT * population_factor).round() as usize
}

impl Field {
    pub fn new(dot_radius: f32, speed: f32) -> Self {
        Self {
            dots: Vec::new(),
            size: Vec2::ZERO,
            dot_radius,
            speed,
            pointer: PointerState::Idle,
        }
    }

    pub fn set_parameters(&mut self, speed: f32, dot_radius: f32) {
        self.speed = speed;
        self.dot_radius = dot_radius;
    }

    /// Brings the number of dots to the target for the current size.
    ///
    /// Surplus dots are dropped at random; missing ones are created at
    /// random positions. Running it again with the same factor changes
    /// nothing.
    pub fn population_control<R: Rng + ?Sized>(&mut self, population_factor: f32, rng: &mut R) {
        let target = target_population(self.size, population_factor);
        let current = self.dots.len();

        match target.cmp(&current) {
            Ordering::Less => {
                self.dots.shuffle(rng);
                self.dots.truncate(target);
            }
            Ordering::Greater => {
                let size = self.size;
                let dot_radius = self.dot_radius;
                self.dots
                    .extend((current..target).map(|_| Dot::random(size, dot_radius, rng)));
            }
            Ordering::Equal => return,
        }

        log::debug!("population changed from {} to {} dots", current, target);
    }

    // A new canvas size throws every dot away and starts over
    pub fn size_changed<R: Rng + ?Sized>(&mut self, size: Vec2, population_factor: f32, rng: &mut R) {
        if size == self.size {
            return;
        }

        log::debug!("canvas resized from {:?} to {:?}", self.size, size);
        self.size = size;
        self.respawn(population_factor, rng);
    }

    // Replace every dot with a freshly created one
    pub fn respawn<R: Rng + ?Sized>(&mut self, population_factor: f32, rng: &mut R) {
        let target = target_population(self.size, population_factor);
        let size = self.size;
        let dot_radius = self.dot_radius;

        self.dots = (0..target).map(|_| Dot::random(size, dot_radius, rng)).collect();
    }

    // Advance every dot; the pointer dot, if any, pulls the others towards it
    pub fn step(&mut self, elapsed_millis: f32) {
        let gravity = self.pointer.dot().map(|pointer| pointer.position);

        for dot in &mut self.dots {
            *dot = dot.next(self.size, elapsed_millis, self.dot_radius, self.speed, gravity);
        }
    }

    pub fn tick(mut self, elapsed_millis: f32) -> Self {
        self.step(elapsed_millis);
        self
    }

    // Field dots first, then the pointer dot
    pub fn all_dots(&self) -> Vec<Dot> {
        self.dots.iter().chain(self.pointer.dot()).copied().collect()
    }

    pub fn diagonal(&self) -> f32 {
        canvas::diagonal(self.size)
    }

    pub fn edges(&self, threshold_fraction: f32, max_thickness: f32) -> Vec<Edge> {
        proximity::compute_edges(&self.all_dots(), threshold_fraction, self.diagonal(), max_thickness)
    }

    pub fn scene(&self, threshold_fraction: f32, max_thickness: f32) -> Scene {
        let dots = self.all_dots();
        let edges = proximity::compute_edges(&dots, threshold_fraction, self.diagonal(), max_thickness);

        Scene {
            dots,
            edges,
            dot_radius: self.dot_radius,
        }
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.pointer.down(position);
    }

    pub fn pointer_move_to(&mut self, position: Vec2) {
        self.pointer.move_to(position);
    }

    pub fn pointer_move_by(&mut self, delta: Vec2) {
        self.pointer.move_by(delta);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.up();
    }

    pub fn pointer_cancel(&mut self) {
        self.pointer.cancel();
    }

    pub fn pointer_dot(&self) -> Option<&Dot> {
        self.pointer.dot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sized_field(size: Vec2, population_factor: f32, rng: &mut StdRng) -> Field {
        let mut field = Field::new(4.0, 0.05);
        field.size_changed(size, population_factor, rng);
        field
    }

    #[test]
    fn target_population_follows_area_and_factor() {
        assert_eq!(target_population(vec2(1000.0, 1000.0), 0.3), 30);
        assert_eq!(target_population(vec2(500.0, 500.0), 0.3), 8);
        assert_eq!(target_population(vec2(100.0, 100.0), 2.0), 2);
    }

    #[test]
    fn target_population_is_zero_for_degenerate_input() {
        assert_eq!(target_population(Vec2::ZERO, 0.3), 0);
        assert_eq!(target_population(vec2(0.0, 800.0), 0.3), 0);
        assert_eq!(target_population(vec2(800.0, 800.0), 0.0), 0);
        assert_eq!(target_population(vec2(800.0, 800.0), -1.0), 0);
        assert_eq!(target_population(vec2(f32::NAN, 800.0), 1.0), 0);
    }

    #[test]
    fn new_field_is_empty() {
        let field = Field::new(4.0, 0.05);

        assert!(field.dots.is_empty());
        assert_eq!(field.size, Vec2::ZERO);
        assert!(field.all_dots().is_empty());
    }

    #[test]
    fn size_change_regenerates_for_the_new_area() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = sized_field(vec2(1000.0, 1000.0), 0.3, &mut rng);
        assert_eq!(field.dots.len(), 30);

        field.size_changed(vec2(500.0, 500.0), 0.3, &mut rng);
        assert_eq!(field.dots.len(), 8);
        assert_eq!(field.size, vec2(500.0, 500.0));
        for dot in &field.dots {
            assert!(dot.position.x <= 496.0 && dot.position.y <= 496.0);
        }
    }

    #[test]
    fn same_size_keeps_the_dots() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = sized_field(vec2(640.0, 480.0), 0.5, &mut rng);
        let before = field.dots.clone();

        field.size_changed(vec2(640.0, 480.0), 0.5, &mut rng);
        assert_eq!(field.dots, before);
    }

    #[test]
    fn population_control_grows_and_shrinks() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = sized_field(vec2(1000.0, 1000.0), 0.3, &mut rng);
        let original = field.dots.clone();

        field.population_control(1.0, &mut rng);
        assert_eq!(field.dots.len(), 100);
        assert_eq!(&field.dots[..30], &original[..]);

        let grown = field.dots.clone();
        field.population_control(0.1, &mut rng);
        assert_eq!(field.dots.len(), 10);
        assert!(field.dots.iter().all(|dot| grown.contains(dot)));
    }

    #[test]
    fn population_control_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = sized_field(vec2(800.0, 600.0), 0.3, &mut rng);

        field.population_control(0.7, &mut rng);
        let first = field.dots.clone();
        field.population_control(0.7, &mut rng);

        assert_eq!(first.len(), target_population(vec2(800.0, 600.0), 0.7));
        assert_eq!(field.dots, first);
    }

    #[test]
    fn zero_sized_canvas_has_no_dots_and_no_edges() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = sized_field(vec2(0.0, 300.0), 1.0, &mut rng);
        field.population_control(2.0, &mut rng);
        field.pointer_down(vec2(1.0, 1.0));
        field.step(16.0);

        assert!(field.dots.is_empty());
        assert!(field.edges(0.06, 6.0).is_empty());
    }

    #[test]
    fn parameters_take_effect_on_next_step() {
        let mut field = Field::new(4.0, 1.0);
        field.size = vec2(200.0, 200.0);
        field.dots = vec![Dot::new(vec2(100.0, 100.0), vec2(10.0, 0.0))];

        field.set_parameters(2.0, 4.0);
        field.step(1000.0);

        assert_eq!(field.dots[0].position, vec2(120.0, 100.0));
    }

    #[test]
    fn pointer_attracts_but_is_not_stepped() {
        let mut field = Field::new(1.0, 1.0);
        field.size = vec2(200.0, 200.0);
        field.dots = vec![Dot::new(vec2(50.0, 100.0), Vec2::ZERO)];

        field.pointer_down(vec2(150.0, 100.0));
        field.step(100.0);

        assert!(field.dots[0].position.x > 50.0);
        assert_eq!(field.dots[0].velocity, Vec2::ZERO);
        assert_eq!(field.pointer_dot().map(|dot| dot.position), Some(vec2(150.0, 100.0)));
    }

    #[test]
    fn pointer_joins_rendering_but_not_population() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = sized_field(vec2(300.0, 300.0), 0.5, &mut rng);
        let count = field.dots.len();

        field.pointer_down(vec2(10.0, 10.0));
        field.population_control(0.5, &mut rng);

        assert_eq!(field.dots.len(), count);
        assert_eq!(field.all_dots().len(), count + 1);
        assert_eq!(field.all_dots().last(), field.pointer_dot());

        field.pointer_up();
        assert_eq!(field.all_dots().len(), count);
    }

    #[test]
    fn tick_matches_step() {
        let mut rng = StdRng::seed_from_u64(21);
        let field = sized_field(vec2(400.0, 300.0), 1.0, &mut rng);

        let mut stepped = field.clone();
        stepped.step(33.0);
        let ticked = field.tick(33.0);

        assert_eq!(ticked.dots, stepped.dots);
    }

    #[test]
    fn scene_includes_pointer_and_its_edges() {
        let mut field = Field::new(3.0, 0.05);
        field.size = vec2(1000.0, 1000.0);
        field.dots = vec![Dot::new(vec2(100.0, 100.0), Vec2::ZERO)];
        field.pointer_down(vec2(150.0, 100.0));

        let scene = field.scene(0.06, 6.0);

        assert_eq!(scene.dots.len(), 2);
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.dot_radius, 3.0);
    }
}
