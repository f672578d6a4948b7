/*
 * Proximity Module
 *
 * Finds the pairs of dots close enough to be joined by a line.
 *
 * The threshold is a fraction of the canvas diagonal, so the look of the
 * field does not depend on the window size. Lines get thicker as the dots
 * get closer: 0.5 pixels at the threshold, up to 0.5 + max_thickness when
 * two dots overlap.
 *
 * Every pair is checked. Dot counts stay in the tens to low hundreds, so the
 * quadratic scan is cheaper than maintaining a grid.
 */

use crate::dot::Dot;

// Thinnest line drawn, used for pairs exactly at the threshold
pub const MIN_THICKNESS: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub first: Dot,
    pub second: Dot,
    pub thickness: f32,
}

/// Computes the lines between every pair of dots no further apart than
/// `threshold_fraction * canvas_diagonal`.
///
/// Pairs are visited in slice order (`i < j`), so the output is stable for a
/// given input. A threshold that is zero, negative or not finite produces no
/// edges.
pub fn compute_edges(
    dots: &[Dot],
    threshold_fraction: f32,
    canvas_diagonal: f32,
    max_thickness: f32,
) -> Vec<Edge> {
    let real_threshold = threshold_fraction * canvas_diagonal;
    if !real_threshold.is_finite() || real_threshold <= 0.0 {
        return Vec::new();
    }

    let mut edges = Vec::new();

    for (i, first) in dots.iter().enumerate() {
        for second in &dots[i + 1..] {
            let distance = first.distance_to(second);

            if distance <= real_threshold {
                edges.push(Edge {
                    first: *first,
                    second: *second,
                    thickness: line_thickness(distance, real_threshold, max_thickness),
                });
            }
        }
    }

    edges
}

pub fn line_thickness(distance: f32, real_threshold: f32, max_thickness: f32) -> f32 {
    MIN_THICKNESS + (real_threshold - distance) * max_thickness / real_threshold
}
