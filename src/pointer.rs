/*
 * Pointer Module
 *
 * Tracks the user's drag on the canvas. While a drag is active the pointer
 * is represented by a zero-velocity dot that attracts every other dot and
 * takes part in line drawing. It is never stepped, reflected or counted by
 * population control.
 */

use nannou::prelude::*;

use crate::dot::Dot;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging(Dot),
}

impl PointerState {
    // Start a drag; a second press while dragging simply jumps to the new spot
    pub fn down(&mut self, position: Vec2) {
        *self = PointerState::Dragging(Dot::pointer(position));
    }

    pub fn move_to(&mut self, position: Vec2) {
        if let PointerState::Dragging(dot) = self {
            *dot = Dot::pointer(position);
        }
    }

    // Shift the pointer by a drag delta, as gesture detectors report it
    pub fn move_by(&mut self, delta: Vec2) {
        if let PointerState::Dragging(dot) = self {
            *dot = Dot::pointer(dot.position + delta);
        }
    }

    pub fn up(&mut self) {
        *self = PointerState::Idle;
    }

    pub fn cancel(&mut self) {
        *self = PointerState::Idle;
    }

    pub fn dot(&self) -> Option<&Dot> {
        match self {
            PointerState::Idle => None,
            PointerState::Dragging(dot) => Some(dot),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, PointerState::Dragging(_))
    }
}
