//! Closed-form placement of elements
//!
//! Every element resolves its absolute position per axis as
//! `parent_extent * align - size * origin + parent_position + offset`.
//! There is no constraint solving: `align` is a fractional anchor inside the
//! parent, `origin` a fractional anchor inside the element and `offset` a
//! final pixel nudge.

use crate::math::{Vec2, Vec3};
use crate::snapshot::ElementState;

/// Resolve one axis of an element's position
pub fn resolve_axis(
    parent_extent: f32,
    size: f32,
    align: f32,
    origin: f32,
    parent_position: Option<f32>,
    offset: f32,
) -> f32 {
    parent_extent * align - size * origin + parent_position.unwrap_or(0.0) + offset
}

/// What an element is laid out against: its parent, or the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParentFrame {
    pub extent: Vec2,
    /// Absent for top-level elements
    pub position: Option<Vec2>,
}

impl ParentFrame {
    pub fn viewport(extent: Vec2) -> Self {
        Self {
            extent,
            position: None,
        }
    }

    /// Frame for the children of an element resolved at `position`
    pub fn of(position: Vec3, size: Vec3) -> Self {
        Self {
            extent: size.truncate(),
            position: Some(position.truncate()),
        }
    }
}

/// Resolve an element's absolute position. z is carried over unchanged.
pub fn resolve_position(frame: &ParentFrame, state: &ElementState, previous_z: f32) -> Vec3 {
    place(frame, state.size, state.align, state.origin, state.offset)
        .extend(previous_z)
}

/// Screen point the element rotates around and that lines attach to
pub fn pivot(position: Vec3, size: Vec3, origin: Vec2) -> Vec2 {
    position.truncate() + size.truncate() * origin
}

/// Where the element would sit if both of its anchors were `align`
///
/// Offset is ignored, matching the other anchor helpers.
pub fn location_by_align(frame: &ParentFrame, state: &ElementState, align: Vec2) -> Vec2 {
    place(frame, state.size, align, align, Vec3::ZERO)
}

/// Where the element would sit if both of its anchors were `origin`
pub fn location_by_origin(frame: &ParentFrame, state: &ElementState, origin: Vec2) -> Vec2 {
    place(frame, state.size, origin, origin, Vec3::ZERO)
}

/// Where the element would sit with explicit anchors and offset
pub fn location_by_origin_align_offset(
    frame: &ParentFrame,
    state: &ElementState,
    origin: Vec2,
    align: Vec2,
    offset: Vec3,
) -> Vec2 {
    place(frame, state.size, align, origin, offset)
}

fn place(frame: &ParentFrame, size: Vec3, align: Vec2, origin: Vec2, offset: Vec3) -> Vec2 {
    let parent_x = frame.position.map(|p| p.x);
    let parent_y = frame.position.map(|p| p.y);
    Vec2::new(
        resolve_axis(frame.extent.x, size.x, align.x, origin.x, parent_x, offset.x),
        resolve_axis(frame.extent.y, size.y, align.y, origin.y, parent_y, offset.y),
    )
}
