use crate::canvas::Canvas;
use crate::math::Vec2;
use crate::node::{NodeId, RenderCx};
use crate::primitives::Rect;
use crate::snapshot::ElementState;

/// Where one end of a line sits
#[derive(Debug, Clone, PartialEq)]
pub enum LineEnd {
    /// Fixed screen point
    Point(Vec2),
    /// Pivot of another element, followed as it moves
    Element(NodeId),
}

impl From<Vec2> for LineEnd {
    fn from(point: Vec2) -> Self {
        LineEnd::Point(point)
    }
}

impl From<NodeId> for LineEnd {
    fn from(id: NodeId) -> Self {
        LineEnd::Element(id)
    }
}

/// Marching dots between two points or two elements
///
/// The dots advance by `speed` of one segment per frame and wrap around.
/// An end attached to an element that has not been rendered yet leaves the
/// line undrawn for that frame.
#[derive(Debug, Clone)]
pub struct DashedLine {
    pub start: LineEnd,
    pub end: LineEnd,
    pub speed: f32,
    pub point_count: usize,
    pub dot_size: f32,
    progress: f32,
    last_progress: f32,
}

impl DashedLine {
    pub fn new(start: impl Into<LineEnd>, end: impl Into<LineEnd>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            speed: 0.01,
            point_count: 10,
            dot_size: 2.0,
            progress: 0.0,
            last_progress: 0.0,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Dot phase blended between the last two frames; `frame_fraction` in [0, 1]
    pub fn interpolated_progress(&self, frame_fraction: f32) -> f32 {
        if self.progress < self.last_progress {
            return self.progress;
        }
        let t = frame_fraction.clamp(0.0, 1.0);
        self.last_progress + (self.progress - self.last_progress) * t
    }

    /// Top-left corner of every dot for a line from `start` to `end`
    pub fn dot_positions(&self, start: Vec2, end: Vec2, phase: f32) -> Vec<Vec2> {
        if self.point_count == 0 {
            return Vec::new();
        }
        let step = (end - start) / self.point_count as f32;
        (0..self.point_count)
            .map(|index| (start + step * (index as f32 + phase)).round())
            .collect()
    }

    pub(crate) fn draw(&mut self, state: &ElementState, canvas: &mut dyn Canvas, cx: &RenderCx<'_>) {
        let resolve = |end: &LineEnd| match end {
            LineEnd::Point(point) => Some(*point),
            LineEnd::Element(id) => cx.anchor(id),
        };
        if let (Some(start), Some(end)) = (resolve(&self.start), resolve(&self.end)) {
            let phase = self.interpolated_progress(cx.delta);
            for dot in self.dot_positions(start, end, phase) {
                let rect = Rect::from_min_size(dot.to_array(), [self.dot_size, self.dot_size]);
                canvas.fill_rect(rect, state.color);
            }
        }
        self.advance();
    }

    fn advance(&mut self) {
        self.last_progress = self.progress;
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.last_progress = 0.0;
        }
    }
}
