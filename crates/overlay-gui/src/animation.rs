use crate::easing::EasingFn;
use crate::math::Interpolate;

/// Writes an interpolated snapshot into its target
pub type ApplyFn<T, S> = fn(&mut T, &S);

/// A single snapshot-to-snapshot interpolation over a duration
///
/// The animation never holds its target. The apply function is fixed at
/// construction and the target is lent on every [`advance`](Self::advance),
/// which keeps ownership with the element being animated.
pub struct Animation<S, T> {
    start: S,
    end: S,
    duration_ticks: f32,
    easing: EasingFn,
    apply: ApplyFn<T, S>,
    elapsed_ticks: f32,
}

impl<S: Interpolate + Clone, T> Animation<S, T> {
    pub fn new(start: S, end: S, duration_ticks: f32, easing: EasingFn, apply: ApplyFn<T, S>) -> Self {
        Self {
            start,
            end,
            duration_ticks,
            easing,
            apply,
            elapsed_ticks: 0.0,
        }
    }

    /// Step the animation by `delta_ticks` and apply the interpolated snapshot
    ///
    /// # Returns
    /// `true` once progress has reached 1.0. Further calls keep applying the
    /// end snapshot and keep returning `true` until [`reset`](Self::reset).
    pub fn advance(&mut self, delta_ticks: f32, target: &mut T) -> bool {
        if self.duration_ticks <= 0.0 {
            (self.apply)(target, &self.end);
            return true;
        }

        // elapsed never moves backwards between resets
        self.elapsed_ticks += delta_ticks.max(0.0);
        let progress = self.progress();

        if progress >= 1.0 {
            (self.apply)(target, &self.end);
            return true;
        }

        let eased = (self.easing)(progress);
        let snapshot = self.start.interpolate(&self.end, eased);
        (self.apply)(target, &snapshot);
        false
    }

    /// Rewind to the start so the animation can play again
    pub fn reset(&mut self) -> &mut Self {
        self.elapsed_ticks = 0.0;
        self
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration_ticks <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ticks / self.duration_ticks).clamp(0.0, 1.0)
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn end(&self) -> &S {
        &self.end
    }

    pub fn duration_ticks(&self) -> f32 {
        self.duration_ticks
    }

    pub fn elapsed_ticks(&self) -> f32 {
        self.elapsed_ticks
    }
}
