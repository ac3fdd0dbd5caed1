use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::animation::Animation;
use crate::easing::{self, EasingFn};
use crate::snapshot::ElementState;

/// Default conversion from animation seconds to host ticks
pub const DEFAULT_TICKS_PER_SECOND: f32 = 20.0;

/// A step of a chain: element snapshots applied to the element's live state
pub type ChainStep = Animation<ElementState, ElementState>;

/// Cloneable cancellation handle for an [`AnimationChain`]
///
/// Handlers can keep one of these to stop a running chain without holding a
/// reference to the element that owns it.
#[derive(Clone, Debug, Default)]
pub struct ChainHandle {
    cancelled: Rc<Cell<bool>>,
}

impl ChainHandle {
    /// Cancel the chain. The next tick reports it finished.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// An ordered queue of animation steps played one after another on one element
///
/// Only the head step advances. A finished step is popped and, while the chain
/// is looped or has repeats left, rewound and appended at the back.
///
/// Repeats count re-queued steps, not whole passes: with `repeat(k)` the
/// first `k` finished steps are appended again, so a two-step chain with
/// `repeat(1)` plays A, B, A.
pub struct AnimationChain {
    steps: VecDeque<ChainStep>,
    looped: bool,
    repeat_count: u32,
    current_repeat: u32,
    handle: ChainHandle,
}

impl AnimationChain {
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
            looped: false,
            repeat_count: 0,
            current_repeat: 0,
            handle: ChainHandle::default(),
        }
    }

    pub fn push_step(&mut self, step: ChainStep) {
        self.steps.push_back(step);
    }

    /// End snapshot of the last queued step, the start of the next appended one
    pub fn last_end(&self) -> Option<ElementState> {
        self.steps.back().map(|step| *step.end())
    }

    /// Loop forever. Takes precedence over [`set_repeat`](Self::set_repeat).
    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
    }

    /// Re-queue up to `count` finished steps
    pub fn set_repeat(&mut self, count: u32) {
        self.repeat_count = count;
    }

    pub fn cancel(&self) {
        self.handle.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    pub fn handle(&self) -> ChainHandle {
        self.handle.clone()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps re-queued so far under a bounded repeat
    pub fn current_repeat(&self) -> u32 {
        self.current_repeat
    }

    /// Advance the head step by `delta_ticks`, writing into `target`
    ///
    /// # Returns
    /// `true` when the chain is finished: its queue drained or it was cancelled.
    /// A cancelled chain returns `true` without touching `target`.
    pub fn tick(&mut self, delta_ticks: f32, target: &mut ElementState) -> bool {
        if self.is_cancelled() {
            return true;
        }
        let Some(head) = self.steps.front_mut() else {
            return true;
        };
        if !head.advance(delta_ticks, target) {
            return false;
        }

        let Some(mut finished) = self.steps.pop_front() else {
            return true;
        };
        let requeue = self.looped || self.current_repeat < self.repeat_count;
        if requeue && !self.is_cancelled() {
            if self.repeat_count > 0 {
                self.current_repeat = self.current_repeat.saturating_add(1);
            }
            finished.reset();
            self.steps.push_back(finished);
        }
        self.steps.is_empty() || self.is_cancelled()
    }
}

impl Default for AnimationChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent builder for a chain that was just attached to a node
///
/// Holds the node's live state next to the chain so that every appended step
/// can apply its mutation immediately and capture the result as its target.
pub struct ChainBuilder<'a> {
    state: &'a mut ElementState,
    chain: &'a mut AnimationChain,
    ticks_per_second: f32,
}

impl<'a> ChainBuilder<'a> {
    pub fn new(state: &'a mut ElementState, chain: &'a mut AnimationChain, ticks_per_second: f32) -> Self {
        Self {
            state,
            chain,
            ticks_per_second,
        }
    }

    /// Append a step: apply `mutate` to the live state now, capture the result
    /// as the target and animate from the previous step's end towards it
    ///
    /// The live state keeps the mutated values until the step starts playing,
    /// so reading the element right after building shows the final state.
    pub fn then(self, seconds: f32, easing: EasingFn, mutate: impl FnOnce(&mut ElementState)) -> Self {
        let start = self.chain.last_end().unwrap_or_else(|| self.state.capture());
        mutate(&mut *self.state);
        let end = self.state.capture();
        self.push(start, end, seconds, easing)
    }

    /// Append a step that holds the previous end state for `seconds`
    pub fn then_wait(self, seconds: f32) -> Self {
        let held = self.chain.last_end().unwrap_or_else(|| self.state.capture());
        self.push(held, held, seconds, easing::linear)
    }

    /// Append an instantaneous no-op step, a sequencing point with no duration
    pub fn then_pause(self) -> Self {
        self.then_wait(0.0)
    }

    /// Loop the chain forever
    pub fn looped(self) -> Self {
        self.chain.set_looped(true);
        self
    }

    /// Re-queue the next `count` finished steps
    pub fn repeat(self, count: u32) -> Self {
        self.chain.set_repeat(count);
        self
    }

    /// Cancellation handle for the chain being built
    pub fn handle(&self) -> ChainHandle {
        self.chain.handle()
    }

    fn push(self, start: ElementState, end: ElementState, seconds: f32, easing: EasingFn) -> Self {
        let duration_ticks = seconds * self.ticks_per_second;
        self.chain
            .push_step(Animation::new(start, end, duration_ticks, easing, ElementState::apply));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::linear;
    use crate::math::Vec3;

    fn build(state: &mut ElementState, f: impl FnOnce(ChainBuilder<'_>) -> ChainBuilder<'_>) -> AnimationChain {
        let mut chain = AnimationChain::new();
        f(ChainBuilder::new(state, &mut chain, 1.0));
        chain
    }

    #[test]
    fn test_then_applies_mutation_immediately() {
        let mut state = ElementState::default();
        let chain = build(&mut state, |b| b.then(2.0, linear, |s| s.offset.x = 10.0));
        assert_eq!(state.offset.x, 10.0);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.last_end().map(|s| s.offset.x), Some(10.0));
    }

    #[test]
    fn test_steps_chain_from_previous_end() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| {
            b.then(2.0, linear, |s| s.offset.x = 10.0)
                .then(2.0, linear, |s| s.offset.x = 30.0)
        });

        let mut live = ElementState::default();
        assert!(!chain.tick(1.0, &mut live));
        assert_eq!(live.offset.x, 5.0);
        assert!(!chain.tick(1.0, &mut live));
        assert_eq!(live.offset.x, 10.0);
        assert!(!chain.tick(1.0, &mut live));
        assert_eq!(live.offset.x, 20.0);
        assert!(chain.tick(1.0, &mut live));
        assert_eq!(live.offset.x, 30.0);
    }

    #[test]
    fn test_finishes_exactly_at_duration() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| b.then(3.0, linear, |s| s.size = Vec3::ONE));
        let mut live = ElementState::default();
        assert!(!chain.tick(1.0, &mut live));
        assert!(!chain.tick(1.0, &mut live));
        assert!(chain.tick(1.0, &mut live));
        assert!(chain.is_empty());
    }

    #[test]
    fn test_looped_chain_never_finishes() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| {
            b.then(1.0, linear, |s| s.offset.y = 4.0).looped().repeat(2)
        });
        let mut live = ElementState::default();
        for _ in 0..50 {
            assert!(!chain.tick(1.0, &mut live));
        }
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_repeat_finishes_on_last_cycle() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| b.then(1.0, linear, |s| s.offset.y = 4.0).repeat(2));
        let mut live = ElementState::default();
        assert!(!chain.tick(1.0, &mut live));
        assert!(!chain.tick(1.0, &mut live));
        assert!(chain.tick(1.0, &mut live));
    }

    #[test]
    fn test_repeat_counts_requeued_steps() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| {
            b.then(1.0, linear, |s| s.offset.x = 1.0)
                .then(1.0, linear, |s| s.offset.x = 0.0)
                .repeat(1)
        });
        let mut live = ElementState::default();
        let finished: Vec<bool> = (0..3).map(|_| chain.tick(1.0, &mut live)).collect();
        assert_eq!(finished, vec![false, false, true]);
        assert_eq!(chain.current_repeat(), 1);
        // A, B, A: the last step played moves offset towards 1
        assert_eq!(live.offset.x, 1.0);
    }

    #[test]
    fn test_cancel_finishes_on_next_tick() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| b.then(10.0, linear, |s| s.offset.x = 10.0).looped());
        let handle = chain.handle();
        let mut live = ElementState::default();
        assert!(!chain.tick(1.0, &mut live));
        let before = live;

        handle.cancel();
        assert!(chain.tick(1.0, &mut live));
        assert_eq!(live, before);
    }

    #[test]
    fn test_wait_and_pause_hold_state() {
        let mut state = ElementState::default();
        let mut chain = build(&mut state, |b| {
            b.then(1.0, linear, |s| s.offset.x = 8.0).then_pause().then_wait(2.0)
        });
        assert_eq!(chain.len(), 3);
        let mut live = ElementState::default();
        assert!(!chain.tick(1.0, &mut live));
        assert!(!chain.tick(0.0, &mut live));
        assert!(!chain.tick(1.0, &mut live));
        assert_eq!(live.offset.x, 8.0);
        assert!(chain.tick(1.0, &mut live));
    }

    #[test]
    fn test_empty_chain_is_finished() {
        let mut chain = AnimationChain::new();
        assert!(chain.tick(1.0, &mut ElementState::default()));
    }
}
