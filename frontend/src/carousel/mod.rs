//! Testimonial carousel state machine.
//!
//! The state is a plain value driven through [`CarouselAction`]s, so the
//! same code backs the `use_reducer` hook in the browser and the unit tests.
//! Navigation from the timer and from the user goes through the same
//! reducer; the most recent action wins.

mod auto_advance;

pub use auto_advance::{AutoAdvance, GlooIntervals};
#[cfg(test)]
pub use auto_advance::ManualClock;

use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

/// Most recent navigation direction. Only selects slide offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    JumpTo(usize),
    /// Fired by the auto-advance timer; same as `Next`.
    Tick,
}

/// One slide change: which slide leaves, which enters, and which way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// Increments with every change; keys the animated elements.
    pub seq: u64,
    pub incoming: usize,
    pub outgoing: usize,
    pub direction: Direction,
}

#[derive(Debug, PartialEq)]
pub struct CarouselState<T> {
    items: Rc<[T]>,
    current_index: usize,
    direction: Direction,
    last_change: Option<SlideChange>,
}

// Manual impl: cloning shares `items`, so `T` need not be `Clone`.
impl<T> Clone for CarouselState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            current_index: self.current_index,
            direction: self.direction,
            last_change: self.last_change,
        }
    }
}

impl<T> CarouselState<T> {
    pub fn new(items: Rc<[T]>) -> Self {
        Self {
            items,
            current_index: 0,
            direction: Direction::Still,
            last_change: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index)
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The transition the view should be playing, if any slide changed yet.
    pub fn last_change(&self) -> Option<SlideChange> {
        self.last_change
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        let target = (self.current_index + 1) % self.len();
        self.move_to(target, Direction::Forward);
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        let len = self.len();
        let target = (self.current_index + len - 1) % len;
        self.move_to(target, Direction::Backward);
    }

    /// Show slide `target`. Callers only offer indices of existing items;
    /// anything else is ignored.
    pub fn jump_to(&mut self, target: usize) {
        if target >= self.len() {
            debug_assert!(self.is_empty(), "jump_to({target}) past {} items", self.len());
            if !self.is_empty() {
                warn!("jump_to({}) past {} items", target, self.len());
            }
            return;
        }
        let direction = if target > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.move_to(target, direction);
    }

    pub fn tick(&mut self) {
        self.next();
    }

    pub fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Next => self.next(),
            CarouselAction::Previous => self.previous(),
            CarouselAction::JumpTo(index) => self.jump_to(index),
            CarouselAction::Tick => self.tick(),
        }
    }

    fn move_to(&mut self, target: usize, direction: Direction) {
        self.direction = direction;
        if target == self.current_index {
            // Same key: nothing leaves, nothing enters.
            return;
        }
        let seq = self.last_change.map(|c| c.seq + 1).unwrap_or(0);
        self.last_change = Some(SlideChange {
            seq,
            incoming: target,
            outgoing: self.current_index,
            direction,
        });
        self.current_index = target;
    }
}

impl<T: 'static> Reducible for CarouselState<T> {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        debug!(
            "carousel {:?} -> slide {} ({:?})",
            action, next.current_index, next.direction
        );
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel(len: usize) -> CarouselState<usize> {
        CarouselState::new((0..len).collect::<Vec<_>>().into())
    }

    #[test]
    fn starts_at_first_slide_without_direction() {
        let c = carousel(6);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.direction(), Direction::Still);
        assert_eq!(c.direction().sign(), 0);
        assert_eq!(c.last_change(), None);
    }

    #[test]
    fn six_testimonials_walkthrough() {
        let mut c = carousel(6);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current_index(), 3);

        c.previous();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.direction(), Direction::Backward);

        c.jump_to(0);
        assert_eq!(c.current_index(), 0);
        assert!(c.direction().sign() < 0);
    }

    #[test]
    fn wraps_both_ways() {
        let mut c = carousel(3);
        c.previous();
        assert_eq!(c.current_index(), 2);
        c.next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn jump_to_current_is_backward_but_not_a_slide_change() {
        let mut c = carousel(4);
        c.next();
        let before = c.last_change();
        c.jump_to(1);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(c.last_change(), before);
    }

    #[test]
    fn every_change_gets_a_new_transition() {
        let mut c = carousel(6);
        c.next();
        c.next();
        c.previous();
        let change = c.last_change().unwrap();
        assert_eq!(change.seq, 2);
        assert_eq!(change.outgoing, 2);
        assert_eq!(change.incoming, 1);
        assert_eq!(change.direction, Direction::Backward);
    }

    #[test]
    fn rapid_clicks_are_not_debounced() {
        // Ten clicks inside one 500ms transition: ten transitions.
        let mut c = carousel(6);
        for _ in 0..10 {
            c.apply(CarouselAction::Next);
        }
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.last_change().unwrap().seq, 9);
    }

    #[test]
    fn single_slide_navigation_keeps_the_slide() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.direction(), Direction::Forward);
        assert_eq!(c.last_change(), None);
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut c = carousel(0);
        c.next();
        c.previous();
        c.tick();
        c.jump_to(0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn reducer_matches_direct_calls() {
        let state = Rc::new(carousel(5));
        let state = state.reduce(CarouselAction::Tick);
        let state = state.reduce(CarouselAction::JumpTo(4));
        let state = state.reduce(CarouselAction::Previous);
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.current(), Some(&3));
    }

    proptest! {
        #[test]
        fn next_is_addition_mod_len(len in 1usize..20, start in 0usize..20, n in 0usize..100) {
            let start = start % len;
            let mut c = carousel(len);
            c.jump_to(start);
            for _ in 0..n {
                c.next();
            }
            prop_assert_eq!(c.current_index(), (start + n) % len);
        }

        #[test]
        fn previous_is_subtraction_mod_len(
            len in 1usize..20,
            start in 0usize..20,
            n in 0usize..100,
        ) {
            let start = start % len;
            let mut c = carousel(len);
            c.jump_to(start);
            for _ in 0..n {
                c.previous();
            }
            let expected = ((start as i64 - n as i64).rem_euclid(len as i64)) as usize;
            prop_assert_eq!(c.current_index(), expected);
        }

        #[test]
        fn jump_lands_and_sets_direction(len in 1usize..20, from in 0usize..20, to in 0usize..20) {
            let (from, to) = (from % len, to % len);
            let mut c = carousel(len);
            c.jump_to(from);
            c.jump_to(to);
            prop_assert_eq!(c.current_index(), to);
            prop_assert_eq!(c.direction().sign() > 0, to > from);
            prop_assert!(c.direction().sign() != 0);
        }
    }
}
