//! The per-switch debounce state machines.
//!
//! Each switch carries a [`SwitchState`](SwitchState).  On every poll
//! the registry samples the pin, works out whether the switch is
//! activated, reads the clock once, and steps the machine matching the
//! switch's kind.  The machines themselves are pure: they never touch
//! hardware, which makes them easy to drive by hand.

use crate::hal::{Instant, Millis};

/// What a toggle does when its debounce window runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleCommit {
    /// Flip the status once the window has elapsed, whatever the pin
    /// reads by then.  A bounce that settles back still produces a
    /// flip, which the next window then undoes.
    Latched,

    /// Re-check the pin when the window elapses.  If it has returned to
    /// the settled status the transition is dropped and nothing is
    /// reported.
    Relatch,
}

/// Where a button's release window is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonRelease {
    /// From the poll that reported the press.  A button held for longer
    /// than the window is released by the first inactive reading.
    SincePress,

    /// From the last poll that saw the button held.  The button must
    /// read released for a whole window, however long it was held.
    SinceActive,
}

/// The outcome of stepping a switch machine once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing happened.
    Steady,
    /// A toggle saw a new level and started its debounce window.
    Armed,
    /// A button press was detected.
    Pressed,
    /// A button's release window elapsed; it can be pressed again.
    Released,
    /// A toggle committed to a new status.
    Flipped(bool),
    /// A toggle's pending change was dropped because the pin settled
    /// back before the window elapsed.
    Rejected,
}

impl Transition {
    /// Whether this is a fresh debounced event for the caller.
    #[inline]
    pub const fn changed(self) -> bool {
        matches!(self, Transition::Pressed | Transition::Flipped(_))
    }
}

/// The mutable debounce state of one switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchState {
    status: bool,
    pending: bool,
    deadline: Instant,
}

impl Default for SwitchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitchState {
    /// A switch at rest: off, nothing pending.
    pub const fn new() -> Self {
        SwitchState {
            status: false,
            pending: false,
            deadline: Instant::from_ticks(0),
        }
    }

    /// The settled on/off status of a toggle.
    #[inline]
    pub const fn status(&self) -> bool {
        self.status
    }

    /// Whether a transition is being debounced.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// When the pending transition started, or for a button released
    /// under [`ButtonRelease::SinceActive`](ButtonRelease::SinceActive),
    /// when it was last seen held.
    #[inline]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }

    // A clock that appears to run backwards counts as no time at all.
    #[inline]
    fn elapsed(&self, now: Instant) -> Millis {
        now.checked_duration_since(self.deadline)
            .unwrap_or(Millis::from_ticks(0))
    }

    /// Step the toggle machine.
    ///
    /// `active` is the polarity-corrected pin reading.  A differing
    /// reading arms the window; once `window` has elapsed the pending
    /// change is committed according to `commit`.
    pub fn step_toggle(
        &mut self,
        active: bool,
        now: Instant,
        window: Millis,
        commit: ToggleCommit,
    ) -> Transition {
        if !self.pending {
            if active != self.status {
                self.pending = true;
                self.deadline = now;
                return Transition::Armed;
            }
            return Transition::Steady;
        }

        if self.elapsed(now) < window {
            return Transition::Steady;
        }

        self.pending = false;

        if commit == ToggleCommit::Relatch && active == self.status {
            return Transition::Rejected;
        }

        self.status = !self.status;
        Transition::Flipped(self.status)
    }

    /// Step the button machine.
    ///
    /// A press is reported as soon as it is seen.  The switch then
    /// stays pending while it reads active, and returns to idle once it
    /// reads inactive with more than `window` elapsed, counted as
    /// `release` says.
    pub fn step_momentary(
        &mut self,
        active: bool,
        now: Instant,
        window: Millis,
        release: ButtonRelease,
    ) -> Transition {
        if !self.pending {
            if active {
                self.pending = true;
                self.deadline = now;
                return Transition::Pressed;
            }
            return Transition::Steady;
        }

        if active {
            if release == ButtonRelease::SinceActive {
                self.deadline = now;
            }
            return Transition::Steady;
        }

        if self.elapsed(now) > window {
            self.pending = false;
            return Transition::Released;
        }

        Transition::Steady
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WINDOW: Millis = Millis::millis(100);

    fn at(ms: u32) -> Instant {
        Instant::from_ticks(ms)
    }

    #[test]
    fn toggle_at_rest_is_steady() {
        let mut state = SwitchState::new();

        for t in 0..10 {
            let step = state.step_toggle(false, at(t * 50), WINDOW, ToggleCommit::Relatch);
            assert_eq!(Transition::Steady, step);
        }

        assert_eq!(false, state.status());
        assert_eq!(false, state.is_pending());
    }

    #[test]
    fn toggle_commits_after_window() {
        let mut state = SwitchState::new();

        assert_eq!(
            Transition::Armed,
            state.step_toggle(true, at(10), WINDOW, ToggleCommit::Relatch)
        );
        assert_eq!(at(10), state.deadline());
        assert_eq!(
            Transition::Steady,
            state.step_toggle(true, at(109), WINDOW, ToggleCommit::Relatch)
        );
        assert_eq!(
            Transition::Flipped(true),
            state.step_toggle(true, at(110), WINDOW, ToggleCommit::Relatch)
        );
        assert_eq!(true, state.status());
        assert_eq!(false, state.is_pending());

        assert_eq!(
            Transition::Steady,
            state.step_toggle(true, at(500), WINDOW, ToggleCommit::Relatch)
        );
    }

    #[test]
    fn relatch_drops_a_reverted_bounce() {
        let mut state = SwitchState::new();

        state.step_toggle(true, at(0), WINDOW, ToggleCommit::Relatch);
        state.step_toggle(false, at(30), WINDOW, ToggleCommit::Relatch);

        assert_eq!(
            Transition::Rejected,
            state.step_toggle(false, at(100), WINDOW, ToggleCommit::Relatch)
        );
        assert_eq!(false, state.status());
        assert_eq!(false, state.is_pending());
    }

    #[test]
    fn latched_flips_even_after_revert() {
        let mut state = SwitchState::new();

        state.step_toggle(true, at(0), WINDOW, ToggleCommit::Latched);
        state.step_toggle(false, at(30), WINDOW, ToggleCommit::Latched);

        assert_eq!(
            Transition::Flipped(true),
            state.step_toggle(false, at(100), WINDOW, ToggleCommit::Latched)
        );

        // The pin still reads off, so the next window flips it back.
        assert_eq!(
            Transition::Armed,
            state.step_toggle(false, at(110), WINDOW, ToggleCommit::Latched)
        );
        assert_eq!(
            Transition::Flipped(false),
            state.step_toggle(false, at(210), WINDOW, ToggleCommit::Latched)
        );
    }

    #[test]
    fn toggle_survives_counter_wrap() {
        let mut state = SwitchState::new();
        let start = u32::MAX - 20;

        state.step_toggle(true, at(start), WINDOW, ToggleCommit::Relatch);
        assert_eq!(
            Transition::Steady,
            state.step_toggle(true, at(start.wrapping_add(50)), WINDOW, ToggleCommit::Relatch)
        );
        assert_eq!(
            Transition::Flipped(true),
            state.step_toggle(true, at(start.wrapping_add(100)), WINDOW, ToggleCommit::Relatch)
        );
    }

    fn button(state: &mut SwitchState, active: bool, ms: u32) -> Transition {
        state.step_momentary(active, at(ms), WINDOW, ButtonRelease::SinceActive)
    }

    fn classic_button(state: &mut SwitchState, active: bool, ms: u32) -> Transition {
        state.step_momentary(active, at(ms), WINDOW, ButtonRelease::SincePress)
    }

    #[test]
    fn button_reports_press_once() {
        let mut state = SwitchState::new();

        assert_eq!(Transition::Pressed, button(&mut state, true, 0));
        for t in 1..50 {
            assert_eq!(Transition::Steady, button(&mut state, true, t * 10));
        }
        assert_eq!(true, state.is_pending());
    }

    #[test]
    fn button_release_needs_a_full_window() {
        let mut state = SwitchState::new();

        button(&mut state, true, 0);
        button(&mut state, true, 500);
        assert_eq!(at(500), state.deadline());

        assert_eq!(Transition::Steady, button(&mut state, false, 510));
        assert_eq!(Transition::Steady, button(&mut state, false, 600));
        assert_eq!(Transition::Released, button(&mut state, false, 601));
        assert_eq!(false, state.is_pending());

        assert_eq!(Transition::Pressed, button(&mut state, true, 700));
    }

    #[test]
    fn button_chatter_on_release_is_ignored() {
        let mut state = SwitchState::new();

        button(&mut state, true, 0);
        assert_eq!(Transition::Steady, button(&mut state, false, 20));
        assert_eq!(Transition::Steady, button(&mut state, true, 40));
        assert_eq!(Transition::Steady, button(&mut state, false, 60));
        assert_eq!(Transition::Steady, button(&mut state, true, 130));
        assert_eq!(true, state.is_pending());
    }

    #[test]
    fn release_since_press_keeps_press_time() {
        let mut state = SwitchState::new();

        assert_eq!(Transition::Pressed, classic_button(&mut state, true, 0));
        for t in 1..=50 {
            assert_eq!(Transition::Steady, classic_button(&mut state, true, t * 10));
        }
        assert_eq!(at(0), state.deadline());
        assert_eq!(true, state.is_pending());

        assert_eq!(Transition::Released, classic_button(&mut state, false, 510));
        assert_eq!(false, state.is_pending());
        assert_eq!(Transition::Pressed, classic_button(&mut state, true, 530));
    }

    #[test]
    fn release_since_press_waits_out_the_window() {
        let mut state = SwitchState::new();

        classic_button(&mut state, true, 0);
        assert_eq!(Transition::Steady, classic_button(&mut state, false, 20));
        assert_eq!(Transition::Steady, classic_button(&mut state, true, 40));
        assert_eq!(Transition::Steady, classic_button(&mut state, false, 100));
        assert_eq!(Transition::Released, classic_button(&mut state, false, 101));
    }

    #[test]
    fn only_fresh_events_count_as_changes() {
        assert!(Transition::Pressed.changed());
        assert!(Transition::Flipped(false).changed());
        assert!(!Transition::Armed.changed());
        assert!(!Transition::Released.changed());
        assert!(!Transition::Rejected.changed());
        assert!(!Transition::Steady.changed());
    }
}
