//! Debounce a bank of physical switches.
//!
//! Panels of push buttons and toggle switches are wired straight to
//! digital input pins, and every one of those contacts bounces when it
//! moves.  This crate turns the raw pin readings into clean events: a
//! single "pressed" signal per button press, and a settled on/off
//! status for each toggle.
//!
//! It is built for a single controller polling its switches from a
//! main loop, with no operating system and no allocation.
//!
//! # Usage
//!
//! You need to bring just a few things:
//!
//! - Access to your input pins.  Either wrap a set of [`embedded-hal`][0]
//!   `InputPin`s in an [`InputPinBank`](hal::InputPinBank), or implement
//!   [`SwitchPins`](hal::SwitchPins) for your board.
//! - A millisecond [`Clock`](hal::Clock).  Any `FnMut() -> Instant`
//!   closure will do.
//! - A switch table: one [`SwitchDescriptor`](SwitchDescriptor) per
//!   switch, saying what kind of switch it is and how it is wired.
//! - An implementation of the [`Debounce`](Debounce) trait, maybe just
//!   one from the [`default`](default) module.
//!
//! ```toml
//! [dependencies]
//! steadfast = "0.1"
//! ```
//!
//! ## Set up the registry.
//!
//! ```
//! # struct PinType;
//! # impl embedded_hal::digital::v2::InputPin for PinType {
//! #     type Error = core::convert::Infallible;
//! #     fn is_high(&self) -> Result<bool, Self::Error> {
//! #         Ok(true)
//! #     }
//! #     fn is_low(&self) -> Result<bool, Self::Error> {
//! #         Ok(false)
//! #     }
//! # }
//! # fn millis() -> u32 { 0 }
//! use steadfast::hal::{InputPinBank, Instant};
//! use steadfast::{default::Standard, Polarity, Registry, SwitchDescriptor};
//!
//! let pins = InputPinBank::new([PinType, PinType]);
//! let clock = || Instant::from_ticks(millis());
//!
//! let mut switches: Registry<_, _, Standard, 2> = Registry::setup(pins, clock, [
//!     SwitchDescriptor::toggle(0, Polarity::ActiveLow),
//!     SwitchDescriptor::momentary(1, Polarity::ActiveLow),
//! ]).unwrap();
//! # let _ = switches.poll(0);
//! ```
//!
//! ## Poll the switches.
//!
//! Poll every switch at least once per debounce window.  A `true`
//! result is a fresh event.
//!
//! ```
//! # struct PinType;
//! # impl embedded_hal::digital::v2::InputPin for PinType {
//! #     type Error = core::convert::Infallible;
//! #     fn is_high(&self) -> Result<bool, Self::Error> {
//! #         Ok(true)
//! #     }
//! #     fn is_low(&self) -> Result<bool, Self::Error> {
//! #         Ok(false)
//! #     }
//! # }
//! # use steadfast::hal::{InputPinBank, Instant};
//! # use steadfast::{default::Standard, Polarity, Registry, SwitchDescriptor};
//! # let pins = InputPinBank::new([PinType, PinType]);
//! # let mut switches: Registry<_, _, Standard, 2> = Registry::setup(pins, || Instant::from_ticks(0), [
//! #     SwitchDescriptor::toggle(0, Polarity::ActiveLow),
//! #     SwitchDescriptor::momentary(1, Polarity::ActiveLow),
//! # ]).unwrap();
//! if switches.poll(0).unwrap() {
//!     let _powered = switches.is_on(0).unwrap();
//! }
//! if switches.poll(1).unwrap() {
//!     // the button was pressed
//! }
//! ```
//!
//! [0]: https://github.com/rust-embedded/embedded-hal

#![no_std]
#![deny(missing_docs)]

pub mod debounce;
pub mod hal;
pub mod layout;
pub mod registry;
pub mod switch;

pub use debounce::{ButtonRelease, SwitchState, ToggleCommit, Transition};
pub use registry::Registry;
pub use switch::{Polarity, SwitchDescriptor, SwitchKind};

use hal::Millis;

/// Index of a switch in its registry, `0..N` in table order.
pub type SwitchId = usize;

/// Static configuration of the debouncing algorithm.
///
/// One window applies to every switch in a registry.
pub trait Debounce {
    /// How long a change must be given to settle.
    ///
    /// A toggle commits once this much time has passed since it first
    /// read a new level.  A button can be pressed again once it reads
    /// released with more than this much time gone by.  Poll every
    /// switch more often than once per window.
    const WINDOW: Millis;

    /// What a toggle does when its window elapses.
    const TOGGLE_COMMIT: ToggleCommit;

    /// Where a button's release window starts.
    const BUTTON_RELEASE: ButtonRelease;
}

/// Some default configurations.
///
/// Both use a 100 ms window, which suits the usual panel-mount buttons
/// and toggles.
pub mod default {
    use super::{ButtonRelease, Debounce, Millis, ToggleCommit};

    /// A reasonable default configuration.
    ///
    /// Toggles re-check their pin when the window elapses, so a bounce
    /// that settles back within the window is never reported.  Buttons
    /// must read released for a whole window before the next press.
    pub struct Standard;

    impl Debounce for Standard {
        const WINDOW: Millis = Millis::millis(100);

        const TOGGLE_COMMIT: ToggleCommit = ToggleCommit::Relatch;

        const BUTTON_RELEASE: ButtonRelease = ButtonRelease::SinceActive;
    }

    /// The classic flip-after-window behavior.
    ///
    /// Once a toggle has seen a new level it flips when the window
    /// elapses, even if the contact has settled back by then.  A
    /// button's release window counts from the press.
    pub struct Classic;

    impl Debounce for Classic {
        const WINDOW: Millis = Millis::millis(100);

        const TOGGLE_COMMIT: ToggleCommit = ToggleCommit::Latched;

        const BUTTON_RELEASE: ButtonRelease = ButtonRelease::SincePress;
    }
}

/// A malformed switch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The table has no switches.
    Empty,

    /// Two switches share an input pin.
    DuplicatePin {
        /// The earlier entry.
        first: SwitchId,
        /// The later entry.
        second: SwitchId,
    },
}

/// An error from the switch registry.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<PinError> {
    /// The switch table was rejected at setup.
    Config(ConfigError),

    /// No switch with this id.
    OutOfRange(SwitchId),

    /// An error from the host's pin layer.
    Pin(PinError),
}

impl<PinError> From<ConfigError> for Error<PinError> {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_windows() {
        assert_eq!(100, default::Standard::WINDOW.to_millis());
        assert_eq!(100, default::Classic::WINDOW.to_millis());
        assert_eq!(ToggleCommit::Relatch, default::Standard::TOGGLE_COMMIT);
        assert_eq!(ToggleCommit::Latched, default::Classic::TOGGLE_COMMIT);
        assert_eq!(ButtonRelease::SinceActive, default::Standard::BUTTON_RELEASE);
        assert_eq!(ButtonRelease::SincePress, default::Classic::BUTTON_RELEASE);
    }

    #[test]
    fn config_errors_convert() {
        let err: Error<()> = ConfigError::Empty.into();
        assert_eq!(Error::Config(ConfigError::Empty), err);
    }
}
