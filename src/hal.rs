//! The hardware capabilities a switch bank needs from its host.
//!
//! The debounce core never touches registers itself.  It asks the host
//! to configure a pin once, to read a pin's level on every poll, and
//! for the current time.  Those three needs are captured by the
//! [`SwitchPins`](SwitchPins) and [`Clock`](Clock) traits, so the same
//! core runs against real hardware or a simulated board.
//!
//! For the common case of a set of [`embedded-hal`][0] input pins, use
//! [`InputPinBank`](InputPinBank).
//!
//! [0]: https://github.com/rust-embedded/embedded-hal

use embedded_hal::digital::v2::InputPin;

/// A timestamp from the host's monotonic millisecond counter.
///
/// The counter is allowed to wrap; elapsed time is computed modulo
/// `2^32` milliseconds.
pub type Instant = fugit::TimerInstantU32<1_000>;

/// A span of milliseconds.
pub type Millis = fugit::MillisDurationU32;

/// The electrical level read from an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0.
    Low,
    /// Logic 1.
    High,
}

impl Level {
    /// The opposite level.
    #[inline]
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    #[inline]
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// How an input pin is configured at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// A plain floating input.  The circuit provides an external
    /// pull-down resistor.
    PlainInput,
    /// An input with the internal pull-up resistor enabled.
    PullUpInput,
}

/// Pin access for a bank of switches.
pub trait SwitchPins {
    /// How the host names a pin.
    type Pin: Copy + PartialEq;

    /// The error raised by the host's pin layer.
    type Error;

    /// Put a pin into the given input mode.  Called once per switch at
    /// setup.
    fn configure(&mut self, pin: Self::Pin, mode: PinMode) -> Result<(), Self::Error>;

    /// Sample the current level of a pin.  Called once per poll.
    fn read(&mut self, pin: Self::Pin) -> Result<Level, Self::Error>;
}

/// A monotonic millisecond clock.
pub trait Clock {
    /// The current time.
    fn now(&mut self) -> Instant;
}

impl<F: FnMut() -> Instant> Clock for F {
    #[inline]
    fn now(&mut self) -> Instant {
        self()
    }
}

/// An error from an [`InputPinBank`](InputPinBank).
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError<PinError> {
    /// No pin at this index.
    UnknownPin(usize),

    /// An error reading the underlying pin.
    Pin(PinError),
}

/// A fixed set of `embedded-hal` input pins, addressed by index.
///
/// With `embedded-hal`, pin modes are part of the pin's type, so the
/// pins must already be configured to match their switch's polarity
/// (pull-up for active-low switches).  [`configure()`](SwitchPins::configure)
/// only checks that the index names a pin.
///
/// ```
/// # struct PinType;
/// # impl embedded_hal::digital::v2::InputPin for PinType {
/// #     type Error = core::convert::Infallible;
/// #     fn is_high(&self) -> Result<bool, Self::Error> {
/// #         Ok(true)
/// #     }
/// #     fn is_low(&self) -> Result<bool, Self::Error> {
/// #         Ok(false)
/// #     }
/// # }
/// use steadfast::hal::{InputPinBank, Level, SwitchPins};
///
/// let mut bank = InputPinBank::new([PinType, PinType]);
/// assert_eq!(Level::High, bank.read(1).unwrap());
/// assert!(bank.read(2).is_err());
/// ```
pub struct InputPinBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> InputPinBank<P, N> {
    /// Wrap a set of configured input pins.
    pub const fn new(pins: [P; N]) -> Self {
        InputPinBank { pins }
    }

    /// Give back the wrapped pins.
    pub fn free(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> SwitchPins for InputPinBank<P, N> {
    type Pin = usize;
    type Error = BankError<P::Error>;

    #[inline]
    fn configure(&mut self, pin: usize, _mode: PinMode) -> Result<(), Self::Error> {
        if pin < N {
            Ok(())
        } else {
            Err(BankError::UnknownPin(pin))
        }
    }

    #[inline]
    fn read(&mut self, pin: usize) -> Result<Level, Self::Error> {
        let input = self.pins.get(pin).ok_or(BankError::UnknownPin(pin))?;
        let high = input.is_high().map_err(BankError::Pin)?;
        Ok(Level::from(high))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use embedded_hal_mock::pin;

    #[test]
    fn bank_reads_each_pin() {
        let first = pin::Mock::new(&[
            pin::Transaction::get(pin::State::High),
            pin::Transaction::get(pin::State::Low),
        ]);
        let second = pin::Mock::new(&[pin::Transaction::get(pin::State::Low)]);

        let mut bank = InputPinBank::new([first, second]);

        assert_eq!(Level::High, bank.read(0).unwrap());
        assert_eq!(Level::Low, bank.read(1).unwrap());
        assert_eq!(Level::Low, bank.read(0).unwrap());

        for mut pin in bank.free() {
            pin.done();
        }
    }

    #[test]
    fn bank_rejects_unknown_pins() {
        let mut bank = InputPinBank::new([pin::Mock::new(&[])]);

        assert!(bank.configure(0, PinMode::PullUpInput).is_ok());
        assert!(matches!(
            bank.configure(1, PinMode::PlainInput),
            Err(BankError::UnknownPin(1))
        ));
        assert!(matches!(bank.read(7), Err(BankError::UnknownPin(7))));

        for mut pin in bank.free() {
            pin.done();
        }
    }

    #[test]
    fn closures_are_clocks() {
        let mut ticks = 0;
        let mut clock = || {
            ticks += 5;
            Instant::from_ticks(ticks)
        };

        assert_eq!(5, clock.now().ticks());
        assert_eq!(10, clock.now().ticks());
    }

    #[test]
    fn levels_invert() {
        assert_eq!(Level::High, Level::Low.inverted());
        assert_eq!(Level::Low, Level::High.inverted());
        assert_eq!(Level::High, Level::from(true));
    }
}
