//! Static description of a switch: what it is and how it is wired.

use crate::hal::{Level, PinMode};

/// The behavior class of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchKind {
    /// A push button that springs back.  Reports one event per press.
    Momentary,
    /// A maintained switch.  Reports each debounced change of its
    /// on/off position.
    Toggle,
}

/// Which raw level means "activated", as decided by the wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// The switch pulls the pin high against an external pull-down.
    ActiveHigh,
    /// The switch pulls the pin low against the internal pull-up.
    ActiveLow,
}

impl Polarity {
    /// The pin mode this wiring requires.
    #[inline]
    pub const fn pin_mode(self) -> PinMode {
        match self {
            Polarity::ActiveHigh => PinMode::PlainInput,
            Polarity::ActiveLow => PinMode::PullUpInput,
        }
    }

    /// The raw level read while the switch is activated.
    #[inline]
    pub const fn on_level(self) -> Level {
        match self {
            Polarity::ActiveHigh => Level::High,
            Polarity::ActiveLow => Level::Low,
        }
    }
}

/// One entry in a switch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchDescriptor<Pin> {
    /// Button or toggle.
    pub kind: SwitchKind,
    /// The input pin the switch is wired to.
    pub pin: Pin,
    /// How the switch is wired.
    pub polarity: Polarity,
}

impl<Pin> SwitchDescriptor<Pin> {
    /// Describe a push button.
    pub const fn momentary(pin: Pin, polarity: Polarity) -> Self {
        SwitchDescriptor {
            kind: SwitchKind::Momentary,
            pin,
            polarity,
        }
    }

    /// Describe a maintained toggle switch.
    pub const fn toggle(pin: Pin, polarity: Polarity) -> Self {
        SwitchDescriptor {
            kind: SwitchKind::Toggle,
            pin,
            polarity,
        }
    }
}
