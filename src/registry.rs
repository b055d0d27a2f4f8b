//! The switch registry: a fixed bank of switches and their state.

use core::marker::PhantomData;

#[cfg(feature = "defmt")]
use defmt::{debug, trace};
#[cfg(not(feature = "defmt"))]
use log::{debug, trace};

use crate::debounce::{SwitchState, Transition};
use crate::hal::{Clock, Instant, Level, SwitchPins};
use crate::switch::{SwitchDescriptor, SwitchKind};
use crate::{ConfigError, Debounce, Error, SwitchId};

struct Switch<Pin> {
    descriptor: SwitchDescriptor<Pin>,
    on_level: Level,
    state: SwitchState,
}

impl<Pin> Switch<Pin> {
    fn new(descriptor: SwitchDescriptor<Pin>) -> Self {
        Switch {
            on_level: descriptor.polarity.on_level(),
            descriptor,
            state: SwitchState::new(),
        }
    }

    fn advance<Cfg: Debounce>(&mut self, id: SwitchId, level: Level, now: Instant) -> Transition {
        let active = level == self.on_level;

        let transition = match self.descriptor.kind {
            SwitchKind::Toggle => {
                self.state
                    .step_toggle(active, now, Cfg::WINDOW, Cfg::TOGGLE_COMMIT)
            }
            SwitchKind::Momentary => {
                self.state
                    .step_momentary(active, now, Cfg::WINDOW, Cfg::BUTTON_RELEASE)
            }
        };

        match transition {
            Transition::Steady => {}
            Transition::Armed => trace!("switch {}: debouncing at {}ms", id, now.ticks()),
            Transition::Pressed => trace!("switch {}: pressed at {}ms", id, now.ticks()),
            Transition::Released => trace!("switch {}: released at {}ms", id, now.ticks()),
            Transition::Flipped(on) => trace!("switch {}: settled on={}", id, on),
            Transition::Rejected => trace!("switch {}: bounce rejected", id),
        }

        transition
    }
}

/// A debounced bank of `N` switches.
///
/// The registry owns the host's pins and clock for as long as it
/// lives.  Create it once with [`setup()`](Registry::setup), then call
/// [`poll()`](Registry::poll) for every switch on a cadence shorter
/// than the debounce window.
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
/// use steadfast::{default::Standard, hal::{InputPinBank, Instant}, Polarity, Registry, SwitchDescriptor};
///
/// let bank = InputPinBank::new([PinType, PinType]);
/// let clock = || Instant::from_ticks(0);
/// let mut switches: Registry<_, _, Standard, 2> = Registry::setup(bank, clock, [
///     SwitchDescriptor::toggle(0, Polarity::ActiveLow),
///     SwitchDescriptor::momentary(1, Polarity::ActiveLow),
/// ]).unwrap();
///
/// assert_eq!([false, false], switches.poll_all().unwrap());
/// assert_eq!(false, switches.is_on(0).unwrap());
/// ```
pub struct Registry<Pins: SwitchPins, Clk, Cfg, const N: usize> {
    cfg: PhantomData<Cfg>,
    pins: Pins,
    clock: Clk,
    switches: [Switch<Pins::Pin>; N],
}

impl<Pins, Clk, Cfg, const N: usize> Registry<Pins, Clk, Cfg, N>
where
    Pins: SwitchPins,
    Clk: Clock,
    Cfg: Debounce,
{
    /// Validate a switch table, configure its pins and bring every
    /// switch to rest.
    ///
    /// Fails with [`Error::Config`](Error::Config) if the table is empty
    /// or names a pin twice, and with [`Error::Pin`](Error::Pin) if the
    /// host refuses to configure a pin.
    pub fn setup(
        pins: Pins,
        clock: Clk,
        descriptors: [SwitchDescriptor<Pins::Pin>; N],
    ) -> Result<Self, Error<Pins::Error>> {
        validate(&descriptors)?;

        let mut registry = Registry {
            cfg: PhantomData,
            pins,
            clock,
            switches: descriptors.map(Switch::new),
        };
        registry.configure_pins()?;

        debug!("switch bank ready: {} switches", N);

        Ok(registry)
    }

    /// Re-run setup on the existing table.
    ///
    /// Every pin is configured again and every switch returns to rest,
    /// dropping any settled toggle status and pending transition.
    pub fn reset(&mut self) -> Result<(), Error<Pins::Error>> {
        for switch in self.switches.iter_mut() {
            switch.state = SwitchState::new();
        }
        self.configure_pins()?;

        debug!("switch bank reset");

        Ok(())
    }

    fn configure_pins(&mut self) -> Result<(), Error<Pins::Error>> {
        for switch in self.switches.iter() {
            let descriptor = &switch.descriptor;
            self.pins
                .configure(descriptor.pin, descriptor.polarity.pin_mode())
                .map_err(Error::Pin)?;
        }
        Ok(())
    }

    /// Poll one switch.
    ///
    /// Samples the switch's pin, advances its debounce machine, and
    /// returns `true` only if this poll produced a fresh debounced
    /// event: a button press, or a committed toggle change.
    pub fn poll(&mut self, id: SwitchId) -> Result<bool, Error<Pins::Error>> {
        self.step(id).map(Transition::changed)
    }

    /// Poll one switch, reporting exactly what its machine did.
    pub fn step(&mut self, id: SwitchId) -> Result<Transition, Error<Pins::Error>> {
        let switch = self.switches.get_mut(id).ok_or(Error::OutOfRange(id))?;

        let level = self.pins.read(switch.descriptor.pin).map_err(Error::Pin)?;
        let now = self.clock.now();

        Ok(switch.advance::<Cfg>(id, level, now))
    }

    /// Poll every switch in id order.
    ///
    /// Returns the change flag of each switch, indexed by id.  Every pin
    /// is read before any switch is stepped, so a pin error leaves all
    /// switches as they were and no event is lost.
    pub fn poll_all(&mut self) -> Result<[bool; N], Error<Pins::Error>> {
        let mut levels = [Level::Low; N];
        for (switch, level) in self.switches.iter().zip(levels.iter_mut()) {
            *level = self.pins.read(switch.descriptor.pin).map_err(Error::Pin)?;
        }
        let now = self.clock.now();

        let mut changed = [false; N];
        let steps = self.switches.iter_mut().zip(levels).zip(changed.iter_mut());
        for (id, ((switch, level), flag)) in steps.enumerate() {
            *flag = switch.advance::<Cfg>(id, level, now).changed();
        }
        Ok(changed)
    }
}

impl<Pins: SwitchPins, Clk, Cfg, const N: usize> Registry<Pins, Clk, Cfg, N> {
    fn switch(&self, id: SwitchId) -> Result<&Switch<Pins::Pin>, Error<Pins::Error>> {
        self.switches.get(id).ok_or(Error::OutOfRange(id))
    }

    /// The debounced status of a switch.
    ///
    /// For a toggle this is its settled on/off position.  For a button
    /// it is whether a press has been reported and the release has not
    /// yet settled.
    pub fn is_on(&self, id: SwitchId) -> Result<bool, Error<Pins::Error>> {
        let switch = self.switch(id)?;
        Ok(match switch.descriptor.kind {
            SwitchKind::Toggle => switch.state.status(),
            SwitchKind::Momentary => switch.state.is_pending(),
        })
    }

    /// Whether a switch is mid-debounce.
    pub fn is_pending(&self, id: SwitchId) -> Result<bool, Error<Pins::Error>> {
        Ok(self.switch(id)?.state.is_pending())
    }

    /// The descriptor a switch was set up with.
    pub fn descriptor(
        &self,
        id: SwitchId,
    ) -> Result<&SwitchDescriptor<Pins::Pin>, Error<Pins::Error>> {
        Ok(&self.switch(id)?.descriptor)
    }

    /// The number of switches in the bank.
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the bank has no switches.  A registry that passed setup
    /// never does.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Tear down the registry, returning the host's pins and clock.
    pub fn release(self) -> (Pins, Clk) {
        (self.pins, self.clock)
    }
}

fn validate<Pin: PartialEq>(descriptors: &[SwitchDescriptor<Pin>]) -> Result<(), ConfigError> {
    if descriptors.is_empty() {
        return Err(ConfigError::Empty);
    }

    for (second, descriptor) in descriptors.iter().enumerate() {
        if let Some(first) = descriptors[..second]
            .iter()
            .position(|earlier| earlier.pin == descriptor.pin)
        {
            return Err(ConfigError::DuplicatePin { first, second });
        }
    }

    Ok(())
}
