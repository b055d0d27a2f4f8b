//! Switch layout of the camera rig controller panel.
//!
//! Nine toggles switch power and modes, twenty push buttons drive the
//! cameras.  Every switch is wired straight to ground with the pin's
//! internal pull-up enabled, so all of them are active low.
//!
//! ```
//! use steadfast::layout::{id, SWITCHES};
//! use steadfast::SwitchKind;
//!
//! assert_eq!(SwitchKind::Toggle, SWITCHES[id::DRIVE_POWER].kind);
//! assert_eq!(SwitchKind::Momentary, SWITCHES[id::SHUTTER].kind);
//! ```

use crate::switch::{Polarity, SwitchDescriptor};

/// Input pin numbers.
pub mod pin {
    #![allow(missing_docs)]

    pub const APERTURE_UP: u8 = 22;
    pub const APERTURE_DOWN: u8 = 23;
    pub const ISO_UP: u8 = 24;
    pub const ISO_DOWN: u8 = 25;
    pub const SHUTTER_SPEED_UP: u8 = 26;
    pub const SHUTTER_SPEED_DOWN: u8 = 27;
    pub const MENU: u8 = 28;
    pub const UP: u8 = 29;
    pub const DOWN: u8 = 30;
    pub const LEFT: u8 = 31;
    pub const RIGHT: u8 = 32;
    pub const SELECT: u8 = 33;
    pub const PLAYBACK: u8 = 34;
    pub const TRIGGER_AF: u8 = 35;
    pub const SHUTTER: u8 = 36;
    pub const RECORD_VIDEO: u8 = 37;
    pub const CUSTOM_ONE: u8 = 38;
    pub const CUSTOM_TWO: u8 = 39;
    pub const CUSTOM_THREE: u8 = 40;
    pub const CUSTOM_FOUR: u8 = 41;

    pub const CAMERA_A_POWER: u8 = 42;
    pub const CAMERA_B_POWER: u8 = 43;
    pub const CAMERA_SELECT: u8 = 44;
    pub const LIGHT_A_POWER: u8 = 45;
    pub const LIGHT_B_POWER: u8 = 46;
    pub const MIC_RECORD: u8 = 47;
    pub const VIDEO_TRANSMIT_POWER: u8 = 48;
    pub const DRIVE_POWER: u8 = 49;
    pub const SHUTTER_SELECT: u8 = 50;
}

/// Switch ids, i.e. positions in [`SWITCHES`](SWITCHES).
pub mod id {
    #![allow(missing_docs)]

    use crate::SwitchId;

    pub const CAMERA_SELECT: SwitchId = 0;
    pub const DRIVE_POWER: SwitchId = 1;
    pub const VIDEO_TRANSMIT_POWER: SwitchId = 2;
    pub const MIC_RECORD: SwitchId = 3;
    pub const LIGHT_B_POWER: SwitchId = 4;
    pub const LIGHT_A_POWER: SwitchId = 5;
    pub const SHUTTER_SELECT: SwitchId = 6;
    pub const CAMERA_B_POWER: SwitchId = 7;
    pub const CAMERA_A_POWER: SwitchId = 8;

    pub const APERTURE_UP: SwitchId = 9;
    pub const APERTURE_DOWN: SwitchId = 10;
    pub const ISO_UP: SwitchId = 11;
    pub const ISO_DOWN: SwitchId = 12;
    pub const SHUTTER_SPEED_UP: SwitchId = 13;
    pub const SHUTTER_SPEED_DOWN: SwitchId = 14;
    pub const MENU: SwitchId = 15;
    pub const UP: SwitchId = 16;
    pub const DOWN: SwitchId = 17;
    pub const LEFT: SwitchId = 18;
    pub const RIGHT: SwitchId = 19;
    pub const SELECT: SwitchId = 20;
    pub const PLAYBACK: SwitchId = 21;
    pub const TRIGGER_AF: SwitchId = 22;
    pub const SHUTTER: SwitchId = 23;
    pub const RECORD_VIDEO: SwitchId = 24;
    pub const CUSTOM_ONE: SwitchId = 25;
    pub const CUSTOM_TWO: SwitchId = 26;
    pub const CUSTOM_THREE: SwitchId = 27;
    pub const CUSTOM_FOUR: SwitchId = 28;
}

/// Number of switches on the panel.
pub const SWITCH_COUNT: usize = 29;

const fn toggle(pin: u8) -> SwitchDescriptor<u8> {
    SwitchDescriptor::toggle(pin, Polarity::ActiveLow)
}

const fn button(pin: u8) -> SwitchDescriptor<u8> {
    SwitchDescriptor::momentary(pin, Polarity::ActiveLow)
}

/// The panel's switch table, toggles first.
pub const SWITCHES: [SwitchDescriptor<u8>; SWITCH_COUNT] = [
    toggle(pin::CAMERA_SELECT),
    toggle(pin::DRIVE_POWER),
    toggle(pin::VIDEO_TRANSMIT_POWER),
    toggle(pin::MIC_RECORD),
    toggle(pin::LIGHT_B_POWER),
    toggle(pin::LIGHT_A_POWER),
    toggle(pin::SHUTTER_SELECT),
    toggle(pin::CAMERA_B_POWER),
    toggle(pin::CAMERA_A_POWER),
    button(pin::APERTURE_UP),
    button(pin::APERTURE_DOWN),
    button(pin::ISO_UP),
    button(pin::ISO_DOWN),
    button(pin::SHUTTER_SPEED_UP),
    button(pin::SHUTTER_SPEED_DOWN),
    button(pin::MENU),
    button(pin::UP),
    button(pin::DOWN),
    button(pin::LEFT),
    button(pin::RIGHT),
    button(pin::SELECT),
    button(pin::PLAYBACK),
    button(pin::TRIGGER_AF),
    button(pin::SHUTTER),
    button(pin::RECORD_VIDEO),
    button(pin::CUSTOM_ONE),
    button(pin::CUSTOM_TWO),
    button(pin::CUSTOM_THREE),
    button(pin::CUSTOM_FOUR),
];
