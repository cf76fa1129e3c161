use super::controls::{Button, ButtonName, ControlError, FxSwitch, Group, Knob, KnobName, Side};

/// Report identifier carried in byte 0 of every input report.
pub const INPUT_REPORT_ID: u8 = 0x01;
/// Exact size of an input report, identifier included.
pub const INPUT_REPORT_LEN: usize = 35;
/// Full scale of a knob or fader reading.
pub const INPUT_NUMBER_MAX: u16 = 0x0FFF;

/// Reasons an inbound buffer is not an input report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid message ID 0x{0:02x}")]
    WrongReportId(u8),
    #[error("invalid message length {0}")]
    WrongLength(usize),
}

/// One decoded input report.
///
/// Buttons are decoded from the bitfields in bytes 1-2, knobs are kept as the
/// raw little-endian 12-bit readings from bytes 3-34. See [`Button::location`]
/// and [`Knob::offset`] for the layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputReport {
    // Buttons
    pub button_left_eq_mode: bool,
    pub button_left_stem_mode: bool,
    pub button_top: bool,
    pub button_right_eq_mode: bool,
    pub button_right_stem_mode: bool,
    pub button_left_fx_toggle: bool,
    pub button_right_fx_toggle: bool,
    pub button_fx1: bool,
    pub button_fx2: bool,
    pub button_fx3: bool,
    pub button_fx4: bool,
    pub button_fx_filter: bool,
    pub button_left_prelisten: bool,
    pub button_right_prelisten: bool,
    // Knobs and faders (0..=0x0FFF)
    pub pot_left_gain: u16,
    pub pot_left_hi: u16,
    pub pot_left_mid: u16,
    pub pot_left_low: u16,
    pub pot_left_fx: u16,
    pub pot_right_gain: u16,
    pub pot_right_hi: u16,
    pub pot_right_mid: u16,
    pub pot_right_low: u16,
    pub pot_right_fx: u16,
    pub pot_headphone_mix: u16,
    pub pot_main_volume: u16,
    pub pot_headphone_volume: u16,
    pub pot_left_fader: u16,
    pub pot_right_fader: u16,
    pub pot_crossfader: u16,
}

impl InputReport {
    /// Check the identifier and length of `buf` and decode it.
    pub fn load(buf: &[u8]) -> Result<Self, FormatError> {
        match buf.first() {
            Some(&INPUT_REPORT_ID) => {}
            Some(&id) => return Err(FormatError::WrongReportId(id)),
            None => return Err(FormatError::WrongLength(0)),
        }
        if buf.len() != INPUT_REPORT_LEN {
            return Err(FormatError::WrongLength(buf.len()));
        }

        let bit = |button: Button| -> bool {
            let (index, mask) = button.location();
            buf[index] & mask != 0
        };
        let pot = |knob: Knob| -> u16 {
            let index = knob.offset();
            u16::from_le_bytes([buf[index], buf[index + 1]]) & INPUT_NUMBER_MAX
        };

        Ok(Self {
            button_left_eq_mode: bit(Button::EqMode(Side::Left)),
            button_left_stem_mode: bit(Button::StemMode(Side::Left)),
            button_top: bit(Button::Top),
            button_right_eq_mode: bit(Button::EqMode(Side::Right)),
            button_right_stem_mode: bit(Button::StemMode(Side::Right)),
            button_left_fx_toggle: bit(Button::FxToggle(Side::Left)),
            button_right_fx_toggle: bit(Button::FxToggle(Side::Right)),
            button_fx1: bit(Button::Fx(FxSwitch::Fx1)),
            button_fx2: bit(Button::Fx(FxSwitch::Fx2)),
            button_fx3: bit(Button::Fx(FxSwitch::Fx3)),
            button_fx4: bit(Button::Fx(FxSwitch::Fx4)),
            button_fx_filter: bit(Button::Fx(FxSwitch::Filter)),
            button_left_prelisten: bit(Button::Prelisten(Side::Left)),
            button_right_prelisten: bit(Button::Prelisten(Side::Right)),
            pot_left_gain: pot(Knob::Gain(Side::Left)),
            pot_left_hi: pot(Knob::Hi(Side::Left)),
            pot_left_mid: pot(Knob::Mid(Side::Left)),
            pot_left_low: pot(Knob::Low(Side::Left)),
            pot_left_fx: pot(Knob::Fx(Side::Left)),
            pot_right_gain: pot(Knob::Gain(Side::Right)),
            pot_right_hi: pot(Knob::Hi(Side::Right)),
            pot_right_mid: pot(Knob::Mid(Side::Right)),
            pot_right_low: pot(Knob::Low(Side::Right)),
            pot_right_fx: pot(Knob::Fx(Side::Right)),
            pot_headphone_mix: pot(Knob::HeadphoneMix),
            pot_main_volume: pot(Knob::MainVolume),
            pot_headphone_volume: pot(Knob::HeadphoneVolume),
            pot_left_fader: pot(Knob::Fader(Side::Left)),
            pot_right_fader: pot(Knob::Fader(Side::Right)),
            pot_crossfader: pot(Knob::Crossfader),
        })
    }

    /// Encode back into the wire layout accepted by [`InputReport::load`].
    #[allow(dead_code)]
    pub fn encode(&self) -> [u8; INPUT_REPORT_LEN] {
        let mut buf = [0u8; INPUT_REPORT_LEN];
        buf[0] = INPUT_REPORT_ID;
        for button in Button::ALL {
            if self.pressed(button) {
                let (index, mask) = button.location();
                buf[index] |= mask;
            }
        }
        for knob in Knob::ALL {
            let index = knob.offset();
            let bytes = (self.raw(knob) & INPUT_NUMBER_MAX).to_le_bytes();
            buf[index] = bytes[0];
            buf[index + 1] = bytes[1];
        }
        buf
    }

    pub fn pressed(&self, button: Button) -> bool {
        match button {
            Button::EqMode(Side::Left) => self.button_left_eq_mode,
            Button::StemMode(Side::Left) => self.button_left_stem_mode,
            Button::Top => self.button_top,
            Button::EqMode(Side::Right) => self.button_right_eq_mode,
            Button::StemMode(Side::Right) => self.button_right_stem_mode,
            Button::FxToggle(Side::Left) => self.button_left_fx_toggle,
            Button::FxToggle(Side::Right) => self.button_right_fx_toggle,
            Button::Fx(FxSwitch::Fx1) => self.button_fx1,
            Button::Fx(FxSwitch::Fx2) => self.button_fx2,
            Button::Fx(FxSwitch::Fx3) => self.button_fx3,
            Button::Fx(FxSwitch::Fx4) => self.button_fx4,
            Button::Fx(FxSwitch::Filter) => self.button_fx_filter,
            Button::Prelisten(Side::Left) => self.button_left_prelisten,
            Button::Prelisten(Side::Right) => self.button_right_prelisten,
        }
    }

    /// Raw 12-bit reading of a knob.
    pub fn raw(&self, knob: Knob) -> u16 {
        match knob {
            Knob::Gain(Side::Left) => self.pot_left_gain,
            Knob::Hi(Side::Left) => self.pot_left_hi,
            Knob::Mid(Side::Left) => self.pot_left_mid,
            Knob::Low(Side::Left) => self.pot_left_low,
            Knob::Fx(Side::Left) => self.pot_left_fx,
            Knob::Gain(Side::Right) => self.pot_right_gain,
            Knob::Hi(Side::Right) => self.pot_right_hi,
            Knob::Mid(Side::Right) => self.pot_right_mid,
            Knob::Low(Side::Right) => self.pot_right_low,
            Knob::Fx(Side::Right) => self.pot_right_fx,
            Knob::HeadphoneMix => self.pot_headphone_mix,
            Knob::MainVolume => self.pot_main_volume,
            Knob::HeadphoneVolume => self.pot_headphone_volume,
            Knob::Fader(Side::Left) => self.pot_left_fader,
            Knob::Fader(Side::Right) => self.pot_right_fader,
            Knob::Crossfader => self.pot_crossfader,
        }
    }

    /// Knob position scaled to 0-1.
    pub fn value(&self, knob: Knob) -> f64 {
        f64::from(self.raw(knob)) / f64::from(INPUT_NUMBER_MAX)
    }

    #[allow(dead_code)]
    pub fn button(&self, group: Group, name: ButtonName) -> Result<bool, ControlError> {
        Ok(self.pressed(Button::resolve(group, name)?))
    }

    #[allow(dead_code)]
    pub fn knob(&self, group: Group, name: KnobName) -> Result<f64, ControlError> {
        Ok(self.value(Knob::resolve(group, name)?))
    }
}

/// The most recent input, or the absence of any input so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputFrame {
    /// Nothing received yet. Reads behave like an all-zero report.
    #[default]
    Uninitialized,
    Received(InputReport),
}

static EMPTY_REPORT: InputReport = InputReport {
    button_left_eq_mode: false,
    button_left_stem_mode: false,
    button_top: false,
    button_right_eq_mode: false,
    button_right_stem_mode: false,
    button_left_fx_toggle: false,
    button_right_fx_toggle: false,
    button_fx1: false,
    button_fx2: false,
    button_fx3: false,
    button_fx4: false,
    button_fx_filter: false,
    button_left_prelisten: false,
    button_right_prelisten: false,
    pot_left_gain: 0,
    pot_left_hi: 0,
    pot_left_mid: 0,
    pot_left_low: 0,
    pot_left_fx: 0,
    pot_right_gain: 0,
    pot_right_hi: 0,
    pot_right_mid: 0,
    pot_right_low: 0,
    pot_right_fx: 0,
    pot_headphone_mix: 0,
    pot_main_volume: 0,
    pot_headphone_volume: 0,
    pot_left_fader: 0,
    pot_right_fader: 0,
    pot_crossfader: 0,
};

impl InputFrame {
    pub fn is_null_sentinel(&self) -> bool {
        matches!(self, InputFrame::Uninitialized)
    }

    pub fn report(&self) -> &InputReport {
        match self {
            InputFrame::Uninitialized => &EMPTY_REPORT,
            InputFrame::Received(report) => report,
        }
    }
}
