use std::fmt;

/// One of the two mirrored channel strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Engine channel group driven by this side.
    pub fn channel(self) -> &'static str {
        match self {
            Side::Left => "[Channel1]",
            Side::Right => "[Channel2]",
        }
    }
}

/// Generic addressing group for controls repeated on both sides, plus the
/// shared centre section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Left,
    Right,
    Main,
}

impl From<Side> for Group {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Group::Left,
            Side::Right => Group::Right,
        }
    }
}

impl Group {
    fn side(self) -> Option<Side> {
        match self {
            Group::Left => Some(Side::Left),
            Group::Right => Some(Side::Right),
            Group::Main => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonName {
    EqMode,
    StemMode,
    Top,
    FxToggle,
    Fx1,
    Fx2,
    Fx3,
    Fx4,
    FxFilter,
    Prelisten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobName {
    Main,
    HpMix,
    HpVol,
    Crossfader,
    Gain,
    Hi,
    Mid,
    Low,
    Fx,
    Fader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightName {
    EqModeSwitch,
    StemModeSwitch,
    FxToggle,
    Fx1,
    Fx2,
    Fx3,
    Fx4,
    FxFilter,
    Prelisten,
    /// Bottom LED 1 (frontmost) to 6 (rearmost).
    BottomLed(usize),
}

/// A group/name combination which does not exist on the hardware.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("invalid button -- {group:?}:{name:?}")]
    InvalidButton { group: Group, name: ButtonName },
    #[error("invalid knob -- {group:?}:{name:?}")]
    InvalidKnob { group: Group, name: KnobName },
    #[error("invalid light -- {group:?}:{name:?}")]
    InvalidLight { group: Group, name: LightName },
}

/// The five effect selector buttons in the centre section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FxSwitch {
    Fx1,
    Fx2,
    Fx3,
    Fx4,
    Filter,
}

impl FxSwitch {
    pub const ALL: [FxSwitch; 5] = [
        FxSwitch::Fx1,
        FxSwitch::Fx2,
        FxSwitch::Fx3,
        FxSwitch::Fx4,
        FxSwitch::Filter,
    ];

    /// Chain preset number selected by this button (1-5).
    pub fn preset(self) -> usize {
        match self {
            FxSwitch::Fx1 => 1,
            FxSwitch::Fx2 => 2,
            FxSwitch::Fx3 => 3,
            FxSwitch::Fx4 => 4,
            FxSwitch::Filter => 5,
        }
    }
}

/// A physical button, resolved from a group/name pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    EqMode(Side),
    StemMode(Side),
    FxToggle(Side),
    Prelisten(Side),
    Top,
    Fx(FxSwitch),
}

impl Button {
    pub const ALL: [Button; 14] = [
        Button::EqMode(Side::Left),
        Button::StemMode(Side::Left),
        Button::Top,
        Button::EqMode(Side::Right),
        Button::StemMode(Side::Right),
        Button::FxToggle(Side::Left),
        Button::FxToggle(Side::Right),
        Button::Fx(FxSwitch::Fx1),
        Button::Fx(FxSwitch::Fx2),
        Button::Fx(FxSwitch::Fx3),
        Button::Fx(FxSwitch::Fx4),
        Button::Fx(FxSwitch::Filter),
        Button::Prelisten(Side::Left),
        Button::Prelisten(Side::Right),
    ];

    pub fn resolve(group: Group, name: ButtonName) -> Result<Self, ControlError> {
        let button = match (group.side(), name) {
            (Some(side), ButtonName::EqMode) => Button::EqMode(side),
            (Some(side), ButtonName::StemMode) => Button::StemMode(side),
            (Some(side), ButtonName::FxToggle) => Button::FxToggle(side),
            (Some(side), ButtonName::Prelisten) => Button::Prelisten(side),
            (None, ButtonName::Top) => Button::Top,
            (None, ButtonName::Fx1) => Button::Fx(FxSwitch::Fx1),
            (None, ButtonName::Fx2) => Button::Fx(FxSwitch::Fx2),
            (None, ButtonName::Fx3) => Button::Fx(FxSwitch::Fx3),
            (None, ButtonName::Fx4) => Button::Fx(FxSwitch::Fx4),
            (None, ButtonName::FxFilter) => Button::Fx(FxSwitch::Filter),
            _ => return Err(ControlError::InvalidButton { group, name }),
        };
        Ok(button)
    }

    /// Byte index and bit mask of this button in the input report.
    pub fn location(self) -> (usize, u8) {
        match self {
            Button::EqMode(Side::Left) => (1, 0x01),
            Button::StemMode(Side::Left) => (1, 0x02),
            Button::Top => (1, 0x04),
            Button::EqMode(Side::Right) => (1, 0x08),
            Button::StemMode(Side::Right) => (1, 0x10),
            Button::FxToggle(Side::Left) => (1, 0x20),
            Button::FxToggle(Side::Right) => (1, 0x40),
            Button::Fx(FxSwitch::Fx1) => (1, 0x80),
            Button::Fx(FxSwitch::Fx2) => (2, 0x01),
            Button::Fx(FxSwitch::Fx3) => (2, 0x02),
            Button::Fx(FxSwitch::Fx4) => (2, 0x04),
            Button::Fx(FxSwitch::Filter) => (2, 0x08),
            Button::Prelisten(Side::Left) => (2, 0x10),
            Button::Prelisten(Side::Right) => (2, 0x20),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::EqMode(side) => write!(f, "{side:?} eq mode"),
            Button::StemMode(side) => write!(f, "{side:?} stem mode"),
            Button::FxToggle(side) => write!(f, "{side:?} fx toggle"),
            Button::Prelisten(side) => write!(f, "{side:?} prelisten"),
            Button::Top => f.write_str("top"),
            Button::Fx(switch) => write!(f, "fx {}", switch.preset()),
        }
    }
}

/// A knob, fader or the crossfader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Knob {
    Gain(Side),
    Hi(Side),
    Mid(Side),
    Low(Side),
    Fx(Side),
    Fader(Side),
    HeadphoneMix,
    MainVolume,
    HeadphoneVolume,
    Crossfader,
}

impl Knob {
    /// All knobs in report order.
    pub const ALL: [Knob; 16] = [
        Knob::Gain(Side::Left),
        Knob::Hi(Side::Left),
        Knob::Mid(Side::Left),
        Knob::Low(Side::Left),
        Knob::Fx(Side::Left),
        Knob::Gain(Side::Right),
        Knob::Hi(Side::Right),
        Knob::Mid(Side::Right),
        Knob::Low(Side::Right),
        Knob::Fx(Side::Right),
        Knob::HeadphoneMix,
        Knob::MainVolume,
        Knob::HeadphoneVolume,
        Knob::Fader(Side::Left),
        Knob::Fader(Side::Right),
        Knob::Crossfader,
    ];

    pub fn resolve(group: Group, name: KnobName) -> Result<Self, ControlError> {
        let knob = match (group.side(), name) {
            (Some(side), KnobName::Gain) => Knob::Gain(side),
            (Some(side), KnobName::Hi) => Knob::Hi(side),
            (Some(side), KnobName::Mid) => Knob::Mid(side),
            (Some(side), KnobName::Low) => Knob::Low(side),
            (Some(side), KnobName::Fx) => Knob::Fx(side),
            (Some(side), KnobName::Fader) => Knob::Fader(side),
            (None, KnobName::Main) => Knob::MainVolume,
            (None, KnobName::HpMix) => Knob::HeadphoneMix,
            (None, KnobName::HpVol) => Knob::HeadphoneVolume,
            (None, KnobName::Crossfader) => Knob::Crossfader,
            _ => return Err(ControlError::InvalidKnob { group, name }),
        };
        Ok(knob)
    }

    /// Offset of the low byte of this knob's 12-bit value in the input report.
    pub fn offset(self) -> usize {
        match self {
            Knob::Gain(Side::Left) => 3,
            Knob::Hi(Side::Left) => 5,
            Knob::Mid(Side::Left) => 7,
            Knob::Low(Side::Left) => 9,
            Knob::Fx(Side::Left) => 11,
            Knob::Gain(Side::Right) => 13,
            Knob::Hi(Side::Right) => 15,
            Knob::Mid(Side::Right) => 17,
            Knob::Low(Side::Right) => 19,
            Knob::Fx(Side::Right) => 21,
            Knob::HeadphoneMix => 23,
            Knob::MainVolume => 25,
            Knob::HeadphoneVolume => 27,
            Knob::Fader(Side::Left) => 29,
            Knob::Fader(Side::Right) => 31,
            Knob::Crossfader => 33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_button_has_a_distinct_bit() {
        let mut seen = Vec::new();
        for button in Button::ALL {
            let location = button.location();
            assert!(!seen.contains(&location), "{button} shares a bit");
            seen.push(location);
        }
    }

    #[test]
    fn knob_offsets_cover_the_report_payload() {
        let mut offsets: Vec<usize> = Knob::ALL.iter().map(|k| k.offset()).collect();
        offsets.sort_unstable();
        let expected: Vec<usize> = (0..16).map(|i| 3 + i * 2).collect();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn side_buttons_need_a_side() {
        assert_eq!(
            Button::resolve(Group::Right, ButtonName::EqMode),
            Ok(Button::EqMode(Side::Right))
        );
        assert_eq!(
            Button::resolve(Group::Main, ButtonName::EqMode),
            Err(ControlError::InvalidButton {
                group: Group::Main,
                name: ButtonName::EqMode
            })
        );
        assert!(Button::resolve(Group::Left, ButtonName::Fx1).is_err());
    }

    #[test]
    fn shared_knobs_live_in_main() {
        assert_eq!(
            Knob::resolve(Group::Main, KnobName::Crossfader),
            Ok(Knob::Crossfader)
        );
        assert!(Knob::resolve(Group::Left, KnobName::Crossfader).is_err());
        assert!(Knob::resolve(Group::Main, KnobName::Gain).is_err());
    }
}
