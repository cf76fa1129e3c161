use std::ops::{Index, IndexMut};

use log::debug;

use super::controls::{ControlError, Group, LightName, Side};
use super::z1_controller::{DeviceError, ReportSink};
use crate::colors::Color;

/// Report identifier carried in byte 0 of the lights report.
pub const LIGHTS_REPORT_ID: u8 = 0x80;
/// Size of the lights report, identifier included.
pub const LIGHTS_REPORT_LEN: usize = 47;
/// Segments in each VU meter.
pub const VU_SEGMENTS: u8 = 10;
/// Bottom LEDs per side.
pub const BOTTOM_LEDS: usize = 6;

const VU_ON: u8 = 0x7E;
const VU_OFF: u8 = 0x00;

/// A value held once per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerSide<T> {
    pub left: T,
    pub right: T,
}

impl<T: Copy> PerSide<T> {
    pub fn both(value: T) -> Self {
        Self {
            left: value,
            right: value,
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Logical state of every light on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightsState {
    pub vu_level: PerSide<u8>,
    pub eq_mode_switch: PerSide<Color>,
    pub stems_mode_switch: PerSide<Color>,
    pub fx_toggle: PerSide<Color>,
    pub fx_switches: [Color; 4],
    pub fx_filter_switch: Color,
    pub prelisten_toggle: PerSide<Color>,
    pub bottom_leds: PerSide<[Color; BOTTOM_LEDS]>,
}

impl Default for LightsState {
    fn default() -> Self {
        Self {
            vu_level: PerSide::both(0),
            eq_mode_switch: PerSide::both(Color::Black),
            stems_mode_switch: PerSide::both(Color::Black),
            fx_toggle: PerSide::both(Color::Black),
            fx_switches: [Color::Black; 4],
            fx_filter_switch: Color::Black,
            prelisten_toggle: PerSide::both(Color::Black),
            bottom_leds: PerSide::both([Color::Black; BOTTOM_LEDS]),
        }
    }
}

impl LightsState {
    /// Encode the state into the wire layout.
    ///
    /// | bytes | content |
    /// |-------|---------|
    /// | 0 | report id `0x80` |
    /// | 1-10 / 11-20 | left / right VU segments |
    /// | 21, 22 | left eq / stems switch |
    /// | 23 | unused |
    /// | 24, 25 | right eq / stems switch |
    /// | 26, 27 | left / right fx toggle |
    /// | 28-31 | fx switches 1-4 |
    /// | 32 | fx filter switch |
    /// | 33, 34 | left / right prelisten |
    /// | 35-40 / 41-46 | left / right bottom LEDs 1-6 |
    pub fn serialize(&self) -> [u8; LIGHTS_REPORT_LEN] {
        let mut buf = [0u8; LIGHTS_REPORT_LEN];
        buf[0] = LIGHTS_REPORT_ID;

        for (base, side) in [(1, Side::Left), (11, Side::Right)] {
            let level = self.vu_level[side];
            for i in 0..VU_SEGMENTS {
                buf[base + usize::from(i)] = if i < level { VU_ON } else { VU_OFF };
            }
        }

        buf[21] = self.eq_mode_switch.left.code();
        buf[22] = self.stems_mode_switch.left.code();
        buf[23] = 0x00;
        buf[24] = self.eq_mode_switch.right.code();
        buf[25] = self.stems_mode_switch.right.code();
        buf[26] = self.fx_toggle.left.code();
        buf[27] = self.fx_toggle.right.code();
        for (i, color) in self.fx_switches.iter().enumerate() {
            buf[28 + i] = color.code();
        }
        buf[32] = self.fx_filter_switch.code();
        buf[33] = self.prelisten_toggle.left.code();
        buf[34] = self.prelisten_toggle.right.code();
        for (i, color) in self.bottom_leds.left.iter().enumerate() {
            buf[35 + i] = color.code();
        }
        for (i, color) in self.bottom_leds.right.iter().enumerate() {
            buf[41 + i] = color.code();
        }

        buf
    }

    /// Set a VU meter to `level` lit segments out of ten.
    pub fn set_vu(&mut self, side: Side, level: u8) {
        self.vu_level[side] = level.min(VU_SEGMENTS);
    }

    /// Set a multicolor light by group and name.
    #[allow(dead_code)]
    pub fn set_colored_light(
        &mut self,
        group: Group,
        name: LightName,
        color: Color,
    ) -> Result<(), ControlError> {
        let side = match group {
            Group::Main => {
                let slot = match name {
                    LightName::Fx1 => &mut self.fx_switches[0],
                    LightName::Fx2 => &mut self.fx_switches[1],
                    LightName::Fx3 => &mut self.fx_switches[2],
                    LightName::Fx4 => &mut self.fx_switches[3],
                    LightName::FxFilter => &mut self.fx_filter_switch,
                    _ => return Err(ControlError::InvalidLight { group, name }),
                };
                *slot = color;
                return Ok(());
            }
            Group::Left => Side::Left,
            Group::Right => Side::Right,
        };

        let slot = match name {
            LightName::EqModeSwitch => &mut self.eq_mode_switch[side],
            LightName::StemModeSwitch => &mut self.stems_mode_switch[side],
            LightName::FxToggle => &mut self.fx_toggle[side],
            LightName::Prelisten => &mut self.prelisten_toggle[side],
            LightName::BottomLed(n) if (1..=BOTTOM_LEDS).contains(&n) => {
                &mut self.bottom_leds[side][n - 1]
            }
            _ => return Err(ControlError::InvalidLight { group, name }),
        };
        *slot = color;
        Ok(())
    }

    /// Turn every light off.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Light state plus the last report actually sent to the device.
#[derive(Debug, Clone, Default)]
pub struct Lights {
    pub state: LightsState,
    last_sent: Option<[u8; LIGHTS_REPORT_LEN]>,
}

impl Lights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialize(&self) -> [u8; LIGHTS_REPORT_LEN] {
        self.state.serialize()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Send the lights report if it differs from the last one sent, or
    /// unconditionally when `force` is set. `force` also lifts the sink's
    /// own repeat suppression. Returns whether a report went out.
    pub fn flush(&mut self, force: bool, sink: &mut dyn ReportSink) -> Result<bool, DeviceError> {
        let report = self.serialize();
        if !force && self.last_sent.as_ref() == Some(&report) {
            return Ok(false);
        }

        sink.send_output_report(LIGHTS_REPORT_ID, &report[1..], force)?;
        self.last_sent = Some(report);
        debug!("lights report sent");
        Ok(true)
    }
}
