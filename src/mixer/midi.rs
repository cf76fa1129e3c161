use log::{debug, info, warn};
use midir::{MidiOutput, MidiOutputConnection};

use super::{eq_rack, fx_rack, Mixer, ParameterStore};
use crate::z1_controller::Side;

const CLIENT_NAME: &str = "z1-surface";
const CONTROL_CHANGE: u8 = 0xB0;
const MASTER_CHANNEL: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum MidiError {
    #[error("failed to initialise MIDI output: {0}")]
    MidiInit(String),
    #[error("no MIDI output port matching \"{0}\" was found")]
    PortNotFound(String),
    #[error("failed to open MIDI connection: {0}")]
    Connection(String),
}

/// Where a parameter goes on the MIDI side: channel, controller number and
/// the parameter range mapped onto 0-127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidiBinding {
    pub channel: u8,
    pub controller: u8,
    pub min: f64,
    pub max: f64,
}

impl MidiBinding {
    const fn new(channel: u8, controller: u8, min: f64, max: f64) -> Self {
        Self {
            channel,
            controller,
            min,
            max,
        }
    }

    /// Scale `value` from the parameter range onto a 7-bit controller value.
    pub fn controller_value(&self, value: f64) -> u8 {
        let span = self.max - self.min;
        if span <= 0.0 || value.is_nan() {
            return 0;
        }
        let unit = ((value - self.min) / span).clamp(0.0, 1.0);
        (unit * 127.0).round() as u8
    }

    pub fn message(&self, value: f64) -> [u8; 3] {
        [
            CONTROL_CHANGE | (self.channel & 0x0F),
            self.controller & 0x7F,
            self.controller_value(value),
        ]
    }
}

/// MIDI routing for the parameters the surface drives. Channel strips use
/// MIDI channels 1 and 2, the master section channel 3.
pub fn midi_binding(group: &str, name: &str) -> Option<MidiBinding> {
    if group == "[Master]" {
        return match name {
            "gain" => Some(MidiBinding::new(MASTER_CHANNEL, 0x10, 0.0, 4.0)),
            "headMix" => Some(MidiBinding::new(MASTER_CHANNEL, 0x11, -1.0, 1.0)),
            "headGain" => Some(MidiBinding::new(MASTER_CHANNEL, 0x12, 0.0, 4.0)),
            "crossfader" => Some(MidiBinding::new(MASTER_CHANNEL, 0x13, -1.0, 1.0)),
            _ => None,
        };
    }

    for (channel, side) in Side::BOTH.into_iter().enumerate() {
        let channel = channel as u8;
        let strip = side.channel();
        if group == strip {
            return match name {
                "pregain" => Some(MidiBinding::new(channel, 0x00, 0.0, 4.0)),
                "volume" => Some(MidiBinding::new(channel, 0x01, 0.0, 1.0)),
                "pfl" => Some(MidiBinding::new(channel, 0x02, 0.0, 1.0)),
                _ => None,
            };
        }
        if group == eq_rack(strip) {
            return match name {
                "parameter1" => Some(MidiBinding::new(channel, 0x03, 0.0, 4.0)),
                "parameter2" => Some(MidiBinding::new(channel, 0x04, 0.0, 4.0)),
                "parameter3" => Some(MidiBinding::new(channel, 0x05, 0.0, 4.0)),
                _ => None,
            };
        }
        if group == fx_rack(strip) {
            return match name {
                "super1" => Some(MidiBinding::new(channel, 0x06, 0.0, 1.0)),
                "enabled" => Some(MidiBinding::new(channel, 0x07, 0.0, 1.0)),
                "loaded_chain_preset" => Some(MidiBinding::new(channel, 0x08, 0.0, 127.0)),
                _ => None,
            };
        }
    }

    None
}

/// A [`Mixer`] which keeps parameter values locally and forwards every bound
/// parameter change as a MIDI control change.
pub struct MidiMixer {
    store: ParameterStore,
    connection: MidiOutputConnection,
    port_name: String,
}

impl MidiMixer {
    /// Open the first output port whose name contains `port_hint`
    /// (case-insensitive); an empty hint picks the first port.
    pub fn connect(port_hint: &str, store: ParameterStore) -> Result<Self, MidiError> {
        let midi_out =
            MidiOutput::new(CLIENT_NAME).map_err(|err| MidiError::MidiInit(err.to_string()))?;
        let ports = midi_out.ports();

        let found = if port_hint.trim().is_empty() {
            ports.first().cloned()
        } else {
            let hint = port_hint.to_lowercase();
            ports
                .iter()
                .find(|port| {
                    midi_out
                        .port_name(port)
                        .map(|name| name.to_lowercase().contains(&hint))
                        .unwrap_or(false)
                })
                .cloned()
        };
        let target_port = found.ok_or_else(|| MidiError::PortNotFound(port_hint.to_string()))?;

        let port_name = midi_out
            .port_name(&target_port)
            .unwrap_or_else(|_| "<unknown>".into());

        let connection = midi_out
            .connect(&target_port, "z1-surface-out")
            .map_err(|err| MidiError::Connection(err.to_string()))?;

        info!("forwarding parameters to MIDI port {port_name}");

        Ok(Self {
            store,
            connection,
            port_name,
        })
    }
}

impl Mixer for MidiMixer {
    fn get_value(&self, group: &str, name: &str) -> f64 {
        self.store.get_value(group, name)
    }

    fn set_value(&mut self, group: &str, name: &str, value: f64) {
        let previous = self.store.get_value(group, name);
        self.store.set_value(group, name, value);

        let Some(binding) = midi_binding(group, name) else {
            return;
        };
        if binding.controller_value(previous) == binding.controller_value(value) {
            return;
        }
        let message = binding.message(value);
        debug!("midi ({}): {group} {name} -> {:?}", self.port_name, message);
        if let Err(err) = self.connection.send(&message) {
            warn!(
                "midi ({}): failed to send {group} {name}: {err}",
                self.port_name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_parameters_use_master_channel() {
        let binding = midi_binding("[Master]", "crossfader").unwrap();
        assert_eq!(binding.message(-1.0), [0xB2, 0x13, 0]);
        assert_eq!(binding.message(0.0), [0xB2, 0x13, 64]);
        assert_eq!(binding.message(1.0), [0xB2, 0x13, 127]);
    }

    #[test]
    fn channel_strips_use_their_own_channel() {
        assert_eq!(midi_binding("[Channel1]", "volume").unwrap().channel, 0);
        assert_eq!(midi_binding("[Channel2]", "volume").unwrap().channel, 1);
        assert_eq!(
            midi_binding("[EqualizerRack1_[Channel2]_Effect1]", "parameter3")
                .unwrap()
                .controller,
            0x05
        );
        assert_eq!(
            midi_binding("[QuickEffectRack1_[Channel1]]", "enabled")
                .unwrap()
                .controller,
            0x07
        );
    }

    #[test]
    fn unbound_parameters_have_no_route() {
        assert!(midi_binding("[Channel1]", "VuMeter").is_none());
        assert!(midi_binding("[QuickEffectRack1_[Channel1]]", "num_chain_presets").is_none());
        assert!(midi_binding("[Sampler1]", "volume").is_none());
    }

    #[test]
    fn controller_values_are_clamped() {
        let binding = midi_binding("[Channel1]", "pregain").unwrap();
        assert_eq!(binding.controller_value(-2.0), 0);
        assert_eq!(binding.controller_value(9.0), 127);
        assert_eq!(binding.controller_value(f64::NAN), 0);
        assert_eq!(binding.controller_value(1.0), 32);
    }
}
