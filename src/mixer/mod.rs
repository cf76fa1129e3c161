mod midi;
mod store;

pub use midi::{MidiError, MidiMixer};
pub use store::ParameterStore;

/// Named-parameter access to the mixing engine.
///
/// Parameters are addressed by a group such as `[Channel1]` and a name such
/// as `pregain`, and hold a single number.
pub trait Mixer {
    fn get_value(&self, group: &str, name: &str) -> f64;
    fn set_value(&mut self, group: &str, name: &str, value: f64);

    /// Flip a boolean parameter between 0 and 1.
    fn toggle(&mut self, group: &str, name: &str) {
        let value = self.get_value(group, name);
        self.set_value(group, name, if value == 0.0 { 1.0 } else { 0.0 });
    }
}

/// Quick effect rack group of a channel group.
pub fn fx_rack(channel: &str) -> String {
    format!("[QuickEffectRack1_{channel}]")
}

/// Equalizer group of a channel group.
pub fn eq_rack(channel: &str) -> String {
    format!("[EqualizerRack1_{channel}_Effect1]")
}

/// Map 0-1 onto 0-4 with the midpoint at unity: the lower half covers 0-1
/// linearly and the upper half 1-4.
pub fn scale_to_gain(value: f64) -> f64 {
    if value < 0.5 {
        value * 2.0
    } else {
        (value - 0.5) * 6.0 + 1.0
    }
}

/// Map 0-1 onto -1-1.
pub fn scale_to_crossfade(value: f64) -> f64 {
    value * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_scaling_is_unity_at_midpoint() {
        assert_eq!(scale_to_gain(0.0), 0.0);
        assert_eq!(scale_to_gain(0.25), 0.5);
        assert_eq!(scale_to_gain(0.5), 1.0);
        assert_eq!(scale_to_gain(1.0), 4.0);
    }

    #[test]
    fn crossfade_scaling_is_symmetric() {
        assert_eq!(scale_to_crossfade(0.0), -1.0);
        assert_eq!(scale_to_crossfade(0.5), 0.0);
        assert_eq!(scale_to_crossfade(1.0), 1.0);
    }

    #[test]
    fn rack_group_names() {
        assert_eq!(fx_rack("[Channel1]"), "[QuickEffectRack1_[Channel1]]");
        assert_eq!(eq_rack("[Channel2]"), "[EqualizerRack1_[Channel2]_Effect1]");
    }

    #[test]
    fn toggle_flips_between_zero_and_one() {
        let mut store = ParameterStore::new();
        store.toggle("[Channel1]", "pfl");
        assert_eq!(store.get_value("[Channel1]", "pfl"), 1.0);
        store.toggle("[Channel1]", "pfl");
        assert_eq!(store.get_value("[Channel1]", "pfl"), 0.0);
    }
}
