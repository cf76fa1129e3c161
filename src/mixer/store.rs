use std::collections::HashMap;

use super::{fx_rack, Mixer};
use crate::z1_controller::Side;

/// In-memory parameter table. Unknown parameters read as zero.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    values: HashMap<(String, String), f64>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store advertising `presets` quick effect chain presets on every
    /// channel.
    pub fn with_chain_presets(presets: u32) -> Self {
        let mut store = Self::new();
        for side in Side::BOTH {
            store.set_value(&fx_rack(side.channel()), "num_chain_presets", f64::from(presets));
        }
        store
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Mixer for ParameterStore {
    fn get_value(&self, group: &str, name: &str) -> f64 {
        self.values
            .get(&(group.to_string(), name.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    fn set_value(&mut self, group: &str, name: &str, value: f64) {
        self.values
            .insert((group.to_string(), name.to_string()), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_parameters_read_zero() {
        let store = ParameterStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_value("[Master]", "gain"), 0.0);
    }

    #[test]
    fn values_are_keyed_by_group_and_name() {
        let mut store = ParameterStore::new();
        store.set_value("[Channel1]", "volume", 0.7);
        store.set_value("[Channel2]", "volume", 0.2);
        assert_eq!(store.get_value("[Channel1]", "volume"), 0.7);
        assert_eq!(store.get_value("[Channel2]", "volume"), 0.2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn chain_presets_are_seeded_for_both_channels() {
        let store = ParameterStore::with_chain_presets(4);
        assert_eq!(
            store.get_value("[QuickEffectRack1_[Channel1]]", "num_chain_presets"),
            4.0
        );
        assert_eq!(
            store.get_value("[QuickEffectRack1_[Channel2]]", "num_chain_presets"),
            4.0
        );
    }
}
