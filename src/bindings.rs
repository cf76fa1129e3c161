//! Mapping between the surface and the mixer's named parameters.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::colors::Color;
use crate::config::ColorConfig;
use crate::mixer::{eq_rack, fx_rack, scale_to_crossfade, scale_to_gain, Mixer};
use crate::screen::{Framebuffer, Screens};
use crate::timers::DeferredQueue;
use crate::z1_controller::{
    Button, FxSwitch, InputTracker, Knob, LightsState, Side, BOTTOM_LEDS, VU_SEGMENTS,
};

/// Delay before re-sending the fx knob after a preset load, giving the mixer
/// time to settle the new chain.
pub const PRESET_SETTLE_DELAY: Duration = Duration::from_millis(1);

const MASTER: &str = "[Master]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeferredAction {
    /// Set the channel's fx super knob again; a preset load resets it.
    ReapplyFxKnob { side: Side, value: f64 },
}

/// Apply a postponed action. Safe to run after the state it touches changed.
pub fn apply_deferred(action: DeferredAction, mixer: &mut dyn Mixer) {
    match action {
        DeferredAction::ReapplyFxKnob { side, value } => {
            mixer.set_value(&fx_rack(side.channel()), "super1", value);
        }
    }
}

/// Push the changes between the tracker's last two frames into the mixer.
///
/// Returns whether a light-affecting parameter changed.
pub fn update_mixer_from_input(
    tracker: &InputTracker,
    mixer: &mut dyn Mixer,
    deferred: &mut DeferredQueue<DeferredAction>,
    now: Instant,
    debugging: bool,
) -> bool {
    let mut lights_changed = false;

    if let Some(value) = tracker.knob_if_changed(Knob::MainVolume) {
        mixer.set_value(MASTER, "gain", scale_to_gain(value));
    }
    if let Some(value) = tracker.knob_if_changed(Knob::HeadphoneMix) {
        mixer.set_value(MASTER, "headMix", scale_to_crossfade(value));
    }
    if let Some(value) = tracker.knob_if_changed(Knob::HeadphoneVolume) {
        mixer.set_value(MASTER, "headGain", scale_to_gain(value));
    }
    if let Some(value) = tracker.knob_if_changed(Knob::Crossfader) {
        mixer.set_value(MASTER, "crossfader", scale_to_crossfade(value));
    }

    for side in Side::BOTH {
        let channel = side.channel();
        let eq = eq_rack(channel);
        let fx = fx_rack(channel);

        if let Some(value) = tracker.knob_if_changed(Knob::Gain(side)) {
            mixer.set_value(channel, "pregain", scale_to_gain(value));
        }
        if let Some(value) = tracker.knob_if_changed(Knob::Hi(side)) {
            mixer.set_value(&eq, "parameter3", scale_to_gain(value));
        }
        if let Some(value) = tracker.knob_if_changed(Knob::Mid(side)) {
            mixer.set_value(&eq, "parameter2", scale_to_gain(value));
        }
        if let Some(value) = tracker.knob_if_changed(Knob::Low(side)) {
            mixer.set_value(&eq, "parameter1", scale_to_gain(value));
        }
        if let Some(value) = tracker.knob_if_changed(Knob::Fx(side)) {
            mixer.set_value(&fx, "super1", value);
        }
        if let Some(value) = tracker.knob_if_changed(Knob::Fader(side)) {
            mixer.set_value(channel, "volume", value);
        }

        if tracker.was_pressed(Button::FxToggle(side)) {
            mixer.toggle(&fx, "enabled");
            lights_changed = true;
            if debugging {
                debug!("FX toggled for channel {channel}");
            }
        }

        if tracker.was_pressed(Button::Prelisten(side)) {
            mixer.toggle(channel, "pfl");
            lights_changed = true;
            if debugging {
                debug!("Prelisten toggled for channel {channel}");
            }
        }

        for switch in FxSwitch::ALL {
            if !tracker.was_pressed(Button::Fx(switch)) {
                continue;
            }
            let preset = switch.preset();
            let available = mixer.get_value(&fx, "num_chain_presets");
            if (preset as f64) < available {
                debug!("Loading quick effect chain preset {preset}/{available} for channel {channel}");
                mixer.set_value(&fx, "loaded_chain_preset", preset as f64);
                lights_changed = true;

                let value = tracker.current().report().value(Knob::Fx(side));
                deferred.schedule(
                    now,
                    PRESET_SETTLE_DELAY,
                    DeferredAction::ReapplyFxKnob { side, value },
                );
            } else {
                warn!(
                    "Attempt to load quick effect chain preset {preset}/{available}, but no such preset exists"
                );
            }
        }
    }

    lights_changed
}

/// Loaded chain preset of a channel, if it is one of the five selectable ones.
fn loaded_preset(mixer: &dyn Mixer, side: Side) -> Option<usize> {
    let value = mixer
        .get_value(&fx_rack(side.channel()), "loaded_chain_preset")
        .round();
    (1.0..=5.0).contains(&value).then_some(value as usize)
}

/// Recompute every light from the mixer's state.
pub fn update_lights_from_mixer(lights: &mut LightsState, colors: &ColorConfig, mixer: &dyn Mixer) {
    let eq_switch = colors.eq_switch.resolve_default(colors.theme).dim();
    let stems_switch = colors.stems_switch.resolve_default(colors.theme).dim();
    lights.eq_mode_switch.left = eq_switch;
    lights.eq_mode_switch.right = eq_switch;
    lights.stems_mode_switch.left = stems_switch;
    lights.stems_mode_switch.right = stems_switch;

    let active: Vec<usize> = Side::BOTH
        .into_iter()
        .filter_map(|side| loaded_preset(mixer, side))
        .collect();
    for switch in FxSwitch::ALL {
        let preset = switch.preset();
        let color = colors.fx_color(preset).dim_when(!active.contains(&preset));
        match switch {
            FxSwitch::Filter => lights.fx_filter_switch = color,
            _ => lights.fx_switches[preset - 1] = color,
        }
    }

    let prelisten = colors.prelisten_toggle.resolve_default(colors.theme);

    for side in Side::BOTH {
        let channel = side.channel();

        lights.fx_toggle[side] = match loaded_preset(mixer, side) {
            None => Color::Black,
            Some(preset) => {
                let enabled = mixer.get_value(&fx_rack(channel), "enabled") != 0.0;
                colors.fx_color(preset).dim_when(!enabled)
            }
        };

        let pfl = mixer.get_value(channel, "pfl") != 0.0;
        lights.prelisten_toggle[side] = prelisten.dim_when(!pfl);

        let vu = (mixer.get_value(channel, "VuMeter") * f64::from(VU_SEGMENTS)).ceil();
        lights.set_vu(side, vu.clamp(0.0, f64::from(VU_SEGMENTS)) as u8);

        let beat_active = mixer.get_value(channel, "beat_active") != 0.0;
        for index in 0..BOTTOM_LEDS {
            lights.bottom_leds[side][index] = colors.bottom_led(index).dim_when(!beat_active);
        }
    }
}

/// Inverse of [`scale_to_gain`], for drawing.
fn gain_position(gain: f64) -> f64 {
    if gain < 1.0 {
        gain / 2.0
    } else {
        (gain - 1.0) / 6.0 + 0.5
    }
}

/// Inverse of [`scale_to_crossfade`], for drawing.
fn crossfade_position(value: f64) -> f64 {
    (value + 1.0) / 2.0
}

fn draw_channel_page(fb: &mut Framebuffer, mixer: &dyn Mixer, side: Side) {
    let channel = side.channel();
    let eq = eq_rack(channel);
    let fx = fx_rack(channel);
    fb.clear();

    let title = match side {
        Side::Left => "Channel 1",
        Side::Right => "Channel 2",
    };
    let pfl = mixer.get_value(channel, "pfl") != 0.0;
    fb.draw_text(title, 1, 0, 0, 10, 1, pfl);

    fb.draw_horizontal_gauge(0, 18, 104, 6, gain_position(mixer.get_value(channel, "pregain")));

    for (i, parameter) in ["parameter3", "parameter2", "parameter1"].into_iter().enumerate() {
        let x = 20 * i as i32;
        fb.draw_eq_gauge(x, 28, 16, 36, gain_position(mixer.get_value(&eq, parameter)));
    }
    fb.draw_eq_gauge(64, 28, 16, 36, mixer.get_value(&fx, "super1"));

    fb.draw_vertical_gauge(110, 18, 18, 46, mixer.get_value(channel, "volume"));
}

fn draw_main_page(fb: &mut Framebuffer, mixer: &dyn Mixer) {
    fb.clear();
    fb.draw_text("Main", 1, 0, 0, 12, 1, false);

    fb.draw_horizontal_gauge(0, 18, 128, 6, gain_position(mixer.get_value(MASTER, "gain")));
    fb.draw_horizontal_gauge(0, 30, 60, 6, gain_position(mixer.get_value(MASTER, "headGain")));
    fb.draw_horizontal_gauge(
        68,
        30,
        60,
        6,
        crossfade_position(mixer.get_value(MASTER, "headMix")),
    );
    fb.draw_horizontal_gauge(
        0,
        48,
        128,
        16,
        crossfade_position(mixer.get_value(MASTER, "crossfader")),
    );
}

/// Redraw the three screen pages from the mixer's state. Only the buffers
/// change; sending is left to the transports.
pub fn draw_screens(screens: &mut Screens, mixer: &dyn Mixer) {
    draw_channel_page(&mut screens.screens[Screens::LEFT].buffer, mixer, Side::Left);
    draw_main_page(&mut screens.screens[Screens::CENTER].buffer, mixer);
    draw_channel_page(&mut screens.screens[Screens::RIGHT].buffer, mixer, Side::Right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixer::ParameterStore;
    use crate::z1_controller::InputReport;

    fn tracker_with(frames: &[InputReport]) -> InputTracker {
        let mut tracker = InputTracker::new();
        for frame in frames {
            tracker.push(frame.clone());
        }
        tracker
    }

    #[test]
    fn first_frame_does_not_touch_knob_parameters() {
        let mut mixer = ParameterStore::new();
        let mut deferred = DeferredQueue::new();
        let tracker = tracker_with(&[InputReport {
            pot_left_fader: 4095,
            ..Default::default()
        }]);
        update_mixer_from_input(&tracker, &mut mixer, &mut deferred, Instant::now(), false);
        assert!(mixer.is_empty());
    }

    #[test]
    fn moved_knobs_are_scaled_into_parameters() {
        let mut mixer = ParameterStore::new();
        let mut deferred = DeferredQueue::new();
        let tracker = tracker_with(&[
            InputReport::default(),
            InputReport {
                pot_main_volume: 4095,
                pot_crossfader: 4095,
                pot_right_hi: 4095,
                pot_left_fader: 4095,
                ..Default::default()
            },
        ]);
        let changed =
            update_mixer_from_input(&tracker, &mut mixer, &mut deferred, Instant::now(), false);

        assert!(!changed);
        assert_eq!(mixer.get_value("[Master]", "gain"), 4.0);
        assert_eq!(mixer.get_value("[Master]", "crossfader"), 1.0);
        assert_eq!(
            mixer.get_value("[EqualizerRack1_[Channel2]_Effect1]", "parameter3"),
            4.0
        );
        assert_eq!(mixer.get_value("[Channel1]", "volume"), 1.0);
        assert_eq!(mixer.len(), 4);
    }

    #[test]
    fn prelisten_press_toggles_pfl() {
        let mut mixer = ParameterStore::new();
        let mut deferred = DeferredQueue::new();
        let pressed = InputReport {
            button_right_prelisten: true,
            ..Default::default()
        };
        let tracker = tracker_with(&[InputReport::default(), pressed.clone()]);
        assert!(update_mixer_from_input(
            &tracker,
            &mut mixer,
            &mut deferred,
            Instant::now(),
            true
        ));
        assert_eq!(mixer.get_value("[Channel2]", "pfl"), 1.0);
        assert_eq!(mixer.get_value("[Channel1]", "pfl"), 0.0);

        // still held: no second toggle
        let tracker = tracker_with(&[pressed.clone(), pressed]);
        update_mixer_from_input(&tracker, &mut mixer, &mut deferred, Instant::now(), false);
        assert_eq!(mixer.get_value("[Channel2]", "pfl"), 1.0);
    }

    #[test]
    fn fx_switch_loads_preset_and_defers_knob() {
        let mut mixer = ParameterStore::with_chain_presets(6);
        let mut deferred = DeferredQueue::new();
        let now = Instant::now();
        let tracker = tracker_with(&[
            InputReport::default(),
            InputReport {
                button_fx3: true,
                pot_left_fx: 4095,
                ..Default::default()
            },
        ]);

        assert!(update_mixer_from_input(&tracker, &mut mixer, &mut deferred, now, false));
        assert_eq!(
            mixer.get_value("[QuickEffectRack1_[Channel1]]", "loaded_chain_preset"),
            3.0
        );
        assert_eq!(
            mixer.get_value("[QuickEffectRack1_[Channel2]]", "loaded_chain_preset"),
            3.0
        );
        assert_eq!(deferred.len(), 2);

        // the preset load reset the knob on the mixer side
        mixer.set_value("[QuickEffectRack1_[Channel1]]", "super1", 0.5);
        for action in deferred.drain_due(now + PRESET_SETTLE_DELAY) {
            apply_deferred(action, &mut mixer);
        }
        assert_eq!(mixer.get_value("[QuickEffectRack1_[Channel1]]", "super1"), 1.0);
        assert_eq!(mixer.get_value("[QuickEffectRack1_[Channel2]]", "super1"), 0.0);
    }

    #[test]
    fn missing_preset_is_a_no_op() {
        let mut mixer = ParameterStore::with_chain_presets(3);
        let mut deferred = DeferredQueue::new();
        let tracker = tracker_with(&[
            InputReport::default(),
            InputReport {
                button_fx_filter: true,
                ..Default::default()
            },
        ]);
        assert!(!update_mixer_from_input(
            &tracker,
            &mut mixer,
            &mut deferred,
            Instant::now(),
            false
        ));
        assert_eq!(
            mixer.get_value("[QuickEffectRack1_[Channel1]]", "loaded_chain_preset"),
            0.0
        );
        assert!(deferred.is_empty());
    }

    #[test]
    fn idle_mixer_shows_dimmed_theme() {
        let mut lights = LightsState::default();
        let colors = ColorConfig::default();
        update_lights_from_mixer(&mut lights, &colors, &ParameterStore::new());

        assert_eq!(lights.eq_mode_switch.left, Color::LightOrangeDim);
        assert_eq!(lights.stems_mode_switch.right, Color::LightOrangeDim);
        assert_eq!(lights.fx_switches, [Color::RedDim, Color::GreenDim, Color::BlueDim, Color::MagentaDim]);
        assert_eq!(lights.fx_filter_switch, Color::DarkOrangeDim);
        assert_eq!(lights.fx_toggle.left, Color::Black);
        assert_eq!(lights.prelisten_toggle.right, Color::LightOrangeDim);
        assert_eq!(lights.vu_level.left, 0);
        assert_eq!(lights.bottom_leds.left, [Color::LightOrangeDim; BOTTOM_LEDS]);
    }

    #[test]
    fn active_state_lights_up() {
        let mut mixer = ParameterStore::new();
        mixer.set_value("[QuickEffectRack1_[Channel2]]", "loaded_chain_preset", 2.0);
        mixer.set_value("[QuickEffectRack1_[Channel2]]", "enabled", 1.0);
        mixer.set_value("[QuickEffectRack1_[Channel1]]", "loaded_chain_preset", 5.0);
        mixer.set_value("[Channel1]", "pfl", 1.0);
        mixer.set_value("[Channel1]", "VuMeter", 0.42);
        mixer.set_value("[Channel2]", "beat_active", 1.0);

        let mut lights = LightsState::default();
        update_lights_from_mixer(&mut lights, &ColorConfig::default(), &mixer);

        assert_eq!(lights.fx_switches[1], Color::Green);
        assert_eq!(lights.fx_switches[0], Color::RedDim);
        assert_eq!(lights.fx_filter_switch, Color::DarkOrange);
        assert_eq!(lights.fx_toggle.right, Color::Green);
        assert_eq!(lights.fx_toggle.left, Color::DarkOrangeDim);
        assert_eq!(lights.prelisten_toggle.left, Color::LightOrange);
        assert_eq!(lights.vu_level.left, 5);
        assert_eq!(lights.bottom_leds.right, [Color::LightOrange; BOTTOM_LEDS]);
        assert_eq!(lights.bottom_leds.left, [Color::LightOrangeDim; BOTTOM_LEDS]);
    }

    #[test]
    fn vu_meter_is_clamped() {
        let mut mixer = ParameterStore::new();
        mixer.set_value("[Channel2]", "VuMeter", 3.0);
        mixer.set_value("[Channel1]", "VuMeter", -1.0);
        let mut lights = LightsState::default();
        update_lights_from_mixer(&mut lights, &ColorConfig::default(), &mixer);
        assert_eq!(lights.vu_level.right, VU_SEGMENTS);
        assert_eq!(lights.vu_level.left, 0);
    }
    #[test]
    fn channel_pages_follow_the_mixer() {
        let mut mixer = ParameterStore::new();
        mixer.set_value("[Channel1]", "volume", 1.0);
        mixer.set_value("[Channel1]", "pfl", 1.0);
        let mut screens = Screens::new(Duration::from_millis(20));
        draw_screens(&mut screens, &mixer);

        let left = &screens.screens[Screens::LEFT].buffer;
        let right = &screens.screens[Screens::RIGHT].buffer;
        assert!(left.pixel(119, 30));
        assert!(!right.pixel(119, 30));
        // prelisten inverts the title cell background
        assert!(left.pixel(0, 0));
        assert!(!right.pixel(0, 0));
    }

    #[test]
    fn main_page_shows_crossfader() {
        let mut mixer = ParameterStore::new();
        mixer.set_value("[Master]", "crossfader", -1.0);
        let mut screens = Screens::new(Duration::from_millis(20));
        draw_screens(&mut screens, &mixer);
        assert!(!screens.screens[Screens::CENTER].buffer.pixel(1, 55));

        mixer.set_value("[Master]", "crossfader", 1.0);
        draw_screens(&mut screens, &mixer);
        assert!(screens.screens[Screens::CENTER].buffer.pixel(126, 55));
    }

    #[test]
    fn drawing_inverts_the_scaling() {
        for v in [0.0, 0.25, 0.5, 0.8, 1.0] {
            assert!((gain_position(scale_to_gain(v)) - v).abs() < 1e-9);
            assert!((crossfade_position(scale_to_crossfade(v)) - v).abs() < 1e-9);
        }
    }
}
