use std::time::Instant;

use log::{debug, warn};

use crate::bindings::{self, DeferredAction};
use crate::config::Settings;
use crate::mixer::Mixer;
use crate::screen::Screens;
use crate::timers::{DeferredQueue, Interval};
use crate::z1_controller::{
    ButtonEventKind, DeviceError, InputReport, InputTracker, Lights, ReportSink,
};

/// Everything the running surface owns: the last two input frames, the
/// light and screen state, the mixer and the pending timer work.
pub struct Surface {
    settings: Settings,
    tracker: InputTracker,
    lights: Lights,
    screens: Screens,
    mixer: Box<dyn Mixer>,
    deferred: DeferredQueue<DeferredAction>,
    lights_timer: Interval,
}

impl Surface {
    pub fn new(settings: Settings, mixer: Box<dyn Mixer>, now: Instant) -> Self {
        let screens = Screens::new(settings.screen_cooldown());
        let lights_timer = Interval::start(settings.lights_refresh(), now);
        Self {
            settings,
            tracker: InputTracker::new(),
            lights: Lights::new(),
            screens,
            mixer,
            deferred: DeferredQueue::new(),
            lights_timer,
        }
    }

    #[allow(dead_code)]
    pub fn mixer(&self) -> &dyn Mixer {
        self.mixer.as_ref()
    }

    #[allow(dead_code)]
    pub fn mixer_mut(&mut self) -> &mut dyn Mixer {
        self.mixer.as_mut()
    }

    #[allow(dead_code)]
    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    #[allow(dead_code)]
    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    #[allow(dead_code)]
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Bring the device in line with the current state: every light and the
    /// full contents of every screen.
    pub fn start(&mut self, now: Instant, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        bindings::draw_screens(&mut self.screens, self.mixer.as_ref());
        self.screens.invalidate_all();
        let result = self
            .refresh_lights(true, sink)
            .and_then(|()| self.screens.flush_all(now, self.settings.debug, sink));
        recover(result)
    }

    /// Process one inbound frame. Malformed frames are logged and dropped.
    ///
    /// Only errors which end the session are returned; a failed transfer is
    /// retried by the next refresh.
    pub fn handle_frame(
        &mut self,
        frame: &[u8],
        now: Instant,
        sink: &mut dyn ReportSink,
    ) -> Result<(), DeviceError> {
        let result = self.process_frame(frame, now, sink);
        recover(result)
    }

    /// Run timer work due at `now`. Errors are filtered like
    /// [`Surface::handle_frame`].
    pub fn tick(&mut self, now: Instant, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        let result = self.run_timers(now, sink);
        recover(result)
    }

    fn process_frame(
        &mut self,
        frame: &[u8],
        now: Instant,
        sink: &mut dyn ReportSink,
    ) -> Result<(), DeviceError> {
        let report = match InputReport::load(frame) {
            Ok(report) => report,
            Err(err) => {
                warn!("Error loading input message: {err}");
                return Ok(());
            }
        };
        self.tracker.push(report);

        if self.settings.debug {
            for event in self.tracker.button_events() {
                match event.kind {
                    ButtonEventKind::Pressed => debug!("{:?} pressed", event.button),
                    ButtonEventKind::Released => debug!("{:?} released", event.button),
                }
            }
        }

        let lights_changed = bindings::update_mixer_from_input(
            &self.tracker,
            self.mixer.as_mut(),
            &mut self.deferred,
            now,
            self.settings.debug,
        );
        if lights_changed {
            self.refresh_lights(false, sink)?;
        }

        self.redraw_screens(now, sink)
    }

    fn run_timers(&mut self, now: Instant, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        let actions = self.deferred.drain_due(now);
        let deferred_ran = !actions.is_empty();
        for action in actions {
            bindings::apply_deferred(action, self.mixer.as_mut());
        }
        if deferred_ran {
            self.redraw_screens(now, sink)?;
        }

        if self.lights_timer.due(now) {
            self.refresh_lights(false, sink)?;
        }

        self.screens.poll_all(now, sink)
    }

    /// Stop the timers and blank the surface.
    pub fn shutdown(&mut self, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        self.lights_timer.stop();
        self.deferred.clear();

        self.lights.reset();
        self.lights.flush(true, sink)?;

        self.screens.clear_all();
        self.screens.flush_all_immediate(sink)
    }

    fn refresh_lights(&mut self, force: bool, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        bindings::update_lights_from_mixer(
            &mut self.lights.state,
            &self.settings.colors,
            self.mixer.as_ref(),
        );
        self.lights.flush(force, sink)?;
        Ok(())
    }

    fn redraw_screens(&mut self, now: Instant, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        bindings::draw_screens(&mut self.screens, self.mixer.as_ref());
        self.screens.flush_all(now, self.settings.debug, sink)
    }
}

/// Swallow transfer errors worth retrying, logging them.
fn recover(result: Result<(), DeviceError>) -> Result<(), DeviceError> {
    match result {
        Err(err) if err.is_transient() => {
            warn!("transfer failed, will retry: {err}");
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::colors::Color;
    use crate::mixer::ParameterStore;
    use crate::z1_controller::mock::RecordingSink;

    const LIGHTS: u8 = 0x80;
    const MS: Duration = Duration::from_millis(1);

    fn surface(now: Instant) -> Surface {
        let settings = Settings::default();
        let store = ParameterStore::with_chain_presets(settings.chain_presets);
        Surface::new(settings, Box::new(store), now)
    }

    fn screen_messages(sink: &RecordingSink) -> usize {
        (0xE0..=0xE2).map(|id| sink.reports_for(id).len()).sum()
    }

    #[test]
    fn start_sends_lights_and_every_screen_pair() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface.start(now, &mut sink).unwrap();

        assert_eq!(sink.reports_for(LIGHTS).len(), 1);
        assert_eq!(screen_messages(&sink), 12);
        assert_eq!(surface.lights().state.eq_mode_switch.left, Color::LightOrangeDim);
    }

    #[test]
    fn malformed_frame_keeps_state() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface
            .handle_frame(&InputReport::default().encode(), now, &mut sink)
            .unwrap();
        let before = surface.tracker().current().clone();
        sink.clear();

        surface.handle_frame(&[0x02; 35], now, &mut sink).unwrap();
        surface.handle_frame(&[0x01; 10], now, &mut sink).unwrap();
        surface.handle_frame(&[], now, &mut sink).unwrap();

        assert_eq!(surface.tracker().current(), &before);
        assert!(sink.reports.is_empty());
    }

    #[test]
    fn prelisten_press_updates_mixer_and_lights() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface.start(now, &mut sink).unwrap();
        surface
            .handle_frame(&InputReport::default().encode(), now, &mut sink)
            .unwrap();
        sink.clear();

        let pressed = InputReport {
            button_left_prelisten: true,
            ..Default::default()
        };
        surface.handle_frame(&pressed.encode(), now, &mut sink).unwrap();

        assert_eq!(surface.mixer().get_value("[Channel1]", "pfl"), 1.0);
        let lights = sink.reports_for(LIGHTS);
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0][32], Color::LightOrange.code());
    }

    #[test]
    fn preset_load_reapplies_fx_knob_later() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface
            .handle_frame(&InputReport::default().encode(), now, &mut sink)
            .unwrap();

        let pressed = InputReport {
            button_fx2: true,
            pot_right_fx: 4095,
            ..Default::default()
        };
        surface.handle_frame(&pressed.encode(), now, &mut sink).unwrap();
        let rack = "[QuickEffectRack1_[Channel2]]";
        assert_eq!(surface.mixer().get_value(rack, "loaded_chain_preset"), 2.0);

        surface.mixer_mut().set_value(rack, "super1", 0.5);
        surface.tick(now, &mut sink).unwrap();
        assert_eq!(surface.mixer().get_value(rack, "super1"), 0.5);

        surface.tick(now + MS, &mut sink).unwrap();
        assert_eq!(surface.mixer().get_value(rack, "super1"), 1.0);
    }

    #[test]
    fn lights_refresh_on_interval() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface.start(now, &mut sink).unwrap();
        sink.clear();

        surface.mixer_mut().set_value("[Channel2]", "VuMeter", 0.5);
        surface.tick(now + 10 * MS, &mut sink).unwrap();
        assert!(sink.reports_for(LIGHTS).is_empty());

        surface.tick(now + 25 * MS, &mut sink).unwrap();
        let lights = sink.reports_for(LIGHTS);
        assert_eq!(lights.len(), 1);
        assert_eq!(&lights[0][10..15], &[0x7E; 5]);
    }

    #[test]
    fn knob_moves_inside_cooldown_coalesce() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface.start(now, &mut sink).unwrap();
        surface
            .handle_frame(&InputReport::default().encode(), now, &mut sink)
            .unwrap();
        sink.clear();

        for (i, fader) in [1000, 2000, 4095].into_iter().enumerate() {
            let report = InputReport {
                pot_left_fader: fader,
                ..Default::default()
            };
            surface
                .handle_frame(&report.encode(), now + (i as u32 + 1) * MS, &mut sink)
                .unwrap();
        }
        assert_eq!(screen_messages(&sink), 0);

        surface.tick(now + 20 * MS, &mut sink).unwrap();
        assert!(!sink.reports_for(0xE0).is_empty());
        assert!(surface.screens().screens[Screens::LEFT].buffer.pixel(119, 20));
    }

    #[test]
    fn shutdown_blanks_the_surface() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface.start(now, &mut sink).unwrap();
        sink.clear();

        surface.shutdown(&mut sink).unwrap();
        let lights = sink.reports_for(LIGHTS);
        assert_eq!(lights.len(), 1);
        assert!(lights[0].iter().all(|&b| b == 0));
        assert_eq!(screen_messages(&sink), 12);

        // no timer work after shutdown
        sink.clear();
        surface.tick(now + 100 * MS, &mut sink).unwrap();
        assert!(sink.reports_for(LIGHTS).is_empty());
    }

    #[test]
    fn timed_out_write_does_not_stop_the_surface() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink::default();
        surface.start(now, &mut sink).unwrap();
        surface
            .handle_frame(&InputReport::default().encode(), now, &mut sink)
            .unwrap();
        sink.clear();

        let pressed = InputReport {
            button_right_prelisten: true,
            ..Default::default()
        };
        sink.fail_once = Some(rusb::Error::Timeout);
        surface.handle_frame(&pressed.encode(), now, &mut sink).unwrap();
        assert_eq!(surface.mixer().get_value("[Channel2]", "pfl"), 1.0);
        assert!(sink.reports_for(LIGHTS).is_empty());

        // the refresh interval delivers the lights that failed
        surface.tick(now + 25 * MS, &mut sink).unwrap();
        let lights = sink.reports_for(LIGHTS);
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0][33], Color::LightOrange.code());
    }

    #[test]
    fn hard_errors_are_returned() {
        let now = Instant::now();
        let mut surface = surface(now);
        let mut sink = RecordingSink {
            fail_once: Some(rusb::Error::NoDevice),
            ..Default::default()
        };
        let err = surface.start(now, &mut sink).unwrap_err();
        assert!(err.is_disconnect());

        sink.fail = true;
        assert!(surface.tick(now + 25 * MS, &mut sink).is_err());
    }
}
