mod bindings;
mod colors;
mod config;
mod error;
mod mixer;
mod screen;
mod surface;
mod timers;
mod z1_controller;

use std::{env, path::PathBuf, time::Instant};

use log::{debug, info, warn};

use config::Settings;
use error::AppError;
use mixer::{MidiMixer, Mixer, ParameterStore};
use surface::Surface;
use z1_controller::{DeviceError, Z1Controller};

fn main() -> Result<(), AppError> {
    let settings_path = env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref())?;

    let default_level = if settings.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let store = ParameterStore::with_chain_presets(settings.chain_presets);
    let mixer: Box<dyn Mixer> = match settings.midi_port.as_deref() {
        Some(port) => Box::new(MidiMixer::connect(port, store)?),
        None => {
            info!("no MIDI port configured, parameters stay local");
            Box::new(store)
        }
    };

    let mut controller = Z1Controller::connect(&settings.device)?;
    let mut surface = Surface::new(settings, mixer, Instant::now());

    let result = surface
        .start(Instant::now(), &mut controller)
        .and_then(|()| run(&mut surface, &mut controller));

    let result = match result {
        Err(err) if err.is_disconnect() => {
            info!("controller disconnected");
            Ok(())
        }
        other => other,
    };

    if let Err(err) = surface.shutdown(&mut controller) {
        debug!("could not blank the controller: {err}");
    }
    controller.release();

    result.map_err(AppError::from)
}

/// Read frames and run timer work until the device goes away or fails
/// for good.
fn run(surface: &mut Surface, controller: &mut Z1Controller) -> Result<(), DeviceError> {
    loop {
        let frame = match controller.poll_once() {
            Ok(frame) => frame,
            Err(err) if err.is_transient() => {
                warn!("read failed, continuing: {err}");
                None
            }
            Err(err) => return Err(err),
        };
        if let Some(frame) = frame {
            surface.handle_frame(&frame, Instant::now(), controller)?;
        }
        surface.tick(Instant::now(), controller)?;
    }
}
