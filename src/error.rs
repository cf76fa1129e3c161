use crate::config::ConfigError;
use crate::mixer::MidiError;
use crate::z1_controller::DeviceError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error(transparent)]
    Midi(#[from] MidiError),
}
