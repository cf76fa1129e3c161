mod controls;
mod input_report;
mod input_tracker;
mod lights;
#[cfg(test)]
pub mod mock;
mod z1_controller;

#[allow(unused_imports)]
pub use controls::{
    Button, ButtonName, ControlError, FxSwitch, Group, Knob, KnobName, LightName, Side,
};
#[allow(unused_imports)]
pub use input_report::{FormatError, InputFrame, InputReport, INPUT_REPORT_LEN};
#[allow(unused_imports)]
pub use input_tracker::{ButtonEvent, ButtonEventKind, InputTracker};
#[allow(unused_imports)]
pub use lights::{Lights, LightsState, PerSide, BOTTOM_LEDS, LIGHTS_REPORT_LEN, VU_SEGMENTS};
pub use z1_controller::{DeviceError, ReportSink, Z1Controller};
