//! Recording report sink for tests.

use super::z1_controller::{DeviceError, ReportHistory, ReportSink};

/// Collects every report instead of sending it, suppressing repeats the way
/// the device connection does.
///
/// Setting `fail` makes every send return a USB I/O error; `fail_once` fails
/// only the next send with the given error.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub reports: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
    pub fail_once: Option<rusb::Error>,
    pub(crate) history: ReportHistory,
}

impl RecordingSink {
    pub fn reports_for(&self, report_id: u8) -> Vec<&[u8]> {
        self.reports
            .iter()
            .filter(|(id, _)| *id == report_id)
            .map(|(_, data)| data.as_slice())
            .collect()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl ReportSink for RecordingSink {
    fn send_output_report(
        &mut self,
        report_id: u8,
        data: &[u8],
        allow_repeat: bool,
    ) -> Result<(), DeviceError> {
        if let Some(err) = self.fail_once.take() {
            return Err(DeviceError::Usb(err));
        }
        if self.fail {
            return Err(DeviceError::Usb(rusb::Error::Io));
        }
        if !self.history.should_send(report_id, data, allow_repeat) {
            return Ok(());
        }
        self.history.record(report_id, data);
        self.reports.push((report_id, data.to_vec()));
        Ok(())
    }
}
