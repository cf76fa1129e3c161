use std::{collections::HashMap, time::Duration};

use log::{debug, info, warn};
use rusb::{Context, DeviceHandle, Error, UsbContext};

use crate::config::DeviceSettings;

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("no controller with id {vendor_id:04x}:{product_id:04x} found")]
    NotFound { vendor_id: u16, product_id: u16 },
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),
    #[error("short write for report 0x{report_id:02x}: {written} of {expected} bytes")]
    ShortWrite {
        report_id: u8,
        written: usize,
        expected: usize,
    },
}

impl DeviceError {
    /// Whether the controller has gone away and the session should end.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, DeviceError::Usb(Error::NoDevice))
    }

    /// Whether the transfer may succeed when retried later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DeviceError::Usb(Error::Timeout | Error::Interrupted | Error::Overflow)
                | DeviceError::ShortWrite { .. }
        )
    }
}

/// Destination for output reports.
pub trait ReportSink {
    /// Send `data` as output report `report_id`.
    ///
    /// A report identical to the last one sent under the same id is skipped
    /// unless `allow_repeat` is set.
    fn send_output_report(
        &mut self,
        report_id: u8,
        data: &[u8],
        allow_repeat: bool,
    ) -> Result<(), DeviceError>;
}

/// Last payload sent under each report id.
#[derive(Debug, Clone, Default)]
pub struct ReportHistory {
    last: HashMap<u8, Vec<u8>>,
}

impl ReportHistory {
    /// Whether `data` has to go out: always with `allow_repeat`, otherwise
    /// only when it differs from the last payload sent under `report_id`.
    pub fn should_send(&self, report_id: u8, data: &[u8], allow_repeat: bool) -> bool {
        allow_repeat
            || self
                .last
                .get(&report_id)
                .map_or(true, |last| last.as_slice() != data)
    }

    pub fn record(&mut self, report_id: u8, data: &[u8]) {
        self.last.insert(report_id, data.to_vec());
    }
}

/// USB connection to the Z1 MK2.
///
/// Input reports are read from the interrupt IN endpoint; output reports are
/// written to the interrupt OUT endpoint prefixed with their report id.
pub struct Z1Controller {
    _context: Context,
    handle: DeviceHandle<Context>,
    interface: u8,
    in_endpoint: u8,
    out_endpoint: u8,
    input_buf: [u8; 64],
    read_timeout: Duration,
    write_timeout: Duration,
    history: ReportHistory,
}

impl Z1Controller {
    /// Connect to the first controller matching `settings` on the USB bus.
    pub fn connect(settings: &DeviceSettings) -> Result<Self, DeviceError> {
        let context = Context::new()?;
        let mut handle = None;

        for device in context.devices()?.iter() {
            let desc = device.device_descriptor()?;
            if desc.vendor_id() == settings.vendor_id && desc.product_id() == settings.product_id {
                handle = Some(device.open()?);
                break;
            }
        }

        let handle = handle.ok_or(DeviceError::NotFound {
            vendor_id: settings.vendor_id,
            product_id: settings.product_id,
        })?;

        if let Err(err) = handle.set_auto_detach_kernel_driver(true) {
            debug!("kernel driver auto-detach unavailable: {err}");
        }
        handle.claim_interface(settings.interface)?;

        info!(
            "connected to controller {:04x}:{:04x}",
            settings.vendor_id, settings.product_id
        );

        Ok(Self {
            _context: context,
            handle,
            interface: settings.interface,
            in_endpoint: settings.in_endpoint,
            out_endpoint: settings.out_endpoint,
            input_buf: [0; 64],
            read_timeout: Duration::from_millis(settings.timeout_ms),
            write_timeout: Duration::from_millis(settings.write_timeout_ms),
            history: ReportHistory::default(),
        })
    }

    /// Perform a single read, returning the raw frame if one arrived before
    /// the timeout.
    pub fn poll_once(&mut self) -> Result<Option<Vec<u8>>, DeviceError> {
        match self
            .handle
            .read_interrupt(self.in_endpoint, &mut self.input_buf, self.read_timeout)
        {
            Ok(len) => Ok(Some(self.input_buf[..len].to_vec())),
            Err(Error::Timeout) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Give the interface back to the system.
    pub fn release(&mut self) {
        if let Err(err) = self.handle.release_interface(self.interface) {
            warn!("failed to release interface {}: {err}", self.interface);
        }
    }
}

impl ReportSink for Z1Controller {
    fn send_output_report(
        &mut self,
        report_id: u8,
        data: &[u8],
        allow_repeat: bool,
    ) -> Result<(), DeviceError> {
        if !self.history.should_send(report_id, data, allow_repeat) {
            return Ok(());
        }

        let mut message = Vec::with_capacity(data.len() + 1);
        message.push(report_id);
        message.extend_from_slice(data);

        let written = self
            .handle
            .write_interrupt(self.out_endpoint, &message, self.write_timeout)?;
        if written != message.len() {
            return Err(DeviceError::ShortWrite {
                report_id,
                written,
                expected: message.len(),
            });
        }

        self.history.record(report_id, data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_suppresses_repeats_unless_allowed() {
        let mut history = ReportHistory::default();
        assert!(history.should_send(0x80, &[1, 2], false));

        history.record(0x80, &[1, 2]);
        assert!(!history.should_send(0x80, &[1, 2], false));
        assert!(history.should_send(0x80, &[1, 2], true));
        assert!(history.should_send(0x80, &[1, 3], false));
        // ids are tracked separately
        assert!(history.should_send(0xE0, &[1, 2], false));
    }

    #[test]
    fn transient_errors_are_not_disconnects() {
        for err in [Error::Timeout, Error::Interrupted, Error::Overflow] {
            let err = DeviceError::Usb(err);
            assert!(err.is_transient());
            assert!(!err.is_disconnect());
        }
        let gone = DeviceError::Usb(Error::NoDevice);
        assert!(gone.is_disconnect());
        assert!(!gone.is_transient());
        assert!(!DeviceError::Usb(Error::Io).is_transient());
    }
}
