use std::time::{Duration, Instant};

use log::debug;

use super::framebuffer::{Framebuffer, BLANK, SCREEN_ROWS, SCREEN_WIDTH};
use crate::z1_controller::{DeviceError, ReportSink};

/// Default minimum spacing between two physical screen updates.
pub const SCREEN_UPDATE_COOLDOWN: Duration = Duration::from_millis(20);
/// Report id of the first screen; the others follow consecutively.
pub const SCREEN_REPORT_BASE: u8 = 0xE0;

const HEADER_LEN: usize = 8;
/// One row-pair message: header plus two rows of pixel strips.
pub const SCREEN_MESSAGE_LEN: usize = HEADER_LEN + 2 * SCREEN_WIDTH;
const ROW_PAIRS: usize = SCREEN_ROWS / 2;

type PairSnapshot = [u8; 2 * SCREEN_WIDTH];

/// A screen's framebuffer plus what the device is currently showing.
///
/// Updates go out as row pairs (0-1, 2-3, 4-5, 6-7), and only pairs that
/// changed since they were last sent. Sends are spaced by a cooldown: a flush
/// during the cooldown is remembered and performed once when it expires,
/// using whatever the buffer holds at that point.
#[derive(Debug, Clone)]
pub struct ScreenTransport {
    screen_id: u8,
    pub buffer: Framebuffer,
    sent: [Option<PairSnapshot>; ROW_PAIRS],
    cooldown: Duration,
    cooldown_until: Option<Instant>,
    pending: bool,
    debug: bool,
}

impl ScreenTransport {
    pub fn new(screen_id: u8, cooldown: Duration) -> Self {
        Self {
            screen_id,
            buffer: Framebuffer::new(),
            sent: [Some([BLANK; 2 * SCREEN_WIDTH]); ROW_PAIRS],
            cooldown,
            cooldown_until: None,
            pending: false,
            debug: false,
        }
    }

    #[allow(dead_code)]
    pub fn screen_id(&self) -> u8 {
        self.screen_id
    }

    pub fn report_id(&self) -> u8 {
        SCREEN_REPORT_BASE + self.screen_id
    }

    #[allow(dead_code)]
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown_until.is_some()
    }

    /// Forget what the device shows so the next send covers every pair.
    pub fn invalidate(&mut self) {
        self.sent = [None; ROW_PAIRS];
    }

    /// Request an update. Sends right away unless a cooldown is running, in
    /// which case the request is coalesced into the trailing send.
    pub fn flush(
        &mut self,
        now: Instant,
        debug: bool,
        sink: &mut dyn ReportSink,
    ) -> Result<usize, DeviceError> {
        self.debug = debug;
        if self.cooldown_until.is_some() {
            self.pending = true;
            return Ok(0);
        }
        self.cooldown_until = Some(now + self.cooldown);
        self.send_or_retry(sink)
    }

    /// Drive the cooldown timer.
    pub fn poll(&mut self, now: Instant, sink: &mut dyn ReportSink) -> Result<usize, DeviceError> {
        match self.cooldown_until {
            Some(until) if now >= until => {}
            _ => return Ok(0),
        }
        if !self.pending {
            self.cooldown_until = None;
            return Ok(0);
        }
        self.pending = false;
        self.cooldown_until = Some(now + self.cooldown);
        self.send_or_retry(sink)
    }

    /// Send, and on failure leave a request pending so the unsent pairs go
    /// out when the cooldown expires.
    fn send_or_retry(&mut self, sink: &mut dyn ReportSink) -> Result<usize, DeviceError> {
        let result = self.perform_send(sink);
        if result.is_err() {
            self.pending = true;
        }
        result
    }

    /// Send now regardless of the cooldown, dropping any pending request.
    pub fn flush_immediate(&mut self, sink: &mut dyn ReportSink) -> Result<usize, DeviceError> {
        self.pending = false;
        self.cooldown_until = None;
        self.perform_send(sink)
    }

    /// Send every changed row pair. Returns the number of messages sent.
    fn perform_send(&mut self, sink: &mut dyn ReportSink) -> Result<usize, DeviceError> {
        let report_id = self.report_id();
        let mut sent = 0;

        for pair in 0..ROW_PAIRS {
            let first_row = pair * 2;
            let rows = self.buffer.rows();
            let mut current = [0u8; 2 * SCREEN_WIDTH];
            current[..SCREEN_WIDTH].copy_from_slice(&rows[first_row]);
            current[SCREEN_WIDTH..].copy_from_slice(&rows[first_row + 1]);

            if self.sent[pair].as_ref() == Some(&current) {
                continue;
            }

            let message = encode_row_pair(first_row as u16, &current);
            if self.debug {
                debug!(
                    "screen 0x{report_id:02x} rows {}-{}: {}",
                    first_row,
                    first_row + 1,
                    hex_dump(&message)
                );
            }
            sink.send_output_report(report_id, &message, true)?;
            self.sent[pair] = Some(current);
            sent += 1;
        }

        Ok(sent)
    }
}

/// Frame two rows as a screen message: `x`, `y`, width and height as
/// little-endian u16 values followed by the pixel strips.
fn encode_row_pair(first_row: u16, rows: &PairSnapshot) -> [u8; SCREEN_MESSAGE_LEN] {
    let mut message = [0u8; SCREEN_MESSAGE_LEN];
    message[0..2].copy_from_slice(&0u16.to_le_bytes());
    message[2..4].copy_from_slice(&first_row.to_le_bytes());
    message[4..6].copy_from_slice(&(SCREEN_WIDTH as u16).to_le_bytes());
    message[6..8].copy_from_slice(&2u16.to_le_bytes());
    message[HEADER_LEN..].copy_from_slice(rows);
    message
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The left, centre and right screens.
#[derive(Debug, Clone)]
pub struct Screens {
    pub screens: [ScreenTransport; 3],
}

impl Screens {
    pub const LEFT: usize = 0;
    pub const CENTER: usize = 1;
    pub const RIGHT: usize = 2;

    pub fn new(cooldown: Duration) -> Self {
        Self {
            screens: [
                ScreenTransport::new(0, cooldown),
                ScreenTransport::new(1, cooldown),
                ScreenTransport::new(2, cooldown),
            ],
        }
    }

    pub fn clear_all(&mut self) {
        for screen in self.screens.iter_mut() {
            screen.buffer.clear();
        }
    }

    pub fn invalidate_all(&mut self) {
        for screen in self.screens.iter_mut() {
            screen.invalidate();
        }
    }

    pub fn flush_all(
        &mut self,
        now: Instant,
        debug: bool,
        sink: &mut dyn ReportSink,
    ) -> Result<(), DeviceError> {
        for screen in self.screens.iter_mut() {
            screen.flush(now, debug, sink)?;
        }
        Ok(())
    }

    pub fn poll_all(&mut self, now: Instant, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        for screen in self.screens.iter_mut() {
            screen.poll(now, sink)?;
        }
        Ok(())
    }

    pub fn flush_all_immediate(&mut self, sink: &mut dyn ReportSink) -> Result<(), DeviceError> {
        for screen in self.screens.iter_mut() {
            screen.flush_immediate(sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::z1_controller::mock::RecordingSink;

    const COOLDOWN: Duration = Duration::from_millis(20);

    #[test]
    fn unchanged_buffer_sends_nothing() {
        let mut screen = ScreenTransport::new(0, COOLDOWN);
        let mut sink = RecordingSink::default();
        assert_eq!(screen.flush(Instant::now(), false, &mut sink).unwrap(), 0);
        assert!(sink.reports.is_empty());
    }

    #[test]
    fn single_pixel_in_row_three_sends_rows_two_and_three() {
        let mut screen = ScreenTransport::new(1, COOLDOWN);
        let mut sink = RecordingSink::default();
        screen.buffer.set_pixel(7, 3 * 8 + 2, true);

        assert_eq!(screen.flush(Instant::now(), false, &mut sink).unwrap(), 1);
        assert_eq!(sink.reports.len(), 1);

        let (report_id, message) = &sink.reports[0];
        assert_eq!(*report_id, 0xE1);
        assert_eq!(message.len(), SCREEN_MESSAGE_LEN);
        assert_eq!(&message[..8], &[0x00, 0x00, 0x02, 0x00, 0x80, 0x00, 0x02, 0x00]);
        assert!(message[8..8 + SCREEN_WIDTH].iter().all(|&b| b == BLANK));
        assert_eq!(message[8 + SCREEN_WIDTH + 7], !(1u8 << 2));
    }

    #[test]
    fn invalidate_resends_every_pair() {
        let mut screen = ScreenTransport::new(2, COOLDOWN);
        let mut sink = RecordingSink::default();
        screen.invalidate();
        assert_eq!(screen.flush(Instant::now(), false, &mut sink).unwrap(), 4);
        let offsets: Vec<u8> = sink.reports.iter().map(|(_, m)| m[2]).collect();
        assert_eq!(offsets, vec![0, 2, 4, 6]);
        assert!(sink.reports.iter().all(|(id, _)| *id == 0xE2));
    }

    #[test]
    fn second_flush_without_changes_is_skipped() {
        let mut screen = ScreenTransport::new(0, COOLDOWN);
        let mut sink = RecordingSink::default();
        let start = Instant::now();
        screen.buffer.draw_box(0, 0, 128, 64, true);
        assert_eq!(screen.flush(start, false, &mut sink).unwrap(), 4);
        assert_eq!(screen.flush_immediate(&mut sink).unwrap(), 0);
        assert_eq!(sink.reports.len(), 4);
    }

    #[test]
    fn requests_during_cooldown_coalesce_into_one_trailing_send() {
        let mut screen = ScreenTransport::new(0, COOLDOWN);
        let mut sink = RecordingSink::default();
        let start = Instant::now();

        screen.buffer.set_pixel(0, 0, true);
        screen.flush(start, false, &mut sink).unwrap();
        assert_eq!(sink.reports.len(), 1);
        assert!(screen.is_cooling_down());

        screen.buffer.set_pixel(0, 20, true);
        screen.flush(start + Duration::from_millis(5), false, &mut sink).unwrap();
        screen.buffer.set_pixel(0, 40, true);
        screen.flush(start + Duration::from_millis(10), false, &mut sink).unwrap();
        assert_eq!(sink.reports.len(), 1);

        // drawn after both requests but before expiry
        screen.buffer.set_pixel(0, 60, true);
        screen.poll(start + Duration::from_millis(15), &mut sink).unwrap();
        assert_eq!(sink.reports.len(), 1);

        let expiry = start + COOLDOWN;
        assert_eq!(screen.poll(expiry, &mut sink).unwrap(), 3);
        let offsets: Vec<u8> = sink.reports[1..].iter().map(|(_, m)| m[2]).collect();
        assert_eq!(offsets, vec![2, 4, 6]);
        assert_eq!(sink.reports[3].1[8 + SCREEN_WIDTH], !(1u8 << 4));
        assert!(screen.is_cooling_down());

        // nothing requested during the second cooldown
        screen.poll(expiry + COOLDOWN, &mut sink).unwrap();
        assert!(!screen.is_cooling_down());
        assert_eq!(sink.reports.len(), 4);
    }

    #[test]
    fn expiry_without_requests_returns_to_idle() {
        let mut screen = ScreenTransport::new(0, COOLDOWN);
        let mut sink = RecordingSink::default();
        let start = Instant::now();
        screen.flush(start, false, &mut sink).unwrap();
        screen.poll(start + COOLDOWN, &mut sink).unwrap();
        assert!(!screen.is_cooling_down());

        screen.buffer.set_pixel(1, 1, true);
        assert_eq!(
            screen
                .flush(start + COOLDOWN + Duration::from_millis(1), false, &mut sink)
                .unwrap(),
            1
        );
    }

    #[test]
    fn failed_send_is_retried_next_time() {
        let mut screen = ScreenTransport::new(0, COOLDOWN);
        let mut sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        screen.buffer.set_pixel(3, 3, true);
        assert!(screen.flush_immediate(&mut sink).is_err());
        sink.fail = false;
        assert_eq!(screen.flush_immediate(&mut sink).unwrap(), 1);
    }

    #[test]
    fn timed_out_flush_goes_out_at_expiry() {
        let mut screen = ScreenTransport::new(0, COOLDOWN);
        let mut sink = RecordingSink {
            fail_once: Some(rusb::Error::Timeout),
            ..Default::default()
        };
        let start = Instant::now();
        screen.buffer.set_pixel(3, 3, true);
        assert!(screen.flush(start, false, &mut sink).is_err());
        assert!(sink.reports.is_empty());

        assert_eq!(screen.poll(start + COOLDOWN, &mut sink).unwrap(), 1);
        assert_eq!(sink.reports_for(0xE0).len(), 1);
    }

    #[test]
    fn screens_use_consecutive_report_ids() {
        let mut screens = Screens::new(COOLDOWN);
        let mut sink = RecordingSink::default();
        screens.invalidate_all();
        screens.flush_all(Instant::now(), false, &mut sink).unwrap();
        assert_eq!(sink.reports_for(0xE0).len(), 4);
        assert_eq!(sink.reports_for(0xE1).len(), 4);
        assert_eq!(sink.reports_for(0xE2).len(), 4);
    }
}
