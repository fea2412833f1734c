//! The display driver, which uses the command module at a slightly higher level. It owns the
//! cursor/addressing state machine and the text output path.
//!
//! The controller's auto-increment addressing is unreliable across panel variants, so the
//! driver shadows the hardware cursor in `segment`/`page` and re-asserts absolute addressing
//! after every line wrap instead of relying on hardware auto-wrap.

use core::fmt;

use log::{debug, error, info, warn};

use crate::command::{Command, ComScanDirection, MemoryMode};
use crate::config::Config;
use crate::contrast;
use crate::font::Font;
use crate::interface::DisplayInterface;
use crate::Error;

/// Both SSD1306 signature bits in the status byte must read back set.
const STATUS_SIGNATURE: u8 = 0x03;

/// Scratch buffer sized to the controller's absolute maximum display RAM, which bounds any
/// batched text or clear write on any supported geometry.
const SCRATCH_LEN: usize = 128 * 8;

/// The driver for one SSD1306 panel.
///
/// Bus traffic is gated on successful [`identify`](Display::identify); before that (or after
/// a failed re-identification) every operation is a no-op. Once identified, commands and
/// pixel writes are best-effort: transport failures are logged and swallowed.
pub struct Display<DI, F>
where
    DI: DisplayInterface,
    F: Font,
{
    iface: DI,
    config: Config,
    font: F,
    /// Current horizontal pixel offset, always < panel width.
    segment: u8,
    /// Current 8-row band index, always < panel page count.
    page: u8,
    mem_mode: MemoryMode,
    min_contrast: u8,
    max_contrast: u8,
    display_on: bool,
    present: bool,
    scratch: [u8; SCRATCH_LEN],
}

impl<DI, F> Display<DI, F>
where
    DI: DisplayInterface,
    F: Font,
{
    /// Construct a new driver for a panel of a particular geometry. Panics if the geometry
    /// is outside what the controller can address or the font does not fit the panel.
    pub fn new(iface: DI, config: Config, font: F) -> Self {
        if !config.geometry.is_valid() || font.char_width() > config.geometry.width {
            panic!("Display geometry not supported by SSD1306.");
        }
        Display {
            iface,
            config,
            font,
            segment: 0,
            page: 0,
            // POR default of the controller.
            mem_mode: MemoryMode::Page,
            min_contrast: 0,
            max_contrast: 255,
            display_on: false,
            present: false,
            scratch: [0; SCRATCH_LEN],
        }
    }

    /// Verify that the device on the bus is an SSD1306 by reading its status byte and
    /// checking the signature bits. On any failure the driver is left gated off and every
    /// other operation stays a no-op until a later `identify` succeeds.
    pub fn identify(&mut self) -> Result<(), Error> {
        self.present = false;
        let status = self.iface.read_status().map_err(|_| Error::Bus)?;
        if status & STATUS_SIGNATURE != STATUS_SIGNATURE {
            error!("ssd1306: status {:#04x} does not match signature", status);
            return Err(Error::NotRecognized(status));
        }
        self.present = true;
        Ok(())
    }

    /// Issue the full initialization sequence, clear the screen, reset the contrast bounds
    /// to [0, 255] and apply the configured default contrast. Safe to call again at any time
    /// to recover a panel that lost power or got reset.
    pub fn reconfigure(&mut self) {
        let g = self.config.geometry;
        self.command(Command::SetMultiplexRatio(g.height));
        self.set_offset(0);
        self.command(Command::SetStartLine(0));
        self.command(Command::SetSegmentRemap(self.config.segment_remap));
        self.command(Command::SetComScanDirection(self.config.com_scan_direction));
        self.command(Command::SetComPins(self.config.com_pins));
        self.command(Command::SetClockDivider(self.config.clock_divider));
        self.command(Command::EnableChargePump(true));
        self.set_memory_mode(MemoryMode::Horizontal);
        self.command(Command::SetAllPixelsOn(false));
        self.set_inverse(false);
        self.set_scroll_active(false);
        self.set_display_on(true);
        self.clear();
        self.min_contrast = 0;
        self.max_contrast = 255;
        self.set_contrast(self.config.default_contrast);
    }

    /// Turn the panel drive on or off. RAM contents are retained while off.
    pub fn set_display_on(&mut self, on: bool) {
        self.display_on = on;
        self.command(Command::SetDisplayOn(on));
    }

    /// Activate or deactivate scrolling. The driver never sets up a scroll area, so only
    /// deactivation is useful; activation is exposed for symmetry with the hardware.
    pub fn set_scroll_active(&mut self, active: bool) {
        self.command(Command::SetScrollActive(active));
    }

    /// Set the COM scan direction, flipping the image vertically.
    pub fn set_scan_direction(&mut self, direction: ComScanDirection) {
        self.command(Command::SetComScanDirection(direction));
    }

    /// Set the memory addressing mode.
    pub fn set_memory_mode(&mut self, mode: MemoryMode) {
        self.mem_mode = mode;
        self.command(Command::SetMemoryMode(mode));
    }

    /// Pan the display up or down by `offset` rows.
    pub fn set_offset(&mut self, offset: u8) {
        self.command(Command::SetDisplayOffset(offset));
    }

    /// Display with inverted or normal polarity.
    pub fn set_inverse(&mut self, inverse: bool) {
        self.command(Command::SetInverse(inverse));
    }

    /// Restrict the contrast values `set_contrast` will apply. Inputs outside the bounds
    /// clamp to the nearest bound.
    pub fn set_contrast_bounds(&mut self, min: u8, max: u8) {
        self.min_contrast = min;
        self.max_contrast = max;
    }

    /// Apply a contrast setting, deriving the dependent pre-charge and Vcom register values
    /// from it (see the `contrast` module), and switch the panel off when the applied value
    /// is zero and on otherwise. Returns the applied (clamped) contrast.
    pub fn set_contrast(&mut self, requested: u8) -> u8 {
        let levels = contrast::derive(requested, self.min_contrast, self.max_contrast);
        self.command(Command::SetPreCharge(levels.precharge));
        self.command(Command::SetContrast(levels.contrast));
        self.command(Command::SetVcomDeselect(levels.vcom));
        self.set_display_on(levels.contrast != 0);
        levels.contrast
    }

    /// Move the pixel cursor to an absolute segment, wrapping modulo the panel width, and
    /// re-issue the column address window. The module's column offset quirk is added on the
    /// wire only, never to the stored segment.
    pub fn set_segment_addr(&mut self, segment: u8) {
        let g = self.config.geometry;
        self.segment = segment % g.width;
        self.command(Command::SetColumnAddress(
            self.segment + g.column_offset,
            g.width + g.column_offset,
        ));
    }

    /// Move the pixel cursor to an absolute page, wrapping modulo the page count, and
    /// re-issue the page address window.
    pub fn set_page_addr(&mut self, page: u8) {
        let pages = self.config.geometry.pages();
        self.page = page % pages;
        self.command(Command::SetPageAddress(self.page, pages));
    }

    /// Place the text cursor on a character cell, `row` in pages and `col` in character
    /// cells from the left pad.
    pub fn set_text_cursor(&mut self, col: u8, row: u8) {
        let cw = self.font.char_width();
        let left_pad = self.config.geometry.left_pad;
        self.set_page_addr(row);
        self.set_segment_addr(col.wrapping_mul(cw).wrapping_add(left_pad));
    }

    /// Advance the cursor by one character cell. When the next cell would intrude on the
    /// right pad, wrap to the left pad of the next page (modulo the page count) and, if
    /// `update` is set, re-assert both address windows on the controller. Returns whether a
    /// wrap occurred.
    fn step_cursor(&mut self, update: bool) -> bool {
        let g = self.config.geometry;
        self.segment = self.segment.saturating_add(self.font.char_width());
        if self.segment >= g.width - g.right_pad {
            self.page += 1;
            if self.page == g.pages() {
                self.page = 0;
            }
            if update {
                self.set_page_addr(self.page);
                self.set_segment_addr(g.left_pad);
            } else {
                self.segment = g.left_pad;
            }
            return true;
        }
        false
    }

    /// Write one character at the current cursor position and advance the cursor. Always
    /// passes the code through, so this can terminate a formatted-output chain.
    pub fn put_char(&mut self, code: u8) -> u8 {
        let glyph = self.font.glyph(code);
        let gw = glyph.len();
        self.scratch[..gw].copy_from_slice(glyph);
        self.scratch[gw] = 0x00; // blank separator column
        self.flush_data(gw + 1);
        self.step_cursor(true);
        code
    }

    /// Write a string at the current cursor position, batching all glyph columns (plus the
    /// spare blank columns crossed at every line wrap) into one pixel-data submission, then
    /// re-assert the address windows at the final cursor position. At most one screenful of
    /// characters is written; the excess is silently dropped.
    pub fn put_string(&mut self, s: &str) {
        let gw = self.font.glyph_width() as usize;
        let spare = self.spare_columns();
        let capacity = self.capacity();
        let mut len = 0;
        let mut count = 0;
        for code in s.bytes() {
            if count == capacity || len + gw + 1 + spare > self.scratch.len() {
                break;
            }
            let glyph = self.font.glyph(code);
            self.scratch[len..len + gw].copy_from_slice(glyph);
            self.scratch[len + gw] = 0x00;
            len += gw + 1;
            count += 1;
            if self.step_cursor(false) {
                // The RAM pointer auto-increments through the spare columns at the end of
                // the line, so they must be blanked or they keep stale pixels.
                for pad in self.scratch[len..len + spare].iter_mut() {
                    *pad = 0x00;
                }
                len += spare;
            }
        }
        if count > 0 {
            self.flush_data(len);
        }
        self.set_page_addr(self.page);
        self.set_segment_addr(self.segment);
    }

    /// Blank the entire display RAM window and home the cursor.
    pub fn clear(&mut self) {
        let g = self.config.geometry;
        let total = g.width as usize * g.pages() as usize;
        self.set_text_cursor(0, 0);
        for b in self.scratch[..total].iter_mut() {
            *b = 0x00;
        }
        self.flush_data(total);
        self.set_text_cursor(0, 0);
    }

    /// Exercise the panel with text rows, gray bar patterns and a character grid fill.
    pub fn diagnostics(&mut self) {
        debug!("ssd1306: filling screen");
        self.set_text_cursor(0, 0);
        self.put_string("|00000000|");
        self.set_text_cursor(0, 1);
        self.put_string("+11111111+");
        self.set_text_cursor(0, 2);
        self.put_string("=22222222=");
        self.set_text_cursor(0, 3);
        self.put_string("[33333333]");
        self.set_text_cursor(0, 4);
        self.put_string("{44444444}");
        self.set_text_cursor(0, 5);
        self.put_string("(55555555)");

        debug!("ssd1306: writing bars");
        let width = self.config.geometry.width as usize;
        self.set_text_cursor(0, 0);
        for &fill in &[0x88, 0xCC, 0xEE, 0x77, 0x33, 0x11] {
            for b in self.scratch[..width].iter_mut() {
                *b = fill;
            }
            self.flush_data(width);
        }

        debug!("ssd1306: clearing the screen");
        self.clear();
        for i in 0..self.capacity() {
            self.put_char(0x20 + (i % 0x60) as u8);
        }
    }

    /// Log the cursor position against its bounds.
    pub fn report(&self) {
        let g = self.config.geometry;
        info!(
            "ssd1306: seg {}/{} page {}/{}",
            self.segment,
            g.width,
            self.page,
            g.pages()
        );
    }

    /// Current segment of the cursor within the current row.
    pub fn pos(&self) -> u8 {
        self.segment
    }

    /// Current page (text row) of the cursor.
    pub fn row(&self) -> u8 {
        self.page
    }

    /// Whether identification has succeeded and the driver is talking to the bus.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Whether the panel drive is on, as last commanded.
    pub fn is_on(&self) -> bool {
        self.display_on
    }

    /// The memory addressing mode last configured.
    pub fn memory_mode(&self) -> MemoryMode {
        self.mem_mode
    }

    /// Characters per screenful for the configured geometry and font.
    fn capacity(&self) -> usize {
        let g = self.config.geometry;
        let columns = (g.width - g.left_pad - g.right_pad) / self.font.char_width();
        columns as usize * g.pages() as usize
    }

    /// Blank pixel columns left over at the end of each text row.
    fn spare_columns(&self) -> usize {
        let g = self.config.geometry;
        ((g.width - g.left_pad - g.right_pad) % self.font.char_width()) as usize
    }

    fn command(&mut self, cmd: Command) {
        if !self.present {
            return;
        }
        if cmd.send(&mut self.iface).is_err() {
            warn!("ssd1306: command dropped, bus write failed");
        }
    }

    /// Transmit the first `len` bytes of the scratch buffer as pixel data.
    fn flush_data(&mut self, len: usize) {
        if !self.present {
            return;
        }
        let Self {
            ref mut iface,
            ref scratch,
            ..
        } = *self;
        if iface.send_data(&scratch[..len]).is_err() {
            warn!("ssd1306: pixel data dropped, bus write failed");
        }
    }
}

impl<DI, F> fmt::Write for Display<DI, F>
where
    DI: DisplayInterface,
    F: Font,
{
    /// Teletype-style output: `\r` returns to the left pad, `\n` moves to the start of the
    /// next row, anything else goes through `put_char`. With this, `write!` and `writeln!`
    /// work directly on the display.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for code in s.bytes() {
            match code {
                b'\r' => {
                    let left_pad = self.config.geometry.left_pad;
                    self.set_segment_addr(left_pad);
                }
                b'\n' => {
                    let next_row = self.page + 1;
                    self.set_text_cursor(0, next_row);
                }
                _ => {
                    self.put_char(code);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Geometry};
    use crate::font::Font5x7;
    use crate::interface::test_spy::{Sent, TestSpyInterface};
    use core::fmt::Write;

    macro_rules! cmds {
        ($($b:expr),*) => { Sent::Cmds(vec![$($b),*]) };
    }
    macro_rules! data {
        ($($b:expr),*) => { Sent::Data(vec![$($b),*]) };
    }

    /// A 64x48 shield display, identified and ready, with the spy's send log cleared.
    fn shield() -> (TestSpyInterface, Display<TestSpyInterface, Font5x7>) {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Config::new(Geometry::wemos_d1_mini()), Font5x7);
        disp.identify().unwrap();
        (di, disp)
    }

    #[test]
    #[should_panic]
    fn rejects_invalid_geometry() {
        let mut geometry = Geometry::standard_128x64();
        geometry.height = 60;
        let di = TestSpyInterface::new();
        let _ = Display::new(di.split(), Config::new(geometry), Font5x7);
    }

    #[test]
    fn identify_rejects_bad_signature() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Config::new(Geometry::wemos_d1_mini()), Font5x7);
        di.set_status(0x01);
        assert_eq!(disp.identify(), Err(crate::Error::NotRecognized(0x01)));
        assert!(!disp.is_present());

        // The driver is unusable until re-identified: nothing reaches the bus.
        disp.set_contrast(128);
        disp.put_char(b'A');
        disp.clear();
        di.check_multi(&[]);

        di.set_status(0x03);
        disp.identify().unwrap();
        assert!(disp.is_present());
        disp.set_display_on(true);
        di.check_multi(&[cmds![0xAF]]);
    }

    #[test]
    fn identify_reports_bus_failure() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), Config::new(Geometry::wemos_d1_mini()), Font5x7);
        di.set_bus_fault(true);
        assert_eq!(disp.identify(), Err(crate::Error::Bus));
        assert!(!disp.is_present());
    }

    #[test]
    fn commands_are_best_effort_after_bus_fault() {
        let (di, mut disp) = shield();
        di.set_bus_fault(true);
        // Failures are logged and swallowed; state is still tracked.
        assert_eq!(disp.set_contrast(0x55), 0x55);
        disp.put_char(b'A');
        assert!(disp.is_on());
        di.set_bus_fault(false);
        disp.set_display_on(false);
        di.check_multi(&[cmds![0xAE]]);
    }

    #[test]
    fn set_contrast_derives_dependent_registers() {
        let (di, mut disp) = shield();
        assert_eq!(disp.set_contrast(0x7F), 0x7F);
        di.check_multi(&[
            cmds![0xD9, 0x77], // pre-charge
            cmds![0x81, 0x7F], // contrast current
            cmds![0xDB, 0x20], // Vcom deselect
            cmds![0xAF],       // display on
        ]);
        assert!(disp.is_on());
    }

    #[test]
    fn zero_contrast_switches_display_off() {
        let (di, mut disp) = shield();
        assert_eq!(disp.set_contrast(0), 0);
        di.check_multi(&[
            cmds![0xD9, 0x11], // degenerate pre-charge forced to 0x11
            cmds![0x81, 0x00],
            cmds![0xDB, 0x00],
            cmds![0xAE], // display off
        ]);
        assert!(!disp.is_on());
    }

    #[test]
    fn set_contrast_respects_bounds() {
        let (_di, mut disp) = shield();
        disp.set_contrast_bounds(0x20, 0xE0);
        assert_eq!(disp.set_contrast(0x00), 0x20);
        assert_eq!(disp.set_contrast(0xFF), 0xE0);
        assert_eq!(disp.set_contrast(0x80), 0x80);
    }

    #[test]
    fn segment_addressing_applies_column_offset_on_wire_only() {
        let (di, mut disp) = shield();
        disp.set_segment_addr(12);
        assert_eq!(disp.pos(), 12);
        di.check_multi(&[cmds![0x21, 44, 96]]);
    }

    #[test]
    fn out_of_range_addresses_wrap_modulo() {
        let (di, mut disp) = shield();
        disp.set_segment_addr(64 + 5);
        assert_eq!(disp.pos(), 5);
        disp.set_page_addr(6 + 2);
        assert_eq!(disp.row(), 2);
        di.check_multi(&[cmds![0x21, 37, 96], cmds![0x22, 2, 6]]);
    }

    #[test]
    fn text_cursor_addresses_page_then_segment() {
        let (di, mut disp) = shield();
        disp.set_text_cursor(3, 2);
        assert_eq!(disp.pos(), 18);
        assert_eq!(disp.row(), 2);
        di.check_multi(&[cmds![0x22, 2, 6], cmds![0x21, 50, 96]]);
    }

    #[test]
    fn put_char_sends_glyph_with_separator() {
        let (di, mut disp) = shield();
        assert_eq!(disp.put_char(b'A'), b'A');
        assert_eq!(disp.pos(), 6);
        assert_eq!(disp.row(), 0);
        di.check_multi(&[data![0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00]]);
    }

    #[test]
    fn put_char_wraps_and_reasserts_addressing() {
        let (mut di, mut disp) = shield();
        // Column 10 stores segment 60, the last cell of the row; the next step passes the
        // right edge.
        disp.set_text_cursor(10, 0);
        di.clear();
        disp.put_char(b'!');
        di.check_multi(&[
            data![0x00, 0x00, 0x5F, 0x00, 0x00, 0x00],
            cmds![0x22, 1, 6],  // next page
            cmds![0x21, 32, 96], // back to the left pad (offset 32 on the wire)
        ]);
        assert_eq!(disp.pos(), 0);
        assert_eq!(disp.row(), 1);
    }

    #[test]
    fn cursor_invariant_holds_under_repeated_steps() {
        let (_di, mut disp) = shield();
        for _ in 0..500 {
            disp.put_char(b'x');
            assert!(disp.pos() < 64);
            assert!(disp.row() < 6);
        }
    }

    #[test]
    fn page_wraps_back_to_zero() {
        let (_di, mut disp) = shield();
        // 11 characters fit per row before the wrap fires; drive through all 6 pages.
        for _ in 0..6 * 11 {
            disp.put_char(b'x');
        }
        assert_eq!(disp.row(), 0);
    }

    #[test]
    fn put_string_batches_one_data_submission() {
        let (di, mut disp) = shield();
        disp.put_string("hi");
        let mut expect = Vec::new();
        expect.extend_from_slice(&[0x7F, 0x08, 0x04, 0x04, 0x78, 0x00]); // 'h'
        expect.extend_from_slice(&[0x00, 0x44, 0x7D, 0x40, 0x00, 0x00]); // 'i'
        di.check_multi(&[
            Sent::Data(expect),
            cmds![0x22, 0, 6],   // re-assert page
            cmds![0x21, 44, 96], // re-assert segment 12
        ]);
        assert_eq!(disp.pos(), 12);
    }

    #[test]
    fn put_string_pads_spare_columns_on_wrap() {
        let (di, mut disp) = shield();
        // 12 chars: wrap fires after the 11th, inserting the 4 spare columns of the 64px row.
        let s: String = core::iter::repeat('x').take(12).collect();
        disp.put_string(&s);
        let sent = di.sent();
        assert_eq!(sent.len(), 3);
        match &sent[0] {
            Sent::Data(bytes) => {
                assert_eq!(bytes.len(), 12 * 6 + 4);
                assert_eq!(&bytes[11 * 6..11 * 6 + 4], &[0, 0, 0, 0]);
            }
            other => panic!("expected data, got {:?}", other),
        }
        assert_eq!(disp.row(), 1);
        assert_eq!(disp.pos(), 6);
    }

    #[test]
    fn put_string_drops_excess_beyond_capacity() {
        let (di, mut disp) = shield();
        // Capacity is 10 columns x 6 rows = 60 characters; wraps fire after chars 11, 22,
        // 33, 44 and 55, each adding 4 spare columns.
        let s: String = core::iter::repeat('y').take(100).collect();
        disp.put_string(&s);
        let sent = di.sent();
        assert_eq!(sent.len(), 3);
        match &sent[0] {
            Sent::Data(bytes) => assert_eq!(bytes.len(), 60 * 6 + 5 * 4),
            other => panic!("expected data, got {:?}", other),
        }
        assert_eq!(disp.row(), 5);
        assert_eq!(disp.pos(), 30);
    }

    #[test]
    fn put_string_empty_only_reasserts_addressing() {
        let (di, mut disp) = shield();
        disp.put_string("");
        di.check_multi(&[cmds![0x22, 0, 6], cmds![0x21, 32, 96]]);
    }

    #[test]
    fn clear_blanks_every_page_and_homes_cursor() {
        let (di, mut disp) = shield();
        disp.clear();
        di.check_multi(&[
            cmds![0x22, 0, 6],
            cmds![0x21, 32, 96],
            Sent::Data(vec![0u8; 64 * 6]),
            cmds![0x22, 0, 6],
            cmds![0x21, 32, 96],
        ]);
        assert_eq!(disp.pos(), 0);
        assert_eq!(disp.row(), 0);
    }

    #[test]
    fn reconfigure_issues_init_sequence() {
        let (di, mut disp) = shield();
        disp.reconfigure();
        di.check_multi(&[
            cmds![0xA8, 47],   // multiplex ratio for 48 rows
            cmds![0xD3, 0],    // display offset
            cmds![0x40],       // start line 0
            cmds![0xA1],       // segment remap
            cmds![0xC8],       // COM scan decrement
            cmds![0xDA, 0x12], // COM pins
            cmds![0xD5, 0x80], // clock divider
            cmds![0x8D, 0x14], // charge pump on
            cmds![0x20, 0x00], // horizontal memory mode
            cmds![0xA4],       // all-pixels-on resume
            cmds![0xA6],       // normal polarity
            cmds![0x2E],       // scroll off
            cmds![0xAF],       // display on
            // clear
            cmds![0x22, 0, 6],
            cmds![0x21, 32, 96],
            Sent::Data(vec![0u8; 64 * 6]),
            cmds![0x22, 0, 6],
            cmds![0x21, 32, 96],
            // default contrast 128
            cmds![0xD9, 0x88],
            cmds![0x81, 128],
            cmds![0xDB, 0x20],
            cmds![0xAF],
        ]);
        assert_eq!(disp.memory_mode(), MemoryMode::Horizontal);
        assert!(disp.is_on());
    }

    #[test]
    fn diagnostics_writes_bar_patterns_and_fills_grid() {
        let (di, mut disp) = shield();
        disp.diagnostics();
        let bars: Vec<Vec<u8>> = di
            .sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Data(bytes) if bytes.len() == 64 => Some(bytes),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 6);
        for (bar, fill) in bars.iter().zip(&[0x88u8, 0xCC, 0xEE, 0x77, 0x33, 0x11]) {
            assert!(bar.iter().all(|b| b == fill));
        }
        // The grid fill ends after one screenful of characters.
        assert_eq!(disp.row(), 5);
        assert_eq!(disp.pos(), 30);
    }

    #[test]
    fn reconfigure_resets_contrast_bounds() {
        let (_di, mut disp) = shield();
        disp.set_contrast_bounds(0x40, 0x80);
        disp.reconfigure();
        assert_eq!(disp.set_contrast(0xFF), 0xFF);
    }

    #[test]
    fn fmt_write_advances_cursor() {
        let (_di, mut disp) = shield();
        write!(disp, "hi").unwrap();
        assert_eq!(disp.pos(), 12);
        assert_eq!(disp.row(), 0);
        writeln!(disp).unwrap();
        assert_eq!(disp.pos(), 0);
        assert_eq!(disp.row(), 1);
        write!(disp, "x\rY").unwrap();
        assert_eq!(disp.pos(), 6);
        assert_eq!(disp.row(), 1);
    }

    #[test]
    fn no_column_offset_on_standard_module() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(
            di.split(),
            Config::new(Geometry::standard_128x64()),
            Font5x7,
        );
        disp.identify().unwrap();
        disp.set_text_cursor(0, 0);
        di.check_multi(&[cmds![0x22, 0, 8], cmds![0x21, 0, 128]]);
    }
}
