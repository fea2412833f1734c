//! The command set for the SSD1306.
//!
//! Note 1: The display RAM of the SSD1306 is arranged in 128 segments (pixel columns) and 8
//! pages, where each page is a band of 8 stacked pixel rows addressed together, for a total
//! max resolution of 128x64. Each data byte written to the RAM fills one segment of the
//! current page, LSB at the top. Smaller panels wire up a window of this RAM; some modules
//! additionally wire the window at a fixed column offset (see `config::Geometry`).

use crate::interface::DisplayInterface;

pub const NUM_SEGMENTS: u8 = 128;
pub const NUM_PIXEL_ROWS: u8 = 64;
pub const NUM_PAGES: u8 = 8;
pub const PIXEL_ROW_MAX: u8 = NUM_PIXEL_ROWS - 1;

/// The address increment behavior when writing image data, set with `SetMemoryMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryMode {
    /// The segment address increments as data is written, wrapping to the next page of the
    /// window set by `SetColumnAddress`/`SetPageAddress` when it passes the window's right
    /// edge.
    Horizontal,
    /// The page address increments as data is written, wrapping to the next segment when it
    /// passes the window's bottom edge.
    Vertical,
    /// Legacy page addressing: the segment address increments and wraps within the current
    /// page only; the page never advances automatically.
    Page,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image
/// vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComScanDirection {
    /// COM lines scan rows 0 to N-1, so that row address 0 is the first row of the display.
    Increment,
    /// COM lines scan rows N-1 to 0, so that row address 0 is the last row of the display.
    Decrement,
}

/// Setting of the COM deselect (Vcom) voltage level. Together with the pre-charge period this
/// is an analog timing parameter that affects perceived brightness; the contrast curve in
/// `contrast` derives it from the requested contrast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VcomDeselectLevel {
    /// 0.65 * Vcc.
    V0p65,
    /// 0.77 * Vcc.
    V0p77,
    /// 0.83 * Vcc.
    V0p83,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the contrast current. Range 0-255.
    SetContrast(u8),
    /// Set the pre-charge period register. The low nibble is phase 1 and the high nibble
    /// phase 2, in DCLKs; neither nibble may be zero on the wire (the contrast curve takes
    /// care of that).
    SetPreCharge(u8),
    /// Set the COM deselect voltage level.
    SetVcomDeselect(VcomDeselectLevel),
    /// Turn the display panel on or off. This only gates the panel drive; display RAM and
    /// all other registers are retained while off.
    SetDisplayOn(bool),
    /// Activate or deactivate scrolling. Activating scroll while no scroll area was set up
    /// corrupts display RAM, so the driver only ever deactivates it.
    SetScrollActive(bool),
    /// Set the COM scan direction. See enum for details.
    SetComScanDirection(ComScanDirection),
    /// Set the memory addressing mode. See `MemoryMode` for details.
    SetMemoryMode(MemoryMode),
    /// Set the display COM line offset, panning the image vertically. Range 0-63.
    SetDisplayOffset(u8),
    /// Set the segment start and end address window for RAM writes. The segment address
    /// pointer is reset to the start address. The driver passes window bounds already
    /// compensated for the module's column offset quirk, which on some panels lands the end
    /// address one past the last datasheet column; the controller tolerates this, so the
    /// range check accepts 0-128.
    SetColumnAddress(u8, u8),
    /// Set the page start and end address window for RAM writes. The page address pointer is
    /// reset to the start address. As with `SetColumnAddress` the driver passes its page
    /// *count* as the end address, so the range check accepts 0-8.
    SetPageAddress(u8, u8),
    /// Set the display start line, rolling the displayed image upwards. Range 0-63.
    SetStartLine(u8),
    /// Mirror the segment (column) mapping, flipping the image horizontally. Most modules
    /// are wired so that remap enabled gives left-to-right text.
    SetSegmentRemap(bool),
    /// Set the MUX ratio, the number of COM lines actively driven. Range 16-64; the driver
    /// passes the panel pixel height.
    SetMultiplexRatio(u8),
    /// Set the COM pins hardware configuration register. The value is module-specific; 0x12
    /// suits the common 128x64 and 64x48 modules.
    SetComPins(u8),
    /// Set the display clock divide ratio / oscillator frequency register.
    SetClockDivider(u8),
    /// Enable or disable the internal charge pump. Modules without an external Vcc supply
    /// need it enabled or the panel stays dark.
    EnableChargePump(bool),
    /// Light every pixel regardless of RAM contents (true), or resume displaying RAM
    /// contents (false).
    SetAllPixelsOn(bool),
    /// Display the RAM contents with inverted (true) or normal (false) polarity.
    SetInverse(bool),
}

macro_rules! ok_frame {
    ($buf:ident, [$b0:expr]) => {{
        $buf[0] = $b0;
        Ok(&$buf[..1])
    }};
    ($buf:ident, [$b0:expr, $b1:expr]) => {{
        $buf[0] = $b0;
        $buf[1] = $b1;
        Ok(&$buf[..2])
    }};
    ($buf:ident, [$b0:expr, $b1:expr, $b2:expr]) => {{
        $buf[0] = $b0;
        $buf[1] = $b1;
        $buf[2] = $b2;
        Ok(&$buf[..3])
    }};
}

impl Command {
    /// Encode the command into its 1-3 byte wire form and transmit it as a single framed
    /// command transaction. Out-of-range arguments are rejected before anything is sent.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), ()>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 3];
        let frame = match self {
            Command::SetContrast(contrast) => ok_frame!(arg_buf, [0x81, contrast]),
            Command::SetPreCharge(period) => ok_frame!(arg_buf, [0xD9, period]),
            Command::SetVcomDeselect(level) => ok_frame!(
                arg_buf,
                [
                    0xDB,
                    match level {
                        VcomDeselectLevel::V0p65 => 0x00,
                        VcomDeselectLevel::V0p77 => 0x20,
                        VcomDeselectLevel::V0p83 => 0x30,
                    }
                ]
            ),
            Command::SetDisplayOn(ena) => ok_frame!(
                arg_buf,
                [match ena {
                    true => 0xAF,
                    false => 0xAE,
                }]
            ),
            Command::SetScrollActive(ena) => ok_frame!(
                arg_buf,
                [match ena {
                    true => 0x2F,
                    false => 0x2E,
                }]
            ),
            Command::SetComScanDirection(direction) => ok_frame!(
                arg_buf,
                [match direction {
                    ComScanDirection::Increment => 0xC0,
                    ComScanDirection::Decrement => 0xC8,
                }]
            ),
            Command::SetMemoryMode(mode) => ok_frame!(
                arg_buf,
                [
                    0x20,
                    match mode {
                        MemoryMode::Horizontal => 0x00,
                        MemoryMode::Vertical => 0x01,
                        MemoryMode::Page => 0x02,
                    }
                ]
            ),
            Command::SetDisplayOffset(line) => match line {
                0..=PIXEL_ROW_MAX => ok_frame!(arg_buf, [0xD3, line]),
                _ => Err(()),
            },
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=NUM_SEGMENTS, 0..=NUM_SEGMENTS) => ok_frame!(arg_buf, [0x21, start, end]),
                _ => Err(()),
            },
            Command::SetPageAddress(start, end) => match (start, end) {
                (0..=NUM_PAGES, 0..=NUM_PAGES) => ok_frame!(arg_buf, [0x22, start, end]),
                _ => Err(()),
            },
            Command::SetStartLine(line) => match line {
                0..=PIXEL_ROW_MAX => ok_frame!(arg_buf, [0x40 | line]),
                _ => Err(()),
            },
            Command::SetSegmentRemap(ena) => ok_frame!(
                arg_buf,
                [match ena {
                    true => 0xA1,
                    false => 0xA0,
                }]
            ),
            Command::SetMultiplexRatio(ratio) => match ratio {
                16..=NUM_PIXEL_ROWS => ok_frame!(arg_buf, [0xA8, ratio - 1]),
                _ => Err(()),
            },
            Command::SetComPins(cfg) => ok_frame!(arg_buf, [0xDA, cfg]),
            Command::SetClockDivider(divider) => ok_frame!(arg_buf, [0xD5, divider]),
            Command::EnableChargePump(ena) => ok_frame!(
                arg_buf,
                [
                    0x8D,
                    match ena {
                        true => 0x14,
                        false => 0x10,
                    }
                ]
            ),
            Command::SetAllPixelsOn(ena) => ok_frame!(
                arg_buf,
                [match ena {
                    true => 0xA5,
                    false => 0xA4,
                }]
            ),
            Command::SetInverse(ena) => ok_frame!(
                arg_buf,
                [match ena {
                    true => 0xA7,
                    false => 0xA6,
                }]
            ),
        }?;
        iface.send_commands(frame)
    }
}
