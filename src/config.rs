//! Runtime panel geometry and initialization configuration.
//!
//! Panel geometry is a property of the display module, not of the controller, so it is
//! supplied at construction rather than baked in. The `column_offset` field captures the
//! wiring quirk of modules whose RAM window does not start at segment zero; it is folded into
//! column addressing commands on the wire and never into driver-side cursor state.

use crate::command::{ComScanDirection, NUM_PAGES, NUM_PIXEL_ROWS, NUM_SEGMENTS};

/// Physical layout of the attached panel module.
#[derive(Clone, Copy, Debug)]
pub struct Geometry {
    /// Panel width in pixels, at most 128.
    pub width: u8,
    /// Panel height in pixels, a multiple of 8 of at most 64.
    pub height: u8,
    /// Fixed offset added to segment addresses on the wire for modules wired into the middle
    /// of the controller's RAM.
    pub column_offset: u8,
    /// Blank pixel columns reserved at the left edge of every text row.
    pub left_pad: u8,
    /// Blank pixel columns reserved at the right edge; the cursor wraps as soon as a glyph
    /// would intrude on them.
    pub right_pad: u8,
}

impl Geometry {
    /// The 64x48 OLED shield for the Wemos D1 Mini, whose panel occupies the middle 64
    /// segments of the controller's 128-segment RAM.
    pub const fn wemos_d1_mini() -> Self {
        Geometry {
            width: 64,
            height: 48,
            column_offset: 32,
            left_pad: 0,
            right_pad: 0,
        }
    }

    /// A standard 128x64 module with no addressing quirks.
    pub const fn standard_128x64() -> Self {
        Geometry {
            width: 128,
            height: 64,
            column_offset: 0,
            left_pad: 0,
            right_pad: 0,
        }
    }

    /// Number of 8-row pages on this panel.
    pub fn pages(&self) -> u8 {
        self.height / 8
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.width >= 1
            && self.width <= NUM_SEGMENTS
            && self.height >= 8
            && self.height <= NUM_PIXEL_ROWS
            && self.height % 8 == 0
            && u16::from(self.width) + u16::from(self.column_offset) <= u16::from(NUM_SEGMENTS)
            && u16::from(self.left_pad) + u16::from(self.right_pad) < u16::from(self.width)
            && self.pages() <= NUM_PAGES
    }
}

/// A configuration for the display. Builder methods override the module-specific register
/// values used by `Display::reconfigure`; the defaults suit the common 128x64 and 64x48
/// modules.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) geometry: Geometry,
    pub(crate) com_pins: u8,
    pub(crate) clock_divider: u8,
    pub(crate) default_contrast: u8,
    pub(crate) segment_remap: bool,
    pub(crate) com_scan_direction: ComScanDirection,
}

impl Config {
    /// Create a configuration for a panel of the given geometry, with default register
    /// values for everything else.
    pub fn new(geometry: Geometry) -> Self {
        Config {
            geometry,
            com_pins: 0x12,
            clock_divider: 0x80,
            default_contrast: 128,
            segment_remap: true,
            com_scan_direction: ComScanDirection::Decrement,
        }
    }

    /// Extend this `Config` with an explicit COM pins hardware configuration. See
    /// `Command::SetComPins`.
    pub fn com_pins(self, com_pins: u8) -> Self {
        Self { com_pins, ..self }
    }

    /// Extend this `Config` with an explicit clock divide ratio / oscillator frequency. See
    /// `Command::SetClockDivider`.
    pub fn clock_divider(self, clock_divider: u8) -> Self {
        Self {
            clock_divider,
            ..self
        }
    }

    /// Extend this `Config` with the contrast applied at the end of `reconfigure`.
    pub fn default_contrast(self, default_contrast: u8) -> Self {
        Self {
            default_contrast,
            ..self
        }
    }

    /// Extend this `Config` with an explicit segment remap setting. See
    /// `Command::SetSegmentRemap`.
    pub fn segment_remap(self, segment_remap: bool) -> Self {
        Self {
            segment_remap,
            ..self
        }
    }

    /// Extend this `Config` with an explicit COM scan direction. See
    /// `Command::SetComScanDirection`.
    pub fn com_scan_direction(self, com_scan_direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction,
            ..self
        }
    }
}
