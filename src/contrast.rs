//! Derivation of the three register values behind a single "contrast" knob.
//!
//! The SSD1306's perceived brightness depends on the contrast current register and on two
//! analog timing registers, the pre-charge period and the COM deselect (Vcom) level. Driving
//! only the contrast register gives a very uneven response at the dim end, so the curve here
//! derives all three from one 0-255 input. The mapping was established empirically; see
//! <https://github.com/ThingPulse/esp8266-oled-ssd1306/issues/134>:
//!
//! ```text
//! Contrast    PreCharge   Vcom
//! 0x00        0x11        0x00
//! 0x50        0x55        0x00
//! 0x60        0x66        0x20
//! 0xA0        0xAA        0x20
//! 0xB0        0xBB        0x30
//! 0xFF        0xFF        0x30
//! ```

use crate::command::VcomDeselectLevel;

/// The dependent register values for one contrast setting, applied atomically by
/// `Display::set_contrast` in the order pre-charge, contrast, Vcom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContrastLevels {
    /// The contrast current value after clamping, as sent to the hardware.
    pub contrast: u8,
    /// The pre-charge period register value. Never 0x00: a zero phase length is illegal on
    /// the wire, so the degenerate case maps to 0x11.
    pub precharge: u8,
    /// The COM deselect voltage level.
    pub vcom: VcomDeselectLevel,
}

/// Clamp `requested` into `[min, max]` and derive the register values for it.
pub fn derive(requested: u8, min: u8, max: u8) -> ContrastLevels {
    let contrast = if requested < min {
        min
    } else if requested > max {
        max
    } else {
        requested
    };
    let rel = contrast >> 4;
    let precharge = match rel << 4 | rel {
        0x00 => 0x11,
        p => p,
    };
    let vcom = if rel < 0x06 {
        VcomDeselectLevel::V0p65
    } else if rel < 0x0B {
        VcomDeselectLevel::V0p77
    } else {
        VcomDeselectLevel::V0p83
    };
    ContrastLevels {
        contrast,
        precharge,
        vcom,
    }
}
