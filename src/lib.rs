//! Driver library for text output on the Solomon Systech SSD1306 dot matrix OLED controller.
//!
//! The SSD1306 is driven over a two-wire (I2C) bus. Every transaction begins with a control
//! byte that tells the controller whether the bytes that follow are commands (`0x00`) or
//! display RAM data (`0x40`); the [`interface`] module owns that framing, so the rest of the
//! crate deals only in logical commands and pixel columns.
//!
//! The driver is text-oriented: it tracks a character cursor as a (segment, page) pair,
//! renders fixed-width column-bitmap glyphs, and re-asserts absolute addressing after every
//! line wrap rather than trusting the controller's auto-increment behavior, which varies
//! between panel modules. Panel geometry, including the column offset quirk some modules
//! exhibit, is supplied at construction via [`config::Geometry`].
//!
//! Expected call order: construct a [`Display`], [`Display::identify`] the controller on the
//! bus, then [`Display::reconfigure`] to run the init sequence. Until identification succeeds
//! the driver will not touch the bus.
//!
//! Commands and pixel writes are best-effort: a failed bus transaction is logged via the
//! `log` facade and otherwise ignored. Only identification reports failure to the caller.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod command;
pub mod config;
pub mod contrast;
pub mod display;
pub mod font;
pub mod interface;

// Re-exports for primary API.
pub use command::{ComScanDirection, MemoryMode, VcomDeselectLevel};
pub use config::{Config, Geometry};
pub use display::Display;
pub use font::{Font, Font5x7};
pub use interface::i2c::I2cInterface;

/// Errors reported by the fallible parts of the driver surface.
///
/// Command and pixel-data transmission is deliberately infallible from the caller's point of
/// view (failures are logged and dropped), so this covers identification only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The bus transaction itself failed while reading the controller status.
    Bus,
    /// The status byte read back did not carry the SSD1306 signature bits. The offending
    /// status byte is included for diagnostics.
    NotRecognized(u8),
}
