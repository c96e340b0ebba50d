//! # LabelWriter Protocol Commands
//!
//! This module implements the command protocol spoken by Dymo LabelWriter
//! thermal label printers (LabelWriter 400/450 series and compatibles).
//!
//! ## Protocol Overview
//!
//! The LabelWriter command set is a small ESC-prefixed protocol. A print
//! job is a single byte stream: a resynchronization preamble, a handful of
//! setup commands derived from the label geometry, then one framed raster
//! line per print-head pass, and finally a form feed.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Two bytes: `ESC *`, `ESC E`, `ESC G`, `ESC h`, `ESC e`
//! - Multi-byte with parameters: `ESC B n`, `ESC D n`, `ESC L n1 n2`
//! - Raster framing: `SYN` followed by one line of packed pixel bytes
//!
//! ## Byte Order
//!
//! Multi-byte integers use **big-endian** encoding: the label length 0x041C
//! is sent as bytes `[0x04, 0x1C]` (most significant byte first).
//!
//! ## Reference
//!
//! Based on the "DYMO LabelWriter 450 Series Printers Technical Reference
//! Manual" command listing.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every LabelWriter command begins with ESC (0x1B). This byte signals the
/// start of a control sequence rather than raster data.
pub const ESC: u8 = 0x1B;

/// SYN (Synchronous Idle) - Raster line marker
///
/// Each raster line is prefixed with SYN (0x16) before its packed pixel
/// bytes are transferred verbatim.
pub const SYN: u8 = 0x16;

/// Maximum raster line width the print head supports, in bytes.
///
/// 84 bytes × 8 = 672 dots, the full head width at 300 DPI. The firmware
/// never expects a raster line longer than this, which is what makes the
/// [`start_of_print`] preamble length safe (see below).
pub const MAX_BYTES_PER_LINE: usize = 84;

/// Number of ESC bytes in the resynchronization preamble.
///
/// Must exceed [`MAX_BYTES_PER_LINE`]: if the printer was left mid-line by
/// an interrupted job, it may still be counting down raster bytes. Sending
/// more ESC bytes than any line could hold guarantees the firmware leaves
/// raster mode and reinterprets the stream as commands.
pub const START_ESC_COUNT: usize = 313;

// ============================================================================
// FIXED COMMANDS
// ============================================================================

/// # Start of Print Job (313 × ESC)
///
/// Resynchronization preamble sent before anything else in a job.
///
/// ## Protocol Details
///
/// | Format | Bytes        |
/// |--------|--------------|
/// | Hex    | 1B × 313     |
///
/// ## Why 313 Escape Bytes
///
/// The printer is an implicit state machine: after `SYN` it consumes
/// exactly one line's worth of raster bytes. If a previous job was cut
/// short, the firmware may be waiting for up to [`MAX_BYTES_PER_LINE`]
/// bytes of pixel data. A run of ESC bytes longer than any possible line
/// flushes that state and lands the firmware back in command mode.
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::commands;
///
/// let preamble = commands::start_of_print();
/// assert_eq!(preamble.len(), 313);
/// assert!(preamble.iter().all(|&b| b == 0x1B));
/// ```
#[inline]
pub fn start_of_print() -> Vec<u8> {
    vec![ESC; START_ESC_COUNT]
}

/// # Reset Printer (ESC *)
///
/// Restores the printer to its power-up state and clears the print buffer.
/// Sent at the start of each job, immediately after the preamble.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * |
/// | Hex     | 1B 2A |
/// | Decimal | 27 42 |
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::commands;
///
/// assert_eq!(commands::reset(), vec![0x1B, 0x2A]);
/// ```
#[inline]
pub fn reset() -> Vec<u8> {
    vec![ESC, b'*']
}

/// # Full Form Feed (ESC E)
///
/// Advances the label stock to the tear position. This ends a job: the
/// final label becomes reachable at the tear bar.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E |
/// | Hex     | 1B 45 |
/// | Decimal | 27 69 |
#[inline]
pub fn full_form_feed() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Short Form Feed (ESC G)
///
/// Advances the stock just past the print head, positioning the next label
/// for printing without feeding all the way to the tear bar. Used between
/// labels when a job prints multiple copies; the last copy uses
/// [`full_form_feed`] instead.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC G |
/// | Hex     | 1B 47 |
/// | Decimal | 27 71 |
#[inline]
pub fn short_form_feed() -> Vec<u8> {
    vec![ESC, b'G']
}

/// # Text Speed Mode (ESC h)
///
/// Selects 300 × 300 DPI high-speed mode, the standard quality mode for
/// text and line-art labels.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC h |
/// | Hex     | 1B 68 |
/// | Decimal | 27 104 |
#[inline]
pub fn text_speed_mode() -> Vec<u8> {
    vec![ESC, b'h']
}

/// # Normal Print Density (ESC e)
///
/// Sets the print-head strobe duty cycle to 100% (normal density).
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC e |
/// | Hex     | 1B 65 |
/// | Decimal | 27 101 |
#[inline]
pub fn density_normal() -> Vec<u8> {
    vec![ESC, b'e']
}

/// # Zero Dot-Tab Offset (ESC B 0)
///
/// Sets the dot-tab (horizontal offset of the raster line within the print
/// head) to zero, so column 0 of the bitmap maps to the first head dot.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC B 0  |
/// | Hex     | 1B 42 00 |
/// | Decimal | 27 66 0  |
#[inline]
pub fn no_dot_tab() -> Vec<u8> {
    vec![ESC, b'B', 0]
}

// ============================================================================
// DERIVED COMMANDS
// ============================================================================

/// # Set Bytes Per Line (ESC D n)
///
/// Tells the printer how many raster bytes follow each [`SYN`] marker.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC D n |
/// | Hex     | 1B 44 n |
///
/// ## Parameters
///
/// - `width_bits`: label line width in dots; `n = ceil(width_bits / 8)`
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::commands;
///
/// // 336-dot line packs into 42 bytes
/// assert_eq!(commands::bytes_per_line(336), vec![0x1B, 0x44, 42]);
/// // partial trailing byte still counts
/// assert_eq!(commands::bytes_per_line(12), vec![0x1B, 0x44, 2]);
/// ```
#[inline]
pub fn bytes_per_line(width_bits: usize) -> Vec<u8> {
    let n = width_bits.div_ceil(8) as u8;
    vec![ESC, b'D', n]
}

/// # Set Label Length (ESC L n1 n2)
///
/// Declares the label length in dot rows (1/300-inch units) so the printer
/// knows how far a form feed must travel.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | ESC L n1 n2  |
/// | Hex     | 1B 4C msb lsb |
///
/// ## Parameters
///
/// - `length`: label length in dots, big-endian split across `n1 n2`
///
/// Lengths above the printer's physical maximum are passed through
/// unvalidated; the firmware rejects what it cannot feed.
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::commands;
///
/// // 1052 = 4 * 256 + 28
/// assert_eq!(commands::label_length(1052), vec![0x1B, 0x4C, 0x04, 0x1C]);
/// ```
#[inline]
pub fn label_length(length: u16) -> Vec<u8> {
    let [msb, lsb] = u16_be(length);
    vec![ESC, b'L', msb, lsb]
}

/// # Raster Line (SYN + data)
///
/// Frames one row of bit-packed pixel data: a [`SYN`] marker byte followed
/// by the row bytes verbatim. The printer consumes exactly the byte count
/// declared by [`bytes_per_line`] after each marker.
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::commands;
///
/// assert_eq!(commands::line(&[0xFF, 0x00]), vec![0x16, 0xFF, 0x00]);
/// ```
#[inline]
pub fn line(row: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + row.len());
    out.push(SYN);
    out.extend_from_slice(row);
    out
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as big-endian bytes [high, low]
///
/// The LabelWriter protocol sends multi-byte integers most significant
/// byte first.
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::commands::u16_be;
///
/// assert_eq!(u16_be(0x041C), [0x04, 0x1C]);
/// assert_eq!(u16_be(1052), [0x04, 0x1C]); // 1052 = 4*256 + 28
/// ```
#[inline]
pub const fn u16_be(value: u16) -> [u8; 2] {
    [(value >> 8) as u8, value as u8]
}

// ============================================================================
// TESTS
// ============================================================================
