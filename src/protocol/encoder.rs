//! # Print Job Encoder
//!
//! Assembles a complete LabelWriter command stream from a bit-packed
//! bitmap matrix and a copy count.
//!
//! ## Job Layout
//!
//! The firmware is an implicit state machine that expects exactly this
//! sequence, in this order:
//!
//! ```text
//! START_OF_PRINT (313 × ESC)
//! RESET
//! NO_DOT_TAB
//! SET_BYTES_PER_LINE   (from row width)
//! SET_LABEL_LENGTH     (from row count)
//! TEXT_SPEED_MODE
//! DENSITY_NORMAL
//! for each copy:
//!     SYN + row bytes, once per row
//!     SHORT_FORM_FEED if more copies remain, else FULL_FORM_FEED
//! ```
//!
//! ## Input Contract
//!
//! Rows are portrait-orientation raster lines, one bit per pixel packed
//! eight to a byte. The label width in dots is derived from the first
//! row (`rows[0].len() * 8`); rows are assumed uniform length and are
//! emitted verbatim without cross-row validation, matching the printer
//! driver convention this encoder descends from.

use crate::error::{LabelWriterError, Result};
use crate::protocol::commands;

/// A 1-bit bitmap matrix: one `Vec<u8>` of packed pixel bytes per raster
/// line, portrait orientation, top row first.
pub type Bitmap = Vec<Vec<u8>>;

/// Assemble the full command stream for one print job.
///
/// Pure with respect to its inputs: no I/O, returns a fresh buffer.
///
/// ## Errors
///
/// - [`LabelWriterError::InvalidInput`] if the matrix has no rows
/// - [`LabelWriterError::InvalidInput`] if `copies` is zero
/// - [`LabelWriterError::InvalidInput`] if the row count cannot be
///   expressed in the protocol's 16-bit label length
///
/// ## Example
///
/// ```
/// use labelwriter::protocol::encoder::encode_job;
///
/// let matrix = vec![vec![0xFF, 0x00]; 4];
/// let job = encode_job(&matrix, 1).unwrap();
/// assert_eq!(&job[..313], &[0x1B; 313][..]);
/// assert_eq!(&job[313..315], &[0x1B, 0x2A]); // reset
/// ```
pub fn encode_job(matrix: &[Vec<u8>], copies: u32) -> Result<Vec<u8>> {
    if matrix.is_empty() {
        return Err(LabelWriterError::InvalidInput(
            "bitmap matrix has no rows".to_string(),
        ));
    }
    if copies == 0 {
        return Err(LabelWriterError::InvalidInput(
            "copy count must be at least 1".to_string(),
        ));
    }
    let length = u16::try_from(matrix.len()).map_err(|_| {
        LabelWriterError::InvalidInput(format!(
            "label length {} exceeds the 16-bit protocol limit",
            matrix.len()
        ))
    })?;
    let width_bits = matrix[0].len() * 8;

    let mut job = Vec::with_capacity(job_size_hint(matrix, copies));
    job.extend(commands::start_of_print());
    job.extend(commands::reset());
    job.extend(commands::no_dot_tab());
    job.extend(commands::bytes_per_line(width_bits));
    job.extend(commands::label_length(length));
    job.extend(commands::text_speed_mode());
    job.extend(commands::density_normal());

    for copy in 0..copies {
        for row in matrix {
            job.extend(commands::line(row));
        }
        if copy + 1 < copies {
            job.extend(commands::short_form_feed());
        } else {
            job.extend(commands::full_form_feed());
        }
    }

    Ok(job)
}

/// Upper-bound size estimate used to pre-allocate the job buffer.
fn job_size_hint(matrix: &[Vec<u8>], copies: u32) -> usize {
    let raster: usize = matrix.iter().map(|row| row.len() + 1).sum();
    commands::START_ESC_COUNT + 16 + (raster + 2) * copies as usize
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::commands::{ESC, SYN};

    fn two_by_two() -> Bitmap {
        vec![vec![0xF0], vec![0x0F]]
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let err = encode_job(&[], 1).unwrap_err();
        assert!(matches!(err, LabelWriterError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_copies_rejected() {
        let err = encode_job(&two_by_two(), 0).unwrap_err();
        assert!(matches!(err, LabelWriterError::InvalidInput(_)));
    }

    #[test]
    fn test_oversized_label_rejected() {
        let matrix = vec![vec![0u8]; 0x1_0000];
        let err = encode_job(&matrix, 1).unwrap_err();
        assert!(matches!(err, LabelWriterError::InvalidInput(_)));
    }

    #[test]
    fn test_preamble_then_reset() {
        let job = encode_job(&two_by_two(), 1).unwrap();
        assert!(job[..313].iter().all(|&b| b == ESC));
        assert_eq!(&job[313..315], &[ESC, b'*']);
    }

    #[test]
    fn test_header_layout() {
        let matrix = vec![vec![0u8; 42]; 1052];
        let job = encode_job(&matrix, 1).unwrap();
        let header = &job[313..];
        assert_eq!(&header[0..2], &[ESC, b'*']); // reset
        assert_eq!(&header[2..5], &[ESC, b'B', 0x00]); // no dot tab
        assert_eq!(&header[5..8], &[ESC, b'D', 42]); // 42 bytes per line
        assert_eq!(&header[8..12], &[ESC, b'L', 0x04, 0x1C]); // 1052 rows
        assert_eq!(&header[12..14], &[ESC, b'h']); // text speed
        assert_eq!(&header[14..16], &[ESC, b'e']); // density 100%
        // first raster line follows immediately
        assert_eq!(header[16], SYN);
    }

    #[test]
    fn test_width_derived_from_first_row() {
        // permissive: later rows are emitted verbatim even if they differ
        let matrix = vec![vec![0xAA, 0xBB], vec![0xCC]];
        let job = encode_job(&matrix, 1).unwrap();
        let header = &job[313..];
        assert_eq!(&header[5..8], &[ESC, b'D', 2]);
        assert_eq!(&header[16..19], &[SYN, 0xAA, 0xBB]);
        assert_eq!(&header[19..21], &[SYN, 0xCC]);
    }

    #[test]
    fn test_single_copy_ends_with_full_form_feed() {
        let job = encode_job(&two_by_two(), 1).unwrap();
        assert_eq!(&job[job.len() - 2..], &[ESC, b'E']);
        assert!(!contains(&job, &[ESC, b'G']));
    }

    #[test]
    fn test_three_copies_form_feed_ordering() {
        let job = encode_job(&two_by_two(), 3).unwrap();
        assert_eq!(count(&job, &[ESC, b'G']), 2);
        assert_eq!(count(&job, &[ESC, b'E']), 1);
        // the full feed is the very last command
        assert_eq!(&job[job.len() - 2..], &[ESC, b'E']);
        // and every short feed precedes it
        let full_at = find(&job, &[ESC, b'E']).unwrap();
        let last_short = job
            .windows(2)
            .enumerate()
            .filter(|(_, w)| *w == [ESC, b'G'])
            .map(|(i, _)| i)
            .next_back()
            .unwrap();
        assert!(last_short < full_at);
    }

    #[test]
    fn test_copies_repeat_raster_lines() {
        let job = encode_job(&two_by_two(), 3).unwrap();
        assert_eq!(count(&job, &[SYN, 0xF0]), 3);
        assert_eq!(count(&job, &[SYN, 0x0F]), 3);
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        find(haystack, needle).is_some()
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }
}
