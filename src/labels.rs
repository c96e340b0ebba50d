//! # Label Presets
//!
//! Named geometry presets for common LabelWriter label stock.
//!
//! ## Supported Stock
//!
//! | Preset | Stock | Size (px @ 300 DPI) |
//! |--------|-------|---------------------|
//! | ADDRESS | 30252 Address | 336 × 1052 |
//! | SHIPPING | 30256 Shipping | 696 × 1200 |
//! | MULTIPURPOSE | 30334 Multipurpose | 672 × 376 |
//! | SMALL_MULTIPURPOSE | 30336 Small Multipurpose | 300 × 638 |
//!
//! Presets are pure lookup data for callers rasterizing a label: a print is
//! visually correct only when the bitmap matches the loaded stock, but the
//! encoder itself accepts any non-empty rectangular matrix.

/// Geometry of one label stock, portrait orientation at 300 DPI.
///
/// `width_px` runs across the print head (bits per raster line),
/// `height_px` along the feed direction (raster line count).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Human-readable stock name
    pub title: &'static str,

    /// Image width in pixels (dots across the head)
    pub width_px: u32,

    /// Image height in pixels (dot rows along the feed)
    pub height_px: u32,
}

impl LabelSpec {
    /// 30252 Address labels, 1-1/8 × 3-1/2 in.
    pub const ADDRESS: Self = Self {
        title: "Address (30252)",
        width_px: 336,
        height_px: 1052,
    };

    /// 30256 Shipping labels, 2-5/16 × 4 in.
    pub const SHIPPING: Self = Self {
        title: "Shipping (30256)",
        width_px: 696,
        height_px: 1200,
    };

    /// 30334 Multipurpose labels, 2-1/4 × 1-1/4 in. Uses the full
    /// 672-dot head width.
    pub const MULTIPURPOSE: Self = Self {
        title: "Multipurpose (30334)",
        width_px: 672,
        height_px: 376,
    };

    /// 30336 Small Multipurpose labels, 1 × 2-1/8 in.
    pub const SMALL_MULTIPURPOSE: Self = Self {
        title: "Small Multipurpose (30336)",
        width_px: 300,
        height_px: 638,
    };

    /// All built-in presets.
    pub const fn all() -> &'static [Self] {
        &[
            Self::ADDRESS,
            Self::SHIPPING,
            Self::MULTIPURPOSE,
            Self::SMALL_MULTIPURPOSE,
        ]
    }

    /// Look up a preset by its title.
    pub fn find(title: &str) -> Option<Self> {
        Self::all().iter().copied().find(|spec| spec.title == title)
    }

    /// Raster line width in packed bytes (`ceil(width_px / 8)`).
    #[inline]
    pub const fn width_bytes(&self) -> u32 {
        self.width_px.div_ceil(8)
    }
}

// ============================================================================
// TESTS
// ============================================================================
