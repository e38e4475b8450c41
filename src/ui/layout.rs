//! Responsive Layout System
//!
//! Provides a `LayoutContext` that encapsulates terminal dimensions and the
//! sizing decisions the forum screen makes from them: whether the Popular
//! Topics sidebar fits, how wide the search box is, and how compact labels
//! should be.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Sidebar width on medium terminals (mirrors a 220px column)
pub const SIDEBAR_WIDTH: u16 = 24;
/// Sidebar width on large terminals (mirrors a 240px column)
pub const SIDEBAR_WIDTH_WIDE: u16 = 28;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols)
    ExtraSmall,
    /// Small (< 80 cols)
    Small,
    /// Medium (< 120 cols)
    Medium,
    /// Large (>= 120 cols)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```
/// use shiptalk::ui::layout::LayoutContext;
///
/// let ctx = LayoutContext::new(120, 40);
/// assert!(!ctx.should_collapse_sidebar());
/// assert_eq!(ctx.percent_width(50), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Get the width size category.
    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: labels and spacing should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Very constrained space.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Hide the Popular Topics sidebar and fold its pages into the header.
    pub fn should_collapse_sidebar(&self) -> bool {
        self.is_narrow()
    }

    /// Width of the sidebar column, 0 when collapsed.
    pub fn sidebar_width(&self) -> u16 {
        match self.width_category() {
            SizeCategory::ExtraSmall | SizeCategory::Small => 0,
            SizeCategory::Medium => SIDEBAR_WIDTH,
            SizeCategory::Large => SIDEBAR_WIDTH_WIDE,
        }
    }

    /// Width of the header search box.
    pub fn search_width(&self) -> u16 {
        if self.is_extra_small() {
            12
        } else {
            self.bounded_width(25, 16, 32)
        }
    }

    /// Usable text width inside a bordered card of `card_width` columns
    /// with `gutter` extra columns taken on the left.
    pub fn card_text_width(card_width: u16, gutter: u16) -> u16 {
        card_width.saturating_sub(4 + gutter).max(1)
    }
}

impl Default for LayoutContext {
    /// Returns a default layout context with standard 80x24 terminal size.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
