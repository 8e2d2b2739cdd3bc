//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Width of the document list sidebar in pixels
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Height of one document row in the sidebar
pub const ITEM_HEIGHT: f32 = 36.0;

/// Vertical gap between document rows
pub const ITEM_GAP: f32 = 4.0;

/// Margin subtracted from the viewer pane width when sizing rendered pages
pub const PAGE_WIDTH_OFFSET: f32 = 100.0;

/// Page width used before the viewer pane has been measured
pub const DEFAULT_PAGE_WIDTH: f32 = 600.0;

/// Lower bound for the rendered page width, whatever the window size
pub const MIN_PAGE_WIDTH: f32 = 100.0;

/// Vertical gap between rendered pages
pub const PAGE_GAP: f32 = 16.0;

// ============================================================================
// Drag Reordering
// ============================================================================

/// Pointer travel (in pixels) before a press on a row becomes a drag.
/// Keeps plain clicks from being misread as reorders.
pub const DRAG_ACTIVATION_DISTANCE: f32 = 5.0;
