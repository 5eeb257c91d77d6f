use log::Level;

/// Scroll offset past which the header switches to its compact, solid look.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// How far below the viewport top a section may start and still count as active.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// Height of the fixed header, subtracted when scrolling to a section.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Fade duration of the lead dialog. Content stays mounted this long after a close.
pub const MODAL_TRANSITION_MS: u32 = 300;

pub const LEAD_FORM_ID: &str = "kX2m9pQvRzus";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub scrolled_threshold: f64,
    pub lookahead: f64,
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: SCROLLED_THRESHOLD_PX,
            lookahead: SECTION_LOOKAHEAD_PX,
            header_offset: HEADER_OFFSET_PX,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
