//! Carousel constants
//!
//! Shared defaults for carousel behavior. Tuning should happen here so every
//! carousel built from default options updates consistently.

/// Navigation and auto-advance defaults.
pub mod navigation {
    /// Delay between auto-advance steps (ms).
    pub const AUTOSLIDE_INTERVAL_MS: u64 = 3_500;
}

/// Drag and swipe handling.
pub mod gesture {
    /// Minimum drag travel (px) on release that commits an index change.
    pub const MIN_DRAG_TRANSITION_DISTANCE: f32 = 60.0;
    /// Lower bound (degrees, inclusive) of the band in which a horizontal
    /// drag is treated as an attempt to scroll the page.
    pub const VERTICAL_LOCK_MIN_ANGLE: f32 = 60.0;
    /// Upper bound (degrees, inclusive) of the same band.
    pub const VERTICAL_LOCK_MAX_ANGLE: f32 = 120.0;
}

/// Responsive layout.
pub mod layout {
    /// Viewport width (px) per visible item when the carousel is responsive.
    pub const RESPONSIVE_BREAKPOINT: f32 = 150.0;
    /// Smallest number of items visible per page.
    pub const MIN_ITEM_SET_SIZE: usize = 1;
    /// Largest number of items visible per page, however wide the viewport.
    pub const MAX_ITEM_SET_SIZE: usize = 64;
    /// Largest clone padding accepted at each end of the track.
    pub const MAX_CLONE_DEPTH: usize = 64;
}
