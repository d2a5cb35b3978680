//! Static options for a carousel instance
//!
//! Options are validated once at construction. Everything that can change
//! at runtime (item count, viewport width, frozen state) lives on the
//! carousel itself.

use std::time::Duration;

use slidekit_model::Alignment;

use crate::constants::{gesture, layout, navigation};
use crate::error::{CarouselError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Loop seamlessly by padding the item set with clones at both ends.
    pub is_infinite: bool,
    /// Accept drag and swipe input. `None` follows `hasMultipleItems`.
    pub is_swipeable: Option<bool>,
    /// Advance automatically every `autoslide_interval`.
    pub is_autoslide: bool,
    pub autoslide_interval: Duration,
    /// Release travel (px) above which a drag commits a step.
    pub min_drag_transition_distance: f32,
    pub item_set_alignment: Alignment,
    /// Derive the item set size from the viewport width.
    pub is_responsive: bool,
    /// Viewport width (px) per visible item when responsive.
    pub responsive_breakpoint: f32,
    /// Clones per end in infinite mode. `None` uses the item set size.
    pub clone_depth: Option<usize>,
    pub show_dot_indicators: bool,
    pub show_buttons: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::slider_defaults()
    }
}

impl CarouselOptions {
    /// A plain image slider: finite, swipeable when there is more than one
    /// item, no auto-advance.
    pub const fn slider_defaults() -> Self {
        Self {
            is_infinite: false,
            is_swipeable: None,
            is_autoslide: false,
            autoslide_interval: Duration::from_millis(
                navigation::AUTOSLIDE_INTERVAL_MS,
            ),
            min_drag_transition_distance: gesture::MIN_DRAG_TRANSITION_DISTANCE,
            item_set_alignment: Alignment::Center,
            is_responsive: false,
            responsive_breakpoint: layout::RESPONSIVE_BREAKPOINT,
            clone_depth: None,
            show_dot_indicators: false,
            show_buttons: false,
        }
    }

    /// A looping, self-advancing banner with dots and buttons.
    pub const fn banner_defaults() -> Self {
        Self {
            is_infinite: true,
            is_autoslide: true,
            show_dot_indicators: true,
            show_buttons: true,
            ..Self::slider_defaults()
        }
    }

    /// A responsive product shelf showing several items per page.
    pub const fn shelf_defaults() -> Self {
        Self {
            is_responsive: true,
            item_set_alignment: Alignment::Left,
            show_buttons: true,
            ..Self::slider_defaults()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoslide_interval.is_zero() {
            return Err(CarouselError::InvalidConfig(
                "autoslide_interval must be greater than zero".into(),
            ));
        }
        if !self.min_drag_transition_distance.is_finite()
            || self.min_drag_transition_distance < 0.0
        {
            return Err(CarouselError::InvalidConfig(format!(
                "min_drag_transition_distance must be a non-negative number, got {}",
                self.min_drag_transition_distance
            )));
        }
        if !self.responsive_breakpoint.is_finite()
            || self.responsive_breakpoint <= 0.0
        {
            return Err(CarouselError::InvalidConfig(format!(
                "responsive_breakpoint must be a positive number, got {}",
                self.responsive_breakpoint
            )));
        }
        if let Some(depth) = self.clone_depth
            && depth > layout::MAX_CLONE_DEPTH
        {
            return Err(CarouselError::InvalidConfig(format!(
                "clone_depth must be at most {}, got {depth}",
                layout::MAX_CLONE_DEPTH
            )));
        }
        Ok(())
    }
}
