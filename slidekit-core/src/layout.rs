//! Track layout: measured width, item set size, clone padding and the
//! visual slot sequence the host renders.

use serde::Serialize;

use crate::config::CarouselOptions;
use crate::constants::layout::{MAX_CLONE_DEPTH, MAX_ITEM_SET_SIZE, MIN_ITEM_SET_SIZE};

/// Width-derived metrics. The host width query is memoised here and only
/// invalidated on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    measured_width: Option<f32>,
    pub item_set_size: usize,
    pub item_width: f32,
}

impl Default for TrackMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackMetrics {
    pub fn new() -> Self {
        Self {
            measured_width: None,
            item_set_size: MIN_ITEM_SET_SIZE,
            item_width: 0.0,
        }
    }

    /// The cached viewport width, if it has been measured.
    pub fn measured_width(&self) -> Option<f32> {
        self.measured_width
    }

    pub fn invalidate(&mut self) {
        self.measured_width = None;
    }

    /// Use the cached width, or run `measure` and cache its result.
    /// Returns `true` when the derived metrics changed.
    pub fn ensure_measured<F>(&mut self, options: &CarouselOptions, measure: F) -> bool
    where
        F: FnOnce() -> f32,
    {
        let width = match self.measured_width {
            Some(width) => width,
            None => {
                let raw = measure();
                let width = if raw.is_finite() && raw > 0.0 {
                    raw
                } else {
                    if !raw.is_finite() || raw < 0.0 {
                        log::warn!("host reported unusable track width {raw}; treating as 0");
                    }
                    0.0
                };
                self.measured_width = Some(width);
                width
            }
        };

        let item_set_size = item_set_size(options, width);
        let item_width = if width > 0.0 {
            width / item_set_size as f32
        } else {
            0.0
        };
        let changed =
            item_set_size != self.item_set_size || item_width != self.item_width;
        self.item_set_size = item_set_size;
        self.item_width = item_width;
        changed
    }
}

/// Items visible per page: derived from the breakpoint when responsive,
/// otherwise one. Kept within `MIN_ITEM_SET_SIZE..=MAX_ITEM_SET_SIZE`.
pub fn item_set_size(options: &CarouselOptions, width: f32) -> usize {
    if !options.is_responsive || !(width > 0.0) {
        return MIN_ITEM_SET_SIZE;
    }
    let raw = (width / options.responsive_breakpoint).round();
    if raw.is_finite() && raw >= 1.0 {
        (raw as usize).min(MAX_ITEM_SET_SIZE)
    } else {
        MIN_ITEM_SET_SIZE
    }
}

/// Clones appended at each end. Zero unless infinite with more than one
/// item.
pub fn clone_depth(options: &CarouselOptions, item_count: usize, item_set_size: usize) -> usize {
    if !options.is_infinite || item_count <= 1 {
        return 0;
    }
    options
        .clone_depth
        .unwrap_or(item_set_size)
        .min(MAX_CLONE_DEPTH)
}

/// One rendered position in the padded track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// Logical position (the value `index` takes when this slot is active).
    pub position: isize,
    /// Index into the host's real item sequence that this slot renders.
    pub item: usize,
    pub is_clone: bool,
    pub is_active: bool,
}

/// The padded sequence in visual order. Leading clone `j` renders item
/// `(n - depth + j) mod n` and trailing clone `j` renders `j mod n`, so the
/// track repeats with period `n`.
pub fn slots(item_count: usize, clone_depth: usize, active: isize) -> Vec<Slot> {
    if item_count == 0 {
        return Vec::new();
    }
    let n = item_count as isize;
    let depth = clone_depth as isize;
    (0..n + 2 * depth)
        .map(|position| {
            let item = (position - depth).rem_euclid(n) as usize;
            Slot {
                position,
                item,
                is_clone: position < depth || position >= depth + n,
                is_active: position == active,
            }
        })
        .collect()
}

/// A dot indicator for one real item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    /// Logical index the dot jumps to.
    pub index: isize,
    pub is_active: bool,
}

pub fn dots(item_count: usize, clone_depth: usize, active: isize) -> Vec<Dot> {
    (0..item_count)
        .map(|i| {
            let index = (i + clone_depth) as isize;
            Dot {
                index,
                is_active: index == active,
            }
        })
        .collect()
}
