//! OffsetCalculator: pixel translation of the track for a logical index
//!
//! Pure functions of their inputs; calling them twice with the same state
//! yields the same value. Non-finite inputs degrade to `0.0`.

use slidekit_model::Alignment;

/// The state the offset depends on, borrowed from the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetInput {
    pub index: isize,
    pub clone_depth: usize,
    pub item_width: f32,
    pub alignment: Alignment,
    pub has_multiple_items: bool,
}

/// Translation that shows `input.index` in the viewport.
pub fn container_offset(input: &OffsetInput) -> f32 {
    let width = finite_or_zero(input.item_width);
    let slide_index = (input.index - input.clone_depth as isize) as f32;
    let slide_offset = -(width * slide_index);
    let clone_offset = -(width * input.clone_depth as f32);
    let align_offset = alignment_offset(
        input.alignment,
        width,
        input.clone_depth,
        input.has_multiple_items,
    );
    finite_or_zero(slide_offset + clone_offset + align_offset)
}

/// Shift applied to line the item set up on the left, centre or right of
/// the viewport. Carousels with fewer than two items are always left
/// aligned.
pub fn alignment_offset(
    alignment: Alignment,
    item_width: f32,
    clone_depth: usize,
    has_multiple_items: bool,
) -> f32 {
    let alignment = if has_multiple_items {
        alignment
    } else {
        Alignment::Left
    };
    let width = finite_or_zero(item_width);
    match alignment {
        Alignment::Left => 0.0,
        Alignment::Right => width * clone_depth.div_ceil(2) as f32,
        Alignment::Center => width * (clone_depth / 2) as f32,
    }
}

/// Width of the padded track: real items plus clones at both ends.
pub fn track_width(item_width: f32, item_count: usize, clone_depth: usize) -> f32 {
    let slots = item_count.saturating_add(clone_depth.saturating_mul(2));
    finite_or_zero(finite_or_zero(item_width) * slots as f32)
}

/// Width of one full lap of real items; the distance a wrap teleport
/// shifts the track.
pub fn lap_width(item_count: usize, item_width: f32) -> f32 {
    finite_or_zero(item_count as f32 * finite_or_zero(item_width))
}

#[inline]
fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(index: isize, clone_depth: usize, alignment: Alignment) -> OffsetInput {
        OffsetInput {
            index,
            clone_depth,
            item_width: 100.0,
            alignment,
            has_multiple_items: true,
        }
    }

    #[test]
    fn first_real_item_sits_after_the_clones() {
        let offset = container_offset(&input(1, 1, Alignment::Left));
        assert_eq!(offset, -100.0);
        let offset = container_offset(&input(0, 0, Alignment::Center));
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn each_step_moves_one_item_width() {
        let a = container_offset(&input(2, 1, Alignment::Left));
        let b = container_offset(&input(3, 1, Alignment::Left));
        assert_eq!(a - b, 100.0);
    }

    #[test]
    fn alignment_uses_half_the_clone_depth() {
        assert_eq!(alignment_offset(Alignment::Left, 100.0, 3, true), 0.0);
        assert_eq!(alignment_offset(Alignment::Center, 100.0, 3, true), 100.0);
        assert_eq!(alignment_offset(Alignment::Right, 100.0, 3, true), 200.0);
    }

    #[test]
    fn single_item_forces_left_alignment() {
        assert_eq!(alignment_offset(Alignment::Right, 100.0, 3, false), 0.0);
    }

    #[test]
    fn missing_measurements_degrade_to_zero() {
        let mut degenerate = input(3, 1, Alignment::Center);
        degenerate.item_width = f32::NAN;
        assert_eq!(container_offset(&degenerate), 0.0);
        degenerate.item_width = 0.0;
        assert_eq!(container_offset(&degenerate), 0.0);
        assert_eq!(track_width(f32::INFINITY, 4, 1), 0.0);
    }

    #[test]
    fn track_width_counts_both_clone_ends() {
        assert_eq!(track_width(50.0, 4, 2), 400.0);
        assert_eq!(lap_width(4, 50.0), 200.0);
    }

    #[test]
    fn track_width_saturates_on_huge_slot_counts() {
        let width = track_width(100.0, 5, usize::MAX / 2 + 1);
        assert!(width.is_finite());
        assert!(width > 0.0);
    }
}
