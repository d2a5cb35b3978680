use serde::Serialize;

/// Point-in-time view of everything a host template binds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSnapshot {
    pub index: isize,
    pub min_index: isize,
    pub max_index: isize,
    /// Index relative to the first real item.
    pub slide_index: isize,
    pub item_count: usize,
    pub clone_depth: usize,
    pub item_set_size: usize,
    pub item_width: f32,
    /// Offset the calculator assigns to `index`.
    pub container_offset: f32,
    /// Offset last written to the host. Differs from `container_offset`
    /// mid-drag and mid-wrap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_offset: Option<f32>,
    pub track_width: f32,
    pub prev_btn_disabled: bool,
    pub next_btn_disabled: bool,
    pub has_multiple_items: bool,
    pub no_transition: bool,
    pub is_frozen: bool,
    pub is_wrapping: bool,
    pub autoslide_armed: bool,
}
