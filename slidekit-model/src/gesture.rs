//! Classified gesture samples delivered by the host's recogniser.

use crate::direction::SwipeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GestureKind {
    /// Finger down.
    Touch,
    /// Finger moved while down.
    Drag,
    /// Finger lifted.
    Release,
    /// Fast flick, classified independently of the drag stream.
    Swipe,
}

/// One classified gesture sample.
///
/// `angle` is in degrees as reported by the recogniser (0 points right,
/// +/-90 vertical). `distance` is the absolute travel since touch and
/// `delta_x` the signed horizontal travel since touch, both in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub direction: Option<SwipeDirection>,
    pub angle: f32,
    pub distance: f32,
    pub delta_x: f32,
}

impl GestureEvent {
    pub fn touch() -> Self {
        Self {
            kind: GestureKind::Touch,
            direction: None,
            angle: 0.0,
            distance: 0.0,
            delta_x: 0.0,
        }
    }

    /// A horizontal drag sample travelling `delta_x` pixels.
    pub fn drag(delta_x: f32) -> Self {
        Self::horizontal(GestureKind::Drag, delta_x)
    }

    /// A horizontal release sample after travelling `delta_x` pixels.
    pub fn release(delta_x: f32) -> Self {
        Self::horizontal(GestureKind::Release, delta_x)
    }

    pub fn swipe(direction: SwipeDirection) -> Self {
        Self {
            kind: GestureKind::Swipe,
            direction: Some(direction),
            angle: match direction {
                SwipeDirection::Left => 180.0,
                SwipeDirection::Right => 0.0,
                SwipeDirection::Up => -90.0,
                SwipeDirection::Down => 90.0,
            },
            distance: 0.0,
            delta_x: 0.0,
        }
    }

    fn horizontal(kind: GestureKind, delta_x: f32) -> Self {
        let direction = if delta_x < 0.0 {
            Some(SwipeDirection::Left)
        } else if delta_x > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            None
        };
        Self {
            kind,
            direction,
            angle: if delta_x < 0.0 { 180.0 } else { 0.0 },
            distance: delta_x.abs(),
            delta_x,
        }
    }

    /// Override the reported angle, keeping everything else.
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_direction(mut self, direction: SwipeDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// True when the sample carries a measurable travel distance.
    pub fn has_distance(&self) -> bool {
        self.distance.is_finite() && self.distance > 0.0
    }
}
