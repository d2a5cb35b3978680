use std::fmt::{self, Display, Formatter};

/// Result of a navigation request.
///
/// Rejections are values, not errors: button and dot handlers check the
/// outcome and move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", content = "index"))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlideOutcome {
    /// Moved one step inside the bounds.
    Stepped(isize),
    /// Crossed an infinite-mode boundary; carries the index the wrap settles on.
    Wrapped(isize),
    /// Jumped directly to an in-bounds index.
    Jumped(isize),
    /// Hit a finite boundary; index unchanged.
    Clamped,
    /// Frozen, out of range or otherwise refused; index unchanged.
    Rejected,
}

impl SlideOutcome {
    /// Index the carousel is (or will settle) on, if the request was accepted.
    pub fn index(&self) -> Option<isize> {
        match *self {
            SlideOutcome::Stepped(i)
            | SlideOutcome::Wrapped(i)
            | SlideOutcome::Jumped(i) => Some(i),
            SlideOutcome::Clamped | SlideOutcome::Rejected => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.index().is_some()
    }

    /// Sentinel form used by callers that only deal in integers: the
    /// resulting index, or `-1`.
    pub fn as_sentinel(&self) -> isize {
        self.index().unwrap_or(-1)
    }
}

impl Display for SlideOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SlideOutcome::Stepped(i) => write!(f, "stepped({i})"),
            SlideOutcome::Wrapped(i) => write!(f, "wrapped({i})"),
            SlideOutcome::Jumped(i) => write!(f, "jumped({i})"),
            SlideOutcome::Clamped => write!(f, "clamped"),
            SlideOutcome::Rejected => write!(f, "rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_minus_one_for_refusals() {
        assert_eq!(SlideOutcome::Rejected.as_sentinel(), -1);
        assert_eq!(SlideOutcome::Clamped.as_sentinel(), -1);
        assert_eq!(SlideOutcome::Wrapped(1).as_sentinel(), 1);
        assert!(!SlideOutcome::Clamped.is_accepted());
    }
}
