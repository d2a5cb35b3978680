use std::fmt::{self, Display, Formatter};

/// Logical stepping direction through the item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards `maxIndex`.
    Next,
    /// Towards `minIndex`.
    Prev,
}

impl Direction {
    /// Signed unit step for this direction.
    pub const fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Direction::Next => Direction::Prev,
            Direction::Prev => Direction::Next,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Prev => write!(f, "prev"),
        }
    }
}

/// Direction reported by the gesture recogniser.
///
/// A finger moving `Left` drags the track towards the next item, so
/// [`SwipeDirection::commit_direction`] maps it to [`Direction::Next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }

    /// The carousel step a horizontal gesture in this direction commits to.
    pub const fn commit_direction(self) -> Option<Direction> {
        match self {
            SwipeDirection::Left => Some(Direction::Next),
            SwipeDirection::Right => Some(Direction::Prev),
            SwipeDirection::Up | SwipeDirection::Down => None,
        }
    }
}

impl Display for SwipeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Left => write!(f, "left"),
            SwipeDirection::Right => write!(f, "right"),
            SwipeDirection::Up => write!(f, "up"),
            SwipeDirection::Down => write!(f, "down"),
        }
    }
}

impl std::str::FromStr for SwipeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(SwipeDirection::Left),
            "right" => Ok(SwipeDirection::Right),
            "up" => Ok(SwipeDirection::Up),
            "down" => Ok(SwipeDirection::Down),
            other => Err(format!("unknown swipe direction: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_swipes_map_to_steps() {
        assert_eq!(
            SwipeDirection::Left.commit_direction(),
            Some(Direction::Next)
        );
        assert_eq!(
            SwipeDirection::Right.commit_direction(),
            Some(Direction::Prev)
        );
        assert_eq!(SwipeDirection::Up.commit_direction(), None);
        assert!(!SwipeDirection::Down.is_horizontal());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("LEFT".parse::<SwipeDirection>(), Ok(SwipeDirection::Left));
        assert!("sideways".parse::<SwipeDirection>().is_err());
    }
}
