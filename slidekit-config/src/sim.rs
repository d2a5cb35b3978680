//! Scripted carousel runs against the in-memory host.
//!
//! A script is a list of steps such as `next`, `jump:3` or `drag:-80`. Each
//! step is applied, the host is pumped until the frame settles, and a
//! [`StepReport`] captures the outcome and the resulting snapshot.

use std::{fmt, str::FromStr, time::Duration};

use serde::Serialize;
use slidekit_core::testing::ManualHost;
use slidekit_core::{
    Carousel, CarouselOptions, CarouselSnapshot, GestureEvent, GestureSink,
    SlideOutcome, SwipeDirection,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepParseError {
    #[error("unknown step '{0}'")]
    Unknown(String),
    #[error("step '{step}' needs an argument")]
    MissingArgument { step: String },
    #[error("invalid argument '{value}' for step '{step}'")]
    InvalidArgument { step: String, value: String },
}

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Next,
    Prev,
    Jump(isize),
    /// Touch, drag by `dx` pixels and release.
    Drag(f32),
    Swipe(SwipeDirection),
    Wait(Duration),
    Resize(f32),
    Freeze,
    Thaw,
    Reset,
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (raw, None),
        };
        let name = name.to_ascii_lowercase();

        let required = |step: &str| {
            arg.filter(|a| !a.is_empty()).ok_or_else(|| {
                StepParseError::MissingArgument {
                    step: step.to_string(),
                }
            })
        };
        let invalid = |step: &str, value: &str| StepParseError::InvalidArgument {
            step: step.to_string(),
            value: value.to_string(),
        };

        match name.as_str() {
            "next" => Ok(Step::Next),
            "prev" => Ok(Step::Prev),
            "freeze" => Ok(Step::Freeze),
            "thaw" => Ok(Step::Thaw),
            "reset" => Ok(Step::Reset),
            "jump" => {
                let value = required("jump")?;
                value
                    .parse()
                    .map(Step::Jump)
                    .map_err(|_| invalid("jump", value))
            }
            "drag" => {
                let value = required("drag")?;
                value
                    .parse::<f32>()
                    .ok()
                    .filter(|dx| dx.is_finite())
                    .map(Step::Drag)
                    .ok_or_else(|| invalid("drag", value))
            }
            "swipe" => {
                let value = required("swipe")?;
                value
                    .parse::<SwipeDirection>()
                    .map(Step::Swipe)
                    .map_err(|_| invalid("swipe", value))
            }
            "wait" => {
                let value = required("wait")?;
                value
                    .parse::<u64>()
                    .map(|ms| Step::Wait(Duration::from_millis(ms)))
                    .map_err(|_| invalid("wait", value))
            }
            "resize" => {
                let value = required("resize")?;
                value
                    .parse::<f32>()
                    .ok()
                    .filter(|w| w.is_finite() && *w >= 0.0)
                    .map(Step::Resize)
                    .ok_or_else(|| invalid("resize", value))
            }
            _ => Err(StepParseError::Unknown(raw.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
            Step::Jump(index) => write!(f, "jump:{index}"),
            Step::Drag(dx) => write!(f, "drag:{dx}"),
            Step::Swipe(direction) => write!(f, "swipe:{direction}"),
            Step::Wait(delay) => write!(f, "wait:{}", delay.as_millis()),
            Step::Resize(width) => write!(f, "resize:{width}"),
            Step::Freeze => write!(f, "freeze"),
            Step::Thaw => write!(f, "thaw"),
            Step::Reset => write!(f, "reset"),
        }
    }
}

/// One line of simulator output.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<SlideOutcome>,
    pub snapshot: CarouselSnapshot,
}

/// A carousel mounted on a [`ManualHost`], driven step by step.
#[derive(Debug)]
pub struct Simulation {
    carousel: Carousel<ManualHost>,
}

impl Simulation {
    /// Mount a carousel of `items` items in a viewport `width` pixels wide
    /// and let the first frame settle.
    pub fn new(
        options: CarouselOptions,
        items: usize,
        width: f32,
    ) -> slidekit_core::Result<Self> {
        let mut carousel = Carousel::new(ManualHost::new(width), options, items)?;
        carousel.attach();
        carousel.settle();
        Ok(Self { carousel })
    }

    pub fn carousel(&self) -> &Carousel<ManualHost> {
        &self.carousel
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.carousel.snapshot()
    }

    /// Apply `step` and pump the host until the frame settles.
    pub fn apply(&mut self, step: Step) -> StepReport {
        let carousel = &mut self.carousel;
        let outcome = match step {
            Step::Next => Some(carousel.slide_next()),
            Step::Prev => Some(carousel.slide_prev()),
            Step::Jump(index) => Some(carousel.jump_to(index)),
            Step::Drag(dx) => {
                carousel.dispatch_gesture(&GestureEvent::touch());
                carousel.dispatch_gesture(&GestureEvent::drag(dx));
                carousel.dispatch_gesture(&GestureEvent::release(dx));
                None
            }
            Step::Swipe(direction) => {
                carousel.dispatch_gesture(&GestureEvent::swipe(direction));
                None
            }
            Step::Wait(delay) => {
                carousel.advance_clock(delay);
                None
            }
            Step::Resize(width) => {
                carousel.host_mut().set_width(width);
                carousel.on_resize();
                None
            }
            Step::Freeze => {
                carousel.set_frozen(true);
                None
            }
            Step::Thaw => {
                carousel.set_frozen(false);
                None
            }
            Step::Reset => {
                carousel.reset();
                None
            }
        };
        carousel.settle();
        tracing::debug!(%step, index = carousel.index(), "step applied");

        StepReport {
            step: step.to_string(),
            outcome,
            snapshot: carousel.snapshot(),
        }
    }

    /// Apply every step in order.
    pub fn run<I>(&mut self, steps: I) -> Vec<StepReport>
    where
        I: IntoIterator<Item = Step>,
    {
        steps.into_iter().map(|step| self.apply(step)).collect()
    }

    pub fn finish(self) -> ManualHost {
        self.carousel.destroy()
    }
}
