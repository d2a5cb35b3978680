//! # Slidekit Core
//!
//! Headless carousel engine: a horizontally sliding strip of items with
//! optional infinite looping, drag and swipe input, auto-advance and dot
//! navigation.
//!
//! ## Overview
//!
//! The engine owns no pixels. A host implements
//! [`CarouselHost`](slidekit_contracts::host::CarouselHost) to report the
//! viewport width, receive track offsets, and hand deferred tasks back
//! through [`Carousel::run_task`]. Everything else lives here:
//!
//! - **Index model**: the logical position over clone-padded items, with
//!   bounds recomputed whenever the item count or clone depth changes
//! - **Offset calculator**: the pure function from index, item width and
//!   alignment to the track translation
//! - **Gesture handling**: drag previews, the commit threshold and the
//!   vertical scroll lock
//! - **Infinite wrap**: the three-phase teleport that makes the boundary
//!   crossing invisible
//! - **Auto-advance**: a single re-armed timer, paused by touch and freeze
//!
//! ## Architecture
//!
//! - [`carousel`]: the orchestrator hosts talk to
//! - [`index`], [`offset`], [`layout`]: pure geometry
//! - [`gesture`], [`wrap`], [`autoslide`], [`freeze`]: the state machines
//!   the orchestrator drives
//! - [`testing`]: an in-memory host with a virtual clock
//!
//! ## Examples
//!
//! ```
//! use slidekit_core::{Carousel, CarouselOptions, testing::ManualHost};
//!
//! let options = CarouselOptions {
//!     is_infinite: true,
//!     ..CarouselOptions::default()
//! };
//! let mut carousel = Carousel::new(ManualHost::new(300.0), options, 4)
//!     .expect("default options are valid");
//! carousel.attach();
//! carousel.settle();
//!
//! for _ in 0..4 {
//!     carousel.slide_next();
//!     carousel.settle();
//! }
//! assert_eq!(carousel.index(), carousel.min_index());
//! ```

#![allow(missing_docs)]

pub mod autoslide;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod freeze;
pub mod gesture;
pub mod index;
pub mod layout;
pub mod offset;
pub mod snapshot;
pub mod testing;
pub mod wrap;

pub use carousel::Carousel;
pub use config::CarouselOptions;
pub use error::{CarouselError, Result};
pub use snapshot::CarouselSnapshot;

pub use slidekit_contracts::prelude::*;
pub use slidekit_model::{
    Alignment, CarouselTask, Direction, GestureEvent, GestureKind, SlideOutcome,
    SwipeDirection, TimerHandle,
};
