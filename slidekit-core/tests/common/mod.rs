#![allow(dead_code)]

use slidekit_core::testing::ManualHost;
use slidekit_core::{Carousel, CarouselOptions};

/// An attached, settled carousel with an empty write log.
pub fn mounted(options: CarouselOptions, items: usize, width: f32) -> Carousel<ManualHost> {
    let mut carousel =
        Carousel::new(ManualHost::new(width), options, items).expect("valid options");
    carousel.attach();
    carousel.settle();
    carousel.host_mut().clear_log();
    carousel
}

pub fn finite() -> CarouselOptions {
    CarouselOptions::default()
}

pub fn infinite() -> CarouselOptions {
    CarouselOptions {
        is_infinite: true,
        ..CarouselOptions::default()
    }
}

pub fn autosliding() -> CarouselOptions {
    CarouselOptions {
        is_autoslide: true,
        ..infinite()
    }
}

/// Offset and animation flag of the most recent write.
pub fn last_write(carousel: &Carousel<ManualHost>) -> Option<(f32, bool)> {
    carousel
        .host()
        .last_offset()
        .map(|applied| (applied.offset, applied.animated))
}

pub fn assert_in_bounds(carousel: &Carousel<ManualHost>) {
    let index = carousel.index();
    assert!(
        carousel.min_index() <= index && index <= carousel.max_index(),
        "index {index} outside {}..={}",
        carousel.min_index(),
        carousel.max_index()
    );
}
