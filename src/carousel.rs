//! Carousel: cyclic slide navigation with generated dot indicators.
//!
//! DESIGN
//! ======
//! The slide count is fixed at mount. `current` always lies in `[0, total)`,
//! the track offset is `-current * 100%` and exactly one dot (the one at
//! `current`) carries the active class. All navigation goes through
//! [`Carousel::go_to_slide`], which owns the wraparound rule.
//!
//! An empty carousel is inert: no dots, no offset, navigation does nothing.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::num::ParseIntError;

use crate::config::CarouselConfig;
use crate::consts::{SLIDE_STEP_PERCENT, TRACK_TRANSFORM_PROPERTY};
use crate::effect::{Effect, Target};

/// Carousel state over a fixed number of slides.
#[derive(Debug, Clone)]
pub struct Carousel {
    current: usize,
    total: usize,
    config: CarouselConfig,
}

impl Carousel {
    /// Create a carousel over `total` slides, showing the first.
    #[must_use]
    pub fn new(total: usize, config: CarouselConfig) -> Self {
        Self { current: 0, total, config }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Track offset in percent for the current slide (`0`, `-100`, `-200`, ...).
    #[must_use]
    pub fn offset_percent(&self) -> i64 {
        -to_signed(self.current).saturating_mul(SLIDE_STEP_PERCENT)
    }

    /// CSS `transform` value for the current offset.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }

    /// Parse a dot's index attribute. Surrounding whitespace is tolerated.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the attribute is not an integer.
    pub fn parse_dot_index(raw: &str) -> Result<i64, ParseIntError> {
        raw.trim().parse()
    }

    /// Startup: one dot per slide, then the initial render of slide 0.
    #[must_use]
    pub fn mount(&self) -> Vec<Effect> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut effects: Vec<Effect> = (0..self.total)
            .map(|index| Effect::CreateDot {
                index,
                class: self.config.dot_class.clone(),
                attribute: self.config.index_attribute.clone(),
            })
            .collect();
        effects.extend(self.update_slider());
        effects
    }

    /// Render the offset, clear the active mark from every dot in the
    /// container and set it on the current one.
    #[must_use]
    pub fn update_slider(&self) -> Vec<Effect> {
        if self.is_empty() {
            return Vec::new();
        }
        vec![
            Effect::SetStyle {
                target: Target::Track,
                property: TRACK_TRANSFORM_PROPERTY,
                value: Some(self.transform()),
            },
            Effect::ClearDots { dot_class: self.config.dot_class.clone(), class: self.config.active_class.clone() },
            Effect::SetClass { target: Target::Dot(self.current), class: self.config.active_class.clone(), on: true },
        ]
    }

    /// Jump to `index` with cyclic wraparound: below zero lands on the last
    /// slide, at or past the end lands on the first.
    pub fn go_to_slide(&mut self, index: i64) -> Vec<Effect> {
        if self.is_empty() {
            return Vec::new();
        }
        self.current = match usize::try_from(index) {
            Err(_) => self.total - 1,
            Ok(index) if index >= self.total => 0,
            Ok(index) => index,
        };
        self.update_slider()
    }

    /// Previous-control handler.
    pub fn prev(&mut self) -> Vec<Effect> {
        self.go_to_slide(to_signed(self.current) - 1)
    }

    /// Next-control handler.
    pub fn next(&mut self) -> Vec<Effect> {
        self.go_to_slide(to_signed(self.current) + 1)
    }
}

fn to_signed(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
