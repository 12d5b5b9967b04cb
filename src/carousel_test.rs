use proptest::prelude::*;

use super::*;
use crate::host::{Host, MemoryHost};

fn mounted(total: usize) -> (Carousel, MemoryHost) {
    let carousel = Carousel::new(total, CarouselConfig::default());
    let mut host = MemoryHost::new();
    run(&mut host, &carousel.mount());
    (carousel, host)
}

fn run(host: &mut MemoryHost, effects: &[Effect]) {
    let failures = host.apply_all(effects);
    assert!(failures.is_empty(), "effects failed: {failures:?}");
}

fn transform(host: &MemoryHost) -> Option<&str> {
    host.style(Target::Track, "transform")
}

fn active_dots(host: &MemoryHost) -> Vec<usize> {
    host.dots_with_class("active")
}

// =============================================================
// Mount
// =============================================================

#[test]
fn mount_creates_one_tagged_dot_per_slide() {
    let (_, host) = mounted(4);
    assert_eq!(host.dot_count(), 4);
    for index in 0..4 {
        assert!(host.has_class(Target::Dot(index), "dot-btn"));
        assert_eq!(host.attribute(Target::Dot(index), "data-slide-index"), Some(index.to_string().as_str()));
    }
}

#[test]
fn mount_renders_first_slide() {
    let (carousel, host) = mounted(3);
    assert_eq!(carousel.current(), 0);
    assert_eq!(transform(&host), Some("translateX(0%)"));
    assert_eq!(active_dots(&host), vec![0]);
}

#[test]
fn mount_creates_dots_before_marking_them() {
    let carousel = Carousel::new(2, CarouselConfig::default());
    let effects = carousel.mount();
    let first_mark = effects.iter().position(|effect| matches!(effect, Effect::SetClass { .. }));
    let last_create = effects.iter().rposition(|effect| matches!(effect, Effect::CreateDot { .. }));
    assert!(last_create < first_mark);
}

// =============================================================
// go_to_slide
// =============================================================

#[test]
fn go_to_slide_in_range() {
    let (mut carousel, mut host) = mounted(5);
    run(&mut host, &carousel.go_to_slide(3));
    assert_eq!(carousel.current(), 3);
    assert_eq!(transform(&host), Some("translateX(-300%)"));
    assert_eq!(active_dots(&host), vec![3]);
}

#[test]
fn go_to_slide_negative_wraps_to_last() {
    let (mut carousel, mut host) = mounted(4);
    run(&mut host, &carousel.go_to_slide(-1));
    assert_eq!(carousel.current(), 3);
    assert_eq!(active_dots(&host), vec![3]);
}

#[test]
fn go_to_slide_far_negative_wraps_to_last() {
    let (mut carousel, _) = mounted(4);
    let _effects = carousel.go_to_slide(-17);
    assert_eq!(carousel.current(), 3);
}

#[test]
fn go_to_slide_total_wraps_to_first() {
    let (mut carousel, mut host) = mounted(4);
    run(&mut host, &carousel.go_to_slide(2));
    run(&mut host, &carousel.go_to_slide(4));
    assert_eq!(carousel.current(), 0);
    assert_eq!(transform(&host), Some("translateX(0%)"));
    assert_eq!(active_dots(&host), vec![0]);
}

#[test]
fn go_to_slide_far_past_end_wraps_to_first() {
    let (mut carousel, _) = mounted(4);
    let _effects = carousel.go_to_slide(i64::MAX);
    assert_eq!(carousel.current(), 0);
}

#[test]
fn single_slide_always_stays_on_zero() {
    let (mut carousel, mut host) = mounted(1);
    run(&mut host, &carousel.next());
    assert_eq!(carousel.current(), 0);
    run(&mut host, &carousel.prev());
    assert_eq!(carousel.current(), 0);
    assert_eq!(active_dots(&host), vec![0]);
}

// =============================================================
// prev / next
// =============================================================

#[test]
fn next_twice_then_wrap() {
    let (mut carousel, mut host) = mounted(3);

    run(&mut host, &carousel.next());
    run(&mut host, &carousel.next());
    assert_eq!(carousel.current(), 2);
    assert_eq!(carousel.offset_percent(), -200);
    assert_eq!(transform(&host), Some("translateX(-200%)"));
    assert_eq!(active_dots(&host), vec![2]);

    run(&mut host, &carousel.next());
    assert_eq!(carousel.current(), 0);
    assert_eq!(carousel.offset_percent(), 0);
    assert_eq!(transform(&host), Some("translateX(0%)"));
    assert_eq!(active_dots(&host), vec![0]);
}

#[test]
fn prev_from_first_wraps_to_last() {
    let (mut carousel, mut host) = mounted(3);
    run(&mut host, &carousel.prev());
    assert_eq!(carousel.current(), 2);
    assert_eq!(active_dots(&host), vec![2]);
}

#[test]
fn prev_steps_back() {
    let (mut carousel, mut host) = mounted(3);
    run(&mut host, &carousel.go_to_slide(2));
    run(&mut host, &carousel.prev());
    assert_eq!(carousel.current(), 1);
    assert_eq!(transform(&host), Some("translateX(-100%)"));
}

// =============================================================
// update_slider
// =============================================================

#[test]
fn update_slider_clears_container_then_marks_current() {
    let mut carousel = Carousel::new(3, CarouselConfig::default());
    let effects = carousel.go_to_slide(1);
    let clear = effects.iter().position(|effect| matches!(effect, Effect::ClearDots { .. }));
    let marks: Vec<(usize, bool)> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::SetClass { target: Target::Dot(index), on, .. } => Some((*index, *on)),
            _ => None,
        })
        .collect();
    let first_mark = effects.iter().position(|effect| matches!(effect, Effect::SetClass { .. }));
    assert!(clear.is_some() && clear < first_mark);
    assert_eq!(marks, vec![(1, true)]);
}

#[test]
fn update_slider_clears_dots_from_markup() {
    let carousel = Carousel::new(2, CarouselConfig::default());
    let mut host = MemoryHost::new().with_markup_dot("dot-btn active").with_markup_dot("dot-btn");
    run(&mut host, &carousel.mount());
    assert_eq!(host.markup_dots_with_class("active"), 0);
    assert_eq!(active_dots(&host), vec![0]);
}

#[test]
fn custom_active_class_is_used() {
    let config = CarouselConfig { active_class: "is-current".into(), ..CarouselConfig::default() };
    let mut carousel = Carousel::new(2, config);
    let mut host = MemoryHost::new();
    run(&mut host, &carousel.mount());
    run(&mut host, &carousel.next());
    assert_eq!(host.dots_with_class("is-current"), vec![1]);
    assert!(host.dots_with_class("active").is_empty());
}

// =============================================================
// Dot index parsing
// =============================================================

#[test]
fn parse_dot_index_accepts_integers() {
    assert_eq!(Carousel::parse_dot_index("2"), Ok(2));
    assert_eq!(Carousel::parse_dot_index(" 7 "), Ok(7));
    assert_eq!(Carousel::parse_dot_index("-1"), Ok(-1));
}

#[test]
fn parse_dot_index_rejects_garbage() {
    assert!(Carousel::parse_dot_index("").is_err());
    assert!(Carousel::parse_dot_index("two").is_err());
    assert!(Carousel::parse_dot_index("1.5").is_err());
}

#[test]
fn generated_dot_tags_parse_back_to_their_slide() {
    let (_, host) = mounted(4);
    for index in 0..4 {
        let tag = host.attribute(Target::Dot(index), "data-slide-index").unwrap_or_default();
        assert_eq!(Carousel::parse_dot_index(tag), Ok(i64::try_from(index).expect("small index")));
    }
}

// =============================================================
// Empty carousel
// =============================================================

#[test]
fn empty_carousel_is_inert() {
    let mut carousel = Carousel::new(0, CarouselConfig::default());
    assert!(carousel.is_empty());
    assert!(carousel.mount().is_empty());
    assert!(carousel.update_slider().is_empty());
    assert!(carousel.next().is_empty());
    assert!(carousel.prev().is_empty());
    assert!(carousel.go_to_slide(3).is_empty());
    assert_eq!(carousel.current(), 0);
}

// =============================================================
// Properties
// =============================================================

#[derive(Debug, Clone)]
enum Nav {
    Prev,
    Next,
    Jump(i64),
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Prev), Just(Nav::Next), (-20_i64..20).prop_map(Nav::Jump)]
}

proptest! {
    #[test]
    fn current_stays_in_range(total in 1_usize..12, steps in prop::collection::vec(nav_strategy(), 0..64)) {
        let (mut carousel, mut host) = mounted(total);
        for step in steps {
            let effects = match step {
                Nav::Prev => carousel.prev(),
                Nav::Next => carousel.next(),
                Nav::Jump(index) => carousel.go_to_slide(index),
            };
            prop_assert!(host.apply_all(&effects).is_empty());
            prop_assert!(carousel.current() < total);
            prop_assert_eq!(active_dots(&host), vec![carousel.current()]);
            prop_assert_eq!(carousel.offset_percent(), -(carousel.current() as i64) * 100);
        }
    }

    #[test]
    fn next_then_prev_returns_to_start(total in 1_usize..12, start in 0_i64..12) {
        let (mut carousel, _) = mounted(total);
        let _jump = carousel.go_to_slide(start);
        let before = carousel.current();
        let _forward = carousel.next();
        let _back = carousel.prev();
        prop_assert_eq!(carousel.current(), before);
    }
}
