use std::time::Duration;

use collapse::prelude::*;
use collapse::{Panel, Step};
use foldom::{Easing, Scheduler, TransitionConfig, VirtualScheduler};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// One panel whose content is 8 rows tall.
fn page(with_transition: bool) -> Document {
    let mut content = Element::div()
        .class("collapse-content")
        .max_height(MaxHeight::Px(0))
        .child(Element::text("body").height(8));
    if with_transition {
        content = content.transition(TransitionConfig::new(ms(100), Easing::Linear));
    }

    Document::new(Element::div().child(
        Element::div().class("collapse-container").children(vec![
            Element::div().class("collapse-header").child(Element::text("Title")),
            content,
        ]),
    ))
}

/// Frames every 10ms, 100ms animations.
fn group(doc: &mut Document) -> PanelGroup<VirtualScheduler<Step>> {
    let config = GroupOptions::new().duration(ms(100)).build().unwrap();
    PanelGroup::with_scheduler(doc, config, VirtualScheduler::with_frame_interval(ms(10)))
}

fn first(group: &PanelGroup<VirtualScheduler<Step>>) -> Panel {
    group.panels()[0].clone()
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_opening_phases() {
    let mut doc = page(false);
    let mut group = group(&mut doc);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(0));
    assert!(!doc.has_class(panel.header(), "active"));
    assert_eq!(doc.attribute(panel.header(), "aria-expanded"), Some("false"));

    // Next frame: measured height, markers and ARIA
    assert_eq!(group.advance(&mut doc, ms(10)), 1);
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));
    assert!(doc.has_class(panel.container(), "active"));
    assert!(doc.has_class(panel.content(), "active"));
    assert_eq!(doc.attribute(panel.header(), "aria-expanded"), Some("true"));
    assert_eq!(doc.attribute(panel.content(), "aria-hidden"), Some("false"));
    assert_eq!(group.state(panel.handle()), Some(PanelState::Opening));

    // Duration after the measure: relax
    group.advance(&mut doc, ms(99));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));
    group.advance(&mut doc, ms(1));
    assert_eq!(group.scheduler().now(), ms(110));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::None);
    assert_eq!(group.state(panel.handle()), Some(PanelState::Open));
    assert!(group.is_settled());
}

#[test]
fn test_relax_skipped_when_height_was_replaced() {
    let mut doc = page(false);
    let mut group = group(&mut doc);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    group.advance(&mut doc, ms(10));
    doc.set_max_height(panel.content(), MaxHeight::Px(3), group.scheduler().now());
    group.settle(&mut doc);

    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(3));
    assert_eq!(group.state(panel.handle()), Some(PanelState::Open));
}

#[test]
fn test_open_content_follows_reflow() {
    let mut doc = page(false);
    let mut group = group(&mut doc);
    let panel = first(&group);
    let body = doc.children(panel.content())[0];

    group.open(&mut doc, panel.handle());
    group.settle(&mut doc);
    doc.set_height(body, 20);

    let now = group.scheduler().now();
    assert_eq!(doc.visible_height(panel.content(), now), 20);
}

#[test]
fn test_unset_limit_opens_without_delay() {
    let mut doc = Document::new(Element::div().child(
        Element::div().class("collapse-container").children(vec![
            Element::div().class("collapse-header"),
            Element::div().class("collapse-content").height(5),
        ]),
    ));
    let mut group = group(&mut doc);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(0));
    assert_eq!(group.scheduler().next_deadline(), Some(ms(10)));
}

// ============================================================================
// Closing
// ============================================================================

#[test]
fn test_closing_phases() {
    let mut doc = page(false);
    let mut group = group(&mut doc);
    let panel = first(&group);
    group.open(&mut doc, panel.handle());
    group.settle(&mut doc);
    assert_eq!(group.scheduler().now(), ms(110));

    // Pin the unconstrained height right away
    group.close(&mut doc, panel.handle());
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));
    assert_eq!(group.state(panel.handle()), Some(PanelState::Closing));

    // Next frame (120ms): collapse, markers still present
    group.advance(&mut doc, ms(10));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(0));
    assert!(doc.has_class(panel.header(), "active"));
    assert!(group.is_open(panel.handle()));

    // Settle at 220ms
    group.advance(&mut doc, ms(99));
    assert!(group.is_open(panel.handle()));
    group.advance(&mut doc, ms(1));
    assert!(!group.is_open(panel.handle()));
    assert!(!doc.has_class(panel.header(), "active"));
    assert_eq!(doc.attribute(panel.header(), "aria-expanded"), Some("false"));
    assert_eq!(doc.attribute(panel.content(), "aria-hidden"), Some("true"));
    assert_eq!(group.state(panel.handle()), Some(PanelState::Closed));
}

// ============================================================================
// Resume and stale steps
// ============================================================================

#[test]
fn test_reopen_mid_close_resumes_after_delay() {
    let mut doc = page(false);
    let mut group = group(&mut doc);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    group.advance(&mut doc, ms(50));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));

    // At 50ms: close pins and waits for the 60ms frame, the reopen pins
    // again and waits the 10ms resume delay
    group.close(&mut doc, panel.handle());
    group.open(&mut doc, panel.handle());
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));

    // 60ms: the stale collapse is dropped, the resumed opening zeroes
    group.advance(&mut doc, ms(10));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(0));

    // 70ms: measure
    group.advance(&mut doc, ms(10));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));

    // 110ms: the first opening's relax is stale and must not fire
    group.advance(&mut doc, ms(40));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::Px(8));
    assert_eq!(group.state(panel.handle()), Some(PanelState::Opening));

    // 170ms: the resumed opening relaxes
    group.advance(&mut doc, ms(60));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::None);
    assert_eq!(group.state(panel.handle()), Some(PanelState::Open));
}

#[test]
fn test_stale_close_settle_keeps_panel_open() {
    let mut doc = page(false);
    let mut group = group(&mut doc);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    group.settle(&mut doc);
    group.close(&mut doc, panel.handle());
    group.advance(&mut doc, ms(50));
    group.open(&mut doc, panel.handle());
    group.settle(&mut doc);

    assert!(group.is_open(panel.handle()));
    assert!(doc.has_class(panel.container(), "active"));
    assert_eq!(doc.attribute(panel.header(), "aria-expanded"), Some("true"));
    assert_eq!(group.active_panel(), Some(panel.handle()));
}

// ============================================================================
// Visual height
// ============================================================================

#[test]
fn test_visible_height_animates_with_transition() {
    let mut doc = page(true);
    let mut group = group(&mut doc);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    group.advance(&mut doc, ms(10));
    assert_eq!(doc.visible_height(panel.content(), ms(10)), 0);
    assert_eq!(doc.visible_height(panel.content(), ms(60)), 4);
    assert_eq!(doc.visible_height(panel.content(), ms(110)), 8);

    group.settle(&mut doc);
    group.close(&mut doc, panel.handle());
    // Pinning from `none` jumps; the collapse frame animates down
    assert!(!doc.is_transitioning(panel.content(), group.scheduler().now()));
    group.advance(&mut doc, ms(10));
    let start = group.scheduler().now();
    assert!(doc.is_transitioning(panel.content(), start));
    assert_eq!(doc.visible_height(panel.content(), start + ms(50)), 4);
}

#[test]
fn test_zero_duration() {
    let mut doc = page(false);
    let config = GroupOptions::new().duration(Duration::ZERO).build().unwrap();
    let mut group = PanelGroup::new(&mut doc, config);
    let panel = first(&group);

    group.open(&mut doc, panel.handle());
    group.settle(&mut doc);
    assert_eq!(group.scheduler().now(), ms(16));
    assert_eq!(doc.max_height(panel.content()), MaxHeight::None);
    assert_eq!(group.state(panel.handle()), Some(PanelState::Open));
}
