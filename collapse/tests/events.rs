use collapse::prelude::*;
use foldom::{FocusState, Modifiers, MouseButton};

fn page() -> Document {
    Document::new(Element::div().children((0..2).map(|i| {
        Element::div().class("collapse-container").children(vec![
            Element::div()
                .class("collapse-header")
                .child(Element::text(format!("Header {i}")))
                .child(Element::span().class("collapse-arrow")),
            Element::div()
                .class("collapse-content")
                .child(Element::text("body").height(3)),
        ])
    })))
}

fn setup() -> (Document, PanelGroup) {
    let mut doc = page();
    let group = PanelGroup::new(&mut doc, GroupConfig::default());
    (doc, group)
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_click_on_header_toggles() {
    let (mut doc, mut group) = setup();
    let panel = group.panels()[0].clone();

    let result = group.handle_event(&mut doc, &Event::click(panel.header()));
    assert_eq!(result, EventResult::Consumed);
    assert!(result.is_handled());
    assert_eq!(group.state(panel.handle()), Some(PanelState::Opening));

    group.settle(&mut doc);
    group.handle_event(&mut doc, &Event::click(panel.header()));
    group.settle(&mut doc);
    assert!(!group.is_open(panel.handle()));
}

#[test]
fn test_click_inside_header_bubbles() {
    let (mut doc, mut group) = setup();
    let panel = group.panels()[1].clone();
    let arrow = panel.indicator().unwrap();

    assert_eq!(
        group.handle_event(&mut doc, &Event::click(arrow)),
        EventResult::Consumed
    );
    assert!(group.is_open(panel.handle()));
    assert!(!group.is_open(group.panels()[0].handle()));
}

#[test]
fn test_non_primary_click_is_ignored() {
    let (mut doc, mut group) = setup();
    let panel = group.panels()[0].clone();
    let event = Event::Click {
        target: Some(panel.header()),
        button: MouseButton::Right,
    };

    assert_eq!(group.handle_event(&mut doc, &event), EventResult::Ignored);
    assert!(group.is_settled());
}

#[test]
fn test_click_on_content_is_ignored() {
    let (mut doc, mut group) = setup();
    let panel = group.panels()[0].clone();

    assert_eq!(
        group.handle_event(&mut doc, &Event::click(panel.content())),
        EventResult::Ignored
    );
    assert!(!group.is_open(panel.handle()));
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_enter_and_space_toggle() {
    let (mut doc, mut group) = setup();
    let panel = group.panels()[0].clone();

    let enter = Event::key(panel.header(), Key::Enter);
    assert_eq!(group.handle_event(&mut doc, &enter), EventResult::Consumed);
    assert!(group.is_open(panel.handle()));

    let space = Event::key(panel.header(), Key::Char(' '));
    assert_eq!(group.handle_event(&mut doc, &space), EventResult::Consumed);
    assert_eq!(group.state(panel.handle()), Some(PanelState::Closing));
}

#[test]
fn test_other_keys_are_not_consumed() {
    let (mut doc, mut group) = setup();
    let header = group.panels()[0].header();

    for key in [Key::Char('a'), Key::Escape, Key::Tab, Key::Down] {
        let event = Event::key(header, key);
        assert_eq!(group.handle_event(&mut doc, &event), EventResult::Ignored);
    }
    assert!(group.is_settled());
}

#[test]
fn test_modified_activation_keys_toggle() {
    let (mut doc, mut group) = setup();
    let panel = group.panels()[0].clone();

    let keys = [
        (Key::Enter, Modifiers::shift()),
        (Key::Char(' '), Modifiers::shift()),
        (Key::Enter, Modifiers::ctrl()),
        (Key::Char(' '), Modifiers::alt()),
    ];
    for (n, (key, modifiers)) in keys.into_iter().enumerate() {
        let event = Event::Key {
            target: Some(panel.header()),
            key,
            modifiers,
        };
        assert_eq!(group.handle_event(&mut doc, &event), EventResult::Consumed);
        group.settle(&mut doc);
        assert_eq!(group.is_open(panel.handle()), n % 2 == 0);
    }
}

#[test]
fn test_keyboard_navigation_reaches_headers() {
    let (mut doc, mut group) = setup();
    let headers: Vec<_> = group.panels().iter().map(|p| p.header()).collect();
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&doc), Some(headers[0]));
    assert_eq!(focus.focus_next(&doc), Some(headers[1]));

    let target = focus.focused().unwrap();
    group.handle_event(&mut doc, &Event::key(target, Key::Char(' ')));
    group.settle(&mut doc);

    assert!(group.is_open(group.panels()[1].handle()));
    assert_eq!(doc.attribute(headers[1], "aria-expanded"), Some("true"));
}
