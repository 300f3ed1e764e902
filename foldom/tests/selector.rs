use foldom::{Document, Element, Selector, SelectorError};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_class() {
    let selector = Selector::parse(".collapse-container").unwrap();
    assert_eq!(selector.tag, None);
    assert_eq!(selector.id, None);
    assert_eq!(selector.classes, vec!["collapse-container".to_string()]);
}

#[test]
fn test_parse_compound() {
    let selector: Selector = "DIV#faq.card.open".parse().unwrap();
    assert_eq!(selector.tag.as_deref(), Some("div"));
    assert_eq!(selector.id.as_deref(), Some("faq"));
    assert_eq!(selector.classes, vec!["card".to_string(), "open".to_string()]);
}

#[test]
fn test_parse_trims_whitespace() {
    let selector = Selector::parse("  .card  ").unwrap();
    assert_eq!(selector, Selector::class("card"));
}

#[test]
fn test_parse_descendant() {
    let selector = Selector::parse("section#faq   .card").unwrap();
    assert_eq!(selector.classes, vec!["card".to_string()]);
    assert_eq!(selector.ancestors.len(), 1);
    assert_eq!(selector.ancestors[0].tag.as_deref(), Some("section"));
    assert_eq!(selector.ancestors[0].id.as_deref(), Some("faq"));
    assert_eq!(selector.to_string(), "section#faq .card");
}

#[test]
fn test_display_round_trips() {
    let selector = Selector::parse("section#faq.card").unwrap();
    assert_eq!(selector.to_string(), "section#faq.card");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_parse_empty() {
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
}

#[test]
fn test_parse_missing_name() {
    assert_eq!(
        Selector::parse("div."),
        Err(SelectorError::MissingName {
            marker: '.',
            position: 4
        })
    );
}

#[test]
fn test_parse_child_combinator_rejected() {
    assert_eq!(
        Selector::parse(".a > .b"),
        Err(SelectorError::UnexpectedChar {
            ch: '>',
            position: 3
        })
    );
}

#[test]
fn test_parse_duplicate_id() {
    assert_eq!(Selector::parse("#a#b"), Err(SelectorError::DuplicateId));
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_matches_parts() {
    let selector = Selector::parse("div.card").unwrap();
    let classes = vec!["card".to_string(), "wide".to_string()];

    assert!(selector.matches_parts("div", None, &classes));
    assert!(selector.matches_parts("DIV", Some("x"), &classes));
    assert!(!selector.matches_parts("span", None, &classes));
    assert!(!selector.matches_parts("div", None, &[]));
}

#[test]
fn test_descendant_matching() {
    let doc = Document::new(Element::div().children(vec![
        Element::div().id("faq").child(
            Element::div()
                .class("group")
                .child(Element::div().class("card")),
        ),
        Element::div().class("card"),
    ]));
    let root = doc.root();
    let nested = doc.query_selector_all(root, &Selector::class("card"));
    assert_eq!(nested.len(), 2);

    let scoped = Selector::parse("#faq .card").unwrap();
    assert!(doc.matches(nested[0], &scoped));
    assert!(!doc.matches(nested[1], &scoped));
    assert_eq!(doc.query_selector_all(root, &scoped), vec![nested[0]]);

    let chained = Selector::parse("#faq .group .card").unwrap();
    assert_eq!(doc.query_selector_all(root, &chained), vec![nested[0]]);

    let wrong_order = Selector::parse(".group #faq .card").unwrap();
    assert!(doc.query_selector_all(root, &wrong_order).is_empty());
}
