//! FAQ Example
//!
//! Builds a small FAQ page, drives it with keyboard and pointer events and
//! prints the content heights as the animations run.

use std::fs::File;
use std::time::Duration;

use collapse::prelude::*;
use collapse::{Step, a11y};
use foldom::{Easing, FocusState, Scheduler, TransitionConfig, VirtualScheduler};
use simplelog::{Config, LevelFilter, WriteLogger};

const DURATION: Duration = Duration::from_millis(300);

fn question(title: &str, answer: &str) -> Element {
    Element::div().class("collapse-container").children(vec![
        Element::div()
            .class("collapse-header")
            .child(Element::text(title))
            .child(Element::span().class("collapse-arrow")),
        Element::div()
            .class("collapse-content")
            .max_height(MaxHeight::Px(0))
            .transition(TransitionConfig::new(DURATION, Easing::EaseInOut))
            .child(Element::text(answer)),
    ])
}

fn print_heights(doc: &Document, group: &PanelGroup<VirtualScheduler<Step>>) {
    let now = group.scheduler().now();
    let heights: Vec<String> = group
        .panels()
        .iter()
        .map(|panel| {
            format!(
                "{}={:>2} ({}, expanded={})",
                panel.id(),
                doc.visible_height(panel.content(), now),
                doc.max_height(panel.content()),
                doc.attribute(panel.header(), a11y::ARIA_EXPANDED).unwrap_or("?"),
            )
        })
        .collect();
    println!("{:>5}ms  {}", now.as_millis(), heights.join("  "));
}

fn run_for(doc: &mut Document, group: &mut PanelGroup<VirtualScheduler<Step>>, total: Duration) {
    let step = Duration::from_millis(50);
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        group.advance(doc, step);
        elapsed += step;
        print_heights(doc, group);
    }
}

fn main() {
    let log_file = File::create("collapse-faq.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(Element::div().children(vec![
        question("What is this?", "A collapsible FAQ.\nEach answer folds away."),
        question("Can several be open?", "Only one at a time here."),
        question(
            "How is it animated?",
            "By moving max-height\nthrough measured values\nand releasing it\nwhen done.",
        ),
        // Incomplete structure: skipped at registration
        Element::div().class("collapse-container").child(Element::text("orphan")),
    ]));

    let config = GroupOptions::new()
        .duration(DURATION)
        .init_open(true)
        .build()
        .expect("valid options");
    let mut group = PanelGroup::new(&mut doc, config);
    println!(
        "registered {} panels, skipped {}",
        group.registration().bound(),
        group.registration().skipped.len()
    );
    run_for(&mut doc, &mut group, Duration::from_millis(400));

    // Tab to the third header and press Enter
    let mut focus = FocusState::new();
    for _ in 0..3 {
        focus.focus_next(&doc);
    }
    if let Some(target) = focus.focused() {
        println!("-- Enter on {}", doc.attribute(target, "id").unwrap_or("?"));
        group.handle_event(&mut doc, &Event::key(target, Key::Enter));
    }
    run_for(&mut doc, &mut group, Duration::from_millis(400));

    // Click the second header's arrow
    let arrow = group.panels()[1].indicator();
    if let Some(arrow) = arrow {
        println!("-- click on arrow of collapse-1");
        group.handle_event(&mut doc, &Event::click(arrow));
    }
    run_for(&mut doc, &mut group, Duration::from_millis(400));

    println!("-- close all");
    group.close_all(&mut doc);
    group.settle(&mut doc);
    print_heights(&doc, &group);

    group.destroy(&mut doc);
}
