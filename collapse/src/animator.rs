//! Height animation of a panel's content region.
//!
//! A transition cannot run to or from an unconstrained height, so each
//! direction moves `max-height` through explicit pixel values: opening goes
//! `0px` → measured height → `none`, closing goes measured height → `0px`.
//! Every step is a scheduler task tagged with the panel's generation.

use foldom::{Document, MaxHeight, Scheduler};

use crate::a11y;
use crate::config::GroupConfig;
use crate::panel::Panel;

/// Phases of an opening or closing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Collapse to `0px` so the transition has a starting point.
    OpenStart,
    /// Measure the content and expand to it; flip markers and ARIA.
    OpenMeasure,
    /// Release the limit if nothing replaced the measured value.
    OpenRelax { measured: u32 },
    /// Collapse the pinned height to `0px`.
    CloseCollapse,
    /// Clear markers and ARIA; the panel is closed.
    CloseSettle,
}

/// A scheduled animation step for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub(crate) panel: usize,
    pub(crate) generation: u64,
    pub(crate) phase: Phase,
}

impl Step {
    pub(crate) fn new(panel: &Panel, phase: Phase) -> Self {
        Self {
            panel: panel.index,
            generation: panel.generation,
            phase,
        }
    }

    pub fn panel_index(&self) -> usize {
        self.panel
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Start the opening animation.
///
/// If the content still carries a height limit (an interrupted closing or
/// a measured height), pin it to the current natural height and restart
/// after the resume delay.
pub(crate) fn begin_open<S: Scheduler<Step>>(
    doc: &mut Document,
    scheduler: &mut S,
    config: &GroupConfig,
    panel: &Panel,
) {
    let current = doc.max_height(panel.content);
    if current != MaxHeight::Unset && !current.is_zero() {
        let pinned = doc.scroll_height(panel.content);
        doc.set_max_height(panel.content, MaxHeight::Px(pinned), scheduler.now());
        log::trace!("{}: resuming open from {current}", panel.id);
        scheduler.set_timeout(config.resume_delay(), Step::new(panel, Phase::OpenStart));
    } else {
        open_start(doc, scheduler, panel);
    }
}

/// Start the closing animation.
pub(crate) fn begin_close<S: Scheduler<Step>>(doc: &mut Document, scheduler: &mut S, panel: &Panel) {
    let pinned = doc.scroll_height(panel.content);
    doc.set_max_height(panel.content, MaxHeight::Px(pinned), scheduler.now());
    scheduler.request_frame(Step::new(panel, Phase::CloseCollapse));
}

/// Apply one step to the document. The caller has already checked that
/// the step's generation is current.
pub(crate) fn run<S: Scheduler<Step>>(
    doc: &mut Document,
    scheduler: &mut S,
    config: &GroupConfig,
    panel: &Panel,
    phase: Phase,
) {
    log::trace!("{}: {phase:?} at {:?}", panel.id, scheduler.now());
    let now = scheduler.now();

    match phase {
        Phase::OpenStart => open_start(doc, scheduler, panel),
        Phase::OpenMeasure => {
            let measured = doc.scroll_height(panel.content);
            doc.set_max_height(panel.content, MaxHeight::Px(measured), now);
            for node in panel.marked_nodes() {
                doc.add_class(node, config.active_class());
            }
            a11y::set_expanded(doc, panel, true);
            scheduler.set_timeout(
                config.duration(),
                Step::new(panel, Phase::OpenRelax { measured }),
            );
        }
        Phase::OpenRelax { measured } => {
            if doc.max_height(panel.content) == MaxHeight::Px(measured) {
                doc.set_max_height(panel.content, MaxHeight::None, now);
            }
        }
        Phase::CloseCollapse => {
            doc.set_max_height(panel.content, MaxHeight::Px(0), now);
            scheduler.set_timeout(config.duration(), Step::new(panel, Phase::CloseSettle));
        }
        Phase::CloseSettle => {
            for node in panel.marked_nodes() {
                doc.remove_class(node, config.active_class());
            }
            a11y::set_expanded(doc, panel, false);
        }
    }
}

fn open_start<S: Scheduler<Step>>(doc: &mut Document, scheduler: &mut S, panel: &Panel) {
    doc.set_max_height(panel.content, MaxHeight::Px(0), scheduler.now());
    scheduler.request_frame(Step::new(panel, Phase::OpenMeasure));
}
