//! The panel group: registry, bindings and the open/close state machine.

use std::collections::HashMap;
use std::time::Duration;

use foldom::{Document, Event, ListenerId, Scheduler, VirtualScheduler};

use crate::a11y;
use crate::animator::{self, Phase, Step};
use crate::binder::{self, Binding, EventResult};
use crate::config::GroupConfig;
use crate::panel::{Panel, PanelId, PanelState};
use crate::registry::{self, Registration};

/// A set of collapsible panels sharing one configuration.
///
/// The group owns its panels and the scheduler that times their
/// animations. Hosts feed it input through [`PanelGroup::handle_event`]
/// and drive time with [`PanelGroup::advance`] or [`PanelGroup::settle`].
pub struct PanelGroup<S: Scheduler<Step> = VirtualScheduler<Step>> {
    config: GroupConfig,
    panels: Vec<Panel>,
    bindings: Vec<Binding>,
    listeners: HashMap<ListenerId, usize>,
    /// Most recently opened panel. A lookup aid; each panel's flag is
    /// authoritative.
    active: Option<usize>,
    scheduler: S,
    registration: Registration,
    destroyed: bool,
}

impl PanelGroup {
    /// Register panels in `doc` with a virtual scheduler.
    pub fn new(doc: &mut Document, config: GroupConfig) -> Self {
        Self::with_scheduler(doc, config, VirtualScheduler::new())
    }
}

impl<S: Scheduler<Step>> PanelGroup<S> {
    /// Register panels in `doc`, annotate and bind them, and apply
    /// `init_open`.
    pub fn with_scheduler(doc: &mut Document, config: GroupConfig, scheduler: S) -> Self {
        let (panels, registration) =
            registry::discover(doc, config.selector(), config.id_prefix());

        let mut group = Self {
            config,
            panels,
            bindings: Vec::new(),
            listeners: HashMap::new(),
            active: None,
            scheduler,
            registration,
            destroyed: false,
        };

        for panel in &group.panels {
            a11y::annotate(doc, panel, group.config.id_prefix());
            let binding = binder::bind(doc, panel);
            group.listeners.insert(binding.click, panel.index);
            group.listeners.insert(binding.key, panel.index);
            group.bindings.push(binding);
        }

        log::info!(
            "collapse group '{}' initialized: {} panels ({} skipped)",
            group.config.selector(),
            group.registration.bound(),
            group.registration.skipped.len()
        );

        if group.config.init_open() {
            let count = if group.config.multiple() {
                group.panels.len()
            } else {
                group.panels.len().min(1)
            };
            for index in 0..count {
                group.open(doc, PanelId(index));
            }
        }

        group
    }

    // Accessors

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Look up a panel by its generated id (e.g. `collapse-0`).
    pub fn find(&self, id: &str) -> Option<PanelId> {
        self.panels.iter().find(|p| p.id == id).map(Panel::handle)
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.panel(id).is_some_and(Panel::is_open)
    }

    pub fn state(&self, id: PanelId) -> Option<PanelState> {
        self.panel(id).map(Panel::state)
    }

    /// Handles of every panel whose open flag is set.
    pub fn open_panels(&self) -> Vec<PanelId> {
        self.panels
            .iter()
            .filter(|p| p.is_open)
            .map(Panel::handle)
            .collect()
    }

    pub fn active_panel(&self) -> Option<PanelId> {
        self.active.map(PanelId)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// True when no animation step is pending.
    pub fn is_settled(&self) -> bool {
        self.scheduler.pending() == 0
    }

    // Operations

    /// Open a closed or closing panel; close an open or opening one.
    /// Returns true if a transition started.
    pub fn toggle(&mut self, doc: &mut Document, id: PanelId) -> bool {
        match self.state(id) {
            Some(state) if state.is_opening_or_open() => self.close(doc, id),
            Some(_) => self.open(doc, id),
            None => false,
        }
    }

    /// Open a panel. With `multiple` off, every other open or opening panel
    /// is closed first. Returns true if a transition started.
    pub fn open(&mut self, doc: &mut Document, id: PanelId) -> bool {
        if !self.config.multiple() {
            let others: Vec<usize> = self
                .panels
                .iter()
                .filter(|p| p.index != id.0 && p.state.is_opening_or_open())
                .map(|p| p.index)
                .collect();
            if self.panels.get(id.0).is_some_and(|p| !p.state.is_opening_or_open()) {
                for other in others {
                    log::debug!("closing panel {other} to open panel {}", id.0);
                    self.close(doc, PanelId(other));
                }
            }
        }
        self.start_open(doc, id)
    }

    /// Close a panel. Returns true if a transition started.
    pub fn close(&mut self, doc: &mut Document, id: PanelId) -> bool {
        let Some(panel) = self.panels.get_mut(id.0) else {
            return false;
        };
        if !panel.state.is_opening_or_open() {
            return false;
        }

        panel.state = PanelState::Closing;
        panel.generation += 1;
        log::debug!("closing {}", panel.id);
        animator::begin_close(doc, &mut self.scheduler, panel);
        true
    }

    /// Open every panel that is not open or opening, regardless of
    /// `multiple`. Returns the number of transitions started.
    pub fn open_all(&mut self, doc: &mut Document) -> usize {
        (0..self.panels.len())
            .filter(|&index| self.start_open(doc, PanelId(index)))
            .count()
    }

    /// Close every open or opening panel. Returns the number of
    /// transitions started.
    pub fn close_all(&mut self, doc: &mut Document) -> usize {
        (0..self.panels.len())
            .filter(|&index| self.close(doc, PanelId(index)))
            .count()
    }

    /// Open the panel with the given generated id. Unknown ids are ignored.
    pub fn open_by_id(&mut self, doc: &mut Document, id: &str) -> bool {
        match self.find(id) {
            Some(panel) => self.open(doc, panel),
            None => {
                log::debug!("open_by_id: no panel '{id}'");
                false
            }
        }
    }

    /// Close the panel with the given generated id. Unknown ids are ignored.
    pub fn close_by_id(&mut self, doc: &mut Document, id: &str) -> bool {
        match self.find(id) {
            Some(panel) => self.close(doc, panel),
            None => {
                log::debug!("close_by_id: no panel '{id}'");
                false
            }
        }
    }

    /// Route an input event to the header it reached.
    ///
    /// Returns [`EventResult::Consumed`] when the event toggled a panel, in
    /// which case the host must skip the event's default action.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        if !binder::is_activation(event) {
            return EventResult::Ignored;
        }

        let targets: Vec<usize> = doc
            .dispatch(event)
            .into_iter()
            .filter_map(|listener| self.listeners.get(&listener).copied())
            .collect();
        if targets.is_empty() {
            return EventResult::Ignored;
        }

        for index in targets {
            self.toggle(doc, PanelId(index));
        }
        EventResult::Consumed
    }

    /// Detach every listener and discard all panels and pending steps.
    /// Safe to call more than once; later operations do nothing.
    pub fn destroy(&mut self, doc: &mut Document) {
        if self.destroyed {
            return;
        }
        for binding in self.bindings.drain(..) {
            binder::unbind(doc, binding);
        }
        self.listeners.clear();
        self.panels.clear();
        self.active = None;
        self.scheduler.clear();
        self.destroyed = true;
        log::debug!("collapse group '{}' destroyed", self.config.selector());
    }

    // Time

    /// Run every step due within the next `elapsed`. Returns the number of
    /// steps run, stale ones included.
    pub fn advance(&mut self, doc: &mut Document, elapsed: Duration) -> usize {
        let deadline = self.scheduler.now().saturating_add(elapsed);
        let mut steps = 0;
        while let Some(step) = self.scheduler.next_due(deadline) {
            self.run_step(doc, step);
            steps += 1;
        }
        steps
    }

    /// Run steps until none is pending. Returns the number of steps run.
    pub fn settle(&mut self, doc: &mut Document) -> usize {
        let mut steps = 0;
        while let Some(deadline) = self.scheduler.next_deadline() {
            let elapsed = deadline.saturating_sub(self.scheduler.now());
            steps += self.advance(doc, elapsed);
        }
        steps
    }

    fn start_open(&mut self, doc: &mut Document, id: PanelId) -> bool {
        let Some(panel) = self.panels.get_mut(id.0) else {
            return false;
        };
        if panel.state.is_opening_or_open() {
            return false;
        }

        panel.state = PanelState::Opening;
        panel.generation += 1;
        panel.is_open = true;
        self.active = Some(panel.index);
        log::debug!("opening {}", panel.id);
        animator::begin_open(doc, &mut self.scheduler, &self.config, panel);
        true
    }

    fn run_step(&mut self, doc: &mut Document, step: Step) {
        let Some(panel) = self.panels.get_mut(step.panel) else {
            return;
        };
        if panel.generation != step.generation {
            log::trace!("{}: dropping stale {:?}", panel.id, step.phase);
            return;
        }

        animator::run(doc, &mut self.scheduler, &self.config, panel, step.phase);

        match step.phase {
            Phase::OpenRelax { .. } => panel.state = PanelState::Open,
            Phase::CloseSettle => {
                panel.state = PanelState::Closed;
                panel.is_open = false;
                if self.active == Some(panel.index) {
                    self.active = None;
                }
            }
            Phase::OpenStart | Phase::OpenMeasure | Phase::CloseCollapse => {}
        }
    }
}
