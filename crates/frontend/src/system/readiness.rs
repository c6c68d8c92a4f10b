//! Session readiness and the activation gate.
//!
//! Modules that need an authenticated user are not activated until the
//! session is ready. The gate listens for the one-shot readiness event and
//! also polls at fixed delays, since the event may have fired before the
//! listener was installed. Both paths feed the same pending activation, which
//! completes at most once.

use crate::layout::global_context::AppState;
use crate::layout::pages::{PageId, PageModule};
use crate::shared::scheduler::Scheduler;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnOnce()>;
type OnActivated = Box<dyn FnOnce()>;

/// `false → true` once per session. Listeners registered with
/// [`subscribe_once`](Self::subscribe_once) run on that transition only; a
/// listener added after the transition is never called.
#[derive(Default)]
pub struct SessionReadiness {
    ready: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

impl SessionReadiness {
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn subscribe_once(&self, listener: impl FnOnce() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub(crate) fn mark_ready(&self) {
        if self.ready.replace(true) {
            return;
        }
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        log::info!("✅ user-ready: notifying {} listener(s)", listeners.len());
        for (_, listener) in listeners {
            listener();
        }
    }

    pub(crate) fn reset(&self) {
        if self.ready.replace(false) {
            log::info!("session closed, readiness reset");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Activated,
    Deferred,
}

pub struct ReadinessGate {
    state: Rc<AppState>,
    scheduler: Rc<dyn Scheduler>,
    fallback_delays: Rc<[Duration]>,
    exempt_pages: HashSet<PageId>,
}

impl ReadinessGate {
    pub fn new(
        state: Rc<AppState>,
        scheduler: Rc<dyn Scheduler>,
        fallback_delays: Vec<Duration>,
        exempt_pages: HashSet<PageId>,
    ) -> Self {
        Self {
            state,
            scheduler,
            fallback_delays: fallback_delays.into(),
            exempt_pages,
        }
    }

    pub fn is_exempt(&self, page: &PageId, module: &dyn PageModule) -> bool {
        !module.requires_session() || self.exempt_pages.contains(page)
    }

    /// Activates `module` for `page` now if possible, otherwise once the
    /// session becomes ready. `on_activated` runs right after `activate`, and
    /// never if the activation is dropped.
    pub fn activate_when_ready(
        &self,
        module: Rc<dyn PageModule>,
        page: &PageId,
        on_activated: impl FnOnce() + 'static,
    ) -> GateOutcome {
        if self.state.readiness().is_ready() || self.is_exempt(page, module.as_ref()) {
            log::debug!("▶ activating {} for '{}'", module.name(), page);
            module.activate(page);
            on_activated();
            return GateOutcome::Activated;
        }

        log::info!(
            "⏳ {} for '{}' waits for user-ready",
            module.name(),
            page
        );
        let on_activated: OnActivated = Box::new(on_activated);
        let pending = Rc::new(PendingActivation {
            module,
            page: page.clone(),
            epoch: self.state.page_epoch(),
            state: Rc::clone(&self.state),
            done: Cell::new(false),
            listener: Cell::new(None),
            on_activated: Cell::new(Some(on_activated)),
        });

        let on_ready = Rc::clone(&pending);
        let id = self
            .state
            .readiness()
            .subscribe_once(move || on_ready.complete("user-ready event"));
        pending.listener.set(Some(id));

        schedule_check(
            pending,
            Rc::clone(&self.scheduler),
            Rc::clone(&self.fallback_delays),
            0,
        );
        GateOutcome::Deferred
    }
}

struct PendingActivation {
    module: Rc<dyn PageModule>,
    page: PageId,
    epoch: u64,
    state: Rc<AppState>,
    done: Cell<bool>,
    listener: Cell<Option<ListenerId>>,
    on_activated: Cell<Option<OnActivated>>,
}

impl PendingActivation {
    fn is_stale(&self) -> bool {
        self.state.page_epoch() != self.epoch
    }

    fn finish(&self) -> bool {
        if self.done.replace(true) {
            return false;
        }
        if let Some(id) = self.listener.take() {
            self.state.readiness().unsubscribe(id);
        }
        true
    }

    fn complete(&self, via: &str) {
        if !self.finish() {
            return;
        }
        if self.is_stale() {
            log::debug!(
                "skipping stale activation of {} for '{}' ({})",
                self.module.name(),
                self.page,
                via
            );
            return;
        }
        log::info!(
            "▶ activating {} for '{}' ({})",
            self.module.name(),
            self.page,
            via
        );
        self.module.activate(&self.page);
        if let Some(on_activated) = self.on_activated.take() {
            on_activated();
        }
    }

    fn give_up(&self) {
        if self.finish() {
            log::warn!(
                "⚠️ session never became ready; {} for '{}' stays inactive until next navigation",
                self.module.name(),
                self.page
            );
        }
    }

    fn drop_stale(&self) {
        if self.finish() {
            log::debug!("dropping pending activation for '{}'", self.page);
        }
    }
}

fn schedule_check(
    pending: Rc<PendingActivation>,
    scheduler: Rc<dyn Scheduler>,
    delays: Rc<[Duration]>,
    index: usize,
) {
    let Some(&delay) = delays.get(index) else {
        return;
    };
    let next = Rc::clone(&scheduler);
    scheduler.schedule(
        delay,
        Box::new(move || {
            if pending.done.get() {
                return;
            }
            if pending.is_stale() {
                pending.drop_stale();
            } else if pending.state.readiness().is_ready() {
                pending.complete("fallback check");
            } else if index + 1 < delays.len() {
                log::debug!("'{}' still waiting for session (check {})", pending.page, index + 1);
                schedule_check(pending, next, delays, index + 1);
            } else {
                pending.give_up();
            }
        }),
    );
}
