//! Module lifecycle: registry lookup with bounded re-resolution, activation
//! through the readiness gate, and deactivation of the previous module.

use super::page_id::PageId;
use super::registry::{ModuleRegistry, PageModule, Resolution};
use crate::layout::global_context::AppState;
use crate::shared::scheduler::{RetryPolicy, Scheduler};
use crate::system::readiness::ReadinessGate;
use std::cell::RefCell;
use std::rc::Rc;

struct ActiveModule {
    page: PageId,
    module: Rc<dyn PageModule>,
}

pub struct ModuleLifecycle {
    registry: Rc<ModuleRegistry>,
    gate: ReadinessGate,
    state: Rc<AppState>,
    scheduler: Rc<dyn Scheduler>,
    retry: RetryPolicy,
    /// Set only once `activate` has actually run.
    active: Rc<RefCell<Option<ActiveModule>>>,
}

impl ModuleLifecycle {
    pub fn new(
        registry: Rc<ModuleRegistry>,
        gate: ReadinessGate,
        state: Rc<AppState>,
        scheduler: Rc<dyn Scheduler>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            registry,
            gate,
            state,
            scheduler,
            retry,
            active: Rc::new(RefCell::new(None)),
        }
    }

    pub fn registry(&self) -> &Rc<ModuleRegistry> {
        &self.registry
    }

    /// Page of the activated module that will be deactivated on the next
    /// navigation. A module still waiting at the gate is not active.
    pub fn active_page(&self) -> Option<PageId> {
        self.active.borrow().as_ref().map(|a| a.page.clone())
    }

    pub fn deactivate_active(&self) {
        let previous = self.active.borrow_mut().take();
        if let Some(previous) = previous {
            log::debug!(
                "◀ deactivating {} (was '{}')",
                previous.module.name(),
                previous.page
            );
            previous.module.deactivate();
        }
    }

    /// Resolves the module for `page` and hands it to the readiness gate.
    /// Expects `page` to already be the current page.
    pub fn activate_page(self: &Rc<Self>, page: &PageId) {
        self.resolve_and_activate(page.clone(), 0, self.state.page_epoch());
    }

    fn resolve_and_activate(self: &Rc<Self>, page: PageId, attempt: u32, epoch: u64) {
        match self.registry.resolve(&page) {
            Resolution::Module(module) => {
                let active = Rc::clone(&self.active);
                let entry = ActiveModule {
                    page: page.clone(),
                    module: Rc::clone(&module),
                };
                self.gate.activate_when_ready(module, &page, move || {
                    *active.borrow_mut() = Some(entry);
                });
            }
            Resolution::Static => {
                log::debug!("'{}' is a static page, nothing to activate", page);
            }
            Resolution::NotFound if self.retry.allows(attempt) => {
                log::warn!(
                    "module for '{}' not registered yet, retrying in {:?}",
                    page,
                    self.retry.delay
                );
                let this = Rc::clone(self);
                self.scheduler.schedule(
                    self.retry.delay,
                    Box::new(move || {
                        if this.state.page_epoch() != epoch {
                            log::debug!("'{}' left before module lookup retry", page);
                            return;
                        }
                        this.resolve_and_activate(page, attempt + 1, epoch);
                    }),
                );
            }
            Resolution::NotFound => {
                log::error!(
                    "❌ no module registered for '{}' after {} attempt(s)",
                    page,
                    attempt + 1
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{user, ManualScheduler, RecordingModule};
    use std::collections::HashSet;
    use std::time::Duration;

    fn lifecycle(
        state: &Rc<AppState>,
        scheduler: &Rc<ManualScheduler>,
    ) -> (Rc<ModuleLifecycle>, Rc<ModuleRegistry>) {
        let registry = Rc::new(ModuleRegistry::new());
        let gate = ReadinessGate::new(
            Rc::clone(state),
            scheduler.clone(),
            vec![Duration::from_millis(1000), Duration::from_millis(3000)],
            HashSet::new(),
        );
        let lifecycle = Rc::new(ModuleLifecycle::new(
            Rc::clone(&registry),
            gate,
            Rc::clone(state),
            scheduler.clone(),
            RetryPolicy::default(),
        ));
        (lifecycle, registry)
    }

    fn ready_state(page: &str) -> (Rc<AppState>, PageId) {
        let state = Rc::new(AppState::new());
        state.set_current_user(Some(user("ana", false)));
        let page = PageId::from(page);
        state.set_current_page(page.clone());
        (state, page)
    }

    #[test]
    fn test_late_registration_is_picked_up_by_retry() {
        let (state, page) = ready_state("metals-laser");
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);

        lifecycle.activate_page(&page);
        assert_eq!(scheduler.pending(), 1);

        let module = RecordingModule::new("metals");
        registry.register("metals-laser", module.clone());
        scheduler.advance(Duration::from_millis(799));
        assert_eq!(module.activation_count(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(module.activations(), vec![page.clone()]);
        assert_eq!(lifecycle.active_page(), Some(page));
    }

    #[test]
    fn test_missing_module_retries_exactly_once() {
        let (state, page) = ready_state("metals-laser");
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);

        lifecycle.activate_page(&page);
        scheduler.advance(Duration::from_millis(800));
        assert_eq!(scheduler.pending(), 0);

        // Registering afterwards does nothing: no further retries are queued.
        let module = RecordingModule::new("metals");
        registry.register("metals-laser", module.clone());
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(module.activation_count(), 0);
        assert_eq!(lifecycle.active_page(), None);
    }

    #[test]
    fn test_static_page_is_silent() {
        let (state, page) = ready_state("historial");
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);
        registry.register_static("historial");

        lifecycle.activate_page(&page);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(lifecycle.active_page(), None);
    }

    #[test]
    fn test_retry_skipped_after_navigation() {
        let (state, page) = ready_state("metals-laser");
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);

        lifecycle.activate_page(&page);
        let module = RecordingModule::new("metals");
        registry.register("metals-laser", module.clone());
        state.set_current_page(PageId::from("inventario"));

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(module.activation_count(), 0);
    }

    #[test]
    fn test_deactivate_active_runs_once() {
        let (state, page) = ready_state("inventario");
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);
        let module = RecordingModule::new("inventario");
        registry.register("inventario", module.clone());

        lifecycle.activate_page(&page);
        lifecycle.deactivate_active();
        lifecycle.deactivate_active();
        assert_eq!(module.deactivation_count(), 1);
    }

    #[test]
    fn test_deferred_module_is_not_deactivated_before_it_runs() {
        let state = Rc::new(AppState::new());
        let page = PageId::from("pedidos");
        state.set_current_page(page.clone());
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);
        let module = RecordingModule::new("pedidos");
        registry.register("pedidos", module.clone());

        lifecycle.activate_page(&page);
        assert_eq!(lifecycle.active_page(), None);

        lifecycle.deactivate_active();
        state.set_current_page(PageId::from("inventario"));
        state.set_current_user(Some(user("ana", false)));
        scheduler.advance(Duration::from_secs(5));

        assert_eq!(module.activation_count(), 0);
        assert_eq!(module.deactivation_count(), 0);
        assert_eq!(lifecycle.active_page(), None);
    }

    #[test]
    fn test_deferred_module_becomes_active_on_session_ready() {
        let state = Rc::new(AppState::new());
        let page = PageId::from("pedidos");
        state.set_current_page(page.clone());
        let scheduler = ManualScheduler::new();
        let (lifecycle, registry) = lifecycle(&state, &scheduler);
        let module = RecordingModule::new("pedidos");
        registry.register("pedidos", module.clone());

        lifecycle.activate_page(&page);
        state.set_current_user(Some(user("ana", false)));
        assert_eq!(lifecycle.active_page(), Some(page));

        lifecycle.deactivate_active();
        assert_eq!(module.deactivation_count(), 1);
    }
}
