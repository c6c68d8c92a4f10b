//! Application runtime - связывает состояние, реестр модулей, кэш и навигацию.
//!
//! Создаётся один раз при старте и передаётся в UI через контекст.

use crate::layout::global_context::AppState;
use crate::layout::pages::{
    HistoryPort, ModuleLifecycle, ModuleRegistry, NavigationController, PageHost, PageId,
    PageStore,
};
use crate::shared::config::AppConfig;
use crate::shared::data::{LoadReport, ReferenceApi, SharedDataCache};
use crate::shared::scheduler::Scheduler;
use crate::system::readiness::ReadinessGate;
use contracts::system::auth::UserInfo;
use std::rc::Rc;

/// Browser-facing collaborators of the runtime.
pub struct Ports {
    pub host: Rc<dyn PageHost>,
    pub history: Rc<dyn HistoryPort>,
    pub store: Rc<dyn PageStore>,
    pub api: Rc<dyn ReferenceApi>,
    pub scheduler: Rc<dyn Scheduler>,
}

pub struct AppRuntime {
    config: AppConfig,
    state: Rc<AppState>,
    registry: Rc<ModuleRegistry>,
    cache: Rc<SharedDataCache>,
    navigation: Rc<NavigationController>,
    host: Rc<dyn PageHost>,
}

impl AppRuntime {
    pub fn new(config: AppConfig, ports: Ports) -> Rc<Self> {
        let state = Rc::new(AppState::new());
        let registry = Rc::new(ModuleRegistry::new());
        let cache = Rc::new(SharedDataCache::new(ports.api));

        let gate = ReadinessGate::new(
            Rc::clone(&state),
            Rc::clone(&ports.scheduler),
            config.readiness.fallback_delays(),
            config.navigation.exempt_pages(),
        );
        let lifecycle = Rc::new(ModuleLifecycle::new(
            Rc::clone(&registry),
            gate,
            Rc::clone(&state),
            ports.scheduler,
            config.modules.retry_policy(),
        ));
        let navigation = Rc::new(NavigationController::new(
            Rc::clone(&state),
            Rc::clone(&ports.host),
            ports.history,
            ports.store,
            lifecycle,
            config.navigation.clone(),
        ));

        Rc::new(Self {
            config,
            state,
            registry,
            cache,
            navigation,
            host: ports.host,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &Rc<AppState> {
        &self.state
    }

    pub fn registry(&self) -> &Rc<ModuleRegistry> {
        &self.registry
    }

    pub fn cache(&self) -> &Rc<SharedDataCache> {
        &self.cache
    }

    pub fn navigation(&self) -> &Rc<NavigationController> {
        &self.navigation
    }

    /// Startup: with a restored session the shared data is loaded and the
    /// user set before the initial page's module is activated.
    pub async fn start(&self, fragment: Option<String>, session: Option<UserInfo>) -> Option<PageId> {
        let forced = session
            .as_ref()
            .and_then(|user| self.config.navigation.landing_for(user));
        if let Some(user) = session {
            self.sign_in(user).await;
        }

        // A menu click during session restore wins over the startup page.
        if let Some(page) = self.state.current_page() {
            log::info!("🚀 already on '{}', skipping startup navigation", page);
            return Some(page);
        }

        match self.navigation.start(fragment.as_deref(), forced) {
            Ok(page) => {
                log::info!("🚀 started on '{}'", page);
                Some(page)
            }
            Err(e) => {
                log::error!("startup navigation failed: {}", e);
                None
            }
        }
    }

    pub async fn sign_in(&self, user: UserInfo) -> LoadReport {
        log::info!("👤 signing in '{}'", user.username);
        let report = self.cache.ensure_loaded().await;
        if !report.is_complete() {
            self.host.alert(&connectivity_message(&report));
        }
        if let Err(e) = self.navigation.leave_forbidden_page(&user) {
            log::error!("cannot leave admin-only page: {}", e);
        }
        self.state.set_current_user(Some(user.clone()));
        self.host.announce_session(Some(&user));
        report
    }

    /// Interactive login: sign in, then open the division landing page if the
    /// user has one.
    pub async fn complete_login(&self, user: UserInfo) {
        let landing = self.config.navigation.landing_for(&user);
        self.sign_in(user).await;
        if let Some(page) = landing {
            if let Err(e) = self.navigation.go_to(&page, true) {
                log::error!("landing page unavailable: {}", e);
            }
        }
    }

    /// Clears the session. Shared data stays cached until reload.
    pub fn sign_out(&self) {
        log::info!("👋 signing out");
        self.state.set_current_user(None);
        self.host.announce_session(None);
        let default = self.navigation.default_page().clone();
        if let Err(e) = self.navigation.go_to(&default, true) {
            log::error!("cannot show '{}' after logout: {}", default, e);
        }
    }
}

fn connectivity_message(report: &LoadReport) -> String {
    let names: Vec<&str> = report
        .failed_datasets()
        .iter()
        .map(|dataset| dataset.as_str())
        .collect();
    format!(
        "No se pudieron cargar los datos ({}). Verifique su conexión a internet y recargue la página.",
        names.join(", ")
    )
}
