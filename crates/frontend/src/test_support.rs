//! Fakes for the navigation ports, scheduler and reference API.

use crate::layout::global_context::AppState;
use crate::layout::pages::{HistoryPort, PageHost, PageId, PageModule, PageStore};
use crate::shared::data::{ApiError, Dataset, ReferenceApi};
use crate::shared::scheduler::{Scheduler, Task};
use async_trait::async_trait;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_client::Client;
use contracts::domain::a003_machine::Machine;
use contracts::domain::a004_responsible::Responsible;
use contracts::system::auth::UserInfo;
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

pub fn user(username: &str, is_admin: bool) -> UserInfo {
    UserInfo {
        id: format!("u-{username}"),
        username: username.to_string(),
        full_name: None,
        email: None,
        is_admin,
        division: None,
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Virtual clock. Tasks run only inside [`advance`](Self::advance), in due
/// order, and may schedule further tasks.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    seq: Cell<u64>,
    queue: RefCell<Vec<(Duration, u64, Task)>>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(i, _)| i);
                position.map(|i| queue.remove(i))
            };
            match next {
                Some((due, _, task)) => {
                    self.now.set(due);
                    task();
                }
                None => break,
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue
            .borrow_mut()
            .push((self.now.get() + delay, seq, task));
    }
}

// ---------------------------------------------------------------------------
// Navigation ports
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeHost {
    containers: HashSet<String>,
    visible: RefCell<BTreeSet<String>>,
    highlighted: RefCell<Option<PageId>>,
    mobile_nav_closes: Cell<usize>,
    alerts: RefCell<Vec<String>>,
    sessions: RefCell<Vec<Option<String>>>,
}

impl FakeHost {
    pub fn with_containers(containers: &[&str]) -> Rc<Self> {
        Rc::new(Self {
            containers: containers.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        })
    }

    pub fn visible_pages(&self) -> Vec<String> {
        self.visible.borrow().iter().cloned().collect()
    }

    pub fn highlighted(&self) -> Option<PageId> {
        self.highlighted.borrow().clone()
    }

    pub fn mobile_nav_closes(&self) -> usize {
        self.mobile_nav_closes.get()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    /// Usernames passed to `announce_session`, `None` for sign-outs.
    pub fn sessions(&self) -> Vec<Option<String>> {
        self.sessions.borrow().clone()
    }
}

impl PageHost for FakeHost {
    fn container_exists(&self, container_id: &str) -> bool {
        self.containers.contains(container_id)
    }

    fn hide_all_pages(&self) {
        self.visible.borrow_mut().clear();
    }

    fn show_page(&self, container_id: &str) {
        self.visible.borrow_mut().insert(container_id.to_string());
    }

    fn highlight_menu(&self, page: &PageId) {
        *self.highlighted.borrow_mut() = Some(page.clone());
    }

    fn close_mobile_nav(&self) {
        self.mobile_nav_closes.set(self.mobile_nav_closes.get() + 1);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn announce_session(&self, user: Option<&UserInfo>) {
        self.sessions
            .borrow_mut()
            .push(user.map(|u| u.username.clone()));
    }
}

#[derive(Default)]
pub struct FakeHistory {
    pushed: RefCell<Vec<PageId>>,
    replaced: RefCell<Vec<PageId>>,
}

impl FakeHistory {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of pushed entries.
    pub fn len(&self) -> usize {
        self.pushed.borrow().len()
    }

    pub fn entries(&self) -> Vec<PageId> {
        self.pushed.borrow().clone()
    }

    pub fn replaced(&self) -> Vec<PageId> {
        self.replaced.borrow().clone()
    }
}

impl HistoryPort for FakeHistory {
    fn push(&self, page: &PageId) {
        self.pushed.borrow_mut().push(page.clone());
    }

    fn replace(&self, page: &PageId) {
        self.replaced.borrow_mut().push(page.clone());
    }
}

#[derive(Default)]
pub struct MemoryPageStore {
    last: RefCell<Option<PageId>>,
}

impl MemoryPageStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl PageStore for MemoryPageStore {
    fn load_last_page(&self) -> Option<PageId> {
        self.last.borrow().clone()
    }

    fn save_last_page(&self, page: &PageId) {
        *self.last.borrow_mut() = Some(page.clone());
    }
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

pub struct RecordingModule {
    name: String,
    requires_session: bool,
    activations: RefCell<Vec<PageId>>,
    deactivations: Cell<usize>,
    journal: Option<Rc<RefCell<Vec<String>>>>,
    observe: Option<Rc<AppState>>,
    observed: RefCell<Vec<Option<PageId>>>,
}

impl RecordingModule {
    fn build(
        name: &str,
        journal: Option<Rc<RefCell<Vec<String>>>>,
        observe: Option<Rc<AppState>>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            requires_session: true,
            activations: RefCell::new(Vec::new()),
            deactivations: Cell::new(0),
            journal,
            observe,
            observed: RefCell::new(Vec::new()),
        })
    }

    pub fn new(name: &str) -> Rc<Self> {
        Self::build(name, None, None)
    }

    pub fn with_journal(name: &str, journal: &Rc<RefCell<Vec<String>>>) -> Rc<Self> {
        Self::build(name, Some(Rc::clone(journal)), None)
    }

    /// Records `current_page` as seen from inside `activate`.
    pub fn observing(name: &str, state: &Rc<AppState>) -> Rc<Self> {
        Self::build(name, None, Some(Rc::clone(state)))
    }

    pub fn activations(&self) -> Vec<PageId> {
        self.activations.borrow().clone()
    }

    pub fn activation_count(&self) -> usize {
        self.activations.borrow().len()
    }

    pub fn deactivation_count(&self) -> usize {
        self.deactivations.get()
    }

    pub fn observed_pages(&self) -> Vec<Option<PageId>> {
        self.observed.borrow().clone()
    }
}

impl PageModule for RecordingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn activate(&self, page: &PageId) {
        self.activations.borrow_mut().push(page.clone());
        if let Some(journal) = &self.journal {
            journal
                .borrow_mut()
                .push(format!("{}:activate:{}", self.name, page));
        }
        if let Some(state) = &self.observe {
            self.observed.borrow_mut().push(state.current_page());
        }
    }

    fn deactivate(&self) {
        self.deactivations.set(self.deactivations.get() + 1);
        if let Some(journal) = &self.journal {
            journal
                .borrow_mut()
                .push(format!("{}:deactivate", self.name));
        }
    }

    fn requires_session(&self) -> bool {
        self.requires_session
    }
}

// ---------------------------------------------------------------------------
// Reference API
// ---------------------------------------------------------------------------

/// Releases every request waiting on a gated [`FakeReferenceApi`].
pub struct ApiGate {
    sender: RefCell<Option<oneshot::Sender<()>>>,
}

impl ApiGate {
    pub fn open(&self) {
        if let Some(sender) = self.sender.borrow_mut().take() {
            let _ = sender.send(());
        }
    }
}

#[derive(Default)]
pub struct FakeReferenceApi {
    calls: RefCell<HashMap<Dataset, usize>>,
    gate: Option<Shared<LocalBoxFuture<'static, ()>>>,
    failing: Option<Dataset>,
}

impl FakeReferenceApi {
    pub fn ready() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn failing(dataset: Dataset) -> Rc<Self> {
        Rc::new(Self {
            failing: Some(dataset),
            ..Self::default()
        })
    }

    /// Requests stay pending until the returned gate is opened.
    pub fn gated() -> (Rc<Self>, ApiGate) {
        let (sender, receiver) = oneshot::channel::<()>();
        let api = Self {
            gate: Some(receiver.map(|_| ()).boxed_local().shared()),
            ..Self::default()
        };
        let gate = ApiGate {
            sender: RefCell::new(Some(sender)),
        };
        (Rc::new(api), gate)
    }

    pub fn calls(&self, dataset: Dataset) -> usize {
        self.calls.borrow().get(&dataset).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    async fn respond<T>(&self, dataset: Dataset, data: Vec<T>) -> Result<Vec<T>, ApiError> {
        *self.calls.borrow_mut().entry(dataset).or_insert(0) += 1;
        if let Some(gate) = self.gate.clone() {
            gate.await;
        }
        if self.failing == Some(dataset) {
            Err(ApiError::Status(503))
        } else {
            Ok(data)
        }
    }
}

#[async_trait(?Send)]
impl ReferenceApi for FakeReferenceApi {
    async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.respond(Dataset::Products, sample_products()).await
    }

    async fn clients(&self) -> Result<Vec<Client>, ApiError> {
        self.respond(Dataset::Clients, sample_clients()).await
    }

    async fn machines(&self) -> Result<Vec<Machine>, ApiError> {
        self.respond(Dataset::Machines, sample_machines()).await
    }

    async fn responsibles(&self) -> Result<Vec<Responsible>, ApiError> {
        self.respond(Dataset::Responsibles, sample_responsibles()).await
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".into(),
            code: "9304".into(),
            description: "Buje suspensión".into(),
            unit: Some("und".into()),
        },
        Product {
            id: "p2".into(),
            code: "9311".into(),
            description: "Soporte motor".into(),
            unit: None,
        },
    ]
}

pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".into(),
            name: "Autopartes del Norte".into(),
            tax_id: None,
            city: Some("Medellín".into()),
        },
        Client {
            id: "c2".into(),
            name: "Repuestos Andinos".into(),
            tax_id: None,
            city: None,
        },
    ]
}

pub fn sample_machines() -> Vec<Machine> {
    vec![
        Machine {
            id: "m1".into(),
            name: "Inyectora 1".into(),
            process: "inyeccion".into(),
        },
        Machine {
            id: "m2".into(),
            name: "Pulidora 1".into(),
            process: "pulido".into(),
        },
        Machine {
            id: "m3".into(),
            name: "Láser Trumpf".into(),
            process: "laser".into(),
        },
    ]
}

pub fn sample_responsibles() -> Vec<Responsible> {
    vec![Responsible {
        id: "r1".into(),
        name: "Carlos Pérez".into(),
        area: Some("inyeccion".into()),
    }]
}
