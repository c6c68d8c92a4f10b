//! Shared reference data, fetched once per session and shared by all modules.
//!
//! `ensure_loaded` is idempotent: callers arriving while a load is in flight
//! await the same batch instead of starting a new one. The four datasets are
//! fetched concurrently and fail independently; a failed dataset stays empty
//! and is listed in the [`LoadReport`].

use super::api::{ApiError, ReferenceApi};
use contracts::domain::a001_product::Product;
use contracts::domain::a002_client::Client;
use contracts::domain::a003_machine::Machine;
use contracts::domain::a004_responsible::Responsible;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Products,
    Clients,
    Machines,
    Responsibles,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Products,
        Dataset::Clients,
        Dataset::Machines,
        Dataset::Responsibles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Products => "productos",
            Dataset::Clients => "clientes",
            Dataset::Machines => "maquinas",
            Dataset::Responsibles => "responsables",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub failed: Vec<(Dataset, ApiError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_datasets(&self) -> Vec<Dataset> {
        self.failed.iter().map(|(dataset, _)| *dataset).collect()
    }
}

struct Entry<T> {
    loaded: bool,
    data: Vec<T>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            loaded: false,
            data: Vec::new(),
        }
    }
}

type Batch = Shared<LocalBoxFuture<'static, LoadReport>>;

#[derive(Default)]
struct CacheState {
    loaded: bool,
    in_flight: Option<Batch>,
    report: LoadReport,
    products: Entry<Product>,
    clients: Entry<Client>,
    machines: Entry<Machine>,
    responsibles: Entry<Responsible>,
}

pub struct SharedDataCache {
    api: Rc<dyn ReferenceApi>,
    state: RefCell<CacheState>,
}

impl SharedDataCache {
    pub fn new(api: Rc<dyn ReferenceApi>) -> Self {
        Self {
            api,
            state: RefCell::new(CacheState::default()),
        }
    }

    /// Set once the first batch resolved, whether or not every dataset
    /// loaded. Check the dataset itself before relying on its contents.
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    pub fn is_dataset_loaded(&self, dataset: Dataset) -> bool {
        let state = self.state.borrow();
        match dataset {
            Dataset::Products => state.products.loaded,
            Dataset::Clients => state.clients.loaded,
            Dataset::Machines => state.machines.loaded,
            Dataset::Responsibles => state.responsibles.loaded,
        }
    }

    pub fn len(&self, dataset: Dataset) -> usize {
        let state = self.state.borrow();
        match dataset {
            Dataset::Products => state.products.data.len(),
            Dataset::Clients => state.clients.data.len(),
            Dataset::Machines => state.machines.data.len(),
            Dataset::Responsibles => state.responsibles.data.len(),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.borrow().products.data.clone()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.state.borrow().clients.data.clone()
    }

    pub fn machines(&self) -> Vec<Machine> {
        self.state.borrow().machines.data.clone()
    }

    pub fn responsibles(&self) -> Vec<Responsible> {
        self.state.borrow().responsibles.data.clone()
    }

    pub async fn ensure_loaded(self: &Rc<Self>) -> LoadReport {
        let batch = {
            let mut state = self.state.borrow_mut();
            if state.loaded {
                return state.report.clone();
            }
            if let Some(batch) = state.in_flight.clone() {
                log::debug!("📦 shared data already loading, joining");
                batch
            } else {
                log::info!("📦 loading shared data");
                let this = Rc::clone(self);
                let batch = async move { this.load_all().await }
                    .boxed_local()
                    .shared();
                state.in_flight = Some(batch.clone());
                batch
            }
        };

        let report = batch.await;
        self.state.borrow_mut().in_flight = None;
        report
    }

    async fn load_all(&self) -> LoadReport {
        let (products, clients, machines, responsibles) = futures::join!(
            self.api.products(),
            self.api.clients(),
            self.api.machines(),
            self.api.responsibles(),
        );

        let mut report = LoadReport::default();
        let mut state = self.state.borrow_mut();
        store(&mut state.products, Dataset::Products, products, &mut report);
        store(&mut state.clients, Dataset::Clients, clients, &mut report);
        store(&mut state.machines, Dataset::Machines, machines, &mut report);
        store(
            &mut state.responsibles,
            Dataset::Responsibles,
            responsibles,
            &mut report,
        );
        state.loaded = true;
        state.report = report.clone();

        if report.is_complete() {
            log::info!("✅ shared data loaded");
        } else {
            log::warn!(
                "shared data loaded with failures: {:?}",
                report.failed_datasets()
            );
        }
        report
    }
}

fn store<T>(
    entry: &mut Entry<T>,
    dataset: Dataset,
    result: Result<Vec<T>, ApiError>,
    report: &mut LoadReport,
) {
    match result {
        Ok(data) => {
            log::debug!("{}: {} row(s)", dataset, data.len());
            entry.data = data;
            entry.loaded = true;
        }
        Err(e) => {
            log::error!("❌ failed to load {}: {}", dataset, e);
            report.failed.push((dataset, e));
        }
    }
}
