//! Production registration forms.
//!
//! One module instance serves every stage page of a division and configures
//! itself from the page id it is activated with. FriMetals stage pages all
//! render into the shared `metals-produccion` container.

use crate::layout::pages::{PageId, PageModule};
use crate::shared::data::SharedDataCache;
use contracts::domain::a003_machine::Machine;
use contracts::domain::a004_responsible::Responsible;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub page: &'static str,
    /// `Machine::process` value of the machines used in this stage.
    pub process: &'static str,
    pub title: &'static str,
}

pub const FRIPARTS_STAGES: &[Stage] = &[
    Stage { page: "inyeccion", process: "inyeccion", title: "Inyección" },
    Stage { page: "pulido", process: "pulido", title: "Pulido" },
    Stage { page: "ensamble", process: "ensamble", title: "Ensamble" },
];

pub const FRIMETALS_STAGES: &[Stage] = &[
    Stage { page: "metals-laser", process: "laser", title: "Corte láser" },
    Stage { page: "metals-plegado", process: "plegado", title: "Plegado" },
    Stage { page: "metals-punzonado", process: "punzonado", title: "Punzonado" },
    Stage { page: "metals-soldadura", process: "soldadura", title: "Soldadura" },
    Stage { page: "metals-pintura", process: "pintura", title: "Pintura" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSetup {
    pub stage: Stage,
    pub machines: Vec<Machine>,
    pub responsibles: Vec<Responsible>,
}

pub struct ProductionModule {
    name: &'static str,
    stages: &'static [Stage],
    cache: Rc<SharedDataCache>,
    setup: RefCell<Option<ProductionSetup>>,
}

impl ProductionModule {
    pub fn new(name: &'static str, stages: &'static [Stage], cache: Rc<SharedDataCache>) -> Rc<Self> {
        Rc::new(Self {
            name,
            stages,
            cache,
            setup: RefCell::new(None),
        })
    }

    pub fn pages(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.page).collect()
    }

    pub fn stage_for(&self, page: &PageId) -> Option<Stage> {
        self.stages.iter().copied().find(|s| s.page == page.as_str())
    }

    pub fn setup(&self) -> Option<ProductionSetup> {
        self.setup.borrow().clone()
    }
}

impl PageModule for ProductionModule {
    fn name(&self) -> &str {
        self.name
    }

    fn activate(&self, page: &PageId) {
        let Some(stage) = self.stage_for(page) else {
            log::error!("{}: '{}' is not a production page", self.name, page);
            return;
        };

        let machines: Vec<Machine> = self
            .cache
            .machines()
            .into_iter()
            .filter(|m| m.belongs_to(stage.process))
            .collect();
        let responsibles: Vec<Responsible> = self
            .cache
            .responsibles()
            .into_iter()
            .filter(|r| {
                r.area
                    .as_deref()
                    .map_or(true, |area| area.eq_ignore_ascii_case(stage.process))
            })
            .collect();

        log::info!(
            "🏭 {}: {} machine(s), {} responsible(s)",
            stage.title,
            machines.len(),
            responsibles.len()
        );
        *self.setup.borrow_mut() = Some(ProductionSetup {
            stage,
            machines,
            responsibles,
        });
    }

    fn deactivate(&self) {
        self.setup.borrow_mut().take();
    }
}
