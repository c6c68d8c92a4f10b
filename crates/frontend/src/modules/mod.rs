//! Page modules and their registration table.

pub mod dashboard;
pub mod data_page;
pub mod production;

use crate::layout::pages::ModuleRegistry;
use crate::shared::data::{Dataset, SharedDataCache};
use dashboard::DashboardModule;
use data_page::DataPageModule;
use production::{ProductionModule, FRIMETALS_STAGES, FRIPARTS_STAGES};
use std::rc::Rc;

/// Pages rendered from markup alone.
pub const STATIC_PAGES: &[&str] = &["historial", "metals-inicio", "metals-produccion"];

pub fn register_all(registry: &ModuleRegistry, cache: &Rc<SharedDataCache>) {
    registry.register("dashboard", Rc::new(DashboardModule::default()));

    registry.register(
        "inventario",
        DataPageModule::new("inventario", Rc::clone(cache), &[Dataset::Products]),
    );
    registry.register(
        "pedidos",
        DataPageModule::new(
            "pedidos",
            Rc::clone(cache),
            &[Dataset::Clients, Dataset::Products],
        ),
    );
    registry.register(
        "portal-clientes",
        DataPageModule::new("portal-clientes", Rc::clone(cache), &[Dataset::Products]),
    );
    registry.register(
        "admin-clientes",
        DataPageModule::new("admin-clientes", Rc::clone(cache), &[Dataset::Clients]),
    );

    let friparts = ProductionModule::new("produccion", FRIPARTS_STAGES, Rc::clone(cache));
    registry.register_many(friparts.pages(), friparts.clone());

    let frimetals = ProductionModule::new("metals", FRIMETALS_STAGES, Rc::clone(cache));
    registry.register_many(frimetals.pages(), frimetals.clone());

    for page in STATIC_PAGES {
        registry.register_static(*page);
    }

    log::info!("registered {} page module(s)", registry.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::pages::{PageId, Resolution};
    use crate::test_support::FakeReferenceApi;

    #[test]
    fn test_every_menu_page_resolves() {
        let registry = ModuleRegistry::new();
        let cache = Rc::new(SharedDataCache::new(FakeReferenceApi::ready()));
        register_all(&registry, &cache);

        for entry in crate::layout::pages::catalog::PAGES {
            let resolution = registry.resolve(&PageId::from(entry.id));
            assert!(!resolution.is_not_found(), "{} has no module", entry.id);
        }
        assert!(matches!(
            registry.resolve(&PageId::from("historial")),
            Resolution::Static
        ));
    }
}
