//! Page catalog - единственный источник правды для заголовков страниц и меню.
//!
//! `container: false` означает, что страница рисуется в контейнере другой
//! страницы (см. `[navigation.aliases]` в конфигурации).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub group: &'static str,
    pub container: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup { id: "inicio", label: "Inicio", admin_only: false },
    MenuGroup { id: "produccion", label: "Producción FriParts", admin_only: false },
    MenuGroup { id: "metals", label: "FriMetals", admin_only: false },
    MenuGroup { id: "comercial", label: "Comercial", admin_only: false },
    MenuGroup { id: "admin", label: "Administración", admin_only: true },
];

const fn page(id: &'static str, label: &'static str, group: &'static str) -> PageEntry {
    PageEntry { id, label, group, container: true }
}

const fn aliased(id: &'static str, label: &'static str, group: &'static str) -> PageEntry {
    PageEntry { id, label, group, container: false }
}

pub const PAGES: &[PageEntry] = &[
    page("dashboard", "Tablero", "inicio"),
    page("inventario", "Inventario", "inicio"),
    page("historial", "Historial", "inicio"),
    // ── Producción FriParts ───────────────────────────────────────────────
    page("inyeccion", "Inyección", "produccion"),
    page("pulido", "Pulido", "produccion"),
    page("ensamble", "Ensamble", "produccion"),
    // ── FriMetals ─────────────────────────────────────────────────────────
    page("metals-inicio", "Inicio FriMetals", "metals"),
    aliased("metals-laser", "Corte láser", "metals"),
    aliased("metals-plegado", "Plegado", "metals"),
    aliased("metals-punzonado", "Punzonado", "metals"),
    aliased("metals-soldadura", "Soldadura", "metals"),
    aliased("metals-pintura", "Pintura", "metals"),
    // ── Comercial ─────────────────────────────────────────────────────────
    page("pedidos", "Pedidos", "comercial"),
    page("portal-clientes", "Portal de clientes", "comercial"),
    // ── Administración ────────────────────────────────────────────────────
    page("admin-clientes", "Clientes", "admin"),
];

/// Containers that exist only as render targets for aliased pages.
pub const SHARED_CONTAINERS: &[&str] = &["metals-produccion"];

/// Readable title for a page id. Fallback: the id itself.
pub fn page_label(id: &str) -> &str {
    PAGES
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.label)
        .unwrap_or(id)
}

pub fn pages_in(group: &str) -> impl Iterator<Item = &'static PageEntry> + '_ {
    PAGES.iter().filter(move |p| p.group == group)
}

/// Ids of every DOM container the shell renders.
pub fn container_pages() -> Vec<&'static str> {
    PAGES
        .iter()
        .filter(|p| p.container)
        .map(|p| p.id)
        .chain(SHARED_CONTAINERS.iter().copied())
        .collect()
}
