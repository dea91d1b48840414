//! 页面目录
//!
//! 菜单分组 id 与界面中分组元素的 id 一致，展开状态按这些 id 持久化。

use barrest_shell::navigation::{PageDescriptor, PageRegistry};

pub struct MenuSection {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: &[MenuSection] = &[
    MenuSection { id: "ordersSubmenu", title: "Orders", icon: "fa-receipt" },
    MenuSection { id: "tablesSubmenu", title: "Tables", icon: "fa-chair" },
    MenuSection { id: "menuSubmenu", title: "Menu", icon: "fa-utensils" },
    MenuSection { id: "inventorySubmenu", title: "Inventory", icon: "fa-boxes" },
    MenuSection { id: "invoicesSubmenu", title: "Invoices", icon: "fa-file-invoice-dollar" },
    MenuSection { id: "adminSubmenu", title: "Admin", icon: "fa-cog" },
];

// (key, title, icon, content source)
type Entry = (&'static str, &'static str, &'static str, &'static str);

const TOP_LEVEL: &[Entry] = &[("dashboard", "Dashboard", "fa-home", "pages/dashboard.html")];

const ORDERS: &[Entry] = &[
    ("orders-active", "Active Orders", "fa-clipboard-list", "pages/orders/active.html"),
    ("orders-history", "Order History", "fa-history", "pages/orders/history.html"),
];

const TABLES: &[Entry] = &[
    ("tables-map", "Table Map", "fa-map", "pages/tables/map.html"),
    ("reservations", "Reservations", "fa-calendar-alt", "pages/tables/reservations.html"),
];

const MENU: &[Entry] = &[
    ("menu-categories", "Categories", "fa-tags", "pages/menu/categories.html"),
    ("menu-sub-categories", "Sub-Categories", "fa-layer-group", "pages/menu/sub-categories.html"),
    ("menu-variants", "Variants", "fa-hamburger", "pages/menu/variants.html"),
    ("menu-ingredients", "Ingredients", "fa-list-ul", "pages/menu/ingredients.html"),
];

const INVENTORY: &[Entry] = &[
    (
        "inventory-categories",
        "Inventory Categories",
        "fa-layer-group",
        "pages/inventory/categories.html",
    ),
    (
        "inventory-sub-categories",
        "Inventory Sub-Categories",
        "fa-list",
        "pages/inventory/sub-categories.html",
    ),
    ("inventory-variants", "Inventory Variants", "fa-boxes", "pages/inventory/variants.html"),
    ("stock-count", "Stock Count", "fa-warehouse", "pages/inventory/stock-count.html"),
    ("suppliers", "Suppliers", "fa-truck", "pages/inventory/suppliers.html"),
];

const INVOICES: &[Entry] = &[
    ("outcome-invoices", "Purchases", "fa-shopping-cart", "pages/invoices/outcome.html"),
    ("income-invoices", "Sells", "fa-cash-register", "pages/invoices/income.html"),
];

const ADMIN: &[Entry] = &[
    ("staff", "Staff", "fa-users", "pages/admin/staff.html"),
    ("reports", "Reports", "fa-chart-bar", "pages/admin/reports.html"),
    ("settings", "Settings", "fa-sliders-h", "pages/admin/settings.html"),
];

fn descriptor(&(key, title, icon, source): &Entry) -> PageDescriptor {
    PageDescriptor::new(key, title, icon, source)
}

pub fn page_registry() -> PageRegistry {
    let mut registry = PageRegistry::new("dashboard");
    for entry in TOP_LEVEL {
        registry.register(descriptor(entry));
    }

    let grouped = [ORDERS, TABLES, MENU, INVENTORY, INVOICES, ADMIN];
    for (section, entries) in SECTIONS.iter().zip(grouped) {
        for entry in entries {
            registry.register(descriptor(entry).in_section(section.id));
        }
    }
    registry
}
