//! Side-bar menu model.

use serde::{Deserialize, Serialize};

/// A menu entry. Top-level entries may carry an icon name and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }
}

/// Main pages plus the bottom menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub pages: Vec<NavItem>,
    #[serde(default)]
    pub bottom_menu: Vec<NavItem>,
}

impl Navigation {
    /// The dashboard's standard menu.
    pub fn default_menu() -> Self {
        let pages = vec![
            NavItem::new("Dashboard", "/dashboard").with_icon("Dashboard"),
            NavItem::new("Administrativo 1", "/administrativo")
                .with_icon("FolderOpen")
                .with_children(vec![
                    NavItem::new("Opción 1", "/administrativo/opcion1"),
                    NavItem::new("Opción 2", "/administrativo/opcion2"),
                ]),
            NavItem::new("Operaciones renta variable", "/operaciones-rv")
                .with_icon("ShowChart")
                .with_children(vec![NavItem::new("Listado", "/operaciones-rv/listado")]),
            NavItem::new("Garantías", "/garantias")
                .with_icon("Security")
                .with_children(vec![NavItem::new("Administración", "/garantias/admin")]),
            NavItem::new("Administración de ETF", "/etf")
                .with_icon("AccountBalance")
                .with_children(vec![
                    NavItem::new("Parametrización", "/etf/parametrizacion"),
                    NavItem::new("Mantenimiento de canasta", "/etf/mantenimiento-canasta"),
                    NavItem::new("Creación de orden", "/etf/creacion-orden"),
                    NavItem::new("Gestión de orden", "/etf/gestion-orden"),
                    NavItem::new("Consulta de ordenes", "/etf/consulta-ordenes"),
                ]),
        ];
        let bottom_menu = vec![
            NavItem::new("Ayuda visual", "/ayuda").with_icon("Accessibility"),
            NavItem::new("Soporte", "/soporte").with_icon("Phone"),
        ];

        Self { pages, bottom_menu }
    }

    /// Finds the entry for `path` anywhere in the tree.
    pub fn find(&self, path: &str) -> Option<&NavItem> {
        self.breadcrumbs(path).pop()
    }

    /// Entries from the top level down to the one matching `path`.
    ///
    /// Empty when no entry matches.
    pub fn breadcrumbs(&self, path: &str) -> Vec<&NavItem> {
        let mut trail = Vec::new();
        for item in self.pages.iter().chain(&self.bottom_menu) {
            if trail_to(item, path, &mut trail) {
                return trail;
            }
        }
        Vec::new()
    }
}

fn trail_to<'a>(item: &'a NavItem, path: &str, trail: &mut Vec<&'a NavItem>) -> bool {
    trail.push(item);
    if item.path == path {
        return true;
    }
    for child in &item.children {
        if trail_to(child, path, trail) {
            return true;
        }
    }
    trail.pop();
    false
}
