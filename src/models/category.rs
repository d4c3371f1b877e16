//! Category catalog
//!
//! Categories are bundled, immutable data. Every expense references one of
//! them by id; lookups go through [`find_category`], which returns `None` for
//! an unknown id instead of assuming a match.

use serde::Serialize;
use std::fmt;

use super::ids::CategoryId;

/// A spending category from the bundled catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Catalog identifier
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Icon identifier, used to build the asset path
    pub icon: &'static str,
}

/// The bundled category catalog, in display order
pub static CATEGORIES: &[Category] = &[
    Category { id: "1", name: "Ahorro", icon: "ahorro" },
    Category { id: "2", name: "Comida", icon: "comida" },
    Category { id: "3", name: "Casa", icon: "casa" },
    Category { id: "4", name: "Gastos Varios", icon: "gastos" },
    Category { id: "5", name: "Ocio", icon: "ocio" },
    Category { id: "6", name: "Salud", icon: "salud" },
    Category { id: "7", name: "Suscripciones", icon: "suscripciones" },
];

impl Category {
    /// Typed identifier of this category
    pub fn category_id(&self) -> CategoryId {
        CategoryId::new(self.id)
    }

    /// Path of the icon asset for this category (`icono_<icon>.svg`)
    pub fn icon_path(&self) -> String {
        icon_path(self.icon)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Build the asset path for an icon identifier
pub fn icon_path(icon: &str) -> String {
    format!("icono_{}.svg", icon)
}

/// Look up a category by id
pub fn find_category(id: &CategoryId) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id.as_str())
}

/// Resolve user input (id or case-insensitive name) to a catalog category
pub fn resolve_category(input: &str) -> Option<&'static Category> {
    let input = input.trim();
    CATEGORIES
        .iter()
        .find(|c| c.id == input)
        .or_else(|| CATEGORIES.iter().find(|c| c.name.eq_ignore_ascii_case(input)))
}

/// Position of a category in the catalog, used for cycling selections
pub fn catalog_index(id: &CategoryId) -> Option<usize> {
    CATEGORIES.iter().position(|c| c.id == id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATEGORIES.len());
    }

    #[test]
    fn test_find_category() {
        let cat = find_category(&CategoryId::from("2")).unwrap();
        assert_eq!(cat.name, "Comida");
        assert_eq!(cat.icon_path(), "icono_comida.svg");
    }

    #[test]
    fn test_unknown_category_is_none() {
        assert!(find_category(&CategoryId::from("99")).is_none());
        assert!(find_category(&CategoryId::from("")).is_none());
    }

    #[test]
    fn test_resolve_by_name_or_id() {
        assert_eq!(resolve_category("salud").unwrap().id, "6");
        assert_eq!(resolve_category("Gastos Varios").unwrap().id, "4");
        assert_eq!(resolve_category(" 7 ").unwrap().name, "Suscripciones");
        assert!(resolve_category("viajes").is_none());
    }

    #[test]
    fn test_catalog_index() {
        assert_eq!(catalog_index(&CategoryId::from("1")), Some(0));
        assert_eq!(catalog_index(&CategoryId::from("7")), Some(6));
        assert_eq!(catalog_index(&CategoryId::from("x")), None);
    }
}
