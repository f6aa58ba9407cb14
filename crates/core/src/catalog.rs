//! The fixed product catalog.
//!
//! The shop trades in eleven hardware classes. The list is process-wide
//! static configuration: records reference categories by name, purchases
//! reference them indirectly through a supplier, and every derived view
//! iterates the catalog in its declared order so output stays deterministic.

use serde::{Deserialize, Serialize};

/// One of the eleven fixed hardware-product classes.
///
/// Variants are declared in display order; `Category::ALL` and the discriminant
/// values follow the same order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CEMENT")]
    Cement,
    #[serde(rename = "TIMBER")]
    Timber,
    #[serde(rename = "STEEL")]
    Steel,
    #[serde(rename = "IRON-SHEETS")]
    IronSheets,
    #[serde(rename = "PAINT")]
    Paint,
    #[serde(rename = "BRICKS")]
    Bricks,
    #[serde(rename = "NAILS")]
    Nails,
    #[serde(rename = "GLASS")]
    Glass,
    #[serde(rename = "MACHINERY")]
    Machinery,
    #[serde(rename = "PLUMBING TOOLS")]
    PlumbingTools,
    #[serde(rename = "HAND TOOLS")]
    HandTools,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 11] = [
        Category::Cement,
        Category::Timber,
        Category::Steel,
        Category::IronSheets,
        Category::Paint,
        Category::Bricks,
        Category::Nails,
        Category::Glass,
        Category::Machinery,
        Category::PlumbingTools,
        Category::HandTools,
    ];

    /// Canonical uppercase name as it appears on records.
    pub fn name(self) -> &'static str {
        match self {
            Category::Cement => "CEMENT",
            Category::Timber => "TIMBER",
            Category::Steel => "STEEL",
            Category::IronSheets => "IRON-SHEETS",
            Category::Paint => "PAINT",
            Category::Bricks => "BRICKS",
            Category::Nails => "NAILS",
            Category::Glass => "GLASS",
            Category::Machinery => "MACHINERY",
            Category::PlumbingTools => "PLUMBING TOOLS",
            Category::HandTools => "HAND TOOLS",
        }
    }

    /// Resolve a category by exact name match. Unknown names are `None`,
    /// never an error: records outside the catalog contribute nothing.
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Position within `Category::ALL` (discriminants follow declared order).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The vendor name that supplies this category.
    pub fn supplier_name(self) -> String {
        format!("{} SUPPLIES", self.name())
    }

    /// Default measurement unit, display-only.
    pub fn measurement_unit(self) -> &'static str {
        match self {
            Category::Cement => "bags",
            Category::Timber => "pieces",
            Category::Steel => "rolls",
            Category::IronSheets => "sheets",
            Category::Paint => "cans(50ltrs)",
            Category::Bricks => "pieces",
            Category::Nails => "kgs",
            Category::Glass => "pieces",
            Category::Machinery => "number",
            Category::PlumbingTools => "pieces",
            Category::HandTools => "number",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static supplier → category lookup. Each category has exactly one supplier
/// named `"{CATEGORY} SUPPLIES"`; suppliers outside the set map to `None`.
pub fn supplier_category(supplier_name: &str) -> Option<Category> {
    Category::ALL
        .iter()
        .copied()
        .find(|c| supplier_name == c.supplier_name())
}

/// Low/high stock thresholds for alert evaluation.
///
/// Fixed constants today, but carried as a value so callers can make them
/// configurable without touching the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            low: 200.0,
            high: 2000.0,
        }
    }
}
