use crate::engine::store::ListingStore;
use crate::models::Listing;
use serde::{Deserialize, Serialize};

/// At most this many listings can be compared side by side
pub const MAX_COMPARED: usize = 4;

/// How many amenities a comparison cell spells out before collapsing
/// the rest into a `+N` suffix
const AMENITIES_SHOWN: usize = 4;

/// Ordered set of listing ids picked for side-by-side comparison.
///
/// Updated copy-on-write: `toggle` returns a new selection and leaves
/// the old value untouched, so the caller can keep both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonSelection {
    ids: Vec<String>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove one listing. A present id is removed; a new id is
    /// appended while there is room. Toggling a 5th listing in is a
    /// silent no-op, never an error.
    pub fn toggle(&self, id: &str) -> ComparisonSelection {
        let mut ids = self.ids.clone();
        if let Some(pos) = ids.iter().position(|x| x == id) {
            ids.remove(pos);
        } else if ids.len() < MAX_COMPARED {
            ids.push(id.to_string());
        }
        ComparisonSelection { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Selected ids in the order they were picked
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Column header of the comparison table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonColumn {
    pub id: String,
    pub title: String,
}

/// One feature row across every compared listing.
/// Output-only projection; serialized for display, never read back.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Feature-by-listing table; columns follow selection order
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonMatrix {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<FeatureRow>,
}

/// `1500000` -> `"1 500 000 FC"`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{grouped} FC")
}

fn format_amenities(amenities: &[String]) -> String {
    let shown = amenities
        .iter()
        .take(AMENITIES_SHOWN)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if amenities.len() > AMENITIES_SHOWN {
        format!("{shown} +{}", amenities.len() - AMENITIES_SHOWN)
    } else {
        shown
    }
}

const FEATURES: [(&str, fn(&Listing) -> String); 8] = [
    ("Prix Mensuel", |l| format_price(l.price)),
    ("Localisation", |l| l.location.clone()),
    ("Type", |l| l.property_type.to_string()),
    ("Chambres", |l| l.bedrooms.to_string()),
    ("Salles de bain", |l| l.bathrooms.to_string()),
    ("Surface", |l| format!("{}m²", l.area)),
    ("Source", |l| l.source.to_string()),
    ("Commodités", |l| format_amenities(&l.amenities)),
];

/// Project the selected listings onto the fixed feature rows.
/// Ids no longer present in the store are skipped.
pub fn project(store: &ListingStore, selection: &ComparisonSelection) -> ComparisonMatrix {
    let picked: Vec<&Listing> = selection
        .ids()
        .iter()
        .filter_map(|id| store.get(id))
        .collect();

    let columns = picked
        .iter()
        .map(|l| ComparisonColumn {
            id: l.id.clone(),
            title: l.title.clone(),
        })
        .collect();

    let rows = FEATURES
        .iter()
        .map(|(label, extract)| FeatureRow {
            label,
            values: picked.iter().map(|l| extract(l)).collect(),
        })
        .collect();

    ComparisonMatrix { columns, rows }
}
