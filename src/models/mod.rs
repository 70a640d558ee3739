use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source site a listing was aggregated from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Source {
    ImmoKatanga,
    LogementKatanga,
    MaisonKatanga,
}

impl Source {
    /// All known aggregator sources, in display order
    pub const ALL: [Source; 3] = [
        Source::ImmoKatanga,
        Source::LogementKatanga,
        Source::MaisonKatanga,
    ];

    /// Public site name, as shown in the catalogue
    pub fn display_name(&self) -> &'static str {
        match self {
            Source::ImmoKatanga => "ImmoKatanga.cd",
            Source::LogementKatanga => "LogementKatanga.com",
            Source::MaisonKatanga => "MaisonKatanga.cd",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Category of a property listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Studio,
    Duplex,
    Penthouse,
}

impl PropertyType {
    /// Parse a user-facing type string, case-insensitively.
    /// Accepts both the English keys and the French labels the source
    /// sites use ("appartement", "maison").
    pub fn parse(value: &str) -> Option<PropertyType> {
        match value.to_lowercase().as_str() {
            "apartment" | "appartement" => Some(PropertyType::Apartment),
            "villa" => Some(PropertyType::Villa),
            "house" | "maison" => Some(PropertyType::House),
            "studio" => Some(PropertyType::Studio),
            "duplex" => Some(PropertyType::Duplex),
            "penthouse" => Some(PropertyType::Penthouse),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Appartement",
            PropertyType::Villa => "Villa",
            PropertyType::House => "Maison",
            PropertyType::Studio => "Studio",
            PropertyType::Duplex => "Duplex",
            PropertyType::Penthouse => "Penthouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geographic position of a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Core listing data model
///
/// Created by an ingestion source, read-only afterwards. The query
/// engine never mutates listings in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Monthly rent in Congolese francs
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Living area in square meters
    pub area: f64,
    pub property_type: PropertyType,
    pub source: Source,
    pub featured: bool,
    pub description: String,
    pub amenities: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub last_updated: DateTime<Utc>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_parse_is_case_insensitive() {
        assert_eq!(PropertyType::parse("Villa"), Some(PropertyType::Villa));
        assert_eq!(PropertyType::parse("VILLA"), Some(PropertyType::Villa));
        assert_eq!(
            PropertyType::parse("appartement"),
            Some(PropertyType::Apartment)
        );
        assert_eq!(PropertyType::parse("castle"), None);
    }

    #[test]
    fn source_display_names_match_sites() {
        assert_eq!(Source::ImmoKatanga.display_name(), "ImmoKatanga.cd");
        assert_eq!(Source::LogementKatanga.display_name(), "LogementKatanga.com");
        assert_eq!(Source::MaisonKatanga.display_name(), "MaisonKatanga.cd");
    }
}
