//! Built-in sample feeds standing in for the real aggregator sites.
//!
//! Real scraping is out of scope for this crate; the demo binary and
//! the end-to-end tests run against this fixed catalogue instead.

use crate::models::{Coordinates, Listing, PropertyType, Source};
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};

/// In-memory feed serving the sample listings of one source site
pub struct SampleFeed {
    source: Source,
}

impl SampleFeed {
    pub fn new(source: Source) -> Self {
        Self { source }
    }
}

#[async_trait]
impl ListingSource for SampleFeed {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        Ok(sample_catalogue()
            .into_iter()
            .filter(|l| l.source == self.source)
            .collect())
    }

    fn source(&self) -> Source {
        self.source
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    title: &str,
    location: &str,
    price: u64,
    bedrooms: u32,
    bathrooms: u32,
    area: f64,
    property_type: PropertyType,
    source: Source,
    featured: bool,
    description: &str,
    amenities: &[&str],
    lat: f64,
    lng: f64,
    hours_ago: i64,
) -> Listing {
    let base = match source {
        Source::ImmoKatanga => "https://immokatanga.cd",
        Source::LogementKatanga => "https://logementkatanga.com",
        Source::MaisonKatanga => "https://maisonkatanga.cd",
    };
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        price,
        bedrooms,
        bathrooms,
        area,
        property_type,
        source,
        featured,
        description: description.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        coordinates: Some(Coordinates { lat, lng }),
        last_updated: Utc::now() - Duration::hours(hours_ago),
        url: format!("{base}/annonces/{id}"),
    }
}

/// The full 15-listing sample catalogue, in ingestion order
pub fn sample_catalogue() -> Vec<Listing> {
    vec![
        entry(
            1,
            "Appartement Moderne à Lubumbashi Centre",
            "Lubumbashi, Centre-ville",
            850_000,
            2,
            2,
            85.0,
            PropertyType::Apartment,
            Source::ImmoKatanga,
            true,
            "Magnifique appartement situé dans le quartier le plus prisé de Lubumbashi. \
             Finitions de haute qualité, salon spacieux, cuisine équipée et balcon avec vue sur la ville.",
            &["Parking", "Sécurité 24/7", "Ascenseur", "Groupe électrogène", "Eau courante", "Gardien"],
            -11.6646,
            27.4794,
            24,
        ),
        entry(
            2,
            "Villa de Prestige à Lubumbashi Golf",
            "Lubumbashi, Golf",
            2_500_000,
            4,
            3,
            250.0,
            PropertyType::Villa,
            Source::LogementKatanga,
            true,
            "Somptueuse villa dans le quartier résidentiel du Golf. Grand jardin arboré, \
             piscine privée, cuisine moderne et garage pour 3 véhicules. Idéale pour famille expatriée.",
            &["Parking triple", "Sécurité 24/7", "Piscine", "Jardin", "Groupe électrogène", "Cuisine équipée", "Clôture"],
            -11.6592,
            27.4858,
            3,
        ),
        entry(
            3,
            "Studio Cosy à Likasi",
            "Likasi, Centre",
            350_000,
            1,
            1,
            45.0,
            PropertyType::Studio,
            Source::MaisonKatanga,
            false,
            "Charmant studio entièrement meublé au cœur de Likasi. Parfait pour jeunes \
             professionnels ou étudiants. Proximité marchés et services.",
            &["Meublé", "Sécurité", "Eau courante", "Électricité"],
            -10.9819,
            26.7334,
            48,
        ),
        entry(
            4,
            "Appartement Familial à Kolwezi",
            "Kolwezi, Mwangeji",
            950_000,
            3,
            2,
            110.0,
            PropertyType::Apartment,
            Source::ImmoKatanga,
            false,
            "Spacieux appartement familial dans quartier résidentiel calme de Kolwezi. \
             3 chambres à coucher, cuisine moderne et 2 parkings.",
            &["Parking double", "Sécurité 24/7", "Groupe électrogène", "Eau courante", "Gardien"],
            -10.7169,
            25.4617,
            120,
        ),
        entry(
            5,
            "Maison Confortable à Kamina",
            "Kamina, Secteur 3",
            650_000,
            3,
            2,
            120.0,
            PropertyType::House,
            Source::LogementKatanga,
            true,
            "Belle maison avec jardin à Kamina. Construction solide, véranda spacieuse et \
             quartier sécurisé. Proche écoles et commerces.",
            &["Parking", "Sécurité", "Jardin", "Véranda", "Puits", "Clôture"],
            -8.7361,
            24.9989,
            24,
        ),
        entry(
            6,
            "Duplex Moderne à Lubumbashi Kenya",
            "Lubumbashi, Kenya",
            1_200_000,
            3,
            2,
            140.0,
            PropertyType::Duplex,
            Source::MaisonKatanga,
            false,
            "Duplex de standing dans le quartier Kenya. Design contemporain avec terrasse \
             panoramique. Excellente localisation proche ambassades.",
            &["Parking double", "Sécurité 24/7", "Terrasse", "Groupe électrogène", "Ascenseur"],
            -11.6752,
            27.5068,
            96,
        ),
        entry(
            7,
            "Villa Spacieuse à Lubumbashi Kamalondo",
            "Lubumbashi, Kamalondo",
            1_800_000,
            5,
            4,
            300.0,
            PropertyType::Villa,
            Source::ImmoKatanga,
            true,
            "Magnifique villa familiale à Kamalondo. 5 chambres, vaste jardin arboré, \
             pavillon invités indépendant. Quartier diplomatique très prisé.",
            &["Parking triple", "Sécurité 24/7", "Piscine", "Jardin arboré", "Groupe électrogène", "Pavillon invités", "Cuisine moderne"],
            -11.6458,
            27.4636,
            48,
        ),
        entry(
            8,
            "Appartement à Lubumbashi Ruashi",
            "Lubumbashi, Ruashi",
            550_000,
            2,
            1,
            70.0,
            PropertyType::Apartment,
            Source::LogementKatanga,
            false,
            "Appartement économique à Ruashi. Idéal pour jeune couple ou petit ménage. \
             Bon état général, quartier dynamique.",
            &["Parking", "Sécurité", "Eau courante", "Gardien"],
            -11.5974,
            27.5829,
            144,
        ),
        entry(
            9,
            "Maison à Likasi Panda",
            "Likasi, Panda",
            700_000,
            3,
            2,
            130.0,
            PropertyType::House,
            Source::MaisonKatanga,
            false,
            "Belle maison dans le quartier Panda à Likasi. Construction en dur, jardin \
             clôturé, proximité écoles et centre commercial.",
            &["Parking", "Sécurité", "Jardin", "Clôture", "Puits"],
            -10.9761,
            26.7421,
            72,
        ),
        entry(
            10,
            "Appartement Standing à Lubumbashi Gambela",
            "Lubumbashi, Gambela",
            750_000,
            2,
            2,
            90.0,
            PropertyType::Apartment,
            Source::ImmoKatanga,
            false,
            "Bel appartement de standing dans résidence sécurisée à Gambela. Finitions \
             modernes, balcon spacieux et cuisine équipée.",
            &["Parking", "Sécurité 24/7", "Groupe électrogène", "Balcon", "Eau courante"],
            -11.6523,
            27.4912,
            24,
        ),
        entry(
            11,
            "Villa de Luxe à Lubumbashi Annexe",
            "Lubumbashi, Annexe",
            3_200_000,
            4,
            3,
            280.0,
            PropertyType::Villa,
            Source::LogementKatanga,
            true,
            "Villa ultra-moderne dans le quartier Annexe, zone privilégiée de Lubumbashi. \
             Piscine chauffée, home cinéma, domotique complète.",
            &["Parking triple", "Sécurité 24/7", "Piscine chauffée", "Groupe électrogène", "Jardin paysager", "Home cinéma"],
            -11.6389,
            27.4721,
            48,
        ),
        entry(
            12,
            "Studio Moderne à Kolwezi Centre",
            "Kolwezi, Centre-ville",
            400_000,
            1,
            1,
            50.0,
            PropertyType::Studio,
            Source::MaisonKatanga,
            false,
            "Studio neuf et fonctionnel au centre de Kolwezi. Immeuble moderne avec toutes \
             commodités. Idéal pour célibataires.",
            &["Parking", "Sécurité", "Ascenseur", "Meublé"],
            -10.7147,
            25.4728,
            96,
        ),
        entry(
            13,
            "Grande Maison à Lubumbashi Katuba",
            "Lubumbashi, Katuba",
            1_500_000,
            4,
            3,
            200.0,
            PropertyType::House,
            Source::ImmoKatanga,
            false,
            "Vaste maison familiale à Katuba. Quartier résidentiel calme, proche université. \
             Grand jardin avec espace barbecue.",
            &["Parking double", "Sécurité", "Jardin", "Groupe électrogène", "Espace barbecue"],
            -11.6108,
            27.4534,
            120,
        ),
        entry(
            14,
            "Penthouse Prestigieux à Lubumbashi Golf",
            "Lubumbashi, Golf",
            2_800_000,
            3,
            3,
            180.0,
            PropertyType::Penthouse,
            Source::LogementKatanga,
            true,
            "Penthouse exceptionnel au dernier étage avec vue panoramique sur Lubumbashi. \
             Terrasse de 100m², jacuzzi et finitions haut de gamme.",
            &["Parking double", "Sécurité 24/7", "Ascenseur privatif", "Terrasse panoramique", "Jacuzzi", "Groupe électrogène"],
            -11.6578,
            27.4892,
            24,
        ),
        entry(
            15,
            "Maison Confortable à Kamina Lualaba",
            "Kamina, Lualaba",
            580_000,
            3,
            2,
            115.0,
            PropertyType::House,
            Source::MaisonKatanga,
            false,
            "Maison familiale bien entretenue dans le quartier Lualaba. Jardin arboré, \
             véranda couverte et bon environnement.",
            &["Parking", "Sécurité", "Jardin", "Véranda", "Puits", "Clôture"],
            -8.7289,
            25.0134,
            48,
        ),
    ]
}
