use immo_scout::engine::{
    self, CatalogueStats, ComparisonSelection, ListingStore, PageToken, Query,
    SavedSearchRegistry, SortKey, PAGE_SIZE,
};
use immo_scout::models::{PropertyType, Source};
use immo_scout::sources::{aggregate, ListingSource, SampleFeed};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Immo Scout - Katanga Listing Catalogue");
    info!("==========================================");
    info!("");

    // Aggregate the catalogue from every source feed
    let feeds: Vec<Box<dyn ListingSource>> = Source::ALL
        .iter()
        .map(|&s| Box::new(SampleFeed::new(s)) as Box<dyn ListingSource>)
        .collect();
    let store = ListingStore::new(aggregate(&feeds).await?);
    info!("✅ Aggregated {} listings\n", store.len());

    // Run a representative query: villas, most expensive first
    let query = Query {
        property_type: Some(PropertyType::Villa),
        ..Query::default()
    };
    let matched = engine::filter_all(store.all(), &query);
    let ordered = engine::sort_listings(matched, SortKey::parse("price-high"));
    let page = engine::paginate(&ordered, PAGE_SIZE, 1);

    info!(
        "Query: villas, price descending — {} matches, page {}/{}",
        ordered.len(),
        page.current_page,
        page.total_pages
    );
    for (i, listing) in page.items.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, engine::compare::format_price(listing.price));
        println!("   {} ch, {} sdb, {} m²", listing.bedrooms, listing.bathrooms, listing.area);
        println!("   {} — {}", listing.location, listing.source);
        println!("   URL: {}", listing.url);
        println!();
    }

    let strip: Vec<String> = engine::page_numbers(page.total_pages, page.current_page)
        .iter()
        .map(|t| match t {
            PageToken::Number(n) => n.to_string(),
            PageToken::Ellipsis => "…".to_string(),
        })
        .collect();
    info!("Pages: [{}]", strip.join(" "));

    // Derived statistics over the filtered set
    let stats = CatalogueStats::compute(&ordered);
    info!(
        "📊 {} propriétés — moyenne {}, min {}, max {}, {} à la une",
        stats.count,
        engine::compare::format_price(stats.avg_price),
        engine::compare::format_price(stats.min_price),
        engine::compare::format_price(stats.max_price),
        stats.featured_count
    );
    for share in &stats.sources {
        info!("   {} : {} ({}%)", share.source, share.count, share.percentage);
    }

    // Compare the two priciest matches side by side
    let selection = page
        .items
        .iter()
        .take(2)
        .fold(ComparisonSelection::new(), |sel, l| sel.toggle(&l.id));
    let matrix = engine::project(&store, &selection);
    info!("");
    info!("🔍 Comparaison ({} colonnes)", matrix.columns.len());
    for row in &matrix.rows {
        info!("   {} : {}", row.label, row.values.join(" | "));
    }

    // Save the query for later and cache its match count
    let mut registry = SavedSearchRegistry::new();
    let id = registry.save("Villas au Katanga", query.clone())?.id;
    let matches = engine::count_matches(store.all(), &query);
    registry.set_match_count(id, matches);
    info!("");
    info!("💾 Saved search \"Villas au Katanga\" ({} matches)", matches);

    // Save the filtered page to JSON
    let owned: Vec<_> = page.items.iter().map(|l| (**l).clone()).collect();
    let json = serde_json::to_string_pretty(&owned)?;
    tokio::fs::write("filtered_listings.json", json).await?;
    info!("💾 Saved page to filtered_listings.json");

    Ok(())
}
