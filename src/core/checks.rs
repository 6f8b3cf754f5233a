use crate::domain::model::{item_text, Check, RequestSpec, ResponseEnvelope, Summary};

const SAMPLE_LIMIT: usize = 3;

pub const SEARCH_TERM: &str = "cleaning";
pub const SEARCH_LOCATION: &str = "Toronto";

/// The fixed catalogue, in execution order.
pub fn default_checks() -> Vec<Check> {
    vec![
        Check::new("categories", RequestSpec::get("/services/categories"), |env| {
            sample_names("Categories found", "Sample categories", env)
        }),
        Check::new("services", RequestSpec::get("/services"), |env| {
            sample_names("Services found", "Sample services", env)
        }),
        Check::new(
            "search-by-term",
            RequestSpec::get("/services/search").with_query("q", SEARCH_TERM),
            |env| first_hit(&format!("Search results for \"{}\"", SEARCH_TERM), env),
        ),
        Check::new(
            "search-by-location",
            RequestSpec::get("/services/search").with_query("location", SEARCH_LOCATION),
            |env| {
                Summary::new(
                    format!("Search results for location \"{}\"", SEARCH_LOCATION),
                    env.len(),
                )
            },
        )
        .with_title("GET /services/search with location"),
    ]
}

/// Count plus the first few `name` values. Items without a name leave an empty slot.
pub fn sample_names(headline: &str, label: &str, envelope: &ResponseEnvelope) -> Summary {
    let summary = Summary::new(headline, envelope.len());
    if envelope.is_empty() {
        return summary;
    }

    let names: Vec<String> = envelope
        .items()
        .iter()
        .take(SAMPLE_LIMIT)
        .map(|item| item_text(item, "/name").unwrap_or_default())
        .collect();

    summary.with_detail(format!("{}: {}", label, names.join(", ")))
}

/// Count plus name, price and provider of the first hit.
pub fn first_hit(headline: &str, envelope: &ResponseEnvelope) -> Summary {
    let summary = Summary::new(headline, envelope.len());
    let Some(hit) = envelope.items().first() else {
        return summary;
    };

    let name = item_text(hit, "/name").unwrap_or_else(|| "N/A".to_string());
    let price = item_text(hit, "/price").unwrap_or_else(|| "N/A".to_string());
    let summary = summary.with_detail(format!("Sample result: {} - ${}", name, price));

    // Provider line only when the hit carries a provider object
    match hit.get("provider") {
        None | Some(serde_json::Value::Null) => summary,
        Some(_) => {
            let provider = item_text(hit, "/provider/businessName")
                .filter(|business| !business.is_empty())
                .unwrap_or_else(|| "N/A".to_string());
            summary.with_detail(format!("Provider: {}", provider))
        }
    }
}
