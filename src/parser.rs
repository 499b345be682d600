use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::RawItem;

pub const MAX_ITEMS: usize = 10;

const UNKNOWN_TITLE: &str = "Unknown Product";
const MISSING_PRICE: &str = "0";
const CURRENCY_PREFIX: &str = "Rs.";

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[data-qa-locator='product-item']").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.title--wFj93").unwrap());
static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".price--NVB62").unwrap());
static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Reads up to [`MAX_ITEMS`] product cards out of a search results page.
///
/// Missing pieces fall back to defaults field by field; a page without any
/// product cards gives an empty list.
pub fn extract(html: &str) -> Vec<RawItem> {
    let doc = Html::parse_document(html);

    let items: Vec<RawItem> = doc
        .select(&CONTAINER)
        .take(MAX_ITEMS)
        .map(|card| RawItem {
            title: first_text(card, &TITLE)
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| UNKNOWN_TITLE.into()),
            price_text: first_text(card, &PRICE)
                .map(|p| clean_price(&p))
                .unwrap_or_else(|| MISSING_PRICE.into()),
            image_url: card
                .select(&IMAGE)
                .next()
                .and_then(|img| img.value().attr("src"))
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    tracing::debug!(count = items.len(), "extracted product cards");
    items
}

fn first_text(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|e| e.text().collect::<String>())
}

// No numeric parsing: decimals and stray characters pass through.
fn clean_price(text: &str) -> String {
    text.trim()
        .replace(CURRENCY_PREFIX, "")
        .replace(',', "")
        .trim()
        .to_string()
}
