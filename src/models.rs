use serde::{Deserialize, Serialize};

/// The facts read straight off one search-result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub price_text: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub item: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
    pub meta: Meta,
    pub images: Vec<String>,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub created_at: String,
    pub updated_at: String,
    pub barcode: String,
    pub qr_code: String,
}
