use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{Meta, ProductRecord, RawItem};
use crate::parser;

pub const REVIEWERS: [(&str, &str); 4] = [
    ("Alice Smith", "alice.smith@x.dummyjson.com"),
    ("John Doe", "john.doe@x.dummyjson.com"),
    ("Emily Johnson", "emily.johnson@x.dummyjson.com"),
    ("Nicholas Bailey", "nicholas.bailey@x.dummyjson.com"),
];
pub const COMMENTS: [&str; 3] = ["Very satisfied!", "Poor quality!", "Would buy again!"];
pub const ORDER_QUANTITIES: [u32; 4] = [1, 5, 10, 20];

pub const RETURN_POLICY: &str = "7 days return policy";
pub const QR_CODE_URL: &str = "https://cdn.dummyjson.com/public/qr-code.png";

const BARCODE_MIN: u64 = 1_000_000_000_000;
const BARCODE_MAX: u64 = 9_999_999_999_999;

/// One random review, drawn once and shared by every review field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewDraw {
    pub rating: u8,
    pub comment: &'static str,
    pub reviewer_name: &'static str,
    pub reviewer_email: &'static str,
}

impl ReviewDraw {
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let (reviewer_name, reviewer_email) = REVIEWERS[rng.gen_range(0..REVIEWERS.len())];
        ReviewDraw {
            rating: rng.gen_range(1..=5),
            comment: COMMENTS[rng.gen_range(0..COMMENTS.len())],
            reviewer_name,
            reviewer_email,
        }
    }
}

pub fn synthesize(raw: RawItem) -> ProductRecord {
    synthesize_with(raw, &mut rand::thread_rng(), Utc::now())
}

/// Fills in the catalog fields the results page doesn't carry.
///
/// `now` is stamped on every timestamp of the record.
pub fn synthesize_with<R: Rng>(raw: RawItem, rng: &mut R, now: DateTime<Utc>) -> ProductRecord {
    let review = ReviewDraw::draw(rng);
    let timestamp = format_timestamp(now);
    let barcode = rng.gen_range(BARCODE_MIN..=BARCODE_MAX).to_string();
    let minimum_order_quantity = ORDER_QUANTITIES[rng.gen_range(0..ORDER_QUANTITIES.len())];

    tracing::debug!(item = %raw.title, price = %raw.price_text, "synthesized record");

    ProductRecord {
        item: raw.title,
        rating: review.rating,
        comment: review.comment.to_string(),
        date: timestamp.clone(),
        reviewer_name: review.reviewer_name.to_string(),
        reviewer_email: review.reviewer_email.to_string(),
        return_policy: RETURN_POLICY.to_string(),
        minimum_order_quantity,
        meta: Meta {
            created_at: timestamp.clone(),
            updated_at: timestamp,
            barcode,
            qr_code: QR_CODE_URL.to_string(),
        },
        images: vec![raw.image_url.clone()],
        thumbnail: raw.image_url,
    }
}

/// Extracts the page and synthesizes a record per card, sharing one clock reading.
pub fn catalog_from_html<R: Rng>(html: &str, rng: &mut R, now: DateTime<Utc>) -> Vec<ProductRecord> {
    parser::extract(html)
        .into_iter()
        .map(|raw| synthesize_with(raw, rng, now))
        .collect()
}

// Naive UTC, microsecond precision, no offset suffix.
fn format_timestamp(now: DateTime<Utc>) -> String {
    now.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn raw(image_url: &str) -> RawItem {
        RawItem {
            title: "Dell Laptop".into(),
            price_text: "55000".into(),
            image_url: image_url.into(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn records_stay_schema_valid_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let record = synthesize_with(raw("http://x/img.png"), &mut rng, fixed_now());

            assert!((1..=5).contains(&record.rating));
            assert!(ORDER_QUANTITIES.contains(&record.minimum_order_quantity));
            assert!(COMMENTS.contains(&record.comment.as_str()));
            assert_eq!(record.meta.barcode.len(), 13);
            assert!(record.meta.barcode.chars().all(|c| c.is_ascii_digit()));
            assert!(
                REVIEWERS
                    .iter()
                    .any(|(n, e)| *n == record.reviewer_name && *e == record.reviewer_email)
            );
        }
    }

    #[test]
    fn draws_cover_every_rating_and_quantity() {
        let mut rng = StdRng::seed_from_u64(42);
        let records: Vec<_> = (0..400)
            .map(|_| synthesize_with(raw(""), &mut rng, fixed_now()))
            .collect();

        for rating in 1..=5 {
            assert!(records.iter().any(|r| r.rating == rating), "rating {rating} never drawn");
        }
        for qty in ORDER_QUANTITIES {
            assert!(records.iter().any(|r| r.minimum_order_quantity == qty));
        }
    }

    #[test]
    fn one_timestamp_per_record() {
        let record = synthesize_with(raw(""), &mut StdRng::seed_from_u64(1), fixed_now());

        assert_eq!(record.date, "2024-03-09T14:05:07.000000");
        assert_eq!(record.meta.created_at, record.date);
        assert_eq!(record.meta.updated_at, record.date);
    }

    #[test]
    fn image_fills_images_and_thumbnail() {
        let record = synthesize_with(raw("http://x/img.png"), &mut StdRng::seed_from_u64(3), fixed_now());
        assert_eq!(record.images, vec!["http://x/img.png".to_string()]);
        assert_eq!(record.thumbnail, "http://x/img.png");

        let blank = synthesize_with(raw(""), &mut StdRng::seed_from_u64(3), fixed_now());
        assert_eq!(blank.images, vec![String::new()]);
        assert_eq!(blank.thumbnail, "");
    }

    #[test]
    fn constants_and_title_pass_through() {
        let record = synthesize(raw(""));

        assert_eq!(record.item, "Dell Laptop");
        assert_eq!(record.return_policy, "7 days return policy");
        assert_eq!(record.meta.qr_code, QR_CODE_URL);
    }

    #[test]
    fn same_seed_same_record() {
        let a = synthesize_with(raw("a"), &mut StdRng::seed_from_u64(9), fixed_now());
        let b = synthesize_with(raw("a"), &mut StdRng::seed_from_u64(9), fixed_now());

        assert_eq!(a.rating, b.rating);
        assert_eq!(a.meta.barcode, b.meta.barcode);
        assert_eq!(a.reviewer_email, b.reviewer_email);
    }

    #[test]
    fn barcodes_vary_across_records() {
        let mut rng = StdRng::seed_from_u64(11);
        let codes: std::collections::HashSet<String> = (0..50)
            .map(|_| synthesize_with(raw(""), &mut rng, fixed_now()).meta.barcode)
            .collect();
        assert!(codes.len() > 45);
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let record = synthesize_with(raw("i.png"), &mut StdRng::seed_from_u64(5), fixed_now());
        let value = serde_json::to_value(&record).unwrap();

        for key in [
            "item",
            "rating",
            "comment",
            "date",
            "reviewerName",
            "reviewerEmail",
            "returnPolicy",
            "minimumOrderQuantity",
            "meta",
            "images",
            "thumbnail",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        for key in ["createdAt", "updatedAt", "barcode", "qrCode"] {
            assert!(value["meta"].get(key).is_some(), "missing meta.{key}");
        }
    }

    #[test]
    fn catalog_from_html_builds_one_record_per_card() {
        let html = r#"
            <div data-qa-locator="product-item"><div class="title--wFj93">A</div></div>
            <div data-qa-locator="product-item"><img src="b.png"></div>
        "#;

        let records = catalog_from_html(html, &mut StdRng::seed_from_u64(2), fixed_now());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].item, "A");
        assert_eq!(records[1].item, "Unknown Product");
        assert_eq!(records[1].thumbnail, "b.png");
    }
}
