//! 整形ステージ
//!
//! ブラウザから読んだテキストを型付きのレコードに変換する。I/O は行わない。

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::TransformError;
use crate::model::{ListingRecord, RawListing};

/// スクレイパーが「値なし」の意味で入れる文字列
const PLACEHOLDERS: &[&str] = &[
    "no name",
    "no address",
    "no rating",
    "no coordinates",
    "n/a",
    "-",
];

const MAX_RATING: f64 = 5.0;

fn rating_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:[.,]\d+)?)").expect("rating regex"))
}

fn review_count_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+(?:[.,\s]\d+)*)(?:\s*([kK]|rb)\b)?").expect("review count regex")
    })
}

/// 整形結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transformed {
    pub records: Vec<ListingRecord>,
    /// 整形できずに捨てた件数
    pub skipped: usize,
    /// 重複として捨てた件数
    pub duplicates: usize,
}

#[derive(Debug, Clone)]
pub struct Transformer {
    dedupe: bool,
}

impl Default for Transformer {
    fn default() -> Self {
        Self { dedupe: true }
    }
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// 全件を整形する。失敗したレコードは警告を出してスキップ。
    pub fn transform(&self, raw: Vec<RawListing>) -> Transformed {
        if raw.is_empty() {
            warn!("No listings to transform");
            return Transformed::default();
        }

        info!("Transforming {} listings", raw.len());

        let mut out = Transformed::default();
        let mut seen = HashSet::new();

        for (idx, listing) in raw.iter().enumerate() {
            let record = match self.normalize(listing) {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping listing {}: {}", idx + 1, e);
                    out.skipped += 1;
                    continue;
                }
            };

            if self.dedupe {
                let key = (record.name.to_lowercase(), record.address.to_lowercase());
                if !seen.insert(key) {
                    debug!("Duplicate listing dropped: {} | {}", record.name, record.address);
                    out.duplicates += 1;
                    continue;
                }
            }

            out.records.push(record);
        }

        info!(
            "Transformation produced {} records ({} skipped, {} duplicates)",
            out.records.len(),
            out.skipped,
            out.duplicates
        );
        out
    }

    /// 1件を整形する
    pub fn normalize(&self, raw: &RawListing) -> Result<ListingRecord, TransformError> {
        let name = clean_text(&raw.name);
        if name.is_empty() {
            let source: String = raw.raw_source_text.chars().take(60).collect();
            return Err(TransformError::MissingName(source));
        }

        let (latitude, longitude) = match parse_coordinates(&raw.coordinates) {
            Some((lat, lng)) => (Some(lat), Some(lng)),
            None => {
                if !clean_text(&raw.coordinates).is_empty() {
                    warn!("Failed to parse coordinates {:?} for {}", raw.coordinates, name);
                }
                (None, None)
            }
        };

        Ok(ListingRecord {
            address: clean_text(&raw.address),
            rating: parse_rating(&raw.rating),
            review_count: parse_review_count(&raw.review_count),
            category: clean_text(&raw.category),
            latitude,
            longitude,
            raw_source_text: raw.raw_source_text.clone(),
            scraped_at: raw.scraped_at,
            name,
        })
    }
}

/// 前後の空白を除去し、連続する空白を1つにまとめる。プレースホルダーは空文字列。
pub fn clean_text(text: &str) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if PLACEHOLDERS.contains(&cleaned.to_lowercase().as_str()) {
        String::new()
    } else {
        cleaned
    }
}

/// "4.5 stars" / "4,5" → 4.5。0〜5 の範囲外は None。
pub fn parse_rating(text: &str) -> Option<f64> {
    let text = clean_text(text);
    let caps = rating_re().captures(&text)?;
    let value: f64 = caps[1].replace(',', ".").parse().ok()?;

    (0.0..=MAX_RATING).contains(&value).then_some(value)
}

/// "(1,234)" → 1234, "1.2K" → 1200, "3,4rb ulasan" → 3400
pub fn parse_review_count(text: &str) -> Option<u32> {
    let text = clean_text(text);
    let caps = review_count_re().captures(&text)?;
    let digits = &caps[1];

    let value = if caps.get(2).is_some() {
        let scaled: f64 = digits.replace(',', ".").replace(' ', "").parse().ok()?;
        (scaled * 1000.0).round()
    } else {
        let plain: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
        plain.parse::<f64>().ok()?
    };

    if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// "-6.9932,110.4203" → (-6.9932, 110.4203)
pub fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    let text = clean_text(text);
    let (lat, lng) = text.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;

    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Some((lat, lng))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn raw(name: &str, rating: &str, address: &str) -> RawListing {
        RawListing {
            name: name.to_string(),
            address: address.to_string(),
            rating: rating.to_string(),
            review_count: String::new(),
            category: String::new(),
            coordinates: String::new(),
            raw_source_text: format!("{}\n{}", name, rating),
            scraped_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_normalize_trims_and_parses_rating() {
        let record = Transformer::new()
            .normalize(&raw(" Blue Cup ", "4.5 stars", " Jl. X "))
            .unwrap();

        assert_eq!(record.name, "Blue Cup");
        assert_eq!(record.rating, Some(4.5));
        assert_eq!(record.address, "Jl. X");
    }

    #[test]
    fn test_unparseable_rating_keeps_record() {
        let record = Transformer::new()
            .normalize(&raw("Kopi Tugu", "N/A", "Jl. Pemuda 12"))
            .unwrap();

        assert_eq!(record.name, "Kopi Tugu");
        assert_eq!(record.rating, None);
        assert_eq!(record.address, "Jl. Pemuda 12");
    }

    #[test]
    fn test_parse_rating_range() {
        assert_eq!(parse_rating("4,7"), Some(4.7));
        assert_eq!(parse_rating("Rated 3 out of 5"), Some(3.0));
        assert_eq!(parse_rating("0"), Some(0.0));
        assert_eq!(parse_rating("12.5"), None);
        assert_eq!(parse_rating("No rating"), None);
        assert_eq!(parse_rating(""), None);

        for text in ["5", "4.95", "1.0 star", "2,2"] {
            let value = parse_rating(text).unwrap();
            assert!((0.0..=5.0).contains(&value), "{} -> {}", text, value);
        }
    }

    #[test]
    fn test_parse_review_count() {
        assert_eq!(parse_review_count("(1,234)"), Some(1234));
        assert_eq!(parse_review_count("1.234 ulasan"), Some(1234));
        assert_eq!(parse_review_count("87 reviews"), Some(87));
        assert_eq!(parse_review_count("1.2K"), Some(1200));
        assert_eq!(parse_review_count("3,4rb"), Some(3400));
        assert_eq!(parse_review_count("no reviews"), None);
    }

    #[test]
    fn test_review_count_suffix_needs_word_boundary() {
        assert_eq!(parse_review_count("87 kali"), Some(87));
        assert_eq!(parse_review_count("120 Kommentare"), Some(120));
        assert_eq!(parse_review_count("45 rbx"), Some(45));
        assert_eq!(parse_review_count("2k reviews"), Some(2000));
        assert_eq!(parse_review_count("(1.5K)"), Some(1500));
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            parse_coordinates("-6.9932,110.4203"),
            Some((-6.9932, 110.4203))
        );
        assert_eq!(parse_coordinates(" -6.99 , 110.42 "), Some((-6.99, 110.42)));
        assert_eq!(parse_coordinates("No coordinates"), None);
        assert_eq!(parse_coordinates("95.0,10.0"), None);
        assert_eq!(parse_coordinates("abc,def"), None);
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Kopi \n  Kenangan\t "), "Kopi Kenangan");
        assert_eq!(clean_text("No address"), "");
    }

    #[test]
    fn test_missing_name_is_skipped() {
        let transformed = Transformer::new().transform(vec![
            raw("No name", "4.0", "Jl. A"),
            raw("   ", "4.0", "Jl. B"),
            raw("Dekat Kopi", "4.1", "Jl. C"),
        ]);

        assert_eq!(transformed.skipped, 2);
        assert_eq!(transformed.records.len(), 1);
        assert_eq!(transformed.records[0].name, "Dekat Kopi");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let transformer = Transformer::new();
        let mut input = raw("  Starbucks  Simpang Lima ", "4,4 bintang", " Jl. Pahlawan  ");
        input.review_count = "(2.345)".to_string();
        input.category = " Coffee shop ".to_string();
        input.coordinates = "-6.9897,110.4229".to_string();

        let once = transformer.normalize(&input).unwrap();
        let twice = transformer.normalize(&RawListing::from(&once)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.review_count, Some(2345));
        assert_eq!(once.latitude, Some(-6.9897));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let transformer = Transformer::new();
        let first = transformer.transform(vec![
            raw(" Blue Cup ", "4.5 stars", " Jl. X "),
            raw("Blue Cup", "4.5", "Jl. X"),
            raw("Toko Kopi", "N/A", ""),
        ]);
        let again = transformer.transform(first.records.iter().map(RawListing::from).collect());

        assert_eq!(first.records, again.records);
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let listings = vec![
            raw("Blue Cup", "4.5", "Jl. X"),
            raw("blue cup", "4.0", "jl. x"),
            raw("Blue Cup", "4.2", "Jl. Y"),
        ];

        let deduped = Transformer::new().transform(listings.clone());
        assert_eq!(deduped.records.len(), 2);
        assert_eq!(deduped.duplicates, 1);
        assert_eq!(deduped.records[0].rating, Some(4.5));

        let kept = Transformer::new().with_dedupe(false).transform(listings);
        assert_eq!(kept.records.len(), 3);
        assert_eq!(kept.duplicates, 0);
    }

    #[test]
    fn test_empty_input() {
        let transformed = Transformer::new().transform(Vec::new());
        assert!(transformed.records.is_empty());
        assert_eq!(transformed.skipped, 0);
    }
}
