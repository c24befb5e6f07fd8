//! リスティングのデータ型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ブラウザから読んだままのリスティング（未整形テキスト）
///
/// 見つからなかった項目は空文字列。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub name: String,
    pub address: String,
    pub rating: String,
    pub review_count: String,
    pub category: String,
    /// "lat,lng"
    pub coordinates: String,
    /// 結果カードのテキスト全体
    pub raw_source_text: String,
    pub scraped_at: DateTime<Utc>,
}

/// 整形済みリスティング。CSV の列順はフィールド順と同じ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub name: String,
    pub address: String,
    /// 0.0 ..= 5.0
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub raw_source_text: String,
    pub scraped_at: DateTime<Utc>,
}

impl ListingRecord {
    pub const CSV_HEADERS: [&'static str; 9] = [
        "name",
        "address",
        "rating",
        "review_count",
        "category",
        "latitude",
        "longitude",
        "raw_source_text",
        "scraped_at",
    ];
}

/// 整形済みレコードを未整形の形に戻す（再整形しても同じ結果になる）
impl From<&ListingRecord> for RawListing {
    fn from(record: &ListingRecord) -> Self {
        let coordinates = match (record.latitude, record.longitude) {
            (Some(lat), Some(lng)) => format!("{},{}", lat, lng),
            _ => String::new(),
        };

        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            rating: record.rating.map(|r| r.to_string()).unwrap_or_default(),
            review_count: record
                .review_count
                .map(|c| c.to_string())
                .unwrap_or_default(),
            category: record.category.clone(),
            coordinates,
            raw_source_text: record.raw_source_text.clone(),
            scraped_at: record.scraped_at,
        }
    }
}
