//! Google Maps 抽出モジュール
//!
//! chromiumoxide でブラウザを操作し、検索結果のカードから生テキストを読み取る

mod coords;
mod scraper;
mod selectors;

pub use scraper::GoogleMapsExtractor;
