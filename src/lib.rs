//! Google Maps コーヒーショップ ETL
//!
//! - 抽出: ブラウザで Google Maps を検索し、結果カードを1件ずつ読む
//! - 整形: テキストをトリムし、評価・レビュー数・座標を数値にする
//! - 出力: CSV と JSON に書き出す
//!
//! # 使用例
//!
//! ```rust,ignore
//! use gmaps_etl::{EtlService, ExtractConfig, PipelineConfig};
//! use tower::Service;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let extract = ExtractConfig::new("coffee shop", "Semarang, Indonesia")
//!         .with_headless(true)
//!         .with_max_results(Some(20));
//!     let config = PipelineConfig::new(extract).with_output_dir("./output");
//!
//!     let mut service = EtlService::new();
//!     let report = service.call(config).await.unwrap();
//!     println!("CSV: {:?}", report.files.csv_path);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod load;
pub mod logging;
pub mod maps;
pub mod model;
pub mod pipeline;
pub mod service;
pub mod traits;
pub mod transform;

// 主要な型をリエクスポート
pub use config::{ExtractConfig, PipelineConfig};
pub use error::{ExtractError, LoadError, PipelineError, TransformError};
pub use load::{LoadedFiles, Loader};
pub use maps::GoogleMapsExtractor;
pub use model::{ListingRecord, RawListing};
pub use pipeline::{Pipeline, RunReport};
pub use service::EtlService;
pub use traits::Extractor;
pub use transform::{Transformed, Transformer};
