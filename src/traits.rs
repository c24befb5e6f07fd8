use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::model::RawListing;

#[async_trait]
pub trait Extractor: Send {
    /// ブラウザ初期化
    async fn initialize(&mut self) -> Result<(), ExtractError>;

    /// 検索実行（検索語入力 → 結果リストの読み込み）
    async fn search(&mut self) -> Result<(), ExtractError>;

    /// 結果カードを読み取る
    async fn collect(&mut self) -> Result<Vec<RawListing>, ExtractError>;

    /// リソース解放
    async fn close(&mut self) -> Result<(), ExtractError>;

    /// 失敗前までに集めた結果（collect 中の失敗時に使う）
    fn take_partial(&mut self) -> Vec<RawListing> {
        Vec::new()
    }

    /// セッション全体のタイムアウト
    fn timeout(&self) -> Duration {
        Duration::from_secs(600)
    }

    /// 一括実行（initialize → search → collect → close）
    ///
    /// close は失敗時も必ず呼ばれる。途中で失敗しても集めた結果があればそれを返す。
    async fn execute(&mut self) -> Result<Vec<RawListing>, ExtractError> {
        let timeout = self.timeout();
        let outcome = match tokio::time::timeout(timeout, run_stages(self)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ExtractError::Timeout(format!(
                "extraction did not finish within {:?}",
                timeout
            ))),
        };

        if let Err(e) = self.close().await {
            warn!("Failed to close browser session: {}", e);
        }

        match outcome {
            Ok(listings) => Ok(listings),
            Err(e) => {
                let partial = self.take_partial();
                if partial.is_empty() {
                    return Err(e);
                }
                warn!("Extraction failed: {}", e);
                info!("Returning {} partial results despite error", partial.len());
                Ok(partial)
            }
        }
    }
}

async fn run_stages<E: Extractor + ?Sized>(
    extractor: &mut E,
) -> Result<Vec<RawListing>, ExtractError> {
    extractor.initialize().await?;
    extractor.search().await?;
    extractor.collect().await
}
