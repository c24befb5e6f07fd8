use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::Service;
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::load::Loader;
use crate::maps::GoogleMapsExtractor;
use crate::pipeline::{Pipeline, RunReport};
use crate::transform::Transformer;

/// tower::Serviceを実装したETLサービス（設定1つにつき1回パイプラインを実行）
#[derive(Debug, Clone, Default)]
pub struct EtlService {}

impl EtlService {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 設定から Google Maps 用のパイプラインを組み立てる
pub fn build_pipeline(config: PipelineConfig) -> Pipeline<GoogleMapsExtractor> {
    let loader = Loader::new(config.output_dir, config.output_name);
    let transformer = Transformer::new().with_dedupe(config.dedupe);
    Pipeline::new(GoogleMapsExtractor::new(config.extract), transformer, loader)
}

impl Service<PipelineConfig> for EtlService {
    type Response = RunReport;
    type Error = PipelineError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, config: PipelineConfig) -> Self::Future {
        info!(
            "Starting Google Maps ETL pipeline: query={:?}, location={:?}",
            config.extract.search_query, config.extract.location
        );

        Box::pin(async move {
            let mut pipeline = build_pipeline(config);
            let report = pipeline.run().await?;

            info!(
                "ETL pipeline finished: extracted={}, loaded={}, skipped={}, duplicates={}",
                report.extracted, report.loaded, report.skipped, report.duplicates
            );

            Ok(report)
        })
    }
}
