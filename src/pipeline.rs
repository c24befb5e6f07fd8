//! Extract → Transform → Load を順に実行する

use tracing::info;

use crate::error::PipelineError;
use crate::load::{LoadedFiles, Loader};
use crate::traits::Extractor;
use crate::transform::Transformer;

/// 実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub extracted: usize,
    pub loaded: usize,
    pub skipped: usize,
    pub duplicates: usize,
    pub files: LoadedFiles,
}

pub struct Pipeline<E> {
    extractor: E,
    transformer: Transformer,
    loader: Loader,
}

impl<E: Extractor> Pipeline<E> {
    pub fn new(extractor: E, transformer: Transformer, loader: Loader) -> Self {
        Self {
            extractor,
            transformer,
            loader,
        }
    }

    pub async fn run(&mut self) -> Result<RunReport, PipelineError> {
        info!("Starting extraction phase");
        let raw = self.extractor.execute().await?;
        let extracted = raw.len();
        info!("Extraction complete: {} records extracted", extracted);

        info!("Starting transformation phase");
        let transformed = self.transformer.transform(raw);
        info!(
            "Transformation complete: {} records transformed",
            transformed.records.len()
        );

        info!("Starting load phase");
        let files = self.loader.load(&transformed.records)?;
        info!("Load complete: {:?}, {:?}", files.csv_path, files.json_path);

        Ok(RunReport {
            extracted,
            loaded: transformed.records.len(),
            skipped: transformed.skipped,
            duplicates: transformed.duplicates,
            files,
        })
    }

    pub fn into_extractor(self) -> E {
        self.extractor
    }

    pub(crate) fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    pub(crate) fn loader(&self) -> &Loader {
        &self.loader
    }
}
