//! 出力ステージ: CSV と JSON に書き出す

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::LoadError;
use crate::model::ListingRecord;

/// 書き出したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFiles {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Loader {
    output_dir: PathBuf,
    output_name: String,
}

impl Loader {
    pub fn new(output_dir: impl Into<PathBuf>, output_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_name: output_name.into(),
        }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.csv", self.output_name))
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.output_name))
    }

    /// CSV と JSON を両方書き出す。0件でもヘッダーのみの CSV と `[]` を出力する。
    pub fn load(&self, records: &[ListingRecord]) -> Result<LoadedFiles, LoadError> {
        if records.is_empty() {
            warn!("No records to load, writing empty files");
        }

        std::fs::create_dir_all(&self.output_dir)?;

        let csv_path = self.csv_path();
        write_csv(&csv_path, records)?;
        info!("Saved {} records to {:?}", records.len(), csv_path);

        let json_path = self.json_path();
        write_json(&json_path, records)?;
        info!("Saved {} records to {:?}", records.len(), json_path);

        Ok(LoadedFiles {
            csv_path,
            json_path,
        })
    }
}

fn write_csv(path: &Path, records: &[ListingRecord]) -> Result<(), LoadError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);

    // serialize() は1件目でしかヘッダーを書かないので明示的に書く
    writer.write_record(ListingRecord::CSV_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    let file = writer
        .into_inner()
        .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))?;
    file.sync_all()?;
    Ok(())
}

fn write_json(path: &Path, records: &[ListingRecord]) -> Result<(), LoadError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}
