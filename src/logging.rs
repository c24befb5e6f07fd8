//! ログ初期化（標準出力 + logs/ 配下のファイル）

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 実行ごとのログファイル名 (gmaps_etl_20240301_083000.log)
pub fn log_file_name(started_at: DateTime<Local>) -> String {
    format!("gmaps_etl_{}.log", started_at.format("%Y%m%d_%H%M%S"))
}

/// ログを初期化し、書き込み先のファイルパスとガードを返す
///
/// ガードは main が保持すること（drop 時に未書き込み分をフラッシュする）。
/// RUST_LOG が設定されていれば `level` より優先する。
pub fn init_logging(level: &str, log_dir: &Path) -> io::Result<(PathBuf, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;

    let file_name = log_file_name(Local::now());
    let file_appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer().with_writer(io::stdout).with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    Ok((log_dir.join(file_name), guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name() {
        let started_at = Local.with_ymd_and_hms(2024, 3, 1, 8, 30, 5).unwrap();
        assert_eq!(log_file_name(started_at), "gmaps_etl_20240301_083005.log");
    }
}
