use thiserror::Error;

/// 抽出 (ブラウザ操作) のエラー
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("ブラウザ初期化エラー: {0}")]
    BrowserInit(String),

    #[error("ナビゲーションエラー: {0}")]
    Navigation(String),

    #[error("要素が見つかりません: {0}")]
    ElementNotFound(String),

    #[error("スクリプト実行エラー: {0}")]
    JavaScript(String),

    #[error("タイムアウト: {0}")]
    Timeout(String),

    #[error("ファイル操作エラー: {0}")]
    Io(#[from] std::io::Error),
}

/// 1件分の整形エラー（そのレコードだけスキップされる）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("店名がありません (元テキスト: {0:?})")]
    MissingName(String),
}

/// 出力ファイル書き込みのエラー
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("ファイル操作エラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV書き込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON書き込みエラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// パイプライン全体を中断させるエラー
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("抽出エラー: {0}")]
    Extract(#[from] ExtractError),

    #[error("出力エラー: {0}")]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_wrap_source() {
        let err = PipelineError::from(ExtractError::Timeout("600s".to_string()));
        assert_eq!(err.to_string(), "抽出エラー: タイムアウト: 600s");

        let err = TransformError::MissingName("4.5 (120)".to_string());
        assert_eq!(err.to_string(), r#"店名がありません (元テキスト: "4.5 (120)")"#);
    }
}
