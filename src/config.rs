use std::path::PathBuf;
use std::time::Duration;

/// 抽出ステージ（ブラウザ）の設定
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// 検索語 (例: "coffee shop")
    pub search_query: String,
    /// 検索地域 (例: "Semarang, Indonesia")
    pub location: String,
    /// 取得件数の上限（None なら読み込めた分すべて）
    pub max_results: Option<usize>,
    pub headless: bool,
    /// Chrome 実行ファイル（None なら CHROME_PATH / CHROMIUM_PATH）
    pub chrome_path: Option<PathBuf>,
    /// 結果リストのスクロール回数
    pub scroll_iterations: u32,
    pub scroll_delay: Duration,
    /// セレクタ1つあたりの待機時間
    pub wait_time: Duration,
    /// カードを開いてから詳細を読むまでの待機
    pub detail_wait_time: Duration,
    /// 一覧に戻った後の待機
    pub result_delay: Duration,
    /// 一覧に戻れなかった時のセッション復旧回数
    pub max_retries: u32,
    pub recovery_wait: Duration,
    pub debug_screenshots: bool,
    pub debug_dir: PathBuf,
    /// 抽出全体のタイムアウト
    pub timeout: Duration,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            search_query: "coffee shop".to_string(),
            location: "Semarang, Indonesia".to_string(),
            max_results: None,
            headless: false,
            chrome_path: None,
            scroll_iterations: 20,
            scroll_delay: Duration::from_secs(2),
            wait_time: Duration::from_secs(5),
            detail_wait_time: Duration::from_secs(3),
            result_delay: Duration::from_secs(2),
            max_retries: 3,
            recovery_wait: Duration::from_secs(5),
            debug_screenshots: false,
            debug_dir: PathBuf::from("debug_screenshots"),
            timeout: Duration::from_secs(600),
        }
    }
}

impl ExtractConfig {
    pub fn new(search_query: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_chrome_path(mut self, path: Option<PathBuf>) -> Self {
        self.chrome_path = path;
        self
    }

    pub fn with_scrolling(mut self, iterations: u32, delay: Duration) -> Self {
        self.scroll_iterations = iterations;
        self.scroll_delay = delay;
        self
    }

    pub fn with_debug_screenshots(mut self, enabled: bool, dir: impl Into<PathBuf>) -> Self {
        self.debug_screenshots = enabled;
        self.debug_dir = dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 検索ボックスに入力する文字列
    pub fn search_text(&self) -> String {
        format!("{} in {}", self.search_query, self.location)
    }
}

/// パイプライン全体の設定
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub extract: ExtractConfig,
    pub output_dir: PathBuf,
    /// 出力ファイル名（拡張子なし）
    pub output_name: String,
    /// (name, address) が同じレコードを除外する
    pub dedupe: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

impl PipelineConfig {
    pub fn new(extract: ExtractConfig) -> Self {
        let output_name = default_output_name(&extract.search_query, &extract.location);
        Self {
            extract,
            output_dir: PathBuf::from("output"),
            output_name,
            dedupe: true,
        }
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }
}

/// 検索語と地域からファイル名を作る ("coffee shop", "Semarang, Indonesia" → "coffee_shop_semarang_indonesia")
pub fn default_output_name(search_query: &str, location: &str) -> String {
    let slug = format!("{} {}", search_query, location)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");

    if slug.is_empty() {
        "listings".to_string()
    } else {
        slug
    }
}
