//! Google Maps 抽出の実装
//!
//! 検索 → 結果リストのスクロール → カードを1件ずつ開いて詳細を読む。

use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::model::RawListing;
use crate::traits::Extractor;

use super::coords;
use super::selectors::{self, FieldProbe};

/// 要素ポーリングの間隔（ミリ秒）
const POLL_INTERVAL_MS: u64 = 500;
/// 検索後に結果リストを待つ時間（秒）
const FEED_WAIT_SECS: u64 = 15;
/// カード数がこの回数連続で変わらなければスクロールを打ち切る
const REQUIRED_STABLE_SCROLLS: u32 = 3;
/// スクリプトから座標を探す時に読む最大文字数
const SCRIPT_SCAN_LIMIT: usize = 500_000;
/// ブラウザ終了を待つ最大時間（秒）。超えたらプロセスを kill する
const BROWSER_CLOSE_TIMEOUT_SECS: u64 = 10;

/// カードクリックの結果
#[derive(Debug, Deserialize)]
struct CardClick {
    found: bool,
    text: String,
}

/// Google Maps 抽出器
pub struct GoogleMapsExtractor {
    config: ExtractConfig,
    browser: Option<Browser>,
    page: Option<Page>,
    handler: Option<JoinHandle<()>>,
    user_data_dir: Option<PathBuf>,
    /// 検出できた結果カードのセレクタ
    card_selector: Option<&'static str>,
    /// 読み取り済みのリスティング
    collected: Vec<RawListing>,
}

impl GoogleMapsExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            browser: None,
            page: None,
            handler: None,
            user_data_dir: None,
            card_selector: None,
            collected: Vec::new(),
        }
    }

    fn get_page(&self) -> Result<&Page, ExtractError> {
        self.page
            .as_ref()
            .ok_or_else(|| ExtractError::BrowserInit("Browser not initialized".to_string()))
    }

    fn chrome_path(&self) -> Option<PathBuf> {
        self.config.chrome_path.clone().or_else(|| {
            std::env::var("CHROME_PATH")
                .or_else(|_| std::env::var("CHROMIUM_PATH"))
                .ok()
                .map(PathBuf::from)
        })
    }

    /// ブラウザを起動して空ページを開く
    async fn launch(&mut self) -> Result<(), ExtractError> {
        info!("Initializing browser...");

        // ユニークなユーザーデータディレクトリを生成
        let unique_id = format!(
            "{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        let user_data_dir = std::env::temp_dir().join(format!("gmaps-etl-{}", unique_id));

        let mut builder = BrowserConfig::builder()
            .user_data_dir(&user_data_dir)
            .window_size(1280, 900);

        if let Some(path) = self.chrome_path() {
            builder = builder.chrome_executable(path);
        }

        if !self.config.headless {
            builder = builder.with_head();
        }

        builder = builder
            .no_sandbox()
            .request_timeout(Duration::from_secs(60))
            .arg("--disable-notifications")
            .arg("--lang=en-US")
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-dev-shm-usage");

        let browser_config = builder.build().map_err(ExtractError::BrowserInit)?;

        // 起動に失敗しても shutdown で消せるよう先に保持する
        self.user_data_dir = Some(user_data_dir);

        let (browser, mut handler) = match Browser::launch(browser_config).await {
            Ok(launched) => launched,
            Err(e) => {
                self.shutdown().await;
                return Err(ExtractError::BrowserInit(e.to_string()));
            }
        };

        // ハンドラータスクを起動
        self.handler = Some(tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                debug!("Browser event: {:?}", event);
            }
        }));

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                self.browser = Some(browser);
                self.shutdown().await;
                return Err(ExtractError::BrowserInit(e.to_string()));
            }
        };

        self.browser = Some(browser);
        self.page = Some(page);

        info!("Browser initialized successfully");
        Ok(())
    }

    /// ブラウザを終了し、一時ディレクトリを削除する
    async fn shutdown(&mut self) {
        self.page = None;

        if let Some(mut browser) = self.browser.take() {
            let closed = tokio::time::timeout(
                Duration::from_secs(BROWSER_CLOSE_TIMEOUT_SECS),
                async {
                    if let Err(e) = browser.close().await {
                        debug!("Failed to close browser: {}", e);
                        return false;
                    }
                    match browser.wait().await {
                        Ok(_) => true,
                        Err(e) => {
                            debug!("Failed to wait for browser exit: {}", e);
                            false
                        }
                    }
                },
            )
            .await
            .unwrap_or(false);

            if !closed {
                warn!("Browser did not exit cleanly, killing the process");
                if let Some(Err(e)) = browser.kill().await {
                    debug!("Failed to kill browser: {}", e);
                }
            }
        }

        if let Some(handle) = self.handler.take() {
            handle.abort();
        }

        if let Some(dir) = self.user_data_dir.take() {
            if let Err(e) = std::fs::remove_dir_all(&dir) {
                debug!("Failed to remove user data dir {:?}: {}", dir, e);
            }
        }
    }

    /// Maps を開いて検索し、結果リストをスクロールする
    async fn open_results(&mut self) -> Result<(), ExtractError> {
        let page = self.get_page()?;

        page.goto(selectors::MAPS_URL)
            .await
            .map_err(|e| ExtractError::Navigation(e.to_string()))?;
        info!("Navigated to Google Maps");

        self.dismiss_consent(page).await;

        let search_box = self
            .wait_for_any(page, selectors::SEARCH_BOX, self.config.wait_time)
            .await
            .ok_or_else(|| {
                ExtractError::ElementNotFound("Could not find search box with any selector".into())
            })?;
        info!("Found search box using {}", search_box);

        let search_text = self.config.search_text();
        evaluate::<bool>(
            page,
            &format!(
                "(() => {{ const el = document.querySelector({}); if (el) el.value = ''; return true; }})()",
                js_string(search_box)
            ),
        )
        .await?;

        page.find_element(search_box)
            .await
            .map_err(|e| ExtractError::ElementNotFound(format!("search box: {}", e)))?
            .click()
            .await
            .map_err(|e| ExtractError::Navigation(format!("search box click: {}", e)))?
            .type_str(&search_text)
            .await
            .map_err(|e| ExtractError::Navigation(format!("search input: {}", e)))?
            .press_key("Enter")
            .await
            .map_err(|e| ExtractError::Navigation(format!("search submit: {}", e)))?;
        info!("Searching for: {}", search_text);

        self.wait_for_any(page, selectors::RESULTS_FEED, Duration::from_secs(FEED_WAIT_SECS))
            .await
            .ok_or_else(|| ExtractError::ElementNotFound("results feed (div[role='feed'])".into()))?;
        info!("Found results list, starting to scroll...");

        let card_selector = self.scroll_results(page).await?;
        self.card_selector = Some(card_selector);
        Ok(())
    }

    /// 初回表示・同意ダイアログがあれば閉じる
    async fn dismiss_consent(&self, page: &Page) {
        let deadline = Instant::now() + self.config.wait_time;
        let script = format!(
            r#"
            (() => {{
                const labels = {};
                for (const btn of document.querySelectorAll('button')) {{
                    const text = (btn.innerText || '').trim();
                    if (labels.some(l => text.indexOf(l) >= 0)) {{
                        btn.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#,
            js_value(&selectors::CONSENT_BUTTON_TEXTS)
        );

        while Instant::now() < deadline {
            match evaluate::<bool>(page, &script).await {
                Ok(true) => {
                    info!("Dismissed first-time setup dialog");
                    sleep(Duration::from_secs(2)).await;
                    return;
                }
                Ok(false) => {}
                Err(e) => debug!("Consent check failed: {}", e),
            }

            // 検索ボックスが出ていればダイアログはない
            if self.first_present(page, selectors::SEARCH_BOX).await.is_some() {
                break;
            }
            sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
        info!("No first-time setup screen found");
    }

    /// セレクタのうち現在存在する最初のもの
    async fn first_present(&self, page: &Page, candidates: &[&'static str]) -> Option<&'static str> {
        for selector in candidates {
            let script = format!("document.querySelector({}) !== null", js_string(selector));
            match evaluate::<bool>(page, &script).await {
                Ok(true) => return Some(*selector),
                Ok(false) => {}
                Err(e) => debug!("Selector check {} failed: {}", selector, e),
            }
        }
        None
    }

    /// いずれかのセレクタが現れるまで待つ（候補1つあたり `per_selector` 待つ）
    async fn wait_for_any(
        &self,
        page: &Page,
        candidates: &[&'static str],
        per_selector: Duration,
    ) -> Option<&'static str> {
        let timeout = per_selector * candidates.len().max(1) as u32;
        let start = Instant::now();

        while start.elapsed() < timeout {
            if let Some(selector) = self.first_present(page, candidates).await {
                debug!("Found {} after {:?}", selector, start.elapsed());
                return Some(selector);
            }
            sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }

        warn!("None of {:?} appeared within {:?}", candidates, timeout);
        None
    }

    /// 結果リストをスクロールして読み込み、使えたカードセレクタを返す
    async fn scroll_results(&self, page: &Page) -> Result<&'static str, ExtractError> {
        let script = format!(
            r#"
            (() => {{
                const feed = document.querySelector({});
                if (!feed) return -1;
                feed.scrollTop = feed.scrollHeight;
                const selectors = {};
                for (const s of selectors) {{
                    const n = document.querySelectorAll(s).length;
                    if (n > 0) return n;
                }}
                return 0;
            }})()
            "#,
            js_string(selectors::RESULTS_FEED[0]),
            js_value(&selectors::PLACE_CARDS)
        );

        let mut last_count: Option<i64> = None;
        let mut stable_count = 0;

        for i in 0..self.config.scroll_iterations {
            let count = evaluate::<i64>(page, &script).await?;
            if count < 0 {
                return Err(ExtractError::ElementNotFound(
                    "results feed disappeared while scrolling".into(),
                ));
            }
            debug!("Scroll attempt {}: {} cards loaded", i + 1, count);

            if let Some(max) = self.config.max_results {
                if count as usize >= max {
                    info!("Loaded {} cards, reached the limit of {}", count, max);
                    break;
                }
            }

            match last_count {
                Some(last) if last == count => {
                    stable_count += 1;
                    if stable_count >= REQUIRED_STABLE_SCROLLS {
                        info!("Card count unchanged after {} scrolls, stopping", stable_count);
                        break;
                    }
                }
                _ => stable_count = 0,
            }
            last_count = Some(count);

            sleep(self.config.scroll_delay).await;
        }
        info!("Finished scrolling");

        for selector in selectors::PLACE_CARDS {
            let count = self.count(page, selector).await?;
            if count > 0 {
                if *selector != selectors::PLACE_CARDS[0] {
                    info!("Found {} place cards with alternative selector: {}", count, selector);
                }
                return Ok(*selector);
            }
        }

        // カードなしは空の結果として扱う
        warn!("No place cards found with any selector");
        Ok(selectors::PLACE_CARDS[0])
    }

    async fn count(&self, page: &Page, selector: &str) -> Result<usize, ExtractError> {
        evaluate::<usize>(
            page,
            &format!("document.querySelectorAll({}).length", js_string(selector)),
        )
        .await
    }

    /// idx 番目のカードを開いて詳細を読む。カードがなくなっていれば None。
    async fn extract_card(&self, idx: usize) -> Result<Option<RawListing>, ExtractError> {
        let page = self.get_page()?;
        let card_selector = self.card_selector.unwrap_or(selectors::PLACE_CARDS[0]);

        let click_script = format!(
            r#"
            (() => {{
                const card = document.querySelectorAll({})[{}];
                if (!card) return {{ found: false, text: '' }};
                card.scrollIntoView();
                const text = card.innerText || card.textContent || '';
                (card.querySelector('a') || card).click();
                return {{ found: true, text: text }};
            }})()
            "#,
            js_string(card_selector),
            idx
        );
        let click: CardClick = evaluate(page, &click_script).await?;
        if !click.found {
            return Ok(None);
        }

        sleep(self.config.detail_wait_time).await;

        // 名前が表示されるまで待つ
        let deadline = Instant::now() + self.config.wait_time;
        let mut name = read_field(page, selectors::NAME).await?;
        while name.is_empty() && Instant::now() < deadline {
            sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            name = read_field(page, selectors::NAME).await?;
        }

        let address = strip_label(&read_field(page, selectors::ADDRESS).await?);
        let rating = read_field(page, selectors::RATING).await?;
        let review_count = read_field(page, selectors::REVIEW_COUNT).await?;
        let category = read_field(page, selectors::CATEGORY).await?;
        let coordinates = self.read_coordinates(page).await;

        Ok(Some(RawListing {
            name,
            address,
            rating,
            review_count,
            category,
            coordinates,
            raw_source_text: click.text,
            scraped_at: Utc::now(),
        }))
    }

    /// 座標: URL → meta タグ → インラインスクリプトの順に探す
    async fn read_coordinates(&self, page: &Page) -> String {
        match page.url().await {
            Ok(Some(url)) => {
                if let Some(found) = coords::from_place_url(&url) {
                    return found;
                }
            }
            Ok(None) => {}
            Err(e) => debug!("Failed to read page url: {}", e),
        }

        let meta_script = r#"
            (() => {
                const read = p => {
                    const el = document.querySelector("meta[property='" + p + "']");
                    return el ? (el.getAttribute('content') || '') : '';
                };
                return [read('og:latitude'), read('og:longitude')];
            })()
        "#;
        match evaluate::<Vec<String>>(page, meta_script).await {
            Ok(values) if values.len() == 2 => {
                if let Some(found) = coords::from_meta(&values[0], &values[1]) {
                    return found;
                }
            }
            Ok(_) => {}
            Err(e) => debug!("Couldn't read geo meta tags: {}", e),
        }

        let scripts_script = format!(
            "Array.from(document.scripts).map(s => s.textContent || '').join('\\n').slice(0, {})",
            SCRIPT_SCAN_LIMIT
        );
        match evaluate::<String>(page, &scripts_script).await {
            Ok(text) => coords::from_script_text(&text).unwrap_or_default(),
            Err(e) => {
                debug!("Couldn't extract coordinates from script tags: {}", e);
                String::new()
            }
        }
    }

    /// 結果リストに戻る
    async fn go_back_to_list(&self) -> Result<bool, ExtractError> {
        let page = self.get_page()?;

        let script = format!(
            r#"
            (() => {{
                for (const s of {}) {{
                    const btn = document.querySelector(s);
                    if (btn) {{
                        btn.click();
                        return true;
                    }}
                }}
                history.back();
                return false;
            }})()
            "#,
            js_value(&selectors::BACK_BUTTONS)
        );
        let clicked = evaluate::<bool>(page, &script).await?;
        debug!("Back button clicked: {}", clicked);

        sleep(self.config.result_delay).await;

        Ok(self.first_present(page, selectors::RESULTS_FEED).await.is_some())
    }

    /// ブラウザを再起動して検索をやり直す
    async fn recover(&mut self) -> Result<(), ExtractError> {
        let mut last_error = None;

        for attempt in 1..=self.config.max_retries {
            warn!(
                "Restarting browser (attempt {}/{})",
                attempt, self.config.max_retries
            );
            self.shutdown().await;
            sleep(self.config.recovery_wait).await;

            let result = match self.launch().await {
                Ok(()) => self.open_results().await,
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!("Recovery attempt {} failed: {}", attempt, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ExtractError::Navigation("could not return to the results list".to_string())
        }))
    }

    /// 失敗したカードのスクリーンショットを保存
    async fn save_debug_screenshot(&self, idx: usize) {
        if !self.config.debug_screenshots {
            return;
        }
        let Ok(page) = self.get_page() else {
            return;
        };

        let screenshot = match page
            .screenshot(ScreenshotParams::builder().full_page(true).build())
            .await
        {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Failed to take screenshot: {}", e);
                return;
            }
        };

        let filename = format!(
            "card_{}_{}.png",
            idx + 1,
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = self.config.debug_dir.join(filename);

        if let Err(e) = std::fs::create_dir_all(&self.config.debug_dir)
            .and_then(|_| std::fs::write(&path, screenshot))
        {
            warn!("Failed to save debug screenshot: {}", e);
        } else {
            info!("Saved debug screenshot to {:?}", path);
        }
    }
}

#[async_trait]
impl Extractor for GoogleMapsExtractor {
    async fn initialize(&mut self) -> Result<(), ExtractError> {
        self.collected.clear();
        self.launch().await
    }

    async fn search(&mut self) -> Result<(), ExtractError> {
        self.open_results().await
    }

    async fn collect(&mut self) -> Result<Vec<RawListing>, ExtractError> {
        let page = self.get_page()?;
        let card_selector = self.card_selector.unwrap_or(selectors::PLACE_CARDS[0]);
        let available = self.count(page, card_selector).await?;
        let limit = self
            .config
            .max_results
            .map_or(available, |max| max.min(available));

        info!("Found {} place cards, extracting {}", available, limit);

        for idx in 0..limit {
            match self.extract_card(idx).await {
                Ok(Some(listing)) => {
                    info!(
                        "[{}] {} | {} | {}",
                        idx + 1,
                        listing.name,
                        listing.rating,
                        listing.coordinates
                    );
                    self.collected.push(listing);
                }
                Ok(None) => {
                    warn!("Card {} is no longer in the list, stopping", idx + 1);
                    break;
                }
                Err(e) => {
                    warn!("Failed to extract place at index {}: {}", idx, e);
                    self.save_debug_screenshot(idx).await;
                }
            }

            let back = match self.go_back_to_list().await {
                Ok(back) => back,
                Err(e) => {
                    debug!("Going back failed: {}", e);
                    false
                }
            };
            if !back {
                warn!("Couldn't go back to list. Restarting browser.");
                self.recover().await?;
            }
        }

        info!("Extracted {} listings", self.collected.len());
        Ok(std::mem::take(&mut self.collected))
    }

    async fn close(&mut self) -> Result<(), ExtractError> {
        info!("Closing browser...");
        self.shutdown().await;
        info!("Browser closed");
        Ok(())
    }

    fn take_partial(&mut self) -> Vec<RawListing> {
        std::mem::take(&mut self.collected)
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

/// スクリプトを評価して値を取り出す
async fn evaluate<T: DeserializeOwned>(page: &Page, script: &str) -> Result<T, ExtractError> {
    page.evaluate(script)
        .await
        .map_err(|e| ExtractError::JavaScript(e.to_string()))?
        .into_value::<T>()
        .map_err(|e| ExtractError::JavaScript(e.to_string()))
}

/// 候補を順に試し、最初に空でなかった値を返す
async fn read_field(page: &Page, probes: &[FieldProbe]) -> Result<String, ExtractError> {
    evaluate::<String>(page, &field_script(probes)).await
}

fn field_script(probes: &[FieldProbe]) -> String {
    format!(
        r#"
        (() => {{
            for (const p of {}) {{
                const el = document.querySelector(p.selector);
                if (!el) continue;
                const v = p.attribute
                    ? (el.getAttribute(p.attribute) || '')
                    : (el.innerText || el.textContent || '');
                if (v.trim()) return v.trim();
            }}
            return '';
        }})()
        "#,
        js_value(&probes)
    )
}

/// "Address: Jl. X" → "Jl. X"
fn strip_label(value: &str) -> String {
    let trimmed = value.trim();
    selectors::LABEL_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// JS リテラルとして埋め込む
fn js_value<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn js_string(value: &str) -> String {
    js_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_new() {
        let extractor = GoogleMapsExtractor::new(ExtractConfig::default());
        assert!(extractor.browser.is_none());
        assert!(extractor.page.is_none());
        assert!(extractor.get_page().is_err());
    }

    #[test]
    fn test_chrome_path_prefers_config() {
        let config = ExtractConfig::default().with_chrome_path(Some(PathBuf::from("/opt/chrome")));
        let extractor = GoogleMapsExtractor::new(config);
        assert_eq!(extractor.chrome_path(), Some(PathBuf::from("/opt/chrome")));
    }

    #[test]
    fn test_field_script_embeds_probes() {
        let script = field_script(selectors::ADDRESS);
        assert!(script.contains(r#""selector":"button[data-item-id='address']""#));
        assert!(script.contains(r#""attribute":"aria-label""#));
        assert!(script.contains(r#""attribute":null"#));
    }

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string("div[role='feed']"), r#""div[role='feed']""#);
        assert_eq!(js_string(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn test_strip_label() {
        assert_eq!(strip_label("Address: Jl. Pandanaran 5 "), "Jl. Pandanaran 5");
        assert_eq!(strip_label("Jl. Pemuda 12"), "Jl. Pemuda 12");
    }

    #[tokio::test]
    async fn test_collect_without_browser_fails() {
        let mut extractor = GoogleMapsExtractor::new(ExtractConfig::default());
        assert!(matches!(
            extractor.collect().await,
            Err(ExtractError::BrowserInit(_))
        ));
        assert!(extractor.close().await.is_ok());
    }

    #[tokio::test]
    async fn test_shutdown_releases_half_initialized_session() {
        let dir = tempfile::tempdir().unwrap();
        let user_data_dir = dir.path().join("profile");
        std::fs::create_dir_all(&user_data_dir).unwrap();

        let mut extractor = GoogleMapsExtractor::new(ExtractConfig::default());
        let handle = tokio::spawn(futures::future::pending::<()>());
        extractor.handler = Some(handle);
        extractor.user_data_dir = Some(user_data_dir.clone());

        extractor.shutdown().await;

        assert!(extractor.handler.is_none());
        assert!(extractor.user_data_dir.is_none());
        assert!(!user_data_dir.exists());
    }

    #[tokio::test]
    async fn test_launch_failure_leaves_nothing_behind() {
        let config = ExtractConfig::default()
            .with_headless(true)
            .with_chrome_path(Some(PathBuf::from("/nonexistent/chrome-for-gmaps-etl")));
        let mut extractor = GoogleMapsExtractor::new(config);

        assert!(matches!(
            extractor.launch().await,
            Err(ExtractError::BrowserInit(_))
        ));
        assert!(extractor.browser.is_none());
        assert!(extractor.page.is_none());
        assert!(extractor.handler.is_none());
        assert!(extractor.user_data_dir.is_none());
    }

    #[tokio::test]
    #[ignore] // 実環境テスト用: cargo test live_google_maps_extract -- --ignored --nocapture
    async fn live_google_maps_extract() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info,gmaps_etl=debug")
            .try_init();

        let config = ExtractConfig::new("coffee shop", "Semarang, Indonesia")
            .with_headless(true)
            .with_max_results(Some(3))
            .with_scrolling(2, Duration::from_secs(2));

        let mut extractor = GoogleMapsExtractor::new(config);
        let listings = extractor.execute().await.expect("extraction failed");

        println!("\n=== Extract Result ===");
        for listing in &listings {
            println!("  - {} | {} | {}", listing.name, listing.rating, listing.coordinates);
        }
        assert!(extractor.browser.is_none());
    }
}
