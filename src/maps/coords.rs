//! ページ URL・スクリプトから座標文字列 ("lat,lng") を取り出す

use std::sync::OnceLock;

use regex::Regex;

fn data_param_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!3d(-?\d+\.\d+)!4d(-?\d+\.\d+)").expect("data param regex"))
}

fn viewport_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").expect("viewport regex"))
}

fn json_blob_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#""latitude"\s*:\s*(-?\d+\.\d+)\s*,\s*"longitude"\s*:\s*(-?\d+\.\d+)"#)
            .expect("json blob regex")
    })
}

fn first_pair(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    Some(format!("{},{}", &caps[1], &caps[2]))
}

/// 場所ページの URL から座標を取る
///
/// `!3d..!4d..` は場所そのものの座標、`@lat,lng` は地図の表示中心なので前者を優先する。
pub fn from_place_url(url: &str) -> Option<String> {
    first_pair(data_param_re(), url).or_else(|| first_pair(viewport_re(), url))
}

/// インラインスクリプト中の `"latitude":..,"longitude":..`
pub fn from_script_text(text: &str) -> Option<String> {
    first_pair(json_blob_re(), text)
}

/// og:latitude / og:longitude の値
pub fn from_meta(latitude: &str, longitude: &str) -> Option<String> {
    let latitude = latitude.trim();
    let longitude = longitude.trim();
    if latitude.is_empty() || longitude.is_empty() {
        return None;
    }
    Some(format!("{},{}", latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_url_prefers_data_params() {
        let url = "https://www.google.com/maps/place/Blue+Cup/@-6.9901,110.4102,17z/data=!3m1!4b1!4m6!3m5!1s0x2e708b!8m2!3d-6.9932!4d110.4203!16s";
        assert_eq!(from_place_url(url).as_deref(), Some("-6.9932,110.4203"));
    }

    #[test]
    fn test_place_url_viewport_fallback() {
        let url = "https://www.google.com/maps/search/coffee/@-6.9667,110.4167,14z";
        assert_eq!(from_place_url(url).as_deref(), Some("-6.9667,110.4167"));
        assert_eq!(from_place_url("https://www.google.com/maps"), None);
    }

    #[test]
    fn test_script_text() {
        let script = r#"window.APP={"name":"Blue Cup","latitude":-6.9932, "longitude":110.4203}"#;
        assert_eq!(from_script_text(script).as_deref(), Some("-6.9932,110.4203"));
        assert_eq!(from_script_text("var x = 1;"), None);
    }

    #[test]
    fn test_meta() {
        assert_eq!(from_meta(" -6.99 ", "110.42").as_deref(), Some("-6.99,110.42"));
        assert_eq!(from_meta("", "110.42"), None);
    }
}
