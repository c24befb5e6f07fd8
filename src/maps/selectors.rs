//! Google Maps の DOM セレクタ
//!
//! クラス名は頻繁に変わるため、どのリストも先頭から順に試す。

use serde::Serialize;

pub const MAPS_URL: &str = "https://www.google.com/maps";

/// 初回表示・同意ダイアログのボタン文言
pub const CONSENT_BUTTON_TEXTS: &[&str] = &["Continue", "Accept all", "Reject all"];

pub const SEARCH_BOX: &[&str] = &[
    "#searchboxinput",
    "input[name='q']",
    "input.searchboxinput",
];

pub const RESULTS_FEED: &[&str] = &["div[role='feed']"];

/// 結果カード（先頭が通常のセレクタ、残りは代替）
pub const PLACE_CARDS: &[&str] = &[
    "div.Nv2PK",
    "div.DxyBCb.kA9KIf",
    "div[role='article']",
    "div.V0h1Ob-haAclf",
    "div.bfdHYd",
];

pub const BACK_BUTTONS: &[&str] = &[
    "button[jsaction='pane.place.backToList']",
    "button[jsaction*='backToList']",
    "button[aria-label='Back']",
    "button.VfPpkd-icon-LgbsSe",
];

/// 詳細パネルから1項目を読むための候補
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldProbe {
    pub selector: &'static str,
    /// None ならテキスト、Some なら属性値を読む
    pub attribute: Option<&'static str>,
}

const fn text(selector: &'static str) -> FieldProbe {
    FieldProbe {
        selector,
        attribute: None,
    }
}

const fn attr(selector: &'static str, attribute: &'static str) -> FieldProbe {
    FieldProbe {
        selector,
        attribute: Some(attribute),
    }
}

pub const NAME: &[FieldProbe] = &[
    text("h1.DUwDvf"),
    text("h1.fontHeadlineLarge"),
    text("div[role='main'] h1"),
];

pub const ADDRESS: &[FieldProbe] = &[
    text("button[data-item-id='address'] div.fontBodyMedium"),
    attr("button[data-item-id='address']", "aria-label"),
    text("button[data-item-id='address']"),
    text("div.rogA2c"),
];

pub const RATING: &[FieldProbe] = &[
    text("div.F7nice span span[aria-hidden='true']"),
    attr("div.F7nice span[role='img']", "aria-label"),
    attr("span[aria-label*='stars']", "aria-label"),
    text("span.MW4etd"),
];

pub const REVIEW_COUNT: &[FieldProbe] = &[
    attr("div.F7nice span[aria-label*='reviews']", "aria-label"),
    text("div.F7nice > span:nth-of-type(2)"),
    text("span.UY7F9"),
];

pub const CATEGORY: &[FieldProbe] = &[
    text("button[jsaction*='category']"),
    text("button.DkEaL"),
    text("span.mgr77e"),
];

/// aria-label の "Address: " などの接頭辞
pub const LABEL_PREFIXES: &[&str] = &["Address:", "Alamat:"];
