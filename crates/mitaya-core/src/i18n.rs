//! Localization table
//!
//! A flat key/value table with an entry for every user-facing string in
//! both supported languages. Lookup is total: an unknown key falls back to
//! the key itself so a missing translation never breaks rendering.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    /// BCP 47 tag, also used as the switcher label.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::ZhTw => "zh-TW",
        }
    }

    /// The other supported language (two-element set).
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::ZhTw,
            Language::ZhTw => Language::En,
        }
    }
}

/// `(key, en, zh-TW)` rows. The zh-TW rights string intentionally reads
/// "Mit Restaurant" to match the source copy; do not "fix" it here, it is
/// tracked as a content-review item.
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("nav.home", "Home", "首頁"),
    ("nav.menu", "Menu", "菜單"),
    ("nav.reservation", "Reservation", "訂位"),
    ("hero.title", "Experience the Taste of Luxury", "體驗奢華的味覺饗宴"),
    (
        "hero.subtitle",
        "Modern fusion cuisine in the heart of the city.",
        "位於市中心的現代融合料理。",
    ),
    ("hero.cta", "Book a Table", "立即訂位"),
    ("menu.title", "Our Menu", "精選菜單"),
    ("menu.search", "Search dishes...", "搜尋菜色..."),
    ("menu.vegetarian", "Vegetarian Only", "僅顯示素食"),
    ("menu.add", "Add", "加入"),
    ("cart.title", "Your Order", "您的訂單"),
    ("cart.empty", "Your cart is empty.", "購物車是空的。"),
    ("cart.total", "Total", "總計"),
    ("cart.checkout", "Checkout (Demo)", "結帳 (演示)"),
    ("res.title", "Make a Reservation", "預約訂位"),
    ("res.name", "Name", "姓名"),
    ("res.date", "Date", "日期"),
    ("res.guests", "Guests", "人數"),
    ("res.notes", "Special Requests", "特殊需求"),
    ("res.submit", "Confirm Reservation", "確認訂位"),
    ("res.success", "Reservation Confirmed!", "訂位已確認！"),
    ("res.error", "Please check your inputs.", "請檢查您的輸入。"),
    ("footer.address", "123 Culinary Ave, Food City", "美食市美食大道123號"),
    (
        "footer.rights",
        "© 2026 Mitaya Restaurant. All rights reserved.",
        "© 2026 Mit Restaurant. 版權所有。",
    ),
];

/// Look up `key` in the active language's dictionary.
///
/// Falls back to the raw key for unknown keys, never fails.
pub fn translate(lang: Language, key: &str) -> &str {
    match TRANSLATIONS.iter().find(|(k, _, _)| *k == key) {
        Some((_, en, zh)) => match lang {
            Language::En => en,
            Language::ZhTw => zh,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(translate(Language::En, "nav.menu"), "Menu");
        assert_eq!(translate(Language::ZhTw, "nav.menu"), "菜單");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(translate(Language::En, "nav.missing"), "nav.missing");
        assert_eq!(translate(Language::ZhTw, ""), "");
    }

    #[test]
    fn test_every_key_has_both_strings() {
        for (key, en, zh) in TRANSLATIONS {
            assert!(!en.is_empty(), "missing en string for {key}");
            assert!(!zh.is_empty(), "missing zh-TW string for {key}");
        }
    }

    #[test]
    fn test_keys_unique() {
        let mut keys: Vec<&str> = TRANSLATIONS.iter().map(|(k, _, _)| *k).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), TRANSLATIONS.len());
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Language::En.toggled(), Language::ZhTw);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
