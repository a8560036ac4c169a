//! Static menu catalog
//!
//! The catalog is fixed at build time: items are created once, never
//! mutated, and referenced by id everywhere else (cart lines carry a full
//! copy so a persisted cart survives catalog reordering).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Display text keyed by language. Both languages are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(rename = "zh-TW")]
    pub zh_tw: String,
}

impl LocalizedText {
    pub fn new(en: &str, zh_tw: &str) -> Self {
        Self {
            en: en.to_string(),
            zh_tw: zh_tw.to_string(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::ZhTw => &self.zh_tw,
        }
    }
}

/// True menu categories. "Popular" is deliberately not here: it is a
/// virtual filter (see [`CategoryFilter`]), not something an item can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Main,
    Dessert,
    Drink,
}

/// Category selection in the menu browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Matches every item regardless of its true category.
    Popular,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::Popular => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

/// A single orderable dish or drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Whole-currency amount (no minor units).
    pub price: u32,
    pub category: Category,
    pub is_vegetarian: bool,
    pub image: String,
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: (&str, &str),
    description: (&str, &str),
    price: u32,
    category: Category,
    is_vegetarian: bool,
    image: &str,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: LocalizedText::new(name.0, name.1),
        description: LocalizedText::new(description.0, description.1),
        price,
        category,
        is_vegetarian,
        image: image.to_string(),
    }
}

/// The full menu, in display order.
pub static MENU_ITEMS: Lazy<Vec<MenuItem>> = Lazy::new(|| {
    vec![
        item(
            "1",
            ("Truffle Mushroom Risotto", "松露野菇燉飯"),
            (
                "Creamy arborio rice with black truffle oil and parmesan.",
                "義大利米燉煮，佐以黑松露油與帕瑪森起司。",
            ),
            450,
            Category::Main,
            true,
            "https://picsum.photos/400/300?random=1",
        ),
        item(
            "2",
            ("Wagyu Beef Burger", "和牛漢堡"),
            (
                "Juicy wagyu patty with caramelized onions and brioche bun.",
                "多汁和牛漢堡排，搭配焦糖洋蔥與布里歐麵包。",
            ),
            580,
            Category::Main,
            false,
            "https://picsum.photos/400/300?random=2",
        ),
        item(
            "3",
            ("Caesar Salad", "凱薩沙拉"),
            (
                "Fresh romaine lettuce with homemade dressing and croutons.",
                "新鮮蘿蔓生菜，搭配自製醬汁與麵包丁。",
            ),
            280,
            Category::Appetizer,
            true,
            "https://picsum.photos/400/300?random=3",
        ),
        item(
            "4",
            ("Chocolate Lava Cake", "熔岩巧克力蛋糕"),
            (
                "Rich dark chocolate cake with a molten center.",
                "濃郁黑巧克力蛋糕，搭配流心內餡。",
            ),
            220,
            Category::Dessert,
            true,
            "https://picsum.photos/400/300?random=4",
        ),
        item(
            "5",
            ("Signature Fruit Tea", "招牌水果茶"),
            (
                "Refreshing blend of seasonal fruits and jasmine tea.",
                "清爽的時令水果與茉莉綠茶調和。",
            ),
            180,
            Category::Drink,
            true,
            "https://picsum.photos/400/300?random=5",
        ),
        item(
            "6",
            ("Pan-Seared Scallops", "香煎干貝"),
            ("Hokkaido scallops with pea purée.", "北海道干貝佐豌豆泥。"),
            420,
            Category::Appetizer,
            false,
            "https://picsum.photos/400/300?random=6",
        ),
    ]
});

/// Tab row for the menu browser: the popular pseudo-category first, then
/// the true categories in menu order.
pub static CATEGORIES: Lazy<Vec<(CategoryFilter, LocalizedText)>> = Lazy::new(|| {
    vec![
        (CategoryFilter::Popular, LocalizedText::new("Popular", "熱門")),
        (
            CategoryFilter::Only(Category::Appetizer),
            LocalizedText::new("Appetizers", "開胃菜"),
        ),
        (
            CategoryFilter::Only(Category::Main),
            LocalizedText::new("Mains", "主菜"),
        ),
        (
            CategoryFilter::Only(Category::Dessert),
            LocalizedText::new("Desserts", "甜點"),
        ),
        (
            CategoryFilter::Only(Category::Drink),
            LocalizedText::new("Drinks", "飲品"),
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<&str> = MENU_ITEMS.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MENU_ITEMS.len());
    }

    #[test]
    fn test_catalog_prices_positive() {
        assert!(MENU_ITEMS.iter().all(|i| i.price > 0));
    }

    #[test]
    fn test_popular_filter_matches_everything() {
        for item in MENU_ITEMS.iter() {
            assert!(CategoryFilter::Popular.matches(item.category));
        }
    }

    #[test]
    fn test_category_filter_selects_only_its_category() {
        let filter = CategoryFilter::Only(Category::Dessert);
        assert!(filter.matches(Category::Dessert));
        assert!(!filter.matches(Category::Main));
        assert!(!filter.matches(Category::Drink));
    }

    #[test]
    fn test_menu_item_serde_layout() {
        let json = serde_json::to_value(&MENU_ITEMS[0]).unwrap();
        // Persisted snapshot layout: camelCase fields, language-tagged text.
        assert_eq!(json["id"], "1");
        assert_eq!(json["isVegetarian"], true);
        assert_eq!(json["category"], "main");
        assert_eq!(json["name"]["zh-TW"], "松露野菇燉飯");
    }
}
