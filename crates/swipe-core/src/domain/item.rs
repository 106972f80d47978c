//! Items the deck consumes.
//!
//! The engine itself only ever looks at [`DeckItem::key`]; everything else
//! is carried through to the decision sink untouched. [`ProductItem`] is the
//! payload shape served by the recommendations endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable item identifier: numeric or string, as served.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    Num(i64),
    Str(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Num(n) => write!(f, "{n}"),
            ItemKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemKey {
    fn from(value: i64) -> Self {
        ItemKey::Num(value)
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        ItemKey::Str(value.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(value: String) -> Self {
        ItemKey::Str(value)
    }
}

/// Anything that can sit in a deck.
pub trait DeckItem: Clone {
    fn key(&self) -> ItemKey;
}

impl DeckItem for ItemKey {
    fn key(&self) -> ItemKey {
        self.clone()
    }
}

/// A product card as served by the recommendations API.
///
/// Field names follow the catalogue columns (`productDisplayName`,
/// `masterCategory`, ...). Older payloads use `name` / `category` /
/// `image_url` / `link`; those are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id: ItemKey,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_colour: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    #[serde(
        rename = "imageURL",
        alias = "image_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ProductItem {
    pub fn new(id: impl Into<ItemKey>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            product_display_name: Some(display_name.into()),
            name: None,
            master_category: None,
            category: None,
            sub_category: None,
            article_type: None,
            base_colour: None,
            season: None,
            usage: None,
            image_url: None,
            link: None,
            price: None,
        }
    }

    pub fn with_category(mut self, master: impl Into<String>, sub: impl Into<String>) -> Self {
        self.master_category = Some(master.into());
        self.sub_category = Some(sub.into());
        self
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.base_colour = Some(colour.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// First non-empty of `productDisplayName`, `name`.
    pub fn display_name(&self) -> &str {
        non_empty(&self.product_display_name)
            .or(non_empty(&self.name))
            .unwrap_or("Unnamed item")
    }

    /// First non-empty of `imageURL`, `link`.
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_url).or(non_empty(&self.link))
    }

    /// "Apparel • Topwear • Navy Blue" style subtitle; empty parts are skipped.
    pub fn caption(&self) -> String {
        let category = non_empty(&self.master_category).or(non_empty(&self.category));
        [category, non_empty(&self.sub_category), non_empty(&self.base_colour)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

impl DeckItem for ProductItem {
    fn key(&self) -> ItemKey {
        self.id.clone()
    }
}

/// One deal of items: either `{"items": [...]}` or a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemBatch<T> {
    Wrapped { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ItemBatch<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ItemBatch::Wrapped { items } | ItemBatch::Bare(items) => items,
        }
    }
}
