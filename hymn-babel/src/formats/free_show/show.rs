//! FreeShow `.show` document model.
//!
//! Field names serialize in camelCase. Slides and layouts are kept in
//! insertion order so the file lists the title slide first and sections in
//! playback order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_ITEM_STYLE: &str = "top:120px;left:50px;height:840px;width:1820px;";
pub const SYMBOL_ITEM_STYLE: &str = "top:940.03px;left:1411.55px;height:139.97px;width:487.45px;";
pub const SYMBOL_LINE_ALIGN: &str = "text-align: right";
pub const DEFAULT_TEXT_STYLE: &str = "font-size: 100px;";

/// Free-form JSON objects FreeShow expects but this exporter leaves empty.
pub type Extra = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub name: String,
    #[serde(default)]
    pub private: bool,
    pub category: String,
    pub settings: ShowSettings,
    pub timestamps: Timestamps,
    #[serde(default)]
    pub quick_access: Extra,
    #[serde(default)]
    pub meta: Extra,
    #[serde(default)]
    pub slides: IndexMap<String, Slide>,
    #[serde(default)]
    pub layouts: IndexMap<String, Layout>,
    #[serde(default)]
    pub media: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowSettings {
    pub active_layout: String,
    pub template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created: i64,
    pub modified: i64,
    pub used: i64,
}

impl Timestamps {
    pub fn at(millis: i64) -> Self {
        Timestamps {
            created: millis,
            modified: millis,
            used: millis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub group: Option<String>,
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_group: Option<String>,
    #[serde(default)]
    pub settings: Extra,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Slide {
    /// A top-level slide carrying a group tag.
    pub fn tagged(group: &str, color: String) -> Self {
        Slide {
            group: Some(group.to_string()),
            color: Some(color),
            global_group: Some(group.to_lowercase()),
            settings: Extra::new(),
            notes: String::new(),
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An untagged continuation slide.
    pub fn child(items: Vec<Item>) -> Self {
        Slide {
            group: None,
            color: None,
            global_group: None,
            settings: Extra::new(),
            notes: String::new(),
            items,
            children: Vec::new(),
        }
    }
}

/// A positioned text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: String,
    pub lines: Vec<Line>,
    pub style: String,
    pub align: String,
    pub auto: bool,
}

impl Item {
    pub fn text(lines: Vec<Line>) -> Self {
        Item {
            kind: "text".to_string(),
            lines,
            style: DEFAULT_ITEM_STYLE.to_string(),
            align: String::new(),
            auto: false,
        }
    }

    /// Right-aligned box holding the last-section symbol.
    pub fn symbol(symbol: &str) -> Self {
        let mut line = Line::plain(symbol);
        line.align = SYMBOL_LINE_ALIGN.to_string();
        Item {
            style: SYMBOL_ITEM_STYLE.to_string(),
            ..Item::text(vec![line])
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub align: String,
    pub text: Vec<TextSegment>,
}

impl Line {
    pub fn plain(value: &str) -> Self {
        Line {
            align: String::new(),
            text: vec![TextSegment {
                value: value.to_string(),
                style: DEFAULT_TEXT_STYLE.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSegment {
    pub value: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    pub slides: Vec<LayoutSlide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSlide {
    pub id: String,
}

/// A generated show together with the id it is filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowFile {
    pub id: String,
    pub show: Show,
}

impl ShowFile {
    /// Serializes as the two-element array `[id, show]`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&(&self.id, &self.show))
    }

    /// Parses a `.show` file back into its parts.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let (id, show): (String, Show) = serde_json::from_str(source)?;
        Ok(ShowFile { id, show })
    }

    pub fn active_layout(&self) -> Option<&Layout> {
        self.show.layouts.get(&self.show.settings.active_layout)
    }
}
