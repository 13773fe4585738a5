//! Builds a FreeShow show from a song and its order sequence.
//!
//! The title slide is registered first, then one tagged slide per order item
//! followed by that item's continuation slides. Only tagged slides enter the
//! layout, so the layout reads title, then sections in playback order.

use super::show::{
    Item, Layout, LayoutSlide, Line, Show, ShowFile, ShowSettings, Slide, Timestamps,
};
use crate::base::build_song_header;
use crate::settings::FormatSettings;
use crate::song::{OrderItem, Song};
use crate::uid::{UidGenerator, DEFAULT_LENGTH};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TITLE_GROUP: &str = "Tag";
pub const SHOW_CATEGORY: &str = "song";
pub const LAYOUT_NAME: &str = "default";
pub const TEMPLATE_NAME: &str = "default";

/// One-shot builder for a [`ShowFile`].
///
/// Colors come from `rng`, ids from `ids`; both can be swapped for seeded
/// sources in tests.
pub struct ShowBuilder<'a, R> {
    settings: &'a FormatSettings,
    ids: &'a UidGenerator,
    rng: R,
    timestamp: i64,
}

impl<'a> ShowBuilder<'a, StdRng> {
    pub fn new(settings: &'a FormatSettings, ids: &'a UidGenerator) -> Self {
        ShowBuilder {
            settings,
            ids,
            rng: StdRng::from_entropy(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl<'a, R: Rng> ShowBuilder<'a, R> {
    /// Replace the color source.
    pub fn with_rng<S: Rng>(self, rng: S) -> ShowBuilder<'a, S> {
        ShowBuilder {
            settings: self.settings,
            ids: self.ids,
            rng,
            timestamp: self.timestamp,
        }
    }

    /// Pin the created/modified/used timestamp (milliseconds since the epoch).
    pub fn at(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn build(mut self, song: &Song, order: &[OrderItem]) -> ShowFile {
        let show_symbol = self.settings.has_end_symbol();
        let symbol = self.settings.last_section_symbol.as_str();
        let page_size = self.settings.page_size();

        let layout_id = self.mint_id();
        let show_id = self.mint_id();
        let header = build_song_header(song);

        let mut slides: IndexMap<String, Slide> = IndexMap::new();

        let mut title = Slide::tagged(TITLE_GROUP, self.random_color());
        title.items.push(Item::text(vec![Line::plain(&header)]));
        slides.insert(self.mint_id(), title);

        let last_index = order.len().saturating_sub(1);
        for (index, item) in order.iter().enumerate() {
            let is_last = index == last_index;
            let decorate = show_symbol && is_last;
            let tag = item.section.kind().tag();

            let slide_id = self.mint_id();
            slides.insert(slide_id.clone(), Slide::tagged(tag, self.random_color()));

            let lines = item.section.lines();
            let mut children = Vec::new();
            for (page_index, page) in lines.chunks(page_size).enumerate() {
                let mut items = vec![Item::text(
                    page.iter().map(|line| Line::plain(line)).collect(),
                )];
                if decorate {
                    items.push(Item::symbol(symbol));
                }

                if page_index == 0 {
                    if let Some(slide) = slides.get_mut(&slide_id) {
                        slide.items = items;
                    }
                } else {
                    let child_id = self.mint_id();
                    slides.insert(child_id.clone(), Slide::child(items));
                    children.push(child_id);
                }
            }

            if let Some(slide) = slides.get_mut(&slide_id) {
                slide.children = children;
            }
        }

        let layout = Layout {
            name: LAYOUT_NAME.to_string(),
            notes: String::new(),
            slides: slides
                .iter()
                .filter(|(_, slide)| slide.group.is_some())
                .map(|(id, _)| LayoutSlide { id: id.clone() })
                .collect(),
        };

        let mut layouts = IndexMap::new();
        layouts.insert(layout_id.clone(), layout);

        tracing::debug!(
            song = song.number,
            sections = order.len(),
            slides = slides.len(),
            "built FreeShow show"
        );

        ShowFile {
            id: show_id,
            show: Show {
                name: header,
                private: false,
                category: SHOW_CATEGORY.to_string(),
                settings: ShowSettings {
                    active_layout: layout_id,
                    template: TEMPLATE_NAME.to_string(),
                },
                timestamps: Timestamps::at(self.timestamp),
                quick_access: Default::default(),
                meta: Default::default(),
                slides,
                layouts,
                media: Default::default(),
            },
        }
    }

    fn mint_id(&self) -> String {
        self.ids.generate(DEFAULT_LENGTH)
    }

    fn random_color(&mut self) -> String {
        format!("#{:06X}", self.rng.gen_range(0..0x100_0000u32))
    }
}
