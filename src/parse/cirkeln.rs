use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node};

use super::normalize::{char_len, normalize};
use super::text::{element_text, following_elements};
use super::{Result, WeekdayMenuExtractor};
use crate::menu::WeekdayLabel;
use crate::static_selector;

pub const DEFAULT_MAX_SIBLINGS: usize = 80;

/// Phrases that close the last day's block on the Cirkeln page.
const TRAILING_MARKERS: [&str; 3] = ["Kontakt", "Öppettider", "Veckans vegetariska"];

fn lunch_menu_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Lunchmeny").expect("regex should be valid"))
}

fn week_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Vecka\s+\d+").expect("regex should be valid"))
}

/// Prices, serving hours and recurring headings that show up inside a day's block.
fn boilerplate_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:Pris|11:|Dagens|Veckans)").expect("regex should be valid")
    })
}

/// Anchors on the "Lunchmeny vecka N" heading, flattens the blocks after it
/// into one text and cuts out the part between the weekday's name and the
/// next weekday or trailing section.
#[derive(Debug, Clone, Copy)]
pub struct Cirkeln {
    /// Sibling blocks read after the anchor, the anchor included.
    pub max_siblings: usize,
}

impl Default for Cirkeln {
    fn default() -> Self {
        Self {
            max_siblings: DEFAULT_MAX_SIBLINGS,
        }
    }
}

impl WeekdayMenuExtractor for Cirkeln {
    fn extract(&self, document: &Html, weekday: WeekdayLabel) -> Result<Vec<String>> {
        let Some(container) = find_container(document) else {
            log::debug!("no lunch menu anchor found");
            return Ok(vec![]);
        };
        let text = std::iter::once(container)
            .chain(following_elements(container))
            .take(self.max_siblings)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let Some(block) = day_block(&text, weekday)? else {
            return Ok(vec![]);
        };
        Ok(normalize(&block)
            .into_iter()
            .filter(|line| char_len(line) > 3 && !boilerplate_line().is_match(line))
            .collect())
    }
}

/// Parent of the first text or comment node naming both the lunch menu and a
/// week number, or failing that the first block whose text mentions the lunch
/// menu.
fn find_container(document: &Html) -> Option<ElementRef<'_>> {
    let anchored = document.tree.root().descendants().find_map(|node| {
        let text = match node.value() {
            Node::Text(text) => text.text.trim(),
            Node::Comment(comment) => comment.comment.trim(),
            _ => return None,
        };
        if lunch_menu_marker().is_match(text) && week_marker().is_match(text) {
            node.parent().and_then(ElementRef::wrap)
        } else {
            None
        }
    });
    anchored.or_else(|| {
        static_selector!(BLOCK_SELECTOR <- "h1, h2, h3, p, div");
        document
            .select(&BLOCK_SELECTOR)
            .find(|el| lunch_menu_marker().is_match(&element_text(*el)))
    })
}

fn day_block(text: &str, weekday: WeekdayLabel) -> Result<Option<String>> {
    let terminators = WeekdayLabel::BUSINESS_DAYS
        .iter()
        .map(|day| day.capitalized())
        .chain(TRAILING_MARKERS)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(?si){}\s*(.+?)(?:{terminators}|$)",
        regex::escape(weekday.capitalized())
    );
    let re = Regex::new(&pattern)?;
    Ok(re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned()))
}
