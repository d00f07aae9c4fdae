use scraper::{ElementRef, Html};

use super::normalize::{char_len, normalize};
use super::text::{element_text, following_elements, is_named};
use super::{Result, WeekdayMenuExtractor};
use crate::menu::WeekdayLabel;
use crate::static_selector;

pub const DEFAULT_MAX_HOPS: usize = 6;
pub const DEFAULT_MAX_STEPS: usize = 12;

/// Section headings that end a day's running text on the FEI page.
const SECTION_BOUNDARIES: [&str; 2] = ["PRIS OCH ÖPPETTIDER", "VECKANS VEGETARISKA"];

/// Finds a heading that reads exactly like the weekday and takes the dishes
/// from whatever follows it: either a `<ul>` or a run of sibling blocks up to
/// the next weekday or section heading.
#[derive(Debug, Clone, Copy)]
pub struct Fei {
    /// Empty or `<br>` siblings skipped before giving up on a heading.
    pub max_hops: usize,
    /// Siblings read into a running text block.
    pub max_steps: usize,
}

impl Default for Fei {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl WeekdayMenuExtractor for Fei {
    fn extract(&self, document: &Html, weekday: WeekdayLabel) -> Result<Vec<String>> {
        static_selector!(HEADING_SELECTOR <- "h2, h3, h4, strong, p");
        let candidates = document
            .select(&HEADING_SELECTOR)
            .filter(|el| element_text(*el).to_uppercase() == weekday.upper());

        // The first heading with any dishes wins, later duplicates are ignored.
        for heading in candidates {
            let items = self.items_after(heading);
            if !items.is_empty() {
                return Ok(items);
            }
        }
        Ok(vec![])
    }
}

impl Fei {
    fn items_after(&self, heading: ElementRef<'_>) -> Vec<String> {
        let mut siblings = following_elements(heading);
        let mut content = siblings.next();
        let mut hops = 0;
        while let Some(el) = content {
            if hops >= self.max_hops || !is_filler(el) {
                break;
            }
            content = siblings.next();
            hops += 1;
        }
        let Some(content) = content else {
            return vec![];
        };

        if is_named(content, "ul") {
            list_items(content)
        } else {
            self.running_text(content)
        }
    }

    fn running_text(&self, start: ElementRef<'_>) -> Vec<String> {
        let block = std::iter::once(start)
            .chain(following_elements(start))
            .take(self.max_steps)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .take_while(|t| !is_stop_marker(t))
            .collect::<Vec<_>>()
            .join("\n");
        normalize(&block)
            .into_iter()
            .filter(|line| char_len(line) > 3)
            .collect()
    }
}

/// `<br>` or an element without any text.
fn is_filler(el: ElementRef<'_>) -> bool {
    is_named(el, "br") || element_text(el).is_empty()
}

fn list_items(list: ElementRef<'_>) -> Vec<String> {
    static_selector!(ITEM_SELECTOR <- "li");
    list.select(&ITEM_SELECTOR)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_stop_marker(text: &str) -> bool {
    let upper = text.to_uppercase();
    WeekdayLabel::ALL.iter().any(|day| day.upper() == upper)
        || SECTION_BOUNDARIES.contains(&upper.as_str())
}
