mod cirkeln;
mod error;
mod fei;
mod normalize;
pub mod selector;
mod text;

use std::fmt::Debug;

use scraper::Html;

use crate::menu::WeekdayLabel;

pub use cirkeln::Cirkeln;
pub use error::{Error, Result};
pub use fei::Fei;

/// Pulls one weekday's dishes out of a restaurant's menu page.
///
/// Each restaurant gets its own implementation since every site lays its
/// menu out differently. Not finding the day is not an error: extractors
/// return an empty list and leave it to the page to say so.
pub trait WeekdayMenuExtractor: Debug + Send + Sync {
    fn extract(&self, document: &Html, weekday: WeekdayLabel) -> Result<Vec<String>>;
}
