mod assemble;
mod weekday;

pub use assemble::assemble;
pub use weekday::WeekdayLabel;

/// The dishes one restaurant serves on the day being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayMenu {
    restaurant_key: String,
    items: Vec<String>,
}

impl DayMenu {
    pub fn new(restaurant_key: &str, items: Vec<String>) -> Self {
        Self {
            restaurant_key: restaurant_key.to_owned(),
            items,
        }
    }

    /// Stand-in for a source that could not be fetched or read. The reason is
    /// shown to readers in place of the dishes.
    pub fn failed(restaurant_key: &str, reason: &crate::Error) -> Self {
        Self::new(restaurant_key, vec![format!("(fel vid hämtning: {reason})")])
    }

    pub fn restaurant_key(&self) -> &str {
        &self.restaurant_key
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
