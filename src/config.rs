use std::time::Duration;

use chrono_tz::Tz;
use url::Url;

use crate::parse::{Cirkeln, Fei, WeekdayMenuExtractor};

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; PMO-IT-Lunch/1.1)";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);
pub const TIMEZONE: Tz = chrono_tz::Europe::Stockholm;
pub const OUTPUT_PATH: &str = "index.html";

/// A restaurant whose menu page is scraped.
#[derive(Debug)]
pub struct RestaurantSource {
    key: String,
    source_url: Url,
    display_name: String,
    logo_url: Option<Url>,
    extractor: Option<Box<dyn WeekdayMenuExtractor>>,
}

impl RestaurantSource {
    pub fn new(key: &str, source_url: Url, display_name: &str) -> Self {
        Self {
            key: key.to_owned(),
            source_url,
            display_name: display_name.to_owned(),
            logo_url: None,
            extractor: None,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo_url: Url) -> Self {
        self.logo_url = Some(logo_url);
        self
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: impl WeekdayMenuExtractor + 'static) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn source_url(&self) -> &Url {
        &self.source_url
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub const fn logo_url(&self) -> Option<&Url> {
        self.logo_url.as_ref()
    }

    /// `None` for sources nobody has written an extractor for yet.
    pub fn extractor(&self) -> Option<&dyn WeekdayMenuExtractor> {
        self.extractor.as_deref()
    }
}

/// Everything a run needs, built once at startup and passed down by reference.
#[derive(Debug)]
pub struct Config {
    pub sources: Vec<RestaurantSource>,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub timezone: Tz,
    pub output_path: String,
}

impl Config {
    pub fn source(&self, key: &str) -> Option<&RestaurantSource> {
        self.sources.iter().find(|s| s.key() == key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            user_agent: USER_AGENT.to_owned(),
            request_timeout: REQUEST_TIMEOUT,
            timezone: TIMEZONE,
            output_path: OUTPUT_PATH.to_owned(),
        }
    }
}

fn static_url(s: &str) -> Url {
    Url::parse(s).expect("built-in url should be valid")
}

fn default_sources() -> Vec<RestaurantSource> {
    vec![
        RestaurantSource::new(
            "FEI",
            static_url("https://www.fei.se/meny-fei-restaurant-lounge"),
            "FEI Restaurang & Lounge",
        )
        .with_logo(static_url(
            "https://res.cloudinary.com/emg-prod/image/upload/c_limit,h_100,w_200/v1/institutes/institute10621/logos/logo",
        ))
        .with_extractor(Fei::default()),
        RestaurantSource::new(
            "Cirkeln",
            static_url("https://cirkelnstockholm.se/restauranger/restaurang-cirkeln/"),
            "Restaurang Cirkeln",
        )
        .with_logo(static_url(
            "https://cirkelnstockholm.se/wp-content/uploads/2021/09/c_restaurang-S-150x150.png",
        ))
        .with_extractor(Cirkeln::default()),
    ]
}
