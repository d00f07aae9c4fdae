#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod menu;
mod parse;
mod render;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{config::Config, menu::WeekdayLabel};

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Scrapes every source for the weekday of `now` and writes the page.
async fn run(config: &Config, now: &DateTime<Tz>) -> Result<()> {
    let weekday = WeekdayLabel::of(now);
    log::info!("Collecting lunch menus for {weekday}");
    let client = fetch::make_client(config)?;
    let menus = menu::assemble(&client, &config.sources, weekday).await;
    let html = render::render(weekday, &menus, config, now);
    tokio::fs::write(&config.output_path, html).await?;
    log::info!("Skrev {}", config.output_path);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::default();
    let now = Utc::now().with_timezone(&config.timezone);
    run(&config, &now).await?;
    Ok(())
}
