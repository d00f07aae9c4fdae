use std::sync::OnceLock;

use chrono::DateTime;
use chrono_tz::Tz;
use html_escape::{encode_single_quoted_attribute, encode_text};
use regex::Regex;

use crate::{
    config::Config,
    menu::{DayMenu, WeekdayLabel},
};

/// Seconds between browser reloads of the page.
pub const REFRESH_SECONDS: u32 = 1800;

const STYLE: &str = "
  :root { --fg:#111; --muted:#555; --card:#fff; --bg:#f6f7f9; }
  @media (prefers-color-scheme: dark) {
    :root { --fg:#eaeaea; --muted:#a0a0a0; --card:#171717; --bg:#0e0f11; }
  }
  body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif;
    background:var(--bg);color:var(--fg);margin:0}
  .wrap{max-width:760px;margin:32px auto;padding:0 16px}
  .card{background:var(--card);border-radius:16px;
    box-shadow:0 6px 24px rgba(0,0,0,.08);padding:24px}
  h1{margin:0 0 6px 0;font-size:28px}
  h2{margin:0 0 16px 0;font-size:18px;letter-spacing:1px;color:var(--muted)}
  .rest{padding:14px 0;border-top:1px solid rgba(128,128,128,.25)}
  .rest:first-of-type{border-top:none}
  .head{display:flex;align-items:center;gap:12px;margin-bottom:6px}
  .logo{width:28px;height:28px;object-fit:contain;border-radius:6px;
    flex:0 0 28px;filter:contrast(1.1)}
  .name{font-weight:700}
  .dish{margin:4px 0;line-height:1.5}
  .footer{margin-top:10px;color:var(--muted);font-size:12px}
";

/// Builds the complete page. Names, logos and dish text are escaped; slashes
/// and pipes in a dish become line breaks.
pub fn render(
    weekday: WeekdayLabel,
    menus: &[DayMenu],
    config: &Config,
    updated_at: &DateTime<Tz>,
) -> String {
    let cards: String = menus
        .iter()
        .map(|menu| render_menu(menu, weekday, config))
        .collect();
    format!(
        r#"<!doctype html>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<meta http-equiv="refresh" content="{REFRESH_SECONDS}">
<title>Dagens lunch</title>
<style>{STYLE}</style>
<div class="wrap">
  <div class="card">
    <h1>Dagens lunch by PMO IT</h1>
    <h2>{weekday}</h2>
{cards}    <div class="footer">Uppdaterad: {updated} · Tidszon: {zone}</div>
  </div>
</div>
"#,
        weekday = weekday.upper(),
        updated = updated_at.format("%Y-%m-%d %H:%M"),
        zone = updated_at.timezone().name(),
    )
}

fn render_menu(menu: &DayMenu, weekday: WeekdayLabel, config: &Config) -> String {
    let source = config.source(menu.restaurant_key());
    let name = source.map_or(menu.restaurant_key(), |s| s.display_name());

    let logo = source
        .and_then(|s| s.logo_url())
        .map(|logo| {
            format!(
                "        <img class='logo' src='{}' alt='{} logotyp'>\n",
                encode_single_quoted_attribute(logo.as_str()),
                encode_single_quoted_attribute(name),
            )
        })
        .unwrap_or_default();
    let dishes: String = if menu.items().is_empty() {
        format!(
            "      <div class='dish'><em>ingen meny hittad för {}</em></div>\n",
            weekday.capitalized()
        )
    } else {
        menu.items()
            .iter()
            .map(|dish| format!("      <div class='dish'>{}</div>\n", dish_lines(dish)))
            .collect()
    };
    format!(
        "    <div class='rest'>\n      <div class='head'>\n{logo}        \
         <div class='name'>{}</div>\n      </div>\n{dishes}    </div>\n",
        encode_text(name)
    )
}

/// Sources separate the parts of one dish with `/` or `|`; each part gets its own line.
fn dish_lines(dish: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s*[/|]\s*").expect("regex should be valid"));
    re.split(dish)
        .map(|part| encode_text(part).into_owned())
        .collect::<Vec<_>>()
        .join("<br>")
}
