use reqwest::Client;
use scraper::Html;
use tracing::instrument;

use super::{DayMenu, WeekdayLabel};
use crate::{config::RestaurantSource, fetch};

/// Fetches and extracts every source in order, one at a time. A source that
/// fails becomes a single-line placeholder instead of stopping the others.
pub async fn assemble(
    client: &Client,
    sources: &[RestaurantSource],
    weekday: WeekdayLabel,
) -> Vec<DayMenu> {
    let mut menus = Vec::with_capacity(sources.len());
    for source in sources {
        let menu = match menu_for(client, source, weekday).await {
            Ok(menu) => {
                log::info!("{}: {} items", source.key(), menu.items().len());
                menu
            }
            Err(e) => {
                tracing::warn!("Error while fetching menu for {}: {e}", source.key());
                DayMenu::failed(source.key(), &e)
            }
        };
        menus.push(menu);
    }
    menus
}

#[instrument(skip_all, fields(key = %source.key(), weekday = %weekday))]
async fn menu_for(
    client: &Client,
    source: &RestaurantSource,
    weekday: WeekdayLabel,
) -> crate::Result<DayMenu> {
    let page = fetch::menu_page(client, source.source_url()).await?;
    let Some(extractor) = source.extractor() else {
        log::debug!("no extractor registered for {}", source.key());
        return Ok(DayMenu::new(source.key(), vec![]));
    };
    let document = Html::parse_document(&page);
    let items = extractor.extract(&document, weekday)?;
    Ok(DayMenu::new(source.key(), items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        parse::{self, Cirkeln, Fei, WeekdayMenuExtractor},
    };
    use httpmock::prelude::*;
    use std::time::Duration;
    use url::Url;

    const FEI_PAGE: &str =
        "<h3>ONSDAG</h3><ul><li>Kycklingcurry</li><li>Vegetarisk lasagne</li></ul>";

    #[derive(Debug)]
    struct Broken;

    impl WeekdayMenuExtractor for Broken {
        fn extract(&self, _: &Html, _: WeekdayLabel) -> parse::Result<Vec<String>> {
            Err(parse::Error::Pattern("unbalanced group".to_owned()))
        }
    }

    fn source(server: &MockServer, key: &str, path: &str) -> RestaurantSource {
        let url = Url::parse(&server.url(path)).unwrap();
        RestaurantSource::new(key, url, key)
    }

    fn wednesday() -> WeekdayLabel {
        "ONSDAG".parse().unwrap()
    }

    #[tokio::test]
    async fn test_failing_source_does_not_stop_others() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fei");
                then.status(200).body(FEI_PAGE);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/down");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/cirkeln");
                then.status(200)
                    .body("<h2>Lunchmeny Vecka 42</h2><p>Onsdag</p><p>Fisksoppa</p>");
            })
            .await;
        let sources = vec![
            source(&server, "Down", "/down").with_extractor(Fei::default()),
            source(&server, "FEI", "/fei").with_extractor(Fei::default()),
            source(&server, "Cirkeln", "/cirkeln").with_extractor(Cirkeln::default()),
        ];
        let client = make_client();

        let menus = assemble(&client, &sources, wednesday()).await;
        let keys: Vec<_> = menus.iter().map(DayMenu::restaurant_key).collect();
        assert_eq!(keys, vec!["Down", "FEI", "Cirkeln"]);
        assert_eq!(menus[0].items().len(), 1);
        assert!(menus[0].items()[0].starts_with("(fel vid hämtning: "));
        assert!(menus[0].items()[0].contains("500"));
        assert_eq!(menus[1].items(), ["Kycklingcurry", "Vegetarisk lasagne"]);
        assert_eq!(menus[2].items(), ["Fisksoppa"]);
    }

    #[tokio::test]
    async fn test_slow_source_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200).body(FEI_PAGE).delay(Duration::from_secs(2));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fei");
                then.status(200).body(FEI_PAGE);
            })
            .await;
        let sources = vec![
            source(&server, "Slow", "/slow").with_extractor(Fei::default()),
            source(&server, "FEI", "/fei").with_extractor(Fei::default()),
        ];
        let mut config = Config::default();
        config.request_timeout = Duration::from_millis(200);
        let client = crate::fetch::make_client(&config).unwrap();

        let menus = assemble(&client, &sources, wednesday()).await;
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].restaurant_key(), "Slow");
        assert_eq!(menus[0].items().len(), 1);
        assert!(menus[0].items()[0].starts_with("(fel vid hämtning: Request error"));
        assert_eq!(menus[1].items(), ["Kycklingcurry", "Vegetarisk lasagne"]);
    }

    #[tokio::test]
    async fn test_unreachable_source() {
        let sources = vec![RestaurantSource::new(
            "Nowhere",
            Url::parse("http://127.0.0.1:1/meny").unwrap(),
            "Nowhere",
        )
        .with_extractor(Fei::default())];
        let menus = assemble(&make_client(), &sources, wednesday()).await;
        assert_eq!(menus.len(), 1);
        assert!(menus[0].items()[0].starts_with("(fel vid hämtning: Request error"));
    }

    #[tokio::test]
    async fn test_extraction_error_becomes_placeholder() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fei");
                then.status(200).body(FEI_PAGE);
            })
            .await;
        let sources = vec![source(&server, "FEI", "/fei").with_extractor(Broken)];

        let menus = assemble(&make_client(), &sources, wednesday()).await;
        assert_eq!(
            menus[0].items(),
            ["(fel vid hämtning: Parse error: Pattern Error: unbalanced group)"]
        );
    }

    #[tokio::test]
    async fn test_source_without_extractor_is_empty() {
        let server = MockServer::start_async().await;
        let page = server
            .mock_async(|when, then| {
                when.method(GET).path("/ny");
                then.status(200).body(FEI_PAGE);
            })
            .await;
        let sources = vec![source(&server, "Ny", "/ny")];

        let menus = assemble(&make_client(), &sources, wednesday()).await;
        page.assert_async().await;
        assert_eq!(menus, vec![DayMenu::new("Ny", vec![])]);
    }

    fn make_client() -> Client {
        crate::fetch::make_client(&Config::default()).unwrap()
    }
}
