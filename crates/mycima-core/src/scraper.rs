//! Main MyCima Scraper API
//!
//! This module provides the high-level API for scraping MyCima. It combines
//! a [`PageFetcher`] with the page parsers, the chain walker and the
//! aggregators. Every public method returns an `Option`: failures are logged
//! through the scraper's logger and come back as `None` (or as a partially
//! populated aggregate), never as errors.

use async_trait::async_trait;

use crate::aggregate::{aggregate_season, aggregate_serie};
use crate::client::{MyCimaClient, PageFetcher};
use crate::error::Result;
use crate::logger::ScrapeLogger;
use crate::parser::{parse_episode, parse_season, parse_serie};
use crate::selectors::SiteSelectors;
use crate::source::CatalogSource;
use crate::types::{EpisodeRecord, SeasonListing, SeasonRecord, SerieListing, SerieRecord};
use crate::url::clean_url;
use crate::walker::WalkOptions;

/// Configuration for [`MyCimaScraper`]
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Log progress and failures (default: true)
    pub display_info: bool,
    /// Selector table for the site's pages
    pub selectors: SiteSelectors,
    /// Limits for chain walks
    pub walk: WalkOptions,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            display_info: true,
            selectors: SiteSelectors::default(),
            walk: WalkOptions::default(),
        }
    }
}

/// Main scraper API for MyCima
///
/// # Example
/// ```no_run
/// use mycima_core::MyCimaScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = MyCimaScraper::new()?;
///
///     if let Some(season) = scraper
///         .get_season_by_previews("https://wecima.film/series/some-show", None, None)
///         .await
///     {
///         println!("{} episodes", season.episodes.len());
///     }
///
///     Ok(())
/// }
/// ```
pub struct MyCimaScraper<F = MyCimaClient> {
    fetcher: F,
    config: ScraperConfig,
    logger: ScrapeLogger,
}

impl MyCimaScraper<MyCimaClient> {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    ///
    /// # Example
    /// ```
    /// use mycima_core::MyCimaScraper;
    ///
    /// let scraper = MyCimaScraper::new().expect("Failed to create scraper");
    /// ```
    pub fn new() -> Result<Self> {
        let client = MyCimaClient::new()?;
        Ok(Self::with_fetcher(client, ScraperConfig::default()))
    }

    /// Create a new scraper with a custom client and default configuration.
    pub fn with_client(client: MyCimaClient) -> Self {
        Self::with_fetcher(client, ScraperConfig::default())
    }
}

impl<F: PageFetcher> MyCimaScraper<F> {
    /// Create a scraper over any page fetcher.
    ///
    /// # Arguments
    /// * `fetcher` - Source of page HTML
    /// * `config` - Scraper configuration
    pub fn with_fetcher(fetcher: F, config: ScraperConfig) -> Self {
        let logger = ScrapeLogger::new(config.display_info);
        Self {
            fetcher,
            config,
            logger,
        }
    }

    /// Configuration the scraper was built with.
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Get a series title and its season links, without walking anything.
    pub async fn get_serie(&self, serie_url: &str) -> Option<SerieListing> {
        let result = self.serie_listing(serie_url).await;
        self.ok_or_log("Failed to get serie data", serie_url, result)
    }

    /// Get a season title and its listed episode links, without walking anything.
    pub async fn get_season(&self, season_url: &str) -> Option<SeasonListing> {
        let result = self.season_listing(season_url).await;
        self.ok_or_log("Failed to get season data", season_url, result)
    }

    /// Get a single episode: predecessor pointers and downloads.
    pub async fn get_episode(&self, episode_url: &str) -> Option<EpisodeRecord> {
        let result = self.episode(episode_url).await;
        self.ok_or_log("Failed to get episode data", episode_url, result)
    }

    /// Get a season by walking its episodes backward through the previous links.
    ///
    /// # Arguments
    /// * `season_url` - Season page URL
    /// * `start` - Episode to start from (default: most recent listed episode)
    /// * `end` - Oldest episode to include (default: first episode)
    ///
    /// # Example
    /// ```no_run
    /// use mycima_core::MyCimaScraper;
    ///
    /// # async fn example() -> Result<(), mycima_core::MyCimaError> {
    /// let scraper = MyCimaScraper::new()?;
    /// let season = scraper
    ///     .get_season_by_previews(
    ///         "https://wecima.film/series/some-show",
    ///         Some("https://wecima.film/watch/some-show-episode-10"),
    ///         Some("https://wecima.film/watch/some-show-episode-5"),
    ///     )
    ///     .await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_season_by_previews(
        &self,
        season_url: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Option<SeasonRecord> {
        aggregate_season(self, season_url, start, end, self.config.walk, &self.logger).await
    }

    /// Get a full series, walking every listed season in site order.
    pub async fn get_serie_by_previews(&self, serie_url: &str) -> Option<SerieRecord> {
        aggregate_serie(self, serie_url, self.config.walk, &self.logger).await
    }

    /// Fetch a page, logging the attempt and its outcome.
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.logger.info(&format!("Fetching page: {}", url));
        match self.fetcher.fetch(url).await {
            Ok(html) => {
                self.logger.success("Page fetched successfully");
                Ok(html)
            }
            Err(e) => {
                self.logger.error(&format!("Failed to fetch page {}", url), &e);
                Err(e)
            }
        }
    }

    fn ok_or_log<T>(&self, message: &str, url: &str, result: Result<T>) -> Option<T> {
        result
            .map_err(|e| self.logger.error(&format!("{}: {}", message, url), &e))
            .ok()
    }
}

#[async_trait]
impl<F: PageFetcher> CatalogSource for MyCimaScraper<F> {
    async fn serie_listing(&self, url: &str) -> Result<SerieListing> {
        let link = clean_url(url)?;
        let html = self.fetch_page(&link).await?;
        parse_serie(&html, &link, &self.config.selectors.serie)
    }

    async fn season_listing(&self, url: &str) -> Result<SeasonListing> {
        let link = clean_url(url)?;
        let html = self.fetch_page(&link).await?;
        parse_season(&html, &link, &self.config.selectors.season)
    }

    async fn episode(&self, url: &str) -> Result<EpisodeRecord> {
        let link = clean_url(url)?;
        let html = self.fetch_page(&link).await?;
        parse_episode(&html, &link, &self.config.selectors.episode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::MyCimaError;
    use crate::parser::{NO_EPISODE_TITLE, NO_SEASON_TITLE};

    /// Serves canned pages; unknown URLs are 404s.
    #[derive(Default)]
    struct FakeFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl PageFetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| MyCimaError::NotFound(url.to_string()))
        }
    }

    const BASE: &str = "https://wecima.film";

    fn episode_page(title: &str, prev: Option<&str>, buttons: &[String], download: &str) -> String {
        let prev = prev
            .map(|p| format!(r#"<a class="PrevEpisode" href="{}">prev</a>"#, p))
            .unwrap_or_default();
        let buttons: String = buttons
            .iter()
            .map(|b| format!(r#"<a href="{}">b</a>"#, b))
            .collect();
        format!(
            r#"<html><body>
                <h1 class="Title--Content--Single-begin">{}</h1>
                {}
                <div class="Episodes--Seasons--Episodes">{}</div>
                <ul class="List--Download--Wecima--Single">
                    <li><a href="{}">1080p</a></li>
                </ul>
            </body></html>"#,
            title, prev, buttons, download
        )
    }

    fn season_page(title: &str, episodes: &[String]) -> String {
        let links: String = episodes
            .iter()
            .map(|e| format!(r#"<a href="{}">ep</a>"#, e))
            .collect();
        format!(
            r#"<h1 class="Title--Content--Single-begin">{}</h1>
               <div class="Episodes--Seasons--Episodes">{}</div>"#,
            title, links
        )
    }

    fn episode_url(season: &str, k: usize) -> String {
        format!("{}/watch/{}-episode-{}", BASE, season, k)
    }

    /// A site where season `name` has `n` episodes. Odd episodes carry an
    /// explicit previous link, even ones only the switcher.
    fn add_season(pages: &mut HashMap<String, String>, name: &str, n: usize) -> String {
        let newest_first: Vec<String> = (1..=n).rev().map(|k| episode_url(name, k)).collect();
        for k in 1..=n {
            let prev = (k > 1 && k % 2 == 1).then(|| episode_url(name, k - 1));
            pages.insert(
                episode_url(name, k),
                episode_page(
                    &format!("{} Episode {}", name, k),
                    prev.as_deref(),
                    &newest_first,
                    &format!("https://cdn.example/{}-{}.mp4.html", name, k),
                ),
            );
        }
        let season_url = format!("{}/series/{}", BASE, name);
        pages.insert(season_url.clone(), season_page(&format!("Season {}", name), &newest_first));
        season_url
    }

    fn scraper(pages: HashMap<String, String>) -> MyCimaScraper<FakeFetcher> {
        let config = ScraperConfig {
            display_info: false,
            ..ScraperConfig::default()
        };
        MyCimaScraper::with_fetcher(FakeFetcher { pages }, config)
    }

    #[test]
    fn test_scraper_creation() {
        let scraper = MyCimaScraper::new();
        assert!(scraper.is_ok());
        assert!(scraper.unwrap().config().display_info);
    }

    #[tokio::test]
    async fn test_get_episode_single_page() {
        let mut pages = HashMap::new();
        add_season(&mut pages, "show", 3);
        let scraper = scraper(pages);

        let ep = scraper.get_episode(&episode_url("show", 2)).await.unwrap();
        assert_eq!(ep.title, "show Episode 2");
        assert_eq!(ep.previous_link, None);
        assert_eq!(ep.previous_button_link, Some(episode_url("show", 1)));
        assert_eq!(ep.downloads[0].link, "https://cdn.example/show-2.mp4");
    }

    #[tokio::test]
    async fn test_get_episode_decodes_input_url() {
        let mut pages = HashMap::new();
        pages.insert(
            format!("{}/watch/حلقة", BASE),
            r#"<h1 class="Title--Content--Single-begin">Arabic</h1>"#.to_string(),
        );
        let scraper = scraper(pages);
        let ep = scraper
            .get_episode(&format!("{}/watch/%D8%AD%D9%84%D9%82%D8%A9", BASE))
            .await
            .unwrap();
        assert_eq!(ep.link, format!("{}/watch/حلقة", BASE));
        assert_eq!(ep.title, "Arabic");
    }

    #[tokio::test]
    async fn test_get_episode_missing_page_is_none() {
        let scraper = scraper(HashMap::new());
        assert!(scraper.get_episode(&episode_url("show", 1)).await.is_none());
    }

    #[tokio::test]
    async fn test_get_episode_invalid_selector_is_none() {
        let mut pages = HashMap::new();
        add_season(&mut pages, "show", 1);
        let mut config = ScraperConfig {
            display_info: false,
            ..ScraperConfig::default()
        };
        config.selectors.episode.title = "h1[[".to_string();
        let scraper = MyCimaScraper::with_fetcher(FakeFetcher { pages }, config);
        assert!(scraper.get_episode(&episode_url("show", 1)).await.is_none());
    }

    #[tokio::test]
    async fn test_get_episode_blank_page_uses_sentinel() {
        let mut pages = HashMap::new();
        pages.insert("https://x/blank".to_string(), String::new());
        let ep = scraper(pages).get_episode("https://x/blank").await.unwrap();
        assert_eq!(ep.title, NO_EPISODE_TITLE);
    }

    #[tokio::test]
    async fn test_get_season_listing() {
        let mut pages = HashMap::new();
        let season_url = add_season(&mut pages, "show", 3);
        let season = scraper(pages).get_season(&season_url).await.unwrap();
        assert_eq!(season.title, "Season show");
        assert_eq!(season.episodes.len(), 3);
        assert_eq!(season.last_episode.unwrap().link, episode_url("show", 3));
    }

    #[tokio::test]
    async fn test_get_season_by_previews_full_walk() {
        let mut pages = HashMap::new();
        let season_url = add_season(&mut pages, "show", 5);
        let season = scraper(pages)
            .get_season_by_previews(&season_url, None, None)
            .await
            .unwrap();

        let expected: Vec<String> = (1..=5).map(|k| episode_url("show", k)).collect();
        let links: Vec<String> = season.episodes.iter().map(|e| e.link.clone()).collect();
        assert_eq!(links, expected);
        assert_eq!(
            season.download_links[0].as_deref(),
            Some("https://cdn.example/show-1.mp4")
        );
        assert_eq!(season.download_links.len(), 5);
    }

    #[tokio::test]
    async fn test_blank_previous_link_walks_through_switcher() {
        let mut pages = HashMap::new();
        let newest_first: Vec<String> = (1..=3).rev().map(|k| episode_url("blank", k)).collect();
        for k in 1..=3 {
            pages.insert(
                episode_url("blank", k),
                episode_page(
                    &format!("Episode {}", k),
                    Some(""),
                    &newest_first,
                    &format!("https://cdn.example/blank-{}.mp4", k),
                ),
            );
        }
        let season_url = format!("{}/series/blank", BASE);
        pages.insert(season_url.clone(), season_page("Season blank", &newest_first));

        let season = scraper(pages)
            .get_season_by_previews(&season_url, None, None)
            .await
            .unwrap();
        let links: Vec<String> = season.episodes.iter().map(|e| e.link.clone()).collect();
        let expected: Vec<String> = (1..=3).map(|k| episode_url("blank", k)).collect();
        assert_eq!(links, expected);
    }

    #[tokio::test]
    async fn test_get_season_by_previews_range() {
        let mut pages = HashMap::new();
        let season_url = add_season(&mut pages, "show", 6);
        let start = episode_url("show", 5);
        let end = episode_url("show", 3);
        let season = scraper(pages)
            .get_season_by_previews(&season_url, Some(&start), Some(&end))
            .await
            .unwrap();
        let links: Vec<String> = season.episodes.iter().map(|e| e.link.clone()).collect();
        assert_eq!(links, vec![end, episode_url("show", 4), start]);
    }

    #[tokio::test]
    async fn test_get_season_by_previews_missing_season() {
        let scraper = scraper(HashMap::new());
        assert!(scraper
            .get_season_by_previews("https://wecima.film/series/none", None, None)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_get_season_by_previews_missing_season_with_start() {
        let mut pages = HashMap::new();
        add_season(&mut pages, "show", 2);
        let start = episode_url("show", 2);
        let season = scraper(pages)
            .get_season_by_previews("https://wecima.film/series/none", Some(&start), None)
            .await
            .unwrap();
        assert_eq!(season.title, NO_SEASON_TITLE);
        assert_eq!(season.episode_count(), 2);
    }

    #[tokio::test]
    async fn test_get_serie_by_previews_keeps_failed_season_slot() {
        let mut pages = HashMap::new();
        let s1 = add_season(&mut pages, "s1", 2);
        let s3 = add_season(&mut pages, "s3", 3);
        let s2 = format!("{}/series/s2", BASE);
        let serie_url = format!("{}/series/show", BASE);
        pages.insert(
            serie_url.clone(),
            format!(
                r#"<h1 class="Title--Content--Single-begin">Show</h1>
                   <div class="List--Seasons--Episodes">
                       <a href="{}">S1</a><a href="{}">S2</a><a href="{}">S3</a>
                   </div>"#,
                s1, s2, s3
            ),
        );

        let scraper = scraper(pages);
        let listing = scraper.get_serie(&serie_url).await.unwrap();
        assert_eq!(listing.seasons.len(), 3);

        let serie = scraper.get_serie_by_previews(&serie_url).await.unwrap();
        assert_eq!(serie.title, "Show");
        assert_eq!(serie.season_count(), 3);
        assert_eq!(serie.seasons[0].as_ref().unwrap().episode_count(), 2);
        assert!(serie.seasons[1].is_none());
        assert_eq!(serie.seasons[2].as_ref().unwrap().episode_count(), 3);
    }

    #[tokio::test]
    async fn test_get_serie_missing_page() {
        let scraper = scraper(HashMap::new());
        assert!(scraper.get_serie("https://wecima.film/series/x").await.is_none());
        assert!(scraper
            .get_serie_by_previews("https://wecima.film/series/x")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_walk_over_http_stops_at_server_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        let ep = |k: usize| format!("{}/watch/ep-{}", uri, k);

        for k in 2..=3 {
            let body = episode_page(
                &format!("Episode {}", k),
                Some(&ep(k - 1)),
                &[],
                &format!("{}/dl/ep-{}.mp4", uri, k),
            );
            Mock::given(method("GET"))
                .and(path(format!("/watch/ep-{}", k)))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/watch/ep-1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/series/show"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(season_page("Season 1", &[ep(3), ep(2), ep(1)])),
            )
            .mount(&server)
            .await;

        let config = ScraperConfig {
            display_info: false,
            ..ScraperConfig::default()
        };
        let scraper = MyCimaScraper::with_fetcher(MyCimaClient::new().unwrap(), config);
        let season = scraper
            .get_season_by_previews(&format!("{}/series/show", uri), None, None)
            .await
            .unwrap();

        let links: Vec<String> = season.episodes.iter().map(|e| e.link.clone()).collect();
        assert_eq!(links, vec![ep(2), ep(3)]);
        assert_eq!(season.download_links[1], Some(format!("{}/dl/ep-3.mp4", uri)));
    }
}
