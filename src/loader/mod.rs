//! Per-screen loaders.
//!
//! A loader runs one fetch → parse → assign cycle and keeps the result in its
//! own [`ResultCache`], so a screen that is rebuilt reuses the list instead
//! of hitting the network again. Loaders are `Send` and are meant to be
//! driven from one task at a time.

use std::sync::Arc;

use crate::assigner::{assign_episodes, RandomTemplates, TemplateSource, ViewTypeAssigner};
use crate::cache::ResultCache;
use crate::config::SectionConfig;
use crate::domain::{Article, Episode, NewsFeed, Podcast};
use crate::fetcher::{fetch_or_empty, ContentQuery, Fetcher};
use crate::parser::ContentParser;

type SharedFetcher = Arc<dyn Fetcher + Send + Sync>;

async fn fetch_query(fetcher: &SharedFetcher, query: &ContentQuery) -> String {
    match query.to_url() {
        Ok(url) => fetch_or_empty(fetcher.as_ref(), url.as_str()).await,
        Err(e) => {
            tracing::warn!("Could not build URL for {}: {}", query.path, e);
            String::new()
        }
    }
}

/// Loads one list of articles: a section or a search.
pub struct ArticleLoader<S = RandomTemplates> {
    fetcher: SharedFetcher,
    parser: ContentParser,
    assigner: ViewTypeAssigner<S>,
    query: ContentQuery,
    cache: ResultCache<Article>,
}

impl<S: TemplateSource> ArticleLoader<S> {
    pub fn new(
        fetcher: SharedFetcher,
        parser: ContentParser,
        assigner: ViewTypeAssigner<S>,
        query: ContentQuery,
    ) -> Self {
        Self {
            fetcher,
            parser,
            assigner,
            query,
            cache: ResultCache::new(),
        }
    }

    pub fn query(&self) -> &ContentQuery {
        &self.query
    }

    pub async fn load(&mut self) -> Vec<Article> {
        if let Some(cached) = self.cache.get() {
            tracing::debug!("Serving {} cached articles for {}", cached.len(), self.query.path);
            return cached.to_vec();
        }

        let body = fetch_query(&self.fetcher, &self.query).await;
        let mut articles = self.parser.parse_articles(&body);
        self.assigner.assign(&mut articles);
        self.cache.store(&articles);

        tracing::info!("Loaded {} articles from {}", articles.len(), self.query.path);
        articles
    }

    pub fn is_cached(&self) -> bool {
        !self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Aggregates several sections into the headlines screen.
///
/// Sections are fetched one after another; a section that comes back empty
/// is left out.
pub struct HeadlinesLoader<S = RandomTemplates> {
    fetcher: SharedFetcher,
    parser: ContentParser,
    assigner: ViewTypeAssigner<S>,
    query: ContentQuery,
    sections: Vec<SectionConfig>,
    cache: ResultCache<NewsFeed>,
}

impl<S: TemplateSource> HeadlinesLoader<S> {
    pub fn new(
        fetcher: SharedFetcher,
        parser: ContentParser,
        assigner: ViewTypeAssigner<S>,
        query: ContentQuery,
        sections: Vec<SectionConfig>,
    ) -> Self {
        Self {
            fetcher,
            parser,
            assigner,
            query,
            sections,
            cache: ResultCache::new(),
        }
    }

    pub async fn load(&mut self) -> Vec<NewsFeed> {
        if let Some(cached) = self.cache.get() {
            tracing::debug!("Serving {} cached feeds", cached.len());
            return cached.to_vec();
        }

        let mut feeds = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let query = self.query.clone().path(section.path.as_str());
            let body = fetch_query(&self.fetcher, &query).await;

            let mut articles = self.parser.parse_articles(&body);
            if articles.is_empty() {
                tracing::debug!("Section {} returned no articles", section.path);
                continue;
            }
            self.assigner.assign(&mut articles);

            let mut feed = NewsFeed::new(section.path.as_str(), section.label.as_str(), section.layout);
            feed.articles = articles;
            feeds.push(feed);
        }

        self.cache.store(&feeds);
        tracing::info!("Loaded {} of {} sections", feeds.len(), self.sections.len());
        feeds
    }

    pub fn is_cached(&self) -> bool {
        !self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Loads the episode list of one podcast, newest first.
pub struct EpisodeLoader {
    fetcher: SharedFetcher,
    parser: ContentParser,
    podcast: Arc<Podcast>,
    query: ContentQuery,
    cache: ResultCache<Episode>,
}

impl EpisodeLoader {
    pub fn new(
        fetcher: SharedFetcher,
        parser: ContentParser,
        podcast: Arc<Podcast>,
        query: ContentQuery,
    ) -> Self {
        let query = query.path(podcast.path.as_str()).newest_first();
        Self {
            fetcher,
            parser,
            podcast,
            query,
            cache: ResultCache::new(),
        }
    }

    pub fn podcast(&self) -> &Podcast {
        &self.podcast
    }

    pub async fn load(&mut self) -> Vec<Episode> {
        if let Some(cached) = self.cache.get() {
            tracing::debug!("Serving {} cached episodes of {}", cached.len(), self.podcast.title);
            return cached.to_vec();
        }

        let body = fetch_query(&self.fetcher, &self.query).await;
        let mut episodes = self.parser.parse_episodes(&body, Some(self.podcast.clone()));
        assign_episodes(&mut episodes);
        self.cache.store(&episodes);

        tracing::info!("Loaded {} episodes of {}", episodes.len(), self.podcast.title);
        episodes
    }

    pub fn is_cached(&self) -> bool {
        !self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
