use std::sync::Arc;

use crate::app::error::{NewsdeskError, Result};
use crate::assigner::ViewTypeAssigner;
use crate::config::Config;
use crate::domain::Podcast;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{ContentQuery, Fetcher};
use crate::loader::{ArticleLoader, EpisodeLoader, HeadlinesLoader};
use crate::parser::ContentParser;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub parser: ContentParser,
    pub podcasts: Vec<Arc<Podcast>>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new()?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let podcasts = config.podcasts.iter().cloned().map(Arc::new).collect();

        Self {
            config,
            fetcher,
            parser: ContentParser::new(),
            podcasts,
        }
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new(&self.config.api)
    }

    pub fn headlines_loader(&self) -> HeadlinesLoader {
        HeadlinesLoader::new(
            self.fetcher.clone(),
            self.parser.clone(),
            ViewTypeAssigner::new(),
            self.query(),
            self.config.sections.clone(),
        )
    }

    pub fn section_loader(&self, path: &str, page: Option<u32>) -> ArticleLoader {
        self.article_loader(self.query().path(path), page)
    }

    pub fn search_loader(&self, term: &str, page: Option<u32>) -> ArticleLoader {
        self.article_loader(self.query().search(term), page)
    }

    fn article_loader(&self, query: ContentQuery, page: Option<u32>) -> ArticleLoader {
        let query = match page {
            Some(page) => query.page(page),
            None => query,
        };
        ArticleLoader::new(
            self.fetcher.clone(),
            self.parser.clone(),
            ViewTypeAssigner::new(),
            query,
        )
    }

    /// Find a podcast by 1-based catalog index or case-insensitive title.
    pub fn find_podcast(&self, key: &str) -> Result<Arc<Podcast>> {
        let by_index = key
            .parse::<usize>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.podcasts.get(i));

        by_index
            .or_else(|| {
                self.podcasts
                    .iter()
                    .find(|p| p.title.eq_ignore_ascii_case(key.trim()))
            })
            .cloned()
            .ok_or_else(|| NewsdeskError::PodcastNotFound(key.to_string()))
    }

    pub fn episode_loader(&self, podcast: Arc<Podcast>) -> EpisodeLoader {
        EpisodeLoader::new(self.fetcher.clone(), self.parser.clone(), podcast, self.query())
    }
}
