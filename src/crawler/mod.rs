use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod datascraper;
pub use datascraper::{FetchError, HttpFetcher, PageFetcher, PageText, extract_page};

/// Everything gathered from one pass over the sources.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CrawlData {
    /// Number of sources that answered with a page.
    pub pages: usize,
    /// Visible text of every page, joined by a single space.
    pub text: String,
    /// h1-h3 headings of every page, in document order.
    pub headings: Vec<String>,
}

impl CrawlData {
    fn absorb(&mut self, page: PageText) {
        if !page.text.is_empty() {
            if !self.text.is_empty() { self.text.push(' '); }
            self.text.push_str(&page.text);
        }
        self.headings.extend(page.headings);
        self.pages += 1;
    }
}

/// Walks a fixed list of source pages, one after the other.
#[derive(Clone)]
pub struct Crawler {
    fetcher: Arc<dyn PageFetcher>,
    sources: Vec<String>,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn PageFetcher>, sources: Vec<String>) -> Self {
        Self { fetcher, sources }
    }

    /// Fetches every source. A source that fails is skipped, never fatal.
    pub async fn crawl(&self) -> CrawlData {
        let mut data = CrawlData::default();

        for url in &self.sources {
            debug!(%url, "fetching source");
            match self.fetcher.fetch(url).await {
                Ok(html) => {
                    let page = extract_page(&html);
                    info!(%url, headings = page.headings.len(), "scraped source");
                    data.absorb(page);
                }
                Err(e) => warn!(%url, error = %e, "skipping source"),
            }
        }

        data
    }
}
