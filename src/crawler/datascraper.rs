use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
);

static HEADING_SELECTOR: OnceLock<Selector> = OnceLock::new();

/// Elements whose text never shows up on the rendered page.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Anything that can turn a URL into raw page text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Plain-text view of one fetched page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageText {
    pub text: String,
    pub headings: Vec<String>,
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        // Redirects are already followed by reqwest, so anything but 200 is a miss.
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}

/// Parses raw HTML into its visible text and its h1-h3 headings.
pub fn extract_page(html: &str) -> PageText {
    let document = Html::parse_document(html);
    PageText {
        text: extract_visible_text(&document),
        headings: extract_headings(&document),
    }
}

fn extract_visible_text(document: &Html) -> String {
    let visible = document.root_element().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .ancestors()
            .filter_map(|parent| parent.value().as_element())
            .any(|element| HIDDEN_ELEMENTS.contains(&element.name()));
        if hidden { None } else { Some(&**text) }
    });
    clean_text(visible)
}

fn extract_headings(document: &Html) -> Vec<String> {
    let selector = HEADING_SELECTOR.get_or_init(|| Selector::parse("h1, h2, h3").unwrap());
    document
        .select(selector)
        .map(|heading| clean_text(heading.text()))
        .filter(|heading| !heading.is_empty())
        .collect()
}

fn clean_text<'a>(text_iter: impl Iterator<Item = &'a str>) -> String {
    let mut buffer = String::with_capacity(1024);
    let mut first = true;
    for part in text_iter {
        let trimmed = part.trim();
        if !trimmed.is_empty() {
            if !first { buffer.push(' '); }
            buffer.push_str(trimmed);
            first = false;
        }
    }
    buffer
}
