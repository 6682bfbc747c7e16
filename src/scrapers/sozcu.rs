//! Scraper for [Sözcü](https://www.sozcu.com.tr), a Turkish daily news site.
//!
//! # Front Page
//!
//! Headlines sit in `div.news-card` elements. Most cards carry both the
//! title and the article link in a footer anchor; image-led cards have only
//! an `a.img-holder` anchor, whose `img` `alt` text stands in for the title.
//! Cards also link section, tag, and multimedia pages, which are filtered
//! out by URL shape.
//!
//! # Article Pages
//!
//! The lede is an `h2` summary heading; the body is the paragraphs of
//! `div.article-body`, interleaved with ad scripts and related-article
//! teasers that must be skipped.

use itertools::Itertools;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::ScrapeConfig;
use crate::dom::{Node, Page};
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::models::ArticleRecord;
use crate::utils::truncate_for_log;

/// Label stored in the `source` field of every record.
pub const SOURCE: &str = "sozcu.com.tr";

/// Substring an absolute URL must contain to count as on-site.
const DOMAIN_MARKER: &str = "sozcu.com.tr/";

const CARD_CLASS: &str = "news-card";
const CARD_FOOTER_LINK_CLASS: &str = "news-card-footer";
const CARD_IMAGE_LINK_CLASS: &str = "img-holder";
const SUMMARY_CLASS: &str = "description.mb-4.fw-medium.fs-5.lh-base";
const BODY_CLASS: &str = "article-body";

/// Heading text of the related-articles block embedded in article bodies.
const RELATED_CONTENT_MARKER: &str = "İLGİNİZİ ÇEKEBİLİR";

/// URL fragments of section, tag, and multimedia pages, plus inert script
/// links; none of these lead to an article.
const EXCLUDED_PATH_SEGMENTS: [&str; 7] = [
    "/kategori/",
    "/yazarlar/",
    "/etiket/",
    "/foto-analiz/",
    "/foto-galeri/",
    "/video/",
    "javascript:void(0)",
];

/// A headline discovered on the front page.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub url: String,
}

/// Scrape the front page and every article it links, one page at a time.
///
/// Returns one record per unique headline, in discovery order. Articles
/// whose fetch fails, and articles past the configured fetch limit, keep the
/// missing-content placeholder instead of text.
#[instrument(level = "info", skip_all)]
pub async fn scrape_front_page(
    fetcher: &PageFetcher,
    config: &ScrapeConfig,
) -> Result<Vec<ArticleRecord>> {
    let base_url = Url::parse(&config.homepage_url)?;

    info!(url = %config.homepage_url, "Fetching front page");
    let html = fetcher.fetch_text(&config.homepage_url).await?;

    let headlines = extract_headlines(&html, &base_url)?;
    info!(count = headlines.len(), source = SOURCE, "Indexed front page headlines");
    debug!(headlines = ?headlines, "Headline candidates");

    Ok(collect_articles(fetcher, config, headlines).await)
}

/// Extract candidate headlines from front page markup.
///
/// Walks every news card, keeps the first headline seen for each URL, and
/// drops links that do not lead to an article page.
pub fn extract_headlines(html: &str, base_url: &Url) -> Result<Vec<Headline>> {
    let page = Page::parse(html);
    let cards = page.by_class("div", CARD_CLASS)?;
    if cards.is_empty() {
        warn!("No news cards found on the front page; the markup may have changed");
    } else {
        info!(count = cards.len(), "Found news cards");
    }

    let mut candidates = Vec::new();
    for card in cards {
        match headline_from_card(card, base_url) {
            Ok(Some(headline)) => candidates.push(headline),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Skipping malformed news card"),
        }
    }

    Ok(candidates
        .into_iter()
        .filter(|headline| is_article_url(&headline.url))
        .unique_by(|headline| headline.url.clone())
        .collect())
}

/// Pull the title and absolute URL out of a single news card.
///
/// The footer anchor carries both when present; the image anchor is only
/// consulted when no footer anchor has an `href`. Cards without a usable
/// link or a non-empty title yield nothing.
fn headline_from_card(card: Node<'_>, base_url: &Url) -> Result<Option<Headline>> {
    let (href, title) = match link_with_href(&card, CARD_FOOTER_LINK_CLASS)? {
        Some((link, href)) => (href, link.text()),
        None => match link_with_href(&card, CARD_IMAGE_LINK_CLASS)? {
            Some((link, href)) => (href, image_title(&link)?),
            None => return Ok(None),
        },
    };

    if title.is_empty() || href.is_empty() {
        return Ok(None);
    }
    match base_url.join(href) {
        Ok(resolved) => Ok(Some(Headline {
            title,
            url: resolved.to_string(),
        })),
        Err(_) => Ok(None),
    }
}

/// First anchor of the given class that actually carries an `href`.
fn link_with_href<'a>(card: &Node<'a>, class: &str) -> Result<Option<(Node<'a>, &'a str)>> {
    let links = card.by_class("a", class)?;
    Ok(links
        .into_iter()
        .find_map(|link| link.attr("href").map(|href| (link, href))))
}

/// Title for image-led cards: the `alt` text of the first image carrying the
/// attribute.
fn image_title(link: &Node<'_>) -> Result<String> {
    let images = link.by_tag("img")?;
    let title = images
        .into_iter()
        .find_map(|image| image.attr("alt"))
        .unwrap_or_default();
    Ok(title.trim().to_string())
}

/// Whether an absolute URL points at an article page on the site.
fn is_article_url(url: &str) -> bool {
    url.contains(DOMAIN_MARKER)
        && !url.starts_with("https://bit.ly")
        && !EXCLUDED_PATH_SEGMENTS
            .iter()
            .any(|segment| url.contains(segment))
}

/// Fetch article content for each headline in order, one page at a time.
///
/// Fetch and extraction failures downgrade to placeholder content. Once the
/// number of successful extractions reaches the configured limit, remaining
/// articles are recorded without fetching.
async fn collect_articles(
    fetcher: &PageFetcher,
    config: &ScrapeConfig,
    headlines: Vec<Headline>,
) -> Vec<ArticleRecord> {
    let mut records = Vec::with_capacity(headlines.len());
    let mut fetched = 0usize;
    let mut limit_logged = false;

    for headline in headlines {
        info!(
            number = records.len() + 1,
            title = %truncate_for_log(&headline.title, 60),
            url = %headline.url,
            "Processing headline"
        );

        let content = match config.content_fetch_limit {
            Some(limit) if fetched >= limit => {
                if !limit_logged {
                    info!(
                        limit,
                        "Content fetch limit reached; remaining articles keep placeholder content"
                    );
                    limit_logged = true;
                }
                String::new()
            }
            _ => {
                let text = fetch_article_content(fetcher, &headline.url).await;
                if !text.is_empty() {
                    fetched += 1;
                }
                text
            }
        };

        records.push(ArticleRecord::new(
            headline.title,
            headline.url,
            content,
            SOURCE,
        ));
    }

    info!(count = records.len(), fetched, "Fetched article contents");
    records
}

/// Fetch one article page and extract its text. Failures degrade to an
/// empty string so one broken article never aborts the run.
#[instrument(level = "info", skip_all, fields(%url))]
async fn fetch_article_content(fetcher: &PageFetcher, url: &str) -> String {
    match fetcher.fetch_text(url).await {
        Ok(html) => match extract_article_content(&html) {
            Ok(content) => {
                debug!(bytes = content.len(), "Parsed article body");
                content
            }
            Err(e) => {
                warn!(error = %e, "Failed to extract article content");
                String::new()
            }
        },
        Err(e) => {
            warn!(error = %e, "Failed to fetch article page");
            String::new()
        }
    }
}

/// Extract the readable text of an article page: the summary heading first,
/// then every body paragraph, joined by blank lines.
pub fn extract_article_content(html: &str) -> Result<String> {
    let page = Page::parse(html);
    let mut segments = Vec::new();

    if let Some(summary) = page.first_by_class("h2", SUMMARY_CLASS)? {
        let text = summary.text();
        if !text.is_empty() {
            segments.push(text);
        }
    }

    segments.extend(body_paragraphs(&page)?);
    Ok(segments.join("\n\n"))
}

/// Body paragraphs in document order, skipping empty ones, paragraphs with
/// embedded scripts, and related-article teasers.
fn body_paragraphs(page: &Page) -> Result<Vec<String>> {
    let Some(body) = page.first_by_class("div", BODY_CLASS)? else {
        warn!("Article body container not found");
        return Ok(Vec::new());
    };

    let mut paragraphs = Vec::new();
    for paragraph in body.by_tag("p")? {
        if paragraph.has_descendant("script")? {
            continue;
        }
        let text = paragraph.text();
        if text.is_empty() || text.to_uppercase().contains(RELATED_CONTENT_MARKER) {
            continue;
        }
        paragraphs.push(text);
    }
    Ok(paragraphs)
}
