use super::{attr, element_text, parse_selector};
use crate::domain::{GameSummary, SlugCodec};
use crate::error::Result;
use scraper::{ElementRef, Html, Selector};

/// Parses listing and search-result pages. Both render games with the same
/// `article.post-hentry` fragment.
pub struct ListingScraper {
    codec: SlugCodec,
    article: Selector,
    title_link: Selector,
    image: Selector,
    category: Selector,
    date: Selector,
}

impl ListingScraper {
    pub fn new(codec: SlugCodec) -> Result<Self> {
        Ok(Self {
            codec,
            article: parse_selector("article.post-hentry")?,
            title_link: parse_selector("h3.entry-title a")?,
            image: parse_selector(".entry-image")?,
            category: parse_selector(".entry-category")?,
            date: parse_selector("time.entry-date")?,
        })
    }

    pub fn extract_list(&self, html: &str) -> Vec<GameSummary> {
        let document = Html::parse_document(html);

        document
            .select(&self.article)
            .map(|article| self.extract_summary(article))
            .collect()
    }

    fn extract_summary(&self, article: ElementRef<'_>) -> GameSummary {
        let anchor = article.select(&self.title_link).next();
        let link = anchor.and_then(|a| attr(a, "href"));

        GameSummary {
            title: article
                .select(&self.title_link)
                .map(element_text)
                .collect::<String>()
                .trim()
                .to_string(),
            slug: self.codec.to_slug(link.as_deref()),
            link,
            image: article
                .select(&self.image)
                .next()
                .and_then(|img| attr(img, "src")),
            categories: article.select(&self.category).map(element_text).collect(),
            release_date: article
                .select(&self.date)
                .next()
                .and_then(|time| attr(time, "datetime")),
        }
    }
}
