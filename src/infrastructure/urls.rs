use crate::domain::SlugCodec;
use crate::error::Result;
use url::Url;

/// Builds the source-site URLs for listing, search and detail pages.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
    codec: SlugCodec,
}

impl UrlBuilder {
    /// The base is canonicalized once (lowercased host, default port
    /// dropped) and every builder and the slug codec work from that form.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(SlugCodec::new(base).base())?;
        let codec = SlugCodec::new(base.as_str());
        Ok(Self { base, codec })
    }

    pub fn codec(&self) -> &SlugCodec {
        &self.codec
    }

    pub fn listing_url(&self, page: u32) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_path(&format!("{}page/{}/", self.base.path(), page.max(1)));
        url.into()
    }

    pub fn search_url(&self, query: &str, page: u32) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("s", query)
            .append_pair("paged", &page.max(1).to_string());
        url.into()
    }

    pub fn detail_url(&self, slug: &str) -> String {
        self.codec.to_detail_url(slug)
    }
}

/// Lenient page parsing: anything missing, non-numeric or below one means
/// the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map(|page| u32::try_from(page).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_BASE_URL;

    fn builder() -> UrlBuilder {
        UrlBuilder::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn listing_url_embeds_page() {
        assert_eq!(builder().listing_url(3), "https://game3rb.com/page/3/");
        assert_eq!(builder().listing_url(0), "https://game3rb.com/page/1/");
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            builder().search_url("elden ring & co", 2),
            "https://game3rb.com/?s=elden+ring+%26+co&paged=2"
        );
    }

    #[test]
    fn detail_url_uses_codec() {
        assert_eq!(
            builder().detail_url("hades-pc"),
            "https://game3rb.com/hades-pc/"
        );
    }

    #[test]
    fn every_url_shares_the_canonical_base() {
        let builder = UrlBuilder::new("HTTPS://Game3RB.com:443").unwrap();

        assert_eq!(builder.listing_url(2), "https://game3rb.com/page/2/");
        assert_eq!(
            builder.search_url("hades", 2),
            "https://game3rb.com/?s=hades&paged=2"
        );
        assert_eq!(builder.detail_url("hades-pc"), "https://game3rb.com/hades-pc/");
        assert_eq!(
            builder.codec().to_slug(Some("https://game3rb.com/hades-pc/")),
            "hades-pc"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let builder = UrlBuilder::new("http://127.0.0.1:8080/mirror/").unwrap();

        assert_eq!(
            builder.listing_url(4),
            "http://127.0.0.1:8080/mirror/page/4/"
        );
        assert_eq!(
            builder.search_url("celeste", 1),
            "http://127.0.0.1:8080/mirror/?s=celeste&paged=1"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(UrlBuilder::new("not a url").is_err());
    }

    #[test]
    fn page_parsing_falls_back_to_first_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-4")), 1);
        assert_eq!(parse_page(Some("7")), 7);
        assert_eq!(parse_page(Some(" 12 ")), 12);
    }
}
