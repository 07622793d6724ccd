pub const DEFAULT_BASE_URL: &str = "https://game3rb.com/";

/// Maps absolute detail-page URLs to the relative slug that names a game,
/// and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCodec {
    base: String,
}

impl Default for SlugCodec {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SlugCodec {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Strips the base prefix and a single trailing `/`. A missing link
    /// gives an empty slug.
    pub fn to_slug(&self, url: Option<&str>) -> String {
        let Some(url) = url else {
            return String::new();
        };

        let path = url.strip_prefix(self.base.as_str()).unwrap_or(url);
        path.strip_suffix('/').unwrap_or(path).to_string()
    }

    /// Inverse of [`SlugCodec::to_slug`]. Accepts a bare slug or one that
    /// still carries the base, so the result is never double-prefixed.
    pub fn to_detail_url(&self, slug: &str) -> String {
        let bare = self.normalize(slug);
        if bare.is_empty() {
            return self.base.clone();
        }
        format!("{}{}/", self.base, bare)
    }

    fn normalize<'a>(&self, slug: &'a str) -> &'a str {
        let slug = slug.trim();
        let slug = slug.strip_prefix(self.base.as_str()).unwrap_or(slug);
        slug.trim_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_base_and_trailing_slash() {
        let codec = SlugCodec::default();
        assert_eq!(
            codec.to_slug(Some("https://game3rb.com/elden-ring-pc/")),
            "elden-ring-pc"
        );
        assert_eq!(
            codec.to_slug(Some("https://game3rb.com/elden-ring-pc")),
            "elden-ring-pc"
        );
    }

    #[test]
    fn only_one_trailing_slash_is_removed() {
        let codec = SlugCodec::default();
        assert_eq!(codec.to_slug(Some("https://game3rb.com/a//")), "a/");
    }

    #[test]
    fn missing_link_gives_empty_slug() {
        assert_eq!(SlugCodec::default().to_slug(None), "");
    }

    #[test]
    fn foreign_urls_keep_their_path() {
        let codec = SlugCodec::default();
        assert_eq!(
            codec.to_slug(Some("https://other.example/game/")),
            "https://other.example/game"
        );
    }

    #[test]
    fn detail_url_round_trips() {
        let codec = SlugCodec::default();
        for url in [
            "https://game3rb.com/hollow-knight-pc/",
            "https://game3rb.com/the-witcher-3-wild-hunt-complete-edition/",
        ] {
            assert_eq!(codec.to_detail_url(&codec.to_slug(Some(url))), url);
        }
    }

    #[test]
    fn detail_url_never_double_prefixes() {
        let codec = SlugCodec::default();
        let expected = "https://game3rb.com/celeste-pc/";
        assert_eq!(codec.to_detail_url("celeste-pc"), expected);
        assert_eq!(codec.to_detail_url("/celeste-pc/"), expected);
        assert_eq!(codec.to_detail_url(expected), expected);
        let url = codec.to_detail_url(expected);
        assert_eq!(codec.to_slug(Some(url.as_str())), "celeste-pc");
    }

    #[test]
    fn base_without_trailing_slash_is_normalized() {
        let codec = SlugCodec::new("http://127.0.0.1:8080");
        assert_eq!(codec.base(), "http://127.0.0.1:8080/");
        assert_eq!(
            codec.to_detail_url("stray-pc"),
            "http://127.0.0.1:8080/stray-pc/"
        );
    }
}
