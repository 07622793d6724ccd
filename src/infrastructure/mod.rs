mod clients;
mod scrapers;
mod urls;

pub use clients::fetcher::{HttpFetcher, PageFetcher};
pub use scrapers::{detail::DetailScraper, listing::ListingScraper};
pub use urls::{parse_page, UrlBuilder};
