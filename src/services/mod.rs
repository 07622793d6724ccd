pub(crate) mod catalog;

pub use catalog::CatalogService;
