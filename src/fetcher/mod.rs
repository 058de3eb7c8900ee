pub mod http_fetcher;

pub use http_fetcher::{CatIndicesFetcher, build_catalog_url};
