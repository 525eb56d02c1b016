pub mod build_fetch_url;
pub mod download_image;
pub mod select_search_term;

pub use build_fetch_url::build_fetch_url;
pub use download_image::{download_image, FetchError, HttpFetcher, ImageFetcher};
pub use select_search_term::select_search_term;
