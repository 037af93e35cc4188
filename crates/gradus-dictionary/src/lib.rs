pub mod extract;
pub mod fetch;
pub mod resolver;

pub use extract::{CssExtractor, ExtractText};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use resolver::PageResolver;
