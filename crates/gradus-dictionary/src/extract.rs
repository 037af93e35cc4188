use scraper::{Html, Selector};

/// Structural text extraction from a fetched page.
///
/// The query language is implementation-defined; `CssExtractor` takes CSS
/// selectors. Fragments keep document order.
pub trait ExtractText: Send + Sync {
    fn extract(&self, page: &str, query: &str) -> Vec<String>;
}

/// scraper-backed extractor returning the collected text of every element
/// the selector matches.
pub struct CssExtractor;

impl ExtractText for CssExtractor {
    fn extract(&self, page: &str, query: &str) -> Vec<String> {
        let selector = match Selector::parse(query) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::error!("invalid extraction selector {:?}: {}", query, e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(page);
        document
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}
