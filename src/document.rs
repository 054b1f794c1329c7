use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// A parsed HTML page that can be queried with CSS selectors.
pub struct Document {
    url: String,
    html: Html,
}

/// One element matched by [`Document::query`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    /// `url` is only kept for error context.
    pub fn parse(url: &str, body: &str) -> Result<Document, ScrapeError> {
        if body.trim().is_empty() {
            return Err(ScrapeError::ParseDocument {
                url: url.to_string(),
                reason: "empty document".to_string(),
            });
        }
        let html = Html::parse_document(body);
        if !html.errors.is_empty() {
            log::debug!("{} html parse errors on {url}", html.errors.len());
        }
        Ok(Document {
            url: url.to_string(),
            html,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// All elements matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Result<Vec<Node<'_>>, ScrapeError> {
        let selector = Selector::parse(selector).map_err(|e| ScrapeError::ParseDocument {
            url: self.url.clone(),
            reason: format!("invalid selector {selector:?}: {e}"),
        })?;
        Ok(self
            .html
            .select(&selector)
            .map(|element| Node { element })
            .collect())
    }

    pub fn query_first(&self, selector: &str) -> Result<Option<Node<'_>>, ScrapeError> {
        Ok(self.query(selector)?.into_iter().next())
    }
}

impl<'a> Node<'a> {
    /// Concatenated text of the element and all its descendants, untrimmed.
    pub fn text_content(&self) -> String {
        self.element.text().collect::<String>()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="body-content">
            <a title="One" href="/one"> First <b>App</b> </a>
            <a href="/untitled">skip me</a>
            <a title="Two" href="/two">Second</a>
          </div>
          <a title="Outside" href="/outside">Outside</a>
        </body></html>
    "#;

    #[test]
    fn test_empty_body_is_parse_error() {
        let err = Document::parse("https://x", "  \n ").err().unwrap();
        assert!(matches!(err, ScrapeError::ParseDocument { .. }));
    }

    #[test]
    fn test_query_scoped_to_container() {
        let doc = Document::parse("https://x", PAGE).unwrap();
        let nodes = doc.query("div#body-content a[title]").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text_content(), " First App ");
        assert_eq!(nodes[0].attribute("href"), Some("/one"));
        assert_eq!(nodes[1].attribute("title"), Some("Two"));
        assert_eq!(nodes[1].attribute("data-missing"), None);
    }

    #[test]
    fn test_query_first_none_when_absent() {
        let doc = Document::parse("https://x", PAGE).unwrap();
        assert!(doc.query_first("span.nothing").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector_is_parse_error() {
        let doc = Document::parse("https://x", PAGE).unwrap();
        let err = doc.query("div[[").err().unwrap();
        assert!(matches!(err, ScrapeError::ParseDocument { url, .. } if url == "https://x"));
    }
}
