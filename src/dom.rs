//! Thin query layer over the HTML parser.
//!
//! Extraction code asks for elements by tag and class instead of handling
//! selector syntax directly. Invalid selector input is the only failure here
//! and surfaces as [`ScrapeError::StructuralMismatch`].

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// Build a compound `tag.class` selector. `class` may itself be a
/// dot-separated list when the element is styled with several classes.
fn compound_selector(tag: &str, class: &str) -> Result<Selector> {
    let css = format!("{tag}.{class}");
    Selector::parse(&css)
        .map_err(|e| ScrapeError::StructuralMismatch(format!("bad selector `{css}`: {e}")))
}

fn tag_selector(tag: &str) -> Result<Selector> {
    Selector::parse(tag)
        .map_err(|e| ScrapeError::StructuralMismatch(format!("bad selector `{tag}`: {e}")))
}

/// A parsed HTML page.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parse an HTML document. The parser recovers from malformed markup, so
    /// this always yields a page; missing elements show up as empty queries.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements with the given tag and class, in document order.
    pub fn by_class(&self, tag: &str, class: &str) -> Result<Vec<Node<'_>>> {
        let selector = compound_selector(tag, class)?;
        Ok(self.document.select(&selector).map(Node::new).collect())
    }

    /// The first element with the given tag and class, if any.
    pub fn first_by_class(&self, tag: &str, class: &str) -> Result<Option<Node<'_>>> {
        let selector = compound_selector(tag, class)?;
        Ok(self.document.select(&selector).next().map(Node::new))
    }
}

/// An element within a [`Page`]. Queries search the element's descendants.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Descendant elements with the given tag and class, in document order.
    pub fn by_class(&self, tag: &str, class: &str) -> Result<Vec<Node<'a>>> {
        let selector = compound_selector(tag, class)?;
        Ok(self.element.select(&selector).map(Node::new).collect())
    }

    /// Descendant elements with the given tag, in document order.
    pub fn by_tag(&self, tag: &str) -> Result<Vec<Node<'a>>> {
        let selector = tag_selector(tag)?;
        Ok(self.element.select(&selector).map(Node::new).collect())
    }

    /// Whether any descendant with the given tag exists.
    pub fn has_descendant(&self, tag: &str) -> Result<bool> {
        let selector = tag_selector(tag)?;
        Ok(self.element.select(&selector).next().is_some())
    }

    /// The element's text content with surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Value of an attribute on this element.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}
