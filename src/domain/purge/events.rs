use serde::Serialize;
use std::fmt;

// ============================================================================
// Purge Events - Facts reported by upstream systems
// ============================================================================

/// Purge Event - Union type for all events the purge workflow understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ProductChanged(ProductChangedEvent),
    CmsPage(CmsPageEvent),
}

impl Event {
    pub fn message_type(&self) -> &'static str {
        match self {
            Event::ProductChanged(_) => "ProductChangedEvent",
            Event::CmsPage(_) => "CmsPageEvent",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ProductChanged(e) => fmt::Display::fmt(e, f),
            Event::CmsPage(e) => fmt::Display::fmt(e, f),
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Product Changed - a product was modified in an operating chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductChangedEvent {
    pub product_id: String,
    pub operating_chain: String,
}

impl ProductChangedEvent {
    pub fn new(product_id: impl Into<String>, operating_chain: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            operating_chain: operating_chain.into(),
        }
    }
}

impl fmt::Display for ProductChangedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProductChangedEvent {{ productId = {}, operatingChain = {} }}",
            self.product_id, self.operating_chain
        )
    }
}

impl From<ProductChangedEvent> for Event {
    fn from(event: ProductChangedEvent) -> Self {
        Event::ProductChanged(event)
    }
}

/// CMS Page - a CMS page was published or edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmsPageEvent {
    pub url: String,
}

impl CmsPageEvent {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl fmt::Display for CmsPageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CmsPageEvent {{ url = {} }}", self.url)
    }
}

impl From<CmsPageEvent> for Event {
    fn from(event: CmsPageEvent) -> Self {
        Event::CmsPage(event)
    }
}
