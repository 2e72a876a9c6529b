use crate::domain::purge::handlers;
use crate::domain::purge::{CmsPageEvent, Command, Event, ProductChangedEvent};

use super::errors::DispatchError;

// ============================================================================
// Event Handler Registry
// ============================================================================
//
// Routes: Event → registered handler → Commands
//
// ============================================================================

pub type HandleEvent<E> = Box<dyn Fn(&E) -> Vec<Command> + Send + Sync>;

pub struct EventHandler {
    product_changed: HandleEvent<ProductChangedEvent>,
    cms_page: HandleEvent<CmsPageEvent>,
}

impl EventHandler {
    pub fn new<P, C>(product_changed: P, cms_page: C) -> Self
    where
        P: Fn(&ProductChangedEvent) -> Vec<Command> + Send + Sync + 'static,
        C: Fn(&CmsPageEvent) -> Vec<Command> + Send + Sync + 'static,
    {
        Self {
            product_changed: Box::new(product_changed),
            cms_page: Box::new(cms_page),
        }
    }

    pub fn handle(&self, event: &Event) -> Result<Vec<Command>, DispatchError> {
        match event {
            Event::ProductChanged(e) => Ok((self.product_changed)(e)),
            Event::CmsPage(e) => Ok((self.cms_page)(e)),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(handlers::on_product_changed, handlers::on_cms_page)
    }
}
