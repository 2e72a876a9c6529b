use super::commands::{Command, PurgeCmsPageCommand, PurgeNextecomProductCommand};
use super::events::{CmsPageEvent, Event, ProductChangedEvent};

// ============================================================================
// Purge Handlers - the functions wired into the registries at startup
// ============================================================================
//
// Each handler logs what it is doing, then returns the messages it derives.
// The returned values never depend on the logging.
//
// ============================================================================

/// Purge a product page from the storefront cache. Emits no follow-up events.
pub fn purge_nextecom_product(command: &PurgeNextecomProductCommand) -> Vec<Event> {
    tracing::info!(
        "Purging product {} from {}",
        command.product_id,
        command.operating_chain
    );
    Vec::new()
}

pub fn on_product_changed(event: &ProductChangedEvent) -> Vec<Command> {
    tracing::info!(
        "Handling product changed event {} from {}",
        event.product_id,
        event.operating_chain
    );
    vec![PurgeNextecomProductCommand::new(event.product_id.clone(), event.operating_chain.clone()).into()]
}

pub fn on_cms_page(event: &CmsPageEvent) -> Vec<Command> {
    tracing::info!("Handling CMS page event {}", event.url);
    vec![PurgeCmsPageCommand::new(event.url.clone()).into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_product_emits_nothing() {
        let events = purge_nextecom_product(&PurgeNextecomProductCommand::new("sku", "chain"));
        assert!(events.is_empty());
    }

    #[test]
    fn test_product_changed_maps_to_purge_product() {
        let commands = on_product_changed(&ProductChangedEvent::new("sku", "operatingchain"));
        assert_eq!(
            commands,
            vec![Command::PurgeNextecomProduct(PurgeNextecomProductCommand::new(
                "sku",
                "operatingchain"
            ))]
        );
    }

    #[test]
    fn test_cms_page_maps_to_purge_page() {
        let commands = on_cms_page(&CmsPageEvent::new("/landing"));
        assert_eq!(
            commands,
            vec![Command::PurgeCmsPage(PurgeCmsPageCommand::new("/landing"))]
        );
    }
}
