use crate::domain::purge::handlers;
use crate::domain::purge::{Command, Event, PurgeNextecomProductCommand};

use super::errors::DispatchError;

// ============================================================================
// Command Handler Registry
// ============================================================================
//
// Routes: Command → registered handler → Events
//
// Every Command variant needs an arm below. A variant without a handler gets
// an explicit UnsupportedMessage arm, so new variants fail to compile until
// someone decides which one it is.
//
// ============================================================================

pub type HandleCommand<C> = Box<dyn Fn(&C) -> Vec<Event> + Send + Sync>;

pub struct CommandHandler {
    purge_nextecom_product: HandleCommand<PurgeNextecomProductCommand>,
}

impl CommandHandler {
    pub fn new<F>(purge_nextecom_product: F) -> Self
    where
        F: Fn(&PurgeNextecomProductCommand) -> Vec<Event> + Send + Sync + 'static,
    {
        Self {
            purge_nextecom_product: Box::new(purge_nextecom_product),
        }
    }

    /// Dispatch a command to its handler and return the events it produced
    pub fn handle(&self, command: &Command) -> Result<Vec<Event>, DispatchError> {
        match command {
            Command::PurgeNextecomProduct(c) => Ok((self.purge_nextecom_product)(c)),
            Command::PurgeCmsPage(_) => Err(DispatchError::unsupported(command)),
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new(handlers::purge_nextecom_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purge::{CmsPageEvent, PurgeCmsPageCommand};

    #[test]
    fn test_purge_product_yields_no_events() {
        let registry = CommandHandler::default();
        let events = registry
            .handle(&PurgeNextecomProductCommand::new("x", "y").into())
            .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_injected_handler_output_is_returned_in_order() {
        let registry = CommandHandler::new(|c| {
            vec![
                CmsPageEvent::new(format!("{}-1", c.product_id)).into(),
                CmsPageEvent::new(format!("{}-2", c.product_id)).into(),
            ]
        });

        let events = registry
            .handle(&PurgeNextecomProductCommand::new("sku", "chain").into())
            .unwrap();

        assert_eq!(
            events,
            vec![
                Event::from(CmsPageEvent::new("sku-1")),
                Event::from(CmsPageEvent::new("sku-2")),
            ]
        );
    }

    #[test]
    fn test_unregistered_command_is_unsupported() {
        let registry = CommandHandler::default();
        let result = registry.handle(&PurgeCmsPageCommand::new("sku").into());
        assert!(matches!(
            result,
            Err(DispatchError::UnsupportedMessage(ref text)) if text == "PurgeCmsPageCommand { url = sku }"
        ));
    }
}
