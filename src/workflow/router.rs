use crate::domain::purge::Message;

/// Formats a batch of messages for the output sink.
pub type Route = fn(&[Message]) -> String;

/// One line per message, in order. An empty batch renders as "".
pub fn route(messages: &[Message]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purge::{
        CmsPageEvent, Command, Event, PurgeCmsPageCommand, PurgeNextecomProductCommand,
    };

    #[test]
    fn test_empty_batch_renders_empty() {
        assert_eq!(route(&[]), "");
    }

    #[test]
    fn test_single_message_has_no_separator() {
        let m = Message::from(Command::from(PurgeCmsPageCommand::new("sku")));
        assert_eq!(route(&[m.clone()]), m.to_string());
    }

    #[test]
    fn test_messages_joined_by_newline_in_order() {
        let m1 = Message::from(Command::from(PurgeNextecomProductCommand::new("x", "y")));
        let m2 = Message::from(Event::from(CmsPageEvent::new("/home")));

        assert_eq!(
            route(&[m1.clone(), m2.clone()]),
            format!("{}\n{}", m1, m2)
        );
        assert_eq!(
            route(&[m2.clone(), m1.clone()]),
            format!("{}\n{}", m2, m1)
        );
    }
}
