use crate::domain::purge::{Command, Event, Message};

use super::command_handler::CommandHandler;
use super::errors::DispatchError;
use super::event_handler::EventHandler;

/// Single entry point over both registries. Holds no state of its own.
pub struct Workflow {
    command_handler: CommandHandler,
    event_handler: EventHandler,
}

impl Workflow {
    pub fn new(command_handler: CommandHandler, event_handler: EventHandler) -> Self {
        Self {
            command_handler,
            event_handler,
        }
    }

    pub fn handle_command(&self, command: &Command) -> Result<Vec<Event>, DispatchError> {
        self.command_handler.handle(command)
    }

    pub fn handle_event(&self, event: &Event) -> Result<Vec<Command>, DispatchError> {
        self.event_handler.handle(event)
    }

    /// Dispatch any message and return what it produced, in handler order
    pub fn handle(&self, message: &Message) -> Result<Vec<Message>, DispatchError> {
        let produced = match message {
            Message::Command(c) => self
                .handle_command(c)?
                .into_iter()
                .map(Message::from)
                .collect(),
            Message::Event(e) => self
                .handle_event(e)?
                .into_iter()
                .map(Message::from)
                .collect(),
        };
        Ok(produced)
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new(CommandHandler::default(), EventHandler::default())
    }
}
