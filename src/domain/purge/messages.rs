use serde::Serialize;
use std::fmt;

use super::commands::Command;
use super::events::Event;

/// Anything the workflow can accept or emit: a command or an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum Message {
    Command(Command),
    Event(Event),
}

impl Message {
    /// "command" or "event"
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Command(_) => "command",
            Message::Event(_) => "event",
        }
    }

    pub fn message_type(&self) -> &'static str {
        match self {
            Message::Command(c) => c.message_type(),
            Message::Event(e) => e.message_type(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Command(c) => fmt::Display::fmt(c, f),
            Message::Event(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        Message::Command(command)
    }
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Message::Event(event)
    }
}
