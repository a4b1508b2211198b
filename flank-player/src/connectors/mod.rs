//! Connectors let people (or scripts) play through different interfaces.

mod connector;
mod scripted;
mod terminal;

pub use connector::{parse_confirmation, parse_coordinate, seat_label, Axis, Connector};
pub use scripted::ScriptedConnector;
pub use terminal::TerminalConnector;
