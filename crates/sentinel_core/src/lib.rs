//! Sentinel core: pure page-controller state machine and view-model helpers.
mod effect;
mod location;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use location::PageLocation;
pub use msg::Msg;
pub use state::{ControllerState, Phase, RouteSettings};
pub use update::{update, ENTRY_FAULT_MESSAGE, NOTIFICATION_TITLE, NO_CONNECTION_MESSAGE};
pub use view_model::ControllerView;
