mod event;
mod screen;
mod session;

// Public API of the portal subsystem.
pub use crate::error::PortalError;
pub use event::{Notice, PortalEvent};
pub use screen::{Screen, SidebarEntry, UnitScreen};
pub use session::PortalSession;
