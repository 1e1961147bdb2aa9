mod ids;
mod role;
mod unit;

pub use ids::{ModuleId, RoleId, UnitId};

pub use role::{DEFAULT_ROLE_ICON, Module, ModuleError, Role, RoleError};
pub use unit::{QaPair, Quiz, Unit, UnitError, UnitKind};
