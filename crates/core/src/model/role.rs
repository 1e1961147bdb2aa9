use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{ModuleId, RoleId, UnitId};
use crate::model::unit::Unit;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module id cannot be empty")]
    EmptyId,

    #[error("module {0} has an empty title")]
    EmptyTitle(ModuleId),

    #[error("module {0} has no units")]
    NoUnits(ModuleId),

    #[error("module {module} lists unit {unit} more than once")]
    DuplicateUnit { module: ModuleId, unit: UnitId },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoleError {
    #[error("role id cannot be empty")]
    EmptyId,

    #[error("role {0} has an empty title")]
    EmptyTitle(RoleId),

    #[error("role {role} has invalid accent color {color:?}")]
    InvalidColor { role: RoleId, color: String },

    #[error("role {role} lists module {module} more than once")]
    DuplicateModule { role: RoleId, module: ModuleId },
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// A named, ordered group of units within a role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    description: String,
    units: Vec<Unit>,
}

impl Module {
    /// Creates a module. A module must hold at least one unit so the unit
    /// cursor always has a valid position.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError` for blank ids/titles, an empty unit list, or a
    /// unit id repeated within the module.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        description: impl Into<String>,
        units: Vec<Unit>,
    ) -> Result<Self, ModuleError> {
        if id.as_str().trim().is_empty() {
            return Err(ModuleError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModuleError::EmptyTitle(id));
        }
        if units.is_empty() {
            return Err(ModuleError::NoUnits(id));
        }

        let mut seen = HashSet::with_capacity(units.len());
        for unit in &units {
            if !seen.insert(unit.id()) {
                return Err(ModuleError::DuplicateUnit {
                    module: id,
                    unit: unit.id().clone(),
                });
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            units,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.units.len().saturating_sub(1)
    }
}

//
// ─── ROLE ──────────────────────────────────────────────────────────────────────
//

/// Icon shown for roles that do not name one.
pub const DEFAULT_ROLE_ICON: &str = "star";

/// A top-level learning track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Role {
    id: RoleId,
    title: String,
    description: String,
    color: String,
    icon: String,
    modules: Vec<Module>,
}

impl Role {
    /// Creates a role. Roles may have no modules yet.
    ///
    /// # Errors
    ///
    /// Returns `RoleError` for blank ids/titles, a color that is not
    /// `#RRGGBB`, or a module id repeated within the role.
    pub fn new(
        id: RoleId,
        title: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        icon: Option<String>,
        modules: Vec<Module>,
    ) -> Result<Self, RoleError> {
        if id.as_str().trim().is_empty() {
            return Err(RoleError::EmptyId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RoleError::EmptyTitle(id));
        }
        let color = color.into();
        if !is_hex_color(&color) {
            return Err(RoleError::InvalidColor { role: id, color });
        }

        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if !seen.insert(module.id()) {
                return Err(RoleError::DuplicateModule {
                    role: id,
                    module: module.id().clone(),
                });
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            color,
            icon: icon
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ROLE_ICON.to_string()),
            modules,
        })
    }

    #[must_use]
    pub fn id(&self) -> &RoleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Accent color as `#RRGGBB`.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| module.id() == id)
    }

    #[must_use]
    pub fn total_units(&self) -> usize {
        self.modules.iter().map(Module::unit_count).sum()
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
