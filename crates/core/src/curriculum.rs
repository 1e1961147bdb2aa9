//! The static course catalogue: roles → modules → units.
//!
//! The built-in catalogue ships as JSON embedded in the binary and is
//! validated once when loaded. After that it is read-only and shared.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    Module, ModuleError, ModuleId, QaPair, Quiz, Role, RoleError, RoleId, Unit, UnitError,
    UnitId, UnitKind,
};

const BUILTIN_CURRICULUM: &str = include_str!("../data/curriculum.json");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("curriculum is not valid JSON: {0}")]
    Parse(String),

    #[error("role {0} is defined more than once")]
    DuplicateRole(RoleId),

    #[error("unit {unit}: {source}")]
    Unit {
        unit: UnitId,
        #[source]
        source: UnitError,
    },

    #[error(transparent)]
    Module(#[from] ModuleError),

    #[error(transparent)]
    Role(#[from] RoleError),
}

/// Immutable catalogue shared by every view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curriculum {
    roles: Vec<Role>,
}

impl Curriculum {
    /// # Errors
    ///
    /// Returns `CurriculumError::DuplicateRole` if two roles share an id.
    pub fn new(roles: Vec<Role>) -> Result<Self, CurriculumError> {
        for (pos, role) in roles.iter().enumerate() {
            if roles[..pos].iter().any(|earlier| earlier.id() == role.id()) {
                return Err(CurriculumError::DuplicateRole(role.id().clone()));
            }
        }
        Ok(Self { roles })
    }

    /// Load the catalogue compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError` if the embedded data fails validation.
    pub fn builtin() -> Result<Self, CurriculumError> {
        Self::from_json(BUILTIN_CURRICULUM)
    }

    /// Parse and validate a catalogue in the embedded JSON layout.
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError::Parse` for malformed JSON and the
    /// validation variants for structurally invalid content.
    pub fn from_json(raw: &str) -> Result<Self, CurriculumError> {
        let document: RawCurriculum =
            serde_json::from_str(raw).map_err(|err| CurriculumError::Parse(err.to_string()))?;
        let roles = document
            .roles
            .into_iter()
            .map(RawRole::into_role)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(roles)
    }

    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    #[must_use]
    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|role| role.id() == id)
    }

    #[must_use]
    pub fn module(&self, role: &RoleId, module: &ModuleId) -> Option<&Module> {
        self.role(role)?.module(module)
    }

    #[must_use]
    pub fn unit(&self, role: &RoleId, module: &ModuleId, index: usize) -> Option<&Unit> {
        self.module(role, module)?.unit(index)
    }
}

//
// ─── JSON LAYOUT ───────────────────────────────────────────────────────────────
//

#[derive(Deserialize)]
struct RawCurriculum {
    roles: Vec<RawRole>,
}

#[derive(Deserialize)]
struct RawRole {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    color: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    modules: Vec<RawModule>,
}

#[derive(Deserialize)]
struct RawModule {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    units: Vec<RawUnit>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawUnitKind {
    Theory,
    Code,
}

#[derive(Deserialize)]
struct RawUnit {
    id: String,
    title: String,
    #[serde(rename = "type")]
    kind: RawUnitKind,
    #[serde(default)]
    content: String,
    #[serde(default)]
    mindmap: Option<String>,
    #[serde(default)]
    qa: Vec<RawQa>,
    #[serde(default)]
    quiz: Option<RawQuiz>,
}

#[derive(Deserialize)]
struct RawQa {
    q: String,
    a: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuiz {
    question: String,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    explanation: Option<String>,
}

impl RawRole {
    fn into_role(self) -> Result<Role, CurriculumError> {
        let modules = self
            .modules
            .into_iter()
            .map(RawModule::into_module)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Role::new(
            RoleId::new(self.id),
            self.title,
            self.description,
            self.color,
            self.icon,
            modules,
        )?)
    }
}

impl RawModule {
    fn into_module(self) -> Result<Module, CurriculumError> {
        let units = self
            .units
            .into_iter()
            .map(RawUnit::into_unit)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Module::new(
            ModuleId::new(self.id),
            self.title,
            self.description,
            units,
        )?)
    }
}

impl RawUnit {
    fn into_unit(self) -> Result<Unit, CurriculumError> {
        let id = UnitId::new(self.id);
        let at = |source: UnitError| CurriculumError::Unit {
            unit: id.clone(),
            source,
        };

        let kind = match self.kind {
            RawUnitKind::Theory => UnitKind::Theory,
            RawUnitKind::Code => UnitKind::Code,
        };
        let qa = self
            .qa
            .into_iter()
            .map(|pair| QaPair::new(pair.q, pair.a))
            .collect();

        let mut unit = Unit::new(id.clone(), self.title, kind, self.content)
            .map_err(at)?
            .with_qa(qa);
        if let Some(outline) = self.mindmap {
            unit = unit.with_mindmap(outline);
        }
        if let Some(raw) = self.quiz {
            let quiz = Quiz::new(raw.question, raw.options, raw.correct_answer, raw.explanation)
                .map_err(at)?;
            unit = unit.with_quiz(quiz);
        }
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_curriculum_loads() {
        let curriculum = Curriculum::builtin().expect("embedded curriculum is valid");
        let ids: Vec<&str> = curriculum.roles().iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["admin", "developer", "qa", "ba", "architect"]);

        let developer = curriculum.role(&RoleId::new("developer")).unwrap();
        assert_eq!(developer.icon(), "code");
        let module = developer.module(&ModuleId::new("dev-interview-1")).unwrap();
        assert_eq!(module.unit_count(), 2);
        let first = module.unit(0).unwrap();
        assert_eq!(first.quiz().map(Quiz::correct_index), Some(1));
        assert_eq!(first.qa().len(), 3);
        assert!(module.unit(1).unwrap().quiz().is_none());

        let modules: Vec<&str> = developer.modules().iter().map(|m| m.id().as_str()).collect();
        assert_eq!(modules, ["dev-interview-1", "top-lwc", "dev-apex-lab"]);
        let lab = developer.module(&ModuleId::new("dev-apex-lab")).unwrap();
        assert_eq!(lab.unit(0).unwrap().kind(), UnitKind::Code);
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        let curriculum = Curriculum::builtin().unwrap();
        assert!(curriculum.role(&RoleId::new("nonexistent")).is_none());
        assert!(
            curriculum
                .module(&RoleId::new("developer"), &ModuleId::new("nope"))
                .is_none()
        );
        assert!(
            curriculum
                .unit(&RoleId::new("developer"), &ModuleId::new("top-lwc"), 1)
                .is_none()
        );
    }

    #[test]
    fn rejects_duplicate_roles() {
        let raw = r##"{"roles":[
            {"id":"qa","title":"QA","color":"#FFB700"},
            {"id":"qa","title":"QA again","color":"#FFB700"}
        ]}"##;
        assert_eq!(
            Curriculum::from_json(raw).unwrap_err(),
            CurriculumError::DuplicateRole(RoleId::new("qa"))
        );
    }

    #[test]
    fn reports_unit_with_invalid_quiz() {
        let raw = r##"{"roles":[{"id":"dev","title":"Dev","color":"#00CFC8","modules":[
            {"id":"m","title":"M","units":[
                {"id":"u1","title":"U1","type":"theory",
                 "quiz":{"question":"Q?","options":["A"],"correctAnswer":3}}
            ]}
        ]}]}"##;
        let err = Curriculum::from_json(raw).unwrap_err();
        assert_eq!(
            err,
            CurriculumError::Unit {
                unit: UnitId::new("u1"),
                source: UnitError::AnswerOutOfRange { index: 3, len: 1 },
            }
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Curriculum::from_json("{ not json"),
            Err(CurriculumError::Parse(_))
        ));
    }
}
