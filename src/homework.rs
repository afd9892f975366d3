//! Homework records as reported by the review API, and the verdict text
//! sent for each review status.

use std::{fmt, str::FromStr};

use serde_json::Value;
use thiserror::Error;

use crate::PollResult;

/// Review status of a submission. The set is closed: anything the API
/// reports outside of it is rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    pub fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HomeworkStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_owned()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("запись о работе не является объектом")]
    NotAnObject,
    #[error("в ответе API нет ожидаемого ключа {0}")]
    MissingField(&'static str),
    #[error("ключ {0} имеет неверный тип")]
    WrongType(&'static str),
    #[error("неизвестный статус: {0}")]
    UnknownStatus(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
    pub submitted_at: Option<String>,
    pub updated_at: Option<String>,
}

fn required_str<'v>(
    object: &'v serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'v str, ValidationError> {
    object
        .get(field)
        .ok_or(ValidationError::MissingField(field))?
        .as_str()
        .ok_or(ValidationError::WrongType(field))
}

fn optional_str(object: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    object.get(field).and_then(Value::as_str).map(str::to_owned)
}

impl TryFrom<&Value> for HomeworkRecord {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let status = required_str(object, "status")?.parse()?;
        let name = required_str(object, "homework_name")?.to_owned();

        Ok(Self {
            name,
            status,
            submitted_at: optional_str(object, "date_submitted"),
            updated_at: optional_str(object, "date_updated"),
        })
    }
}

pub fn check_homework(homework: Option<&Value>) -> PollResult<Option<HomeworkRecord>> {
    let Some(homework) = homework else {
        return Ok(None);
    };

    let record = HomeworkRecord::try_from(homework).map_err(|e| {
        tracing::error!("Homework record failed validation: {e}");
        e
    })?;

    Ok(Some(record))
}

pub fn parse_status(homework: &HomeworkRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.name,
        homework.status.verdict()
    )
}
