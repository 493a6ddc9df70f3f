//! JSON output envelope shared by all CLI commands.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, ErrorKind};

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    InvalidArgument,
    DomainError,
    InvalidInput,
    ConfigError,
    CheckFailed,
}

impl From<&CalcError> for ResultCode {
    fn from(error: &CalcError) -> Self {
        match error.kind() {
            ErrorKind::InvalidArgument => ResultCode::InvalidArgument,
            ErrorKind::Domain => ResultCode::DomainError,
        }
    }
}

/// Process exit status.
///
/// Calculation failures exit with 1, bad input or configuration with 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
    Usage = 2,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn for_result(code: ResultCode) -> Self {
        match code {
            ResultCode::Ok => ExitStatus::Success,
            ResultCode::InvalidArgument | ResultCode::DomainError | ResultCode::CheckFailed => {
                ExitStatus::Failure
            }
            ResultCode::InvalidInput | ResultCode::ConfigError => ExitStatus::Usage,
        }
    }
}

/// Entity type in the data payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Aggregate,
    Script,
    Demo,
    SelfCheck,
    Outline,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub schema_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,

    /// Number of items in data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            entity_type: None,
            count: None,
        }
    }
}

/// JSON output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub status: Status,
    pub code: ResultCode,
    pub exit_code: u8,
    pub message: String,
    /// Result payload (null on error)
    pub data: Option<T>,
    pub meta: Meta,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitStatus::Success.code(),
            message: "Operation completed successfully".to_string(),
            data: Some(data),
            meta: Meta::default(),
        }
    }

    pub fn error(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            code,
            exit_code: ExitStatus::for_result(code).code(),
            message: message.into(),
            data: None,
            meta: Meta::default(),
        }
    }

    /// Error envelope classified from a calculation failure.
    pub fn from_calc_error(error: &CalcError) -> Self {
        Self::error(ResultCode::from(error), error.to_string())
    }

    /// Attach a payload, e.g. the partial report of a failed script.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.meta.entity_type = Some(entity_type);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.meta.count = Some(count);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let envelope = Envelope::success(vec![1, 2])
            .with_entity_type(EntityType::Aggregate)
            .with_count(2)
            .with_message("Summed 2 numbers");

        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.code, ResultCode::Ok);
        assert_eq!(envelope.exit_code, 0);
        assert_eq!(envelope.meta.count, Some(2));
        assert_eq!(envelope.message, "Summed 2 numbers");
    }

    #[test]
    fn test_calc_error_envelope() {
        let envelope: Envelope<()> = Envelope::from_calc_error(&CalcError::DivisionByZero);
        assert_eq!(envelope.status, Status::Error);
        assert_eq!(envelope.code, ResultCode::InvalidArgument);
        assert_eq!(envelope.exit_code, 1);
        assert!(envelope.data.is_none());

        let envelope = Envelope::from_calc_error(&CalcError::NegativeSquareRoot { value: -1 })
            .with_data(vec![4])
            .with_message("Step 2 (sqrt) failed");
        assert_eq!(envelope.code, ResultCode::DomainError);
        assert_eq!(envelope.data, Some(vec![4]));
        assert_eq!(envelope.message, "Step 2 (sqrt) failed");
    }

    #[test]
    fn test_usage_errors_exit_with_two() {
        let envelope: Envelope<()> = Envelope::error(ResultCode::InvalidInput, "bad op");
        assert_eq!(envelope.exit_code, 2);
    }

    #[test]
    fn test_json_serialization() {
        let envelope = Envelope::success(30).with_entity_type(EntityType::Demo);

        let json = envelope.to_json().unwrap();
        assert!(json.contains("\"status\": \"success\""));
        assert!(json.contains("\"code\": \"OK\""));
        assert!(json.contains("\"entity_type\": \"demo\""));
        assert!(json.contains("\"schema_version\": \"1.0.0\""));
    }
}
