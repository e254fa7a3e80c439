use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Color, GapKind, PulseRole, SessionId, SignalNumber, Symbol};

/// One timed step of a keyed transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransmissionEvent {
    Pulse {
        symbol: Symbol,
        role: PulseRole,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<char>,
        duration: u32,
        description: String,
    },
    Gap {
        gap: GapKind,
        duration: u32,
        description: String,
    },
    Confirmation {
        duration: u32,
        description: String,
    },
}

impl TransmissionEvent {
    pub fn duration(&self) -> u32 {
        match self {
            TransmissionEvent::Pulse { duration, .. }
            | TransmissionEvent::Gap { duration, .. }
            | TransmissionEvent::Confirmation { duration, .. } => *duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Error,
    ColorSelected,
    NumberSet,
    Cleared,
    Transmitting,
    Completed,
}

/// Result envelope shared by every mutating operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<SignalNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<TransmissionEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<String>>,
}

impl OperationResult {
    pub fn ok(status: OperationStatus, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            status,
            color: None,
            number: None,
            sequence: None,
            total_duration: None,
            history: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::ok(OperationStatus::Error, message)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_number(mut self, number: SignalNumber) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_sequence(mut self, sequence: Vec<TransmissionEvent>, total_duration: u64) -> Self {
        self.sequence = Some(sequence);
        self.total_duration = Some(total_duration);
        self
    }

    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = Some(history);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub color: Option<Color>,
    pub number: Option<SignalNumber>,
    pub is_transmitting: bool,
    pub history: Vec<String>,
    pub ready_to_send: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub color: Color,
    pub number: SignalNumber,
    pub completed_at: DateTime<Utc>,
    pub message: String,
}

/// A named controller operation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ControllerRequest {
    SetColor {
        color: String,
    },
    SetNumber {
        #[serde(deserialize_with = "number_text")]
        number: String,
    },
    Clear,
    Prepare,
    Complete,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControllerResponse {
    Operation(OperationResult),
    Status(StatusReport),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetColorRequest {
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetNumberRequest {
    #[serde(deserialize_with = "number_text")]
    pub number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
    pub port: u16,
    pub timestamp: DateTime<Utc>,
}

/// Accepts either a JSON string or a JSON number and keeps its textual form,
/// so `7` and `"7"` reach validation identically.
pub fn number_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
