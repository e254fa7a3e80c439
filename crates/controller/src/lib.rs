use chrono::Utc;
use shared::{
    domain::{Color, SignalNumber},
    protocol::{
        ControllerRequest, ControllerResponse, HistoryEntry, OperationResult, OperationStatus,
        StatusReport,
    },
};
use signal::{compile, Timing};
use tracing::{debug, info};

mod error;
mod history;

pub use error::SelectionError;
pub use history::History;

/// Completed transmissions kept per controller.
pub const HISTORY_LIMIT: usize = 5;

/// Selection state for one device.
///
/// Color and number are set independently and in any order. `prepare`
/// compiles the selection and marks the controller as transmitting;
/// `complete` records the pair that was compiled (even if the selection
/// was changed in between) and returns to an empty selection. `clear`
/// abandons the selection and any transmission in flight. A refused
/// operation leaves every field untouched.
#[derive(Debug, Clone)]
pub struct Controller {
    timing: Timing,
    color: Option<Color>,
    number: Option<SignalNumber>,
    /// The pair handed to the compiler by the last `prepare`.
    in_flight: Option<(Color, SignalNumber)>,
    history: History,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::with_timing(Timing::STANDARD)
    }

    pub fn with_timing(timing: Timing) -> Self {
        Self {
            timing,
            color: None,
            number: None,
            in_flight: None,
            history: History::new(HISTORY_LIMIT),
        }
    }

    pub fn set_color(&mut self, raw: &str) -> OperationResult {
        let outcome = raw
            .parse::<Color>()
            .map_err(|_| SelectionError::InvalidColor(raw.to_string()))
            .map(|color| {
                self.color = Some(color);
                debug!(%color, "color selected");
                OperationResult::ok(
                    OperationStatus::ColorSelected,
                    format!("{color} selected - Enter number"),
                )
                .with_color(color)
            });
        settle("set_color", outcome)
    }

    pub fn set_number(&mut self, raw: &str) -> OperationResult {
        let outcome = raw
            .parse::<SignalNumber>()
            .map_err(|_| SelectionError::InvalidNumber(raw.to_string()))
            .map(|number| {
                let message = match self.color {
                    Some(color) => format!("{color} {number} ready"),
                    None => format!("Number {number} set - Select color"),
                };
                debug!(%number, "number set");
                self.number = Some(number.clone());
                OperationResult::ok(OperationStatus::NumberSet, message).with_number(number)
            });
        settle("set_number", outcome)
    }

    pub fn clear(&mut self) -> OperationResult {
        self.color = None;
        self.number = None;
        self.in_flight = None;
        debug!("selection cleared");
        OperationResult::ok(OperationStatus::Cleared, "Select color and number")
    }

    pub fn prepare(&mut self) -> OperationResult {
        settle("prepare", self.try_prepare())
    }

    fn try_prepare(&mut self) -> Result<OperationResult, SelectionError> {
        let color = self.color.ok_or(SelectionError::NoColor)?;
        let number = self.number.clone().ok_or(SelectionError::NoNumber)?;
        if self.in_flight.is_some() {
            return Err(SelectionError::AlreadyTransmitting);
        }

        let sequence = compile(color, &number, &self.timing)?;
        self.in_flight = Some((color, number.clone()));
        info!(
            %color,
            %number,
            events = sequence.events.len(),
            total_duration = sequence.total_duration,
            "transmission prepared"
        );

        Ok(OperationResult::ok(
            OperationStatus::Transmitting,
            format!("Transmitting {color} {number}..."),
        )
        .with_color(color)
        .with_number(number)
        .with_sequence(sequence.events, sequence.total_duration))
    }

    pub fn complete(&mut self) -> OperationResult {
        settle("complete", self.try_complete())
    }

    fn try_complete(&mut self) -> Result<OperationResult, SelectionError> {
        let (Some(color), Some(number)) = (self.color, self.number.clone()) else {
            return Err(SelectionError::NothingToComplete);
        };
        let (color, number) = self.in_flight.take().unwrap_or((color, number));

        let message = format!("{color} {number} sent");
        self.history.record(HistoryEntry {
            color,
            number,
            completed_at: Utc::now(),
            message: message.clone(),
        });
        self.color = None;
        self.number = None;
        info!(%message, history = self.history.len(), "transmission completed");

        Ok(OperationResult::ok(OperationStatus::Completed, message)
            .with_history(self.history.messages()))
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            color: self.color,
            number: self.number.clone(),
            is_transmitting: self.is_transmitting(),
            history: self.history.messages(),
            ready_to_send: self.is_ready(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.color.is_some() && self.number.is_some() && !self.is_transmitting()
    }

    pub fn is_transmitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Runs one named operation.
    pub fn handle(&mut self, request: ControllerRequest) -> ControllerResponse {
        match request {
            ControllerRequest::SetColor { color } => {
                ControllerResponse::Operation(self.set_color(&color))
            }
            ControllerRequest::SetNumber { number } => {
                ControllerResponse::Operation(self.set_number(&number))
            }
            ControllerRequest::Clear => ControllerResponse::Operation(self.clear()),
            ControllerRequest::Prepare => ControllerResponse::Operation(self.prepare()),
            ControllerRequest::Complete => ControllerResponse::Operation(self.complete()),
            ControllerRequest::Status => ControllerResponse::Status(self.status()),
        }
    }
}

fn settle(operation: &str, outcome: Result<OperationResult, SelectionError>) -> OperationResult {
    outcome.unwrap_or_else(|reason| {
        debug!(operation, %reason, "operation refused");
        OperationResult::failure(reason.to_string())
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
