use shared::{
    domain::{Color, GapKind, PulseRole, SignalNumber, Symbol},
    protocol::TransmissionEvent,
};
use tracing::trace;

use crate::{alphabet::encode_char, timing::Timing, EncodeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionSequence {
    pub events: Vec<TransmissionEvent>,
    pub total_duration: u64,
}

/// Compiles a selection into its flat, ordered event list.
///
/// Layout: color letter, inter-letter gap, then each digit followed by its
/// own inter-letter gap, then one confirmation flash. Symbols inside a
/// letter are separated by intra-letter gaps. The output depends only on
/// the arguments.
pub fn compile(
    color: Color,
    number: &SignalNumber,
    timing: &Timing,
) -> Result<TransmissionSequence, EncodeError> {
    let mut events = Vec::new();

    push_letter(&mut events, timing, color.letter(), PulseRole::Color)?;
    events.push(inter_letter_gap(timing, "Inter-letter gap".to_string()));

    for digit in number.digits() {
        push_letter(&mut events, timing, digit, PulseRole::Digit)?;
        events.push(inter_letter_gap(
            timing,
            format!("Inter-letter gap after digit {digit}"),
        ));
    }

    events.push(TransmissionEvent::Confirmation {
        duration: timing.confirmation_flash_ms,
        description: "Confirmation flash".to_string(),
    });

    let total_duration = events.iter().map(|e| u64::from(e.duration())).sum();
    trace!(%color, %number, events = events.len(), total_duration, "compiled sequence");

    Ok(TransmissionSequence {
        events,
        total_duration,
    })
}

fn push_letter(
    events: &mut Vec<TransmissionEvent>,
    timing: &Timing,
    letter: char,
    role: PulseRole,
) -> Result<(), EncodeError> {
    let pattern = encode_char(letter)?;
    let value = match role {
        PulseRole::Color => None,
        PulseRole::Digit => Some(letter),
    };

    for (index, symbol) in pattern.iter().copied().enumerate() {
        if index > 0 {
            events.push(TransmissionEvent::Gap {
                gap: GapKind::IntraLetter,
                duration: timing.intra_letter_gap_ms,
                description: "Intra-letter gap".to_string(),
            });
        }
        events.push(pulse(timing, symbol, role, value));
    }
    Ok(())
}

fn pulse(timing: &Timing, symbol: Symbol, role: PulseRole, value: Option<char>) -> TransmissionEvent {
    TransmissionEvent::Pulse {
        symbol,
        role,
        value,
        duration: timing.symbol_ms(symbol),
        description: format!("{} ({})", symbol.label(), role.label()),
    }
}

fn inter_letter_gap(timing: &Timing, description: String) -> TransmissionEvent {
    TransmissionEvent::Gap {
        gap: GapKind::InterLetter,
        duration: timing.inter_letter_gap_ms,
        description,
    }
}

#[cfg(test)]
#[path = "tests/compiler_tests.rs"]
mod tests;
