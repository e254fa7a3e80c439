use shared::domain::Symbol;

/// Element durations in milliseconds. One unit is 200 ms so the pulses
/// stay readable by eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub dot_ms: u32,
    pub dash_ms: u32,
    pub intra_letter_gap_ms: u32,
    pub inter_letter_gap_ms: u32,
    /// Reserved. Selections are keyed as a single word, so the compiler
    /// never emits it.
    pub word_gap_ms: u32,
    pub confirmation_flash_ms: u32,
}

impl Timing {
    pub const UNIT_MS: u32 = 200;

    pub const STANDARD: Timing = Timing {
        dot_ms: Self::UNIT_MS,
        dash_ms: 3 * Self::UNIT_MS,
        intra_letter_gap_ms: Self::UNIT_MS,
        inter_letter_gap_ms: 3 * Self::UNIT_MS,
        word_gap_ms: 7 * Self::UNIT_MS,
        confirmation_flash_ms: 1000,
    };

    pub fn symbol_ms(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::Dot => self.dot_ms,
            Symbol::Dash => self.dash_ms,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::STANDARD
    }
}
