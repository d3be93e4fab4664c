use crate::line::LedLine;

/// Electrical level that means "pressed" / "lit".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Maps a logical state to the pin level to drive (`true` = high).
    pub fn level(self, on: bool) -> bool {
        match self {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        }
    }

    /// Maps a sampled pin level back to the logical state.
    pub fn is_active(self, high: bool) -> bool {
        self.level(high)
    }
}

/// Poll loop and startup settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Sleep between two polls. Paces sampling only; the debounce itself is
    /// the edge comparison.
    pub poll_interval_ms: u32,
    /// Preferred way of addressing the status LED.
    pub status_led: LedLine,
    /// Numbered line used when the preferred form is unsupported.
    pub fallback_status_line: u8,
}

impl Config {
    pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;
    pub const DEFAULT_FALLBACK_STATUS_LINE: u8 = 25;

    pub const fn new() -> Self {
        Self {
            poll_interval_ms: Self::DEFAULT_POLL_INTERVAL_MS,
            status_led: LedLine::Board,
            fallback_status_line: Self::DEFAULT_FALLBACK_STATUS_LINE,
        }
    }

    pub const fn with_poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub const fn with_status_led(mut self, line: LedLine) -> Self {
        self.status_led = line;
        self
    }

    pub const fn with_fallback_status_line(mut self, line: u8) -> Self {
        self.fallback_status_line = line;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
