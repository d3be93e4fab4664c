//! Startup resolution of the status LED line.
//!
//! Some boards name their onboard LED symbolically, others only expose it as
//! a numbered GPIO line. The symbolic form is tried first and the numbered
//! line is used when the board does not declare one.
//!
//! Lines are numbered 16 per port: 0 = PA0, 16 = PB0, ...

use crate::config::Polarity;

const LINES_PER_PORT: u8 = 16;

/// Line number of `P<port><pin>`.
pub const fn gpio_line(port: char, pin: u8) -> u8 {
    (port as u8 - b'A') * LINES_PER_PORT + pin
}

/// Inverse of [`gpio_line`].
pub fn port_and_pin(line: u8) -> (char, u8) {
    let port = (b'A' + line / LINES_PER_PORT) as char;
    (port, line % LINES_PER_PORT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedLine {
    /// The board's own onboard LED.
    Board,
    /// A GPIO line by number.
    Numbered(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    UnsupportedSymbol,
}

/// What the target board supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    pub symbolic_led: bool,
    /// How the onboard LED is wired.
    pub board_led_polarity: Polarity,
}

impl Capabilities {
    /// Polarity of the status LED once its line is resolved. A numbered line
    /// drives an external LED to ground.
    pub fn status_led_polarity(&self, line: LedLine) -> Polarity {
        match line {
            LedLine::Board => self.board_led_polarity,
            LedLine::Numbered(_) => Polarity::ActiveHigh,
        }
    }

    pub fn probe(&self, requested: LedLine) -> Result<LedLine, LineError> {
        match requested {
            LedLine::Board if !self.symbolic_led => Err(LineError::UnsupportedSymbol),
            line => Ok(line),
        }
    }
}

/// Picks the line for the status LED. Never fails.
pub fn resolve_status_led(requested: LedLine, fallback_line: u8, caps: &Capabilities) -> LedLine {
    match caps.probe(requested) {
        Ok(line) => line,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("status LED {} unavailable ({}), using line {}", requested, _e, fallback_line);
            LedLine::Numbered(fallback_line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WITH_LED: Capabilities = Capabilities {
        symbolic_led: true,
        board_led_polarity: Polarity::ActiveLow,
    };
    const WITHOUT_LED: Capabilities = Capabilities {
        symbolic_led: false,
        board_led_polarity: Polarity::ActiveLow,
    };

    #[test]
    fn line_numbering() {
        assert_eq!(gpio_line('A', 0), 0);
        assert_eq!(gpio_line('B', 9), 25);
        assert_eq!(gpio_line('C', 13), 45);
        assert_eq!(port_and_pin(25), ('B', 9));
        assert_eq!(port_and_pin(3), ('A', 3));
        assert_eq!(port_and_pin(gpio_line('C', 13)), ('C', 13));
    }

    #[test]
    fn status_led_polarity_follows_line() {
        assert_eq!(WITH_LED.status_led_polarity(LedLine::Board), Polarity::ActiveLow);
        assert_eq!(WITH_LED.status_led_polarity(LedLine::Numbered(25)), Polarity::ActiveHigh);

        let active_high_board = Capabilities {
            board_led_polarity: Polarity::ActiveHigh,
            ..WITH_LED
        };
        assert_eq!(active_high_board.status_led_polarity(LedLine::Board), Polarity::ActiveHigh);
    }

    #[test]
    fn symbolic_when_supported() {
        assert_eq!(resolve_status_led(LedLine::Board, 25, &WITH_LED), LedLine::Board);
    }

    #[test]
    fn falls_back_to_numbered_line() {
        assert_eq!(WITHOUT_LED.probe(LedLine::Board), Err(LineError::UnsupportedSymbol));
        assert_eq!(
            resolve_status_led(LedLine::Board, 25, &WITHOUT_LED),
            LedLine::Numbered(25)
        );
    }

    #[test]
    fn numbered_request_is_kept() {
        assert_eq!(
            resolve_status_led(LedLine::Numbered(3), 25, &WITHOUT_LED),
            LedLine::Numbered(3)
        );
    }
}
