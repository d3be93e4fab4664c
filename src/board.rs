//! Blue Pill (STM32F103C8) wiring for the pushbutton toggle.
//!
//! Hardware Connections:
//!   Pushbutton switch:
//!      one side  -> 3V3
//!      other     -> PB15 (internal pull-down, pressed = high)
//!   Pushbutton LED:
//!      anode     -> PB13 (through resistor)
//!      cathode   -> GND
//!   Status LED:
//!      onboard PC13 (active-low), or numbered line 25 = PB9 when the
//!      `board-led` feature is off

use embassy_time::Duration;
use toggle_core::{Capabilities, Config, LedLine, Polarity, gpio_line};

/// Numbered status LED line; the firmware wires it to PB9.
pub const FALLBACK_STATUS_LINE: u8 = gpio_line('B', 9);

pub const CONFIG: Config = Config::new()
    .with_poll_interval_ms(Config::DEFAULT_POLL_INTERVAL_MS)
    .with_status_led(LedLine::Board)
    .with_fallback_status_line(FALLBACK_STATUS_LINE);

// Only PC13 and PB9 are wired as status LED candidates.
const _: () = assert!(
    CONFIG.fallback_status_line == FALLBACK_STATUS_LINE
        && matches!(CONFIG.status_led, LedLine::Board | LedLine::Numbered(FALLBACK_STATUS_LINE))
);

pub const CAPABILITIES: Capabilities = Capabilities {
    symbolic_led: cfg!(feature = "board-led"),
    board_led_polarity: Polarity::ActiveLow,
};

pub const BUTTON_POLARITY: Polarity = Polarity::ActiveHigh;
pub const BUTTON_LED_POLARITY: Polarity = Polarity::ActiveHigh;

/// Stop the poll loop after this long. `None` runs until reset.
pub const SESSION_LIMIT: Option<Duration> = None;
