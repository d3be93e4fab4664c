//! STM32 Blue Pill Pushbutton Toggle
//! =============================================================================================
//!
//! Turns a momentary pushbutton into a rocker switch: each press flips a latch
//! that drives the onboard status LED and the LED inside the pushbutton.
//!
//! The button is polled every 10 ms; a press is the low→high change between
//! two polls. Sampling this coarsely makes it unlikely that contact bounce
//! lands on a sample instant, but does not rule it out.
//!
//! Wiring: see `pb_toggle::board`.
//!
//! Expected Behavior:
//!   - Both LEDs off at boot, "ready" logged over RTT
//!   - Each press toggles both LEDs, release does nothing
//!   - When a stop is requested both LEDs go off and "stopped, outputs reset"
//!     is logged

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::gpio::{AnyPin, Input, Output, Pin, Pull, Speed};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Delay, Timer};
use panic_probe as _; // Panic handler

use pb_toggle::{
    board,
    hardware::{gpio_button::GpioButton, gpio_led::GpioLed},
};
use toggle_core::{LedLine, OutputDriver, ToggleController, port_and_pin, resolve_status_led};

type Controller = ToggleController<GpioButton<'static>, GpioLed<'static>, GpioLed<'static>>;

// Raised once to end the poll loop
static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());

    let config = board::CONFIG;

    // Onboard LED first, numbered line if the board has none
    let status_line = resolve_status_led(
        config.status_led,
        config.fallback_status_line,
        &board::CAPABILITIES,
    );
    let status_pin: AnyPin = match status_line {
        LedLine::Board => p.PC13.degrade(),
        LedLine::Numbered(board::FALLBACK_STATUS_LINE) => p.PB9.degrade(),
        // excluded by the const check in `board`
        LedLine::Numbered(line) => defmt::panic!("no pin wired for status line {}", line),
    };
    if let LedLine::Numbered(line) = status_line {
        let (port, pin) = port_and_pin(line);
        info!("status LED on line {} (P{}{})", line, port, pin);
    }

    let status_polarity = board::CAPABILITIES.status_led_polarity(status_line);
    let status_led = GpioLed::new(
        Output::new(status_pin, GpioLed::off_level(status_polarity), Speed::Low),
        status_polarity,
    );
    let button_led = GpioLed::new(
        Output::new(p.PB13, GpioLed::off_level(board::BUTTON_LED_POLARITY), Speed::Low),
        board::BUTTON_LED_POLARITY,
    );
    let button = GpioButton::new(Input::new(p.PB15, Pull::Down), board::BUTTON_POLARITY);

    let controller = ToggleController::new(button, OutputDriver::new(status_led, button_led), config);

    unwrap!(spawner.spawn(toggle_task(controller)));

    if let Some(limit) = board::SESSION_LIMIT {
        Timer::after(limit).await;
        info!("session limit reached, stopping");
        STOP.signal(());
    }
}

/// Poll loop task. Once `STOP` is raised the LEDs are off and the task keeps
/// the pins so they stay driven.
#[embassy_executor::task]
async fn toggle_task(controller: Controller) {
    let mut delay = Delay;
    let (_button, _outputs) = controller.run(&mut delay, &STOP).await;
    core::future::pending::<()>().await;
}
