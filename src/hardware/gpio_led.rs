use embassy_stm32::gpio::Output;
use toggle_core::{Led, Polarity};

pub struct GpioLed<'d> {
    pin: Output<'d>,
    polarity: Polarity,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Level that keeps this LED dark, for `Output::new`.
    pub fn off_level(polarity: Polarity) -> embassy_stm32::gpio::Level {
        polarity.level(false).into()
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        self.pin.set_level(self.polarity.level(true).into());
    }

    fn off(&mut self) {
        self.pin.set_level(self.polarity.level(false).into());
    }
}
