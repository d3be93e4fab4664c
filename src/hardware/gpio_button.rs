use embassy_stm32::gpio::Input;
use toggle_core::{Button, Polarity};

pub struct GpioButton<'d> {
    pin: Input<'d>,
    polarity: Polarity,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: Input<'d>, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl<'d> Button for GpioButton<'d> {
    fn is_pressed(&self) -> bool {
        self.polarity.is_active(self.pin.is_high())
    }
}
