/// An output line driving an LED.
///
/// `on`/`off` are logical: the implementation owns the pin polarity.
pub trait Led {
    fn on(&mut self);
    fn off(&mut self);

    fn set(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }
}

/// A momentary contact sampled by polling.
pub trait Button {
    fn is_pressed(&self) -> bool;
}
