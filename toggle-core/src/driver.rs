use crate::traits::Led;

/// Mirrors the latch onto the status LED and the pushbutton LED.
pub struct OutputDriver<S, P> {
    status: S,
    button_led: P,
}

impl<S: Led, P: Led> OutputDriver<S, P> {
    pub fn new(status: S, button_led: P) -> Self {
        Self { status, button_led }
    }

    /// Writes `on` to both lines. Repeating the same value is harmless.
    pub fn apply(&mut self, on: bool) {
        self.status.set(on);
        self.button_led.set(on);
    }

    pub fn off(&mut self) {
        self.apply(false);
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn button_led(&self) -> &P {
        &self.button_led
    }

    pub fn into_parts(self) -> (S, P) {
        (self.status, self.button_led)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        lit: bool,
        writes: usize,
    }

    impl Led for Recorder {
        fn on(&mut self) {
            self.lit = true;
            self.writes += 1;
        }

        fn off(&mut self) {
            self.lit = false;
            self.writes += 1;
        }
    }

    #[test]
    fn drives_both_lines() {
        let mut driver = OutputDriver::new(Recorder::default(), Recorder::default());
        driver.apply(true);
        assert!(driver.status().lit);
        assert!(driver.button_led().lit);

        driver.off();
        assert!(!driver.status().lit);
        assert!(!driver.button_led().lit);
    }

    #[test]
    fn repeated_writes_are_idempotent() {
        let mut driver = OutputDriver::new(Recorder::default(), Recorder::default());
        for _ in 0..3 {
            driver.apply(true);
        }
        let (status, button_led) = driver.into_parts();
        assert!(status.lit && button_led.lit);
        assert_eq!(status.writes, 3);
    }
}
