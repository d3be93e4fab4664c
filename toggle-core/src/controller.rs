//! Fixed-interval poll loop around [`ToggleSwitch`].
//!
//! One iteration reads the button, feeds the sample to the switch and, on a
//! toggle, mirrors the new state onto both LEDs. The stop signal is checked
//! once per iteration after it completes; on stop both LEDs are forced off
//! before the hardware is handed back.

use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};

use crate::{
    config::Config,
    driver::OutputDriver,
    switch::{ToggleEvent, ToggleSwitch},
    traits::{Button, Led},
};

pub struct ToggleController<B, S, P> {
    button: B,
    switch: ToggleSwitch,
    outputs: OutputDriver<S, P>,
    config: Config,
}

impl<B, S, P> ToggleController<B, S, P>
where
    B: Button,
    S: Led,
    P: Led,
{
    /// Seeds the edge detector from a real read of the button and turns both
    /// LEDs off.
    pub fn new(button: B, mut outputs: OutputDriver<S, P>, config: Config) -> Self {
        outputs.off();
        let switch = ToggleSwitch::new(button.is_pressed());
        Self {
            button,
            switch,
            outputs,
            config,
        }
    }

    /// Runs one poll iteration.
    pub fn poll(&mut self) -> Option<ToggleEvent> {
        let event = self.switch.tick(self.button.is_pressed());
        if let Some(ToggleEvent::Toggled(on)) = event {
            self.outputs.apply(on);
            #[cfg(feature = "defmt")]
            defmt::info!("toggle state: {}", on);
        }
        event
    }

    pub fn latch_state(&self) -> bool {
        self.switch.latch_state()
    }

    pub fn switch(&self) -> &ToggleSwitch {
        &self.switch
    }

    pub fn outputs(&self) -> &OutputDriver<S, P> {
        &self.outputs
    }

    /// Polls until `stop` is signaled, sleeping `poll_interval_ms` between
    /// iterations.
    #[cfg(feature = "async")]
    pub async fn run<M, D>(mut self, delay: &mut D, stop: &Signal<M, ()>) -> (B, OutputDriver<S, P>)
    where
        M: RawMutex,
        D: embedded_hal_async::delay::DelayNs,
    {
        self.announce_ready();
        loop {
            self.poll();
            if stop.try_take().is_some() {
                break;
            }
            delay.delay_ms(self.config.poll_interval_ms).await;
        }
        self.shutdown()
    }

    /// Same loop as [`run`](Self::run), sleeping with a blocking delay.
    pub fn run_blocking<M, D>(mut self, delay: &mut D, stop: &Signal<M, ()>) -> (B, OutputDriver<S, P>)
    where
        M: RawMutex,
        D: embedded_hal::delay::DelayNs,
    {
        self.announce_ready();
        loop {
            self.poll();
            if stop.try_take().is_some() {
                break;
            }
            delay.delay_ms(self.config.poll_interval_ms);
        }
        self.shutdown()
    }

    /// Forces both LEDs off and releases the hardware.
    pub fn shutdown(mut self) -> (B, OutputDriver<S, P>) {
        self.outputs.off();
        #[cfg(feature = "defmt")]
        defmt::info!("stopped, outputs reset");
        (self.button, self.outputs)
    }

    fn announce_ready(&self) {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "ready: polling every {} ms, latch {}",
            self.config.poll_interval_ms,
            self.switch.latch_state()
        );
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    struct Scripted<'a> {
        samples: &'a [bool],
        at: Cell<usize>,
    }

    impl Button for Scripted<'_> {
        fn is_pressed(&self) -> bool {
            let i = self.at.get();
            self.at.set(i + 1);
            self.samples[i.min(self.samples.len() - 1)]
        }
    }

    #[derive(Default)]
    struct Lamp(bool);

    impl Led for Lamp {
        fn on(&mut self) {
            self.0 = true;
        }

        fn off(&mut self) {
            self.0 = false;
        }
    }

    fn controller(samples: &[bool]) -> ToggleController<Scripted<'_>, Lamp, Lamp> {
        let button = Scripted {
            samples,
            at: Cell::new(0),
        };
        let outputs = OutputDriver::new(Lamp(true), Lamp(true));
        ToggleController::new(button, outputs, Config::default())
    }

    #[test]
    fn new_turns_outputs_off_and_seeds_from_button() {
        let c = controller(&[true, true]);
        assert!(!c.outputs().status().0);
        assert!(!c.outputs().button_led().0);
        assert!(c.switch().previous_sample());
        assert!(!c.latch_state());
    }

    #[test]
    fn poll_mirrors_latch_on_leds() {
        let mut c = controller(&[false, true, false]);
        assert_eq!(c.poll(), Some(ToggleEvent::Toggled(true)));
        assert!(c.outputs().status().0);
        assert!(c.outputs().button_led().0);
        assert_eq!(c.poll(), None);
        assert!(c.outputs().status().0);
    }

    #[test]
    fn stop_before_start_runs_one_iteration() {
        let stop = Signal::<NoopRawMutex, ()>::new();
        stop.signal(());

        struct NoDelay;
        impl embedded_hal::delay::DelayNs for NoDelay {
            fn delay_ns(&mut self, _ns: u32) {
                panic!("slept after stop");
            }
        }

        let (button, outputs) = controller(&[false, true]).run_blocking(&mut NoDelay, &stop);
        assert_eq!(button.at.get(), 2);
        assert!(!outputs.status().0);
        assert!(!outputs.button_led().0);
    }
}
