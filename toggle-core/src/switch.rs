//! Edge-triggered toggle latch.
//!
//! A momentary pushbutton is sampled once per poll tick. The latch flips on
//! the low→high transition between two consecutive samples and re-arms on the
//! matching high→low transition, so one press-and-release produces exactly
//! one [`ToggleEvent`], emitted at the press.
//!
//! ```text
//!  (latch, prev=false) --input=true-->  (!latch, true)   emits Toggled(!latch)
//!  (latch, prev=true)  --input=false--> (latch,  false)  silent
//!  input == prev                         self-loop        silent
//! ```

/// Transition observed between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// low → high
    Press,
    /// high → low
    Release,
}

impl Edge {
    pub fn between(previous: bool, current: bool) -> Option<Self> {
        match (previous, current) {
            (false, true) => Some(Edge::Press),
            (true, false) => Some(Edge::Release),
            _ => None,
        }
    }
}

/// Emitted by [`ToggleSwitch::tick`] when the latch changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleEvent {
    /// Carries the new latch state.
    Toggled(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleSwitch {
    latch_state: bool,
    previous_sample: bool,
}

impl ToggleSwitch {
    /// Creates a switch with the latch off.
    ///
    /// `initial_sample` must be the real level read from the line before the
    /// first tick. Seeding it with `false` while the button is already held
    /// would produce a spurious toggle on the first tick.
    pub const fn new(initial_sample: bool) -> Self {
        Self {
            latch_state: false,
            previous_sample: initial_sample,
        }
    }

    /// Feeds one sample into the state machine.
    ///
    /// Returns at most one event, only on a press edge.
    pub fn tick(&mut self, current_input: bool) -> Option<ToggleEvent> {
        let edge = Edge::between(self.previous_sample, current_input);
        self.previous_sample = current_input;

        match edge {
            Some(Edge::Press) => {
                self.latch_state = !self.latch_state;
                Some(ToggleEvent::Toggled(self.latch_state))
            }
            Some(Edge::Release) | None => None,
        }
    }

    pub fn latch_state(&self) -> bool {
        self.latch_state
    }

    pub fn previous_sample(&self) -> bool {
        self.previous_sample
    }
}
