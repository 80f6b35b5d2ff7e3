//! Buzzer patterns.
//!
//! The patterns are plain data so their timing can be checked on the
//! host; the coordinator plays them against a [`ToneOutput`].

use crate::config::{BEEP_FREQUENCY_HZ, BEEP_GAP_MS, BEEP_PULSE_MS};

/// Something that can emit a square-wave tone (PWM pin, piezo driver).
pub trait ToneOutput {
    /// Start (or retune) the tone.
    fn start(&mut self, frequency_hz: u32);

    /// Silence the output.
    fn stop(&mut self);
}

/// One segment of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeepStep {
    Tone { frequency_hz: u32, ms: u32 },
    Silence { ms: u32 },
}

impl BeepStep {
    pub const fn duration_ms(&self) -> u32 {
        match *self {
            BeepStep::Tone { ms, .. } | BeepStep::Silence { ms } => ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeepPattern {
    /// One pulse - entry refused.
    Single,
    /// Two pulses with a gap - system reset.
    Double,
}

const PULSE: BeepStep = BeepStep::Tone {
    frequency_hz: BEEP_FREQUENCY_HZ,
    ms: BEEP_PULSE_MS,
};
const GAP: BeepStep = BeepStep::Silence { ms: BEEP_GAP_MS };

const SINGLE: [BeepStep; 1] = [PULSE];
const DOUBLE: [BeepStep; 3] = [PULSE, GAP, PULSE];

impl BeepPattern {
    pub fn steps(self) -> &'static [BeepStep] {
        match self {
            BeepPattern::Single => &SINGLE,
            BeepPattern::Double => &DOUBLE,
        }
    }

    /// How long the caller is held by this pattern.
    pub fn total_ms(self) -> u32 {
        self.steps().iter().map(BeepStep::duration_ms).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_is_one_pulse() {
        assert_eq!(
            BeepPattern::Single.steps(),
            &[BeepStep::Tone { frequency_hz: 60, ms: 100 }]
        );
        assert_eq!(BeepPattern::Single.total_ms(), 100);
    }

    #[test]
    fn double_is_pulse_gap_pulse() {
        let steps = BeepPattern::Double.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1], BeepStep::Silence { ms: 100 });
        assert!(matches!(steps[0], BeepStep::Tone { frequency_hz: 60, ms: 100 }));
        assert!(matches!(steps[2], BeepStep::Tone { frequency_hz: 60, ms: 100 }));
        assert_eq!(BeepPattern::Double.total_ms(), 300);
    }
}
