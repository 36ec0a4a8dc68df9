//! User button debouncing
//!
//! Pure state machine over `(pressed, now_ms)` samples; the caller owns
//! the input line. A press must hold through a detect window and a
//! confirm window before it counts, a long hold fires once more, and
//! only a confirmed press reports a release.

/// Debounce window before a level change is trusted (milliseconds).
const DETECT_MS: u32 = 20;
/// Hold time after detection before `Pressed` fires (milliseconds).
const CONFIRM_MS: u32 = 50;
/// Hold time after detection before `Held` fires (milliseconds).
const HOLD_MS: u32 = 500;

/// Events reported by the button state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Press confirmed.
    Pressed,
    /// Press still down after the hold window.
    Held,
    /// Confirmed press ended.
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Detect,
    Confirmed,
    Held,
}

/// Debounced button over a sampled input line.
#[derive(Debug)]
pub struct DebouncedButton {
    phase: Phase,
    last_change_ms: u32,
}

impl DebouncedButton {
    /// Create a button in the released state at clock zero.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            last_change_ms: 0,
        }
    }

    /// Feed one input sample, returning the event it triggers, if any.
    ///
    /// The confirm and hold windows are both measured from the detect
    /// instant, so `Held` fires `HOLD_MS` after detection, not after
    /// `Pressed`.
    pub fn sample(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        let since_change = now_ms.wrapping_sub(self.last_change_ms);
        if pressed {
            match self.phase {
                Phase::Idle if since_change > DETECT_MS => {
                    self.phase = Phase::Detect;
                    self.last_change_ms = now_ms;
                    None
                }
                Phase::Detect if since_change > CONFIRM_MS => {
                    self.phase = Phase::Confirmed;
                    Some(ButtonEvent::Pressed)
                }
                Phase::Confirmed if since_change > HOLD_MS => {
                    self.phase = Phase::Held;
                    Some(ButtonEvent::Held)
                }
                _ => None,
            }
        } else {
            match self.phase {
                Phase::Idle => None,
                _ if since_change > DETECT_MS => {
                    let confirmed = self.phase != Phase::Detect;
                    self.phase = Phase::Idle;
                    self.last_change_ms = now_ms;
                    confirmed.then_some(ButtonEvent::Released)
                }
                _ => None,
            }
        }
    }
}

impl Default for DebouncedButton {
    fn default() -> Self {
        Self::new()
    }
}
