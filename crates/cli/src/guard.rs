//! Circuit breaker around the text-generation service.
//!
//! After `threshold` consecutive failures the breaker opens and calls fail
//! immediately for `cooldown`. The first call after the cooldown is let
//! through as a probe: success closes the breaker, failure reopens it.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use deck_core::{Error, Result, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Closed { failures: u32 },
    Open { since: Instant },
    HalfOpen,
}

pub struct CircuitBreaker<G> {
    inner: G,
    threshold: u32,
    cooldown: Duration,
    state: Mutex<State>,
}

impl<G: TextGenerator> CircuitBreaker<G> {
    pub fn new(inner: G, threshold: u32, cooldown: Duration) -> Self {
        Self {
            inner,
            threshold: threshold.max(1),
            cooldown,
            state: Mutex::new(State::Closed { failures: 0 }),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.current(), State::Open { .. })
    }

    fn current(&self) -> State {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Decide whether a call may go through, moving Open to HalfOpen once
    /// the cooldown has elapsed.
    fn admit(&self) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            State::Closed { .. } => true,
            State::HalfOpen => false,
            State::Open { since } => {
                if since.elapsed() >= self.cooldown {
                    *state = State::HalfOpen;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn record(&self, ok: bool) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *state = match (*state, ok) {
            (_, true) => State::Closed { failures: 0 },
            (State::HalfOpen, false) | (State::Open { .. }, false) => {
                log::warn!("Text generation probe failed, circuit reopened");
                State::Open {
                    since: Instant::now(),
                }
            }
            (State::Closed { failures }, false) => {
                let failures = failures + 1;
                if failures >= self.threshold {
                    log::warn!(
                        "Text generation failed {} times in a row, pausing calls for {:?}",
                        failures,
                        self.cooldown
                    );
                    State::Open {
                        since: Instant::now(),
                    }
                } else {
                    State::Closed { failures }
                }
            }
        };
    }
}

impl<G: TextGenerator> TextGenerator for CircuitBreaker<G> {
    fn complete(&self, prompt: &str) -> Result<String> {
        if !self.admit() {
            return Err(Error::GenerationError(
                "Text generation temporarily disabled after repeated failures".to_string(),
            ));
        }

        let result = self.inner.complete(prompt);
        self.record(result.is_ok());
        result
    }
}
