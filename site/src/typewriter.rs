//! Typewriter state machine behind the animated tagline.
//!
//! The machine only knows about ticks: [`Typewriter::step`] performs one and
//! returns how long to wait before the next. Whatever owns the timer (the
//! browser driver in [`crate::components`], or a Tokio loop in the build tool)
//! sleeps for that long and calls `step` again until it returns `None`.
//!
//! ```text
//! Typing --(word shown)--> Holding --(delay)--> Deleting --(empty)--> Advancing
//!   ^                                                                    |
//!   +--------------------------- next word (wraps) ---------------------+
//!
//! Typing --(last word of the last loop shown)--> Stopped
//! ```
//!
//! # Example
//!
//! ```rust
//! use easerecruit_site::typewriter::{Phase, Typewriter};
//! use easerecruit_site::types::TypewriterConfig;
//!
//! let config = TypewriterConfig {
//!     words: vec!["ok".into()],
//!     loops: 1,
//!     ..Default::default()
//! };
//! let mut typewriter = Typewriter::new(config);
//! while typewriter.step().is_some() {}
//! assert_eq!(typewriter.text(), "ok");
//! assert_eq!(typewriter.phase(), Phase::Stopped);
//! ```

use std::time::Duration;

use crate::types::TypewriterConfig;

/// Where the machine is. Positions count characters shown so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Revealing `word` one character per tick
    Typing {
        /// Index into the word list
        word: usize,
        /// Characters shown
        position: usize,
    },
    /// Word fully shown, waiting out the hold delay
    Holding {
        /// Index into the word list
        word: usize,
    },
    /// Removing `word` one character per tick
    Deleting {
        /// Index into the word list
        word: usize,
        /// Characters still shown
        position: usize,
    },
    /// Word fully deleted, the next one is picked on the following tick
    Advancing {
        /// Index of the deleted word
        word: usize,
    },
    /// Final word shown; no more ticks
    Stopped,
}

/// One displayed state, as produced by [`Typewriter::frames`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Text shown in this frame
    pub text: String,
    /// Phase after the tick that produced the frame
    pub phase: Phase,
    /// Wait before the next frame; `None` on the last one
    pub delay: Option<Duration>,
}

/// Tick-driven typewriter over a fixed word list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    phase: Phase,
    loops_completed: u32,
    text: String,
}

impl Typewriter {
    /// Start typing the first word. An empty word list starts stopped.
    pub fn new(config: TypewriterConfig) -> Self {
        let phase = if config.words.is_empty() {
            Phase::Stopped
        } else {
            Phase::Typing {
                word: 0,
                position: 0,
            }
        };
        Self {
            config,
            phase,
            loops_completed: 0,
            text: String::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Full passes over the word list finished so far.
    pub fn loops_completed(&self) -> u32 {
        self.loops_completed
    }

    /// No further tick will change the text.
    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    /// Delay before the first tick, or `None` if there is nothing to animate.
    pub fn initial_delay(&self) -> Option<Duration> {
        (!self.is_stopped()).then_some(self.config.type_speed)
    }

    /// The text a page shows when no timer drives the machine: the word it
    /// stops on for a finite run, the first word for an endless one.
    pub fn resting_text(&self) -> &str {
        let words = &self.config.words;
        let word = if self.config.is_finite() {
            words.last()
        } else {
            words.first()
        };
        word.map(String::as_str).unwrap_or_default()
    }

    /// Perform one tick. Returns the delay before the next tick, or `None`
    /// once the machine has stopped.
    pub fn step(&mut self) -> Option<Duration> {
        match self.phase {
            Phase::Typing { word, position } => {
                let target = &self.config.words[word];
                let len = target.chars().count();
                let position = (position + 1).min(len);
                self.text = target.chars().take(position).collect();
                if position < len {
                    self.phase = Phase::Typing { word, position };
                    Some(self.config.type_speed)
                } else if self.is_final_word(word) {
                    self.phase = Phase::Stopped;
                    None
                } else {
                    self.phase = Phase::Holding { word };
                    Some(self.config.delay)
                }
            }
            Phase::Holding { word } => {
                let position = self.config.words[word].chars().count();
                self.phase = Phase::Deleting { word, position };
                Some(self.config.delete_speed)
            }
            Phase::Deleting { word, position } => {
                let position = position.saturating_sub(1);
                self.text = self.config.words[word].chars().take(position).collect();
                self.phase = if position == 0 {
                    Phase::Advancing { word }
                } else {
                    Phase::Deleting { word, position }
                };
                Some(self.config.delete_speed)
            }
            Phase::Advancing { word } => {
                let next = (word + 1) % self.config.words.len();
                if next == 0 {
                    self.loops_completed += 1;
                }
                self.phase = Phase::Typing {
                    word: next,
                    position: 0,
                };
                Some(self.config.type_speed)
            }
            Phase::Stopped => None,
        }
    }

    fn is_final_word(&self, word: usize) -> bool {
        self.config.is_finite()
            && word + 1 == self.config.words.len()
            && self.loops_completed + 1 >= self.config.loops
    }

    /// Every frame from the current state onwards, starting with the current
    /// one. Endless for `loops == 0`.
    pub fn frames(self) -> Frames {
        Frames {
            typewriter: self,
            started: false,
            done: false,
        }
    }

    /// Total duration of a finite run from the current state, `None` when the
    /// cycle never stops.
    pub fn run_time(&self) -> Option<Duration> {
        if !self.config.is_finite() {
            return None;
        }
        let mut typewriter = self.clone();
        let mut total = typewriter.initial_delay().unwrap_or_default();
        while let Some(delay) = typewriter.step() {
            total += delay;
        }
        Some(total)
    }
}

/// Iterator over displayed frames, see [`Typewriter::frames`].
pub struct Frames {
    typewriter: Typewriter,
    started: bool,
    done: bool,
}

impl Iterator for Frames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        let delay = if self.started {
            self.typewriter.step()
        } else {
            self.started = true;
            self.typewriter.initial_delay()
        };
        self.done = delay.is_none();
        Some(Frame {
            text: self.typewriter.text.clone(),
            phase: self.typewriter.phase,
            delay,
        })
    }
}
