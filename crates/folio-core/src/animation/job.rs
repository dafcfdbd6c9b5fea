//! A single reveal job and its timing.

use crate::utils::char_len;

/// How much content one tick reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealUnit {
    Char,
    Line,
}

/// Result of feeding a timestamp to a job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Not enough time has passed for the next unit.
    Waiting,
    /// One unit was revealed.
    Advanced,
    /// Everything is visible; no further ticks are needed.
    Finished,
}

/// Incremental reveal of a fixed block of lines.
///
/// Character jobs reveal `content[line][..chars]` one char at a time and
/// wrap to the next line; line jobs reveal whole lines. The position only
/// ever moves forward.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealJob {
    content: Vec<String>,
    unit: RevealUnit,
    ms_per_unit: f64,
    line: usize,
    chars: usize,
    last_tick: Option<f64>,
    finished: bool,
}

impl RevealJob {
    /// `speed` is in units per second.
    pub fn new(content: Vec<String>, unit: RevealUnit, speed: f64) -> Self {
        let finished = content.is_empty();
        Self {
            content,
            unit,
            ms_per_unit: 1000.0 / speed.max(f64::EPSILON),
            line: 0,
            chars: 0,
            last_tick: None,
            finished,
        }
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn unit(&self) -> RevealUnit {
        self.unit
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `(line, chars)` for character jobs; `(lines revealed, 0)` for line
    /// jobs.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.chars)
    }

    /// Advances by at most one unit if a full unit interval has elapsed
    /// since the last advance. The first call only starts the clock.
    pub fn tick(&mut self, now: f64) -> Tick {
        if self.finished {
            return Tick::Finished;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return Tick::Waiting;
        };
        if now - last < self.ms_per_unit {
            return Tick::Waiting;
        }
        self.last_tick = Some(now);

        match self.unit {
            RevealUnit::Char => self.advance_char(),
            RevealUnit::Line => self.advance_line(),
        }
    }

    fn advance_char(&mut self) -> Tick {
        let next = self.chars + 1;
        if next <= char_len(&self.content[self.line]) {
            self.chars = next;
            return Tick::Advanced;
        }
        if self.line + 1 < self.content.len() {
            self.line += 1;
            self.chars = 0;
            Tick::Advanced
        } else {
            self.finished = true;
            Tick::Finished
        }
    }

    fn advance_line(&mut self) -> Tick {
        self.line += 1;
        if self.line >= self.content.len() {
            self.finished = true;
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }

    /// Lines currently on screen.
    pub fn visible(&self) -> Vec<String> {
        if self.content.is_empty() {
            return Vec::new();
        }
        match self.unit {
            RevealUnit::Char => {
                let mut lines = self.content[..self.line].to_vec();
                lines.push(
                    self.content[self.line]
                        .chars()
                        .take(self.chars)
                        .collect(),
                );
                lines
            }
            RevealUnit::Line => {
                let shown = if self.finished {
                    self.content.len()
                } else {
                    self.line
                };
                self.content[..shown].to_vec()
            }
        }
    }
}
