use numguess_engine::{Direction, GameConfig, Hint, Parity};

/// Guesser that halves the remaining candidates on every guess.
///
/// Candidates are kept as `low..=high`, restricted to a single parity once a
/// hint revealed it. The hint's band narrows the bounds as well.
#[derive(Debug, Clone)]
pub(crate) struct BisectPlayer {
    low: i64,
    high: i64,
    parity: Option<Parity>,
}

impl BisectPlayer {
    pub(crate) fn new(config: &GameConfig) -> Self {
        Self {
            low: i64::from(config.range_low()),
            high: i64::from(config.range_high()),
            parity: None,
        }
    }

    fn step(&self) -> i64 {
        if self.parity.is_some() { 2 } else { 1 }
    }

    /// Middle candidate of the remaining ones.
    pub(crate) fn next_guess(&self) -> i32 {
        let step = self.step();
        let count = (self.high - self.low) / step + 1;
        let guess = self.low + (count - 1) / 2 * step;
        narrow(guess)
    }

    /// Shrinks the candidates after a wrong guess.
    pub(crate) fn observe(&mut self, guess: i32, direction: Direction, hint: Option<&Hint>) {
        let guess = i64::from(guess);
        match direction {
            Direction::Higher => self.low = self.low.max(guess + 1),
            Direction::Lower => self.high = self.high.min(guess - 1),
        }
        if let Some(hint) = hint {
            self.low = self.low.max(i64::from(hint.band().low()));
            self.high = self.high.min(i64::from(hint.band().high()));
            self.parity = Some(hint.parity());
        }
        self.align_to_parity();
    }

    fn align_to_parity(&mut self) {
        let Some(parity) = self.parity else {
            return;
        };
        let wanted = match parity {
            Parity::Even => 0,
            Parity::Odd => 1,
        };
        if self.low.rem_euclid(2) != wanted {
            self.low += 1;
        }
        if self.high.rem_euclid(2) != wanted {
            self.high -= 1;
        }
    }
}

/// Bounds start inside the `i32` range and only shrink.
fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
