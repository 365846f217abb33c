#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prob3 {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl Prob3 {
    pub fn uniform() -> Self {
        Self {
            home: 1.0 / 3.0,
            draw: 1.0 / 3.0,
            away: 1.0 / 3.0,
        }
    }

    pub fn certain(outcome: Outcome) -> Self {
        let mut p = Self {
            home: 0.0,
            draw: 0.0,
            away: 0.0,
        };
        *p.slot(outcome) = 1.0;
        p
    }

    pub fn of(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    fn slot(&mut self, outcome: Outcome) -> &mut f64 {
        match outcome {
            Outcome::Home => &mut self.home,
            Outcome::Draw => &mut self.draw,
            Outcome::Away => &mut self.away,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    // Ties go to the earlier of home, draw, away.
    pub fn favourite(&self) -> Outcome {
        Outcome::ALL
            .into_iter()
            .fold(Outcome::Home, |best, o| if self.of(o) > self.of(best) { o } else { best })
    }

    // Cumulative thresholds: home, then home + draw.
    pub fn outcome_at(&self, u: f64) -> Outcome {
        if u < self.home {
            Outcome::Home
        } else if u < self.home + self.draw {
            Outcome::Draw
        } else {
            Outcome::Away
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Metrics {
    pub samples: usize,
    pub brier: f64,
    pub log_loss: f64,
    pub accuracy: f64,
}

pub fn observed_frequencies<I>(outcomes: I) -> Prob3
where
    I: IntoIterator<Item = Outcome>,
{
    let mut counts = Prob3 {
        home: 0.0,
        draw: 0.0,
        away: 0.0,
    };
    let mut n = 0usize;
    for outcome in outcomes {
        *counts.slot(outcome) += 1.0;
        n += 1;
    }
    if n == 0 {
        return Prob3::uniform();
    }
    let n = n as f64;
    Prob3 {
        home: counts.home / n,
        draw: counts.draw / n,
        away: counts.away / n,
    }
}

// Mean Brier score, log loss and favourite hit rate over (forecast, result) pairs.
pub fn score<I>(scored: I) -> Metrics
where
    I: IntoIterator<Item = (Prob3, Outcome)>,
{
    let totals = scored
        .into_iter()
        .fold(Metrics::default(), |mut acc, (p, outcome)| {
            let actual = Prob3::certain(outcome);
            acc.samples += 1;
            acc.brier += Outcome::ALL
                .into_iter()
                .map(|o| (p.of(o) - actual.of(o)).powi(2))
                .sum::<f64>();
            acc.log_loss -= p.of(outcome).clamp(1e-12, 1.0).ln();
            if p.favourite() == outcome {
                acc.accuracy += 1.0;
            }
            acc
        });

    if totals.samples == 0 {
        return totals;
    }
    let n = totals.samples as f64;
    Metrics {
        samples: totals.samples,
        brier: totals.brier / n,
        log_loss: totals.log_loss / n,
        accuracy: totals.accuracy / n,
    }
}
