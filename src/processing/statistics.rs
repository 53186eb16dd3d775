use crate::data::table::{Cell, Value};

/// z-score for a two-sided 95% interval under a normal approximation.
///
/// This is not a t-distribution critical value and is not adjusted for
/// small samples. Changing it changes every reported CI95.
pub const Z_95: f64 = 1.96;

/// Count, mean and sum of squared deviations of the present values in a
/// sequence, computed in two passes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    pub filled: usize,
    /// `sum / filled`; NaN when nothing is filled.
    pub mean: f64,
    pub sum_sq_dev: f64,
}

impl Moments {
    /// Two passes over `samples`: the mean first, then squared deviations
    /// from it.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: Iterator<Item = f64> + Clone,
    {
        let mut filled = 0usize;
        let mut sum = 0.0;
        for v in samples.clone() {
            sum += v;
            filled += 1;
        }
        let mean = sum / filled as f64;

        let sum_sq_dev = samples.map(|v| (v - mean) * (v - mean)).sum::<f64>();

        Self { filled, mean, sum_sq_dev }
    }

    /// Moments of the present cells, ignoring missing ones.
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self::from_samples(cells.iter().filter_map(Cell::value))
    }

    /// Moments of the present values, ignoring missing ones.
    pub fn from_values(values: &[Value]) -> Self {
        Self::from_samples(values.iter().filter_map(|v| v.x.value()))
    }
}

/// Descriptive statistics for one row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    /// Population standard deviation (divisor n).
    pub stddev: f64,
    pub sem: f64,
    pub ci95: f64,
    /// Coefficient of variation, in percent.
    pub cv: f64,
}

impl Summary {
    /// Derive the metrics from accumulated moments. No special cases: an
    /// empty sequence gives NaN everywhere and a zero mean gives an
    /// infinite or NaN CV.
    pub fn from_moments(m: &Moments) -> Self {
        let n = m.filled as f64;
        let stddev = (m.sum_sq_dev / n).sqrt();
        let sem = stddev / n.sqrt();
        let ci95 = Z_95 * sem;
        let cv = stddev / m.mean * 100.0;

        Self {
            mean: m.mean,
            stddev,
            sem,
            ci95,
            cv,
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mean => self.mean,
            Metric::Stddev => self.stddev,
            Metric::Sem => self.sem,
            Metric::Ci95 => self.ci95,
            Metric::Cv => self.cv,
        }
    }
}

/// Summarise a sequence of present values.
pub fn summarize(values: &[f64]) -> Summary {
    Summary::from_moments(&Moments::from_samples(values.iter().copied()))
}

/// The five appended statistics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Mean,
    Stddev,
    Sem,
    Ci95,
    Cv,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Mean,
        Metric::Stddev,
        Metric::Sem,
        Metric::Ci95,
        Metric::Cv,
    ];

    /// Row label / column key of the appended statistic.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Mean => "MEAN",
            Metric::Stddev => "STDDEV",
            Metric::Sem => "SEM",
            Metric::Ci95 => "CI95",
            Metric::Cv => "CV",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Metric::Ci95 => "\u{00B1}",
            _ => "",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Metric::Cv => "%",
            _ => "",
        }
    }

    /// CV is a percentage and never carries the measurement unit.
    pub fn uses_units(&self) -> bool {
        !matches!(self, Metric::Cv)
    }

    /// Display value for this metric taken from `summary`.
    pub fn value(&self, summary: &Summary) -> Value {
        Value {
            x: Cell::Present(summary.get(*self)),
            prefix: self.prefix().to_string(),
            suffix: self.suffix().to_string(),
            uses_units: self.uses_units(),
        }
    }
}
