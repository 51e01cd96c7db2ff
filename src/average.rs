//! Streaming arithmetic mean in constant memory.

/// Averages arbitrarily many numbers while storing only the running mean and
/// a count.
///
/// Each [`average`](Self::average) call folds one value into the mean, so
/// memory stays constant however many values are fed; the trade is a little
/// rounding reintroduced per update. Non-finite inputs are not defended
/// against: a NaN or infinity poisons every later result until
/// [`clear`](Self::clear).
///
/// # Example
///
/// ```
/// use tolerium::Averager;
///
/// let mut averager = Averager::new();
/// averager.average(1.0).average(2.0).average(3.0);
/// assert_eq!(averager.current(), 2.0);
/// assert_eq!(averager.count(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Averager {
    current_average: f64,
    times_averaged: u64,
}

impl Averager {
    /// Creates an empty averager: mean `0.0`, count `0`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an averager already holding one value.
    #[inline]
    pub fn with_seed(starting_number: f64) -> Self {
        Self {
            current_average: starting_number,
            times_averaged: 1,
        }
    }

    /// Folds one value into the average.
    ///
    /// Returns `self` so calls can be chained:
    /// `averager.average(1.0).average(2.0);`
    pub fn average(&mut self, value: f64) -> &mut Self {
        let count = self.times_averaged as f64;
        self.current_average = (self.current_average * count + value) / (count + 1.0);
        self.times_averaged += 1;
        self
    }

    /// Folds every value into the average, left to right.
    ///
    /// The order only affects floating-point rounding, not the semantics.
    pub fn average_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = f64>,
    {
        for value in values {
            self.average(value);
        }
        self
    }

    /// The current running mean.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current_average
    }

    /// How many values have been folded in so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.times_averaged
    }

    /// Discards all history, restoring the empty state.
    pub fn clear(&mut self) -> &mut Self {
        self.current_average = 0.0;
        self.times_averaged = 0;
        self
    }
}

impl From<Averager> for f64 {
    /// The current running mean.
    fn from(averager: Averager) -> Self {
        averager.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_averager_is_empty() {
        let averager = Averager::new();
        assert_eq!(averager.current(), 0.0);
        assert_eq!(averager.count(), 0);
        assert_eq!(averager, Averager::default());
    }

    #[test]
    fn test_matches_arithmetic_mean() {
        let values = [3.0, 1.5, -2.0, 8.25, 0.0, 4.5, -1.25];
        let mut averager = Averager::new();
        averager.average_all(values);

        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert_relative_eq!(averager.current(), expected, max_relative = 1e-9);
        assert_eq!(averager.count(), values.len() as u64);
    }

    #[test]
    fn test_incremental_equals_batch() {
        let mut one_by_one = Averager::new();
        one_by_one.average(10.0).average(20.0).average(30.0);

        let mut batched = Averager::new();
        batched.average_all([10.0, 20.0, 30.0]);

        assert_eq!(one_by_one, batched);
        assert_eq!(one_by_one.current(), 20.0);
    }

    #[test]
    fn test_with_seed_counts_as_one_value() {
        let mut averager = Averager::with_seed(10.0);
        assert_eq!(averager.current(), 10.0);
        assert_eq!(averager.count(), 1);

        averager.average(20.0);
        assert_eq!(averager.current(), 15.0);
        assert_eq!(averager.count(), 2);
    }

    #[test]
    fn test_clear_restores_fresh_state() {
        let mut averager = Averager::with_seed(42.0);
        averager.average(7.0).average(-3.5);

        assert_eq!(*averager.clear(), Averager::new());
        assert_eq!(averager.current(), 0.0);
        assert_eq!(averager.count(), 0);
    }

    #[test]
    fn test_long_stream_stays_accurate() {
        let mut averager = Averager::new();
        for i in 0..10_000 {
            averager.average(i as f64);
        }
        assert_relative_eq!(averager.current(), 4999.5, max_relative = 1e-9);
        assert_eq!(averager.count(), 10_000);
    }

    #[test]
    fn test_nan_poisons_until_clear() {
        let mut averager = Averager::new();
        averager.average(1.0).average(f64::NAN).average(2.0);
        assert!(averager.current().is_nan());

        averager.clear();
        averager.average(2.0);
        assert_eq!(averager.current(), 2.0);
    }

    #[test]
    fn test_number_conversion() {
        let mut averager = Averager::new();
        averager.average_all([2.0, 4.0]);
        assert_eq!(f64::from(averager), 3.0);
    }
}
