use crate::reading::Reading;
use std::collections::VecDeque;

/// Number of readings retained when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded, FIFO-evicting history of recent readings (oldest first).
///
/// No internal locking: the owner serializes pushes.
#[derive(Debug, Clone)]
pub struct WindowStore {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl WindowStore {
    /// Create an empty window.  A capacity of `0` is coerced to `1`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a reading, evicting from the front until within capacity.
    pub fn push(&mut self, reading: Reading) {
        self.readings.push_back(reading);
        self.evict();
    }

    /// Most recently pushed reading, `None` before the first push.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Retained readings in arrival order, oldest first.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &Reading> + ExactSizeIterator + '_ {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity.  Shrinking drops the oldest readings immediately.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    fn evict(&mut self) {
        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
    }
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{classify, Category};
    use chrono::{Local, TimeZone};
    use proptest::prelude::*;

    fn reading(value: f64, second: u32) -> Reading {
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, second).unwrap();
        Reading::new(value, ts)
    }

    fn values(window: &WindowStore) -> Vec<f64> {
        window.all().map(Reading::value).collect()
    }

    #[test]
    fn empty_window_has_no_latest() {
        let window = WindowStore::default();
        assert!(window.latest().is_none());
        assert!(window.is_empty());
        assert_eq!(window.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn latest_tracks_last_push() {
        let mut window = WindowStore::default();
        window.push(reading(12.0, 0));
        window.push(reading(34.0, 1));
        assert_eq!(window.latest(), Some(&reading(34.0, 1)));
    }

    #[test]
    fn evicts_oldest_first() {
        let mut window = WindowStore::new(3);
        for (i, v) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
            window.push(reading(v, i as u32));
        }
        assert_eq!(values(&window), [3.0, 4.0, 5.0]);
        assert_eq!(window.latest().map(Reading::value), Some(5.0));
    }

    #[test]
    fn zero_capacity_is_coerced_to_one() {
        let mut window = WindowStore::new(0);
        window.push(reading(1.0, 0));
        window.push(reading(2.0, 1));
        assert_eq!(window.capacity(), 1);
        assert_eq!(values(&window), [2.0]);
    }

    #[test]
    fn shrinking_capacity_drops_oldest() {
        let mut window = WindowStore::new(5);
        for i in 0..5 {
            window.push(reading(i as f64, i));
        }
        window.set_capacity(2);
        assert_eq!(values(&window), [3.0, 4.0]);

        window.set_capacity(4);
        window.push(reading(9.0, 9));
        assert_eq!(values(&window), [3.0, 4.0, 9.0]);
    }

    #[test]
    fn mixed_scenario_categories() {
        let mut window = WindowStore::default();
        for (i, v) in [10.0, 60.0, 250.0, 600.0].into_iter().enumerate() {
            window.push(reading(v, i as u32));
        }
        let categories: Vec<_> = window.all().map(|r| classify(r.value())).collect();
        assert_eq!(
            categories,
            [Category::Dark, Category::Normal, Category::Bright, Category::VeryBright]
        );
        assert_eq!(window.len(), 4);
    }

    proptest! {
        #[test]
        fn length_is_min_of_pushes_and_capacity(
            capacity in 1usize..32,
            pushes in proptest::collection::vec(-1_000.0f64..100_000.0, 0..100),
        ) {
            let mut window = WindowStore::new(capacity);
            for (i, v) in pushes.iter().enumerate() {
                window.push(reading(*v, (i % 60) as u32));
                prop_assert!(window.len() <= capacity);
            }
            prop_assert_eq!(window.len(), pushes.len().min(capacity));
        }

        #[test]
        fn retains_last_capacity_in_arrival_order(
            capacity in 1usize..16,
            pushes in proptest::collection::vec(0.0f64..10_000.0, 1..64),
        ) {
            let mut window = WindowStore::new(capacity);
            for (i, v) in pushes.iter().enumerate() {
                window.push(reading(*v, (i % 60) as u32));
            }
            let start = pushes.len().saturating_sub(capacity);
            prop_assert_eq!(values(&window), pushes[start..].to_vec());
            prop_assert_eq!(window.latest().map(Reading::value), pushes.last().copied());
        }
    }
}
