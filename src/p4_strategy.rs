//! Pattern 4: Strategy
//!
//! A sorter delegates its one operation to an interchangeable algorithm.
//! Swapping the held strategy changes the sorter's behavior with no other
//! code change. Two toy sorts stand in for the algorithm family.
//!
//! Advantages:
//! - Algorithms vary independently of the code that uses them
//! - New strategies slot in without touching the context
//!
//! Trade-offs:
//! - More moving parts than calling the algorithm directly
//! - Callers must know enough to pick a strategy
//!
//! Run with: cargo run --bin p4_strategy

trait SortStrategy {
    fn sort(&self, data: &mut [i32]);
    fn name(&self) -> &str;
}

struct BubbleSort;

impl SortStrategy for BubbleSort {
    fn sort(&self, data: &mut [i32]) {
        for pass in 0..data.len() {
            for i in 0..data.len().saturating_sub(pass + 1) {
                if data[i] > data[i + 1] {
                    data.swap(i, i + 1);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "bubble sort"
    }
}

struct QuickSort;

impl QuickSort {
    fn quicksort(data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        let pivot = Self::partition(data);
        let (left, right) = data.split_at_mut(pivot);
        Self::quicksort(left);
        Self::quicksort(&mut right[1..]);
    }

    // Lomuto partition with the last element as pivot.
    fn partition(data: &mut [i32]) -> usize {
        let pivot = data.len() - 1;
        let mut store = 0;
        for i in 0..pivot {
            if data[i] <= data[pivot] {
                data.swap(i, store);
                store += 1;
            }
        }
        data.swap(store, pivot);
        store
    }
}

impl SortStrategy for QuickSort {
    fn sort(&self, data: &mut [i32]) {
        Self::quicksort(data);
    }

    fn name(&self) -> &str {
        "quicksort"
    }
}

struct Sorter {
    strategy: Box<dyn SortStrategy>,
}

impl Sorter {
    fn new(strategy: Box<dyn SortStrategy>) -> Self {
        Sorter { strategy }
    }

    fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = strategy;
    }

    fn sort(&self, data: &mut [i32]) {
        self.strategy.sort(data);
    }

    fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: [i32; 7] = [64, 34, 25, 12, 22, 11, 90];
    const SORTED: [i32; 7] = [11, 12, 22, 25, 34, 64, 90];

    #[test]
    fn bubble_sort_orders_the_sample() {
        let mut data = SAMPLE;
        Sorter::new(Box::new(BubbleSort)).sort(&mut data);
        assert_eq!(data, SORTED);
    }

    #[test]
    fn quicksort_orders_the_sample() {
        let mut data = SAMPLE;
        Sorter::new(Box::new(QuickSort)).sort(&mut data);
        assert_eq!(data, SORTED);
    }

    #[test]
    fn swapping_the_strategy_changes_the_name_only() {
        let mut sorter = Sorter::new(Box::new(BubbleSort));
        assert_eq!(sorter.strategy_name(), "bubble sort");

        sorter.set_strategy(Box::new(QuickSort));
        assert_eq!(sorter.strategy_name(), "quicksort");

        let mut data = SAMPLE;
        sorter.sort(&mut data);
        assert_eq!(data, SORTED);
    }

    proptest! {
        #[test]
        fn both_strategies_agree_with_the_standard_sort(data in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut expected = data.clone();
            expected.sort_unstable();

            let mut bubbled = data.clone();
            BubbleSort.sort(&mut bubbled);
            prop_assert_eq!(&bubbled, &expected);

            let mut quicked = data;
            QuickSort.sort(&mut quicked);
            prop_assert_eq!(&quicked, &expected);
        }
    }
}

fn main() {
    println!("=== Strategy Pattern ===");

    let data = [64, 34, 25, 12, 22, 11, 90];
    let mut sorter = Sorter::new(Box::new(BubbleSort));

    let mut first = data;
    sorter.sort(&mut first);
    println!("{}: {:?}", sorter.strategy_name(), first);

    // Same context, different algorithm.
    sorter.set_strategy(Box::new(QuickSort));
    let mut second = data;
    sorter.sort(&mut second);
    println!("{}: {:?}", sorter.strategy_name(), second);
}
