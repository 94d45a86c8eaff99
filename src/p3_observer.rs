//! Pattern 3: Observer
//!
//! A ticker holds an ordered list of subscribed observers. Setting a new
//! price stores it and notifies every observer in attachment order through
//! a single-argument `update` callback.
//!
//! Advantages:
//! - The publisher never learns the concrete observer types
//! - Observers come and go without touching the publisher
//!
//! Trade-offs:
//! - Update flow is implicit and can be hard to follow
//! - Notification order becomes an accidental contract
//!
//! Run with: cargo run --bin p3_observer

use std::cell::RefCell;
use std::rc::Rc;

trait Observer {
    fn update(&self, price: i32);
}

struct PriceDisplay {
    name: String,
}

impl Observer for PriceDisplay {
    fn update(&self, price: i32) {
        println!("{} display: price is {}", self.name, price);
    }
}

struct PriceHistory {
    seen: RefCell<Vec<i32>>,
}

impl PriceHistory {
    fn new() -> Self {
        PriceHistory {
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Observer for PriceHistory {
    fn update(&self, price: i32) {
        self.seen.borrow_mut().push(price);
        println!("History: recorded {} ({} readings)", price, self.seen.borrow().len());
    }
}

struct StockTicker {
    price: i32,
    observers: Vec<Rc<dyn Observer>>,
}

impl StockTicker {
    fn new() -> Self {
        StockTicker {
            price: 0,
            observers: Vec::new(),
        }
    }

    fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    fn set_price(&mut self, price: i32) {
        self.price = price;
        self.notify();
    }

    // Attachment order is notification order.
    fn notify(&self) {
        for observer in &self.observers {
            observer.update(self.price);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Records which observer saw which price, across all attached recorders.
    struct Recorder {
        name: &'static str,
        journal: Rc<RefCell<Vec<(&'static str, i32)>>>,
    }

    impl Observer for Recorder {
        fn update(&self, price: i32) {
            self.journal.borrow_mut().push((self.name, price));
        }
    }

    #[test]
    fn every_observer_receives_the_update_in_attachment_order() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut ticker = StockTicker::new();

        ticker.attach(Rc::new(Recorder {
            name: "first",
            journal: journal.clone(),
        }));
        ticker.attach(Rc::new(Recorder {
            name: "second",
            journal: journal.clone(),
        }));

        ticker.set_price(250);

        assert_eq!(*journal.borrow(), vec![("first", 250), ("second", 250)]);
    }

    #[test]
    fn history_observer_accumulates_updates() {
        let history = Rc::new(PriceHistory::new());
        let mut ticker = StockTicker::new();
        ticker.attach(history.clone());

        ticker.set_price(10);
        ticker.set_price(12);

        assert_eq!(*history.seen.borrow(), vec![10, 12]);
    }
}

fn main() {
    println!("=== Observer Pattern ===");

    let mut ticker = StockTicker::new();
    ticker.attach(Rc::new(PriceDisplay {
        name: "Main".to_string(),
    }));
    ticker.attach(Rc::new(PriceHistory::new()));

    ticker.set_price(250);

    println!("\n=== Second Update ===");
    ticker.set_price(248);
}
