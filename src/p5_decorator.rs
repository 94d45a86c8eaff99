//! Pattern 5: Decorator
//!
//! A plain coffee can be wrapped by any number of decorator layers. Each
//! layer owns the beverage it wraps, forwards both operations to it, and
//! augments the result: milk adds 2 to the cost and ", con latte" to the
//! description, sugar adds 1 and ", con zucchero". Layering order decides
//! the order of the suffixes.
//!
//! Advantages:
//! - Behavior stacks at runtime without subclass explosions
//! - Each layer stays small and single-purpose
//!
//! Trade-offs:
//! - Deep stacks are awkward to inspect and debug
//! - Object identity disappears behind the wrappers
//!
//! Run with: cargo run --bin p5_decorator

trait Beverage {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

struct Coffee;

impl Beverage for Coffee {
    fn cost(&self) -> u32 {
        10
    }

    fn description(&self) -> String {
        "Caffè semplice".to_string()
    }
}

struct Milk {
    wrapped: Box<dyn Beverage>,
}

impl Beverage for Milk {
    fn cost(&self) -> u32 {
        self.wrapped.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, con latte", self.wrapped.description())
    }
}

struct Sugar {
    wrapped: Box<dyn Beverage>,
}

impl Beverage for Sugar {
    fn cost(&self) -> u32 {
        self.wrapped.cost() + 1
    }

    fn description(&self) -> String {
        format!("{}, con zucchero", self.wrapped.description())
    }
}


fn main() {
    println!("=== Decorator Pattern ===");

    let mut order: Box<dyn Beverage> = Box::new(Coffee);
    println!("{} -> {}", order.description(), order.cost());

    order = Box::new(Milk { wrapped: order });
    println!("{} -> {}", order.description(), order.cost());

    order = Box::new(Sugar { wrapped: order });
    println!("{} -> {}", order.description(), order.cost());
}
