//! Pattern 11: Builder
//!
//! Construction of a multi-part meal is split into discrete step
//! operations. A separate director invokes the steps in a fixed order,
//! so the sequencing lives apart from the product's representation. This
//! is the director flavor of the pattern; the fluent method-chaining
//! flavor is the more common shape in Rust APIs.
//!
//! Advantages:
//! - Step order is decided once, in the director
//! - The same steps can assemble different products over time
//!
//! Trade-offs:
//! - Heavier than a fluent builder for small products
//! - Step granularity is frozen into the builder interface
//!
//! Run with: cargo run --bin p11_builder

#[derive(Debug, Default)]
struct Meal {
    parts: Vec<String>,
}

impl Meal {
    fn parts(&self) -> &[String] {
        &self.parts
    }

    fn describe(&self) -> String {
        format!("Meal with parts: {}", self.parts.join(", "))
    }
}

struct MealBuilder {
    meal: Meal,
}

impl MealBuilder {
    fn new() -> Self {
        MealBuilder {
            meal: Meal::default(),
        }
    }

    fn build_part_a(&mut self) {
        self.meal.parts.push("burger".to_string());
    }

    fn build_part_b(&mut self) {
        self.meal.parts.push("drink".to_string());
    }

    fn finish(self) -> Meal {
        self.meal
    }
}

// Knows the recipe, not the product's insides.
struct Director;

impl Director {
    fn construct(builder: &mut MealBuilder) {
        builder.build_part_a();
        builder.build_part_b();
    }
}


fn main() {
    println!("=== Builder Pattern ===");

    let mut builder = MealBuilder::new();
    Director::construct(&mut builder);

    let meal = builder.finish();
    println!("{}", meal.describe());
    println!("parts in build order: {:?}", meal.parts());
}
