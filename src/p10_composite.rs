//! Pattern 10: Composite
//!
//! Leaves and containers share one `operation` capability. Invoking it on
//! a composite recursively invokes it on every child and folds the pieces
//! into a formatted string, so callers treat a whole tree exactly like a
//! single node.
//!
//! Advantages:
//! - One code path for single nodes and whole trees
//! - Trees nest to any depth without new types
//!
//! Trade-offs:
//! - The shared trait cannot express leaf-only or container-only rules
//! - Easy to build trees that make no sense for the domain
//!
//! Run with: cargo run --bin p10_composite

use itertools::Itertools;

trait Component {
    fn operation(&self) -> String;
}

struct Leaf {
    name: String,
}

impl Leaf {
    fn new(name: impl Into<String>) -> Self {
        Leaf { name: name.into() }
    }
}

impl Component for Leaf {
    fn operation(&self) -> String {
        self.name.clone()
    }
}

struct Composite {
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    fn new(name: impl Into<String>) -> Self {
        Composite {
            name: name.into(),
            children: Vec::new(),
        }
    }

    fn add(&mut self, child: Box<dyn Component>) {
        self.children.push(child);
    }
}

impl Component for Composite {
    fn operation(&self) -> String {
        let inner = self
            .children
            .iter()
            .map(|child| child.operation())
            .join(" + ");
        format!("{}({})", self.name, inner)
    }
}


fn main() {
    println!("=== Composite Pattern ===");

    let mut branch = Composite::new("Branch");
    branch.add(Box::new(Leaf::new("A")));
    branch.add(Box::new(Leaf::new("B")));

    let mut root = Composite::new("Root");
    root.add(Box::new(branch));
    root.add(Box::new(Leaf::new("C")));

    println!("Tree operation: {}", root.operation());
}
