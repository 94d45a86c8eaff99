//! Pattern 7: Command
//!
//! A request becomes an object with a single `execute` operation. The
//! remote control invoker holds whatever command is currently bound and
//! triggers it without ever learning the receiver's concrete type.
//!
//! Advantages:
//! - Requests can be stored, swapped, and passed around as values
//! - The invoker is decoupled from every receiver
//!
//! Trade-offs:
//! - A class per request inflates small codebases
//! - The indirection obscures what a button actually does
//!
//! Run with: cargo run --bin p7_command

use std::rc::Rc;

trait Command {
    fn execute(&self);
}

// Receiver: the device the commands operate on.
struct Light {
    location: String,
}

impl Light {
    fn on(&self) {
        println!("{} light is on", self.location);
    }

    fn off(&self) {
        println!("{} light is off", self.location);
    }
}

struct LightOnCommand {
    light: Rc<Light>,
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.on();
    }
}

struct LightOffCommand {
    light: Rc<Light>,
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.off();
    }
}

// Invoker: knows only the Command trait.
struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    fn new() -> Self {
        RemoteControl { command: None }
    }

    fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    fn press_button(&self) {
        if let Some(command) = &self.command {
            command.execute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingCommand {
        label: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Command for RecordingCommand {
        fn execute(&self) {
            self.log.borrow_mut().push(self.label);
        }
    }

    #[test]
    fn pressing_the_button_runs_the_bound_command() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut remote = RemoteControl::new();

        remote.set_command(Box::new(RecordingCommand {
            label: "on",
            log: log.clone(),
        }));
        remote.press_button();

        assert_eq!(*log.borrow(), vec!["on"]);
    }

    #[test]
    fn rebinding_changes_what_the_button_does() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut remote = RemoteControl::new();

        remote.set_command(Box::new(RecordingCommand {
            label: "on",
            log: log.clone(),
        }));
        remote.press_button();

        remote.set_command(Box::new(RecordingCommand {
            label: "off",
            log: log.clone(),
        }));
        remote.press_button();

        assert_eq!(*log.borrow(), vec!["on", "off"]);
    }

    #[test]
    fn pressing_with_nothing_bound_is_a_no_op() {
        let remote = RemoteControl::new();
        remote.press_button();
    }
}

fn main() {
    println!("=== Command Pattern ===");

    let light = Rc::new(Light {
        location: "Living room".to_string(),
    });

    let mut remote = RemoteControl::new();

    remote.set_command(Box::new(LightOnCommand {
        light: light.clone(),
    }));
    remote.press_button();

    remote.set_command(Box::new(LightOffCommand { light }));
    remote.press_button();
}
