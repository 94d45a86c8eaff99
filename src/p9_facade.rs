//! Pattern 9: Facade
//!
//! Starting this computer takes a fixed dance across three subsystems.
//! The facade owns all of them and exposes one `start` operation that
//! runs the sequence and returns the aggregated transcript, so callers
//! never choreograph the subsystems themselves.
//!
//! Advantages:
//! - One call replaces a fragile multi-step ritual
//! - Subsystems can change behind a stable entry point
//!
//! Trade-offs:
//! - The facade tends to accumulate every convenience wish
//! - Power users still need the subsystems for unusual flows
//!
//! Run with: cargo run --bin p9_facade

struct Cpu;

impl Cpu {
    fn freeze(&self) -> String {
        "CPU: freeze".to_string()
    }

    fn execute(&self) -> String {
        "CPU: execute".to_string()
    }
}

struct Memory;

impl Memory {
    fn load(&self, position: u32) -> String {
        format!("Memory: load at {:#06x}", position)
    }
}

struct HardDrive;

impl HardDrive {
    fn read(&self, sector: u32) -> String {
        format!("HardDrive: read sector {}", sector)
    }
}

struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    drive: HardDrive,
}

impl ComputerFacade {
    fn new() -> Self {
        ComputerFacade {
            cpu: Cpu,
            memory: Memory,
            drive: HardDrive,
        }
    }

    /// Runs the boot sequence and returns the transcript of every step.
    fn start(&self) -> String {
        [
            self.cpu.freeze(),
            self.drive.read(0),
            self.memory.load(0x100),
            self.cpu.execute(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_aggregates_every_subsystem_step_in_order() {
        let computer = ComputerFacade::new();
        let transcript = computer.start();

        assert_eq!(
            transcript,
            "CPU: freeze\nHardDrive: read sector 0\nMemory: load at 0x0100\nCPU: execute"
        );
    }
}

fn main() {
    println!("=== Facade Pattern ===");

    let computer = ComputerFacade::new();
    println!("{}", computer.start());
    println!("Computer started");
}
