pub mod simulator;

pub use simulator::ElevatorSimulator;
