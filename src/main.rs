/* 3rd party libraries */
use clap::Arg;
use clap::Command;
use log::error;
use std::fs::File;
use std::io::BufReader;
use std::process;

/* Custom libraries */
use simulator::ElevatorSimulator;

/* Modules */
mod config;
mod reader;
mod shared;
mod simulator;

/* Main */
fn main() {
    env_logger::init();

    let arguments = Command::new("elevator-sim")
        .about("Computes final elevator floors from a movement command file")
        .arg(
            Arg::new("infile")
                .help("Path to the simulation command file")
                .required(true),
        )
        .try_get_matches();

    let arguments = match arguments {
        Ok(arguments) => arguments,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    let config = unwrap_or_exit!(config::load_config());

    // The argument is required, so it is always present here
    let path = arguments.value_of("infile").unwrap();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("Unable to open file '{}'", path);
            process::exit(1);
        }
    };

    let stream = BufReader::with_capacity(config.reader.buffer_capacity, file);
    let mut simulator = ElevatorSimulator::new(stream);

    if let Err(e) = simulator.run() {
        println!("Error: {}", e);
        process::exit(1);
    }

    for elevator in 1..=simulator.elevators() {
        println!(
            "Elevator {} is on floor {}",
            elevator,
            simulator.floor(elevator)
        );
    }
}
