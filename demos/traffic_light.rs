//! Traffic Light
//!
//! This example cycles a field-less state machine through its states.
//!
//! Key concepts:
//! - The first declaration is the initial state
//! - Transitions return new values and never mutate
//! - `case_of` dispatches on the current state
//!
//! Run with: cargo run --example traffic_light

use possible_states::{possible_states, Cases, Error, StateInstance};

fn next(light: &StateInstance) -> Result<StateInstance, Error> {
    let target = light.case_of(
        Cases::new()
            .on("red", |_| "green")
            .on("green", |_| "yellow")
            .on("yellow", |_| "red"),
    )?;
    Ok(light.to(target)?)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light Example ===\n");

    let initial = possible_states(["red", "green", "yellow"])?;
    let mut light = initial.clone();

    for _ in 0..6 {
        println!("Light is {}", light.current());
        light = next(&light)?;
    }

    println!("\nInitial value still reads: {}", initial.current());
    println!("\n=== Example Complete ===");
    Ok(())
}
