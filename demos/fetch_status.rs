//! Fetch Status
//!
//! This example models a network request whose states carry data.
//!
//! Key concepts:
//! - States declare payload fields with `name<field, ...>`
//! - Transitions must supply exactly the declared values
//! - `when` runs a callback only in the matching state
//! - Strict options reject surplus values for field-less states
//!
//! Run with: RUST_LOG=trace cargo run --example fetch_status

use possible_states::{Cases, Error, Options, PossibleStatesBuilder, StateInstance};
use serde_json::json;

fn render(request: &StateInstance) -> Result<String, Error> {
    let line = request.case_of(
        Cases::new()
            .on("loaded", |data| {
                let body = data.and_then(|d| d.get("body")).cloned();
                format!("loaded: {}", body.unwrap_or_default())
            })
            .on("failed", |data| {
                let reason = data.and_then(|d| d.get("reason")).cloned();
                format!("failed: {}", reason.unwrap_or_default())
            })
            .otherwise(|| "waiting...".to_string()),
    )?;
    Ok(line)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Fetch Status Example ===\n");

    let idle = PossibleStatesBuilder::new()
        .states(["idle", "loading", "loaded<body, status>", "failed<reason>"])
        .options(Options::strict())
        .build()?;

    let loading = idle.to("loading")?;
    let loaded = loading.to_with("loaded", [json!("<html></html>"), json!(200)])?;
    let failed = loading.to_with("failed", ["timeout"])?;

    for request in [&idle, &loading, &loaded, &failed] {
        println!("{:<40} -> {}", request.to_string(), render(request)?);
    }

    loaded.when("loaded", |data| {
        if let Some(data) = data {
            println!("\nstatus code: {}", data.get("status").cloned().unwrap_or_default());
        }
    });

    match loading.to_with("loaded", ["only one value"]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("arity check: {e}"),
    }
    match idle.to_with("loading", ["surplus"]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("strict options: {e}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
