//! Named arguments from objects, JSON and serializable structs.
//!
//! Run with: cargo run --example named_arguments

use serde::Serialize;
use strformat::{format, format_serialize, value, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Order {
    id: u32,
    customer: String,
    items: Vec<String>,
    total: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    // A single object argument is looked up by key
    let user = value!({"name": "Ada", "role": "admin", "logins": 42});
    println!("{}", format("%{name} (%{role}) logged in %{logins}d times", &[user]));

    // Arguments can come straight from JSON
    let json: Value = serde_json::from_str(r#"{"host": "localhost", "port": 8080}"#)?;
    println!("{}", format("listening on %{host}:%{port}d", &[json]));

    // Or from any serializable struct
    let order = Order {
        id: 17,
        customer: "ACME".to_string(),
        items: vec!["bolt".to_string(), "nut".to_string()],
        total: 99.5,
    };
    println!(
        "{}",
        format_serialize("#%{id}05d %{customer}-6s [%{items}] %{total}.2f", &order)?
    );

    // Missing keys render as empty text
    println!("{}", format("[%{missing}s]", &[value!({"present": 1})]));

    Ok(())
}
