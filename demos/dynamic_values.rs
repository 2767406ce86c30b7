//! How dynamically typed values are coerced by each conversion.
//!
//! Run with: cargo run --example dynamic_values

use strformat::{format, value, Value};

fn main() {
    let inputs = [
        value!(42),
        value!(-3.75),
        value!("17px"),
        value!("0x1f"),
        value!("3.5e2kg"),
        value!("abc"),
        value!([8, 9]),
        value!(true),
        value!(null),
    ];

    println!("{:<10} {:>8} {:>8} {:>10} {:>12}", "input", "%s", "%d", "%x", "%.2f");
    for input in &inputs {
        // wrapped so arrays and objects stay a single argument
        let args = [Value::Array(vec![input.clone()])];
        println!(
            "{:<10} {:>8} {:>8} {:>10} {:>12}",
            input.kind(),
            format("%s", &args),
            format("%d", &args),
            format("%x", &args),
            format("%.2f", &args),
        );
    }

    // A single array is the argument list itself; two arrays are two arguments
    println!("{}", format("%s and %s", &[value!(["one", "two"])]));
    println!("{}", format("%s and %s", &[value!(["one", "two"]), value!(["three"])]));
}
