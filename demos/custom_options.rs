//! Tuning limits and defaults with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use strformat::{format_with_options, FormatOptions, Formatter, Template, Value};

fn main() {
    let values = [Value::from(3.14159265), Value::from(2.71828183)];

    // Default float precision is 6 digits
    let default = Formatter::default();
    println!("default:   {}", default.format("%f %e", &values));

    // A different default applies only where no precision is given
    let short = Formatter::new(FormatOptions::new().with_default_precision(2));
    println!("precision: {}", short.format("%f %.4e", &values));

    // Oversized widths and precisions are clamped instead of allocating
    let capped = FormatOptions::new().with_max_width(12).with_max_precision(3);
    println!(
        "clamped:   [{}]",
        format_with_options("%1000000s|%.50f", &[Value::from("x"), Value::from(1)], &capped)
    );

    // Parse once, render many times with the same formatter
    let row = Template::new("%-8s%8.3f");
    for (name, value) in [("pi", 3.14159265), ("e", 2.71828183), ("phi", 1.61803399)] {
        println!("{}", row.format_with(&short, &[Value::from(name), Value::from(value)]));
    }
}
