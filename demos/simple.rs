//! Positional formatting with `format` and `sprintf!`.
//!
//! Run with: cargo run --example simple

use strformat::{format, sprintf, Value};

fn main() {
    let args = [Value::from("Alice"), Value::from(30), Value::from(1234.5)];

    // Implicit specifiers take arguments in order
    println!("{}", format("%s is %d years old", &args));

    // Width, alignment and padding
    println!("{}", format("[%-10s][%5d][%010.2f]", &args));

    // Explicit positions do not move the implicit cursor
    println!("{}", format("%2$d, %1$s, %s again", &args));

    // Radix and exponent conversions
    println!("{}", sprintf!("%d = 0x%x = 0%o = 0b%b", 255, 255, 255, 255));
    println!("{}", sprintf!("%e / %.2E", 299_792_458, 0.000_012_5));

    // Custom pad characters and sign flags
    println!("{}", sprintf!("%'*8s|%+d|% d", "pad", 7, 7));

    // `%%` is a literal percent sign, unknown letters stay as text
    println!("{}", sprintf!("100%% done, %y kept", "ignored"));
}
