//! Small runnable demonstration of the identity engine: build a handful of
//! values — a scalar, a string, a nested vector, a map — and print their
//! 256-bit content addresses in hex.
//!
//! Run with:
//!   cargo run --example identity_demo

use anyhow::Result;
use dacite::Value;

fn print_hash(label: &str, value: &Value) -> Result<()> {
    let hash = value.value_hash()?;
    println!("{label:<28} {}", hash.to_hex());
    Ok(())
}

fn main() -> Result<()> {
    print_hash("null", &Value::Null)?;
    print_hash("bool(true)", &Value::Bool(true))?;
    print_hash("i32(42)", &Value::I32(42))?;
    print_hash("i64(42)", &Value::I64(42))?;
    print_hash("string(\"hello\")", &Value::string_from("hello"))?;
    print_hash("blob([0x01, 0x02, 0x03])", &Value::blob_from(&[1, 2, 3]))?;

    let nested = Value::vector_from([
        Value::I32(1),
        Value::vector_from([Value::I32(2), Value::I32(3)]),
        Value::string_from("leaf"),
    ]);
    print_hash("vector([1, [2, 3], \"leaf\"])", &nested)?;

    let map_ab = Value::empty_map()
        .map_insert(Value::string_from("a"), Value::I32(1))?
        .map_insert(Value::string_from("b"), Value::I32(2))?;
    let map_ba = Value::empty_map()
        .map_insert(Value::string_from("b"), Value::I32(2))?
        .map_insert(Value::string_from("a"), Value::I32(1))?;

    print_hash("map{a:1, b:2} (inserted a,b)", &map_ab)?;
    print_hash("map{a:1, b:2} (inserted b,a)", &map_ba)?;
    assert_eq!(map_ab.value_hash()?, map_ba.value_hash()?);
    println!("\nmap identity confirmed order-independent.");

    Ok(())
}
