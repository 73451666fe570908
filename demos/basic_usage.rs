// ============================================================================
// Basic Usage Example
// ============================================================================

use str_to_num::prelude::*;

const STR: &str = "1234567890";
const WSTR: [u16; 10] = wide_literal(b"1234567890");

// Evaluated by the compiler
const INT1: ParseResult<i32> = parse_i32(CodeUnits::narrow_str(STR).substr(0, 5), IntFormat::Auto);
const INT2: ParseResult<i32> = parse_i32(CodeUnits::wide(&WSTR).tail(5), IntFormat::Auto);
const LL1: ParseResult<i64> = parse_i64(CodeUnits::narrow_str("0xABCDEF"), IntFormat::Auto);

const _: () = assert!(matches!(INT1.get(), Some(&12345)));
const _: () = assert!(matches!(INT2.get(), Some(&67890)));
const DBL1: ParseResult<f64> =
    parse_f64(CodeUnits::narrow_str("3.14159265358979"), FloatFormat::General);
const DBL2: ParseResult<f64> =
    parse_f64(CodeUnits::wide(&wide_literal(b"-987.654321")), FloatFormat::General);
const FL_HEX: ParseResult<f32> =
    parse_f32(CodeUnits::wide(&wide_literal(b"0x1.Fp-2")), FloatFormat::Hex);

const _: () = assert!(matches!(LL1.get(), Some(&0xABCDEF)));
const _: () = assert!(matches!(DBL1.get(), Some(v) if v.to_bits() == 3.14159265358979f64.to_bits()));
const _: () = assert!(matches!(DBL2.get(), Some(v) if v.to_bits() == (-987.654321f64).to_bits()));
const _: () = assert!(matches!(FL_HEX.get(), Some(v) if v.to_bits() == 0.484375f32.to_bits()));

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== StrToNum Example ===\n");

    println!("Int1 = {}", INT1.value_or(-1));
    println!("Int2 = {}", INT2.value_or(-1));
    println!("LL1 = {:x}", LL1.value_or(-1));

    let ll2 = str_to_ll(&wide_literal(b"0xFEDCBA"));
    println!("LL2 = {:x}", ll2.value_or(-1));

    let ll3 = str_to_ll(&wide_literal(b"-0xACE987"));
    println!("LL3 = {}", ll3.value_or(-1));

    println!("Dbl1 = {:.14}", DBL1.value_or(-1.0));
    println!("Dbl2 = {:.6}", DBL2.value_or(-1.0));
    println!("flHex = {:.6}", FL_HEX.value_or(-1.0));

    // The same literals at run time give the same bits
    let dbl1 = str_to_double("3.14159265358979");
    let fl_hex = parse_float::<f32>(&wide_literal(b"0x1.Fp-2"), FloatFormat::Hex);
    println!("run time matches: {}", dbl1 == DBL1 && fl_hex == FL_HEX);

    // Strict mode reports why a literal was rejected
    println!("\nStrict mode:");
    let parser = NumberParser::new(ParserConfig::source_literals());
    for literal in ["0x", "-5", "99999999999999999999", "1e"] {
        match parser.try_integer::<u32>(literal) {
            Ok(value) => println!("  {literal:>22} -> {value}"),
            Err(error) => println!("  {literal:>22} -> {error}"),
        }
    }
    match parser.try_float::<f64>("0x1.F") {
        Ok(value) => println!("  {:>22} -> {value}", "0x1.F"),
        Err(error) => println!("  {:>22} -> {error}", "0x1.F"),
    }
}
