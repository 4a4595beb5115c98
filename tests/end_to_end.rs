//! End-to-end tests driving the CLI dispatch over the core crates.

use bitprobe_cli::{run, CliError};
use bitprobe_core::ProbeError;

fn run_line(line: &str) -> Result<String, CliError> {
    let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();
    run(&tokens)
}

fn fatal(line: &str) -> CliError {
    run_line(line).expect_err("expected a fatal error")
}

#[test]
fn test_no_args_shows_help() {
    let out = run(&[]).unwrap();
    assert!(out.contains("Available commands:"));
    assert!(out.contains("Available options"));
}

#[test]
fn test_hex() {
    let out = run_line("0x42").unwrap();
    assert!(out.contains("1000010"));
    assert!(out.contains("popcount(A)"));
}

#[test]
fn test_bin() {
    let out = run_line("0b10010010").unwrap();
    assert!(out.contains("146"));
}

#[test]
fn test_dec() {
    let out = run_line("984823").unwrap();
    assert!(out.contains("f06f7"));
}

#[test]
fn test_two_nums() {
    let out = run_line("0x42 0x43").unwrap();
    assert!(out.contains("A ^ B"));
}

#[test]
fn test_mixed_repr() {
    let out = run_line("0x43 91").unwrap();
    assert!(out.contains("A + B"));
}

#[test]
fn test_invalid_num() {
    assert!(matches!(
        fatal("0x4az"),
        CliError::ImplicitDispatch {
            source: ProbeError::InvalidInput(_),
            ..
        }
    ));
}

#[test]
fn test_two_nums_one_invalid() {
    assert!(matches!(
        fatal("0x43 9v"),
        CliError::ImplicitDispatch {
            source: ProbeError::InvalidInput(_),
            ..
        }
    ));
}

#[test]
fn test_bitfield() {
    let out = run_line("bf sign:1,exponent:8,fraction:23 0xfff1a238").unwrap();
    assert!(out.contains("fraction [23]"));
    assert!(out.contains("Hex"));
}

#[test]
fn test_bitfield_invalid() {
    assert!(matches!(
        fatal("bf sign;1,exponent:8,fraction:23 0xfff1a238"),
        CliError::Probe(ProbeError::SpecParse { .. })
    ));
}

#[test]
fn test_bitfield_too_narrow() {
    assert!(matches!(
        fatal("bf sign:1,exponent:8 0xfff1a238"),
        CliError::Probe(ProbeError::WidthMismatch { .. })
    ));
}

#[test]
fn test_one() {
    assert!(run_line("one 0x43").is_ok());
}

#[test]
fn test_one_invalid() {
    assert!(matches!(
        fatal("one 0x43 43"),
        CliError::Probe(ProbeError::Arity { .. })
    ));
}

#[test]
fn test_two() {
    assert!(run_line("two 0x45 54").is_ok());
}

#[test]
fn test_two_invalid() {
    assert!(matches!(
        fatal("two 0x43"),
        CliError::Probe(ProbeError::Arity { .. })
    ));
}

#[test]
fn test_fixed_width_table_is_deterministic() {
    let out = run_line("two 0x45 54 n=8 f=grid").unwrap();
    // at width 8 the inputs render as 45/36 hex
    assert!(out.contains("45"));
    assert!(out.contains("36"));
    assert!(out.contains("01000101"));
    assert!(out.contains("00110110"));
}

#[test]
fn test_overflow_disabled_passes_negatives_through() {
    let out = run_line("two 0x45 54 n=8 o=0").unwrap();
    assert!(out.contains("-15"));
    let overflowed = run_line("two 0x45 54 n=8").unwrap();
    assert!(overflowed.contains("11110001"));
}

#[test]
fn test_msbfirst_disabled_reverses_slices() {
    let msb = run_line("bf hi:4,lo:4 0xf0").unwrap();
    let lsb = run_line("bf hi:4,lo:4 0xf0 m=0").unwrap();
    assert!(msb.contains("1111"));
    assert!(lsb.contains("0000"));
    assert_ne!(msb, lsb);
}

#[test]
fn test_help_command() {
    let out = run_line("help").unwrap();
    assert!(out.contains("\tone: "));
}
