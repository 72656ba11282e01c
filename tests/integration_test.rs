use std::io::{self, Cursor, Write};

use crux_rt::{Builtin, Console, ConsoleConfig, IoFailure, ReadPolicy, RuntimeError};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn strict(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    let config = ConsoleConfig {
        on_read_failure: ReadPolicy::Propagate,
        ..ConsoleConfig::default()
    };
    Console::with_config(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config)
}

fn output<R>(console: Console<R, Vec<u8>>) -> String {
    String::from_utf8(console.into_inner().1).unwrap()
}

fn test_print(f: impl FnOnce(&mut Console<Cursor<Vec<u8>>, Vec<u8>>), expected: &str) {
    let mut c = console("");
    f(&mut c);
    assert_eq!(output(c), expected);
}

#[test]
fn test_print_int() {
    test_print(|c| c.print_int(0), "0");
    test_print(|c| c.print_int(-42), "-42");
    test_print(|c| c.print_int(1000), "1000");
    test_print(|c| c.print_int(i64::MAX), "9223372036854775807");
    test_print(|c| c.print_int(i64::MIN), "-9223372036854775808");
}

#[test]
fn test_println() {
    test_print(|c| c.println(), "\n");
}

#[test]
fn test_print_bool() {
    test_print(|c| c.print_bool(0), "false");
    test_print(|c| c.print_bool(1), "true");
    test_print(|c| c.print_bool(-1), "true");
    test_print(|c| c.print_bool(i64::MIN), "true");
}

#[test]
fn test_no_separators() {
    test_print(|c| {
        c.print_int(1);
        c.print_bool(0);
        c.print_int(-2);
        c.println();
    }, "1false-2\n");
}

#[test]
fn test_read_int() {
    let mut c = strict("42\n");
    assert_eq!(c.read_int().unwrap(), 42);
    assert_eq!(output(c), "int?");
}

#[test]
fn test_read_sequence() {
    let mut c = strict("  7\n-3\n");
    assert_eq!(c.read_int().unwrap(), 7);
    assert_eq!(c.read_int().unwrap(), -3);
    assert!(matches!(c.read_int(), Err(IoFailure::EndOfInput)));
    assert_eq!(output(c), "int?int?int?");
}

#[test]
fn test_read_malformed() {
    let mut c = strict("abc\n");
    assert!(matches!(c.read_int(), Err(IoFailure::Malformed { found: b'a' })));
}

#[test]
fn test_read_fallback() {
    let mut c = console("abc\n");
    assert_eq!(c.read_int_with_policy().unwrap(), 0);

    let config = ConsoleConfig {
        on_read_failure: ReadPolicy::Fallback(-1),
        ..ConsoleConfig::default()
    };
    let mut c = Console::with_config(Cursor::new(Vec::new()), Vec::new(), config);
    assert_eq!(c.read_int_with_policy().unwrap(), -1);
}

#[test]
fn test_custom_prompt() {
    let config = ConsoleConfig {
        prompt: String::from("> "),
        on_read_failure: ReadPolicy::Propagate,
        ..ConsoleConfig::default()
    };
    let mut c = Console::with_config(Cursor::new(b"5".to_vec()), Vec::new(), config);
    assert_eq!(c.read_int().unwrap(), 5);
    assert_eq!(c.config().prompt, "> ");
    assert_eq!(output(c), "> ");
}

#[test]
fn test_call() {
    let mut c = strict("3\n");
    assert_eq!(c.call(Builtin::ReadInt, &[]).unwrap(), Some(3));
    assert_eq!(c.call_by_name("printInt", &[12]).unwrap(), None);
    assert_eq!(c.call_by_name("printBool", &[0]).unwrap(), None);
    assert_eq!(c.call(Builtin::Println, &[]).unwrap(), None);
    assert_eq!(output(c), "int?12false\n");
}

#[test]
fn test_call_errors() {
    let mut c = strict("");
    assert!(matches!(c.call_by_name("printString", &[]), Err(RuntimeError::UnknownBuiltin(_))));
    assert!(matches!(
        c.call(Builtin::PrintInt, &[]),
        Err(RuntimeError::Arity { name: "printInt", expected: 1, found: 0 })
    ));
    assert!(matches!(
        c.call(Builtin::ReadInt, &[]),
        Err(RuntimeError::Io(IoFailure::EndOfInput))
    ));
    assert_eq!(output(c), "int?");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_writes_are_best_effort() {
    let mut c = Console::new(Cursor::new(b"8".to_vec()), BrokenPipe);
    c.print_int(1);
    c.print_bool(1);
    c.println();
    assert_eq!(c.read_int().unwrap(), 8);
}
