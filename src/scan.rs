use std::io::{BufRead, ErrorKind};

use crate::error::IoFailure;

// i64::MIN has 19 significant digits; anything past 20 is out of range anyway
const MAX_DIGITS: usize = 20;

fn peek<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<u8>, IoFailure> {
    loop {
        match input.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

// same set as C's isspace() in the "C" locale
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Reads one decimal integer the way `scanf("%ld")` does.
///
/// Leading whitespace is skipped, then an optional sign and a run of digits
/// are consumed. The first byte after the digits stays in the stream, so a
/// later call picks up where this one stopped.
pub fn scan_int<R: BufRead + ?Sized>(input: &mut R) -> Result<i64, IoFailure> {
    while let Some(b) = peek(input)? {
        if !is_space(b) {
            break;
        }
        input.consume(1);
    }

    let mut literal = String::new();
    match peek(input)? {
        None => return Err(IoFailure::EndOfInput),
        Some(sign @ (b'+' | b'-')) => {
            literal.push(sign as char);
            input.consume(1);
        }
        Some(_) => {}
    }

    let mut seen_digit = false;
    let mut significant = 0;
    while let Some(b) = peek(input)? {
        if !b.is_ascii_digit() {
            break;
        }
        input.consume(1);
        seen_digit = true;
        if b == b'0' && significant == 0 {
            continue;
        }
        significant += 1;
        if significant <= MAX_DIGITS {
            literal.push(b as char);
        }
    }

    if !seen_digit {
        return Err(match peek(input)? {
            None => IoFailure::EndOfInput,
            Some(found) => IoFailure::Malformed { found },
        });
    }
    if significant == 0 {
        literal.push('0');
    }
    if significant > MAX_DIGITS {
        literal.push_str("...");
        return Err(IoFailure::OutOfRange { literal });
    }

    literal.parse().map_err(|_| IoFailure::OutOfRange { literal })
}
