//! The builtins as generated code sees them: unmangled C-ABI functions on
//! the process's stdin and stdout.
#![allow(non_snake_case)]

use crate::console::Console;

#[no_mangle]
pub extern "C" fn printInt(x: i64) {
    Console::stdio().print_int(x);
}

#[no_mangle]
pub extern "C" fn println() {
    Console::stdio().println();
}

#[no_mangle]
pub extern "C" fn printBool(x: i64) {
    Console::stdio().print_bool(x);
}

/// There is no way to report failure through this signature, so a failed
/// read yields 0 (after logging it).
#[no_mangle]
pub extern "C" fn readInt() -> i64 {
    Console::stdio().read_int_with_policy().unwrap_or(0)
}
