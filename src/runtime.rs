use lazy_static::lazy_static;

use crate::library::{printBool, printInt, println, readInt};

lazy_static! {
    /// Symbol name and entry address of every builtin, for mapping into a JIT.
    pub static ref DEFAULT_RUNTIME: [(&'static str, usize); 4] = [
        ("readInt", readInt as usize),
        ("printBool", printBool as usize),
        ("printInt", printInt as usize),
        ("println", println as usize),
    ];
}
