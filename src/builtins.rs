use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::RuntimeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CruxType {
    Int,
    Bool,
    Void,
}

/// The functions every Crux program can call without declaring them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    ReadInt,
    PrintBool,
    PrintInt,
    Println,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [
        Builtin::ReadInt,
        Builtin::PrintBool,
        Builtin::PrintInt,
        Builtin::Println,
    ];

    /// Linker-visible name.
    pub fn symbol(self) -> &'static str {
        match self {
            Builtin::ReadInt => "readInt",
            Builtin::PrintBool => "printBool",
            Builtin::PrintInt => "printInt",
            Builtin::Println => "println",
        }
    }

    pub fn from_symbol(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.symbol() == name)
    }

    pub fn params(self) -> &'static [CruxType] {
        match self {
            Builtin::ReadInt | Builtin::Println => &[],
            Builtin::PrintBool => &[CruxType::Bool],
            Builtin::PrintInt => &[CruxType::Int],
        }
    }

    pub fn returns(self) -> CruxType {
        match self {
            Builtin::ReadInt => CruxType::Int,
            _ => CruxType::Void,
        }
    }

    pub(crate) fn check_arity(self, args: &[i64]) -> Result<(), RuntimeError> {
        let expected = self.params().len();
        if args.len() == expected {
            Ok(())
        } else {
            Err(RuntimeError::Arity {
                name: self.symbol(),
                expected,
                found: args.len(),
            })
        }
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Builtin {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| RuntimeError::UnknownBuiltin(s.to_owned()))
    }
}
