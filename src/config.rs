use crate::error::IoFailure;

pub const DEFAULT_PROMPT: &str = "int?";

/// What `readInt` hands back when the input cannot be read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadPolicy {
    Propagate,
    Fallback(i64),
}

impl Default for ReadPolicy {
    fn default() -> Self {
        ReadPolicy::Fallback(0)
    }
}

impl ReadPolicy {
    pub fn resolve(self, read: Result<i64, IoFailure>) -> Result<i64, IoFailure> {
        match (self, read) {
            (_, Ok(v)) => Ok(v),
            (ReadPolicy::Propagate, Err(e)) => Err(e),
            (ReadPolicy::Fallback(v), Err(e)) => {
                tracing::warn!("readInt failed ({}), using {}", e, v);
                Ok(v)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub prompt: String,
    /// Flush after every write. Needed when `main` is not Rust's, since
    /// nothing flushes stdout at exit then.
    pub flush: bool,
    pub on_read_failure: ReadPolicy,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            flush: true,
            on_read_failure: ReadPolicy::default(),
        }
    }
}
