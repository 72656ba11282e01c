use std::fmt::Arguments;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::builtins::Builtin;
use crate::config::ConsoleConfig;
use crate::error::{IoFailure, Result};
use crate::scan::scan_int;

/// The Crux console builtins over an arbitrary pair of streams.
///
/// Writes are best-effort: a failing output stream is logged and otherwise
/// ignored, so only reads can fail.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::stdio_with_config(ConsoleConfig::default())
    }

    pub fn stdio_with_config(config: ConsoleConfig) -> Self {
        Self::with_config(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R, W> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, ConsoleConfig::default())
    }

    pub fn with_config(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn get_ref(&self) -> (&R, &W) {
        (&self.input, &self.output)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn emit(output: &mut W, args: Arguments<'_>, flush: bool) {
        let written = output.write_fmt(args).and_then(|_| {
            if flush {
                output.flush()
            } else {
                Ok(())
            }
        });
        if let Err(e) = written {
            tracing::debug!("console write failed: {}", e);
        }
    }

    pub fn print_int(&mut self, value: i64) {
        Self::emit(&mut self.output, format_args!("{}", value), self.config.flush);
    }

    pub fn println(&mut self) {
        Self::emit(&mut self.output, format_args!("\n"), self.config.flush);
    }

    /// Any nonzero value prints as `true`.
    pub fn print_bool(&mut self, value: i64) {
        Self::emit(&mut self.output, format_args!("{}", value != 0), self.config.flush);
    }

    /// Prompts, then blocks until an integer (or a failure) comes in.
    pub fn read_int(&mut self) -> std::result::Result<i64, IoFailure> {
        // the prompt must be visible before we block
        Self::emit(&mut self.output, format_args!("{}", self.config.prompt), true);
        scan_int(&mut self.input)
    }

    /// `read_int` with the configured failure policy applied.
    pub fn read_int_with_policy(&mut self) -> std::result::Result<i64, IoFailure> {
        let read = self.read_int();
        self.config.on_read_failure.resolve(read)
    }

    /// Runs a builtin the way generated code would call it. Only `readInt`
    /// produces a value.
    pub fn call(&mut self, builtin: Builtin, args: &[i64]) -> Result<Option<i64>> {
        builtin.check_arity(args)?;
        tracing::trace!(%builtin, ?args, "call");
        Ok(match builtin {
            Builtin::ReadInt => Some(self.read_int_with_policy()?),
            Builtin::PrintBool => {
                self.print_bool(args[0]);
                None
            }
            Builtin::PrintInt => {
                self.print_int(args[0]);
                None
            }
            Builtin::Println => {
                self.println();
                None
            }
        })
    }

    pub fn call_by_name(&mut self, name: &str, args: &[i64]) -> Result<Option<i64>> {
        self.call(name.parse()?, args)
    }
}
