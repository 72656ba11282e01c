use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use clap::Parser;

use crux_rt::config::DEFAULT_PROMPT;
use crux_rt::library;
use crux_rt::logger::init_logger;
use crux_rt::{Builtin, Console, ConsoleConfig, ReadPolicy};

/// Run Crux console builtins against this process's stdin and stdout.
///
/// Each CALL is `readInt`, `println`, `printInt=<n>` or `printBool=<n>`.
/// `printInt` and `printBool` without a value print the last value read.
#[derive(Parser, Debug)]
#[command(name = "crux-rt", version)]
struct Cli {
    /// Go through the exported C functions, exactly as linked code would
    #[arg(long, conflicts_with_all = ["strict", "prompt"])]
    abi: bool,

    /// Fail on unreadable input instead of reading it as 0
    #[arg(long)]
    strict: bool,

    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    #[arg(short, long)]
    verbose: bool,

    #[arg(required = true, value_name = "CALL")]
    calls: Vec<String>,
}

#[derive(Debug)]
struct Call {
    builtin: Builtin,
    arg: Option<i64>,
}

impl FromStr for Call {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => {
                let arg = arg.parse().with_context(|| format!("bad value in `{}`", s))?;
                (name, Some(arg))
            }
            None => (s, None),
        };
        let builtin: Builtin = name.parse()?;
        if arg.is_some() && builtin.params().is_empty() {
            bail!("`{}` takes no value", builtin);
        }
        Ok(Call { builtin, arg })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !init_logger(cli.verbose) {
        tracing::debug!("keeping existing log subscriber");
    }

    let calls = cli
        .calls
        .iter()
        .map(|s| s.parse())
        .collect::<anyhow::Result<Vec<Call>>>()?;

    if cli.abi {
        tracing::debug!("running {} call(s) through the C ABI", calls.len());
        return run(&calls, |builtin, args| Ok(call_abi(builtin, args)));
    }

    let config = ConsoleConfig {
        prompt: cli.prompt,
        on_read_failure: if cli.strict {
            ReadPolicy::Propagate
        } else {
            ReadPolicy::default()
        },
        ..ConsoleConfig::default()
    };
    tracing::debug!("running {} call(s) with {:?}", calls.len(), config);

    let mut console = Console::stdio_with_config(config);
    run(&calls, |builtin, args| Ok(console.call(builtin, args)?))
}

fn run<F>(calls: &[Call], mut invoke: F) -> anyhow::Result<()>
where
    F: FnMut(Builtin, &[i64]) -> anyhow::Result<Option<i64>>,
{
    let mut last_read = None;
    for call in calls {
        let args = match (call.builtin.params().len(), call.arg) {
            (0, _) => Vec::new(),
            (_, Some(x)) => vec![x],
            (_, None) => vec![last_read
                .ok_or_else(|| anyhow!("`{}` has no value and nothing was read yet", call.builtin))?],
        };
        if let Some(v) = invoke(call.builtin, &args)? {
            last_read = Some(v);
        }
    }
    Ok(())
}

// arity is already settled by `run`
fn call_abi(builtin: Builtin, args: &[i64]) -> Option<i64> {
    match builtin {
        Builtin::ReadInt => Some(library::readInt()),
        Builtin::PrintBool => {
            library::printBool(args[0]);
            None
        }
        Builtin::PrintInt => {
            library::printInt(args[0]);
            None
        }
        Builtin::Println => {
            library::println();
            None
        }
    }
}
