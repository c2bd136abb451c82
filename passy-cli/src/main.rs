use std::io;

use clap::{Parser, ValueEnum};
use passy::Radix;
use passy_cli::{Error, SECRET_ENV, read_secret, write_digest, write_trace};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RadixArg {
    Decimal,
    Hex,
}

impl From<RadixArg> for Radix {
    fn from(arg: RadixArg) -> Self {
        match arg {
            RadixArg::Decimal => Radix::Decimal,
            RadixArg::Hex => Radix::Hex,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "passy")]
#[command(about = "Derive a site password from a site name and a secret")]
struct Args {
    /// Site identifier, e.g. amazon.com (case-insensitive)
    #[arg(required_unless_present = "self_test")]
    text: Option<String>,

    /// Secret to derive from; read from stdin when absent
    #[arg(short, long, env = SECRET_ENV, hide_env_values = true)]
    secret: Option<String>,

    /// Print the HMAC intermediates to stderr
    #[arg(long)]
    trace: bool,

    /// Byte rendering for --trace
    #[arg(long, value_enum, default_value = "decimal")]
    radix: RadixArg,

    /// Check the HMAC-SHA1 implementation against the RFC 2202 vectors and exit
    #[arg(long, conflicts_with_all = ["text", "trace"])]
    self_test: bool,
}

fn run_self_test() -> Result<(), Error> {
    if !passy::self_test() {
        return Err(Error::SelfTest);
    }
    println!("ok");
    Ok(())
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // clap only lets TEXT be absent together with --self-test
    let text = match args.text {
        Some(text) if !args.self_test => text,
        _ => return run_self_test(),
    };

    let secret = match args.secret {
        Some(secret) => secret,
        None => {
            tracing::debug!("reading secret from stdin");
            read_secret(io::stdin().lock())?
        }
    };

    let digest = passy::derive(&text, &secret)?;

    if args.trace {
        let trace = passy::trace(&text, &secret)?;
        write_trace(io::stderr().lock(), &trace, args.radix.into())?;
    }

    write_digest(io::stdout().lock(), &digest)?;
    Ok(())
}
