//! The `snout` binary: greet the invoking user, then hand standard
//! input and output to the REPL with the French localization hook
//! installed.

mod repl;
mod translate;

use std::io;

use snout_eval::render::StdoutPrint;
use snout_eval::Interpreter;
use tracing_subscriber::EnvFilter;

use crate::translate::LingvaTranslator;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let user = username();
    println!("Hello {user}! This is the Snout programming language!");
    println!("All output (including errors, booleans, null, and strings) will appear in French!");
    println!("Feel free to type in commands");

    let mut interp =
        Interpreter::with_parts(Box::new(LingvaTranslator::new()), Box::new(StdoutPrint));
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::start(&mut stdin.lock(), &mut stdout.lock(), &mut interp)
}

/// Invoking user's name, from the environment; `there` when the
/// environment does not say.
fn username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_owned())
}
