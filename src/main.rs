use std::{fs, path::PathBuf, process};

use clap::Parser;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use spl::{
    config::{Config, DEFAULT_MAX_CALL_DEPTH},
    error::Error,
    interpreter::{evaluator::core::Context, value::core::Value},
    run_source,
};

/// spl runs programs written in a small language with declared types,
/// `$`-scoped locals and user-defined functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs this source file. Without a file and without `--eval`, an
    /// interactive session starts.
    file: Option<PathBuf>,

    /// Runs the given source text instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Deepest allowed nesting of function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,
}

/// Installs a `tracing` subscriber filtered by `RUST_LOG`, only when that
/// variable is set, so program output stays clean by default.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut context = Context::with_config(Config { max_call_depth: args.max_call_depth });

    let source = match (args.eval, args.file) {
        (Some(source), _) => source,
        (None, Some(path)) => fs::read_to_string(&path).unwrap_or_else(|e| {
                                  eprintln!("Failed to read the input file '{}': {e}",
                                            path.display());
                                  process::exit(1);
                              }),
        (None, None) => {
            repl(&mut context);
            return;
        },
    };

    if let Err(e) = run_source(&mut context, &source) {
        report(&e);
        process::exit(1);
    }
}

/// Prints an error, or ends the process if the program asked to exit.
fn report(e: &Error) {
    if let Some(code) = e.exit_code() {
        process::exit(code);
    }
    eprintln!("{e}");
}

/// Reads submissions line by line and runs each against one context.
///
/// Errors are printed and the session continues; `izadji` ends it.
fn repl(context: &mut Context) {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("spl".to_string()),
                                    DefaultPromptSegment::Empty);

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => {
                if buffer.trim().is_empty() {
                    continue;
                }
                match run_source(context, &buffer) {
                    Ok(Value::Null) => {},
                    Ok(value) => println!("{value}"),
                    Err(e) => report(&e),
                }
            },
            // Ctrl-C and Ctrl-D end the session.
            Ok(_) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}
