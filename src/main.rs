use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use monkey_lexer::scanner;

#[derive(Parser, Debug)]
#[command(name = "monkey-lexer", about = "Tokenize Monkey source code")]
struct Cli {
    /// Source file to scan (omit for REPL)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Report illegal characters instead of dumping tokens
    #[arg(long)]
    check: bool,
}

fn read_source(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read source file '{}'", path.display()))
}

fn check_source(path: &PathBuf, source: &str) -> Result<()> {
    let errors = match scanner::check(source) {
        Ok(_) => return Ok(()),
        Err(errors) => errors,
    };
    let count = errors.len();
    let name = path.display().to_string();
    for e in errors {
        let report = miette::Report::new(e.with_source_code(name.as_str(), source));
        eprintln!("{report:?}");
    }
    bail!("{count} error(s)")
}

fn dump_tokens(source: &str, format: &str) -> Result<()> {
    let tokens = scanner::scan(source);
    match format {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&tokens).context("serialize tokens to JSON")?
        ),
        _ => {
            for token in &tokens {
                println!("{token}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(ref path) = cli.file else {
        if cli.check {
            bail!("source file required for --check");
        }
        monkey_lexer::repl::run_repl();
        return Ok(());
    };

    let source = read_source(path)?;
    if cli.check {
        return check_source(path, &source);
    }
    dump_tokens(&source, &cli.format)
}
