use std::io::{self, BufRead, Write};

use crate::scanner::lexer::Lexer;

pub const PROMPT: &str = ">> ";

/// Read lines from `input` and write the tokens of each one to `output`.
/// Every line is scanned by its own lexer.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // Ctrl-D / EOF
        }

        for token in Lexer::new(&line) {
            writeln!(output, "{token}")?;
        }
    }
    writeln!(output)?;
    Ok(())
}

/// Run the interactive REPL on stdin/stdout.
pub fn run_repl() {
    let stdin = io::stdin();
    if let Err(e) = start(stdin.lock(), io::stdout()) {
        eprintln!("read error: {e}");
    }
}
