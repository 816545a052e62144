//! DC-SHELL: A line oriented front end for the desk calculator engine.
//! One number or action key per line; the display and the stack are
//! printed after every line.
use clap::Parser;
use deskcalc::prelude::*;
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/// DC-SHELL: Drive the desk calculator from the terminal. Numbers are
/// entered one per line, operators and other keys likewise
/// (`+ - * / sqrt square inv enter clear ce ms mr +/- backspace .`).
/// Type `exit` to quit.
#[derive(Parser, Debug)]
#[clap(name = "dc-shell")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Evaluation mode: "stack" (operators compute at once) or
    /// "deferred" (operators wait for enter or the next operator)
    #[clap(short, long, default_value = "stack")]
    mode: Mode,

    /// Echo input to output
    #[clap(short, long)]
    echo: bool,

    /// Do not print the banner and the prompt
    #[clap(long)]
    no_prompt: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{:#?}", options);

    let mut shell = Shell::new(options.mode);
    let mut stdout = io::stdout();

    if !options.no_prompt {
        println!("Calculator, {} mode (type 'exit' to quit)", options.mode);
    }

    let mut lines = io::stdin().lock().lines();
    loop {
        if !options.no_prompt {
            print!("> ");
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if options.echo {
            println!("{line}");
        }

        match shell.eval(&line) {
            Ok(Reply::Exit) => break,
            Ok(Reply::Idle) => continue,
            Ok(Reply::Updated) => (),
            Err(err) => {
                // Unknown keys and arity failures leave the state alone
                warn!("{line}: {err}");
                println!("{err}");
                continue;
            }
        }

        println!("{}", shell.state().display_text());
        println!("{}", shell.render_stack());
    }
    Ok(())
}
