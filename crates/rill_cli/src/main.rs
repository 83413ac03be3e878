//! rill: the Rill command-line driver.
//!
//! Usage:
//!   rill [options] [file]
//!
//! With a file argument the program is compiled and run. Without one an
//! interactive session starts, where each line is a submission chained
//! onto the previous ones.

use clap::Parser as ClapParser;
use rill_compiler::Compilation;
use rill_core::value::Value;
use rill_diagnostics::Diagnostic;
use rill_evaluator::Variables;
use rill_syntax::SyntaxTree;
use std::io::{BufRead, Write};
use std::process;
use std::sync::Arc;

#[derive(ClapParser, Debug)]
#[command(name = "rill", about = "rill - A small scripting language", disable_version_flag = true)]
struct Cli {
    /// Script file to run.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Print the lowered program instead of running it.
    #[arg(long = "emitTree")]
    emit_tree: bool,

    /// Print the interpreter version.
    #[arg(short = 'v', long)]
    version: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("rill Version 0.1.0");
        return;
    }

    let exit_code = match cli.file {
        Some(ref path) => run_file(&cli, path),
        None => run_interactive(&cli),
    };
    process::exit(exit_code);
}

fn run_file(cli: &Cli, path: &str) -> i32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            print_error(&format!("Failed to read '{}': {}", path, e));
            return 1;
        }
    };

    let tree = SyntaxTree::parse(text);
    let compilation = Compilation::new(vec![Arc::clone(&tree)]);
    let use_color = cli.pretty && atty_is_terminal();

    if cli.emit_tree {
        let syntax_errors: Vec<_> = tree.diagnostics().to_vec();
        if !syntax_errors.is_empty() {
            print_diagnostics(&tree, &syntax_errors, Some(path), use_color);
            return 2;
        }
        print!("{}", compilation.emit_tree());
        return 0;
    }

    let mut variables = Variables::default();
    match compilation.evaluate(&mut variables) {
        Ok(result) => {
            if !result.diagnostics.is_empty() {
                print_diagnostics(&tree, &result.diagnostics, Some(path), use_color);
                return 2;
            }
            if let Some(value) = result.value {
                if value != Value::Unit {
                    println!("{}", value);
                }
            }
            0
        }
        Err(fault) => {
            print_error(&fault.to_string());
            3
        }
    }
}

fn run_interactive(cli: &Cli) -> i32 {
    let use_color = cli.pretty && atty_is_terminal();
    let mut previous: Option<Arc<Compilation>> = None;
    let mut variables = Variables::default();
    let mut show_tree = cli.emit_tree;

    println!("rill Version 0.1.0");
    println!("Type #help for a list of commands.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        if use_color {
            print!("{}» {}", GRAY, RESET);
        } else {
            print!("» ");
        }
        let _ = std::io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return 0,
            Ok(_) => {}
            Err(e) => {
                print_error(&format!("Failed to read input: {}", e));
                return 1;
            }
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim().is_empty() {
            continue;
        }

        match input.trim() {
            "#help" => {
                println!("#help   Show this message.");
                println!("#tree   Toggle printing the lowered program.");
                println!("#reset  Discard the session's submissions.");
                println!("#exit   Leave the session.");
                continue;
            }
            "#tree" => {
                show_tree = !show_tree;
                println!(
                    "{}",
                    if show_tree {
                        "Showing lowered trees."
                    } else {
                        "Not showing lowered trees."
                    }
                );
                continue;
            }
            "#reset" => {
                previous = None;
                variables.clear();
                continue;
            }
            "#exit" => return 0,
            _ => {}
        }

        let tree = SyntaxTree::parse(input.to_string());
        let compilation = match &previous {
            Some(p) => p.continue_with(Arc::clone(&tree)),
            None => Compilation::new_script(Arc::clone(&tree)),
        };

        match compilation.evaluate(&mut variables) {
            Ok(result) => {
                if !result.diagnostics.is_empty() {
                    // The failed submission is dropped; the session
                    // continues from the last good one.
                    print_diagnostics(&tree, &result.diagnostics, None, use_color);
                    continue;
                }
                if show_tree {
                    print!("{}{}{}", GRAY, compilation.emit_tree(), RESET);
                }
                if let Some(value) = result.value {
                    if value != Value::Unit {
                        println!("{}", value);
                    }
                }
                previous = Some(compilation);
            }
            Err(fault) => {
                print_error(&fault.to_string());
            }
        }
    }
}

fn print_diagnostics(
    tree: &SyntaxTree,
    diagnostics: &[Diagnostic],
    file: Option<&str>,
    use_color: bool,
) {
    let line_map = tree.line_map();
    let text = tree.text();
    for diagnostic in diagnostics {
        let position = line_map.line_and_column_of(diagnostic.span.start);
        let line_start = line_map.line_start(position.line) as usize;
        let line_end = text[line_start..]
            .find('\n')
            .map_or(text.len(), |i| line_start + i);
        let source_line = &text[line_start..line_end];

        // Reported positions are 1-based.
        let location = format!("({},{})", position.line + 1, position.column + 1);
        if use_color {
            if let Some(file) = file {
                eprint!("{}{}{}{}: ", CYAN, file, location, RESET);
            }
            eprintln!("{}{}error{}: {}", BOLD, RED, RESET, diagnostic.message);

            let span_start = (diagnostic.span.start as usize).clamp(line_start, line_end);
            let span_end = (diagnostic.span.end() as usize).clamp(span_start, line_end);
            eprintln!(
                "    {}{}{}{}{}",
                &text[line_start..span_start],
                RED,
                &text[span_start..span_end],
                RESET,
                &text[span_end..line_end]
            );
        } else {
            if let Some(file) = file {
                eprint!("{}{}: ", file, location);
            }
            eprintln!("error: {}", diagnostic.message);
            eprintln!("    {}", source_line);
        }
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check whether stderr is a terminal.
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
