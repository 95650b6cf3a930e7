//! fasel command-line driver

use std::{collections::HashSet, fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::{Parser, ValueEnum};
use fasel::{
    ast::printer::AstPrinter,
    errors::diagnostics::LogSink,
    highlight::highlight::highlight,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    symbols::symbols::register_top_level,
};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Pretty-printed program
    Ast,
    /// Every token, trivia included
    Tokens,
    /// Highlight ranges for the first line
    Highlight,
    /// Top-level symbols
    Symbols,
}

/// Lexer and parser front-end for fasel source files
#[derive(Parser, Debug)]
#[command(name = "fasel", version, about, long_about = None)]
struct Cli {
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// What to print
    #[arg(long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,

    /// Known command names for `--emit highlight`
    #[arg(long = "command", value_name = "NAME")]
    commands: Vec<String>,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", cli.file.display(), error);
            return 1;
        }
    };
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    match cli.emit {
        Emit::Tokens => {
            for token in tokenize(&source, Some(file_name)) {
                println!("{}", token.debug());
            }
            return 0;
        }
        Emit::Highlight => {
            let commands: HashSet<String> = cli.commands.iter().cloned().collect();
            let line = source.lines().next().unwrap_or("");
            for range in highlight(line, &commands) {
                let color = range.class.color();
                println!(
                    "{}..{} {:?} #{:02x}{:02x}{:02x}{:02x} {:?}",
                    range.start,
                    range.end,
                    range.class,
                    color.r,
                    color.g,
                    color.b,
                    color.a,
                    &line[range.start..range.end]
                );
            }
            return 0;
        }
        Emit::Ast | Emit::Symbols => {}
    }

    let start = Instant::now();
    let tokens = tokenize(&source, Some(file_name.clone()));
    let (parser, result) = parse(tokens, file_name.into(), &LogSink);

    let program = match result {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return 1;
        }
    };
    info!(elapsed = ?start.elapsed(), decls = program.decls.len(), "parsed");

    match cli.emit {
        Emit::Symbols => match register_top_level(parser.store(), &program) {
            Ok(scope) => {
                for symbol in scope.symbols() {
                    println!(
                        "{} {:?}{}",
                        symbol.name,
                        symbol.kind,
                        if symbol.is_const { " const" } else { "" }
                    );
                }
                0
            }
            Err(error) => {
                eprint!("{}", render_error(&error, &source));
                1
            }
        },
        _ => {
            print!("{}", AstPrinter::new(parser.store()).program(&program));
            0
        }
    }
}
