use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use tidyjson::{Formatter, NewLineStyle, StderrSink, TidyJsonOptions};

/// A streaming JSON validator and re-formatter.
///
/// tjson reads JSON from stdin or files, checks it against the JSON
/// grammar, and writes it back re-indented. A document that does not
/// parse fails the run; no partial output is ever produced for it.
#[derive(Parser, Debug)]
#[command(name = "tjson")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s), each holding one JSON document. If not specified,
    /// reads a single document from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "2")]
    indent: usize,

    /// Use tabs instead of spaces for indentation.
    #[arg(short = 't', long)]
    tabs: bool,

    /// Line ending style.
    #[arg(long, value_enum, default_value = "lf")]
    eol: EolArg,

    /// Maximum nesting depth accepted before the input is rejected.
    #[arg(long, default_value = "200")]
    max_depth: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EolArg {
    Lf,
    Cr,
    Crlf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("tjson: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let inputs: Vec<String> = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input; pipe JSON to stdin or pass a file".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        vec![buffer]
    } else {
        let mut contents = Vec::with_capacity(args.files.len());
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            contents.push(content);
        }
        contents
    };

    // Configure formatter; grammar diagnostics go to stderr
    let mut formatter = Formatter::new().with_sink(Arc::new(StderrSink));
    configure_options(&mut formatter.options, &args);

    // Format each document
    let eol = formatter.options.newline_style.as_str();
    let mut output = String::new();
    for input in &inputs {
        let formatted = formatter.format(input).map_err(|_| "input is not valid JSON")?;
        output.push_str(&formatted);
        output.push_str(eol);
    }

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}

fn configure_options(opts: &mut TidyJsonOptions, args: &Args) {
    opts.indent_string = if args.tabs {
        "\t".to_string()
    } else {
        " ".repeat(args.indent)
    };

    opts.newline_style = match args.eol {
        EolArg::Lf => NewLineStyle::Lf,
        EolArg::Cr => NewLineStyle::Cr,
        EolArg::Crlf => NewLineStyle::Crlf,
    };

    opts.max_nesting_depth = args.max_depth;
}
