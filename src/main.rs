use std::fs;

use clap::Parser;
use imp::{
    config::{DEFAULT_MAX_DEPTH, Limits},
    interpreter::{evaluator::Interpreter, parser::Parser as ImpParser},
};

/// imp runs programs written in IMP, a small imperative teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells imp to treat the contents argument as a path to a source file.
    #[arg(short, long)]
    file: bool,

    /// Do not print the final environment.
    #[arg(short, long)]
    quiet: bool,

    /// Print the parsed syntax tree before running the program.
    #[arg(long)]
    ast: bool,

    /// Maximum nesting depth accepted by the parser and the interpreter.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let limits = Limits::with_max_depth(args.max_depth);

    let program = match ImpParser::new(&script).and_then(|parser| parser.with_limits(limits).parse()) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if args.ast {
        println!("{program:#?}");
    }

    let mut interpreter = Interpreter::with_limits(limits);
    match interpreter.run(&program) {
        Ok(env) if !args.quiet => print!("{}", env.report()),
        Ok(_) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
