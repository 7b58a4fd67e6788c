mod error;
mod scanner;
mod token;

use std::{env, fs, io, io::Write, process};

use error::ConsoleReporter;
use scanner::Scanner;

/// Driver code.
fn main() {
    let args: Vec<String> = env::args().collect();

    // Note that `args[0]` will be the name of the binary.
    // So to check whether one argument has been passed, we check if `args.len() == 2`.
    if args.len() > 2 {
        // Only one given argument is expected.
        eprintln!("Usage: rlox [script]");
        process::exit(64);
    } else if args.len() == 2 {
        // `args[1]` will be the given argument, i.e., the file path of the source code.
        run_file(&args[1]);
    } else {
        // No arguments were given. In this case, we run the interactive prompt.
        run_prompt();
    }
}

/// Scans the source code given at the file path and prints the token stream.
fn run_file(file_path: &str) {
    // Reading from the file path. If an error occurs, the `expect()` method will print "Failed to read file." and terminate execution.
    let source = fs::read_to_string(file_path).expect("Failed to read file.");

    let mut reporter = ConsoleReporter::new();
    run(&source, &mut reporter);

    if reporter.had_error() {
        process::exit(65);
    }
}

/// Runs the interactive prompt in the console. Each line is scanned on its
/// own; an error on one line does not end the session.
fn run_prompt() {
    let mut reporter = ConsoleReporter::new();
    loop {
        print!("> ");
        io::stdout().flush().expect("Error: flush failed");  // to flush out "> "

        // Read user input into `line`.
        let mut line = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut line)
            .expect("Failed to read line");
        if bytes_read == 0 {
            // End of input (ctrl-D). Leave the prompt.
            break;
        }

        run(&line, &mut reporter);
        reporter.reset();
    }
}

/// Scans the source string and prints each token's debug form, one per line.
fn run(source: &str, reporter: &mut ConsoleReporter) {
    // Lexical analysis. The scanner always returns the full token sequence;
    // any faults have already gone through the reporter.
    let scanner = Scanner::new(source, reporter);
    let tokens = scanner.scan_tokens();

    for token in &tokens {
        println!("{token}");
    }
}
