//! fsadot CLI - Draw finite automata with Graphviz

mod cli;

use clap::Parser;
use fsadot::AutomatonError;

/// Exit status for descriptions that cannot be turned into a diagram
const EXIT_INVALID_INPUT: i32 = 2;

fn main() {
    let cli_args = cli::Cli::parse();
    let mut app = cli::FsadotApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        let invalid_input = e
            .downcast_ref::<AutomatonError>()
            .is_some_and(AutomatonError::is_input_error);
        std::process::exit(if invalid_input { EXIT_INVALID_INPUT } else { 1 });
    }
}
