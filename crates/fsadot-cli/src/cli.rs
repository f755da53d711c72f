//! Command-line interface for the fsadot utility
//!
//! Reads an automaton description, writes its DOT form and asks Graphviz
//! to draw it.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use fsadot::automaton::{AutomatonDatabase, AutomatonParser, ParserConfig};
use fsadot::core::logging::init_logging;
use fsadot::graphviz::{DotRenderer, GraphvizCommand};
use fsadot::{AutomatonError, Direction, RenderConfig, Renderer, EPSILON};

/// fsadot - Draw finite automata from plain-text arrow lists
#[derive(Parser)]
#[command(name = "fsadot")]
#[command(about = "Generates Graphviz diagrams for finite automata")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write <output>.dot and render it to an image with Graphviz
    Render {
        /// Input description file (use - for stdin)
        #[arg(short, long, default_value = "automata.txt")]
        input: PathBuf,

        /// Output file name without extension
        #[arg(short, long, default_value = "automata")]
        output: PathBuf,

        /// Keep the .dot file after rendering
        #[arg(short, long)]
        save_dot: bool,

        /// Image format passed to Graphviz as -T<format>
        #[arg(long, default_value = fsadot::graphviz::DEFAULT_FORMAT)]
        format: String,

        /// Graphviz program used for rendering
        #[arg(long, env = "FSADOT_DOT", default_value = fsadot::graphviz::DEFAULT_PROGRAM)]
        dot_command: OsString,

        #[command(flatten)]
        options: DiagramOptions,
    },

    /// Print the DOT description without rendering it
    Dot {
        /// Input description file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the DOT text (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: DiagramOptions,
    },

    /// Validate a description and list its warnings
    Check {
        /// Input description file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the parsed automaton as JSON
        #[arg(long)]
        json: bool,

        /// Leave transition words containing double quotes out of labels
        #[arg(long)]
        drop_quoted_words: bool,
    },
}

/// Options shared by every command that produces DOT
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Layout direction of the graph
    #[arg(long, value_enum, default_value_t = DirectionChoice::Lr)]
    pub direction: DirectionChoice,

    /// Label drawn on transitions without input words
    #[arg(long, default_value = EPSILON)]
    pub epsilon: String,

    /// Leave transition words containing double quotes out of labels
    #[arg(long)]
    pub drop_quoted_words: bool,
}

impl DiagramOptions {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            drop_quoted_words: self.drop_quoted_words,
        }
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.direction.into()).with_epsilon(self.epsilon.clone())
    }
}

/// Supported layout directions
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum DirectionChoice {
    Lr,
    Rl,
    Tb,
    Bt,
}

impl From<DirectionChoice> for Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Lr => Direction::LeftRight,
            DirectionChoice::Rl => Direction::RightLeft,
            DirectionChoice::Tb => Direction::TopDown,
            DirectionChoice::Bt => Direction::BottomUp,
        }
    }
}

/// JSON shape printed by `check --json`
#[derive(Serialize)]
struct CheckReport<'a> {
    state_count: usize,
    transition_count: usize,
    #[serde(flatten)]
    automaton: &'a AutomatonDatabase,
}

/// Main CLI application
pub struct FsadotApp {
    verbose: bool,
}

impl FsadotApp {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("FSADOT_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("FSADOT_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        self.verbose = cli.verbose;
        if self.verbose {
            eprintln!("fsadot v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                save_dot,
                format,
                dot_command,
                options,
            } => {
                let command = GraphvizCommand::new()
                    .with_program(dot_command)
                    .with_format(format);
                self.render_command(&input, &output, save_dot, &command, &options)
            }
            Commands::Dot {
                input,
                output,
                options,
            } => self.dot_command(input, output, &options),
            Commands::Check {
                input,
                json,
                drop_quoted_words,
            } => self.check_command(input, json, ParserConfig { drop_quoted_words }),
        }
    }

    /// Parse and serialize, reporting warnings along the way
    fn build_dot(&self, content: &str, options: &DiagramOptions) -> Result<String> {
        let database = self.parse(content, options.parser_config())?;
        DotRenderer::with_config(options.render_config()).render(&database)
    }

    fn parse(&self, content: &str, config: ParserConfig) -> Result<AutomatonDatabase> {
        if self.verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let database = AutomatonParser::with_config(config).parse_lines(content.lines())?;
        for diagnostic in database.diagnostics() {
            warn!("{}", diagnostic);
        }
        Ok(database)
    }

    /// Handle the render command
    fn render_command(
        &self,
        input: &Path,
        output: &Path,
        save_dot: bool,
        command: &GraphvizCommand,
        options: &DiagramOptions,
    ) -> Result<()> {
        let content = self.read_input(Some(input.to_path_buf()))?;
        let dot = self.build_dot(&content, options)?;

        let image = with_extension(output, command.format());
        let dot_file = with_extension(output, "dot");
        let retain = save_dot.then_some(dot_file.as_path());

        match command.render(&dot, &image, retain) {
            Ok(()) => {
                info!(image = %image.display(), "Rendered automaton");
                if self.verbose {
                    eprintln!("Wrote {}", image.display());
                }
            }
            // The description is complete at this point; a failed renderer
            // only costs the image
            Err(e @ AutomatonError::RenderFailed { .. }) => warn!("{}", e),
            Err(e) => return Err(e.into()),
        }

        if save_dot && self.verbose {
            eprintln!("Kept {}", dot_file.display());
        }
        Ok(())
    }

    /// Handle the dot command
    fn dot_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        options: &DiagramOptions,
    ) -> Result<()> {
        let content = self.read_input(input)?;
        let dot = self.build_dot(&content, options)?;
        self.write_output(output, &dot)
    }

    /// Handle the check command
    fn check_command(&self, input: Option<PathBuf>, json: bool, config: ParserConfig) -> Result<()> {
        let content = self.read_input(input)?;

        let database = match self.parse(&content, config) {
            Ok(database) => database,
            Err(e) => {
                println!("✗ Invalid automaton: {}", e);
                return Err(e);
            }
        };

        if json {
            let report = CheckReport {
                state_count: database.state_count(),
                transition_count: database.transition_count(),
                automaton: &database,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "✓ Valid automaton: {} states ({} final), {} transitions, starting state {}",
            database.state_count(),
            database.final_states().count(),
            database.transition_count(),
            database.starting_state()
        );
        for diagnostic in database.diagnostics() {
            println!("  warning: {}", diagnostic);
        }
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

impl Default for FsadotApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `.ext` to a base name, keeping any dots already in it
fn with_extension(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
