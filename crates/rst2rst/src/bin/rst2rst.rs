//! rst2rst - normalize reStructuredText documents

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use rst2rst::{FormattingOptions, Rst2RstError, RstWriter};

#[derive(Parser)]
#[command(name = "rst2rst")]
#[command(version, about = "Generates normalized reStructuredText from a docutils document tree", long_about = None)]
#[command(after_help = "EXAMPLES:
    rst2xml.py doc.rst | rst2rst            Normalize doc.rst to stdout
    rst2rst doc.xml doc.rst                 Write the tree in doc.xml to doc.rst
    rst2rst --wrap-length 72 doc.xml        Wrap paragraphs at 72 columns")]
struct Cli {
    /// docutils XML document tree (`-` or absent reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file (absent writes stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// JSON file with formatting options
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Maximum line width of wrapped paragraphs
    #[arg(long, value_name = "COLUMNS")]
    wrap_length: Option<usize>,

    /// Indentation of block quotes
    #[arg(long, value_name = "COLUMNS")]
    blockquote_indent: Option<usize>,

    /// Title adornment symbols, outermost level first
    #[arg(long, value_name = "CHARS")]
    title_chars: Option<String>,

    /// Bullet symbols, outermost list first
    #[arg(long, value_name = "CHARS")]
    bullets: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<(), Rst2RstError> {
    let options = load_options(cli)?;
    let writer = RstWriter::with_options(options);

    let source = read_input(cli.input.as_deref())?;
    let output = writer.write_xml(&source)?;

    match cli.output.as_deref() {
        Some(path) => {
            fs::write(path, output)?;
            log::info!("wrote {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Defaults, then the config file, then individual flags
fn load_options(cli: &Cli) -> Result<FormattingOptions, Rst2RstError> {
    let mut options: FormattingOptions = match cli.config.as_deref() {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            serde_json::from_str(&json)
                .map_err(|e| Rst2RstError::Config(format!("{path}: {e}")))?
        }
        None => FormattingOptions::default(),
    };

    if let Some(wrap_length) = cli.wrap_length {
        options.wrap_length = wrap_length;
    }
    if let Some(indent) = cli.blockquote_indent {
        options.blockquote_indent = indent;
    }
    if let Some(chars) = cli.title_chars.as_deref() {
        let chars: Vec<char> = chars.chars().collect();
        // Keep prefix, suffix and overline tables the same length.
        let levels = chars.len();
        resize_like_last(&mut options.title_prefix, levels);
        resize_like_last(&mut options.title_suffix, levels);
        resize_like_last(&mut options.title_overline, levels);
        options.title_chars = chars;
    }
    if let Some(bullets) = cli.bullets.as_deref() {
        options.bullet_character = bullets.chars().collect();
    }

    options.validate()?;
    Ok(options)
}

/// Truncate `table` to `len`, or extend it by repeating its last entry
fn resize_like_last<T: Clone + Default>(table: &mut Vec<T>, len: usize) {
    let filler = table.last().cloned().unwrap_or_default();
    table.resize(len, filler);
}

fn read_input(path: Option<&str>) -> Result<String, Rst2RstError> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}
