use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use typeset::{read_paragraphs, Config, Document, TypesetError};

/// Reflow blank-line-separated paragraphs of plain text and justify them to
/// a fixed column width, with hanging punctuation and first-line indents.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Input files, concatenated in order; reads standard input when none
    /// are given
    files: Vec<PathBuf>,
    /// Column width to justify to
    #[arg(short, long, default_value_t = 80)]
    columns: usize,
    /// First-line indent width; every paragraph after the first is indented
    #[arg(short, long, default_value_t = 2)]
    indent: usize,
    /// Don't hang leading punctuation outside the left margin
    #[arg(long)]
    no_hang_left: bool,
    /// Don't hang trailing punctuation past the right margin
    #[arg(long)]
    no_hang_right: bool,
    /// Log layout progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli, output: &mut dyn Write) -> Result<(), TypesetError> {
    let mut input = String::new();
    if cli.files.is_empty() {
        io::stdin().lock().read_to_string(&mut input)?;
    } else {
        for path in &cli.files {
            File::open(path)?.read_to_string(&mut input)?;
            input.push('\n');
        }
    }
    typeset_input(&input, cli, output)
}

fn typeset_input(input: &str, cli: &Cli, output: &mut dyn Write) -> Result<(), TypesetError> {
    let config = Config::default()
        .with_columns(cli.columns)
        .with_indent(cli.indent)
        .with_hanging(!cli.no_hang_left, !cli.no_hang_right);

    let mut document = Document::new(config);
    for (index, paragraph) in read_paragraphs(&mut input.as_bytes())?.into_iter().enumerate() {
        document.add_paragraph(paragraph, index > 0);
    }
    document.write_to(output)
}

fn main() {
    let cli = Cli::parse();

    TermLogger::init(
        if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        },
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    if let Err(err) = run(&cli, &mut io::stdout().lock()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
