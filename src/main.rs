//! Command-line front end: load a JSON definition, draw it, write SVG or JSON.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use symbios_turtle::{Definition, Drawing, logging};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "symbios-turtle", version, about = "L-System executor")]
struct Cli {
    /// The JSON definition of the L-System.
    input_file: PathBuf,

    /// The base unit of the drawing.
    #[arg(short, long)]
    unit: Option<f32>,

    /// The number of rewriting generations.
    #[arg(short, long)]
    order: Option<usize>,

    /// Print the expanded string and every action taken to stderr.
    #[arg(short, long)]
    trace: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write the drawing here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let definition = Definition::from_path(&cli.input_file)
        .with_context(|| format!("loading {}", cli.input_file.display()))?;
    let lsystem = definition
        .build()
        .with_context(|| format!("building {}", cli.input_file.display()))?;

    let defaults = lsystem.defaults();
    let order = cli.order.unwrap_or(defaults.order);
    let unit = cli.unit.unwrap_or(defaults.unit);
    let axiom: String = lsystem.grammar().axiom().iter().collect();

    let mut drawing = Drawing::new();
    if cli.trace {
        let (_, trace) = lsystem
            .execute_traced(&axiom, order, unit, &mut drawing)
            .context("interpreting")?;
        let mut rules: Vec<_> = lsystem.grammar().rules().collect();
        rules.sort_by_key(|(symbol, _)| *symbol);
        for (symbol, replacement) in rules {
            let replacement: String = replacement.iter().collect();
            eprintln!("rule: {symbol} -> {replacement}");
        }
        eprintln!("expanded: {}", trace.expanded);
        for step in &trace.actions {
            eprintln!("#{}: {} -> [{}]", step.index, step.symbol, step.action);
        }
    } else {
        lsystem
            .execute(&axiom, order, unit, &mut drawing)
            .context("interpreting")?;
    }

    let rendered = match cli.format {
        Format::Svg => drawing.to_svg(unit),
        Format::Json => serde_json::to_string_pretty(&drawing)?,
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("writing stdout")?,
    }
    Ok(())
}
