use std::io::{self, Write};

use anyhow::{bail, Context};
use ausaddr_lib::{
    address_file_stream::{AddressEntry, AddressFileStream},
    AddressField, MatchPolicy, ParsedAddress, Parser as AddressParser, ParserConfig,
};
use clap::{Parser, ValueEnum};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const NULL: &str = "NULL";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The address string to parse.
    #[clap(long, value_parser)]
    str: Option<String>,
    /// Files holding one address per line.
    #[clap(long, value_parser, multiple_values = true)]
    files: Vec<String>,
    /// Print only this field (line1, line2, line3, city, state or zip).
    #[clap(long, value_parser)]
    field: Option<AddressField>,
    /// Output format for whole records.
    #[clap(long, value_enum, default_value = "tsv")]
    format: Format,
    /// Fail addresses that have no postcode or no state.
    #[clap(long, action)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    if args.str.is_none() && args.files.is_empty() {
        bail!("either --str or --files is required");
    }

    let parser = AddressParser::new(ParserConfig {
        policy: if args.strict {
            MatchPolicy::Strict
        } else {
            MatchPolicy::Lenient
        },
    });

    let mut entries = vec![];
    if let Some(address) = &args.str {
        entries.push(AddressEntry {
            line_number: 1,
            address: address.clone(),
        });
    }
    for f in &args.files {
        info!("Processing file: {}", f);
        let stream = AddressFileStream::new(f).with_context(|| format!("opening {}", f))?;
        for entry in stream {
            entries.push(entry.with_context(|| format!("reading {}", f))?);
        }
    }

    let rows: Vec<String> = entries
        .par_iter()
        .map(|entry| render(&parser, entry, args))
        .collect::<anyhow::Result<_>>()?;

    if args.field.is_none() && args.format == Format::Tsv {
        writeln!(out, "line1\tline2\tline3\tcity\tstate\tcountry\tzip")?;
    }
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

fn render(parser: &AddressParser, entry: &AddressEntry, args: &Args) -> anyhow::Result<String> {
    if let Some(field) = args.field {
        let value = parser.extract(Some(&entry.address), field);
        return Ok(match (args.format, value) {
            (Format::Tsv, Some(value)) => tsv_cell(&value),
            (Format::Tsv, None) => NULL.to_string(),
            (Format::Json, value) => serde_json::to_string(&value)?,
        });
    }

    let parsed = match parser.try_parse(entry.address.trim()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(line = entry.line_number, %err, "address did not parse");
            None
        }
    };
    Ok(match args.format {
        Format::Tsv => tsv_row(parsed.as_ref()),
        Format::Json => serde_json::to_string(&parsed)?,
    })
}

fn tsv_cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn tsv_row(parsed: Option<&ParsedAddress>) -> String {
    match parsed {
        Some(parsed) => [
            parsed.line1.as_str(),
            parsed.line2.as_str(),
            parsed.line3.as_str(),
            parsed.city.as_str(),
            parsed.state.as_str(),
            parsed.country.as_str(),
            parsed.zip.as_str(),
        ]
        .map(tsv_cell)
        .join("\t"),
        None => [NULL; 7].join("\t"),
    }
}
