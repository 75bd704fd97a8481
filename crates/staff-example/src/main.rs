//! Demo binary: renders a small staff directory in every table format.
//!
//! ```text
//! staff list                     # default frame
//! staff list --format markdown   # any preset
//! staff list --title "Staff"     # title embedded in the top border
//! staff summary                  # metadata rows and formatters
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gridout::{Align, MetaRowPosition, TableBuilder, TableFormat, TableTitle};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "staff", about = "Render a staff directory as a text table")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the directory as a table.
    List {
        /// Table format preset.
        #[arg(long, value_enum, default_value_t = Format::Default)]
        format: Format,
        /// Optional title embedded in the top border.
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the directory with metadata rows and per-column formatting.
    Summary,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Default,
    Minimal,
    Alternative,
    Markdown,
}

impl From<Format> for TableFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Default => TableFormat::Default,
            Format::Minimal => TableFormat::Minimal,
            Format::Alternative => TableFormat::Alternative,
            Format::Markdown => TableFormat::Markdown,
        }
    }
}

#[derive(Serialize)]
struct Employee {
    name: &'static str,
    position: &'static str,
    office: &'static str,
    age: u32,
    start_date: &'static str,
}

fn directory() -> Vec<Employee> {
    vec![
        Employee {
            name: "Airi Satou",
            position: "Accountant",
            office: "Tokyo",
            age: 33,
            start_date: "2017/05/09",
        },
        Employee {
            name: "Angelica Ramos",
            position: "Chief Executive Officer (CEO)",
            office: "London",
            age: 47,
            start_date: "2017/01/08",
        },
        Employee {
            name: "Ashton Cox",
            position: "Junior Technical Author",
            office: "San Francisco",
            age: 66,
            start_date: "2017/04/07",
        },
        Employee {
            name: "Bradley Greer",
            position: "Software Engineer",
            office: "London",
            age: 41,
            start_date: "2017/10/25",
        },
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { format, title } => {
            let mut builder = TableBuilder::from_records(&directory())?
                .with_format(format.into())
                .with_text_alignment(3, Align::Right);
            if let Some(text) = title {
                let mut title = TableTitle::new(text);
                // Bold the title only when stdout supports color.
                if console::colors_enabled() {
                    title = title.wrapped("\u{1b}[1m", "\u{1b}[0m");
                }
                builder = builder.with_title(title);
            }
            print!("{}", builder.export()?);
        }
        Commands::Summary => {
            let out = TableBuilder::from_records(&directory())?
                .with_format(TableFormat::Alternative)
                .with_header_formatter(0, |label| label.to_uppercase())
                .with_formatter(3, |age| format!("{} yrs", age))
                .with_text_alignment(3, Align::Right)
                .with_metadata_template(
                    MetaRowPosition::Top,
                    "Staff directory, {0}",
                    vec!["generated locally".into()],
                )
                .with_metadata_template(
                    MetaRowPosition::Bottom,
                    "{ROW_COUNT} employee(s) across {COLUMN_COUNT} column(s)",
                    vec![],
                )
                .export()?;
            print!("{}", out);
        }
    }

    Ok(())
}
