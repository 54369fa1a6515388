use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use waterfall_layout::layout::{TotalRow, compute_layout};
use waterfall_layout::settings::LineSettings;
use waterfall_layout::{storage, viewmodel};

#[derive(Parser, Debug)]
#[command(
    name = "waterfall",
    version,
    about = "Compute waterfall chart layout from CSV observations"
)]
struct Cli {
    /// CSV file with columns: category,value[,highlighted][,identity]
    input: PathBuf,
    /// Reference-line settings as a JSON file (two slots: line1, line2).
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Do not append the synthetic Total bar.
    #[arg(long, default_value_t = false)]
    no_total: bool,
    /// Write the layout JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rows = storage::load_csv(&cli.input)?;
    let vm = viewmodel::build(&rows);

    let settings = match cli.settings.as_ref() {
        Some(path) => LineSettings::from_json(&std::fs::read_to_string(path)?)?,
        None => LineSettings::default(),
    };
    let total = if cli.no_total { TotalRow::Omit } else { TotalRow::Append };

    let layout = compute_layout(&vm.observations, &settings, total);

    match cli.out.as_ref() {
        Some(path) => {
            storage::save_layout_json(&layout, path)?;
            eprintln!("Saved {} bars to {}", layout.bars.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&layout)?),
    }
    Ok(())
}
