use anyhow::Result;
use checkmate_icons::config::Config;
use checkmate_icons::output::write_icon_set;
use checkmate_icons::StyleVariant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate the Checkmate GP app icons", long_about = None)]
struct Cli {
    /// Visual treatment to draw. Defaults to the configured variant
    #[arg(short, long, value_enum)]
    variant: Option<StyleVariant>,

    /// Directory the PNGs are written to. Defaults to the configured dir
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available style variants
    Variants,
    /// Write a settings file with the default values
    InitConfig {
        /// Replace an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Variants) => {
            for variant in StyleVariant::ALL {
                println!("{:<14} {}", variant.name(), variant.description());
            }
            return Ok(());
        }
        Some(Commands::InitConfig { force }) => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => Config::config_path()?,
            };
            Config::init(&path, force)?;
            println!("✅ Settings written: {}", path.display());
            return Ok(());
        }
        None => {}
    }

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };

    let variant = cli.variant.unwrap_or(config.output.variant);
    let out_dir = cli.out_dir.unwrap_or(config.output.dir);

    println!("Generating Checkmate GP icons ({})...", variant);
    let written = write_icon_set(&out_dir, variant)?;
    println!("✅ {} icons written to {}", written.len(), out_dir.display());

    Ok(())
}
