use clap::{Parser, Subcommand};
use std::path::Path;
use texture_tiers::{config, output, process};

/// Source directory, relative to the working directory.
const SOURCE_DIR: &str = "original_textures";
/// Output directory, relative to the working directory.
const OUTPUT_DIR: &str = "public/textures";

#[derive(Parser)]
#[command(name = "texture-tiers")]
#[command(about = "Resize a directory of textures into low/med/high tiers")]
#[command(long_about = "\
Resize a directory of textures into low/med/high tiers

Every .jpg, .jpeg and .png file in original_textures/ is stretched to the
fixed dimensions of each tier and written under public/textures/:

  original_textures/earth.jpg
    → public/textures/low/earth_low.jpg     1024x512
    → public/textures/med/earth_med.jpg     2048x1024
    → public/textures/high/earth_high.jpg   4096x2048

Tier sizes and quality can be overridden in original_textures/config.toml.
Run 'texture-tiers gen-config' to print a documented config.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resize every source image into every tier (default)
    Resize,
    /// Show the files a resize would write, without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let source = Path::new(SOURCE_DIR);
    let output_dir = Path::new(OUTPUT_DIR);

    match cli.command.unwrap_or(Command::Resize) {
        Command::Resize => {
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_process_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = process::run(source, output_dir, Some(tx));
            // The sender is dropped either way, so the printer drains and exits.
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;
            output::print_summary(&result?);
        }
        Command::Check => {
            let config =
                process::ProcessConfig::from_pipeline_config(&config::load_config(source)?);
            let plan = process::plan(source, output_dir, &config)?;
            output::print_check_output(&plan);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
