use clap::{Parser, Subcommand};
use photocard::imaging::{RustBackend, get_dimensions, plan_frame};
use photocard::process::{ExportMode, ExportOptions};
use photocard::{config, naming, output, process, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photocard")]
#[command(about = "Frame photographs as fixed-size polaroid-style cards")]
#[command(long_about = "\
Frame photographs as fixed-size polaroid-style cards

Each photo is cropped to fill the card interior and pasted onto a white
canvas with 12px side borders and 40px top/bottom borders:

  portrait  (taller than wide)   750x1000
  landscape (everything else)   1000x750

Inputs may be JPEG or PNG files, or directories (their images are taken in
file name order, without recursion). Every input is written as
<name>.png in the output directory; with --format pdf all cards are also
collected, in input order, into photocards.pdf.

Run 'photocard gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Frame every input and write the cards
    Generate {
        /// Output directory (created if missing and there is anything to write)
        #[arg(short, long)]
        output: PathBuf,

        /// Export mode; defaults to export.format from config.toml
        #[arg(long, value_enum)]
        format: Option<ExportMode>,

        /// Print the export summary as JSON
        #[arg(long)]
        json: bool,

        /// Image files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Show the card each input would get, without writing anything
    Check {
        /// Output directory used to show output paths
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Image files or directories
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            output: output_dir,
            format,
            json,
            inputs,
        } => {
            let config = config::load_config(&cli.config_dir)?;
            let options = ExportOptions::from_config(&config, format);
            let inputs = scan::collect_inputs(&inputs)?;
            output::print_collision_warnings(&naming::find_collisions(&inputs));

            process::create_output_dir(&inputs, &output_dir)?;

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    if !json {
                        output::print_process_event(&event);
                    }
                }
            });
            let result = process::run(&inputs, &output_dir, &options, Some(tx));
            if printer.join().is_err() {
                eprintln!("warning: progress printer panicked");
            }
            let summary = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", output::format_summary(&summary, &output_dir));
            }
        }
        Command::Check {
            output: output_dir,
            inputs,
        } => {
            let inputs = scan::collect_inputs(&inputs)?;
            let backend = RustBackend::new();
            let mut plans = Vec::with_capacity(inputs.len());
            for input in &inputs {
                let dims = get_dimensions(&backend, input)?;
                plans.push(plan_frame(input, dims, &output_dir));
            }
            output::print_check_output(&plans);
            output::print_collision_warnings(&naming::find_collisions(&inputs));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
