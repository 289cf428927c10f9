use clap::{Parser, Subcommand};
use photo_catalog::request::{CatalogRequest, InventoryRequest};
use photo_catalog::{batch, catalog, config, inventory, output, scan};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

#[derive(Parser)]
#[command(name = "photo-catalog")]
#[command(about = "Printable photo catalogs with sequential product codes")]
#[command(long_about = "\
Printable photo catalogs with sequential product codes

Each catalog is an A4 PDF: a cover page with the title, an optional logo and
today's date, then 3x3 photo grids. Every photo is labeled with a code built
from the base label and its position:

  photo-catalog catalog --title \"Spring Catalog\" --base spr shoot/
  → outputs/Spring_Catalog.pdf   (SPR-001, SPR-002, ...)

Photo arguments may be files or directories. A directory contributes its
jpg, jpeg, png, tif, tiff and webp files sorted by name (not recursive).
Photos that cannot be read get an error line in their cell instead.

Layout, fonts and the logo path are configured in catalog.toml.
Run 'photo-catalog gen-config' to generate a documented one.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./catalog.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory (overrides output_dir from config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a catalog PDF
    Catalog {
        /// Catalog title, printed on the cover and used for the file name
        #[arg(long)]
        title: String,
        /// Base label for product codes
        #[arg(long)]
        base: String,
        /// Photo files and directories, in order
        photos: Vec<PathBuf>,
    },
    /// Export an inventory sheet (code, file name, stock) as JSON
    Inventory {
        /// Base label for product codes
        #[arg(long)]
        base: String,
        /// Initial stock for every item
        #[arg(long)]
        stock: u32,
        /// Photo files and directories, in order
        photos: Vec<PathBuf>,
    },
    /// Render every catalog listed in a jobs file, in parallel
    Batch {
        /// TOML file with [[catalog]] entries
        jobs: PathBuf,
    },
    /// Print a stock catalog.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Catalog {
            title,
            base,
            photos,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let output_dir = cli.output.unwrap_or_else(|| config.output_dir.clone());
            let photos = scan::collect_photos(&photos)?;
            let input = CatalogRequest {
                title,
                base,
                photos,
            }
            .into_input(today())?;

            let (tx, printer) = spawn_printer(output::format_catalog_event);
            let result = catalog::render_catalog(input, &config, Some(tx));
            printer.join().ok();
            let doc = result?;

            let path = doc.write_to(&output_dir)?;
            output::print_catalog_summary(&doc.summary, &path);
        }
        Command::Inventory {
            base,
            stock,
            photos,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let output_dir = cli.output.unwrap_or_else(|| config.output_dir.clone());
            let request = InventoryRequest {
                base,
                photos: scan::collect_photos(&photos)?,
                stock,
            };
            let base = request.validate()?;
            let sheet = inventory::build_inventory(&base, &request.photos, request.stock);
            let path = sheet.write_to(&output_dir)?;
            output::print_inventory_output(&sheet, &path);
        }
        Command::Batch { jobs } => {
            let config = load_config(cli.config.as_deref())?;
            let output_dir = cli.output.unwrap_or_else(|| config.output_dir.clone());
            init_thread_pool(&config.processing);

            let file = batch::load_batch_file(&jobs)?;
            let base_dir = jobs.parent().unwrap_or(Path::new("."));
            let prepared = batch::prepare_jobs(file, base_dir, today())?;
            println!("==> Rendering {} catalogs", prepared.len());

            let (tx, printer) = spawn_printer(output::format_batch_event);
            let outcomes = batch::run_batch(prepared, &config, &output_dir, Some(tx));
            printer.join().ok();
            output::print_batch_output(&outcomes);

            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            if failed > 0 {
                return Err(format!("{failed} of {} catalogs failed", outcomes.len()).into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--config FILE` if given, else `catalog.toml` in the working directory,
/// else stock defaults.
fn load_config(path: Option<&Path>) -> Result<config::CatalogConfig, config::ConfigError> {
    match path {
        Some(path) => config::load_config_file(path),
        None => config::load_config(Path::new(".")),
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Spawn a thread printing every event sent on the returned channel.
/// The thread ends once all senders are dropped.
fn spawn_printer<E: Send + 'static>(
    format: fn(&E) -> Vec<String>,
) -> (Sender<E>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel::<E>();
    let handle = std::thread::spawn(move || {
        for event in rx {
            for line in format(&event) {
                println!("{}", line);
            }
        }
    });
    (tx, handle)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
