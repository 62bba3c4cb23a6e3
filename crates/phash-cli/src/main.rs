use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use phash_core::config::LogLevel;
use phash_core::{
    find_similar, logging, phash_from_file, Algorithm, Config, Direction, Hasher, PHash,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions considered when searching directories
const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

#[derive(Parser)]
#[command(name = "phash")]
#[command(about = "Compute and compare perceptual image hashes")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: HashOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct HashOptions {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Hashing algorithm (average, median, difference, wavelet, perceptual)
    #[arg(short, long, global = true)]
    algorithm: Option<Algorithm>,

    /// Grid edge length
    #[arg(short, long, global = true)]
    size: Option<u32>,

    /// Difference hash direction (horizontal, vertical, both)
    #[arg(short, long, global = true)]
    direction: Option<Direction>,

    /// Minimum similarity (0.0-1.0)
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hash of each image
    Hash {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print distance and similarity between two images
    Compare { first: PathBuf, second: PathBuf },

    /// Find images similar to a target under the given directories
    Find {
        /// Image to compare against
        #[arg(long)]
        target: PathBuf,

        /// Directories to search
        #[arg(required = true)]
        directories: Vec<PathBuf>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "phash.json")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let config = load_config(&cli.options)?;

    match &cli.options.log_dir {
        Some(dir) => logging::init_logger(dir, config.log_level.to_level_filter())
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init(),
    }

    match cli.command {
        Commands::Hash { files } => {
            let hasher = config.hasher()?;
            let mut failures = 0;
            for file in &files {
                match phash_from_file(file, &hasher, config.resize_filter) {
                    Ok(hash) => println!("{}  {}", hash, file.display()),
                    Err(e) => {
                        logging::log_hash_error(file, &e);
                        eprintln!("{}: {}", file.display(), e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                anyhow::bail!("{} of {} files could not be hashed", failures, files.len());
            }
            Ok(())
        }

        Commands::Compare { first, second } => {
            let hasher = config.hasher()?;
            let a = hash_path(&first, &hasher, &config)?;
            let b = hash_path(&second, &hasher, &config)?;
            let distance = a.distance(&b)?;
            let similarity = a.similarity(&b)?;
            println!("{}  {}", a, first.display());
            println!("{}  {}", b, second.display());
            println!("distance: {}", distance);
            println!("similarity: {:.4}", similarity);
            println!("similar: {}", similarity >= config.threshold);
            Ok(())
        }

        Commands::Find {
            target,
            directories,
        } => {
            let hasher = config.hasher()?;
            let target_hash = hash_path(&target, &hasher, &config)?;

            info!("Discovering images...");
            let candidates = discover_images(&directories);
            info!("Found {} images", candidates.len());

            let (paths, hashes) = hash_all(&candidates, &hasher, &config);
            let matches = find_similar(&target_hash, &hashes, config.threshold)?;

            for m in &matches {
                println!("{:.4}  {}", m.similarity, paths[m.index].display());
            }
            info!("{} of {} images are similar", matches.len(), hashes.len());
            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// File config (or defaults) overridden by command line flags
fn load_config(options: &HashOptions) -> Result<Config, anyhow::Error> {
    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(algorithm) = options.algorithm {
        config.algorithm = algorithm;
    }
    if options.size.is_some() {
        config.size = options.size;
    }
    if let Some(direction) = options.direction {
        config.direction = direction;
    }
    if let Some(threshold) = options.threshold {
        config.threshold = threshold;
    }
    config.log_level = match options.verbose {
        0 => config.log_level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    config.validate()?;
    Ok(config)
}

fn hash_path(path: &Path, hasher: &Hasher, config: &Config) -> Result<PHash, anyhow::Error> {
    phash_from_file(path, hasher, config.resize_filter)
        .with_context(|| format!("Failed to hash {}", path.display()))
}

fn discover_images(directories: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();
    for dir in directories {
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let is_image = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_lowercase())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
            if is_image {
                images.push(path.to_path_buf());
            }
        }
    }
    images
}

/// Hash candidates in parallel; failures are logged and left out
fn hash_all(candidates: &[PathBuf], hasher: &Hasher, config: &Config) -> (Vec<PathBuf>, Vec<PHash>) {
    let progress_bar = ProgressBar::new(candidates.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{eta}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    progress_bar.set_message("Computing image hashes...");

    let results: Vec<(PathBuf, PHash)> = candidates
        .par_iter()
        .filter_map(|path| {
            let result = phash_from_file(path, hasher, config.resize_filter);
            progress_bar.inc(1);
            match result {
                Ok(hash) => Some((path.clone(), hash)),
                Err(e) => {
                    logging::log_hash_error(path, &e);
                    None
                }
            }
        })
        .collect();

    progress_bar.finish_with_message("Done");
    results.into_iter().unzip()
}
