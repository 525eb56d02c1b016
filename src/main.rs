use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::resolver::HttpFetcher;

// Import modules
mod config;
mod extractors;
mod materializer;
mod resolver;
mod scanner;
mod utilities;

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "Image Materializer".bold());
    println!("{}", "=".repeat(50));

    // Load configuration settings
    let config = match crate::config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    // The tool always works on the directory it is started from
    let project_root = env::current_dir().context("Failed to get current directory")?;

    let fetcher = HttpFetcher::new(&config.remote)?;
    if materializer::run(&project_root, &config, fetcher).await?.is_none() {
        return Ok(());
    }

    println!("\nNext steps:");
    println!("1. Review the downloaded images in {}/{}/", config.paths.public_dir, config.paths.images_dir);
    println!("2. Replace any placeholder SVGs with actual product images if needed");
    println!("3. Run 'npm run build' to verify everything works");
    println!("4. Commit the changes to git");

    Ok(())
}
