use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use indexmap::IndexMap;
use regex::Regex;

use crate::config::AppConfig;
use crate::extractors::extract_query_descriptor;
use crate::resolver::{build_fetch_url, download_image, select_search_term, ImageFetcher};
use crate::scanner::{find_source_references, SourceReference};
use crate::utilities::create_placeholder::create_placeholder;
use crate::utilities::generate_filename::generate_filename;
use crate::utilities::rate_limit_delay::rate_limit_delay;
use crate::utilities::replace_url_in_file::replace_url_in_file;
use crate::utilities::save_download_log::save_download_log;

/// What happened to a single source reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    CacheHit,
    Downloaded,
    Placeholder,
    Skipped,
}

pub struct ImageMaterializer<F> {
    src_dir: PathBuf,
    images_dir: PathBuf,
    log_file: PathBuf,
    pattern: Regex,
    config: AppConfig,
    fetcher: F,
    /// Generated filename -> local reference path, in materialization order.
    downloaded_images: IndexMap<String, String>,
}

/// Checks the project layout, then materializes every placeholder image under
/// `project_root`. Returns `None` without touching the filesystem when the
/// source directory is missing.
pub async fn run<F: ImageFetcher>(
    project_root: &Path,
    config: &AppConfig,
    fetcher: F,
) -> Result<Option<usize>> {
    if !project_root.join(&config.paths.src_dir).is_dir() {
        println!("{}", "Error: Please run this tool from the project root directory".red());
        println!("   (The directory containing the '{}' folder)", config.paths.src_dir);
        return Ok(None);
    }

    let mut materializer = ImageMaterializer::new(project_root, config, fetcher).await?;
    materializer.process_all_images().await?;
    Ok(Some(materializer.downloaded_images().len()))
}

impl<F: ImageFetcher> ImageMaterializer<F> {
    /// Creates the public and images directories if they do not exist yet.
    pub async fn new(project_root: &Path, config: &AppConfig, fetcher: F) -> Result<Self> {
        let public_dir = project_root.join(&config.paths.public_dir);
        let images_dir = public_dir.join(&config.paths.images_dir);

        tokio::fs::create_dir_all(&images_dir)
            .await
            .with_context(|| format!("Failed to create {}", images_dir.display()))?;

        let pattern = Regex::new(&config.scanner.pattern)
            .with_context(|| format!("Invalid scanner pattern: {}", config.scanner.pattern))?;

        Ok(ImageMaterializer {
            src_dir: project_root.join(&config.paths.src_dir),
            images_dir,
            log_file: project_root.join(&config.paths.log_file),
            pattern,
            config: config.clone(),
            fetcher,
            downloaded_images: IndexMap::new(),
        })
    }

    pub fn downloaded_images(&self) -> &IndexMap<String, String> {
        &self.downloaded_images
    }

    /// Runs the whole pipeline. Nothing is logged when no URL is found.
    pub async fn process_all_images(&mut self) -> Result<()> {
        println!("{}", "Scanning for readdy.ai URLs...".cyan());
        let references =
            find_source_references(&self.src_dir, &self.pattern, &self.config.scanner.extensions);

        if references.is_empty() {
            println!("{}", "No readdy.ai URLs found!".green());
            return Ok(());
        }

        println!("Found {} readdy.ai URLs", references.len());

        for reference in &references {
            let outcome = self.process_reference(reference).await;

            // Cache hits never reach the remote service
            if outcome != Outcome::CacheHit {
                rate_limit_delay(self.config.rate_limit.delay_ms).await;
            }
        }

        save_download_log(&self.log_file, &self.downloaded_images).await?;

        println!(
            "{}",
            format!("\nProcess complete! Downloaded {} images", self.downloaded_images.len()).green()
        );
        println!("Images saved to: {}", self.images_dir.display());
        println!("Download log saved: {}", self.log_file.display());

        Ok(())
    }

    pub async fn process_reference(&mut self, reference: &SourceReference) -> Outcome {
        println!("\nProcessing: {}", reference.url);

        let descriptor = extract_query_descriptor(&reference.url);
        let filename = generate_filename(&descriptor);
        let preview: String = descriptor.query.chars().take(50).collect();
        let occurrences = reference.content.matches(reference.url.as_str()).count();

        println!("Query: {}...", preview);
        println!("Filename: {} ({} occurrence(s) in file)", filename, occurrences);

        if let Some(local_url) = self.downloaded_images.get(&filename).cloned() {
            println!("{}", format!("Already downloaded, using: {}", local_url).yellow());
            self.rewrite(&reference.file_path, &reference.url, &local_url).await;
            return Outcome::CacheHit;
        }

        let search_term = select_search_term(&descriptor.query);
        let fetch_url = build_fetch_url(&self.config.remote.photo_url, &descriptor);
        println!("Search term: {}", search_term);

        let target = self.images_dir.join(&filename);
        match download_image(&self.fetcher, &fetch_url, &target).await {
            Ok(()) => {
                println!("{}", format!("Downloaded: {}", filename).green());
                let local_url = self.local_url(&filename);
                self.downloaded_images.insert(filename, local_url.clone());
                self.rewrite(&reference.file_path, &reference.url, &local_url).await;
                println!("{}", format!("Successfully replaced with: {}", local_url).green());
                Outcome::Downloaded
            }
            Err(e) => {
                eprintln!("{}", format!("Failed to download {}: {}", fetch_url, e).red());

                match create_placeholder(&self.images_dir, &filename, &descriptor).await {
                    Ok(svg_filename) => {
                        println!("{}", format!("Created placeholder: {}", svg_filename).yellow());
                        let placeholder_url = self.local_url(&svg_filename);
                        self.downloaded_images.insert(filename, placeholder_url.clone());
                        self.rewrite(&reference.file_path, &reference.url, &placeholder_url).await;
                        Outcome::Placeholder
                    }
                    Err(e) => {
                        eprintln!("{}", format!("Failed to create placeholder {}: {:#}", filename, e).red());
                        Outcome::Skipped
                    }
                }
            }
        }
    }

    fn local_url(&self, filename: &str) -> String {
        format!("{}/{}", self.config.paths.public_prefix.trim_end_matches('/'), filename)
    }

    async fn rewrite(&self, file_path: &Path, old_url: &str, new_url: &str) {
        match replace_url_in_file(file_path, old_url, new_url).await {
            Ok(()) => println!("Updated {}", file_path.display()),
            Err(e) => eprintln!("{}", format!("Error updating {}: {:#}", file_path.display(), e).red()),
        }
    }
}
