use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use regex::Regex;
use walkdir::WalkDir;

/// One placeholder URL found in a source file.
#[derive(Debug, Clone)]
pub struct SourceReference {
    pub file_path: PathBuf,
    pub url: String,
    /// File content as it was when the URL was found. Only read for
    /// diagnostics; rewrites always re-read the file.
    pub content: String,
}

/// Walks `src_dir` once per extension, in the order given, and collects every
/// match of `pattern` in each readable UTF-8 file.
///
/// A URL appearing several times in one file yields one reference per
/// occurrence. Unreadable files are reported and skipped.
pub fn find_source_references(
    src_dir: &Path,
    pattern: &Regex,
    extensions: &[String],
) -> Vec<SourceReference> {
    let mut references = Vec::new();

    for extension in extensions {
        let files = WalkDir::new(src_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map_or(false, |ext| ext == extension)
            });

        for entry in files {
            let file_path = entry.path();
            let content = match fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("{}", format!("Error reading {}: {}", file_path.display(), e).red());
                    continue;
                }
            };

            for found in pattern.find_iter(&content) {
                references.push(SourceReference {
                    file_path: file_path.to_path_buf(),
                    url: found.as_str().to_string(),
                    content: content.clone(),
                });
            }
        }
    }

    references
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use tempfile::TempDir;

    fn pattern() -> Regex {
        Regex::new(&AppConfig::default().scanner.pattern).unwrap()
    }

    fn extensions() -> Vec<String> {
        vec!["ts".to_string(), "tsx".to_string()]
    }

    #[test]
    fn test_finds_urls_in_ts_and_tsx_only() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("components").join("hero");
        fs::create_dir_all(&nested).unwrap();

        fs::write(
            nested.join("Hero.tsx"),
            r#"<img src="https://readdy.ai/api/search-image?query=desk&seq=hero1" />"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("data.ts"),
            "const a = 'https://readdy.ai/api/search-image?seq=a&width=10';",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("notes.md"),
            "https://readdy.ai/api/search-image?seq=ignored",
        )
        .unwrap();

        let references = find_source_references(temp_dir.path(), &pattern(), &extensions());

        assert_eq!(references.len(), 2);
        // .ts files are collected before .tsx files
        assert_eq!(references[0].url, "https://readdy.ai/api/search-image?seq=a&width=10");
        assert!(references[0].file_path.ends_with("data.ts"));
        assert_eq!(references[1].url, "https://readdy.ai/api/search-image?query=desk&seq=hero1");
        assert!(references[1].content.contains("<img"));
    }

    #[test]
    fn test_match_stops_at_quotes_and_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("a.ts"),
            "x = \"https://readdy.ai/api/search-image?seq=one\" y = https://readdy.ai/api/search-image?seq=two next",
        )
        .unwrap();

        let urls: Vec<String> = find_source_references(temp_dir.path(), &pattern(), &extensions())
            .into_iter()
            .map(|reference| reference.url)
            .collect();

        assert_eq!(
            urls,
            vec![
                "https://readdy.ai/api/search-image?seq=one",
                "https://readdy.ai/api/search-image?seq=two",
            ]
        );
    }

    #[test]
    fn test_repeated_url_yields_one_reference_per_occurrence() {
        let temp_dir = TempDir::new().unwrap();
        let url = "https://readdy.ai/api/search-image?seq=logo&width=100&height=100";
        fs::write(temp_dir.path().join("a.tsx"), format!("'{url}' '{url}' '{url}'")).unwrap();

        let references = find_source_references(temp_dir.path(), &pattern(), &extensions());

        assert_eq!(references.len(), 3);
        assert!(references.iter().all(|reference| reference.url == url));
    }

    #[test]
    fn test_non_utf8_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.ts"), b"\xff\xfe\x00\x80").unwrap();
        fs::write(
            temp_dir.path().join("good.ts"),
            "'https://readdy.ai/api/search-image?seq=ok'",
        )
        .unwrap();

        let references = find_source_references(temp_dir.path(), &pattern(), &extensions());

        assert_eq!(references.len(), 1);
        assert!(references[0].file_path.ends_with("good.ts"));
    }
}
