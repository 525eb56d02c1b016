use anyhow::{Context, Result};
use reqwest::Url;

/// Image parameters decoded from a placeholder URL's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub query: String,
    pub width: String,
    pub height: String,
    pub seq: String,
    pub orientation: String,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        QueryDescriptor {
            query: String::new(),
            width: "400".to_string(),
            height: "300".to_string(),
            seq: "image".to_string(),
            orientation: "landscape".to_string(),
        }
    }
}

impl QueryDescriptor {
    /// Width and height as integers, as needed to draw a placeholder.
    pub fn dimensions(&self) -> Result<(i64, i64)> {
        let width = self
            .width
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid width: {:?}", self.width))?;
        let height = self
            .height
            .trim()
            .parse::<i64>()
            .with_context(|| format!("Invalid height: {:?}", self.height))?;
        Ok((width, height))
    }
}

/// Decodes `query`, `width`, `height`, `seq` and `orientation` from the URL.
///
/// Only the first non-empty value of a repeated parameter is kept; empty or
/// missing parameters fall back to their defaults, as does an unparsable URL.
pub fn extract_query_descriptor(url: &str) -> QueryDescriptor {
    let mut descriptor = QueryDescriptor::default();

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Failed to parse URL {}: {}", url, e);
            return descriptor;
        }
    };

    let mut seen: Vec<String> = Vec::new();
    for (key, value) in parsed.query_pairs() {
        if value.is_empty() || seen.iter().any(|name| *name == *key) {
            continue;
        }

        let slot = match &*key {
            "query" => &mut descriptor.query,
            "width" => &mut descriptor.width,
            "height" => &mut descriptor.height,
            "seq" => &mut descriptor.seq,
            "orientation" => &mut descriptor.orientation,
            _ => continue,
        };
        *slot = value.into_owned();
        seen.push(key.into_owned());
    }

    descriptor
}
