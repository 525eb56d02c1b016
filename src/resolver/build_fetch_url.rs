use crate::extractors::QueryDescriptor;

/// Builds the stock photo URL for a descriptor.
///
/// Only the size is forwarded: every request resolves to the same photo
/// (`photo_url`), whatever search term the query maps to.
pub fn build_fetch_url(photo_url: &str, descriptor: &QueryDescriptor) -> String {
    format!(
        "{}?w={}&h={}&fit=crop&auto=format&q=80",
        photo_url, descriptor.width, descriptor.height
    )
}
