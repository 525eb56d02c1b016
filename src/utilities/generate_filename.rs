use crate::extractors::QueryDescriptor;

/// Local filename for a descriptor: `{seq}_{width}x{height}.jpg`, with every
/// non ASCII-alphanumeric character of `seq` turned into `_`.
///
/// The query text is not part of the name, so descriptors sharing seq and size
/// share one file.
pub fn generate_filename(descriptor: &QueryDescriptor) -> String {
    let clean_seq: String = descriptor
        .seq
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("{}_{}x{}.jpg", clean_seq, descriptor.width, descriptor.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(seq: &str, width: &str, height: &str, query: &str) -> QueryDescriptor {
        QueryDescriptor {
            query: query.to_string(),
            width: width.to_string(),
            height: height.to_string(),
            seq: seq.to_string(),
            ..QueryDescriptor::default()
        }
    }

    #[test]
    fn test_filename_from_seq_and_size() {
        assert_eq!(
            generate_filename(&descriptor("hero1", "300", "200", "laptop on desk")),
            "hero1_300x200.jpg"
        );
    }

    #[test]
    fn test_seq_is_sanitized_per_character() {
        assert_eq!(
            generate_filename(&descriptor("product-card.2/é", "64", "64", "")),
            "product_card_2___64x64.jpg"
        );
    }

    #[test]
    fn test_query_text_does_not_affect_filename() {
        let a = descriptor("logo", "100", "100", "company logo blue");
        let b = descriptor("logo", "100", "100", "something else entirely");

        assert_eq!(generate_filename(&a), generate_filename(&b));
        assert_eq!(generate_filename(&a), "logo_100x100.jpg");
    }
}
