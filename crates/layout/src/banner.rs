use crate::MAX_WIDTH;

/// A run of exactly `length` hash characters.
pub fn hash_line(length: usize) -> String {
    "#".repeat(length)
}

/// A single banner line of exactly [`MAX_WIDTH`] columns: `left_offset`
/// hashes, the label set off by single spaces, then hash padding.
///
/// Labels approaching the full width are caller responsibility; the padding
/// saturates at zero and the line may then run past [`MAX_WIDTH`].
pub fn section_banner(label: &str, left_offset: usize) -> String {
    let lead = format!("{} {} ", hash_line(left_offset), label);
    let padding = MAX_WIDTH.saturating_sub(lead.chars().count());
    format!("{lead}{}\n", hash_line(padding))
}

/// A full-width closing banner.
pub fn end_banner() -> String {
    format!("{}\n", hash_line(MAX_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_are_exactly_max_width_for_different_labels() {
        for label in ["Custom origins", "A much longer section heading"] {
            let banner = section_banner(label, 4);
            assert_eq!(banner.trim_end_matches('\n').chars().count(), MAX_WIDTH);
        }
    }

    #[test]
    fn banner_layout_puts_offset_hashes_then_label() {
        let banner = section_banner("Dev server", 4);
        assert!(banner.starts_with("#### Dev server #"));
        assert!(banner.ends_with("#\n"));
    }

    #[test]
    fn end_banner_is_a_full_hash_line() {
        assert_eq!(end_banner(), format!("{}\n", "#".repeat(80)));
    }

    #[test]
    fn oversized_labels_get_no_padding() {
        let label = "x".repeat(90);
        let banner = section_banner(&label, 4);
        assert_eq!(banner, format!("#### {label} \n"));
    }
}
