// Marker-bounded scan regions.
//
// Saved-words pages wrap the vocabulary table between a fixed
// instruction sentence and the page-size selector. Only the text
// strictly between the two is scanned.

/// Text strictly between a start and an end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkedRegion<'a> {
    pub text: &'a str,
    /// 1-based document line on which the region's first line sits
    /// (the line holding the start marker).
    pub first_line: usize,
}

/// Locate the region between the first `start` marker and the first
/// `end` marker that follows it. `None` if either marker is missing.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> Option<MarkedRegion<'a>> {
    let start_at = text.find(start)?;
    let body_at = start_at + start.len();
    let end_offset = text[body_at..].find(end)?;

    Some(MarkedRegion {
        text: &text[body_at..body_at + end_offset],
        first_line: text[..start_at].matches('\n').count() + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_between_markers() {
        let text = "Home\nSTART\nobrigado\nDanke\nEND\nboa tarde";
        let region = between(text, "START", "END").unwrap();
        assert_eq!(region.text, "\nobrigado\nDanke\n");
        assert_eq!(region.first_line, 2);
    }

    #[test]
    fn test_missing_end_marker() {
        assert_eq!(between("START\nobrigado\nDanke", "START", "END"), None);
    }

    #[test]
    fn test_missing_start_marker() {
        assert_eq!(between("obrigado\nDanke\nEND", "START", "END"), None);
    }

    #[test]
    fn test_end_before_start_is_ignored() {
        let text = "END\nSTART\nobrigado\nDanke\nEND";
        let region = between(text, "START", "END").unwrap();
        assert_eq!(region.text, "\nobrigado\nDanke\n");
        assert_eq!(region.first_line, 2);
    }

    #[test]
    fn test_end_before_start_only() {
        assert_eq!(between("END\nSTART\nobrigado", "START", "END"), None);
    }
}
