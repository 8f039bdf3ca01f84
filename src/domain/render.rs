//! Markdown file content for a converted note

use crate::domain::note::Note;
use crate::error::Result;
use chrono::{DateTime, Utc};

const FOOTER_TIME_FORMAT: &str = "%Y/%m/%d %A %H:%M:%S";

/// Format a timestamp for the note footer, e.g. `2022/01/01 Saturday 00:00:00`
pub fn footer_time(time: DateTime<Utc>) -> String {
    time.format(FOOTER_TIME_FORMAT).to_string()
}

/// Render the full file content for a note.
///
/// The body is copied verbatim between an optional `# title` heading and the
/// timestamp footer. No trailing newline is written.
pub fn render_note(note: &Note) -> Result<String> {
    let created = footer_time(note.created_at()?);
    let modified = footer_time(note.modified_at()?);

    let mut content = String::with_capacity(note.body.len() + note.title.len() + 96);
    if !note.title.is_empty() {
        content.push_str(&format!("# {}\n\n", note.title));
    }
    content.push_str(&note.body);
    content.push_str(&format!("\n\n\nCreated: {}\n", created));
    content.push_str(&format!("Last modification in Omni Notes: {}", modified));

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::sample_note;

    #[test]
    fn test_render_titled_note() {
        let mut note = sample_note("A/B");
        note.body = "line one\nline two".to_string();
        // 2022-01-02T03:04:05Z
        note.modified_ms = 1_641_092_645_000;

        let content = render_note(&note).unwrap();
        assert_eq!(
            content,
            "# A/B\n\nline one\nline two\n\n\n\
             Created: 2022/01/01 Saturday 00:00:00\n\
             Last modification in Omni Notes: 2022/01/02 Sunday 03:04:05"
        );
    }

    #[test]
    fn test_render_untitled_note_has_no_heading() {
        let content = render_note(&sample_note("")).unwrap();
        assert!(content.starts_with("body\n\n\nCreated: "));
    }

    #[test]
    fn test_body_is_verbatim() {
        let mut note = sample_note("t");
        note.body = "  # not a heading\r\n*raw* \\ text\n\n".to_string();
        let content = render_note(&note).unwrap();
        assert!(content.contains("  # not a heading\r\n*raw* \\ text\n\n\n\n\nCreated:"));
    }

    #[test]
    fn test_no_trailing_newline() {
        let content = render_note(&sample_note("t")).unwrap();
        assert!(content.ends_with("Saturday 00:00:00"));
    }
}
