use crate::messages::Message;

use super::presentation::{
    attachment_badge, category_badge, category_icon, format_timestamp, priority_badge,
    EMPTY_STATE_TEXT,
};

/// Text rendering of the visible messages for `--print`.
pub fn render_plain(messages: &[&Message], date_format: &str) -> String {
    if messages.is_empty() {
        return format!("{}\n", EMPTY_STATE_TEXT);
    }

    let mut out = String::new();
    for message in messages {
        let mut header = format!(
            "{} {}  {}",
            category_icon(&message.category).glyph(),
            message.sender,
            format_timestamp(&message.timestamp, date_format)
        );
        if message.has_attachments {
            header.push_str(&format!("  [{}]", attachment_badge().label));
        }

        out.push_str(&header);
        out.push('\n');
        out.push_str(&format!("    {}\n", message.content));
        out.push_str(&format!(
            "    [{}] [{}]\n\n",
            priority_badge(message.priority).label,
            category_badge(&message.category).label
        ));
    }
    out
}
