use arc_core::Window;

pub struct TableFormatter {
    id_width: usize,
    title_width: usize,
}

impl TableFormatter {
    pub fn new(windows: &[Window]) -> Self {
        let id_width = windows
            .iter()
            .map(|w| w.id.to_string().len())
            .max()
            .unwrap_or(2)
            .max(2); // "ID" header

        let title_width = windows
            .iter()
            .map(|w| w.title.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(5, 80); // Between "Title" header min and reasonable terminal width max

        Self {
            id_width,
            title_width,
        }
    }

    pub fn print_table(&self, windows: &[Window]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row("ID", "Title"));
        println!("{}", self.border('├', '┼', '┤'));
        for window in windows {
            println!("{}", self.row(&window.id.to_string(), &window.title));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn row(&self, id: &str, title: &str) -> String {
        format!(
            "│ {:>width_id$} │ {} │",
            id,
            truncate(title, self.title_width),
            width_id = self.id_width,
        )
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(self.id_width + 2),
            middle,
            "─".repeat(self.title_width + 2),
            right
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
