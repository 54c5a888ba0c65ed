//! Plain two-column tables with box-drawing borders

use unicode_width::UnicodeWidthStr;

/// A two-column table whose cells may span several lines
pub struct Table {
    headers: [String; 2],
    rows: Vec<[String; 2]>,
}

impl Table {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            headers: [left.to_string(), right.to_string()],
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.rows.push([left.into(), right.into()]);
    }

    /// Render the table with a rule between every row
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&rule(&widths, '┌', '┬', '┐'));
        push_row(&mut out, &self.headers, &widths);
        for row in &self.rows {
            out.push_str(&rule(&widths, '├', '┼', '┤'));
            push_row(&mut out, row, &widths);
        }
        out.push_str(&rule(&widths, '└', '┴', '┘'));
        out
    }

    fn column_widths(&self) -> [usize; 2] {
        let mut widths = [0; 2];
        for row in std::iter::once(&self.headers).chain(&self.rows) {
            for (width, cell) in widths.iter_mut().zip(row) {
                let longest = cell_lines(cell)
                    .iter()
                    .map(|line| line.width())
                    .max()
                    .unwrap_or(0);
                *width = (*width).max(longest);
            }
        }
        widths
    }
}

fn cell_lines(cell: &str) -> Vec<&str> {
    let lines: Vec<&str> = cell.trim_end().lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}

fn rule(widths: &[usize; 2], left: char, middle: char, right: char) -> String {
    format!(
        "{}{}{}{}{}\n",
        left,
        "─".repeat(widths[0] + 2),
        middle,
        "─".repeat(widths[1] + 2),
        right
    )
}

fn push_row(out: &mut String, row: &[String; 2], widths: &[usize; 2]) {
    let left = cell_lines(&row[0]);
    let right = cell_lines(&row[1]);
    let height = left.len().max(right.len());

    for i in 0..height {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        out.push_str(&format!(
            "│ {}{} │ {}{} │\n",
            l,
            " ".repeat(widths[0] - l.width()),
            r,
            " ".repeat(widths[1] - r.width())
        ));
    }
}
