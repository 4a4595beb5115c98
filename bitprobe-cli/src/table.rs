//! Textual table rendering in the tabulate styles the format option names.

use bitprobe_core::TableStyle;

/// Cell alignment for all columns past the label column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// A table under construction: header cells plus data rows.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    style: TableStyle,
    align: Align,
}

struct Rule {
    left: &'static str,
    mid: &'static str,
    right: &'static str,
    fill: &'static str,
}

impl Table {
    pub fn new(headers: Vec<String>, style: TableStyle, align: Align) -> Self {
        Table {
            headers,
            rows: Vec::new(),
            style,
            align,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        match self.style {
            TableStyle::FancyGrid => self.render_boxed(
                &widths,
                "│",
                Rule { left: "╒", mid: "╤", right: "╕", fill: "═" },
                Rule { left: "╞", mid: "╪", right: "╡", fill: "═" },
                Rule { left: "├", mid: "┼", right: "┤", fill: "─" },
                Rule { left: "╘", mid: "╧", right: "╛", fill: "═" },
            ),
            TableStyle::Grid => self.render_boxed(
                &widths,
                "|",
                Rule { left: "+", mid: "+", right: "+", fill: "-" },
                Rule { left: "+", mid: "+", right: "+", fill: "=" },
                Rule { left: "+", mid: "+", right: "+", fill: "-" },
                Rule { left: "+", mid: "+", right: "+", fill: "-" },
            ),
            TableStyle::Simple => self.render_open(&widths, true),
            TableStyle::Plain => self.render_open(&widths, false),
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(|r| r.len())
            .chain([self.headers.len()])
            .max()
            .unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn cell(&self, row: &[String], column: usize, width: usize) -> String {
        let text = row.get(column).map(String::as_str).unwrap_or("");
        let align = if column == 0 { Align::Left } else { self.align };
        let pad = width.saturating_sub(text.chars().count());
        match align {
            Align::Left => format!("{}{}", text, " ".repeat(pad)),
            Align::Right => format!("{}{}", " ".repeat(pad), text),
            Align::Center => {
                let left = pad / 2;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
            }
        }
    }

    fn data_line(&self, row: &[String], widths: &[usize], bar: &str) -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| format!(" {} ", self.cell(row, i, w)))
            .collect();
        format!("{bar}{}{bar}", cells.join(bar))
    }

    fn rule_line(&self, widths: &[usize], rule: &Rule) -> String {
        let spans: Vec<String> = widths.iter().map(|w| rule.fill.repeat(w + 2)).collect();
        format!("{}{}{}", rule.left, spans.join(rule.mid), rule.right)
    }

    fn render_boxed(
        &self,
        widths: &[usize],
        bar: &str,
        top: Rule,
        below_header: Rule,
        between: Rule,
        bottom: Rule,
    ) -> String {
        let mut lines = vec![
            self.rule_line(widths, &top),
            self.data_line(&self.headers, widths, bar),
            self.rule_line(widths, &below_header),
        ];
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                lines.push(self.rule_line(widths, &between));
            }
            lines.push(self.data_line(row, widths, bar));
        }
        lines.push(self.rule_line(widths, &bottom));
        lines.join("\n")
    }

    fn render_open(&self, widths: &[usize], underline_header: bool) -> String {
        let line = |row: &[String]| -> String {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, &w)| self.cell(row, i, w))
                .collect();
            cells.join("  ").trim_end().to_string()
        };
        let mut lines = vec![line(&self.headers)];
        if underline_header {
            let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(dashes.join("  "));
        }
        lines.extend(self.rows.iter().map(|r| line(r)));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(style: TableStyle) -> Table {
        let mut t = Table::new(
            vec!["".to_string(), "Dec".to_string()],
            style,
            Align::Right,
        );
        t.push_row(vec!["A".to_string(), "66".to_string()]);
        t.push_row(vec!["B".to_string(), "7".to_string()]);
        t
    }

    #[test]
    fn test_fancy_grid() {
        let expected = "\
╒═══╤═════╕
│   │ Dec │
╞═══╪═════╡
│ A │  66 │
├───┼─────┤
│ B │   7 │
╘═══╧═════╛";
        assert_eq!(sample(TableStyle::FancyGrid).render(), expected);
    }

    #[test]
    fn test_grid() {
        let expected = "\
+---+-----+
|   | Dec |
+===+=====+
| A |  66 |
+---+-----+
| B |   7 |
+---+-----+";
        assert_eq!(sample(TableStyle::Grid).render(), expected);
    }

    #[test]
    fn test_simple() {
        // first line starts with spaces, so no line-continuation here
        let expected = "   Dec\n-  ---\nA   66\nB    7";
        assert_eq!(sample(TableStyle::Simple).render(), expected);
    }

    #[test]
    fn test_plain() {
        let expected = "   Dec\nA   66\nB    7";
        assert_eq!(sample(TableStyle::Plain).render(), expected);
    }

    #[test]
    fn test_center_alignment() {
        let mut t = Table::new(
            vec!["".to_string(), "abcd [4]".to_string()],
            TableStyle::Plain,
            Align::Center,
        );
        t.push_row(vec!["Bin".to_string(), "1010".to_string()]);
        let rendered = t.render();
        assert!(rendered.contains("  1010"));
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let mut t = Table::new(vec!["".to_string()], TableStyle::Grid, Align::Left);
        t.push_row(vec!["x".to_string(), "y".to_string()]);
        let rendered = t.render();
        assert!(rendered.lines().all(|l| l.starts_with('+') || l.starts_with('|')));
    }
}
