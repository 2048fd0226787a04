//! Fixed-width table rendering for the intake listings.

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    header: String,
    width: usize,
    align: Align,
}

impl Column {
    /// Text column (dates, times).
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    /// Numeric column (ids, amounts, percentages).
    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Headers follow the column alignment so they sit above their values.
        for col in &self.columns {
            push_cell(&mut out, &col.header, col);
        }
        out.push('\n');

        for row in &self.rows {
            for (cell, col) in row.iter().zip(&self.columns) {
                push_cell(&mut out, cell, col);
            }
            out.push('\n');
        }

        out
    }
}

fn push_cell(out: &mut String, value: &str, col: &Column) {
    match col.align {
        Align::Left => out.push_str(&format!("{:<width$} ", value, width = col.width)),
        Align::Right => out.push_str(&format!("{:>width$} ", value, width = col.width)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_are_right_aligned() {
        let mut table = Table::new(vec![Column::left("DATE", 10), Column::right("TOTAL", 8)]);
        table.add_row(vec!["2024-01-01".into(), "800 ml".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("DATE"));
        assert!(lines[0].contains("   TOTAL"));
        assert!(lines[1].contains("  800 ml"));
    }
}
