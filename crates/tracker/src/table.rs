//! Plain-text table rendering for report output.

/// A column-aligned text table with a header rule and a row-count footer.
///
/// A zero-row result still renders the header, the rule, and `(0 rows)`.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append one row of cells; missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the table with every column padded to its widest cell.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let mut output = String::new();
        output.push_str(pad_line(&self.headers, &widths).trim_end());
        output.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&rule.join("-+-"));
        output.push('\n');

        for row in &self.rows {
            output.push_str(pad_line(row, &widths).trim_end());
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&format!("({} rows)", self.rows.len()));
        output
    }
}

fn pad_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{cell:<width$}")
        })
        .collect();
    padded.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_the_widest_cell() {
        let mut table = Table::new(["id", "name"]);
        table.add_row(vec!["1".to_string(), "Engineering".to_string()]);
        table.add_row(vec!["2".to_string(), "Sales".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id | name");
        assert_eq!(lines[1], "---+------------");
        assert_eq!(lines[2], "1  | Engineering");
        assert_eq!(lines[3], "2  | Sales");
        assert_eq!(lines[5], "(2 rows)");
    }

    #[test]
    fn zero_rows_still_render_headers_and_footer() {
        let table = Table::new(["id", "name"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "id | name");
        assert_eq!(lines[1], "---+-----");
        assert_eq!(lines[3], "(0 rows)");
    }

    #[test]
    fn missing_cells_render_empty() {
        let mut table = Table::new(["id", "manager"]);
        table.add_row(vec!["1".to_string()]);
        let rendered = table.render();
        assert!(rendered.lines().any(|line| line == "1"));
    }
}
