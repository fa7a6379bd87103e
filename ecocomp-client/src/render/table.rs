use ecocomp_core::MergedSeries;

/// Shown instead of a table when there are no rows.
pub const NO_DATA: &str = "No data available";

/// A simple fixed-width text table.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row; cells beyond the header count are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.col_widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut output = self.render_row(&self.headers);
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');
        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }
        output
    }

    fn render_row(&self, row: &[String]) -> String {
        self.col_widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map_or("", String::as_str);
                format!("{cell:<width$}")
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

/// Render the first `limit` rows of a comparison, or [`NO_DATA`].
///
/// Headers are `Date`, `{country1} ({indicator1})`, `{country2} ({indicator2})`;
/// cells are looked up by each column's indicator so missing values read `N/A`.
pub fn comparison_table(series: &MergedSeries, limit: usize) -> String {
    if series.is_empty() {
        return NO_DATA.to_string();
    }
    let [first, second] = &series.columns;
    let mut table = Table::new(&["Date".to_string(), first.header(), second.header()]);
    for row in series.rows.iter().take(limit) {
        table.add_row(vec![
            row.date.to_string(),
            row.first.to_string(),
            row.second.to_string(),
        ]);
    }
    table.render()
}
