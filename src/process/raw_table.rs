/// One table as scraped from a page, before any renaming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header text as rendered by the site.
    pub headers: Vec<String>,
    /// Each body row, padded or truncated to `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Self { headers, rows };
        table.fit_rows();
        table
    }

    /// Pad short rows with empty cells and drop cells past the last header.
    pub fn fit_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
