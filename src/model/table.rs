/// One spreadsheet cell after loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Classifies raw text: blank and `NaN` are empty, numeric text becomes a number.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Empty,
            Ok(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    /// Like [`Cell::from_text`], but also reads a decimal comma (`2,5`).
    pub fn from_text_decimal_comma(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
            if let Cell::Number(v) = Cell::from_text(&trimmed.replacen(',', ".", 1)) {
                return Cell::Number(v);
            }
        }
        Cell::from_text(raw)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Display form used for item identifiers, scale names and headers.
    /// Integral numbers print without a fractional part (`3`, not `3.0`).
    pub fn label(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
            Cell::Number(v) => format!("{v}"),
            Cell::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(Cell::as_number)
    }

    pub fn has_numbers(&self) -> bool {
        self.cells.iter().any(|c| c.as_number().is_some())
    }
}

/// Column-oriented observation table. All columns have `n_rows` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl ObservationTable {
    /// Builds a table, padding short columns with empty cells.
    pub fn new(mut columns: Vec<Column>) -> Self {
        let n_rows = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        for column in &mut columns {
            column.cells.resize(n_rows, Cell::Empty);
        }
        Self { columns, n_rows }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_at(&self, idx: usize) -> &Column {
        &self.columns[idx]
    }

    pub fn column_at_mut(&mut self, idx: usize) -> &mut Column {
        &mut self.columns[idx]
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.columns[col].cells[row]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.columns[col].cells[row]
    }

    /// Replaces the column named `name`, or appends it when absent.
    pub fn set_column(&mut self, name: &str, mut cells: Vec<Cell>) {
        cells.resize(self.n_rows, Cell::Empty);
        match self.column_index(name) {
            Some(idx) => self.columns[idx].cells = cells,
            None => self.columns.push(Column::new(name, cells)),
        }
    }

    /// Drops rows that are empty in every column, then columns that are
    /// empty in every remaining row. Returns `(rows_dropped, columns_dropped)`.
    pub fn drop_empty(&mut self) -> (usize, usize) {
        let keep_rows: Vec<usize> = (0..self.n_rows)
            .filter(|&row| self.columns.iter().any(|c| !c.cells[row].is_empty()))
            .collect();
        let rows_dropped = self.n_rows - keep_rows.len();
        if rows_dropped > 0 {
            for column in &mut self.columns {
                let cells = std::mem::take(&mut column.cells);
                column.cells = keep_rows.iter().map(|&row| cells[row].clone()).collect();
            }
            self.n_rows = keep_rows.len();
        }

        let before = self.columns.len();
        self.columns.retain(|c| !c.is_blank());
        (rows_dropped, before - self.columns.len())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
