use crate::model::table::{Cell, Column, ObservationTable};

pub fn text_column(name: &str, values: &[&str]) -> Column {
    Column::new(name, values.iter().map(|v| Cell::from_text(v)).collect())
}

pub fn number_column(name: &str, values: &[Option<f64>]) -> Column {
    Column::new(
        name,
        values
            .iter()
            .map(|v| v.map_or(Cell::Empty, Cell::Number))
            .collect(),
    )
}

pub fn numbers(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Two scales with three items each:
/// self = [1, 2, 3], blk = 2, peer mean = 3, student mean = 4 in every row.
pub fn scenario_table() -> ObservationTable {
    ObservationTable::new(vec![
        text_column("item", &["E1", "E2", "E3", "T1", "T2", "T3"]),
        text_column(
            "scale_name",
            &["Empathie", "Empathie", "Empathie", "Struktur", "Struktur", "Struktur"],
        ),
        text_column("scale_short", &["EMP", "EMP", "EMP", "STR", "STR", "STR"]),
        number_column("self", &numbers(&[1.0, 2.0, 3.0, 1.0, 2.0, 3.0])),
        number_column("blk", &numbers(&[2.0; 6])),
        number_column("pk1", &numbers(&[2.0, 3.0, 4.0, 2.0, 3.0, 4.0])),
        number_column("pk2", &numbers(&[4.0, 3.0, 2.0, 4.0, 3.0, 2.0])),
        number_column("sus1", &numbers(&[4.0; 6])),
        number_column("sus2", &numbers(&[4.0; 6])),
    ])
}
