use super::*;

fn num(v: f64) -> Cell {
    Cell::Number(v)
}

#[test]
fn test_cell_from_text() {
    assert_eq!(Cell::from_text("  "), Cell::Empty);
    assert_eq!(Cell::from_text("NaN"), Cell::Empty);
    assert_eq!(Cell::from_text(" 3 "), Cell::Number(3.0));
    assert_eq!(Cell::from_text("2.5"), Cell::Number(2.5));
    assert_eq!(Cell::from_text("S4"), Cell::Text("S4".to_string()));
    assert_eq!(Cell::from_text("inf"), Cell::Text("inf".to_string()));
}

#[test]
fn test_cell_from_text_decimal_comma() {
    assert_eq!(Cell::from_text_decimal_comma(" 2,5 "), Cell::Number(2.5));
    assert_eq!(Cell::from_text_decimal_comma("3"), Cell::Number(3.0));
    assert_eq!(Cell::from_text_decimal_comma("2.5"), Cell::Number(2.5));
    assert_eq!(Cell::from_text_decimal_comma(""), Cell::Empty);
    assert_eq!(
        Cell::from_text_decimal_comma("1,2,3"),
        Cell::Text("1,2,3".to_string())
    );
    assert_eq!(
        Cell::from_text_decimal_comma("Lehrer, Klasse"),
        Cell::Text("Lehrer, Klasse".to_string())
    );
}

#[test]
fn test_cell_label_drops_integral_fraction() {
    assert_eq!(num(3.0).label(), "3");
    assert_eq!(num(2.5).label(), "2.5");
    assert_eq!(Cell::Text("D3".to_string()).label(), "D3");
    assert_eq!(Cell::Empty.label(), "");
}

#[test]
fn test_new_pads_short_columns() {
    let table = ObservationTable::new(vec![
        Column::new("a", vec![num(1.0), num(2.0)]),
        Column::new("b", vec![num(1.0)]),
    ]);
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.cell(1, 1), &Cell::Empty);
}

#[test]
fn test_drop_empty_rows_and_columns() {
    let mut table = ObservationTable::new(vec![
        Column::new("item", vec![Cell::from_text("S1"), Cell::Empty, Cell::from_text("S2")]),
        Column::new("blank", vec![Cell::Empty, Cell::Empty, Cell::Empty]),
        Column::new("self", vec![num(1.0), Cell::Empty, num(2.0)]),
    ]);
    let (rows, cols) = table.drop_empty();
    assert_eq!((rows, cols), (1, 1));
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column_names(), vec!["item", "self"]);
    assert_eq!(table.cell(1, 1), &num(2.0));
}

#[test]
fn test_column_emptied_by_row_drop_is_removed() {
    let mut table = ObservationTable::new(vec![
        Column::new("item", vec![Cell::from_text("S1"), Cell::Empty]),
        Column::new("pk1", vec![Cell::Empty, Cell::Empty]),
    ]);
    table.drop_empty();
    assert_eq!(table.column_names(), vec!["item"]);
}

#[test]
fn test_set_column_replaces_or_appends() {
    let mut table = ObservationTable::new(vec![Column::new("a", vec![num(1.0), num(2.0)])]);
    table.set_column("b", vec![num(5.0)]);
    assert_eq!(table.n_columns(), 2);
    assert_eq!(table.column("b").unwrap().cells, vec![num(5.0), Cell::Empty]);

    table.set_column("a", vec![num(9.0), num(9.0)]);
    assert_eq!(table.n_columns(), 2);
    assert_eq!(table.column("a").unwrap().numbers().sum::<f64>(), 18.0);
}
