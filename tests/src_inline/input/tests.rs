use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_xlsxwriter::Workbook;

use super::delimited::{parse_delimited, sniff_delimiter};
use super::workbook::convert_cell;
use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("lessonobs_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn text(s: &str) -> Cell {
    Cell::from_text(s)
}

#[test]
fn test_table_from_grid_skips_leading_blank_rows() {
    let grid = vec![
        vec![Cell::Empty, Cell::Empty],
        vec![text("item"), text("self")],
        vec![text("S1"), text("3")],
    ];
    let table = table_from_grid(grid).unwrap();
    assert_eq!(table.column_names(), vec!["item", "self"]);
    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.cell(0, 1), &Cell::Number(3.0));
}

#[test]
fn test_table_from_grid_names_blank_and_duplicate_headers() {
    let grid = vec![
        vec![text("pk"), text(""), text("pk")],
        vec![text("1"), text("2"), text("3")],
    ];
    let table = table_from_grid(grid).unwrap();
    assert_eq!(table.column_names(), vec!["pk", "column_2", "pk.1"]);
}

#[test]
fn test_table_from_grid_drops_empty_rows_and_columns() {
    let grid = vec![
        vec![text("item"), text("unused"), text("self")],
        vec![text("S1"), Cell::Empty, text("1")],
        vec![Cell::Empty, Cell::Empty, Cell::Empty],
        vec![text("S2"), Cell::Empty, text("2"), Cell::Empty],
    ];
    let table = table_from_grid(grid).unwrap();
    assert_eq!(table.column_names(), vec!["item", "self"]);
    assert_eq!(table.n_rows(), 2);
}

#[test]
fn test_table_from_grid_rejects_header_only() {
    let grid = vec![vec![text("item"), text("self")]];
    assert!(matches!(table_from_grid(grid), Err(LoadError::Empty(_))));
    assert!(matches!(table_from_grid(Vec::new()), Err(LoadError::Empty(_))));
}

#[test]
fn test_sniff_delimiter() {
    assert_eq!(sniff_delimiter("item;self;blk\n"), b';');
    assert_eq!(sniff_delimiter("item,self,blk\n"), b',');
    assert_eq!(sniff_delimiter("item\tself\tblk\n"), b'\t');
}

#[test]
fn test_parse_delimited_semicolon_export() {
    let rows = parse_delimited("item;scale_name;self\nS1;Empathie;2\nS2;Empathie;\n").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][2], Cell::Number(2.0));
    assert_eq!(rows[2][2], Cell::Empty);
}

#[test]
fn test_parse_delimited_semicolon_export_reads_decimal_commas() {
    let rows =
        parse_delimited("item;scale_name;self;pk1\nS1;Empathie;2,5;3\nS2;Empathie;1;3,75\n")
            .unwrap();
    assert_eq!(rows[1][2], Cell::Number(2.5));
    assert_eq!(rows[1][3], Cell::Number(3.0));
    assert_eq!(rows[2][3], Cell::Number(3.75));
}

#[test]
fn test_parse_delimited_comma_export_keeps_point_decimals() {
    let rows = parse_delimited("item,self\nS1,2.5\n").unwrap();
    assert_eq!(rows[1][1], Cell::Number(2.5));
}

#[test]
fn test_load_csv_file() {
    let dir = make_temp_dir();
    let path = dir.join("ratings.csv");
    fs::write(
        &path,
        "\u{feff}item,scale_name,scale_short,self,blk,pk1,sus1\nS1,Empathie,EMP,1,2,3,4\n,,,,,,\n",
    )
    .unwrap();
    let table = load_table(&path).unwrap();
    assert_eq!(table.n_rows(), 1);
    assert_eq!(table.column_names()[0], "item");
    assert_eq!(table.column("sus1").unwrap().cells, vec![Cell::Number(4.0)]);
}

#[test]
fn test_load_xlsx_file() {
    let dir = make_temp_dir();
    let path = dir.join("ratings.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = ["item", "scale_name", "scale_short", "self", "blk", "pk1", "sus1"];
    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    sheet.write_string(1, 0, "S1").unwrap();
    sheet.write_string(1, 1, "Empathie").unwrap();
    sheet.write_string(1, 2, "EMP").unwrap();
    sheet.write_number(1, 3, 1.0).unwrap();
    sheet.write_number(1, 4, 2.0).unwrap();
    sheet.write_number(1, 5, 3.0).unwrap();
    sheet.write_number(1, 6, 4.0).unwrap();
    // Row 2 left blank, row 3 carries a second item with a missing peer rating.
    sheet.write_string(3, 0, "S2").unwrap();
    sheet.write_string(3, 1, "Empathie").unwrap();
    sheet.write_number(3, 3, 2.0).unwrap();
    workbook.save(&path).unwrap();

    let table = load_table(&path).unwrap();
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column_names(), header.to_vec());
    assert_eq!(table.cell(1, 0), &Cell::Text("S2".to_string()));
    assert_eq!(table.cell(1, 5), &Cell::Empty);
    assert_eq!(table.cell(0, 6), &Cell::Number(4.0));
}

#[test]
fn test_load_garbage_workbook_fails() {
    let dir = make_temp_dir();
    let path = dir.join("broken.xlsx");
    fs::write(&path, b"definitely not a zip archive").unwrap();
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, LoadError::Spreadsheet { .. }));
}

#[test]
fn test_load_missing_csv_fails_with_io() {
    let dir = make_temp_dir();
    let err = load_table(&dir.join("missing.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_convert_cell() {
    assert_eq!(convert_cell(&calamine::Data::Int(3)), Cell::Number(3.0));
    assert_eq!(convert_cell(&calamine::Data::Float(f64::NAN)), Cell::Empty);
    assert_eq!(
        convert_cell(&calamine::Data::String(" D3 ".to_string())),
        Cell::Text("D3".to_string())
    );
    assert_eq!(convert_cell(&calamine::Data::Empty), Cell::Empty);
}

#[test]
fn test_detect_format() {
    assert_eq!(detect_format(Path::new("a.CSV")), InputFormat::Delimited);
    assert_eq!(detect_format(Path::new("a.xlsx")), InputFormat::Workbook);
    assert_eq!(detect_format(Path::new("noext")), InputFormat::Workbook);
}
