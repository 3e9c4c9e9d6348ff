//! Test utilities for catalog loader testing

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use crate::config::ColumnLayout;


/// Compact five-column layout
pub fn compact_layout() -> ColumnLayout {
    ColumnLayout {
        part_number: 0,
        capacitance: 1,
        voltage: 2,
        size: 3,
        height: 4,
    }
}

/// Compact export with a header, three good rows and two rejected rows
pub fn create_compact_csv() -> String {
    r#"Part,Capacitance,Voltage,Size,Height
SC-100,100 mF,2.7V,(10),(20)
SC-250,2.5F,2.7V,"0.512"" L x 0.236"" W (13.00mm x 6.00mm)","0.079"" (2.00mm)"
SC-MISSING,-,2.7V,(10),(20)
SC-1F,1 F,5.5V,"0.394"" Dia (10.00mm)","0.846"" (21.50mm)"
SC-BADUNIT,100 uF,2.7V,(10),(20)"#
        .to_string()
}

/// Line in the default 25-column export layout
pub fn export_line(
    part_number: &str,
    capacitance: &str,
    voltage: &str,
    size: &str,
    height: &str,
) -> String {
    let layout = ColumnLayout::default();
    let mut fields = vec![String::new(); layout.min_fields()];
    fields[layout.part_number] = part_number.to_string();
    fields[layout.capacitance] = capacitance.to_string();
    fields[layout.voltage] = voltage.to_string();
    fields[layout.size] = size.to_string();
    fields[layout.height] = height.to_string();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&fields).unwrap();
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

/// Header line for the default export layout
pub fn export_header() -> String {
    let names: Vec<String> = (0..ColumnLayout::default().min_fields())
        .map(|i| format!("Column {i}"))
        .collect();
    format!("{}\n", names.join(","))
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

/// Helper to create a directory of export files
pub fn create_export_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
    dir
}
