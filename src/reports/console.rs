use crate::Result;
use crate::render::{ReportSection, ReportTable, VehicleReport};
use core::fmt::Write;
use owo_colors::OwoColorize;

const COLUMN_GAP: usize = 2;

pub fn generate<W: Write>(report: &VehicleReport, use_colors: bool, writer: &mut W) -> Result<()> {
    let mut first = true;

    for section in &report.sections {
        if !first {
            writeln!(writer)?;
        }
        first = false;
        write_section(section, use_colors, writer)?;
    }

    for table in &report.tables {
        if !first {
            writeln!(writer)?;
        }
        first = false;
        write_table(table, use_colors, writer)?;
    }

    Ok(())
}

fn write_title<W: Write>(title: &str, use_colors: bool, writer: &mut W) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }
    Ok(())
}

fn write_section<W: Write>(section: &ReportSection, use_colors: bool, writer: &mut W) -> Result<()> {
    write_title(&section.title, use_colors, writer)?;

    let label_width = section.fields.iter().map(|f| f.label.chars().count()).max().unwrap_or(0);
    for field in &section.fields {
        writeln!(writer, "  {:<label_width$} : {}", field.label, field.value)?;
    }

    Ok(())
}

fn write_table<W: Write>(table: &ReportTable, use_colors: bool, writer: &mut W) -> Result<()> {
    write_title(&table.title, use_colors, writer)?;

    let widths: Vec<usize> = table
        .table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(core::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = format_row(&table.table.headers, &widths);
    if use_colors {
        writeln!(writer, "  {}", header.dimmed())?;
    } else {
        writeln!(writer, "  {header}")?;
    }

    for row in &table.table.rows {
        writeln!(writer, "  {}", format_row(row, &widths))?;
    }

    Ok(())
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths) {
        if !line.is_empty() {
            line.push_str(&" ".repeat(COLUMN_GAP));
        }
        let _ = write!(line, "{cell:<width$}");
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty_report() {
        let mut output = String::new();
        generate(&VehicleReport::default(), false, &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_format_row_pads_by_chars() {
        let cells = vec!["£5.00".to_string(), "x".to_string()];
        assert_eq!(format_row(&cells, &[6, 1]), "£5.00   x");
    }
}
