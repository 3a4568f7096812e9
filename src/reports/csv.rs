use crate::Result;
use crate::render::VehicleReport;
use core::fmt::Write;
use ohno::IntoAppError;

pub fn generate<W: Write>(report: &VehicleReport, writer: &mut W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());

    csv.write_record(["Section", "Field", "Value"]).into_app_err("writing CSV header")?;
    for section in &report.sections {
        for field in &section.fields {
            csv.write_record([section.title.as_str(), field.label.as_str(), field.value.as_str()])
                .into_app_err("writing CSV field row")?;
        }
    }

    for table in &report.tables {
        csv.write_record(core::iter::once(table.title.as_str()).chain(table.table.headers.iter().map(String::as_str)))
            .into_app_err("writing CSV table header")?;
        for row in &table.table.rows {
            csv.write_record(core::iter::once("").chain(row.iter().map(String::as_str)))
                .into_app_err("writing CSV table row")?;
        }
    }

    let bytes = csv.into_inner().into_app_err("flushing CSV output")?;
    let text = String::from_utf8(bytes).into_app_err("CSV output is not valid UTF-8")?;
    write!(writer, "{text}")?;
    Ok(())
}
