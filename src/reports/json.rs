use crate::Result;
use crate::render::VehicleReport;
use core::fmt::Write;

pub fn generate<W: Write>(report: &VehicleReport, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ReportField, ReportSection, ReportTable};
    use crate::table::Table;
    use serde_json::json;

    #[test]
    fn test_generate_empty_report() {
        let mut output = String::new();
        generate(&VehicleReport::default(), &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, json!({"sections": [], "tables": []}));
    }

    #[test]
    fn test_generate_structure() {
        let report = VehicleReport {
            sections: vec![ReportSection {
                title: "Tax".to_string(),
                fields: vec![ReportField {
                    path: "VehicleTaxDetails.Co2Emissions".to_string(),
                    label: "CO2 Emissions".to_string(),
                    value: "118 g/km".to_string(),
                }],
            }],
            tables: vec![ReportTable {
                title: "Recalls".to_string(),
                table: Table {
                    headers: vec!["Number".to_string()],
                    rows: vec![vec!["R/1".to_string()]],
                },
            }],
        };

        let mut output = String::new();
        generate(&report, &mut output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            parsed,
            json!({
                "sections": [{
                    "title": "Tax",
                    "fields": [{"path": "VehicleTaxDetails.Co2Emissions", "label": "CO2 Emissions", "value": "118 g/km"}]
                }],
                "tables": [{"title": "Recalls", "headers": ["Number"], "rows": [["R/1"]]}]
            })
        );
    }
}
