use super::details::cost_breakdown;
use super::write_atomic;
use crate::error::ExportError;
use crate::model::QuoteSnapshot;
use std::path::Path;

/// Cost breakdown: one row per priced line, then the total.
pub fn render_csv(snapshot: &QuoteSnapshot) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["Line", "Quantity", "Rate", "Amount"])?;

    for line in cost_breakdown(&snapshot.quotation) {
        writer.write_record([
            line.line,
            line.quantity.to_string(),
            line.rate.to_string(),
            line.amount.to_string(),
        ])?;
    }

    writer.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        snapshot.total_cost.to_string(),
    ])?;

    writer.into_inner().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })
}

pub fn export_csv<P: AsRef<Path>>(snapshot: &QuoteSnapshot, path: P) -> Result<(), ExportError> {
    let csv = render_csv(snapshot)?;
    write_atomic(path.as_ref(), &csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quotation, RoomField, WorkCategory, WorkField};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn rows_follow_breakdown() {
        let mut quotation = Quotation::new();
        quotation.bedrooms[0].set_field(RoomField::Area, "100".into());
        quotation.bedrooms[0].set_field(RoomField::Rate, "50".into());
        let plumbing = quotation.work_item_mut(WorkCategory::Plumbing);
        plumbing.set_field(WorkField::Quantity, "4".into());
        plumbing.set_field(WorkField::Rate, "250.5".into());
        let snapshot = quotation.snapshot(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

        let csv = String::from_utf8(render_csv(&snapshot).unwrap()).unwrap();
        assert_eq!(
            csv,
            "Line,Quantity,Rate,Amount\n\
             Bedroom 1,100,50,5000\n\
             Plumbing,4,250.5,1002\n\
             Total,,,6002\n"
        );
    }

    #[test]
    fn empty_quotation_has_only_total() {
        let snapshot = Quotation::new().snapshot(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let csv = String::from_utf8(render_csv(&snapshot).unwrap()).unwrap();
        assert_eq!(csv, "Line,Quantity,Rate,Amount\nTotal,,,0\n");
    }
}
