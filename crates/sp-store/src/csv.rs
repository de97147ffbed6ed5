//! Flat CSV export of one roadmap's calendar.
//!
//! One row per plan entry, in plan (chronological) order:
//!
//! ```csv
//! date,kind,module,topic,hours,status
//! 2026-09-01,study,Thermodynamics,First law,2.0,pending
//! ```

use std::path::Path;

use csv::Writer;

use sp_model::Roadmap;

use crate::error::StoreResult;

/// Write `roadmap`'s plan to a CSV file at `path` (created or truncated).
pub fn write_plan_csv(path: &Path, roadmap: &Roadmap) -> StoreResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["date", "kind", "module", "topic", "hours", "status"])?;

    for entry in &roadmap.plan {
        writer.write_record(&[
            entry.date.to_string(),
            entry.kind.as_str().to_string(),
            entry.module_name.clone(),
            entry.topic_name.clone(),
            format!("{:.1}", entry.allocated_hours),
            entry.status.as_str().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
