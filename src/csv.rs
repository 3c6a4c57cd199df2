//! csv export of a committed range and its weekend dates

use serde::Serialize;

use crate::dates::to_iso;
use crate::result::RangeResult;

#[derive(Serialize)]
struct Row<'a> {
    kind: &'a str,
    date: String,
}

/// one row per endpoint followed by one row per weekend date
pub fn result_to_csv(result: &RangeResult) -> Result<String, csv::Error> {
    let range = result.range();
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.serialize(Row {
        kind: "start",
        date: to_iso(&range.start()),
    })?;
    writer.serialize(Row {
        kind: "end",
        date: to_iso(&range.end()),
    })?;
    for weekend in result.weekends() {
        writer.serialize(Row {
            kind: "weekend",
            date: to_iso(weekend),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
