use chrono::Local;
use std::path::Path;

use crate::result::RangeResult;

/// Generate a filename for the csv export of a range, inside `directory`
pub fn generate_filename(directory: &Path, result: &RangeResult) -> String {
    let [start, end] = result.iso_pair();

    // Include date and time (hours and minutes) in the filename
    let datetime_stamp = Local::now().format("%Y_%m_%d_%H_%M").to_string();

    let out_path = directory.join(format!("weekends_{start}_{end}_{datetime_stamp}.csv"));
    out_path.to_string_lossy().to_string()
}

/// Save the csv export to a file, returns the filename on success
pub async fn save_file(filename: String, csv_content: String) -> Result<String, String> {
    match tokio::fs::write(&filename, csv_content).await {
        Ok(()) => Ok(filename),
        Err(e) => Err(format!("Failed to write {filename}: {e}")),
    }
}
