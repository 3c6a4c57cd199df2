use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::picker::{DatePicker, PickerEvent};
use crate::presets::{Clock, PredefinedRangeResolver, SystemClock};
use crate::result::RangeResult;

/// Application state
pub struct AppState {
    pub picker: DatePicker,
    pub years: Vec<i32>,
    pub last_result: Option<RangeResult>,
    pub error: Option<String>,
    pub success_message: Option<String>,
    pub success_message_expires_at: Option<Instant>,
}

impl AppState {
    /// Create a new state showing the current month
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        let years = config.years.to_vec();
        let presets = PredefinedRangeResolver::new(config.ranges, clock);

        Self {
            picker: DatePicker::at_today(presets),
            years,
            last_result: None,
            error: None,
            success_message: None,
            success_message_expires_at: None,
        }
    }

    /// Forward an event to the picker and keep the latest emitted result
    pub fn handle_event(&mut self, event: PickerEvent) {
        if let Some(result) = self.picker.handle(event) {
            let [start, end] = result.iso_pair();
            info!(%start, %end, "showing new range");
            self.last_result = Some(result);
            self.error = None;
        }
    }

    /// Configured years for the year selector, plus the visible year once navigation leaves them
    pub fn year_options(&self) -> Vec<i32> {
        let visible = self.picker.visible().year();
        let mut years = self.years.clone();
        if let Err(position) = years.binary_search(&visible) {
            years.insert(position, visible);
        }
        years
    }
}
