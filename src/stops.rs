//! Column widths to absolute stop positions

use crate::config::TabStopConfig;

/// Absolute stop positions for one line's column widths
///
/// Each column advances by `max(width + min_spacing, first_stop_minimum)`
/// and the stops are the running sum of those advances.
pub fn accumulate(widths: &[f64], config: &TabStopConfig) -> Vec<f64> {
    let mut stops = Vec::with_capacity(widths.len());
    accumulate_into(&mut stops, widths, config);
    stops
}

/// Same as [`accumulate`], reusing `stops` (cleared first)
pub fn accumulate_into(stops: &mut Vec<f64>, widths: &[f64], config: &TabStopConfig) {
    stops.clear();
    let mut position = 0.0;
    for &width in widths {
        position += (width + config.min_spacing).max(config.first_stop_minimum);
        stops.push(position);
    }
}
