//! Positions command
//!
//! Usage: wps positions

use wps_core::PositionTable;

/// Print the position table, one entry per line
pub fn execute() -> Result<(), Box<dyn std::error::Error>> {
    for entry in PositionTable::reference().all() {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            entry.key,
            entry.hook,
            entry.priority,
            entry.style.as_str(),
            entry.label
        );
    }
    Ok(())
}
