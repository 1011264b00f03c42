use anyhow::Result;
use classgrid_core::TimeOfDay;
use owo_colors::OwoColorize;

/// One picker value with the roles it may take and its grid row.
pub fn describe(time: &TimeOfDay) -> String {
    let options = (TimeOfDay::start_options(), TimeOfDay::end_options());
    let roles = match (options.0.contains(time), options.1.contains(time)) {
        (true, true) => "start/end",
        (true, false) => "start",
        (false, true) => "end",
        (false, false) => "-",
    };
    format!("{:>8}  {:<9}  row {}", time.to_string(), roles, time.hour_slot())
}

pub fn run() -> Result<()> {
    println!("{}", "Valid class times".bold());
    for time in TimeOfDay::options() {
        println!("  {}", describe(&time));
    }
    Ok(())
}
