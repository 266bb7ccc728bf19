mod console;
mod scan;

pub use console::ConsoleListener;
pub use scan::{color_choice_to_mode, parse_max_length, run_scan, run_scan_impl};
