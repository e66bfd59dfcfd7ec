//! Console output utilities
//!
//! Printers used by the command-line front end in place of the page.

use crate::dashboard::{Render, Session};
use crate::filter::FILTER_COLUMNS;

/// Print the sidebar choices available for each filterable column
pub fn print_filter_options(session: &Session) {
    println!("Filter options:");
    for column in FILTER_COLUMNS {
        let options = session.filter_options(column);
        println!("  - {} ({}): {}", column, options.len(), options.join(", "));
    }
}

/// Print a render pass, or the no-data notice
pub fn print_render(render: &Render) {
    match render.view() {
        Some(view) => println!("{}", view.generate_summary()),
        None => println!("No encounters match the selected filters."),
    }
}
