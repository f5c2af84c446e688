//! Pure text formatting of fetched data. Nothing in here touches the network.

mod dashboard;
mod raw;

pub use dashboard::{render_dashboard, render_match_details};
pub use raw::{render_banner, render_raw_section, truncate_envelope_data};

/// Width of the `=` rules framing every section.
pub const RULE_WIDTH: usize = 60;

pub(crate) fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
