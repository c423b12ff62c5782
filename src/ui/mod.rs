pub mod comparison;
pub mod summary;

pub use comparison::render_comparison;
pub use summary::{render_catalog, render_summary};

/// Title line underlined to its own width
fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.chars().count()));
}
