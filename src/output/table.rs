//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Remove, Style, object::Rows},
};

/// Format data as a table, optionally without the header row
pub fn format_table<T: Tabled>(data: &[T], header: bool) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table.with(Style::rounded());

    if header {
        table.with(Modify::new(Rows::first()).with(Alignment::center()));
    } else {
        table.with(Remove::row(Rows::first()));
    }

    table.to_string()
}
