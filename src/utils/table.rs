use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

pub fn print_table<H, C>(header: Vec<H>, rows: Vec<Vec<C>>)
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    if let Some(table) = render_table(header, rows) {
        println!("{}", table);
    }
}

/// Builds a sharp-style table with the trailing (numeric) column right-aligned.
pub fn render_table<H, C>(header: Vec<H>, rows: Vec<Vec<C>>) -> Option<String>
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    if rows.is_empty() {
        return None;
    }
    let last_column = header.len().saturating_sub(1);
    let mut table_builder = Builder::default();
    table_builder.push_record(header.iter().map(|h| h.as_ref()));
    rows.iter().for_each(|row| {
        table_builder.push_record(row.iter().map(|cell| cell.as_ref()));
    });
    Some(
        table_builder
            .build()
            .with(Style::sharp())
            .with(Modify::new(Columns::single(last_column)).with(Alignment::right()))
            .to_string(),
    )
}
