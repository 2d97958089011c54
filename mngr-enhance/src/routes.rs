//! Paths of the admin pages the markup links between.

use crate::scheme::TableRef;

fn table_base(table: &TableRef) -> String {
    match table {
        TableRef::Named { schema, table } => format!(
            "/tables/{}/{}",
            urlencoding::encode(schema),
            urlencoding::encode(table)
        ),
        TableRef::Oid(oid) => format!("/tables/{oid}"),
    }
}

/// Records listing, the page the sort parameters apply to.
pub fn records(table: &TableRef) -> String {
    format!("{}/records", table_base(table))
}

pub fn new_record(table: &TableRef) -> String {
    format!("{}/records/new", table_base(table))
}

/// Edit page for one record; the target of a row double-click.
pub fn edit_record(table: &TableRef, record: &str) -> String {
    format!(
        "{}/records/{}/edit",
        table_base(table),
        urlencoding::encode(record)
    )
}

pub fn debug(table: &TableRef) -> String {
    format!("{}/debug", table_base(table))
}
