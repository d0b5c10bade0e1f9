use scraper::{Html, Selector};

use crate::PollError;

/// Counts submissions in a fetched page: the number of `<tr>` rows under
/// the first `<table>`, minus one header row. A document without a table
/// is a cycle failure, not a count of zero.
pub fn count_submissions(html: &str) -> Result<u64, PollError> {
    let doc = Html::parse_document(html);
    let table_sel = Selector::parse("table").map_err(|_| PollError::NoTable)?;
    let row_sel = Selector::parse("tr").map_err(|_| PollError::NoTable)?;

    let table = doc.select(&table_sel).next().ok_or(PollError::NoTable)?;
    let rows = table.select(&row_sel).count() as u64;
    Ok(rows.saturating_sub(1))
}
