use scraper::{Html, Selector};

/// One table row as its ordered, trimmed `<td>` cell texts. Header rows
/// (th-only) carry no data cells and come back empty.
pub type Row = Vec<String>;

/// Collect every table row in the document, in document order.
pub fn table_rows(html: &str) -> Vec<Row> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse("table tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    document
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| clean_text(&cell.text().collect::<String>()))
                .collect()
        })
        .collect()
}

/// Collapse runs of whitespace (including the newlines scraper leaves between
/// nested text nodes) into single spaces.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_in_document_order() {
        let html = "<table><tr><td>Medak</td><td>Siddipet</td><td>Paddy</td></tr></table>";
        let rows = table_rows(html);
        assert_eq!(rows, vec![vec!["Medak", "Siddipet", "Paddy"]]);
    }

    #[test]
    fn header_row_yields_no_cells() {
        let html = "<table><tr><th>District</th><th>Market</th></tr>\
                    <tr><td>Medak</td><td>Siddipet</td></tr></table>";
        let rows = table_rows(html);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["Medak", "Siddipet"]);
    }

    #[test]
    fn nested_whitespace_collapsed() {
        let html = "<table><tr><td>\n  ₹ 2,620\n  /Quintal\n</td></tr></table>";
        let rows = table_rows(html);
        assert_eq!(rows[0][0], "₹ 2,620 /Quintal");
    }

    #[test]
    fn multiple_tables_concatenate() {
        let html = "<table><tr><td>a</td></tr></table><table><tr><td>b</td></tr></table>";
        let rows = table_rows(html);
        assert_eq!(rows, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn no_tables() {
        assert!(table_rows("<p>nothing here</p>").is_empty());
    }
}
