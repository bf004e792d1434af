// src/table.rs

// First-table extraction. The projections page carries several layout
// tables; we take the first <table> in document order and assume it is the
// SEP table. There is no header/content check confirming that assumption:
// if the Fed moves the table, this silently picks up the wrong one.
// Inherited fragility, kept as-is.

use scraper::{ElementRef, Html, Selector};

/// Parsed table: flattened header labels plus body rows of cell text.
/// Lives only for the duration of one fetch.
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Parse `html` and extract the first table, or `None` when the document
/// contains no parseable table.
pub fn first_table(html: &str) -> Option<RawTable> {
    let table_sel = Selector::parse("table").expect("static selector");
    let tr_sel = Selector::parse("tr").expect("static selector");
    let th_sel = Selector::parse("th").expect("static selector");
    let td_sel = Selector::parse("td").expect("static selector");
    let cell_sel = Selector::parse("th, td").expect("static selector");

    let doc = Html::parse_document(html);
    let table = doc.select(&table_sel).next()?;

    // Header rows: the leading run of <tr>s made of <th> cells only. The
    // SEP table nests two of these (group label spanning year columns,
    // label column spanning both rows). Body rows may still carry a <th>
    // as the row label, so they are read with the combined selector.
    let mut header_trs: Vec<ElementRef> = Vec::new();
    let mut body_rows: Vec<Vec<String>> = Vec::new();
    let mut carry: Vec<(usize, String)> = Vec::new();

    for tr in table.select(&tr_sel) {
        let all_th = tr.select(&th_sel).next().is_some() && tr.select(&td_sel).next().is_none();
        if all_th && body_rows.is_empty() {
            header_trs.push(tr);
        } else {
            let cells = expand_cells(tr, &cell_sel, &mut carry);
            if !cells.is_empty() {
                body_rows.push(cells);
            }
        }
    }

    if header_trs.is_empty() && body_rows.is_empty() {
        return None;
    }

    let headers = flatten_headers(&header_grid(&header_trs, &th_sel));
    Some(RawTable { headers, rows: body_rows })
}

/// Lay header cells out on a grid, honoring both `rowspan` and `colspan`,
/// so each column position sees its full stack of labels.
fn header_grid(trs: &[ElementRef], th_sel: &Selector) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<Option<String>>> = vec![Vec::new(); trs.len()];

    for (r, tr) in trs.iter().enumerate() {
        let mut c = 0usize;
        for cell in tr.select(th_sel) {
            // skip slots claimed by a rowspan from an earlier row
            while grid[r].get(c).is_some_and(|s| s.is_some()) {
                c += 1;
            }
            let colspan = span_attr(cell, "colspan");
            let rowspan = span_attr(cell, "rowspan");
            let text = cell_text(cell);
            for rr in r..(r + rowspan).min(trs.len()) {
                for cc in c..c + colspan {
                    if grid[rr].len() <= cc {
                        grid[rr].resize(cc + 1, None);
                    }
                    grid[rr][cc] = Some(text.clone());
                }
            }
            c += colspan;
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
        .collect()
}

fn span_attr(cell: ElementRef, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
        .max(1)
}

/// Cell texts for one body row. `colspan` is expanded in place; a
/// `rowspan` registers its text in `carry` so the spanned slots of the
/// following rows stay column-aligned with the fixed offsets downstream.
fn expand_cells(
    tr: ElementRef,
    cell_sel: &Selector,
    carry: &mut Vec<(usize, String)>,
) -> Vec<String> {
    let mut out = Vec::new();
    for cell in tr.select(cell_sel) {
        take_carries(&mut out, carry);
        let colspan = span_attr(cell, "colspan");
        let rowspan = span_attr(cell, "rowspan");
        let text = cell_text(cell);
        for _ in 0..colspan {
            let col = out.len();
            if rowspan > 1 {
                if carry.len() <= col {
                    carry.resize(col + 1, (0, String::new()));
                }
                carry[col] = (rowspan - 1, text.clone());
            }
            out.push(text.clone());
        }
    }
    take_carries(&mut out, carry);
    out
}

/// Fill slots still claimed by a rowspan from an earlier body row.
fn take_carries(out: &mut Vec<String>, carry: &mut Vec<(usize, String)>) {
    while let Some(slot) = carry.get_mut(out.len()) {
        if slot.0 == 0 {
            break;
        }
        slot.0 -= 1;
        out.push(slot.1.clone());
    }
}

/// Join hierarchical header levels per column with `_`; single-level
/// headers pass through untouched. A label that spans several header rows
/// contributes one level, not one per spanned row.
fn flatten_headers(header_rows: &[Vec<String>]) -> Vec<String> {
    let width = header_rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(width);
    for col in 0..width {
        let mut levels: Vec<&str> = Vec::new();
        for row in header_rows {
            let level = row.get(col).map(String::as_str).unwrap_or("");
            if !level.is_empty() && levels.last() != Some(&level) {
                levels.push(level);
            }
        }
        out.push(levels.join("_").trim().to_string());
    }
    out
}

/// Text content with entity decoding done by the parser; collapse the
/// leftover whitespace runs.
fn cell_text(el: ElementRef) -> String {
    let raw: String = el.text().collect();
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}
