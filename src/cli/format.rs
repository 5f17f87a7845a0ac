//! Output formatting for CLI display.

use std::fmt::Write;

use jiff::tz::TimeZone;

use crate::model::DayBucket;
use crate::view::NO_SHIPMENTS;

/// Format a schedule as one block per day.
///
/// ```text
/// Monday 2026-10-19
///   16:30  HB-1  Acme  Rotterdam → Singapore  Sea  In transit
/// Tuesday 2026-10-20
///   No shipments
/// ```
pub(super) fn format_schedule(buckets: &[DayBucket], tz: &TimeZone) -> String {
    let mut out = String::new();
    for bucket in buckets {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", bucket.label);

        if bucket.shipments.is_empty() {
            let _ = writeln!(out, "  {NO_SHIPMENTS}");
            continue;
        }

        for s in &bucket.shipments {
            let time = tz.to_datetime(s.estimated_arrival).strftime("%H:%M");
            let _ = writeln!(
                out,
                "  {time}  {}  {}  {} → {}  {}  {}",
                s.house_bill_number, s.client, s.origin, s.destination, s.mode, s.status
            );
        }
    }
    out
}

/// Format rows as left-aligned columns separated by two spaces.
pub(super) fn format_table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
