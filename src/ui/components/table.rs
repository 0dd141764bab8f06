//! Table component renderer.
//!
//! Renders one page of the question table: column headers with sort
//! indicators, data rows with search-match highlighting and subject badges,
//! the displayed-range line, and the pagination control strip.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PageControlView, TableView};

/// Renders the table body, range line, and pagination strip.
///
/// Column widths are computed from the longest cell in each column, so the
/// table stays aligned regardless of content. Cell text arrives already
/// truncated from the view model; this component only pads.
pub fn render_table(table: &TableView, theme: &Theme, cols: usize) {
    if let Some(empty) = &table.empty_state {
        super::render_empty_state(empty, theme, cols);
        return;
    }

    let widths = column_widths(table);

    render_headers(table, &widths, theme);
    for row in &table.rows {
        render_row(row, &widths, theme);
    }

    println!();
    println!(
        "{}{}{}",
        Theme::dim(),
        table.page_info,
        Theme::reset()
    );
    render_controls(table, theme);
}

/// Computes per-column display widths from headers and cell text.
fn column_widths(table: &TableView) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        // One extra for the sort indicator glyph.
        .map(|c| c.label.chars().count() + 2)
        .collect();

    for row in &table.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            let len = cell.text.chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    widths
}

fn render_headers(table: &TableView, widths: &[usize], theme: &Theme) {
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    for (i, column) in table.columns.iter().enumerate() {
        let text = format!("{} {}", column.label, column.indicator);
        print!("{text}");
        print!("{}", " ".repeat(widths[i].saturating_sub(text.chars().count()) + 2));
    }
    println!("{}", Theme::reset());
}

fn render_row(row: &crate::ui::viewmodel::RowView, widths: &[usize], theme: &Theme) {
    for (i, cell) in row.cells.iter().enumerate() {
        let pad = widths[i].saturating_sub(cell.text.chars().count()) + 2;

        if cell.is_subject {
            print!("{}", Theme::fg(&theme.colors.badge_fg));
            print!("{}", Theme::bg(&theme.colors.badge_bg));
            print!("{}", cell.text);
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!(
                "{}",
                helpers::highlight_text(&cell.text, &cell.highlight_ranges, theme)
            );
            print!("{}", Theme::reset());
        }

        print!("{}", " ".repeat(pad));
    }
    println!();
}

/// Renders the pagination strip: `‹ Prev  1 … 4 [5] 6 … 20  Next ›`.
fn render_controls(table: &TableView, theme: &Theme) {
    if table.controls.is_empty() {
        return;
    }

    if table.prev_enabled {
        print!("{}‹ Prev{}  ", Theme::fg(&theme.colors.accent), Theme::reset());
    } else {
        print!("{}‹ Prev{}  ", Theme::dim(), Theme::reset());
    }

    for control in &table.controls {
        match control {
            PageControlView::Number { page, active: true } => {
                print!(
                    "{}{}[{page}]{} ",
                    Theme::bold(),
                    Theme::fg(&theme.colors.accent),
                    Theme::reset(),
                );
            }
            PageControlView::Number { page, active: false } => {
                print!("{page} ");
            }
            PageControlView::Ellipsis => {
                print!("{}…{} ", Theme::dim(), Theme::reset());
            }
        }
    }

    if table.next_enabled {
        println!(" {}Next ›{}", Theme::fg(&theme.colors.accent), Theme::reset());
    } else {
        println!(" {}Next ›{}", Theme::dim(), Theme::reset());
    }
}
