use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use invite_cli::types::{BatchResult, RecordReport};
use invite_model::InvitationOutcome;

/// Print the operator-facing batch summary: outcome counts, and a detail
/// table when any row needs attention.
pub fn print_summary(result: &BatchResult, dry_run: bool) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    if dry_run {
        table.add_row(vec![
            Cell::new("validated (not submitted)"),
            count_cell(result.validated_only(), Color::Green),
        ]);
    } else {
        table.add_row(vec![
            Cell::new("invited"),
            count_cell(result.invited(), Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("already registered"),
            count_cell(result.already_registered(), Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("rejected"),
        count_cell(result.rejected(), Color::Yellow),
    ]);
    if !dry_run {
        table.add_row(vec![
            Cell::new("api errors"),
            count_cell(result.remote_failures(), Color::Red),
        ]);
        table.add_row(vec![
            Cell::new("network errors"),
            count_cell(result.transport_failures(), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_failure_table(result);
}

fn print_failure_table(result: &BatchResult) {
    let failures: Vec<&RecordReport> = result.failures().collect();
    if failures.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Email"),
        header_cell("Outcome"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for report in failures {
        let Some(outcome) = &report.outcome else {
            continue;
        };
        table.add_row(vec![
            Cell::new(report.position),
            Cell::new(report.email.as_deref().unwrap_or("-")),
            outcome_cell(outcome),
            Cell::new(outcome_detail(outcome)),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn outcome_cell(outcome: &InvitationOutcome) -> Cell {
    let cell = Cell::new(outcome.label());
    match outcome {
        InvitationOutcome::RejectedLocally { .. } => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Red),
    }
}

fn outcome_detail(outcome: &InvitationOutcome) -> String {
    match outcome {
        InvitationOutcome::RejectedLocally { reason, .. } => reason.clone(),
        InvitationOutcome::RemoteFailure { status, body } => format!("{status} {body}"),
        InvitationOutcome::TransportFailure { message } => message.clone(),
        InvitationOutcome::Created | InvitationOutcome::AlreadyExists => String::new(),
    }
}
