use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crf_model::{ComplianceReport, Suggestion};

use crate::commands::CheckOutcome;

pub fn print_summary(outcome: &CheckOutcome, quiet_compliant: bool) {
    println!("Dataset: {}", outcome.dataset);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Codelist"),
        header_cell("Records"),
        header_cell("Compliant"),
        header_cell("Flagged"),
        header_cell("Skipped"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for idx in 2..=5 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    align_column(&mut table, 6, CellAlignment::Center);

    for report in &outcome.reports {
        if quiet_compliant && report.is_compliant() {
            continue;
        }
        table.add_row(vec![
            field_cell(&report.field),
            Cell::new(&report.codelist),
            Cell::new(report.total_records),
            Cell::new(report.compliant),
            count_cell(report.non_compliant(), Color::Red),
            count_cell(report.skipped, Color::DarkGrey),
            status_cell(report),
        ]);
    }
    println!("{table}");

    print_findings(outcome);
    print_warnings(outcome);
}

fn print_findings(outcome: &CheckOutcome) {
    let mut rows = Vec::new();
    for report in &outcome.reports {
        for finding in &report.findings {
            rows.push((report.field.as_str(), finding));
        }
    }
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Record"),
        header_cell("Observed"),
        header_cell("Suggestion"),
        header_cell("Similarity"),
    ]);
    apply_findings_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);

    for (field, finding) in rows {
        let (suggestion_cell, similarity_cell) = match &finding.suggestion {
            Suggestion::Replacement { value, similarity } => (
                Cell::new(value).fg(Color::Green),
                Cell::new(format!("{:.0}%", similarity * 100.0)),
            ),
            Suggestion::NoMatch => (dim_cell("no suggestion"), dim_cell("-")),
        };
        table.add_row(vec![
            field_cell(field),
            Cell::new(&finding.record_id),
            Cell::new(&finding.observed).fg(Color::Red),
            suggestion_cell,
            similarity_cell,
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn print_warnings(outcome: &CheckOutcome) {
    let mut warnings = Vec::new();
    for report in &outcome.reports {
        for warning in &report.warnings {
            warnings.push(warning.to_string());
        }
    }
    for warning in &outcome.skipped_fields {
        warnings.push(warning.to_string());
    }
    if warnings.is_empty() {
        return;
    }
    eprintln!();
    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!("- {warning}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(report: &ComplianceReport) -> Cell {
    if report.is_compliant() {
        Cell::new("OK").fg(Color::Green)
    } else {
        Cell::new("FLAGGED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: &str) -> Cell {
    Cell::new(field)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
