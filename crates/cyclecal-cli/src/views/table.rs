use chrono::Utc;
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use cyclecal_core::event::{CalendarEventDescriptor, EventKind};

pub fn display_events(events: &[CalendarEventDescriptor]) {
    if events.is_empty() {
        println!("No events found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Start", "When", "Title", "Kind", "Color"]);

    let now = Utc::now();
    for event in events {
        let mut row = Row::new();

        let start = if event.all_day {
            format!("{} (all day)", event.start.format("%Y-%m-%d"))
        } else {
            event.start.format("%Y-%m-%d %H:%M").to_string()
        };
        row.add_cell(Cell::new(start));

        let when = Cell::new(event.start.humanize());
        row.add_cell(if event.start < now { when.fg(Color::DarkGrey) } else { when });

        let title = Cell::new(&event.title);
        row.add_cell(match event.kind {
            EventKind::Recurring => title.add_attribute(Attribute::Bold),
            EventKind::Task | EventKind::Subtask => title,
        });

        let kind = match event.kind {
            EventKind::Task => Cell::new("task"),
            EventKind::Subtask => Cell::new("subtask"),
            EventKind::Recurring => Cell::new("↻ recurring").fg(Color::Cyan),
        };
        row.add_cell(kind);
        row.add_cell(Cell::new(&event.color));

        table.add_row(row);
    }

    println!("{table}");
}
