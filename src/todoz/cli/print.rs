use chrono::{DateTime, Utc};
use colored::Colorize;
use todoz::api::{CmdMessage, MessageLevel, RenderState};
use todoz::model::{FilterMode, Todo};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_count(render: &RenderState) {
    println!("{}", render.count_label().dimmed());
}

pub(super) fn print_todos(todos: &[Todo], filter: FilterMode) {
    if todos.is_empty() {
        match filter {
            FilterMode::All => println!("No tasks yet."),
            other => println!("No {} tasks.", other),
        }
        return;
    }

    for todo in todos {
        println!("{}", format_row(todo));
    }
}

fn format_row(todo: &Todo) -> String {
    let marker = if todo.completed {
        DONE_MARKER.green()
    } else {
        OPEN_MARKER.normal()
    };
    let idx_str = format!("{}. ", todo.id);
    let time_ago = format_time_ago(todo.created_at);

    // "  [x] " + index + text + padding + time
    let fixed_width = 2 + DONE_MARKER.width() + 1 + idx_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let text = truncate_to_width(&todo.text.replace('\n', " "), available);
    let padding = available.saturating_sub(text.width());

    let text_colored = if todo.completed {
        text.dimmed().strikethrough()
    } else {
        text.normal()
    };

    format!(
        "  {} {}{}{}{}",
        marker,
        idx_str.yellow(),
        text_colored,
        " ".repeat(padding),
        time_ago.dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // One column goes to the ellipsis.
    let budget = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > budget {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
