use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::models::{Position, HORIZONTAL, VERTICAL};

pub mod models;

/// Set up logging on stderr
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        // Fails only when a subscriber is already installed, keep that one
        .try_init()
        .ok();
}

/// Minutes since midnight as `H:MM`
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Horizontal line of a table whose cells have the given widths
#[must_use]
pub fn line_table(widths: &[usize], position: &Position) -> String {
    let [left, inner, right] = position.joints();
    let cells = widths
        .iter()
        .map(|width| HORIZONTAL.to_string().repeat(*width))
        .collect::<Vec<_>>()
        .join(&inner.to_string());

    format!("{left}{cells}{right}")
}

/// Row of a table, each cell padded to its width
#[must_use]
pub fn row_table(widths: &[usize], cells: &[&str]) -> String {
    let mut row = VERTICAL.to_string();
    for (width, cell) in widths.iter().zip(cells) {
        row.push_str(&format!(" {:<w$} ", etc_str(cell, *width), w = width - 2));
        row.push(VERTICAL);
    }

    row
}

/// Cut `data` so it fits in a cell of `width`, marking the cut with `…`
#[must_use]
pub fn etc_str(data: &str, width: usize) -> String {
    let room = width.saturating_sub(2);
    if data.chars().count() <= room {
        return data.to_owned();
    }

    let mut cut = data.chars().take(room.saturating_sub(1)).collect::<String>();
    cut.push('…');

    cut
}
