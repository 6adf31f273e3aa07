use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use throbber_widgets_tui::Throbber;
use tui_logger::TuiLoggerWidget;
use unicode_width::UnicodeWidthStr;

use super::App;
use crate::search::SearchSnapshot;
use crate::util::format::{format_count, relative_time};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let mut constraints = vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ];
        if self.show_logs {
            constraints.push(Constraint::Length(10));
        }
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        self.render_input(frame, layout[0]);
        self.render_results(frame, layout[1]);
        self.render_status(frame, layout[2]);
        if self.show_logs {
            render_logs(frame, layout[3]);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Search repositories");
        let inner = block.inner(area);
        let text = self.input.text().to_string();
        frame.render_widget(Paragraph::new(text.as_str()).block(block), area);

        // Place the terminal cursor at the edit position.
        let prefix: String = self.input.text().chars().take(self.input.cursor()).collect();
        let x = inner.x + prefix.width() as u16;
        frame.set_cursor_position(Position::new(x.min(inner.right()), inner.y));
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        // Rows are built as owned cells so the snapshot borrow ends before
        // the stateful table render needs the mutable selection state.
        let (rows, loading, term_is_empty) = {
            let snapshot = self.orchestrator.snapshot();
            (
                result_rows(&snapshot),
                snapshot.loading,
                snapshot.current_term.is_empty(),
            )
        };

        if rows.is_empty() {
            let message = if loading {
                "Searching..."
            } else if term_is_empty {
                "Type to search"
            } else {
                "No results"
            };
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(MUTED)),
                area,
            );
            return;
        }

        let header = Row::new(["Name", "Stars", "Forks", "Language", "Updated", "Description"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table = Table::new(
            rows,
            [
                Constraint::Length(28),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(12),
                Constraint::Length(14),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let snapshot = self.orchestrator.snapshot();
        let mut line = Line::default();

        if snapshot.loading {
            let spinner = Throbber::default().style(Style::default().fg(ACCENT));
            line.spans.push(spinner.to_symbol_span(&self.throbber_state));
            line.spans.push(Span::raw(" "));
        }

        if let Some(error) = snapshot.error {
            line.spans
                .push(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
        } else if !snapshot.current_term.is_empty() {
            line.spans.push(Span::styled(
                format!(
                    "{} repositories for \"{}\"",
                    format_count(snapshot.total_count),
                    snapshot.current_term
                ),
                Style::default().fg(ACCENT),
            ));
        }

        let mut hints = vec!["Enter: search now", "Ctrl-R: refresh", "Ctrl-O: logs"];
        if snapshot.has_next_page {
            hints.insert(0, "PgDn: load more");
        }
        line.spans.push(Span::styled(
            format!("  {}", hints.join(" \u{00b7} ")),
            Style::default().fg(MUTED),
        ));

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn result_rows(snapshot: &SearchSnapshot<'_>) -> Vec<Row<'static>> {
    let now = Utc::now();
    snapshot
        .items
        .iter()
        .map(|repo| {
            let language = repo.primary_language.as_ref();
            let language_cell = match language {
                Some(language) => Cell::from(language.name.clone()).style(
                    Style::default().fg(parse_hex_color(&language.color).unwrap_or(MUTED)),
                ),
                None => Cell::from(""),
            };
            Row::new([
                Cell::from(repo.name.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(format!("\u{2605} {}", format_count(repo.stargazer_count))),
                Cell::from(format_count(repo.fork_count)),
                language_cell,
                Cell::from(relative_time(&repo.updated_at, now))
                    .style(Style::default().fg(MUTED)),
                Cell::from(repo.description.clone().unwrap_or_default()),
            ])
        })
        .collect()
}

fn render_logs(frame: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(Block::default().borders(Borders::ALL).title("Runtime log"))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_debug(Style::default().fg(MUTED));
    frame.render_widget(widget, area);
}

/// Parse a `#rrggbb` hex color as sent by the remote service.
fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
