//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use solo_tictactoe::{Position, Side, Square};

use crate::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let game = app.game();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Games played
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Score
            Constraint::Length(1), // Controls
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(game.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let played = Paragraph::new(format!("Games played: {}", game.games_played()))
        .alignment(Alignment::Center);
    frame.render_widget(played, chunks[1]);

    draw_board(frame, chunks[2], app);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("Score: ", Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC)),
        Span::raw(format!("{} {}", game.displayed_score(), game.points_text())),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(score, chunks[3]);

    let controls = Paragraph::new(format!(
        "[arrows] move  [enter/1-9] place  [c] {}  [q] quit",
        app.reset_label()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[4]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[5]);

    if app.show_summary() {
        draw_summary(frame, area, &game.summary());
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();

    let (symbol, base_style) = match game.board().get(pos.to_index()) {
        Some(Square::Occupied(side)) => {
            let color = match side {
                Side::Player => Color::Blue,
                Side::Computer => Color::Red,
            };
            (
                format!(" {} ", game.glyph(side)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        _ => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
    };

    let style = if pos == app.cursor() && !app.show_summary() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_summary(frame: &mut Frame, area: Rect, summary: &str) {
    let popup = center_rect(area, 46, 6);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(summary.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Restart   [q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Game over!")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::White)),
        );
    frame.render_widget(dialog, popup);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
