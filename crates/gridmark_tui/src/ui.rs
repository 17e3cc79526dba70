//! Stateless UI rendering.

use crate::app::{App, status_line};
use gridmark::{GameSnapshot, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title, board, and status panel.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.game().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(board_height(*snapshot.rows())), // Board
            Constraint::Length(4), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "Gridmark - {}x{}",
        snapshot.columns(),
        snapshot.rows()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = Paragraph::new(board_lines(&snapshot))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, chunks[1]);

    let mut status = vec![Line::from(status_line(&snapshot))];
    match app.notice() {
        Some(notice) => status.push(Line::from(notice.to_string())),
        None => status.push(Line::from("Arrows/hjkl/wasd move, enter selects, q quits")),
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Terminal rows needed for the board panel, borders included.
fn board_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// One line per board row: `x > [x]` on the cursor cell, `    [ ]` elsewhere.
pub fn board_lines(snapshot: &GameSnapshot) -> Vec<Line<'static>> {
    (0..*snapshot.rows())
        .map(|row| {
            let spans = snapshot
                .row(row)
                .iter()
                .enumerate()
                .flat_map(|(col, owner)| {
                    let index = row * snapshot.columns() + col;
                    cell_spans(*owner, index == *snapshot.cursor(), *snapshot.current_player())
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

fn cell_spans(owner: Option<Player>, has_cursor: bool, to_move: Player) -> [Span<'static>; 2] {
    let cursor = if has_cursor {
        Span::styled(
            format!("{} >", to_move.glyph()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("   ")
    };

    let mark = match owner {
        None => Span::styled(" [ ] ", Style::default().fg(Color::DarkGray)),
        Some(player) => Span::styled(
            format!(" [{}] ", player.glyph()),
            Style::default().fg(player_color(player)).add_modifier(Modifier::BOLD),
        ),
    };

    [cursor, mark]
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Blue,
        Player::Two => Color::Red,
    }
}
