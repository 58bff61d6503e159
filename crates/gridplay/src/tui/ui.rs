//! Stateless UI rendering for the grid games.

use gridplay_board::{Cell, GridGame, Occupancy, Phase};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::ScreenLayout;

/// Background of highlighted cells.
const HIGHLIGHT: Color = Color::Rgb(255, 230, 120);

/// Renders the whole screen for one game.
pub fn draw(frame: &mut Frame, game: &dyn GridGame, layout: &ScreenLayout) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Gridplay - {}", game.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "r restart | t tic-tac-toe | c connect four | q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    for cell in game.grid().iter() {
        draw_cell(frame, layout.cell_rect(*cell.coord()), cell);
    }

    let status_style = match game.phase() {
        Phase::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Phase::Drawn => Style::default().fg(Color::Magenta),
        Phase::Setup | Phase::InProgress => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(game.message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let restart = Paragraph::new("Restart")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(restart, layout.restart);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &Cell) {
    if area.is_empty() {
        return;
    }
    let background = if cell.is_highlighted() {
        HIGHLIGHT
    } else {
        to_term(*cell.background())
    };

    let mut lines = vec![Line::default(); usize::from(area.height.saturating_sub(1) / 2)];
    if let Occupancy::Occupied(mark) = cell.occupancy() {
        lines.push(Line::from(Span::styled(
            "●",
            Style::default().fg(to_term(mark)).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn to_term(color: gridplay_board::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameKind;
    use gridplay_board::{CellListener, Coord};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(game: &dyn GridGame) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30), 7, 6, 7, 3);
        terminal.draw(|f| draw(f, game, &layout)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_status_and_restart_rendered() {
        let game = GameKind::ConnectFour.build();
        let out = text(&render(game.as_ref()));
        assert!(out.contains("Welcome to Connect Four. Red to play."));
        assert!(out.contains("Restart"));
        assert!(out.contains("Gridplay - Connect Four"));
    }

    #[test]
    fn test_mark_and_highlight_rendered() {
        let mut game = GameKind::ConnectFour.build();
        game.on_clicked(Coord::new(0, 0));
        game.on_pointer_enter(Coord::new(1, 0));
        let buffer = render(game.as_ref());
        assert!(text(&buffer).contains('●'));

        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 30), 7, 6, 7, 3);
        let lit = layout.cell_rect(Coord::new(1, 5));
        let cell = &buffer[(lit.x, lit.y)];
        assert_eq!(cell.bg, HIGHLIGHT);
    }
}
