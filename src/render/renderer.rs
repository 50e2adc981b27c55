use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, GameSession, ObjectKind, Phase};
use crate::metrics::GameMetrics;
use crate::render::stage::Stage;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        stage: &Stage,
        session: &GameSession,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], session, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the playfield horizontally
        let field_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Render playfield or game over screen
        if session.phase == Phase::GameOver {
            let game_over = self.render_game_over(field_area, stage, session);
            frame.render_widget(game_over, field_area);
        } else {
            let field = self.render_field(field_area, stage, session);
            frame.render_widget(field, field_area);
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    /// Demote every stage proxy to its grid cell. Where proxies overlap
    /// (the tick the snake eats), the head wins over food over segments.
    fn cell_contents(&self, stage: &Stage, session: &GameSession) -> HashMap<Cell, ObjectKind> {
        fn rank(kind: ObjectKind) -> u8 {
            match kind {
                ObjectKind::Head => 2,
                ObjectKind::Food => 1,
                ObjectKind::Segment => 0,
            }
        }

        let grid = session.grid();
        let mut contents: HashMap<Cell, ObjectKind> = HashMap::new();
        for object in stage.objects() {
            let cell = grid.to_cell(object.position);
            contents
                .entry(cell)
                .and_modify(|kind| {
                    if rank(object.kind) > rank(*kind) {
                        *kind = object.kind;
                    }
                })
                .or_insert(object.kind);
        }
        contents
    }

    fn render_field(&self, _area: Rect, stage: &Stage, session: &GameSession) -> Paragraph<'_> {
        let contents = self.cell_contents(stage, session);
        let half = session.grid().half_width();
        let mut lines = Vec::new();

        // World +y is up, terminal rows grow downward
        for y in (-half..=half).rev() {
            let mut spans = Vec::new();

            for x in -half..=half {
                let cell = match contents.get(&Cell::new(x, y)) {
                    Some(ObjectKind::Head) => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Some(ObjectKind::Segment) => {
                        Span::styled("□ ", Style::default().fg(Color::Blue))
                    }
                    Some(ObjectKind::Food) => Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        session: &GameSession,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.snake.length().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Longest: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.longest_snake.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        _area: Rect,
        stage: &Stage,
        session: &GameSession,
    ) -> Paragraph<'_> {
        let final_length = stage
            .final_length()
            .unwrap_or_else(|| session.snake.length());

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your snake was ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_length.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" segments long", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to stop | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
