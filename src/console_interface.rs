use crate::core::{Cell, Direction, MazeGrid, Vec2};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

/// Actor positions parsed out of a level alongside the grid.
pub struct ParsedLevel {
    pub grid: MazeGrid,
    pub agent: Vec2,
    pub hazards: Vec<Vec2>,
}

// Tiles: '%' wall, '.' item, 'O' power item, 'E' exit, 'P' agent start,
// 'G' hazard start, ' ' open. Short rows are padded with open floor.
pub fn parse_level(s: &str) -> ParsedLevel {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut agent = Vec2::new(0, 0);
    let mut hazards: Vec<Vec2> = Vec::new();
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);

    let mut y = 0;
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (x, ch) in line.chars().enumerate() {
            let c = match ch {
                '%' => Cell::Wall,
                '.' => Cell::Item,
                'O' => Cell::PowerItem,
                'E' => Cell::Exit,
                'P' => {
                    agent = Vec2::new(x as i32, y);
                    Cell::Open
                }
                'G' => {
                    hazards.push(Vec2::new(x as i32, y));
                    Cell::Open
                }
                _ => Cell::Open,
            };
            row.push(c);
        }
        while row.len() < max_width {
            row.push(Cell::Open);
        }
        rows.push(row);
        y += 1;
    }

    ParsedLevel {
        grid: MazeGrid::new(rows),
        agent,
        hazards,
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub struct MazeRenderState {
    pub agent: Vec2,
    pub hazards: Vec<Vec2>,
    pub power_steps: u32,
    pub status: String,
}

pub fn render_maze(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &MazeGrid,
    state: &MazeRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let maze_text = render_maze_to_string(grid, state.agent, &state.hazards);
        let agent_color = if state.power_steps > 0 {
            Color::Red
        } else {
            Color::White
        };
        let maze_paragraph = Paragraph::new(maze_text)
            .block(Block::default().borders(Borders::ALL).title("Maze"))
            .style(Style::default().fg(agent_color))
            .alignment(Alignment::Center);
        f.render_widget(maze_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(state.status.clone())
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn render_maze_to_string(grid: &MazeGrid, agent: Vec2, hazards: &[Vec2]) -> String {
    let mut result = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Vec2::new(x, y);
            let ch = if pos == agent {
                'P'
            } else if hazards.contains(&pos) {
                'G'
            } else {
                match grid.cell_at(pos) {
                    Some(Cell::Wall) => '%',
                    Some(Cell::Item) => '.',
                    Some(Cell::PowerItem) => 'O',
                    Some(Cell::Exit) => 'E',
                    _ => ' ',
                }
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::North)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::South)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::West)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::East)
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
