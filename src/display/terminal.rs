use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::buffer::Buffer;
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;

use crate::diagram::{MeanEstimate, RoseDiagram};
use crate::renderer::Canvas;

/// Show the rasterized diagram until the user quits.
pub fn run(diagram: &RoseDiagram, canvas: &Canvas) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, diagram, canvas);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    diagram: &RoseDiagram,
    canvas: &Canvas,
) -> Result<()> {
    let status = status_line(diagram);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let block = ratatui::widgets::Block::default()
                .style(Style::default().bg(Color::Reset));
            frame.render_widget(block, area);

            let canvas_area = Rect::new(
                area.x,
                area.y + 1,
                area.width,
                area.height.saturating_sub(1),
            );
            blit_half_blocks(frame.buffer_mut(), canvas_area, canvas);
            render_status(frame, area, &status);
        })?;

        // Static image: only redraw on resize or quit.
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(
                    KeyEvent {
                        code: KeyCode::Char('q') | KeyCode::Esc,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::CONTROL,
                        ..
                    },
                ) => break,
                _ => {}
            }
        }
    }

    Ok(())
}

fn status_line(diagram: &RoseDiagram) -> String {
    let mean = match &diagram.mean {
        MeanEstimate::Defined(direction) => format!(
            "mean {:.1}\u{00B0} R={:.3}",
            direction.mean_deg, direction.resultant_length
        ),
        MeanEstimate::Indeterminate { .. } => "mean indeterminate".to_string(),
    };
    format!(
        " mode {} | n={} | max {} | {} | [q]uit ",
        diagram.mode.id, diagram.sample_count, diagram.max_count, mean
    )
}

/// Square region of `area` (in half-block pixels) the canvas is scaled into.
/// Returns (left column, top row, side in pixels).
fn fit_square(area: Rect) -> (u16, u16, usize) {
    let side = (area.width as usize).min(area.height as usize * 2);
    let left = area.x + (area.width - side as u16) / 2;
    let top = area.y + ((area.height as usize * 2 - side) / 4) as u16;
    (left, top, side)
}

/// Draw the canvas with '▀' cells: foreground is the upper pixel,
/// background the lower one. Nearest-neighbour sampling.
fn blit_half_blocks(buf: &mut Buffer, area: Rect, canvas: &Canvas) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let (left, top, side) = fit_square(area);
    if side == 0 {
        return;
    }

    let sample = |px: usize, py: usize| {
        let c = canvas.get(px * canvas.width / side, py * canvas.height / side);
        Color::Rgb(c.r, c.g, c.b)
    };

    for row in 0..(side as u16).div_ceil(2) {
        for col in 0..side as u16 {
            let upper = sample(col as usize, row as usize * 2);
            let lower = if (row as usize * 2 + 1) < side {
                sample(col as usize, row as usize * 2 + 1)
            } else {
                Color::Reset
            };
            if let Some(cell) = buf.cell_mut((left + col, top + row)) {
                cell.set_char('▀');
                cell.set_fg(upper);
                cell.set_bg(lower);
            }
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, status: &str) {
    for (i, ch) in status.chars().enumerate() {
        if i < area.width as usize {
            let cell = frame.buffer_mut().cell_mut((area.x + i as u16, area.y));
            if let Some(cell) = cell {
                cell.set_char(ch);
                cell.set_fg(Color::DarkGray);
            }
        }
    }
}
