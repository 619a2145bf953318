//! Foreground content drawn over the backdrop.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, LineGauge, Paragraph},
};
use skyfall_background::Stage;
use skyfall_config::LinkConfig;
use skyfall_core::BackgroundKind;

/// Tailwind blue-600, the link button color.
const LINK_BLUE: Color = Color::Rgb(37, 99, 235);
/// Tailwind green-400, the "Matrix" label and the switch when on.
const SWITCH_GREEN: Color = Color::Rgb(74, 222, 128);
/// Tailwind blue-500, the slider accent.
const SLIDER_BLUE: Color = Color::Rgb(59, 130, 246);

const SLIDER_WIDTH: u16 = 28;

/// Render the title, link, toggle and speed slider centred in `area`.
pub fn render_foreground(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    link: &LinkConfig,
    stage: &Stage,
) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),   // Top padding
        Constraint::Length(1), // Title
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Link
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Toggle
        Constraint::Length(1), // Spacing
        Constraint::Length(2), // Slider
        Constraint::Fill(1),   // Bottom padding
        Constraint::Length(1), // Help text
    ])
    .split(area);

    let heading = Paragraph::new(title.to_string())
        .style(Style::new().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    frame.render_widget(link_line(link), chunks[3]);
    frame.render_widget(toggle_line(stage.background()), chunks[5]);
    render_slider(frame, chunks[7], stage);

    let help = Line::from(vec![
        "q".bold().fg(SWITCH_GREEN),
        " quit  ".dark_gray(),
        "m".bold().fg(SWITCH_GREEN),
        " toggle background  ".dark_gray(),
        "←/→".bold().fg(SWITCH_GREEN),
        " speed".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, chunks[9]);
}

fn link_line(link: &LinkConfig) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", link.label),
            Style::new()
                .fg(Color::White)
                .bg(LINK_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            link.url.clone(),
            Style::new()
                .fg(Color::Gray)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
    .centered()
}

fn toggle_line(background: BackgroundKind) -> Line<'static> {
    let (knob, track) = match background {
        BackgroundKind::Starfall => ("●   ", Color::Gray),
        BackgroundKind::Matrix => ("   ●", SWITCH_GREEN),
    };
    Line::from(vec![
        Span::styled(
            BackgroundKind::Starfall.label(),
            Style::new().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(format!("({knob})"), Style::new().fg(track).bold()),
        Span::raw("  "),
        Span::styled(
            BackgroundKind::Matrix.label(),
            Style::new().fg(SWITCH_GREEN),
        ),
    ])
    .centered()
}

fn render_slider(frame: &mut Frame, area: Rect, stage: &Stage) {
    let [panel] = Layout::horizontal([Constraint::Length(SLIDER_WIDTH + 4)])
        .flex(Flex::Center)
        .areas(area);
    // Hide the backdrop behind the slider panel.
    frame.render_widget(Clear, panel);
    frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), panel);

    let [caption, gauge] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(panel);
    let label = format!(
        "{}: {}",
        stage.background().speed_caption(),
        stage.speed()
    );
    frame.render_widget(
        Paragraph::new(label)
            .style(Style::new().fg(Color::White))
            .alignment(Alignment::Center),
        caption,
    );

    let [track] = Layout::horizontal([Constraint::Length(SLIDER_WIDTH)])
        .flex(Flex::Center)
        .areas(gauge);
    let slider = LineGauge::default()
        .ratio(stage.speed().ratio())
        .label("")
        .filled_style(Style::new().fg(SLIDER_BLUE))
        .unfilled_style(Style::new().fg(Color::DarkGray));
    frame.render_widget(slider, track);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_toggle_knob_position() {
        assert_eq!(
            text(&toggle_line(BackgroundKind::Starfall)),
            "Starfall  (●   )  Matrix"
        );
        assert_eq!(
            text(&toggle_line(BackgroundKind::Matrix)),
            "Starfall  (   ●)  Matrix"
        );
    }

    #[test]
    fn test_link_line_shows_label_and_url() {
        let line = link_line(&LinkConfig::default());
        assert_eq!(text(&line), " Go to ChatGPT   https://chat.openai.com/");
        assert_eq!(line.spans[0].style.bg, Some(LINK_BLUE));
    }
}
