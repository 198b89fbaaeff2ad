// ui.rs

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Wrap,
        canvas::{Canvas, Circle, Map, MapResolution},
    },
};

use crate::app::{App, CurrentScreen};
use crate::attributes::year_label;
use crate::config::{MAP_ZOOM, padded_view, pixels_per_degree};

pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Notification
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    let notification = Paragraph::new(app.notification.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(notification, main_layout[0]);

    match app.current_screen {
        CurrentScreen::Map => render_map_screen(frame, app, main_layout[1]),
        CurrentScreen::Help => render_help_screen(frame, app, main_layout[1]),
    }

    render_footer(frame, app, main_layout[2]);
}

fn render_map_screen(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_map(frame, app, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Sequence slider
            Constraint::Length(6), // Legend
            Constraint::Length(4), // Popup
            Constraint::Min(0),    // Dataset info
        ])
        .split(columns[1]);

    render_sequence(frame, app, side[0]);
    render_legend(frame, app, side[1]);
    render_popup(frame, app, side[2]);
    render_info(frame, app, side[3]);
}

fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let bbox = app.data.as_ref().and_then(|d| d.info.bbox);
    let (x_bounds, y_bounds) = padded_view(bbox);
    let scale = pixels_per_degree(MAP_ZOOM);
    let markers = app.visible_markers();
    let selected = app.selected_feature;

    let selected_label = markers
        .iter()
        .find(|m| Some(m.feature) == selected)
        .and_then(|m| {
            let name = app.features().get(m.feature)?.state_name()?;
            Some((m.lon, m.lat + m.radius / scale, name.to_string()))
        });

    let title = match app.current_label() {
        Some(label) => format!(" Corn Yield: {} ", label),
        None => String::from(" Corn Yield "),
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.layer();
            for m in &markers {
                let color = if Some(m.feature) == selected {
                    Color::LightRed
                } else {
                    Color::Yellow
                };
                ctx.draw(&Circle {
                    x: m.lon,
                    y: m.lat,
                    radius: m.radius / scale,
                    color,
                });
            }
            if let Some((x, y, name)) = &selected_label {
                ctx.print(
                    *x,
                    *y,
                    Span::styled(name.clone(), Style::default().fg(Color::White).bold()),
                );
            }
        });
    frame.render_widget(canvas, area);
}

fn render_sequence(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Year ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightYellow));

    let lines = match (app.sequence.current(), app.sequence.max()) {
        (Some(index), Some(max)) => {
            let track: String = (0..=max)
                .map(|i| if i == index { '●' } else { '─' })
                .collect();
            let first = app.attributes.first().map(String::as_str).map(year_label);
            let last = app.attributes.last().map(String::as_str).map(year_label);
            vec![
                Line::from(format!(
                    "{} {} {}",
                    first.unwrap_or_default(),
                    track,
                    last.unwrap_or_default()
                )),
                Line::from(vec![
                    Span::raw("Showing "),
                    Span::styled(
                        app.current_label().unwrap_or_default().to_string(),
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  [{}/{}]", index, max)),
                ]),
            ]
        }
        _ => vec![Line::from("No yield years available").fg(Color::Gray)],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue));

    let mut lines = Vec::new();
    if let Some(legend) = &app.legend {
        lines.push(Line::from(legend.title.clone()).bold());
        for entry in &legend.entries {
            let radius = entry
                .radius
                .map_or_else(|| String::from("-"), |r| format!("{:.1}px", r));
            lines.push(Line::from(format!(
                "{:>4}: {:>4} bu/ac  r={}",
                entry.name, entry.display, radius
            )));
        }
    } else {
        lines.push(Line::from("No legend").fg(Color::Gray));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_popup(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Selected ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));

    let lines: Vec<Line> = match app.selected_popup() {
        Some(popup) => popup.into_iter().map(Line::from).collect(),
        None => vec![Line::from("Nothing selected").fg(Color::Gray)],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_info(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Dataset ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightCyan));

    let mut text = Vec::new();
    if let Some(data) = &app.data {
        let info = &data.info;
        text.push(Line::from(format!("File: {}", info.file_name)));
        text.push(Line::from(format!("Size: {} KB", info.file_size_kb)));
        text.push(Line::from(format!("Modified: {}", info.modified_time)));
        text.push(Line::from(format!("Features: {}", info.feature_count)));
        if let Some(bbox) = info.bbox {
            text.push(Line::from(format!(
                "BBox: [{:.2},{:.2},{:.2},{:.2}]",
                bbox[0], bbox[1], bbox[2], bbox[3]
            )));
        } else {
            text.push(Line::from(String::from("BBox: No point features")));
        }
        text.push(Line::from(format!("Filter: {}", app.active_filter())));
    } else {
        text.push(Line::from("No data loaded").fg(Color::Gray));
    }

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Renders the help screen.
fn render_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Help Screen ")
        .title_style(Style::default().fg(Color::Yellow).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let help_lines: Vec<Line> = std::iter::once(Line::from("Keybinds:"))
        .chain(app.help_keybinds.iter().map(|s| Line::from(format!("  {}", s))))
        .collect();

    let help_text = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::LightGreen));

    frame.render_widget(help_text, area);
}

/// Renders a common footer area.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let current_screen_name = match app.current_screen {
        CurrentScreen::Map => "Map",
        CurrentScreen::Help => "Help",
    };

    let footer_text = Line::from(vec![
        Span::raw("Screen: "),
        Span::styled(
            current_screen_name,
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Filter: "),
        Span::styled(
            app.active_filter().to_string(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Press "),
        Span::styled(
            "q",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Red),
        ),
        Span::raw(" to quit "),
        Span::raw(" | Press "),
        Span::styled(
            "?",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        ),
        Span::raw(" for Help "),
    ]);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .block(block)
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, DatasetInfo, Feature, LoadedData};
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn draws_legend_and_popup() {
        let mut app = App::new();
        let properties = json!({ "StateName": "Iowa", "yr07": 171, "yr08": 171 })
            .as_object()
            .cloned()
            .unwrap();
        app.load(LoadedData {
            dataset: Dataset::new(vec![Feature::new(properties, Some((-93.5, 42.0)))]),
            info: DatasetInfo {
                file_name: "corn.geojson".into(),
                ..Default::default()
            },
        });

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Avg. Yield in 07"));
        assert!(text.contains("State: Iowa"));
        assert!(text.contains("171 bu/ac"));
    }

    #[test]
    fn draws_empty_map_before_load() {
        let app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Loading yield data"));
        assert!(text.contains("No legend"));
    }
}
