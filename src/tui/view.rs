//! Pure rendering: map App state to ratatui widget trees.
//!
//! The screen is a fixed stack: marquee, progress line, slide content,
//! commentary box, footer with the two navigation buttons. Geometry helpers
//! are public because the mouse mapper in `run` hit-tests the same areas.

use humansize::{format_size, BINARY};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::layout::{Align, Element, SlideTree, Tile};
use crate::media::{Gallery, MediaStatus};
use crate::navigation::{Direction, Navigator};

use super::state::{App, SlideIn};
use super::theme;

/// Rows reserved for the commentary box.
pub const COMMENTARY_HEIGHT: u16 = 5;

/// Rows of a gallery tile.
pub const TILE_HEIGHT: u16 = 6;

/// Columns of one navigation button.
pub const BUTTON_WIDTH: u16 = 5;

// ============================================================================
// GEOMETRY
// ============================================================================

/// The fixed regions of the presenter screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub marquee: Rect,
    pub progress: Rect,
    pub content: Rect,
    pub commentary: Rect,
    pub footer: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1),                 // marquee
        Constraint::Length(1),                 // progress
        Constraint::Min(0),                    // slide
        Constraint::Length(COMMENTARY_HEIGHT), // commentary
        Constraint::Length(1),                 // footer
    ])
    .split(area);

    ScreenAreas {
        marquee: chunks[0],
        progress: chunks[1],
        content: chunks[2],
        commentary: chunks[3],
        footer: chunks[4],
    }
}

/// Previous and next button cells, flush right in the footer.
pub fn nav_button_areas(footer: Rect) -> (Rect, Rect) {
    let width = BUTTON_WIDTH.min(footer.width);
    let next_x = footer.right().saturating_sub(width);
    let prev_x = next_x.saturating_sub(width + 1).max(footer.x);
    (
        Rect::new(prev_x, footer.y, width, footer.height.min(1)),
        Rect::new(next_x, footer.y, width, footer.height.min(1)),
    )
}

/// Content area below the badge row.
pub fn slide_body(content: Rect) -> Rect {
    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(content)[1]
}

/// Bottom strip of the slide body where a gallery sits.
pub fn gallery_area(body: Rect) -> Rect {
    Layout::vertical([Constraint::Min(0), Constraint::Length(TILE_HEIGHT)]).split(body)[1]
}

/// Equal-width tile cells across the gallery strip.
pub fn tile_areas(gallery: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
        .spacing(1)
        .split(gallery)
        .to_vec()
}

/// One area per column of the tree. Two columns split 5:7 like a profile
/// sheet.
pub fn column_areas(tree: &SlideTree, body: Rect) -> Vec<Rect> {
    match tree.columns.len() {
        0 => Vec::new(),
        1 => vec![body],
        2 => Layout::horizontal([Constraint::Percentage(42), Constraint::Percentage(58)])
            .spacing(2)
            .split(body)
            .to_vec(),
        n => Layout::horizontal(vec![Constraint::Ratio(1, n as u32); n])
            .spacing(2)
            .split(body)
            .to_vec(),
    }
}

/// Screen cells of the gallery tiles of `tree`, for a screen of `area`.
/// Empty when the slide has no gallery.
pub fn gallery_tile_areas(area: Rect, tree: &SlideTree) -> Vec<Rect> {
    let body = slide_body(screen_areas(area).content);
    tree.columns
        .iter()
        .zip(column_areas(tree, body))
        .find_map(|(column, column_area)| {
            column.iter().find_map(|element| match element {
                Element::Gallery(tiles) => Some(tile_areas(gallery_area(column_area), tiles.len())),
                _ => None,
            })
        })
        .unwrap_or_default()
}

/// Shift the slide area while a slide-in runs. Forward moves enter from
/// the right, backward moves from the left.
fn slide_in_area(area: Rect, slide_in: SlideIn, direction: Direction) -> Rect {
    if !slide_in.is_running() {
        return area;
    }
    let total = u32::from(slide_in.total.max(1));
    let offset = (u32::from(slide_in.frames_left) * u32::from(area.width) / (total * 4)) as u16;
    let offset = offset.min(area.width);
    match direction {
        Direction::Forward => Rect {
            x: area.x + offset,
            width: area.width - offset,
            ..area
        },
        Direction::Backward => Rect {
            width: area.width - offset,
            ..area
        },
        Direction::Still => area,
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole presenter screen.
pub fn render(app: &App, frame: &mut Frame) {
    let areas = screen_areas(frame.area());
    let info = app.deck.info();

    frame.render_widget(render_marquee(&info.title, areas.marquee.width), areas.marquee);
    frame.render_widget(render_progress(&app.nav), areas.progress);

    let content = slide_in_area(areas.content, app.slide_in, app.nav.direction());
    render_slide(&app.tree, &app.gallery, frame, content);

    if let Some(text) = &app.tree.commentary {
        frame.render_widget(render_commentary(text), areas.commentary);
    }

    render_footer(&info.tagline, &app.nav, frame, areas.footer);
}

// ============================================================================
// CHROME
// ============================================================================

/// Row of marquee bulbs with the cinema name in the middle.
fn render_marquee(title: &str, width: u16) -> Paragraph<'static> {
    let label = format!("  {}  ", title);
    let spare = (width as usize).saturating_sub(label.chars().count());
    let bulbs = "● ".repeat(spare / 4);

    Paragraph::new(Line::from(vec![
        Span::styled(bulbs.clone(), theme::STYLE_BULB),
        Span::styled(label, theme::STYLE_MARQUEE),
        Span::styled(bulbs, theme::STYLE_BULB),
    ]))
    .alignment(Alignment::Center)
}

fn render_progress(nav: &Navigator) -> LineGauge<'static> {
    let glyph = match nav.direction() {
        Direction::Backward => "◀",
        Direction::Still => "■",
        Direction::Forward => "▶",
    };
    LineGauge::default()
        .ratio(nav.progress())
        .label(format!("{} {}", glyph, nav.position_label()))
        .filled_style(theme::STYLE_PROGRESS)
        .unfilled_style(theme::STYLE_DIM)
}

fn render_commentary(text: &str) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::TOP)
        .border_style(theme::STYLE_ACCENT)
        .title(Span::styled(" Director's Commentary ", theme::STYLE_SUBTITLE));

    Paragraph::new(Span::styled(format!("\"{}\"", text), theme::STYLE_COMMENTARY))
        .block(block)
        .wrap(Wrap { trim: true })
}

/// Tagline and key hints on the left, navigation buttons on the right.
/// A button at its boundary is drawn disabled.
fn render_footer(tagline: &str, nav: &Navigator, frame: &mut Frame, area: Rect) {
    let hint = if tagline.is_empty() {
        "NOW PLAYING   [←/→] navigate  [q] quit".to_string()
    } else {
        format!("NOW PLAYING · {}   [←/→] navigate  [q] quit", tagline)
    };
    frame.render_widget(Paragraph::new(Span::styled(hint, theme::STYLE_HELP)), area);

    let (prev, next) = nav_button_areas(area);
    let button = |glyph: &'static str, disabled: bool| {
        let style = if disabled {
            theme::STYLE_BUTTON_DISABLED
        } else {
            theme::STYLE_BUTTON
        };
        Paragraph::new(Span::styled(glyph, style)).alignment(Alignment::Center)
    };
    frame.render_widget(button(" ◀ ", nav.at_start()), prev);
    frame.render_widget(button(" ▶ ", nav.at_end()), next);
}

// ============================================================================
// SLIDE
// ============================================================================

fn render_slide(tree: &SlideTree, gallery: &Gallery, frame: &mut Frame, area: Rect) {
    let badge = Paragraph::new(Span::styled(tree.badge.clone(), theme::STYLE_DIM))
        .alignment(Alignment::Right);
    frame.render_widget(badge, Rect { height: area.height.min(1), ..area });

    let column_areas = column_areas(tree, slide_body(area));

    let alignment = match tree.align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
    };

    for (column, column_area) in tree.columns.iter().zip(column_areas) {
        let tiles = column.iter().find_map(|element| match element {
            Element::Gallery(tiles) => Some(tiles),
            _ => None,
        });

        let text_area = match tiles {
            Some(tiles) => {
                let strip = gallery_area(column_area);
                render_gallery(tiles, gallery, frame, strip);
                Rect {
                    height: column_area.height.saturating_sub(strip.height),
                    ..column_area
                }
            }
            None => column_area,
        };

        let paragraph = Paragraph::new(element_lines(column))
            .alignment(alignment)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, text_area);
    }
}

/// Text lines for every non-gallery element of a column.
fn element_lines(elements: &[Element]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for element in elements {
        match element {
            Element::Eyebrow(text) => {
                lines.push(Line::from(Span::styled(
                    format!("★ {}", text.to_uppercase()),
                    theme::STYLE_EYEBROW,
                )));
            }
            Element::Title(text) => {
                lines.push(Line::from(Span::styled(text.clone(), theme::STYLE_TITLE)));
            }
            Element::Display(text) => {
                lines.push(Line::from(Span::styled(text.clone(), theme::STYLE_DISPLAY)));
            }
            Element::Subtitle(text) => {
                for line in text.lines() {
                    lines.push(Line::from(Span::styled(line.to_string(), theme::STYLE_SUBTITLE)));
                }
            }
            Element::Rule => {
                lines.push(Line::from(vec![
                    Span::styled("━━━━━━━━━━━━ ", theme::STYLE_ACCENT),
                    Span::styled("━━", theme::STYLE_EYEBROW),
                ]));
            }
            Element::Section { heading, items } => {
                lines.push(Line::from(Span::styled(
                    format!("● {}", heading.to_uppercase()),
                    theme::STYLE_ACCENT,
                )));
                for item in items {
                    lines.push(Line::from(Span::styled(format!("  {}", item), theme::STYLE_BODY)));
                }
            }
            Element::Checklist(items) => {
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("✔ ", theme::STYLE_ACCENT),
                        Span::styled(item.clone(), theme::STYLE_BODY),
                    ]));
                }
            }
            Element::Numbered(rows) => {
                for row in rows {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{}  ", row.label), theme::STYLE_ACCENT),
                        Span::styled(row.text.clone(), theme::STYLE_BODY),
                    ]));
                }
            }
            Element::Cards(cards) => {
                for card in cards {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{} │ ", card.label), theme::STYLE_DIM),
                        Span::styled(card.text.clone(), theme::STYLE_TITLE),
                    ]));
                }
            }
            Element::Panels(panels) => {
                for panel in panels {
                    lines.push(Line::from(Span::styled(
                        format!("┃ {}", panel.label.to_uppercase()),
                        theme::STYLE_DIM,
                    )));
                    lines.push(Line::from(vec![
                        Span::styled("┃ ", theme::STYLE_DIM),
                        Span::styled(panel.text.clone(), theme::STYLE_TITLE),
                    ]));
                }
            }
            Element::Callout(text) => {
                lines.push(Line::from(Span::styled(
                    format!("▌ {} ▐", text.to_uppercase()),
                    theme::STYLE_CALLOUT,
                )));
            }
            Element::Image { uri, caption } => {
                lines.push(Line::from(Span::styled(
                    format!("▣ {}", caption.to_uppercase()),
                    theme::STYLE_EYEBROW,
                )));
                lines.push(Line::from(Span::styled(uri.clone(), theme::STYLE_DIM)));
            }
            Element::Link { label, uri } => {
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ↗ ", label.to_uppercase()), theme::STYLE_BUTTON),
                    Span::styled(format!(" {}", uri), theme::STYLE_DIM),
                ]));
            }
            // Drawn as tiles by render_gallery
            Element::Gallery(_) => continue,
        }
        lines.push(Line::from(""));
    }

    lines
}

fn render_gallery(tiles: &[Tile], gallery: &Gallery, frame: &mut Frame, area: Rect) {
    for (index, (tile, cell)) in tiles.iter().zip(tile_areas(area, tiles.len())).enumerate() {
        let playing = gallery.is_playing(index);
        let status = match gallery.status(index) {
            MediaStatus::Detached => Line::from(""),
            MediaStatus::Loading => Line::from(Span::styled("◌ loading…", theme::STYLE_LOADING)),
            MediaStatus::Ready { .. } if playing => {
                Line::from(Span::styled("▶ playing", theme::STYLE_PLAYING))
            }
            MediaStatus::Ready { bytes } => {
                let size = bytes
                    .map(|b| format!(" · {}", format_size(b, BINARY)))
                    .unwrap_or_default();
                Line::from(Span::styled(format!("▷ {}{}", tile.kind, size), theme::STYLE_BODY))
            }
            MediaStatus::Unavailable { .. } => {
                Line::from(Span::styled("⚠ Unavailable", theme::STYLE_UNAVAILABLE))
            }
        };

        let border = if playing {
            theme::STYLE_ACCENT
        } else {
            theme::STYLE_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(tile.label.to_uppercase(), theme::STYLE_ACCENT));

        let body = Paragraph::new(vec![
            Line::from(Span::styled(tile.title.clone(), theme::STYLE_TITLE)),
            Line::from(""),
            status,
        ])
        .block(block)
        .wrap(Wrap { trim: true });

        frame.render_widget(body, cell);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::error::MediaError;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 40);
        Terminal::new(backend).unwrap()
    }

    fn app_at(index: usize) -> App {
        App::new(Deck::built_in().unwrap(), index, 4).unwrap().0
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn every_built_in_slide_renders_without_panic() {
        let mut terminal = make_terminal();
        for index in 0..16 {
            let app = app_at(index);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every slide should render");
        }
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
        for index in [0, 1, 11, 15] {
            let app = app_at(index);
            terminal.draw(|frame| render(&app, frame)).unwrap();
        }
    }

    #[test]
    fn marquee_and_progress_are_shown() {
        let mut terminal = make_terminal();
        let app = app_at(2);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("THE KUKJE CINEMA"));
        assert!(text.contains("03 / 16"));
        assert!(text.contains("WHY NOW?"));
        assert!(text.contains("#03"));
    }

    #[test]
    fn commentary_is_rendered() {
        let mut terminal = make_terminal();
        let app = app_at(0);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(screen_text(&terminal).contains("Director's Commentary"));
    }

    #[test]
    fn previous_button_is_disabled_on_first_slide() {
        let mut terminal = make_terminal();
        let app = app_at(0);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let areas = screen_areas(Rect::new(0, 0, 100, 40));
        let (prev, next) = nav_button_areas(areas.footer);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(prev.x + 2, prev.y)].bg, ratatui::style::Color::Reset);
        assert_eq!(buffer[(next.x + 2, next.y)].bg, theme::MARQUEE_RED);
    }

    #[test]
    fn next_button_is_disabled_on_last_slide() {
        let mut terminal = make_terminal();
        let app = app_at(15);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let areas = screen_areas(Rect::new(0, 0, 100, 40));
        let (prev, next) = nav_button_areas(areas.footer);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(prev.x + 2, prev.y)].bg, theme::MARQUEE_RED);
        assert_eq!(buffer[(next.x + 2, next.y)].bg, ratatui::style::Color::Reset);
    }

    #[test]
    fn gallery_shows_loading_then_unavailable() {
        let mut terminal = make_terminal();
        let mut app = app_at(11);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(screen_text(&terminal).contains("loading"));

        let generation = app.gallery.generation();
        for tile in 0..4 {
            app.gallery
                .apply(generation, tile, Err(MediaError::NotFound("x.mp4".into())));
        }
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Unavailable"));
        assert!(!text.contains("loading"));
    }

    #[test]
    fn profile_renders_both_groups() {
        let mut terminal = make_terminal();
        let app = app_at(1);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("CREDITS"));
        assert!(text.contains("FILMOGRAPHY"));
    }

    #[test]
    fn buttons_sit_flush_right() {
        let footer = Rect::new(0, 39, 100, 1);
        let (prev, next) = nav_button_areas(footer);
        assert_eq!(next.right(), 100);
        assert!(prev.right() < next.x);
    }

    #[test]
    fn tile_areas_split_gallery_evenly() {
        let cells = tile_areas(Rect::new(0, 0, 43, TILE_HEIGHT), 4);
        assert_eq!(cells.len(), 4);
        assert!(cells.windows(2).all(|pair| pair[0].right() <= pair[1].x));
        assert!(tile_areas(Rect::new(0, 0, 10, 6), 0).is_empty());
    }

    #[test]
    fn gallery_tiles_are_located_on_portfolio_only() {
        let area = Rect::new(0, 0, 100, 40);
        let portfolio = app_at(11);
        let cells = gallery_tile_areas(area, &portfolio.tree);
        assert_eq!(cells.len(), 4);
        let content = screen_areas(area).content;
        assert!(cells.iter().all(|c| c.bottom() == content.bottom()));

        assert!(gallery_tile_areas(area, &app_at(0).tree).is_empty());
    }

    #[test]
    fn slide_in_shifts_content_by_direction() {
        let area = Rect::new(0, 0, 80, 20);
        let running = SlideIn { frames_left: 4, total: 4 };

        let forward = slide_in_area(area, running, Direction::Forward);
        assert_eq!(forward.x, 20);
        let backward = slide_in_area(area, running, Direction::Backward);
        assert_eq!((backward.x, backward.width), (0, 60));
        assert_eq!(slide_in_area(area, SlideIn::default(), Direction::Forward), area);
    }
}
