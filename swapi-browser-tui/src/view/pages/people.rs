//! 人物卡片列表

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use swapi_browser_client::{placeholder_image_url, Person};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, CardTone, PageState};
use crate::util::truncate_to_width;
use crate::view::theme::{card_color, colors, Styles};

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// 渲染卡片列表区域
pub fn render(app: &App, state: &PageState, frame: &mut Frame, area: Rect) {
    let border_style = if app.focus.is_list() && !app.modal.is_open() {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(format!(" {} ", t().list.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = state.filtered(&app.search);
    if visible.is_empty() {
        render_empty(state, frame, inner);
    } else {
        render_cards(app, state, &visible, frame, inner);
    }
}

/// 渲染空状态
fn render_empty(state: &PageState, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if state.people.is_empty() {
        texts.list.empty_page
    } else {
        texts.list.no_matches
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(colors().muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染卡片
fn render_cards(app: &App, state: &PageState, visible: &[&Person], frame: &mut Frame, area: Rect) {
    // 卡片文字可用的宽度（扣除选中标记和左右边距）
    let text_width = usize::from(area.width).saturating_sub(HIGHLIGHT_SYMBOL.width() + 2);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|person| card(person, &app.species_highlight, text_width))
        .collect();

    let list = List::new(items)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(visible.len() - 1)));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// 单张卡片：名称、图片地址、空行
fn card(person: &Person, highlight: &str, text_width: usize) -> ListItem<'static> {
    let tone = CardTone::of(person, highlight);
    let card_style = Style::default().bg(card_color(tone)).fg(Color::Black);

    let name = truncate_to_width(&person.name, text_width);
    let image = truncate_to_width(&placeholder_image_url(&person.name), text_width);

    ListItem::new(vec![
        Line::from(vec![Span::styled(
            format!(" {name} "),
            Style::default().add_modifier(Modifier::BOLD),
        )])
        .style(card_style),
        Line::styled(format!("  {image}"), card_style.add_modifier(Modifier::DIM)),
        Line::from(""),
    ])
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use swapi_browser_client::PaginatedResponse;

    use super::*;
    use crate::model::DEFAULT_SPECIES_HIGHLIGHT;

    fn person(name: &str, species: &[&str]) -> Person {
        serde_json::from_value(serde_json::json!({ "name": name, "species": species })).unwrap()
    }

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                if let Some(state) = app.status.ready() {
                    render(app, state, frame, frame.area());
                }
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn app_with(people: Vec<Person>) -> App {
        let mut app = App::default();
        let total = people.len() as u32;
        app.status = crate::model::PageStatus::Ready(PageState::from_response(
            PaginatedResponse::new(people, 1, total),
        ));
        app
    }

    #[test]
    fn cards_are_coloured_by_species() {
        let app = app_with(vec![
            person("Luke Skywalker", &[DEFAULT_SPECIES_HIGHLIGHT]),
            person("C-3PO", &["https://swapi.dev/api/species/2/"]),
            person("Beru Whitesun lars", &[]),
        ]);
        let buffer = draw(&app);

        // 边框占第 0 行，每张卡片 3 行，名称在每张卡片第 1 行
        let expected = [
            (1, "Luke Skywalker", Color::Rgb(0xff, 0x99, 0x99)),
            (4, "C-3PO", Color::Rgb(0x99, 0xff, 0x99)),
            (7, "Beru Whitesun lars", Color::Rgb(0x99, 0x99, 0xff)),
        ];
        for (y, name, color) in expected {
            assert!(row_text(&buffer, y).contains(name), "row {y} should show {name}");
            assert_eq!(buffer[(4, y)].bg, color, "row {y} background");
        }
    }

    #[test]
    fn card_shows_placeholder_image_url() {
        let app = app_with(vec![person("R2-D2", &[])]);
        let buffer = draw(&app);
        assert!(row_text(&buffer, 2).contains("https://picsum.photos/200?random=R2-D2"));
    }

    #[test]
    fn selected_card_has_marker() {
        let mut app = app_with(vec![person("Luke Skywalker", &[]), person("C-3PO", &[])]);
        if let Some(state) = app.status.ready_mut() {
            state.selected = 1;
        }
        let buffer = draw(&app);
        assert!(row_text(&buffer, 4).contains("▶"));
        assert!(!row_text(&buffer, 1).contains("▶"));
    }

    #[test]
    fn empty_page_has_its_own_notice() {
        let buffer = draw(&app_with(vec![]));
        let text: String = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
        assert!(text.contains("No characters on this page"));
    }
}
