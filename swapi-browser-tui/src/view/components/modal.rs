//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use swapi_browser_client::placeholder_image_url;

use crate::i18n::t;
use crate::model::{App, DetailOverlay, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Detail(detail) => render_detail(frame, detail),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框 + 内容区域
fn modal_frame(frame: &mut Frame, title: &str, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(colors().bg));

    let inner = Rect::new(
        area.x.saturating_add(2),
        area.y.saturating_add(1),
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    frame.render_widget(block, area);
    inner
}

/// 标签 + 值
fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(colors().fg)),
    ])
}

/// 渲染人物详情弹窗
///
/// 本地字段立即显示；Homeworld 在请求返回之前（以及失败时）留空。
fn render_detail(frame: &mut Frame, detail: &DetailOverlay) {
    let texts = t();
    let d = &texts.modal.detail;
    let person = &detail.person;

    let inner = modal_frame(frame, &person.name, 64, 13);

    let lines = vec![
        Line::styled(
            person.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        field(d.height, format!("{} {}", person.height, d.height_unit)),
        field(d.mass, format!("{} {}", person.mass, d.mass_unit)),
        field(d.birth_year, person.birth_year.clone()),
        field(d.films, person.films.len().to_string()),
        field(d.image, placeholder_image_url(&person.name)),
        field(
            d.homeworld,
            detail.homeworld.name().unwrap_or_default().to_string(),
        ),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let h = &texts.modal.help;
    let keys = &texts.hints.keys;

    let inner = modal_frame(frame, h.title, 50, 19);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section(h.list_section),
        Line::from(""),
        entry("↑↓/jk", h.move_selection),
        entry("Home/End", h.first_last),
        entry(keys.enter, h.open_details),
        entry("←/h/p", h.previous_page),
        entry("→/l/n", h.next_page),
        entry(keys.slash, h.focus_search),
        entry("?/Alt+h", h.show_help),
        entry(keys.quit, h.quit),
        Line::from(""),
        section(h.search_section),
        Line::from(""),
        entry(keys.ctrl_u, h.clear_search),
        entry("Enter/Esc", h.leave_search),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use swapi_browser_client::Person;

    use super::*;
    use crate::model::Homeworld;

    fn luke() -> Person {
        serde_json::from_value(serde_json::json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "birth_year": "19BBY",
            "films": ["f1", "f2", "f3", "f4"],
            "homeworld": "https://swapi.dev/api/planets/1/",
        }))
        .unwrap()
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// "Homeworld:" 之后、右边框之前的内容
    fn homeworld_line(text: &str) -> String {
        let line = text.lines().find(|line| line.contains("Homeworld:")).unwrap();
        let (_, rest) = line.split_once("Homeworld:").unwrap();
        rest.trim().trim_end_matches('│').trim().to_string()
    }

    #[test]
    fn detail_shows_own_fields_immediately() {
        let mut app = App::default();
        app.modal.show_detail(luke());
        let text = draw(&app);
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains("Height: 172 cm"));
        assert!(text.contains("Mass: 77 kg"));
        assert!(text.contains("Birth Year: 19BBY"));
        assert!(text.contains("Number of Films: 4"));
        assert!(text.contains("random=Luke%20Skywalker"));
    }

    #[test]
    fn homeworld_is_blank_while_pending() {
        let mut app = App::default();
        app.modal.show_detail(luke());
        assert_eq!(homeworld_line(&draw(&app)), "");
    }

    #[test]
    fn homeworld_appears_once_loaded() {
        let mut app = App::default();
        app.modal.show_detail(luke());
        if let Some(detail) = app.modal.detail_mut() {
            detail.homeworld = Homeworld::Loaded("Tatooine".to_string());
        }
        assert_eq!(homeworld_line(&draw(&app)), "Tatooine");
    }

    #[test]
    fn homeworld_stays_blank_after_failure() {
        let mut app = App::default();
        app.modal.show_detail(luke());
        if let Some(detail) = app.modal.detail_mut() {
            detail.homeworld = Homeworld::Failed;
        }
        assert_eq!(homeworld_line(&draw(&app)), "");
    }

    #[test]
    fn help_lists_key_bindings() {
        let mut app = App::default();
        app.modal.show_help();
        let text = draw(&app);
        assert!(text.contains("Help"));
        assert!(text.contains("Open details"));
        assert!(text.contains("Clear search"));
    }

    #[test]
    fn nothing_drawn_without_modal() {
        let text = draw(&App::default());
        assert!(text.trim().is_empty());
    }
}
