//! 分页控件
//!
//! 只负责显示；按钮是否可用由 [`Pagination`] 计算，事件层据此决定是否翻页。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::Pagination;
use crate::view::theme::{colors, Styles};

/// 渲染 "Previous  Page X of Y  Next"
pub fn render(pagination: Pagination, frame: &mut Frame, area: Rect) {
    let texts = &t().pagination;
    let label = format!(
        "{}{}{}{}{}",
        texts.page_prefix,
        pagination.page,
        texts.page_middle,
        pagination.total_pages,
        texts.page_suffix
    );

    let line = Line::from(vec![
        button(texts.previous, pagination.prev_enabled()),
        Span::raw("   "),
        Span::styled(label, Style::default().fg(colors().fg)),
        Span::raw("   "),
        button(texts.next, pagination.next_enabled()),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn button(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(
            label,
            Style::default()
                .fg(colors().highlight)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Styles::disabled())
    }
}
