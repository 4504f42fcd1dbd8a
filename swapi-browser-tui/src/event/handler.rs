//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{
    AppMessage, ContentMessage, ModalMessage, PaginationMessage, SearchMessage,
};
use crate::model::{App, Pagination};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        _ => AppMessage::Noop,                                          // 窗口大小改变等，下一轮自动重绘
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何状态下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 加载中或出错时，整屏只有一行文字，只能退出
    let Some(state) = app.status.ready() else {
        return handle_status_keys(key);
    };

    // 搜索框获得焦点时，字符都作为输入
    if app.focus.is_search() {
        return handle_search_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || is_plain_char(&key, '?') {
        return AppMessage::ShowHelp;
    }

    handle_list_keys(key, state.pagination(), !app.search.is_empty())
}

/// 不带修饰键（Shift 除外）的字符
fn is_plain_char(key: &KeyEvent, ch: char) -> bool {
    key.code == KeyCode::Char(ch) && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 加载中 / 出错页面的按键
fn handle_status_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else {
        AppMessage::Noop
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // 详情和帮助弹窗只响应关闭按键
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::NAV_CONFIRM.matches(&key) {
        AppMessage::Modal(ModalMessage::Close)
    } else {
        AppMessage::Noop
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    match key.code {
        // Esc / Enter: 回到列表，保留搜索内容
        KeyCode::Esc | KeyCode::Enter => AppMessage::Search(SearchMessage::Leave),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),

        // 字符输入
        KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Search(SearchMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理卡片列表的按键
///
/// 翻页键只在对应按钮可用时才产生消息。
fn handle_list_keys(key: KeyEvent, pagination: Pagination, has_search: bool) -> AppMessage {
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Focus);
    }

    // Ctrl+U，或有搜索内容时按 Esc: 清空搜索
    if DefaultKeymap::CLEAR_SEARCH.matches(&key)
        || (has_search && DefaultKeymap::BACK.matches(&key))
    {
        return AppMessage::Search(SearchMessage::Clear);
    }

    // ↑ 或 k: 上一项
    if DefaultKeymap::NAV_UP.matches(&key) || is_plain_char(&key, 'k') {
        return AppMessage::Content(ContentMessage::SelectPrevious);
    }

    // ↓ 或 j: 下一项
    if DefaultKeymap::NAV_DOWN.matches(&key) || is_plain_char(&key, 'j') {
        return AppMessage::Content(ContentMessage::SelectNext);
    }

    // Enter: 打开详情
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }

    // ← / h / p: 上一页
    if DefaultKeymap::PAGE_PREV.matches(&key) || is_plain_char(&key, 'h') || is_plain_char(&key, 'p') {
        return if pagination.prev_enabled() {
            AppMessage::Pagination(PaginationMessage::Previous)
        } else {
            AppMessage::Noop
        };
    }

    // → / l / n: 下一页
    if DefaultKeymap::PAGE_NEXT.matches(&key) || is_plain_char(&key, 'l') || is_plain_char(&key, 'n') {
        return if pagination.next_enabled() {
            AppMessage::Pagination(PaginationMessage::Next)
        } else {
            AppMessage::Noop
        };
    }

    match key.code {
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use swapi_browser_client::{ApiError, PaginatedResponse, Person};

    use super::*;
    use crate::message::DataMessage;
    use crate::model::{FocusPanel, PageStatus};
    use crate::update::update;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn app_on_page(page: u32, total_count: u32) -> App {
        let mut app = App::default();
        app.status = PageStatus::Loading { page };
        let person: Person = serde_json::from_value(serde_json::json!({ "name": "Luke" })).unwrap();
        update(
            &mut app,
            AppMessage::Data(DataMessage::PageLoaded {
                page,
                result: Ok(PaginatedResponse::new(vec![person], page, total_count)),
            }),
        );
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app_on_page(1, 82);
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }

    #[test]
    fn list_navigation_keys() {
        let app = app_on_page(1, 82);
        let cases = [
            (KeyCode::Up, AppMessage::Content(ContentMessage::SelectPrevious)),
            (KeyCode::Char('k'), AppMessage::Content(ContentMessage::SelectPrevious)),
            (KeyCode::Down, AppMessage::Content(ContentMessage::SelectNext)),
            (KeyCode::Char('j'), AppMessage::Content(ContentMessage::SelectNext)),
            (KeyCode::Home, AppMessage::Content(ContentMessage::SelectFirst)),
            (KeyCode::End, AppMessage::Content(ContentMessage::SelectLast)),
            (KeyCode::Enter, AppMessage::Content(ContentMessage::Confirm)),
            (KeyCode::Char('/'), AppMessage::Search(SearchMessage::Focus)),
            (KeyCode::Char('q'), AppMessage::Quit),
            (KeyCode::Char('?'), AppMessage::ShowHelp),
        ];
        for (code, expected) in cases {
            assert_eq!(handle_event(press(code), &app), expected, "{code:?}");
        }
    }

    #[test]
    fn previous_is_disabled_on_first_page() {
        let app = app_on_page(1, 82);
        assert_eq!(handle_event(press(KeyCode::Left), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::Pagination(PaginationMessage::Next));
    }

    #[test]
    fn next_is_disabled_on_last_page() {
        let app = app_on_page(9, 82);
        assert_eq!(handle_event(press(KeyCode::Char('n')), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Char('p')), &app), AppMessage::Pagination(PaginationMessage::Previous));
    }

    #[test]
    fn both_disabled_when_listing_is_empty() {
        let app = app_on_page(1, 0);
        assert_eq!(handle_event(press(KeyCode::Left), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::Noop);
    }

    #[test]
    fn error_screen_only_quits() {
        let mut app = App::default();
        update(
            &mut app,
            AppMessage::Data(DataMessage::PageLoaded {
                page: 1,
                result: Err(ApiError::Timeout {
                    detail: "30s".to_string(),
                }),
            }),
        );
        assert_eq!(handle_event(press(KeyCode::Enter), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Char('/')), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
    }

    #[test]
    fn loading_screen_only_quits() {
        let app = App::default();
        assert_eq!(handle_event(press(KeyCode::Down), &app), AppMessage::Noop);
        assert_eq!(handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app), AppMessage::Quit);
    }

    #[test]
    fn search_focus_captures_characters() {
        let mut app = app_on_page(1, 82);
        app.focus = FocusPanel::Search;
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Search(SearchMessage::Input('q')));
        assert_eq!(handle_event(press_with(KeyCode::Char('L'), KeyModifiers::SHIFT), &app), AppMessage::Search(SearchMessage::Input('L')));
        assert_eq!(handle_event(press(KeyCode::Backspace), &app), AppMessage::Search(SearchMessage::Backspace));
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::Search(SearchMessage::Leave));
        assert_eq!(handle_event(press_with(KeyCode::Char('u'), KeyModifiers::CONTROL), &app), AppMessage::Search(SearchMessage::Clear));
    }

    #[test]
    fn esc_in_list_clears_search_only_when_present() {
        let mut app = app_on_page(1, 82);
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::Noop);
        app.search.push('l');
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::Search(SearchMessage::Clear));
    }

    #[test]
    fn modal_captures_input() {
        let mut app = app_on_page(1, 82);
        app.modal.show_help();
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Esc), &app), AppMessage::Modal(ModalMessage::Close));
        assert_eq!(handle_event(press(KeyCode::Enter), &app), AppMessage::Modal(ModalMessage::Close));
    }

    #[test]
    fn alt_h_opens_help() {
        let app = app_on_page(1, 82);
        assert_eq!(handle_event(press_with(KeyCode::Char('h'), KeyModifiers::ALT), &app), AppMessage::ShowHelp);
        // 不带 Alt 的 h 是上一页（第一页上不可用）
        assert_eq!(handle_event(press(KeyCode::Char('h')), &app), AppMessage::Noop);
    }
}
