//! 列表消息处理

use crate::backend::Command;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理列表消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let state = app.status.ready_mut()?;
    let query = app.search.as_str();

    match msg {
        ContentMessage::SelectPrevious => state.select_previous(),
        ContentMessage::SelectNext => state.select_next(query),
        ContentMessage::SelectFirst => state.select_first(),
        ContentMessage::SelectLast => state.select_last(query),
        ContentMessage::Confirm => {
            let person = state.selected_person(query)?.clone();
            let url = person.homeworld.clone();
            log::debug!("Opening details for {}", person.name);
            let ticket = app.modal.show_detail(person);
            return Some(Command::FetchHomeworld { url, ticket });
        }
    }

    None
}
