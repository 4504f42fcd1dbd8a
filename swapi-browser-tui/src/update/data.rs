//! 后台请求结果处理

use crate::message::DataMessage;
use crate::model::{App, Homeworld, PageState, PageStatus};

/// 处理后台请求结果
pub fn update(app: &mut App, msg: DataMessage) {
    match msg {
        DataMessage::PageLoaded { page, result } => {
            // 只接受正在等待的那一页
            if app.status.loading_page() != Some(page) {
                log::debug!("Discarding stale response for page {page}");
                return;
            }

            app.status = match result {
                Ok(resp) => {
                    let mut state = PageState::from_response(resp);
                    state.clamp_selection(&app.search);
                    PageStatus::Ready(state)
                }
                Err(e) => PageStatus::Error(e.to_string()),
            };
        }

        DataMessage::HomeworldLoaded { ticket, result } => {
            let Some(overlay) = app.modal.detail_mut() else {
                log::debug!("Homeworld response {ticket} arrived after the overlay closed");
                return;
            };
            if overlay.ticket != ticket {
                log::debug!("Discarding homeworld response {ticket}, overlay is at {}", overlay.ticket);
                return;
            }

            overlay.homeworld = match result {
                Ok(planet) => Homeworld::Loaded(planet.name),
                Err(_) => Homeworld::Failed,
            };
        }
    }
}
