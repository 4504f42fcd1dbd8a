//! 弹窗消息处理

use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match msg {
        ModalMessage::Close => {
            let was_detail = app.modal.detail().is_some();
            app.modal.close();
            // 详情弹窗关闭后，它的请求也随之取消
            was_detail.then_some(Command::CancelHomeworld)
        }
    }
}
