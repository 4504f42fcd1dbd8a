//! 弹窗/对话框状态

use swapi_browser_client::Person;

/// 详情弹窗中 "Homeworld" 一行的状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Homeworld {
    /// 请求尚未返回
    #[default]
    Pending,
    /// 已取得星球名
    Loaded(String),
    /// 请求失败（已记录日志，界面上保持空白）
    Failed,
}

impl Homeworld {
    /// 用于显示的名称，未取得时为 `None`
    pub fn name(&self) -> Option<&str> {
        match self {
            Homeworld::Loaded(name) => Some(name),
            Homeworld::Pending | Homeworld::Failed => None,
        }
    }
}

/// 人物详情弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    /// 选中的人物（打开时的快照）
    pub person: Person,
    /// 家园星球
    pub homeworld: Homeworld,
    /// 本次打开对应的请求票据
    pub ticket: u64,
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 人物详情
    Detail(DetailOverlay),
    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
    /// 最近一次发出的票据
    last_ticket: u64,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 打开人物详情弹窗，返回新发出的票据
    ///
    /// 每次打开都会得到一个新票据，旧请求的结果因此不会被误用。
    pub fn show_detail(&mut self, person: Person) -> u64 {
        self.last_ticket += 1;
        let ticket = self.last_ticket;
        self.active = Some(Modal::Detail(DetailOverlay {
            person,
            homeworld: Homeworld::Pending,
            ticket,
        }));
        ticket
    }

    /// 当前打开的详情弹窗
    pub fn detail(&self) -> Option<&DetailOverlay> {
        match &self.active {
            Some(Modal::Detail(overlay)) => Some(overlay),
            _ => None,
        }
    }

    /// 当前打开的详情弹窗（可变）
    pub fn detail_mut(&mut self) -> Option<&mut DetailOverlay> {
        match &mut self.active {
            Some(Modal::Detail(overlay)) => Some(overlay),
            _ => None,
        }
    }
}
