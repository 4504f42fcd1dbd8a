//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：详情与帮助弹窗的内容都放在 modal 下
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 搜索框文本
    pub search: SearchTexts,
    /// 卡片列表文本
    pub list: ListTexts,
    /// 分页控件文本
    pub pagination: PaginationTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    /// 出错页面的前缀，后接错误文本
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub arrows_ud: &'static str,
    pub arrows_lr: &'static str,
    pub slash: &'static str,
    pub question: &'static str,
    pub ctrl_u: &'static str,
    pub quit: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub select: &'static str,
    pub details: &'static str,
    pub page: &'static str,
    pub search: &'static str,
    pub done: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 搜索框
// ============================================================================

/// 搜索框文本
pub struct SearchTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
}

// ============================================================================
// 卡片列表
// ============================================================================

/// 卡片列表文本
pub struct ListTexts {
    pub title: &'static str,
    /// 过滤后没有结果
    pub no_matches: &'static str,
    /// 当前页本身为空
    pub empty_page: &'static str,
}

// ============================================================================
// 分页
// ============================================================================

/// 分页控件文本
///
/// "Page X of Y" 拆成三段：`page_prefix` X `page_middle` Y `page_suffix`
pub struct PaginationTexts {
    pub previous: &'static str,
    pub next: &'static str,
    pub page_prefix: &'static str,
    pub page_middle: &'static str,
    pub page_suffix: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub detail: DetailModalTexts,
    pub help: HelpModalTexts,
    /// 弹窗底部的关闭提示
    pub close_hint: &'static str,
}

/// 人物详情弹窗
pub struct DetailModalTexts {
    pub height: &'static str,
    pub height_unit: &'static str,
    pub mass: &'static str,
    pub mass_unit: &'static str,
    pub birth_year: &'static str,
    pub films: &'static str,
    pub image: &'static str,
    pub homeworld: &'static str,
}

/// 帮助弹窗
pub struct HelpModalTexts {
    pub title: &'static str,
    pub list_section: &'static str,
    pub search_section: &'static str,
    pub move_selection: &'static str,
    pub first_last: &'static str,
    pub open_details: &'static str,
    pub previous_page: &'static str,
    pub next_page: &'static str,
    pub focus_search: &'static str,
    pub clear_search: &'static str,
    pub leave_search: &'static str,
    pub show_help: &'static str,
    pub quit: &'static str,
}
