//! 人物卡片的色调

use swapi_browser_client::Person;

/// 默认的高亮物种引用（swapi 中的 Human）
pub const DEFAULT_SPECIES_HIGHLIGHT: &str = "https://swapi.dev/api/species/1/";

/// 卡片色调
///
/// 只看 `species` 的第一项，其余物种不做区分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    /// 第一个物种等于高亮引用
    Highlighted,
    /// 有物种，但不是高亮引用
    OtherSpecies,
    /// 物种列表为空
    NoSpecies,
}

impl CardTone {
    /// 根据人物的物种列表计算色调
    pub fn of(person: &Person, highlight: &str) -> Self {
        match person.species.first() {
            Some(first) if first == highlight => CardTone::Highlighted,
            Some(_) => CardTone::OtherSpecies,
            None => CardTone::NoSpecies,
        }
    }
}
