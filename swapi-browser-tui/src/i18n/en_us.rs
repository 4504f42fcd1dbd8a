//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, DetailModalTexts, HelpModalTexts, HintTexts, KeyNames, ListTexts,
    ModalTexts, PaginationTexts, SearchTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "SWAPI Browser",
        loading: "Loading...",
        error: "Error:",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            arrows_ud: "↑↓",
            arrows_lr: "←→",
            slash: "/",
            question: "?",
            ctrl_u: "Ctrl+u",
            quit: "q",
        },
        actions: ActionTexts {
            select: "Select",
            details: "Details",
            page: "Page",
            search: "Search",
            done: "Done",
            clear: "Clear",
            help: "Help",
            close: "Close",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 搜索框
    // ========================================================================
    search: SearchTexts {
        title: "Search",
        placeholder: "Search characters...",
    },

    // ========================================================================
    // 卡片列表
    // ========================================================================
    list: ListTexts {
        title: "Characters",
        no_matches: "No characters match the search",
        empty_page: "No characters on this page",
    },

    // ========================================================================
    // 分页
    // ========================================================================
    pagination: PaginationTexts {
        previous: "Previous",
        next: "Next",
        page_prefix: "Page ",
        page_middle: " of ",
        page_suffix: "",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        detail: DetailModalTexts {
            height: "Height",
            height_unit: "cm",
            mass: "Mass",
            mass_unit: "kg",
            birth_year: "Birth Year",
            films: "Number of Films",
            image: "Image",
            homeworld: "Homeworld",
        },
        help: HelpModalTexts {
            title: "Help",
            list_section: "Character list",
            search_section: "Search box",
            move_selection: "Move selection",
            first_last: "First / last card",
            open_details: "Open details",
            previous_page: "Previous page",
            next_page: "Next page",
            focus_search: "Focus search",
            clear_search: "Clear search",
            leave_search: "Back to list",
            show_help: "This help",
            quit: "Quit",
        },
        close_hint: "Press Esc or Enter to close",
    },
};
