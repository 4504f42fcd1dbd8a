//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, DetailModalTexts, HelpModalTexts, HintTexts, KeyNames, ListTexts,
    ModalTexts, PaginationTexts, SearchTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "星战角色浏览器",
        loading: "加载中...",
        error: "错误:",
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
            select: "选择",
            details: "详情",
            page: "翻页",
            search: "搜索",
            done: "完成",
            clear: "清空",
            help: "帮助",
            close: "关闭",
            quit: "退出",
        },
    },

    // ========================================================================
    // 搜索框
    // ========================================================================
    search: SearchTexts {
        title: "搜索",
        placeholder: "搜索角色...",
    },

    // ========================================================================
    // 卡片列表
    // ========================================================================
    list: ListTexts {
        title: "角色",
        no_matches: "没有匹配的角色",
        empty_page: "本页没有角色",
    },

    // ========================================================================
    // 分页
    // ========================================================================
    pagination: PaginationTexts {
        previous: "上一页",
        next: "下一页",
        page_prefix: "第 ",
        page_middle: " 页，共 ",
        page_suffix: " 页",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        detail: DetailModalTexts {
            height: "身高",
            height_unit: "cm",
            mass: "体重",
            mass_unit: "kg",
            birth_year: "出生年份",
            films: "出场电影数",
            image: "图片",
            homeworld: "母星",
        },
        help: HelpModalTexts {
            title: "帮助",
            list_section: "角色列表",
            search_section: "搜索框",
            move_selection: "移动光标",
            first_last: "第一张 / 最后一张",
            open_details: "查看详情",
            previous_page: "上一页",
            next_page: "下一页",
            focus_search: "进入搜索",
            clear_search: "清空搜索",
            leave_search: "回到列表",
            show_help: "显示帮助",
            quit: "退出",
        },
        close_hint: "按 Esc 或 Enter 关闭",
    },
};
