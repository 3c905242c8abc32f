//! User-facing string tables.

use std::str::FromStr;

/// Display language of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Bulgarian,
}

/// Every string the widget renders.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub results_heading: &'static str,
    pub submit_idle: &'static str,
    pub submit_busy: &'static str,
    pub no_file_chosen: &'static str,
    pub select_file_prompt: &'static str,
    pub search_failed: &'static str,
    pub score_prefix: &'static str,
    pub open_link: &'static str,
    pub download_link: &'static str,
    /// Labels of the terminal front end around the widget.
    pub ui: UiStrings,
}

/// Hints, key legends, popups and status lines of the terminal UI.
#[derive(Debug)]
pub struct UiStrings {
    pub file_box_title: &'static str,
    pub hint_search: &'static str,
    pub hint_choose_file: &'static str,
    pub copied: &'static str,
    pub open_failed: &'static str,
    pub quit_title: &'static str,
    pub quit_prompt: &'static str,
    pub picker_title: &'static str,
    pub picker_files: &'static str,
    pub picker_selected: &'static str,
    pub picker_hint: &'static str,
    pub key_choose_file: &'static str,
    pub key_search: &'static str,
    pub key_move: &'static str,
    pub key_open: &'static str,
    pub key_download: &'static str,
    pub key_copy: &'static str,
    pub key_pick: &'static str,
    pub key_parent: &'static str,
    pub key_back: &'static str,
    pub key_help: &'static str,
    pub key_quit: &'static str,
    pub key_cancel: &'static str,
    pub help_title: &'static str,
    pub help_section_search: &'static str,
    pub help_section_results: &'static str,
    pub help_section_picker: &'static str,
    pub help_section_global: &'static str,
    pub help_choose_pdf: &'static str,
    pub help_clear_file: &'static str,
    pub help_submit: &'static str,
    pub help_move_down: &'static str,
    pub help_move_up: &'static str,
    pub help_top_bottom: &'static str,
    pub help_open: &'static str,
    pub help_download: &'static str,
    pub help_copy: &'static str,
    pub help_pick: &'static str,
    pub help_parent: &'static str,
    pub help_back: &'static str,
    pub help_toggle: &'static str,
    pub help_quit: &'static str,
    pub help_force_quit: &'static str,
}

static ENGLISH: Strings = Strings {
    title: "Legal Document Similarity Search",
    results_heading: "Similar Documents",
    submit_idle: "Upload & Search",
    submit_busy: "Searching...",
    no_file_chosen: "No file chosen",
    select_file_prompt: "Please select a PDF file.",
    search_failed: "Error searching for similar documents.",
    score_prefix: "score: ",
    open_link: "Open",
    download_link: "Download",
    ui: UiStrings {
        file_box_title: "File (o)",
        hint_search: "Press Enter to search",
        hint_choose_file: "Press o to choose a PDF",
        copied: "Copied",
        open_failed: "Could not open",
        quit_title: "Confirm Quit",
        quit_prompt: "Quit docsim?",
        picker_title: "Select a PDF",
        picker_files: "Files",
        picker_selected: "Selected:",
        picker_hint: "Navigate to a PDF and press Enter to select it",
        key_choose_file: "choose file",
        key_search: "search",
        key_move: "move",
        key_open: "open",
        key_download: "download",
        key_copy: "copy",
        key_pick: "open dir / pick PDF",
        key_parent: "up",
        key_back: "back",
        key_help: "help",
        key_quit: "quit",
        key_cancel: "cancel",
        help_title: "Keyboard Shortcuts",
        help_section_search: "Search",
        help_section_results: "Results",
        help_section_picker: "File picker",
        help_section_global: "Global",
        help_choose_pdf: "Choose a PDF",
        help_clear_file: "Clear the selected file",
        help_submit: "Upload & search",
        help_move_down: "Move down",
        help_move_up: "Move up",
        help_top_bottom: "Go to top / bottom",
        help_open: "Hand the Open link to the browser",
        help_download: "Hand the Download link to the browser",
        help_copy: "Copy the link to the clipboard (OSC 52)",
        help_pick: "Open directory / pick PDF",
        help_parent: "Parent directory",
        help_back: "Back without changing selection",
        help_toggle: "Toggle this help",
        help_quit: "Quit",
        help_force_quit: "Force quit",
    },
};

static BULGARIAN: Strings = Strings {
    title: "Търсачка на подобни съдебни дела",
    results_heading: "Подобни документи",
    submit_idle: "Търсене",
    submit_busy: "Търсене...",
    no_file_chosen: "Няма избран файл",
    select_file_prompt: "Моля изберете PDF файл.",
    search_failed: "Грешка при търсенето.",
    score_prefix: "близост: ",
    open_link: "Отвори",
    download_link: "Изтегли",
    ui: UiStrings {
        file_box_title: "Файл (o)",
        hint_search: "Натиснете Enter за търсене",
        hint_choose_file: "Натиснете o, за да изберете PDF",
        copied: "Копирано",
        open_failed: "Неуспешно отваряне на",
        quit_title: "Потвърждение",
        quit_prompt: "Изход от docsim?",
        picker_title: "Изберете PDF",
        picker_files: "Файлове",
        picker_selected: "Избран:",
        picker_hint: "Отидете до PDF файл и натиснете Enter",
        key_choose_file: "избор на файл",
        key_search: "търсене",
        key_move: "движение",
        key_open: "отваряне",
        key_download: "изтегляне",
        key_copy: "копиране",
        key_pick: "папка / избор на PDF",
        key_parent: "нагоре",
        key_back: "назад",
        key_help: "помощ",
        key_quit: "изход",
        key_cancel: "отказ",
        help_title: "Клавишни комбинации",
        help_section_search: "Търсене",
        help_section_results: "Резултати",
        help_section_picker: "Избор на файл",
        help_section_global: "Общи",
        help_choose_pdf: "Избор на PDF",
        help_clear_file: "Изчистване на избрания файл",
        help_submit: "Качване и търсене",
        help_move_down: "Надолу",
        help_move_up: "Нагоре",
        help_top_bottom: "Към началото / края",
        help_open: "Връзката за отваряне към браузъра",
        help_download: "Връзката за изтегляне към браузъра",
        help_copy: "Копиране на връзката (OSC 52)",
        help_pick: "Отваряне на папка / избор на PDF",
        help_parent: "Горна папка",
        help_back: "Назад без промяна на избора",
        help_toggle: "Показване на помощта",
        help_quit: "Изход",
        help_force_quit: "Принудителен изход",
    },
};

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Bulgarian]
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::English => &ENGLISH,
            Locale::Bulgarian => &BULGARIAN,
        }
    }

    /// Short code used in config files and flags.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Bulgarian => "bg",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "bg" | "bulgarian" => Ok(Locale::Bulgarian),
            other => Err(format!("unknown locale '{}' (expected en or bg)", other)),
        }
    }
}
