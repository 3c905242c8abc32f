/// Everything the user (or the clock) can ask the TUI to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ForceQuit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoTop,
    GoBottom,
    /// Enter: submit on the search screen, open/select in the file picker.
    Confirm,
    Submit,
    NavigateBack,
    ParentDir,
    OpenPicker,
    ClearFile,
    OpenLink,
    DownloadLink,
    CopyLink,
    ToggleHelp,
    Tick,
    Resize(u16, u16),
    None,
}
