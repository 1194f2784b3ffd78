pub mod editor;
pub mod help;
pub mod logs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabType {
    Editor,
    Logs,
    Help,
}

impl TabType {
    pub fn title(&self) -> &'static str {
        match self {
            TabType::Editor => "Editor",
            TabType::Logs => "Logs",
            TabType::Help => "Help",
        }
    }
}

pub struct Tab {
    pub tab_type: TabType,
    pub state: TabState,
}

#[derive(Debug, Clone)]
pub enum TabState {
    Editor(editor::EditorState),
    Logs(logs::LogsState),
    Help,
}

impl Tab {
    pub fn new(tab_type: TabType) -> Self {
        let state = match tab_type {
            TabType::Editor => TabState::Editor(editor::EditorState::new()),
            TabType::Logs => TabState::Logs(logs::LogsState::new()),
            TabType::Help => TabState::Help,
        };

        Self { tab_type, state }
    }
}
