//! 命令系统：语义命令定义
//!
//! - Command: 语义命令枚举（不关心具体按键和菜单入口）
//! - 命令 id 使用 camelCase，与配置文件保持一致

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    OpenFile,
    Refresh,
    CreateFolder,
    CreateFile,
    Rename,
    Remove,
    ImportFile,
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::OpenFile => "openFile",
            Command::Refresh => "refresh",
            Command::CreateFolder => "createFolder",
            Command::CreateFile => "createFile",
            Command::Rename => "rename",
            Command::Remove => "remove",
            Command::ImportFile => "importFile",
            Command::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "openFile" => Some(Command::OpenFile),
            "refresh" => Some(Command::Refresh),
            "createFolder" => Some(Command::CreateFolder),
            "createFile" => Some(Command::CreateFile),
            "rename" => Some(Command::Rename),
            "remove" => Some(Command::Remove),
            "importFile" => Some(Command::ImportFile),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Command::OpenFile => "Open File",
            Command::Refresh => "Refresh",
            Command::CreateFolder => "New Folder",
            Command::CreateFile => "New File",
            Command::Rename => "Rename",
            Command::Remove => "Delete",
            Command::ImportFile => "Import File",
            Command::Quit => "Quit",
        }
    }

    /// Commands that operate on the selected tree row. `Refresh` and `Quit`
    /// are global and work with an empty tree.
    pub fn requires_selection(&self) -> bool {
        matches!(
            self,
            Command::OpenFile
                | Command::CreateFolder
                | Command::CreateFile
                | Command::Rename
                | Command::Remove
                | Command::ImportFile
        )
    }
}
