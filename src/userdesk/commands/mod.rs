use crate::model::User;
use crate::page::PageInfo;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod load;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The typed outcome of a panel operation.
///
/// The presentation layer pattern-matches on this instead of the commands
/// printing anything themselves: `user` repopulates the form, `created_id`
/// fills the id input, `clear_form` empties the form, `listed` + `page`
/// render the table.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub user: Option<User>,
    pub created_id: Option<u64>,
    pub listed: Vec<User>,
    pub page: Option<PageInfo>,
    pub clear_form: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_listing(mut self, listed: Vec<User>, page: PageInfo) -> Self {
        self.listed = listed;
        self.page = Some(page);
        self
    }

    /// Convenience for single-message outcomes.
    pub fn message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }
}
