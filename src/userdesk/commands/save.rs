use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserData;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &mut S, id: u64, data: &UserData) -> Result<CmdResult> {
    if let Some(msg) = helpers::validate(data) {
        return Ok(CmdResult::message(CmdMessage::error(msg)));
    }

    match store.update(id, data)? {
        Some(user) => {
            let mut result = CmdResult::default().with_user(user);
            result.add_message(CmdMessage::success(format!("Saved user #{}.", id)));
            Ok(result)
        }
        None => Ok(CmdResult::message(CmdMessage::error(format!(
            "Cannot save: user #{} does not exist.",
            id
        )))),
    }
}
