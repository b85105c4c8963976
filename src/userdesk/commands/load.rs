use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &S, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.read(id)? {
        Some(user) => {
            result.add_message(CmdMessage::success(format!("Loaded user #{}.", id)));
            result.user = Some(user);
        }
        None => {
            // A miss clears the form; transport failures bubble up instead.
            result.clear_form = true;
            result.add_message(CmdMessage::error(format!("User #{} not found.", id)));
        }
    }
    Ok(result)
}
