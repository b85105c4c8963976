use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::UserStore;
use std::io::{self, Write};

pub fn run<S: UserStore>(store: &mut S, id: u64, skip_confirm: bool) -> Result<CmdResult> {
    if !skip_confirm && !confirm(id)? {
        // Declined: no side effect, no message change.
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();
    if store.delete(id)? {
        result.clear_form = true;
        result.add_message(CmdMessage::success(format!("Deleted user #{}.", id)));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Cannot delete: user #{} does not exist.",
            id
        )));
    }

    Ok(result)
}

/// Blocking yes/no prompt before the destructive call.
fn confirm(id: u64) -> Result<bool> {
    print!("Delete user #{}? [y/N]: ", id);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}
