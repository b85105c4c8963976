use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserData;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &mut S, data: &UserData) -> Result<CmdResult> {
    if let Some(msg) = helpers::validate(data) {
        return Ok(CmdResult::message(CmdMessage::error(msg)));
    }

    let created = store.create(data)?;
    let mut result = CmdResult::default();
    match created.id {
        Some(id) => {
            result.created_id = Some(id);
            result.add_message(CmdMessage::success(format!("Created user #{}.", id)));
        }
        // Acknowledged but unusable: the record cannot be loaded back.
        None => result.add_message(CmdMessage::warning(
            "Created, but the backend returned no usable ID.",
        )),
    }

    Ok(result)
}
