use crate::commands::{report, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoId;
use crate::storage::KeyValueStore;
use crate::todos::TodoStore;

pub fn run<S: KeyValueStore>(store: &mut TodoStore<S>, id: TodoId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let text = store.get(id).map(|t| t.text.clone());

    match store.delete(id) {
        Ok(()) => {
            result.affected.push(id);
            result.add_message(CmdMessage::success(format!(
                "Deleted task {}: {}",
                id,
                text.unwrap_or_default()
            )));
        }
        Err(e) => {
            let removed = text.is_some() && store.get(id).is_none();
            report(&mut result, e)?;
            if removed {
                result.affected.push(id);
            }
        }
    }
    Ok(result)
}
