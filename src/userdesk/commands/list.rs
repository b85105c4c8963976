use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::User;
use crate::page::Pager;
use crate::store::UserStore;

pub fn run<S: UserStore>(store: &S, pager: &mut Pager) -> Result<CmdResult> {
    let users = store.list()?;
    Ok(paged(&users, pager))
}

/// Slice an already-loaded record set. Split out so cursor movements can
/// reuse the single `list()` round-trip they already made.
pub fn paged(users: &[User], pager: &mut Pager) -> CmdResult {
    let view = pager.view(users);
    CmdResult::default().with_listing(view.slice.to_vec(), view.info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::{fixtures::user_data, InMemoryStore};

    fn store_with(n: usize) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for i in 0..n {
            create::run(&mut store, &user_data(&format!("User {}", i + 1), "u@x.com")).unwrap();
        }
        store
    }

    #[test]
    fn lists_the_current_page_in_insertion_order() {
        let store = store_with(12);
        let mut pager = Pager::new();

        let result = run(&store, &mut pager).unwrap();
        assert_eq!(result.listed.len(), 10);
        assert_eq!(result.listed[0].name, "User 1");

        let info = result.page.unwrap();
        assert_eq!(info.current_page, 1);
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.total, 12);
    }

    #[test]
    fn the_last_page_holds_the_remainder() {
        let store = store_with(12);
        let mut pager = Pager::new();
        pager.next(12);

        let result = run(&store, &mut pager).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].name, "User 11");
        assert!(result.page.unwrap().has_prev());
        assert!(!result.page.unwrap().has_next());
    }
}
