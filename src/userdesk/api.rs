//! # API Facade
//!
//! [`DeskApi`] is the single entry point for all panel operations and the
//! explicit panel state: the chosen store plus the pagination cursor. It
//! dispatches to the command layer and keeps the cursor consistent with the
//! record set across mutations; it holds no record copies of its own.
//!
//! Generic over [`UserStore`]:
//! - Production: `DeskApi<FileStore>` or `DeskApi<RemoteStore>`
//! - Testing: `DeskApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::UserData;
use crate::page::Pager;
use crate::store::UserStore;

pub struct DeskApi<S: UserStore> {
    store: S,
    pager: Pager,
}

impl<S: UserStore> DeskApi<S> {
    pub fn new(store: S, pager: Pager) -> Self {
        Self { store, pager }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn supports_listing(&self) -> bool {
        self.store.supports_listing()
    }

    pub fn load_user(&self, id: u64) -> Result<CmdResult> {
        commands::load::run(&self.store, id)
    }

    pub fn create_user(&mut self, data: &UserData) -> Result<CmdResult> {
        commands::create::run(&mut self.store, data)
    }

    pub fn save_user(&mut self, id: u64, data: &UserData) -> Result<CmdResult> {
        commands::save::run(&mut self.store, id, data)
    }

    pub fn delete_user(&mut self, id: u64, skip_confirm: bool) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id, skip_confirm)?;
        // clear_form doubles as the deletion-went-through signal; the cursor
        // only needs re-clamping when the total actually changed.
        if result.clear_form && self.store.supports_listing() {
            let total = self.store.list()?.len();
            self.pager.after_delete(total);
        }
        Ok(result)
    }

    pub fn list_users(&mut self) -> Result<CmdResult> {
        commands::list::run(&self.store, &mut self.pager)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<CmdResult> {
        self.pager.set_page_size(page_size);
        self.list_users()
    }

    pub fn next_page(&mut self) -> Result<CmdResult> {
        let users = self.store.list()?;
        self.pager.next(users.len());
        Ok(commands::list::paged(&users, &mut self.pager))
    }

    pub fn prev_page(&mut self) -> Result<CmdResult> {
        let users = self.store.list()?;
        self.pager.prev();
        Ok(commands::list::paged(&users, &mut self.pager))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures::user_data, InMemoryStore};

    fn api_with(n: usize) -> DeskApi<InMemoryStore> {
        let mut api = DeskApi::new(InMemoryStore::new(), Pager::new());
        for i in 0..n {
            api.create_user(&user_data(&format!("User {}", i + 1), "u@x.com"))
                .unwrap();
        }
        api
    }

    #[test]
    fn deleting_the_last_record_of_the_last_page_pulls_the_cursor_back() {
        let mut api = api_with(11);
        api.next_page().unwrap();
        assert_eq!(api.pager().current_page(), 2);

        let result = api.delete_user(11, true).unwrap();
        assert!(result.clear_form);
        assert_eq!(api.pager().current_page(), 1);

        let listing = api.list_users().unwrap();
        assert_eq!(listing.page.unwrap().total_pages, 1);
        assert_eq!(listing.listed.len(), 10);
    }

    #[test]
    fn deleting_everything_resets_to_page_one() {
        let mut api = api_with(1);
        api.delete_user(1, true).unwrap();
        assert_eq!(api.pager().current_page(), 1);
        let listing = api.list_users().unwrap();
        assert!(listing.listed.is_empty());
        assert_eq!(listing.page.unwrap().total, 0);
    }

    #[test]
    fn a_failed_delete_leaves_the_cursor_alone() {
        let mut api = api_with(11);
        api.next_page().unwrap();
        api.delete_user(999, true).unwrap();
        assert_eq!(api.pager().current_page(), 2);
    }

    #[test]
    fn changing_the_page_size_resets_the_cursor() {
        let mut api = api_with(11);
        api.next_page().unwrap();

        let listing = api.set_page_size(5).unwrap();
        let info = listing.page.unwrap();
        assert_eq!(info.current_page, 1);
        assert_eq!(info.total_pages, 3);
        assert_eq!(listing.listed.len(), 5);
    }

    #[test]
    fn page_navigation_is_clamped_at_both_ends() {
        let mut api = api_with(11);
        let listing = api.prev_page().unwrap();
        assert_eq!(listing.page.unwrap().current_page, 1);

        api.next_page().unwrap();
        let listing = api.next_page().unwrap();
        assert_eq!(listing.page.unwrap().current_page, 2);
    }

    #[test]
    fn loaded_records_round_trip_through_the_store() {
        let api = api_with(3);
        let result = api.load_user(2).unwrap();
        assert_eq!(result.user.unwrap().name, "User 2");
    }
}
