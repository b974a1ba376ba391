//! Behaviour every list page shares: load, filter, dialogs, save, delete.

use stockdesk_core::Record;

use crate::api::ApiError;
use crate::pages::state::{Dialog, LoadState};
use crate::pages::toast::Toasts;
use crate::services::ResourceService;

pub struct ListPage<E: Record> {
    service: ResourceService<E>,
    state: LoadState<E>,
    dialog: Dialog<E::Id>,
    search: String,
    toasts: Toasts,
}

impl<E: Record> core::fmt::Debug for ListPage<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListPage")
            .field("collection", &E::COLLECTION)
            .field("state", &self.state)
            .field("dialog", &self.dialog)
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

impl<E: Record> ListPage<E> {
    pub fn new(service: ResourceService<E>) -> Self {
        Self {
            service,
            state: LoadState::Idle,
            dialog: Dialog::None,
            search: String::new(),
            toasts: Toasts::new(),
        }
    }

    pub fn service(&self) -> &ResourceService<E> {
        &self.service
    }

    pub fn state(&self) -> &LoadState<E> {
        &self.state
    }

    pub fn dialog(&self) -> Dialog<E::Id> {
        self.dialog
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    /// Loaded records, or nothing outside `Loaded`.
    pub fn items(&self) -> &[E] {
        self.state.items().unwrap_or(&[])
    }

    pub fn find(&self, id: E::Id) -> Option<&E> {
        self.items().iter().find(|e| e.id() == id)
    }

    /// Record the open dialog points at, if any.
    pub fn selected(&self) -> Option<&E> {
        self.dialog.target().and_then(|id| self.find(id))
    }

    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
        self.dialog = Dialog::None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<E>, ApiError>) {
        self.state = match result {
            Ok(items) => LoadState::Loaded { items },
            Err(e) => {
                tracing::warn!(collection = E::COLLECTION, error = %e, "load failed");
                self.toasts.error(e.to_string());
                LoadState::Error { message: e.to_string() }
            }
        };
    }

    pub async fn load(&mut self) {
        self.begin_load();
        let result = self.service.get_all().await;
        self.finish_load(result);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Records for which `matches(record, needle)` holds, `needle` being the
    /// lowercased search text. A blank search shows everything.
    pub fn filtered(&self, matches: impl Fn(&E, &str) -> bool) -> Vec<&E> {
        let needle = self.search.trim().to_lowercase();
        self.items()
            .iter()
            .filter(|e| needle.is_empty() || matches(e, &needle))
            .collect()
    }

    pub fn open_create(&mut self) -> bool {
        self.open(Dialog::Create)
    }

    pub fn open_edit(&mut self, id: E::Id) -> bool {
        self.open(Dialog::Edit(id))
    }

    pub fn open_delete(&mut self, id: E::Id) -> bool {
        self.open(Dialog::Delete(id))
    }

    pub fn open_view(&mut self, id: E::Id) -> bool {
        self.open(Dialog::View(id))
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::None;
    }

    // Dialogs exist only over a loaded list and only for ids in it.
    fn open(&mut self, dialog: Dialog<E::Id>) -> bool {
        if self.state.items().is_none() {
            return false;
        }
        if let Some(id) = dialog.target() {
            if self.find(id).is_none() {
                return false;
            }
        }
        self.dialog = dialog;
        true
    }

    /// Create or update depending on the open dialog.
    ///
    /// On success: toast, close, reload. On failure: error toast, dialog stays open.
    pub async fn save(&mut self, draft: E::Draft) -> bool {
        let result = match self.dialog {
            Dialog::Create => self.service.create(&draft).await.map(|_| "created"),
            Dialog::Edit(id) => self.service.update(id, &draft).await.map(|_| "updated"),
            _ => return false,
        };
        self.settle(result).await
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Dialog::Delete(id) = self.dialog else {
            return false;
        };
        let result = self.service.delete(id).await.map(|_| "deleted");
        self.settle(result).await
    }

    async fn settle(&mut self, result: Result<&'static str, ApiError>) -> bool {
        match result {
            Ok(verb) => {
                self.toasts.success(format!("{} {verb}", capitalize(E::LABEL)));
                self.dialog = Dialog::None;
                self.load().await;
                true
            }
            Err(e) => {
                self.toasts.error(e.to_string());
                false
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use stockdesk_core::{Category, CategoryId};

    use super::*;
    use crate::api::ApiClient;
    use crate::pages::contains_ci;
    use crate::session::Session;
    use crate::storage::MemoryStorage;

    fn page() -> ListPage<Category> {
        let session = Arc::new(Session::new(Arc::new(MemoryStorage::new())));
        let client = Arc::new(ApiClient::new("http://127.0.0.1:9/api", session));
        ListPage::new(ResourceService::new(client))
    }

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
        }
    }

    fn by_name(c: &Category, needle: &str) -> bool {
        contains_ci(&c.name, needle)
    }

    #[test]
    fn dialogs_stay_closed_until_loaded() {
        let mut p = page();
        assert!(!p.open_create());
        assert_eq!(p.dialog(), Dialog::None);

        p.begin_load();
        assert!(p.state().is_loading());
        assert!(!p.open_create());
    }

    #[test]
    fn dialogs_only_target_loaded_ids() {
        let mut p = page();
        p.finish_load(Ok(vec![category(1, "Tools")]));

        assert!(p.open_edit(CategoryId::new(1)));
        assert_eq!(p.selected().unwrap().name, "Tools");

        assert!(!p.open_delete(CategoryId::new(2)));
        assert_eq!(p.dialog(), Dialog::Edit(CategoryId::new(1)));

        p.close_dialog();
        assert_eq!(p.dialog(), Dialog::None);
        assert!(p.selected().is_none());
    }

    #[test]
    fn failed_load_shows_error_and_toast() {
        let mut p = page();
        p.finish_load(Err(ApiError::Http {
            status: 500,
            message: "HTTP error! status: 500".into(),
        }));

        assert_eq!(p.state().error(), Some("HTTP error! status: 500"));
        assert!(p.items().is_empty());
        assert_eq!(p.toasts().items().len(), 1);
        assert!(!p.open_create());
    }

    #[test]
    fn reload_closes_any_dialog() {
        let mut p = page();
        p.finish_load(Ok(vec![category(1, "Tools")]));
        p.open_view(CategoryId::new(1));

        p.begin_load();
        assert_eq!(p.dialog(), Dialog::None);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut p = page();
        p.finish_load(Ok(vec![
            category(1, "Hand Tools"),
            category(2, "Paint"),
            category(3, "power tools"),
        ]));

        p.set_search("TOOL");
        let names: Vec<_> = p.filtered(by_name).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Hand Tools", "power tools"]);

        p.set_search("   ");
        assert_eq!(p.filtered(by_name).len(), 3);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("category"), "Category");
        assert_eq!(capitalize(""), "");
    }

    proptest! {
        #[test]
        fn filter_returns_exactly_matching_subset(
            names in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..12),
            search in "[a-zA-Z]{0,3}",
        ) {
            let mut p = page();
            let items: Vec<_> = names
                .iter()
                .enumerate()
                .map(|(i, n)| category(i as i32 + 1, n))
                .collect();
            p.finish_load(Ok(items.clone()));
            p.set_search(search.clone());

            let needle = search.to_lowercase();
            let expected: Vec<_> = items
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .map(|c| c.id)
                .collect();
            let got: Vec<_> = p.filtered(by_name).iter().map(|c| c.id).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
