//! Public content screen reducers
//!
//! Two independent reducers compose every public grid:
//!
//! - **Category filter**: the filter bar offers "All" plus the distinct
//!   category values present in the live fetched set — a category
//!   disappears the moment its last item does.
//! - **Progressive reveal**: a growing prefix of the filtered list is
//!   visible; "load more" extends it by a fixed step and changing the
//!   filter resets it.

use shared::models::{GalleryItem, MenuItem, NewsletterSubscriber, PlanWithFeatures};
use validator::Validate;

use crate::error::{ClientError, ClientResult};

/// Gallery grid starts with 6 tiles visible
pub const GALLERY_INITIAL_VISIBLE: usize = 6;
/// Homepage highlights show 3 dishes
pub const HIGHLIGHTS_INITIAL_VISIBLE: usize = 3;
/// Every "load more" click reveals 3 more
pub const REVEAL_STEP: usize = 3;

/// Anything with a category-ish field the filter bar can group by
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for MenuItem {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for GalleryItem {
    fn category(&self) -> &str {
        &self.label
    }
}

impl Categorized for PlanWithFeatures {
    fn category(&self) -> &str {
        self.plan.plan_type.as_str()
    }
}

/// Client-side view over an already-fetched list
pub struct PublicView<T: Categorized> {
    items: Vec<T>,
    /// `None` means "All"
    active_filter: Option<String>,
    initial_visible: usize,
    revealed: usize,
}

impl<T: Categorized> PublicView<T> {
    pub fn new(items: Vec<T>, initial_visible: usize) -> Self {
        Self {
            items,
            active_filter: None,
            initial_visible,
            revealed: initial_visible,
        }
    }

    /// Replace the backing list (fresh fetch); filter and reveal state
    /// are preserved, and a filter whose items vanished simply yields an
    /// empty view until the user picks another.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Distinct categories of the current set, in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            let cat = item.category();
            if !seen.contains(&cat) {
                seen.push(cat);
            }
        }
        seen
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// Select a category (or `None` for "All"); resets the reveal window
    pub fn select_filter(&mut self, filter: Option<&str>) {
        self.active_filter = filter.map(str::to_string);
        self.revealed = self.initial_visible;
    }

    /// The filtered subset, full length
    pub fn filtered(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|i| match &self.active_filter {
                None => true,
                Some(f) => i.category() == f,
            })
            .collect()
    }

    /// How many items are currently revealed:
    /// `min(initial + clicks * step, filtered len)`
    pub fn visible_count(&self) -> usize {
        self.revealed.min(self.filtered().len())
    }

    /// The visible prefix of the filtered subset
    pub fn visible(&self) -> Vec<&T> {
        let mut out = self.filtered();
        out.truncate(self.revealed);
        out
    }

    pub fn can_load_more(&self) -> bool {
        self.revealed < self.filtered().len()
    }

    /// Reveal one more step
    pub fn load_more(&mut self) {
        if self.can_load_more() {
            self.revealed += REVEAL_STEP;
        }
    }
}

/// Store surface the newsletter strip needs
#[async_trait::async_trait]
pub trait SubscribeStore: Send + Sync {
    async fn subscribe(&self, email: &str) -> ClientResult<NewsletterSubscriber>;
}

/// Newsletter signup strip controller
///
/// Invalid addresses never reach the backend; a duplicate subscription
/// comes back as a conflict and gets its own message instead of the
/// generic failure line.
pub struct NewsletterForm<S: SubscribeStore> {
    store: S,
    pub email: String,
    message: Option<String>,
    submitting: bool,
}

impl<S: SubscribeStore> NewsletterForm<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            email: String::new(),
            message: None,
            submitting: false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_valid_email(&self) -> bool {
        shared::models::SubscribeRequest {
            email: self.email.clone(),
        }
        .validate()
        .is_ok()
    }

    pub async fn submit(&mut self) -> ClientResult<()> {
        if self.submitting {
            return Ok(());
        }
        if !self.is_valid_email() {
            self.message = Some("Please enter a valid email address.".into());
            return Err(ClientError::Validation("invalid email".into()));
        }

        self.submitting = true;
        let result = self.store.subscribe(self.email.trim()).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.message = Some("Successfully subscribed!".into());
                self.email.clear();
                Ok(())
            }
            Err(ClientError::Conflict(_)) => {
                self.message = Some("You are already subscribed!".into());
                Err(ClientError::Conflict("already subscribed".into()))
            }
            Err(e) => {
                self.message = Some("Something went wrong.".into());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, category: &str) -> MenuItem {
        MenuItem {
            id,
            title: format!("item-{id}"),
            description: String::new(),
            price: 100.0,
            time_estimate: "15 mins".into(),
            category: category.into(),
            image_url: String::new(),
            is_veg: false,
            is_spicy: false,
            is_bestseller: false,
            created_at: 0,
        }
    }

    fn view() -> PublicView<MenuItem> {
        PublicView::new(
            vec![
                item(1, "Starters"),
                item(2, "Mains"),
                item(3, "Starters"),
                item(4, "Desserts"),
                item(5, "Starters"),
                item(6, "Mains"),
                item(7, "Starters"),
            ],
            GALLERY_INITIAL_VISIBLE,
        )
    }

    #[test]
    fn categories_distinct_in_first_seen_order() {
        assert_eq!(view().categories(), vec!["Starters", "Mains", "Desserts"]);
    }

    #[test]
    fn filter_selects_exact_subset() {
        let mut v = view();
        v.select_filter(Some("Starters"));
        let ids: Vec<i64> = v.filtered().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 7]);

        v.select_filter(None);
        assert_eq!(v.filtered().len(), 7);
    }

    #[test]
    fn category_present_whenever_subset_nonempty() {
        let v = view();
        for cat in v.categories() {
            let subset: Vec<_> = v.items().iter().filter(|i| i.category == cat).collect();
            assert!(!subset.is_empty());
        }
    }

    #[test]
    fn category_disappears_with_last_item() {
        let mut v = view();
        v.set_items(vec![item(1, "Starters"), item(2, "Starters")]);
        assert_eq!(v.categories(), vec!["Starters"]);
    }

    #[test]
    fn reveal_grows_by_step_and_clamps() {
        let mut v = view();
        assert_eq!(v.visible_count(), 6);
        assert!(v.can_load_more());

        v.load_more();
        assert_eq!(v.visible_count(), 7); // min(6 + 3, 7)
        assert!(!v.can_load_more());
    }

    #[test]
    fn filter_change_resets_reveal() {
        let mut v = PublicView::new(
            (0..12).map(|i| item(i, "Ambience")).collect::<Vec<_>>(),
            GALLERY_INITIAL_VISIBLE,
        );
        v.load_more();
        assert_eq!(v.visible_count(), 9);

        v.select_filter(Some("Ambience"));
        assert_eq!(v.visible_count(), GALLERY_INITIAL_VISIBLE);
    }

    #[test]
    fn visible_is_prefix_of_filtered() {
        let mut v = view();
        v.select_filter(Some("Starters"));
        let visible: Vec<i64> = v.visible().iter().map(|i| i.id).collect();
        assert_eq!(visible, vec![1, 3, 5, 7]);
    }

    #[test]
    fn small_filtered_set_caps_visible_count() {
        let mut v = view();
        v.select_filter(Some("Desserts"));
        assert_eq!(v.visible_count(), 1);
        assert!(!v.can_load_more());
    }
}
