//! Admin screen controller flows against in-memory stores

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use cafe_client::repository::{FormResource, ListStore, Order, Repository};
use cafe_client::screens::{AdminScreen, ReservationScreen, RosterScreen, ScreenState};
use cafe_client::screens::admin::ReservationStore;
use cafe_client::{ClientError, ClientResult};
use chrono::{NaiveDate, NaiveTime};
use shared::models::{
    ContactInquiry, MenuItem, PlanFeature, PlanWithFeatures, Reservation, ReservationStatus,
    TripType,
};

// ========== In-memory menu store ==========

#[derive(Default)]
struct InMemoryMenu {
    rows: Mutex<Vec<MenuItem>>,
    next_id: AtomicI64,
    fail_writes: AtomicBool,
}

impl InMemoryMenu {
    fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn fail_next_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_write(&self) -> ClientResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(ClientError::Internal("backend unavailable".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ListStore<MenuItem> for &InMemoryMenu {
    async fn list(&self, _order: Order) -> ClientResult<Vec<MenuItem>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.check_write()?;
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl Repository<MenuItem> for &InMemoryMenu {
    async fn create(&self, draft: &<MenuItem as FormResource>::Draft) -> ClientResult<MenuItem> {
        self.check_write()?;
        let item = MenuItem {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: draft.title.clone(),
            description: draft.description.clone(),
            price: draft.price,
            time_estimate: draft.time_estimate.clone(),
            category: draft.category.clone(),
            image_url: draft.image_url.clone(),
            is_veg: draft.is_veg,
            is_spicy: draft.is_spicy,
            is_bestseller: draft.is_bestseller,
            created_at: 0,
        };
        self.rows.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: i64,
        fields: &<MenuItem as FormResource>::Update,
    ) -> ClientResult<()> {
        self.check_write()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound("menu item".into()))?;
        if let Some(title) = &fields.title {
            row.title = title.clone();
        }
        if let Some(category) = &fields.category {
            row.category = category.clone();
        }
        if let Some(price) = fields.price {
            row.price = price;
        }
        if let Some(best) = fields.is_bestseller {
            row.is_bestseller = best;
        }
        Ok(())
    }

    async fn upload_asset(&self, _bytes: Vec<u8>, _content_type: &str) -> ClientResult<String> {
        Ok("https://assets.test/menu-images/fixed.jpg".into())
    }
}

fn seoul_wings_draft() -> <MenuItem as FormResource>::Draft {
    let mut draft = MenuItem::empty_draft();
    draft.title = "Seoul Spicy Wings".into();
    draft.category = "Starters".into();
    draft.price = 395.0;
    draft.is_bestseller = true;
    draft
}

#[tokio::test]
async fn create_then_list_includes_new_id() {
    let store = InMemoryMenu::new();
    let mut screen = AdminScreen::new(&store);

    screen.begin_create();
    *screen.draft_mut().unwrap() = seoul_wings_draft();
    screen.submit().await.unwrap();

    assert!(matches!(screen.state(), ScreenState::Idle));
    assert_eq!(screen.items().len(), 1);
    let created = &screen.items()[0];
    assert_eq!(created.title, "Seoul Spicy Wings");
    assert_eq!(created.category, "Starters");
    assert!(created.is_bestseller);
    assert!(created.id > 0);
}

#[tokio::test]
async fn validation_blocks_submit_before_any_remote_call() {
    let store = InMemoryMenu::new();
    // every write would fail; validation must stop us before the store
    store.fail_next_writes(true);
    let mut screen = AdminScreen::new(&store);

    screen.begin_create();
    // empty title fails required-field validation
    let err = screen.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    // the form stays open with the draft
    assert!(screen.state().is_editing());
}

#[tokio::test]
async fn save_failure_preserves_draft_for_retry() {
    let store = InMemoryMenu::new();
    let mut screen = AdminScreen::new(&store);

    screen.begin_create();
    *screen.draft_mut().unwrap() = seoul_wings_draft();

    store.fail_next_writes(true);
    let err = screen.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Internal(_)));
    assert!(matches!(screen.state(), ScreenState::Error { .. }));

    // dismiss reopens the form with the draft intact
    screen.dismiss_error();
    assert_eq!(screen.draft_mut().unwrap().title, "Seoul Spicy Wings");

    store.fail_next_writes(false);
    screen.submit().await.unwrap();
    assert_eq!(screen.items().len(), 1);
}

#[tokio::test]
async fn edit_prefills_draft_and_updates_row() {
    let store = InMemoryMenu::new();
    let mut screen = AdminScreen::new(&store);

    screen.begin_create();
    *screen.draft_mut().unwrap() = seoul_wings_draft();
    screen.submit().await.unwrap();
    let id = screen.items()[0].id;

    screen.begin_edit(id).unwrap();
    let draft = screen.draft_mut().unwrap();
    assert_eq!(draft.title, "Seoul Spicy Wings");
    draft.price = 425.0;
    screen.submit().await.unwrap();

    assert_eq!(screen.items()[0].price, 425.0);
    assert_eq!(screen.items().len(), 1);
}

#[tokio::test]
async fn delete_is_two_step_and_idempotent() {
    let store = InMemoryMenu::new();
    let mut screen = AdminScreen::new(&store);

    screen.begin_create();
    *screen.draft_mut().unwrap() = seoul_wings_draft();
    screen.submit().await.unwrap();
    let id = screen.items()[0].id;

    // cancel leaves the row alone
    screen.request_delete(id);
    screen.cancel_delete();
    screen.confirm_delete().await.unwrap();
    assert_eq!(screen.items().len(), 1);

    // confirmed delete removes it
    screen.request_delete(id);
    screen.confirm_delete().await.unwrap();
    assert!(screen.items().is_empty());

    // deleting the same id again does not raise
    screen.request_delete(id);
    screen.confirm_delete().await.unwrap();
}

#[tokio::test]
async fn double_submit_is_refused_outside_editing() {
    let store = InMemoryMenu::new();
    let mut screen = AdminScreen::new(&store);
    // no form open
    let err = screen.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

// ========== In-memory plan store: destructive feature replace ==========

struct InMemoryPlans {
    rows: Mutex<Vec<PlanWithFeatures>>,
    next_plan_id: AtomicI64,
    next_feature_id: AtomicI64,
}

impl InMemoryPlans {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_plan_id: AtomicI64::new(1),
            next_feature_id: AtomicI64::new(1),
        }
    }

    fn materialize_features(&self, plan_id: i64, draft: &shared::models::PlanSave) -> Vec<PlanFeature> {
        draft
            .clean_features()
            .into_iter()
            .map(|f| PlanFeature {
                id: self.next_feature_id.fetch_add(1, Ordering::SeqCst),
                plan_id,
                feature: f.to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl ListStore<PlanWithFeatures> for &InMemoryPlans {
    async fn list(&self, _order: Order) -> ClientResult<Vec<PlanWithFeatures>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.rows.lock().unwrap().retain(|r| r.plan.id != id);
        Ok(())
    }
}

#[async_trait]
impl Repository<PlanWithFeatures> for &InMemoryPlans {
    async fn create(
        &self,
        draft: &shared::models::PlanSave,
    ) -> ClientResult<PlanWithFeatures> {
        let plan_id = self.next_plan_id.fetch_add(1, Ordering::SeqCst);
        let plan = PlanWithFeatures {
            plan: shared::models::Plan {
                id: plan_id,
                plan_type: draft.plan_type,
                title: draft.title.clone(),
                description: draft.description.clone(),
                image_url: draft.image_url.clone(),
                price: draft.price,
                label: draft.label.clone(),
                badge: draft.badge.clone(),
                created_at: 0,
            },
            features: self.materialize_features(plan_id, draft),
        };
        self.rows.lock().unwrap().push(plan.clone());
        Ok(plan)
    }

    async fn update(&self, id: i64, fields: &shared::models::PlanSave) -> ClientResult<()> {
        // destructive replace: old feature rows die, fresh ids come back
        let features = self.materialize_features(id, fields);
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.plan.id == id)
            .ok_or_else(|| ClientError::NotFound("plan".into()))?;
        row.plan.title = fields.title.clone();
        row.plan.plan_type = fields.plan_type;
        row.plan.price = fields.price;
        row.features = features;
        Ok(())
    }

    async fn upload_asset(&self, _bytes: Vec<u8>, _content_type: &str) -> ClientResult<String> {
        Ok("https://assets.test/plan-images/fixed.jpg".into())
    }
}

#[tokio::test]
async fn plan_feature_replace_yields_fresh_ids() {
    let store = InMemoryPlans::new();
    let mut screen = AdminScreen::new(&store);

    screen.begin_create();
    {
        let draft = screen.draft_mut().unwrap();
        draft.title = "Midnight Layover".into();
        draft.price = 1499.0;
        draft.features = vec!["A".into(), "B".into()];
    }
    screen.submit().await.unwrap();

    let plan_id = screen.items()[0].plan.id;
    let old_ids: Vec<i64> = screen.items()[0].features.iter().map(|f| f.id).collect();
    assert_eq!(old_ids.len(), 2);

    screen.begin_edit(plan_id).unwrap();
    screen.draft_mut().unwrap().features = vec!["A".into(), "C".into(), "D".into()];
    screen.submit().await.unwrap();

    let saved = &screen.items()[0];
    let texts: Vec<&str> = saved.features.iter().map(|f| f.feature.as_str()).collect();
    assert_eq!(texts, vec!["A", "C", "D"]);
    // every feature row has a new identity, the kept "A" included
    for feature in &saved.features {
        assert!(!old_ids.contains(&feature.id));
    }
}

// ========== Reservation board ==========

struct InMemoryReservations {
    rows: Mutex<Vec<Reservation>>,
}

fn booking(id: i64, status: ReservationStatus) -> Reservation {
    Reservation {
        id,
        passenger_name: "Rahul Sharma".into(),
        contact_number: "+91 98765 43210".into(),
        email: "rahul@gmail.com".into(),
        pax_count: 2,
        departure_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        departure_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        trip_type: TripType::DateNight,
        status,
        created_at: 0,
    }
}

#[async_trait]
impl ListStore<Reservation> for &InMemoryReservations {
    async fn list(&self, _order: Order) -> ClientResult<Vec<Reservation>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for &InMemoryReservations {
    async fn set_status(&self, id: i64, status: ReservationStatus) -> ClientResult<Reservation> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ClientError::NotFound("reservation".into()))?;
        if !row.status.can_transition_to(status) {
            return Err(ClientError::Validation("status transition not allowed".into()));
        }
        row.status = status;
        Ok(row.clone())
    }
}

#[tokio::test]
async fn pending_booking_offers_both_actions_until_it_moves() {
    let store = InMemoryReservations {
        rows: Mutex::new(vec![booking(1, ReservationStatus::Pending)]),
    };
    let mut screen = ReservationScreen::new(&store);
    screen.refresh().await.unwrap();

    let actions = ReservationScreen::<&InMemoryReservations>::actions_for(&screen.items()[0]);
    assert_eq!(
        actions.to_vec(),
        vec![ReservationStatus::Confirmed, ReservationStatus::Cancelled]
    );

    screen
        .set_status(1, ReservationStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(screen.items()[0].status, ReservationStatus::Confirmed);
    assert!(
        ReservationScreen::<&InMemoryReservations>::actions_for(&screen.items()[0]).is_empty()
    );

    // a second transition is rejected
    let err = screen
        .set_status(1, ReservationStatus::Cancelled)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

// ========== Roster screen (contacts) ==========

struct InMemoryContacts {
    rows: Mutex<Vec<ContactInquiry>>,
}

#[async_trait]
impl ListStore<ContactInquiry> for &InMemoryContacts {
    async fn list(&self, _order: Order) -> ClientResult<Vec<ContactInquiry>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

// ========== Upload pre-flight checks ==========

#[tokio::test]
async fn upload_preflight_rejects_before_touching_the_network() {
    use cafe_client::repository::{MAX_ASSET_SIZE, RemoteTable};
    use cafe_client::{ClientConfig, CloudClient};
    use shared::models::GalleryItem;
    use std::sync::Arc;

    // nothing listens here; pre-flight failures must return before any
    // request is attempted
    let client = Arc::new(CloudClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap());
    let table: RemoteTable<GalleryItem> = RemoteTable::new(client);

    let err = table
        .upload_asset(vec![0u8; 16], "application/pdf")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Asset(_)));

    let err = table
        .upload_asset(vec![0u8; MAX_ASSET_SIZE + 1], "image/png")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Asset(_)));
}

#[tokio::test]
async fn roster_delete_flow() {
    let store = InMemoryContacts {
        rows: Mutex::new(vec![ContactInquiry {
            id: 9,
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            message: "Hi".into(),
            created_at: 0,
        }]),
    };
    let mut screen = RosterScreen::new(&store);
    screen.refresh().await.unwrap();
    assert_eq!(screen.items().len(), 1);

    screen.request_delete(9);
    screen.confirm_delete().await.unwrap();
    assert!(screen.items().is_empty());

    // repeat delete of a gone id succeeds
    screen.request_delete(9);
    screen.confirm_delete().await.unwrap();
}
