//! Per-entity resource stores
//!
//! The admin console needs the same five operations for every entity —
//! list, create, update, delete, upload-asset — so they are factored once
//! behind traits and instantiated per entity instead of being rewritten
//! screen by screen. Screens depend only on the traits; [`RemoteTable`]
//! is the one implementation that talks to cafe-cloud.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    ContactInquiry, GalleryItem, GalleryItemCreate, GalleryItemUpdate, MenuItem, MenuItemCreate,
    MenuItemUpdate, NewsletterSubscriber, PlanSave, PlanType, PlanWithFeatures, Reservation,
    Testimonial, TestimonialCreate, TestimonialUpdate,
};
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::http::CloudClient;

/// Maximum asset size accepted before any bytes leave the machine (5 MB);
/// the backend enforces the same ceiling authoritatively.
pub const MAX_ASSET_SIZE: usize = 5 * 1024 * 1024;

/// List ordering requested from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::desc("created_at")
    }
}

/// A row type backed by a named admin collection
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment under `/api/admin/`
    const COLLECTION: &'static str;

    fn id(&self) -> i64;
}

/// A resource managed through a form screen: it has a draft shape the
/// form edits, plus the payloads derived from it.
pub trait FormResource: Resource {
    /// Form draft; doubles as the creation payload
    type Draft: Serialize + Validate + Clone + Send + Sync + 'static;
    /// Update payload sent on edit submits
    type Update: Serialize + Send + Sync + 'static;

    /// Logical storage bucket for this screen's image uploads, if any
    const ASSET_BUCKET: Option<&'static str> = None;

    /// Fresh draft for "add new" (pre-filled the way the form starts)
    fn empty_draft() -> Self::Draft;

    /// Draft pre-filled from an existing record for "edit"
    fn to_draft(&self) -> Self::Draft;

    /// Update payload carrying the whole draft
    fn as_update(draft: &Self::Draft) -> Self::Update;
}

/// Read + delete surface every admin screen needs
#[async_trait]
pub trait ListStore<R: Resource>: Send + Sync {
    /// Fetch the full matching set; screens slice client-side
    async fn list(&self, order: Order) -> ClientResult<Vec<R>>;

    /// Idempotent delete: removing an id that is already gone succeeds
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// Full CRUD surface for form-managed resources
#[async_trait]
pub trait Repository<R: FormResource>: ListStore<R> {
    /// Insert and return the created row with its backend-assigned id
    async fn create(&self, draft: &R::Draft) -> ClientResult<R>;

    async fn update(&self, id: i64, fields: &R::Update) -> ClientResult<()>;

    /// Upload an image for this screen; returns its public URL
    async fn upload_asset(&self, bytes: Vec<u8>, content_type: &str) -> ClientResult<String>;
}

/// The remote implementation: one generic table client per entity
pub struct RemoteTable<R: Resource> {
    client: Arc<CloudClient>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> RemoteTable<R> {
    pub fn new(client: Arc<CloudClient>) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ListStore<R> for RemoteTable<R> {
    async fn list(&self, order: Order) -> ClientResult<Vec<R>> {
        self.client
            .get(&format!(
                "api/admin/{}?order_by={}&ascending={}",
                R::COLLECTION,
                order.column,
                order.ascending
            ))
            .await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .delete(&format!("api/admin/{}/{}", R::COLLECTION, id))
            .await
    }
}

#[async_trait]
impl<R: FormResource> Repository<R> for RemoteTable<R> {
    async fn create(&self, draft: &R::Draft) -> ClientResult<R> {
        self.client
            .post(&format!("api/admin/{}", R::COLLECTION), draft)
            .await
    }

    async fn update(&self, id: i64, fields: &R::Update) -> ClientResult<()> {
        self.client
            .put(&format!("api/admin/{}/{}", R::COLLECTION, id), fields)
            .await
    }

    async fn upload_asset(&self, bytes: Vec<u8>, content_type: &str) -> ClientResult<String> {
        let bucket = R::ASSET_BUCKET
            .ok_or_else(|| ClientError::Asset(format!("{} has no asset bucket", R::COLLECTION)))?;

        // Pre-flight checks; the backend re-validates authoritatively.
        if !content_type.starts_with("image/") {
            return Err(ClientError::Asset("Only image files allowed.".into()));
        }
        if bytes.len() > MAX_ASSET_SIZE {
            return Err(ClientError::Asset("File must be under 5MB.".into()));
        }

        self.client.upload(bucket, bytes, content_type).await
    }
}

// ========== Resource bindings ==========

impl Resource for MenuItem {
    const COLLECTION: &'static str = "menu";

    fn id(&self) -> i64 {
        self.id
    }
}

impl FormResource for MenuItem {
    type Draft = MenuItemCreate;
    type Update = MenuItemUpdate;

    const ASSET_BUCKET: Option<&'static str> = Some("menu-images");

    fn empty_draft() -> MenuItemCreate {
        MenuItemCreate {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            time_estimate: "15 mins".into(),
            category: "Starters".into(),
            image_url: String::new(),
            is_veg: true,
            is_spicy: false,
            is_bestseller: false,
        }
    }

    fn to_draft(&self) -> MenuItemCreate {
        MenuItemCreate {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            time_estimate: self.time_estimate.clone(),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
            is_veg: self.is_veg,
            is_spicy: self.is_spicy,
            is_bestseller: self.is_bestseller,
        }
    }

    fn as_update(draft: &MenuItemCreate) -> MenuItemUpdate {
        MenuItemUpdate {
            title: Some(draft.title.clone()),
            description: Some(draft.description.clone()),
            price: Some(draft.price),
            time_estimate: Some(draft.time_estimate.clone()),
            category: Some(draft.category.clone()),
            image_url: Some(draft.image_url.clone()),
            is_veg: Some(draft.is_veg),
            is_spicy: Some(draft.is_spicy),
            is_bestseller: Some(draft.is_bestseller),
        }
    }
}

impl Resource for GalleryItem {
    const COLLECTION: &'static str = "gallery";

    fn id(&self) -> i64 {
        self.id
    }
}

impl FormResource for GalleryItem {
    type Draft = GalleryItemCreate;
    type Update = GalleryItemUpdate;

    const ASSET_BUCKET: Option<&'static str> = Some("gallery");

    fn empty_draft() -> GalleryItemCreate {
        GalleryItemCreate {
            title: String::new(),
            label: "Ambience".into(),
            image_url: String::new(),
        }
    }

    fn to_draft(&self) -> GalleryItemCreate {
        GalleryItemCreate {
            title: self.title.clone(),
            label: self.label.clone(),
            image_url: self.image_url.clone(),
        }
    }

    fn as_update(draft: &GalleryItemCreate) -> GalleryItemUpdate {
        GalleryItemUpdate {
            title: Some(draft.title.clone()),
            label: Some(draft.label.clone()),
            image_url: Some(draft.image_url.clone()),
        }
    }
}

impl Resource for Testimonial {
    const COLLECTION: &'static str = "testimonials";

    fn id(&self) -> i64 {
        self.id
    }
}

impl FormResource for Testimonial {
    type Draft = TestimonialCreate;
    type Update = TestimonialUpdate;

    fn empty_draft() -> TestimonialCreate {
        TestimonialCreate {
            name: String::new(),
            role: String::new(),
            quote: String::new(),
            rating: 5,
            avatar_url: None,
            is_published: false,
            sort_order: 0,
        }
    }

    fn to_draft(&self) -> TestimonialCreate {
        TestimonialCreate {
            name: self.name.clone(),
            role: self.role.clone(),
            quote: self.quote.clone(),
            rating: self.rating,
            avatar_url: self.avatar_url.clone(),
            is_published: self.is_published,
            sort_order: self.sort_order,
        }
    }

    fn as_update(draft: &TestimonialCreate) -> TestimonialUpdate {
        TestimonialUpdate {
            name: Some(draft.name.clone()),
            role: Some(draft.role.clone()),
            quote: Some(draft.quote.clone()),
            rating: Some(draft.rating),
            avatar_url: draft.avatar_url.clone(),
            is_published: Some(draft.is_published),
            sort_order: Some(draft.sort_order),
        }
    }
}

impl Resource for PlanWithFeatures {
    const COLLECTION: &'static str = "plans";

    fn id(&self) -> i64 {
        self.plan.id
    }
}

impl FormResource for PlanWithFeatures {
    type Draft = PlanSave;
    /// Plan saves are full-replace, features included — not a diff
    type Update = PlanSave;

    const ASSET_BUCKET: Option<&'static str> = Some("plan-images");

    fn empty_draft() -> PlanSave {
        PlanSave {
            plan_type: PlanType::Cake,
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            price: 0.0,
            label: String::new(),
            badge: String::new(),
            // the form starts with one empty feature input
            features: vec![String::new()],
        }
    }

    fn to_draft(&self) -> PlanSave {
        PlanSave {
            plan_type: self.plan.plan_type,
            title: self.plan.title.clone(),
            description: self.plan.description.clone(),
            image_url: self.plan.image_url.clone(),
            price: self.plan.price,
            label: self.plan.label.clone(),
            badge: self.plan.badge.clone(),
            features: self.features.iter().map(|f| f.feature.clone()).collect(),
        }
    }

    fn as_update(draft: &PlanSave) -> PlanSave {
        draft.clone()
    }
}

impl Resource for ContactInquiry {
    const COLLECTION: &'static str = "contacts";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for NewsletterSubscriber {
    const COLLECTION: &'static str = "newsletter";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Reservation {
    const COLLECTION: &'static str = "reservations";

    fn id(&self) -> i64 {
        self.id
    }
}
