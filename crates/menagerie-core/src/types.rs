//! # Domain Types
//!
//! Core domain types used throughout Menagerie.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐ ┌─────────────┐ │
//! │  │    Animal     │ │    Product    │ │     Order     │ │    User     │ │
//! │  │ ───────────── │ │ ───────────── │ │ ───────────── │ │ ─────────── │ │
//! │  │ id            │ │ id            │ │ id            │ │ id          │ │
//! │  │ name, age     │ │ name, price   │ │ user_id (ref) │ │ username    │ │
//! │  │ status        │ │ discount      │ │ status (text) │ │ email       │ │
//! │  │ species       │ │ volume        │ │ payment       │ │ names       │ │
//! │  │ intake_date   │ │ sold_volume   │ │ product_ids   │ │ role        │ │
//! │  └───────────────┘ └───────────────┘ └───────────────┘ └─────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Three Shapes Per Entity
//! Each entity has a creation shape (`*Create`), an update shape carrying
//! the id (`*Update`) and the stored shape. Fields are copied explicitly
//! between them; there is no shared base struct.
//!
//! ```text
//!   AnimalCreate ──from_create(id)──► Animal ◄──apply_update── AnimalUpdate
//!                                       │
//!                                       └── intake_date never overwritten
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Integer identity shared by all collections.
///
/// Allocated once per entity, ascending, never reused after deletion.
pub type EntityId = i64;

/// Status the store assigns to a cancelled order.
pub const ORDER_STATUS_CANCELLED: &str = "cancelled";

// =============================================================================
// Entity Trait
// =============================================================================

/// A uniquely identified record held by a store collection.
pub trait Entity: Clone {
    /// Human-readable kind, used in log fields and error messages.
    const KIND: &'static str;

    /// The entity's identity.
    fn id(&self) -> EntityId;
}

// =============================================================================
// Enumerations
// =============================================================================

/// Parses `s` against a fixed set of variants, ignoring ASCII case.
fn parse_variant<T: Copy>(
    field: &str,
    s: &str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, ValidationError> {
    let s = s.trim();
    all.iter()
        .copied()
        .find(|v| name(v).eq_ignore_ascii_case(s))
        .ok_or_else(|| ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: all.iter().map(|v| name(v).to_string()).collect(),
        })
}

/// Adoption status of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    /// Can be adopted.
    #[default]
    Available,
    /// Adoption in progress.
    Pending,
    /// Adopted, no longer available.
    Adopted,
}

impl AnimalStatus {
    pub const ALL: [AnimalStatus; 3] = [
        AnimalStatus::Available,
        AnimalStatus::Pending,
        AnimalStatus::Adopted,
    ];

    /// Textual form, also matched by tag filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalStatus::Available => "available",
            AnimalStatus::Pending => "pending",
            AnimalStatus::Adopted => "adopted",
        }
    }
}

/// Animal species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Rodent,
    Reptile,
    Other,
}

impl Species {
    pub const ALL: [Species; 7] = [
        Species::Dog,
        Species::Cat,
        Species::Bird,
        Species::Rabbit,
        Species::Rodent,
        Species::Reptile,
        Species::Other,
    ];

    /// Textual form, also matched by tag filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Rabbit => "rabbit",
            Species::Rodent => "rodent",
            Species::Reptile => "reptile",
            Species::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

/// How an order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment.
    Card,
    /// BLIK mobile payment code.
    Blik,
    /// Cash on delivery or at pickup.
    Cash,
    /// Bank transfer.
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Blik,
        PaymentMethod::Cash,
        PaymentMethod::Transfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Blik => "blik",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
        }
    }
}

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Courier,
    Pickup,
    ParcelLocker,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 3] = [
        ShippingMethod::Courier,
        ShippingMethod::Pickup,
        ShippingMethod::ParcelLocker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Courier => "courier",
            ShippingMethod::Pickup => "pickup",
            ShippingMethod::ParcelLocker => "parcel_locker",
        }
    }
}

/// Permission tier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular customer. Every newly created account starts here.
    #[default]
    User,
    /// Shelter or shop staff.
    Worker,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Worker, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Worker => "worker",
            UserRole::Admin => "admin",
        }
    }
}

macro_rules! impl_text_enum {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_variant($field, s, &<$ty>::ALL, <$ty>::as_str)
            }
        }
    };
}

impl_text_enum!(AnimalStatus, "status");
impl_text_enum!(Species, "species");
impl_text_enum!(Gender, "gender");
impl_text_enum!(PaymentMethod, "payment method");
impl_text_enum!(ShippingMethod, "shipping method");
impl_text_enum!(UserRole, "role");

// =============================================================================
// Photo Encoding
// =============================================================================

/// Serializes optional photo bytes as a standard base64 string.
mod photo_base64 {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(photo: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        photo
            .as_ref()
            .map(|bytes| STANDARD.encode(bytes))
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}

// =============================================================================
// Animal
// =============================================================================

/// An animal in the shelter catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: EntityId,
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Adoption fee.
    pub price: f64,
    pub status: AnimalStatus,
    pub species: Species,
    pub gender: Gender,
    pub description: String,
    /// Raw image bytes (base64 on the wire).
    #[serde(default, with = "photo_base64")]
    #[ts(as = "Option<String>")]
    pub photo: Option<Vec<u8>>,
    /// When the animal arrived. Set once at creation.
    #[ts(as = "String")]
    pub intake_date: DateTime<Utc>,
}

/// Input for registering a new animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalCreate {
    pub name: String,
    pub age: u32,
    pub price: f64,
    pub status: AnimalStatus,
    pub species: Species,
    pub gender: Gender,
    pub description: String,
    #[serde(default, with = "photo_base64")]
    pub photo: Option<Vec<u8>>,
    pub intake_date: DateTime<Utc>,
}

/// Input for editing an animal. The intake date is not editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalUpdate {
    pub id: EntityId,
    pub name: String,
    pub age: u32,
    pub price: f64,
    pub status: AnimalStatus,
    pub species: Species,
    pub gender: Gender,
    pub description: String,
    #[serde(default, with = "photo_base64")]
    pub photo: Option<Vec<u8>>,
}

impl Animal {
    /// Builds a stored animal from its creation input.
    pub fn from_create(id: EntityId, input: AnimalCreate) -> Self {
        Animal {
            id,
            name: input.name,
            age: input.age,
            price: input.price,
            status: input.status,
            species: input.species,
            gender: input.gender,
            description: input.description,
            photo: input.photo,
            intake_date: input.intake_date,
        }
    }

    /// Overwrites every mutable field. `id` and `intake_date` are kept.
    pub fn apply_update(&mut self, update: AnimalUpdate) {
        self.name = update.name;
        self.age = update.age;
        self.price = update.price;
        self.status = update.status;
        self.species = update.species;
        self.gender = update.gender;
        self.description = update.description;
        self.photo = update.photo;
    }
}

impl Entity for Animal {
    const KIND: &'static str = "Animal";

    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product sold in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Discount percentage, if any.
    pub discount: Option<i32>,
    /// Units currently in stock. Never negative.
    pub volume: i64,
    /// Units sold over the product's lifetime. Never negative.
    pub sold_volume: i64,
}

/// Input for adding a product. Stock fields are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount: Option<i32>,
}

/// Input for editing a product. Stock changes go through stock operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount: Option<i32>,
}

impl Product {
    /// Builds a stored product with `initial_volume` in stock and nothing sold.
    pub fn from_create(id: EntityId, input: ProductCreate, initial_volume: i64) -> Self {
        Product {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            discount: input.discount,
            volume: initial_volume,
            sold_volume: 0,
        }
    }

    /// Overwrites name, description, price and discount.
    pub fn apply_update(&mut self, update: ProductUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.discount = update.discount;
    }

    /// Checks if `quantity` units can be taken from stock.
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.volume >= quantity
    }

    /// Adds `count` units to stock. Returns false (and changes nothing) on overflow.
    pub fn restock(&mut self, count: i64) -> bool {
        match self.volume.checked_add(count) {
            Some(volume) => {
                self.volume = volume;
                true
            }
            None => false,
        }
    }

    /// Moves `count` units from stock to sold. Returns false (and changes
    /// nothing) if stock is insufficient or the sold counter would overflow.
    pub fn record_sale(&mut self, count: i64) -> bool {
        if !self.can_sell(count) {
            return false;
        }
        let Some(sold_volume) = self.sold_volume.checked_add(count) else {
            return false;
        };
        self.volume -= count;
        self.sold_volume = sold_volume;
        true
    }
}

impl Entity for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// `user_id` and `product_ids` are plain values; nothing checks that they
/// resolve, and later product changes never touch an existing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub user_id: EntityId,
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,
    /// Free-form status, compared case-insensitively.
    pub status: String,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
    pub product_ids: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub user_id: EntityId,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
    pub product_ids: Vec<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub id: EntityId,
    pub user_id: EntityId,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
    pub product_ids: Vec<EntityId>,
}

impl Order {
    pub fn from_create(id: EntityId, input: OrderCreate) -> Self {
        Order {
            id,
            user_id: input.user_id,
            order_date: input.order_date,
            status: input.status,
            payment_method: input.payment_method,
            shipping_method: input.shipping_method,
            product_ids: input.product_ids,
        }
    }

    pub fn apply_update(&mut self, update: OrderUpdate) {
        self.user_id = update.user_id;
        self.order_date = update.order_date;
        self.status = update.status;
        self.payment_method = update.payment_method;
        self.shipping_method = update.shipping_method;
        self.product_ids = update.product_ids;
    }

    /// Sets the status to [`ORDER_STATUS_CANCELLED`], whatever it was.
    pub fn cancel(&mut self) {
        self.status = ORDER_STATUS_CANCELLED.to_string();
    }

    /// Case-insensitive status comparison.
    pub fn has_status(&self, status: &str) -> bool {
        crate::filter::eq_ignore_case(&self.status, status)
    }

    pub fn is_cancelled(&self) -> bool {
        self.has_status(ORDER_STATUS_CANCELLED)
    }
}

impl Entity for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// User
// =============================================================================

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

/// Input for registering a user. There is no role: new accounts are always
/// [`UserRole::User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl User {
    pub fn from_create(id: EntityId, input: UserCreate) -> Self {
        User {
            id,
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            role: UserRole::User,
        }
    }

    pub fn apply_update(&mut self, update: UserUpdate) {
        self.username = update.username;
        self.email = update.email;
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.role = update.role;
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> EntityId {
        self.id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
