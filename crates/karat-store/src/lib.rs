// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! In-memory entity stores for the admin console. Each management
//! screen owns exactly one store instance; nothing here is shared
//! process-wide. Ids come from a per-store monotonic counter, so rapid
//! sequential creates can never collide. `update` and `remove` are
//! no-ops (returning `false`) for absent ids.

pub mod filter;
pub mod seed;
pub mod validation;

use karat_app::{
    Branch, BranchId, BranchStatus, DashboardCounts, MetalType, Product, ProductCategory,
    ProductCollection, ProductId, ProductStatus, Purity, RequestId, RequestKind, RequestPriority,
    RequestStatus, Review, ReviewId, ReviewStatus, Role, RoleId, ServiceRequest, User, UserId,
    UserStatus,
};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBranch {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub status: BranchStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBranch {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub status: BranchStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub collection: ProductCollection,
    pub metal_type: MetalType,
    pub purity: Purity,
    pub weight_grams: f64,
    pub price_rupees: i64,
    pub image: String,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    pub name: String,
    pub sku: String,
    pub category: ProductCategory,
    pub collection: ProductCollection,
    pub metal_type: MetalType,
    pub purity: Purity,
    pub weight_grams: f64,
    pub price_rupees: i64,
    pub image: String,
    pub status: ProductStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequest {
    pub kind: RequestKind,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub subject: String,
    pub description: String,
    pub submitted: Date,
    pub priority: RequestPriority,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    pub product_image: String,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub date: Date,
}

/// `last_login` is intentionally absent: it is set once at creation and
/// carried forward by `UserStore::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: UserStatus,
}

/// `user_count` is intentionally absent: new roles start at zero and
/// edits carry the stored count forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub color: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRole {
    pub name: String,
    pub description: String,
    pub color: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchStore {
    rows: Vec<Branch>,
    next_id: i64,
}

impl BranchStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[Branch] {
        &self.rows
    }

    pub fn get(&self, id: BranchId) -> Option<&Branch> {
        self.rows.iter().find(|branch| branch.id == id)
    }

    pub fn create(&mut self, input: &NewBranch) -> BranchId {
        let id = BranchId::new(alloc_id(&mut self.next_id));
        self.rows.push(Branch {
            id,
            name: input.name.clone(),
            address: input.address.clone(),
            city: input.city.clone(),
            state: input.state.clone(),
            postal_code: input.postal_code.clone(),
            phone: input.phone.clone(),
            email: input.email.clone(),
            hours: input.hours.clone(),
            status: input.status,
        });
        id
    }

    pub fn update(&mut self, id: BranchId, update: &UpdateBranch) -> bool {
        let Some(branch) = self.rows.iter_mut().find(|branch| branch.id == id) else {
            return false;
        };
        branch.name = update.name.clone();
        branch.address = update.address.clone();
        branch.city = update.city.clone();
        branch.state = update.state.clone();
        branch.postal_code = update.postal_code.clone();
        branch.phone = update.phone.clone();
        branch.email = update.email.clone();
        branch.hours = update.hours.clone();
        branch.status = update.status;
        true
    }

    pub fn remove(&mut self, id: BranchId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|branch| branch.id != id);
        self.rows.len() != before
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStore {
    rows: Vec<Product>,
    next_id: i64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.rows
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.rows.iter().find(|product| product.id == id)
    }

    pub fn create(&mut self, input: &NewProduct) -> ProductId {
        let id = ProductId::new(alloc_id(&mut self.next_id));
        self.rows.push(Product {
            id,
            name: input.name.clone(),
            sku: input.sku.clone(),
            category: input.category,
            collection: input.collection,
            metal_type: input.metal_type,
            purity: input.purity,
            weight_grams: input.weight_grams,
            price_rupees: input.price_rupees,
            image: input.image.clone(),
            status: input.status,
        });
        id
    }

    pub fn update(&mut self, id: ProductId, update: &UpdateProduct) -> bool {
        let Some(product) = self.rows.iter_mut().find(|product| product.id == id) else {
            return false;
        };
        product.name = update.name.clone();
        product.sku = update.sku.clone();
        product.category = update.category;
        product.collection = update.collection;
        product.metal_type = update.metal_type;
        product.purity = update.purity;
        product.weight_grams = update.weight_grams;
        product.price_rupees = update.price_rupees;
        product.image = update.image.clone();
        product.status = update.status;
        true
    }

    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|product| product.id != id);
        self.rows.len() != before
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestStore {
    rows: Vec<ServiceRequest>,
    next_id: i64,
}

impl RequestStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[ServiceRequest] {
        &self.rows
    }

    pub fn get(&self, id: RequestId) -> Option<&ServiceRequest> {
        self.rows.iter().find(|request| request.id == id)
    }

    pub fn create(&mut self, input: &NewRequest) -> RequestId {
        let id = RequestId::new(alloc_id(&mut self.next_id));
        self.rows.push(ServiceRequest {
            id,
            kind: input.kind,
            customer_name: input.customer_name.clone(),
            customer_email: input.customer_email.clone(),
            customer_phone: input.customer_phone.clone(),
            subject: input.subject.clone(),
            description: input.description.clone(),
            submitted: input.submitted,
            priority: input.priority,
            status: RequestStatus::Pending,
        });
        id
    }

    /// Any status may follow any other; there is no transition table.
    pub fn set_status(&mut self, id: RequestId, status: RequestStatus) -> bool {
        let Some(request) = self.rows.iter_mut().find(|request| request.id == id) else {
            return false;
        };
        request.status = status;
        true
    }

    pub fn count_with_status(&self, status: RequestStatus) -> usize {
        self.rows
            .iter()
            .filter(|request| request.status == status)
            .count()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStore {
    rows: Vec<Review>,
    next_id: i64,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[Review] {
        &self.rows
    }

    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.rows.iter().find(|review| review.id == id)
    }

    pub fn create(&mut self, input: &NewReview) -> ReviewId {
        let id = ReviewId::new(alloc_id(&mut self.next_id));
        self.rows.push(Review {
            id,
            customer_name: input.customer_name.clone(),
            customer_email: input.customer_email.clone(),
            product_name: input.product_name.clone(),
            product_image: input.product_image.clone(),
            rating: input.rating.clamp(1, 5),
            title: input.title.clone(),
            body: input.body.clone(),
            date: input.date,
            status: ReviewStatus::Pending,
        });
        id
    }

    pub fn set_status(&mut self, id: ReviewId, status: ReviewStatus) -> bool {
        let Some(review) = self.rows.iter_mut().find(|review| review.id == id) else {
            return false;
        };
        review.status = status;
        true
    }

    pub fn count_with_status(&self, status: ReviewStatus) -> usize {
        self.rows
            .iter()
            .filter(|review| review.status == status)
            .count()
    }

    pub fn remove(&mut self, id: ReviewId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|review| review.id != id);
        self.rows.len() != before
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStore {
    rows: Vec<User>,
    next_id: i64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[User] {
        &self.rows
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.rows.iter().find(|user| user.id == id)
    }

    pub fn create(&mut self, input: &NewUser) -> UserId {
        self.create_with_last_login(input, OffsetDateTime::now_utc().date())
    }

    pub fn create_with_last_login(&mut self, input: &NewUser, last_login: Date) -> UserId {
        let id = UserId::new(alloc_id(&mut self.next_id));
        self.rows.push(User {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            role: input.role.clone(),
            status: input.status,
            last_login,
        });
        id
    }

    /// `last_login` is untouched: the update input has no such field.
    pub fn update(&mut self, id: UserId, update: &UpdateUser) -> bool {
        let Some(user) = self.rows.iter_mut().find(|user| user.id == id) else {
            return false;
        };
        user.first_name = update.first_name.clone();
        user.last_name = update.last_name.clone();
        user.email = update.email.clone();
        user.phone = update.phone.clone();
        user.role = update.role.clone();
        user.status = update.status;
        true
    }

    pub fn remove(&mut self, id: UserId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|user| user.id != id);
        self.rows.len() != before
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleStore {
    rows: Vec<Role>,
    next_id: i64,
}

impl RoleStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> &[Role] {
        &self.rows
    }

    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.rows.iter().find(|role| role.id == id)
    }

    /// Lookup for the soft `User.role` reference. Renames and deletions
    /// never cascade to users.
    pub fn find_by_name(&self, name: &str) -> Option<&Role> {
        self.rows.iter().find(|role| role.name == name)
    }

    pub fn create(&mut self, input: &NewRole) -> RoleId {
        let id = RoleId::new(alloc_id(&mut self.next_id));
        self.rows.push(Role {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            color: input.color.clone(),
            user_count: 0,
            permissions: input.permissions.clone(),
        });
        id
    }

    /// `user_count` is untouched: the update input has no such field.
    pub fn update(&mut self, id: RoleId, update: &UpdateRole) -> bool {
        let Some(role) = self.rows.iter_mut().find(|role| role.id == id) else {
            return false;
        };
        role.name = update.name.clone();
        role.description = update.description.clone();
        role.color = update.color.clone();
        role.permissions = update.permissions.clone();
        true
    }

    /// The stored count is maintained by hand, matching the original's
    /// no-enforcement design.
    pub fn set_user_count(&mut self, id: RoleId, user_count: i64) -> bool {
        let Some(role) = self.rows.iter_mut().find(|role| role.id == id) else {
            return false;
        };
        role.user_count = user_count;
        true
    }

    pub fn can_remove(&self, id: RoleId) -> bool {
        self.get(id).is_some_and(|role| role.user_count == 0)
    }

    /// Refuses while the role is still assigned (`user_count > 0`).
    pub fn remove(&mut self, id: RoleId) -> bool {
        if !self.can_remove(id) {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|role| role.id != id);
        self.rows.len() != before
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn dashboard_counts(
    branches: &BranchStore,
    products: &ProductStore,
    requests: &RequestStore,
    reviews: &ReviewStore,
) -> DashboardCounts {
    DashboardCounts {
        branches: branches.len(),
        products: products.len(),
        pending_requests: requests.count_with_status(RequestStatus::Pending),
        pending_reviews: reviews.count_with_status(ReviewStatus::Pending),
    }
}

fn alloc_id(next_id: &mut i64) -> i64 {
    // A Default-constructed store starts its counter at 0; bump it so
    // the first id is always 1.
    if *next_id <= 0 {
        *next_id = 1;
    }
    let id = *next_id;
    *next_id += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::{BranchStore, NewBranch, NewRole, RoleStore, UpdateBranch};
    use karat_app::BranchStatus;

    fn branch_input(name: &str) -> NewBranch {
        NewBranch {
            name: name.to_owned(),
            address: "1 St".to_owned(),
            city: "Pune".to_owned(),
            state: "MH".to_owned(),
            postal_code: "411001".to_owned(),
            phone: "+91 1".to_owned(),
            email: "a@b.com".to_owned(),
            hours: String::new(),
            status: BranchStatus::Active,
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = BranchStore::new();
        let first = store.create(&branch_input("A"));
        let second = store.create(&branch_input("B"));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn update_of_absent_id_is_a_noop() {
        let mut store = BranchStore::new();
        let id = store.create(&branch_input("A"));
        store.remove(id);

        let update = UpdateBranch {
            name: "Renamed".to_owned(),
            address: "1 St".to_owned(),
            city: "Pune".to_owned(),
            state: "MH".to_owned(),
            postal_code: "411001".to_owned(),
            phone: "+91 1".to_owned(),
            email: "a@b.com".to_owned(),
            hours: String::new(),
            status: BranchStatus::Active,
        };
        assert!(!store.update(id, &update));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = BranchStore::new();
        let first = store.create(&branch_input("A"));
        store.remove(first);
        let second = store.create(&branch_input("B"));
        assert_ne!(first, second);
    }

    #[test]
    fn default_store_allocates_from_one() {
        let mut store = BranchStore::default();
        let id = store.create(&branch_input("A"));
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn role_find_by_name() {
        let mut store = RoleStore::new();
        store.create(&NewRole {
            name: "Store Manager".to_owned(),
            description: String::new(),
            color: "#576C8D".to_owned(),
            permissions: vec!["products".to_owned()],
        });

        assert!(store.find_by_name("Store Manager").is_some());
        assert!(store.find_by_name("store manager").is_none());
    }
}
