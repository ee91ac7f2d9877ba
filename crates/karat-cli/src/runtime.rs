// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use karat_app::{
    Branch, BranchId, DashboardCounts, DeleteKind, DeleteTarget, FormPayload, FormTarget, Product,
    ProductId, RequestId, RequestStatus, Review, ReviewId, ReviewStatus, Role, RoleId,
    ServiceRequest, User, UserId,
};
use karat_store::{
    BranchStore, NewBranch, NewProduct, NewRole, NewUser, ProductStore, RequestStore, ReviewStore,
    RoleStore, UpdateBranch, UpdateProduct, UpdateRole, UpdateUser, UserStore, dashboard_counts,
    seed,
};

/// Owns the six per-screen stores and adapts accepted form payloads to
/// store mutations. Everything lives and dies with the process.
pub struct StoreRuntime {
    branches: BranchStore,
    products: ProductStore,
    requests: RequestStore,
    reviews: ReviewStore,
    users: UserStore,
    roles: RoleStore,
}

impl StoreRuntime {
    pub fn seeded() -> Self {
        Self {
            branches: seed::branches(),
            products: seed::products(),
            requests: seed::requests(),
            reviews: seed::reviews(),
            users: seed::users(),
            roles: seed::roles(),
        }
    }

    pub fn empty() -> Self {
        Self {
            branches: BranchStore::new(),
            products: ProductStore::new(),
            requests: RequestStore::new(),
            reviews: ReviewStore::new(),
            users: UserStore::new(),
            roles: RoleStore::new(),
        }
    }

    fn apply_branch(&mut self, input: &karat_app::BranchFormInput, target: FormTarget) {
        match target {
            FormTarget::Create => {
                self.branches.create(&NewBranch {
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
            }
            FormTarget::Edit(id) => {
                self.branches.update(
                    BranchId::new(id),
                    &UpdateBranch {
                        name: input.name.clone(),
                        address: input.address.clone(),
                        city: input.city.clone(),
                        state: input.state.clone(),
                        postal_code: input.postal_code.clone(),
                        phone: input.phone.clone(),
                        email: input.email.clone(),
                        hours: input.hours.clone(),
                        status: input.status,
                    },
                );
            }
        }
    }

    fn apply_product(&mut self, input: &karat_app::ProductFormInput, target: FormTarget) {
        match target {
            FormTarget::Create => {
                self.products.create(&NewProduct {
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
            }
            FormTarget::Edit(id) => {
                self.products.update(
                    ProductId::new(id),
                    &UpdateProduct {
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
                    },
                );
            }
        }
    }

    fn apply_user(&mut self, input: &karat_app::UserFormInput, target: FormTarget) {
        match target {
            FormTarget::Create => {
                // last_login is stamped by the store at creation time.
                self.users.create(&NewUser {
                    first_name: input.first_name.clone(),
                    last_name: input.last_name.clone(),
                    email: input.email.clone(),
                    phone: input.phone.clone(),
                    role: input.role.clone(),
                    status: input.status,
                });
            }
            FormTarget::Edit(id) => {
                self.users.update(
                    UserId::new(id),
                    &UpdateUser {
                        first_name: input.first_name.clone(),
                        last_name: input.last_name.clone(),
                        email: input.email.clone(),
                        phone: input.phone.clone(),
                        role: input.role.clone(),
                        status: input.status,
                    },
                );
            }
        }
    }

    fn apply_role(&mut self, input: &karat_app::RoleFormInput, target: FormTarget) {
        match target {
            FormTarget::Create => {
                // user_count starts at zero for a brand-new role.
                self.roles.create(&NewRole {
                    name: input.name.clone(),
                    description: input.description.clone(),
                    color: input.color.clone(),
                    permissions: input.permissions.clone(),
                });
            }
            FormTarget::Edit(id) => {
                self.roles.update(
                    RoleId::new(id),
                    &UpdateRole {
                        name: input.name.clone(),
                        description: input.description.clone(),
                        color: input.color.clone(),
                        permissions: input.permissions.clone(),
                    },
                );
            }
        }
    }
}

impl karat_tui::AdminRuntime for StoreRuntime {
    fn dashboard_counts(&mut self) -> DashboardCounts {
        dashboard_counts(&self.branches, &self.products, &self.requests, &self.reviews)
    }

    fn list_branches(&mut self) -> Vec<Branch> {
        self.branches.list().to_vec()
    }

    fn list_products(&mut self) -> Vec<Product> {
        self.products.list().to_vec()
    }

    fn list_requests(&mut self) -> Vec<ServiceRequest> {
        self.requests.list().to_vec()
    }

    fn list_reviews(&mut self) -> Vec<Review> {
        self.reviews.list().to_vec()
    }

    fn list_users(&mut self) -> Vec<User> {
        self.users.list().to_vec()
    }

    fn list_roles(&mut self) -> Vec<Role> {
        self.roles.list().to_vec()
    }

    fn apply_form(&mut self, payload: &FormPayload, target: FormTarget) -> Result<()> {
        match payload {
            FormPayload::Branch(input) => self.apply_branch(input, target),
            FormPayload::Product(input) => self.apply_product(input, target),
            FormPayload::User(input) => self.apply_user(input, target),
            FormPayload::Role(input) => self.apply_role(input, target),
        }
        Ok(())
    }

    fn delete(&mut self, target: &DeleteTarget) -> Result<bool> {
        let removed = match target.kind {
            DeleteKind::Branch => self.branches.remove(BranchId::new(target.id)),
            DeleteKind::Product => self.products.remove(ProductId::new(target.id)),
            DeleteKind::Review => self.reviews.remove(ReviewId::new(target.id)),
            DeleteKind::User => self.users.remove(UserId::new(target.id)),
            DeleteKind::Role => self.roles.remove(RoleId::new(target.id)),
        };
        Ok(removed)
    }

    fn set_request_status(&mut self, id: RequestId, status: RequestStatus) -> Result<bool> {
        Ok(self.requests.set_status(id, status))
    }

    fn set_review_status(&mut self, id: ReviewId, status: ReviewStatus) -> Result<bool> {
        Ok(self.reviews.set_status(id, status))
    }

    fn send_customer_email(&mut self, _id: RequestId, _message: &str) -> Result<()> {
        // No delivery exists; the console only acknowledges the action.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::StoreRuntime;
    use anyhow::Result;
    use karat_app::{
        BranchFormInput, BranchStatus, DeleteKind, DeleteTarget, FormPayload, FormTarget,
        UserFormInput, UserStatus,
    };
    use karat_tui::AdminRuntime;

    fn branch_payload() -> FormPayload {
        FormPayload::Branch(BranchFormInput {
            name: "Test".to_owned(),
            address: "1 St".to_owned(),
            city: "Pune".to_owned(),
            state: "MH".to_owned(),
            postal_code: "411001".to_owned(),
            phone: "+91 1".to_owned(),
            email: "a@b.com".to_owned(),
            hours: String::new(),
            status: BranchStatus::Active,
        })
    }

    #[test]
    fn create_branch_payload_adds_a_row() -> Result<()> {
        let mut runtime = StoreRuntime::empty();
        runtime.apply_form(&branch_payload(), FormTarget::Create)?;

        let branches = runtime.list_branches();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].name, "Test");
        assert_eq!(branches[0].status, BranchStatus::Active);
        assert_eq!(branches[0].id.get(), 1);
        Ok(())
    }

    #[test]
    fn unchanged_edit_round_trips_and_keeps_protected_fields() -> Result<()> {
        let mut runtime = StoreRuntime::seeded();
        let before = runtime.list_users();
        let target = before[0].clone();

        let payload = FormPayload::User(UserFormInput::from_record(&target));
        runtime.apply_form(&payload, FormTarget::Edit(target.id.get()))?;

        let after = runtime.list_users();
        assert_eq!(before, after);
        assert_eq!(after[0].last_login, target.last_login);
        Ok(())
    }

    #[test]
    fn user_edit_cannot_touch_last_login() -> Result<()> {
        let mut runtime = StoreRuntime::seeded();
        let target = runtime.list_users()[0].clone();

        let payload = FormPayload::User(UserFormInput {
            status: UserStatus::Inactive,
            ..UserFormInput::from_record(&target)
        });
        runtime.apply_form(&payload, FormTarget::Edit(target.id.get()))?;

        let updated = &runtime.list_users()[0];
        assert_eq!(updated.status, UserStatus::Inactive);
        assert_eq!(updated.last_login, target.last_login);
        Ok(())
    }

    #[test]
    fn delete_routes_by_kind_and_respects_role_guard() -> Result<()> {
        let mut runtime = StoreRuntime::seeded();
        let branch = runtime.list_branches()[0].clone();
        let role = runtime.list_roles()[0].clone();

        let removed = runtime.delete(&DeleteTarget {
            kind: DeleteKind::Branch,
            id: branch.id.get(),
            label: branch.name,
        })?;
        assert!(removed);
        assert_eq!(runtime.list_branches().len(), 1);

        // Seeded roles all have assigned users; the store refuses.
        let removed = runtime.delete(&DeleteTarget {
            kind: DeleteKind::Role,
            id: role.id.get(),
            label: role.name,
        })?;
        assert!(!removed);
        assert_eq!(runtime.list_roles().len(), 3);
        Ok(())
    }

    #[test]
    fn edit_of_absent_id_leaves_stores_unchanged() -> Result<()> {
        let mut runtime = StoreRuntime::seeded();
        let before = runtime.list_branches();

        runtime.apply_form(&branch_payload(), FormTarget::Edit(999))?;
        assert_eq!(runtime.list_branches(), before);
        Ok(())
    }

    #[test]
    fn dashboard_counts_follow_mutations() -> Result<()> {
        let mut runtime = StoreRuntime::seeded();
        assert_eq!(runtime.dashboard_counts().branches, 2);

        runtime.apply_form(&branch_payload(), FormTarget::Create)?;
        assert_eq!(runtime.dashboard_counts().branches, 3);
        Ok(())
    }

    #[test]
    fn email_stub_is_fire_and_forget() -> Result<()> {
        let mut runtime = StoreRuntime::seeded();
        let id = runtime.list_requests()[0].id;
        runtime.send_customer_email(id, "We are on it")?;
        Ok(())
    }
}
