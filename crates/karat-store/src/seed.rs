// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Demo data seeded at startup. The console is backed entirely by
//! in-memory mock data; everything here resets on relaunch.

use karat_app::{
    BranchStatus, MetalType, ProductCategory, ProductCollection, ProductStatus, Purity,
    RequestKind, RequestPriority, RequestStatus, ReviewStatus, UserStatus,
};
use time::macros::date;

use crate::validation::mask_email;
use crate::{
    BranchStore, NewBranch, NewProduct, NewRequest, NewReview, NewRole, NewUser, ProductStore,
    RequestStore, ReviewStore, RoleStore, UserStore,
};

pub const BRAND_NAME: &str = "Meridian Jewellers";

pub fn branches() -> BranchStore {
    let mut store = BranchStore::new();
    store.create(&NewBranch {
        name: format!("{BRAND_NAME} - Downtown"),
        address: "123 Main Street".to_owned(),
        city: "Mumbai".to_owned(),
        state: "Maharashtra".to_owned(),
        postal_code: "400001".to_owned(),
        phone: "+91 22 1234 5678".to_owned(),
        email: "downtown@meridianjewels.example".to_owned(),
        hours: "Mon-Sat: 10AM-8PM, Sun: 11AM-6PM".to_owned(),
        status: BranchStatus::Active,
    });
    store.create(&NewBranch {
        name: format!("{BRAND_NAME} - Westside"),
        address: "456 Park Avenue".to_owned(),
        city: "Mumbai".to_owned(),
        state: "Maharashtra".to_owned(),
        postal_code: "400002".to_owned(),
        phone: "+91 22 2345 6789".to_owned(),
        email: "westside@meridianjewels.example".to_owned(),
        hours: "Mon-Sat: 10AM-8PM, Sun: Closed".to_owned(),
        status: BranchStatus::Active,
    });
    store
}

pub fn products() -> ProductStore {
    let mut store = ProductStore::new();
    store.create(&NewProduct {
        name: "Diamond Engagement Ring".to_owned(),
        sku: "MJ-R-001".to_owned(),
        category: ProductCategory::Rings,
        collection: ProductCollection::Bridal,
        metal_type: MetalType::Gold,
        purity: Purity::EighteenKarat,
        weight_grams: 5.2,
        price_rupees: 125_000,
        image: "assets/product-1.jpg".to_owned(),
        status: ProductStatus::Published,
    });
    store.create(&NewProduct {
        name: "Gold Chain Necklace".to_owned(),
        sku: "MJ-N-002".to_owned(),
        category: ProductCategory::Necklaces,
        collection: ProductCollection::Traditional,
        metal_type: MetalType::Gold,
        purity: Purity::TwentyTwoKarat,
        weight_grams: 18.5,
        price_rupees: 185_000,
        image: "assets/product-2.jpg".to_owned(),
        status: ProductStatus::Published,
    });
    store
}

pub fn requests() -> RequestStore {
    let mut store = RequestStore::new();
    store.create(&NewRequest {
        kind: RequestKind::CustomDesign,
        customer_name: "Priya Sharma".to_owned(),
        customer_email: "priya@example.com".to_owned(),
        customer_phone: "+91 98765 43210".to_owned(),
        subject: "Custom Engagement Ring Design".to_owned(),
        description: "Looking for a custom platinum engagement ring with a 2-carat diamond. \
                      Prefer vintage design."
            .to_owned(),
        submitted: date!(2025 - 01 - 05),
        priority: RequestPriority::High,
    });
    let accepted = store.create(&NewRequest {
        kind: RequestKind::ServiceTicket,
        customer_name: "Rahul Patel".to_owned(),
        customer_email: "rahul@example.com".to_owned(),
        customer_phone: "+91 98765 43211".to_owned(),
        subject: "Ring Resizing Request".to_owned(),
        description: "Need to resize my wedding ring from size 7 to size 6.5".to_owned(),
        submitted: date!(2025 - 01 - 04),
        priority: RequestPriority::Medium,
    });
    store.set_status(accepted, RequestStatus::Accepted);
    store
}

pub fn reviews() -> ReviewStore {
    let mut store = ReviewStore::new();
    store.create(&NewReview {
        customer_name: "Anjali Mehta".to_owned(),
        customer_email: mask_email("anjali@example.com"),
        product_name: "Diamond Engagement Ring".to_owned(),
        product_image: "assets/product-1.jpg".to_owned(),
        rating: 5,
        title: "Absolutely Stunning!".to_owned(),
        body: "The craftsmanship is exceptional. My fiancée loves it!".to_owned(),
        date: date!(2025 - 01 - 05),
    });
    let approved = store.create(&NewReview {
        customer_name: "Vikram Singh".to_owned(),
        customer_email: mask_email("vikram@example.com"),
        product_name: "Gold Chain Necklace".to_owned(),
        product_image: "assets/product-2.jpg".to_owned(),
        rating: 4,
        title: "Beautiful Quality".to_owned(),
        body: "Great quality gold chain. Worth the investment.".to_owned(),
        date: date!(2025 - 01 - 04),
    });
    store.set_status(approved, ReviewStatus::Approved);
    store
}

pub fn users() -> UserStore {
    let mut store = UserStore::new();
    store.create_with_last_login(
        &NewUser {
            first_name: "Admin".to_owned(),
            last_name: "User".to_owned(),
            email: "admin@meridianjewels.example".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            role: "Super Admin".to_owned(),
            status: UserStatus::Active,
        },
        date!(2025 - 01 - 05),
    );
    store.create_with_last_login(
        &NewUser {
            first_name: "Rajesh".to_owned(),
            last_name: "Kumar".to_owned(),
            email: "rajesh@meridianjewels.example".to_owned(),
            phone: "+91 98765 43211".to_owned(),
            role: "Store Manager".to_owned(),
            status: UserStatus::Active,
        },
        date!(2025 - 01 - 04),
    );
    store
}

pub fn roles() -> RoleStore {
    let mut store = RoleStore::new();
    let super_admin = store.create(&NewRole {
        name: "Super Admin".to_owned(),
        description: "Full access to all features".to_owned(),
        color: "#2F4156".to_owned(),
        permissions: vec!["all".to_owned()],
    });
    let store_manager = store.create(&NewRole {
        name: "Store Manager".to_owned(),
        description: "Manage products, branches, and customer requests".to_owned(),
        color: "#576C8D".to_owned(),
        permissions: vec![
            "branches".to_owned(),
            "products".to_owned(),
            "requests".to_owned(),
            "reviews".to_owned(),
        ],
    });
    let product_manager = store.create(&NewRole {
        name: "Product Manager".to_owned(),
        description: "Manage product catalog and reviews".to_owned(),
        color: "#C0D9E6".to_owned(),
        permissions: vec!["products".to_owned(), "reviews".to_owned()],
    });
    store.set_user_count(super_admin, 1);
    store.set_user_count(store_manager, 3);
    store.set_user_count(product_manager, 2);
    store
}

#[cfg(test)]
mod tests {
    use super::{branches, products, requests, reviews, roles, users};
    use crate::dashboard_counts;
    use karat_app::{ProductStatus, RequestStatus, ReviewStatus};

    #[test]
    fn seeded_stores_have_demo_rows() {
        assert_eq!(branches().len(), 2);
        assert_eq!(products().len(), 2);
        assert_eq!(requests().len(), 2);
        assert_eq!(reviews().len(), 2);
        assert_eq!(users().len(), 2);
        assert_eq!(roles().len(), 3);
    }

    #[test]
    fn seeded_products_are_published() {
        assert!(
            products()
                .list()
                .iter()
                .all(|product| product.status == ProductStatus::Published)
        );
    }

    #[test]
    fn seeded_requests_carry_one_pending_and_one_accepted() {
        let store = requests();
        assert_eq!(store.count_with_status(RequestStatus::Pending), 1);
        assert_eq!(store.count_with_status(RequestStatus::Accepted), 1);
        assert_eq!(store.list()[0].display_id(), "REQ-001");
    }

    #[test]
    fn seeded_review_emails_are_masked() {
        assert!(
            reviews()
                .list()
                .iter()
                .all(|review| review.customer_email.contains("***@"))
        );
    }

    #[test]
    fn seeded_users_reference_seeded_role_names() {
        let roles = roles();
        for user in users().list() {
            assert!(
                roles.find_by_name(&user.role).is_some(),
                "missing role {}",
                user.role
            );
        }
    }

    #[test]
    fn seeded_role_counts_block_deletion() {
        let store = roles();
        assert!(store.list().iter().all(|role| role.user_count > 0));
        assert!(!store.can_remove(store.list()[0].id));
    }

    #[test]
    fn dashboard_counts_reflect_seeded_stores() {
        let counts = dashboard_counts(&branches(), &products(), &requests(), &reviews());
        assert_eq!(counts.branches, 2);
        assert_eq!(counts.products, 2);
        assert_eq!(counts.pending_requests, 1);
        assert_eq!(counts.pending_reviews, 1);
    }
}
