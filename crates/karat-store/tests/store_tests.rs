// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use karat_app::{BranchStatus, ProductStatus, RequestStatus, ReviewStatus, UserStatus};
use karat_store::filter::{ProductFilter, search_matches};
use karat_store::{
    BranchStore, NewBranch, NewProduct, NewRequest, NewReview, NewRole, NewUser, ProductStore,
    RequestStore, ReviewStore, RoleStore, UpdateProduct, UpdateRole, UpdateUser, UserStore, seed,
};
use karat_testkit::{ProductSeed, SampleData};
use time::macros::date;

fn new_product(seed: &ProductSeed) -> NewProduct {
    NewProduct {
        name: seed.name.clone(),
        sku: seed.sku.clone(),
        category: seed.category,
        collection: seed.collection,
        metal_type: seed.metal_type,
        purity: seed.purity,
        weight_grams: seed.weight_grams,
        price_rupees: seed.price_rupees,
        image: seed.image.clone(),
        status: seed.status,
    }
}

#[test]
fn create_branch_applies_active_default_and_generated_id() {
    let mut store = BranchStore::new();
    let id = store.create(&NewBranch {
        name: "Test".to_owned(),
        address: "1 St".to_owned(),
        city: "Pune".to_owned(),
        state: "MH".to_owned(),
        postal_code: "411001".to_owned(),
        phone: "+91 1".to_owned(),
        email: "a@b.com".to_owned(),
        hours: String::new(),
        status: BranchStatus::Active,
    });

    assert_eq!(store.len(), 1);
    let branch = store.get(id).expect("created branch should be present");
    assert_eq!(branch.status, BranchStatus::Active);
    assert_eq!(branch.id.get(), 1);
}

#[test]
fn remove_twice_is_equivalent_to_once() {
    let mut store = seed::branches();
    let id = store.list()[0].id;

    assert!(store.remove(id));
    let after_first = store.list().to_vec();
    assert!(!store.remove(id));
    assert_eq!(store.list(), &after_first[..]);
}

#[test]
fn ids_stay_unique_across_interleaved_mutations() {
    let mut data = SampleData::new(17);
    let mut store = ProductStore::new();
    let mut live = Vec::new();

    for round in 0..200 {
        match round % 4 {
            0 | 1 => {
                live.push(store.create(&new_product(&data.product())));
            }
            2 if !live.is_empty() => {
                let victim = live.remove(data.int_n(live.len()));
                assert!(store.remove(victim));
            }
            _ if !live.is_empty() => {
                let target = live[data.int_n(live.len())];
                let update = data.product();
                assert!(store.update(
                    target,
                    &UpdateProduct {
                        name: update.name.clone(),
                        sku: update.sku.clone(),
                        category: update.category,
                        collection: update.collection,
                        metal_type: update.metal_type,
                        purity: update.purity,
                        weight_grams: update.weight_grams,
                        price_rupees: update.price_rupees,
                        image: update.image.clone(),
                        status: update.status,
                    },
                ));
            }
            _ => {}
        }

        let mut ids: Vec<i64> = store.list().iter().map(|product| product.id.get()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len(), "duplicate id after round {round}");
    }
}

#[test]
fn filter_conjunction_law_over_generated_products() {
    let mut data = SampleData::new(23);
    let products: Vec<karat_app::Product> = {
        let mut store = ProductStore::new();
        for _ in 0..60 {
            store.create(&new_product(&data.product()));
        }
        store.list().to_vec()
    };

    for _ in 0..200 {
        let filter = ProductFilter {
            search: data.search_term(),
            category: data.optional_category(),
            status: data.optional_product_status(),
        };
        for product in &products {
            let expected = search_matches(&filter.search, &[&product.name, &product.sku])
                && filter.category.map_or(true, |category| product.category == category)
                && filter.status.map_or(true, |status| product.status == status);
            assert_eq!(
                filter.matches(product),
                expected,
                "filter {filter:?} on {}",
                product.sku
            );
        }
    }
}

#[test]
fn seeded_catalog_search_for_published_gold() {
    let store = seed::products();
    let filter = ProductFilter {
        search: "gold".to_owned(),
        category: None,
        status: Some(ProductStatus::Published),
    };

    let hits: Vec<&karat_app::Product> = filter.iter(store.list()).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Gold Chain Necklace");
}

#[test]
fn product_update_replaces_every_editable_field() {
    let mut store = seed::products();
    let id = store.list()[0].id;

    assert!(store.update(
        id,
        &UpdateProduct {
            name: "Diamond Engagement Ring".to_owned(),
            sku: "MJ-R-001".to_owned(),
            category: karat_app::ProductCategory::Rings,
            collection: karat_app::ProductCollection::Bridal,
            metal_type: karat_app::MetalType::Platinum,
            purity: karat_app::Purity::EighteenKarat,
            weight_grams: 5.4,
            price_rupees: 150_000,
            image: "assets/product-1.jpg".to_owned(),
            status: ProductStatus::OutOfStock,
        },
    ));

    let product = store.get(id).expect("updated product should be present");
    assert_eq!(product.metal_type, karat_app::MetalType::Platinum);
    assert_eq!(product.price_rupees, 150_000);
    assert_eq!(product.status, ProductStatus::OutOfStock);
    assert_eq!(product.id, id);
}

#[test]
fn user_edit_preserves_last_login() {
    let mut store = UserStore::new();
    let id = store.create_with_last_login(
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

    assert!(store.update(
        id,
        &UpdateUser {
            first_name: "Rajesh".to_owned(),
            last_name: "Kumar".to_owned(),
            email: "rajesh.kumar@meridianjewels.example".to_owned(),
            phone: "+91 98765 43211".to_owned(),
            role: "Product Manager".to_owned(),
            status: UserStatus::Inactive,
        },
    ));

    let user = store.get(id).expect("updated user should be present");
    assert_eq!(user.last_login, date!(2025 - 01 - 04));
    assert_eq!(user.role, "Product Manager");
    assert_eq!(user.status, UserStatus::Inactive);
}

#[test]
fn role_edit_preserves_user_count() {
    let mut store = RoleStore::new();
    let id = store.create(&NewRole {
        name: "Store Manager".to_owned(),
        description: "Manage products and branches".to_owned(),
        color: "#576C8D".to_owned(),
        permissions: vec!["products".to_owned()],
    });
    store.set_user_count(id, 3);

    assert!(store.update(
        id,
        &UpdateRole {
            name: "Branch Manager".to_owned(),
            description: "Manage branches".to_owned(),
            color: "#576C8D".to_owned(),
            permissions: vec!["branches".to_owned()],
        },
    ));

    let role = store.get(id).expect("updated role should be present");
    assert_eq!(role.user_count, 3);
    assert_eq!(role.name, "Branch Manager");
}

#[test]
fn role_with_assigned_users_cannot_be_removed() {
    let mut store = RoleStore::new();
    let id = store.create(&NewRole {
        name: "Product Manager".to_owned(),
        description: "Manage the catalog".to_owned(),
        color: "#C0D9E6".to_owned(),
        permissions: vec!["products".to_owned()],
    });
    store.set_user_count(id, 2);
    let before = store.list().to_vec();

    assert!(!store.can_remove(id));
    assert!(!store.remove(id));
    assert_eq!(store.list(), &before[..]);

    store.set_user_count(id, 0);
    assert!(store.remove(id));
    assert!(store.is_empty());
}

#[test]
fn role_rename_does_not_cascade_to_users() {
    let mut roles = seed::roles();
    let users = seed::users();
    let manager = roles
        .find_by_name("Store Manager")
        .expect("seeded role should exist")
        .id;

    roles.update(
        manager,
        &UpdateRole {
            name: "Retail Manager".to_owned(),
            description: "Manage products, branches, and customer requests".to_owned(),
            color: "#576C8D".to_owned(),
            permissions: vec!["branches".to_owned(), "products".to_owned()],
        },
    );

    // The user still carries the old label; the lookup now misses.
    let holder = users
        .list()
        .iter()
        .find(|user| user.role == "Store Manager")
        .expect("seeded user should still hold the old label")
        .id;
    assert!(roles.find_by_name("Store Manager").is_none());
    assert!(users.get(holder).is_some());
}

#[test]
fn request_status_moves_freely_in_any_direction() {
    let mut store = RequestStore::new();
    let id = store.create(&NewRequest {
        kind: karat_app::RequestKind::ServiceTicket,
        customer_name: "Rahul Patel".to_owned(),
        customer_email: "rahul@example.com".to_owned(),
        customer_phone: "+91 98765 43211".to_owned(),
        subject: "Ring Resizing Request".to_owned(),
        description: String::new(),
        submitted: date!(2025 - 01 - 04),
        priority: karat_app::RequestPriority::Medium,
    });

    for status in [
        RequestStatus::Completed,
        RequestStatus::Pending,
        RequestStatus::Rejected,
        RequestStatus::InProgress,
    ] {
        assert!(store.set_status(id, status));
        assert_eq!(
            store.get(id).expect("request should be present").status,
            status
        );
    }
}

#[test]
fn review_moderation_and_removal() {
    let mut store = ReviewStore::new();
    let id = store.create(&NewReview {
        customer_name: "Anjali Mehta".to_owned(),
        customer_email: "a***@example.com".to_owned(),
        product_name: "Diamond Engagement Ring".to_owned(),
        product_image: "assets/product-1.jpg".to_owned(),
        rating: 5,
        title: "Absolutely Stunning!".to_owned(),
        body: String::new(),
        date: date!(2025 - 01 - 05),
    });

    assert_eq!(
        store.get(id).expect("review should be present").status,
        ReviewStatus::Pending
    );
    assert!(store.set_status(id, ReviewStatus::Approved));
    assert!(store.remove(id));
    assert!(!store.set_status(id, ReviewStatus::Rejected));
}

#[test]
fn set_status_on_absent_request_is_a_noop() {
    let mut store = seed::requests();
    let missing = karat_app::RequestId::new(999);
    let before = store.list().to_vec();

    assert!(!store.set_status(missing, RequestStatus::Completed));
    assert_eq!(store.list(), &before[..]);
}

#[test]
fn generated_seeds_build_a_consistent_directory() {
    let mut data = SampleData::new(5);
    let mut roles = RoleStore::new();
    let mut users = UserStore::new();

    for _ in 0..5 {
        let role_seed = data.role();
        let role_id = roles.create(&NewRole {
            name: role_seed.name.clone(),
            description: role_seed.description.clone(),
            color: role_seed.color.clone(),
            permissions: role_seed.permissions.clone(),
        });
        let user_seed = data.user(&role_seed.name);
        users.create_with_last_login(
            &NewUser {
                first_name: user_seed.first_name.clone(),
                last_name: user_seed.last_name.clone(),
                email: user_seed.email.clone(),
                phone: user_seed.phone.clone(),
                role: user_seed.role.clone(),
                status: user_seed.status,
            },
            user_seed.last_login,
        );
        roles.set_user_count(role_id, 1);
    }

    assert_eq!(roles.len(), 5);
    for user in users.list() {
        assert!(roles.find_by_name(&user.role).is_some());
    }
}
