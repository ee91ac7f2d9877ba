// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Filter predicate engine. Each screen combines one free-text search
//! term with zero or more categorical dimensions; `None` in a
//! categorical slot means "all". Active predicates AND together and the
//! filtered view is a lazy iterator, recomputed on every keystroke.

use karat_app::{
    Branch, Product, ProductCategory, ProductStatus, RequestKind, RequestStatus, Review,
    ReviewStatus, Role, ServiceRequest, User,
};

/// Case-insensitive substring match over a fixed set of fields. An
/// empty or whitespace-only term matches every record.
pub fn search_matches(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchFilter {
    pub search: String,
}

impl BranchFilter {
    pub fn matches(&self, branch: &Branch) -> bool {
        search_matches(&self.search, &[&branch.name, &branch.city])
    }

    pub fn is_restrictive(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn iter<'a>(&'a self, rows: &'a [Branch]) -> impl Iterator<Item = &'a Branch> + 'a {
        rows.iter().filter(move |branch| self.matches(branch))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<ProductCategory>,
    pub status: Option<ProductStatus>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        search_matches(&self.search, &[&product.name, &product.sku])
            && self.category.is_none_or(|category| product.category == category)
            && self.status.is_none_or(|status| product.status == status)
    }

    pub fn is_restrictive(&self) -> bool {
        !self.search.trim().is_empty() || self.category.is_some() || self.status.is_some()
    }

    pub fn iter<'a>(&'a self, rows: &'a [Product]) -> impl Iterator<Item = &'a Product> + 'a {
        rows.iter().filter(move |product| self.matches(product))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub search: String,
    pub kind: Option<RequestKind>,
    pub status: Option<RequestStatus>,
}

impl RequestFilter {
    pub fn matches(&self, request: &ServiceRequest) -> bool {
        search_matches(
            &self.search,
            &[
                &request.display_id(),
                &request.customer_name,
                &request.customer_email,
            ],
        ) && self.kind.is_none_or(|kind| request.kind == kind)
            && self.status.is_none_or(|status| request.status == status)
    }

    pub fn is_restrictive(&self) -> bool {
        !self.search.trim().is_empty() || self.kind.is_some() || self.status.is_some()
    }

    pub fn iter<'a>(
        &'a self,
        rows: &'a [ServiceRequest],
    ) -> impl Iterator<Item = &'a ServiceRequest> + 'a {
        rows.iter().filter(move |request| self.matches(request))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub search: String,
    pub status: Option<ReviewStatus>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        search_matches(&self.search, &[&review.customer_name, &review.product_name])
            && self.status.is_none_or(|status| review.status == status)
    }

    pub fn is_restrictive(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_some()
    }

    pub fn iter<'a>(&'a self, rows: &'a [Review]) -> impl Iterator<Item = &'a Review> + 'a {
        rows.iter().filter(move |review| self.matches(review))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        search_matches(&self.search, &[&user.full_name(), &user.email])
    }

    pub fn is_restrictive(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn iter<'a>(&'a self, rows: &'a [User]) -> impl Iterator<Item = &'a User> + 'a {
        rows.iter().filter(move |user| self.matches(user))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    pub search: String,
}

impl RoleFilter {
    pub fn matches(&self, role: &Role) -> bool {
        search_matches(&self.search, &[&role.name, &role.description])
    }

    pub fn is_restrictive(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn iter<'a>(&'a self, rows: &'a [Role]) -> impl Iterator<Item = &'a Role> + 'a {
        rows.iter().filter(move |role| self.matches(role))
    }
}

#[cfg(test)]
mod tests {
    use super::{BranchFilter, ProductFilter, RequestFilter, search_matches};
    use karat_app::{
        Branch, BranchId, BranchStatus, ProductCategory, ProductStatus, RequestKind,
        RequestPriority, RequestStatus, ServiceRequest,
    };
    use time::macros::date;

    fn branch(name: &str, city: &str) -> Branch {
        Branch {
            id: BranchId::new(1),
            name: name.to_owned(),
            address: "123 Main Street".to_owned(),
            city: city.to_owned(),
            state: "Maharashtra".to_owned(),
            postal_code: "400001".to_owned(),
            phone: "+91 22 1234 5678".to_owned(),
            email: "downtown@meridianjewels.example".to_owned(),
            hours: String::new(),
            status: BranchStatus::Active,
        }
    }

    fn request() -> ServiceRequest {
        ServiceRequest {
            id: karat_app::RequestId::new(1),
            kind: RequestKind::CustomDesign,
            customer_name: "Priya Sharma".to_owned(),
            customer_email: "priya@example.com".to_owned(),
            customer_phone: "+91 98765 43210".to_owned(),
            subject: "Custom Engagement Ring Design".to_owned(),
            description: String::new(),
            submitted: date!(2025 - 01 - 05),
            priority: RequestPriority::High,
            status: RequestStatus::Pending,
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(search_matches("", &["anything"]));
        assert!(search_matches("   ", &["anything"]));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(search_matches("GOLD", &["Gold Chain Necklace"]));
        assert!(search_matches("chain", &["Gold Chain Necklace"]));
        assert!(!search_matches("platinum", &["Gold Chain Necklace"]));
    }

    #[test]
    fn branch_filter_searches_name_and_city_only() {
        let filter = BranchFilter {
            search: "mumbai".to_owned(),
        };
        assert!(filter.matches(&branch("Downtown", "Mumbai")));
        assert!(!filter.matches(&branch("Downtown", "Pune")));

        // Address is not a searched field.
        let filter = BranchFilter {
            search: "main street".to_owned(),
        };
        assert!(!filter.matches(&branch("Downtown", "Mumbai")));
    }

    #[test]
    fn product_filter_ands_all_active_dimensions() {
        let product = karat_app::Product {
            id: karat_app::ProductId::new(2),
            name: "Gold Chain Necklace".to_owned(),
            sku: "MJ-N-002".to_owned(),
            category: ProductCategory::Necklaces,
            collection: karat_app::ProductCollection::Traditional,
            metal_type: karat_app::MetalType::Gold,
            purity: karat_app::Purity::TwentyTwoKarat,
            weight_grams: 18.5,
            price_rupees: 185_000,
            image: "assets/product-2.jpg".to_owned(),
            status: ProductStatus::Published,
        };

        let mut filter = ProductFilter {
            search: "gold".to_owned(),
            category: None,
            status: Some(ProductStatus::Published),
        };
        assert!(filter.matches(&product));

        filter.category = Some(ProductCategory::Rings);
        assert!(!filter.matches(&product));

        filter.category = Some(ProductCategory::Necklaces);
        filter.status = Some(ProductStatus::Draft);
        assert!(!filter.matches(&product));
    }

    #[test]
    fn request_filter_matches_display_id() {
        let filter = RequestFilter {
            search: "req-001".to_owned(),
            kind: None,
            status: None,
        };
        assert!(filter.matches(&request()));

        let filter = RequestFilter {
            search: "priya@".to_owned(),
            kind: Some(RequestKind::CustomDesign),
            status: Some(RequestStatus::Pending),
        };
        assert!(filter.matches(&request()));

        let filter = RequestFilter {
            search: String::new(),
            kind: Some(RequestKind::ServiceTicket),
            status: None,
        };
        assert!(!filter.matches(&request()));
    }

    #[test]
    fn restrictive_reflects_any_active_dimension() {
        assert!(!ProductFilter::default().is_restrictive());
        assert!(
            ProductFilter {
                status: Some(ProductStatus::Draft),
                ..ProductFilter::default()
            }
            .is_restrictive()
        );
        assert!(
            BranchFilter {
                search: "x".to_owned(),
            }
            .is_restrictive()
        );
    }

    #[test]
    fn filtered_iteration_preserves_insertion_order() {
        let rows = vec![branch("A", "Mumbai"), branch("B", "Pune"), branch("C", "Mumbai")];
        let filter = BranchFilter {
            search: "mumbai".to_owned(),
        };
        let names: Vec<&str> = filter.iter(&rows).map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
