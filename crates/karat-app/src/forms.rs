// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Branch, BranchStatus, MetalType, Product, ProductCategory, ProductCollection, ProductStatus,
    Purity, Role, User, UserStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Branch,
    Product,
    User,
    Role,
}

impl FormKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Product => "product",
            Self::User => "user",
            Self::Role => "role",
        }
    }
}

/// Field-level validation outcome. Every failing rule is collected so
/// the form overlay can render each message next to its field; an empty
/// map means the payload may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchFormInput {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFormInput {
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFormInput {
    pub name: String,
    pub description: String,
    pub color: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormPayload {
    Branch(BranchFormInput),
    Product(ProductFormInput),
    User(UserFormInput),
    Role(RoleFormInput),
}

impl FormPayload {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Branch(_) => FormKind::Branch,
            Self::Product(_) => FormKind::Product,
            Self::User(_) => FormKind::User,
            Self::Role(_) => FormKind::Role,
        }
    }

    pub fn blank_for(kind: FormKind) -> Self {
        match kind {
            FormKind::Branch => Self::Branch(BranchFormInput {
                name: String::new(),
                address: String::new(),
                city: String::new(),
                state: String::new(),
                postal_code: String::new(),
                phone: String::new(),
                email: String::new(),
                hours: "Mon-Sat: 10AM-8PM, Sun: Closed".to_owned(),
                status: BranchStatus::Active,
            }),
            FormKind::Product => Self::Product(ProductFormInput {
                name: String::new(),
                sku: String::new(),
                category: ProductCategory::Rings,
                collection: ProductCollection::Bridal,
                metal_type: MetalType::Gold,
                purity: Purity::TwentyTwoKarat,
                weight_grams: 0.0,
                price_rupees: 0,
                image: "assets/product-1.jpg".to_owned(),
                status: ProductStatus::Published,
            }),
            FormKind::User => Self::User(UserFormInput {
                first_name: String::new(),
                last_name: String::new(),
                email: String::new(),
                phone: String::new(),
                role: String::new(),
                status: UserStatus::Active,
            }),
            FormKind::Role => Self::Role(RoleFormInput {
                name: String::new(),
                description: String::new(),
                color: "#2F4156".to_owned(),
                permissions: Vec::new(),
            }),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        match self {
            Self::Branch(branch) => branch.validate(),
            Self::Product(product) => product.validate(),
            Self::User(user) => user.validate(),
            Self::Role(role) => role.validate(),
        }
    }
}

impl BranchFormInput {
    pub fn from_record(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            address: branch.address.clone(),
            city: branch.city.clone(),
            state: branch.state.clone(),
            postal_code: branch.postal_code.clone(),
            phone: branch.phone.clone(),
            email: branch.email.clone(),
            hours: branch.hours.clone(),
            status: branch.status,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Branch name is required");
        }
        if self.address.trim().is_empty() {
            errors.insert("address", "Address is required");
        }
        if self.city.trim().is_empty() {
            errors.insert("city", "City is required");
        }
        if self.state.trim().is_empty() {
            errors.insert("state", "State is required");
        }
        if self.postal_code.trim().is_empty() {
            errors.insert("postal_code", "Postal code is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email format");
        }
        errors
    }
}

impl ProductFormInput {
    pub fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category,
            collection: product.collection,
            metal_type: product.metal_type,
            purity: product.purity,
            weight_grams: product.weight_grams,
            price_rupees: product.price_rupees,
            image: product.image.clone(),
            status: product.status,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Product name is required");
        }
        if self.sku.trim().is_empty() {
            errors.insert("sku", "SKU is required");
        }
        if self.weight_grams <= 0.0 {
            errors.insert("weight", "Weight must be greater than 0");
        }
        if self.price_rupees <= 0 {
            errors.insert("price", "Price must be greater than 0");
        }
        errors
    }
}

impl UserFormInput {
    pub fn from_record(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.clone(),
            status: user.status,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.first_name.trim().is_empty() {
            errors.insert("first_name", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("last_name", "Last name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email format");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if self.role.trim().is_empty() {
            errors.insert("role", "Role is required");
        }
        errors
    }
}

impl RoleFormInput {
    pub fn from_record(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
            color: role.color.clone(),
            permissions: role.permissions.clone(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert("name", "Role name is required");
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required");
        }
        errors
    }
}

/// One-or-more non-whitespace, non-`@` characters, an `@`, then a
/// domain containing a dot with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}
