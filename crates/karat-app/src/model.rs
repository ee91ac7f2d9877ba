// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchStatus {
    Active,
    Inactive,
}

impl BranchStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Published,
    Draft,
    OutOfStock,
}

impl ProductStatus {
    pub const ALL: [Self; 3] = [Self::Published, Self::Draft, Self::OutOfStock];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Published" => Some(Self::Published),
            "Draft" => Some(Self::Draft),
            "Out of Stock" => Some(Self::OutOfStock),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Rings,
    Necklaces,
    Earrings,
    Bracelets,
    Bangles,
    Chains,
}

impl ProductCategory {
    pub const ALL: [Self; 6] = [
        Self::Rings,
        Self::Necklaces,
        Self::Earrings,
        Self::Bracelets,
        Self::Bangles,
        Self::Chains,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rings => "Rings",
            Self::Necklaces => "Necklaces",
            Self::Earrings => "Earrings",
            Self::Bracelets => "Bracelets",
            Self::Bangles => "Bangles",
            Self::Chains => "Chains",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCollection {
    Bridal,
    Traditional,
    Modern,
    Custom,
    DailyWear,
}

impl ProductCollection {
    pub const ALL: [Self; 5] = [
        Self::Bridal,
        Self::Traditional,
        Self::Modern,
        Self::Custom,
        Self::DailyWear,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bridal => "Bridal",
            Self::Traditional => "Traditional",
            Self::Modern => "Modern",
            Self::Custom => "Custom",
            Self::DailyWear => "Daily Wear",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetalType {
    Gold,
    Diamond,
    Platinum,
    Silver,
}

impl MetalType {
    pub const ALL: [Self; 4] = [Self::Gold, Self::Diamond, Self::Platinum, Self::Silver];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Diamond => "Diamond",
            Self::Platinum => "Platinum",
            Self::Silver => "Silver",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purity {
    TwentyFourKarat,
    TwentyTwoKarat,
    EighteenKarat,
    FourteenKarat,
    SterlingSilver,
}

impl Purity {
    pub const ALL: [Self; 5] = [
        Self::TwentyFourKarat,
        Self::TwentyTwoKarat,
        Self::EighteenKarat,
        Self::FourteenKarat,
        Self::SterlingSilver,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwentyFourKarat => "24K",
            Self::TwentyTwoKarat => "22K",
            Self::EighteenKarat => "18K",
            Self::FourteenKarat => "14K",
            Self::SterlingSilver => "925 Sterling",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    ServiceTicket,
    CustomDesign,
}

impl RequestKind {
    pub const ALL: [Self; 2] = [Self::ServiceTicket, Self::CustomDesign];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServiceTicket => "Service Ticket",
            Self::CustomDesign => "Custom Design",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Service Ticket" => Some(Self::ServiceTicket),
            "Custom Design" => Some(Self::CustomDesign),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestPriority {
    High,
    Medium,
    Low,
}

impl RequestPriority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Request statuses are an open set of moves: any status may follow any
/// other, including Completed back to Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    InProgress,
    Completed,
}

impl RequestStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Accepted,
        Self::Rejected,
        Self::InProgress,
        Self::Completed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Dashboard,
    Showcase,
    Branches,
    Products,
    Requests,
    Reviews,
    Users,
    Roles,
}

impl TabKind {
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Showcase,
        Self::Branches,
        Self::Products,
        Self::Requests,
        Self::Reviews,
        Self::Users,
        Self::Roles,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Showcase => "showcase",
            Self::Branches => "branches",
            Self::Products => "products",
            Self::Requests => "requests",
            Self::Reviews => "reviews",
            Self::Users => "users",
            Self::Roles => "roles",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: BranchId,
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
pub struct Product {
    pub id: ProductId,
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
pub struct ServiceRequest {
    pub id: RequestId,
    pub kind: RequestKind,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub subject: String,
    pub description: String,
    pub submitted: Date,
    pub priority: RequestPriority,
    pub status: RequestStatus,
}

impl ServiceRequest {
    /// Ticket identifier as shown everywhere in the console.
    pub fn display_id(&self) -> String {
        format!("REQ-{:03}", self.id.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub customer_name: String,
    /// Already masked upstream (for example `a***@example.com`); treated
    /// as an opaque display string.
    pub customer_email: String,
    pub product_name: String,
    pub product_image: String,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub date: Date,
    pub status: ReviewStatus,
}

impl Review {
    pub fn display_id(&self) -> String {
        format!("REV-{:03}", self.id.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Soft reference to `Role.name`; renames and deletions do not
    /// cascade here.
    pub role: String,
    pub status: UserStatus,
    pub last_login: Date,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
    pub color: String,
    /// Stored count, not recomputed from the user set. Non-zero blocks
    /// deletion.
    pub user_count: i64,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardCounts {
    pub branches: usize,
    pub products: usize,
    pub pending_requests: usize,
    pub pending_reviews: usize,
}
