// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic sample-data generators for tests. The same seed always
//! yields the same sequence, so assertions stay reproducible without
//! pulling in an RNG crate.

use karat_app::{
    BranchStatus, MetalType, ProductCategory, ProductCollection, ProductStatus, Purity,
    RequestKind, RequestPriority, RequestStatus, ReviewStatus, UserStatus,
};
use time::{Date, Month};

const GEMSTONES: [&str; 8] = [
    "Diamond", "Ruby", "Emerald", "Sapphire", "Pearl", "Gold", "Platinum", "Opal",
];
const PIECES: [&str; 8] = [
    "Ring", "Necklace", "Earrings", "Bracelet", "Bangle", "Chain", "Pendant", "Brooch",
];
const COLLECTION_EPITHETS: [&str; 6] = [
    "Heritage", "Solitaire", "Royal", "Blossom", "Eternal", "Classic",
];

const FIRST_NAMES: [&str; 12] = [
    "Priya", "Rahul", "Anjali", "Vikram", "Rajesh", "Sneha", "Arjun", "Kavya", "Rohan", "Meera",
    "Aditya", "Isha",
];
const LAST_NAMES: [&str; 10] = [
    "Sharma", "Patel", "Mehta", "Singh", "Kumar", "Iyer", "Desai", "Reddy", "Kapoor", "Nair",
];

const CITIES: [&str; 8] = [
    "Mumbai",
    "Pune",
    "Delhi",
    "Bengaluru",
    "Chennai",
    "Hyderabad",
    "Jaipur",
    "Kolkata",
];
const STATES: [&str; 8] = [
    "Maharashtra",
    "Maharashtra",
    "Delhi",
    "Karnataka",
    "Tamil Nadu",
    "Telangana",
    "Rajasthan",
    "West Bengal",
];
const STREET_NAMES: [&str; 8] = [
    "Main Street",
    "Park Avenue",
    "MG Road",
    "Linking Road",
    "Brigade Road",
    "Anna Salai",
    "Jubilee Hills Road",
    "Camac Street",
];

const REQUEST_SUBJECTS: [&str; 8] = [
    "Custom Engagement Ring Design",
    "Ring Resizing Request",
    "Necklace Clasp Repair",
    "Stone Replacement Inquiry",
    "Bangle Polishing Service",
    "Custom Pendant Design",
    "Earring Back Replacement",
    "Chain Soldering Request",
];

const REVIEW_TITLES: [&str; 6] = [
    "Absolutely Stunning!",
    "Beautiful Quality",
    "Exceeded Expectations",
    "Elegant Craftsmanship",
    "Worth Every Rupee",
    "A Treasured Gift",
];
const REVIEW_BODIES: [&str; 6] = [
    "The craftsmanship is exceptional.",
    "Great quality gold chain. Worth the investment.",
    "The finish is flawless and delivery was prompt.",
    "Exactly as pictured, sits beautifully.",
    "The setting is secure and the sparkle is unreal.",
    "Bought it as a gift and it was adored.",
];

const SEARCH_FRAGMENTS: [&str; 8] = ["", "gold", "ring", "mj-", "dia", "pearl", "priya", "zzz"];

const PERMISSION_NAMES: [&str; 5] = ["branches", "products", "requests", "reviews", "users"];
const ROLE_COLORS: [&str; 4] = ["#2F4156", "#576C8D", "#C0D9E6", "#8D576C"];

const REFERENCE_YEAR: i32 = 2025;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSeed {
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
pub struct ProductSeed {
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
pub struct RequestSeed {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSeed {
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    pub product_image: String,
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub date: Date,
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: UserStatus,
    pub last_login: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSeed {
    pub name: String,
    pub description: String,
    pub color: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

#[derive(Debug, Clone)]
pub struct SampleData {
    rng: DeterministicRng,
    serial: u32,
}

impl SampleData {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(seed),
            serial: 0,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn branch(&mut self) -> BranchSeed {
        let city_index = self.rng.int_n(CITIES.len());
        let city = CITIES[city_index];
        let slug = city.to_lowercase();
        BranchSeed {
            name: format!("Meridian Jewellers - {city}"),
            address: format!(
                "{} {}",
                self.rng.int_n(900) + 100,
                self.pick(&STREET_NAMES)
            ),
            city: city.to_owned(),
            state: STATES[city_index].to_owned(),
            postal_code: format!("{:06}", 400_001 + self.rng.int_n(99_998)),
            phone: self.phone(),
            email: format!("{slug}@meridianjewels.example"),
            hours: "Mon-Sat: 10AM-8PM, Sun: Closed".to_owned(),
            status: if self.rng.bool() {
                BranchStatus::Active
            } else {
                BranchStatus::Inactive
            },
        }
    }

    pub fn product(&mut self) -> ProductSeed {
        let gem = self.pick(&GEMSTONES);
        let piece = self.pick(&PIECES);
        let category = match piece {
            "Ring" => ProductCategory::Rings,
            "Necklace" | "Pendant" => ProductCategory::Necklaces,
            "Earrings" => ProductCategory::Earrings,
            "Bracelet" => ProductCategory::Bracelets,
            "Bangle" => ProductCategory::Bangles,
            "Chain" => ProductCategory::Chains,
            _ => ProductCategory::Rings,
        };
        let serial = self.next_serial();
        ProductSeed {
            name: format!("{} {gem} {piece}", self.pick(&COLLECTION_EPITHETS)),
            sku: format!("MJ-{}-{serial:03}", &piece[..1]),
            category,
            collection: self.pick_enum(&ProductCollection::ALL),
            metal_type: self.pick_enum(&MetalType::ALL),
            purity: self.pick_enum(&Purity::ALL),
            weight_grams: (self.rng.int_n(400) + 10) as f64 / 10.0,
            price_rupees: ((self.rng.int_n(500) + 10) * 1_000) as i64,
            image: format!("assets/product-{}.jpg", self.rng.int_n(8) + 1),
            status: self.pick_enum(&ProductStatus::ALL),
        }
    }

    pub fn service_request(&mut self) -> RequestSeed {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        RequestSeed {
            kind: self.pick_enum(&RequestKind::ALL),
            customer_name: format!("{first} {last}"),
            customer_email: format!("{}@example.com", first.to_lowercase()),
            customer_phone: self.phone(),
            subject: self.pick(&REQUEST_SUBJECTS).to_owned(),
            description: self.pick(&REVIEW_BODIES).to_owned(),
            submitted: self.date_in_reference_year(),
            priority: self.pick_enum(&RequestPriority::ALL),
            status: self.pick_enum(&RequestStatus::ALL),
        }
    }

    pub fn review(&mut self) -> ReviewSeed {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let product = self.product();
        ReviewSeed {
            customer_name: format!("{first} {last}"),
            customer_email: format!(
                "{}***@example.com",
                &first.to_lowercase()[..1]
            ),
            product_name: product.name,
            product_image: product.image,
            rating: (self.rng.int_n(5) + 1) as u8,
            title: self.pick(&REVIEW_TITLES).to_owned(),
            body: self.pick(&REVIEW_BODIES).to_owned(),
            date: self.date_in_reference_year(),
            status: self.pick_enum(&ReviewStatus::ALL),
        }
    }

    pub fn user(&mut self, role: &str) -> UserSeed {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        UserSeed {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: format!(
                "{}.{}@meridianjewels.example",
                first.to_lowercase(),
                last.to_lowercase()
            ),
            phone: self.phone(),
            role: role.to_owned(),
            status: if self.rng.bool() {
                UserStatus::Active
            } else {
                UserStatus::Inactive
            },
            last_login: self.date_in_reference_year(),
        }
    }

    pub fn role(&mut self) -> RoleSeed {
        let serial = self.next_serial();
        let permission_count = self.rng.int_n(PERMISSION_NAMES.len()) + 1;
        let permissions = PERMISSION_NAMES[..permission_count]
            .iter()
            .map(|permission| (*permission).to_owned())
            .collect();
        RoleSeed {
            name: format!("{} Manager {serial}", self.pick(&COLLECTION_EPITHETS)),
            description: "Scoped console access".to_owned(),
            color: self.pick(&ROLE_COLORS).to_owned(),
            permissions,
        }
    }

    /// A search term for predicate tests: sometimes empty, sometimes a
    /// fragment that hits seeded data, sometimes one that misses.
    pub fn search_term(&mut self) -> String {
        self.pick(&SEARCH_FRAGMENTS).to_owned()
    }

    pub fn optional_category(&mut self) -> Option<ProductCategory> {
        if self.rng.bool() {
            return None;
        }
        Some(self.pick_enum(&ProductCategory::ALL))
    }

    pub fn optional_product_status(&mut self) -> Option<ProductStatus> {
        if self.rng.bool() {
            return None;
        }
        Some(self.pick_enum(&ProductStatus::ALL))
    }

    pub fn date_in_reference_year(&mut self) -> Date {
        let month = Month::try_from((self.rng.int_n(12) + 1) as u8).expect("month in 1..=12");
        let day = (self.rng.int_n(28) + 1) as u8;
        Date::from_calendar_date(REFERENCE_YEAR, month, day).expect("day in 1..=28 is valid")
    }

    fn phone(&mut self) -> String {
        format!(
            "+91 {:05} {:05}",
            self.rng.int_n(90_000) + 10_000,
            self.rng.int_n(90_000) + 10_000
        )
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn pick_enum<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.int_n(items.len())]
    }

    fn next_serial(&mut self) -> u32 {
        self.serial += 1;
        self.serial
    }
}
