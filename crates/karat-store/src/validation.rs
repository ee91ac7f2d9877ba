// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Field parsing and display formatting for the console's text inputs.
//! Numeric parsing is deliberately forgiving: unparseable weight or
//! price input becomes zero, which the form validator then rejects with
//! its own field message.

use time::Date;
use time::macros::format_description;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidDate,
    InvalidRating,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate => f.write_str("invalid date value"),
            Self::InvalidRating => f.write_str("rating must be between 1 and 5"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Weight input in grams. Empty or malformed text maps to zero.
pub fn parse_weight_input(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

/// Price input in whole rupees. Grouping commas and a leading rupee
/// sign are tolerated; anything else maps to zero.
pub fn parse_price_input(input: &str) -> i64 {
    let clean = input.trim().replace(',', "");
    let clean = clean.strip_prefix('₹').unwrap_or(&clean);
    if clean.is_empty() {
        return 0;
    }
    clean.parse::<i64>().unwrap_or(0)
}

pub fn parse_rating(input: &str) -> ValidationResult<u8> {
    let value = input
        .trim()
        .parse::<u8>()
        .map_err(|_| ValidationError::InvalidRating)?;
    if !(1..=5).contains(&value) {
        return Err(ValidationError::InvalidRating);
    }
    Ok(value)
}

pub fn parse_date(input: &str) -> ValidationResult<Date> {
    Date::parse(input.trim(), &format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDate)
}

pub fn format_date(value: Date) -> String {
    value
        .format(&format_description!("[year]-[month]-[day]"))
        .expect("date format is valid")
}

/// Indian digit grouping: the last three digits, then groups of two.
pub fn format_rupees(rupees: i64) -> String {
    let (sign, magnitude) = if rupees < 0 {
        ("-", rupees.unsigned_abs())
    } else {
        ("", rupees.unsigned_abs())
    };
    format!("{sign}₹{}", lakh_format(magnitude))
}

pub fn format_weight_grams(weight: f64) -> String {
    format!("{weight}g")
}

/// Review emails keep only the first character of the local part.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().expect("non-empty local part");
            format!("{first}***@{domain}")
        }
        _ => email.to_owned(),
    }
}

fn lakh_format(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
