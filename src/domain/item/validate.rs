//! Create/update validation for item payloads.
//!
//! Checks never stop at the first failure: every violated constraint is
//! recorded so the client can fix the whole payload in one round trip.

use super::error::{ItemError, ItemResult, ValidationErrors};
use super::model::{ItemChanges, ItemFields, NewItem};
use crate::domain::predicates::{
    as_flag, as_non_negative_float, as_non_negative_int, is_negative_number, is_valid_email,
    is_valid_identifier, is_valid_string, is_valid_url,
};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

pub const TITLE_MAX_CHARS: usize = 30;
pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const URL_MAX_CHARS: usize = 200;
pub const RESTAURANT_MAX_CHARS: usize = 50;

/// How restaurant references are checked.
///
/// `Email` reproduces the old behaviour where restaurant ids were validated
/// with the user-email rule; it is only kept for deployments whose existing
/// rows use email-shaped restaurant ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestaurantIdRule {
    #[default]
    Identifier,
    Email,
}

impl RestaurantIdRule {
    pub fn accepts(&self, rest_id: &str) -> bool {
        match self {
            RestaurantIdRule::Identifier => is_valid_identifier(rest_id),
            RestaurantIdRule::Email => is_valid_email(rest_id),
        }
    }
}

impl fmt::Display for RestaurantIdRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestaurantIdRule::Identifier => write!(f, "identifier"),
            RestaurantIdRule::Email => write!(f, "email"),
        }
    }
}

impl FromStr for RestaurantIdRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identifier" => Ok(RestaurantIdRule::Identifier),
            "email" => Ok(RestaurantIdRule::Email),
            other => Err(format!(
                "unknown restaurant id rule '{}' (expected 'identifier' or 'email')",
                other
            )),
        }
    }
}

/// Returns the value unless it counts as "not supplied": missing, `null` or `""`.
pub fn supplied(field: &Option<JsonValue>) -> Option<&JsonValue> {
    match field {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) if s.is_empty() => None,
        Some(v) => Some(v),
    }
}

/// Parses an item identifier given as a JSON number or a numeric string.
pub fn parse_item_id(value: &JsonValue) -> ItemResult<i32> {
    as_non_negative_int(value)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ItemError::InvalidId)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ItemValidator {
    restaurant_rule: RestaurantIdRule,
}

impl ItemValidator {
    pub fn new(restaurant_rule: RestaurantIdRule) -> Self {
        Self { restaurant_rule }
    }

    pub fn restaurant_rule(&self) -> RestaurantIdRule {
        self.restaurant_rule
    }

    /// Checks a creation payload: every field except `visible` is required.
    pub fn check_creation(&self, fields: &ItemFields) -> Result<NewItem, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = match supplied(&fields.title) {
            Some(v) => check_title(&mut errors, v),
            None => {
                errors.push("No title provided for item");
                None
            }
        };
        let description = match supplied(&fields.desc) {
            Some(v) => check_description(&mut errors, v),
            None => {
                errors.push("No description provided for item");
                None
            }
        };
        let price = match supplied(&fields.price) {
            Some(v) => check_price(&mut errors, v),
            None => {
                errors.push("No price provided for item");
                None
            }
        };
        let url = match supplied(&fields.url) {
            Some(v) => check_url(&mut errors, v),
            None => {
                errors.push("No image URL provided for item");
                None
            }
        };
        let rest_id = match supplied(&fields.rest_id) {
            Some(v) => self.check_restaurant(&mut errors, v),
            None => {
                errors.push("No restaurant provided for item");
                None
            }
        };
        let cat_id = match supplied(&fields.cat_id) {
            Some(v) => check_category(&mut errors, v),
            None => {
                errors.push("No category ID provided for item");
                None
            }
        };
        let visible = supplied(&fields.visible)
            .map(|v| check_visible(&mut errors, v))
            .unwrap_or(Some(false));

        match (title, description, price, url, rest_id, cat_id, visible) {
            (
                Some(title),
                Some(description),
                Some(price),
                Some(url),
                Some(rest_id),
                Some(cat_id),
                Some(visible),
            ) if errors.is_empty() => Ok(NewItem {
                title,
                description,
                price,
                visible,
                rest_id,
                url,
                cat_id,
            }),
            _ => Err(errors),
        }
    }

    /// Checks an update payload: only supplied fields are checked, at least one is required.
    pub fn check_update(&self, fields: &ItemFields) -> Result<ItemChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut changes = ItemChanges::default();

        if let Some(v) = supplied(&fields.title) {
            changes.title = check_title(&mut errors, v);
        }
        if let Some(v) = supplied(&fields.desc) {
            changes.description = check_description(&mut errors, v);
        }
        if let Some(v) = supplied(&fields.price) {
            changes.price = check_price(&mut errors, v);
        }
        if let Some(v) = supplied(&fields.url) {
            changes.url = check_url(&mut errors, v);
        }
        if let Some(v) = supplied(&fields.rest_id) {
            changes.rest_id = self.check_restaurant(&mut errors, v);
        }
        if let Some(v) = supplied(&fields.cat_id) {
            changes.cat_id = check_category(&mut errors, v);
        }
        if let Some(v) = supplied(&fields.visible) {
            changes.visible = check_visible(&mut errors, v);
        }

        if errors.is_empty() && changes.is_empty() {
            errors.push("No fields provided for update");
        }

        errors.into_result(changes)
    }

    /// Used for restaurant-scoped listings, where no length message is needed.
    pub fn is_valid_restaurant(&self, rest_id: &str) -> bool {
        rest_id.chars().count() <= RESTAURANT_MAX_CHARS && self.restaurant_rule.accepts(rest_id)
    }

    fn check_restaurant(&self, errors: &mut ValidationErrors, v: &JsonValue) -> Option<String> {
        // Numeric restaurant ids are stored as text.
        let rest_id = match v {
            JsonValue::String(s) => s.clone(),
            JsonValue::Number(n) if n.is_u64() => n.to_string(),
            _ => {
                errors.push("Restaurant is not valid");
                return None;
            }
        };

        let mut ok = true;
        if rest_id.chars().count() > RESTAURANT_MAX_CHARS {
            errors.push("Restaurant exceeds the limit of 50 chars");
            ok = false;
        }
        if !self.restaurant_rule.accepts(&rest_id) {
            errors.push("Restaurant is not valid");
            ok = false;
        }
        ok.then_some(rest_id)
    }
}

fn check_title(errors: &mut ValidationErrors, v: &JsonValue) -> Option<String> {
    check_text(
        errors,
        v,
        TITLE_MAX_CHARS,
        is_valid_string,
        "Title exceeds the limit of 30 chars",
        "Title is not valid",
    )
}

fn check_description(errors: &mut ValidationErrors, v: &JsonValue) -> Option<String> {
    check_text(
        errors,
        v,
        DESCRIPTION_MAX_CHARS,
        is_valid_string,
        "Description exceeds the limit of 200 chars",
        "Description contents are not valid",
    )
}

fn check_url(errors: &mut ValidationErrors, v: &JsonValue) -> Option<String> {
    check_text(
        errors,
        v,
        URL_MAX_CHARS,
        is_valid_url,
        "Image URL exceeds the limit of 200 chars",
        "URL is not valid",
    )
}

fn check_text(
    errors: &mut ValidationErrors,
    v: &JsonValue,
    max_chars: usize,
    is_valid: fn(&str) -> bool,
    too_long: &str,
    invalid: &str,
) -> Option<String> {
    let Some(s) = v.as_str() else {
        errors.push(invalid);
        return None;
    };

    let mut ok = true;
    if s.chars().count() > max_chars {
        errors.push(too_long);
        ok = false;
    }
    if !is_valid(s) {
        errors.push(invalid);
        ok = false;
    }
    ok.then(|| s.to_string())
}

fn check_price(errors: &mut ValidationErrors, v: &JsonValue) -> Option<f64> {
    if is_negative_number(v) {
        errors.push("Item price is a negative number");
    }
    let price = as_non_negative_float(v);
    if price.is_none() {
        errors.push("Price is not valid");
    }
    price
}

fn check_category(errors: &mut ValidationErrors, v: &JsonValue) -> Option<i32> {
    if is_negative_number(v) {
        errors.push("Category ID is a negative number");
    }
    let cat_id = as_non_negative_int(v).and_then(|n| i32::try_from(n).ok());
    if cat_id.is_none() {
        errors.push("Category is not valid");
    }
    cat_id
}

fn check_visible(errors: &mut ValidationErrors, v: &JsonValue) -> Option<bool> {
    let visible = as_flag(v);
    if visible.is_none() {
        errors.push("Visibility flag is not valid");
    }
    visible
}
