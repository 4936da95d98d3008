//! Form Validation
//!
//! The add/edit form keeps every field as free text. Validation runs all
//! rules independently and reports at most one message per field.

use std::collections::BTreeMap;

use reqwest::Url;

use crate::domain::{parse_number, FoodDraft, FoodItem, FoodPatch, FoodStatus};

pub const NAME_REQUIRED: &str = "name is required";
pub const RATING_INVALID: &str = "rating must be a number";
pub const IMAGE_REQUIRED: &str = "image URL is required";
pub const STATUS_INVALID: &str = "status must be one of the two enumerated values";
pub const PRICE_INVALID: &str = "price must be a number";

const RATING_MIN: f64 = 1.0;
const RATING_MAX: f64 = 5.0;

/// Editable fields of the food form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Rating,
    Image,
    Status,
    Price,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Rating,
        FormField::Image,
        FormField::Status,
        FormField::Price,
    ];

    /// Stable identifier used for element ids and test hooks
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "food_name",
            FormField::Rating => "food_rating",
            FormField::Image => "food_image",
            FormField::Status => "food_status",
            FormField::Price => "food_price",
        }
    }
}

/// Raw form values, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodForm {
    pub name: String,
    pub rating: String,
    pub image: String,
    pub status: String,
    pub price: String,
}

impl Default for FoodForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            rating: String::new(),
            image: String::new(),
            status: FoodStatus::OPEN_NOW.to_string(),
            price: String::new(),
        }
    }
}

impl FoodForm {
    /// Initial values for editing an existing record
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            name: item.name.clone(),
            rating: item.rating.to_string(),
            image: item.image.clone(),
            status: item.status.as_str().to_string(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Rating => &self.rating,
            FormField::Image => &self.image,
            FormField::Status => &self.status,
            FormField::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Rating => self.rating = value,
            FormField::Image => self.image = value,
            FormField::Status => self.status = value,
            FormField::Price => self.price = value,
        }
    }

    pub fn validate(&self) -> FormErrors {
        validate(self)
    }

    /// Validate and build a create payload
    pub fn to_draft(&self) -> Result<FoodDraft, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        // Rules above guarantee the parses succeed
        let rating = parse_number(&self.rating).unwrap_or_default();
        let status = FoodStatus::parse(&self.status).unwrap_or_default();
        let price = if self.price.is_empty() {
            None
        } else {
            parse_number(&self.price)
        };

        Ok(FoodDraft {
            name: self.name.trim().to_string(),
            rating,
            image: self.image.trim().to_string(),
            status,
            price,
            created_at: None,
        })
    }

    /// Validate and build an update payload carrying every form field
    pub fn to_patch(&self) -> Result<FoodPatch, FormErrors> {
        self.to_draft().map(FoodPatch::from)
    }
}

/// Per-field error messages; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str).filter(|m| !m.is_empty())
    }

    pub fn has(&self, field: FormField) -> bool {
        self.get(field).is_some()
    }

    /// True when no field carries a message
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|m| m.is_empty())
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// Drop a field's error; returns whether one was present
    pub fn clear(&mut self, field: FormField) -> bool {
        self.fields.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }
}

/// Absolute URL with an http or https scheme
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Run every rule against the form
pub fn validate(form: &FoodForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }

    let rating_ok = !form.rating.is_empty()
        && parse_number(&form.rating).is_some_and(|r| (RATING_MIN..=RATING_MAX).contains(&r));
    if !rating_ok {
        errors.insert(FormField::Rating, RATING_INVALID);
    }

    let image = form.image.trim();
    if image.is_empty() || !is_valid_url(image) {
        errors.insert(FormField::Image, IMAGE_REQUIRED);
    }

    if FoodStatus::parse(&form.status).is_none() {
        errors.insert(FormField::Status, STATUS_INVALID);
    }

    if !form.price.is_empty() && parse_number(&form.price).is_none() {
        errors.insert(FormField::Price, PRICE_INVALID);
    }

    errors
}

/// Form values plus their current errors.
///
/// Errors are recomputed on submit and cleared per field as soon as that
/// field is edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: FoodForm,
    errors: FormErrors,
}

impl FormState {
    pub fn new(values: FoodForm) -> Self {
        Self {
            values,
            errors: FormErrors::default(),
        }
    }

    pub fn values(&self) -> &FoodForm {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        if self.values.get(field) == value {
            return;
        }
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Recompute all errors; returns the values when the form is acceptable
    pub fn submit(&mut self) -> Option<&FoodForm> {
        self.errors = self.values.validate();
        if self.errors.is_empty() {
            Some(&self.values)
        } else {
            None
        }
    }

    /// Replace errors wholesale, e.g. from a rejected submission
    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub fn reset(&mut self, values: FoodForm) {
        *self = Self::new(values);
    }
}
