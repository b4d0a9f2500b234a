use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, OnceLock};

use crate::catalog::Catalog;
use super::commands::{DeliveryDayInput, SubmitOrder};
use super::errors::{ValidationError, ValidationErrors};
use super::value_objects::{DeliveryDay, SelectedItem};

// ============================================================================
// Order Validator
// ============================================================================
//
// Runs once, at the submission boundary. Intermediate wizard states on the
// client may be incomplete; only the final candidate is checked here. All
// violations are collected so the client can show every problem at once.
//
// ============================================================================

pub const MIN_PEOPLE_PER_DAY: u32 = 1;
pub const MAX_PEOPLE_PER_DAY: u32 = 500;
pub const DEFAULT_MAX_DELIVERY_DAYS: usize = 7;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern must compile")
    })
}

pub fn is_valid_email(candidate: &str) -> bool {
    !candidate.contains("..") && email_pattern().is_match(candidate)
}

/// Candidate order that passed every rule, rebuilt from server-side data.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub delivery_days: Vec<DeliveryDay>,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLimits {
    pub max_delivery_days: usize,
}

impl Default for OrderLimits {
    fn default() -> Self {
        Self {
            max_delivery_days: DEFAULT_MAX_DELIVERY_DAYS,
        }
    }
}

pub struct OrderValidator {
    catalog: Arc<Catalog>,
    limits: OrderLimits,
}

impl OrderValidator {
    pub fn new(catalog: Arc<Catalog>, limits: OrderLimits) -> Self {
        Self { catalog, limits }
    }

    pub fn validate(&self, candidate: &SubmitOrder) -> Result<ValidatedOrder, ValidationErrors> {
        let mut errors = Vec::new();

        let customer_name = required_text("customerName", candidate.customer_name.as_deref(), &mut errors);
        let customer_phone = required_text("customerPhone", candidate.customer_phone.as_deref(), &mut errors);

        let customer_email = candidate.customer_email.as_deref().unwrap_or_default().trim().to_string();
        if !is_valid_email(&customer_email) {
            errors.push(ValidationError::InvalidEmail {
                field: "customerEmail".to_string(),
            });
        }

        let day_count = candidate.delivery_days.len();
        if day_count == 0 {
            errors.push(ValidationError::NoDeliveryDays {
                field: "deliveryDays".to_string(),
            });
        } else if day_count > self.limits.max_delivery_days {
            errors.push(ValidationError::TooManyDeliveryDays {
                field: "deliveryDays".to_string(),
                max: self.limits.max_delivery_days,
                count: day_count,
            });
        }

        let delivery_days: Vec<DeliveryDay> = candidate
            .delivery_days
            .iter()
            .enumerate()
            .filter_map(|(index, day)| self.validate_day(index, day, &mut errors))
            .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        let special_instructions = candidate
            .special_instructions
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(ValidatedOrder {
            customer_name,
            customer_phone,
            customer_email,
            delivery_days,
            special_instructions,
        })
    }

    fn validate_day(
        &self,
        index: usize,
        day: &DeliveryDayInput,
        errors: &mut Vec<ValidationError>,
    ) -> Option<DeliveryDay> {
        let prefix = format!("deliveryDays[{}]", index);
        let before = errors.len();

        let date = match day.date.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(ValidationError::MissingDate {
                    field: format!("{}.date", prefix),
                });
                None
            }
            Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(ValidationError::InvalidDate {
                        field: format!("{}.date", prefix),
                        value: raw.to_string(),
                    });
                    None
                }
            },
        };

        let people = match whole_number(day.number_of_people.as_ref()) {
            Some(people) if (i64::from(MIN_PEOPLE_PER_DAY)..=i64::from(MAX_PEOPLE_PER_DAY)).contains(&people) => {
                Some(people)
            }
            Some(people) => {
                errors.push(ValidationError::PeopleOutOfRange {
                    field: format!("{}.numberOfPeople", prefix),
                    value: people,
                    min: MIN_PEOPLE_PER_DAY,
                    max: MAX_PEOPLE_PER_DAY,
                });
                None
            }
            None => {
                errors.push(ValidationError::PeopleNotAnInteger {
                    field: format!("{}.numberOfPeople", prefix),
                });
                None
            }
        };

        if day.selected_items.is_empty() {
            errors.push(ValidationError::NoItemsSelected {
                field: format!("{}.selectedItems", prefix),
            });
        }

        let mut selected_items = Vec::with_capacity(day.selected_items.len());
        for (item_index, selection) in day.selected_items.iter().enumerate() {
            match self.catalog.find(selection.id.trim()) {
                Some(catalog_item) => selected_items.push(SelectedItem::from(catalog_item)),
                None => errors.push(ValidationError::UnknownItem {
                    field: format!("{}.selectedItems[{}].id", prefix, item_index),
                    item_id: selection.id.clone(),
                }),
            }
        }

        if errors.len() > before {
            return None;
        }

        Some(DeliveryDay {
            date: date?,
            number_of_people: u32::try_from(people?).ok()?,
            selected_items,
        })
    }
}

/// Integral JSON numbers only; `2.0` counts, `2.5`, `"2"` and null do not.
fn whole_number(value: Option<&Value>) -> Option<i64> {
    let Some(Value::Number(number)) = value else {
        return None;
    };
    // Floats outside the i64 range saturate and then fail the range check.
    number
        .as_i64()
        .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
}

fn required_text(field: &str, value: Option<&str>, errors: &mut Vec<ValidationError>) -> String {
    let trimmed = value.unwrap_or_default().trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::Blank {
            field: field.to_string(),
        });
    }
    trimmed.to_string()
}

// ============================================================================
// Unit Tests
// ============================================================================
