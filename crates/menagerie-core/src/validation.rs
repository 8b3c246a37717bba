//! # Validation Module
//!
//! Input validation utilities for Menagerie.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Transport (HTTP, CLI, ...)                                   │
//! │  ├── Type validation (deserialization into *Create / *Update)          │
//! │  └── THIS MODULE: field rules, via `shape.validate()`                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store                                                         │
//! │  ├── Trusts its input, never validates                                 │
//! │  └── Enforces only its own invariants (ids, stock never negative)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use menagerie_core::validation::{validate_email, validate_price};
//!
//! assert!(validate_email("asia@example.com").is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{
    AnimalCreate, AnimalUpdate, OrderCreate, OrderUpdate, ProductCreate, ProductUpdate,
    UserCreate, UserUpdate,
};
use crate::{MAX_NAME_LENGTH, MAX_USERNAME_LENGTH};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field and its maximum length.
fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an animal or product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, MAX_NAME_LENGTH)
}

/// Validates a username.
///
/// ## Rules
/// - Must not be blank
/// - At most 50 characters
/// - No whitespace inside
pub fn validate_username(username: &str) -> ValidationResult<()> {
    validate_required("username", username, MAX_USERNAME_LENGTH)?;

    if username.trim().chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// Only the shape is checked: exactly one `@` with text on both sides.
///
/// ## Example
/// ```rust
/// use menagerie_core::validation::validate_email;
///
/// assert!(validate_email("pawel@example.com").is_ok());
/// assert!(validate_email("pawel@").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email, MAX_NAME_LENGTH)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let email = email.trim();
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid("must contain exactly one '@'")),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(invalid("must have text on both sides of '@'"));
    }

    Ok(())
}

/// Validates an order status. Any non-blank text is accepted.
pub fn validate_status(status: &str) -> ValidationResult<()> {
    validate_required("status", status, MAX_NAME_LENGTH)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional discount percentage (0..=100).
pub fn validate_discount(discount: Option<i32>) -> ValidationResult<()> {
    match discount {
        Some(d) if !(0..=100).contains(&d) => Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Shape Validation
// =============================================================================

impl AnimalCreate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

impl AnimalUpdate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

impl ProductCreate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_discount(self.discount)
    }
}

impl ProductUpdate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_price(self.price)?;
        validate_discount(self.discount)
    }
}

impl OrderCreate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_status(&self.status)
    }
}

impl OrderUpdate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_status(&self.status)
    }
}

impl UserCreate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }
}

impl UserUpdate {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_username(&self.username)?;
        validate_email(&self.email)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
