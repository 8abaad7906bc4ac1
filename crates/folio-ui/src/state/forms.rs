//! Form buffers
//!
//! Text fields are edited as raw strings and only turned into typed requests
//! on submit, so validation messages can point at the offending field.

use chrono::NaiveDate;
use folio_types::{LoginRequest, NewProductionRecord, ProductionRecord, RegisterRequest, Shift};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Date must look like 2024-01-31")]
    InvalidDate,

    #[error("Quantity must be a whole number above zero")]
    InvalidQuantity,
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed)
    }
}

/// Loose shape check: something@domain.tld
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn email(value: &str) -> Result<String, FormError> {
    let value = required(value, "Email")?;
    if is_valid_email(value) {
        Ok(value.to_string())
    } else {
        Err(FormError::InvalidEmail)
    }
}

// ============================================================================
// CONTACT
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.name, "Name")?;
        email(&self.email)?;
        required(&self.message, "Message")?;
        Ok(())
    }

    /// `mailto:` link that opens the visitor's mail client with the message
    pub fn mailto_url(&self, recipient: &str) -> Result<String, FormError> {
        self.validate()?;
        let name = self.name.trim();
        let subject = format!("Portfolio contact from {name}");
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            name,
            self.email.trim()
        );
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// AUTH
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// What the auth form produced on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

impl AuthForm {
    pub fn submission(&self) -> Result<AuthSubmission, FormError> {
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        match self.mode {
            AuthMode::Login => Ok(AuthSubmission::Login(LoginRequest {
                email,
                password: self.password.clone(),
            })),
            AuthMode::Register => {
                let name = required(&self.name, "Name")?.to_string();
                if self.password.chars().count() < MIN_PASSWORD_LEN {
                    return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
                }
                Ok(AuthSubmission::Register(RegisterRequest {
                    name,
                    email,
                    password: self.password.clone(),
                }))
            }
        }
    }

    /// Drop the password once it has been sent
    pub fn forget_password(&mut self) {
        self.password.clear();
    }
}

// ============================================================================
// PRODUCTION RECORD
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordForm {
    /// Id of the record being edited; `None` creates a new one
    pub editing: Option<String>,
    pub date: String,
    pub product: String,
    pub quantity: String,
    pub shift: Shift,
    pub notes: String,
}

impl RecordForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            editing: None,
            date: today.format("%Y-%m-%d").to_string(),
            product: String::new(),
            quantity: String::new(),
            shift: Shift::default(),
            notes: String::new(),
        }
    }

    /// Load an existing record for editing
    pub fn edit(record: &ProductionRecord) -> Self {
        Self {
            editing: Some(record.id.clone()),
            date: record.date.format("%Y-%m-%d").to_string(),
            product: record.product.clone(),
            quantity: record.quantity.to_string(),
            shift: record.shift,
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_record(&self) -> Result<NewProductionRecord, FormError> {
        let date = NaiveDate::parse_from_str(required(&self.date, "Date")?, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate)?;
        let product = required(&self.product, "Product")?.to_string();
        let quantity = required(&self.quantity, "Quantity")?
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or(FormError::InvalidQuantity)?;
        let notes = Some(self.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(NewProductionRecord {
            date,
            product,
            quantity,
            shift: self.shift,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email(" ada@mail.example.org "));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("a da@example.com"));
    }

    #[test]
    fn test_contact_requires_fields() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(FormError::Required("Name")));

        form.name = "Ada".to_string();
        form.email = "nope".to_string();
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));

        form.email = "ada@example.com".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Message")));

        form.message = "Hi".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_contact_mailto_is_encoded() {
        let form = ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello & welcome?".to_string(),
        };
        let url = form.mailto_url("me@example.com").unwrap();
        assert!(url.starts_with("mailto:me@example.com?subject=Portfolio%20contact%20from%20Ada%20Lovelace&body="));
        assert!(url.contains("Hello%20%26%20welcome%3F"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_login_submission() {
        let form = AuthForm {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(
            form.submission(),
            Ok(AuthSubmission::Login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
            }))
        );
    }

    #[test]
    fn test_register_checks_name_and_password() {
        let mut form = AuthForm {
            mode: AuthMode::Register,
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
            ..AuthForm::default()
        };
        assert_eq!(form.submission(), Err(FormError::Required("Name")));

        form.name = "Ada".to_string();
        assert_eq!(
            form.submission(),
            Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN))
        );

        form.password = "longer-secret".to_string();
        assert!(matches!(form.submission(), Ok(AuthSubmission::Register(_))));
        assert_eq!(form.mode.toggled(), AuthMode::Login);
    }

    #[test]
    fn test_record_form_parses() {
        let mut form = RecordForm::new(day());
        assert_eq!(form.date, "2024-03-09");
        form.product = " Widget ".to_string();
        form.quantity = "12".to_string();
        form.shift = Shift::Night;

        let record = form.to_record().unwrap();
        assert_eq!(record.product, "Widget");
        assert_eq!(record.quantity, 12);
        assert_eq!(record.date, day());
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_record_form_rejects_bad_input() {
        let mut form = RecordForm::new(day());
        form.product = "Widget".to_string();

        form.quantity = "0".to_string();
        assert_eq!(form.to_record(), Err(FormError::InvalidQuantity));
        form.quantity = "-3".to_string();
        assert_eq!(form.to_record(), Err(FormError::InvalidQuantity));

        form.quantity = "3".to_string();
        form.date = "09/03/2024".to_string();
        assert_eq!(form.to_record(), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_record_form_edit_round_trip() {
        let record = ProductionRecord {
            id: "r1".to_string(),
            date: day(),
            product: "Gear".to_string(),
            quantity: 40,
            shift: Shift::Afternoon,
            notes: Some("line 2".to_string()),
            created_at: None,
        };
        let form = RecordForm::edit(&record);
        assert_eq!(form.editing.as_deref(), Some("r1"));
        let back = form.to_record().unwrap();
        assert_eq!(back.quantity, 40);
        assert_eq!(back.notes.as_deref(), Some("line 2"));
    }
}
