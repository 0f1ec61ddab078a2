//! Quote form fields and the service catalogue.
//!
//! DESIGN
//! ======
//! Field values are kept as raw strings exactly as typed; the select value for
//! `service` is the category slug (or empty while nothing is chosen). Checks
//! stay at presence/format level, mirroring what the browser enforces with
//! `required` and `type="email"`.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use serde::{Deserialize, Serialize};

use crate::emailjs::TemplateParams;
use crate::error::FieldError;

/// One input of the quote form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Service,
        Field::Message,
    ];

    /// The HTML `name` attribute of the input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Phone and company may be left blank.
    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone | Self::Company)
    }
}

/// Service categories offered in the quote form's select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    GraphicDesign,
    Marketing,
    SocialMedia,
    NetworkSolutions,
    ItSecurity,
    VideoProduction,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::GraphicDesign,
        ServiceCategory::Marketing,
        ServiceCategory::SocialMedia,
        ServiceCategory::NetworkSolutions,
        ServiceCategory::ItSecurity,
        ServiceCategory::VideoProduction,
    ];

    /// Stable value submitted with the form.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::GraphicDesign => "graphic-design",
            Self::Marketing => "marketing",
            Self::SocialMedia => "social-media",
            Self::NetworkSolutions => "network-solutions",
            Self::ItSecurity => "it-security",
            Self::VideoProduction => "video-production",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GraphicDesign => "Graphic Design",
            Self::Marketing => "Marketing",
            Self::SocialMedia => "Social Media Management",
            Self::NetworkSolutions => "Network Solutions",
            Self::ItSecurity => "IT Security",
            Self::VideoProduction => "Video Production",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// Current content of the quote form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    /// Required fields that are blank, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Presence and format checks run before a submission is issued.
    ///
    /// # Errors
    ///
    /// Returns the first class of problem found: missing required fields, a
    /// malformed email, or a service outside the catalogue.
    pub fn validate(&self) -> Result<(), FieldError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FieldError::Missing(missing));
        }
        if !is_email_shaped(&self.email) {
            return Err(FieldError::InvalidEmail);
        }
        if ServiceCategory::from_slug(self.service.trim()).is_none() {
            return Err(FieldError::UnknownService(self.service.clone()));
        }
        Ok(())
    }

    /// Map the form onto the parameter names the email template expects.
    #[must_use]
    pub fn template_params(&self, to_email: &str) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
            to_email: to_email.to_owned(),
        }
    }
}

/// `local@domain` with exactly one `@`, both sides non-empty, no whitespace.
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}
