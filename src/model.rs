//! Host domain value objects sent across the channel.
//!
//! All types are immutable once built: fields are private, optional data
//! is attached with consuming `with_*` methods, and the only way out is
//! the read-only accessors or the [`codec`](crate::rpc::codec).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Profile gender as understood by the embedded app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

impl Gender {
    /// Transport string for this gender.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

/// Deployment target of the embedded app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    Demo,
    Int,
    Val,
    Preprod,
    Prod,
}

impl Environment {
    pub const ALL: [Self; 5] = [Self::Demo, Self::Int, Self::Val, Self::Preprod, Self::Prod];

    /// Transport string, identical to the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "DEMO",
            Self::Int => "INT",
            Self::Val => "VAL",
            Self::Preprod => "PREPROD",
            Self::Prod => "PROD",
        }
    }
}

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// Postal address nested inside a [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line3: Option<String>,
    city: String,
    zip: String,
    country_code: String,
}

impl Address {
    pub fn new(
        line1: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            line3: None,
            city: city.into(),
            zip: zip.into(),
            country_code: country_code.into(),
        }
    }

    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }

    pub fn with_line3(mut self, line3: impl Into<String>) -> Self {
        self.line3 = Some(line3.into());
        self
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> Option<&str> {
        self.line2.as_deref()
    }

    pub fn line3(&self) -> Option<&str> {
        self.line3.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Signed-in user profile handed to the embedded app.
///
/// Serialized field order and key names follow the embedded app's
/// protocol; every `Option` that is `None` is left out of the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    first_name: String,
    last_name: String,
    gender: Gender,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_date_of_birth"
    )]
    date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    residence_country: Option<String>,
}

impl Profile {
    /// Build a profile from its mandatory fields.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            date_of_birth: None,
            face: None,
            nationality: None,
            passport_number: None,
            id_card_number: None,
            email: None,
            phone_number: None,
            address: None,
            birth_city: None,
            birth_country: None,
            residence_country: None,
        }
    }

    pub fn with_date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    /// Reference to the face image (URL or opaque id).
    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = Some(face.into());
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_passport_number(mut self, number: impl Into<String>) -> Self {
        self.passport_number = Some(number.into());
        self
    }

    pub fn with_id_card_number(mut self, number: impl Into<String>) -> Self {
        self.id_card_number = Some(number.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_birth_city(mut self, city: impl Into<String>) -> Self {
        self.birth_city = Some(city.into());
        self
    }

    pub fn with_birth_country(mut self, country: impl Into<String>) -> Self {
        self.birth_country = Some(country.into());
        self
    }

    pub fn with_residence_country(mut self, country: impl Into<String>) -> Self {
        self.residence_country = Some(country.into());
        self
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn face(&self) -> Option<&str> {
        self.face.as_deref()
    }

    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    pub fn passport_number(&self) -> Option<&str> {
        self.passport_number.as_deref()
    }

    pub fn id_card_number(&self) -> Option<&str> {
        self.id_card_number.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn birth_city(&self) -> Option<&str> {
        self.birth_city.as_deref()
    }

    pub fn birth_country(&self) -> Option<&str> {
        self.birth_country.as_deref()
    }

    pub fn residence_country(&self) -> Option<&str> {
        self.residence_country.as_deref()
    }
}

/// `yyyy-MM-dd`, proleptic Gregorian. `NaiveDate` has no zone or locale,
/// so the output depends on the calendar date alone.
pub fn format_date_of_birth(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn serialize_date_of_birth<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => serializer.serialize_str(&format_date_of_birth(*d)),
        None => serializer.serialize_none(),
    }
}

// ---------------------------------------------------------------------------
// Push notification
// ---------------------------------------------------------------------------

/// Push message forwarded to the embedded app for processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PushNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<Map<String, Value>>,
}

impl PushNotification {
    pub fn new(data: Option<Map<String, Value>>, notification: Option<Map<String, Value>>) -> Self {
        Self { data, notification }
    }

    /// Assemble from the pieces a push-messaging integration hands over.
    ///
    /// The display map is always present and only carries the keys that
    /// were supplied, so with neither title nor body it is empty.
    pub fn from_message(
        title: Option<&str>,
        body: Option<&str>,
        data: Option<BTreeMap<String, String>>,
    ) -> Self {
        let mut display = Map::new();
        if let Some(title) = title {
            display.insert("title".into(), Value::String(title.to_owned()));
        }
        if let Some(body) = body {
            display.insert("body".into(), Value::String(body.to_owned()));
        }
        let data = data.map(|d| d.into_iter().map(|(k, v)| (k, Value::String(v))).collect());
        Self {
            data,
            notification: Some(display),
        }
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    pub fn notification(&self) -> Option<&Map<String, Value>> {
        self.notification.as_ref()
    }
}
