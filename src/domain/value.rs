use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bandwidth API user name used for Basic authentication.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Field name used in error messages.
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Bandwidth API password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Field name used in error messages.
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Bandwidth account id, the first path segment of every endpoint.
///
/// Invariant: non-empty after trimming.
pub struct AccountId(String);

impl AccountId {
    /// Field name used in error messages.
    pub const FIELD: &'static str = "accountId";

    /// Create a validated [`AccountId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Messaging application id (`applicationId`), required to send messages.
///
/// Invariant: non-empty after trimming.
pub struct ApplicationId(String);

impl ApplicationId {
    /// JSON field name used by Bandwidth (`applicationId`).
    pub const FIELD: &'static str = "applicationId";

    /// Create a validated [`ApplicationId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated application id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// 10DLC campaign id assigned by the campaign registry (`campaignId`).
///
/// Invariant: non-empty after trimming.
pub struct CampaignId(String);

impl CampaignId {
    /// JSON field name used by Bandwidth (`campaignId`).
    pub const FIELD: &'static str = "campaignId";

    /// Create a validated [`CampaignId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated campaign id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Target sub-account (site) of a number move (`subAccountId`).
///
/// Invariant: non-zero.
pub struct SubAccountId(u64);

impl SubAccountId {
    /// JSON field name used by Bandwidth (`subAccountId`).
    pub const FIELD: &'static str = "subAccountId";

    /// Create a validated [`SubAccountId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Target location (SIP peer) of a number move (`locationId`).
///
/// Invariant: non-zero.
pub struct LocationId(u64);

impl LocationId {
    /// JSON field name used by Bandwidth (`locationId`).
    pub const FIELD: &'static str = "locationId";

    /// Create a validated [`LocationId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::Zero { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by Bandwidth (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Telephone number in E.164 form (`+` followed by up to 15 digits).
///
/// With a default region, inputs are parsed with the `phonenumber` crate, so national formats
/// are accepted and normalized. Without a region the input must already be in E.164 shape and
/// is kept exactly as entered (after trimming).
pub struct TelephoneNumber(String);

impl TelephoneNumber {
    /// JSON field name used by Bandwidth (`phoneNumbers`).
    pub const FIELD: &'static str = "phoneNumbers";

    /// Create a telephone number from an E.164 string, kept as entered.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(None, value)
    }

    /// Parse a telephone number.
    ///
    /// With `default_region` the input is parsed and normalized into E.164. Without one it is
    /// only checked for E.164 shape, never rewritten.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let invalid = || ValidationError::InvalidPhoneNumber {
            input: raw.to_owned(),
        };
        let Some(region) = default_region else {
            if !is_e164_shape(raw) {
                return Err(invalid());
            }
            return Ok(Self(raw.to_owned()));
        };

        let parsed = phonenumber::parse(Some(region), raw).map_err(|_| invalid())?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        if !is_e164_shape(&e164) {
            return Err(invalid());
        }

        Ok(Self(e164))
    }

    /// Parse a free-form list of numbers separated by commas or newlines.
    ///
    /// Blank entries are skipped. Every invalid entry is reported, not just the first.
    pub fn parse_list(input: &str) -> Result<Vec<Self>, ValidationError> {
        Self::collect(
            input
                .split([',', '\n'])
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }

    /// Validate an already split list of numbers, reporting every invalid entry.
    pub fn collect<I, S>(entries: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut numbers = Vec::new();
        let mut invalid = Vec::new();
        for entry in entries {
            let entry = entry.into();
            match Self::new(entry.as_str()) {
                Ok(number) => numbers.push(number),
                Err(ValidationError::Empty { .. }) => {}
                Err(_) => invalid.push(entry.trim().to_owned()),
            }
        }

        if !invalid.is_empty() {
            return Err(ValidationError::InvalidPhoneNumbers { inputs: invalid });
        }
        if numbers.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(numbers)
    }

    /// E.164 representation as sent to Bandwidth.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_e164_shape(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('+') else {
        return false;
    };
    (2..=15).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0')
}
