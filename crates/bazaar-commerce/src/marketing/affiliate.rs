//! Affiliate-marketing codes.
//!
//! An affiliate code grants a percentage discount and tracks how often it
//! has been redeemed. The registry owns the records and enforces the
//! payload rules; persistence behind it is an external collaborator.

use crate::error::CommerceError;
use crate::ids::AffiliateId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A registered affiliate code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffiliateCode {
    /// Unique identifier.
    pub id: AffiliateId,
    /// The code shoppers enter (matched case-insensitively).
    pub code: String,
    /// Percentage off the cart subtotal.
    pub discount_percentage: i64,
    /// How many times the code has been redeemed.
    pub usage_count: i64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl AffiliateCode {
    /// Discount this code grants on a subtotal.
    pub fn discount_amount(&self, subtotal: &Money) -> Money {
        subtotal.percentage(self.discount_percentage as f64)
    }
}

/// Validated payload for creating or updating an affiliate code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAffiliateCode {
    /// The code to register.
    pub code: String,
    /// Percentage off, (0, 100].
    pub discount_percentage: i64,
}

impl NewAffiliateCode {
    fn validate(&self) -> Result<(), CommerceError> {
        if self.code.trim().is_empty() {
            return Err(CommerceError::Validation("code must not be empty".into()));
        }
        if self.discount_percentage <= 0 || self.discount_percentage > 100 {
            return Err(CommerceError::Validation(format!(
                "discount percentage must be in (0, 100], got {}",
                self.discount_percentage
            )));
        }
        Ok(())
    }
}

/// In-memory affiliate code store with serial id assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffiliateRegistry {
    entries: Vec<AffiliateCode>,
    next_id: i64,
}

impl Default for AffiliateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AffiliateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// All registered codes, in creation order.
    pub fn list(&self) -> &[AffiliateCode] {
        &self.entries
    }

    /// Look up a code, case-insensitively.
    pub fn find_by_code(&self, code: &str) -> Option<&AffiliateCode> {
        self.entries
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
    }

    /// Get a record by id.
    pub fn get(&self, id: AffiliateId) -> Option<&AffiliateCode> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Register a new code.
    ///
    /// Rejects invalid payloads and codes that are already registered
    /// under any casing.
    pub fn create(&mut self, payload: NewAffiliateCode) -> Result<&AffiliateCode, CommerceError> {
        payload.validate()?;
        if self.find_by_code(&payload.code).is_some() {
            return Err(CommerceError::DuplicateAffiliateCode(payload.code));
        }

        let now = current_timestamp();
        let entry = AffiliateCode {
            id: AffiliateId::new(self.next_id),
            code: payload.code,
            discount_percentage: payload.discount_percentage,
            usage_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        tracing::debug!(code = %entry.code, "registered affiliate code");
        self.entries.push(entry);
        Ok(self.entries.last().expect("just pushed"))
    }

    /// Replace a record's code and percentage.
    pub fn update(
        &mut self,
        id: AffiliateId,
        payload: NewAffiliateCode,
    ) -> Result<&AffiliateCode, CommerceError> {
        payload.validate()?;
        if let Some(other) = self.find_by_code(&payload.code) {
            if other.id != id {
                return Err(CommerceError::DuplicateAffiliateCode(payload.code));
            }
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(CommerceError::AffiliateNotFound(id.value()))?;
        entry.code = payload.code;
        entry.discount_percentage = payload.discount_percentage;
        entry.updated_at = current_timestamp();
        tracing::debug!(id = %id, "updated affiliate code");
        Ok(entry)
    }

    /// Delete a record, returning it.
    pub fn delete(&mut self, id: AffiliateId) -> Result<AffiliateCode, CommerceError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CommerceError::AffiliateNotFound(id.value()))?;
        tracing::debug!(id = %id, "deleted affiliate code");
        Ok(self.entries.remove(position))
    }

    /// Record one redemption of a code.
    pub fn record_usage(&mut self, id: AffiliateId) -> Result<&AffiliateCode, CommerceError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(CommerceError::AffiliateNotFound(id.value()))?;
        entry.usage_count += 1;
        entry.updated_at = current_timestamp();
        Ok(entry)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
