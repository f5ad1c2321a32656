//! Invoice ("facture") model

use crate::core::entity::EntityId;
use crate::impl_entity;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice issued to a patient.
///
/// `amount` and `date` are caller-supplied and not validated here. The
/// patient reference is not checked against the patient service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facture {
    /// Store-assigned identifier, `None` until first save
    #[serde(default)]
    pub id: Option<EntityId>,

    /// Invoiced amount, kept at full decimal precision
    pub amount: Decimal,

    /// Identifier of the billed patient
    pub patient_id: EntityId,

    /// Issue date
    pub date: NaiveDate,
}

impl_entity!(Facture, "facture", "factures");

impl Facture {
    /// Create an unsaved invoice
    pub fn new(patient_id: EntityId, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: None,
            amount,
            patient_id,
            date,
        }
    }
}
