use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use dashboard_core::{DomainError, DomainResult, Entity, impl_string_id};
use dashboard_parties::CustomerId;

/// Invoice identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl_string_id!(InvoiceId, "InvoiceId");

/// Invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(DomainError::validation(
                "status must be one of: pending, paid",
            )),
        }
    }
}

/// An invoice billed to a single customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    /// Amount in smallest currency unit (e.g., cents).
    pub amount: u64,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Command: CreateInvoice (submitted by the "create invoice" form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvoice {
    pub customer_id: String,
    /// Amount in smallest currency unit.
    pub amount: u64,
    pub status: String,
}

impl Invoice {
    /// Validate a create command and build the invoice it describes.
    ///
    /// Whether `customer_id` names an existing customer is checked by the
    /// store, which owns the customer collection.
    pub fn create(cmd: &CreateInvoice, id: InvoiceId, today: NaiveDate) -> DomainResult<Self> {
        let customer_id: CustomerId = cmd
            .customer_id
            .parse()
            .map_err(|_| DomainError::validation("customer_id is required"))?;

        if cmd.amount == 0 {
            return Err(DomainError::validation("amount must be greater than zero"));
        }

        let status: InvoiceStatus = cmd.status.parse()?;

        Ok(Self {
            id,
            customer_id,
            amount: cmd.amount,
            date: today,
            status,
        })
    }
}
