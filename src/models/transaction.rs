//! This file defines the type `Transaction`, the row contract of the
//! transactions record set.

use serde::{Deserialize, Serialize};

/// A financial transaction as stored by the storage service.
///
/// Every field is required and none of them are validated by the gateway:
/// request bodies travel to the storage service as raw JSON, and this type
/// documents the shape those bodies are expected to take. The row id is
/// assigned by the storage service on creation and is therefore not part of
/// this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The account the transaction is booked against.
    pub account_id: i64,
    /// The customer involved in the transaction.
    pub customer_id: i64,
    /// The business segment the transaction belongs to.
    pub segment_id: i64,
    /// The supplier involved in the transaction.
    pub supplier_id: i64,
    /// The user that recorded the transaction.
    pub created_by_user_id: i64,
    /// The purchase order the transaction fulfils.
    pub purchase_order: String,
    /// The tax treatment applied to the transaction.
    pub tax: String,
    /// An external reference number, e.g. an invoice number.
    pub reference: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Free-form remarks.
    pub remarks: String,
    /// The taxable base amount.
    pub dpp: f64,
    /// The value-added tax amount.
    pub ppn: f64,
    /// The withheld income tax amount.
    pub pph: f64,
    /// The total amount of the transaction.
    pub total: f64,
    /// The amount debited.
    pub debit: f64,
    /// The amount credited.
    pub credit: f64,
}

#[cfg(test)]
mod transaction_tests {
    use serde_json::json;

    use super::Transaction;

    #[test]
    fn deserializes_from_the_wire_shape() {
        let body = json!({
            "account_id": 1,
            "customer_id": 2,
            "segment_id": 3,
            "supplier_id": 4,
            "created_by_user_id": 5,
            "purchase_order": "PO-2031",
            "tax": "PPN 11%",
            "reference": "INV-0042",
            "description": "Office chairs",
            "remarks": "paid in full",
            "dpp": 1_000_000.0,
            "ppn": 110_000.0,
            "pph": 0.0,
            "total": 1_110_000.0,
            "debit": 1_110_000.0,
            "credit": 0.0,
        });

        let transaction: Transaction = serde_json::from_value(body).unwrap();

        assert_eq!(transaction.account_id, 1);
        assert_eq!(transaction.purchase_order, "PO-2031");
        assert_eq!(transaction.total, 1_110_000.0);
    }
}
