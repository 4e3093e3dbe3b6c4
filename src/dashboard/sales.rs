//! The manager's view of takings.

use crate::model::{Order, PaymentStatus};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub order_ref: String,
    pub customer: String,
    pub amount: u64,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub transactions: Vec<Transaction>,
    /// Sum over completed transactions only.
    pub total_revenue: u64,
    pub completed: usize,
}

impl SalesSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let transactions: Vec<Transaction> = orders
            .iter()
            .map(|order| Transaction {
                order_ref: order.id.to_string(),
                customer: order.customer.clone(),
                amount: order.total,
                status: match order.payment {
                    PaymentStatus::Succeeded => TransactionStatus::Completed,
                    PaymentStatus::Pending => TransactionStatus::Pending,
                },
            })
            .collect();

        let completed: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .collect();
        Self {
            total_revenue: completed
                .iter()
                .fold(0u64, |total, t| total.saturating_add(t.amount)),
            completed: completed.len(),
            transactions,
        }
    }
}
