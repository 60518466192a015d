//! Compiled-in category table and the single classification function.

use super::categories_model::{BudgetGroup, CategoryEntry};

const CATEGORY_TABLE: &[(&str, BudgetGroup)] = &[
    // Basic needs
    ("Rent / Housing", BudgetGroup::Basic),
    ("Utilities", BudgetGroup::Basic),
    ("Groceries", BudgetGroup::Basic),
    ("Transportation", BudgetGroup::Basic),
    ("Insurance", BudgetGroup::Basic),
    ("Loan / EMI Payments", BudgetGroup::Basic),
    ("Medical & Healthcare", BudgetGroup::Basic),
    ("Childcare / Education Fees", BudgetGroup::Basic),
    ("Phone & Internet Bills", BudgetGroup::Basic),
    // Lifestyle
    ("Dining Out / Restaurants", BudgetGroup::Lifestyle),
    ("Entertainment", BudgetGroup::Lifestyle),
    ("Shopping", BudgetGroup::Lifestyle),
    ("Travel & Vacation", BudgetGroup::Lifestyle),
    ("Fitness", BudgetGroup::Lifestyle),
    ("Gifts & Celebrations", BudgetGroup::Lifestyle),
    ("Home Décor / Luxury Items", BudgetGroup::Lifestyle),
    ("Emergency Repair", BudgetGroup::Lifestyle),
    // Savings
    ("Emergency Fund", BudgetGroup::Savings),
    ("FD / RD", BudgetGroup::Savings),
    ("Mutual Funds / SIP", BudgetGroup::Savings),
    ("Stock Market Investments", BudgetGroup::Savings),
    ("Retirement Fund", BudgetGroup::Savings),
    ("Insurance Savings Plan", BudgetGroup::Savings),
    ("Gold / Real Estate", BudgetGroup::Savings),
    ("Debt Repayment", BudgetGroup::Savings),
    ("Digital Wallet / Savings Account", BudgetGroup::Savings),
];

/// Maps a category name to its budget group.
///
/// Total over all strings: names absent from the table are `Other`.
/// Matching is exact, the same way categories are stored on expenses.
pub fn classify(category: &str) -> BudgetGroup {
    CATEGORY_TABLE
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, group)| *group)
        .unwrap_or(BudgetGroup::Other)
}

/// Read-only view over the category table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, category: &str) -> BudgetGroup {
        classify(category)
    }

    pub fn is_registered(&self, category: &str) -> bool {
        CATEGORY_TABLE.iter().any(|(name, _)| *name == category)
    }

    /// Every registered category in table order.
    pub fn entries(&self) -> Vec<CategoryEntry> {
        CATEGORY_TABLE
            .iter()
            .map(|(name, group)| CategoryEntry {
                name: (*name).to_string(),
                group: *group,
                budget_type: group.budget_type_label().to_string(),
            })
            .collect()
    }

    pub fn categories_in(&self, group: BudgetGroup) -> Vec<&'static str> {
        CATEGORY_TABLE
            .iter()
            .filter(|(_, g)| *g == group)
            .map(|(name, _)| *name)
            .collect()
    }
}
