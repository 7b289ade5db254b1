//! Expense command handlers.
//!
//! The client holds no authoritative copy of the list: every mutation is
//! followed by exactly one re-fetch, and what is printed is always what the
//! server returned.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use spense_core::api::{ApiClient, Expense, ExpenseDraft, wire_date};
use spense_core::config::Config;

/// Optional per-field overrides for an edit; unset fields keep the value
/// currently on the server.
#[derive(Debug, Default)]
pub struct Edits {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

pub async fn list(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let expenses = fetch_and_print(&client).await?;
    if expenses.is_empty() {
        println!("No expenses found.");
    }
    Ok(())
}

pub async fn add(
    config: &Config,
    date: NaiveDate,
    category: String,
    description: String,
    amount: f64,
) -> Result<()> {
    let client = ApiClient::new(config)?;

    // No id: the server assigns one on creation.
    let draft = ExpenseDraft {
        id: None,
        date: wire_date(date),
        category,
        description,
        amount,
    };
    client
        .submit_expense(&draft)
        .await
        .context("Failed to add expense")?;

    println!("✓ Expense added");
    fetch_and_print(&client).await?;
    Ok(())
}

pub async fn edit(config: &Config, id: i64, edits: Edits) -> Result<()> {
    let client = ApiClient::new(config)?;

    // The server owns the record; fetch the current state to fill the
    // fields the caller did not override.
    let expenses = client
        .list_expenses()
        .await
        .context("Failed to fetch expenses")?;
    let current = expenses
        .into_iter()
        .find(|e| e.id == id)
        .with_context(|| format!("No expense with id {id}"))?;

    let draft = ExpenseDraft {
        id: Some(id),
        date: edits.date.map_or(current.date, wire_date),
        category: edits.category.unwrap_or(current.category),
        description: edits.description.unwrap_or(current.description),
        amount: edits.amount.unwrap_or(current.amount),
    };
    client
        .submit_expense(&draft)
        .await
        .context("Failed to update expense")?;

    println!("✓ Expense {id} updated");
    fetch_and_print(&client).await?;
    Ok(())
}

pub async fn delete(config: &Config, id: i64) -> Result<()> {
    let client = ApiClient::new(config)?;
    client
        .delete_expense(id)
        .await
        .context("Failed to delete expense")?;

    println!("✓ Expense {id} deleted");
    fetch_and_print(&client).await?;
    Ok(())
}

/// Fetches the list once and prints it.
async fn fetch_and_print(client: &ApiClient) -> Result<Vec<Expense>> {
    let expenses = client
        .list_expenses()
        .await
        .context("Failed to fetch expenses")?;
    if !expenses.is_empty() {
        println!("{}", render_table(&expenses));
    }
    Ok(expenses)
}

fn render_table(expenses: &[Expense]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(["ID", "Date", "Category", "Description", "Amount"]);
    for expense in expenses {
        table.add_row([
            expense.id.to_string(),
            display_date(&expense.date),
            expense.category.clone(),
            expense.description.clone(),
            format!("{:.2}", expense.amount),
        ]);
    }
    table
}

/// Renders a wire date as a plain calendar day, falling back to the raw
/// string for anything that does not parse.
fn display_date(wire: &str) -> String {
    DateTime::parse_from_rfc3339(wire)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|_| wire.to_string())
}
