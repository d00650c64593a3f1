//! Mock fixture generator for Sandbank.
//!
//! Writes the static JSON collections the asset server exposes: customers,
//! accounts, transactions, transaction types, and categories.
//!
//! Usage: cargo run --bin seeder

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sandbank_core::account::{Account, AccountKind, AccountStatus};
use sandbank_core::customer::{Customer, Segment};
use sandbank_core::ledger::{Transaction, TransactionKind};
use sandbank_core::refdata::TransactionTypeInfo;
use sandbank_shared::AppConfig;
use sandbank_shared::types::{AccountId, Currency, CustomerId, TransactionId};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let mock_root = config.server.asset_root.join("mock");
    fs::create_dir_all(&mock_root)?;

    println!("Seeding customers...");
    write_json(&mock_root.join("customers.json"), &customers())?;

    println!("Seeding accounts...");
    write_json(&mock_root.join("accounts.json"), &accounts())?;

    println!("Seeding transactions...");
    write_json(&mock_root.join("transactions.json"), &transactions())?;

    println!("Seeding transaction types...");
    write_json(&mock_root.join("transaction-types.json"), &transaction_types())?;

    println!("Seeding transaction categories...");
    write_json(&mock_root.join("transaction-categories.json"), &categories())?;

    println!("Seeding complete! Fixtures in {}", mock_root.display());
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    println!("  wrote {}", path.display());
    Ok(())
}

fn customer(cif: &str, name: &str, email: &str, phone: &str, branch: &str, segment: Segment) -> Customer {
    Customer {
        cif: CustomerId::new(cif),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        branch: branch.to_string(),
        segment,
    }
}

fn customers() -> Vec<Customer> {
    vec![
        customer("C1001", "Amelia Brandt", "amelia.brandt@example.com", "+41 79 555 01 01", "Zurich Main", Segment::Vip),
        customer("C1002", "Bruno Keller", "bruno.keller@example.com", "+41 78 555 02 02", "Bern West", Segment::Retail),
        customer("C1003", "Chiara Fontana", "chiara.fontana@example.com", "+41 76 555 03 03", "Lugano Centro", Segment::Priority),
        customer("C1004", "Dario Meier", "dario.meier@example.com", "+41 79 555 04 04", "Basel SBB", Segment::Retail),
        customer("C1005", "Elena Vogt", "elena.vogt@example.com", "+41 77 555 05 05", "Geneva Rive", Segment::Vip),
        customer("C1006", "Fabian Roth", "fabian.roth@example.com", "+41 78 555 06 06", "Zurich Main", Segment::Retail),
    ]
}

fn account(
    id: &str,
    cif: &str,
    kind: AccountKind,
    currency: Currency,
    balance: Decimal,
    iban: &str,
    status: AccountStatus,
) -> Account {
    Account {
        id: AccountId::new(id),
        customer_id: CustomerId::new(cif),
        kind,
        currency,
        balance,
        iban: iban.to_string(),
        status,
    }
}

fn accounts() -> Vec<Account> {
    vec![
        account("A1", "C1001", AccountKind::Current, Currency::Chf, dec!(12450.75), "CH93 0076 2011 6238 5295 7", AccountStatus::Active),
        account("A2", "C1001", AccountKind::Savings, Currency::Chf, dec!(85000.00), "CH56 0483 5012 3456 7800 9", AccountStatus::Active),
        account("A3", "C1002", AccountKind::Current, Currency::Chf, dec!(1830.20), "CH21 0023 0230 1014 5302 U", AccountStatus::Active),
        account("A4", "C1003", AccountKind::Current, Currency::Eur, dec!(6420.00), "CH37 0873 1000 0467 1200 0", AccountStatus::Active),
        account("A5", "C1003", AccountKind::Savings, Currency::Eur, dec!(21000.50), "CH08 0900 0000 1500 2833 8", AccountStatus::Dormant),
        account("A6", "C1004", AccountKind::Current, Currency::Chf, dec!(95.40), "CH44 0025 1251 6135 7100 1", AccountStatus::Active),
        account("A7", "C1005", AccountKind::Current, Currency::Usd, dec!(43210.90), "CH17 0076 2011 6238 5295 8", AccountStatus::Active),
        account("A8", "C1005", AccountKind::Savings, Currency::Usd, dec!(150000.00), "CH92 0076 2011 6238 5295 9", AccountStatus::Active),
        account("A9", "C1006", AccountKind::Current, Currency::Chf, dec!(0.00), "CH65 0838 7000 0012 3456 7", AccountStatus::Closed),
    ]
}

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("fixture date")
}

fn transaction(
    id: &str,
    account_id: &str,
    date: NaiveDate,
    kind: TransactionKind,
    amount: Decimal,
    merchant: &str,
    category: &str,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        account_id: AccountId::new(account_id),
        date,
        kind,
        amount,
        merchant: merchant.to_string(),
        category: category.to_string(),
    }
}

fn transactions() -> Vec<Transaction> {
    use TransactionKind::{Credit, Debit};

    // Most-recent-first, matching the insertion order of created records.
    vec![
        transaction("T2026", "A1", day(2026, 8, 4), Debit, dec!(64.80), "Coop Pronto", "Groceries"),
        transaction("T2025", "A1", day(2026, 8, 3), Debit, dec!(120.00), "SBB CFF FFS", "Transport"),
        transaction("T2024", "A3", day(2026, 8, 3), Debit, dec!(18.50), "Migros Takeaway", "Dining"),
        transaction("T2023", "A1", day(2026, 8, 1), Credit, dec!(8900.00), "Helvetia Insurance AG", "Salary"),
        transaction("T2022", "A7", day(2026, 7, 30), Debit, dec!(230.35), "Globus", "Shopping"),
        transaction("T2021", "A4", day(2026, 7, 29), Debit, dec!(75.00), "Enel Energia", "Utilities"),
        transaction("T2020", "A3", day(2026, 7, 28), Credit, dec!(4200.00), "Kanton Bern", "Salary"),
        transaction("T2019", "A1", day(2026, 7, 25), Debit, dec!(42.90), "Netflix", "Entertainment"),
        transaction("T2018", "A6", day(2026, 7, 24), Debit, dec!(55.00), "Swisscom", "Utilities"),
        transaction("T2017", "A7", day(2026, 7, 22), Credit, dec!(12000.00), "Dividend Payout", "Investment"),
        transaction("T2016", "A4", day(2026, 7, 21), Debit, dec!(320.00), "Trenitalia", "Transport"),
        transaction("T2015", "A1", day(2026, 7, 18), Debit, dec!(89.60), "Coop City", "Groceries"),
        transaction("T2014", "A3", day(2026, 7, 15), Debit, dec!(250.00), "Ochsner Sport", "Shopping"),
        transaction("T2013", "A8", day(2026, 7, 12), Credit, dec!(5000.00), "Standing Order", "Savings"),
        transaction("T2012", "A1", day(2026, 7, 10), Debit, dec!(1450.00), "Immo Verwaltung AG", "Rent"),
        transaction("T2011", "A6", day(2026, 7, 8), Credit, dec!(150.00), "Twint Transfer", "Transfer"),
        transaction("T2010", "A4", day(2026, 7, 5), Debit, dec!(62.35), "Esselunga", "Groceries"),
        transaction("T2009", "A7", day(2026, 7, 3), Debit, dec!(890.00), "Swiss Intl Air Lines", "Travel"),
        transaction("T2008", "A1", day(2026, 6, 28), Debit, dec!(34.50), "Tibits", "Dining"),
        transaction("T2007", "A3", day(2026, 6, 25), Debit, dec!(19.90), "Spotify", "Entertainment"),
        transaction("T2006", "A4", day(2026, 6, 22), Credit, dec!(3800.00), "Universita Lugano", "Salary"),
        transaction("T2005", "A1", day(2026, 6, 18), Debit, dec!(210.75), "Galaxus", "Shopping"),
        transaction("T2004", "A8", day(2026, 6, 15), Credit, dec!(5000.00), "Standing Order", "Savings"),
        transaction("T2003", "A6", day(2026, 6, 12), Debit, dec!(12.80), "K Kiosk", "Groceries"),
        transaction("T2002", "A7", day(2026, 6, 8), Debit, dec!(1200.00), "Baur au Lac", "Travel"),
        transaction("T2001", "A1", day(2026, 6, 5), Debit, dec!(1450.00), "Immo Verwaltung AG", "Rent"),
    ]
}

fn transaction_types() -> Vec<TransactionTypeInfo> {
    vec![
        TransactionTypeInfo {
            code: "Debit".to_string(),
            label: "Debit (money out)".to_string(),
        },
        TransactionTypeInfo {
            code: "Credit".to_string(),
            label: "Credit (money in)".to_string(),
        },
    ]
}

fn categories() -> Vec<String> {
    [
        "Groceries",
        "Dining",
        "Transport",
        "Shopping",
        "Utilities",
        "Entertainment",
        "Rent",
        "Salary",
        "Savings",
        "Investment",
        "Travel",
        "Transfer",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
