//! Sandbank session walkthrough.
//!
//! Hosts the mock-asset router in-process on an ephemeral port, then drives
//! the route surface the way the client does: login, dashboard, customer
//! detail, transaction list with create/filter/export/insights.
//!
//! Run `cargo run --bin seeder` once beforehand to generate the fixtures.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sandbank_core::account::AccountService;
use sandbank_core::auth::{AuthService, LoginCredentials};
use sandbank_core::customer::CustomerDirectory;
use sandbank_core::dashboard::{self, segment_severity};
use sandbank_core::ledger::{
    EntryRules, NewTransaction, SortKey, SortOrder, TransactionFilter, TransactionKind,
    TransactionService, export_csv, monthly_insights, sort_transactions,
};
use sandbank_core::refdata::{AssetClient, TransactionCatalog};
use sandbank_core::state::SessionState;
use sandbank_shared::AppConfig;
use sandbank_store::{Vault, VaultBacking};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sandbank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().unwrap_or_default();

    let mock_root = config.server.asset_root.join("mock");
    anyhow::ensure!(
        mock_root.join("customers.json").exists(),
        "fixtures missing under {} - run `cargo run --bin seeder` first",
        mock_root.display()
    );

    // Host the asset router in-process on an ephemeral port.
    let app = axum::Router::new().nest_service("/mock", ServeDir::new(mock_root));
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    // Explicitly constructed, dependency-injected services.
    let assets = Arc::new(AssetClient::new(&base_url));
    let vault = Arc::new(Vault::open(&VaultBacking::local_fs(&config.vault.root))?);
    let auth = AuthService::new(
        Arc::clone(&vault),
        Duration::from_millis(config.auth.login_latency_ms),
    )
    .await;
    let customers = CustomerDirectory::new(Arc::clone(&assets));
    let accounts = Arc::new(AccountService::new(Arc::clone(&assets), Arc::clone(&vault)).await);
    let transactions =
        TransactionService::new(Arc::clone(&assets), Arc::clone(&vault), Arc::clone(&accounts))
            .await;
    let catalog = TransactionCatalog::new(Arc::clone(&assets));
    let session = SessionState::new();

    // --- login ---------------------------------------------------------
    if auth.is_authenticated() {
        println!("Restored session for {}", display_user(&auth));
    } else {
        let rejected = auth
            .login(&LoginCredentials {
                email: "admin@bank.com".to_string(),
                password: "nope".to_string(),
            })
            .await;
        println!(
            "Login with a wrong password: {}",
            rejected.expect_err("wrong password must fail")
        );

        auth.login(&LoginCredentials {
            email: "admin@bank.com".to_string(),
            password: "admin123".to_string(),
        })
        .await
        .map_err(|e| anyhow::anyhow!("login failed: {e}"))?;
        println!("Signed in as {}", display_user(&auth));
    }

    // Every route below the login requires the authenticated flag.
    anyhow::ensure!(auth.is_authenticated(), "route guard: not authenticated");

    // --- dashboard -----------------------------------------------------
    let all_customers = customers.customers().await?;
    println!("\nDashboard: {} customers", all_customers.len());
    for customer in dashboard::search_customers(&all_customers, "") {
        println!(
            "  {:<6} {:<16} [{} / {:?}]",
            customer.cif.as_str(),
            customer.name,
            customer.segment,
            segment_severity(customer.segment)
        );
    }

    let selected = all_customers
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no customers seeded"))?;
    session.set_selected_customer(Some(selected.clone()));

    // --- customer detail -----------------------------------------------
    let overview = dashboard::customer_overview(&customers, &accounts, &selected.cif)
        .await?
        .ok_or_else(|| anyhow::anyhow!("selected customer vanished"))?;
    println!(
        "\nCustomer {}: {} accounts, {} active, total balance {}",
        overview.customer.name,
        overview.accounts.len(),
        overview.active_accounts,
        overview.total_balance
    );
    for account in &overview.accounts {
        println!(
            "  {:<4} {:<8} {:<8} {}",
            account.id.as_str(),
            account.kind.to_string(),
            account.status.to_string(),
            account.money()
        );
    }

    let account = overview
        .accounts
        .iter()
        .find(|a| a.is_active())
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("customer has no active account"))?;
    session.set_selected_account_id(Some(account.id.clone()));

    // --- transaction list ----------------------------------------------
    let history = transactions.transactions_for_account(&account.id).await?;
    println!("\nTransactions for {} ({}):", account.id, history.len());
    for transaction in history.iter().take(5) {
        println!(
            "  {} {} {:<6} {:>10} {}",
            transaction.id,
            transaction.date,
            transaction.kind.to_string(),
            transaction.amount,
            transaction.merchant
        );
    }

    let types = catalog.transaction_types().await?;
    let categories = catalog.categories().await?;
    println!(
        "Entry form offers {} types and {} categories",
        types.len(),
        categories.len()
    );

    // --- create a transaction ------------------------------------------
    let today = Utc::now().date_naive();
    let entry = NewTransaction {
        account_id: account.id.clone(),
        kind: TransactionKind::Debit,
        amount: dec!(42.50),
        date: today,
        merchant: "Coop Pronto".to_string(),
        category: categories.first().cloned().unwrap_or_else(|| "Groceries".to_string()),
    };

    let balance = accounts.balance(&account.id);
    if let Err(violations) = EntryRules::default().validate(&entry, balance, today) {
        for violation in violations {
            println!("entry rejected: {violation}");
        }
    } else {
        let created = transactions
            .create(entry)
            .await
            .map_err(|e| anyhow::anyhow!("create failed: {e}"))?;
        println!(
            "\nCreated {} - balance moved {} -> {}",
            created.id,
            balance,
            accounts.balance(&account.id)
        );
    }

    // --- filter, sort, export, insights --------------------------------
    let list = transactions.transactions_for_account(&account.id).await?;

    let filter = TransactionFilter {
        kind: Some(TransactionKind::Debit),
        ..TransactionFilter::default()
    };
    let mut debits = filter.apply(&list);
    sort_transactions(&mut debits, SortKey::Amount, SortOrder::Descending);
    println!("\n{} debits, largest first:", debits.len());
    for transaction in debits.iter().take(3) {
        println!("  {:>10}  {}", transaction.amount, transaction.merchant);
    }

    let csv = export_csv(&list).map_err(|e| anyhow::anyhow!("export failed: {e}"))?;
    let export_path = std::env::temp_dir().join(format!("transactions_{}.csv", account.id));
    std::fs::write(&export_path, &csv)?;
    println!("\nExported {} rows to {}", csv.lines().count() - 1, export_path.display());

    let insights = monthly_insights(&list, today);
    println!(
        "\nThis month: {} transactions, debit {}, credit {}",
        insights.transaction_count, insights.total_debit, insights.total_credit
    );
    if let Some(top) = insights.top_debit_category {
        println!("Top spending category: {} ({})", top.category, top.total);
    }

    println!("\nSession persists in {} - run again to restore it.", config.vault.root.display());
    Ok(())
}

fn display_user(auth: &AuthService) -> String {
    auth.current_user()
        .map_or_else(|| "<nobody>".to_string(), |user| format!("{} <{}>", user.name, user.email))
}
