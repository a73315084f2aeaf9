//! Headless runner: resolve the user, load their session once and print it.

use std::process::ExitCode;
use std::sync::Arc;

use miniapp::{
    ClientConfig, ConsoleDialogs, ExchangeApi, HostBridge, LoadOutcome, RemoteClient, SessionState,
    SessionStore, StaticHost, WebAppHost,
};
use shared::{format_amount, truncate_address, CRYPTO_DECIMALS};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; variables may come from the shell.
    let _ = dotenvy::dotenv();
    let _log_guard = miniapp::debug::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let host = config
        .init_data
        .clone()
        .map(|raw| Arc::new(StaticHost::new(raw)) as Arc<dyn WebAppHost>);
    let bridge = HostBridge::probe(host, Arc::new(ConsoleDialogs));
    let telegram_id = bridge.user_id().unwrap_or(config.default_telegram_id);

    let api: Arc<dyn ExchangeApi> = match RemoteClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build client");
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let store = SessionStore::new(Arc::clone(&api));

    let user = bridge.user();
    match api
        .register_user(
            telegram_id,
            user.and_then(|u| u.username.as_deref()),
            user.map(|u| u.first_name.as_str()),
            None,
        )
        .await
    {
        Ok(user) => store.set_user(user),
        Err(e) => tracing::warn!(telegram_id, error = %e, "Registration failed, continuing without user"),
    }

    let outcome = store.load(telegram_id).await;
    let state = store.snapshot();
    print_summary(telegram_id, &state);

    if let Some(key) = config.admin_key.as_deref() {
        match api.admin_stats(key).await {
            Ok(stats) => {
                println!(
                    "\nAdmin: {} users, {} transactions",
                    stats.users, stats.transactions.total_transactions
                );
                for balance in &stats.balances {
                    println!(
                        "  {:<6} {}",
                        balance.currency,
                        format_amount(balance.total_balance, CRYPTO_DECIMALS as usize)
                    );
                }
            }
            Err(e) if e.is_unauthorized() => tracing::warn!("Admin key rejected"),
            Err(e) => tracing::warn!(error = %e, "Admin stats unavailable"),
        }
    }

    if outcome == LoadOutcome::Failed {
        bridge.show_alert(state.error.as_deref().unwrap_or("Failed to load data"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_summary(telegram_id: i64, state: &SessionState) {
    match &state.user {
        Some(user) => println!("User {} ({})", user.display_name(), telegram_id),
        None => println!("User {}", telegram_id),
    }

    println!("\nWallets:");
    for wallet in &state.wallets {
        let address = wallet
            .address
            .as_deref()
            .map(truncate_address)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<6} {:>20}  {}",
            wallet.currency,
            format_amount(wallet.balance, CRYPTO_DECIMALS as usize),
            address
        );
    }

    println!("\nRates:");
    for rate in state.rates.iter().filter(|r| r.is_active) {
        println!(
            "  {}/{} {} (+{}%)",
            rate.from_currency,
            rate.to_currency,
            format_amount(rate.rate, CRYPTO_DECIMALS as usize),
            rate.markup_percent
        );
    }

    println!("\nOrders:");
    for order in &state.orders {
        let created = lib_utils::parse_remote_time(&order.created_at)
            .map(lib_utils::format_time)
            .unwrap_or_else(|_| order.created_at.clone());
        println!(
            "  #{} {} {} {} -> {} {} [{}]",
            order.id,
            created,
            format_amount(order.from_amount, CRYPTO_DECIMALS as usize),
            order.from_currency,
            format_amount(order.to_amount, CRYPTO_DECIMALS as usize),
            order.to_currency,
            order.status
        );
    }

    for degraded in &state.degraded {
        println!("\n! {} unavailable: {}", degraded.field, degraded.message);
    }
}
