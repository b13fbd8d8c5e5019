use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{
    BorrowerRegistry, ClientConfig, DisbursementDesk, HttpBorrowerGateway, Navigator,
    NotificationRelay, Severity,
};
use shared::domain::BorrowerId;
use tracing::debug;
use url::Url;

#[derive(Parser, Debug)]
#[command(about = "Operator console for the lending platform backend")]
struct Args {
    /// Backend base URL. Falls back to the LOAN_API_URL environment variable.
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered borrowers.
    List,
    /// Register a new borrower.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, default_value = "0")]
        loan_amount: String,
    },
    /// Start payment-processor onboarding for a borrower.
    Onboard { borrower_id: i64 },
    /// Disburse funds to a borrower.
    Disburse { borrower_id: i64, amount: String },
}

/// In a terminal we cannot redirect a browsing context, so the onboarding
/// destination is printed for the operator to open.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, url: &Url) {
        println!("Open the onboarding page to continue: {url}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let config = match &args.api_url {
        Some(raw) => ClientConfig::new(raw)?,
        None => ClientConfig::from_env()?,
    };
    debug!(base_url = %config.base_url(), "operator console starting");

    let gateway = Arc::new(HttpBorrowerGateway::new(config)?);
    let notices = NotificationRelay::new();

    match args.command {
        Command::List => {
            let registry = BorrowerRegistry::new(
                gateway,
                Arc::new(ConsoleNavigator),
                Arc::clone(&notices),
            );
            registry.load().await;
            let borrowers = registry.borrowers().await;
            if borrowers.is_empty() {
                println!("No borrowers registered.");
            }
            for borrower in borrowers {
                println!(
                    "#{} {} <{}> phone {} loan {}",
                    borrower.id.0,
                    borrower.name,
                    borrower.email,
                    borrower.phone,
                    borrower.display_loan_amount()
                );
            }
        }
        Command::Add {
            name,
            email,
            phone,
            loan_amount,
        } => {
            let registry = BorrowerRegistry::new(
                gateway,
                Arc::new(ConsoleNavigator),
                Arc::clone(&notices),
            );
            registry.set_name(name).await;
            registry.set_email(email).await;
            registry.set_phone(phone).await;
            registry.set_loan_amount(&loan_amount).await;
            registry.submit().await;
        }
        Command::Onboard { borrower_id } => {
            let registry = BorrowerRegistry::new(
                gateway,
                Arc::new(ConsoleNavigator),
                Arc::clone(&notices),
            );
            registry.onboard(BorrowerId(borrower_id)).await;
        }
        Command::Disburse {
            borrower_id,
            amount,
        } => {
            let desk = DisbursementDesk::new(gateway, Arc::clone(&notices));
            desk.select_borrower(Some(BorrowerId(borrower_id))).await;
            desk.set_amount(&amount).await;
            if !desk.disburse().await {
                println!("Disbursement needs a borrower and a positive amount.");
            }
        }
    }

    let notice = notices.current().await;
    if notice.open {
        let tag = match notice.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        println!("[{tag}] {}", notice.message);
    }

    Ok(())
}
