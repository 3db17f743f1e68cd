// Demonstration driver - prints balances before/after each operation.
// Not part of the core contract; the library is the deliverable.

use anyhow::{Context, Result};

use minibank::{Bank, Book, Librarian, Patron};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minibank=info".into()),
        )
        .init();

    println!("🏦 Minibank v{} - account demo", minibank::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bank = Bank::new();

    let savings = bank
        .create_account("savings", 1000.0)
        .context("failed to open savings account")?;
    println!("\n💰 Initial savings balance: {}", savings.balance());
    savings.deposit(200.0);
    println!("After deposit: {}", savings.balance());
    let ok = savings.withdraw(500.0);
    println!("After withdrawal: {} (success: {})", savings.balance(), ok);

    let checking = bank
        .create_account("checking", 500.0)
        .context("failed to open checking account")?;
    println!("\n💰 Initial checking balance: {}", checking.balance());
    checking.deposit(150.0);
    println!("After deposit: {}", checking.balance());
    let ok = checking.withdraw(300.0);
    println!("After withdrawal: {} (success: {})", checking.balance(), ok);

    let credit = bank
        .create_account("credit", 300.0)
        .context("failed to open credit account")?;
    println!("\n💰 Initial credit balance: {}", credit.balance());
    credit.deposit(100.0);
    println!("After deposit: {}", credit.balance());
    let ok = credit.withdraw(400.0);
    println!("After withdrawal: {} (success: {})", credit.balance(), ok);

    println!("\n📚 Library demo");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let librarian = Librarian::new();
    librarian.add_book(Book::new("ISBN123", "The Great Book", "John Doe", 3));
    librarian.register_patron(Patron::new("Patron1", "Alice"));

    if librarian.checkout("Patron1", "ISBN123") {
        println!("✓ Book borrowed by patron");
    }
    if librarian.return_book("Patron1", "ISBN123") {
        println!("✓ Book returned by patron");
    }

    println!("\n🔍 Final account snapshots:");
    println!("{}", serde_json::to_string_pretty(&bank.snapshots())?);

    Ok(())
}
