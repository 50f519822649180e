//! Session and account-recovery commands.
//!
//! These are transactional: failures propagate and exit non-zero.

use delight_core::Email;
use delight_storefront::store::Store;

/// `auth login` - sign in; any guest cart is replayed into the account.
#[allow(clippy::print_stdout)]
pub async fn login(
    store: &Store,
    email: &Email,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let guest_items = store.cart_count();
    let user = store.login(email, password).await?;
    println!("Signed in as {} <{}>.", user.name, user.email);
    if guest_items > 0 {
        println!(
            "Guest cart synced; cart now holds {} items ({}).",
            store.cart_count(),
            store.cart_total().display()
        );
    }
    Ok(())
}

/// `auth register` - create an account and sign it in.
#[allow(clippy::print_stdout)]
pub async fn register(
    store: &Store,
    name: &str,
    email: &Email,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = store.register(name, email, password).await?;
    println!("Account created; signed in as {} <{}>.", user.name, user.email);
    Ok(())
}

/// `auth logout` - drop the stored session.
#[allow(clippy::print_stdout)]
pub fn logout(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    store.logout()?;
    println!("Signed out.");
    Ok(())
}

/// `auth whoami` - show the signed-in account.
#[allow(clippy::print_stdout)]
pub fn whoami(store: &Store) {
    match store.user() {
        Some(user) => {
            println!("{} <{}> ({})", user.name, user.email, user.role);
        }
        None => println!("Not signed in."),
    }
}

/// `auth forgot-password` - request a reset email.
#[allow(clippy::print_stdout)]
pub async fn forgot_password(
    store: &Store,
    email: &Email,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = store.api().forgot_password(email.as_str()).await?;
    if response.message.is_empty() {
        println!("If the account exists, a reset email is on its way.");
    } else {
        println!("{}", response.message);
    }
    Ok(())
}

/// `auth reset-password` - complete a reset with the emailed token.
#[allow(clippy::print_stdout)]
pub async fn reset_password(
    store: &Store,
    token: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = store.api().reset_password(token, password).await?;
    if response.message.is_empty() {
        println!("Password updated.");
    } else {
        println!("{}", response.message);
    }
    Ok(())
}
