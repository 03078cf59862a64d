//! Authentication commands for CLI.

use clap::Subcommand;
use dinonest_core::{AuthClient, Config};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in through the auth proxy
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the local session
    Logout,
    /// Check authentication status
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let client = AuthClient::new(config.auth.proxy_url);

    match action {
        AuthAction::Login { email, password } => {
            let rt = tokio::runtime::Runtime::new()?;
            let auth = rt.block_on(client.login(&email, &password))?;
            println!("Logged in as {}", auth.user.email);
        }
        AuthAction::Logout => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(client.logout())?;
            println!("Logged out");
        }
        AuthAction::Status => match client.session().user()? {
            Some(user) => println!("authenticated as {}", user.email),
            None => println!(
                "{}",
                if client.session().is_authenticated() {
                    "authenticated"
                } else {
                    "not authenticated"
                }
            ),
        },
    }
    Ok(())
}
