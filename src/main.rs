use std::time::Duration;

use clap::{Parser, Subcommand};

use loginflow::client::AuthClient;
use loginflow::config::Config;
use loginflow::server::store::UserStore;
use loginflow::server::AuthServer;
use loginflow::ui::login::{LoginIntent, Screen};
use loginflow::ui::session::LoginSession;

#[derive(Parser)]
#[command(name = "loginflow", about = "Toy auth server and a state-driven login client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the authentication server.
    Serve {
        /// Bind address override (host:port).
        #[arg(long)]
        bind: Option<String>,
    },
    /// Drive the login flow against a running server, then log out.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Server base URL override.
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    loginflow::init_tracing();
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or(config.server.bind_addr);
            let mut server = AuthServer::new(UserStore::new(config.users));
            server.try_bind(&bind_addr).await?;
            server.run().await?;
        }
        Command::Login {
            email,
            password,
            server,
        } => {
            let base_url = server.unwrap_or(config.client.base_url);
            let connect_timeout = Duration::from_secs(config.client.connect_timeout_seconds.into());
            let client = AuthClient::new(base_url, connect_timeout);
            let mut session = LoginSession::new(client);

            session.dispatch(LoginIntent::EmailChanged(email)).await;
            session.dispatch(LoginIntent::PasswordChanged(password)).await;
            session.dispatch(LoginIntent::LoginClicked).await;

            {
                let state = session.state();
                if state.is_email_error || state.is_password_error {
                    if state.is_email_error {
                        eprintln!("invalid email address");
                    }
                    if state.is_password_error {
                        eprintln!("password must be at least 6 characters");
                    }
                    std::process::exit(2);
                }
                if state.current_screen != Screen::Profile {
                    let message = state.error_message.as_deref().unwrap_or("login failed");
                    eprintln!("{message}");
                    std::process::exit(1);
                }
                println!("logged in as {}", state.email);
            }

            session.dispatch(LoginIntent::LogoutClicked).await;
            match session.state().current_screen {
                Screen::Login => println!("logged out"),
                Screen::Profile => {
                    let state = session.state();
                    let message = state.error_message.as_deref().unwrap_or("logout failed");
                    eprintln!("{message}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
