//! Auth command - register, log in and out, inspect the session

use super::Context;
use anyhow::Result;
use clap::Subcommand;
use plaready_api_client::endpoints::auth::{RegisterRequest, User, DEFAULT_ROLE};
use plaready_cli::Status;
use serde_json::json;

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create an account and log in
    Register {
        /// Mobile number used to log in
        #[arg(long)]
        phone: String,

        /// Account password
        #[arg(long, env = "PLAREADY_PASSWORD", hide_env_values = true)]
        password: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Account role (customer, partner)
        #[arg(long, default_value = DEFAULT_ROLE)]
        role: String,
    },

    /// Log in with phone and password
    Login {
        /// Mobile number
        #[arg(long)]
        phone: String,

        /// Account password
        #[arg(long, env = "PLAREADY_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out and forget the saved session
    Logout,

    /// Show the logged-in user as reported by the server
    Whoami,

    /// Check whether the saved session is still valid
    Status,
}

pub async fn run(ctx: &Context, command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::Register {
            phone,
            password,
            name,
            email,
            role,
        } => {
            let mut request = RegisterRequest::new(phone, password).with_role(role);
            if let Some(name) = name {
                request = request.with_name(name);
            }
            if let Some(email) = email {
                request = request.with_email(email);
            }

            let response = ctx
                .load("Creating account...", ctx.client().auth().register(&request))
                .await?;
            ctx.session().remember(&response.user)?;

            ctx.emit(&response, |_| ())?;
            ctx.success(&format!("{} as {}", response.message, display_name(&response.user)))
        }

        AuthCommand::Login { phone, password } => {
            let response = ctx
                .load("Logging in...", ctx.client().auth().login(&phone, &password))
                .await?;
            ctx.session().remember(&response.user)?;

            ctx.emit(&response, |_| ())?;
            ctx.success(&format!("{} as {}", response.message, display_name(&response.user)))
        }

        AuthCommand::Logout => {
            let result = ctx.load("Logging out...", ctx.client().auth().logout()).await;
            // Local state goes even when the server call fails
            ctx.session().forget()?;
            let response = result?;

            ctx.emit(&response, |_| ())?;
            ctx.success(&response.message)
        }

        AuthCommand::Whoami => {
            let user = ctx.load("Loading profile...", ctx.client().auth().current_user()).await?;
            ctx.session().remember(&user)?;
            ctx.emit(&user, print_user)
        }

        AuthCommand::Status => {
            let authenticated = ctx
                .load("Checking session...", async {
                    Ok(ctx.client().auth().is_authenticated().await)
                })
                .await?;
            let user = ctx.session().cached_user()?;

            let report = json!({"authenticated": authenticated, "user": &user});
            ctx.emit(&report, |_| match (authenticated, &user) {
                (true, Some(user)) => {
                    Status::success(&format!("Logged in as {}", display_name(user)));
                }
                (true, None) => Status::success("Logged in"),
                (false, _) => Status::warning("Not logged in"),
            })
        }
    }
}

fn display_name(user: &User) -> &str {
    user.name.as_deref().unwrap_or(&user.phone)
}

fn print_user(user: &User) {
    Status::header(display_name(user));
    Status::field("ID", user.id);
    Status::field("Phone", &user.phone);
    Status::field("Email", user.email.as_deref().unwrap_or("-"));
    Status::field("Role", &user.role);
}
