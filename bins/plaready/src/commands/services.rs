//! Services command - browse the stringing catalog

use super::Context;
use anyhow::{bail, Result};
use clap::Subcommand;
use owo_colors::OwoColorize;
use plaready_api_client::endpoints::services::Service;
use plaready_cli::output::format_count;
use plaready_cli::Status;
use plaready_core::format::format_currency;

#[derive(Subcommand)]
pub enum ServicesCommand {
    /// List every service on offer
    List,

    /// Show one service
    Show {
        /// Service ID
        id: i64,
    },
}

pub async fn run(ctx: &Context, command: ServicesCommand) -> Result<()> {
    match command {
        ServicesCommand::List => {
            let services = ctx
                .load("Loading services...", ctx.client().services().get_all())
                .await?;
            ctx.emit(&services, |services| {
                Status::header(&format_count(services.len(), "service", "services"));
                for service in services {
                    println!(
                        "  {:>4}  {:<32} {:<12} {}",
                        service.id.dimmed(),
                        service.name,
                        service.category.as_deref().unwrap_or("-"),
                        format_currency(service.base_price).green()
                    );
                }
            })
        }

        ServicesCommand::Show { id } => {
            let Some(service) = ctx
                .load("Loading service...", ctx.client().services().get_by_id(id))
                .await?
            else {
                bail!("Service {id} not found");
            };
            ctx.emit(&service, print_service)
        }
    }
}

fn print_service(service: &Service) {
    Status::header(&service.name);
    Status::field("ID", service.id);
    Status::field("Category", service.category.as_deref().unwrap_or("-"));
    Status::field("Price", format_currency(service.base_price));
    if let Some(ref description) = service.description {
        Status::field("Description", description);
    }
}
