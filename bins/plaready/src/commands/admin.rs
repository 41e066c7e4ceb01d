//! Admin command - approve partners, dispatch orders, read the dashboard

use super::orders::print_orders;
use super::Context;
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use plaready_api_client::endpoints::admin::{Analytics, Partner};
use plaready_cli::output::format_count;
use plaready_cli::Status;
use plaready_core::format::{format_currency, format_date};

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List partner accounts
    Partners,

    /// Approve a pending partner
    Approve {
        /// Partner ID
        id: i64,
    },

    /// List all orders
    Orders {
        /// Only orders in this status, e.g. pending
        #[arg(long)]
        status: Option<String>,
    },

    /// Assign an order to a partner
    Assign {
        /// Order ID
        order: i64,

        /// Partner ID
        partner: i64,
    },

    /// Show marketplace figures
    Analytics,
}

pub async fn run(ctx: &Context, command: AdminCommand) -> Result<()> {
    let admin = ctx.client().admin();

    match command {
        AdminCommand::Partners => {
            let partners = ctx.load("Loading partners...", admin.partners()).await?;
            ctx.emit(&partners, |partners| print_partners(partners))
        }

        AdminCommand::Approve { id } => {
            let response = ctx
                .load("Approving partner...", admin.approve_partner(id))
                .await?;
            ctx.emit(&response, |_| ())?;
            ctx.success(&response.message)
        }

        AdminCommand::Orders { status } => {
            let orders = ctx
                .load("Loading orders...", admin.orders(status.as_deref()))
                .await?;
            print_orders(ctx, &orders)
        }

        AdminCommand::Assign { order, partner } => {
            let response = ctx
                .load("Assigning order...", admin.assign_partner(order, partner))
                .await?;
            ctx.emit(&response, |_| ())?;
            ctx.success(&response.message)
        }

        AdminCommand::Analytics => {
            let analytics = ctx.load("Loading analytics...", admin.analytics()).await?;
            ctx.emit(&analytics, print_analytics)
        }
    }
}

fn print_partners(partners: &[Partner]) {
    Status::header(&format_count(partners.len(), "partner", "partners"));
    for partner in partners {
        let status = match partner.status.as_str() {
            "approved" => partner.status.green().to_string(),
            "pending" => partner.status.yellow().to_string(),
            _ => partner.status.red().to_string(),
        };
        println!(
            "  {:>4}  {:<28} {:<14} {:<10} {:.1}★  {} orders  {}",
            partner.id.dimmed(),
            partner.business_name.as_deref().unwrap_or("-"),
            partner.city.as_deref().unwrap_or("-"),
            status,
            partner.rating,
            partner.total_orders,
            format_date(&partner.created_at).dimmed()
        );
    }
}

fn print_analytics(analytics: &Analytics) {
    Status::header("Marketplace");
    Status::field("Orders", analytics.total_orders);
    Status::field("Pending", analytics.pending_orders);
    Status::field("Revenue", format_currency(analytics.total_revenue));
    Status::field("Active partners", analytics.active_partners);
}
