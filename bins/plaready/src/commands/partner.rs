//! Partner command - apply as a workshop and work the order queue

use super::orders::print_orders;
use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};
use plaready_api_client::endpoints::partner::PartnerRegistration;

#[derive(Subcommand)]
pub enum PartnerCommand {
    /// Apply to become a stringing partner
    Register(RegisterArgs),

    /// List orders assigned to you
    Orders {
        /// Only orders in this status, e.g. picked_up
        #[arg(long)]
        status: Option<String>,
    },

    /// Move an order to a new status
    UpdateStatus {
        /// Order ID
        id: i64,

        /// New status, e.g. in_repair
        status: String,
    },
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Trading name shown to customers
    #[arg(long)]
    business_name: String,

    /// Workshop address
    #[arg(long)]
    address: String,

    #[arg(long)]
    city: String,

    #[arg(long)]
    pincode: String,

    /// GST number, if registered
    #[arg(long)]
    gst_number: Option<String>,

    /// Payout account number
    #[arg(long)]
    bank_account: String,

    /// IFSC code of the payout account
    #[arg(long)]
    ifsc_code: String,
}

impl From<RegisterArgs> for PartnerRegistration {
    fn from(args: RegisterArgs) -> Self {
        Self {
            business_name: args.business_name,
            address: args.address,
            city: args.city,
            pincode: args.pincode,
            gst_number: args.gst_number,
            bank_account: args.bank_account,
            ifsc_code: args.ifsc_code,
        }
    }
}

pub async fn run(ctx: &Context, command: PartnerCommand) -> Result<()> {
    let partner = ctx.client().partner();

    match command {
        PartnerCommand::Register(args) => {
            let registration = PartnerRegistration::from(args);
            let response = ctx
                .load("Submitting application...", partner.register(&registration))
                .await?;
            ctx.emit(&response, |_| ())?;
            ctx.success(&response.message)
        }

        PartnerCommand::Orders { status } => {
            let orders = ctx
                .load("Loading orders...", partner.orders(status.as_deref()))
                .await?;
            print_orders(ctx, &orders)
        }

        PartnerCommand::UpdateStatus { id, status } => {
            let response = ctx
                .load("Updating order...", partner.update_order_status(id, &status))
                .await?;
            ctx.emit(&response, |_| ())?;
            ctx.success(&response.message)
        }
    }
}
