//! Coupons command - check a code against an order value

use super::Context;
use anyhow::Result;
use clap::Subcommand;
use plaready_api_client::endpoints::coupons::{calculate_discount, DiscountType};
use plaready_cli::Status;
use plaready_core::format::format_currency;
use serde_json::json;

#[derive(Subcommand)]
pub enum CouponsCommand {
    /// Validate a coupon and show the discount it gives
    Validate {
        /// Coupon code
        code: String,

        /// Order value in rupees
        order_value: f64,
    },
}

pub async fn run(ctx: &Context, command: CouponsCommand) -> Result<()> {
    match command {
        CouponsCommand::Validate { code, order_value } => {
            let validation = ctx
                .load(
                    "Checking coupon...",
                    ctx.client().coupons().validate(&code, order_value),
                )
                .await?;
            let discount = calculate_discount(&validation, order_value);
            let total = order_value - discount;

            let report = json!({
                "code": code,
                "validation": validation,
                "discount": discount,
                "total": total,
            });
            ctx.emit(&report, |_| {
                if !validation.valid {
                    Status::warning(&format!("Coupon {code} is not valid"));
                    return;
                }
                let kind = match validation.discount_type {
                    DiscountType::Percentage => format!("{}% off", validation.discount_value),
                    DiscountType::Fixed => format!("{} off", format_currency(validation.discount_value)),
                };
                Status::success(&format!("Coupon {code} applies: {kind}"));
                Status::field("Order value", format_currency(order_value));
                Status::field("Discount", format_currency(discount));
                Status::field("Total", format_currency(total));
            })
        }
    }
}
