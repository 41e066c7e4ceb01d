//! Orders command - book, list and inspect stringing orders

use super::Context;
use anyhow::Result;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use plaready_api_client::endpoints::orders::{CreateOrderRequest, OrderDetails, OrderSummary};
use plaready_api_client::view::{format_order, OrderView};
use plaready_cli::output::{format_count, paint_badge};
use plaready_cli::Status;
use plaready_core::format::{format_currency, format_date_time};

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// Book a stringing job
    Create(CreateArgs),

    /// List your orders
    List,

    /// Show one of your orders
    Show {
        /// Order ID
        id: i64,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    /// Service to book
    #[arg(long)]
    service: i64,

    /// Pickup time, e.g. 2024-06-01T10:00:00
    #[arg(long)]
    slot: String,

    /// Racquet model
    #[arg(long)]
    racquet: Option<String>,

    /// String model
    #[arg(long)]
    string: Option<String>,

    /// Tension, e.g. "24 lbs"
    #[arg(long)]
    tension: Option<String>,

    /// Pickup address
    #[arg(long)]
    address: Option<String>,

    /// Surcharge for the chosen string
    #[arg(long)]
    string_price: Option<f64>,

    /// Coupon code to apply
    #[arg(long)]
    coupon: Option<String>,

    /// Payment method (online, cod)
    #[arg(long)]
    payment: Option<String>,
}

impl CreateArgs {
    fn into_request(self) -> CreateOrderRequest {
        CreateOrderRequest {
            racquet_type: self.racquet,
            string_type: self.string,
            tension: self.tension,
            pickup_address: self.address,
            string_price: self.string_price,
            coupon_code: self.coupon,
            payment_method: self.payment,
            ..CreateOrderRequest::new(self.service, self.slot)
        }
    }
}

pub async fn run(ctx: &Context, command: OrdersCommand) -> Result<()> {
    match command {
        OrdersCommand::Create(args) => {
            let request = args.into_request();
            let created = ctx
                .load("Placing order...", ctx.client().orders().create(&request))
                .await?;

            ctx.emit(&created, |created| {
                Status::field("Order", &created.order_number);
                Status::field("Total", format_currency(created.total_price));
            })?;
            ctx.success(&created.message)
        }

        OrdersCommand::List => {
            let orders = ctx
                .load("Loading orders...", ctx.client().orders().my_orders())
                .await?;
            print_orders(ctx, &orders)
        }

        OrdersCommand::Show { id } => {
            let details = ctx
                .load("Loading order...", ctx.client().orders().details(id))
                .await?;
            ctx.emit(&format_order(&details), print_details)
        }
    }
}

/// Print an order list with badges, dates and totals
pub(crate) fn print_orders(ctx: &Context, orders: &[OrderSummary]) -> Result<()> {
    let views: Vec<OrderView<OrderSummary>> = orders.iter().map(format_order).collect();

    ctx.emit(&views, |views| {
        Status::header(&format_count(views.len(), "order", "orders"));
        for view in views {
            let order = &view.order;
            let who = order
                .service_name
                .as_deref()
                .or(order.customer_name.as_deref())
                .unwrap_or("-");
            println!(
                "  {:>4}  {}  {:<28} {:<20} {:>12}  {}",
                order.id.dimmed(),
                order.order_number.bold(),
                who,
                paint_badge(&view.status_badge),
                view.formatted_price,
                view.formatted_date.dimmed()
            );
        }
    })
}

fn print_details(view: &OrderView<OrderDetails>) {
    let order = &view.order;
    Status::header(&order.order_number);
    Status::field("Status", paint_badge(&view.status_badge));
    Status::field("Service", &order.service.name);
    if let Some(ref racquet) = order.racquet_type {
        Status::field("Racquet", racquet);
    }
    if let Some(ref string) = order.string_type {
        Status::field("String", string);
    }
    if let Some(ref tension) = order.tension {
        Status::field("Tension", tension);
    }
    if let Some(ref slot) = order.pickup_slot {
        Status::field("Pickup", format_date_time(slot));
    }
    if let Some(partner) = order.partner.as_ref().and_then(|p| p.business_name.as_deref()) {
        Status::field("Partner", partner);
    }
    Status::field("Base price", format_currency(order.base_price));
    Status::field("String price", format_currency(order.string_price));
    Status::field("Discount", format_currency(order.discount));
    Status::field("Total", &view.formatted_price);
    Status::field("Payment", order.payment_status.as_deref().unwrap_or("-"));
    Status::field("Placed", format_date_time(&order.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_args_fill_request() {
        let args = CreateArgs {
            service: 2,
            slot: "2024-06-01T10:00:00".to_string(),
            racquet: Some("Yonex Astrox 88".to_string()),
            string: None,
            tension: Some("24 lbs".to_string()),
            address: None,
            string_price: Some(150.0),
            coupon: Some("FIRST50".to_string()),
            payment: None,
        };

        let request = args.into_request();
        assert_eq!(request.service_id, 2);
        assert_eq!(request.pickup_slot, "2024-06-01T10:00:00");
        assert_eq!(request.tension.as_deref(), Some("24 lbs"));
        assert_eq!(request.string_price, Some(150.0));
        assert!(request.string_type.is_none());

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("payment_method").is_none());
        assert_eq!(body["coupon_code"], "FIRST50");
    }
}
