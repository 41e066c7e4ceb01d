//! Coupon endpoints and discount arithmetic

use crate::client::PlaReadyClient;
use crate::error::ApiResult;
use serde::{Deserialize, Deserializer, Serialize};

/// Coupons API interface
#[derive(Clone)]
pub struct CouponsApi {
    client: PlaReadyClient,
}

impl CouponsApi {
    /// Create a new coupons API interface
    pub(crate) fn new(client: PlaReadyClient) -> Self {
        Self { client }
    }

    /// Check a coupon code against an order value
    ///
    /// POST /coupons/validate. Rejected codes come back as an error carrying
    /// the server's reason (expired, usage limit, minimum order value).
    pub async fn validate(&self, code: &str, order_value: f64) -> ApiResult<CouponValidation> {
        let body = ValidateCouponRequest { code, order_value };
        self.client.post("/coupons/validate", &body).await
    }
}

#[derive(Serialize)]
struct ValidateCouponRequest<'a> {
    code: &'a str,
    order_value: f64,
}

/// How a coupon's value is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` percent of the order value
    Percentage,
    /// `discount_value` rupees off; unrecognised types are applied this way too
    #[default]
    #[serde(other)]
    Fixed,
}

/// Result of validating a coupon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponValidation {
    /// Whether the coupon applies
    pub valid: bool,
    /// Discount computed by the server, when provided
    #[serde(default)]
    pub discount: Option<f64>,
    /// How `discount_value` is applied; `null` means fixed
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_type: DiscountType,
    /// Percentage or rupee amount; `null` means zero
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_value: f64,
    /// Upper bound for percentage discounts
    #[serde(default)]
    pub max_discount: Option<f64>,
}

/// Coupon columns are nullable on the server and come back as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl CouponValidation {
    /// Discount this coupon gives on `order_value`
    #[must_use]
    pub fn discount_for(&self, order_value: f64) -> f64 {
        calculate_discount(self, order_value)
    }
}

/// Discount in rupees for a validated coupon
///
/// Invalid coupons give nothing. Percentage coupons are clamped to
/// `max_discount` when a non-zero cap is set. Fixed coupons give their value
/// regardless of the order value.
#[must_use]
pub fn calculate_discount(coupon: &CouponValidation, order_value: f64) -> f64 {
    if !coupon.valid {
        return 0.0;
    }

    match coupon.discount_type {
        DiscountType::Percentage => {
            let discount = order_value * coupon.discount_value / 100.0;
            match coupon.max_discount {
                Some(cap) if cap != 0.0 => discount.min(cap),
                _ => discount,
            }
        }
        DiscountType::Fixed => coupon.discount_value,
    }
}
