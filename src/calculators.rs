//! Core money math.
//!
//! Pure functions for fare arithmetic - no configuration access, no I/O.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::PaymentMethod;

/// Rate portion of the cash discount: 3.5% of the subtotal.
const CASH_DISCOUNT_RATE: Decimal = dec!(0.035);
/// Flat portion of the cash discount.
const CASH_DISCOUNT_FLAT: Decimal = dec!(0.15);

/// Round to specified decimal places, half away from zero.
///
/// Every monetary figure in a fare breakdown is rounded with this function
/// at the point it is computed, so each line item round-trips on its own
/// rather than only the final total.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use shuttleops_fares::calculators::round_money;
///
/// assert_eq!(round_money(dec!(55.555), 2), dec!(55.56));
/// assert_eq!(round_money(dec!(10.004), 2), dec!(10.00));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Checkout-level payment-method discount.
///
/// Cash bookings get 3.5% of the subtotal plus 15 cents off; every other
/// method pays full price. Applied exactly once per quote, never inside
/// the per-vehicle fare assembly.
pub fn payment_discount(subtotal: Decimal, method: PaymentMethod) -> Decimal {
    match method {
        PaymentMethod::Cash => round_money(subtotal * CASH_DISCOUNT_RATE + CASH_DISCOUNT_FLAT, 2),
        PaymentMethod::Invoice | PaymentMethod::CreditCard | PaymentMethod::Zelle => Decimal::ZERO,
    }
}

/// Price of the return leg of a round trip.
///
/// The round-trip discount applies only to the separately priced return
/// leg, never to the outbound leg. Returns the discounted return price and
/// the discount amount, both rounded.
pub fn return_leg_price(outbound_total: Decimal, discount_percent: Decimal) -> (Decimal, Decimal) {
    let discount = round_money(outbound_total * discount_percent / dec!(100), 2);
    let price = round_money(outbound_total - discount, 2);
    (price, discount)
}
