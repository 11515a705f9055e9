//! Line-total arithmetic on smallest-currency-unit integers.
//!
//! Each line is rounded to the smallest unit before summing, so totals never
//! accumulate cross-line rounding drift. Rounding mode is banker's rounding
//! (round half to even), which carries no systematic bias over many lines.

/// Total for one line: `quantity * unit_price` discounted by
/// `discount_percent`, rounded half-to-even to the smallest currency unit.
///
/// `discount_percent` above 100 is treated as 100 (a free line); the caller
/// boundary validates the range, this stays total.
pub fn line_total(unit_price: u64, discount_percent: u8, quantity: u32) -> u64 {
    let keep = 100 - u128::from(discount_percent.min(100));
    let gross = u128::from(unit_price) * u128::from(quantity) * keep;
    div_round_half_even(gross, 100)
}

// Integer division of n / d rounding half to even. d is small (100), n fits
// u128 comfortably for any representable cart line.
fn div_round_half_even(n: u128, d: u128) -> u64 {
    let quotient = n / d;
    let remainder = n % d;
    let rounded = match (remainder * 2).cmp(&d) {
        core::cmp::Ordering::Less => quotient,
        core::cmp::Ordering::Greater => quotient + 1,
        core::cmp::Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    };
    rounded as u64
}
