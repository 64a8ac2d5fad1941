use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts a KRW price to whole MXN, rounding half away from zero.
pub fn krw_to_mxn(price_krw: i64, rate: Decimal) -> Decimal {
    (Decimal::from(price_krw) * rate).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a fractional KRW amount (a mean or a deviation) to MXN cents.
pub fn krw_amount_to_mxn(amount_krw: f64, rate: Decimal) -> Option<Decimal> {
    Decimal::from_f64(amount_krw)
        .map(|krw| (krw * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// `"70100 KRW"` or `"70100 KRW (946 MXN)"` when a rate is given.
pub fn format_price(price_krw: i64, rate: Option<Decimal>) -> String {
    match rate {
        Some(rate) => format!("{} KRW ({} MXN)", price_krw, krw_to_mxn(price_krw, rate)),
        None => format!("{} KRW", price_krw),
    }
}

/// Same as [`format_price`] for fractional amounts, shown to whole KRW.
pub fn format_amount(amount_krw: f64, rate: Option<Decimal>) -> String {
    let converted = rate.and_then(|rate| krw_amount_to_mxn(amount_krw, rate));
    match converted {
        Some(mxn) => format!("{:.0} KRW ({:.2} MXN)", amount_krw, mxn),
        None => format!("{:.0} KRW", amount_krw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_reference_closes() {
        // 70100 * 0.0135 = 946.35
        assert_eq!(krw_to_mxn(70100, dec!(0.0135)), dec!(946));
        // 72600 * 0.0135 = 980.1
        assert_eq!(krw_to_mxn(72600, dec!(0.0135)), dec!(980));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 100 * 0.005 = 0.5
        assert_eq!(krw_to_mxn(100, dec!(0.005)), dec!(1));
        // 300 * 0.005 = 1.5, 500 * 0.005 = 2.5
        assert_eq!(krw_to_mxn(300, dec!(0.005)), dec!(2));
        assert_eq!(krw_to_mxn(500, dec!(0.005)), dec!(3));
    }

    #[test]
    fn formats_with_and_without_rate() {
        assert_eq!(format_price(70100, None), "70100 KRW");
        assert_eq!(format_price(70100, Some(dec!(0.0135))), "70100 KRW (946 MXN)");
        assert_eq!(format_amount(1000.4, Some(dec!(0.5))), "1000 KRW (500.20 MXN)");
    }
}
