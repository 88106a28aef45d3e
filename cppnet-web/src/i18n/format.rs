use cppnet_core::i18n::Locale;
#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn intl_format(locale: Locale, opts: &Object, value: f64) -> Option<String> {
    let locales = Array::new();
    locales.push(&JsValue::from_str(locale.code()));
    let nf = Intl::NumberFormat::new(&locales, opts);
    let format_fn: Function = nf.format();
    format_fn
        .call1(&nf, &JsValue::from_f64(value))
        .ok()
        .and_then(|v| v.as_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn fallback_usd(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Format a count with the locale's digit grouping.
#[must_use]
pub fn fmt_number(value: u64, locale: Locale) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_precision_loss)]
        let as_float = value as f64;
        intl_format(locale, &Object::new(), as_float).unwrap_or_else(|| group_thousands(value))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
        group_thousands(value)
    }
}

/// Dollar amount handed to `Intl.NumberFormat`.
#[cfg(any(target_arch = "wasm32", test))]
#[allow(clippy::cast_precision_loss)]
fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format a USD amount held in cents.
#[must_use]
pub fn fmt_currency(cents: i64, locale: Locale) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let amount = cents_to_amount(cents);
        let opts = Object::new();
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("style"),
            &JsValue::from_str("currency"),
        );
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("currency"),
            &JsValue::from_str("USD"),
        );
        intl_format(locale, &opts, amount).unwrap_or_else(|| fallback_usd(cents))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
        fallback_usd(cents)
    }
}

/// Signed percentage for trend badges, e.g. `+12.5%`.
#[must_use]
pub fn fmt_trend(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{pct:.1}%")
    } else {
        format!("{pct:.1}%")
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_grouped_on_host() {
        assert_eq!(fmt_number(0, Locale::En), "0");
        assert_eq!(fmt_number(842, Locale::En), "842");
        assert_eq!(fmt_number(1540, Locale::Ar), "1,540");
        assert_eq!(fmt_number(1_234_567, Locale::En), "1,234,567");
    }

    #[test]
    fn currency_uses_dollars_and_cents() {
        assert_eq!(fmt_currency(1_245_050, Locale::En), "$12,450.50");
        assert_eq!(fmt_currency(45, Locale::En), "$0.45");
        assert_eq!(fmt_currency(-99, Locale::Ar), "-$0.99");
        assert_eq!(fmt_currency(i64::MIN, Locale::En).chars().next(), Some('-'));
    }

    #[test]
    fn large_amounts_keep_their_magnitude() {
        assert!((cents_to_amount(1_245_050) - 12_450.5).abs() < f64::EPSILON);
        assert!((cents_to_amount(5_000_000_000) - 50_000_000.0).abs() < f64::EPSILON);
        assert!((cents_to_amount(-250_000_000_000) + 2_500_000_000.0).abs() < f64::EPSILON);
        assert_eq!(fmt_currency(5_000_000_000, Locale::En), "$50,000,000.00");
    }

    #[test]
    fn trends_carry_explicit_sign() {
        assert_eq!(fmt_trend(12.5), "+12.5%");
        assert_eq!(fmt_trend(-2.1), "-2.1%");
        assert_eq!(fmt_trend(0.0), "+0.0%");
    }
}
