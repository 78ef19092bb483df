//! # Locale Formatting
//!
//! The [`Formatter`] interface the catalog renders through, and a built-in
//! table of locale formatters.
//!
//! ## Locale Registry
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    LOCALES (static, read-only)                          │
//! │                                                                         │
//! │   tag     currency      date          "no reviews"                      │
//! │   ─────   ───────────   ───────────   ──────────────                    │
//! │   en-GB   £1,234.56     21/09/2021    Not reviewed      ◄── fallback    │
//! │   en-US   $1,234.56     9/21/21       Not reviewed                      │
//! │   ru-RU   1 234,56 ₽    21.09.2021    Нет отзывов                       │
//! │   fr-FR   1 234,56 €    21/09/2021    Aucun avis                        │
//! │   zh-CN   ¥1,234.56     2021/9/21     暂无评论                          │
//! │                                                                         │
//! │   formatter_or_default("xx-YY") ──► en-GB                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is a compile-time `static`; there is no way to add or change a
//! locale at runtime.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use shopkeep_core::{Money, Product, ProductKind, Rateable, Review};

/// Locale used when a requested tag is not in the registry.
pub const DEFAULT_LOCALE: &str = "en-GB";

/// Text key for the line shown when a product has no reviews.
pub const NO_REVIEWS: &str = "no.reviews";
/// Text key for the perishable product label.
pub const PERISHABLE: &str = "perishable";
/// Text key for the non-perishable product label.
pub const NON_PERISHABLE: &str = "non_perishable";

// =============================================================================
// Formatter Trait
// =============================================================================

/// Renders catalog values as localized text.
///
/// The catalog never formats anything itself; every line of a report comes
/// from one of these methods.
pub trait Formatter: Send + Sync {
    /// Locale tag this formatter renders for, e.g. `"en-GB"`.
    fn tag(&self) -> &str;

    /// One line describing a product: kind, name, price, rating, best-before.
    fn format_product(&self, product: &Product) -> String;

    /// One line describing a review: rating and comment.
    fn format_review(&self, review: &Review) -> String;

    /// Localized text for a resource key. Unknown keys come back unchanged.
    fn text(&self, key: &str) -> String;

    fn format_currency(&self, amount: Money) -> String;

    fn format_date(&self, date: NaiveDate) -> String;
}

// =============================================================================
// Locale Formatter
// =============================================================================

/// How a locale writes money.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    /// `£1.99` when true, `1,99 €` when false.
    pub symbol_first: bool,
    pub decimal_separator: char,
    pub group_separator: &'static str,
}

/// Message templates and labels for one locale.
///
/// Templates use positional `{n}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    /// `{0}` name, `{1}` price, `{2}` rating, `{3}` best-before, `{4}` kind.
    pub product: &'static str,
    /// `{0}` rating, `{1}` comment.
    pub review: &'static str,
    pub no_reviews: &'static str,
    pub perishable: &'static str,
    pub non_perishable: &'static str,
}

/// Table-driven [`Formatter`] for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleFormatter {
    pub tag: &'static str,
    pub currency: CurrencyStyle,
    /// `chrono` strftime pattern for the short date style.
    pub date_pattern: &'static str,
    pub messages: Messages,
}

impl Formatter for LocaleFormatter {
    fn tag(&self) -> &str {
        self.tag
    }

    fn format_product(&self, product: &Product) -> String {
        let kind = match product.kind() {
            ProductKind::Perishable { .. } => self.messages.perishable,
            ProductKind::NonPerishable => self.messages.non_perishable,
        };
        let price = self.format_currency(product.price());
        let best_before = self.format_date(product.best_before());

        render(
            self.messages.product,
            &[
                product.name(),
                price.as_str(),
                product.rating().stars(),
                best_before.as_str(),
                kind,
            ],
        )
    }

    fn format_review(&self, review: &Review) -> String {
        render(
            self.messages.review,
            &[review.rating().stars(), review.comment()],
        )
    }

    fn text(&self, key: &str) -> String {
        match key {
            NO_REVIEWS => self.messages.no_reviews,
            PERISHABLE => self.messages.perishable,
            NON_PERISHABLE => self.messages.non_perishable,
            other => other,
        }
        .to_string()
    }

    fn format_currency(&self, amount: Money) -> String {
        let style = &self.currency;
        // Display is already rounded half-up to exactly two places
        let plain = amount.to_string();
        let (sign, digits) = match plain.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", plain.as_str()),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));
        let number = format!(
            "{}{}{}",
            group_thousands(whole, style.group_separator),
            style.decimal_separator,
            fraction
        );

        if style.symbol_first {
            format!("{}{}{}", sign, style.symbol, number)
        } else {
            format!("{}{}\u{a0}{}", sign, number, style.symbol)
        }
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_pattern).to_string()
    }
}

/// Substitutes `{n}` placeholders in one pass.
///
/// Placeholders with no matching argument are left as written, and text
/// coming from arguments is never re-scanned.
fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let placeholder = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .filter(|&index| index < args.len())
                .map(|index| (index, close))
        });

        match placeholder {
            Some((index, close)) => {
                out.push_str(args[index]);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Registry
// =============================================================================

const ENGLISH: Messages = Messages {
    product: "{4}: {0}, Price: {1}, Rating: {2}, Best Before: {3}",
    review: "Review: {0}\t{1}",
    no_reviews: "Not reviewed",
    perishable: "Food",
    non_perishable: "Drink",
};

/// Supported locales. The first entry is [`DEFAULT_LOCALE`].
static LOCALES: [LocaleFormatter; 5] = [
    LocaleFormatter {
        tag: "en-GB",
        currency: CurrencyStyle {
            symbol: "£",
            symbol_first: true,
            decimal_separator: '.',
            group_separator: ",",
        },
        date_pattern: "%d/%m/%Y",
        messages: ENGLISH,
    },
    LocaleFormatter {
        tag: "en-US",
        currency: CurrencyStyle {
            symbol: "$",
            symbol_first: true,
            decimal_separator: '.',
            group_separator: ",",
        },
        date_pattern: "%-m/%-d/%y",
        messages: ENGLISH,
    },
    LocaleFormatter {
        tag: "ru-RU",
        currency: CurrencyStyle {
            symbol: "₽",
            symbol_first: false,
            decimal_separator: ',',
            group_separator: "\u{a0}",
        },
        date_pattern: "%d.%m.%Y",
        messages: Messages {
            product: "{4}: {0}, Цена: {1}, Рейтинг: {2}, Годен до: {3}",
            review: "Отзыв: {0}\t{1}",
            no_reviews: "Нет отзывов",
            perishable: "Еда",
            non_perishable: "Напиток",
        },
    },
    LocaleFormatter {
        tag: "fr-FR",
        currency: CurrencyStyle {
            symbol: "€",
            symbol_first: false,
            decimal_separator: ',',
            group_separator: "\u{202f}",
        },
        date_pattern: "%d/%m/%Y",
        messages: Messages {
            product: "{4} : {0}, Prix : {1}, Note : {2}, À consommer avant : {3}",
            review: "Avis : {0}\t{1}",
            no_reviews: "Aucun avis",
            perishable: "Aliment",
            non_perishable: "Boisson",
        },
    },
    LocaleFormatter {
        tag: "zh-CN",
        currency: CurrencyStyle {
            symbol: "¥",
            symbol_first: true,
            decimal_separator: '.',
            group_separator: ",",
        },
        date_pattern: "%Y/%-m/%-d",
        messages: Messages {
            product: "{4}：{0}，价格：{1}，评分：{2}，保质期：{3}",
            review: "评论：{0}\t{1}",
            no_reviews: "暂无评论",
            perishable: "食品",
            non_perishable: "饮料",
        },
    },
];

/// Looks up a locale by tag. `en_gb` and `EN-GB` both find `en-GB`.
pub fn formatter_for(tag: &str) -> Option<&'static LocaleFormatter> {
    let normalized = tag.trim().replace('_', "-");
    LOCALES
        .iter()
        .find(|locale| locale.tag.eq_ignore_ascii_case(&normalized))
}

/// Looks up a locale, falling back to [`DEFAULT_LOCALE`].
pub fn formatter_or_default(tag: &str) -> &'static LocaleFormatter {
    formatter_for(tag).unwrap_or(&LOCALES[0])
}

/// Tags of every registered locale.
pub fn supported_locales() -> BTreeSet<&'static str> {
    LOCALES.iter().map(|locale| locale.tag).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_core::Rating;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 9, 21).unwrap()
    }

    #[test]
    fn test_registry_contents() {
        let tags: Vec<_> = supported_locales().into_iter().collect();
        assert_eq!(tags, ["en-GB", "en-US", "fr-FR", "ru-RU", "zh-CN"]);
        assert_eq!(LOCALES[0].tag, DEFAULT_LOCALE);
    }

    #[test]
    fn test_lookup_and_fallback() {
        assert_eq!(formatter_for("fr-FR").map(|f| f.tag), Some("fr-FR"));
        assert_eq!(formatter_for("en_us").map(|f| f.tag), Some("en-US"));
        assert!(formatter_for("de-DE").is_none());
        assert_eq!(formatter_or_default("de-DE").tag, "en-GB");
        assert_eq!(formatter_or_default("").tag, "en-GB");
    }

    #[test]
    fn test_currency_formats() {
        let amount = Money::from_cents(123_456);
        assert_eq!(formatter_or_default("en-GB").format_currency(amount), "£1,234.56");
        assert_eq!(formatter_or_default("en-US").format_currency(amount), "$1,234.56");
        assert_eq!(
            formatter_or_default("ru-RU").format_currency(amount),
            "1\u{a0}234,56\u{a0}₽"
        );
        assert_eq!(
            formatter_or_default("fr-FR").format_currency(amount),
            "1\u{202f}234,56\u{a0}€"
        );
        assert_eq!(formatter_or_default("zh-CN").format_currency(amount), "¥1,234.56");
    }

    #[test]
    fn test_currency_small_and_negative() {
        let gb = formatter_or_default("en-GB");
        assert_eq!(gb.format_currency(Money::from_cents(20)), "£0.20");
        assert_eq!(gb.format_currency(Money::zero()), "£0.00");
        assert_eq!(gb.format_currency(Money::from_cents(-550)), "-£5.50");
        assert_eq!(gb.format_currency(Money::from_cents(100_000_000)), "£1,000,000.00");
    }

    #[test]
    fn test_currency_rounds_sub_cent_prices() {
        let price: Money = "1234.565".parse().unwrap();
        assert_eq!(formatter_or_default("en-GB").format_currency(price), "£1,234.57");
        assert_eq!(
            formatter_or_default("fr-FR").format_currency(price),
            "1\u{202f}234,57\u{a0}€"
        );
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(formatter_or_default("en-GB").format_date(date()), "21/09/2021");
        assert_eq!(formatter_or_default("en-US").format_date(date()), "9/21/21");
        assert_eq!(formatter_or_default("ru-RU").format_date(date()), "21.09.2021");
        assert_eq!(formatter_or_default("zh-CN").format_date(date()), "2021/9/21");
    }

    #[test]
    fn test_format_product() {
        let cake = Product::perishable(103, "Cake", Money::from_cents(399), Rating::FourStar, date());
        assert_eq!(
            formatter_or_default("en-GB").format_product(&cake),
            "Food: Cake, Price: £3.99, Rating: ★★★★☆, Best Before: 21/09/2021"
        );
        assert_eq!(
            formatter_or_default("fr-FR").format_product(&cake),
            "Aliment : Cake, Prix : 3,99\u{a0}€, Note : ★★★★☆, À consommer avant : 21/09/2021"
        );
    }

    #[test]
    fn test_format_review() {
        let review = Review::new(Rating::TwoStar, "Rather weak tea");
        assert_eq!(
            formatter_or_default("en-GB").format_review(&review),
            "Review: ★★☆☆☆\tRather weak tea"
        );
    }

    #[test]
    fn test_text_lookup() {
        let gb = formatter_or_default("en-GB");
        assert_eq!(gb.text(NO_REVIEWS), "Not reviewed");
        assert_eq!(formatter_or_default("ru-RU").text(NO_REVIEWS), "Нет отзывов");
        assert_eq!(gb.text("unknown.key"), "unknown.key");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{0} and {1}", &["a", "b"]), "a and b");
        assert_eq!(render("{0} {5} {x} {", &["a"]), "a {5} {x} {");
        // argument text containing braces is not re-expanded
        assert_eq!(render("{0}-{1}", &["{1}", "b"]), "{1}-b");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("123", ","), "123");
        assert_eq!(group_thousands("1234", ","), "1,234");
        assert_eq!(group_thousands("1234567", ","), "1,234,567");
    }
}
