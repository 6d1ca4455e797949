//! Terbilang - Indonesian spelled-out numbers for legal documents.
//!
//! The certificate body quotes the land area in words ("seratus dua
//! puluh lima koma lima puluh meter persegi"), so the conversion has to
//! follow the Indonesian irregulars: `sebelas` for 11, `N belas` for the
//! teens, and the `se-` prefix for a single hundred or thousand.

const SATUAN: [&str; 12] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan", "sepuluh",
    "sebelas",
];

/// Convert a number to Indonesian words.
///
/// Negative values get a `minus ` prefix. The fractional part is rounded
/// to two decimal digits first and rendered as `koma <words>` of those
/// two digits, so `125.5` reads "... koma lima puluh"; precision below
/// two digits is not represented.
pub fn terbilang(value: f64) -> String {
    if !value.is_finite() {
        return "nol".to_string();
    }

    // Format first so 0.999 carries into 1.00 before any wording.
    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let int_n: u64 = int_part.parse().unwrap_or(0);
    let dec_n: u64 = dec_part.parse().unwrap_or(0);

    let mut words = if int_n == 0 {
        "nol".to_string()
    } else {
        integer_words(int_n)
    };
    if dec_n != 0 {
        words = format!("{words} koma {}", integer_words(dec_n));
    }
    if value < 0.0 && (int_n != 0 || dec_n != 0) {
        words = format!("minus {words}");
    }
    words
}

/// Recursive magnitude decomposition. Returns an empty string for 0 so
/// remainders compose cleanly.
fn integer_words(n: u64) -> String {
    match n {
        0..=11 => SATUAN[n as usize].to_string(),
        12..=19 => format!("{} belas", integer_words(n - 10)),
        20..=99 => join(format!("{} puluh", integer_words(n / 10)), integer_words(n % 10)),
        100..=199 => join("seratus".to_string(), integer_words(n % 100)),
        200..=999 => join(
            format!("{} ratus", integer_words(n / 100)),
            integer_words(n % 100),
        ),
        1_000..=1_999 => join("seribu".to_string(), integer_words(n % 1_000)),
        2_000..=999_999 => join(
            format!("{} ribu", integer_words(n / 1_000)),
            integer_words(n % 1_000),
        ),
        1_000_000..=999_999_999 => join(
            format!("{} juta", integer_words(n / 1_000_000)),
            integer_words(n % 1_000_000),
        ),
        _ => join(
            format!("{} miliar", integer_words(n / 1_000_000_000)),
            integer_words(n % 1_000_000_000),
        ),
    }
}

fn join(head: String, tail: String) -> String {
    if tail.is_empty() {
        head
    } else {
        format!("{head} {tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(terbilang(0.0), "nol");
    }

    #[test]
    fn test_irregulars() {
        assert_eq!(terbilang(11.0), "sebelas");
        assert_eq!(terbilang(17.0), "tujuh belas");
        assert_eq!(terbilang(100.0), "seratus");
        assert_eq!(terbilang(1000.0), "seribu");
    }

    #[test]
    fn test_composite() {
        assert_eq!(terbilang(1234.0), "seribu dua ratus tiga puluh empat");
        assert_eq!(
            terbilang(2_500_000.0),
            "dua juta lima ratus ribu"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(terbilang(-5.0), "minus lima");
        assert_eq!(terbilang(-0.001), "nol");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(terbilang(125.5), "seratus dua puluh lima koma lima puluh");
        assert_eq!(terbilang(0.25), "nol koma dua puluh lima");
        assert_eq!(terbilang(0.999), "satu");
    }
}
