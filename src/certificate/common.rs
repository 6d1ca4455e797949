//! Shared helpers for certificate assembly.

use chrono::{Datelike, NaiveDate};

/// Format a date in Indonesian long form (e.g., "17 Agustus 2026").
pub fn format_indonesian_date(date: NaiveDate) -> String {
    let months = [
        "Januari",
        "Februari",
        "Maret",
        "April",
        "Mei",
        "Juni",
        "Juli",
        "Agustus",
        "September",
        "Oktober",
        "November",
        "Desember",
    ];

    let day = date.day();
    let month = months[(date.month0() as usize).min(months.len() - 1)];
    let year = date.year();

    format!("{day} {month} {year}")
}

/// Derive the PDF filename for an issued certificate from the applicant
/// name and the certificate number, e.g. `spptg-budi-santoso-001.pdf`.
pub fn certificate_filename(nama: &str, nomor_urut: &str) -> String {
    format!("spptg-{}-{}.pdf", sanitize_component(nama, "pemohon"), nomor_urut)
}

/// Lowercase, dash-separated, ASCII-alphanumeric only.
fn sanitize_component(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !last_dash && !result.is_empty() {
                result.push('-');
                last_dash = true;
            }
        }
    }

    if result.is_empty() {
        return fallback.to_string();
    }

    result.trim_matches('-').to_string()
}
