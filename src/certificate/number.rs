use chrono::{Datelike, Local};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CERT_NUMBER_RE: Regex =
        Regex::new(r"^SPPTG/(?P<kode>[0-9.]+)/(?P<urut>\d{3})/(?P<tahun>\d{4})$")
            .expect("certificate number regex");
}

/// Parsed parts of a certificate number, kept in their zero-padded
/// string forms as printed on the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateNumberParts {
    pub kode_kabupaten: String,
    pub nomor_urut: String,
    pub tahun: String,
}

/// Format: `SPPTG/{kode kabupaten}/{sequence, 3 digits}/{year}`.
pub fn format_certificate_number(nomor_urut: u32, kode_kabupaten: &str, tahun: i32) -> String {
    format!("SPPTG/{kode_kabupaten}/{nomor_urut:03}/{tahun}")
}

/// Same as [`format_certificate_number`] with the year taken from the
/// local clock.
pub fn generate_certificate_number(nomor_urut: u32, kode_kabupaten: &str) -> String {
    format_certificate_number(nomor_urut, kode_kabupaten, Local::now().year())
}

pub fn parse_certificate_number(value: &str) -> Option<CertificateNumberParts> {
    let caps = CERT_NUMBER_RE.captures(value)?;
    Some(CertificateNumberParts {
        kode_kabupaten: caps["kode"].to_string(),
        nomor_urut: caps["urut"].to_string(),
        tahun: caps["tahun"].to_string(),
    })
}

/// What the next sequence number for `tahun` would be, given a snapshot
/// of the numbers issued so far.
///
/// Advisory only: the caller must allocate the number inside an atomic
/// read-modify-write against storage. Entries that do not parse are
/// skipped.
pub fn next_certificate_sequence(existing: &[String], tahun: i32) -> u32 {
    let tahun_str = tahun.to_string();
    let max_urut = existing
        .iter()
        .filter_map(|raw| match parse_certificate_number(raw) {
            Some(parts) if parts.tahun == tahun_str => parts.nomor_urut.parse::<u32>().ok(),
            Some(_) => None,
            None => {
                log::warn!("skipping malformed certificate number: {raw}");
                None
            }
        })
        .max();

    max_urut.map(|m| m + 1).unwrap_or(1)
}
