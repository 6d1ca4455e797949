use crate::draft::SubmissionStatus;

use super::model::{DashboardFilters, FilterPatch, QueryParams, StatusFilter};

const KEY_SEARCH: &str = "search";
const KEY_STATUS: &str = "status";
const KEY_DESA_ID: &str = "desaId";
const KEY_KECAMATAN: &str = "kecamatan";
const KEY_DATE_FROM: &str = "dateFrom";
const KEY_DATE_TO: &str = "dateTo";

/// Parse raw query parameters into the canonical filter record.
///
/// Total: unknown statuses collapse to `all`, malformed ids and dates to
/// empty, and an inverted date range is swapped. Invalid input shows
/// everything; it never surfaces as an error.
pub fn parse_dashboard_filters(params: &QueryParams) -> DashboardFilters {
    let search = params.get(KEY_SEARCH).unwrap_or("").trim().to_string();

    let status = params
        .get(KEY_STATUS)
        .and_then(SubmissionStatus::parse)
        .map(StatusFilter::Only)
        .unwrap_or(StatusFilter::All);

    let desa_id = params
        .get(KEY_DESA_ID)
        .filter(|v| is_valid_desa_id(v))
        .unwrap_or("")
        .to_string();

    let kecamatan = params.get(KEY_KECAMATAN).unwrap_or("").trim().to_string();

    let (date_from, date_to) =
        normalize_date_range(params.get(KEY_DATE_FROM), params.get(KEY_DATE_TO));

    DashboardFilters {
        search,
        status,
        desa_id,
        kecamatan,
        date_from,
        date_to,
    }
}

/// Apply a filter patch on top of an existing parameter set.
///
/// Starts from a clone, so unrelated keys keep their values and
/// positions. Default sentinels delete their key instead of writing the
/// default, keeping URLs minimal and idempotent. Patching `desaId`
/// always drops the legacy `kecamatan` key (a patch that sets both
/// re-adds it afterwards), and dates are re-normalized at the end so the
/// result is never internally inconsistent.
pub fn build_dashboard_search_params(current: &QueryParams, patch: &FilterPatch) -> QueryParams {
    let mut params = current.clone();

    if let Some(search) = &patch.search {
        set_or_delete(&mut params, KEY_SEARCH, search.trim());
    }

    if let Some(status) = patch.status {
        match status {
            StatusFilter::All => params.remove(KEY_STATUS),
            StatusFilter::Only(s) => params.set(KEY_STATUS, s.as_str()),
        }
    }

    if let Some(desa_id) = &patch.desa_id {
        // One-way migration: once the caller filters by id, the old
        // free-text key is no longer trusted.
        params.remove(KEY_KECAMATAN);
        if is_valid_desa_id(desa_id) {
            params.set(KEY_DESA_ID, desa_id.as_str());
        } else {
            params.remove(KEY_DESA_ID);
        }
    }

    if let Some(kecamatan) = &patch.kecamatan {
        set_or_delete(&mut params, KEY_KECAMATAN, kecamatan.trim());
    }

    if let Some(date_from) = &patch.date_from {
        set_or_delete(&mut params, KEY_DATE_FROM, date_from.trim());
    }
    if let Some(date_to) = &patch.date_to {
        set_or_delete(&mut params, KEY_DATE_TO, date_to.trim());
    }

    renormalize_dates(&mut params);
    params
}

fn set_or_delete(params: &mut QueryParams, key: &str, value: &str) {
    if value.is_empty() {
        params.remove(key);
    } else {
        params.set(key, value);
    }
}

/// Re-run the date rules over whatever ended up in the parameter set:
/// malformed values are dropped, an inverted pair is swapped.
fn renormalize_dates(params: &mut QueryParams) {
    let from = params.get(KEY_DATE_FROM).map(str::to_string);
    let to = params.get(KEY_DATE_TO).map(str::to_string);
    let (from, to) = normalize_date_range(from.as_deref(), to.as_deref());
    set_or_delete(params, KEY_DATE_FROM, &from);
    set_or_delete(params, KEY_DATE_TO, &to);
}

fn normalize_date_range(from: Option<&str>, to: Option<&str>) -> (String, String) {
    let from = from.filter(|v| is_valid_iso_date(v)).unwrap_or("");
    let to = to.filter(|v| is_valid_iso_date(v)).unwrap_or("");
    // Lexicographic comparison is correct for fixed-width YYYY-MM-DD.
    if !from.is_empty() && !to.is_empty() && from > to {
        (to.to_string(), from.to_string())
    } else {
        (from.to_string(), to.to_string())
    }
}

/// Positive integer string: all digits, at least one non-zero, short
/// enough to stay representable as i64 downstream.
fn is_valid_desa_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 18
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.bytes().any(|b| b != b'0')
}

fn is_valid_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}
