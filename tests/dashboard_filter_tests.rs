use spptg_engine::dashboard::{
    build_dashboard_search_params, parse_dashboard_filters, FilterPatch, QueryParams, StatusFilter,
};

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    QueryParams::from_pairs(pairs.iter().copied())
}

#[test]
fn test_inverted_date_range_is_swapped() {
    let p = params(&[("dateFrom", "2026-02-10"), ("dateTo", "2026-01-10")]);
    let filters = parse_dashboard_filters(&p);
    assert_eq!(filters.date_from, "2026-01-10");
    assert_eq!(filters.date_to, "2026-02-10");
}

#[test]
fn test_desa_id_rejects_non_positive_input() {
    for bad in ["abc", "-5"] {
        let filters = parse_dashboard_filters(&params(&[("desaId", bad)]));
        assert_eq!(filters.desa_id, "", "input {bad:?}");
    }
}

#[test]
fn test_setting_desa_id_always_removes_kecamatan() {
    let current = params(&[("kecamatan", "Cakung"), ("status", "diajukan")]);

    // Even clearing desaId counts as expressing village filtering by id.
    for desa_id in ["9", ""] {
        let patch = FilterPatch {
            desa_id: Some(desa_id.to_string()),
            ..Default::default()
        };
        let built = build_dashboard_search_params(&current, &patch);
        assert!(!built.contains_key("kecamatan"), "desaId {desa_id:?}");
    }
}

#[test]
fn test_untouched_patch_leaves_params_alone() {
    let current = params(&[("page", "7"), ("sort", "tanggal"), ("search", "budi")]);
    let built = build_dashboard_search_params(&current, &FilterPatch::default());
    assert_eq!(built.get("page"), Some("7"));
    assert_eq!(built.get("sort"), Some("tanggal"));
    assert_eq!(built.get("search"), Some("budi"));
}

#[test]
fn test_build_scrubs_inherited_invalid_dates() {
    // A malformed date already sitting in the URL is dropped by the
    // re-normalization pass even when the patch does not touch dates.
    let current = params(&[("dateFrom", "01/02/2026")]);
    let built = build_dashboard_search_params(&current, &FilterPatch::default());
    assert!(!built.contains_key("dateFrom"));
}

#[test]
fn test_round_trip_stability() {
    let p = params(&[
        ("search", " sertifikat "),
        ("status", "diterbitkan"),
        ("desaId", "12"),
        ("dateFrom", "2026-05-01"),
        ("dateTo", "2026-04-01"),
        ("page", "2"),
    ]);
    let once = parse_dashboard_filters(&p);
    assert_eq!(once.search, "sertifikat");
    assert!(matches!(once.status, StatusFilter::Only(_)));

    let rebuilt = build_dashboard_search_params(&p, &once.to_patch());
    assert_eq!(parse_dashboard_filters(&rebuilt), once);
    assert_eq!(rebuilt.get("page"), Some("2"));
}
