use spptg_engine::draft::GeographicCoordinate;
use spptg_engine::geo::{
    build_static_map_url, centroid, encode_polygon_path, polygon_area_m2, zoom_level,
};
use spptg_engine::terbilang::terbilang;

fn coord(id: i64, lat: f64, lng: f64) -> GeographicCoordinate {
    GeographicCoordinate {
        id,
        latitude: lat,
        longitude: lng,
    }
}

#[test]
fn test_right_triangle_area() {
    // Right triangle spanning a 1x1 degree bounding box: shoelace gives
    // half the box, scaled by the fixed degree-to-meter constant.
    let coords = vec![coord(1, 0.0, 0.0), coord(2, 1.0, 0.0), coord(3, 0.0, 1.0)];
    let expected = 0.5 * 111_000.0_f64 * 111_000.0;
    let area = polygon_area_m2(&coords);
    assert!((area - expected).abs() / expected < 1e-12, "area {area}");
}

#[test]
fn test_square_parcel_area() {
    // 0.001 degree square, roughly 111 m a side.
    let coords = vec![
        coord(1, 0.0, 0.0),
        coord(2, 0.0, 0.001),
        coord(3, 0.001, 0.001),
        coord(4, 0.001, 0.0),
    ];
    let expected = 111.0_f64 * 111.0;
    let area = polygon_area_m2(&coords);
    assert!((area - expected).abs() < 1.0, "area {area}");
}

#[test]
fn test_map_url_parts_agree_with_helpers() {
    let coords = vec![
        coord(1, -6.17, 106.94),
        coord(2, -6.18, 106.95),
        coord(3, -6.19, 106.93),
    ];
    let url = build_static_map_url(&coords);
    let (lat, lng) = centroid(&coords);
    assert!(url.contains(&format!("center={lat},{lng}")));
    assert!(url.contains(&format!("zoom={}", zoom_level(&coords))));
    assert!(url.ends_with(&encode_polygon_path(&coords)));
}

#[test]
fn test_terbilang_legal_text_examples() {
    assert_eq!(terbilang(1234.0), "seribu dua ratus tiga puluh empat");
    assert_eq!(terbilang(0.0), "nol");
    assert_eq!(terbilang(-5.0), "minus lima");
}

#[test]
fn test_terbilang_scales() {
    assert_eq!(terbilang(111_111.0), "seratus sebelas ribu seratus sebelas");
    assert_eq!(terbilang(1_000_000.0), "satu juta");
    assert_eq!(terbilang(1_500_000_000.0), "satu miliar lima ratus juta");
}

#[test]
fn test_terbilang_decimal_is_two_digits() {
    assert_eq!(terbilang(250.5), "dua ratus lima puluh koma lima puluh");
    assert_eq!(terbilang(250.504), "dua ratus lima puluh koma lima puluh");
}
