//! Static region → geographic coordinate table.
//!
//! Supplied as configuration, not fetched remotely. Lookup is by exact region
//! name; a region absent from this table is simply not mappable.

use ahash::AHashMap;

/// `[latitude, longitude]` per administrative region.
pub const REGION_COORDS: [(&str, [f64; 2]); 17] = [
    ("서울특별시", [37.5665, 126.9780]),
    ("부산광역시", [35.1796, 129.0756]),
    ("대구광역시", [35.8714, 128.6014]),
    ("인천광역시", [37.4563, 126.7052]),
    ("광주광역시", [35.1595, 126.8526]),
    ("대전광역시", [36.3504, 127.3845]),
    ("울산광역시", [35.5384, 129.3114]),
    ("세종특별자치시", [36.4800, 127.2890]),
    ("경기도", [37.4138, 127.5183]),
    ("강원특별자치도", [37.8228, 128.1555]),
    ("충청북도", [36.6353, 127.4913]),
    ("충청남도", [36.6588, 126.6728]),
    ("전북특별자치도", [35.8204, 127.1087]),
    ("전라남도", [34.8160, 126.4629]),
    ("경상북도", [36.5760, 128.5056]),
    ("경상남도", [35.2377, 128.6924]),
    ("제주특별자치도", [33.4890, 126.4983]),
];

/// Build the lookup map over [`REGION_COORDS`].
pub fn coordinate_table() -> AHashMap<&'static str, [f64; 2]> {
    REGION_COORDS.iter().copied().collect()
}
