//! Interactive map collaborator.
//!
//! Renders a [`MapProjection`] as a self-contained Leaflet HTML document:
//! CARTO positron tiles, one circle marker per mappable region, tier-colored
//! with a popup. The projection decides what gets drawn; this module only
//! turns it into a file.

use crate::report::MapProjection;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const MAP_CENTER: [f64; 2] = [36.5, 127.5];
const MAP_ZOOM: u8 = 7;
const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors &copy; CARTO";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Escape a string for embedding in a double-quoted JS literal.
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace("</", "<\\/")
}

/// Write the projection as an interactive HTML map.
pub fn write_map_html<P: AsRef<Path>>(projection: &MapProjection, path: P) -> Result<()> {
    let mut markers_js = String::new();
    for m in &projection.markers {
        markers_js.push_str(&format!(
            "L.circleMarker([{}, {}], {{radius: {:.2}, color: \"{}\", fill: true, fillOpacity: 0.6}}).bindPopup(\"{}\").addTo(map);\n",
            m.coords[0],
            m.coords[1],
            m.radius,
            m.tier.marker_color(),
            escape_js(&m.popup)
        ));
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>Regional population analysis map</title>
<link rel="stylesheet" href="{LEAFLET_CSS}"/>
<script src="{LEAFLET_JS}"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView([{lat}, {lon}], {zoom});
L.tileLayer("{TILE_URL}", {{attribution: "{TILE_ATTRIBUTION}"}}).addTo(map);
{markers_js}</script>
</body>
</html>
"#,
        lat = MAP_CENTER[0],
        lon = MAP_CENTER[1],
        zoom = MAP_ZOOM,
    );

    let mut f = File::create(path)?;
    f.write_all(html.as_bytes())?;
    Ok(())
}
