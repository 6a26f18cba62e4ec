//! What the map shows when an example screen is active.

use serde::Deserialize;

use crate::catalog::registry::ExampleScreen;
use crate::config::AlternateProviderConfig;
use crate::provider::MapProvider;

/// Resolution of the zoom level 0 of the Web Mercator tile schema, in meters per pixel.
const TOP_RESOLUTION: f64 = 156543.03392800014;

/// Half of the Web Mercator world extent in meters.
const HALF_EXTENT: f64 = 20037508.342789244;

/// Highest zoom level supported by the tile sources.
pub const MAX_Z_LEVEL: u32 = 22;

const OSM_URL: &str = "https://tile.openstreetmap.org";
const WMS_TILE_SIZE: u32 = 256;

/// Initial position of the map.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct Camera {
    /// Latitude of the map center.
    pub lat: f64,
    /// Longitude of the map center.
    pub lon: f64,
    /// Zoom level of the Web Mercator tile schema.
    pub z_level: u32,
}

impl Camera {
    /// Creates a new camera.
    pub const fn new(lat: f64, lon: f64, z_level: u32) -> Self {
        Self { lat, lon, z_level }
    }

    /// Map resolution of the camera zoom level in meters per pixel.
    pub fn resolution(&self) -> f64 {
        TOP_RESOLUTION / 2f64.powi(self.z_level as i32)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(37.566, 126.9784, 8)
    }
}

/// Source of the raster tiles of a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileSource {
    /// Standard map of the active provider.
    Standard,
    /// Named style of the alternate provider. Falls back to the standard map with the default
    /// provider.
    Themed(&'static str),
    /// Fixed URL template with `{z}`, `{x}` and `{y}` placeholders, independent of the provider.
    Custom(&'static str),
    /// WMS service rendering tiles with `GetMap` requests, independent of the provider.
    Wms {
        /// Service endpoint.
        base_url: &'static str,
        /// Comma separated list of layers to render.
        layers: &'static str,
    },
}

impl TileSource {
    /// URL of the tile with the given index.
    pub fn url(
        &self,
        provider: MapProvider,
        alternate: &AlternateProviderConfig,
        z: u32,
        x: i32,
        y: i32,
    ) -> String {
        match (self, provider) {
            (TileSource::Standard | TileSource::Themed(_), MapProvider::Default) => {
                format!("{OSM_URL}/{z}/{x}/{y}.png")
            }
            (TileSource::Standard, MapProvider::Alternate) => {
                alternate_url(alternate, &alternate.style, z, x, y)
            }
            (TileSource::Themed(style), MapProvider::Alternate) => {
                alternate_url(alternate, style, z, x, y)
            }
            (TileSource::Custom(template), _) => template
                .replace("{z}", &z.to_string())
                .replace("{x}", &x.to_string())
                .replace("{y}", &y.to_string()),
            (TileSource::Wms { base_url, layers }, _) => {
                let [min_x, min_y, max_x, max_y] = tile_bbox(z, x, y);
                format!(
                    "{base_url}?SERVICE=WMS&VERSION=1.1.1&REQUEST=GetMap&LAYERS={layers}&STYLES=\
                     &SRS=EPSG:3857&BBOX={min_x},{min_y},{max_x},{max_y}\
                     &WIDTH={WMS_TILE_SIZE}&HEIGHT={WMS_TILE_SIZE}&FORMAT=image/png"
                )
            }
        }
    }

    /// Attribution text and link shown for the tiles.
    pub fn attribution(&self, provider: MapProvider) -> (&'static str, &'static str) {
        match (self, provider) {
            (TileSource::Custom(_), _) => (
                "© OpenTopoMap (CC-BY-SA)",
                "https://opentopomap.org/about",
            ),
            (TileSource::Standard | TileSource::Themed(_), MapProvider::Alternate) => (
                "© MapTiler © OpenStreetMap contributors",
                "https://www.maptiler.com/copyright/",
            ),
            _ => (
                "© OpenStreetMap contributors",
                "https://www.openstreetmap.org/copyright",
            ),
        }
    }
}

fn alternate_url(
    alternate: &AlternateProviderConfig,
    style: &str,
    z: u32,
    x: i32,
    y: i32,
) -> String {
    let base_url = alternate.base_url.trim_end_matches('/');
    let key = alternate.api_key.as_deref().unwrap_or_default();
    format!("{base_url}/maps/{style}/{z}/{x}/{y}.png?key={key}")
}

/// Bounding box of a tile in EPSG:3857 as `[min_x, min_y, max_x, max_y]`.
///
/// Tile `y` index grows from north to south.
pub fn tile_bbox(z: u32, x: i32, y: i32) -> [f64; 4] {
    let tile_size = 2.0 * HALF_EXTENT / 2f64.powi(z as i32);
    let min_x = -HALF_EXTENT + x as f64 * tile_size;
    let max_y = HALF_EXTENT - y as f64 * tile_size;

    [min_x, max_y - tile_size, min_x + tile_size, max_y]
}

/// Map setup of an example screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSpec {
    /// Where the map is centered when the screen opens.
    pub camera: Camera,
    /// Tiles shown on the map.
    pub tiles: TileSource,
}

const SAN_FRANCISCO: Camera = Camera::new(37.78825, -122.4324, 12);

impl ExampleScreen {
    /// Map setup of the screen.
    pub fn spec(&self) -> ScreenSpec {
        use ExampleScreen::*;

        let (camera, tiles) = match self {
            ThemeMap => (SAN_FRANCISCO, TileSource::Themed("dataviz-dark")),
            MapStyle => (SAN_FRANCISCO, TileSource::Themed("backdrop")),
            CustomTiles => (
                Camera::new(46.5547, 7.9739, 11),
                TileSource::Custom("https://tile.opentopomap.org/{z}/{x}/{y}.png"),
            ),
            WmsTiles => (
                Camera::new(52.52, 13.405, 10),
                TileSource::Wms {
                    base_url: "https://ows.terrestris.de/osm/service",
                    layers: "OSM-WMS",
                },
            ),
            StaticMap | LiteMapView | CachedMap => {
                (Camera::new(37.78825, -122.4324, 10), TileSource::Standard)
            }
            IndoorMap => (Camera::new(-33.8651, 151.2099, 18), TileSource::Standard),
            MassiveCustomMarkers => (Camera::new(37.78825, -122.4324, 4), TileSource::Standard),
            Geojson | MapKml => (Camera::new(37.566, 126.9784, 3), TileSource::Standard),
            AnimatedNavigation | CameraControl => {
                (Camera::new(40.7128, -74.006, 13), TileSource::Standard)
            }
            _ => (SAN_FRANCISCO, TileSource::Standard),
        };

        ScreenSpec { camera, tiles }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::catalog::registry::default_catalog;

    fn alternate() -> AlternateProviderConfig {
        AlternateProviderConfig {
            base_url: "https://tiles.example.com/".to_string(),
            style: "streets-v2".to_string(),
            api_key: Some("secret".to_string()),
        }
    }

    #[test]
    fn camera_resolution() {
        assert_relative_eq!(Camera::new(0.0, 0.0, 0).resolution(), TOP_RESOLUTION);
        assert_relative_eq!(
            Camera::new(0.0, 0.0, 5).resolution(),
            4891.96981025,
            epsilon = 1e-6
        );
    }

    #[test]
    fn standard_tiles_follow_provider() {
        let source = TileSource::Standard;
        assert_eq!(
            source.url(MapProvider::Default, &alternate(), 3, 4, 5),
            "https://tile.openstreetmap.org/3/4/5.png"
        );
        assert_eq!(
            source.url(MapProvider::Alternate, &alternate(), 3, 4, 5),
            "https://tiles.example.com/maps/streets-v2/3/4/5.png?key=secret"
        );
    }

    #[test]
    fn themed_tiles_fall_back_to_standard_with_default_provider() {
        let source = TileSource::Themed("backdrop");
        assert_eq!(
            source.url(MapProvider::Default, &alternate(), 1, 0, 1),
            "https://tile.openstreetmap.org/1/0/1.png"
        );
        assert_eq!(
            source.url(MapProvider::Alternate, &alternate(), 1, 0, 1),
            "https://tiles.example.com/maps/backdrop/1/0/1.png?key=secret"
        );
    }

    #[test]
    fn custom_tiles_ignore_provider() {
        let source = TileSource::Custom("https://tiles.test/{z}/{y}/{x}.jpg");
        for provider in [MapProvider::Default, MapProvider::Alternate] {
            assert_eq!(
                source.url(provider, &alternate(), 7, 10, 20),
                "https://tiles.test/7/20/10.jpg"
            );
        }
    }

    #[test]
    fn wms_tiles_request_tile_bbox() {
        let source = TileSource::Wms {
            base_url: "https://wms.test/service",
            layers: "OSM",
        };
        let url = source.url(MapProvider::Alternate, &alternate(), 0, 0, 0);

        let expected_bbox = format!(
            "BBOX={},{},{},{}",
            -HALF_EXTENT, -HALF_EXTENT, HALF_EXTENT, HALF_EXTENT
        );
        assert!(url.starts_with("https://wms.test/service?SERVICE=WMS&"));
        assert!(url.contains("&LAYERS=OSM&"));
        assert!(url.contains(&expected_bbox));
        assert!(url.ends_with("&WIDTH=256&HEIGHT=256&FORMAT=image/png"));
    }

    #[test]
    fn tile_bbox_quadrants() {
        let [min_x, min_y, max_x, max_y] = tile_bbox(1, 0, 0);
        assert_relative_eq!(min_x, -HALF_EXTENT);
        assert_relative_eq!(max_x, 0.0);
        assert_relative_eq!(min_y, 0.0);
        assert_relative_eq!(max_y, HALF_EXTENT);

        let [min_x, min_y, max_x, max_y] = tile_bbox(1, 1, 1);
        assert_relative_eq!(min_x, 0.0);
        assert_relative_eq!(max_x, HALF_EXTENT);
        assert_relative_eq!(min_y, -HALF_EXTENT);
        assert_relative_eq!(max_y, 0.0);
    }

    #[test]
    fn every_screen_has_valid_camera() {
        for entry in default_catalog().unwrap().iter() {
            let camera = entry.screen().spec().camera;
            assert!(camera.z_level <= MAX_Z_LEVEL, "{}", entry.title());
            assert!((-90.0..=90.0).contains(&camera.lat), "{}", entry.title());
            assert!((-180.0..=180.0).contains(&camera.lon), "{}", entry.title());
        }
    }
}
