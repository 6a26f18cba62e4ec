//! Example screens shipped with the application.

use super::{Catalog, CatalogEntry};
use crate::error::ShowcaseError;

/// Handle of an example screen.
///
/// What each screen shows on the map is described by [`ExampleScreen::spec`](crate::screen).
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExampleScreen {
    StaticMap,
    ThemeMap,
    DisplayLatLng,
    ViewsAsMarkers,
    EventListener,
    MarkerTypes,
    DraggableMarkers,
    PolygonCreator,
    PolylineCreator,
    GradientPolylines,
    AnimatedViews,
    AnimatedMarkers,
    Callouts,
    Overlays,
    DefaultMarkers,
    CustomMarkers,
    TakeSnapshot,
    CachedMap,
    LoadingMap,
    MapBoundaries,
    FitToSuppliedMarkers,
    FitToCoordinates,
    LiteMapView,
    CustomTiles,
    WmsTiles,
    ZIndexMarkers,
    MapStyle,
    LegalLabel,
    SetNativePropsOverlays,
    CustomOverlay,
    TestIdMarkers,
    MapKml,
    BugMarkerWontUpdate,
    ImageOverlayWithAssets,
    ImageOverlayWithUrl,
    ImageOverlayWithBearing,
    AnimatedNavigation,
    OnPoiClick,
    IndoorMap,
    CameraControl,
    MassiveCustomMarkers,
    Geojson,
}

const INCOMPLETE: &str = "(incomplete)";

/// Builds the catalog of all example screens in display order.
pub fn default_catalog() -> Result<Catalog<ExampleScreen>, ShowcaseError> {
    use ExampleScreen::*;

    Catalog::new([
        CatalogEntry::new(StaticMap, "StaticMap").with_alternate_support(),
        CatalogEntry::new(ThemeMap, "ThemeMap").with_alternate_support(),
        CatalogEntry::new(DisplayLatLng, "Tracking Position")
            .with_alternate_support()
            .with_extra_label(INCOMPLETE),
        CatalogEntry::new(ViewsAsMarkers, "Arbitrary Views as Markers").with_alternate_support(),
        CatalogEntry::new(EventListener, "Events")
            .with_alternate_support()
            .with_extra_label(INCOMPLETE),
        CatalogEntry::new(MarkerTypes, "Image Based Markers").with_alternate_support(),
        CatalogEntry::new(DraggableMarkers, "Draggable Markers").with_alternate_support(),
        CatalogEntry::new(PolygonCreator, "Polygon Creator").with_alternate_support(),
        CatalogEntry::new(PolylineCreator, "Polyline Creator").with_alternate_support(),
        CatalogEntry::new(GradientPolylines, "Gradient Polylines").with_alternate_support(),
        CatalogEntry::new(AnimatedViews, "Animating with MapViews"),
        CatalogEntry::new(AnimatedMarkers, "Animated Marker Position"),
        CatalogEntry::new(Callouts, "Custom Callouts").with_alternate_support(),
        CatalogEntry::new(Overlays, "Circles, Polygons, and Polylines").with_alternate_support(),
        CatalogEntry::new(DefaultMarkers, "Default Markers").with_alternate_support(),
        CatalogEntry::new(CustomMarkers, "Custom Markers").with_alternate_support(),
        CatalogEntry::new(TakeSnapshot, "Take Snapshot")
            .with_alternate_support()
            .with_extra_label(INCOMPLETE),
        CatalogEntry::new(CachedMap, "Cached Map"),
        CatalogEntry::new(LoadingMap, "Map with loading"),
        CatalogEntry::new(MapBoundaries, "Get visible map boundaries").with_alternate_support(),
        CatalogEntry::new(FitToSuppliedMarkers, "Focus Map On Markers").with_alternate_support(),
        CatalogEntry::new(FitToCoordinates, "Fit Map To Coordinates").with_alternate_support(),
        CatalogEntry::new(LiteMapView, "Android Lite MapView"),
        CatalogEntry::new(CustomTiles, "Custom Tiles").with_alternate_support(),
        CatalogEntry::new(WmsTiles, "WMS Tiles").with_alternate_support(),
        CatalogEntry::new(ZIndexMarkers, "Position Markers with Z-index").with_alternate_support(),
        CatalogEntry::new(MapStyle, "Customize the style of the map").with_alternate_support(),
        CatalogEntry::new(LegalLabel, "Reposition the legal label").with_alternate_support(),
        CatalogEntry::new(SetNativePropsOverlays, "Update native props").with_alternate_support(),
        CatalogEntry::new(CustomOverlay, "Custom Overlay Component").with_alternate_support(),
        CatalogEntry::new(TestIdMarkers, "Test ID for Automation").with_alternate_support(),
        CatalogEntry::new(MapKml, "Load Map with KML").with_alternate_support(),
        CatalogEntry::new(BugMarkerWontUpdate, "BUG: Marker Won't Update (Android)")
            .with_alternate_support(),
        CatalogEntry::new(ImageOverlayWithAssets, "Image Overlay Component with Assets")
            .with_alternate_support(),
        CatalogEntry::new(ImageOverlayWithUrl, "Image Overlay Component with URL")
            .with_alternate_support(),
        CatalogEntry::new(ImageOverlayWithBearing, "Image Overlay with Bearing")
            .with_alternate_support(),
        CatalogEntry::new(AnimatedNavigation, "Animated Map Navigation").with_alternate_support(),
        CatalogEntry::new(OnPoiClick, "On Poi Click").with_alternate_support(),
        CatalogEntry::new(IndoorMap, "Indoor Map").with_alternate_support(),
        CatalogEntry::new(CameraControl, "CameraControl").with_alternate_support(),
        CatalogEntry::new(MassiveCustomMarkers, "MassiveCustomMarkers").with_alternate_support(),
        CatalogEntry::new(Geojson, "Geojson").with_alternate_support(),
    ])
}

#[cfg(test)]
mod tests {
    use insta::assert_compact_debug_snapshot;

    use super::*;

    #[test]
    fn default_catalog_has_unique_titles() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), 42);
    }

    #[test]
    fn default_catalog_keeps_display_order() {
        let catalog = default_catalog().unwrap();
        let first = catalog.iter().next().unwrap();
        let last = catalog.iter().last().unwrap();

        assert_eq!(*first.screen(), ExampleScreen::StaticMap);
        assert_eq!(*last.screen(), ExampleScreen::Geojson);
    }

    #[test]
    fn default_catalog_incompatible_entries() {
        let catalog = default_catalog().unwrap();
        let incompatible: Vec<_> = catalog
            .iter()
            .filter(|entry| !entry.is_alternate_compatible())
            .map(|entry| entry.title())
            .collect();

        assert_compact_debug_snapshot!(incompatible, @r#"["Animating with MapViews", "Animated Marker Position", "Cached Map", "Map with loading", "Android Lite MapView"]"#);
    }

    #[test]
    fn default_catalog_extra_labels() {
        let catalog = default_catalog().unwrap();
        let labeled: Vec<_> = catalog
            .iter()
            .filter(|entry| entry.extra_label().is_some())
            .map(|entry| entry.labeled_title())
            .collect();

        assert_compact_debug_snapshot!(labeled, @r#"["Tracking Position (incomplete)", "Events (incomplete)", "Take Snapshot (incomplete)"]"#);
    }
}
