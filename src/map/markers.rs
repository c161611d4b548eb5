//! Country markers and clustering
//!
//! Each ranked country with usable coordinates becomes one marker. Markers
//! whose projected positions sit within a pixel radius of each other are
//! grouped into a cluster, rendered as a member count until zooming pulls
//! them apart.

use crate::country::CountryRecord;
use crate::map::projection::Viewport;

/// A single projected marker, indexed into the ranked record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub record_index: usize,
    pub px: i32,
    pub py: i32,
}

/// One or more markers sharing a screen neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub px: i32,
    pub py: i32,
    /// Record indices of the members, in ranking order.
    pub members: Vec<usize>,
}

impl Cluster {
    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }
}

/// Project the ranked records into markers. Records without valid
/// coordinates are skipped, as are markers outside the viewport.
pub fn project_markers(records: &[CountryRecord], viewport: &Viewport) -> Vec<Marker> {
    records
        .iter()
        .enumerate()
        .filter_map(|(record_index, record)| {
            let (lat, lon) = record.coords()?;
            let (px, py) = viewport.project(lat, lon);
            viewport.is_visible(px, py).then_some(Marker {
                record_index,
                px,
                py,
            })
        })
        .collect()
}

/// Greedy clustering by projected pixel distance. Markers are visited in
/// ranking order and join the first cluster whose anchor is within
/// `radius_px`; the result is deterministic for a fixed input.
pub fn cluster_markers(markers: &[Marker], radius_px: i32) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let r2 = i64::from(radius_px) * i64::from(radius_px);

    for marker in markers {
        let joined = clusters.iter_mut().find(|cluster| {
            let dx = i64::from(cluster.px - marker.px);
            let dy = i64::from(cluster.py - marker.py);
            dx * dx + dy * dy <= r2
        });
        match joined {
            Some(cluster) => cluster.members.push(marker.record_index),
            None => clusters.push(Cluster {
                px: marker.px,
                py: marker.py,
                members: vec![marker.record_index],
            }),
        }
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryInfo, CountryRecord};

    fn located(name: &str, lat: f64, long: f64) -> CountryRecord {
        CountryRecord {
            country: name.to_string(),
            country_info: CountryInfo {
                lat: Some(lat),
                long: Some(long),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn marker(record_index: usize, px: i32, py: i32) -> Marker {
        Marker {
            record_index,
            px,
            py,
        }
    }

    #[test]
    fn records_without_coordinates_are_skipped() {
        let records = vec![
            located("usa", 37.0, -95.0),
            CountryRecord {
                country: "ship".to_string(),
                ..Default::default()
            },
            located("india", 20.0, 77.0),
        ];
        let viewport = Viewport::world(200, 100);
        let markers = project_markers(&records, &viewport);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].record_index, 0);
        assert_eq!(markers[1].record_index, 2);
    }

    #[test]
    fn distant_markers_stay_separate() {
        let markers = vec![marker(0, 10, 10), marker(1, 100, 10)];
        let clusters = cluster_markers(&markers, 8);
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(Cluster::is_single));
    }

    #[test]
    fn nearby_markers_cluster_with_counts_preserved() {
        let markers = vec![
            marker(0, 10, 10),
            marker(1, 13, 11),
            marker(2, 9, 14),
            marker(3, 100, 50),
        ];
        let clusters = cluster_markers(&markers, 8);
        assert_eq!(clusters.len(), 2);
        let total: usize = clusters.iter().map(|c| c.members.len()).sum();
        assert_eq!(total, markers.len());
        assert_eq!(clusters[0].members, vec![0, 1, 2]);
    }

    #[test]
    fn zooming_in_splits_clusters() {
        // Two European neighbors that share a cell at world zoom.
        let records = vec![located("france", 46.0, 2.0), located("germany", 51.0, 9.0)];
        let world = Viewport::world(160, 80);
        let world_markers = project_markers(&records, &world);
        let world_clusters = cluster_markers(&world_markers, 6);
        assert_eq!(world_clusters.len(), 1);

        let mut zoomed = Viewport::new(5.0, 48.0, 1.0, 160, 80);
        for _ in 0..6 {
            zoomed.zoom_in();
        }
        let zoomed_markers = project_markers(&records, &zoomed);
        let zoomed_clusters = cluster_markers(&zoomed_markers, 6);
        assert_eq!(zoomed_clusters.len(), 2);
    }

    #[test]
    fn clustering_is_independent_of_base_layer() {
        use crate::map::basemap::BaseLayer;

        let records = vec![located("usa", 37.0, -95.0), located("brazil", -14.0, -51.0)];
        let viewport = Viewport::world(160, 80);
        let markers = project_markers(&records, &viewport);
        let clusters = cluster_markers(&markers, 6);

        // Rendering any base layer shares no inputs with the marker pass.
        for layer in BaseLayer::ALL {
            let _ = layer.render(&viewport);
        }
        let again = cluster_markers(&project_markers(&records, &viewport), 6);
        assert_eq!(clusters, again);
    }
}
