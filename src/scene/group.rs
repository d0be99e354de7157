use serde::Serialize;

use crate::clusterer::Centroid;

/// One cluster's members, for listing beside the plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterGroup {
    /// Cluster id, also the centroid index
    pub index: usize,
    pub centroid: Centroid,
    pub members: Vec<GroupMember>,
}

impl ClusterGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Heading shown above the member list (1-based)
    pub fn title(&self) -> String {
        format!("Cluster {}", self.index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMember {
    /// Index of the sample in the scene
    pub sample: usize,
    pub label: String,
    pub thumbnail_path: String,
}
