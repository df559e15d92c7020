//! A single k-means cluster: its members and their center of mass

use crate::point::PointPool;
use ndarray::{Array1, ArrayView1, Axis};

/// Cluster of pool points with an always-current centroid
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster id, also the cluster's position in the run's cluster list
    id: usize,
    /// Member point indices in admission order
    members: Vec<usize>,
    /// Attribute-wise mean of the members, ordered like the pool attributes
    centroid: Array1<f64>,
}

impl Cluster {
    /// Create a cluster whose only member is `seed`.
    ///
    /// The centroid starts as a copy of the seed and the seed is stamped with
    /// this cluster's id.
    pub fn new(id: usize, seed: usize, pool: &mut PointPool) -> Self {
        let centroid = pool.point(seed).to_owned();
        pool.assign(seed, id);
        Self {
            id,
            members: vec![seed],
            centroid,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn centroid(&self) -> &Array1<f64> {
        &self.centroid
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    /// Euclidean distance from the centroid to a point
    pub fn distance(&self, point: ArrayView1<'_, f64>) -> f64 {
        self.squared_distance(point).sqrt()
    }

    fn squared_distance(&self, point: ArrayView1<'_, f64>) -> f64 {
        self.centroid
            .iter()
            .zip(point.iter())
            .map(|(c, p)| (c - p).powi(2))
            .sum()
    }

    /// Add a point, stamp it with this cluster's id and recompute the centroid.
    pub fn admit(&mut self, index: usize, pool: &mut PointPool) {
        self.members.push(index);
        pool.assign(index, self.id);
        self.recompute(pool);
    }

    /// Remove a point from the members.
    ///
    /// Returns `false` if the point was not a member. When the last member
    /// leaves, the centroid keeps its previous position.
    pub fn release(&mut self, index: usize, pool: &PointPool) -> bool {
        match self.members.iter().position(|&m| m == index) {
            Some(at) => {
                self.members.remove(at);
                self.recompute(pool);
                true
            }
            None => false,
        }
    }

    /// Sum of squared distances from every member to the centroid
    pub fn sse(&self, pool: &PointPool) -> f64 {
        self.members
            .iter()
            .map(|&m| self.squared_distance(pool.point(m)))
            .sum()
    }

    fn recompute(&mut self, pool: &PointPool) {
        if let Some(mean) = pool
            .values()
            .select(Axis(0), &self.members)
            .mean_axis(Axis(0))
        {
            self.centroid = mean;
        }
    }
}
