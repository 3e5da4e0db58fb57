//! Routing over the location graph.
//!
//! Two operations: single-pair shortest path (label-setting, Dijkstra) over
//! an adjacency-map graph, and all-pairs shortest costs (Floyd–Warshall)
//! over a dense distance matrix of selected dispatch centers, with
//! per-center dispatch plans derived from the relaxed costs.
//!
//! Edge weights are `u32`, so the negative weights that would break a
//! label-setting search are unrepresentable. Distance/previous maps are
//! scratch state local to one call — nothing is cached across calls.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Minutes of travel per unit of edge distance.
pub const DEFAULT_MINUTES_PER_UNIT: u32 = 5;

/// One edge of the location graph, as stored by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

/// One hop of a computed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub from: String,
    pub to: String,
    pub distance: u32,
}

/// A shortest route between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<String>,
    pub total_distance: u32,
    pub estimated_minutes: u32,
    pub steps: Vec<RouteStep>,
}

/// Undirected weighted graph of relief locations.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    /// node → list of (neighbor, distance)
    adj: HashMap<String, Vec<(String, u32)>>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from stored edges.
    pub fn from_edges(edges: &[GraphEdge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.from, &edge.to, edge.distance);
        }
        graph
    }

    /// Insert an undirected edge. Both directions carry the same distance.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: u32) {
        self.adj
            .entry(from.to_string())
            .or_default()
            .push((to.to_string(), distance));
        self.adj
            .entry(to.to_string())
            .or_default()
            .push((from.to_string(), distance));
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.adj.contains_key(node)
    }

    /// Neighbors of a node as (neighbor, distance) pairs.
    pub fn neighbors(&self, node: &str) -> &[(String, u32)] {
        self.adj.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Distance of the direct edge between two nodes, if one exists.
    /// Parallel edges resolve to the cheapest.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbors(from)
            .iter()
            .filter(|(n, _)| n == to)
            .map(|(_, w)| *w)
            .min()
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Shortest path from `start` to `end` with the default speed factor.
    ///
    /// Returns `Err` if either endpoint is absent from the graph, `Ok(None)`
    /// if the endpoints are disconnected, `Ok(Some(route))` otherwise.
    /// `start == end` short-circuits to a single-node route of distance 0.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Route>, InputError> {
        self.shortest_path_with_speed(start, end, DEFAULT_MINUTES_PER_UNIT)
    }

    /// [`Self::shortest_path`] with an explicit minutes-per-distance-unit factor.
    ///
    /// Label-setting search: the unvisited node with minimum tentative
    /// distance is finalized each round, its neighbors relaxed, stopping as
    /// soon as `end` is finalized. Ties between equal-distance candidates
    /// break toward the lexicographically smallest node, so the returned
    /// path is deterministic for a given graph.
    pub fn shortest_path_with_speed<'a>(
        &'a self,
        start: &'a str,
        end: &str,
        minutes_per_unit: u32,
    ) -> Result<Option<Route>, InputError> {
        if !self.has_node(start) {
            return Err(InputError::UnknownNode(start.to_string()));
        }
        if !self.has_node(end) {
            return Err(InputError::UnknownNode(end.to_string()));
        }
        if start == end {
            return Ok(Some(Route {
                path: vec![start.to_string()],
                total_distance: 0,
                estimated_minutes: 0,
                steps: Vec::new(),
            }));
        }

        let mut dist: HashMap<&str, u32> = HashMap::new();
        let mut previous: HashMap<&str, &str> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<(u32, &str)>> = BinaryHeap::new();
        dist.insert(start, 0);
        heap.push(Reverse((0, start)));

        while let Some(Reverse((d, node))) = heap.pop() {
            if d > *dist.get(node).unwrap_or(&u32::MAX) {
                continue; // stale entry — node already finalized closer
            }
            if node == end {
                return Ok(Some(self.build_route(start, node, d, &previous, minutes_per_unit)));
            }
            for (neighbor, weight) in self.neighbors(node) {
                let neighbor = neighbor.as_str();
                let candidate = d.saturating_add(*weight);
                if candidate < *dist.get(neighbor).unwrap_or(&u32::MAX) {
                    dist.insert(neighbor, candidate);
                    previous.insert(neighbor, node);
                    heap.push(Reverse((candidate, neighbor)));
                }
            }
        }

        Ok(None)
    }

    fn build_route(
        &self,
        start: &str,
        end: &str,
        total_distance: u32,
        previous: &HashMap<&str, &str>,
        minutes_per_unit: u32,
    ) -> Route {
        let mut path = vec![end.to_string()];
        let mut current = end;
        while current != start {
            match previous.get(current) {
                Some(&prev) => {
                    path.push(prev.to_string());
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();

        let steps = path
            .windows(2)
            .map(|pair| RouteStep {
                from: pair[0].clone(),
                to: pair[1].clone(),
                distance: self.edge_weight(&pair[0], &pair[1]).unwrap_or(0),
            })
            .collect();

        Route {
            path,
            total_distance,
            estimated_minutes: total_distance.saturating_mul(minutes_per_unit),
            steps,
        }
    }
}

/// All-pairs shortest costs over a dense distance matrix (Floyd–Warshall).
///
/// The matrix must be square with a zero diagonal; entries are direct costs.
/// Asymmetric matrices are accepted — directed costs relax independently.
/// Relaxation saturates rather than wrapping, so `u32::MAX`-style sentinel
/// entries stay "unreachable".
pub fn all_pairs(matrix: &[Vec<u32>]) -> Result<Vec<Vec<u32>>, InputError> {
    let n = matrix.len();
    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != n {
            return Err(InputError::MatrixNotSquare {
                row,
                len: entries.len(),
                expected: n,
            });
        }
    }
    for (i, row) in matrix.iter().enumerate() {
        if row[i] != 0 {
            return Err(InputError::NonZeroDiagonal {
                index: i,
                value: row[i],
            });
        }
    }

    let mut dist = matrix.to_vec();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k].saturating_add(dist[k][j]);
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    Ok(dist)
}

/// One relaxed center-to-center route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterRoute {
    pub from: String,
    pub to: String,
    pub cost: u32,
}

/// Outbound dispatch summary for one center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchPlan {
    pub center: String,
    pub destinations: Vec<String>,
    pub total_minutes: u32,
}

/// Multi-center dispatch result: relaxed costs plus derived plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiDispatch {
    pub cost_matrix: Vec<Vec<u32>>,
    pub routes: Vec<CenterRoute>,
    pub total_cost: u64,
    pub plans: Vec<DispatchPlan>,
}

/// Run all-pairs relaxation over `distance_matrix` and derive per-center
/// dispatch plans.
///
/// Each plan lists a center's destinations (every other center) and its
/// total outbound time: the sum of the center's relaxed row costs scaled by
/// `minutes_per_unit`. How the input matrix is produced is the caller's
/// concern; any valid square matrix works.
pub fn multi_center_dispatch(
    centers: &[String],
    distance_matrix: &[Vec<u32>],
    minutes_per_unit: u32,
) -> Result<MultiDispatch, InputError> {
    if centers.len() < 2 {
        return Err(InputError::TooFewCenters(centers.len()));
    }
    if distance_matrix.len() != centers.len() {
        return Err(InputError::CenterCountMismatch {
            centers: centers.len(),
            matrix: distance_matrix.len(),
        });
    }

    let cost_matrix = all_pairs(distance_matrix)?;
    let n = centers.len();

    let mut routes = Vec::with_capacity(n * (n - 1));
    let mut total_cost: u64 = 0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                routes.push(CenterRoute {
                    from: centers[i].clone(),
                    to: centers[j].clone(),
                    cost: cost_matrix[i][j],
                });
                total_cost += cost_matrix[i][j] as u64;
            }
        }
    }

    let plans = (0..n)
        .map(|i| {
            let row_sum: u32 = (0..n)
                .filter(|&j| j != i)
                .fold(0u32, |acc, j| acc.saturating_add(cost_matrix[i][j]));
            DispatchPlan {
                center: centers[i].clone(),
                destinations: centers
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, c)| c.clone())
                    .collect(),
                total_minutes: row_sum.saturating_mul(minutes_per_unit),
            }
        })
        .collect();

    Ok(MultiDispatch {
        cost_matrix,
        routes,
        total_cost,
        plans,
    })
}
