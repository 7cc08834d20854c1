//! Circular vertex placement for drawing a graph.
//!
//! Only positions are computed here; turning a [`GraphLayout`] into pixels is
//! left to whatever consumes it.

use std::f64::consts::PI;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::Float;
use serde::Serialize;

use crate::graph::WeightedGraph;

/// Drawing surface and circle geometry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            radius: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutNode {
    pub id: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    /// Midpoint of the segment, where the weight label goes
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphLayout {
    pub canvas: CanvasConfig,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Places vertex `i` of `V` at angle `2πi/V` on a circle centred on the
/// canvas, in vertex insertion order
pub fn circular_layout<K, W>(graph: &WeightedGraph<K, W>, canvas: &CanvasConfig) -> GraphLayout
where
    K: Clone + Eq + Hash + Debug + Display,
    W: Float + Debug,
{
    let count = graph.vertex_count();
    let center_x = canvas.width / 2.0;
    let center_y = canvas.height / 2.0;

    let nodes: Vec<LayoutNode> = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(id, key)| {
            let angle = (id as f64 / count as f64) * 2.0 * PI;
            LayoutNode {
                id,
                label: key.to_string(),
                x: center_x + canvas.radius * angle.cos(),
                y: center_y + canvas.radius * angle.sin(),
            }
        })
        .collect();

    let edges = graph
        .all_edges()
        .map(|edge| {
            let from = &nodes[edge.source];
            let to = &nodes[edge.target];
            LayoutEdge {
                source: edge.source,
                target: edge.target,
                weight: num_traits::cast(edge.weight).unwrap_or(f64::NAN),
                label_x: (from.x + to.x) / 2.0,
                label_y: (from.y + to.y) / 2.0,
            }
        })
        .collect();

    GraphLayout {
        canvas: *canvas,
        nodes,
        edges,
    }
}
