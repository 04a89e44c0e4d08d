//! Force-directed graph visualization component.
//!
//! Renders an interactive company network on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Node fill color keyed by industry, edge color keyed by relationship kind
//! - Hover emphasis: grow-on-hover or an info tooltip, per [`InteractionMode`]
//!
//! # Example
//!
//! ```ignore
//! use company_graph::{ForceGraphCanvas, GraphData, GraphNode, GraphLink, InteractionMode};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { name: "Apple".into(), industry: Some("Technology".into()), founded_year: Some("1976".into()) },
//!         GraphNode { name: "Microsoft".into(), industry: Some("Technology".into()), founded_year: Some("1975".into()) },
//!     ],
//!     links: vec![
//!         GraphLink { source: "Apple".into(), target: "Microsoft".into(), kind: "competitors".into() },
//!     ],
//! };
//!
//! view! { <ForceGraphCanvas data=data.into() fullscreen=true interaction=InteractionMode::Tooltip /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode, InteractionMode};
