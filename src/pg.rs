//! A naive reference model, maintained alongside a [`crate::TopTree`] in tests to cross-validate
//! connectivity answers against a straightforward `petgraph` graph.

use petgraph::algo::has_path_connecting;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::VertexIdx;

fn conv( v : VertexIdx ) -> NodeIndex {
	NodeIndex::new( v.index() )
}

/// A plain undirected graph tracking the same `link`/`cut` history as a [`crate::TopTree`], used
/// only to answer "are `u` and `v` connected" for test assertions.
pub struct ReferenceForest {
	g : UnGraph<(), ()>,
}

impl ReferenceForest {
	/// Creates a reference forest with `num_vertices` isolated vertices.
	pub fn new( num_vertices : usize ) -> Self {
		let mut g = UnGraph::new_undirected();
		for _ in 0..num_vertices {
			g.add_node( () );
		}
		ReferenceForest { g }
	}

	/// Mirrors a successful [`crate::TopTree::link`].
	pub fn link( &mut self, u : VertexIdx, v : VertexIdx ) {
		self.g.add_edge( conv( u ), conv( v ), () );
	}

	/// Mirrors a successful [`crate::TopTree::cut`].
	pub fn cut( &mut self, u : VertexIdx, v : VertexIdx ) {
		let e = self.g.find_edge( conv( u ), conv( v ) ).expect( "cut of a nonexistent reference edge" );
		self.g.remove_edge( e );
	}

	/// Whether `u` and `v` are connected in the reference forest.
	pub fn connected( &self, u : VertexIdx, v : VertexIdx ) -> bool {
		u == v || has_path_connecting( &self.g, conv( u ), conv( v ), None )
	}
}
