/*!
A dynamic forest maintained as a *top tree*: a balanced hierarchical decomposition of each
component into clusters, rebuilt around whichever vertex or vertex pair is currently exposed.

Unlike a splay-based *search tree on trees*, which keeps a single path distinguished at all
times and restructures it with local rotations, a [`TopTree`] exposes a component by throwing
away its compress/rake structure down to the bare base clusters and rebuilding a fresh hierarchy
bottom-up from the vertex adjacency, rooted at the vertex (or vertices) just exposed. See
`DESIGN.md` for why this trade-off was made and what it costs.

# Examples

```
use toptree::{TopTree, ExposeResult};
use toptree::common::{MonoidWeight, SignedAddWeight};
use toptree::listeners::PathLengthListener;

let mut t : TopTree<(), SignedAddWeight<i64>, _> = TopTree::new( PathLengthListener::new() );
let a = t.create_vertex( () );
let b = t.create_vertex( () );
let c = t.create_vertex( () );
t.link( a, b, SignedAddWeight::new( 2 ) ).unwrap();
t.link( b, c, SignedAddWeight::new( 3 ) ).unwrap();

match t.expose_two( a, c ) {
	toptree::ExposeTwoResult::CommonComponent( top ) =>
		assert_eq!( t.get_info( top ).unwrap().value(), 5 ),
	_ => panic!(),
}
```

# Crate feature flags

* `space_efficient_nodes`
	* Optional, requires the `nonmax` crate.
	* Shrinks every arena index by disallowing `usize::MAX`, at a small runtime cost.
* `petgraph`
	* Optional, requires the `petgraph` crate.
	* Enables [`pg`], a naive reference model used only for cross-validation in tests.
* `generate`
	* Optional, requires the `rand` crate.
	* Enables [`generate`], randomized forest/operation-sequence generation for property tests.
* `verbose_toptree`
	* Optional. WARNING: slow.
	* Prints every public operation and a tree dump before/after it runs.
* `verify_toptree`
	* Optional. WARNING: very slow.
	* Runs O(n) structural sanity checks after every mutating operation.

# Literature

\[AHdLT05\] Stephen Alstrup, Jacob Holm, Kristian de Lichtenberg and Mikkel Thorup. Maintaining
information in fully dynamic trees with top trees. ACM Transactions on Algorithms, 1(2):243–264,
2005. doi:[10.1145/1103963.1103966](https://doi.org/10.1145/1103963.1103966)
*/

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod common;
pub mod connection;
pub mod error;
mod cluster;
mod expose;
mod idx;
mod listener;
mod ops;
mod rebuild;
mod select;
mod verify;
pub mod listeners;

#[cfg( feature = "generate" )]
pub mod generate;

#[cfg( feature = "petgraph" )]
pub mod pg;

pub use connection::{ClusterKind, ConnectionType, SelectSide};
pub use error::TopTreeError;
pub use expose::{ExposeResult, ExposeTwoResult};
pub use idx::{ClusterIdx, HalfEdgeIdx, VertexIdx};
pub use listener::{ClusterAccess, ClusterAccessOps, ClusterListener};

use cluster::ClusterGraph;
use vertex::VertexRegistry;
mod vertex;

/// A dynamic forest of vertex- and edge-labeled unrooted trees, maintained as a top tree.
///
/// `TVertexInfo` is stored per vertex and never interpreted by the core. `TClusterInfo` is stored
/// per cluster node and recomputed by `TListener` as the decomposition is rebuilt; it must
/// implement `Default` so the core has a placeholder to put in a freshly materialized node before
/// `TListener::create`/`join` fill it in.
pub struct TopTree<TVertexInfo, TClusterInfo, TListener>
	where TClusterInfo : Default, TListener : ClusterListener<TVertexInfo, TClusterInfo>
{
	graph : ClusterGraph<TClusterInfo>,
	vertices : VertexRegistry<TVertexInfo>,
	listener : TListener,
	num_edges : usize,
}

impl<TVertexInfo, TClusterInfo, TListener> TopTree<TVertexInfo, TClusterInfo, TListener>
	where TClusterInfo : Default, TListener : ClusterListener<TVertexInfo, TClusterInfo>
{
	/// Creates a new, empty top tree driven by `listener`.
	pub fn new( listener : TListener ) -> Self {
		TopTree {
			graph : ClusterGraph::new(),
			vertices : VertexRegistry::new(),
			listener,
			num_edges : 0,
		}
	}

	/// Adds a new, initially isolated vertex.
	pub fn create_vertex( &mut self, v_info : TVertexInfo ) -> VertexIdx {
		self.vertices.create_vertex( v_info )
	}

	/// Links `u` and `v` with a new edge carrying `info`, at an unspecified position in each ring.
	pub fn link( &mut self, u : VertexIdx, v : VertexIdx, info : TClusterInfo ) -> Result<(), TopTreeError> {
		self.link_between_opt( u, None, v, None, info )
	}

	/// Links `u` and `v`, inserting the new edge immediately after `(v, bv)` in `v`'s ring.
	pub fn link_after( &mut self, u : VertexIdx, v : VertexIdx, bv : VertexIdx, info : TClusterInfo ) -> Result<(), TopTreeError> {
		self.link_between_opt( u, None, v, Some( bv ), info )
	}

	/// Links `u` and `v`, inserting the new edge immediately after `(u, au)` in `u`'s ring and
	/// immediately after `(v, bv)` in `v`'s ring.
	pub fn link_between( &mut self, u : VertexIdx, au : VertexIdx, v : VertexIdx, bv : VertexIdx, info : TClusterInfo ) -> Result<(), TopTreeError> {
		self.link_between_opt( u, Some( au ), v, Some( bv ), info )
	}

	fn link_between_opt(
		&mut self, u : VertexIdx, au : Option<VertexIdx>, v : VertexIdx, bv : Option<VertexIdx>, info : TClusterInfo,
	) -> Result<(), TopTreeError>
	{
		if cfg!( feature = "verbose_toptree" ) {
			println!( "link({u}, {v})" );
		}
		ops::link( &mut self.graph, &mut self.vertices, &mut self.listener, u, au, v, bv, info )?;
		self.num_edges += 1;
		if cfg!( feature = "verify_toptree" ) {
			verify::check( &self.graph, &self.vertices );
		}
		Ok( () )
	}

	/// Removes the edge between `u` and `v`.
	pub fn cut( &mut self, u : VertexIdx, v : VertexIdx ) -> Result<(), TopTreeError> {
		if cfg!( feature = "verbose_toptree" ) {
			println!( "cut({u}, {v})" );
		}
		ops::cut( &mut self.graph, &mut self.vertices, &mut self.listener, u, v )?;
		self.num_edges -= 1;
		if cfg!( feature = "verify_toptree" ) {
			verify::check( &self.graph, &self.vertices );
		}
		Ok( () )
	}

	/// Makes `v` a boundary of its component's top cluster.
	pub fn expose( &mut self, v : VertexIdx ) -> ExposeResult {
		if cfg!( feature = "verbose_toptree" ) {
			println!( "expose({v})" );
		}
		let result = expose::expose_one( &mut self.graph, &mut self.vertices, &mut self.listener, v );
		if cfg!( feature = "verify_toptree" ) {
			verify::check( &self.graph, &self.vertices );
		}
		result
	}

	/// Makes both `u` and `v` boundaries of a single top cluster, if they share a component.
	pub fn expose_two( &mut self, u : VertexIdx, v : VertexIdx ) -> ExposeTwoResult {
		if cfg!( feature = "verbose_toptree" ) {
			println!( "expose_two({u}, {v})" );
		}
		let result = expose::expose_two( &mut self.graph, &mut self.vertices, &mut self.listener, u, v );
		if cfg!( feature = "verify_toptree" ) {
			verify::check( &self.graph, &self.vertices );
		}
		result
	}

	/// The top (parentless) cluster of `v`'s component, or `None` if `v` is isolated.
	///
	/// Unlike [`expose`](Self::expose), this does not rebuild anything: it returns whatever
	/// cluster currently happens to be the root, which may not have `v` as a boundary.
	pub fn get_top_component( &self, v : VertexIdx ) -> Option<ClusterIdx> {
		rebuild::find_top( &self.graph, &self.vertices, v )
	}

	/// Exposes `v`, then descends via [`ClusterListener::select_question`] to a single edge.
	pub fn select( &mut self, v : VertexIdx ) -> Option<(VertexIdx, VertexIdx)> {
		let top = match self.expose( v ) {
			ExposeResult::Single => return None,
			ExposeResult::Component( top ) => top,
		};
		let base = select::select( &mut self.graph, &mut self.vertices, &mut self.listener, top );
		Some( self.edge_endpoints( base ) )
	}

	/// Exposes `u` and `v`, then descends (restricted to the u-v path) to a single edge.
	pub fn select_between( &mut self, u : VertexIdx, v : VertexIdx ) -> Option<(VertexIdx, VertexIdx)> {
		let top = match self.expose_two( u, v ) {
			ExposeTwoResult::CommonComponent( top ) => top,
			_ => return None,
		};
		let base = select::select_between( &mut self.graph, &mut self.vertices, &mut self.listener, top );
		Some( self.edge_endpoints( base ) )
	}

	fn edge_endpoints( &self, base : ClusterIdx ) -> (VertexIdx, VertexIdx) {
		let (bu, bv) = self.graph.boundaries( base );
		( bu.expect( "a base cluster always has two boundaries" ), bv )
	}

	/// Number of vertices created so far.
	pub fn num_vertices( &self ) -> usize {
		self.vertices.num_vertices()
	}

	/// Number of currently live edges.
	pub fn num_edges( &self ) -> usize {
		self.num_edges
	}

	/// Number of connected components, computed by a fresh traversal of the vertex adjacency.
	pub fn num_components( &self ) -> usize {
		let n = self.vertices.num_vertices();
		let mut seen = vec![false; n];
		let mut count = 0;
		for start in 0..n {
			let start = VertexIdx::new( start );
			if seen[start.index()] {
				continue;
			}
			count += 1;
			let mut stack = vec![start];
			seen[start.index()] = true;
			while let Some( v ) = stack.pop() {
				for he in self.vertices.ring( v ) {
					let next = self.vertices.half_edge_owner( self.vertices.half_edge_twin( he ) );
					if !seen[next.index()] {
						seen[next.index()] = true;
						stack.push( next );
					}
				}
			}
		}
		count
	}

	/// Reads `c`'s user info, if `c` is currently a top cluster.
	///
	/// Returns [`TopTreeError::IllegalAccess`] if `c` has since been buried inside a larger
	/// cluster by a later `link`/`cut`/`expose` — its info is no longer guaranteed current, and
	/// is only safe to touch from inside a [`ClusterListener`] callback, where the core hands it
	/// out directly via [`ClusterAccess`].
	pub fn get_info( &self, c : ClusterIdx ) -> Result<&TClusterInfo, TopTreeError> {
		if self.graph.is_top( c ) { Ok( self.graph.info( c ) ) } else { Err( TopTreeError::IllegalAccess ) }
	}

	/// Writes `c`'s user info, if `c` is currently a top cluster. See [`get_info`](Self::get_info).
	pub fn set_info( &mut self, c : ClusterIdx, info : TClusterInfo ) -> Result<(), TopTreeError> {
		if self.graph.is_top( c ) {
			*self.graph.info_mut( c ) = info;
			Ok( () )
		}
		else {
			Err( TopTreeError::IllegalAccess )
		}
	}

	/// Reads `c`'s left boundary (`None` for a point cluster), if `c` is currently a top cluster.
	pub fn get_bu( &self, c : ClusterIdx ) -> Result<Option<VertexIdx>, TopTreeError> {
		if self.graph.is_top( c ) { Ok( self.graph.boundaries( c ).0 ) } else { Err( TopTreeError::IllegalAccess ) }
	}

	/// Reads `c`'s right boundary, if `c` is currently a top cluster.
	pub fn get_bv( &self, c : ClusterIdx ) -> Result<VertexIdx, TopTreeError> {
		if self.graph.is_top( c ) { Ok( self.graph.boundaries( c ).1 ) } else { Err( TopTreeError::IllegalAccess ) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use common::EmptyWeight;
	use common::MonoidWeight;

	struct NullListener;
	impl ClusterListener<(), EmptyWeight> for NullListener {
		fn create( &mut self, _ : &mut ClusterAccess<(), EmptyWeight>, _ : ClusterIdx, _ : ClusterKind ) {}
		fn destroy( &mut self, _ : &mut ClusterAccess<(), EmptyWeight>, _ : ClusterIdx, _ : ClusterKind ) {}
		fn join( &mut self, _ : &mut ClusterAccess<(), EmptyWeight>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}
		fn split( &mut self, _ : &mut ClusterAccess<(), EmptyWeight>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}
		fn select_question( &mut self, _ : &mut ClusterAccess<(), EmptyWeight>, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) -> SelectSide {
			SelectSide::Left
		}
	}

	#[test]
	fn link_cut_and_connectivity_roundtrip() {
		let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
		let a = t.create_vertex( () );
		let b = t.create_vertex( () );
		let c = t.create_vertex( () );

		assert_eq!( t.num_vertices(), 3 );
		assert_eq!( t.num_components(), 3 );

		t.link( a, b, EmptyWeight::identity() ).unwrap();
		t.link( b, c, EmptyWeight::identity() ).unwrap();
		assert_eq!( t.num_edges(), 2 );
		assert_eq!( t.num_components(), 1 );

		assert!( matches!( t.expose_two( a, c ), ExposeTwoResult::CommonComponent( _ ) ) );

		t.cut( b, c ).unwrap();
		assert_eq!( t.num_edges(), 1 );
		assert_eq!( t.num_components(), 2 );
		assert!( matches!( t.expose_two( a, c ), ExposeTwoResult::DifferentComponents ) );
	}

	#[test]
	fn self_loop_and_duplicate_rejected() {
		let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
		let a = t.create_vertex( () );
		let b = t.create_vertex( () );
		t.link( a, b, EmptyWeight::identity() ).unwrap();

		assert_eq!( t.link( a, a, EmptyWeight::identity() ), Err( TopTreeError::SelfLoop( a ) ) );
		assert_eq!( t.link( a, b, EmptyWeight::identity() ), Err( TopTreeError::AlreadyConnected( a, b ) ) );
		assert_eq!( t.num_edges(), 1 );
	}

	#[test]
	fn illegal_access_after_burial() {
		let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
		let a = t.create_vertex( () );
		let b = t.create_vertex( () );
		let c = t.create_vertex( () );
		t.link( a, b, EmptyWeight::identity() ).unwrap();
		let top_ab = match t.expose( a ) {
			ExposeResult::Component( c ) => c,
			_ => panic!(),
		};
		assert!( t.get_info( top_ab ).is_ok() );

		t.link( b, c, EmptyWeight::identity() ).unwrap();
		t.expose( c );
		assert_eq!( t.get_info( top_ab ), Err( TopTreeError::IllegalAccess ) );
	}
}
