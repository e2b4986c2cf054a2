//! `verify_toptree`-gated O(n) structural sanity checks, run after every mutating operation.
//!
//! Walks every vertex ring and every reachable cluster subtree, asserting the invariants the
//! rest of the engine relies on but never checks on the hot path.

use crate::cluster::{ClusterGraph, ClusterVariant, Role};
use crate::vertex::VertexRegistry;
use crate::ClusterIdx;

/// Walks every vertex's ring and every reachable cluster node, panicking on any inconsistency.
/// Only called when compiled with `verify_toptree`; callers should gate it behind
/// `cfg!(feature = "verify_toptree")` so it costs nothing otherwise.
pub(crate) fn check<TVertexInfo, TClusterInfo>(
	graph : &ClusterGraph<TClusterInfo>, vertices : &VertexRegistry<TVertexInfo>,
)
{
	for v in 0..vertices.num_vertices() {
		let v = crate::VertexIdx::new( v );
		let mut count = 0;
		for he in vertices.ring( v ) {
			let twin = vertices.half_edge_twin( he );
			assert_eq!( vertices.half_edge_owner( twin ), vertices.half_edge_owner( vertices.half_edge_twin( he ) ) );
			assert_eq!( vertices.half_edge_cluster( he ), vertices.half_edge_cluster( twin ) );
			assert_eq!( vertices.half_edge_twin( twin ), he );
			count += 1;
		}
		assert_eq!( count, vertices.degree( v ) );

		if let Some( top ) = crate::rebuild::find_top( graph, vertices, v ) {
			check_subtree( graph, top, &mut Vec::new() );
		}
	}
}

fn check_subtree<TClusterInfo>( graph : &ClusterGraph<TClusterInfo>, c : ClusterIdx, stack : &mut Vec<ClusterIdx> ) {
	assert!( !stack.contains( &c ), "cycle in cluster-node graph" );
	stack.push( c );

	if graph.variant( c ) != ClusterVariant::Base {
		let (l, r) = graph.children( c );
		assert_eq!( graph.parent( l ), Some( c ) );
		assert_eq!( graph.role_in_parent( l ), Some( Role::Left ) );
		assert_eq!( graph.parent( r ), Some( c ) );
		assert_eq!( graph.role_in_parent( r ), Some( Role::Right ) );
		check_subtree( graph, l, stack );
		check_subtree( graph, r, stack );
	}

	stack.pop();
}
