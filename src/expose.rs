//! The public `expose`/`expose_two` entry points: make one or two vertices boundaries of a
//! top cluster, per the data model contract.

use crate::cluster::ClusterGraph;
use crate::listener::ClusterListener;
use crate::rebuild::{destroy_component, find_path, find_top, rebuild_one, rebuild_pair};
use crate::vertex::VertexRegistry;
use crate::{ClusterIdx, VertexIdx};

/// The outcome of [`crate::TopTree::expose`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExposeResult {
	/// `v` has no incident edges; its component is just itself, with no cluster at all.
	Single,

	/// `v` is now a boundary of the returned top cluster.
	Component( ClusterIdx ),
}

/// The outcome of [`crate::TopTree::expose_two`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExposeTwoResult {
	/// `u` and `v` were the same vertex.
	OneVertex,

	/// Both `u` and `v` are isolated vertices (and therefore in different components).
	BothSingle,

	/// `u` is isolated; `v` is not.
	LeftSingle,

	/// `v` is isolated; `u` is not.
	RightSingle,

	/// `u` and `v` are both non-isolated but in different components.
	DifferentComponents,

	/// `u` and `v` share a component; both are now boundaries of the returned top cluster.
	CommonComponent( ClusterIdx ),
}

/// Makes `v` a boundary of its component's top cluster, rebuilding that component's
/// compress/rake structure from scratch.
pub fn expose_one<TVertexInfo, TClusterInfo : Default, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	v : VertexIdx,
) -> ExposeResult
{
	if vertices.is_single( v ) {
		return ExposeResult::Single;
	}
	if let Some( top ) = find_top( graph, vertices, v ) {
		destroy_component( graph, vertices, listener, top );
	}
	let top = rebuild_one( graph, vertices, listener, v )
		.expect( "a non-isolated vertex always yields a cluster" );
	ExposeResult::Component( top )
}

/// Makes both `u` and `v` boundaries of a single top cluster, if they share a component.
pub fn expose_two<TVertexInfo, TClusterInfo : Default, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	u : VertexIdx,
	v : VertexIdx,
) -> ExposeTwoResult
{
	if u == v {
		return ExposeTwoResult::OneVertex;
	}

	let u_single = vertices.is_single( u );
	let v_single = vertices.is_single( v );
	if u_single && v_single {
		return ExposeTwoResult::BothSingle;
	}
	if u_single {
		return ExposeTwoResult::LeftSingle;
	}
	if v_single {
		return ExposeTwoResult::RightSingle;
	}

	match find_path( vertices, u, v ) {
		None => {
			// Different components: still expose each endpoint in its own component, per the
			// data model contract, even though there is no shared cluster to return.
			if let Some( top ) = find_top( graph, vertices, u ) {
				destroy_component( graph, vertices, listener, top );
			}
			rebuild_one( graph, vertices, listener, u ).expect( "u is non-isolated here" );

			if let Some( top ) = find_top( graph, vertices, v ) {
				destroy_component( graph, vertices, listener, top );
			}
			rebuild_one( graph, vertices, listener, v ).expect( "v is non-isolated here" );

			ExposeTwoResult::DifferentComponents
		}
		Some( path ) => {
			if let Some( top ) = find_top( graph, vertices, u ) {
				destroy_component( graph, vertices, listener, top );
			}
			let top = rebuild_pair( graph, vertices, listener, &path );
			// `rebuild_pair` produces a cluster bound `(path.last(), path[0])` = `(v, u)`;
			// flip it so `bu == u` and `bv == v`, matching the accessor contract.
			graph.toggle_reversed( top );
			ExposeTwoResult::CommonComponent( top )
		}
	}
}
