//! `link`/`cut`: the structural mutations, independent of whichever vertex is later exposed.
//!
//! Neither operation touches the cluster tree of an *unaffected* component. `link` only ever adds
//! a new, parentless base cluster (nothing else in the arena references it yet, so there is
//! nothing to keep consistent). `cut` must tear down its whole old component's compress/rake
//! structure first, since that structure holds parent/child pointers into the base cluster being
//! removed; the two resulting components are left as a flat forest of parentless base clusters,
//! to be woven back into real top clusters by the next [`crate::TopTree::expose`].

use crate::cluster::ClusterGraph;
use crate::error::TopTreeError;
use crate::listener::{ClusterAccess, ClusterListener};
use crate::rebuild::{destroy_component, find_path, find_top};
use crate::vertex::VertexRegistry;
use crate::VertexIdx;

/// Links `u` and `v` with a new edge carrying `info`, inserted into each ring immediately after
/// the existing neighbor named by `after_u`/`after_v` (or at an unspecified position if `None`).
pub fn link<TVertexInfo, TClusterInfo, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	u : VertexIdx, after_u : Option<VertexIdx>,
	v : VertexIdx, after_v : Option<VertexIdx>,
	info : TClusterInfo,
) -> Result<(), TopTreeError>
{
	if u == v {
		return Err( TopTreeError::SelfLoop( u ) );
	}
	if find_path( vertices, u, v ).is_some() {
		return Err( TopTreeError::AlreadyConnected( u, v ) );
	}

	let cluster = graph.new_base( u, v, info );
	match vertices.insert_edge( u, after_u, v, after_v, cluster ) {
		Ok( _ ) => {
			let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
			listener.create( &mut access, cluster, crate::connection::ClusterKind::Path );
			Ok( () )
		}
		Err( e ) => {
			graph.dispose( cluster );
			Err( e )
		}
	}
}

/// Removes the edge between `u` and `v`.
pub fn cut<TVertexInfo, TClusterInfo, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	u : VertexIdx, v : VertexIdx,
) -> Result<(), TopTreeError>
{
	let he = vertices.edge_half_edge( u, v ).ok_or( TopTreeError::NoSuchEdge( u, v ) )?;
	let twin = vertices.half_edge_twin( he );
	let cluster = vertices.half_edge_cluster( he );

	if let Some( top ) = find_top( graph, vertices, u ) {
		destroy_component( graph, vertices, listener, top );
	}

	{
		let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
		listener.destroy( &mut access, cluster, crate::connection::ClusterKind::Path );
	}
	graph.dispose( cluster );

	vertices.remove_half_edge( he );
	vertices.remove_half_edge( twin );

	Ok( () )
}
