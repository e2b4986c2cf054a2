//! `select`/`select_between`: descend from a top cluster to a single base cluster, firing `split`
//! and consulting [`ClusterListener::select_question`] at every compress/rake node on the way.

use crate::cluster::{ClusterGraph, ClusterVariant};
use crate::connection::{classify, SelectSide};
use crate::listener::{ClusterAccess, ClusterListener};
use crate::vertex::VertexRegistry;
use crate::ClusterIdx;

fn descend<TVertexInfo, TClusterInfo, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	c : ClusterIdx,
	path_only : bool,
) -> ClusterIdx
{
	graph.push_down_reversed( c );
	if graph.variant( c ) == ClusterVariant::Base {
		return c;
	}

	let (left, right) = graph.children( c );
	let is_compress = graph.variant( c ) == ClusterVariant::Compress;
	let left_kind = graph.kind( left );
	let right_kind = graph.kind( right );
	let connection = classify( is_compress, left_kind, right_kind );

	{
		let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
		listener.split( &mut access, left, right, c, connection );
	}
	graph.clear_dirty( left );
	graph.clear_dirty( right );

	// `select_between` never strays off the u-v path into a raked side subtree: if only one
	// child still carries both boundaries, that's the one to follow.
	use crate::connection::ClusterKind;
	let next = if path_only && left_kind != right_kind {
		if left_kind == ClusterKind::Path { left } else { right }
	}
	else {
		let side = {
			let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
			listener.select_question( &mut access, left, right, connection )
		};
		match side {
			SelectSide::Left => left,
			SelectSide::Right => right,
		}
	};
	descend( graph, vertices, listener, next, path_only )
}

/// Descends from `top` (the top cluster of some vertex's component, as returned by
/// [`crate::TopTree::expose`]) to the base cluster `select_question` chooses at every branch.
pub fn select<TVertexInfo, TClusterInfo, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	top : ClusterIdx,
) -> ClusterIdx
{
	descend( graph, vertices, listener, top, false )
}

/// Descends from `top` (the top cluster produced by [`crate::TopTree::expose_two`], bound at the
/// two exposed vertices) to the base cluster `select_question` chooses at every branch, never
/// following a child that has dropped one of the two original boundaries.
pub fn select_between<TVertexInfo, TClusterInfo, L : ClusterListener<TVertexInfo, TClusterInfo>>(
	graph : &mut ClusterGraph<TClusterInfo>,
	vertices : &mut VertexRegistry<TVertexInfo>,
	listener : &mut L,
	top : ClusterIdx,
) -> ClusterIdx
{
	descend( graph, vertices, listener, top, true )
}
