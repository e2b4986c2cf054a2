//! Builds (and tears down) the cluster-node tree of a component from its vertex adjacency.
//!
//! The engine does not maintain clusters incrementally through local rotations the way an
//! amortized splay-based restructuring would after every access; instead [`expose_one`]/
//! [`expose_two`] destroy the affected component's entire compress/rake
//! substructure and rebuild it from the base clusters up, in one bottom-up pass over the tree
//! rooted at the vertex (or vertices) being exposed. This keeps the `create`/`destroy`/`join`/
//! `split` firing discipline and the arena/lazy-bit idioms the rest of the crate is built around,
//! at the cost of doing `O(size of component)` work per `expose` rather than the amortized
//! `O(log n)` a from-scratch splay-based implementation would achieve. See `DESIGN.md` for the
//! rationale.

use std::collections::{HashMap, VecDeque};

use crate::cluster::{ClusterGraph, ClusterVariant, Role};
use crate::connection::ConnectionType;
use crate::listener::{ClusterAccess, ClusterListener};
use crate::vertex::VertexRegistry;
use crate::{ClusterIdx, VertexIdx};

fn fire_create<TV, TC, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L, c : ClusterIdx,
)
{
	let kind = graph.kind( c );
	let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
	listener.create( &mut access, c, kind );
}

fn fire_join<TV, TC, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L,
	parent : ClusterIdx, left : ClusterIdx, right : ClusterIdx, connection : ConnectionType,
)
{
	{
		let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
		listener.join( &mut access, parent, left, right, connection );
	}
	graph.clear_dirty( parent );
}

fn fire_destroy<TV, TC, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L, c : ClusterIdx,
)
{
	let kind = graph.kind( c );
	let mut access = ClusterAccess { graph : &mut *graph, vertices : &mut *vertices };
	listener.destroy( &mut access, c, kind );
}

/// Finds the top (parentless) cluster of `v`'s component, or `None` if `v` is isolated.
pub fn find_top<TV, TC>( graph : &ClusterGraph<TC>, vertices : &VertexRegistry<TV>, v : VertexIdx ) -> Option<ClusterIdx> {
	let he = vertices.ring( v ).next()?;
	let mut c = vertices.half_edge_cluster( he );
	while let Some( p ) = graph.parent( c ) {
		c = p;
	}
	Some( c )
}

/// Destroys every compress/rake node in `top`'s subtree (post-order), leaving only base clusters.
pub fn destroy_component<TV, TC, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L, top : ClusterIdx,
)
{
	if graph.variant( top ) == ClusterVariant::Base {
		return;
	}
	graph.push_down_reversed( top );
	let (l, r) = graph.children( top );
	graph.set_child( top, Role::Left, None );
	graph.set_child( top, Role::Right, None );
	destroy_component( graph, vertices, listener, l );
	destroy_component( graph, vertices, listener, r );
	fire_destroy( graph, vertices, listener, top );
	graph.dispose( top );
}

/// Ensures the base cluster for the edge between `near` and `far` presents boundaries
/// `(Some(far), near)`, toggling its reversed bit if it was stored the other way round.
fn oriented_edge<TV, TC>(
	graph : &mut ClusterGraph<TC>, vertices : &VertexRegistry<TV>, near : VertexIdx, far : VertexIdx,
) -> ClusterIdx
{
	let he = vertices.edge_half_edge( near, far ).expect( "adjacency claimed by traversal must exist" );
	let edge = vertices.half_edge_cluster( he );
	let (bu, bv) = graph.boundaries( edge );
	if bu == Some( far ) && bv == near {
		return edge;
	}
	debug_assert_eq!( bu, Some( near ) );
	debug_assert_eq!( bv, far );
	graph.toggle_reversed( edge );
	edge
}

/// Rakes `a` and `b` together at their shared boundary `shared`, firing `create`/`join`.
fn rake_fold<TV, TC : Default, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L,
	a : ClusterIdx, b : ClusterIdx, shared : VertexIdx,
) -> ClusterIdx
{
	let connection = crate::connection::classify( false, graph.kind( a ), graph.kind( b ) );
	let node = graph.new_rake( a, b, shared, TC::default() );
	fire_create( graph, vertices, listener, node );
	fire_join( graph, vertices, listener, node, a, b, connection );
	node
}

/// Combines the (already path-oriented, each bound `(_, v)`) `branches` hanging off `v` into one
/// cluster bound at `v`: the first branch survives as the path continuation, every other branch
/// is raked into a single point and folded in alongside it.
fn combine_branches<TV, TC : Default, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L,
	v : VertexIdx, mut branches : Vec<ClusterIdx>,
) -> ClusterIdx
{
	debug_assert!( !branches.is_empty() );
	if branches.len() == 1 {
		return branches.pop().unwrap();
	}
	let primary = branches.remove( 0 );
	let mut raked = branches.remove( 0 );
	for b in branches {
		raked = rake_fold( graph, vertices, listener, raked, b, v );
	}
	let (bu, _) = graph.boundaries( primary );
	let bu = bu.expect( "path branch must have a left boundary" );
	let node = graph.new_compress( primary, raked, v, bu, v, TC::default() );
	fire_create( graph, vertices, listener, node );
	fire_join( graph, vertices, listener, node, primary, raked, ConnectionType::PathAndPoint );
	node
}

/// Builds the branch a neighbor `c` of `v` contributes, bound `(_, v)`.
fn attach_edge<TV, TC : Default, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L,
	v : VertexIdx, c : VertexIdx, child_spine : Option<ClusterIdx>,
) -> ClusterIdx
{
	let edge = oriented_edge( graph, vertices, v, c );
	match child_spine {
		None => edge,
		Some( cs ) => {
			let (gc, _) = graph.boundaries( cs );
			let gc = gc.expect( "a child's spine must be a path cluster" );
			let node = graph.new_compress( cs, edge, c, gc, v, TC::default() );
			fire_create( graph, vertices, listener, node );
			fire_join( graph, vertices, listener, node, cs, edge, ConnectionType::PathAndPath );
			node
		}
	}
}

/// Recursively builds the cluster representing everything reachable from `v` other than through
/// the vertices in `exclude`, bound at `v`. Returns `None` if `v` has no such neighbors.
fn spine<TV, TC : Default, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L,
	v : VertexIdx, exclude : &[VertexIdx],
) -> Option<ClusterIdx>
{
	let neighbors : Vec<VertexIdx> = vertices.ring( v )
		.map( |he| vertices.half_edge_owner( vertices.half_edge_twin( he ) ) )
		.filter( |c| !exclude.contains( c ) )
		.collect();

	if neighbors.is_empty() {
		return None;
	}

	let branches = neighbors.into_iter()
		.map( |c| {
			let child_spine = spine( graph, vertices, listener, c, &[v] );
			attach_edge( graph, vertices, listener, v, c, child_spine )
		} )
		.collect();

	Some( combine_branches( graph, vertices, listener, v, branches ) )
}

/// Rebuilds `v`'s whole component bound at `v`, returning `None` if `v` is isolated.
pub fn rebuild_one<TV, TC : Default, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L, v : VertexIdx,
) -> Option<ClusterIdx>
{
	spine( graph, vertices, listener, v, &[] )
}

/// Finds the unique simple path from `u` to `v` in the forest, by BFS over the vertex adjacency.
/// Returns `None` if they are not in the same component.
pub fn find_path<TV>( vertices : &VertexRegistry<TV>, u : VertexIdx, v : VertexIdx ) -> Option<Vec<VertexIdx>> {
	let mut prev : HashMap<VertexIdx, VertexIdx> = HashMap::new();
	let mut queue = VecDeque::new();
	queue.push_back( u );
	let mut seen = std::collections::HashSet::new();
	seen.insert( u );

	while let Some( cur ) = queue.pop_front() {
		if cur == v {
			let mut path = vec![v];
			let mut cursor = v;
			while cursor != u {
				cursor = prev[&cursor];
				path.push( cursor );
			}
			path.reverse();
			return Some( path );
		}
		for he in vertices.ring( cur ) {
			let next = vertices.half_edge_owner( vertices.half_edge_twin( he ) );
			if seen.insert( next ) {
				prev.insert( next, cur );
				queue.push_back( next );
			}
		}
	}
	None
}

/// Rebuilds the component containing the path `path[0] ..= path[path.len() - 1]`, producing a
/// single cluster bound at `(path.last(), path[0])`: every vertex strictly between the two
/// endpoints is compressed away, every endpoint's other incident subtrees are folded in as rake
/// attachments, and both endpoints survive as the result's two boundaries.
pub fn rebuild_pair<TV, TC : Default, L : ClusterListener<TV, TC>>(
	graph : &mut ClusterGraph<TC>, vertices : &mut VertexRegistry<TV>, listener : &mut L, path : &[VertexIdx],
) -> ClusterIdx
{
	let k = path.len() - 1;
	let target = path[k];

	let target_extra = spine( graph, vertices, listener, target, &[path[k - 1]] );

	let mut acc : Option<ClusterIdx> = None;
	for i in (1..=k).rev() {
		let far = path[i];
		let near = path[i - 1];
		let edge = oriented_edge( graph, vertices, far, near );

		let base_step = match acc {
			None => match target_extra {
				None => edge,
				Some( extra ) => {
					let node = graph.new_compress( edge, extra, far, target, near, TC::default() );
					fire_create( graph, vertices, listener, node );
					fire_join( graph, vertices, listener, node, edge, extra, ConnectionType::PathAndPoint );
					node
				}
			},
			Some( prev ) => {
				let node = graph.new_compress( prev, edge, far, target, near, TC::default() );
				fire_create( graph, vertices, listener, node );
				fire_join( graph, vertices, listener, node, prev, edge, ConnectionType::PathAndPath );
				node
			}
		};

		let mut exclude = vec![far];
		if i >= 2 {
			exclude.push( path[i - 2] );
		}
		let extra_near = spine( graph, vertices, listener, near, &exclude );

		acc = Some( match extra_near {
			None => base_step,
			Some( extra ) => {
				let node = graph.new_compress( base_step, extra, near, target, near, TC::default() );
				fire_create( graph, vertices, listener, node );
				fire_join( graph, vertices, listener, node, base_step, extra, ConnectionType::PathAndPoint );
				node
			}
		} );
	}

	acc.expect( "a path of length >= 1 always produces a cluster" )
}
