//! The cluster-node arena: base/compress/rake nodes, their boundaries, and lazy propagation bits.
//!
//! A flat `Vec`-backed collection of nodes addressed by index, with parent/child fields as
//! `Option` indices rather than references, rather than one variant per shape a cluster-node
//! graph mixes three node shapes (base, compress, rake) in one arena, distinguished by a
//! `ClusterVariant` tag.

use crate::connection::ClusterKind;
use crate::{ClusterIdx, VertexIdx};

/// The three cluster-node shapes (§3 of the data model).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClusterVariant {
	/// Represents exactly one edge of the forest. Has no children.
	Base,

	/// Concatenation of a left and a right path child through a shared compressed vertex.
	Compress,

	/// Attachment of a point child to a path (or point) child at a shared boundary vertex.
	Rake,
}

/// The side of its parent a cluster node sits on. Every compress or rake node has exactly two
/// children, one of each role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
	/// Left child.
	Left,

	/// Right child.
	Right,
}

struct ClusterNode<TClusterInfo> {
	variant : ClusterVariant,

	/// Canonical (pre-reversal) left boundary. `None` for point clusters.
	bu : Option<VertexIdx>,

	/// Canonical (pre-reversal) right boundary. Always present.
	bv : VertexIdx,

	/// For compress nodes, the vertex shared by both children.
	compressed_vertex : Option<VertexIdx>,

	parent : Option<ClusterIdx>,
	role_in_parent : Option<Role>,

	left : Option<ClusterIdx>,
	right : Option<ClusterIdx>,

	reversed : bool,

	/// Set when a child has changed since `info` was last refreshed by `join`.
	dirty : bool,

	info : TClusterInfo,
}

impl<TClusterInfo> ClusterNode<TClusterInfo> {
	fn kind( &self ) -> ClusterKind {
		if self.bu.is_some() { ClusterKind::Path } else { ClusterKind::Point }
	}
}

/// Owns every cluster node across every component of a [`crate::TopTree`].
pub struct ClusterGraph<TClusterInfo> {
	nodes : Vec<Option<ClusterNode<TClusterInfo>>>,
	free : Vec<ClusterIdx>,
}

impl<TClusterInfo> ClusterGraph<TClusterInfo> {
	pub fn new() -> Self {
		ClusterGraph { nodes : Vec::new(), free : Vec::new() }
	}

	fn alloc( &mut self, node : ClusterNode<TClusterInfo> ) -> ClusterIdx {
		if let Some( idx ) = self.free.pop() {
			self.nodes[idx.index()] = Some( node );
			idx
		}
		else {
			let idx = ClusterIdx::new( self.nodes.len() );
			self.nodes.push( Some( node ) );
			idx
		}
	}

	fn node( &self, c : ClusterIdx ) -> &ClusterNode<TClusterInfo> {
		self.nodes[c.index()].as_ref().expect( "use of a destroyed cluster" )
	}

	fn node_mut( &mut self, c : ClusterIdx ) -> &mut ClusterNode<TClusterInfo> {
		self.nodes[c.index()].as_mut().expect( "use of a destroyed cluster" )
	}

	/// Creates a new base cluster representing one edge, with no parent.
	pub fn new_base( &mut self, u : VertexIdx, v : VertexIdx, info : TClusterInfo ) -> ClusterIdx {
		self.alloc( ClusterNode {
			variant : ClusterVariant::Base,
			bu : Some( u ), bv : v,
			compressed_vertex : None,
			parent : None, role_in_parent : None,
			left : None, right : None,
			reversed : false, dirty : false, info,
		} )
	}

	/// Creates a new compress node joining `left` and `right` (both currently parentless path
	/// clusters sharing `compressed_vertex`).
	pub fn new_compress(
		&mut self,
		left : ClusterIdx, right : ClusterIdx,
		compressed_vertex : VertexIdx,
		bu : VertexIdx, bv : VertexIdx,
		info : TClusterInfo,
	) -> ClusterIdx {
		let c = self.alloc( ClusterNode {
			variant : ClusterVariant::Compress,
			bu : Some( bu ), bv,
			compressed_vertex : Some( compressed_vertex ),
			parent : None, role_in_parent : None,
			left : None, right : None,
			reversed : false, dirty : true, info,
		} );
		self.set_child( c, Role::Left, Some( left ) );
		self.set_child( c, Role::Right, Some( right ) );
		c
	}

	/// Creates a new rake node attaching `left` to `right` at their shared boundary vertex.
	pub fn new_rake( &mut self, left : ClusterIdx, right : ClusterIdx, shared : VertexIdx, info : TClusterInfo ) -> ClusterIdx {
		let c = self.alloc( ClusterNode {
			variant : ClusterVariant::Rake,
			bu : None, bv : shared,
			compressed_vertex : None,
			parent : None, role_in_parent : None,
			left : None, right : None,
			reversed : false, dirty : true, info,
		} );
		self.set_child( c, Role::Left, Some( left ) );
		self.set_child( c, Role::Right, Some( right ) );
		c
	}

	/// Removes `c` from the arena. `c` must currently be parentless and childless.
	pub fn dispose( &mut self, c : ClusterIdx ) -> TClusterInfo {
		let node = self.nodes[c.index()].take().expect( "double free of cluster" );
		debug_assert!( node.parent.is_none() );
		debug_assert!( node.left.is_none() && node.right.is_none() );
		self.free.push( c );
		node.info
	}

	pub fn variant( &self, c : ClusterIdx ) -> ClusterVariant {
		self.node( c ).variant
	}

	pub fn kind( &self, c : ClusterIdx ) -> ClusterKind {
		self.node( c ).kind()
	}

	pub fn parent( &self, c : ClusterIdx ) -> Option<ClusterIdx> {
		self.node( c ).parent
	}

	pub fn role_in_parent( &self, c : ClusterIdx ) -> Option<Role> {
		self.node( c ).role_in_parent
	}

	pub fn is_top( &self, c : ClusterIdx ) -> bool {
		self.parent( c ).is_none()
	}

	pub fn child( &self, c : ClusterIdx, role : Role ) -> Option<ClusterIdx> {
		let node = self.node( c );
		match role {
			Role::Left => node.left,
			Role::Right => node.right,
		}
	}

	/// Attaches (or detaches, if `child` is `None`) `child` in `parent`'s `role` slot, and updates
	/// `child`'s own `parent`/`role_in_parent` fields to match.
	pub fn set_child( &mut self, parent : ClusterIdx, role : Role, child : Option<ClusterIdx> ) {
		{
			let node = self.node_mut( parent );
			let slot = match role {
				Role::Left => &mut node.left,
				Role::Right => &mut node.right,
			};
			*slot = child;
		}
		if let Some( c ) = child {
			let cn = self.node_mut( c );
			cn.parent = Some( parent );
			cn.role_in_parent = Some( role );
		}
	}

	/// Detaches `c` from its parent, leaving both parentless/childless-in-that-slot.
	pub fn detach( &mut self, c : ClusterIdx ) {
		if let Some( role ) = self.role_in_parent( c ) {
			let p = self.parent( c ).unwrap();
			self.set_child( p, role, None );
		}
		let node = self.node_mut( c );
		node.parent = None;
		node.role_in_parent = None;
	}

	/// The two children of `c`, which must be a compress or rake node.
	pub fn children( &self, c : ClusterIdx ) -> (ClusterIdx, ClusterIdx) {
		let node = self.node( c );
		( node.left.expect( "compress/rake node missing left child" ),
		  node.right.expect( "compress/rake node missing right child" ) )
	}

	pub fn compressed_vertex( &self, c : ClusterIdx ) -> Option<VertexIdx> {
		self.node( c ).compressed_vertex
	}

	/// The logical `(bu, bv)` boundaries of `c`, with the reversed flag already applied.
	pub fn boundaries( &self, c : ClusterIdx ) -> (Option<VertexIdx>, VertexIdx) {
		let node = self.node( c );
		if node.reversed {
			match node.bu {
				Some( bu ) => (Some( node.bv ), bu),
				None => (None, node.bv),
			}
		}
		else {
			(node.bu, node.bv)
		}
	}

	/// Sets the canonical (pre-reversal) boundaries directly. Used by construction code that
	/// recomputes a node's boundaries from scratch; always called with the node's reversed flag
	/// clear.
	pub fn set_raw_boundaries( &mut self, c : ClusterIdx, bu : Option<VertexIdx>, bv : VertexIdx ) {
		let node = self.node_mut( c );
		debug_assert!( !node.reversed );
		node.bu = bu;
		node.bv = bv;
	}

	pub fn is_reversed( &self, c : ClusterIdx ) -> bool {
		self.node( c ).reversed
	}

	/// Flips `c`'s reversed bit without pushing it down. Used to present a path cluster's
	/// boundaries in the opposite order from how it was built, e.g. to orient
	/// [`crate::TopTree::expose_two`]'s result as `(u, v)` rather than however the rebuild
	/// happened to produce it.
	pub fn toggle_reversed( &mut self, c : ClusterIdx ) {
		let node = self.node_mut( c );
		node.reversed = !node.reversed;
	}

	/// Pushes `c`'s reversed bit down to its children, swapping `c`'s own canonical fields into
	/// their post-reversal order and clearing `c`'s bit.
	///
	/// Standard lazy-bit push-down, extended to also swap a node's boundary pair into
	/// post-reversal order.
	pub fn push_down_reversed( &mut self, c : ClusterIdx ) {
		let node = self.node_mut( c );
		if !node.reversed {
			return;
		}
		node.reversed = false;
		if let Some( bu ) = node.bu {
			node.bu = Some( node.bv );
			node.bv = bu;
		}
		std::mem::swap( &mut node.left, &mut node.right );

		let (left, right) = (node.left, node.right);
		if let Some( l ) = left {
			let ln = self.node_mut( l );
			ln.role_in_parent = Some( Role::Left );
			ln.reversed = !ln.reversed;
		}
		if let Some( r ) = right {
			let rn = self.node_mut( r );
			rn.role_in_parent = Some( Role::Right );
			rn.reversed = !rn.reversed;
		}
	}

	pub fn is_dirty( &self, c : ClusterIdx ) -> bool {
		self.node( c ).dirty
	}

	pub fn mark_dirty( &mut self, c : ClusterIdx ) {
		self.node_mut( c ).dirty = true;
	}

	pub fn clear_dirty( &mut self, c : ClusterIdx ) {
		self.node_mut( c ).dirty = false;
	}

	pub fn info( &self, c : ClusterIdx ) -> &TClusterInfo {
		&self.node( c ).info
	}

	pub fn info_mut( &mut self, c : ClusterIdx ) -> &mut TClusterInfo {
		&mut self.node_mut( c ).info
	}

	/// Number of live (non-disposed) cluster nodes, for diagnostics/tests only.
	#[cfg(test)]
	pub fn live_count( &self ) -> usize {
		self.nodes.iter().filter( |n| n.is_some() ).count()
	}
}
