//! The listener contract: the four structural callbacks plus `select_question`.
//!
//! The listener is the only place application semantics live. The engine in [`crate::cluster`],
//! `crate::rebuild`, `crate::expose` and `crate::ops` never inspects `TClusterInfo` or
//! `TVertexInfo`; it only calls the five methods below at the points the data model contract
//! requires (see the crate-level documentation for the exact ordering guarantees): a callback
//! trait the tree owns, invoked by the engine at precise structural transition points, with a
//! companion "access" type standing in for direct field access.

use crate::connection::{ClusterKind, ConnectionType, SelectSide};
use crate::{ClusterIdx, VertexIdx};

/// User-provided callbacks that maintain aggregate cluster information across structural changes.
///
/// Implementors are generic over nothing themselves; a `TopTree<TVertexInfo, TClusterInfo, L>`
/// is parameterized by a listener `L : ClusterListener<TVertexInfo, TClusterInfo>`. All five
/// methods are invoked with `&mut` access to a handle that lets them read and write the `bu`/`bv`
/// boundaries and the info of exactly the clusters passed as arguments (the "local access" gate
/// described in the crate documentation is open on exactly those clusters for the duration of the
/// call).
pub trait ClusterListener<TVertexInfo, TClusterInfo> {
	/// Called once, synchronously, when cluster `c` first materializes.
	///
	/// `kind` is the cluster's boundary arity. For a freshly linked edge this is always
	/// [`ClusterKind::Path`]; compress/rake nodes created by rotations may be of either kind.
	fn create( &mut self, access : &mut ClusterAccess<TVertexInfo, TClusterInfo>, c : ClusterIdx, kind : ClusterKind );

	/// Called once, synchronously, just before cluster `c` disappears.
	///
	/// After this call returns, `c`'s info is never read again; implementations that hold
	/// external references keyed by `ClusterIdx` should release them here.
	fn destroy( &mut self, access : &mut ClusterAccess<TVertexInfo, TClusterInfo>, c : ClusterIdx, kind : ClusterKind );

	/// Recompute `parent`'s info from its two current proper children.
	///
	/// Called bottom-up, after `left` and `right` have been finalized and before `parent` is
	/// handed to its own parent's `join`. `parent`'s `dirty` bit is cleared by the caller
	/// immediately after this returns.
	fn join(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, TClusterInfo>,
		parent : ClusterIdx,
		left : ClusterIdx,
		right : ClusterIdx,
		connection : ConnectionType,
	);

	/// Push `parent`'s info down into `left` and `right` before `parent` is dismantled or its
	/// children are rewired.
	///
	/// Called top-down, before any of the three clusters are structurally modified. After this
	/// call, `left` and `right` are up to date as if `join` had just been called on them with
	/// their own (unchanged) children.
	fn split(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, TClusterInfo>,
		left : ClusterIdx,
		right : ClusterIdx,
		parent : ClusterIdx,
		connection : ConnectionType,
	);

	/// Choose which child of `parent` to descend into during [`crate::TopTree::select`] /
	/// [`crate::TopTree::select_between`].
	///
	/// Only consulted when both children are eligible (for `select_between`, when both children
	/// are path clusters); otherwise the engine descends automatically. `split` has already been
	/// fired on `parent` before this is called, so `left`/`right` carry current information.
	///
	/// Implementations should be a deterministic, pure function of `left`/`right`'s info: the
	/// core does not guard against a listener that answers differently for the same inputs
	/// across two calls in the same descent (see the crate documentation's discussion of this
	/// open question).
	fn select_question(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, TClusterInfo>,
		left : ClusterIdx,
		right : ClusterIdx,
		connection : ConnectionType,
	) -> SelectSide;
}

/// The view of vertex/cluster state a [`ClusterListener`] callback is given.
///
/// This is a thin facade over the engine's internal arenas, implemented by [`ClusterAccess`]
/// below; it exists so the listener trait does not need to depend on those arena types directly,
/// separating "own your aggregate data" from "the engine drives the cluster tree's structure".
pub trait ClusterAccessOps<TVertexInfo, TClusterInfo> {
	/// Returns the logical left boundary of `c`, or `None` if `c` is a point cluster.
	fn get_bu( &self, c : ClusterIdx ) -> Option<VertexIdx>;

	/// Returns the logical right boundary of `c`. Every cluster has at least this boundary.
	fn get_bv( &self, c : ClusterIdx ) -> VertexIdx;

	/// Returns a reference to `c`'s user info.
	fn get_info( &self, c : ClusterIdx ) -> &TClusterInfo;

	/// Returns a mutable reference to `c`'s user info.
	fn get_info_mut( &mut self, c : ClusterIdx ) -> &mut TClusterInfo;

	/// Returns a reference to vertex `v`'s user info.
	fn get_vertex_info( &self, v : VertexIdx ) -> &TVertexInfo;

	/// Returns a mutable reference to vertex `v`'s user info.
	fn get_vertex_info_mut( &mut self, v : VertexIdx ) -> &mut TVertexInfo;
}

/// Concrete access handle passed to every [`ClusterListener`] callback.
///
/// A thin wrapper is used (rather than passing `&mut TopTree` directly) so that the local-access
/// gate can be asserted by construction: a `ClusterAccess` can only be built by
/// [`crate::cluster::ClusterGraph`] for the specific clusters it is currently dispatching a
/// callback on.
pub struct ClusterAccess<'a, TVertexInfo, TClusterInfo> {
	pub(crate) graph : &'a mut crate::cluster::ClusterGraph<TClusterInfo>,
	pub(crate) vertices : &'a mut crate::vertex::VertexRegistry<TVertexInfo>,
}

impl<'a, TVertexInfo, TClusterInfo> ClusterAccessOps<TVertexInfo, TClusterInfo>
	for ClusterAccess<'a, TVertexInfo, TClusterInfo>
{
	fn get_bu( &self, c : ClusterIdx ) -> Option<VertexIdx> {
		self.graph.boundaries( c ).0
	}

	fn get_bv( &self, c : ClusterIdx ) -> VertexIdx {
		self.graph.boundaries( c ).1
	}

	fn get_info( &self, c : ClusterIdx ) -> &TClusterInfo {
		self.graph.info( c )
	}

	fn get_info_mut( &mut self, c : ClusterIdx ) -> &mut TClusterInfo {
		self.graph.info_mut( c )
	}

	fn get_vertex_info( &self, v : VertexIdx ) -> &TVertexInfo {
		self.vertices.info( v )
	}

	fn get_vertex_info_mut( &mut self, v : VertexIdx ) -> &mut TVertexInfo {
		self.vertices.info_mut( v )
	}
}
