//! Ready-made [`ClusterListener`] implementations built on the weight types in [`crate::common`].
//!
//! None of these are special to the core; they are ordinary clients written against the same
//! [`ClusterAccessOps`] surface any user listener would use.

use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use num_traits::{PrimInt, Signed, Unsigned};

use crate::common::{EmptyWeight, MonoidWeight, SignedAddWeight, UnsignedMaxWeight, WeightWithMaxEdge};
use crate::connection::{ClusterKind, ConnectionType, SelectSide};
use crate::listener::{ClusterAccess, ClusterAccessOps, ClusterListener};
use crate::ClusterIdx;

/// Ignores cluster content entirely; useful when only `link`/`cut`/`expose_two` connectivity
/// answers are needed and no aggregate has to be maintained.
pub struct ConnectivityListener;

impl<TVertexInfo> ClusterListener<TVertexInfo, EmptyWeight> for ConnectivityListener {
	fn create( &mut self, _ : &mut ClusterAccess<TVertexInfo, EmptyWeight>, _ : ClusterIdx, _ : ClusterKind ) {}
	fn destroy( &mut self, _ : &mut ClusterAccess<TVertexInfo, EmptyWeight>, _ : ClusterIdx, _ : ClusterKind ) {}
	fn join( &mut self, _ : &mut ClusterAccess<TVertexInfo, EmptyWeight>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}
	fn split( &mut self, _ : &mut ClusterAccess<TVertexInfo, EmptyWeight>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}
	fn select_question(
		&mut self, _ : &mut ClusterAccess<TVertexInfo, EmptyWeight>, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType,
	) -> SelectSide {
		SelectSide::Left
	}
}

/// Sums edge weights along the exposed path; ignores raked-off side branches entirely.
///
/// `TClusterInfo` doubles as the edge weight type: pass the weight of each new edge directly as
/// `link`'s `info` argument.
pub struct PathLengthListener<TNum : PrimInt + Signed + Debug + Display> {
	_marker : PhantomData<TNum>,
}

impl<TNum : PrimInt + Signed + Debug + Display> PathLengthListener<TNum> {
	/// Creates a new listener.
	pub fn new() -> Self {
		PathLengthListener { _marker : PhantomData }
	}
}

impl<TNum : PrimInt + Signed + Debug + Display> Default for PathLengthListener<TNum> {
	fn default() -> Self { Self::new() }
}

impl<TVertexInfo, TNum : PrimInt + Signed + Debug + Display> ClusterListener<TVertexInfo, SignedAddWeight<TNum>>
	for PathLengthListener<TNum>
{
	fn create( &mut self, _ : &mut ClusterAccess<TVertexInfo, SignedAddWeight<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}
	fn destroy( &mut self, _ : &mut ClusterAccess<TVertexInfo, SignedAddWeight<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}

	fn join(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, SignedAddWeight<TNum>>,
		parent : ClusterIdx, left : ClusterIdx, right : ClusterIdx, connection : ConnectionType,
	)
	{
		let value = match connection {
			ConnectionType::PathAndPath => *access.get_info( left ) + *access.get_info( right ),
			ConnectionType::PathAndPoint => *access.get_info( left ),
			ConnectionType::PointAndPath => *access.get_info( right ),
			_ => SignedAddWeight::identity(),
		};
		*access.get_info_mut( parent ) = value;
	}

	fn split( &mut self, _ : &mut ClusterAccess<TVertexInfo, SignedAddWeight<TNum>>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}

	fn select_question(
		&mut self, _ : &mut ClusterAccess<TVertexInfo, SignedAddWeight<TNum>>, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType,
	) -> SelectSide
	{
		SelectSide::Left
	}
}

/// Finds the heaviest edge on the exposed path, via `select_between`'s descent rather than `join`
/// doing any real work beyond propagating the running maximum.
///
/// Pass `WeightWithMaxEdge::new(weight, (u, v))` as `link`'s `info` for the edge `(u, v)`.
pub struct HeaviestEdgeListener<TNum : PrimInt + Unsigned + Debug + Display> {
	_marker : PhantomData<TNum>,
}

impl<TNum : PrimInt + Unsigned + Debug + Display> HeaviestEdgeListener<TNum> {
	/// Creates a new listener.
	pub fn new() -> Self {
		HeaviestEdgeListener { _marker : PhantomData }
	}
}

impl<TNum : PrimInt + Unsigned + Debug + Display> Default for HeaviestEdgeListener<TNum> {
	fn default() -> Self { Self::new() }
}

type EdgeWeight<TNum> = WeightWithMaxEdge<UnsignedMaxWeight<TNum>>;

impl<TVertexInfo, TNum : PrimInt + Unsigned + Debug + Display> ClusterListener<TVertexInfo, EdgeWeight<TNum>>
	for HeaviestEdgeListener<TNum>
{
	fn create( &mut self, _ : &mut ClusterAccess<TVertexInfo, EdgeWeight<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}
	fn destroy( &mut self, _ : &mut ClusterAccess<TVertexInfo, EdgeWeight<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}

	fn join(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, EdgeWeight<TNum>>,
		parent : ClusterIdx, left : ClusterIdx, right : ClusterIdx, connection : ConnectionType,
	)
	{
		let value = match connection {
			ConnectionType::PathAndPath => *access.get_info( left ) + *access.get_info( right ),
			ConnectionType::PathAndPoint => *access.get_info( left ),
			ConnectionType::PointAndPath => *access.get_info( right ),
			_ => EdgeWeight::identity(),
		};
		*access.get_info_mut( parent ) = value;
	}

	fn split( &mut self, _ : &mut ClusterAccess<TVertexInfo, EdgeWeight<TNum>>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}

	/// Descends toward whichever side carries the larger maximum; on a `select_between` descent
	/// (the only caller this listener is meant for) this converges to the heaviest edge.
	fn select_question(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, EdgeWeight<TNum>>,
		left : ClusterIdx, right : ClusterIdx, _ : ConnectionType,
	) -> SelectSide
	{
		if access.get_info( left ).weight() >= access.get_info( right ).weight() { SelectSide::Left } else { SelectSide::Right }
	}
}

/// Aggregate carried by the diameter listener: the path length between a path cluster's two
/// boundaries, the farthest distance reachable from each boundary, and the diameter (farthest
/// pairwise distance) seen so far anywhere inside the cluster.
///
/// For a point cluster only `reach_from_bv` and `diameter` are meaningful; `path_length` and
/// `reach_from_bu` are left at zero and never read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiameterInfo<TNum : PrimInt + Unsigned + Debug + Display> {
	path_length : TNum,
	reach_from_bu : TNum,
	reach_from_bv : TNum,
	diameter : TNum,
}

impl<TNum : PrimInt + Unsigned + Debug + Display> DiameterInfo<TNum> {
	/// The info for a single edge of the given length.
	pub fn edge( length : TNum ) -> Self {
		DiameterInfo { path_length : length, reach_from_bu : length, reach_from_bv : length, diameter : length }
	}

	/// The largest pairwise distance seen within this cluster.
	pub fn diameter( &self ) -> TNum {
		self.diameter
	}
}

impl<TNum : PrimInt + Unsigned + Debug + Display> Default for DiameterInfo<TNum> {
	fn default() -> Self {
		DiameterInfo { path_length : TNum::zero(), reach_from_bu : TNum::zero(), reach_from_bv : TNum::zero(), diameter : TNum::zero() }
	}
}

/// Maintains, for the exposed component, the diameter (longest path) of the underlying tree.
pub struct DiameterListener<TNum : PrimInt + Unsigned + Debug + Display> {
	_marker : PhantomData<TNum>,
}

impl<TNum : PrimInt + Unsigned + Debug + Display> DiameterListener<TNum> {
	/// Creates a new listener.
	pub fn new() -> Self {
		DiameterListener { _marker : PhantomData }
	}
}

impl<TNum : PrimInt + Unsigned + Debug + Display> Default for DiameterListener<TNum> {
	fn default() -> Self { Self::new() }
}

impl<TVertexInfo, TNum : PrimInt + Unsigned + Debug + Display> ClusterListener<TVertexInfo, DiameterInfo<TNum>>
	for DiameterListener<TNum>
{
	fn create( &mut self, _ : &mut ClusterAccess<TVertexInfo, DiameterInfo<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}
	fn destroy( &mut self, _ : &mut ClusterAccess<TVertexInfo, DiameterInfo<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}

	fn join(
		&mut self,
		access : &mut ClusterAccess<TVertexInfo, DiameterInfo<TNum>>,
		parent : ClusterIdx, left : ClusterIdx, right : ClusterIdx, connection : ConnectionType,
	)
	{
		let l = *access.get_info( left );
		let r = *access.get_info( right );

		let result = match connection {
			ConnectionType::PathAndPath => DiameterInfo {
				path_length : l.path_length + r.path_length,
				reach_from_bu : l.reach_from_bu.max( l.path_length + r.reach_from_bu ),
				reach_from_bv : r.reach_from_bv.max( r.path_length + l.reach_from_bv ),
				diameter : l.diameter.max( r.diameter ).max( l.reach_from_bv + r.reach_from_bu ),
			},
			ConnectionType::PathAndPoint => DiameterInfo {
				path_length : l.path_length,
				reach_from_bu : l.reach_from_bu.max( l.path_length + r.reach_from_bv ),
				reach_from_bv : l.reach_from_bv.max( r.reach_from_bv ),
				diameter : l.diameter.max( r.diameter ).max( l.reach_from_bv + r.reach_from_bv ),
			},
			ConnectionType::PointAndPath => DiameterInfo {
				path_length : r.path_length,
				reach_from_bu : r.reach_from_bu.max( l.reach_from_bv ),
				reach_from_bv : r.reach_from_bv.max( r.path_length + l.reach_from_bv ),
				diameter : l.diameter.max( r.diameter ).max( l.reach_from_bv + r.reach_from_bu ),
			},
			_ => DiameterInfo {
				path_length : TNum::zero(),
				reach_from_bu : TNum::zero(),
				reach_from_bv : l.reach_from_bv.max( r.reach_from_bv ),
				diameter : l.diameter.max( r.diameter ).max( l.reach_from_bv + r.reach_from_bv ),
			},
		};
		*access.get_info_mut( parent ) = result;
	}

	fn split( &mut self, _ : &mut ClusterAccess<TVertexInfo, DiameterInfo<TNum>>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}

	fn select_question(
		&mut self, _ : &mut ClusterAccess<TVertexInfo, DiameterInfo<TNum>>, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType,
	) -> SelectSide
	{
		SelectSide::Left
	}
}

/// Finds the edge that splits the exposed tree closest to evenly by vertex weight, via repeated
/// descent into whichever child carries the larger share of weight.
///
/// `TVertexInfo` is the vertex's own weight. `link`'s `info` argument for this listener is
/// ignored (overwritten by [`ClusterListener::create`]) and can be `SignedAddWeight::identity()`.
pub struct WeightedMedianListener<TNum : PrimInt + Signed + Debug + Display> {
	_marker : PhantomData<TNum>,
}

impl<TNum : PrimInt + Signed + Debug + Display> WeightedMedianListener<TNum> {
	/// Creates a new listener.
	pub fn new() -> Self {
		WeightedMedianListener { _marker : PhantomData }
	}
}

impl<TNum : PrimInt + Signed + Debug + Display> Default for WeightedMedianListener<TNum> {
	fn default() -> Self { Self::new() }
}

impl<TNum : PrimInt + Signed + Debug + Display> ClusterListener<TNum, SignedAddWeight<TNum>>
	for WeightedMedianListener<TNum>
{
	/// Seeds every cluster's total as the sum of its own boundary vertices' weights; for compress
	/// and rake nodes this is immediately superseded by `join`, fired right after `create`.
	fn create( &mut self, access : &mut ClusterAccess<TNum, SignedAddWeight<TNum>>, c : ClusterIdx, _ : ClusterKind ) {
		let bv_weight = *access.get_vertex_info( access.get_bv( c ) );
		let bu_weight = match access.get_bu( c ) {
			Some( bu ) => *access.get_vertex_info( bu ),
			None => TNum::zero(),
		};
		*access.get_info_mut( c ) = SignedAddWeight::new( bu_weight + bv_weight );
	}

	fn destroy( &mut self, _ : &mut ClusterAccess<TNum, SignedAddWeight<TNum>>, _ : ClusterIdx, _ : ClusterKind ) {}

	/// Combines by inclusion-exclusion: both children already count the vertex they share once
	/// each, so its weight is subtracted back out.
	fn join(
		&mut self,
		access : &mut ClusterAccess<TNum, SignedAddWeight<TNum>>,
		parent : ClusterIdx, left : ClusterIdx, right : ClusterIdx, connection : ConnectionType,
	)
	{
		let shared = match connection {
			ConnectionType::PathAndPath | ConnectionType::PathAndPoint => access.get_bv( left ),
			ConnectionType::PointAndPath => access.get_bu( right ).expect( "path child has a left boundary" ),
			_ => access.get_bv( parent ),
		};
		let shared_weight = *access.get_vertex_info( shared );
		let total = access.get_info( left ).value() + access.get_info( right ).value() - shared_weight;
		*access.get_info_mut( parent ) = SignedAddWeight::new( total );
	}

	fn split( &mut self, _ : &mut ClusterAccess<TNum, SignedAddWeight<TNum>>, _ : ClusterIdx, _ : ClusterIdx, _ : ClusterIdx, _ : ConnectionType ) {}

	/// Descends into whichever child carries more of the remaining weight; equivalent to
	/// comparing each child's total against half the parent's, since the two sum to the parent's.
	fn select_question(
		&mut self,
		access : &mut ClusterAccess<TNum, SignedAddWeight<TNum>>,
		left : ClusterIdx, right : ClusterIdx, _ : ConnectionType,
	) -> SelectSide
	{
		if access.get_info( left ).value() >= access.get_info( right ).value() { SelectSide::Left } else { SelectSide::Right }
	}
}
