use toptree::common::EmptyWeight;
use toptree::generate::{self, Op};
use toptree::pg::ReferenceForest;
use toptree::{ClusterListener, TopTree, VertexIdx};

/// A no-op listener, for tests that only exercise connectivity.
pub struct NullListener;

impl<TVertexInfo> ClusterListener<TVertexInfo, EmptyWeight> for NullListener {
	fn create( &mut self, _ : &mut toptree::ClusterAccess<TVertexInfo, EmptyWeight>, _ : toptree::ClusterIdx, _ : toptree::ClusterKind ) {}
	fn destroy( &mut self, _ : &mut toptree::ClusterAccess<TVertexInfo, EmptyWeight>, _ : toptree::ClusterIdx, _ : toptree::ClusterKind ) {}
	fn join(
		&mut self, _ : &mut toptree::ClusterAccess<TVertexInfo, EmptyWeight>,
		_ : toptree::ClusterIdx, _ : toptree::ClusterIdx, _ : toptree::ClusterIdx, _ : toptree::ConnectionType,
	) {}
	fn split(
		&mut self, _ : &mut toptree::ClusterAccess<TVertexInfo, EmptyWeight>,
		_ : toptree::ClusterIdx, _ : toptree::ClusterIdx, _ : toptree::ClusterIdx, _ : toptree::ConnectionType,
	) {}
	fn select_question(
		&mut self, _ : &mut toptree::ClusterAccess<TVertexInfo, EmptyWeight>,
		_ : toptree::ClusterIdx, _ : toptree::ClusterIdx, _ : toptree::ConnectionType,
	) -> toptree::SelectSide
	{
		toptree::SelectSide::Left
	}
}

/// Pairs a [`TopTree`] with a [`ReferenceForest`] tracking the same `link`/`cut` history, so every
/// mutation can be immediately cross-checked for connectivity agreement.
pub struct TestForest<TClusterInfo : Default, TListener : ClusterListener<(), TClusterInfo>> {
	pub t : TopTree<(), TClusterInfo, TListener>,
	pub reference : ReferenceForest,
	num_vertices : usize,
}

impl<TClusterInfo : Default, TListener : ClusterListener<(), TClusterInfo>> TestForest<TClusterInfo, TListener> {
	pub fn new( num_vertices : usize, listener : TListener ) -> Self {
		let mut t = TopTree::new( listener );
		for _ in 0..num_vertices {
			t.create_vertex( () );
		}
		TestForest { t, reference : ReferenceForest::new( num_vertices ), num_vertices }
	}

	pub fn v( &self, i : usize ) -> VertexIdx {
		VertexIdx::new( i )
	}

	/// Runs `op` against both the top tree and the reference forest. `make_info` is only invoked
	/// for a `Link`, to produce the new edge's cluster info.
	pub fn apply( &mut self, op : Op, make_info : impl FnOnce() -> TClusterInfo ) {
		match op {
			Op::Link( u, v ) => {
				self.t.link( u, v, make_info() ).expect( "generate_ops only proposes cross-component links" );
				self.reference.link( u, v );
			}
			Op::Cut( u, v ) => {
				self.t.cut( u, v ).expect( "generate_ops only proposes live edges" );
				self.reference.cut( u, v );
			}
			Op::ExposeTwo( u, v ) => {
				self.t.expose_two( u, v );
			}
		}
	}

	pub fn check_connectivity( &mut self ) {
		let n = self.num_vertices;
		for u in 0..n {
			for v in (u + 1)..n {
				let (uu, vv) = (self.v( u ), self.v( v ));
				let expected = self.reference.connected( uu, vv );
				let actual = matches!( self.t.expose_two( uu, vv ), toptree::ExposeTwoResult::CommonComponent( _ ) );
				assert_eq!( actual, expected, "connectivity mismatch for ({u}, {v})" );
			}
		}
	}
}

/// Generates `num_ops` random `Link`/`Cut`/`ExposeTwo` ops over `num_vertices` vertices.
pub fn random_ops( num_vertices : usize, num_ops : usize, rng : &mut impl rand::Rng ) -> Vec<Op> {
	generate::generate_ops( num_vertices, num_ops, rng )
}
