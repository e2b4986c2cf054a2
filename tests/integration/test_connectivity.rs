//! Randomized cross-validation of `link`/`cut`/`expose_two` connectivity against a plain
//! `petgraph` graph tracking the same history.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use toptree::common::{EmptyWeight, MonoidWeight};
use toptree::generate::Op;

use crate::util::{random_ops, NullListener, TestForest};

#[test]
fn random_link_cut_sequence_agrees_with_reference() {
	const NUM_VERTICES : usize = 40;
	const NUM_OPS : usize = 400;

	let mut rng = StdRng::seed_from_u64( 0 );
	let mut f = TestForest::new( NUM_VERTICES, NullListener );

	for op in random_ops( NUM_VERTICES, NUM_OPS, &mut rng ) {
		f.apply( op, EmptyWeight::identity );
		if rng.gen_bool( 0.1 ) {
			f.check_connectivity();
		}
	}
	f.check_connectivity();
}

#[test]
fn num_edges_and_num_components_track_the_history() {
	let mut f = TestForest::new( 5, NullListener );
	assert_eq!( f.t.num_components(), 5 );

	f.apply( Op::Link( f.v( 0 ), f.v( 1 ) ), EmptyWeight::identity );
	f.apply( Op::Link( f.v( 1 ), f.v( 2 ) ), EmptyWeight::identity );
	assert_eq!( f.t.num_edges(), 2 );
	assert_eq!( f.t.num_components(), 3 );

	f.apply( Op::Cut( f.v( 0 ), f.v( 1 ) ), EmptyWeight::identity );
	assert_eq!( f.t.num_edges(), 1 );
	assert_eq!( f.t.num_components(), 4 );
	f.check_connectivity();
}

#[test]
fn cutting_the_only_edge_splits_the_component() {
	let mut f = TestForest::new( 3, NullListener );
	f.apply( Op::Link( f.v( 0 ), f.v( 1 ) ), EmptyWeight::identity );
	f.apply( Op::Link( f.v( 1 ), f.v( 2 ) ), EmptyWeight::identity );
	f.check_connectivity();

	f.apply( Op::Cut( f.v( 1 ), f.v( 2 ) ), EmptyWeight::identity );
	f.check_connectivity();
}
