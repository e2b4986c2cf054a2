//! Integration-level checks of the synchronous error paths: no partial mutation, no listener
//! callback fires, and state is otherwise left exactly as it was.

use toptree::common::{EmptyWeight, MonoidWeight};
use toptree::{ExposeResult, TopTree, TopTreeError};

use crate::util::NullListener;

#[test]
fn self_loop_is_rejected() {
	let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
	let a = t.create_vertex( () );
	assert_eq!( t.link( a, a, EmptyWeight::identity() ), Err( TopTreeError::SelfLoop( a ) ) );
	assert_eq!( t.num_edges(), 0 );
}

#[test]
fn relinking_already_connected_vertices_is_rejected() {
	let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
	let a = t.create_vertex( () );
	let b = t.create_vertex( () );
	let c = t.create_vertex( () );
	t.link( a, b, EmptyWeight::identity() ).unwrap();
	t.link( b, c, EmptyWeight::identity() ).unwrap();

	assert_eq!( t.link( a, c, EmptyWeight::identity() ), Err( TopTreeError::AlreadyConnected( a, c ) ) );
	assert_eq!( t.num_edges(), 2 );
}

#[test]
fn cutting_a_nonexistent_edge_is_rejected() {
	let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
	let a = t.create_vertex( () );
	let b = t.create_vertex( () );
	let c = t.create_vertex( () );
	t.link( a, b, EmptyWeight::identity() ).unwrap();

	assert_eq!( t.cut( a, c ), Err( TopTreeError::NoSuchEdge( a, c ) ) );
	assert_eq!( t.num_edges(), 1 );
}

#[test]
fn linking_after_a_nonexistent_neighbor_is_rejected() {
	let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
	let a = t.create_vertex( () );
	let b = t.create_vertex( () );
	let c = t.create_vertex( () );

	assert_eq!( t.link_after( a, b, c, EmptyWeight::identity() ), Err( TopTreeError::NoSuchNeighbor( b, c ) ) );
	assert_eq!( t.num_edges(), 0 );
}

#[test]
fn stale_cluster_handle_is_rejected_after_being_buried() {
	let mut t : TopTree<(), EmptyWeight, _> = TopTree::new( NullListener );
	let a = t.create_vertex( () );
	let b = t.create_vertex( () );
	let c = t.create_vertex( () );
	t.link( a, b, EmptyWeight::identity() ).unwrap();

	let top_ab = match t.expose( a ) {
		ExposeResult::Component( top ) => top,
		ExposeResult::Single => panic!(),
	};
	assert!( t.get_info( top_ab ).is_ok() );
	assert!( t.get_bu( top_ab ).is_ok() );
	assert!( t.get_bv( top_ab ).is_ok() );

	t.link( b, c, EmptyWeight::identity() ).unwrap();
	t.expose( c );

	assert_eq!( t.get_info( top_ab ), Err( TopTreeError::IllegalAccess ) );
	assert_eq!( t.get_bu( top_ab ), Err( TopTreeError::IllegalAccess ) );
	assert_eq!( t.get_bv( top_ab ), Err( TopTreeError::IllegalAccess ) );
	assert_eq!( t.set_info( top_ab, EmptyWeight::identity() ), Err( TopTreeError::IllegalAccess ) );
}
