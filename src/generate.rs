//! Random forest and operation-sequence generation, used by property tests.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::VertexIdx;

/// Returns the edges of a random spanning tree on `num_vertices` vertices, as `(parent, child)`
/// pairs oriented away from an arbitrary root.
pub fn generate_tree_edges<'a>( num_vertices : usize, rng : &'a mut impl Rng ) -> impl Iterator<Item = (usize, usize)> + 'a {
	let mut order : Vec<usize> = (0..num_vertices).collect();
	order.shuffle( rng );

	(1..num_vertices).map( move |i| ( order[rng.gen_range( 0..i )], order[i] ) )
}

/// One step of a randomized sequence exercising a [`crate::TopTree`].
#[derive(Clone, Copy, Debug)]
pub enum Op {
	/// Link two vertices known to be in different components.
	Link( VertexIdx, VertexIdx ),

	/// Cut an existing edge.
	Cut( VertexIdx, VertexIdx ),

	/// Expose two vertices and read back their relationship.
	ExposeTwo( VertexIdx, VertexIdx ),
}

/// Generates a random sequence of `num_ops` [`Op`]s over `num_vertices` vertices, starting from
/// an empty forest and tracking components (via a union-find) and live edges so every `Link` is
/// between different components and every `Cut` names a real edge.
pub fn generate_ops( num_vertices : usize, num_ops : usize, rng : &mut impl Rng ) -> Vec<Op> {
	let mut uf = UnionFind::new( num_vertices );
	let mut live_edges : Vec<(usize, usize)> = Vec::new();
	let mut ops = Vec::with_capacity( num_ops );

	for _ in 0..num_ops {
		// Bias toward linking when the forest is sparse, cutting when it's dense, so both kinds
		// of step actually get exercised instead of one dominating.
		let want_link = live_edges.len() * 3 < num_vertices || rng.gen_bool( 0.5 );

		if want_link && num_vertices >= 2 {
			if let Some( (u, v) ) = sample_cross_component( num_vertices, &uf, rng ) {
				uf.union( u, v );
				live_edges.push( (u, v) );
				ops.push( Op::Link( VertexIdx::new( u ), VertexIdx::new( v ) ) );
				continue;
			}
		}

		if !live_edges.is_empty() {
			let idx = rng.gen_range( 0..live_edges.len() );
			let (u, v) = live_edges.swap_remove( idx );
			uf = UnionFind::from_edges( num_vertices, &live_edges );
			ops.push( Op::Cut( VertexIdx::new( u ), VertexIdx::new( v ) ) );
		}
		else if num_vertices >= 2 {
			let u = rng.gen_range( 0..num_vertices );
			let v = rng.gen_range( 0..num_vertices );
			ops.push( Op::ExposeTwo( VertexIdx::new( u ), VertexIdx::new( v ) ) );
		}
	}

	ops
}

fn sample_cross_component( num_vertices : usize, uf : &UnionFind, rng : &mut impl Rng ) -> Option<(usize, usize)> {
	for _ in 0..32 {
		let u = rng.gen_range( 0..num_vertices );
		let mut v = rng.gen_range( 0..num_vertices - 1 );
		if v >= u {
			v += 1;
		}
		if uf.find( u ) != uf.find( v ) {
			return Some( (u, v) );
		}
	}
	None
}

/// A plain union-find, used only to keep [`generate_ops`] from proposing an already-connecting
/// `Link`; not part of the engine itself.
struct UnionFind {
	parent : Vec<usize>,
}

impl UnionFind {
	fn new( n : usize ) -> Self {
		UnionFind { parent : (0..n).collect() }
	}

	fn from_edges( n : usize, edges : &[(usize, usize)] ) -> Self {
		let mut uf = Self::new( n );
		for &(u, v) in edges {
			uf.union( u, v );
		}
		uf
	}

	fn find( &self, x : usize ) -> usize {
		let mut x = x;
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	fn union( &mut self, a : usize, b : usize ) {
		let (ra, rb) = (self.find( a ), self.find( b ));
		if ra != rb {
			self.parent[ra] = rb;
		}
	}
}
