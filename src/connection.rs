//! Classification of how a parent cluster's two proper children are connected.
//!
//! These are the seven cases of Alstrup, Holm, de Lichtenberg and Thorup's top tree
//! decomposition (figure 1 of their paper), used by [`crate::listener::ClusterListener::join`]
//! and [`crate::listener::ClusterListener::split`] to tell the listener how to combine or
//! distribute information.

use std::fmt::{Display, Formatter};

/// Whether a cluster has two boundary vertices (a path) or one (a point).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClusterKind {
	/// A cluster with two boundary vertices.
	Path,

	/// A cluster with a single boundary vertex (a subtree hanging off that vertex).
	Point,
}

impl Display for ClusterKind {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		match self {
			ClusterKind::Path => write!( f, "path" ),
			ClusterKind::Point => write!( f, "point" ),
		}
	}
}

/// How a parent cluster's left and right proper children are connected.
///
/// A compress parent always connects two path children (`PathAndPath`, `PathAndPoint`, or
/// `PointAndPath`, all of which are themselves path clusters); a rake parent connects a point
/// child to a path child, or two point children, and is itself a point cluster
/// (`LPointAndRPoint`, `LPointOverRPoint`, `RPointOverLPoint`, `PointAndPoint`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConnectionType {
	/// Compress parent, path + path children: boundaries are left-of-left, right-of-right.
	PathAndPath,

	/// Compress parent, path + point children: boundaries are those of the left (path) child.
	PathAndPoint,

	/// Compress parent, point + path children: boundaries are those of the right (path) child.
	PointAndPath,

	/// Rake parent, path + path children: the parent's single boundary is the left boundary of
	/// the left child.
	LPointAndRPoint,

	/// Rake parent, path + path children: the parent's single boundary is the right boundary of
	/// the right child.
	LPointOverRPoint,

	/// Rake parent, path + path children: the parent's single boundary is the vertex shared by
	/// both children.
	RPointOverLPoint,

	/// Rake parent, point + point children: the parent's single boundary is the shared vertex.
	PointAndPoint,
}

impl ConnectionType {
	/// The [`ClusterKind`] of a parent with this connection type.
	pub fn parent_kind( &self ) -> ClusterKind {
		match self {
			ConnectionType::PathAndPath | ConnectionType::PathAndPoint | ConnectionType::PointAndPath =>
				ClusterKind::Path,
			_ => ClusterKind::Point,
		}
	}

	/// Whether this connection type is realized by a compress node (as opposed to a rake node).
	pub fn is_compress( &self ) -> bool {
		self.parent_kind() == ClusterKind::Path
	}
}

impl Display for ConnectionType {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		let s = match self {
			ConnectionType::PathAndPath => "path+path",
			ConnectionType::PathAndPoint => "path+point",
			ConnectionType::PointAndPath => "point+path",
			ConnectionType::LPointAndRPoint => "lpoint&rpoint",
			ConnectionType::LPointOverRPoint => "lpoint/rpoint",
			ConnectionType::RPointOverLPoint => "rpoint/lpoint",
			ConnectionType::PointAndPoint => "point+point",
		};
		write!( f, "{s}" )
	}
}

/// Derives the [`ConnectionType`] of a compress or rake node from its two children's kinds.
pub(crate) fn classify( is_compress : bool, left : ClusterKind, right : ClusterKind ) -> ConnectionType {
	if is_compress {
		match (left, right) {
			(ClusterKind::Path, ClusterKind::Path) => ConnectionType::PathAndPath,
			(ClusterKind::Path, ClusterKind::Point) => ConnectionType::PathAndPoint,
			(ClusterKind::Point, ClusterKind::Path) => ConnectionType::PointAndPath,
			(ClusterKind::Point, ClusterKind::Point) =>
				unreachable!( "a compress node never joins two point clusters" ),
		}
	}
	else {
		match (left, right) {
			(ClusterKind::Point, ClusterKind::Point) => ConnectionType::PointAndPoint,
			_ => ConnectionType::RPointOverLPoint,
		}
	}
}

/// Which child [`crate::listener::ClusterListener::select_question`] chose to descend into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SelectSide {
	/// Descend into the left child.
	Left,

	/// Descend into the right child.
	Right,
}
