//! Infrastructure connection tag shared across the network and capacity model.
//!
//! Edges arrive from the external loader with a free-form connection string;
//! anything unrecognized maps to [`ConnectionKind::Unspecified`] rather than
//! failing the load.  The capacity profiles in `ff-network` own the
//! per-kind throughput multipliers.

/// The kind of infrastructure a directed edge runs over.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ConnectionKind {
    /// No connection tag on the edge (default; capacity multiplier 1.0).
    #[default]
    Unspecified,
    /// Ordinary road.
    Road,
    /// Motorway / trunk road.
    Highway,
    /// Rail link.
    Rail,
    /// Sea or inland-waterway port link.
    Port,
    /// Air freight link.
    Air,
}

impl ConnectionKind {
    /// Parse a loader-supplied tag.  Unknown tags become `Unspecified`.
    pub fn parse(tag: &str) -> ConnectionKind {
        match tag {
            "road"    => ConnectionKind::Road,
            "highway" => ConnectionKind::Highway,
            "rail"    => ConnectionKind::Rail,
            "port"    => ConnectionKind::Port,
            "air"     => ConnectionKind::Air,
            _         => ConnectionKind::Unspecified,
        }
    }

    /// Human-readable label matching the wire tags.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionKind::Unspecified => "unspecified",
            ConnectionKind::Road        => "road",
            ConnectionKind::Highway     => "highway",
            ConnectionKind::Rail        => "rail",
            ConnectionKind::Port        => "port",
            ConnectionKind::Air         => "air",
        }
    }
}

impl std::fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
