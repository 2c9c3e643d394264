use morph_core::ast::Lambda;

use std::fmt;

/// Identifies a row source within a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub usize);

/// What a provider must compute: read a source, then apply each projection
/// in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub source: SourceId,
    pub projections: Vec<Lambda>,
}

impl Plan {
    pub fn new(source: SourceId) -> Plan {
        Plan {
            source,
            projections: vec![],
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source({})", self.source.0)?;

        for projection in &self.projections {
            write!(f, " |> {projection}")?;
        }

        Ok(())
    }
}
