//! Counting line changes along a path.

use crate::network::{Line, MetroGraph, StationId};

use super::RouteError;

/// Lines of the links between consecutive stations.
///
/// Fails with `RouteError::NotAdjacent` if two consecutive stations are not
/// linked in `graph`.
pub fn edge_lines(graph: &MetroGraph, stations: &[StationId]) -> Result<Vec<Line>, RouteError> {
    stations
        .windows(2)
        .map(|pair| {
            graph
                .line_between(pair[0], pair[1])
                .ok_or(RouteError::NotAdjacent(pair[0], pair[1]))
        })
        .collect()
}

/// Number of line changes along `stations`.
///
/// At every interior station the line of the incoming link is compared with
/// the line of the outgoing link. Paths with fewer than three stations never
/// have a transfer.
pub fn count_transfers(graph: &MetroGraph, stations: &[StationId]) -> Result<usize, RouteError> {
    let lines = edge_lines(graph, stations)?;
    Ok(changes(&lines))
}

/// Number of adjacent pairs in `lines` that differ.
pub(crate) fn changes(lines: &[Line]) -> usize {
    lines.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> StationId {
        StationId(n)
    }

    /// 0 -Red- 1 -Red- 2 -Green- 3 -Blue- 4 -Blue- 5
    fn graph() -> MetroGraph {
        let mut g = MetroGraph::new();
        g.link(id(0), id(1), Line::Red);
        g.link(id(1), id(2), Line::Red);
        g.link(id(2), id(3), Line::Green);
        g.link(id(3), id(4), Line::Blue);
        g.link(id(4), id(5), Line::Blue);
        g
    }

    #[test]
    fn same_line_has_no_transfers() {
        let g = graph();
        assert_eq!(count_transfers(&g, &[id(0), id(1), id(2)]), Ok(0));
    }

    #[test]
    fn each_change_counts() {
        let g = graph();
        assert_eq!(count_transfers(&g, &[id(1), id(2), id(3)]), Ok(1));
        assert_eq!(
            count_transfers(&g, &[id(0), id(1), id(2), id(3), id(4), id(5)]),
            Ok(2)
        );
    }

    #[test]
    fn short_paths_have_no_transfers() {
        let g = graph();
        assert_eq!(count_transfers(&g, &[]), Ok(0));
        assert_eq!(count_transfers(&g, &[id(2)]), Ok(0));
        assert_eq!(count_transfers(&g, &[id(2), id(3)]), Ok(0));
    }

    #[test]
    fn direction_does_not_matter() {
        let g = graph();
        let forward = [id(0), id(1), id(2), id(3), id(4)];
        let mut backward = forward;
        backward.reverse();

        assert_eq!(count_transfers(&g, &forward), count_transfers(&g, &backward));
    }

    #[test]
    fn unlinked_pair_is_error() {
        let g = graph();
        assert_eq!(
            count_transfers(&g, &[id(0), id(2)]),
            Err(RouteError::NotAdjacent(id(0), id(2)))
        );
    }

    #[test]
    fn edge_lines_in_order() {
        let g = graph();
        assert_eq!(
            edge_lines(&g, &[id(1), id(2), id(3), id(4)]),
            Ok(vec![Line::Red, Line::Green, Line::Blue])
        );
    }
}
