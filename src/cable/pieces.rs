// Splits a cable edge graph into ordered polylines ("pieces").
//
// Walk order is fully determined by vertex index and edge-list order, so the same
// mesh always yields the same pieces in the same order.
//
//   1. Isolated vertices become single-vertex pieces (no geometry).
//   2. Chains are walked from every vertex whose degree is not 2 (endpoints and
//      junctions), following degree-2 vertices until the next endpoint/junction.
//   3. Remaining unvisited edges form closed loops; each is walked from its lowest
//      vertex and emitted with that vertex repeated at the end: [a, b, c, a].

/// Ordered vertex indices; consecutive entries are joined by an edge.
pub type Piece = Vec<usize>;

/// Vertex adjacency: for each vertex, `(neighbour, edge index)` in edge-list order.
struct Adjacency {
    links: Vec<Vec<(usize, usize)>>,
}

impl Adjacency {
    fn build(vertex_count: usize, edges: &[[usize; 2]]) -> Self {
        let mut links = vec![Vec::new(); vertex_count];
        for (ei, &[a, b]) in edges.iter().enumerate() {
            if a == b {
                log::warn!("Skipping self-loop edge {ei} on vertex {a}");
                continue;
            }
            if a >= vertex_count || b >= vertex_count {
                log::warn!("Skipping edge {ei} ({a}, {b}): vertex out of range");
                continue;
            }
            links[a].push((b, ei));
            links[b].push((a, ei));
        }
        Self { links }
    }

    fn degree(&self, v: usize) -> usize {
        self.links[v].len()
    }
}

/// Partition the edge graph into pieces. Every usable edge ends up in exactly one piece.
pub fn segment_pieces(vertex_count: usize, edges: &[[usize; 2]]) -> Vec<Piece> {
    let adjacency = Adjacency::build(vertex_count, edges);
    let mut visited = vec![false; edges.len()];
    let mut pieces = Vec::new();

    for v in 0..vertex_count {
        match adjacency.degree(v) {
            0 => pieces.push(vec![v]),
            2 => {}
            _ => start_walks(&adjacency, &mut visited, v, &mut pieces),
        }
    }

    // Only closed loops are left: every vertex on them has degree 2.
    for v in 0..vertex_count {
        start_walks(&adjacency, &mut visited, v, &mut pieces);
    }

    pieces
}

/// Walk every unvisited edge leaving `start`.
fn start_walks(adjacency: &Adjacency, visited: &mut [bool], start: usize, pieces: &mut Vec<Piece>) {
    for &(next, edge) in &adjacency.links[start] {
        if !visited[edge] {
            pieces.push(walk(adjacency, visited, start, next, edge));
        }
    }
}

/// Follow the chain `start -> next` through degree-2 vertices until it reaches an
/// endpoint, a junction, or runs out of unvisited edges (loop closed).
fn walk(adjacency: &Adjacency, visited: &mut [bool], start: usize, next: usize, edge: usize) -> Piece {
    visited[edge] = true;
    let mut piece = vec![start, next];
    let mut current = next;

    while adjacency.degree(current) == 2 {
        let Some(&(n, e)) = adjacency.links[current].iter().find(|(_, e)| !visited[*e]) else {
            break;
        };
        visited[e] = true;
        piece.push(n);
        current = n;
    }

    piece
}

/// Output vertex count for `pieces`: 6 per segment, nothing for single-vertex pieces.
pub fn output_vertex_count(pieces: &[Piece]) -> usize {
    pieces.iter().map(|p| p.len().saturating_sub(1) * 6).sum()
}

// ============================================================================
// TESTS
// ============================================================================
