/// Four nodes on a 10 x 10 square given by coordinates.
pub const SQUARE_EUCLIDEAN: &str = "NAME : square
COMMENT : four nodes on a square
TYPE : TSP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 0 10
3 10 10
4 10 0
EOF
";

/// The same square given as a full explicit distance matrix.
pub const SQUARE_FULL_MATRIX: &str = "NAME : square
TYPE : TSP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_FORMAT : FULL_MATRIX
EDGE_WEIGHT_SECTION
0 10 14 10
10 0 10 14
14 10 0 10
10 14 10 0
EOF
";

/// The same square given as an upper triangle without the diagonal.
pub const SQUARE_UPPER_ROW: &str = "NAME : square
TYPE : TSP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_FORMAT : UPPER_ROW
EDGE_WEIGHT_SECTION
10 14 10
10 14
10
EOF
";

/// The same square given as a lower triangle with the diagonal.
pub const SQUARE_LOWER_DIAG_ROW: &str = "NAME : square
TYPE : TSP
DIMENSION : 4
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_FORMAT : LOWER_DIAG_ROW
EDGE_WEIGHT_SECTION
0
10 0
14 10 0
10 14 10 0
EOF
";
