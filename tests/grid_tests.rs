//! Grid engine behaviour on small tori.

use life_the_game::proc::Grid;

fn grid(text: &str) -> Grid {
    Grid::from_pattern(text).unwrap()
}

fn alive(g: &Grid) -> Vec<(usize, usize)> {
    let mut cells = vec![];
    for (i, row) in g.iter_rows().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell {
                cells.push((i, j));
            }
        }
    }
    cells
}

#[test]
fn test_load_pattern_marks_ones() {
    let g = grid("101\n010\n101\n");
    assert_eq!(alive(&g), vec![(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]);
}

#[test]
fn test_load_pattern_into_sized_grid_clips() {
    let mut g = Grid::new(2, 2).unwrap();
    g.load_pattern("111\n111\n111\n");
    assert_eq!(g.population(), 4);

    let mut g = Grid::new(3, 3).unwrap();
    g.load_pattern("1\n");
    assert_eq!(alive(&g), vec![(0, 0)]);
}

#[test]
fn test_next_generation_is_pure() {
    let g = grid("0110\n1001\n0111\n1000\n");
    let before = g.clone();
    let a = g.next_generation();
    let b = g.next_generation();
    assert_eq!(a, b);
    assert_eq!(g, before);
}

#[test]
fn test_corner_neighbors_wrap() {
    let g = Grid::new(5, 7).unwrap();
    assert!(g.neighbors(0, 0).contains(&(4, 6)));
    assert!(g.neighbors(0, 0).contains(&(0, 6)));
    assert!(g.neighbors(0, 0).contains(&(4, 0)));
}

#[test]
fn test_block_is_still_life() {
    let g = grid("0000\n0110\n0110\n0000\n");
    assert_eq!(g.next_generation(), g);
}

#[test]
fn test_block_across_the_seam_is_still_life() {
    let g = grid("1001\n0000\n0000\n1001\n");
    assert_eq!(g.next_generation(), g);
}

#[test]
fn test_isolated_cell_dies() {
    let g = grid("00000\n00000\n00100\n00000\n00000\n");
    assert_eq!(g.next_generation().population(), 0);
}

#[test]
fn test_dead_cell_born_with_three() {
    // (1,1) is dead with neighbours (0,0), (0,1), (0,2)
    let g = grid("11100\n00000\n00000\n00000\n00000\n");
    assert_eq!(g.live_neighbors(1, 1), 3);
    assert!(g.next_generation().get(1, 1));
}

#[test]
fn test_dead_cell_stays_dead_with_two_or_four() {
    let two = grid("11000\n00000\n00000\n00000\n00000\n");
    assert_eq!(two.live_neighbors(1, 1), 2);
    assert!(!two.next_generation().get(1, 1));

    let four = grid("11100\n10000\n00000\n00000\n00000\n");
    assert_eq!(four.live_neighbors(1, 1), 4);
    assert!(!four.next_generation().get(1, 1));
}

#[test]
fn test_overcrowded_cell_dies_through_wraparound() {
    // on a 3x3 torus every other cell is a neighbour of (1,1)
    let g = grid("101\n111\n010\n");
    assert_eq!(g.live_neighbors(1, 1), 5);
    assert!(!g.next_generation().get(1, 1));
}

#[test]
fn test_live_cell_survives_with_two_or_three() {
    let g = grid("00000\n01100\n00100\n00000\n00000\n");
    let next = g.next_generation();
    assert!(next.get(1, 1));
    assert!(next.get(1, 2));
    assert!(next.get(2, 2));
}

#[test]
fn test_blinker_oscillates() {
    let v = grid("00000\n00100\n00100\n00100\n00000\n");
    let h = v.next_generation();
    assert_eq!(h.to_string(), "00000\n00000\n01110\n00000\n00000\n");
    assert_eq!(h.next_generation(), v);
}

#[test]
fn test_line_on_three_by_three_fills_board() {
    // every cell of the outer columns sees the whole live column
    let g = grid("010\n010\n010\n");
    assert_eq!(g.live_neighbors(0, 0), 3);
    assert_eq!(g.next_generation().to_string(), "111\n111\n111\n");
}

#[test]
fn test_glider_wraps_home() {
    let start = grid(concat!(
        "01000000\n", "00100000\n", "11100000\n", "00000000\n",
        "00000000\n", "00000000\n", "00000000\n", "00000000\n",
    ));
    let mut g = start.clone();
    // a glider moves one cell diagonally every 4 generations
    for _ in 0..32 {
        g = g.next_generation();
    }
    assert_eq!(g, start);
}

#[test]
fn test_display_round_trips_through_pattern() {
    let g = grid("1001\n0110\n");
    assert_eq!(grid(&g.to_string()), g);
}
