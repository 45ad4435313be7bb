#![cfg(feature = "std")]

//! Text rendering for fields and probability boards.

use crate::ai::Heatmap;
use crate::config::BOARD_SIZE;
use crate::grid::Grid;

/// Column letter plus 1-based row, e.g. `C5`.
pub fn cell_label(cell: (usize, usize)) -> String {
    let (r, c) = cell;
    format!("{}{}", (b'A' + c as u8) as char, r + 1)
}

/// Print the field with lettered columns and numbered rows.
pub fn print_field(grid: &Grid) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            print!(" {}", grid.get(r, c).glyph());
        }
        println!();
    }
}

/// Print a normalized probability matrix.
pub fn print_probability_board(heat: &Heatmap) {
    println!("\nProbability distribution:");
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {:>5}", (b'A' + c as u8) as char);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            print!(" {:5.3}", heat[r][c]);
        }
        println!();
    }
}

/// Print the top entries of a ranked cell list.
pub fn print_suggestions(ranked: &[((usize, usize), f64)], top: usize) {
    for (i, &(cell, score)) in ranked.iter().take(top).enumerate() {
        println!("{:2}. {}  {:.3}", i + 1, cell_label(cell), score);
    }
}
