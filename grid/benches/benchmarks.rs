use aoc_grid::{Coord, Grid};

fn main() {
    divan::main();
}

fn paper_map(size: usize) -> String {
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| if (row * 7 + col * 3) % 5 < 3 { '@' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[divan::bench(args = [32, 128])]
fn parse(bencher: divan::Bencher, size: usize) {
    let input = paper_map(size);
    bencher.bench(|| Grid::parse(divan::black_box(&input)).unwrap());
}

#[divan::bench(args = [32, 128])]
fn count_crowded_cells(bencher: divan::Bencher, size: usize) {
    let grid = Grid::parse(&paper_map(size)).unwrap();
    bencher.bench(|| {
        divan::black_box(&grid)
            .find_all(|&c, coord| {
                c == '@'
                    && grid
                        .neighbors(coord, true)
                        .iter()
                        .filter(|(_, n)| **n == '@')
                        .count()
                        >= 4
            })
            .len()
    });
}

#[divan::bench(args = [32, 128])]
fn find_last_cell(bencher: divan::Bencher, size: usize) {
    let grid = Grid::create(size, size, 0u8);
    let target = Coord::new(size as i64 - 1, size as i64 - 1);
    bencher.bench(|| divan::black_box(&grid).find(|_, coord| coord == target));
}
