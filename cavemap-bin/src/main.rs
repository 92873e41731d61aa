use cavemap::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng as _;

fn main() {
    let config = CaveConfig::default();
    let prng = ChaCha8Rng::seed_from_u64(42);
    let grid = generate(&config, prng).expect("default config is valid");
    println!("{}", export_txt(&grid));

    let plan = extract(&grid);
    let mut segments = 0;
    let mut fills = 0;
    let mut markers = 0;
    for op in &plan.ops {
        match op {
            DrawOp::Segment(_) => segments += 1,
            DrawOp::Fill { .. } => fills += 1,
            DrawOp::Marker(_) => markers += 1,
        }
    }
    println!(
        "{}x{} vertices, {} open; plan: {} segments, {} fills, {} markers",
        grid.size.x,
        grid.size.y,
        grid.open_count(),
        segments,
        fills,
        markers
    );
}

fn export_txt(grid: &Grid) -> String {
    let mut s = String::with_capacity(grid.data.len() + grid.size.y as usize);
    let mut i = 0;
    for open in &grid.data {
        s.push(if *open { '.' } else { '#' });
        i += 1;
        if i == grid.size.x {
            i = 0;
            s.push('\n');
        }
    }
    s
}
