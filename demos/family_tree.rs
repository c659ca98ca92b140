//! Sibling study demo: only-child rate and a peek at a few children.
//!
//! Run with: `cargo run --example family_tree`
//!
//! Builds 100 families of 1 to 5 children, prints the rates and the
//! family-size histogram, then picks a child and lists its kin group the way
//! the family-tree viewer highlights it.

use probability_lab::{api_adapter, build_family_pool, FamilyPoolRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = build_family_pool(FamilyPoolRequest {
        rng_seed: Some(2718),
        ..FamilyPoolRequest::new((1, 5), 100)
    });
    let pool = match result {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("sibling study failed: {err}");
            return;
        }
    };

    println!();
    println!("══ Rates ══");
    println!();
    println!("  only child: {:>6.2}%", pool.stats.only_child_percent);
    println!("  sibling:    {:>6.2}%", pool.stats.sibling_percent);
    println!("  children:   {}", pool.house.total_children());
    for (size, families) in pool.house.bucket_sizes() {
        println!("  {size} child(ren): {families} families");
    }

    println!();
    println!("══ Kin group of child #3 ══");
    println!();
    for seq in pool.house.kin_group(3) {
        if let Some(child) = pool.house.child(seq) {
            println!(
                "  #{seq:<4} {:<6} born {}  older b/s {}/{}  younger b/s {}/{}",
                child.sex.to_string(),
                child.birth_date,
                child.older.brother_count,
                child.older.sister_count,
                child.younger.brother_count,
                child.younger.sister_count
            );
        }
    }

    println!();
    println!("══ First three children, shuffled ══");
    println!();
    let mut rng = StdRng::seed_from_u64(1);
    let view = api_adapter::children_view(&pool.house, true, &mut rng);
    if let Some(records) = view.as_array() {
        for record in records.iter().take(3) {
            println!("  {record}");
        }
    }
    println!();
}
