use balanced_bst::data_gen::{generate_batch, generate_batch_len, generate_values};
use balanced_bst::utils::balanced_height_bound;
use balanced_bst::{BinarySearchTree, DriverConfig};
use std::error::Error;
use tracing::info;

fn print_orders(bst: &BinarySearchTree<i32>) {
    println!("level order: {:?}", bst.level_order().unwrap_or_default());
    println!("pre order:   {:?}", bst.pre_order().unwrap_or_default());
    println!("post order:  {:?}", bst.post_order().unwrap_or_default());
    println!("in order:    {:?}", bst.in_order().unwrap_or_default());
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_level = std::env::var("BST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    let config = DriverConfig::from_env()?;
    info!(?config, "starting run");

    let values = generate_values(&config)?;
    let mut bst: BinarySearchTree<i32> = values.into_iter().collect();
    bst.pretty_print();
    println!("balanced: {}", bst.is_balanced());
    print_orders(&bst);

    let batch = generate_batch_len(config.batch_min, config.batch_max)?;
    let inserts = generate_batch(&config, batch)?;
    let attached = inserts.into_iter().filter(|&v| bst.insert(v)).count();
    info!(batch, attached, "inserted random batch");

    println!("balanced: {}", bst.is_balanced());
    info!(
        height = bst.height(),
        bound = balanced_height_bound(bst.len()),
        "height before rebalance"
    );

    bst.rebalance();
    println!("balanced: {}", bst.is_balanced());
    bst.pretty_print();
    print_orders(&bst);

    Ok(())
}
