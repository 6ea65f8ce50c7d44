//! Fill an [`Order`] with its nested shipping address.
//!
//! Run with: cargo run -p example-prompts --example order_input

use derive_ask::Asker;
use example_prompts::Order;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut asker = Asker::new();
    let order = asker.ask(Order::default())?;
    println!("{order:#?}");
    Ok(())
}
